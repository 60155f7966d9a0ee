//! Unicode character property tables used by the segmentation engines.
//!
//! Generated from the Unicode Character Database. Ranges are inclusive and
//! sorted by their first code point; code points not listed take the
//! default class of their property.

use super::property::{
    GraphemeClass as G, IndicConjunct as I, LineClass as L, SentenceClass as S, WordClass as W,
};

/// `Grapheme_Cluster_Break` property.
#[rustfmt::skip]
pub(crate) static GRAPHEME_CLUSTER_BREAK: &[(u32, u32, G)] = &[
    (0x0000, 0x0009, G::Control), (0x000A, 0x000A, G::LF), (0x000B, 0x000C, G::Control),
    (0x000D, 0x000D, G::CR), (0x000E, 0x001F, G::Control), (0x007F, 0x009F, G::Control),
    (0x00AD, 0x00AD, G::Control), (0x0300, 0x036F, G::Extend), (0x0483, 0x0489, G::Extend),
    (0x0591, 0x05BD, G::Extend), (0x05BF, 0x05BF, G::Extend), (0x05C1, 0x05C2, G::Extend),
    (0x05C4, 0x05C5, G::Extend), (0x05C7, 0x05C7, G::Extend), (0x0600, 0x0605, G::Prepend),
    (0x0610, 0x061A, G::Extend), (0x061C, 0x061C, G::Control), (0x064B, 0x065F, G::Extend),
    (0x0670, 0x0670, G::Extend), (0x06D6, 0x06DC, G::Extend), (0x06DD, 0x06DD, G::Prepend),
    (0x06DF, 0x06E4, G::Extend), (0x06E7, 0x06E8, G::Extend), (0x06EA, 0x06ED, G::Extend),
    (0x070F, 0x070F, G::Prepend), (0x0711, 0x0711, G::Extend), (0x0730, 0x074A, G::Extend),
    (0x07A6, 0x07B0, G::Extend), (0x07EB, 0x07F3, G::Extend), (0x07FD, 0x07FD, G::Extend),
    (0x0816, 0x0819, G::Extend), (0x081B, 0x0823, G::Extend), (0x0825, 0x0827, G::Extend),
    (0x0829, 0x082D, G::Extend), (0x0859, 0x085B, G::Extend), (0x0890, 0x0891, G::Prepend),
    (0x0897, 0x089F, G::Extend), (0x08CA, 0x08E1, G::Extend), (0x08E2, 0x08E2, G::Prepend),
    (0x08E3, 0x0902, G::Extend), (0x0903, 0x0903, G::SpacingMark), (0x093A, 0x093A, G::Extend),
    (0x093B, 0x093B, G::SpacingMark), (0x093C, 0x093C, G::Extend), (0x093E, 0x0940, G::SpacingMark),
    (0x0941, 0x0948, G::Extend), (0x0949, 0x094C, G::SpacingMark), (0x094D, 0x094D, G::Extend),
    (0x094E, 0x094F, G::SpacingMark), (0x0951, 0x0957, G::Extend), (0x0962, 0x0963, G::Extend),
    (0x0981, 0x0981, G::Extend), (0x0982, 0x0983, G::SpacingMark), (0x09BC, 0x09BC, G::Extend),
    (0x09BE, 0x09BE, G::Extend), (0x09BF, 0x09C0, G::SpacingMark), (0x09C1, 0x09C4, G::Extend),
    (0x09C7, 0x09C8, G::SpacingMark), (0x09CB, 0x09CC, G::SpacingMark), (0x09CD, 0x09CD, G::Extend),
    (0x09D7, 0x09D7, G::Extend), (0x09E2, 0x09E3, G::Extend), (0x09FE, 0x09FE, G::Extend),
    (0x0A01, 0x0A02, G::Extend), (0x0A03, 0x0A03, G::SpacingMark), (0x0A3C, 0x0A3C, G::Extend),
    (0x0A3E, 0x0A40, G::SpacingMark), (0x0A41, 0x0A42, G::Extend), (0x0A47, 0x0A48, G::Extend),
    (0x0A4B, 0x0A4D, G::Extend), (0x0A51, 0x0A51, G::Extend), (0x0A70, 0x0A71, G::Extend),
    (0x0A75, 0x0A75, G::Extend), (0x0A81, 0x0A82, G::Extend), (0x0A83, 0x0A83, G::SpacingMark),
    (0x0ABC, 0x0ABC, G::Extend), (0x0ABE, 0x0AC0, G::SpacingMark), (0x0AC1, 0x0AC5, G::Extend),
    (0x0AC7, 0x0AC8, G::Extend), (0x0AC9, 0x0AC9, G::SpacingMark), (0x0ACB, 0x0ACC, G::SpacingMark),
    (0x0ACD, 0x0ACD, G::Extend), (0x0AE2, 0x0AE3, G::Extend), (0x0AFA, 0x0AFF, G::Extend),
    (0x0B01, 0x0B01, G::Extend), (0x0B02, 0x0B03, G::SpacingMark), (0x0B3C, 0x0B3C, G::Extend),
    (0x0B3E, 0x0B3F, G::Extend), (0x0B40, 0x0B40, G::SpacingMark), (0x0B41, 0x0B44, G::Extend),
    (0x0B47, 0x0B48, G::SpacingMark), (0x0B4B, 0x0B4C, G::SpacingMark), (0x0B4D, 0x0B4D, G::Extend),
    (0x0B55, 0x0B57, G::Extend), (0x0B62, 0x0B63, G::Extend), (0x0B82, 0x0B82, G::Extend),
    (0x0BBE, 0x0BBE, G::Extend), (0x0BBF, 0x0BBF, G::SpacingMark), (0x0BC0, 0x0BC0, G::Extend),
    (0x0BC1, 0x0BC2, G::SpacingMark), (0x0BC6, 0x0BC8, G::SpacingMark), (0x0BCA, 0x0BCC, G::SpacingMark),
    (0x0BCD, 0x0BCD, G::Extend), (0x0BD7, 0x0BD7, G::Extend), (0x0C00, 0x0C00, G::Extend),
    (0x0C01, 0x0C03, G::SpacingMark), (0x0C04, 0x0C04, G::Extend), (0x0C3C, 0x0C3C, G::Extend),
    (0x0C3E, 0x0C40, G::Extend), (0x0C41, 0x0C44, G::SpacingMark), (0x0C46, 0x0C48, G::Extend),
    (0x0C4A, 0x0C4D, G::Extend), (0x0C55, 0x0C56, G::Extend), (0x0C62, 0x0C63, G::Extend),
    (0x0C81, 0x0C81, G::Extend), (0x0C82, 0x0C83, G::SpacingMark), (0x0CBC, 0x0CBC, G::Extend),
    (0x0CBE, 0x0CBE, G::SpacingMark), (0x0CBF, 0x0CC0, G::Extend), (0x0CC1, 0x0CC1, G::SpacingMark),
    (0x0CC2, 0x0CC2, G::Extend), (0x0CC3, 0x0CC4, G::SpacingMark), (0x0CC6, 0x0CC8, G::Extend),
    (0x0CCA, 0x0CCD, G::Extend), (0x0CD5, 0x0CD6, G::Extend), (0x0CE2, 0x0CE3, G::Extend),
    (0x0CF3, 0x0CF3, G::SpacingMark), (0x0D00, 0x0D01, G::Extend), (0x0D02, 0x0D03, G::SpacingMark),
    (0x0D3B, 0x0D3C, G::Extend), (0x0D3E, 0x0D3E, G::Extend), (0x0D3F, 0x0D40, G::SpacingMark),
    (0x0D41, 0x0D44, G::Extend), (0x0D46, 0x0D48, G::SpacingMark), (0x0D4A, 0x0D4C, G::SpacingMark),
    (0x0D4D, 0x0D4D, G::Extend), (0x0D4E, 0x0D4E, G::Prepend), (0x0D57, 0x0D57, G::Extend),
    (0x0D62, 0x0D63, G::Extend), (0x0D81, 0x0D81, G::Extend), (0x0D82, 0x0D83, G::SpacingMark),
    (0x0DCA, 0x0DCA, G::Extend), (0x0DCF, 0x0DCF, G::Extend), (0x0DD0, 0x0DD1, G::SpacingMark),
    (0x0DD2, 0x0DD4, G::Extend), (0x0DD6, 0x0DD6, G::Extend), (0x0DD8, 0x0DDE, G::SpacingMark),
    (0x0DDF, 0x0DDF, G::Extend), (0x0DF2, 0x0DF3, G::SpacingMark), (0x0E31, 0x0E31, G::Extend),
    (0x0E33, 0x0E33, G::SpacingMark), (0x0E34, 0x0E3A, G::Extend), (0x0E47, 0x0E4E, G::Extend),
    (0x0EB1, 0x0EB1, G::Extend), (0x0EB3, 0x0EB3, G::SpacingMark), (0x0EB4, 0x0EBC, G::Extend),
    (0x0EC8, 0x0ECE, G::Extend), (0x0F18, 0x0F19, G::Extend), (0x0F35, 0x0F35, G::Extend),
    (0x0F37, 0x0F37, G::Extend), (0x0F39, 0x0F39, G::Extend), (0x0F3E, 0x0F3F, G::SpacingMark),
    (0x0F71, 0x0F7E, G::Extend), (0x0F7F, 0x0F7F, G::SpacingMark), (0x0F80, 0x0F84, G::Extend),
    (0x0F86, 0x0F87, G::Extend), (0x0F8D, 0x0F97, G::Extend), (0x0F99, 0x0FBC, G::Extend),
    (0x0FC6, 0x0FC6, G::Extend), (0x102D, 0x1030, G::Extend), (0x1031, 0x1031, G::SpacingMark),
    (0x1032, 0x1037, G::Extend), (0x1039, 0x103A, G::Extend), (0x103B, 0x103C, G::SpacingMark),
    (0x103D, 0x103E, G::Extend), (0x1056, 0x1057, G::SpacingMark), (0x1058, 0x1059, G::Extend),
    (0x105E, 0x1060, G::Extend), (0x1071, 0x1074, G::Extend), (0x1082, 0x1082, G::Extend),
    (0x1084, 0x1084, G::SpacingMark), (0x1085, 0x1086, G::Extend), (0x108D, 0x108D, G::Extend),
    (0x109D, 0x109D, G::Extend), (0x1100, 0x115F, G::L), (0x1160, 0x11A7, G::V),
    (0x11A8, 0x11FF, G::T), (0x135D, 0x135F, G::Extend), (0x1712, 0x1715, G::Extend),
    (0x1732, 0x1734, G::Extend), (0x1752, 0x1753, G::Extend), (0x1772, 0x1773, G::Extend),
    (0x17B4, 0x17B5, G::Extend), (0x17B6, 0x17B6, G::SpacingMark), (0x17B7, 0x17BD, G::Extend),
    (0x17BE, 0x17C5, G::SpacingMark), (0x17C6, 0x17C6, G::Extend), (0x17C7, 0x17C8, G::SpacingMark),
    (0x17C9, 0x17D3, G::Extend), (0x17DD, 0x17DD, G::Extend), (0x180B, 0x180D, G::Extend),
    (0x180E, 0x180E, G::Control), (0x180F, 0x180F, G::Extend), (0x1885, 0x1886, G::Extend),
    (0x18A9, 0x18A9, G::Extend), (0x1920, 0x1922, G::Extend), (0x1923, 0x1926, G::SpacingMark),
    (0x1927, 0x1928, G::Extend), (0x1929, 0x192B, G::SpacingMark), (0x1930, 0x1931, G::SpacingMark),
    (0x1932, 0x1932, G::Extend), (0x1933, 0x1938, G::SpacingMark), (0x1939, 0x193B, G::Extend),
    (0x1A17, 0x1A18, G::Extend), (0x1A19, 0x1A1A, G::SpacingMark), (0x1A1B, 0x1A1B, G::Extend),
    (0x1A55, 0x1A55, G::SpacingMark), (0x1A56, 0x1A56, G::Extend), (0x1A57, 0x1A57, G::SpacingMark),
    (0x1A58, 0x1A5E, G::Extend), (0x1A60, 0x1A60, G::Extend), (0x1A62, 0x1A62, G::Extend),
    (0x1A65, 0x1A6C, G::Extend), (0x1A6D, 0x1A72, G::SpacingMark), (0x1A73, 0x1A7C, G::Extend),
    (0x1A7F, 0x1A7F, G::Extend), (0x1AB0, 0x1ADD, G::Extend), (0x1AE0, 0x1AEB, G::Extend),
    (0x1B00, 0x1B03, G::Extend), (0x1B04, 0x1B04, G::SpacingMark), (0x1B34, 0x1B3D, G::Extend),
    (0x1B3E, 0x1B41, G::SpacingMark), (0x1B42, 0x1B44, G::Extend), (0x1B6B, 0x1B73, G::Extend),
    (0x1B80, 0x1B81, G::Extend), (0x1B82, 0x1B82, G::SpacingMark), (0x1BA1, 0x1BA1, G::SpacingMark),
    (0x1BA2, 0x1BA5, G::Extend), (0x1BA6, 0x1BA7, G::SpacingMark), (0x1BA8, 0x1BAD, G::Extend),
    (0x1BE6, 0x1BE6, G::Extend), (0x1BE7, 0x1BE7, G::SpacingMark), (0x1BE8, 0x1BE9, G::Extend),
    (0x1BEA, 0x1BEC, G::SpacingMark), (0x1BED, 0x1BED, G::Extend), (0x1BEE, 0x1BEE, G::SpacingMark),
    (0x1BEF, 0x1BF3, G::Extend), (0x1C24, 0x1C2B, G::SpacingMark), (0x1C2C, 0x1C33, G::Extend),
    (0x1C34, 0x1C35, G::SpacingMark), (0x1C36, 0x1C37, G::Extend), (0x1CD0, 0x1CD2, G::Extend),
    (0x1CD4, 0x1CE0, G::Extend), (0x1CE1, 0x1CE1, G::SpacingMark), (0x1CE2, 0x1CE8, G::Extend),
    (0x1CED, 0x1CED, G::Extend), (0x1CF4, 0x1CF4, G::Extend), (0x1CF7, 0x1CF7, G::SpacingMark),
    (0x1CF8, 0x1CF9, G::Extend), (0x1DC0, 0x1DFF, G::Extend), (0x200B, 0x200B, G::Control),
    (0x200C, 0x200C, G::Extend), (0x200D, 0x200D, G::ZWJ), (0x200E, 0x200F, G::Control),
    (0x2028, 0x202E, G::Control), (0x2060, 0x206F, G::Control), (0x20D0, 0x20F0, G::Extend),
    (0x2CEF, 0x2CF1, G::Extend), (0x2D7F, 0x2D7F, G::Extend), (0x2DE0, 0x2DFF, G::Extend),
    (0x302A, 0x302F, G::Extend), (0x3099, 0x309A, G::Extend), (0xA66F, 0xA672, G::Extend),
    (0xA674, 0xA67D, G::Extend), (0xA69E, 0xA69F, G::Extend), (0xA6F0, 0xA6F1, G::Extend),
    (0xA802, 0xA802, G::Extend), (0xA806, 0xA806, G::Extend), (0xA80B, 0xA80B, G::Extend),
    (0xA823, 0xA824, G::SpacingMark), (0xA825, 0xA826, G::Extend), (0xA827, 0xA827, G::SpacingMark),
    (0xA82C, 0xA82C, G::Extend), (0xA880, 0xA881, G::SpacingMark), (0xA8B4, 0xA8C3, G::SpacingMark),
    (0xA8C4, 0xA8C5, G::Extend), (0xA8E0, 0xA8F1, G::Extend), (0xA8FF, 0xA8FF, G::Extend),
    (0xA926, 0xA92D, G::Extend), (0xA947, 0xA951, G::Extend), (0xA952, 0xA952, G::SpacingMark),
    (0xA953, 0xA953, G::Extend), (0xA960, 0xA97C, G::L), (0xA980, 0xA982, G::Extend),
    (0xA983, 0xA983, G::SpacingMark), (0xA9B3, 0xA9B3, G::Extend), (0xA9B4, 0xA9B5, G::SpacingMark),
    (0xA9B6, 0xA9B9, G::Extend), (0xA9BA, 0xA9BB, G::SpacingMark), (0xA9BC, 0xA9BD, G::Extend),
    (0xA9BE, 0xA9BF, G::SpacingMark), (0xA9C0, 0xA9C0, G::Extend), (0xA9E5, 0xA9E5, G::Extend),
    (0xAA29, 0xAA2E, G::Extend), (0xAA2F, 0xAA30, G::SpacingMark), (0xAA31, 0xAA32, G::Extend),
    (0xAA33, 0xAA34, G::SpacingMark), (0xAA35, 0xAA36, G::Extend), (0xAA43, 0xAA43, G::Extend),
    (0xAA4C, 0xAA4C, G::Extend), (0xAA4D, 0xAA4D, G::SpacingMark), (0xAA7C, 0xAA7C, G::Extend),
    (0xAAB0, 0xAAB0, G::Extend), (0xAAB2, 0xAAB4, G::Extend), (0xAAB7, 0xAAB8, G::Extend),
    (0xAABE, 0xAABF, G::Extend), (0xAAC1, 0xAAC1, G::Extend), (0xAAEB, 0xAAEB, G::SpacingMark),
    (0xAAEC, 0xAAED, G::Extend), (0xAAEE, 0xAAEF, G::SpacingMark), (0xAAF5, 0xAAF5, G::SpacingMark),
    (0xAAF6, 0xAAF6, G::Extend), (0xABE3, 0xABE4, G::SpacingMark), (0xABE5, 0xABE5, G::Extend),
    (0xABE6, 0xABE7, G::SpacingMark), (0xABE8, 0xABE8, G::Extend), (0xABE9, 0xABEA, G::SpacingMark),
    (0xABEC, 0xABEC, G::SpacingMark), (0xABED, 0xABED, G::Extend), (0xAC00, 0xAC00, G::LV),
    (0xAC01, 0xAC1B, G::LVT), (0xAC1C, 0xAC1C, G::LV), (0xAC1D, 0xAC37, G::LVT),
    (0xAC38, 0xAC38, G::LV), (0xAC39, 0xAC53, G::LVT), (0xAC54, 0xAC54, G::LV),
    (0xAC55, 0xAC6F, G::LVT), (0xAC70, 0xAC70, G::LV), (0xAC71, 0xAC8B, G::LVT),
    (0xAC8C, 0xAC8C, G::LV), (0xAC8D, 0xACA7, G::LVT), (0xACA8, 0xACA8, G::LV),
    (0xACA9, 0xACC3, G::LVT), (0xACC4, 0xACC4, G::LV), (0xACC5, 0xACDF, G::LVT),
    (0xACE0, 0xACE0, G::LV), (0xACE1, 0xACFB, G::LVT), (0xACFC, 0xACFC, G::LV),
    (0xACFD, 0xAD17, G::LVT), (0xAD18, 0xAD18, G::LV), (0xAD19, 0xAD33, G::LVT),
    (0xAD34, 0xAD34, G::LV), (0xAD35, 0xAD4F, G::LVT), (0xAD50, 0xAD50, G::LV),
    (0xAD51, 0xAD6B, G::LVT), (0xAD6C, 0xAD6C, G::LV), (0xAD6D, 0xAD87, G::LVT),
    (0xAD88, 0xAD88, G::LV), (0xAD89, 0xADA3, G::LVT), (0xADA4, 0xADA4, G::LV),
    (0xADA5, 0xADBF, G::LVT), (0xADC0, 0xADC0, G::LV), (0xADC1, 0xADDB, G::LVT),
    (0xADDC, 0xADDC, G::LV), (0xADDD, 0xADF7, G::LVT), (0xADF8, 0xADF8, G::LV),
    (0xADF9, 0xAE13, G::LVT), (0xAE14, 0xAE14, G::LV), (0xAE15, 0xAE2F, G::LVT),
    (0xAE30, 0xAE30, G::LV), (0xAE31, 0xAE4B, G::LVT), (0xAE4C, 0xAE4C, G::LV),
    (0xAE4D, 0xAE67, G::LVT), (0xAE68, 0xAE68, G::LV), (0xAE69, 0xAE83, G::LVT),
    (0xAE84, 0xAE84, G::LV), (0xAE85, 0xAE9F, G::LVT), (0xAEA0, 0xAEA0, G::LV),
    (0xAEA1, 0xAEBB, G::LVT), (0xAEBC, 0xAEBC, G::LV), (0xAEBD, 0xAED7, G::LVT),
    (0xAED8, 0xAED8, G::LV), (0xAED9, 0xAEF3, G::LVT), (0xAEF4, 0xAEF4, G::LV),
    (0xAEF5, 0xAF0F, G::LVT), (0xAF10, 0xAF10, G::LV), (0xAF11, 0xAF2B, G::LVT),
    (0xAF2C, 0xAF2C, G::LV), (0xAF2D, 0xAF47, G::LVT), (0xAF48, 0xAF48, G::LV),
    (0xAF49, 0xAF63, G::LVT), (0xAF64, 0xAF64, G::LV), (0xAF65, 0xAF7F, G::LVT),
    (0xAF80, 0xAF80, G::LV), (0xAF81, 0xAF9B, G::LVT), (0xAF9C, 0xAF9C, G::LV),
    (0xAF9D, 0xAFB7, G::LVT), (0xAFB8, 0xAFB8, G::LV), (0xAFB9, 0xAFD3, G::LVT),
    (0xAFD4, 0xAFD4, G::LV), (0xAFD5, 0xAFEF, G::LVT), (0xAFF0, 0xAFF0, G::LV),
    (0xAFF1, 0xB00B, G::LVT), (0xB00C, 0xB00C, G::LV), (0xB00D, 0xB027, G::LVT),
    (0xB028, 0xB028, G::LV), (0xB029, 0xB043, G::LVT), (0xB044, 0xB044, G::LV),
    (0xB045, 0xB05F, G::LVT), (0xB060, 0xB060, G::LV), (0xB061, 0xB07B, G::LVT),
    (0xB07C, 0xB07C, G::LV), (0xB07D, 0xB097, G::LVT), (0xB098, 0xB098, G::LV),
    (0xB099, 0xB0B3, G::LVT), (0xB0B4, 0xB0B4, G::LV), (0xB0B5, 0xB0CF, G::LVT),
    (0xB0D0, 0xB0D0, G::LV), (0xB0D1, 0xB0EB, G::LVT), (0xB0EC, 0xB0EC, G::LV),
    (0xB0ED, 0xB107, G::LVT), (0xB108, 0xB108, G::LV), (0xB109, 0xB123, G::LVT),
    (0xB124, 0xB124, G::LV), (0xB125, 0xB13F, G::LVT), (0xB140, 0xB140, G::LV),
    (0xB141, 0xB15B, G::LVT), (0xB15C, 0xB15C, G::LV), (0xB15D, 0xB177, G::LVT),
    (0xB178, 0xB178, G::LV), (0xB179, 0xB193, G::LVT), (0xB194, 0xB194, G::LV),
    (0xB195, 0xB1AF, G::LVT), (0xB1B0, 0xB1B0, G::LV), (0xB1B1, 0xB1CB, G::LVT),
    (0xB1CC, 0xB1CC, G::LV), (0xB1CD, 0xB1E7, G::LVT), (0xB1E8, 0xB1E8, G::LV),
    (0xB1E9, 0xB203, G::LVT), (0xB204, 0xB204, G::LV), (0xB205, 0xB21F, G::LVT),
    (0xB220, 0xB220, G::LV), (0xB221, 0xB23B, G::LVT), (0xB23C, 0xB23C, G::LV),
    (0xB23D, 0xB257, G::LVT), (0xB258, 0xB258, G::LV), (0xB259, 0xB273, G::LVT),
    (0xB274, 0xB274, G::LV), (0xB275, 0xB28F, G::LVT), (0xB290, 0xB290, G::LV),
    (0xB291, 0xB2AB, G::LVT), (0xB2AC, 0xB2AC, G::LV), (0xB2AD, 0xB2C7, G::LVT),
    (0xB2C8, 0xB2C8, G::LV), (0xB2C9, 0xB2E3, G::LVT), (0xB2E4, 0xB2E4, G::LV),
    (0xB2E5, 0xB2FF, G::LVT), (0xB300, 0xB300, G::LV), (0xB301, 0xB31B, G::LVT),
    (0xB31C, 0xB31C, G::LV), (0xB31D, 0xB337, G::LVT), (0xB338, 0xB338, G::LV),
    (0xB339, 0xB353, G::LVT), (0xB354, 0xB354, G::LV), (0xB355, 0xB36F, G::LVT),
    (0xB370, 0xB370, G::LV), (0xB371, 0xB38B, G::LVT), (0xB38C, 0xB38C, G::LV),
    (0xB38D, 0xB3A7, G::LVT), (0xB3A8, 0xB3A8, G::LV), (0xB3A9, 0xB3C3, G::LVT),
    (0xB3C4, 0xB3C4, G::LV), (0xB3C5, 0xB3DF, G::LVT), (0xB3E0, 0xB3E0, G::LV),
    (0xB3E1, 0xB3FB, G::LVT), (0xB3FC, 0xB3FC, G::LV), (0xB3FD, 0xB417, G::LVT),
    (0xB418, 0xB418, G::LV), (0xB419, 0xB433, G::LVT), (0xB434, 0xB434, G::LV),
    (0xB435, 0xB44F, G::LVT), (0xB450, 0xB450, G::LV), (0xB451, 0xB46B, G::LVT),
    (0xB46C, 0xB46C, G::LV), (0xB46D, 0xB487, G::LVT), (0xB488, 0xB488, G::LV),
    (0xB489, 0xB4A3, G::LVT), (0xB4A4, 0xB4A4, G::LV), (0xB4A5, 0xB4BF, G::LVT),
    (0xB4C0, 0xB4C0, G::LV), (0xB4C1, 0xB4DB, G::LVT), (0xB4DC, 0xB4DC, G::LV),
    (0xB4DD, 0xB4F7, G::LVT), (0xB4F8, 0xB4F8, G::LV), (0xB4F9, 0xB513, G::LVT),
    (0xB514, 0xB514, G::LV), (0xB515, 0xB52F, G::LVT), (0xB530, 0xB530, G::LV),
    (0xB531, 0xB54B, G::LVT), (0xB54C, 0xB54C, G::LV), (0xB54D, 0xB567, G::LVT),
    (0xB568, 0xB568, G::LV), (0xB569, 0xB583, G::LVT), (0xB584, 0xB584, G::LV),
    (0xB585, 0xB59F, G::LVT), (0xB5A0, 0xB5A0, G::LV), (0xB5A1, 0xB5BB, G::LVT),
    (0xB5BC, 0xB5BC, G::LV), (0xB5BD, 0xB5D7, G::LVT), (0xB5D8, 0xB5D8, G::LV),
    (0xB5D9, 0xB5F3, G::LVT), (0xB5F4, 0xB5F4, G::LV), (0xB5F5, 0xB60F, G::LVT),
    (0xB610, 0xB610, G::LV), (0xB611, 0xB62B, G::LVT), (0xB62C, 0xB62C, G::LV),
    (0xB62D, 0xB647, G::LVT), (0xB648, 0xB648, G::LV), (0xB649, 0xB663, G::LVT),
    (0xB664, 0xB664, G::LV), (0xB665, 0xB67F, G::LVT), (0xB680, 0xB680, G::LV),
    (0xB681, 0xB69B, G::LVT), (0xB69C, 0xB69C, G::LV), (0xB69D, 0xB6B7, G::LVT),
    (0xB6B8, 0xB6B8, G::LV), (0xB6B9, 0xB6D3, G::LVT), (0xB6D4, 0xB6D4, G::LV),
    (0xB6D5, 0xB6EF, G::LVT), (0xB6F0, 0xB6F0, G::LV), (0xB6F1, 0xB70B, G::LVT),
    (0xB70C, 0xB70C, G::LV), (0xB70D, 0xB727, G::LVT), (0xB728, 0xB728, G::LV),
    (0xB729, 0xB743, G::LVT), (0xB744, 0xB744, G::LV), (0xB745, 0xB75F, G::LVT),
    (0xB760, 0xB760, G::LV), (0xB761, 0xB77B, G::LVT), (0xB77C, 0xB77C, G::LV),
    (0xB77D, 0xB797, G::LVT), (0xB798, 0xB798, G::LV), (0xB799, 0xB7B3, G::LVT),
    (0xB7B4, 0xB7B4, G::LV), (0xB7B5, 0xB7CF, G::LVT), (0xB7D0, 0xB7D0, G::LV),
    (0xB7D1, 0xB7EB, G::LVT), (0xB7EC, 0xB7EC, G::LV), (0xB7ED, 0xB807, G::LVT),
    (0xB808, 0xB808, G::LV), (0xB809, 0xB823, G::LVT), (0xB824, 0xB824, G::LV),
    (0xB825, 0xB83F, G::LVT), (0xB840, 0xB840, G::LV), (0xB841, 0xB85B, G::LVT),
    (0xB85C, 0xB85C, G::LV), (0xB85D, 0xB877, G::LVT), (0xB878, 0xB878, G::LV),
    (0xB879, 0xB893, G::LVT), (0xB894, 0xB894, G::LV), (0xB895, 0xB8AF, G::LVT),
    (0xB8B0, 0xB8B0, G::LV), (0xB8B1, 0xB8CB, G::LVT), (0xB8CC, 0xB8CC, G::LV),
    (0xB8CD, 0xB8E7, G::LVT), (0xB8E8, 0xB8E8, G::LV), (0xB8E9, 0xB903, G::LVT),
    (0xB904, 0xB904, G::LV), (0xB905, 0xB91F, G::LVT), (0xB920, 0xB920, G::LV),
    (0xB921, 0xB93B, G::LVT), (0xB93C, 0xB93C, G::LV), (0xB93D, 0xB957, G::LVT),
    (0xB958, 0xB958, G::LV), (0xB959, 0xB973, G::LVT), (0xB974, 0xB974, G::LV),
    (0xB975, 0xB98F, G::LVT), (0xB990, 0xB990, G::LV), (0xB991, 0xB9AB, G::LVT),
    (0xB9AC, 0xB9AC, G::LV), (0xB9AD, 0xB9C7, G::LVT), (0xB9C8, 0xB9C8, G::LV),
    (0xB9C9, 0xB9E3, G::LVT), (0xB9E4, 0xB9E4, G::LV), (0xB9E5, 0xB9FF, G::LVT),
    (0xBA00, 0xBA00, G::LV), (0xBA01, 0xBA1B, G::LVT), (0xBA1C, 0xBA1C, G::LV),
    (0xBA1D, 0xBA37, G::LVT), (0xBA38, 0xBA38, G::LV), (0xBA39, 0xBA53, G::LVT),
    (0xBA54, 0xBA54, G::LV), (0xBA55, 0xBA6F, G::LVT), (0xBA70, 0xBA70, G::LV),
    (0xBA71, 0xBA8B, G::LVT), (0xBA8C, 0xBA8C, G::LV), (0xBA8D, 0xBAA7, G::LVT),
    (0xBAA8, 0xBAA8, G::LV), (0xBAA9, 0xBAC3, G::LVT), (0xBAC4, 0xBAC4, G::LV),
    (0xBAC5, 0xBADF, G::LVT), (0xBAE0, 0xBAE0, G::LV), (0xBAE1, 0xBAFB, G::LVT),
    (0xBAFC, 0xBAFC, G::LV), (0xBAFD, 0xBB17, G::LVT), (0xBB18, 0xBB18, G::LV),
    (0xBB19, 0xBB33, G::LVT), (0xBB34, 0xBB34, G::LV), (0xBB35, 0xBB4F, G::LVT),
    (0xBB50, 0xBB50, G::LV), (0xBB51, 0xBB6B, G::LVT), (0xBB6C, 0xBB6C, G::LV),
    (0xBB6D, 0xBB87, G::LVT), (0xBB88, 0xBB88, G::LV), (0xBB89, 0xBBA3, G::LVT),
    (0xBBA4, 0xBBA4, G::LV), (0xBBA5, 0xBBBF, G::LVT), (0xBBC0, 0xBBC0, G::LV),
    (0xBBC1, 0xBBDB, G::LVT), (0xBBDC, 0xBBDC, G::LV), (0xBBDD, 0xBBF7, G::LVT),
    (0xBBF8, 0xBBF8, G::LV), (0xBBF9, 0xBC13, G::LVT), (0xBC14, 0xBC14, G::LV),
    (0xBC15, 0xBC2F, G::LVT), (0xBC30, 0xBC30, G::LV), (0xBC31, 0xBC4B, G::LVT),
    (0xBC4C, 0xBC4C, G::LV), (0xBC4D, 0xBC67, G::LVT), (0xBC68, 0xBC68, G::LV),
    (0xBC69, 0xBC83, G::LVT), (0xBC84, 0xBC84, G::LV), (0xBC85, 0xBC9F, G::LVT),
    (0xBCA0, 0xBCA0, G::LV), (0xBCA1, 0xBCBB, G::LVT), (0xBCBC, 0xBCBC, G::LV),
    (0xBCBD, 0xBCD7, G::LVT), (0xBCD8, 0xBCD8, G::LV), (0xBCD9, 0xBCF3, G::LVT),
    (0xBCF4, 0xBCF4, G::LV), (0xBCF5, 0xBD0F, G::LVT), (0xBD10, 0xBD10, G::LV),
    (0xBD11, 0xBD2B, G::LVT), (0xBD2C, 0xBD2C, G::LV), (0xBD2D, 0xBD47, G::LVT),
    (0xBD48, 0xBD48, G::LV), (0xBD49, 0xBD63, G::LVT), (0xBD64, 0xBD64, G::LV),
    (0xBD65, 0xBD7F, G::LVT), (0xBD80, 0xBD80, G::LV), (0xBD81, 0xBD9B, G::LVT),
    (0xBD9C, 0xBD9C, G::LV), (0xBD9D, 0xBDB7, G::LVT), (0xBDB8, 0xBDB8, G::LV),
    (0xBDB9, 0xBDD3, G::LVT), (0xBDD4, 0xBDD4, G::LV), (0xBDD5, 0xBDEF, G::LVT),
    (0xBDF0, 0xBDF0, G::LV), (0xBDF1, 0xBE0B, G::LVT), (0xBE0C, 0xBE0C, G::LV),
    (0xBE0D, 0xBE27, G::LVT), (0xBE28, 0xBE28, G::LV), (0xBE29, 0xBE43, G::LVT),
    (0xBE44, 0xBE44, G::LV), (0xBE45, 0xBE5F, G::LVT), (0xBE60, 0xBE60, G::LV),
    (0xBE61, 0xBE7B, G::LVT), (0xBE7C, 0xBE7C, G::LV), (0xBE7D, 0xBE97, G::LVT),
    (0xBE98, 0xBE98, G::LV), (0xBE99, 0xBEB3, G::LVT), (0xBEB4, 0xBEB4, G::LV),
    (0xBEB5, 0xBECF, G::LVT), (0xBED0, 0xBED0, G::LV), (0xBED1, 0xBEEB, G::LVT),
    (0xBEEC, 0xBEEC, G::LV), (0xBEED, 0xBF07, G::LVT), (0xBF08, 0xBF08, G::LV),
    (0xBF09, 0xBF23, G::LVT), (0xBF24, 0xBF24, G::LV), (0xBF25, 0xBF3F, G::LVT),
    (0xBF40, 0xBF40, G::LV), (0xBF41, 0xBF5B, G::LVT), (0xBF5C, 0xBF5C, G::LV),
    (0xBF5D, 0xBF77, G::LVT), (0xBF78, 0xBF78, G::LV), (0xBF79, 0xBF93, G::LVT),
    (0xBF94, 0xBF94, G::LV), (0xBF95, 0xBFAF, G::LVT), (0xBFB0, 0xBFB0, G::LV),
    (0xBFB1, 0xBFCB, G::LVT), (0xBFCC, 0xBFCC, G::LV), (0xBFCD, 0xBFE7, G::LVT),
    (0xBFE8, 0xBFE8, G::LV), (0xBFE9, 0xC003, G::LVT), (0xC004, 0xC004, G::LV),
    (0xC005, 0xC01F, G::LVT), (0xC020, 0xC020, G::LV), (0xC021, 0xC03B, G::LVT),
    (0xC03C, 0xC03C, G::LV), (0xC03D, 0xC057, G::LVT), (0xC058, 0xC058, G::LV),
    (0xC059, 0xC073, G::LVT), (0xC074, 0xC074, G::LV), (0xC075, 0xC08F, G::LVT),
    (0xC090, 0xC090, G::LV), (0xC091, 0xC0AB, G::LVT), (0xC0AC, 0xC0AC, G::LV),
    (0xC0AD, 0xC0C7, G::LVT), (0xC0C8, 0xC0C8, G::LV), (0xC0C9, 0xC0E3, G::LVT),
    (0xC0E4, 0xC0E4, G::LV), (0xC0E5, 0xC0FF, G::LVT), (0xC100, 0xC100, G::LV),
    (0xC101, 0xC11B, G::LVT), (0xC11C, 0xC11C, G::LV), (0xC11D, 0xC137, G::LVT),
    (0xC138, 0xC138, G::LV), (0xC139, 0xC153, G::LVT), (0xC154, 0xC154, G::LV),
    (0xC155, 0xC16F, G::LVT), (0xC170, 0xC170, G::LV), (0xC171, 0xC18B, G::LVT),
    (0xC18C, 0xC18C, G::LV), (0xC18D, 0xC1A7, G::LVT), (0xC1A8, 0xC1A8, G::LV),
    (0xC1A9, 0xC1C3, G::LVT), (0xC1C4, 0xC1C4, G::LV), (0xC1C5, 0xC1DF, G::LVT),
    (0xC1E0, 0xC1E0, G::LV), (0xC1E1, 0xC1FB, G::LVT), (0xC1FC, 0xC1FC, G::LV),
    (0xC1FD, 0xC217, G::LVT), (0xC218, 0xC218, G::LV), (0xC219, 0xC233, G::LVT),
    (0xC234, 0xC234, G::LV), (0xC235, 0xC24F, G::LVT), (0xC250, 0xC250, G::LV),
    (0xC251, 0xC26B, G::LVT), (0xC26C, 0xC26C, G::LV), (0xC26D, 0xC287, G::LVT),
    (0xC288, 0xC288, G::LV), (0xC289, 0xC2A3, G::LVT), (0xC2A4, 0xC2A4, G::LV),
    (0xC2A5, 0xC2BF, G::LVT), (0xC2C0, 0xC2C0, G::LV), (0xC2C1, 0xC2DB, G::LVT),
    (0xC2DC, 0xC2DC, G::LV), (0xC2DD, 0xC2F7, G::LVT), (0xC2F8, 0xC2F8, G::LV),
    (0xC2F9, 0xC313, G::LVT), (0xC314, 0xC314, G::LV), (0xC315, 0xC32F, G::LVT),
    (0xC330, 0xC330, G::LV), (0xC331, 0xC34B, G::LVT), (0xC34C, 0xC34C, G::LV),
    (0xC34D, 0xC367, G::LVT), (0xC368, 0xC368, G::LV), (0xC369, 0xC383, G::LVT),
    (0xC384, 0xC384, G::LV), (0xC385, 0xC39F, G::LVT), (0xC3A0, 0xC3A0, G::LV),
    (0xC3A1, 0xC3BB, G::LVT), (0xC3BC, 0xC3BC, G::LV), (0xC3BD, 0xC3D7, G::LVT),
    (0xC3D8, 0xC3D8, G::LV), (0xC3D9, 0xC3F3, G::LVT), (0xC3F4, 0xC3F4, G::LV),
    (0xC3F5, 0xC40F, G::LVT), (0xC410, 0xC410, G::LV), (0xC411, 0xC42B, G::LVT),
    (0xC42C, 0xC42C, G::LV), (0xC42D, 0xC447, G::LVT), (0xC448, 0xC448, G::LV),
    (0xC449, 0xC463, G::LVT), (0xC464, 0xC464, G::LV), (0xC465, 0xC47F, G::LVT),
    (0xC480, 0xC480, G::LV), (0xC481, 0xC49B, G::LVT), (0xC49C, 0xC49C, G::LV),
    (0xC49D, 0xC4B7, G::LVT), (0xC4B8, 0xC4B8, G::LV), (0xC4B9, 0xC4D3, G::LVT),
    (0xC4D4, 0xC4D4, G::LV), (0xC4D5, 0xC4EF, G::LVT), (0xC4F0, 0xC4F0, G::LV),
    (0xC4F1, 0xC50B, G::LVT), (0xC50C, 0xC50C, G::LV), (0xC50D, 0xC527, G::LVT),
    (0xC528, 0xC528, G::LV), (0xC529, 0xC543, G::LVT), (0xC544, 0xC544, G::LV),
    (0xC545, 0xC55F, G::LVT), (0xC560, 0xC560, G::LV), (0xC561, 0xC57B, G::LVT),
    (0xC57C, 0xC57C, G::LV), (0xC57D, 0xC597, G::LVT), (0xC598, 0xC598, G::LV),
    (0xC599, 0xC5B3, G::LVT), (0xC5B4, 0xC5B4, G::LV), (0xC5B5, 0xC5CF, G::LVT),
    (0xC5D0, 0xC5D0, G::LV), (0xC5D1, 0xC5EB, G::LVT), (0xC5EC, 0xC5EC, G::LV),
    (0xC5ED, 0xC607, G::LVT), (0xC608, 0xC608, G::LV), (0xC609, 0xC623, G::LVT),
    (0xC624, 0xC624, G::LV), (0xC625, 0xC63F, G::LVT), (0xC640, 0xC640, G::LV),
    (0xC641, 0xC65B, G::LVT), (0xC65C, 0xC65C, G::LV), (0xC65D, 0xC677, G::LVT),
    (0xC678, 0xC678, G::LV), (0xC679, 0xC693, G::LVT), (0xC694, 0xC694, G::LV),
    (0xC695, 0xC6AF, G::LVT), (0xC6B0, 0xC6B0, G::LV), (0xC6B1, 0xC6CB, G::LVT),
    (0xC6CC, 0xC6CC, G::LV), (0xC6CD, 0xC6E7, G::LVT), (0xC6E8, 0xC6E8, G::LV),
    (0xC6E9, 0xC703, G::LVT), (0xC704, 0xC704, G::LV), (0xC705, 0xC71F, G::LVT),
    (0xC720, 0xC720, G::LV), (0xC721, 0xC73B, G::LVT), (0xC73C, 0xC73C, G::LV),
    (0xC73D, 0xC757, G::LVT), (0xC758, 0xC758, G::LV), (0xC759, 0xC773, G::LVT),
    (0xC774, 0xC774, G::LV), (0xC775, 0xC78F, G::LVT), (0xC790, 0xC790, G::LV),
    (0xC791, 0xC7AB, G::LVT), (0xC7AC, 0xC7AC, G::LV), (0xC7AD, 0xC7C7, G::LVT),
    (0xC7C8, 0xC7C8, G::LV), (0xC7C9, 0xC7E3, G::LVT), (0xC7E4, 0xC7E4, G::LV),
    (0xC7E5, 0xC7FF, G::LVT), (0xC800, 0xC800, G::LV), (0xC801, 0xC81B, G::LVT),
    (0xC81C, 0xC81C, G::LV), (0xC81D, 0xC837, G::LVT), (0xC838, 0xC838, G::LV),
    (0xC839, 0xC853, G::LVT), (0xC854, 0xC854, G::LV), (0xC855, 0xC86F, G::LVT),
    (0xC870, 0xC870, G::LV), (0xC871, 0xC88B, G::LVT), (0xC88C, 0xC88C, G::LV),
    (0xC88D, 0xC8A7, G::LVT), (0xC8A8, 0xC8A8, G::LV), (0xC8A9, 0xC8C3, G::LVT),
    (0xC8C4, 0xC8C4, G::LV), (0xC8C5, 0xC8DF, G::LVT), (0xC8E0, 0xC8E0, G::LV),
    (0xC8E1, 0xC8FB, G::LVT), (0xC8FC, 0xC8FC, G::LV), (0xC8FD, 0xC917, G::LVT),
    (0xC918, 0xC918, G::LV), (0xC919, 0xC933, G::LVT), (0xC934, 0xC934, G::LV),
    (0xC935, 0xC94F, G::LVT), (0xC950, 0xC950, G::LV), (0xC951, 0xC96B, G::LVT),
    (0xC96C, 0xC96C, G::LV), (0xC96D, 0xC987, G::LVT), (0xC988, 0xC988, G::LV),
    (0xC989, 0xC9A3, G::LVT), (0xC9A4, 0xC9A4, G::LV), (0xC9A5, 0xC9BF, G::LVT),
    (0xC9C0, 0xC9C0, G::LV), (0xC9C1, 0xC9DB, G::LVT), (0xC9DC, 0xC9DC, G::LV),
    (0xC9DD, 0xC9F7, G::LVT), (0xC9F8, 0xC9F8, G::LV), (0xC9F9, 0xCA13, G::LVT),
    (0xCA14, 0xCA14, G::LV), (0xCA15, 0xCA2F, G::LVT), (0xCA30, 0xCA30, G::LV),
    (0xCA31, 0xCA4B, G::LVT), (0xCA4C, 0xCA4C, G::LV), (0xCA4D, 0xCA67, G::LVT),
    (0xCA68, 0xCA68, G::LV), (0xCA69, 0xCA83, G::LVT), (0xCA84, 0xCA84, G::LV),
    (0xCA85, 0xCA9F, G::LVT), (0xCAA0, 0xCAA0, G::LV), (0xCAA1, 0xCABB, G::LVT),
    (0xCABC, 0xCABC, G::LV), (0xCABD, 0xCAD7, G::LVT), (0xCAD8, 0xCAD8, G::LV),
    (0xCAD9, 0xCAF3, G::LVT), (0xCAF4, 0xCAF4, G::LV), (0xCAF5, 0xCB0F, G::LVT),
    (0xCB10, 0xCB10, G::LV), (0xCB11, 0xCB2B, G::LVT), (0xCB2C, 0xCB2C, G::LV),
    (0xCB2D, 0xCB47, G::LVT), (0xCB48, 0xCB48, G::LV), (0xCB49, 0xCB63, G::LVT),
    (0xCB64, 0xCB64, G::LV), (0xCB65, 0xCB7F, G::LVT), (0xCB80, 0xCB80, G::LV),
    (0xCB81, 0xCB9B, G::LVT), (0xCB9C, 0xCB9C, G::LV), (0xCB9D, 0xCBB7, G::LVT),
    (0xCBB8, 0xCBB8, G::LV), (0xCBB9, 0xCBD3, G::LVT), (0xCBD4, 0xCBD4, G::LV),
    (0xCBD5, 0xCBEF, G::LVT), (0xCBF0, 0xCBF0, G::LV), (0xCBF1, 0xCC0B, G::LVT),
    (0xCC0C, 0xCC0C, G::LV), (0xCC0D, 0xCC27, G::LVT), (0xCC28, 0xCC28, G::LV),
    (0xCC29, 0xCC43, G::LVT), (0xCC44, 0xCC44, G::LV), (0xCC45, 0xCC5F, G::LVT),
    (0xCC60, 0xCC60, G::LV), (0xCC61, 0xCC7B, G::LVT), (0xCC7C, 0xCC7C, G::LV),
    (0xCC7D, 0xCC97, G::LVT), (0xCC98, 0xCC98, G::LV), (0xCC99, 0xCCB3, G::LVT),
    (0xCCB4, 0xCCB4, G::LV), (0xCCB5, 0xCCCF, G::LVT), (0xCCD0, 0xCCD0, G::LV),
    (0xCCD1, 0xCCEB, G::LVT), (0xCCEC, 0xCCEC, G::LV), (0xCCED, 0xCD07, G::LVT),
    (0xCD08, 0xCD08, G::LV), (0xCD09, 0xCD23, G::LVT), (0xCD24, 0xCD24, G::LV),
    (0xCD25, 0xCD3F, G::LVT), (0xCD40, 0xCD40, G::LV), (0xCD41, 0xCD5B, G::LVT),
    (0xCD5C, 0xCD5C, G::LV), (0xCD5D, 0xCD77, G::LVT), (0xCD78, 0xCD78, G::LV),
    (0xCD79, 0xCD93, G::LVT), (0xCD94, 0xCD94, G::LV), (0xCD95, 0xCDAF, G::LVT),
    (0xCDB0, 0xCDB0, G::LV), (0xCDB1, 0xCDCB, G::LVT), (0xCDCC, 0xCDCC, G::LV),
    (0xCDCD, 0xCDE7, G::LVT), (0xCDE8, 0xCDE8, G::LV), (0xCDE9, 0xCE03, G::LVT),
    (0xCE04, 0xCE04, G::LV), (0xCE05, 0xCE1F, G::LVT), (0xCE20, 0xCE20, G::LV),
    (0xCE21, 0xCE3B, G::LVT), (0xCE3C, 0xCE3C, G::LV), (0xCE3D, 0xCE57, G::LVT),
    (0xCE58, 0xCE58, G::LV), (0xCE59, 0xCE73, G::LVT), (0xCE74, 0xCE74, G::LV),
    (0xCE75, 0xCE8F, G::LVT), (0xCE90, 0xCE90, G::LV), (0xCE91, 0xCEAB, G::LVT),
    (0xCEAC, 0xCEAC, G::LV), (0xCEAD, 0xCEC7, G::LVT), (0xCEC8, 0xCEC8, G::LV),
    (0xCEC9, 0xCEE3, G::LVT), (0xCEE4, 0xCEE4, G::LV), (0xCEE5, 0xCEFF, G::LVT),
    (0xCF00, 0xCF00, G::LV), (0xCF01, 0xCF1B, G::LVT), (0xCF1C, 0xCF1C, G::LV),
    (0xCF1D, 0xCF37, G::LVT), (0xCF38, 0xCF38, G::LV), (0xCF39, 0xCF53, G::LVT),
    (0xCF54, 0xCF54, G::LV), (0xCF55, 0xCF6F, G::LVT), (0xCF70, 0xCF70, G::LV),
    (0xCF71, 0xCF8B, G::LVT), (0xCF8C, 0xCF8C, G::LV), (0xCF8D, 0xCFA7, G::LVT),
    (0xCFA8, 0xCFA8, G::LV), (0xCFA9, 0xCFC3, G::LVT), (0xCFC4, 0xCFC4, G::LV),
    (0xCFC5, 0xCFDF, G::LVT), (0xCFE0, 0xCFE0, G::LV), (0xCFE1, 0xCFFB, G::LVT),
    (0xCFFC, 0xCFFC, G::LV), (0xCFFD, 0xD017, G::LVT), (0xD018, 0xD018, G::LV),
    (0xD019, 0xD033, G::LVT), (0xD034, 0xD034, G::LV), (0xD035, 0xD04F, G::LVT),
    (0xD050, 0xD050, G::LV), (0xD051, 0xD06B, G::LVT), (0xD06C, 0xD06C, G::LV),
    (0xD06D, 0xD087, G::LVT), (0xD088, 0xD088, G::LV), (0xD089, 0xD0A3, G::LVT),
    (0xD0A4, 0xD0A4, G::LV), (0xD0A5, 0xD0BF, G::LVT), (0xD0C0, 0xD0C0, G::LV),
    (0xD0C1, 0xD0DB, G::LVT), (0xD0DC, 0xD0DC, G::LV), (0xD0DD, 0xD0F7, G::LVT),
    (0xD0F8, 0xD0F8, G::LV), (0xD0F9, 0xD113, G::LVT), (0xD114, 0xD114, G::LV),
    (0xD115, 0xD12F, G::LVT), (0xD130, 0xD130, G::LV), (0xD131, 0xD14B, G::LVT),
    (0xD14C, 0xD14C, G::LV), (0xD14D, 0xD167, G::LVT), (0xD168, 0xD168, G::LV),
    (0xD169, 0xD183, G::LVT), (0xD184, 0xD184, G::LV), (0xD185, 0xD19F, G::LVT),
    (0xD1A0, 0xD1A0, G::LV), (0xD1A1, 0xD1BB, G::LVT), (0xD1BC, 0xD1BC, G::LV),
    (0xD1BD, 0xD1D7, G::LVT), (0xD1D8, 0xD1D8, G::LV), (0xD1D9, 0xD1F3, G::LVT),
    (0xD1F4, 0xD1F4, G::LV), (0xD1F5, 0xD20F, G::LVT), (0xD210, 0xD210, G::LV),
    (0xD211, 0xD22B, G::LVT), (0xD22C, 0xD22C, G::LV), (0xD22D, 0xD247, G::LVT),
    (0xD248, 0xD248, G::LV), (0xD249, 0xD263, G::LVT), (0xD264, 0xD264, G::LV),
    (0xD265, 0xD27F, G::LVT), (0xD280, 0xD280, G::LV), (0xD281, 0xD29B, G::LVT),
    (0xD29C, 0xD29C, G::LV), (0xD29D, 0xD2B7, G::LVT), (0xD2B8, 0xD2B8, G::LV),
    (0xD2B9, 0xD2D3, G::LVT), (0xD2D4, 0xD2D4, G::LV), (0xD2D5, 0xD2EF, G::LVT),
    (0xD2F0, 0xD2F0, G::LV), (0xD2F1, 0xD30B, G::LVT), (0xD30C, 0xD30C, G::LV),
    (0xD30D, 0xD327, G::LVT), (0xD328, 0xD328, G::LV), (0xD329, 0xD343, G::LVT),
    (0xD344, 0xD344, G::LV), (0xD345, 0xD35F, G::LVT), (0xD360, 0xD360, G::LV),
    (0xD361, 0xD37B, G::LVT), (0xD37C, 0xD37C, G::LV), (0xD37D, 0xD397, G::LVT),
    (0xD398, 0xD398, G::LV), (0xD399, 0xD3B3, G::LVT), (0xD3B4, 0xD3B4, G::LV),
    (0xD3B5, 0xD3CF, G::LVT), (0xD3D0, 0xD3D0, G::LV), (0xD3D1, 0xD3EB, G::LVT),
    (0xD3EC, 0xD3EC, G::LV), (0xD3ED, 0xD407, G::LVT), (0xD408, 0xD408, G::LV),
    (0xD409, 0xD423, G::LVT), (0xD424, 0xD424, G::LV), (0xD425, 0xD43F, G::LVT),
    (0xD440, 0xD440, G::LV), (0xD441, 0xD45B, G::LVT), (0xD45C, 0xD45C, G::LV),
    (0xD45D, 0xD477, G::LVT), (0xD478, 0xD478, G::LV), (0xD479, 0xD493, G::LVT),
    (0xD494, 0xD494, G::LV), (0xD495, 0xD4AF, G::LVT), (0xD4B0, 0xD4B0, G::LV),
    (0xD4B1, 0xD4CB, G::LVT), (0xD4CC, 0xD4CC, G::LV), (0xD4CD, 0xD4E7, G::LVT),
    (0xD4E8, 0xD4E8, G::LV), (0xD4E9, 0xD503, G::LVT), (0xD504, 0xD504, G::LV),
    (0xD505, 0xD51F, G::LVT), (0xD520, 0xD520, G::LV), (0xD521, 0xD53B, G::LVT),
    (0xD53C, 0xD53C, G::LV), (0xD53D, 0xD557, G::LVT), (0xD558, 0xD558, G::LV),
    (0xD559, 0xD573, G::LVT), (0xD574, 0xD574, G::LV), (0xD575, 0xD58F, G::LVT),
    (0xD590, 0xD590, G::LV), (0xD591, 0xD5AB, G::LVT), (0xD5AC, 0xD5AC, G::LV),
    (0xD5AD, 0xD5C7, G::LVT), (0xD5C8, 0xD5C8, G::LV), (0xD5C9, 0xD5E3, G::LVT),
    (0xD5E4, 0xD5E4, G::LV), (0xD5E5, 0xD5FF, G::LVT), (0xD600, 0xD600, G::LV),
    (0xD601, 0xD61B, G::LVT), (0xD61C, 0xD61C, G::LV), (0xD61D, 0xD637, G::LVT),
    (0xD638, 0xD638, G::LV), (0xD639, 0xD653, G::LVT), (0xD654, 0xD654, G::LV),
    (0xD655, 0xD66F, G::LVT), (0xD670, 0xD670, G::LV), (0xD671, 0xD68B, G::LVT),
    (0xD68C, 0xD68C, G::LV), (0xD68D, 0xD6A7, G::LVT), (0xD6A8, 0xD6A8, G::LV),
    (0xD6A9, 0xD6C3, G::LVT), (0xD6C4, 0xD6C4, G::LV), (0xD6C5, 0xD6DF, G::LVT),
    (0xD6E0, 0xD6E0, G::LV), (0xD6E1, 0xD6FB, G::LVT), (0xD6FC, 0xD6FC, G::LV),
    (0xD6FD, 0xD717, G::LVT), (0xD718, 0xD718, G::LV), (0xD719, 0xD733, G::LVT),
    (0xD734, 0xD734, G::LV), (0xD735, 0xD74F, G::LVT), (0xD750, 0xD750, G::LV),
    (0xD751, 0xD76B, G::LVT), (0xD76C, 0xD76C, G::LV), (0xD76D, 0xD787, G::LVT),
    (0xD788, 0xD788, G::LV), (0xD789, 0xD7A3, G::LVT), (0xD7B0, 0xD7C6, G::V),
    (0xD7CB, 0xD7FB, G::T), (0xFB1E, 0xFB1E, G::Extend), (0xFE00, 0xFE0F, G::Extend),
    (0xFE20, 0xFE2F, G::Extend), (0xFEFF, 0xFEFF, G::Control), (0xFF9E, 0xFF9F, G::Extend),
    (0xFFF0, 0xFFFB, G::Control), (0x101FD, 0x101FD, G::Extend), (0x102E0, 0x102E0, G::Extend),
    (0x10376, 0x1037A, G::Extend), (0x10A01, 0x10A03, G::Extend), (0x10A05, 0x10A06, G::Extend),
    (0x10A0C, 0x10A0F, G::Extend), (0x10A38, 0x10A3A, G::Extend), (0x10A3F, 0x10A3F, G::Extend),
    (0x10AE5, 0x10AE6, G::Extend), (0x10D24, 0x10D27, G::Extend), (0x10D69, 0x10D6D, G::Extend),
    (0x10EAB, 0x10EAC, G::Extend), (0x10EFA, 0x10EFF, G::Extend), (0x10F46, 0x10F50, G::Extend),
    (0x10F82, 0x10F85, G::Extend), (0x11000, 0x11000, G::SpacingMark), (0x11001, 0x11001, G::Extend),
    (0x11002, 0x11002, G::SpacingMark), (0x11038, 0x11046, G::Extend), (0x11070, 0x11070, G::Extend),
    (0x11073, 0x11074, G::Extend), (0x1107F, 0x11081, G::Extend), (0x11082, 0x11082, G::SpacingMark),
    (0x110B0, 0x110B2, G::SpacingMark), (0x110B3, 0x110B6, G::Extend), (0x110B7, 0x110B8, G::SpacingMark),
    (0x110B9, 0x110BA, G::Extend), (0x110BD, 0x110BD, G::Prepend), (0x110C2, 0x110C2, G::Extend),
    (0x110CD, 0x110CD, G::Prepend), (0x11100, 0x11102, G::Extend), (0x11127, 0x1112B, G::Extend),
    (0x1112C, 0x1112C, G::SpacingMark), (0x1112D, 0x11134, G::Extend), (0x11145, 0x11146, G::SpacingMark),
    (0x11173, 0x11173, G::Extend), (0x11180, 0x11181, G::Extend), (0x11182, 0x11182, G::SpacingMark),
    (0x111B3, 0x111B5, G::SpacingMark), (0x111B6, 0x111BE, G::Extend), (0x111BF, 0x111BF, G::SpacingMark),
    (0x111C0, 0x111C0, G::Extend), (0x111C2, 0x111C3, G::Prepend), (0x111C9, 0x111CC, G::Extend),
    (0x111CE, 0x111CE, G::SpacingMark), (0x111CF, 0x111CF, G::Extend), (0x1122C, 0x1122E, G::SpacingMark),
    (0x1122F, 0x11231, G::Extend), (0x11232, 0x11233, G::SpacingMark), (0x11234, 0x11237, G::Extend),
    (0x1123E, 0x1123E, G::Extend), (0x11241, 0x11241, G::Extend), (0x112DF, 0x112DF, G::Extend),
    (0x112E0, 0x112E2, G::SpacingMark), (0x112E3, 0x112EA, G::Extend), (0x11300, 0x11301, G::Extend),
    (0x11302, 0x11303, G::SpacingMark), (0x1133B, 0x1133C, G::Extend), (0x1133E, 0x1133E, G::Extend),
    (0x1133F, 0x1133F, G::SpacingMark), (0x11340, 0x11340, G::Extend), (0x11341, 0x11344, G::SpacingMark),
    (0x11347, 0x11348, G::SpacingMark), (0x1134B, 0x1134C, G::SpacingMark), (0x1134D, 0x1134D, G::Extend),
    (0x11357, 0x11357, G::Extend), (0x11362, 0x11363, G::SpacingMark), (0x11366, 0x1136C, G::Extend),
    (0x11370, 0x11374, G::Extend), (0x113B8, 0x113B8, G::Extend), (0x113B9, 0x113BA, G::SpacingMark),
    (0x113BB, 0x113C0, G::Extend), (0x113C2, 0x113C2, G::Extend), (0x113C5, 0x113C5, G::Extend),
    (0x113C7, 0x113C9, G::Extend), (0x113CA, 0x113CA, G::SpacingMark), (0x113CC, 0x113CD, G::SpacingMark),
    (0x113CE, 0x113D0, G::Extend), (0x113D1, 0x113D1, G::Prepend), (0x113D2, 0x113D2, G::Extend),
    (0x113E1, 0x113E2, G::Extend), (0x11435, 0x11437, G::SpacingMark), (0x11438, 0x1143F, G::Extend),
    (0x11440, 0x11441, G::SpacingMark), (0x11442, 0x11444, G::Extend), (0x11445, 0x11445, G::SpacingMark),
    (0x11446, 0x11446, G::Extend), (0x1145E, 0x1145E, G::Extend), (0x114B0, 0x114B0, G::Extend),
    (0x114B1, 0x114B2, G::SpacingMark), (0x114B3, 0x114B8, G::Extend), (0x114B9, 0x114B9, G::SpacingMark),
    (0x114BA, 0x114BA, G::Extend), (0x114BB, 0x114BC, G::SpacingMark), (0x114BD, 0x114BD, G::Extend),
    (0x114BE, 0x114BE, G::SpacingMark), (0x114BF, 0x114C0, G::Extend), (0x114C1, 0x114C1, G::SpacingMark),
    (0x114C2, 0x114C3, G::Extend), (0x115AF, 0x115AF, G::Extend), (0x115B0, 0x115B1, G::SpacingMark),
    (0x115B2, 0x115B5, G::Extend), (0x115B8, 0x115BB, G::SpacingMark), (0x115BC, 0x115BD, G::Extend),
    (0x115BE, 0x115BE, G::SpacingMark), (0x115BF, 0x115C0, G::Extend), (0x115DC, 0x115DD, G::Extend),
    (0x11630, 0x11632, G::SpacingMark), (0x11633, 0x1163A, G::Extend), (0x1163B, 0x1163C, G::SpacingMark),
    (0x1163D, 0x1163D, G::Extend), (0x1163E, 0x1163E, G::SpacingMark), (0x1163F, 0x11640, G::Extend),
    (0x116AB, 0x116AB, G::Extend), (0x116AC, 0x116AC, G::SpacingMark), (0x116AD, 0x116AD, G::Extend),
    (0x116AE, 0x116AF, G::SpacingMark), (0x116B0, 0x116B7, G::Extend), (0x1171D, 0x1171D, G::Extend),
    (0x1171E, 0x1171E, G::SpacingMark), (0x1171F, 0x1171F, G::Extend), (0x11722, 0x11725, G::Extend),
    (0x11726, 0x11726, G::SpacingMark), (0x11727, 0x1172B, G::Extend), (0x1182C, 0x1182E, G::SpacingMark),
    (0x1182F, 0x11837, G::Extend), (0x11838, 0x11838, G::SpacingMark), (0x11839, 0x1183A, G::Extend),
    (0x11930, 0x11930, G::Extend), (0x11931, 0x11935, G::SpacingMark), (0x11937, 0x11938, G::SpacingMark),
    (0x1193B, 0x1193E, G::Extend), (0x1193F, 0x1193F, G::Prepend), (0x11940, 0x11940, G::SpacingMark),
    (0x11941, 0x11941, G::Prepend), (0x11942, 0x11942, G::SpacingMark), (0x11943, 0x11943, G::Extend),
    (0x119D1, 0x119D3, G::SpacingMark), (0x119D4, 0x119D7, G::Extend), (0x119DA, 0x119DB, G::Extend),
    (0x119DC, 0x119DF, G::SpacingMark), (0x119E0, 0x119E0, G::Extend), (0x119E4, 0x119E4, G::SpacingMark),
    (0x11A01, 0x11A0A, G::Extend), (0x11A33, 0x11A38, G::Extend), (0x11A39, 0x11A39, G::SpacingMark),
    (0x11A3B, 0x11A3E, G::Extend), (0x11A47, 0x11A47, G::Extend), (0x11A51, 0x11A56, G::Extend),
    (0x11A57, 0x11A58, G::SpacingMark), (0x11A59, 0x11A5B, G::Extend), (0x11A84, 0x11A89, G::Prepend),
    (0x11A8A, 0x11A96, G::Extend), (0x11A97, 0x11A97, G::SpacingMark), (0x11A98, 0x11A99, G::Extend),
    (0x11B60, 0x11B60, G::Extend), (0x11B61, 0x11B61, G::SpacingMark), (0x11B62, 0x11B64, G::Extend),
    (0x11B65, 0x11B65, G::SpacingMark), (0x11B66, 0x11B66, G::Extend), (0x11B67, 0x11B67, G::SpacingMark),
    (0x11C2F, 0x11C2F, G::SpacingMark), (0x11C30, 0x11C36, G::Extend), (0x11C38, 0x11C3D, G::Extend),
    (0x11C3E, 0x11C3E, G::SpacingMark), (0x11C3F, 0x11C3F, G::Extend), (0x11C92, 0x11CA7, G::Extend),
    (0x11CA9, 0x11CA9, G::SpacingMark), (0x11CAA, 0x11CB0, G::Extend), (0x11CB1, 0x11CB1, G::SpacingMark),
    (0x11CB2, 0x11CB3, G::Extend), (0x11CB4, 0x11CB4, G::SpacingMark), (0x11CB5, 0x11CB6, G::Extend),
    (0x11D31, 0x11D36, G::Extend), (0x11D3A, 0x11D3A, G::Extend), (0x11D3C, 0x11D3D, G::Extend),
    (0x11D3F, 0x11D45, G::Extend), (0x11D46, 0x11D46, G::Prepend), (0x11D47, 0x11D47, G::Extend),
    (0x11D8A, 0x11D8E, G::SpacingMark), (0x11D90, 0x11D91, G::Extend), (0x11D93, 0x11D94, G::SpacingMark),
    (0x11D95, 0x11D95, G::Extend), (0x11D96, 0x11D96, G::SpacingMark), (0x11D97, 0x11D97, G::Extend),
    (0x11EF3, 0x11EF4, G::Extend), (0x11EF5, 0x11EF6, G::SpacingMark), (0x11F00, 0x11F01, G::Extend),
    (0x11F02, 0x11F02, G::Prepend), (0x11F03, 0x11F03, G::SpacingMark), (0x11F34, 0x11F35, G::SpacingMark),
    (0x11F36, 0x11F3A, G::Extend), (0x11F3E, 0x11F3F, G::SpacingMark), (0x11F40, 0x11F42, G::Extend),
    (0x11F5A, 0x11F5A, G::Extend), (0x13430, 0x1343F, G::Control), (0x13440, 0x13440, G::Extend),
    (0x13447, 0x13455, G::Extend), (0x1611E, 0x16129, G::Extend), (0x1612A, 0x1612C, G::SpacingMark),
    (0x1612D, 0x1612F, G::Extend), (0x16AF0, 0x16AF4, G::Extend), (0x16B30, 0x16B36, G::Extend),
    (0x16D63, 0x16D63, G::V), (0x16D67, 0x16D6A, G::V), (0x16F4F, 0x16F4F, G::Extend),
    (0x16F51, 0x16F87, G::SpacingMark), (0x16F8F, 0x16F92, G::Extend), (0x16FE4, 0x16FE4, G::Extend),
    (0x16FF0, 0x16FF1, G::Extend), (0x1BC9D, 0x1BC9E, G::Extend), (0x1BCA0, 0x1BCA3, G::Control),
    (0x1CF00, 0x1CF2D, G::Extend), (0x1CF30, 0x1CF46, G::Extend), (0x1D165, 0x1D169, G::Extend),
    (0x1D16D, 0x1D172, G::Extend), (0x1D173, 0x1D17A, G::Control), (0x1D17B, 0x1D182, G::Extend),
    (0x1D185, 0x1D18B, G::Extend), (0x1D1AA, 0x1D1AD, G::Extend), (0x1D242, 0x1D244, G::Extend),
    (0x1DA00, 0x1DA36, G::Extend), (0x1DA3B, 0x1DA6C, G::Extend), (0x1DA75, 0x1DA75, G::Extend),
    (0x1DA84, 0x1DA84, G::Extend), (0x1DA9B, 0x1DA9F, G::Extend), (0x1DAA1, 0x1DAAF, G::Extend),
    (0x1E000, 0x1E006, G::Extend), (0x1E008, 0x1E018, G::Extend), (0x1E01B, 0x1E021, G::Extend),
    (0x1E023, 0x1E024, G::Extend), (0x1E026, 0x1E02A, G::Extend), (0x1E08F, 0x1E08F, G::Extend),
    (0x1E130, 0x1E136, G::Extend), (0x1E2AE, 0x1E2AE, G::Extend), (0x1E2EC, 0x1E2EF, G::Extend),
    (0x1E4EC, 0x1E4EF, G::Extend), (0x1E5EE, 0x1E5EF, G::Extend), (0x1E6E3, 0x1E6E3, G::Extend),
    (0x1E6E6, 0x1E6E6, G::Extend), (0x1E6EE, 0x1E6EF, G::Extend), (0x1E6F5, 0x1E6F5, G::Extend),
    (0x1E8D0, 0x1E8D6, G::Extend), (0x1E944, 0x1E94A, G::Extend), (0x1F1E6, 0x1F1FF, G::RegionalIndicator),
    (0x1F3FB, 0x1F3FF, G::Extend), (0xE0000, 0xE001F, G::Control), (0xE0020, 0xE007F, G::Extend),
    (0xE0080, 0xE00FF, G::Control), (0xE0100, 0xE01EF, G::Extend), (0xE01F0, 0xE0FFF, G::Control),
];

/// `Word_Break` property.
#[rustfmt::skip]
pub(crate) static WORD_BREAK: &[(u32, u32, W)] = &[
    (0x000A, 0x000A, W::LF), (0x000B, 0x000C, W::Newline), (0x000D, 0x000D, W::CR),
    (0x0020, 0x0020, W::WSegSpace), (0x0022, 0x0022, W::DoubleQuote), (0x0027, 0x0027, W::SingleQuote),
    (0x002C, 0x002C, W::MidNum), (0x002E, 0x002E, W::MidNumLet), (0x0030, 0x0039, W::Numeric),
    (0x003A, 0x003A, W::MidLetter), (0x003B, 0x003B, W::MidNum), (0x0041, 0x005A, W::ALetter),
    (0x005F, 0x005F, W::ExtendNumLet), (0x0061, 0x007A, W::ALetter), (0x0085, 0x0085, W::Newline),
    (0x00AA, 0x00AA, W::ALetter), (0x00AD, 0x00AD, W::Format), (0x00B5, 0x00B5, W::ALetter),
    (0x00B7, 0x00B7, W::MidLetter), (0x00B8, 0x00B8, W::ALetter), (0x00BA, 0x00BA, W::ALetter),
    (0x00C0, 0x00D6, W::ALetter), (0x00D8, 0x00F6, W::ALetter), (0x00F8, 0x02D7, W::ALetter),
    (0x02DE, 0x02FF, W::ALetter), (0x0300, 0x036F, W::Extend), (0x0370, 0x0374, W::ALetter),
    (0x0376, 0x0377, W::ALetter), (0x037A, 0x037D, W::ALetter), (0x037E, 0x037E, W::MidNum),
    (0x037F, 0x037F, W::ALetter), (0x0386, 0x0386, W::ALetter), (0x0387, 0x0387, W::MidLetter),
    (0x0388, 0x038A, W::ALetter), (0x038C, 0x038C, W::ALetter), (0x038E, 0x03A1, W::ALetter),
    (0x03A3, 0x03F5, W::ALetter), (0x03F7, 0x0481, W::ALetter), (0x0483, 0x0489, W::Extend),
    (0x048A, 0x052F, W::ALetter), (0x0531, 0x0556, W::ALetter), (0x0559, 0x055C, W::ALetter),
    (0x055E, 0x055E, W::ALetter), (0x055F, 0x055F, W::MidLetter), (0x0560, 0x0588, W::ALetter),
    (0x0589, 0x0589, W::MidNum), (0x058A, 0x058A, W::ALetter), (0x0591, 0x05BD, W::Extend),
    (0x05BF, 0x05BF, W::Extend), (0x05C1, 0x05C2, W::Extend), (0x05C4, 0x05C5, W::Extend),
    (0x05C7, 0x05C7, W::Extend), (0x05D0, 0x05EA, W::HebrewLetter), (0x05EF, 0x05F2, W::HebrewLetter),
    (0x05F3, 0x05F3, W::ALetter), (0x05F4, 0x05F4, W::MidLetter), (0x0600, 0x0605, W::Numeric),
    (0x060C, 0x060D, W::MidNum), (0x0610, 0x061A, W::Extend), (0x061C, 0x061C, W::Format),
    (0x0620, 0x064A, W::ALetter), (0x064B, 0x065F, W::Extend), (0x0660, 0x0669, W::Numeric),
    (0x066B, 0x066B, W::Numeric), (0x066C, 0x066C, W::MidNum), (0x066E, 0x066F, W::ALetter),
    (0x0670, 0x0670, W::Extend), (0x0671, 0x06D3, W::ALetter), (0x06D5, 0x06D5, W::ALetter),
    (0x06D6, 0x06DC, W::Extend), (0x06DD, 0x06DD, W::Numeric), (0x06DF, 0x06E4, W::Extend),
    (0x06E5, 0x06E6, W::ALetter), (0x06E7, 0x06E8, W::Extend), (0x06EA, 0x06ED, W::Extend),
    (0x06EE, 0x06EF, W::ALetter), (0x06F0, 0x06F9, W::Numeric), (0x06FA, 0x06FC, W::ALetter),
    (0x06FF, 0x06FF, W::ALetter), (0x070F, 0x0710, W::ALetter), (0x0711, 0x0711, W::Extend),
    (0x0712, 0x072F, W::ALetter), (0x0730, 0x074A, W::Extend), (0x074D, 0x07A5, W::ALetter),
    (0x07A6, 0x07B0, W::Extend), (0x07B1, 0x07B1, W::ALetter), (0x07C0, 0x07C9, W::Numeric),
    (0x07CA, 0x07EA, W::ALetter), (0x07EB, 0x07F3, W::Extend), (0x07F4, 0x07F5, W::ALetter),
    (0x07F8, 0x07F8, W::MidNum), (0x07FA, 0x07FA, W::ALetter), (0x07FD, 0x07FD, W::Extend),
    (0x0800, 0x0815, W::ALetter), (0x0816, 0x0819, W::Extend), (0x081A, 0x081A, W::ALetter),
    (0x081B, 0x0823, W::Extend), (0x0824, 0x0824, W::ALetter), (0x0825, 0x0827, W::Extend),
    (0x0828, 0x0828, W::ALetter), (0x0829, 0x082D, W::Extend), (0x0840, 0x0858, W::ALetter),
    (0x0859, 0x085B, W::Extend), (0x0860, 0x086A, W::ALetter), (0x0870, 0x0887, W::ALetter),
    (0x0889, 0x088F, W::ALetter), (0x0890, 0x0891, W::Numeric), (0x0897, 0x089F, W::Extend),
    (0x08A0, 0x08C9, W::ALetter), (0x08CA, 0x08E1, W::Extend), (0x08E2, 0x08E2, W::Numeric),
    (0x08E3, 0x0903, W::Extend), (0x0904, 0x0939, W::ALetter), (0x093A, 0x093C, W::Extend),
    (0x093D, 0x093D, W::ALetter), (0x093E, 0x094F, W::Extend), (0x0950, 0x0950, W::ALetter),
    (0x0951, 0x0957, W::Extend), (0x0958, 0x0961, W::ALetter), (0x0962, 0x0963, W::Extend),
    (0x0966, 0x096F, W::Numeric), (0x0971, 0x0980, W::ALetter), (0x0981, 0x0983, W::Extend),
    (0x0985, 0x098C, W::ALetter), (0x098F, 0x0990, W::ALetter), (0x0993, 0x09A8, W::ALetter),
    (0x09AA, 0x09B0, W::ALetter), (0x09B2, 0x09B2, W::ALetter), (0x09B6, 0x09B9, W::ALetter),
    (0x09BC, 0x09BC, W::Extend), (0x09BD, 0x09BD, W::ALetter), (0x09BE, 0x09C4, W::Extend),
    (0x09C7, 0x09C8, W::Extend), (0x09CB, 0x09CD, W::Extend), (0x09CE, 0x09CE, W::ALetter),
    (0x09D7, 0x09D7, W::Extend), (0x09DC, 0x09DD, W::ALetter), (0x09DF, 0x09E1, W::ALetter),
    (0x09E2, 0x09E3, W::Extend), (0x09E6, 0x09EF, W::Numeric), (0x09F0, 0x09F1, W::ALetter),
    (0x09FC, 0x09FC, W::ALetter), (0x09FE, 0x09FE, W::Extend), (0x0A01, 0x0A03, W::Extend),
    (0x0A05, 0x0A0A, W::ALetter), (0x0A0F, 0x0A10, W::ALetter), (0x0A13, 0x0A28, W::ALetter),
    (0x0A2A, 0x0A30, W::ALetter), (0x0A32, 0x0A33, W::ALetter), (0x0A35, 0x0A36, W::ALetter),
    (0x0A38, 0x0A39, W::ALetter), (0x0A3C, 0x0A3C, W::Extend), (0x0A3E, 0x0A42, W::Extend),
    (0x0A47, 0x0A48, W::Extend), (0x0A4B, 0x0A4D, W::Extend), (0x0A51, 0x0A51, W::Extend),
    (0x0A59, 0x0A5C, W::ALetter), (0x0A5E, 0x0A5E, W::ALetter), (0x0A66, 0x0A6F, W::Numeric),
    (0x0A70, 0x0A71, W::Extend), (0x0A72, 0x0A74, W::ALetter), (0x0A75, 0x0A75, W::Extend),
    (0x0A81, 0x0A83, W::Extend), (0x0A85, 0x0A8D, W::ALetter), (0x0A8F, 0x0A91, W::ALetter),
    (0x0A93, 0x0AA8, W::ALetter), (0x0AAA, 0x0AB0, W::ALetter), (0x0AB2, 0x0AB3, W::ALetter),
    (0x0AB5, 0x0AB9, W::ALetter), (0x0ABC, 0x0ABC, W::Extend), (0x0ABD, 0x0ABD, W::ALetter),
    (0x0ABE, 0x0AC5, W::Extend), (0x0AC7, 0x0AC9, W::Extend), (0x0ACB, 0x0ACD, W::Extend),
    (0x0AD0, 0x0AD0, W::ALetter), (0x0AE0, 0x0AE1, W::ALetter), (0x0AE2, 0x0AE3, W::Extend),
    (0x0AE6, 0x0AEF, W::Numeric), (0x0AF9, 0x0AF9, W::ALetter), (0x0AFA, 0x0AFF, W::Extend),
    (0x0B01, 0x0B03, W::Extend), (0x0B05, 0x0B0C, W::ALetter), (0x0B0F, 0x0B10, W::ALetter),
    (0x0B13, 0x0B28, W::ALetter), (0x0B2A, 0x0B30, W::ALetter), (0x0B32, 0x0B33, W::ALetter),
    (0x0B35, 0x0B39, W::ALetter), (0x0B3C, 0x0B3C, W::Extend), (0x0B3D, 0x0B3D, W::ALetter),
    (0x0B3E, 0x0B44, W::Extend), (0x0B47, 0x0B48, W::Extend), (0x0B4B, 0x0B4D, W::Extend),
    (0x0B55, 0x0B57, W::Extend), (0x0B5C, 0x0B5D, W::ALetter), (0x0B5F, 0x0B61, W::ALetter),
    (0x0B62, 0x0B63, W::Extend), (0x0B66, 0x0B6F, W::Numeric), (0x0B71, 0x0B71, W::ALetter),
    (0x0B82, 0x0B82, W::Extend), (0x0B83, 0x0B83, W::ALetter), (0x0B85, 0x0B8A, W::ALetter),
    (0x0B8E, 0x0B90, W::ALetter), (0x0B92, 0x0B95, W::ALetter), (0x0B99, 0x0B9A, W::ALetter),
    (0x0B9C, 0x0B9C, W::ALetter), (0x0B9E, 0x0B9F, W::ALetter), (0x0BA3, 0x0BA4, W::ALetter),
    (0x0BA8, 0x0BAA, W::ALetter), (0x0BAE, 0x0BB9, W::ALetter), (0x0BBE, 0x0BC2, W::Extend),
    (0x0BC6, 0x0BC8, W::Extend), (0x0BCA, 0x0BCD, W::Extend), (0x0BD0, 0x0BD0, W::ALetter),
    (0x0BD7, 0x0BD7, W::Extend), (0x0BE6, 0x0BEF, W::Numeric), (0x0C00, 0x0C04, W::Extend),
    (0x0C05, 0x0C0C, W::ALetter), (0x0C0E, 0x0C10, W::ALetter), (0x0C12, 0x0C28, W::ALetter),
    (0x0C2A, 0x0C39, W::ALetter), (0x0C3C, 0x0C3C, W::Extend), (0x0C3D, 0x0C3D, W::ALetter),
    (0x0C3E, 0x0C44, W::Extend), (0x0C46, 0x0C48, W::Extend), (0x0C4A, 0x0C4D, W::Extend),
    (0x0C55, 0x0C56, W::Extend), (0x0C58, 0x0C5A, W::ALetter), (0x0C5C, 0x0C5D, W::ALetter),
    (0x0C60, 0x0C61, W::ALetter), (0x0C62, 0x0C63, W::Extend), (0x0C66, 0x0C6F, W::Numeric),
    (0x0C80, 0x0C80, W::ALetter), (0x0C81, 0x0C83, W::Extend), (0x0C85, 0x0C8C, W::ALetter),
    (0x0C8E, 0x0C90, W::ALetter), (0x0C92, 0x0CA8, W::ALetter), (0x0CAA, 0x0CB3, W::ALetter),
    (0x0CB5, 0x0CB9, W::ALetter), (0x0CBC, 0x0CBC, W::Extend), (0x0CBD, 0x0CBD, W::ALetter),
    (0x0CBE, 0x0CC4, W::Extend), (0x0CC6, 0x0CC8, W::Extend), (0x0CCA, 0x0CCD, W::Extend),
    (0x0CD5, 0x0CD6, W::Extend), (0x0CDC, 0x0CDE, W::ALetter), (0x0CE0, 0x0CE1, W::ALetter),
    (0x0CE2, 0x0CE3, W::Extend), (0x0CE6, 0x0CEF, W::Numeric), (0x0CF1, 0x0CF2, W::ALetter),
    (0x0CF3, 0x0CF3, W::Extend), (0x0D00, 0x0D03, W::Extend), (0x0D04, 0x0D0C, W::ALetter),
    (0x0D0E, 0x0D10, W::ALetter), (0x0D12, 0x0D3A, W::ALetter), (0x0D3B, 0x0D3C, W::Extend),
    (0x0D3D, 0x0D3D, W::ALetter), (0x0D3E, 0x0D44, W::Extend), (0x0D46, 0x0D48, W::Extend),
    (0x0D4A, 0x0D4D, W::Extend), (0x0D4E, 0x0D4E, W::ALetter), (0x0D54, 0x0D56, W::ALetter),
    (0x0D57, 0x0D57, W::Extend), (0x0D5F, 0x0D61, W::ALetter), (0x0D62, 0x0D63, W::Extend),
    (0x0D66, 0x0D6F, W::Numeric), (0x0D7A, 0x0D7F, W::ALetter), (0x0D81, 0x0D83, W::Extend),
    (0x0D85, 0x0D96, W::ALetter), (0x0D9A, 0x0DB1, W::ALetter), (0x0DB3, 0x0DBB, W::ALetter),
    (0x0DBD, 0x0DBD, W::ALetter), (0x0DC0, 0x0DC6, W::ALetter), (0x0DCA, 0x0DCA, W::Extend),
    (0x0DCF, 0x0DD4, W::Extend), (0x0DD6, 0x0DD6, W::Extend), (0x0DD8, 0x0DDF, W::Extend),
    (0x0DE6, 0x0DEF, W::Numeric), (0x0DF2, 0x0DF3, W::Extend), (0x0E31, 0x0E31, W::Extend),
    (0x0E34, 0x0E3A, W::Extend), (0x0E47, 0x0E4E, W::Extend), (0x0E50, 0x0E59, W::Numeric),
    (0x0EB1, 0x0EB1, W::Extend), (0x0EB4, 0x0EBC, W::Extend), (0x0EC8, 0x0ECE, W::Extend),
    (0x0ED0, 0x0ED9, W::Numeric), (0x0F00, 0x0F00, W::ALetter), (0x0F18, 0x0F19, W::Extend),
    (0x0F20, 0x0F29, W::Numeric), (0x0F35, 0x0F35, W::Extend), (0x0F37, 0x0F37, W::Extend),
    (0x0F39, 0x0F39, W::Extend), (0x0F3E, 0x0F3F, W::Extend), (0x0F40, 0x0F47, W::ALetter),
    (0x0F49, 0x0F6C, W::ALetter), (0x0F71, 0x0F84, W::Extend), (0x0F86, 0x0F87, W::Extend),
    (0x0F88, 0x0F8C, W::ALetter), (0x0F8D, 0x0F97, W::Extend), (0x0F99, 0x0FBC, W::Extend),
    (0x0FC6, 0x0FC6, W::Extend), (0x102B, 0x103E, W::Extend), (0x1040, 0x1049, W::Numeric),
    (0x1056, 0x1059, W::Extend), (0x105E, 0x1060, W::Extend), (0x1062, 0x1064, W::Extend),
    (0x1067, 0x106D, W::Extend), (0x1071, 0x1074, W::Extend), (0x1082, 0x108D, W::Extend),
    (0x108F, 0x108F, W::Extend), (0x1090, 0x1099, W::Numeric), (0x109A, 0x109D, W::Extend),
    (0x10A0, 0x10C5, W::ALetter), (0x10C7, 0x10C7, W::ALetter), (0x10CD, 0x10CD, W::ALetter),
    (0x10D0, 0x10FA, W::ALetter), (0x10FC, 0x1248, W::ALetter), (0x124A, 0x124D, W::ALetter),
    (0x1250, 0x1256, W::ALetter), (0x1258, 0x1258, W::ALetter), (0x125A, 0x125D, W::ALetter),
    (0x1260, 0x1288, W::ALetter), (0x128A, 0x128D, W::ALetter), (0x1290, 0x12B0, W::ALetter),
    (0x12B2, 0x12B5, W::ALetter), (0x12B8, 0x12BE, W::ALetter), (0x12C0, 0x12C0, W::ALetter),
    (0x12C2, 0x12C5, W::ALetter), (0x12C8, 0x12D6, W::ALetter), (0x12D8, 0x1310, W::ALetter),
    (0x1312, 0x1315, W::ALetter), (0x1318, 0x135A, W::ALetter), (0x135D, 0x135F, W::Extend),
    (0x1380, 0x138F, W::ALetter), (0x13A0, 0x13F5, W::ALetter), (0x13F8, 0x13FD, W::ALetter),
    (0x1401, 0x166C, W::ALetter), (0x166F, 0x167F, W::ALetter), (0x1680, 0x1680, W::WSegSpace),
    (0x1681, 0x169A, W::ALetter), (0x16A0, 0x16EA, W::ALetter), (0x16EE, 0x16F8, W::ALetter),
    (0x1700, 0x1711, W::ALetter), (0x1712, 0x1715, W::Extend), (0x171F, 0x1731, W::ALetter),
    (0x1732, 0x1734, W::Extend), (0x1740, 0x1751, W::ALetter), (0x1752, 0x1753, W::Extend),
    (0x1760, 0x176C, W::ALetter), (0x176E, 0x1770, W::ALetter), (0x1772, 0x1773, W::Extend),
    (0x17B4, 0x17D3, W::Extend), (0x17DD, 0x17DD, W::Extend), (0x17E0, 0x17E9, W::Numeric),
    (0x180B, 0x180D, W::Extend), (0x180E, 0x180E, W::Format), (0x180F, 0x180F, W::Extend),
    (0x1810, 0x1819, W::Numeric), (0x1820, 0x1878, W::ALetter), (0x1880, 0x1884, W::ALetter),
    (0x1885, 0x1886, W::Extend), (0x1887, 0x18A8, W::ALetter), (0x18A9, 0x18A9, W::Extend),
    (0x18AA, 0x18AA, W::ALetter), (0x18B0, 0x18F5, W::ALetter), (0x1900, 0x191E, W::ALetter),
    (0x1920, 0x192B, W::Extend), (0x1930, 0x193B, W::Extend), (0x1946, 0x194F, W::Numeric),
    (0x19D0, 0x19DA, W::Numeric), (0x1A00, 0x1A16, W::ALetter), (0x1A17, 0x1A1B, W::Extend),
    (0x1A55, 0x1A5E, W::Extend), (0x1A60, 0x1A7C, W::Extend), (0x1A7F, 0x1A7F, W::Extend),
    (0x1A80, 0x1A89, W::Numeric), (0x1A90, 0x1A99, W::Numeric), (0x1AB0, 0x1ADD, W::Extend),
    (0x1AE0, 0x1AEB, W::Extend), (0x1B00, 0x1B04, W::Extend), (0x1B05, 0x1B33, W::ALetter),
    (0x1B34, 0x1B44, W::Extend), (0x1B45, 0x1B4C, W::ALetter), (0x1B50, 0x1B59, W::Numeric),
    (0x1B6B, 0x1B73, W::Extend), (0x1B80, 0x1B82, W::Extend), (0x1B83, 0x1BA0, W::ALetter),
    (0x1BA1, 0x1BAD, W::Extend), (0x1BAE, 0x1BAF, W::ALetter), (0x1BB0, 0x1BB9, W::Numeric),
    (0x1BBA, 0x1BE5, W::ALetter), (0x1BE6, 0x1BF3, W::Extend), (0x1C00, 0x1C23, W::ALetter),
    (0x1C24, 0x1C37, W::Extend), (0x1C40, 0x1C49, W::Numeric), (0x1C4D, 0x1C4F, W::ALetter),
    (0x1C50, 0x1C59, W::Numeric), (0x1C5A, 0x1C7D, W::ALetter), (0x1C80, 0x1C8A, W::ALetter),
    (0x1C90, 0x1CBA, W::ALetter), (0x1CBD, 0x1CBF, W::ALetter), (0x1CD0, 0x1CD2, W::Extend),
    (0x1CD4, 0x1CE8, W::Extend), (0x1CE9, 0x1CEC, W::ALetter), (0x1CED, 0x1CED, W::Extend),
    (0x1CEE, 0x1CF3, W::ALetter), (0x1CF4, 0x1CF4, W::Extend), (0x1CF5, 0x1CF6, W::ALetter),
    (0x1CF7, 0x1CF9, W::Extend), (0x1CFA, 0x1CFA, W::ALetter), (0x1D00, 0x1DBF, W::ALetter),
    (0x1DC0, 0x1DFF, W::Extend), (0x1E00, 0x1F15, W::ALetter), (0x1F18, 0x1F1D, W::ALetter),
    (0x1F20, 0x1F45, W::ALetter), (0x1F48, 0x1F4D, W::ALetter), (0x1F50, 0x1F57, W::ALetter),
    (0x1F59, 0x1F59, W::ALetter), (0x1F5B, 0x1F5B, W::ALetter), (0x1F5D, 0x1F5D, W::ALetter),
    (0x1F5F, 0x1F7D, W::ALetter), (0x1F80, 0x1FB4, W::ALetter), (0x1FB6, 0x1FBC, W::ALetter),
    (0x1FBE, 0x1FBE, W::ALetter), (0x1FC2, 0x1FC4, W::ALetter), (0x1FC6, 0x1FCC, W::ALetter),
    (0x1FD0, 0x1FD3, W::ALetter), (0x1FD6, 0x1FDB, W::ALetter), (0x1FE0, 0x1FEC, W::ALetter),
    (0x1FF2, 0x1FF4, W::ALetter), (0x1FF6, 0x1FFC, W::ALetter), (0x2000, 0x2006, W::WSegSpace),
    (0x2008, 0x200A, W::WSegSpace), (0x200C, 0x200C, W::Extend), (0x200D, 0x200D, W::ZWJ),
    (0x200E, 0x200F, W::Format), (0x2018, 0x2019, W::MidNumLet), (0x2024, 0x2024, W::MidNumLet),
    (0x2027, 0x2027, W::MidLetter), (0x2028, 0x2029, W::Newline), (0x202A, 0x202E, W::Format),
    (0x202F, 0x202F, W::ExtendNumLet), (0x203F, 0x2040, W::ExtendNumLet), (0x2044, 0x2044, W::MidNum),
    (0x2054, 0x2054, W::ExtendNumLet), (0x205F, 0x205F, W::WSegSpace), (0x2060, 0x2064, W::Format),
    (0x2066, 0x206F, W::Format), (0x2071, 0x2071, W::ALetter), (0x207F, 0x207F, W::ALetter),
    (0x2090, 0x209C, W::ALetter), (0x20D0, 0x20F0, W::Extend), (0x2102, 0x2102, W::ALetter),
    (0x2107, 0x2107, W::ALetter), (0x210A, 0x2113, W::ALetter), (0x2115, 0x2115, W::ALetter),
    (0x2119, 0x211D, W::ALetter), (0x2124, 0x2124, W::ALetter), (0x2126, 0x2126, W::ALetter),
    (0x2128, 0x2128, W::ALetter), (0x212A, 0x212D, W::ALetter), (0x212F, 0x2139, W::ALetter),
    (0x213C, 0x213F, W::ALetter), (0x2145, 0x2149, W::ALetter), (0x214E, 0x214E, W::ALetter),
    (0x2160, 0x2188, W::ALetter), (0x24B6, 0x24E9, W::ALetter), (0x2C00, 0x2CE4, W::ALetter),
    (0x2CEB, 0x2CEE, W::ALetter), (0x2CEF, 0x2CF1, W::Extend), (0x2CF2, 0x2CF3, W::ALetter),
    (0x2D00, 0x2D25, W::ALetter), (0x2D27, 0x2D27, W::ALetter), (0x2D2D, 0x2D2D, W::ALetter),
    (0x2D30, 0x2D67, W::ALetter), (0x2D6F, 0x2D6F, W::ALetter), (0x2D7F, 0x2D7F, W::Extend),
    (0x2D80, 0x2D96, W::ALetter), (0x2DA0, 0x2DA6, W::ALetter), (0x2DA8, 0x2DAE, W::ALetter),
    (0x2DB0, 0x2DB6, W::ALetter), (0x2DB8, 0x2DBE, W::ALetter), (0x2DC0, 0x2DC6, W::ALetter),
    (0x2DC8, 0x2DCE, W::ALetter), (0x2DD0, 0x2DD6, W::ALetter), (0x2DD8, 0x2DDE, W::ALetter),
    (0x2DE0, 0x2DFF, W::Extend), (0x2E2F, 0x2E2F, W::ALetter), (0x3000, 0x3000, W::WSegSpace),
    (0x3005, 0x3005, W::ALetter), (0x302A, 0x302F, W::Extend), (0x3031, 0x3035, W::Katakana),
    (0x303B, 0x303C, W::ALetter), (0x3099, 0x309A, W::Extend), (0x309B, 0x309C, W::Katakana),
    (0x30A0, 0x30FA, W::Katakana), (0x30FC, 0x30FF, W::Katakana), (0x3105, 0x312F, W::ALetter),
    (0x3131, 0x318E, W::ALetter), (0x31A0, 0x31BF, W::ALetter), (0x31F0, 0x31FF, W::Katakana),
    (0x32D0, 0x32FE, W::Katakana), (0x3300, 0x3357, W::Katakana), (0xA000, 0xA48C, W::ALetter),
    (0xA4D0, 0xA4FD, W::ALetter), (0xA500, 0xA60C, W::ALetter), (0xA610, 0xA61F, W::ALetter),
    (0xA620, 0xA629, W::Numeric), (0xA62A, 0xA62B, W::ALetter), (0xA640, 0xA66E, W::ALetter),
    (0xA66F, 0xA672, W::Extend), (0xA674, 0xA67D, W::Extend), (0xA67F, 0xA69D, W::ALetter),
    (0xA69E, 0xA69F, W::Extend), (0xA6A0, 0xA6EF, W::ALetter), (0xA6F0, 0xA6F1, W::Extend),
    (0xA708, 0xA7DC, W::ALetter), (0xA7F1, 0xA801, W::ALetter), (0xA802, 0xA802, W::Extend),
    (0xA803, 0xA805, W::ALetter), (0xA806, 0xA806, W::Extend), (0xA807, 0xA80A, W::ALetter),
    (0xA80B, 0xA80B, W::Extend), (0xA80C, 0xA822, W::ALetter), (0xA823, 0xA827, W::Extend),
    (0xA82C, 0xA82C, W::Extend), (0xA840, 0xA873, W::ALetter), (0xA880, 0xA881, W::Extend),
    (0xA882, 0xA8B3, W::ALetter), (0xA8B4, 0xA8C5, W::Extend), (0xA8D0, 0xA8D9, W::Numeric),
    (0xA8E0, 0xA8F1, W::Extend), (0xA8F2, 0xA8F7, W::ALetter), (0xA8FB, 0xA8FB, W::ALetter),
    (0xA8FD, 0xA8FE, W::ALetter), (0xA8FF, 0xA8FF, W::Extend), (0xA900, 0xA909, W::Numeric),
    (0xA90A, 0xA925, W::ALetter), (0xA926, 0xA92D, W::Extend), (0xA930, 0xA946, W::ALetter),
    (0xA947, 0xA953, W::Extend), (0xA960, 0xA97C, W::ALetter), (0xA980, 0xA983, W::Extend),
    (0xA984, 0xA9B2, W::ALetter), (0xA9B3, 0xA9C0, W::Extend), (0xA9CF, 0xA9CF, W::ALetter),
    (0xA9D0, 0xA9D9, W::Numeric), (0xA9E5, 0xA9E5, W::Extend), (0xA9F0, 0xA9F9, W::Numeric),
    (0xAA00, 0xAA28, W::ALetter), (0xAA29, 0xAA36, W::Extend), (0xAA40, 0xAA42, W::ALetter),
    (0xAA43, 0xAA43, W::Extend), (0xAA44, 0xAA4B, W::ALetter), (0xAA4C, 0xAA4D, W::Extend),
    (0xAA50, 0xAA59, W::Numeric), (0xAA7B, 0xAA7D, W::Extend), (0xAAB0, 0xAAB0, W::Extend),
    (0xAAB2, 0xAAB4, W::Extend), (0xAAB7, 0xAAB8, W::Extend), (0xAABE, 0xAABF, W::Extend),
    (0xAAC1, 0xAAC1, W::Extend), (0xAAE0, 0xAAEA, W::ALetter), (0xAAEB, 0xAAEF, W::Extend),
    (0xAAF2, 0xAAF4, W::ALetter), (0xAAF5, 0xAAF6, W::Extend), (0xAB01, 0xAB06, W::ALetter),
    (0xAB09, 0xAB0E, W::ALetter), (0xAB11, 0xAB16, W::ALetter), (0xAB20, 0xAB26, W::ALetter),
    (0xAB28, 0xAB2E, W::ALetter), (0xAB30, 0xAB69, W::ALetter), (0xAB70, 0xABE2, W::ALetter),
    (0xABE3, 0xABEA, W::Extend), (0xABEC, 0xABED, W::Extend), (0xABF0, 0xABF9, W::Numeric),
    (0xAC00, 0xD7A3, W::ALetter), (0xD7B0, 0xD7C6, W::ALetter), (0xD7CB, 0xD7FB, W::ALetter),
    (0xFB00, 0xFB06, W::ALetter), (0xFB13, 0xFB17, W::ALetter), (0xFB1D, 0xFB1D, W::HebrewLetter),
    (0xFB1E, 0xFB1E, W::Extend), (0xFB1F, 0xFB28, W::HebrewLetter), (0xFB2A, 0xFB36, W::HebrewLetter),
    (0xFB38, 0xFB3C, W::HebrewLetter), (0xFB3E, 0xFB3E, W::HebrewLetter), (0xFB40, 0xFB41, W::HebrewLetter),
    (0xFB43, 0xFB44, W::HebrewLetter), (0xFB46, 0xFB4F, W::HebrewLetter), (0xFB50, 0xFBB1, W::ALetter),
    (0xFBD3, 0xFD3D, W::ALetter), (0xFD50, 0xFD8F, W::ALetter), (0xFD92, 0xFDC7, W::ALetter),
    (0xFDF0, 0xFDFB, W::ALetter), (0xFE00, 0xFE0F, W::Extend), (0xFE13, 0xFE13, W::MidLetter),
    (0xFE20, 0xFE2F, W::Extend), (0xFE33, 0xFE34, W::ExtendNumLet), (0xFE4D, 0xFE4F, W::ExtendNumLet),
    (0xFE50, 0xFE50, W::MidNum), (0xFE52, 0xFE52, W::MidNumLet), (0xFE54, 0xFE54, W::MidNum),
    (0xFE55, 0xFE55, W::MidLetter), (0xFE70, 0xFE74, W::ALetter), (0xFE76, 0xFEFC, W::ALetter),
    (0xFEFF, 0xFEFF, W::Format), (0xFF07, 0xFF07, W::MidNumLet), (0xFF0C, 0xFF0C, W::MidNum),
    (0xFF0E, 0xFF0E, W::MidNumLet), (0xFF10, 0xFF19, W::Numeric), (0xFF1A, 0xFF1A, W::MidLetter),
    (0xFF1B, 0xFF1B, W::MidNum), (0xFF21, 0xFF3A, W::ALetter), (0xFF3F, 0xFF3F, W::ExtendNumLet),
    (0xFF41, 0xFF5A, W::ALetter), (0xFF66, 0xFF9D, W::Katakana), (0xFF9E, 0xFF9F, W::Extend),
    (0xFFA0, 0xFFBE, W::ALetter), (0xFFC2, 0xFFC7, W::ALetter), (0xFFCA, 0xFFCF, W::ALetter),
    (0xFFD2, 0xFFD7, W::ALetter), (0xFFDA, 0xFFDC, W::ALetter), (0xFFF9, 0xFFFB, W::Format),
    (0x10000, 0x1000B, W::ALetter), (0x1000D, 0x10026, W::ALetter), (0x10028, 0x1003A, W::ALetter),
    (0x1003C, 0x1003D, W::ALetter), (0x1003F, 0x1004D, W::ALetter), (0x10050, 0x1005D, W::ALetter),
    (0x10080, 0x100FA, W::ALetter), (0x10140, 0x10174, W::ALetter), (0x101FD, 0x101FD, W::Extend),
    (0x10280, 0x1029C, W::ALetter), (0x102A0, 0x102D0, W::ALetter), (0x102E0, 0x102E0, W::Extend),
    (0x10300, 0x1031F, W::ALetter), (0x1032D, 0x1034A, W::ALetter), (0x10350, 0x10375, W::ALetter),
    (0x10376, 0x1037A, W::Extend), (0x10380, 0x1039D, W::ALetter), (0x103A0, 0x103C3, W::ALetter),
    (0x103C8, 0x103CF, W::ALetter), (0x103D1, 0x103D5, W::ALetter), (0x10400, 0x1049D, W::ALetter),
    (0x104A0, 0x104A9, W::Numeric), (0x104B0, 0x104D3, W::ALetter), (0x104D8, 0x104FB, W::ALetter),
    (0x10500, 0x10527, W::ALetter), (0x10530, 0x10563, W::ALetter), (0x10570, 0x1057A, W::ALetter),
    (0x1057C, 0x1058A, W::ALetter), (0x1058C, 0x10592, W::ALetter), (0x10594, 0x10595, W::ALetter),
    (0x10597, 0x105A1, W::ALetter), (0x105A3, 0x105B1, W::ALetter), (0x105B3, 0x105B9, W::ALetter),
    (0x105BB, 0x105BC, W::ALetter), (0x105C0, 0x105F3, W::ALetter), (0x10600, 0x10736, W::ALetter),
    (0x10740, 0x10755, W::ALetter), (0x10760, 0x10767, W::ALetter), (0x10780, 0x10785, W::ALetter),
    (0x10787, 0x107B0, W::ALetter), (0x107B2, 0x107BA, W::ALetter), (0x10800, 0x10805, W::ALetter),
    (0x10808, 0x10808, W::ALetter), (0x1080A, 0x10835, W::ALetter), (0x10837, 0x10838, W::ALetter),
    (0x1083C, 0x1083C, W::ALetter), (0x1083F, 0x10855, W::ALetter), (0x10860, 0x10876, W::ALetter),
    (0x10880, 0x1089E, W::ALetter), (0x108E0, 0x108F2, W::ALetter), (0x108F4, 0x108F5, W::ALetter),
    (0x10900, 0x10915, W::ALetter), (0x10920, 0x10939, W::ALetter), (0x10940, 0x10959, W::ALetter),
    (0x10980, 0x109B7, W::ALetter), (0x109BE, 0x109BF, W::ALetter), (0x10A00, 0x10A00, W::ALetter),
    (0x10A01, 0x10A03, W::Extend), (0x10A05, 0x10A06, W::Extend), (0x10A0C, 0x10A0F, W::Extend),
    (0x10A10, 0x10A13, W::ALetter), (0x10A15, 0x10A17, W::ALetter), (0x10A19, 0x10A35, W::ALetter),
    (0x10A38, 0x10A3A, W::Extend), (0x10A3F, 0x10A3F, W::Extend), (0x10A60, 0x10A7C, W::ALetter),
    (0x10A80, 0x10A9C, W::ALetter), (0x10AC0, 0x10AC7, W::ALetter), (0x10AC9, 0x10AE4, W::ALetter),
    (0x10AE5, 0x10AE6, W::Extend), (0x10B00, 0x10B35, W::ALetter), (0x10B40, 0x10B55, W::ALetter),
    (0x10B60, 0x10B72, W::ALetter), (0x10B80, 0x10B91, W::ALetter), (0x10C00, 0x10C48, W::ALetter),
    (0x10C80, 0x10CB2, W::ALetter), (0x10CC0, 0x10CF2, W::ALetter), (0x10D00, 0x10D23, W::ALetter),
    (0x10D24, 0x10D27, W::Extend), (0x10D30, 0x10D39, W::Numeric), (0x10D40, 0x10D49, W::Numeric),
    (0x10D4A, 0x10D65, W::ALetter), (0x10D69, 0x10D6D, W::Extend), (0x10D6F, 0x10D85, W::ALetter),
    (0x10E80, 0x10EA9, W::ALetter), (0x10EAB, 0x10EAC, W::Extend), (0x10EB0, 0x10EB1, W::ALetter),
    (0x10EC2, 0x10EC7, W::ALetter), (0x10EFA, 0x10EFF, W::Extend), (0x10F00, 0x10F1C, W::ALetter),
    (0x10F27, 0x10F27, W::ALetter), (0x10F30, 0x10F45, W::ALetter), (0x10F46, 0x10F50, W::Extend),
    (0x10F70, 0x10F81, W::ALetter), (0x10F82, 0x10F85, W::Extend), (0x10FB0, 0x10FC4, W::ALetter),
    (0x10FE0, 0x10FF6, W::ALetter), (0x11000, 0x11002, W::Extend), (0x11003, 0x11037, W::ALetter),
    (0x11038, 0x11046, W::Extend), (0x11066, 0x1106F, W::Numeric), (0x11070, 0x11070, W::Extend),
    (0x11071, 0x11072, W::ALetter), (0x11073, 0x11074, W::Extend), (0x11075, 0x11075, W::ALetter),
    (0x1107F, 0x11082, W::Extend), (0x11083, 0x110AF, W::ALetter), (0x110B0, 0x110BA, W::Extend),
    (0x110BD, 0x110BD, W::Numeric), (0x110C2, 0x110C2, W::Extend), (0x110CD, 0x110CD, W::Numeric),
    (0x110D0, 0x110E8, W::ALetter), (0x110F0, 0x110F9, W::Numeric), (0x11100, 0x11102, W::Extend),
    (0x11103, 0x11126, W::ALetter), (0x11127, 0x11134, W::Extend), (0x11136, 0x1113F, W::Numeric),
    (0x11144, 0x11144, W::ALetter), (0x11145, 0x11146, W::Extend), (0x11147, 0x11147, W::ALetter),
    (0x11150, 0x11172, W::ALetter), (0x11173, 0x11173, W::Extend), (0x11176, 0x11176, W::ALetter),
    (0x11180, 0x11182, W::Extend), (0x11183, 0x111B2, W::ALetter), (0x111B3, 0x111C0, W::Extend),
    (0x111C1, 0x111C4, W::ALetter), (0x111C9, 0x111CC, W::Extend), (0x111CE, 0x111CF, W::Extend),
    (0x111D0, 0x111D9, W::Numeric), (0x111DA, 0x111DA, W::ALetter), (0x111DC, 0x111DC, W::ALetter),
    (0x11200, 0x11211, W::ALetter), (0x11213, 0x1122B, W::ALetter), (0x1122C, 0x11237, W::Extend),
    (0x1123E, 0x1123E, W::Extend), (0x1123F, 0x11240, W::ALetter), (0x11241, 0x11241, W::Extend),
    (0x11280, 0x11286, W::ALetter), (0x11288, 0x11288, W::ALetter), (0x1128A, 0x1128D, W::ALetter),
    (0x1128F, 0x1129D, W::ALetter), (0x1129F, 0x112A8, W::ALetter), (0x112B0, 0x112DE, W::ALetter),
    (0x112DF, 0x112EA, W::Extend), (0x112F0, 0x112F9, W::Numeric), (0x11300, 0x11303, W::Extend),
    (0x11305, 0x1130C, W::ALetter), (0x1130F, 0x11310, W::ALetter), (0x11313, 0x11328, W::ALetter),
    (0x1132A, 0x11330, W::ALetter), (0x11332, 0x11333, W::ALetter), (0x11335, 0x11339, W::ALetter),
    (0x1133B, 0x1133C, W::Extend), (0x1133D, 0x1133D, W::ALetter), (0x1133E, 0x11344, W::Extend),
    (0x11347, 0x11348, W::Extend), (0x1134B, 0x1134D, W::Extend), (0x11350, 0x11350, W::ALetter),
    (0x11357, 0x11357, W::Extend), (0x1135D, 0x11361, W::ALetter), (0x11362, 0x11363, W::Extend),
    (0x11366, 0x1136C, W::Extend), (0x11370, 0x11374, W::Extend), (0x11380, 0x11389, W::ALetter),
    (0x1138B, 0x1138B, W::ALetter), (0x1138E, 0x1138E, W::ALetter), (0x11390, 0x113B5, W::ALetter),
    (0x113B7, 0x113B7, W::ALetter), (0x113B8, 0x113C0, W::Extend), (0x113C2, 0x113C2, W::Extend),
    (0x113C5, 0x113C5, W::Extend), (0x113C7, 0x113CA, W::Extend), (0x113CC, 0x113D0, W::Extend),
    (0x113D1, 0x113D1, W::ALetter), (0x113D2, 0x113D2, W::Extend), (0x113D3, 0x113D3, W::ALetter),
    (0x113E1, 0x113E2, W::Extend), (0x11400, 0x11434, W::ALetter), (0x11435, 0x11446, W::Extend),
    (0x11447, 0x1144A, W::ALetter), (0x11450, 0x11459, W::Numeric), (0x1145E, 0x1145E, W::Extend),
    (0x1145F, 0x11461, W::ALetter), (0x11480, 0x114AF, W::ALetter), (0x114B0, 0x114C3, W::Extend),
    (0x114C4, 0x114C5, W::ALetter), (0x114C7, 0x114C7, W::ALetter), (0x114D0, 0x114D9, W::Numeric),
    (0x11580, 0x115AE, W::ALetter), (0x115AF, 0x115B5, W::Extend), (0x115B8, 0x115C0, W::Extend),
    (0x115D8, 0x115DB, W::ALetter), (0x115DC, 0x115DD, W::Extend), (0x11600, 0x1162F, W::ALetter),
    (0x11630, 0x11640, W::Extend), (0x11644, 0x11644, W::ALetter), (0x11650, 0x11659, W::Numeric),
    (0x11680, 0x116AA, W::ALetter), (0x116AB, 0x116B7, W::Extend), (0x116B8, 0x116B8, W::ALetter),
    (0x116C0, 0x116C9, W::Numeric), (0x116D0, 0x116E3, W::Numeric), (0x1171D, 0x1172B, W::Extend),
    (0x11730, 0x11739, W::Numeric), (0x11800, 0x1182B, W::ALetter), (0x1182C, 0x1183A, W::Extend),
    (0x118A0, 0x118DF, W::ALetter), (0x118E0, 0x118E9, W::Numeric), (0x118FF, 0x11906, W::ALetter),
    (0x11909, 0x11909, W::ALetter), (0x1190C, 0x11913, W::ALetter), (0x11915, 0x11916, W::ALetter),
    (0x11918, 0x1192F, W::ALetter), (0x11930, 0x11935, W::Extend), (0x11937, 0x11938, W::Extend),
    (0x1193B, 0x1193E, W::Extend), (0x1193F, 0x1193F, W::ALetter), (0x11940, 0x11940, W::Extend),
    (0x11941, 0x11941, W::ALetter), (0x11942, 0x11943, W::Extend), (0x11950, 0x11959, W::Numeric),
    (0x119A0, 0x119A7, W::ALetter), (0x119AA, 0x119D0, W::ALetter), (0x119D1, 0x119D7, W::Extend),
    (0x119DA, 0x119E0, W::Extend), (0x119E1, 0x119E1, W::ALetter), (0x119E3, 0x119E3, W::ALetter),
    (0x119E4, 0x119E4, W::Extend), (0x11A00, 0x11A00, W::ALetter), (0x11A01, 0x11A0A, W::Extend),
    (0x11A0B, 0x11A32, W::ALetter), (0x11A33, 0x11A39, W::Extend), (0x11A3A, 0x11A3A, W::ALetter),
    (0x11A3B, 0x11A3E, W::Extend), (0x11A47, 0x11A47, W::Extend), (0x11A50, 0x11A50, W::ALetter),
    (0x11A51, 0x11A5B, W::Extend), (0x11A5C, 0x11A89, W::ALetter), (0x11A8A, 0x11A99, W::Extend),
    (0x11A9D, 0x11A9D, W::ALetter), (0x11AB0, 0x11AF8, W::ALetter), (0x11B60, 0x11B67, W::Extend),
    (0x11BC0, 0x11BE0, W::ALetter), (0x11BF0, 0x11BF9, W::Numeric), (0x11C00, 0x11C08, W::ALetter),
    (0x11C0A, 0x11C2E, W::ALetter), (0x11C2F, 0x11C36, W::Extend), (0x11C38, 0x11C3F, W::Extend),
    (0x11C40, 0x11C40, W::ALetter), (0x11C50, 0x11C59, W::Numeric), (0x11C72, 0x11C8F, W::ALetter),
    (0x11C92, 0x11CA7, W::Extend), (0x11CA9, 0x11CB6, W::Extend), (0x11D00, 0x11D06, W::ALetter),
    (0x11D08, 0x11D09, W::ALetter), (0x11D0B, 0x11D30, W::ALetter), (0x11D31, 0x11D36, W::Extend),
    (0x11D3A, 0x11D3A, W::Extend), (0x11D3C, 0x11D3D, W::Extend), (0x11D3F, 0x11D45, W::Extend),
    (0x11D46, 0x11D46, W::ALetter), (0x11D47, 0x11D47, W::Extend), (0x11D50, 0x11D59, W::Numeric),
    (0x11D60, 0x11D65, W::ALetter), (0x11D67, 0x11D68, W::ALetter), (0x11D6A, 0x11D89, W::ALetter),
    (0x11D8A, 0x11D8E, W::Extend), (0x11D90, 0x11D91, W::Extend), (0x11D93, 0x11D97, W::Extend),
    (0x11D98, 0x11D98, W::ALetter), (0x11DA0, 0x11DA9, W::Numeric), (0x11DB0, 0x11DDB, W::ALetter),
    (0x11DE0, 0x11DE9, W::Numeric), (0x11EE0, 0x11EF2, W::ALetter), (0x11EF3, 0x11EF6, W::Extend),
    (0x11F00, 0x11F01, W::Extend), (0x11F02, 0x11F02, W::ALetter), (0x11F03, 0x11F03, W::Extend),
    (0x11F04, 0x11F10, W::ALetter), (0x11F12, 0x11F33, W::ALetter), (0x11F34, 0x11F3A, W::Extend),
    (0x11F3E, 0x11F42, W::Extend), (0x11F50, 0x11F59, W::Numeric), (0x11F5A, 0x11F5A, W::Extend),
    (0x11FB0, 0x11FB0, W::ALetter), (0x12000, 0x12399, W::ALetter), (0x12400, 0x1246E, W::ALetter),
    (0x12480, 0x12543, W::ALetter), (0x12F90, 0x12FF0, W::ALetter), (0x13000, 0x1342F, W::ALetter),
    (0x13430, 0x1343F, W::Format), (0x13440, 0x13440, W::Extend), (0x13441, 0x13446, W::ALetter),
    (0x13447, 0x13455, W::Extend), (0x13460, 0x143FA, W::ALetter), (0x14400, 0x14646, W::ALetter),
    (0x16100, 0x1611D, W::ALetter), (0x1611E, 0x1612F, W::Extend), (0x16130, 0x16139, W::Numeric),
    (0x16800, 0x16A38, W::ALetter), (0x16A40, 0x16A5E, W::ALetter), (0x16A60, 0x16A69, W::Numeric),
    (0x16A70, 0x16ABE, W::ALetter), (0x16AC0, 0x16AC9, W::Numeric), (0x16AD0, 0x16AED, W::ALetter),
    (0x16AF0, 0x16AF4, W::Extend), (0x16B00, 0x16B2F, W::ALetter), (0x16B30, 0x16B36, W::Extend),
    (0x16B40, 0x16B43, W::ALetter), (0x16B50, 0x16B59, W::Numeric), (0x16B63, 0x16B77, W::ALetter),
    (0x16B7D, 0x16B8F, W::ALetter), (0x16D40, 0x16D6C, W::ALetter), (0x16D70, 0x16D79, W::Numeric),
    (0x16E40, 0x16E7F, W::ALetter), (0x16EA0, 0x16EB8, W::ALetter), (0x16EBB, 0x16ED3, W::ALetter),
    (0x16F00, 0x16F4A, W::ALetter), (0x16F4F, 0x16F4F, W::Extend), (0x16F50, 0x16F50, W::ALetter),
    (0x16F51, 0x16F87, W::Extend), (0x16F8F, 0x16F92, W::Extend), (0x16F93, 0x16F9F, W::ALetter),
    (0x16FE0, 0x16FE1, W::ALetter), (0x16FE3, 0x16FE3, W::ALetter), (0x16FE4, 0x16FE4, W::Extend),
    (0x16FF0, 0x16FF1, W::Extend), (0x1AFF0, 0x1AFF3, W::Katakana), (0x1AFF5, 0x1AFFB, W::Katakana),
    (0x1AFFD, 0x1AFFE, W::Katakana), (0x1B000, 0x1B000, W::Katakana), (0x1B120, 0x1B122, W::Katakana),
    (0x1B155, 0x1B155, W::Katakana), (0x1B164, 0x1B167, W::Katakana), (0x1BC00, 0x1BC6A, W::ALetter),
    (0x1BC70, 0x1BC7C, W::ALetter), (0x1BC80, 0x1BC88, W::ALetter), (0x1BC90, 0x1BC99, W::ALetter),
    (0x1BC9D, 0x1BC9E, W::Extend), (0x1BCA0, 0x1BCA3, W::Format), (0x1CCF0, 0x1CCF9, W::Numeric),
    (0x1CF00, 0x1CF2D, W::Extend), (0x1CF30, 0x1CF46, W::Extend), (0x1D165, 0x1D169, W::Extend),
    (0x1D16D, 0x1D172, W::Extend), (0x1D173, 0x1D17A, W::Format), (0x1D17B, 0x1D182, W::Extend),
    (0x1D185, 0x1D18B, W::Extend), (0x1D1AA, 0x1D1AD, W::Extend), (0x1D242, 0x1D244, W::Extend),
    (0x1D400, 0x1D454, W::ALetter), (0x1D456, 0x1D49C, W::ALetter), (0x1D49E, 0x1D49F, W::ALetter),
    (0x1D4A2, 0x1D4A2, W::ALetter), (0x1D4A5, 0x1D4A6, W::ALetter), (0x1D4A9, 0x1D4AC, W::ALetter),
    (0x1D4AE, 0x1D4B9, W::ALetter), (0x1D4BB, 0x1D4BB, W::ALetter), (0x1D4BD, 0x1D4C3, W::ALetter),
    (0x1D4C5, 0x1D505, W::ALetter), (0x1D507, 0x1D50A, W::ALetter), (0x1D50D, 0x1D514, W::ALetter),
    (0x1D516, 0x1D51C, W::ALetter), (0x1D51E, 0x1D539, W::ALetter), (0x1D53B, 0x1D53E, W::ALetter),
    (0x1D540, 0x1D544, W::ALetter), (0x1D546, 0x1D546, W::ALetter), (0x1D54A, 0x1D550, W::ALetter),
    (0x1D552, 0x1D6A5, W::ALetter), (0x1D6A8, 0x1D6C0, W::ALetter), (0x1D6C2, 0x1D6DA, W::ALetter),
    (0x1D6DC, 0x1D6FA, W::ALetter), (0x1D6FC, 0x1D714, W::ALetter), (0x1D716, 0x1D734, W::ALetter),
    (0x1D736, 0x1D74E, W::ALetter), (0x1D750, 0x1D76E, W::ALetter), (0x1D770, 0x1D788, W::ALetter),
    (0x1D78A, 0x1D7A8, W::ALetter), (0x1D7AA, 0x1D7C2, W::ALetter), (0x1D7C4, 0x1D7CB, W::ALetter),
    (0x1D7CE, 0x1D7FF, W::Numeric), (0x1DA00, 0x1DA36, W::Extend), (0x1DA3B, 0x1DA6C, W::Extend),
    (0x1DA75, 0x1DA75, W::Extend), (0x1DA84, 0x1DA84, W::Extend), (0x1DA9B, 0x1DA9F, W::Extend),
    (0x1DAA1, 0x1DAAF, W::Extend), (0x1DF00, 0x1DF1E, W::ALetter), (0x1DF25, 0x1DF2A, W::ALetter),
    (0x1E000, 0x1E006, W::Extend), (0x1E008, 0x1E018, W::Extend), (0x1E01B, 0x1E021, W::Extend),
    (0x1E023, 0x1E024, W::Extend), (0x1E026, 0x1E02A, W::Extend), (0x1E030, 0x1E06D, W::ALetter),
    (0x1E08F, 0x1E08F, W::Extend), (0x1E100, 0x1E12C, W::ALetter), (0x1E130, 0x1E136, W::Extend),
    (0x1E137, 0x1E13D, W::ALetter), (0x1E140, 0x1E149, W::Numeric), (0x1E14E, 0x1E14E, W::ALetter),
    (0x1E290, 0x1E2AD, W::ALetter), (0x1E2AE, 0x1E2AE, W::Extend), (0x1E2C0, 0x1E2EB, W::ALetter),
    (0x1E2EC, 0x1E2EF, W::Extend), (0x1E2F0, 0x1E2F9, W::Numeric), (0x1E4D0, 0x1E4EB, W::ALetter),
    (0x1E4EC, 0x1E4EF, W::Extend), (0x1E4F0, 0x1E4F9, W::Numeric), (0x1E5D0, 0x1E5ED, W::ALetter),
    (0x1E5EE, 0x1E5EF, W::Extend), (0x1E5F0, 0x1E5F0, W::ALetter), (0x1E5F1, 0x1E5FA, W::Numeric),
    (0x1E6C0, 0x1E6DE, W::ALetter), (0x1E6E0, 0x1E6E2, W::ALetter), (0x1E6E3, 0x1E6E3, W::Extend),
    (0x1E6E4, 0x1E6E5, W::ALetter), (0x1E6E6, 0x1E6E6, W::Extend), (0x1E6E7, 0x1E6ED, W::ALetter),
    (0x1E6EE, 0x1E6EF, W::Extend), (0x1E6F0, 0x1E6F4, W::ALetter), (0x1E6F5, 0x1E6F5, W::Extend),
    (0x1E6FE, 0x1E6FF, W::ALetter), (0x1E7E0, 0x1E7E6, W::ALetter), (0x1E7E8, 0x1E7EB, W::ALetter),
    (0x1E7ED, 0x1E7EE, W::ALetter), (0x1E7F0, 0x1E7FE, W::ALetter), (0x1E800, 0x1E8C4, W::ALetter),
    (0x1E8D0, 0x1E8D6, W::Extend), (0x1E900, 0x1E943, W::ALetter), (0x1E944, 0x1E94A, W::Extend),
    (0x1E94B, 0x1E94B, W::ALetter), (0x1E950, 0x1E959, W::Numeric), (0x1EE00, 0x1EE03, W::ALetter),
    (0x1EE05, 0x1EE1F, W::ALetter), (0x1EE21, 0x1EE22, W::ALetter), (0x1EE24, 0x1EE24, W::ALetter),
    (0x1EE27, 0x1EE27, W::ALetter), (0x1EE29, 0x1EE32, W::ALetter), (0x1EE34, 0x1EE37, W::ALetter),
    (0x1EE39, 0x1EE39, W::ALetter), (0x1EE3B, 0x1EE3B, W::ALetter), (0x1EE42, 0x1EE42, W::ALetter),
    (0x1EE47, 0x1EE47, W::ALetter), (0x1EE49, 0x1EE49, W::ALetter), (0x1EE4B, 0x1EE4B, W::ALetter),
    (0x1EE4D, 0x1EE4F, W::ALetter), (0x1EE51, 0x1EE52, W::ALetter), (0x1EE54, 0x1EE54, W::ALetter),
    (0x1EE57, 0x1EE57, W::ALetter), (0x1EE59, 0x1EE59, W::ALetter), (0x1EE5B, 0x1EE5B, W::ALetter),
    (0x1EE5D, 0x1EE5D, W::ALetter), (0x1EE5F, 0x1EE5F, W::ALetter), (0x1EE61, 0x1EE62, W::ALetter),
    (0x1EE64, 0x1EE64, W::ALetter), (0x1EE67, 0x1EE6A, W::ALetter), (0x1EE6C, 0x1EE72, W::ALetter),
    (0x1EE74, 0x1EE77, W::ALetter), (0x1EE79, 0x1EE7C, W::ALetter), (0x1EE7E, 0x1EE7E, W::ALetter),
    (0x1EE80, 0x1EE89, W::ALetter), (0x1EE8B, 0x1EE9B, W::ALetter), (0x1EEA1, 0x1EEA3, W::ALetter),
    (0x1EEA5, 0x1EEA9, W::ALetter), (0x1EEAB, 0x1EEBB, W::ALetter), (0x1F130, 0x1F149, W::ALetter),
    (0x1F150, 0x1F169, W::ALetter), (0x1F170, 0x1F189, W::ALetter), (0x1F1E6, 0x1F1FF, W::RegionalIndicator),
    (0x1F3FB, 0x1F3FF, W::Extend), (0x1FBF0, 0x1FBF9, W::Numeric), (0xE0001, 0xE0001, W::Format),
    (0xE0020, 0xE007F, W::Extend), (0xE0100, 0xE01EF, W::Extend),
];

/// `Sentence_Break` property.
#[rustfmt::skip]
pub(crate) static SENTENCE_BREAK: &[(u32, u32, S)] = &[
    (0x0009, 0x0009, S::Sp), (0x000A, 0x000A, S::LF), (0x000B, 0x000C, S::Sp),
    (0x000D, 0x000D, S::CR), (0x0020, 0x0020, S::Sp), (0x0021, 0x0021, S::STerm),
    (0x0022, 0x0022, S::Close), (0x0027, 0x0029, S::Close), (0x002C, 0x002D, S::SContinue),
    (0x002E, 0x002E, S::ATerm), (0x0030, 0x0039, S::Numeric), (0x003A, 0x003B, S::SContinue),
    (0x003F, 0x003F, S::STerm), (0x0041, 0x005A, S::Upper), (0x005B, 0x005B, S::Close),
    (0x005D, 0x005D, S::Close), (0x0061, 0x007A, S::Lower), (0x007B, 0x007B, S::Close),
    (0x007D, 0x007D, S::Close), (0x0085, 0x0085, S::Sep), (0x00A0, 0x00A0, S::Sp),
    (0x00AA, 0x00AA, S::Lower), (0x00AB, 0x00AB, S::Close), (0x00AD, 0x00AD, S::Format),
    (0x00B5, 0x00B5, S::Lower), (0x00BA, 0x00BA, S::Lower), (0x00BB, 0x00BB, S::Close),
    (0x00C0, 0x00D6, S::Upper), (0x00D8, 0x00DE, S::Upper), (0x00DF, 0x00F6, S::Lower),
    (0x00F8, 0x00FF, S::Lower), (0x0100, 0x0100, S::Upper), (0x0101, 0x0101, S::Lower),
    (0x0102, 0x0102, S::Upper), (0x0103, 0x0103, S::Lower), (0x0104, 0x0104, S::Upper),
    (0x0105, 0x0105, S::Lower), (0x0106, 0x0106, S::Upper), (0x0107, 0x0107, S::Lower),
    (0x0108, 0x0108, S::Upper), (0x0109, 0x0109, S::Lower), (0x010A, 0x010A, S::Upper),
    (0x010B, 0x010B, S::Lower), (0x010C, 0x010C, S::Upper), (0x010D, 0x010D, S::Lower),
    (0x010E, 0x010E, S::Upper), (0x010F, 0x010F, S::Lower), (0x0110, 0x0110, S::Upper),
    (0x0111, 0x0111, S::Lower), (0x0112, 0x0112, S::Upper), (0x0113, 0x0113, S::Lower),
    (0x0114, 0x0114, S::Upper), (0x0115, 0x0115, S::Lower), (0x0116, 0x0116, S::Upper),
    (0x0117, 0x0117, S::Lower), (0x0118, 0x0118, S::Upper), (0x0119, 0x0119, S::Lower),
    (0x011A, 0x011A, S::Upper), (0x011B, 0x011B, S::Lower), (0x011C, 0x011C, S::Upper),
    (0x011D, 0x011D, S::Lower), (0x011E, 0x011E, S::Upper), (0x011F, 0x011F, S::Lower),
    (0x0120, 0x0120, S::Upper), (0x0121, 0x0121, S::Lower), (0x0122, 0x0122, S::Upper),
    (0x0123, 0x0123, S::Lower), (0x0124, 0x0124, S::Upper), (0x0125, 0x0125, S::Lower),
    (0x0126, 0x0126, S::Upper), (0x0127, 0x0127, S::Lower), (0x0128, 0x0128, S::Upper),
    (0x0129, 0x0129, S::Lower), (0x012A, 0x012A, S::Upper), (0x012B, 0x012B, S::Lower),
    (0x012C, 0x012C, S::Upper), (0x012D, 0x012D, S::Lower), (0x012E, 0x012E, S::Upper),
    (0x012F, 0x012F, S::Lower), (0x0130, 0x0130, S::Upper), (0x0131, 0x0131, S::Lower),
    (0x0132, 0x0132, S::Upper), (0x0133, 0x0133, S::Lower), (0x0134, 0x0134, S::Upper),
    (0x0135, 0x0135, S::Lower), (0x0136, 0x0136, S::Upper), (0x0137, 0x0138, S::Lower),
    (0x0139, 0x0139, S::Upper), (0x013A, 0x013A, S::Lower), (0x013B, 0x013B, S::Upper),
    (0x013C, 0x013C, S::Lower), (0x013D, 0x013D, S::Upper), (0x013E, 0x013E, S::Lower),
    (0x013F, 0x013F, S::Upper), (0x0140, 0x0140, S::Lower), (0x0141, 0x0141, S::Upper),
    (0x0142, 0x0142, S::Lower), (0x0143, 0x0143, S::Upper), (0x0144, 0x0144, S::Lower),
    (0x0145, 0x0145, S::Upper), (0x0146, 0x0146, S::Lower), (0x0147, 0x0147, S::Upper),
    (0x0148, 0x0149, S::Lower), (0x014A, 0x014A, S::Upper), (0x014B, 0x014B, S::Lower),
    (0x014C, 0x014C, S::Upper), (0x014D, 0x014D, S::Lower), (0x014E, 0x014E, S::Upper),
    (0x014F, 0x014F, S::Lower), (0x0150, 0x0150, S::Upper), (0x0151, 0x0151, S::Lower),
    (0x0152, 0x0152, S::Upper), (0x0153, 0x0153, S::Lower), (0x0154, 0x0154, S::Upper),
    (0x0155, 0x0155, S::Lower), (0x0156, 0x0156, S::Upper), (0x0157, 0x0157, S::Lower),
    (0x0158, 0x0158, S::Upper), (0x0159, 0x0159, S::Lower), (0x015A, 0x015A, S::Upper),
    (0x015B, 0x015B, S::Lower), (0x015C, 0x015C, S::Upper), (0x015D, 0x015D, S::Lower),
    (0x015E, 0x015E, S::Upper), (0x015F, 0x015F, S::Lower), (0x0160, 0x0160, S::Upper),
    (0x0161, 0x0161, S::Lower), (0x0162, 0x0162, S::Upper), (0x0163, 0x0163, S::Lower),
    (0x0164, 0x0164, S::Upper), (0x0165, 0x0165, S::Lower), (0x0166, 0x0166, S::Upper),
    (0x0167, 0x0167, S::Lower), (0x0168, 0x0168, S::Upper), (0x0169, 0x0169, S::Lower),
    (0x016A, 0x016A, S::Upper), (0x016B, 0x016B, S::Lower), (0x016C, 0x016C, S::Upper),
    (0x016D, 0x016D, S::Lower), (0x016E, 0x016E, S::Upper), (0x016F, 0x016F, S::Lower),
    (0x0170, 0x0170, S::Upper), (0x0171, 0x0171, S::Lower), (0x0172, 0x0172, S::Upper),
    (0x0173, 0x0173, S::Lower), (0x0174, 0x0174, S::Upper), (0x0175, 0x0175, S::Lower),
    (0x0176, 0x0176, S::Upper), (0x0177, 0x0177, S::Lower), (0x0178, 0x0179, S::Upper),
    (0x017A, 0x017A, S::Lower), (0x017B, 0x017B, S::Upper), (0x017C, 0x017C, S::Lower),
    (0x017D, 0x017D, S::Upper), (0x017E, 0x0180, S::Lower), (0x0181, 0x0182, S::Upper),
    (0x0183, 0x0183, S::Lower), (0x0184, 0x0184, S::Upper), (0x0185, 0x0185, S::Lower),
    (0x0186, 0x0187, S::Upper), (0x0188, 0x0188, S::Lower), (0x0189, 0x018B, S::Upper),
    (0x018C, 0x018D, S::Lower), (0x018E, 0x0191, S::Upper), (0x0192, 0x0192, S::Lower),
    (0x0193, 0x0194, S::Upper), (0x0195, 0x0195, S::Lower), (0x0196, 0x0198, S::Upper),
    (0x0199, 0x019B, S::Lower), (0x019C, 0x019D, S::Upper), (0x019E, 0x019E, S::Lower),
    (0x019F, 0x01A0, S::Upper), (0x01A1, 0x01A1, S::Lower), (0x01A2, 0x01A2, S::Upper),
    (0x01A3, 0x01A3, S::Lower), (0x01A4, 0x01A4, S::Upper), (0x01A5, 0x01A5, S::Lower),
    (0x01A6, 0x01A7, S::Upper), (0x01A8, 0x01A8, S::Lower), (0x01A9, 0x01A9, S::Upper),
    (0x01AA, 0x01AB, S::Lower), (0x01AC, 0x01AC, S::Upper), (0x01AD, 0x01AD, S::Lower),
    (0x01AE, 0x01AF, S::Upper), (0x01B0, 0x01B0, S::Lower), (0x01B1, 0x01B3, S::Upper),
    (0x01B4, 0x01B4, S::Lower), (0x01B5, 0x01B5, S::Upper), (0x01B6, 0x01B6, S::Lower),
    (0x01B7, 0x01B8, S::Upper), (0x01B9, 0x01BA, S::Lower), (0x01BB, 0x01BB, S::OLetter),
    (0x01BC, 0x01BC, S::Upper), (0x01BD, 0x01BF, S::Lower), (0x01C0, 0x01C3, S::OLetter),
    (0x01C4, 0x01C5, S::Upper), (0x01C6, 0x01C6, S::Lower), (0x01C7, 0x01C8, S::Upper),
    (0x01C9, 0x01C9, S::Lower), (0x01CA, 0x01CB, S::Upper), (0x01CC, 0x01CC, S::Lower),
    (0x01CD, 0x01CD, S::Upper), (0x01CE, 0x01CE, S::Lower), (0x01CF, 0x01CF, S::Upper),
    (0x01D0, 0x01D0, S::Lower), (0x01D1, 0x01D1, S::Upper), (0x01D2, 0x01D2, S::Lower),
    (0x01D3, 0x01D3, S::Upper), (0x01D4, 0x01D4, S::Lower), (0x01D5, 0x01D5, S::Upper),
    (0x01D6, 0x01D6, S::Lower), (0x01D7, 0x01D7, S::Upper), (0x01D8, 0x01D8, S::Lower),
    (0x01D9, 0x01D9, S::Upper), (0x01DA, 0x01DA, S::Lower), (0x01DB, 0x01DB, S::Upper),
    (0x01DC, 0x01DD, S::Lower), (0x01DE, 0x01DE, S::Upper), (0x01DF, 0x01DF, S::Lower),
    (0x01E0, 0x01E0, S::Upper), (0x01E1, 0x01E1, S::Lower), (0x01E2, 0x01E2, S::Upper),
    (0x01E3, 0x01E3, S::Lower), (0x01E4, 0x01E4, S::Upper), (0x01E5, 0x01E5, S::Lower),
    (0x01E6, 0x01E6, S::Upper), (0x01E7, 0x01E7, S::Lower), (0x01E8, 0x01E8, S::Upper),
    (0x01E9, 0x01E9, S::Lower), (0x01EA, 0x01EA, S::Upper), (0x01EB, 0x01EB, S::Lower),
    (0x01EC, 0x01EC, S::Upper), (0x01ED, 0x01ED, S::Lower), (0x01EE, 0x01EE, S::Upper),
    (0x01EF, 0x01F0, S::Lower), (0x01F1, 0x01F2, S::Upper), (0x01F3, 0x01F3, S::Lower),
    (0x01F4, 0x01F4, S::Upper), (0x01F5, 0x01F5, S::Lower), (0x01F6, 0x01F8, S::Upper),
    (0x01F9, 0x01F9, S::Lower), (0x01FA, 0x01FA, S::Upper), (0x01FB, 0x01FB, S::Lower),
    (0x01FC, 0x01FC, S::Upper), (0x01FD, 0x01FD, S::Lower), (0x01FE, 0x01FE, S::Upper),
    (0x01FF, 0x01FF, S::Lower), (0x0200, 0x0200, S::Upper), (0x0201, 0x0201, S::Lower),
    (0x0202, 0x0202, S::Upper), (0x0203, 0x0203, S::Lower), (0x0204, 0x0204, S::Upper),
    (0x0205, 0x0205, S::Lower), (0x0206, 0x0206, S::Upper), (0x0207, 0x0207, S::Lower),
    (0x0208, 0x0208, S::Upper), (0x0209, 0x0209, S::Lower), (0x020A, 0x020A, S::Upper),
    (0x020B, 0x020B, S::Lower), (0x020C, 0x020C, S::Upper), (0x020D, 0x020D, S::Lower),
    (0x020E, 0x020E, S::Upper), (0x020F, 0x020F, S::Lower), (0x0210, 0x0210, S::Upper),
    (0x0211, 0x0211, S::Lower), (0x0212, 0x0212, S::Upper), (0x0213, 0x0213, S::Lower),
    (0x0214, 0x0214, S::Upper), (0x0215, 0x0215, S::Lower), (0x0216, 0x0216, S::Upper),
    (0x0217, 0x0217, S::Lower), (0x0218, 0x0218, S::Upper), (0x0219, 0x0219, S::Lower),
    (0x021A, 0x021A, S::Upper), (0x021B, 0x021B, S::Lower), (0x021C, 0x021C, S::Upper),
    (0x021D, 0x021D, S::Lower), (0x021E, 0x021E, S::Upper), (0x021F, 0x021F, S::Lower),
    (0x0220, 0x0220, S::Upper), (0x0221, 0x0221, S::Lower), (0x0222, 0x0222, S::Upper),
    (0x0223, 0x0223, S::Lower), (0x0224, 0x0224, S::Upper), (0x0225, 0x0225, S::Lower),
    (0x0226, 0x0226, S::Upper), (0x0227, 0x0227, S::Lower), (0x0228, 0x0228, S::Upper),
    (0x0229, 0x0229, S::Lower), (0x022A, 0x022A, S::Upper), (0x022B, 0x022B, S::Lower),
    (0x022C, 0x022C, S::Upper), (0x022D, 0x022D, S::Lower), (0x022E, 0x022E, S::Upper),
    (0x022F, 0x022F, S::Lower), (0x0230, 0x0230, S::Upper), (0x0231, 0x0231, S::Lower),
    (0x0232, 0x0232, S::Upper), (0x0233, 0x0239, S::Lower), (0x023A, 0x023B, S::Upper),
    (0x023C, 0x023C, S::Lower), (0x023D, 0x023E, S::Upper), (0x023F, 0x0240, S::Lower),
    (0x0241, 0x0241, S::Upper), (0x0242, 0x0242, S::Lower), (0x0243, 0x0246, S::Upper),
    (0x0247, 0x0247, S::Lower), (0x0248, 0x0248, S::Upper), (0x0249, 0x0249, S::Lower),
    (0x024A, 0x024A, S::Upper), (0x024B, 0x024B, S::Lower), (0x024C, 0x024C, S::Upper),
    (0x024D, 0x024D, S::Lower), (0x024E, 0x024E, S::Upper), (0x024F, 0x0293, S::Lower),
    (0x0294, 0x0295, S::OLetter), (0x0296, 0x02B8, S::Lower), (0x02B9, 0x02BF, S::OLetter),
    (0x02C0, 0x02C1, S::Lower), (0x02C6, 0x02D1, S::OLetter), (0x02E0, 0x02E4, S::Lower),
    (0x02EC, 0x02EC, S::OLetter), (0x02EE, 0x02EE, S::OLetter), (0x0300, 0x036F, S::Extend),
    (0x0370, 0x0370, S::Upper), (0x0371, 0x0371, S::Lower), (0x0372, 0x0372, S::Upper),
    (0x0373, 0x0373, S::Lower), (0x0374, 0x0374, S::OLetter), (0x0376, 0x0376, S::Upper),
    (0x0377, 0x0377, S::Lower), (0x037A, 0x037D, S::Lower), (0x037E, 0x037E, S::SContinue),
    (0x037F, 0x037F, S::Upper), (0x0386, 0x0386, S::Upper), (0x0388, 0x038A, S::Upper),
    (0x038C, 0x038C, S::Upper), (0x038E, 0x038F, S::Upper), (0x0390, 0x0390, S::Lower),
    (0x0391, 0x03A1, S::Upper), (0x03A3, 0x03AB, S::Upper), (0x03AC, 0x03CE, S::Lower),
    (0x03CF, 0x03CF, S::Upper), (0x03D0, 0x03D1, S::Lower), (0x03D2, 0x03D4, S::Upper),
    (0x03D5, 0x03D7, S::Lower), (0x03D8, 0x03D8, S::Upper), (0x03D9, 0x03D9, S::Lower),
    (0x03DA, 0x03DA, S::Upper), (0x03DB, 0x03DB, S::Lower), (0x03DC, 0x03DC, S::Upper),
    (0x03DD, 0x03DD, S::Lower), (0x03DE, 0x03DE, S::Upper), (0x03DF, 0x03DF, S::Lower),
    (0x03E0, 0x03E0, S::Upper), (0x03E1, 0x03E1, S::Lower), (0x03E2, 0x03E2, S::Upper),
    (0x03E3, 0x03E3, S::Lower), (0x03E4, 0x03E4, S::Upper), (0x03E5, 0x03E5, S::Lower),
    (0x03E6, 0x03E6, S::Upper), (0x03E7, 0x03E7, S::Lower), (0x03E8, 0x03E8, S::Upper),
    (0x03E9, 0x03E9, S::Lower), (0x03EA, 0x03EA, S::Upper), (0x03EB, 0x03EB, S::Lower),
    (0x03EC, 0x03EC, S::Upper), (0x03ED, 0x03ED, S::Lower), (0x03EE, 0x03EE, S::Upper),
    (0x03EF, 0x03F3, S::Lower), (0x03F4, 0x03F4, S::Upper), (0x03F5, 0x03F5, S::Lower),
    (0x03F7, 0x03F7, S::Upper), (0x03F8, 0x03F8, S::Lower), (0x03F9, 0x03FA, S::Upper),
    (0x03FB, 0x03FC, S::Lower), (0x03FD, 0x042F, S::Upper), (0x0430, 0x045F, S::Lower),
    (0x0460, 0x0460, S::Upper), (0x0461, 0x0461, S::Lower), (0x0462, 0x0462, S::Upper),
    (0x0463, 0x0463, S::Lower), (0x0464, 0x0464, S::Upper), (0x0465, 0x0465, S::Lower),
    (0x0466, 0x0466, S::Upper), (0x0467, 0x0467, S::Lower), (0x0468, 0x0468, S::Upper),
    (0x0469, 0x0469, S::Lower), (0x046A, 0x046A, S::Upper), (0x046B, 0x046B, S::Lower),
    (0x046C, 0x046C, S::Upper), (0x046D, 0x046D, S::Lower), (0x046E, 0x046E, S::Upper),
    (0x046F, 0x046F, S::Lower), (0x0470, 0x0470, S::Upper), (0x0471, 0x0471, S::Lower),
    (0x0472, 0x0472, S::Upper), (0x0473, 0x0473, S::Lower), (0x0474, 0x0474, S::Upper),
    (0x0475, 0x0475, S::Lower), (0x0476, 0x0476, S::Upper), (0x0477, 0x0477, S::Lower),
    (0x0478, 0x0478, S::Upper), (0x0479, 0x0479, S::Lower), (0x047A, 0x047A, S::Upper),
    (0x047B, 0x047B, S::Lower), (0x047C, 0x047C, S::Upper), (0x047D, 0x047D, S::Lower),
    (0x047E, 0x047E, S::Upper), (0x047F, 0x047F, S::Lower), (0x0480, 0x0480, S::Upper),
    (0x0481, 0x0481, S::Lower), (0x0483, 0x0489, S::Extend), (0x048A, 0x048A, S::Upper),
    (0x048B, 0x048B, S::Lower), (0x048C, 0x048C, S::Upper), (0x048D, 0x048D, S::Lower),
    (0x048E, 0x048E, S::Upper), (0x048F, 0x048F, S::Lower), (0x0490, 0x0490, S::Upper),
    (0x0491, 0x0491, S::Lower), (0x0492, 0x0492, S::Upper), (0x0493, 0x0493, S::Lower),
    (0x0494, 0x0494, S::Upper), (0x0495, 0x0495, S::Lower), (0x0496, 0x0496, S::Upper),
    (0x0497, 0x0497, S::Lower), (0x0498, 0x0498, S::Upper), (0x0499, 0x0499, S::Lower),
    (0x049A, 0x049A, S::Upper), (0x049B, 0x049B, S::Lower), (0x049C, 0x049C, S::Upper),
    (0x049D, 0x049D, S::Lower), (0x049E, 0x049E, S::Upper), (0x049F, 0x049F, S::Lower),
    (0x04A0, 0x04A0, S::Upper), (0x04A1, 0x04A1, S::Lower), (0x04A2, 0x04A2, S::Upper),
    (0x04A3, 0x04A3, S::Lower), (0x04A4, 0x04A4, S::Upper), (0x04A5, 0x04A5, S::Lower),
    (0x04A6, 0x04A6, S::Upper), (0x04A7, 0x04A7, S::Lower), (0x04A8, 0x04A8, S::Upper),
    (0x04A9, 0x04A9, S::Lower), (0x04AA, 0x04AA, S::Upper), (0x04AB, 0x04AB, S::Lower),
    (0x04AC, 0x04AC, S::Upper), (0x04AD, 0x04AD, S::Lower), (0x04AE, 0x04AE, S::Upper),
    (0x04AF, 0x04AF, S::Lower), (0x04B0, 0x04B0, S::Upper), (0x04B1, 0x04B1, S::Lower),
    (0x04B2, 0x04B2, S::Upper), (0x04B3, 0x04B3, S::Lower), (0x04B4, 0x04B4, S::Upper),
    (0x04B5, 0x04B5, S::Lower), (0x04B6, 0x04B6, S::Upper), (0x04B7, 0x04B7, S::Lower),
    (0x04B8, 0x04B8, S::Upper), (0x04B9, 0x04B9, S::Lower), (0x04BA, 0x04BA, S::Upper),
    (0x04BB, 0x04BB, S::Lower), (0x04BC, 0x04BC, S::Upper), (0x04BD, 0x04BD, S::Lower),
    (0x04BE, 0x04BE, S::Upper), (0x04BF, 0x04BF, S::Lower), (0x04C0, 0x04C1, S::Upper),
    (0x04C2, 0x04C2, S::Lower), (0x04C3, 0x04C3, S::Upper), (0x04C4, 0x04C4, S::Lower),
    (0x04C5, 0x04C5, S::Upper), (0x04C6, 0x04C6, S::Lower), (0x04C7, 0x04C7, S::Upper),
    (0x04C8, 0x04C8, S::Lower), (0x04C9, 0x04C9, S::Upper), (0x04CA, 0x04CA, S::Lower),
    (0x04CB, 0x04CB, S::Upper), (0x04CC, 0x04CC, S::Lower), (0x04CD, 0x04CD, S::Upper),
    (0x04CE, 0x04CF, S::Lower), (0x04D0, 0x04D0, S::Upper), (0x04D1, 0x04D1, S::Lower),
    (0x04D2, 0x04D2, S::Upper), (0x04D3, 0x04D3, S::Lower), (0x04D4, 0x04D4, S::Upper),
    (0x04D5, 0x04D5, S::Lower), (0x04D6, 0x04D6, S::Upper), (0x04D7, 0x04D7, S::Lower),
    (0x04D8, 0x04D8, S::Upper), (0x04D9, 0x04D9, S::Lower), (0x04DA, 0x04DA, S::Upper),
    (0x04DB, 0x04DB, S::Lower), (0x04DC, 0x04DC, S::Upper), (0x04DD, 0x04DD, S::Lower),
    (0x04DE, 0x04DE, S::Upper), (0x04DF, 0x04DF, S::Lower), (0x04E0, 0x04E0, S::Upper),
    (0x04E1, 0x04E1, S::Lower), (0x04E2, 0x04E2, S::Upper), (0x04E3, 0x04E3, S::Lower),
    (0x04E4, 0x04E4, S::Upper), (0x04E5, 0x04E5, S::Lower), (0x04E6, 0x04E6, S::Upper),
    (0x04E7, 0x04E7, S::Lower), (0x04E8, 0x04E8, S::Upper), (0x04E9, 0x04E9, S::Lower),
    (0x04EA, 0x04EA, S::Upper), (0x04EB, 0x04EB, S::Lower), (0x04EC, 0x04EC, S::Upper),
    (0x04ED, 0x04ED, S::Lower), (0x04EE, 0x04EE, S::Upper), (0x04EF, 0x04EF, S::Lower),
    (0x04F0, 0x04F0, S::Upper), (0x04F1, 0x04F1, S::Lower), (0x04F2, 0x04F2, S::Upper),
    (0x04F3, 0x04F3, S::Lower), (0x04F4, 0x04F4, S::Upper), (0x04F5, 0x04F5, S::Lower),
    (0x04F6, 0x04F6, S::Upper), (0x04F7, 0x04F7, S::Lower), (0x04F8, 0x04F8, S::Upper),
    (0x04F9, 0x04F9, S::Lower), (0x04FA, 0x04FA, S::Upper), (0x04FB, 0x04FB, S::Lower),
    (0x04FC, 0x04FC, S::Upper), (0x04FD, 0x04FD, S::Lower), (0x04FE, 0x04FE, S::Upper),
    (0x04FF, 0x04FF, S::Lower), (0x0500, 0x0500, S::Upper), (0x0501, 0x0501, S::Lower),
    (0x0502, 0x0502, S::Upper), (0x0503, 0x0503, S::Lower), (0x0504, 0x0504, S::Upper),
    (0x0505, 0x0505, S::Lower), (0x0506, 0x0506, S::Upper), (0x0507, 0x0507, S::Lower),
    (0x0508, 0x0508, S::Upper), (0x0509, 0x0509, S::Lower), (0x050A, 0x050A, S::Upper),
    (0x050B, 0x050B, S::Lower), (0x050C, 0x050C, S::Upper), (0x050D, 0x050D, S::Lower),
    (0x050E, 0x050E, S::Upper), (0x050F, 0x050F, S::Lower), (0x0510, 0x0510, S::Upper),
    (0x0511, 0x0511, S::Lower), (0x0512, 0x0512, S::Upper), (0x0513, 0x0513, S::Lower),
    (0x0514, 0x0514, S::Upper), (0x0515, 0x0515, S::Lower), (0x0516, 0x0516, S::Upper),
    (0x0517, 0x0517, S::Lower), (0x0518, 0x0518, S::Upper), (0x0519, 0x0519, S::Lower),
    (0x051A, 0x051A, S::Upper), (0x051B, 0x051B, S::Lower), (0x051C, 0x051C, S::Upper),
    (0x051D, 0x051D, S::Lower), (0x051E, 0x051E, S::Upper), (0x051F, 0x051F, S::Lower),
    (0x0520, 0x0520, S::Upper), (0x0521, 0x0521, S::Lower), (0x0522, 0x0522, S::Upper),
    (0x0523, 0x0523, S::Lower), (0x0524, 0x0524, S::Upper), (0x0525, 0x0525, S::Lower),
    (0x0526, 0x0526, S::Upper), (0x0527, 0x0527, S::Lower), (0x0528, 0x0528, S::Upper),
    (0x0529, 0x0529, S::Lower), (0x052A, 0x052A, S::Upper), (0x052B, 0x052B, S::Lower),
    (0x052C, 0x052C, S::Upper), (0x052D, 0x052D, S::Lower), (0x052E, 0x052E, S::Upper),
    (0x052F, 0x052F, S::Lower), (0x0531, 0x0556, S::Upper), (0x0559, 0x0559, S::OLetter),
    (0x055D, 0x055D, S::SContinue), (0x0560, 0x0588, S::Lower), (0x0589, 0x0589, S::STerm),
    (0x0591, 0x05BD, S::Extend), (0x05BF, 0x05BF, S::Extend), (0x05C1, 0x05C2, S::Extend),
    (0x05C4, 0x05C5, S::Extend), (0x05C7, 0x05C7, S::Extend), (0x05D0, 0x05EA, S::OLetter),
    (0x05EF, 0x05F3, S::OLetter), (0x0600, 0x0605, S::Numeric), (0x060C, 0x060D, S::SContinue),
    (0x0610, 0x061A, S::Extend), (0x061C, 0x061C, S::Format), (0x061D, 0x061F, S::STerm),
    (0x0620, 0x064A, S::OLetter), (0x064B, 0x065F, S::Extend), (0x0660, 0x0669, S::Numeric),
    (0x066B, 0x066C, S::Numeric), (0x066E, 0x066F, S::OLetter), (0x0670, 0x0670, S::Extend),
    (0x0671, 0x06D3, S::OLetter), (0x06D4, 0x06D4, S::STerm), (0x06D5, 0x06D5, S::OLetter),
    (0x06D6, 0x06DC, S::Extend), (0x06DD, 0x06DD, S::Numeric), (0x06DF, 0x06E4, S::Extend),
    (0x06E5, 0x06E6, S::OLetter), (0x06E7, 0x06E8, S::Extend), (0x06EA, 0x06ED, S::Extend),
    (0x06EE, 0x06EF, S::OLetter), (0x06F0, 0x06F9, S::Numeric), (0x06FA, 0x06FC, S::OLetter),
    (0x06FF, 0x06FF, S::OLetter), (0x0700, 0x0702, S::STerm), (0x070F, 0x070F, S::Format),
    (0x0710, 0x0710, S::OLetter), (0x0711, 0x0711, S::Extend), (0x0712, 0x072F, S::OLetter),
    (0x0730, 0x074A, S::Extend), (0x074D, 0x07A5, S::OLetter), (0x07A6, 0x07B0, S::Extend),
    (0x07B1, 0x07B1, S::OLetter), (0x07C0, 0x07C9, S::Numeric), (0x07CA, 0x07EA, S::OLetter),
    (0x07EB, 0x07F3, S::Extend), (0x07F4, 0x07F5, S::OLetter), (0x07F8, 0x07F8, S::SContinue),
    (0x07F9, 0x07F9, S::STerm), (0x07FA, 0x07FA, S::OLetter), (0x07FD, 0x07FD, S::Extend),
    (0x0800, 0x0815, S::OLetter), (0x0816, 0x0819, S::Extend), (0x081A, 0x081A, S::OLetter),
    (0x081B, 0x0823, S::Extend), (0x0824, 0x0824, S::OLetter), (0x0825, 0x0827, S::Extend),
    (0x0828, 0x0828, S::OLetter), (0x0829, 0x082D, S::Extend), (0x0837, 0x0837, S::STerm),
    (0x0839, 0x0839, S::STerm), (0x083D, 0x083E, S::STerm), (0x0840, 0x0858, S::OLetter),
    (0x0859, 0x085B, S::Extend), (0x0860, 0x086A, S::OLetter), (0x0870, 0x0887, S::OLetter),
    (0x0889, 0x088F, S::OLetter), (0x0890, 0x0891, S::Numeric), (0x0897, 0x089F, S::Extend),
    (0x08A0, 0x08C9, S::OLetter), (0x08CA, 0x08E1, S::Extend), (0x08E2, 0x08E2, S::Numeric),
    (0x08E3, 0x0903, S::Extend), (0x0904, 0x0939, S::OLetter), (0x093A, 0x093C, S::Extend),
    (0x093D, 0x093D, S::OLetter), (0x093E, 0x094F, S::Extend), (0x0950, 0x0950, S::OLetter),
    (0x0951, 0x0957, S::Extend), (0x0958, 0x0961, S::OLetter), (0x0962, 0x0963, S::Extend),
    (0x0964, 0x0965, S::STerm), (0x0966, 0x096F, S::Numeric), (0x0971, 0x0980, S::OLetter),
    (0x0981, 0x0983, S::Extend), (0x0985, 0x098C, S::OLetter), (0x098F, 0x0990, S::OLetter),
    (0x0993, 0x09A8, S::OLetter), (0x09AA, 0x09B0, S::OLetter), (0x09B2, 0x09B2, S::OLetter),
    (0x09B6, 0x09B9, S::OLetter), (0x09BC, 0x09BC, S::Extend), (0x09BD, 0x09BD, S::OLetter),
    (0x09BE, 0x09C4, S::Extend), (0x09C7, 0x09C8, S::Extend), (0x09CB, 0x09CD, S::Extend),
    (0x09CE, 0x09CE, S::OLetter), (0x09D7, 0x09D7, S::Extend), (0x09DC, 0x09DD, S::OLetter),
    (0x09DF, 0x09E1, S::OLetter), (0x09E2, 0x09E3, S::Extend), (0x09E6, 0x09EF, S::Numeric),
    (0x09F0, 0x09F1, S::OLetter), (0x09FC, 0x09FC, S::OLetter), (0x09FE, 0x09FE, S::Extend),
    (0x0A01, 0x0A03, S::Extend), (0x0A05, 0x0A0A, S::OLetter), (0x0A0F, 0x0A10, S::OLetter),
    (0x0A13, 0x0A28, S::OLetter), (0x0A2A, 0x0A30, S::OLetter), (0x0A32, 0x0A33, S::OLetter),
    (0x0A35, 0x0A36, S::OLetter), (0x0A38, 0x0A39, S::OLetter), (0x0A3C, 0x0A3C, S::Extend),
    (0x0A3E, 0x0A42, S::Extend), (0x0A47, 0x0A48, S::Extend), (0x0A4B, 0x0A4D, S::Extend),
    (0x0A51, 0x0A51, S::Extend), (0x0A59, 0x0A5C, S::OLetter), (0x0A5E, 0x0A5E, S::OLetter),
    (0x0A66, 0x0A6F, S::Numeric), (0x0A70, 0x0A71, S::Extend), (0x0A72, 0x0A74, S::OLetter),
    (0x0A75, 0x0A75, S::Extend), (0x0A81, 0x0A83, S::Extend), (0x0A85, 0x0A8D, S::OLetter),
    (0x0A8F, 0x0A91, S::OLetter), (0x0A93, 0x0AA8, S::OLetter), (0x0AAA, 0x0AB0, S::OLetter),
    (0x0AB2, 0x0AB3, S::OLetter), (0x0AB5, 0x0AB9, S::OLetter), (0x0ABC, 0x0ABC, S::Extend),
    (0x0ABD, 0x0ABD, S::OLetter), (0x0ABE, 0x0AC5, S::Extend), (0x0AC7, 0x0AC9, S::Extend),
    (0x0ACB, 0x0ACD, S::Extend), (0x0AD0, 0x0AD0, S::OLetter), (0x0AE0, 0x0AE1, S::OLetter),
    (0x0AE2, 0x0AE3, S::Extend), (0x0AE6, 0x0AEF, S::Numeric), (0x0AF9, 0x0AF9, S::OLetter),
    (0x0AFA, 0x0AFF, S::Extend), (0x0B01, 0x0B03, S::Extend), (0x0B05, 0x0B0C, S::OLetter),
    (0x0B0F, 0x0B10, S::OLetter), (0x0B13, 0x0B28, S::OLetter), (0x0B2A, 0x0B30, S::OLetter),
    (0x0B32, 0x0B33, S::OLetter), (0x0B35, 0x0B39, S::OLetter), (0x0B3C, 0x0B3C, S::Extend),
    (0x0B3D, 0x0B3D, S::OLetter), (0x0B3E, 0x0B44, S::Extend), (0x0B47, 0x0B48, S::Extend),
    (0x0B4B, 0x0B4D, S::Extend), (0x0B55, 0x0B57, S::Extend), (0x0B5C, 0x0B5D, S::OLetter),
    (0x0B5F, 0x0B61, S::OLetter), (0x0B62, 0x0B63, S::Extend), (0x0B66, 0x0B6F, S::Numeric),
    (0x0B71, 0x0B71, S::OLetter), (0x0B82, 0x0B82, S::Extend), (0x0B83, 0x0B83, S::OLetter),
    (0x0B85, 0x0B8A, S::OLetter), (0x0B8E, 0x0B90, S::OLetter), (0x0B92, 0x0B95, S::OLetter),
    (0x0B99, 0x0B9A, S::OLetter), (0x0B9C, 0x0B9C, S::OLetter), (0x0B9E, 0x0B9F, S::OLetter),
    (0x0BA3, 0x0BA4, S::OLetter), (0x0BA8, 0x0BAA, S::OLetter), (0x0BAE, 0x0BB9, S::OLetter),
    (0x0BBE, 0x0BC2, S::Extend), (0x0BC6, 0x0BC8, S::Extend), (0x0BCA, 0x0BCD, S::Extend),
    (0x0BD0, 0x0BD0, S::OLetter), (0x0BD7, 0x0BD7, S::Extend), (0x0BE6, 0x0BEF, S::Numeric),
    (0x0C00, 0x0C04, S::Extend), (0x0C05, 0x0C0C, S::OLetter), (0x0C0E, 0x0C10, S::OLetter),
    (0x0C12, 0x0C28, S::OLetter), (0x0C2A, 0x0C39, S::OLetter), (0x0C3C, 0x0C3C, S::Extend),
    (0x0C3D, 0x0C3D, S::OLetter), (0x0C3E, 0x0C44, S::Extend), (0x0C46, 0x0C48, S::Extend),
    (0x0C4A, 0x0C4D, S::Extend), (0x0C55, 0x0C56, S::Extend), (0x0C58, 0x0C5A, S::OLetter),
    (0x0C5C, 0x0C5D, S::OLetter), (0x0C60, 0x0C61, S::OLetter), (0x0C62, 0x0C63, S::Extend),
    (0x0C66, 0x0C6F, S::Numeric), (0x0C80, 0x0C80, S::OLetter), (0x0C81, 0x0C83, S::Extend),
    (0x0C85, 0x0C8C, S::OLetter), (0x0C8E, 0x0C90, S::OLetter), (0x0C92, 0x0CA8, S::OLetter),
    (0x0CAA, 0x0CB3, S::OLetter), (0x0CB5, 0x0CB9, S::OLetter), (0x0CBC, 0x0CBC, S::Extend),
    (0x0CBD, 0x0CBD, S::OLetter), (0x0CBE, 0x0CC4, S::Extend), (0x0CC6, 0x0CC8, S::Extend),
    (0x0CCA, 0x0CCD, S::Extend), (0x0CD5, 0x0CD6, S::Extend), (0x0CDC, 0x0CDE, S::OLetter),
    (0x0CE0, 0x0CE1, S::OLetter), (0x0CE2, 0x0CE3, S::Extend), (0x0CE6, 0x0CEF, S::Numeric),
    (0x0CF1, 0x0CF2, S::OLetter), (0x0CF3, 0x0CF3, S::Extend), (0x0D00, 0x0D03, S::Extend),
    (0x0D04, 0x0D0C, S::OLetter), (0x0D0E, 0x0D10, S::OLetter), (0x0D12, 0x0D3A, S::OLetter),
    (0x0D3B, 0x0D3C, S::Extend), (0x0D3D, 0x0D3D, S::OLetter), (0x0D3E, 0x0D44, S::Extend),
    (0x0D46, 0x0D48, S::Extend), (0x0D4A, 0x0D4D, S::Extend), (0x0D4E, 0x0D4E, S::OLetter),
    (0x0D54, 0x0D56, S::OLetter), (0x0D57, 0x0D57, S::Extend), (0x0D5F, 0x0D61, S::OLetter),
    (0x0D62, 0x0D63, S::Extend), (0x0D66, 0x0D6F, S::Numeric), (0x0D7A, 0x0D7F, S::OLetter),
    (0x0D81, 0x0D83, S::Extend), (0x0D85, 0x0D96, S::OLetter), (0x0D9A, 0x0DB1, S::OLetter),
    (0x0DB3, 0x0DBB, S::OLetter), (0x0DBD, 0x0DBD, S::OLetter), (0x0DC0, 0x0DC6, S::OLetter),
    (0x0DCA, 0x0DCA, S::Extend), (0x0DCF, 0x0DD4, S::Extend), (0x0DD6, 0x0DD6, S::Extend),
    (0x0DD8, 0x0DDF, S::Extend), (0x0DE6, 0x0DEF, S::Numeric), (0x0DF2, 0x0DF3, S::Extend),
    (0x0E01, 0x0E30, S::OLetter), (0x0E31, 0x0E31, S::Extend), (0x0E32, 0x0E33, S::OLetter),
    (0x0E34, 0x0E3A, S::Extend), (0x0E40, 0x0E46, S::OLetter), (0x0E47, 0x0E4E, S::Extend),
    (0x0E50, 0x0E59, S::Numeric), (0x0E81, 0x0E82, S::OLetter), (0x0E84, 0x0E84, S::OLetter),
    (0x0E86, 0x0E8A, S::OLetter), (0x0E8C, 0x0EA3, S::OLetter), (0x0EA5, 0x0EA5, S::OLetter),
    (0x0EA7, 0x0EB0, S::OLetter), (0x0EB1, 0x0EB1, S::Extend), (0x0EB2, 0x0EB3, S::OLetter),
    (0x0EB4, 0x0EBC, S::Extend), (0x0EBD, 0x0EBD, S::OLetter), (0x0EC0, 0x0EC4, S::OLetter),
    (0x0EC6, 0x0EC6, S::OLetter), (0x0EC8, 0x0ECE, S::Extend), (0x0ED0, 0x0ED9, S::Numeric),
    (0x0EDC, 0x0EDF, S::OLetter), (0x0F00, 0x0F00, S::OLetter), (0x0F18, 0x0F19, S::Extend),
    (0x0F20, 0x0F29, S::Numeric), (0x0F35, 0x0F35, S::Extend), (0x0F37, 0x0F37, S::Extend),
    (0x0F39, 0x0F39, S::Extend), (0x0F3A, 0x0F3D, S::Close), (0x0F3E, 0x0F3F, S::Extend),
    (0x0F40, 0x0F47, S::OLetter), (0x0F49, 0x0F6C, S::OLetter), (0x0F71, 0x0F84, S::Extend),
    (0x0F86, 0x0F87, S::Extend), (0x0F88, 0x0F8C, S::OLetter), (0x0F8D, 0x0F97, S::Extend),
    (0x0F99, 0x0FBC, S::Extend), (0x0FC6, 0x0FC6, S::Extend), (0x1000, 0x102A, S::OLetter),
    (0x102B, 0x103E, S::Extend), (0x103F, 0x103F, S::OLetter), (0x1040, 0x1049, S::Numeric),
    (0x104A, 0x104B, S::STerm), (0x1050, 0x1055, S::OLetter), (0x1056, 0x1059, S::Extend),
    (0x105A, 0x105D, S::OLetter), (0x105E, 0x1060, S::Extend), (0x1061, 0x1061, S::OLetter),
    (0x1062, 0x1064, S::Extend), (0x1065, 0x1066, S::OLetter), (0x1067, 0x106D, S::Extend),
    (0x106E, 0x1070, S::OLetter), (0x1071, 0x1074, S::Extend), (0x1075, 0x1081, S::OLetter),
    (0x1082, 0x108D, S::Extend), (0x108E, 0x108E, S::OLetter), (0x108F, 0x108F, S::Extend),
    (0x1090, 0x1099, S::Numeric), (0x109A, 0x109D, S::Extend), (0x10A0, 0x10C5, S::Upper),
    (0x10C7, 0x10C7, S::Upper), (0x10CD, 0x10CD, S::Upper), (0x10D0, 0x10FA, S::OLetter),
    (0x10FC, 0x10FC, S::Lower), (0x10FD, 0x1248, S::OLetter), (0x124A, 0x124D, S::OLetter),
    (0x1250, 0x1256, S::OLetter), (0x1258, 0x1258, S::OLetter), (0x125A, 0x125D, S::OLetter),
    (0x1260, 0x1288, S::OLetter), (0x128A, 0x128D, S::OLetter), (0x1290, 0x12B0, S::OLetter),
    (0x12B2, 0x12B5, S::OLetter), (0x12B8, 0x12BE, S::OLetter), (0x12C0, 0x12C0, S::OLetter),
    (0x12C2, 0x12C5, S::OLetter), (0x12C8, 0x12D6, S::OLetter), (0x12D8, 0x1310, S::OLetter),
    (0x1312, 0x1315, S::OLetter), (0x1318, 0x135A, S::OLetter), (0x135D, 0x135F, S::Extend),
    (0x1362, 0x1362, S::STerm), (0x1367, 0x1368, S::STerm), (0x1380, 0x138F, S::OLetter),
    (0x13A0, 0x13F5, S::Upper), (0x13F8, 0x13FD, S::Lower), (0x1401, 0x166C, S::OLetter),
    (0x166E, 0x166E, S::STerm), (0x166F, 0x167F, S::OLetter), (0x1680, 0x1680, S::Sp),
    (0x1681, 0x169A, S::OLetter), (0x169B, 0x169C, S::Close), (0x16A0, 0x16EA, S::OLetter),
    (0x16EE, 0x16F8, S::OLetter), (0x1700, 0x1711, S::OLetter), (0x1712, 0x1715, S::Extend),
    (0x171F, 0x1731, S::OLetter), (0x1732, 0x1734, S::Extend), (0x1735, 0x1736, S::STerm),
    (0x1740, 0x1751, S::OLetter), (0x1752, 0x1753, S::Extend), (0x1760, 0x176C, S::OLetter),
    (0x176E, 0x1770, S::OLetter), (0x1772, 0x1773, S::Extend), (0x1780, 0x17B3, S::OLetter),
    (0x17B4, 0x17D3, S::Extend), (0x17D4, 0x17D5, S::STerm), (0x17D7, 0x17D7, S::OLetter),
    (0x17DC, 0x17DC, S::OLetter), (0x17DD, 0x17DD, S::Extend), (0x17E0, 0x17E9, S::Numeric),
    (0x1802, 0x1802, S::SContinue), (0x1803, 0x1803, S::STerm), (0x1808, 0x1808, S::SContinue),
    (0x1809, 0x1809, S::STerm), (0x180B, 0x180D, S::Extend), (0x180E, 0x180E, S::Format),
    (0x180F, 0x180F, S::Extend), (0x1810, 0x1819, S::Numeric), (0x1820, 0x1878, S::OLetter),
    (0x1880, 0x1884, S::OLetter), (0x1885, 0x1886, S::Extend), (0x1887, 0x18A8, S::OLetter),
    (0x18A9, 0x18A9, S::Extend), (0x18AA, 0x18AA, S::OLetter), (0x18B0, 0x18F5, S::OLetter),
    (0x1900, 0x191E, S::OLetter), (0x1920, 0x192B, S::Extend), (0x1930, 0x193B, S::Extend),
    (0x1944, 0x1945, S::STerm), (0x1946, 0x194F, S::Numeric), (0x1950, 0x196D, S::OLetter),
    (0x1970, 0x1974, S::OLetter), (0x1980, 0x19AB, S::OLetter), (0x19B0, 0x19C9, S::OLetter),
    (0x19D0, 0x19DA, S::Numeric), (0x1A00, 0x1A16, S::OLetter), (0x1A17, 0x1A1B, S::Extend),
    (0x1A20, 0x1A54, S::OLetter), (0x1A55, 0x1A5E, S::Extend), (0x1A60, 0x1A7C, S::Extend),
    (0x1A7F, 0x1A7F, S::Extend), (0x1A80, 0x1A89, S::Numeric), (0x1A90, 0x1A99, S::Numeric),
    (0x1AA7, 0x1AA7, S::OLetter), (0x1AA8, 0x1AAB, S::STerm), (0x1AB0, 0x1ADD, S::Extend),
    (0x1AE0, 0x1AEB, S::Extend), (0x1B00, 0x1B04, S::Extend), (0x1B05, 0x1B33, S::OLetter),
    (0x1B34, 0x1B44, S::Extend), (0x1B45, 0x1B4C, S::OLetter), (0x1B4E, 0x1B4F, S::STerm),
    (0x1B50, 0x1B59, S::Numeric), (0x1B5A, 0x1B5B, S::STerm), (0x1B5E, 0x1B5F, S::STerm),
    (0x1B6B, 0x1B73, S::Extend), (0x1B7D, 0x1B7F, S::STerm), (0x1B80, 0x1B82, S::Extend),
    (0x1B83, 0x1BA0, S::OLetter), (0x1BA1, 0x1BAD, S::Extend), (0x1BAE, 0x1BAF, S::OLetter),
    (0x1BB0, 0x1BB9, S::Numeric), (0x1BBA, 0x1BE5, S::OLetter), (0x1BE6, 0x1BF3, S::Extend),
    (0x1C00, 0x1C23, S::OLetter), (0x1C24, 0x1C37, S::Extend), (0x1C3B, 0x1C3C, S::STerm),
    (0x1C40, 0x1C49, S::Numeric), (0x1C4D, 0x1C4F, S::OLetter), (0x1C50, 0x1C59, S::Numeric),
    (0x1C5A, 0x1C7D, S::OLetter), (0x1C7E, 0x1C7F, S::STerm), (0x1C80, 0x1C88, S::Lower),
    (0x1C89, 0x1C89, S::Upper), (0x1C8A, 0x1C8A, S::Lower), (0x1C90, 0x1CBA, S::OLetter),
    (0x1CBD, 0x1CBF, S::OLetter), (0x1CD0, 0x1CD2, S::Extend), (0x1CD4, 0x1CE8, S::Extend),
    (0x1CE9, 0x1CEC, S::OLetter), (0x1CED, 0x1CED, S::Extend), (0x1CEE, 0x1CF3, S::OLetter),
    (0x1CF4, 0x1CF4, S::Extend), (0x1CF5, 0x1CF6, S::OLetter), (0x1CF7, 0x1CF9, S::Extend),
    (0x1CFA, 0x1CFA, S::OLetter), (0x1D00, 0x1DBF, S::Lower), (0x1DC0, 0x1DFF, S::Extend),
    (0x1E00, 0x1E00, S::Upper), (0x1E01, 0x1E01, S::Lower), (0x1E02, 0x1E02, S::Upper),
    (0x1E03, 0x1E03, S::Lower), (0x1E04, 0x1E04, S::Upper), (0x1E05, 0x1E05, S::Lower),
    (0x1E06, 0x1E06, S::Upper), (0x1E07, 0x1E07, S::Lower), (0x1E08, 0x1E08, S::Upper),
    (0x1E09, 0x1E09, S::Lower), (0x1E0A, 0x1E0A, S::Upper), (0x1E0B, 0x1E0B, S::Lower),
    (0x1E0C, 0x1E0C, S::Upper), (0x1E0D, 0x1E0D, S::Lower), (0x1E0E, 0x1E0E, S::Upper),
    (0x1E0F, 0x1E0F, S::Lower), (0x1E10, 0x1E10, S::Upper), (0x1E11, 0x1E11, S::Lower),
    (0x1E12, 0x1E12, S::Upper), (0x1E13, 0x1E13, S::Lower), (0x1E14, 0x1E14, S::Upper),
    (0x1E15, 0x1E15, S::Lower), (0x1E16, 0x1E16, S::Upper), (0x1E17, 0x1E17, S::Lower),
    (0x1E18, 0x1E18, S::Upper), (0x1E19, 0x1E19, S::Lower), (0x1E1A, 0x1E1A, S::Upper),
    (0x1E1B, 0x1E1B, S::Lower), (0x1E1C, 0x1E1C, S::Upper), (0x1E1D, 0x1E1D, S::Lower),
    (0x1E1E, 0x1E1E, S::Upper), (0x1E1F, 0x1E1F, S::Lower), (0x1E20, 0x1E20, S::Upper),
    (0x1E21, 0x1E21, S::Lower), (0x1E22, 0x1E22, S::Upper), (0x1E23, 0x1E23, S::Lower),
    (0x1E24, 0x1E24, S::Upper), (0x1E25, 0x1E25, S::Lower), (0x1E26, 0x1E26, S::Upper),
    (0x1E27, 0x1E27, S::Lower), (0x1E28, 0x1E28, S::Upper), (0x1E29, 0x1E29, S::Lower),
    (0x1E2A, 0x1E2A, S::Upper), (0x1E2B, 0x1E2B, S::Lower), (0x1E2C, 0x1E2C, S::Upper),
    (0x1E2D, 0x1E2D, S::Lower), (0x1E2E, 0x1E2E, S::Upper), (0x1E2F, 0x1E2F, S::Lower),
    (0x1E30, 0x1E30, S::Upper), (0x1E31, 0x1E31, S::Lower), (0x1E32, 0x1E32, S::Upper),
    (0x1E33, 0x1E33, S::Lower), (0x1E34, 0x1E34, S::Upper), (0x1E35, 0x1E35, S::Lower),
    (0x1E36, 0x1E36, S::Upper), (0x1E37, 0x1E37, S::Lower), (0x1E38, 0x1E38, S::Upper),
    (0x1E39, 0x1E39, S::Lower), (0x1E3A, 0x1E3A, S::Upper), (0x1E3B, 0x1E3B, S::Lower),
    (0x1E3C, 0x1E3C, S::Upper), (0x1E3D, 0x1E3D, S::Lower), (0x1E3E, 0x1E3E, S::Upper),
    (0x1E3F, 0x1E3F, S::Lower), (0x1E40, 0x1E40, S::Upper), (0x1E41, 0x1E41, S::Lower),
    (0x1E42, 0x1E42, S::Upper), (0x1E43, 0x1E43, S::Lower), (0x1E44, 0x1E44, S::Upper),
    (0x1E45, 0x1E45, S::Lower), (0x1E46, 0x1E46, S::Upper), (0x1E47, 0x1E47, S::Lower),
    (0x1E48, 0x1E48, S::Upper), (0x1E49, 0x1E49, S::Lower), (0x1E4A, 0x1E4A, S::Upper),
    (0x1E4B, 0x1E4B, S::Lower), (0x1E4C, 0x1E4C, S::Upper), (0x1E4D, 0x1E4D, S::Lower),
    (0x1E4E, 0x1E4E, S::Upper), (0x1E4F, 0x1E4F, S::Lower), (0x1E50, 0x1E50, S::Upper),
    (0x1E51, 0x1E51, S::Lower), (0x1E52, 0x1E52, S::Upper), (0x1E53, 0x1E53, S::Lower),
    (0x1E54, 0x1E54, S::Upper), (0x1E55, 0x1E55, S::Lower), (0x1E56, 0x1E56, S::Upper),
    (0x1E57, 0x1E57, S::Lower), (0x1E58, 0x1E58, S::Upper), (0x1E59, 0x1E59, S::Lower),
    (0x1E5A, 0x1E5A, S::Upper), (0x1E5B, 0x1E5B, S::Lower), (0x1E5C, 0x1E5C, S::Upper),
    (0x1E5D, 0x1E5D, S::Lower), (0x1E5E, 0x1E5E, S::Upper), (0x1E5F, 0x1E5F, S::Lower),
    (0x1E60, 0x1E60, S::Upper), (0x1E61, 0x1E61, S::Lower), (0x1E62, 0x1E62, S::Upper),
    (0x1E63, 0x1E63, S::Lower), (0x1E64, 0x1E64, S::Upper), (0x1E65, 0x1E65, S::Lower),
    (0x1E66, 0x1E66, S::Upper), (0x1E67, 0x1E67, S::Lower), (0x1E68, 0x1E68, S::Upper),
    (0x1E69, 0x1E69, S::Lower), (0x1E6A, 0x1E6A, S::Upper), (0x1E6B, 0x1E6B, S::Lower),
    (0x1E6C, 0x1E6C, S::Upper), (0x1E6D, 0x1E6D, S::Lower), (0x1E6E, 0x1E6E, S::Upper),
    (0x1E6F, 0x1E6F, S::Lower), (0x1E70, 0x1E70, S::Upper), (0x1E71, 0x1E71, S::Lower),
    (0x1E72, 0x1E72, S::Upper), (0x1E73, 0x1E73, S::Lower), (0x1E74, 0x1E74, S::Upper),
    (0x1E75, 0x1E75, S::Lower), (0x1E76, 0x1E76, S::Upper), (0x1E77, 0x1E77, S::Lower),
    (0x1E78, 0x1E78, S::Upper), (0x1E79, 0x1E79, S::Lower), (0x1E7A, 0x1E7A, S::Upper),
    (0x1E7B, 0x1E7B, S::Lower), (0x1E7C, 0x1E7C, S::Upper), (0x1E7D, 0x1E7D, S::Lower),
    (0x1E7E, 0x1E7E, S::Upper), (0x1E7F, 0x1E7F, S::Lower), (0x1E80, 0x1E80, S::Upper),
    (0x1E81, 0x1E81, S::Lower), (0x1E82, 0x1E82, S::Upper), (0x1E83, 0x1E83, S::Lower),
    (0x1E84, 0x1E84, S::Upper), (0x1E85, 0x1E85, S::Lower), (0x1E86, 0x1E86, S::Upper),
    (0x1E87, 0x1E87, S::Lower), (0x1E88, 0x1E88, S::Upper), (0x1E89, 0x1E89, S::Lower),
    (0x1E8A, 0x1E8A, S::Upper), (0x1E8B, 0x1E8B, S::Lower), (0x1E8C, 0x1E8C, S::Upper),
    (0x1E8D, 0x1E8D, S::Lower), (0x1E8E, 0x1E8E, S::Upper), (0x1E8F, 0x1E8F, S::Lower),
    (0x1E90, 0x1E90, S::Upper), (0x1E91, 0x1E91, S::Lower), (0x1E92, 0x1E92, S::Upper),
    (0x1E93, 0x1E93, S::Lower), (0x1E94, 0x1E94, S::Upper), (0x1E95, 0x1E9D, S::Lower),
    (0x1E9E, 0x1E9E, S::Upper), (0x1E9F, 0x1E9F, S::Lower), (0x1EA0, 0x1EA0, S::Upper),
    (0x1EA1, 0x1EA1, S::Lower), (0x1EA2, 0x1EA2, S::Upper), (0x1EA3, 0x1EA3, S::Lower),
    (0x1EA4, 0x1EA4, S::Upper), (0x1EA5, 0x1EA5, S::Lower), (0x1EA6, 0x1EA6, S::Upper),
    (0x1EA7, 0x1EA7, S::Lower), (0x1EA8, 0x1EA8, S::Upper), (0x1EA9, 0x1EA9, S::Lower),
    (0x1EAA, 0x1EAA, S::Upper), (0x1EAB, 0x1EAB, S::Lower), (0x1EAC, 0x1EAC, S::Upper),
    (0x1EAD, 0x1EAD, S::Lower), (0x1EAE, 0x1EAE, S::Upper), (0x1EAF, 0x1EAF, S::Lower),
    (0x1EB0, 0x1EB0, S::Upper), (0x1EB1, 0x1EB1, S::Lower), (0x1EB2, 0x1EB2, S::Upper),
    (0x1EB3, 0x1EB3, S::Lower), (0x1EB4, 0x1EB4, S::Upper), (0x1EB5, 0x1EB5, S::Lower),
    (0x1EB6, 0x1EB6, S::Upper), (0x1EB7, 0x1EB7, S::Lower), (0x1EB8, 0x1EB8, S::Upper),
    (0x1EB9, 0x1EB9, S::Lower), (0x1EBA, 0x1EBA, S::Upper), (0x1EBB, 0x1EBB, S::Lower),
    (0x1EBC, 0x1EBC, S::Upper), (0x1EBD, 0x1EBD, S::Lower), (0x1EBE, 0x1EBE, S::Upper),
    (0x1EBF, 0x1EBF, S::Lower), (0x1EC0, 0x1EC0, S::Upper), (0x1EC1, 0x1EC1, S::Lower),
    (0x1EC2, 0x1EC2, S::Upper), (0x1EC3, 0x1EC3, S::Lower), (0x1EC4, 0x1EC4, S::Upper),
    (0x1EC5, 0x1EC5, S::Lower), (0x1EC6, 0x1EC6, S::Upper), (0x1EC7, 0x1EC7, S::Lower),
    (0x1EC8, 0x1EC8, S::Upper), (0x1EC9, 0x1EC9, S::Lower), (0x1ECA, 0x1ECA, S::Upper),
    (0x1ECB, 0x1ECB, S::Lower), (0x1ECC, 0x1ECC, S::Upper), (0x1ECD, 0x1ECD, S::Lower),
    (0x1ECE, 0x1ECE, S::Upper), (0x1ECF, 0x1ECF, S::Lower), (0x1ED0, 0x1ED0, S::Upper),
    (0x1ED1, 0x1ED1, S::Lower), (0x1ED2, 0x1ED2, S::Upper), (0x1ED3, 0x1ED3, S::Lower),
    (0x1ED4, 0x1ED4, S::Upper), (0x1ED5, 0x1ED5, S::Lower), (0x1ED6, 0x1ED6, S::Upper),
    (0x1ED7, 0x1ED7, S::Lower), (0x1ED8, 0x1ED8, S::Upper), (0x1ED9, 0x1ED9, S::Lower),
    (0x1EDA, 0x1EDA, S::Upper), (0x1EDB, 0x1EDB, S::Lower), (0x1EDC, 0x1EDC, S::Upper),
    (0x1EDD, 0x1EDD, S::Lower), (0x1EDE, 0x1EDE, S::Upper), (0x1EDF, 0x1EDF, S::Lower),
    (0x1EE0, 0x1EE0, S::Upper), (0x1EE1, 0x1EE1, S::Lower), (0x1EE2, 0x1EE2, S::Upper),
    (0x1EE3, 0x1EE3, S::Lower), (0x1EE4, 0x1EE4, S::Upper), (0x1EE5, 0x1EE5, S::Lower),
    (0x1EE6, 0x1EE6, S::Upper), (0x1EE7, 0x1EE7, S::Lower), (0x1EE8, 0x1EE8, S::Upper),
    (0x1EE9, 0x1EE9, S::Lower), (0x1EEA, 0x1EEA, S::Upper), (0x1EEB, 0x1EEB, S::Lower),
    (0x1EEC, 0x1EEC, S::Upper), (0x1EED, 0x1EED, S::Lower), (0x1EEE, 0x1EEE, S::Upper),
    (0x1EEF, 0x1EEF, S::Lower), (0x1EF0, 0x1EF0, S::Upper), (0x1EF1, 0x1EF1, S::Lower),
    (0x1EF2, 0x1EF2, S::Upper), (0x1EF3, 0x1EF3, S::Lower), (0x1EF4, 0x1EF4, S::Upper),
    (0x1EF5, 0x1EF5, S::Lower), (0x1EF6, 0x1EF6, S::Upper), (0x1EF7, 0x1EF7, S::Lower),
    (0x1EF8, 0x1EF8, S::Upper), (0x1EF9, 0x1EF9, S::Lower), (0x1EFA, 0x1EFA, S::Upper),
    (0x1EFB, 0x1EFB, S::Lower), (0x1EFC, 0x1EFC, S::Upper), (0x1EFD, 0x1EFD, S::Lower),
    (0x1EFE, 0x1EFE, S::Upper), (0x1EFF, 0x1F07, S::Lower), (0x1F08, 0x1F0F, S::Upper),
    (0x1F10, 0x1F15, S::Lower), (0x1F18, 0x1F1D, S::Upper), (0x1F20, 0x1F27, S::Lower),
    (0x1F28, 0x1F2F, S::Upper), (0x1F30, 0x1F37, S::Lower), (0x1F38, 0x1F3F, S::Upper),
    (0x1F40, 0x1F45, S::Lower), (0x1F48, 0x1F4D, S::Upper), (0x1F50, 0x1F57, S::Lower),
    (0x1F59, 0x1F59, S::Upper), (0x1F5B, 0x1F5B, S::Upper), (0x1F5D, 0x1F5D, S::Upper),
    (0x1F5F, 0x1F5F, S::Upper), (0x1F60, 0x1F67, S::Lower), (0x1F68, 0x1F6F, S::Upper),
    (0x1F70, 0x1F7D, S::Lower), (0x1F80, 0x1F87, S::Lower), (0x1F88, 0x1F8F, S::Upper),
    (0x1F90, 0x1F97, S::Lower), (0x1F98, 0x1F9F, S::Upper), (0x1FA0, 0x1FA7, S::Lower),
    (0x1FA8, 0x1FAF, S::Upper), (0x1FB0, 0x1FB4, S::Lower), (0x1FB6, 0x1FB7, S::Lower),
    (0x1FB8, 0x1FBC, S::Upper), (0x1FBE, 0x1FBE, S::Lower), (0x1FC2, 0x1FC4, S::Lower),
    (0x1FC6, 0x1FC7, S::Lower), (0x1FC8, 0x1FCC, S::Upper), (0x1FD0, 0x1FD3, S::Lower),
    (0x1FD6, 0x1FD7, S::Lower), (0x1FD8, 0x1FDB, S::Upper), (0x1FE0, 0x1FE7, S::Lower),
    (0x1FE8, 0x1FEC, S::Upper), (0x1FF2, 0x1FF4, S::Lower), (0x1FF6, 0x1FF7, S::Lower),
    (0x1FF8, 0x1FFC, S::Upper), (0x2000, 0x200A, S::Sp), (0x200B, 0x200B, S::Format),
    (0x200C, 0x200D, S::Extend), (0x200E, 0x200F, S::Format), (0x2013, 0x2014, S::SContinue),
    (0x2018, 0x201F, S::Close), (0x2024, 0x2024, S::ATerm), (0x2028, 0x2029, S::Sep),
    (0x202A, 0x202E, S::Format), (0x202F, 0x202F, S::Sp), (0x2039, 0x203A, S::Close),
    (0x203C, 0x203D, S::STerm), (0x2045, 0x2046, S::Close), (0x2047, 0x2049, S::STerm),
    (0x205F, 0x205F, S::Sp), (0x2060, 0x2064, S::Format), (0x2066, 0x206F, S::Format),
    (0x2071, 0x2071, S::Lower), (0x207D, 0x207E, S::Close), (0x207F, 0x207F, S::Lower),
    (0x208D, 0x208E, S::Close), (0x2090, 0x209C, S::Lower), (0x20D0, 0x20F0, S::Extend),
    (0x2102, 0x2102, S::Upper), (0x2107, 0x2107, S::Upper), (0x210A, 0x210A, S::Lower),
    (0x210B, 0x210D, S::Upper), (0x210E, 0x210F, S::Lower), (0x2110, 0x2112, S::Upper),
    (0x2113, 0x2113, S::Lower), (0x2115, 0x2115, S::Upper), (0x2119, 0x211D, S::Upper),
    (0x2124, 0x2124, S::Upper), (0x2126, 0x2126, S::Upper), (0x2128, 0x2128, S::Upper),
    (0x212A, 0x212D, S::Upper), (0x212F, 0x212F, S::Lower), (0x2130, 0x2133, S::Upper),
    (0x2134, 0x2134, S::Lower), (0x2135, 0x2138, S::OLetter), (0x2139, 0x2139, S::Lower),
    (0x213C, 0x213D, S::Lower), (0x213E, 0x213F, S::Upper), (0x2145, 0x2145, S::Upper),
    (0x2146, 0x2149, S::Lower), (0x214E, 0x214E, S::Lower), (0x2160, 0x216F, S::Upper),
    (0x2170, 0x217F, S::Lower), (0x2180, 0x2182, S::OLetter), (0x2183, 0x2183, S::Upper),
    (0x2184, 0x2184, S::Lower), (0x2185, 0x2188, S::OLetter), (0x2308, 0x230B, S::Close),
    (0x2329, 0x232A, S::Close), (0x24B6, 0x24CF, S::Upper), (0x24D0, 0x24E9, S::Lower),
    (0x275B, 0x2760, S::Close), (0x2768, 0x2775, S::Close), (0x27C5, 0x27C6, S::Close),
    (0x27E6, 0x27EF, S::Close), (0x2983, 0x2998, S::Close), (0x29D8, 0x29DB, S::Close),
    (0x29FC, 0x29FD, S::Close), (0x2C00, 0x2C2F, S::Upper), (0x2C30, 0x2C5F, S::Lower),
    (0x2C60, 0x2C60, S::Upper), (0x2C61, 0x2C61, S::Lower), (0x2C62, 0x2C64, S::Upper),
    (0x2C65, 0x2C66, S::Lower), (0x2C67, 0x2C67, S::Upper), (0x2C68, 0x2C68, S::Lower),
    (0x2C69, 0x2C69, S::Upper), (0x2C6A, 0x2C6A, S::Lower), (0x2C6B, 0x2C6B, S::Upper),
    (0x2C6C, 0x2C6C, S::Lower), (0x2C6D, 0x2C70, S::Upper), (0x2C71, 0x2C71, S::Lower),
    (0x2C72, 0x2C72, S::Upper), (0x2C73, 0x2C74, S::Lower), (0x2C75, 0x2C75, S::Upper),
    (0x2C76, 0x2C7D, S::Lower), (0x2C7E, 0x2C80, S::Upper), (0x2C81, 0x2C81, S::Lower),
    (0x2C82, 0x2C82, S::Upper), (0x2C83, 0x2C83, S::Lower), (0x2C84, 0x2C84, S::Upper),
    (0x2C85, 0x2C85, S::Lower), (0x2C86, 0x2C86, S::Upper), (0x2C87, 0x2C87, S::Lower),
    (0x2C88, 0x2C88, S::Upper), (0x2C89, 0x2C89, S::Lower), (0x2C8A, 0x2C8A, S::Upper),
    (0x2C8B, 0x2C8B, S::Lower), (0x2C8C, 0x2C8C, S::Upper), (0x2C8D, 0x2C8D, S::Lower),
    (0x2C8E, 0x2C8E, S::Upper), (0x2C8F, 0x2C8F, S::Lower), (0x2C90, 0x2C90, S::Upper),
    (0x2C91, 0x2C91, S::Lower), (0x2C92, 0x2C92, S::Upper), (0x2C93, 0x2C93, S::Lower),
    (0x2C94, 0x2C94, S::Upper), (0x2C95, 0x2C95, S::Lower), (0x2C96, 0x2C96, S::Upper),
    (0x2C97, 0x2C97, S::Lower), (0x2C98, 0x2C98, S::Upper), (0x2C99, 0x2C99, S::Lower),
    (0x2C9A, 0x2C9A, S::Upper), (0x2C9B, 0x2C9B, S::Lower), (0x2C9C, 0x2C9C, S::Upper),
    (0x2C9D, 0x2C9D, S::Lower), (0x2C9E, 0x2C9E, S::Upper), (0x2C9F, 0x2C9F, S::Lower),
    (0x2CA0, 0x2CA0, S::Upper), (0x2CA1, 0x2CA1, S::Lower), (0x2CA2, 0x2CA2, S::Upper),
    (0x2CA3, 0x2CA3, S::Lower), (0x2CA4, 0x2CA4, S::Upper), (0x2CA5, 0x2CA5, S::Lower),
    (0x2CA6, 0x2CA6, S::Upper), (0x2CA7, 0x2CA7, S::Lower), (0x2CA8, 0x2CA8, S::Upper),
    (0x2CA9, 0x2CA9, S::Lower), (0x2CAA, 0x2CAA, S::Upper), (0x2CAB, 0x2CAB, S::Lower),
    (0x2CAC, 0x2CAC, S::Upper), (0x2CAD, 0x2CAD, S::Lower), (0x2CAE, 0x2CAE, S::Upper),
    (0x2CAF, 0x2CAF, S::Lower), (0x2CB0, 0x2CB0, S::Upper), (0x2CB1, 0x2CB1, S::Lower),
    (0x2CB2, 0x2CB2, S::Upper), (0x2CB3, 0x2CB3, S::Lower), (0x2CB4, 0x2CB4, S::Upper),
    (0x2CB5, 0x2CB5, S::Lower), (0x2CB6, 0x2CB6, S::Upper), (0x2CB7, 0x2CB7, S::Lower),
    (0x2CB8, 0x2CB8, S::Upper), (0x2CB9, 0x2CB9, S::Lower), (0x2CBA, 0x2CBA, S::Upper),
    (0x2CBB, 0x2CBB, S::Lower), (0x2CBC, 0x2CBC, S::Upper), (0x2CBD, 0x2CBD, S::Lower),
    (0x2CBE, 0x2CBE, S::Upper), (0x2CBF, 0x2CBF, S::Lower), (0x2CC0, 0x2CC0, S::Upper),
    (0x2CC1, 0x2CC1, S::Lower), (0x2CC2, 0x2CC2, S::Upper), (0x2CC3, 0x2CC3, S::Lower),
    (0x2CC4, 0x2CC4, S::Upper), (0x2CC5, 0x2CC5, S::Lower), (0x2CC6, 0x2CC6, S::Upper),
    (0x2CC7, 0x2CC7, S::Lower), (0x2CC8, 0x2CC8, S::Upper), (0x2CC9, 0x2CC9, S::Lower),
    (0x2CCA, 0x2CCA, S::Upper), (0x2CCB, 0x2CCB, S::Lower), (0x2CCC, 0x2CCC, S::Upper),
    (0x2CCD, 0x2CCD, S::Lower), (0x2CCE, 0x2CCE, S::Upper), (0x2CCF, 0x2CCF, S::Lower),
    (0x2CD0, 0x2CD0, S::Upper), (0x2CD1, 0x2CD1, S::Lower), (0x2CD2, 0x2CD2, S::Upper),
    (0x2CD3, 0x2CD3, S::Lower), (0x2CD4, 0x2CD4, S::Upper), (0x2CD5, 0x2CD5, S::Lower),
    (0x2CD6, 0x2CD6, S::Upper), (0x2CD7, 0x2CD7, S::Lower), (0x2CD8, 0x2CD8, S::Upper),
    (0x2CD9, 0x2CD9, S::Lower), (0x2CDA, 0x2CDA, S::Upper), (0x2CDB, 0x2CDB, S::Lower),
    (0x2CDC, 0x2CDC, S::Upper), (0x2CDD, 0x2CDD, S::Lower), (0x2CDE, 0x2CDE, S::Upper),
    (0x2CDF, 0x2CDF, S::Lower), (0x2CE0, 0x2CE0, S::Upper), (0x2CE1, 0x2CE1, S::Lower),
    (0x2CE2, 0x2CE2, S::Upper), (0x2CE3, 0x2CE4, S::Lower), (0x2CEB, 0x2CEB, S::Upper),
    (0x2CEC, 0x2CEC, S::Lower), (0x2CED, 0x2CED, S::Upper), (0x2CEE, 0x2CEE, S::Lower),
    (0x2CEF, 0x2CF1, S::Extend), (0x2CF2, 0x2CF2, S::Upper), (0x2CF3, 0x2CF3, S::Lower),
    (0x2CF9, 0x2CFB, S::STerm), (0x2D00, 0x2D25, S::Lower), (0x2D27, 0x2D27, S::Lower),
    (0x2D2D, 0x2D2D, S::Lower), (0x2D30, 0x2D67, S::OLetter), (0x2D6F, 0x2D6F, S::OLetter),
    (0x2D7F, 0x2D7F, S::Extend), (0x2D80, 0x2D96, S::OLetter), (0x2DA0, 0x2DA6, S::OLetter),
    (0x2DA8, 0x2DAE, S::OLetter), (0x2DB0, 0x2DB6, S::OLetter), (0x2DB8, 0x2DBE, S::OLetter),
    (0x2DC0, 0x2DC6, S::OLetter), (0x2DC8, 0x2DCE, S::OLetter), (0x2DD0, 0x2DD6, S::OLetter),
    (0x2DD8, 0x2DDE, S::OLetter), (0x2DE0, 0x2DFF, S::Extend), (0x2E00, 0x2E0D, S::Close),
    (0x2E1C, 0x2E1D, S::Close), (0x2E20, 0x2E29, S::Close), (0x2E2E, 0x2E2E, S::STerm),
    (0x2E2F, 0x2E2F, S::OLetter), (0x2E3C, 0x2E3C, S::STerm), (0x2E42, 0x2E42, S::Close),
    (0x2E53, 0x2E54, S::STerm), (0x2E55, 0x2E5C, S::Close), (0x3000, 0x3000, S::Sp),
    (0x3001, 0x3001, S::SContinue), (0x3002, 0x3002, S::STerm), (0x3005, 0x3007, S::OLetter),
    (0x3008, 0x3011, S::Close), (0x3014, 0x301B, S::Close), (0x301D, 0x301F, S::Close),
    (0x3021, 0x3029, S::OLetter), (0x302A, 0x302F, S::Extend), (0x3031, 0x3035, S::OLetter),
    (0x3038, 0x303C, S::OLetter), (0x3041, 0x3096, S::OLetter), (0x3099, 0x309A, S::Extend),
    (0x309D, 0x309F, S::OLetter), (0x30A1, 0x30FA, S::OLetter), (0x30FC, 0x30FF, S::OLetter),
    (0x3105, 0x312F, S::OLetter), (0x3131, 0x318E, S::OLetter), (0x31A0, 0x31BF, S::OLetter),
    (0x31F0, 0x31FF, S::OLetter), (0x3400, 0x4DBF, S::OLetter), (0x4E00, 0xA48C, S::OLetter),
    (0xA4D0, 0xA4FD, S::OLetter), (0xA4FF, 0xA4FF, S::STerm), (0xA500, 0xA60C, S::OLetter),
    (0xA60E, 0xA60F, S::STerm), (0xA610, 0xA61F, S::OLetter), (0xA620, 0xA629, S::Numeric),
    (0xA62A, 0xA62B, S::OLetter), (0xA640, 0xA640, S::Upper), (0xA641, 0xA641, S::Lower),
    (0xA642, 0xA642, S::Upper), (0xA643, 0xA643, S::Lower), (0xA644, 0xA644, S::Upper),
    (0xA645, 0xA645, S::Lower), (0xA646, 0xA646, S::Upper), (0xA647, 0xA647, S::Lower),
    (0xA648, 0xA648, S::Upper), (0xA649, 0xA649, S::Lower), (0xA64A, 0xA64A, S::Upper),
    (0xA64B, 0xA64B, S::Lower), (0xA64C, 0xA64C, S::Upper), (0xA64D, 0xA64D, S::Lower),
    (0xA64E, 0xA64E, S::Upper), (0xA64F, 0xA64F, S::Lower), (0xA650, 0xA650, S::Upper),
    (0xA651, 0xA651, S::Lower), (0xA652, 0xA652, S::Upper), (0xA653, 0xA653, S::Lower),
    (0xA654, 0xA654, S::Upper), (0xA655, 0xA655, S::Lower), (0xA656, 0xA656, S::Upper),
    (0xA657, 0xA657, S::Lower), (0xA658, 0xA658, S::Upper), (0xA659, 0xA659, S::Lower),
    (0xA65A, 0xA65A, S::Upper), (0xA65B, 0xA65B, S::Lower), (0xA65C, 0xA65C, S::Upper),
    (0xA65D, 0xA65D, S::Lower), (0xA65E, 0xA65E, S::Upper), (0xA65F, 0xA65F, S::Lower),
    (0xA660, 0xA660, S::Upper), (0xA661, 0xA661, S::Lower), (0xA662, 0xA662, S::Upper),
    (0xA663, 0xA663, S::Lower), (0xA664, 0xA664, S::Upper), (0xA665, 0xA665, S::Lower),
    (0xA666, 0xA666, S::Upper), (0xA667, 0xA667, S::Lower), (0xA668, 0xA668, S::Upper),
    (0xA669, 0xA669, S::Lower), (0xA66A, 0xA66A, S::Upper), (0xA66B, 0xA66B, S::Lower),
    (0xA66C, 0xA66C, S::Upper), (0xA66D, 0xA66D, S::Lower), (0xA66E, 0xA66E, S::OLetter),
    (0xA66F, 0xA672, S::Extend), (0xA674, 0xA67D, S::Extend), (0xA67F, 0xA67F, S::OLetter),
    (0xA680, 0xA680, S::Upper), (0xA681, 0xA681, S::Lower), (0xA682, 0xA682, S::Upper),
    (0xA683, 0xA683, S::Lower), (0xA684, 0xA684, S::Upper), (0xA685, 0xA685, S::Lower),
    (0xA686, 0xA686, S::Upper), (0xA687, 0xA687, S::Lower), (0xA688, 0xA688, S::Upper),
    (0xA689, 0xA689, S::Lower), (0xA68A, 0xA68A, S::Upper), (0xA68B, 0xA68B, S::Lower),
    (0xA68C, 0xA68C, S::Upper), (0xA68D, 0xA68D, S::Lower), (0xA68E, 0xA68E, S::Upper),
    (0xA68F, 0xA68F, S::Lower), (0xA690, 0xA690, S::Upper), (0xA691, 0xA691, S::Lower),
    (0xA692, 0xA692, S::Upper), (0xA693, 0xA693, S::Lower), (0xA694, 0xA694, S::Upper),
    (0xA695, 0xA695, S::Lower), (0xA696, 0xA696, S::Upper), (0xA697, 0xA697, S::Lower),
    (0xA698, 0xA698, S::Upper), (0xA699, 0xA699, S::Lower), (0xA69A, 0xA69A, S::Upper),
    (0xA69B, 0xA69D, S::Lower), (0xA69E, 0xA69F, S::Extend), (0xA6A0, 0xA6EF, S::OLetter),
    (0xA6F0, 0xA6F1, S::Extend), (0xA6F3, 0xA6F3, S::STerm), (0xA6F7, 0xA6F7, S::STerm),
    (0xA717, 0xA71F, S::OLetter), (0xA722, 0xA722, S::Upper), (0xA723, 0xA723, S::Lower),
    (0xA724, 0xA724, S::Upper), (0xA725, 0xA725, S::Lower), (0xA726, 0xA726, S::Upper),
    (0xA727, 0xA727, S::Lower), (0xA728, 0xA728, S::Upper), (0xA729, 0xA729, S::Lower),
    (0xA72A, 0xA72A, S::Upper), (0xA72B, 0xA72B, S::Lower), (0xA72C, 0xA72C, S::Upper),
    (0xA72D, 0xA72D, S::Lower), (0xA72E, 0xA72E, S::Upper), (0xA72F, 0xA731, S::Lower),
    (0xA732, 0xA732, S::Upper), (0xA733, 0xA733, S::Lower), (0xA734, 0xA734, S::Upper),
    (0xA735, 0xA735, S::Lower), (0xA736, 0xA736, S::Upper), (0xA737, 0xA737, S::Lower),
    (0xA738, 0xA738, S::Upper), (0xA739, 0xA739, S::Lower), (0xA73A, 0xA73A, S::Upper),
    (0xA73B, 0xA73B, S::Lower), (0xA73C, 0xA73C, S::Upper), (0xA73D, 0xA73D, S::Lower),
    (0xA73E, 0xA73E, S::Upper), (0xA73F, 0xA73F, S::Lower), (0xA740, 0xA740, S::Upper),
    (0xA741, 0xA741, S::Lower), (0xA742, 0xA742, S::Upper), (0xA743, 0xA743, S::Lower),
    (0xA744, 0xA744, S::Upper), (0xA745, 0xA745, S::Lower), (0xA746, 0xA746, S::Upper),
    (0xA747, 0xA747, S::Lower), (0xA748, 0xA748, S::Upper), (0xA749, 0xA749, S::Lower),
    (0xA74A, 0xA74A, S::Upper), (0xA74B, 0xA74B, S::Lower), (0xA74C, 0xA74C, S::Upper),
    (0xA74D, 0xA74D, S::Lower), (0xA74E, 0xA74E, S::Upper), (0xA74F, 0xA74F, S::Lower),
    (0xA750, 0xA750, S::Upper), (0xA751, 0xA751, S::Lower), (0xA752, 0xA752, S::Upper),
    (0xA753, 0xA753, S::Lower), (0xA754, 0xA754, S::Upper), (0xA755, 0xA755, S::Lower),
    (0xA756, 0xA756, S::Upper), (0xA757, 0xA757, S::Lower), (0xA758, 0xA758, S::Upper),
    (0xA759, 0xA759, S::Lower), (0xA75A, 0xA75A, S::Upper), (0xA75B, 0xA75B, S::Lower),
    (0xA75C, 0xA75C, S::Upper), (0xA75D, 0xA75D, S::Lower), (0xA75E, 0xA75E, S::Upper),
    (0xA75F, 0xA75F, S::Lower), (0xA760, 0xA760, S::Upper), (0xA761, 0xA761, S::Lower),
    (0xA762, 0xA762, S::Upper), (0xA763, 0xA763, S::Lower), (0xA764, 0xA764, S::Upper),
    (0xA765, 0xA765, S::Lower), (0xA766, 0xA766, S::Upper), (0xA767, 0xA767, S::Lower),
    (0xA768, 0xA768, S::Upper), (0xA769, 0xA769, S::Lower), (0xA76A, 0xA76A, S::Upper),
    (0xA76B, 0xA76B, S::Lower), (0xA76C, 0xA76C, S::Upper), (0xA76D, 0xA76D, S::Lower),
    (0xA76E, 0xA76E, S::Upper), (0xA76F, 0xA778, S::Lower), (0xA779, 0xA779, S::Upper),
    (0xA77A, 0xA77A, S::Lower), (0xA77B, 0xA77B, S::Upper), (0xA77C, 0xA77C, S::Lower),
    (0xA77D, 0xA77E, S::Upper), (0xA77F, 0xA77F, S::Lower), (0xA780, 0xA780, S::Upper),
    (0xA781, 0xA781, S::Lower), (0xA782, 0xA782, S::Upper), (0xA783, 0xA783, S::Lower),
    (0xA784, 0xA784, S::Upper), (0xA785, 0xA785, S::Lower), (0xA786, 0xA786, S::Upper),
    (0xA787, 0xA787, S::Lower), (0xA788, 0xA788, S::OLetter), (0xA78B, 0xA78B, S::Upper),
    (0xA78C, 0xA78C, S::Lower), (0xA78D, 0xA78D, S::Upper), (0xA78E, 0xA78E, S::Lower),
    (0xA78F, 0xA78F, S::OLetter), (0xA790, 0xA790, S::Upper), (0xA791, 0xA791, S::Lower),
    (0xA792, 0xA792, S::Upper), (0xA793, 0xA795, S::Lower), (0xA796, 0xA796, S::Upper),
    (0xA797, 0xA797, S::Lower), (0xA798, 0xA798, S::Upper), (0xA799, 0xA799, S::Lower),
    (0xA79A, 0xA79A, S::Upper), (0xA79B, 0xA79B, S::Lower), (0xA79C, 0xA79C, S::Upper),
    (0xA79D, 0xA79D, S::Lower), (0xA79E, 0xA79E, S::Upper), (0xA79F, 0xA79F, S::Lower),
    (0xA7A0, 0xA7A0, S::Upper), (0xA7A1, 0xA7A1, S::Lower), (0xA7A2, 0xA7A2, S::Upper),
    (0xA7A3, 0xA7A3, S::Lower), (0xA7A4, 0xA7A4, S::Upper), (0xA7A5, 0xA7A5, S::Lower),
    (0xA7A6, 0xA7A6, S::Upper), (0xA7A7, 0xA7A7, S::Lower), (0xA7A8, 0xA7A8, S::Upper),
    (0xA7A9, 0xA7A9, S::Lower), (0xA7AA, 0xA7AE, S::Upper), (0xA7AF, 0xA7AF, S::Lower),
    (0xA7B0, 0xA7B4, S::Upper), (0xA7B5, 0xA7B5, S::Lower), (0xA7B6, 0xA7B6, S::Upper),
    (0xA7B7, 0xA7B7, S::Lower), (0xA7B8, 0xA7B8, S::Upper), (0xA7B9, 0xA7B9, S::Lower),
    (0xA7BA, 0xA7BA, S::Upper), (0xA7BB, 0xA7BB, S::Lower), (0xA7BC, 0xA7BC, S::Upper),
    (0xA7BD, 0xA7BD, S::Lower), (0xA7BE, 0xA7BE, S::Upper), (0xA7BF, 0xA7BF, S::Lower),
    (0xA7C0, 0xA7C0, S::Upper), (0xA7C1, 0xA7C1, S::Lower), (0xA7C2, 0xA7C2, S::Upper),
    (0xA7C3, 0xA7C3, S::Lower), (0xA7C4, 0xA7C7, S::Upper), (0xA7C8, 0xA7C8, S::Lower),
    (0xA7C9, 0xA7C9, S::Upper), (0xA7CA, 0xA7CA, S::Lower), (0xA7CB, 0xA7CC, S::Upper),
    (0xA7CD, 0xA7CD, S::Lower), (0xA7CE, 0xA7CE, S::Upper), (0xA7CF, 0xA7CF, S::Lower),
    (0xA7D0, 0xA7D0, S::Upper), (0xA7D1, 0xA7D1, S::Lower), (0xA7D2, 0xA7D2, S::Upper),
    (0xA7D3, 0xA7D3, S::Lower), (0xA7D4, 0xA7D4, S::Upper), (0xA7D5, 0xA7D5, S::Lower),
    (0xA7D6, 0xA7D6, S::Upper), (0xA7D7, 0xA7D7, S::Lower), (0xA7D8, 0xA7D8, S::Upper),
    (0xA7D9, 0xA7D9, S::Lower), (0xA7DA, 0xA7DA, S::Upper), (0xA7DB, 0xA7DB, S::Lower),
    (0xA7DC, 0xA7DC, S::Upper), (0xA7F1, 0xA7F4, S::Lower), (0xA7F5, 0xA7F5, S::Upper),
    (0xA7F6, 0xA7F6, S::Lower), (0xA7F7, 0xA7F7, S::OLetter), (0xA7F8, 0xA7FA, S::Lower),
    (0xA7FB, 0xA801, S::OLetter), (0xA802, 0xA802, S::Extend), (0xA803, 0xA805, S::OLetter),
    (0xA806, 0xA806, S::Extend), (0xA807, 0xA80A, S::OLetter), (0xA80B, 0xA80B, S::Extend),
    (0xA80C, 0xA822, S::OLetter), (0xA823, 0xA827, S::Extend), (0xA82C, 0xA82C, S::Extend),
    (0xA840, 0xA873, S::OLetter), (0xA876, 0xA877, S::STerm), (0xA880, 0xA881, S::Extend),
    (0xA882, 0xA8B3, S::OLetter), (0xA8B4, 0xA8C5, S::Extend), (0xA8CE, 0xA8CF, S::STerm),
    (0xA8D0, 0xA8D9, S::Numeric), (0xA8E0, 0xA8F1, S::Extend), (0xA8F2, 0xA8F7, S::OLetter),
    (0xA8FB, 0xA8FB, S::OLetter), (0xA8FD, 0xA8FE, S::OLetter), (0xA8FF, 0xA8FF, S::Extend),
    (0xA900, 0xA909, S::Numeric), (0xA90A, 0xA925, S::OLetter), (0xA926, 0xA92D, S::Extend),
    (0xA92F, 0xA92F, S::STerm), (0xA930, 0xA946, S::OLetter), (0xA947, 0xA953, S::Extend),
    (0xA960, 0xA97C, S::OLetter), (0xA980, 0xA983, S::Extend), (0xA984, 0xA9B2, S::OLetter),
    (0xA9B3, 0xA9C0, S::Extend), (0xA9C8, 0xA9C9, S::STerm), (0xA9CF, 0xA9CF, S::OLetter),
    (0xA9D0, 0xA9D9, S::Numeric), (0xA9E0, 0xA9E4, S::OLetter), (0xA9E5, 0xA9E5, S::Extend),
    (0xA9E6, 0xA9EF, S::OLetter), (0xA9F0, 0xA9F9, S::Numeric), (0xA9FA, 0xA9FE, S::OLetter),
    (0xAA00, 0xAA28, S::OLetter), (0xAA29, 0xAA36, S::Extend), (0xAA40, 0xAA42, S::OLetter),
    (0xAA43, 0xAA43, S::Extend), (0xAA44, 0xAA4B, S::OLetter), (0xAA4C, 0xAA4D, S::Extend),
    (0xAA50, 0xAA59, S::Numeric), (0xAA5D, 0xAA5F, S::STerm), (0xAA60, 0xAA76, S::OLetter),
    (0xAA7A, 0xAA7A, S::OLetter), (0xAA7B, 0xAA7D, S::Extend), (0xAA7E, 0xAAAF, S::OLetter),
    (0xAAB0, 0xAAB0, S::Extend), (0xAAB1, 0xAAB1, S::OLetter), (0xAAB2, 0xAAB4, S::Extend),
    (0xAAB5, 0xAAB6, S::OLetter), (0xAAB7, 0xAAB8, S::Extend), (0xAAB9, 0xAABD, S::OLetter),
    (0xAABE, 0xAABF, S::Extend), (0xAAC0, 0xAAC0, S::OLetter), (0xAAC1, 0xAAC1, S::Extend),
    (0xAAC2, 0xAAC2, S::OLetter), (0xAADB, 0xAADD, S::OLetter), (0xAAE0, 0xAAEA, S::OLetter),
    (0xAAEB, 0xAAEF, S::Extend), (0xAAF0, 0xAAF1, S::STerm), (0xAAF2, 0xAAF4, S::OLetter),
    (0xAAF5, 0xAAF6, S::Extend), (0xAB01, 0xAB06, S::OLetter), (0xAB09, 0xAB0E, S::OLetter),
    (0xAB11, 0xAB16, S::OLetter), (0xAB20, 0xAB26, S::OLetter), (0xAB28, 0xAB2E, S::OLetter),
    (0xAB30, 0xAB5A, S::Lower), (0xAB5C, 0xAB69, S::Lower), (0xAB70, 0xABBF, S::Lower),
    (0xABC0, 0xABE2, S::OLetter), (0xABE3, 0xABEA, S::Extend), (0xABEB, 0xABEB, S::STerm),
    (0xABEC, 0xABED, S::Extend), (0xABF0, 0xABF9, S::Numeric), (0xAC00, 0xD7A3, S::OLetter),
    (0xD7B0, 0xD7C6, S::OLetter), (0xD7CB, 0xD7FB, S::OLetter), (0xF900, 0xFA6D, S::OLetter),
    (0xFA70, 0xFAD9, S::OLetter), (0xFB00, 0xFB06, S::Lower), (0xFB13, 0xFB17, S::Lower),
    (0xFB1D, 0xFB1D, S::OLetter), (0xFB1E, 0xFB1E, S::Extend), (0xFB1F, 0xFB28, S::OLetter),
    (0xFB2A, 0xFB36, S::OLetter), (0xFB38, 0xFB3C, S::OLetter), (0xFB3E, 0xFB3E, S::OLetter),
    (0xFB40, 0xFB41, S::OLetter), (0xFB43, 0xFB44, S::OLetter), (0xFB46, 0xFBB1, S::OLetter),
    (0xFBD3, 0xFD3D, S::OLetter), (0xFD3E, 0xFD3F, S::Close), (0xFD50, 0xFD8F, S::OLetter),
    (0xFD92, 0xFDC7, S::OLetter), (0xFDF0, 0xFDFB, S::OLetter), (0xFE00, 0xFE0F, S::Extend),
    (0xFE10, 0xFE11, S::SContinue), (0xFE12, 0xFE12, S::STerm), (0xFE13, 0xFE14, S::SContinue),
    (0xFE15, 0xFE16, S::STerm), (0xFE17, 0xFE18, S::Close), (0xFE20, 0xFE2F, S::Extend),
    (0xFE31, 0xFE32, S::SContinue), (0xFE35, 0xFE44, S::Close), (0xFE47, 0xFE48, S::Close),
    (0xFE50, 0xFE51, S::SContinue), (0xFE52, 0xFE52, S::ATerm), (0xFE54, 0xFE55, S::SContinue),
    (0xFE56, 0xFE57, S::STerm), (0xFE58, 0xFE58, S::SContinue), (0xFE59, 0xFE5E, S::Close),
    (0xFE63, 0xFE63, S::SContinue), (0xFE70, 0xFE74, S::OLetter), (0xFE76, 0xFEFC, S::OLetter),
    (0xFEFF, 0xFEFF, S::Format), (0xFF01, 0xFF01, S::STerm), (0xFF08, 0xFF09, S::Close),
    (0xFF0C, 0xFF0D, S::SContinue), (0xFF0E, 0xFF0E, S::ATerm), (0xFF10, 0xFF19, S::Numeric),
    (0xFF1A, 0xFF1B, S::SContinue), (0xFF1F, 0xFF1F, S::STerm), (0xFF21, 0xFF3A, S::Upper),
    (0xFF3B, 0xFF3B, S::Close), (0xFF3D, 0xFF3D, S::Close), (0xFF41, 0xFF5A, S::Lower),
    (0xFF5B, 0xFF5B, S::Close), (0xFF5D, 0xFF5D, S::Close), (0xFF5F, 0xFF60, S::Close),
    (0xFF61, 0xFF61, S::STerm), (0xFF62, 0xFF63, S::Close), (0xFF64, 0xFF64, S::SContinue),
    (0xFF66, 0xFF9D, S::OLetter), (0xFF9E, 0xFF9F, S::Extend), (0xFFA0, 0xFFBE, S::OLetter),
    (0xFFC2, 0xFFC7, S::OLetter), (0xFFCA, 0xFFCF, S::OLetter), (0xFFD2, 0xFFD7, S::OLetter),
    (0xFFDA, 0xFFDC, S::OLetter), (0xFFF9, 0xFFFB, S::Format), (0x10000, 0x1000B, S::OLetter),
    (0x1000D, 0x10026, S::OLetter), (0x10028, 0x1003A, S::OLetter), (0x1003C, 0x1003D, S::OLetter),
    (0x1003F, 0x1004D, S::OLetter), (0x10050, 0x1005D, S::OLetter), (0x10080, 0x100FA, S::OLetter),
    (0x10140, 0x10174, S::OLetter), (0x101FD, 0x101FD, S::Extend), (0x10280, 0x1029C, S::OLetter),
    (0x102A0, 0x102D0, S::OLetter), (0x102E0, 0x102E0, S::Extend), (0x10300, 0x1031F, S::OLetter),
    (0x1032D, 0x1034A, S::OLetter), (0x10350, 0x10375, S::OLetter), (0x10376, 0x1037A, S::Extend),
    (0x10380, 0x1039D, S::OLetter), (0x103A0, 0x103C3, S::OLetter), (0x103C8, 0x103CF, S::OLetter),
    (0x103D1, 0x103D5, S::OLetter), (0x10400, 0x10427, S::Upper), (0x10428, 0x1044F, S::Lower),
    (0x10450, 0x1049D, S::OLetter), (0x104A0, 0x104A9, S::Numeric), (0x104B0, 0x104D3, S::Upper),
    (0x104D8, 0x104FB, S::Lower), (0x10500, 0x10527, S::OLetter), (0x10530, 0x10563, S::OLetter),
    (0x10570, 0x1057A, S::Upper), (0x1057C, 0x1058A, S::Upper), (0x1058C, 0x10592, S::Upper),
    (0x10594, 0x10595, S::Upper), (0x10597, 0x105A1, S::Lower), (0x105A3, 0x105B1, S::Lower),
    (0x105B3, 0x105B9, S::Lower), (0x105BB, 0x105BC, S::Lower), (0x105C0, 0x105F3, S::OLetter),
    (0x10600, 0x10736, S::OLetter), (0x10740, 0x10755, S::OLetter), (0x10760, 0x10767, S::OLetter),
    (0x10780, 0x10780, S::Lower), (0x10781, 0x10782, S::OLetter), (0x10783, 0x10785, S::Lower),
    (0x10787, 0x107B0, S::Lower), (0x107B2, 0x107BA, S::Lower), (0x10800, 0x10805, S::OLetter),
    (0x10808, 0x10808, S::OLetter), (0x1080A, 0x10835, S::OLetter), (0x10837, 0x10838, S::OLetter),
    (0x1083C, 0x1083C, S::OLetter), (0x1083F, 0x10855, S::OLetter), (0x10860, 0x10876, S::OLetter),
    (0x10880, 0x1089E, S::OLetter), (0x108E0, 0x108F2, S::OLetter), (0x108F4, 0x108F5, S::OLetter),
    (0x10900, 0x10915, S::OLetter), (0x10920, 0x10939, S::OLetter), (0x10940, 0x10959, S::OLetter),
    (0x10980, 0x109B7, S::OLetter), (0x109BE, 0x109BF, S::OLetter), (0x10A00, 0x10A00, S::OLetter),
    (0x10A01, 0x10A03, S::Extend), (0x10A05, 0x10A06, S::Extend), (0x10A0C, 0x10A0F, S::Extend),
    (0x10A10, 0x10A13, S::OLetter), (0x10A15, 0x10A17, S::OLetter), (0x10A19, 0x10A35, S::OLetter),
    (0x10A38, 0x10A3A, S::Extend), (0x10A3F, 0x10A3F, S::Extend), (0x10A56, 0x10A57, S::STerm),
    (0x10A60, 0x10A7C, S::OLetter), (0x10A80, 0x10A9C, S::OLetter), (0x10AC0, 0x10AC7, S::OLetter),
    (0x10AC9, 0x10AE4, S::OLetter), (0x10AE5, 0x10AE6, S::Extend), (0x10B00, 0x10B35, S::OLetter),
    (0x10B40, 0x10B55, S::OLetter), (0x10B60, 0x10B72, S::OLetter), (0x10B80, 0x10B91, S::OLetter),
    (0x10C00, 0x10C48, S::OLetter), (0x10C80, 0x10CB2, S::Upper), (0x10CC0, 0x10CF2, S::Lower),
    (0x10D00, 0x10D23, S::OLetter), (0x10D24, 0x10D27, S::Extend), (0x10D30, 0x10D39, S::Numeric),
    (0x10D40, 0x10D49, S::Numeric), (0x10D4A, 0x10D4F, S::OLetter), (0x10D50, 0x10D65, S::Upper),
    (0x10D69, 0x10D6D, S::Extend), (0x10D6F, 0x10D6F, S::OLetter), (0x10D70, 0x10D85, S::Lower),
    (0x10E80, 0x10EA9, S::OLetter), (0x10EAB, 0x10EAC, S::Extend), (0x10EB0, 0x10EB1, S::OLetter),
    (0x10EC2, 0x10EC7, S::OLetter), (0x10EFA, 0x10EFF, S::Extend), (0x10F00, 0x10F1C, S::OLetter),
    (0x10F27, 0x10F27, S::OLetter), (0x10F30, 0x10F45, S::OLetter), (0x10F46, 0x10F50, S::Extend),
    (0x10F55, 0x10F59, S::STerm), (0x10F70, 0x10F81, S::OLetter), (0x10F82, 0x10F85, S::Extend),
    (0x10F86, 0x10F89, S::STerm), (0x10FB0, 0x10FC4, S::OLetter), (0x10FE0, 0x10FF6, S::OLetter),
    (0x11000, 0x11002, S::Extend), (0x11003, 0x11037, S::OLetter), (0x11038, 0x11046, S::Extend),
    (0x11047, 0x11048, S::STerm), (0x11066, 0x1106F, S::Numeric), (0x11070, 0x11070, S::Extend),
    (0x11071, 0x11072, S::OLetter), (0x11073, 0x11074, S::Extend), (0x11075, 0x11075, S::OLetter),
    (0x1107F, 0x11082, S::Extend), (0x11083, 0x110AF, S::OLetter), (0x110B0, 0x110BA, S::Extend),
    (0x110BD, 0x110BD, S::Numeric), (0x110BE, 0x110C1, S::STerm), (0x110C2, 0x110C2, S::Extend),
    (0x110CD, 0x110CD, S::Numeric), (0x110D0, 0x110E8, S::OLetter), (0x110F0, 0x110F9, S::Numeric),
    (0x11100, 0x11102, S::Extend), (0x11103, 0x11126, S::OLetter), (0x11127, 0x11134, S::Extend),
    (0x11136, 0x1113F, S::Numeric), (0x11141, 0x11143, S::STerm), (0x11144, 0x11144, S::OLetter),
    (0x11145, 0x11146, S::Extend), (0x11147, 0x11147, S::OLetter), (0x11150, 0x11172, S::OLetter),
    (0x11173, 0x11173, S::Extend), (0x11176, 0x11176, S::OLetter), (0x11180, 0x11182, S::Extend),
    (0x11183, 0x111B2, S::OLetter), (0x111B3, 0x111C0, S::Extend), (0x111C1, 0x111C4, S::OLetter),
    (0x111C5, 0x111C6, S::STerm), (0x111C9, 0x111CC, S::Extend), (0x111CD, 0x111CD, S::STerm),
    (0x111CE, 0x111CF, S::Extend), (0x111D0, 0x111D9, S::Numeric), (0x111DA, 0x111DA, S::OLetter),
    (0x111DC, 0x111DC, S::OLetter), (0x111DE, 0x111DF, S::STerm), (0x11200, 0x11211, S::OLetter),
    (0x11213, 0x1122B, S::OLetter), (0x1122C, 0x11237, S::Extend), (0x11238, 0x11239, S::STerm),
    (0x1123B, 0x1123C, S::STerm), (0x1123E, 0x1123E, S::Extend), (0x1123F, 0x11240, S::OLetter),
    (0x11241, 0x11241, S::Extend), (0x11280, 0x11286, S::OLetter), (0x11288, 0x11288, S::OLetter),
    (0x1128A, 0x1128D, S::OLetter), (0x1128F, 0x1129D, S::OLetter), (0x1129F, 0x112A8, S::OLetter),
    (0x112A9, 0x112A9, S::STerm), (0x112B0, 0x112DE, S::OLetter), (0x112DF, 0x112EA, S::Extend),
    (0x112F0, 0x112F9, S::Numeric), (0x11300, 0x11303, S::Extend), (0x11305, 0x1130C, S::OLetter),
    (0x1130F, 0x11310, S::OLetter), (0x11313, 0x11328, S::OLetter), (0x1132A, 0x11330, S::OLetter),
    (0x11332, 0x11333, S::OLetter), (0x11335, 0x11339, S::OLetter), (0x1133B, 0x1133C, S::Extend),
    (0x1133D, 0x1133D, S::OLetter), (0x1133E, 0x11344, S::Extend), (0x11347, 0x11348, S::Extend),
    (0x1134B, 0x1134D, S::Extend), (0x11350, 0x11350, S::OLetter), (0x11357, 0x11357, S::Extend),
    (0x1135D, 0x11361, S::OLetter), (0x11362, 0x11363, S::Extend), (0x11366, 0x1136C, S::Extend),
    (0x11370, 0x11374, S::Extend), (0x11380, 0x11389, S::OLetter), (0x1138B, 0x1138B, S::OLetter),
    (0x1138E, 0x1138E, S::OLetter), (0x11390, 0x113B5, S::OLetter), (0x113B7, 0x113B7, S::OLetter),
    (0x113B8, 0x113C0, S::Extend), (0x113C2, 0x113C2, S::Extend), (0x113C5, 0x113C5, S::Extend),
    (0x113C7, 0x113CA, S::Extend), (0x113CC, 0x113D0, S::Extend), (0x113D1, 0x113D1, S::OLetter),
    (0x113D2, 0x113D2, S::Extend), (0x113D3, 0x113D3, S::OLetter), (0x113D4, 0x113D5, S::STerm),
    (0x113E1, 0x113E2, S::Extend), (0x11400, 0x11434, S::OLetter), (0x11435, 0x11446, S::Extend),
    (0x11447, 0x1144A, S::OLetter), (0x1144B, 0x1144C, S::STerm), (0x11450, 0x11459, S::Numeric),
    (0x1145E, 0x1145E, S::Extend), (0x1145F, 0x11461, S::OLetter), (0x11480, 0x114AF, S::OLetter),
    (0x114B0, 0x114C3, S::Extend), (0x114C4, 0x114C5, S::OLetter), (0x114C7, 0x114C7, S::OLetter),
    (0x114D0, 0x114D9, S::Numeric), (0x11580, 0x115AE, S::OLetter), (0x115AF, 0x115B5, S::Extend),
    (0x115B8, 0x115C0, S::Extend), (0x115C2, 0x115C3, S::STerm), (0x115C9, 0x115D7, S::STerm),
    (0x115D8, 0x115DB, S::OLetter), (0x115DC, 0x115DD, S::Extend), (0x11600, 0x1162F, S::OLetter),
    (0x11630, 0x11640, S::Extend), (0x11641, 0x11642, S::STerm), (0x11644, 0x11644, S::OLetter),
    (0x11650, 0x11659, S::Numeric), (0x11680, 0x116AA, S::OLetter), (0x116AB, 0x116B7, S::Extend),
    (0x116B8, 0x116B8, S::OLetter), (0x116C0, 0x116C9, S::Numeric), (0x116D0, 0x116E3, S::Numeric),
    (0x11700, 0x1171A, S::OLetter), (0x1171D, 0x1172B, S::Extend), (0x11730, 0x11739, S::Numeric),
    (0x1173C, 0x1173E, S::STerm), (0x11740, 0x11746, S::OLetter), (0x11800, 0x1182B, S::OLetter),
    (0x1182C, 0x1183A, S::Extend), (0x118A0, 0x118BF, S::Upper), (0x118C0, 0x118DF, S::Lower),
    (0x118E0, 0x118E9, S::Numeric), (0x118FF, 0x11906, S::OLetter), (0x11909, 0x11909, S::OLetter),
    (0x1190C, 0x11913, S::OLetter), (0x11915, 0x11916, S::OLetter), (0x11918, 0x1192F, S::OLetter),
    (0x11930, 0x11935, S::Extend), (0x11937, 0x11938, S::Extend), (0x1193B, 0x1193E, S::Extend),
    (0x1193F, 0x1193F, S::OLetter), (0x11940, 0x11940, S::Extend), (0x11941, 0x11941, S::OLetter),
    (0x11942, 0x11943, S::Extend), (0x11944, 0x11944, S::STerm), (0x11946, 0x11946, S::STerm),
    (0x11950, 0x11959, S::Numeric), (0x119A0, 0x119A7, S::OLetter), (0x119AA, 0x119D0, S::OLetter),
    (0x119D1, 0x119D7, S::Extend), (0x119DA, 0x119E0, S::Extend), (0x119E1, 0x119E1, S::OLetter),
    (0x119E3, 0x119E3, S::OLetter), (0x119E4, 0x119E4, S::Extend), (0x11A00, 0x11A00, S::OLetter),
    (0x11A01, 0x11A0A, S::Extend), (0x11A0B, 0x11A32, S::OLetter), (0x11A33, 0x11A39, S::Extend),
    (0x11A3A, 0x11A3A, S::OLetter), (0x11A3B, 0x11A3E, S::Extend), (0x11A42, 0x11A43, S::STerm),
    (0x11A47, 0x11A47, S::Extend), (0x11A50, 0x11A50, S::OLetter), (0x11A51, 0x11A5B, S::Extend),
    (0x11A5C, 0x11A89, S::OLetter), (0x11A8A, 0x11A99, S::Extend), (0x11A9B, 0x11A9C, S::STerm),
    (0x11A9D, 0x11A9D, S::OLetter), (0x11AB0, 0x11AF8, S::OLetter), (0x11B60, 0x11B67, S::Extend),
    (0x11BC0, 0x11BE0, S::OLetter), (0x11BF0, 0x11BF9, S::Numeric), (0x11C00, 0x11C08, S::OLetter),
    (0x11C0A, 0x11C2E, S::OLetter), (0x11C2F, 0x11C36, S::Extend), (0x11C38, 0x11C3F, S::Extend),
    (0x11C40, 0x11C40, S::OLetter), (0x11C41, 0x11C42, S::STerm), (0x11C50, 0x11C59, S::Numeric),
    (0x11C72, 0x11C8F, S::OLetter), (0x11C92, 0x11CA7, S::Extend), (0x11CA9, 0x11CB6, S::Extend),
    (0x11D00, 0x11D06, S::OLetter), (0x11D08, 0x11D09, S::OLetter), (0x11D0B, 0x11D30, S::OLetter),
    (0x11D31, 0x11D36, S::Extend), (0x11D3A, 0x11D3A, S::Extend), (0x11D3C, 0x11D3D, S::Extend),
    (0x11D3F, 0x11D45, S::Extend), (0x11D46, 0x11D46, S::OLetter), (0x11D47, 0x11D47, S::Extend),
    (0x11D50, 0x11D59, S::Numeric), (0x11D60, 0x11D65, S::OLetter), (0x11D67, 0x11D68, S::OLetter),
    (0x11D6A, 0x11D89, S::OLetter), (0x11D8A, 0x11D8E, S::Extend), (0x11D90, 0x11D91, S::Extend),
    (0x11D93, 0x11D97, S::Extend), (0x11D98, 0x11D98, S::OLetter), (0x11DA0, 0x11DA9, S::Numeric),
    (0x11DB0, 0x11DDB, S::OLetter), (0x11DE0, 0x11DE9, S::Numeric), (0x11EE0, 0x11EF2, S::OLetter),
    (0x11EF3, 0x11EF6, S::Extend), (0x11EF7, 0x11EF8, S::STerm), (0x11F00, 0x11F01, S::Extend),
    (0x11F02, 0x11F02, S::OLetter), (0x11F03, 0x11F03, S::Extend), (0x11F04, 0x11F10, S::OLetter),
    (0x11F12, 0x11F33, S::OLetter), (0x11F34, 0x11F3A, S::Extend), (0x11F3E, 0x11F42, S::Extend),
    (0x11F43, 0x11F44, S::STerm), (0x11F50, 0x11F59, S::Numeric), (0x11F5A, 0x11F5A, S::Extend),
    (0x11FB0, 0x11FB0, S::OLetter), (0x12000, 0x12399, S::OLetter), (0x12400, 0x1246E, S::OLetter),
    (0x12480, 0x12543, S::OLetter), (0x12F90, 0x12FF0, S::OLetter), (0x13000, 0x1342F, S::OLetter),
    (0x13430, 0x1343F, S::Format), (0x13440, 0x13440, S::Extend), (0x13441, 0x13446, S::OLetter),
    (0x13447, 0x13455, S::Extend), (0x13460, 0x143FA, S::OLetter), (0x14400, 0x14646, S::OLetter),
    (0x16100, 0x1611D, S::OLetter), (0x1611E, 0x1612F, S::Extend), (0x16130, 0x16139, S::Numeric),
    (0x16800, 0x16A38, S::OLetter), (0x16A40, 0x16A5E, S::OLetter), (0x16A60, 0x16A69, S::Numeric),
    (0x16A6E, 0x16A6F, S::STerm), (0x16A70, 0x16ABE, S::OLetter), (0x16AC0, 0x16AC9, S::Numeric),
    (0x16AD0, 0x16AED, S::OLetter), (0x16AF0, 0x16AF4, S::Extend), (0x16AF5, 0x16AF5, S::STerm),
    (0x16B00, 0x16B2F, S::OLetter), (0x16B30, 0x16B36, S::Extend), (0x16B37, 0x16B38, S::STerm),
    (0x16B40, 0x16B43, S::OLetter), (0x16B44, 0x16B44, S::STerm), (0x16B50, 0x16B59, S::Numeric),
    (0x16B63, 0x16B77, S::OLetter), (0x16B7D, 0x16B8F, S::OLetter), (0x16D40, 0x16D6C, S::OLetter),
    (0x16D6E, 0x16D6F, S::STerm), (0x16D70, 0x16D79, S::Numeric), (0x16E40, 0x16E5F, S::Upper),
    (0x16E60, 0x16E7F, S::Lower), (0x16E98, 0x16E98, S::STerm), (0x16EA0, 0x16EB8, S::Upper),
    (0x16EBB, 0x16ED3, S::Lower), (0x16F00, 0x16F4A, S::OLetter), (0x16F4F, 0x16F4F, S::Extend),
    (0x16F50, 0x16F50, S::OLetter), (0x16F51, 0x16F87, S::Extend), (0x16F8F, 0x16F92, S::Extend),
    (0x16F93, 0x16F9F, S::OLetter), (0x16FE0, 0x16FE1, S::OLetter), (0x16FE3, 0x16FE3, S::OLetter),
    (0x16FE4, 0x16FE4, S::Extend), (0x16FF0, 0x16FF1, S::Extend), (0x16FF2, 0x16FF6, S::OLetter),
    (0x17000, 0x18CD5, S::OLetter), (0x18CFF, 0x18D1E, S::OLetter), (0x18D80, 0x18DF2, S::OLetter),
    (0x1AFF0, 0x1AFF3, S::OLetter), (0x1AFF5, 0x1AFFB, S::OLetter), (0x1AFFD, 0x1AFFE, S::OLetter),
    (0x1B000, 0x1B122, S::OLetter), (0x1B132, 0x1B132, S::OLetter), (0x1B150, 0x1B152, S::OLetter),
    (0x1B155, 0x1B155, S::OLetter), (0x1B164, 0x1B167, S::OLetter), (0x1B170, 0x1B2FB, S::OLetter),
    (0x1BC00, 0x1BC6A, S::OLetter), (0x1BC70, 0x1BC7C, S::OLetter), (0x1BC80, 0x1BC88, S::OLetter),
    (0x1BC90, 0x1BC99, S::OLetter), (0x1BC9D, 0x1BC9E, S::Extend), (0x1BC9F, 0x1BC9F, S::STerm),
    (0x1BCA0, 0x1BCA3, S::Format), (0x1CCF0, 0x1CCF9, S::Numeric), (0x1CF00, 0x1CF2D, S::Extend),
    (0x1CF30, 0x1CF46, S::Extend), (0x1D165, 0x1D169, S::Extend), (0x1D16D, 0x1D172, S::Extend),
    (0x1D173, 0x1D17A, S::Format), (0x1D17B, 0x1D182, S::Extend), (0x1D185, 0x1D18B, S::Extend),
    (0x1D1AA, 0x1D1AD, S::Extend), (0x1D242, 0x1D244, S::Extend), (0x1D400, 0x1D419, S::Upper),
    (0x1D41A, 0x1D433, S::Lower), (0x1D434, 0x1D44D, S::Upper), (0x1D44E, 0x1D454, S::Lower),
    (0x1D456, 0x1D467, S::Lower), (0x1D468, 0x1D481, S::Upper), (0x1D482, 0x1D49B, S::Lower),
    (0x1D49C, 0x1D49C, S::Upper), (0x1D49E, 0x1D49F, S::Upper), (0x1D4A2, 0x1D4A2, S::Upper),
    (0x1D4A5, 0x1D4A6, S::Upper), (0x1D4A9, 0x1D4AC, S::Upper), (0x1D4AE, 0x1D4B5, S::Upper),
    (0x1D4B6, 0x1D4B9, S::Lower), (0x1D4BB, 0x1D4BB, S::Lower), (0x1D4BD, 0x1D4C3, S::Lower),
    (0x1D4C5, 0x1D4CF, S::Lower), (0x1D4D0, 0x1D4E9, S::Upper), (0x1D4EA, 0x1D503, S::Lower),
    (0x1D504, 0x1D505, S::Upper), (0x1D507, 0x1D50A, S::Upper), (0x1D50D, 0x1D514, S::Upper),
    (0x1D516, 0x1D51C, S::Upper), (0x1D51E, 0x1D537, S::Lower), (0x1D538, 0x1D539, S::Upper),
    (0x1D53B, 0x1D53E, S::Upper), (0x1D540, 0x1D544, S::Upper), (0x1D546, 0x1D546, S::Upper),
    (0x1D54A, 0x1D550, S::Upper), (0x1D552, 0x1D56B, S::Lower), (0x1D56C, 0x1D585, S::Upper),
    (0x1D586, 0x1D59F, S::Lower), (0x1D5A0, 0x1D5B9, S::Upper), (0x1D5BA, 0x1D5D3, S::Lower),
    (0x1D5D4, 0x1D5ED, S::Upper), (0x1D5EE, 0x1D607, S::Lower), (0x1D608, 0x1D621, S::Upper),
    (0x1D622, 0x1D63B, S::Lower), (0x1D63C, 0x1D655, S::Upper), (0x1D656, 0x1D66F, S::Lower),
    (0x1D670, 0x1D689, S::Upper), (0x1D68A, 0x1D6A5, S::Lower), (0x1D6A8, 0x1D6C0, S::Upper),
    (0x1D6C2, 0x1D6DA, S::Lower), (0x1D6DC, 0x1D6E1, S::Lower), (0x1D6E2, 0x1D6FA, S::Upper),
    (0x1D6FC, 0x1D714, S::Lower), (0x1D716, 0x1D71B, S::Lower), (0x1D71C, 0x1D734, S::Upper),
    (0x1D736, 0x1D74E, S::Lower), (0x1D750, 0x1D755, S::Lower), (0x1D756, 0x1D76E, S::Upper),
    (0x1D770, 0x1D788, S::Lower), (0x1D78A, 0x1D78F, S::Lower), (0x1D790, 0x1D7A8, S::Upper),
    (0x1D7AA, 0x1D7C2, S::Lower), (0x1D7C4, 0x1D7C9, S::Lower), (0x1D7CA, 0x1D7CA, S::Upper),
    (0x1D7CB, 0x1D7CB, S::Lower), (0x1D7CE, 0x1D7FF, S::Numeric), (0x1DA00, 0x1DA36, S::Extend),
    (0x1DA3B, 0x1DA6C, S::Extend), (0x1DA75, 0x1DA75, S::Extend), (0x1DA84, 0x1DA84, S::Extend),
    (0x1DA88, 0x1DA88, S::STerm), (0x1DA9B, 0x1DA9F, S::Extend), (0x1DAA1, 0x1DAAF, S::Extend),
    (0x1DF00, 0x1DF09, S::Lower), (0x1DF0A, 0x1DF0A, S::OLetter), (0x1DF0B, 0x1DF1E, S::Lower),
    (0x1DF25, 0x1DF2A, S::Lower), (0x1E000, 0x1E006, S::Extend), (0x1E008, 0x1E018, S::Extend),
    (0x1E01B, 0x1E021, S::Extend), (0x1E023, 0x1E024, S::Extend), (0x1E026, 0x1E02A, S::Extend),
    (0x1E030, 0x1E06D, S::Lower), (0x1E08F, 0x1E08F, S::Extend), (0x1E100, 0x1E12C, S::OLetter),
    (0x1E130, 0x1E136, S::Extend), (0x1E137, 0x1E13D, S::OLetter), (0x1E140, 0x1E149, S::Numeric),
    (0x1E14E, 0x1E14E, S::OLetter), (0x1E290, 0x1E2AD, S::OLetter), (0x1E2AE, 0x1E2AE, S::Extend),
    (0x1E2C0, 0x1E2EB, S::OLetter), (0x1E2EC, 0x1E2EF, S::Extend), (0x1E2F0, 0x1E2F9, S::Numeric),
    (0x1E4D0, 0x1E4EB, S::OLetter), (0x1E4EC, 0x1E4EF, S::Extend), (0x1E4F0, 0x1E4F9, S::Numeric),
    (0x1E5D0, 0x1E5ED, S::OLetter), (0x1E5EE, 0x1E5EF, S::Extend), (0x1E5F0, 0x1E5F0, S::OLetter),
    (0x1E5F1, 0x1E5FA, S::Numeric), (0x1E6C0, 0x1E6DE, S::OLetter), (0x1E6E0, 0x1E6E2, S::OLetter),
    (0x1E6E3, 0x1E6E3, S::Extend), (0x1E6E4, 0x1E6E5, S::OLetter), (0x1E6E6, 0x1E6E6, S::Extend),
    (0x1E6E7, 0x1E6ED, S::OLetter), (0x1E6EE, 0x1E6EF, S::Extend), (0x1E6F0, 0x1E6F4, S::OLetter),
    (0x1E6F5, 0x1E6F5, S::Extend), (0x1E6FE, 0x1E6FF, S::OLetter), (0x1E7E0, 0x1E7E6, S::OLetter),
    (0x1E7E8, 0x1E7EB, S::OLetter), (0x1E7ED, 0x1E7EE, S::OLetter), (0x1E7F0, 0x1E7FE, S::OLetter),
    (0x1E800, 0x1E8C4, S::OLetter), (0x1E8D0, 0x1E8D6, S::Extend), (0x1E900, 0x1E921, S::Upper),
    (0x1E922, 0x1E943, S::Lower), (0x1E944, 0x1E94A, S::Extend), (0x1E94B, 0x1E94B, S::OLetter),
    (0x1E950, 0x1E959, S::Numeric), (0x1EE00, 0x1EE03, S::OLetter), (0x1EE05, 0x1EE1F, S::OLetter),
    (0x1EE21, 0x1EE22, S::OLetter), (0x1EE24, 0x1EE24, S::OLetter), (0x1EE27, 0x1EE27, S::OLetter),
    (0x1EE29, 0x1EE32, S::OLetter), (0x1EE34, 0x1EE37, S::OLetter), (0x1EE39, 0x1EE39, S::OLetter),
    (0x1EE3B, 0x1EE3B, S::OLetter), (0x1EE42, 0x1EE42, S::OLetter), (0x1EE47, 0x1EE47, S::OLetter),
    (0x1EE49, 0x1EE49, S::OLetter), (0x1EE4B, 0x1EE4B, S::OLetter), (0x1EE4D, 0x1EE4F, S::OLetter),
    (0x1EE51, 0x1EE52, S::OLetter), (0x1EE54, 0x1EE54, S::OLetter), (0x1EE57, 0x1EE57, S::OLetter),
    (0x1EE59, 0x1EE59, S::OLetter), (0x1EE5B, 0x1EE5B, S::OLetter), (0x1EE5D, 0x1EE5D, S::OLetter),
    (0x1EE5F, 0x1EE5F, S::OLetter), (0x1EE61, 0x1EE62, S::OLetter), (0x1EE64, 0x1EE64, S::OLetter),
    (0x1EE67, 0x1EE6A, S::OLetter), (0x1EE6C, 0x1EE72, S::OLetter), (0x1EE74, 0x1EE77, S::OLetter),
    (0x1EE79, 0x1EE7C, S::OLetter), (0x1EE7E, 0x1EE7E, S::OLetter), (0x1EE80, 0x1EE89, S::OLetter),
    (0x1EE8B, 0x1EE9B, S::OLetter), (0x1EEA1, 0x1EEA3, S::OLetter), (0x1EEA5, 0x1EEA9, S::OLetter),
    (0x1EEAB, 0x1EEBB, S::OLetter), (0x1F130, 0x1F149, S::Upper), (0x1F150, 0x1F169, S::Upper),
    (0x1F170, 0x1F189, S::Upper), (0x1F676, 0x1F678, S::Close), (0x1FBF0, 0x1FBF9, S::Numeric),
    (0x20000, 0x2A6DF, S::OLetter), (0x2A700, 0x2B81D, S::OLetter), (0x2B820, 0x2CEAD, S::OLetter),
    (0x2CEB0, 0x2EBE0, S::OLetter), (0x2EBF0, 0x2EE5D, S::OLetter), (0x2F800, 0x2FA1D, S::OLetter),
    (0x30000, 0x3134A, S::OLetter), (0x31350, 0x33479, S::OLetter), (0xE0001, 0xE0001, S::Format),
    (0xE0020, 0xE007F, S::Extend), (0xE0100, 0xE01EF, S::Extend),
];

/// `Line_Break` property.
#[rustfmt::skip]
pub(crate) static LINE_BREAK: &[(u32, u32, L)] = &[
    (0x0000, 0x0008, L::CM), (0x0009, 0x0009, L::BA), (0x000A, 0x000A, L::LF),
    (0x000B, 0x000C, L::BK), (0x000D, 0x000D, L::CR), (0x000E, 0x001F, L::CM),
    (0x0020, 0x0020, L::SP), (0x0021, 0x0021, L::EX), (0x0022, 0x0022, L::QU),
    (0x0023, 0x0023, L::AL), (0x0024, 0x0024, L::PR), (0x0025, 0x0025, L::PO),
    (0x0026, 0x0026, L::AL), (0x0027, 0x0027, L::QU), (0x0028, 0x0028, L::OP),
    (0x0029, 0x0029, L::CP), (0x002A, 0x002A, L::AL), (0x002B, 0x002B, L::PR),
    (0x002C, 0x002C, L::IS), (0x002D, 0x002D, L::HY), (0x002E, 0x002E, L::IS),
    (0x002F, 0x002F, L::SY), (0x0030, 0x0039, L::NU), (0x003A, 0x003B, L::IS),
    (0x003C, 0x003E, L::AL), (0x003F, 0x003F, L::EX), (0x0040, 0x005A, L::AL),
    (0x005B, 0x005B, L::OP), (0x005C, 0x005C, L::PR), (0x005D, 0x005D, L::CP),
    (0x005E, 0x007A, L::AL), (0x007B, 0x007B, L::OP), (0x007C, 0x007C, L::BA),
    (0x007D, 0x007D, L::CL), (0x007E, 0x007E, L::AL), (0x007F, 0x0084, L::CM),
    (0x0085, 0x0085, L::NL), (0x0086, 0x009F, L::CM), (0x00A0, 0x00A0, L::GL),
    (0x00A1, 0x00A1, L::OP), (0x00A2, 0x00A2, L::PO), (0x00A3, 0x00A5, L::PR),
    (0x00A6, 0x00A6, L::AL), (0x00A7, 0x00A8, L::AI), (0x00A9, 0x00A9, L::AL),
    (0x00AA, 0x00AA, L::AI), (0x00AB, 0x00AB, L::QU), (0x00AC, 0x00AC, L::AL),
    (0x00AD, 0x00AD, L::BA), (0x00AE, 0x00AF, L::AL), (0x00B0, 0x00B0, L::PO),
    (0x00B1, 0x00B1, L::PR), (0x00B2, 0x00B3, L::AI), (0x00B4, 0x00B4, L::BB),
    (0x00B5, 0x00B5, L::AL), (0x00B6, 0x00BA, L::AI), (0x00BB, 0x00BB, L::QU),
    (0x00BC, 0x00BE, L::AI), (0x00BF, 0x00BF, L::OP), (0x00C0, 0x00D6, L::AL),
    (0x00D7, 0x00D7, L::AI), (0x00D8, 0x00F6, L::AL), (0x00F7, 0x00F7, L::AI),
    (0x00F8, 0x02C6, L::AL), (0x02C7, 0x02C7, L::AI), (0x02C8, 0x02C8, L::BB),
    (0x02C9, 0x02CB, L::AI), (0x02CC, 0x02CC, L::BB), (0x02CD, 0x02CD, L::AI),
    (0x02CE, 0x02CF, L::AL), (0x02D0, 0x02D0, L::AI), (0x02D1, 0x02D7, L::AL),
    (0x02D8, 0x02DB, L::AI), (0x02DC, 0x02DC, L::AL), (0x02DD, 0x02DD, L::AI),
    (0x02DE, 0x02DE, L::AL), (0x02DF, 0x02DF, L::BB), (0x02E0, 0x02FF, L::AL),
    (0x0300, 0x035B, L::CM), (0x035C, 0x0362, L::GL), (0x0363, 0x036F, L::CM),
    (0x0370, 0x0377, L::AL), (0x037A, 0x037D, L::AL), (0x037E, 0x037E, L::IS),
    (0x037F, 0x037F, L::AL), (0x0384, 0x038A, L::AL), (0x038C, 0x038C, L::AL),
    (0x038E, 0x03A1, L::AL), (0x03A3, 0x0482, L::AL), (0x0483, 0x0489, L::CM),
    (0x048A, 0x052F, L::AL), (0x0531, 0x0556, L::AL), (0x0559, 0x0588, L::AL),
    (0x0589, 0x0589, L::IS), (0x058D, 0x058E, L::AL), (0x058F, 0x058F, L::PR),
    (0x0591, 0x05BD, L::CM), (0x05BF, 0x05BF, L::CM), (0x05C0, 0x05C0, L::AL),
    (0x05C1, 0x05C2, L::CM), (0x05C3, 0x05C3, L::AL), (0x05C4, 0x05C5, L::CM),
    (0x05C6, 0x05C6, L::EX), (0x05C7, 0x05C7, L::CM), (0x05D0, 0x05EA, L::HL),
    (0x05EF, 0x05F2, L::HL), (0x05F3, 0x05F4, L::AL), (0x0600, 0x0605, L::NU),
    (0x0606, 0x0608, L::AL), (0x0609, 0x060B, L::PO), (0x060C, 0x060D, L::IS),
    (0x060E, 0x060F, L::AL), (0x0610, 0x061A, L::CM), (0x061B, 0x061B, L::EX),
    (0x061C, 0x061C, L::CM), (0x061D, 0x061F, L::EX), (0x0620, 0x064A, L::AL),
    (0x064B, 0x065F, L::CM), (0x0660, 0x0669, L::NU), (0x066A, 0x066A, L::PO),
    (0x066B, 0x066C, L::NU), (0x066D, 0x066F, L::AL), (0x0670, 0x0670, L::CM),
    (0x0671, 0x06D3, L::AL), (0x06D4, 0x06D4, L::EX), (0x06D5, 0x06D5, L::AL),
    (0x06D6, 0x06DC, L::CM), (0x06DD, 0x06DD, L::NU), (0x06DE, 0x06DE, L::AL),
    (0x06DF, 0x06E4, L::CM), (0x06E5, 0x06E6, L::AL), (0x06E7, 0x06E8, L::CM),
    (0x06E9, 0x06E9, L::AL), (0x06EA, 0x06ED, L::CM), (0x06EE, 0x06EF, L::AL),
    (0x06F0, 0x06F9, L::NU), (0x06FA, 0x070D, L::AL), (0x070F, 0x0710, L::AL),
    (0x0711, 0x0711, L::CM), (0x0712, 0x072F, L::AL), (0x0730, 0x074A, L::CM),
    (0x074D, 0x07A5, L::AL), (0x07A6, 0x07B0, L::CM), (0x07B1, 0x07B1, L::AL),
    (0x07C0, 0x07C9, L::NU), (0x07CA, 0x07EA, L::AL), (0x07EB, 0x07F3, L::CM),
    (0x07F4, 0x07F7, L::AL), (0x07F8, 0x07F8, L::IS), (0x07F9, 0x07F9, L::EX),
    (0x07FA, 0x07FA, L::AL), (0x07FD, 0x07FD, L::CM), (0x07FE, 0x07FF, L::PR),
    (0x0800, 0x0815, L::AL), (0x0816, 0x0819, L::CM), (0x081A, 0x081A, L::AL),
    (0x081B, 0x0823, L::CM), (0x0824, 0x0824, L::AL), (0x0825, 0x0827, L::CM),
    (0x0828, 0x0828, L::AL), (0x0829, 0x082D, L::CM), (0x0830, 0x083E, L::AL),
    (0x0840, 0x0858, L::AL), (0x0859, 0x085B, L::CM), (0x085E, 0x085E, L::AL),
    (0x0860, 0x086A, L::AL), (0x0870, 0x088F, L::AL), (0x0890, 0x0891, L::NU),
    (0x0897, 0x089F, L::CM), (0x08A0, 0x08C9, L::AL), (0x08CA, 0x08E1, L::CM),
    (0x08E2, 0x08E2, L::NU), (0x08E3, 0x0903, L::CM), (0x0904, 0x0939, L::AL),
    (0x093A, 0x093C, L::CM), (0x093D, 0x093D, L::AL), (0x093E, 0x094F, L::CM),
    (0x0950, 0x0950, L::AL), (0x0951, 0x0957, L::CM), (0x0958, 0x0961, L::AL),
    (0x0962, 0x0963, L::CM), (0x0964, 0x0965, L::BA), (0x0966, 0x096F, L::NU),
    (0x0970, 0x0980, L::AL), (0x0981, 0x0983, L::CM), (0x0985, 0x098C, L::AL),
    (0x098F, 0x0990, L::AL), (0x0993, 0x09A8, L::AL), (0x09AA, 0x09B0, L::AL),
    (0x09B2, 0x09B2, L::AL), (0x09B6, 0x09B9, L::AL), (0x09BC, 0x09BC, L::CM),
    (0x09BD, 0x09BD, L::AL), (0x09BE, 0x09C4, L::CM), (0x09C7, 0x09C8, L::CM),
    (0x09CB, 0x09CD, L::CM), (0x09CE, 0x09CE, L::AL), (0x09D7, 0x09D7, L::CM),
    (0x09DC, 0x09DD, L::AL), (0x09DF, 0x09E1, L::AL), (0x09E2, 0x09E3, L::CM),
    (0x09E6, 0x09EF, L::NU), (0x09F0, 0x09F1, L::AL), (0x09F2, 0x09F3, L::PO),
    (0x09F4, 0x09F8, L::AL), (0x09F9, 0x09F9, L::PO), (0x09FA, 0x09FA, L::AL),
    (0x09FB, 0x09FB, L::PR), (0x09FC, 0x09FD, L::AL), (0x09FE, 0x09FE, L::CM),
    (0x0A01, 0x0A03, L::CM), (0x0A05, 0x0A0A, L::AL), (0x0A0F, 0x0A10, L::AL),
    (0x0A13, 0x0A28, L::AL), (0x0A2A, 0x0A30, L::AL), (0x0A32, 0x0A33, L::AL),
    (0x0A35, 0x0A36, L::AL), (0x0A38, 0x0A39, L::AL), (0x0A3C, 0x0A3C, L::CM),
    (0x0A3E, 0x0A42, L::CM), (0x0A47, 0x0A48, L::CM), (0x0A4B, 0x0A4D, L::CM),
    (0x0A51, 0x0A51, L::CM), (0x0A59, 0x0A5C, L::AL), (0x0A5E, 0x0A5E, L::AL),
    (0x0A66, 0x0A6F, L::NU), (0x0A70, 0x0A71, L::CM), (0x0A72, 0x0A74, L::AL),
    (0x0A75, 0x0A75, L::CM), (0x0A76, 0x0A76, L::AL), (0x0A81, 0x0A83, L::CM),
    (0x0A85, 0x0A8D, L::AL), (0x0A8F, 0x0A91, L::AL), (0x0A93, 0x0AA8, L::AL),
    (0x0AAA, 0x0AB0, L::AL), (0x0AB2, 0x0AB3, L::AL), (0x0AB5, 0x0AB9, L::AL),
    (0x0ABC, 0x0ABC, L::CM), (0x0ABD, 0x0ABD, L::AL), (0x0ABE, 0x0AC5, L::CM),
    (0x0AC7, 0x0AC9, L::CM), (0x0ACB, 0x0ACD, L::CM), (0x0AD0, 0x0AD0, L::AL),
    (0x0AE0, 0x0AE1, L::AL), (0x0AE2, 0x0AE3, L::CM), (0x0AE6, 0x0AEF, L::NU),
    (0x0AF0, 0x0AF0, L::AL), (0x0AF1, 0x0AF1, L::PR), (0x0AF9, 0x0AF9, L::AL),
    (0x0AFA, 0x0AFF, L::CM), (0x0B01, 0x0B03, L::CM), (0x0B05, 0x0B0C, L::AL),
    (0x0B0F, 0x0B10, L::AL), (0x0B13, 0x0B28, L::AL), (0x0B2A, 0x0B30, L::AL),
    (0x0B32, 0x0B33, L::AL), (0x0B35, 0x0B39, L::AL), (0x0B3C, 0x0B3C, L::CM),
    (0x0B3D, 0x0B3D, L::AL), (0x0B3E, 0x0B44, L::CM), (0x0B47, 0x0B48, L::CM),
    (0x0B4B, 0x0B4D, L::CM), (0x0B55, 0x0B57, L::CM), (0x0B5C, 0x0B5D, L::AL),
    (0x0B5F, 0x0B61, L::AL), (0x0B62, 0x0B63, L::CM), (0x0B66, 0x0B6F, L::NU),
    (0x0B70, 0x0B77, L::AL), (0x0B82, 0x0B82, L::CM), (0x0B83, 0x0B83, L::AL),
    (0x0B85, 0x0B8A, L::AL), (0x0B8E, 0x0B90, L::AL), (0x0B92, 0x0B95, L::AL),
    (0x0B99, 0x0B9A, L::AL), (0x0B9C, 0x0B9C, L::AL), (0x0B9E, 0x0B9F, L::AL),
    (0x0BA3, 0x0BA4, L::AL), (0x0BA8, 0x0BAA, L::AL), (0x0BAE, 0x0BB9, L::AL),
    (0x0BBE, 0x0BC2, L::CM), (0x0BC6, 0x0BC8, L::CM), (0x0BCA, 0x0BCD, L::CM),
    (0x0BD0, 0x0BD0, L::AL), (0x0BD7, 0x0BD7, L::CM), (0x0BE6, 0x0BEF, L::NU),
    (0x0BF0, 0x0BF8, L::AL), (0x0BF9, 0x0BF9, L::PR), (0x0BFA, 0x0BFA, L::AL),
    (0x0C00, 0x0C04, L::CM), (0x0C05, 0x0C0C, L::AL), (0x0C0E, 0x0C10, L::AL),
    (0x0C12, 0x0C28, L::AL), (0x0C2A, 0x0C39, L::AL), (0x0C3C, 0x0C3C, L::CM),
    (0x0C3D, 0x0C3D, L::AL), (0x0C3E, 0x0C44, L::CM), (0x0C46, 0x0C48, L::CM),
    (0x0C4A, 0x0C4D, L::CM), (0x0C55, 0x0C56, L::CM), (0x0C58, 0x0C5A, L::AL),
    (0x0C5C, 0x0C5D, L::AL), (0x0C60, 0x0C61, L::AL), (0x0C62, 0x0C63, L::CM),
    (0x0C66, 0x0C6F, L::NU), (0x0C77, 0x0C77, L::BB), (0x0C78, 0x0C80, L::AL),
    (0x0C81, 0x0C83, L::CM), (0x0C84, 0x0C84, L::BB), (0x0C85, 0x0C8C, L::AL),
    (0x0C8E, 0x0C90, L::AL), (0x0C92, 0x0CA8, L::AL), (0x0CAA, 0x0CB3, L::AL),
    (0x0CB5, 0x0CB9, L::AL), (0x0CBC, 0x0CBC, L::CM), (0x0CBD, 0x0CBD, L::AL),
    (0x0CBE, 0x0CC4, L::CM), (0x0CC6, 0x0CC8, L::CM), (0x0CCA, 0x0CCD, L::CM),
    (0x0CD5, 0x0CD6, L::CM), (0x0CDC, 0x0CDE, L::AL), (0x0CE0, 0x0CE1, L::AL),
    (0x0CE2, 0x0CE3, L::CM), (0x0CE6, 0x0CEF, L::NU), (0x0CF1, 0x0CF2, L::AL),
    (0x0CF3, 0x0CF3, L::CM), (0x0D00, 0x0D03, L::CM), (0x0D04, 0x0D0C, L::AL),
    (0x0D0E, 0x0D10, L::AL), (0x0D12, 0x0D3A, L::AL), (0x0D3B, 0x0D3C, L::CM),
    (0x0D3D, 0x0D3D, L::AL), (0x0D3E, 0x0D44, L::CM), (0x0D46, 0x0D48, L::CM),
    (0x0D4A, 0x0D4D, L::CM), (0x0D4E, 0x0D4F, L::AL), (0x0D54, 0x0D56, L::AL),
    (0x0D57, 0x0D57, L::CM), (0x0D58, 0x0D61, L::AL), (0x0D62, 0x0D63, L::CM),
    (0x0D66, 0x0D6F, L::NU), (0x0D70, 0x0D78, L::AL), (0x0D79, 0x0D79, L::PO),
    (0x0D7A, 0x0D7F, L::AL), (0x0D81, 0x0D83, L::CM), (0x0D85, 0x0D96, L::AL),
    (0x0D9A, 0x0DB1, L::AL), (0x0DB3, 0x0DBB, L::AL), (0x0DBD, 0x0DBD, L::AL),
    (0x0DC0, 0x0DC6, L::AL), (0x0DCA, 0x0DCA, L::CM), (0x0DCF, 0x0DD4, L::CM),
    (0x0DD6, 0x0DD6, L::CM), (0x0DD8, 0x0DDF, L::CM), (0x0DE6, 0x0DEF, L::NU),
    (0x0DF2, 0x0DF3, L::CM), (0x0DF4, 0x0DF4, L::AL), (0x0E01, 0x0E3A, L::SA),
    (0x0E3F, 0x0E3F, L::PR), (0x0E40, 0x0E4E, L::SA), (0x0E4F, 0x0E4F, L::AL),
    (0x0E50, 0x0E59, L::NU), (0x0E5A, 0x0E5B, L::BA), (0x0E81, 0x0E82, L::SA),
    (0x0E84, 0x0E84, L::SA), (0x0E86, 0x0E8A, L::SA), (0x0E8C, 0x0EA3, L::SA),
    (0x0EA5, 0x0EA5, L::SA), (0x0EA7, 0x0EBD, L::SA), (0x0EC0, 0x0EC4, L::SA),
    (0x0EC6, 0x0EC6, L::SA), (0x0EC8, 0x0ECE, L::SA), (0x0ED0, 0x0ED9, L::NU),
    (0x0EDC, 0x0EDF, L::SA), (0x0F00, 0x0F00, L::AL), (0x0F01, 0x0F04, L::BB),
    (0x0F05, 0x0F05, L::AL), (0x0F06, 0x0F07, L::BB), (0x0F08, 0x0F08, L::GL),
    (0x0F09, 0x0F0A, L::BB), (0x0F0B, 0x0F0B, L::BA), (0x0F0C, 0x0F0C, L::GL),
    (0x0F0D, 0x0F11, L::EX), (0x0F12, 0x0F12, L::GL), (0x0F13, 0x0F13, L::AL),
    (0x0F14, 0x0F14, L::EX), (0x0F15, 0x0F17, L::AL), (0x0F18, 0x0F19, L::CM),
    (0x0F1A, 0x0F1F, L::AL), (0x0F20, 0x0F29, L::NU), (0x0F2A, 0x0F33, L::AL),
    (0x0F34, 0x0F34, L::BA), (0x0F35, 0x0F35, L::CM), (0x0F36, 0x0F36, L::AL),
    (0x0F37, 0x0F37, L::CM), (0x0F38, 0x0F38, L::AL), (0x0F39, 0x0F39, L::CM),
    (0x0F3A, 0x0F3A, L::OP), (0x0F3B, 0x0F3B, L::CL), (0x0F3C, 0x0F3C, L::OP),
    (0x0F3D, 0x0F3D, L::CL), (0x0F3E, 0x0F3F, L::CM), (0x0F40, 0x0F47, L::AL),
    (0x0F49, 0x0F6C, L::AL), (0x0F71, 0x0F7E, L::CM), (0x0F7F, 0x0F7F, L::BA),
    (0x0F80, 0x0F84, L::CM), (0x0F85, 0x0F85, L::BA), (0x0F86, 0x0F87, L::CM),
    (0x0F88, 0x0F8C, L::AL), (0x0F8D, 0x0F97, L::CM), (0x0F99, 0x0FBC, L::CM),
    (0x0FBE, 0x0FBF, L::BA), (0x0FC0, 0x0FC5, L::AL), (0x0FC6, 0x0FC6, L::CM),
    (0x0FC7, 0x0FCC, L::AL), (0x0FCE, 0x0FCF, L::AL), (0x0FD0, 0x0FD1, L::BB),
    (0x0FD2, 0x0FD2, L::BA), (0x0FD3, 0x0FD3, L::BB), (0x0FD4, 0x0FD8, L::AL),
    (0x0FD9, 0x0FDA, L::GL), (0x1000, 0x103F, L::SA), (0x1040, 0x1049, L::NU),
    (0x104A, 0x104B, L::BA), (0x104C, 0x104F, L::AL), (0x1050, 0x108F, L::SA),
    (0x1090, 0x1099, L::NU), (0x109A, 0x109F, L::SA), (0x10A0, 0x10C5, L::AL),
    (0x10C7, 0x10C7, L::AL), (0x10CD, 0x10CD, L::AL), (0x10D0, 0x10FF, L::AL),
    (0x1100, 0x115F, L::JL), (0x1160, 0x11A7, L::JV), (0x11A8, 0x11FF, L::JT),
    (0x1200, 0x1248, L::AL), (0x124A, 0x124D, L::AL), (0x1250, 0x1256, L::AL),
    (0x1258, 0x1258, L::AL), (0x125A, 0x125D, L::AL), (0x1260, 0x1288, L::AL),
    (0x128A, 0x128D, L::AL), (0x1290, 0x12B0, L::AL), (0x12B2, 0x12B5, L::AL),
    (0x12B8, 0x12BE, L::AL), (0x12C0, 0x12C0, L::AL), (0x12C2, 0x12C5, L::AL),
    (0x12C8, 0x12D6, L::AL), (0x12D8, 0x1310, L::AL), (0x1312, 0x1315, L::AL),
    (0x1318, 0x135A, L::AL), (0x135D, 0x135F, L::CM), (0x1360, 0x1360, L::AL),
    (0x1361, 0x1361, L::BA), (0x1362, 0x137C, L::AL), (0x1380, 0x1399, L::AL),
    (0x13A0, 0x13F5, L::AL), (0x13F8, 0x13FD, L::AL), (0x1401, 0x167F, L::AL),
    (0x1680, 0x1680, L::BA), (0x1681, 0x169A, L::AL), (0x169B, 0x169B, L::OP),
    (0x169C, 0x169C, L::CL), (0x16A0, 0x16EA, L::AL), (0x16EB, 0x16ED, L::BA),
    (0x16EE, 0x16F8, L::AL), (0x1700, 0x1711, L::AL), (0x1712, 0x1715, L::CM),
    (0x171F, 0x1731, L::AL), (0x1732, 0x1734, L::CM), (0x1735, 0x1736, L::BA),
    (0x1740, 0x1751, L::AL), (0x1752, 0x1753, L::CM), (0x1760, 0x176C, L::AL),
    (0x176E, 0x1770, L::AL), (0x1772, 0x1773, L::CM), (0x1780, 0x17D3, L::SA),
    (0x17D4, 0x17D5, L::BA), (0x17D6, 0x17D6, L::NS), (0x17D7, 0x17D7, L::SA),
    (0x17D8, 0x17D8, L::BA), (0x17D9, 0x17D9, L::AL), (0x17DA, 0x17DA, L::BA),
    (0x17DB, 0x17DB, L::PR), (0x17DC, 0x17DD, L::SA), (0x17E0, 0x17E9, L::NU),
    (0x17F0, 0x17F9, L::AL), (0x1800, 0x1801, L::AL), (0x1802, 0x1803, L::EX),
    (0x1804, 0x1805, L::BA), (0x1806, 0x1806, L::BB), (0x1807, 0x1807, L::AL),
    (0x1808, 0x1809, L::EX), (0x180A, 0x180A, L::AL), (0x180B, 0x180D, L::CM),
    (0x180E, 0x180E, L::GL), (0x180F, 0x180F, L::CM), (0x1810, 0x1819, L::NU),
    (0x1820, 0x1878, L::AL), (0x1880, 0x1884, L::AL), (0x1885, 0x1886, L::CM),
    (0x1887, 0x18A8, L::AL), (0x18A9, 0x18A9, L::CM), (0x18AA, 0x18AA, L::AL),
    (0x18B0, 0x18F5, L::AL), (0x1900, 0x191E, L::AL), (0x1920, 0x192B, L::CM),
    (0x1930, 0x193B, L::CM), (0x1940, 0x1940, L::AL), (0x1944, 0x1945, L::EX),
    (0x1946, 0x194F, L::NU), (0x1950, 0x196D, L::SA), (0x1970, 0x1974, L::SA),
    (0x1980, 0x19AB, L::SA), (0x19B0, 0x19C9, L::SA), (0x19D0, 0x19DA, L::NU),
    (0x19DE, 0x19DF, L::SA), (0x19E0, 0x1A16, L::AL), (0x1A17, 0x1A1B, L::CM),
    (0x1A1E, 0x1A1F, L::AL), (0x1A20, 0x1A5E, L::SA), (0x1A60, 0x1A7C, L::SA),
    (0x1A7F, 0x1A7F, L::CM), (0x1A80, 0x1A89, L::NU), (0x1A90, 0x1A99, L::NU),
    (0x1AA0, 0x1AAD, L::SA), (0x1AB0, 0x1ADD, L::CM), (0x1AE0, 0x1AEA, L::CM),
    (0x1AEB, 0x1AEB, L::GL), (0x1B00, 0x1B04, L::CM), (0x1B05, 0x1B33, L::AK),
    (0x1B34, 0x1B43, L::CM), (0x1B44, 0x1B44, L::VI), (0x1B45, 0x1B4C, L::AK),
    (0x1B4E, 0x1B4F, L::BA), (0x1B50, 0x1B59, L::AS), (0x1B5A, 0x1B5B, L::BA),
    (0x1B5C, 0x1B5C, L::ID), (0x1B5D, 0x1B60, L::BA), (0x1B61, 0x1B6A, L::ID),
    (0x1B6B, 0x1B73, L::CM), (0x1B74, 0x1B7C, L::ID), (0x1B7D, 0x1B7F, L::BA),
    (0x1B80, 0x1B82, L::CM), (0x1B83, 0x1BA0, L::AL), (0x1BA1, 0x1BAD, L::CM),
    (0x1BAE, 0x1BAF, L::AL), (0x1BB0, 0x1BB9, L::NU), (0x1BBA, 0x1BBF, L::AL),
    (0x1BC0, 0x1BE5, L::AS), (0x1BE6, 0x1BF1, L::CM), (0x1BF2, 0x1BF3, L::VF),
    (0x1BFC, 0x1C23, L::AL), (0x1C24, 0x1C37, L::CM), (0x1C3B, 0x1C3F, L::BA),
    (0x1C40, 0x1C49, L::NU), (0x1C4D, 0x1C4F, L::AL), (0x1C50, 0x1C59, L::NU),
    (0x1C5A, 0x1C7D, L::AL), (0x1C7E, 0x1C7F, L::BA), (0x1C80, 0x1C8A, L::AL),
    (0x1C90, 0x1CBA, L::AL), (0x1CBD, 0x1CC7, L::AL), (0x1CD0, 0x1CD2, L::CM),
    (0x1CD3, 0x1CD3, L::AL), (0x1CD4, 0x1CE8, L::CM), (0x1CE9, 0x1CEC, L::AL),
    (0x1CED, 0x1CED, L::CM), (0x1CEE, 0x1CF3, L::AL), (0x1CF4, 0x1CF4, L::CM),
    (0x1CF5, 0x1CF6, L::AL), (0x1CF7, 0x1CF9, L::CM), (0x1CFA, 0x1CFA, L::AL),
    (0x1D00, 0x1DBF, L::AL), (0x1DC0, 0x1DCC, L::CM), (0x1DCD, 0x1DCD, L::GL),
    (0x1DCE, 0x1DFB, L::CM), (0x1DFC, 0x1DFC, L::GL), (0x1DFD, 0x1DFF, L::CM),
    (0x1E00, 0x1F15, L::AL), (0x1F18, 0x1F1D, L::AL), (0x1F20, 0x1F45, L::AL),
    (0x1F48, 0x1F4D, L::AL), (0x1F50, 0x1F57, L::AL), (0x1F59, 0x1F59, L::AL),
    (0x1F5B, 0x1F5B, L::AL), (0x1F5D, 0x1F5D, L::AL), (0x1F5F, 0x1F7D, L::AL),
    (0x1F80, 0x1FB4, L::AL), (0x1FB6, 0x1FC4, L::AL), (0x1FC6, 0x1FD3, L::AL),
    (0x1FD6, 0x1FDB, L::AL), (0x1FDD, 0x1FEF, L::AL), (0x1FF2, 0x1FF4, L::AL),
    (0x1FF6, 0x1FFC, L::AL), (0x1FFD, 0x1FFD, L::BB), (0x1FFE, 0x1FFE, L::AL),
    (0x2000, 0x2006, L::BA), (0x2007, 0x2007, L::GL), (0x2008, 0x200A, L::BA),
    (0x200B, 0x200B, L::ZW), (0x200C, 0x200C, L::CM), (0x200D, 0x200D, L::ZWJ),
    (0x200E, 0x200F, L::CM), (0x2011, 0x2011, L::GL), (0x2014, 0x2014, L::B2),
    (0x2015, 0x2016, L::AI), (0x2017, 0x2017, L::AL), (0x2018, 0x2019, L::QU),
    (0x201A, 0x201A, L::OP), (0x201B, 0x201D, L::QU), (0x201E, 0x201E, L::OP),
    (0x201F, 0x201F, L::QU), (0x2020, 0x2021, L::AI), (0x2022, 0x2023, L::AL),
    (0x2024, 0x2026, L::IN), (0x2027, 0x2027, L::BA), (0x2028, 0x2029, L::BK),
    (0x202A, 0x202E, L::CM), (0x202F, 0x202F, L::GL), (0x2030, 0x2037, L::PO),
    (0x2038, 0x2038, L::AL), (0x2039, 0x203A, L::QU), (0x203B, 0x203B, L::AI),
    (0x203C, 0x203D, L::NS), (0x203E, 0x2043, L::AL), (0x2044, 0x2044, L::IS),
    (0x2045, 0x2045, L::OP), (0x2046, 0x2046, L::CL), (0x2047, 0x2049, L::NS),
    (0x204A, 0x2055, L::AL), (0x2056, 0x2056, L::BA), (0x2057, 0x2057, L::PO),
    (0x2058, 0x205B, L::BA), (0x205C, 0x205C, L::AL), (0x205D, 0x205F, L::BA),
    (0x2060, 0x2060, L::WJ), (0x2061, 0x2064, L::AL), (0x2066, 0x206F, L::CM),
    (0x2070, 0x2071, L::AL), (0x2074, 0x2074, L::AI), (0x2075, 0x207C, L::AL),
    (0x207D, 0x207D, L::OP), (0x207E, 0x207E, L::CL), (0x207F, 0x207F, L::AI),
    (0x2080, 0x2080, L::AL), (0x2081, 0x2084, L::AI), (0x2085, 0x208C, L::AL),
    (0x208D, 0x208D, L::OP), (0x208E, 0x208E, L::CL), (0x2090, 0x209C, L::AL),
    (0x20A0, 0x20A6, L::PR), (0x20A7, 0x20A7, L::PO), (0x20A8, 0x20B5, L::PR),
    (0x20B6, 0x20B6, L::PO), (0x20B7, 0x20BA, L::PR), (0x20BB, 0x20BB, L::PO),
    (0x20BC, 0x20BD, L::PR), (0x20BE, 0x20BE, L::PO), (0x20BF, 0x20BF, L::PR),
    (0x20C0, 0x20C0, L::PO), (0x20C1, 0x20CF, L::PR), (0x20D0, 0x20F0, L::CM),
    (0x2100, 0x2102, L::AL), (0x2103, 0x2103, L::PO), (0x2104, 0x2104, L::AL),
    (0x2105, 0x2105, L::AI), (0x2106, 0x2108, L::AL), (0x2109, 0x2109, L::PO),
    (0x210A, 0x2112, L::AL), (0x2113, 0x2113, L::AI), (0x2114, 0x2115, L::AL),
    (0x2116, 0x2116, L::PR), (0x2117, 0x2120, L::AL), (0x2121, 0x2122, L::AI),
    (0x2123, 0x212A, L::AL), (0x212B, 0x212B, L::AI), (0x212C, 0x214F, L::AL),
    (0x2150, 0x215E, L::AI), (0x215F, 0x215F, L::AL), (0x2160, 0x216B, L::AI),
    (0x216C, 0x216F, L::AL), (0x2170, 0x2179, L::AI), (0x217A, 0x2188, L::AL),
    (0x2189, 0x2189, L::AI), (0x218A, 0x218B, L::AL), (0x2190, 0x2199, L::AI),
    (0x219A, 0x21D1, L::AL), (0x21D2, 0x21D2, L::AI), (0x21D3, 0x21D3, L::AL),
    (0x21D4, 0x21D4, L::AI), (0x21D5, 0x21FF, L::AL), (0x2200, 0x2200, L::AI),
    (0x2201, 0x2201, L::AL), (0x2202, 0x2203, L::AI), (0x2204, 0x2206, L::AL),
    (0x2207, 0x2208, L::AI), (0x2209, 0x220A, L::AL), (0x220B, 0x220B, L::AI),
    (0x220C, 0x220E, L::AL), (0x220F, 0x220F, L::AI), (0x2210, 0x2210, L::AL),
    (0x2211, 0x2211, L::AI), (0x2212, 0x2213, L::PR), (0x2214, 0x2214, L::AL),
    (0x2215, 0x2215, L::AI), (0x2216, 0x2219, L::AL), (0x221A, 0x221A, L::AI),
    (0x221B, 0x221C, L::AL), (0x221D, 0x2220, L::AI), (0x2221, 0x2222, L::AL),
    (0x2223, 0x2223, L::AI), (0x2224, 0x2224, L::AL), (0x2225, 0x2225, L::AI),
    (0x2226, 0x2226, L::AL), (0x2227, 0x222C, L::AI), (0x222D, 0x222D, L::AL),
    (0x222E, 0x222E, L::AI), (0x222F, 0x2233, L::AL), (0x2234, 0x2237, L::AI),
    (0x2238, 0x223B, L::AL), (0x223C, 0x223D, L::AI), (0x223E, 0x2247, L::AL),
    (0x2248, 0x2248, L::AI), (0x2249, 0x224B, L::AL), (0x224C, 0x224C, L::AI),
    (0x224D, 0x2251, L::AL), (0x2252, 0x2252, L::AI), (0x2253, 0x225F, L::AL),
    (0x2260, 0x2261, L::AI), (0x2262, 0x2263, L::AL), (0x2264, 0x2267, L::AI),
    (0x2268, 0x2269, L::AL), (0x226A, 0x226B, L::AI), (0x226C, 0x226D, L::AL),
    (0x226E, 0x226F, L::AI), (0x2270, 0x2281, L::AL), (0x2282, 0x2283, L::AI),
    (0x2284, 0x2285, L::AL), (0x2286, 0x2287, L::AI), (0x2288, 0x2294, L::AL),
    (0x2295, 0x2295, L::AI), (0x2296, 0x2298, L::AL), (0x2299, 0x2299, L::AI),
    (0x229A, 0x22A4, L::AL), (0x22A5, 0x22A5, L::AI), (0x22A6, 0x22BE, L::AL),
    (0x22BF, 0x22BF, L::AI), (0x22C0, 0x22EE, L::AL), (0x22EF, 0x22EF, L::IN),
    (0x22F0, 0x2307, L::AL), (0x2308, 0x2308, L::OP), (0x2309, 0x2309, L::CL),
    (0x230A, 0x230A, L::OP), (0x230B, 0x230B, L::CL), (0x230C, 0x2311, L::AL),
    (0x2312, 0x2312, L::AI), (0x2313, 0x2319, L::AL), (0x231A, 0x231B, L::ID),
    (0x231C, 0x2328, L::AL), (0x2329, 0x2329, L::OP), (0x232A, 0x232A, L::CL),
    (0x232B, 0x23EF, L::AL), (0x23F0, 0x23F3, L::ID), (0x23F4, 0x2429, L::AL),
    (0x2440, 0x244A, L::AL), (0x2460, 0x24FE, L::AI), (0x24FF, 0x24FF, L::AL),
    (0x2500, 0x254B, L::AI), (0x254C, 0x254F, L::AL), (0x2550, 0x2574, L::AI),
    (0x2575, 0x257F, L::AL), (0x2580, 0x258F, L::AI), (0x2590, 0x2591, L::AL),
    (0x2592, 0x2595, L::AI), (0x2596, 0x259F, L::AL), (0x25A0, 0x25A1, L::AI),
    (0x25A2, 0x25A2, L::AL), (0x25A3, 0x25A9, L::AI), (0x25AA, 0x25B1, L::AL),
    (0x25B2, 0x25B3, L::AI), (0x25B4, 0x25B5, L::AL), (0x25B6, 0x25B7, L::AI),
    (0x25B8, 0x25BB, L::AL), (0x25BC, 0x25BD, L::AI), (0x25BE, 0x25BF, L::AL),
    (0x25C0, 0x25C1, L::AI), (0x25C2, 0x25C5, L::AL), (0x25C6, 0x25C8, L::AI),
    (0x25C9, 0x25CA, L::AL), (0x25CB, 0x25CB, L::AI), (0x25CC, 0x25CD, L::AL),
    (0x25CE, 0x25D1, L::AI), (0x25D2, 0x25E1, L::AL), (0x25E2, 0x25E5, L::AI),
    (0x25E6, 0x25EE, L::AL), (0x25EF, 0x25EF, L::AI), (0x25F0, 0x25FF, L::AL),
    (0x2600, 0x2603, L::ID), (0x2604, 0x2604, L::AL), (0x2605, 0x2606, L::AI),
    (0x2607, 0x2608, L::AL), (0x2609, 0x2609, L::AI), (0x260A, 0x260D, L::AL),
    (0x260E, 0x260F, L::AI), (0x2610, 0x2613, L::AL), (0x2614, 0x2615, L::ID),
    (0x2616, 0x2617, L::AI), (0x2618, 0x2618, L::ID), (0x2619, 0x2619, L::AL),
    (0x261A, 0x261C, L::ID), (0x261D, 0x261D, L::EB), (0x261E, 0x261F, L::ID),
    (0x2620, 0x2638, L::AL), (0x2639, 0x263B, L::ID), (0x263C, 0x263F, L::AL),
    (0x2640, 0x2640, L::AI), (0x2641, 0x2641, L::AL), (0x2642, 0x2642, L::AI),
    (0x2643, 0x265F, L::AL), (0x2660, 0x2661, L::AI), (0x2662, 0x2662, L::AL),
    (0x2663, 0x2665, L::AI), (0x2666, 0x2666, L::AL), (0x2667, 0x2667, L::AI),
    (0x2668, 0x2668, L::ID), (0x2669, 0x266A, L::AI), (0x266B, 0x266B, L::AL),
    (0x266C, 0x266D, L::AI), (0x266E, 0x266E, L::AL), (0x266F, 0x266F, L::AI),
    (0x2670, 0x267E, L::AL), (0x267F, 0x267F, L::ID), (0x2680, 0x269D, L::AL),
    (0x269E, 0x269F, L::AI), (0x26A0, 0x26BC, L::AL), (0x26BD, 0x26C8, L::ID),
    (0x26C9, 0x26CC, L::AI), (0x26CD, 0x26CD, L::ID), (0x26CE, 0x26CE, L::AL),
    (0x26CF, 0x26D1, L::ID), (0x26D2, 0x26D2, L::AI), (0x26D3, 0x26D4, L::ID),
    (0x26D5, 0x26D7, L::AI), (0x26D8, 0x26D9, L::ID), (0x26DA, 0x26DB, L::AI),
    (0x26DC, 0x26DC, L::ID), (0x26DD, 0x26DE, L::AI), (0x26DF, 0x26E1, L::ID),
    (0x26E2, 0x26E2, L::AL), (0x26E3, 0x26E3, L::AI), (0x26E4, 0x26E7, L::AL),
    (0x26E8, 0x26E9, L::AI), (0x26EA, 0x26EA, L::ID), (0x26EB, 0x26F0, L::AI),
    (0x26F1, 0x26F5, L::ID), (0x26F6, 0x26F6, L::AI), (0x26F7, 0x26F8, L::ID),
    (0x26F9, 0x26F9, L::EB), (0x26FA, 0x26FA, L::ID), (0x26FB, 0x26FC, L::AI),
    (0x26FD, 0x2704, L::ID), (0x2705, 0x2707, L::AL), (0x2708, 0x2709, L::ID),
    (0x270A, 0x270D, L::EB), (0x270E, 0x2756, L::AL), (0x2757, 0x2757, L::AI),
    (0x2758, 0x275A, L::AL), (0x275B, 0x2760, L::QU), (0x2761, 0x2761, L::AL),
    (0x2762, 0x2763, L::EX), (0x2764, 0x2764, L::ID), (0x2765, 0x2767, L::AL),
    (0x2768, 0x2768, L::OP), (0x2769, 0x2769, L::CL), (0x276A, 0x276A, L::OP),
    (0x276B, 0x276B, L::CL), (0x276C, 0x276C, L::OP), (0x276D, 0x276D, L::CL),
    (0x276E, 0x276E, L::OP), (0x276F, 0x276F, L::CL), (0x2770, 0x2770, L::OP),
    (0x2771, 0x2771, L::CL), (0x2772, 0x2772, L::OP), (0x2773, 0x2773, L::CL),
    (0x2774, 0x2774, L::OP), (0x2775, 0x2775, L::CL), (0x2776, 0x2793, L::AI),
    (0x2794, 0x27C4, L::AL), (0x27C5, 0x27C5, L::OP), (0x27C6, 0x27C6, L::CL),
    (0x27C7, 0x27E5, L::AL), (0x27E6, 0x27E6, L::OP), (0x27E7, 0x27E7, L::CL),
    (0x27E8, 0x27E8, L::OP), (0x27E9, 0x27E9, L::CL), (0x27EA, 0x27EA, L::OP),
    (0x27EB, 0x27EB, L::CL), (0x27EC, 0x27EC, L::OP), (0x27ED, 0x27ED, L::CL),
    (0x27EE, 0x27EE, L::OP), (0x27EF, 0x27EF, L::CL), (0x27F0, 0x27FF, L::AL),
    (0x2800, 0x2800, L::BA), (0x2801, 0x2982, L::AL), (0x2983, 0x2983, L::OP),
    (0x2984, 0x2984, L::CL), (0x2985, 0x2985, L::OP), (0x2986, 0x2986, L::CL),
    (0x2987, 0x2987, L::OP), (0x2988, 0x2988, L::CL), (0x2989, 0x2989, L::OP),
    (0x298A, 0x298A, L::CL), (0x298B, 0x298B, L::OP), (0x298C, 0x298C, L::CL),
    (0x298D, 0x298D, L::OP), (0x298E, 0x298E, L::CL), (0x298F, 0x298F, L::OP),
    (0x2990, 0x2990, L::CL), (0x2991, 0x2991, L::OP), (0x2992, 0x2992, L::CL),
    (0x2993, 0x2993, L::OP), (0x2994, 0x2994, L::CL), (0x2995, 0x2995, L::OP),
    (0x2996, 0x2996, L::CL), (0x2997, 0x2997, L::OP), (0x2998, 0x2998, L::CL),
    (0x2999, 0x29D7, L::AL), (0x29D8, 0x29D8, L::OP), (0x29D9, 0x29D9, L::CL),
    (0x29DA, 0x29DA, L::OP), (0x29DB, 0x29DB, L::CL), (0x29DC, 0x29FB, L::AL),
    (0x29FC, 0x29FC, L::OP), (0x29FD, 0x29FD, L::CL), (0x29FE, 0x2B54, L::AL),
    (0x2B55, 0x2B59, L::AI), (0x2B5A, 0x2B73, L::AL), (0x2B76, 0x2CEE, L::AL),
    (0x2CEF, 0x2CF1, L::CM), (0x2CF2, 0x2CF3, L::AL), (0x2CF9, 0x2CF9, L::EX),
    (0x2CFA, 0x2CFC, L::BA), (0x2CFD, 0x2CFD, L::AL), (0x2CFE, 0x2CFE, L::EX),
    (0x2CFF, 0x2CFF, L::BA), (0x2D00, 0x2D25, L::AL), (0x2D27, 0x2D27, L::AL),
    (0x2D2D, 0x2D2D, L::AL), (0x2D30, 0x2D67, L::AL), (0x2D6F, 0x2D6F, L::AL),
    (0x2D70, 0x2D70, L::BA), (0x2D7F, 0x2D7F, L::CM), (0x2D80, 0x2D96, L::AL),
    (0x2DA0, 0x2DA6, L::AL), (0x2DA8, 0x2DAE, L::AL), (0x2DB0, 0x2DB6, L::AL),
    (0x2DB8, 0x2DBE, L::AL), (0x2DC0, 0x2DC6, L::AL), (0x2DC8, 0x2DCE, L::AL),
    (0x2DD0, 0x2DD6, L::AL), (0x2DD8, 0x2DDE, L::AL), (0x2DE0, 0x2DFF, L::CM),
    (0x2E00, 0x2E0D, L::QU), (0x2E0E, 0x2E15, L::BA), (0x2E16, 0x2E16, L::AL),
    (0x2E18, 0x2E18, L::OP), (0x2E19, 0x2E19, L::BA), (0x2E1A, 0x2E1B, L::AL),
    (0x2E1C, 0x2E1D, L::QU), (0x2E1E, 0x2E1F, L::AL), (0x2E20, 0x2E21, L::QU),
    (0x2E22, 0x2E22, L::OP), (0x2E23, 0x2E23, L::CL), (0x2E24, 0x2E24, L::OP),
    (0x2E25, 0x2E25, L::CL), (0x2E26, 0x2E26, L::OP), (0x2E27, 0x2E27, L::CL),
    (0x2E28, 0x2E28, L::OP), (0x2E29, 0x2E29, L::CL), (0x2E2A, 0x2E2D, L::BA),
    (0x2E2E, 0x2E2E, L::EX), (0x2E2F, 0x2E2F, L::AL), (0x2E30, 0x2E31, L::BA),
    (0x2E32, 0x2E32, L::AL), (0x2E33, 0x2E34, L::BA), (0x2E35, 0x2E39, L::AL),
    (0x2E3A, 0x2E3B, L::B2), (0x2E3C, 0x2E3E, L::BA), (0x2E3F, 0x2E3F, L::AL),
    (0x2E41, 0x2E41, L::BA), (0x2E42, 0x2E42, L::OP), (0x2E43, 0x2E4A, L::BA),
    (0x2E4B, 0x2E4B, L::AL), (0x2E4C, 0x2E4C, L::BA), (0x2E4D, 0x2E4D, L::AL),
    (0x2E4E, 0x2E4F, L::BA), (0x2E50, 0x2E52, L::AL), (0x2E53, 0x2E54, L::EX),
    (0x2E55, 0x2E55, L::OP), (0x2E56, 0x2E56, L::CP), (0x2E57, 0x2E57, L::OP),
    (0x2E58, 0x2E58, L::CP), (0x2E59, 0x2E59, L::OP), (0x2E5A, 0x2E5A, L::CP),
    (0x2E5B, 0x2E5B, L::OP), (0x2E5C, 0x2E5C, L::CP), (0x2E80, 0x2E99, L::ID),
    (0x2E9B, 0x2EF3, L::ID), (0x2F00, 0x2FD5, L::ID), (0x2FF0, 0x2FFF, L::ID),
    (0x3000, 0x3000, L::BA), (0x3001, 0x3002, L::CL), (0x3003, 0x3004, L::ID),
    (0x3005, 0x3005, L::NS), (0x3006, 0x3007, L::ID), (0x3008, 0x3008, L::OP),
    (0x3009, 0x3009, L::CL), (0x300A, 0x300A, L::OP), (0x300B, 0x300B, L::CL),
    (0x300C, 0x300C, L::OP), (0x300D, 0x300D, L::CL), (0x300E, 0x300E, L::OP),
    (0x300F, 0x300F, L::CL), (0x3010, 0x3010, L::OP), (0x3011, 0x3011, L::CL),
    (0x3012, 0x3013, L::ID), (0x3014, 0x3014, L::OP), (0x3015, 0x3015, L::CL),
    (0x3016, 0x3016, L::OP), (0x3017, 0x3017, L::CL), (0x3018, 0x3018, L::OP),
    (0x3019, 0x3019, L::CL), (0x301A, 0x301A, L::OP), (0x301B, 0x301B, L::CL),
    (0x301C, 0x301C, L::NS), (0x301D, 0x301D, L::OP), (0x301E, 0x301F, L::CL),
    (0x3020, 0x3029, L::ID), (0x302A, 0x302F, L::CM), (0x3030, 0x3034, L::ID),
    (0x3035, 0x3035, L::CM), (0x3036, 0x303A, L::ID), (0x303B, 0x303C, L::NS),
    (0x303D, 0x303F, L::ID), (0x3041, 0x3041, L::CJ), (0x3042, 0x3042, L::ID),
    (0x3043, 0x3043, L::CJ), (0x3044, 0x3044, L::ID), (0x3045, 0x3045, L::CJ),
    (0x3046, 0x3046, L::ID), (0x3047, 0x3047, L::CJ), (0x3048, 0x3048, L::ID),
    (0x3049, 0x3049, L::CJ), (0x304A, 0x3062, L::ID), (0x3063, 0x3063, L::CJ),
    (0x3064, 0x3082, L::ID), (0x3083, 0x3083, L::CJ), (0x3084, 0x3084, L::ID),
    (0x3085, 0x3085, L::CJ), (0x3086, 0x3086, L::ID), (0x3087, 0x3087, L::CJ),
    (0x3088, 0x308D, L::ID), (0x308E, 0x308E, L::CJ), (0x308F, 0x3094, L::ID),
    (0x3095, 0x3096, L::CJ), (0x3099, 0x309A, L::CM), (0x309B, 0x309E, L::NS),
    (0x309F, 0x309F, L::ID), (0x30A0, 0x30A0, L::NS), (0x30A1, 0x30A1, L::CJ),
    (0x30A2, 0x30A2, L::ID), (0x30A3, 0x30A3, L::CJ), (0x30A4, 0x30A4, L::ID),
    (0x30A5, 0x30A5, L::CJ), (0x30A6, 0x30A6, L::ID), (0x30A7, 0x30A7, L::CJ),
    (0x30A8, 0x30A8, L::ID), (0x30A9, 0x30A9, L::CJ), (0x30AA, 0x30C2, L::ID),
    (0x30C3, 0x30C3, L::CJ), (0x30C4, 0x30E2, L::ID), (0x30E3, 0x30E3, L::CJ),
    (0x30E4, 0x30E4, L::ID), (0x30E5, 0x30E5, L::CJ), (0x30E6, 0x30E6, L::ID),
    (0x30E7, 0x30E7, L::CJ), (0x30E8, 0x30ED, L::ID), (0x30EE, 0x30EE, L::CJ),
    (0x30EF, 0x30F4, L::ID), (0x30F5, 0x30F6, L::CJ), (0x30F7, 0x30FA, L::ID),
    (0x30FB, 0x30FB, L::NS), (0x30FC, 0x30FC, L::CJ), (0x30FD, 0x30FE, L::NS),
    (0x30FF, 0x30FF, L::ID), (0x3105, 0x312F, L::ID), (0x3131, 0x318E, L::ID),
    (0x3190, 0x31E5, L::ID), (0x31EF, 0x31EF, L::ID), (0x31F0, 0x31FF, L::CJ),
    (0x3200, 0x321E, L::ID), (0x3220, 0x3247, L::ID), (0x3248, 0x324F, L::AI),
    (0x3250, 0x4DBF, L::ID), (0x4DC0, 0x4DFF, L::AL), (0x4E00, 0xA014, L::ID),
    (0xA015, 0xA015, L::NS), (0xA016, 0xA48C, L::ID), (0xA490, 0xA4C6, L::ID),
    (0xA4D0, 0xA4FD, L::AL), (0xA4FE, 0xA4FF, L::BA), (0xA500, 0xA60C, L::AL),
    (0xA60D, 0xA60D, L::BA), (0xA60E, 0xA60E, L::EX), (0xA60F, 0xA60F, L::BA),
    (0xA610, 0xA61F, L::AL), (0xA620, 0xA629, L::NU), (0xA62A, 0xA62B, L::AL),
    (0xA640, 0xA66E, L::AL), (0xA66F, 0xA672, L::CM), (0xA673, 0xA673, L::AL),
    (0xA674, 0xA67D, L::CM), (0xA67E, 0xA69D, L::AL), (0xA69E, 0xA69F, L::CM),
    (0xA6A0, 0xA6EF, L::AL), (0xA6F0, 0xA6F1, L::CM), (0xA6F2, 0xA6F2, L::AL),
    (0xA6F3, 0xA6F7, L::BA), (0xA700, 0xA7DC, L::AL), (0xA7F1, 0xA801, L::AL),
    (0xA802, 0xA802, L::CM), (0xA803, 0xA805, L::AL), (0xA806, 0xA806, L::CM),
    (0xA807, 0xA80A, L::AL), (0xA80B, 0xA80B, L::CM), (0xA80C, 0xA822, L::AL),
    (0xA823, 0xA827, L::CM), (0xA828, 0xA82B, L::AL), (0xA82C, 0xA82C, L::CM),
    (0xA830, 0xA837, L::AL), (0xA838, 0xA838, L::PO), (0xA839, 0xA839, L::AL),
    (0xA840, 0xA873, L::AL), (0xA874, 0xA875, L::BB), (0xA876, 0xA877, L::EX),
    (0xA880, 0xA881, L::CM), (0xA882, 0xA8B3, L::AL), (0xA8B4, 0xA8C5, L::CM),
    (0xA8CE, 0xA8CF, L::BA), (0xA8D0, 0xA8D9, L::NU), (0xA8E0, 0xA8F1, L::CM),
    (0xA8F2, 0xA8FB, L::AL), (0xA8FC, 0xA8FC, L::BB), (0xA8FD, 0xA8FE, L::AL),
    (0xA8FF, 0xA8FF, L::CM), (0xA900, 0xA909, L::NU), (0xA90A, 0xA925, L::AL),
    (0xA926, 0xA92D, L::CM), (0xA92E, 0xA92F, L::BA), (0xA930, 0xA946, L::AL),
    (0xA947, 0xA953, L::CM), (0xA95F, 0xA95F, L::AL), (0xA960, 0xA97C, L::JL),
    (0xA980, 0xA983, L::CM), (0xA984, 0xA9B2, L::AK), (0xA9B3, 0xA9BF, L::CM),
    (0xA9C0, 0xA9C0, L::VI), (0xA9C1, 0xA9C6, L::ID), (0xA9C7, 0xA9C9, L::BA),
    (0xA9CA, 0xA9CD, L::ID), (0xA9CF, 0xA9CF, L::BA), (0xA9D0, 0xA9D9, L::AS),
    (0xA9DE, 0xA9DF, L::ID), (0xA9E0, 0xA9EF, L::SA), (0xA9F0, 0xA9F9, L::NU),
    (0xA9FA, 0xA9FE, L::SA), (0xAA00, 0xAA28, L::AS), (0xAA29, 0xAA36, L::CM),
    (0xAA40, 0xAA42, L::BA), (0xAA43, 0xAA43, L::CM), (0xAA44, 0xAA4B, L::BA),
    (0xAA4C, 0xAA4D, L::CM), (0xAA50, 0xAA59, L::AS), (0xAA5C, 0xAA5C, L::ID),
    (0xAA5D, 0xAA5F, L::BA), (0xAA60, 0xAAC2, L::SA), (0xAADB, 0xAADF, L::SA),
    (0xAAE0, 0xAAEA, L::AL), (0xAAEB, 0xAAEF, L::CM), (0xAAF0, 0xAAF1, L::BA),
    (0xAAF2, 0xAAF4, L::AL), (0xAAF5, 0xAAF6, L::CM), (0xAB01, 0xAB06, L::AL),
    (0xAB09, 0xAB0E, L::AL), (0xAB11, 0xAB16, L::AL), (0xAB20, 0xAB26, L::AL),
    (0xAB28, 0xAB2E, L::AL), (0xAB30, 0xAB6B, L::AL), (0xAB70, 0xABE2, L::AL),
    (0xABE3, 0xABEA, L::CM), (0xABEB, 0xABEB, L::BA), (0xABEC, 0xABED, L::CM),
    (0xABF0, 0xABF9, L::NU), (0xAC00, 0xAC00, L::H2), (0xAC01, 0xAC1B, L::H3),
    (0xAC1C, 0xAC1C, L::H2), (0xAC1D, 0xAC37, L::H3), (0xAC38, 0xAC38, L::H2),
    (0xAC39, 0xAC53, L::H3), (0xAC54, 0xAC54, L::H2), (0xAC55, 0xAC6F, L::H3),
    (0xAC70, 0xAC70, L::H2), (0xAC71, 0xAC8B, L::H3), (0xAC8C, 0xAC8C, L::H2),
    (0xAC8D, 0xACA7, L::H3), (0xACA8, 0xACA8, L::H2), (0xACA9, 0xACC3, L::H3),
    (0xACC4, 0xACC4, L::H2), (0xACC5, 0xACDF, L::H3), (0xACE0, 0xACE0, L::H2),
    (0xACE1, 0xACFB, L::H3), (0xACFC, 0xACFC, L::H2), (0xACFD, 0xAD17, L::H3),
    (0xAD18, 0xAD18, L::H2), (0xAD19, 0xAD33, L::H3), (0xAD34, 0xAD34, L::H2),
    (0xAD35, 0xAD4F, L::H3), (0xAD50, 0xAD50, L::H2), (0xAD51, 0xAD6B, L::H3),
    (0xAD6C, 0xAD6C, L::H2), (0xAD6D, 0xAD87, L::H3), (0xAD88, 0xAD88, L::H2),
    (0xAD89, 0xADA3, L::H3), (0xADA4, 0xADA4, L::H2), (0xADA5, 0xADBF, L::H3),
    (0xADC0, 0xADC0, L::H2), (0xADC1, 0xADDB, L::H3), (0xADDC, 0xADDC, L::H2),
    (0xADDD, 0xADF7, L::H3), (0xADF8, 0xADF8, L::H2), (0xADF9, 0xAE13, L::H3),
    (0xAE14, 0xAE14, L::H2), (0xAE15, 0xAE2F, L::H3), (0xAE30, 0xAE30, L::H2),
    (0xAE31, 0xAE4B, L::H3), (0xAE4C, 0xAE4C, L::H2), (0xAE4D, 0xAE67, L::H3),
    (0xAE68, 0xAE68, L::H2), (0xAE69, 0xAE83, L::H3), (0xAE84, 0xAE84, L::H2),
    (0xAE85, 0xAE9F, L::H3), (0xAEA0, 0xAEA0, L::H2), (0xAEA1, 0xAEBB, L::H3),
    (0xAEBC, 0xAEBC, L::H2), (0xAEBD, 0xAED7, L::H3), (0xAED8, 0xAED8, L::H2),
    (0xAED9, 0xAEF3, L::H3), (0xAEF4, 0xAEF4, L::H2), (0xAEF5, 0xAF0F, L::H3),
    (0xAF10, 0xAF10, L::H2), (0xAF11, 0xAF2B, L::H3), (0xAF2C, 0xAF2C, L::H2),
    (0xAF2D, 0xAF47, L::H3), (0xAF48, 0xAF48, L::H2), (0xAF49, 0xAF63, L::H3),
    (0xAF64, 0xAF64, L::H2), (0xAF65, 0xAF7F, L::H3), (0xAF80, 0xAF80, L::H2),
    (0xAF81, 0xAF9B, L::H3), (0xAF9C, 0xAF9C, L::H2), (0xAF9D, 0xAFB7, L::H3),
    (0xAFB8, 0xAFB8, L::H2), (0xAFB9, 0xAFD3, L::H3), (0xAFD4, 0xAFD4, L::H2),
    (0xAFD5, 0xAFEF, L::H3), (0xAFF0, 0xAFF0, L::H2), (0xAFF1, 0xB00B, L::H3),
    (0xB00C, 0xB00C, L::H2), (0xB00D, 0xB027, L::H3), (0xB028, 0xB028, L::H2),
    (0xB029, 0xB043, L::H3), (0xB044, 0xB044, L::H2), (0xB045, 0xB05F, L::H3),
    (0xB060, 0xB060, L::H2), (0xB061, 0xB07B, L::H3), (0xB07C, 0xB07C, L::H2),
    (0xB07D, 0xB097, L::H3), (0xB098, 0xB098, L::H2), (0xB099, 0xB0B3, L::H3),
    (0xB0B4, 0xB0B4, L::H2), (0xB0B5, 0xB0CF, L::H3), (0xB0D0, 0xB0D0, L::H2),
    (0xB0D1, 0xB0EB, L::H3), (0xB0EC, 0xB0EC, L::H2), (0xB0ED, 0xB107, L::H3),
    (0xB108, 0xB108, L::H2), (0xB109, 0xB123, L::H3), (0xB124, 0xB124, L::H2),
    (0xB125, 0xB13F, L::H3), (0xB140, 0xB140, L::H2), (0xB141, 0xB15B, L::H3),
    (0xB15C, 0xB15C, L::H2), (0xB15D, 0xB177, L::H3), (0xB178, 0xB178, L::H2),
    (0xB179, 0xB193, L::H3), (0xB194, 0xB194, L::H2), (0xB195, 0xB1AF, L::H3),
    (0xB1B0, 0xB1B0, L::H2), (0xB1B1, 0xB1CB, L::H3), (0xB1CC, 0xB1CC, L::H2),
    (0xB1CD, 0xB1E7, L::H3), (0xB1E8, 0xB1E8, L::H2), (0xB1E9, 0xB203, L::H3),
    (0xB204, 0xB204, L::H2), (0xB205, 0xB21F, L::H3), (0xB220, 0xB220, L::H2),
    (0xB221, 0xB23B, L::H3), (0xB23C, 0xB23C, L::H2), (0xB23D, 0xB257, L::H3),
    (0xB258, 0xB258, L::H2), (0xB259, 0xB273, L::H3), (0xB274, 0xB274, L::H2),
    (0xB275, 0xB28F, L::H3), (0xB290, 0xB290, L::H2), (0xB291, 0xB2AB, L::H3),
    (0xB2AC, 0xB2AC, L::H2), (0xB2AD, 0xB2C7, L::H3), (0xB2C8, 0xB2C8, L::H2),
    (0xB2C9, 0xB2E3, L::H3), (0xB2E4, 0xB2E4, L::H2), (0xB2E5, 0xB2FF, L::H3),
    (0xB300, 0xB300, L::H2), (0xB301, 0xB31B, L::H3), (0xB31C, 0xB31C, L::H2),
    (0xB31D, 0xB337, L::H3), (0xB338, 0xB338, L::H2), (0xB339, 0xB353, L::H3),
    (0xB354, 0xB354, L::H2), (0xB355, 0xB36F, L::H3), (0xB370, 0xB370, L::H2),
    (0xB371, 0xB38B, L::H3), (0xB38C, 0xB38C, L::H2), (0xB38D, 0xB3A7, L::H3),
    (0xB3A8, 0xB3A8, L::H2), (0xB3A9, 0xB3C3, L::H3), (0xB3C4, 0xB3C4, L::H2),
    (0xB3C5, 0xB3DF, L::H3), (0xB3E0, 0xB3E0, L::H2), (0xB3E1, 0xB3FB, L::H3),
    (0xB3FC, 0xB3FC, L::H2), (0xB3FD, 0xB417, L::H3), (0xB418, 0xB418, L::H2),
    (0xB419, 0xB433, L::H3), (0xB434, 0xB434, L::H2), (0xB435, 0xB44F, L::H3),
    (0xB450, 0xB450, L::H2), (0xB451, 0xB46B, L::H3), (0xB46C, 0xB46C, L::H2),
    (0xB46D, 0xB487, L::H3), (0xB488, 0xB488, L::H2), (0xB489, 0xB4A3, L::H3),
    (0xB4A4, 0xB4A4, L::H2), (0xB4A5, 0xB4BF, L::H3), (0xB4C0, 0xB4C0, L::H2),
    (0xB4C1, 0xB4DB, L::H3), (0xB4DC, 0xB4DC, L::H2), (0xB4DD, 0xB4F7, L::H3),
    (0xB4F8, 0xB4F8, L::H2), (0xB4F9, 0xB513, L::H3), (0xB514, 0xB514, L::H2),
    (0xB515, 0xB52F, L::H3), (0xB530, 0xB530, L::H2), (0xB531, 0xB54B, L::H3),
    (0xB54C, 0xB54C, L::H2), (0xB54D, 0xB567, L::H3), (0xB568, 0xB568, L::H2),
    (0xB569, 0xB583, L::H3), (0xB584, 0xB584, L::H2), (0xB585, 0xB59F, L::H3),
    (0xB5A0, 0xB5A0, L::H2), (0xB5A1, 0xB5BB, L::H3), (0xB5BC, 0xB5BC, L::H2),
    (0xB5BD, 0xB5D7, L::H3), (0xB5D8, 0xB5D8, L::H2), (0xB5D9, 0xB5F3, L::H3),
    (0xB5F4, 0xB5F4, L::H2), (0xB5F5, 0xB60F, L::H3), (0xB610, 0xB610, L::H2),
    (0xB611, 0xB62B, L::H3), (0xB62C, 0xB62C, L::H2), (0xB62D, 0xB647, L::H3),
    (0xB648, 0xB648, L::H2), (0xB649, 0xB663, L::H3), (0xB664, 0xB664, L::H2),
    (0xB665, 0xB67F, L::H3), (0xB680, 0xB680, L::H2), (0xB681, 0xB69B, L::H3),
    (0xB69C, 0xB69C, L::H2), (0xB69D, 0xB6B7, L::H3), (0xB6B8, 0xB6B8, L::H2),
    (0xB6B9, 0xB6D3, L::H3), (0xB6D4, 0xB6D4, L::H2), (0xB6D5, 0xB6EF, L::H3),
    (0xB6F0, 0xB6F0, L::H2), (0xB6F1, 0xB70B, L::H3), (0xB70C, 0xB70C, L::H2),
    (0xB70D, 0xB727, L::H3), (0xB728, 0xB728, L::H2), (0xB729, 0xB743, L::H3),
    (0xB744, 0xB744, L::H2), (0xB745, 0xB75F, L::H3), (0xB760, 0xB760, L::H2),
    (0xB761, 0xB77B, L::H3), (0xB77C, 0xB77C, L::H2), (0xB77D, 0xB797, L::H3),
    (0xB798, 0xB798, L::H2), (0xB799, 0xB7B3, L::H3), (0xB7B4, 0xB7B4, L::H2),
    (0xB7B5, 0xB7CF, L::H3), (0xB7D0, 0xB7D0, L::H2), (0xB7D1, 0xB7EB, L::H3),
    (0xB7EC, 0xB7EC, L::H2), (0xB7ED, 0xB807, L::H3), (0xB808, 0xB808, L::H2),
    (0xB809, 0xB823, L::H3), (0xB824, 0xB824, L::H2), (0xB825, 0xB83F, L::H3),
    (0xB840, 0xB840, L::H2), (0xB841, 0xB85B, L::H3), (0xB85C, 0xB85C, L::H2),
    (0xB85D, 0xB877, L::H3), (0xB878, 0xB878, L::H2), (0xB879, 0xB893, L::H3),
    (0xB894, 0xB894, L::H2), (0xB895, 0xB8AF, L::H3), (0xB8B0, 0xB8B0, L::H2),
    (0xB8B1, 0xB8CB, L::H3), (0xB8CC, 0xB8CC, L::H2), (0xB8CD, 0xB8E7, L::H3),
    (0xB8E8, 0xB8E8, L::H2), (0xB8E9, 0xB903, L::H3), (0xB904, 0xB904, L::H2),
    (0xB905, 0xB91F, L::H3), (0xB920, 0xB920, L::H2), (0xB921, 0xB93B, L::H3),
    (0xB93C, 0xB93C, L::H2), (0xB93D, 0xB957, L::H3), (0xB958, 0xB958, L::H2),
    (0xB959, 0xB973, L::H3), (0xB974, 0xB974, L::H2), (0xB975, 0xB98F, L::H3),
    (0xB990, 0xB990, L::H2), (0xB991, 0xB9AB, L::H3), (0xB9AC, 0xB9AC, L::H2),
    (0xB9AD, 0xB9C7, L::H3), (0xB9C8, 0xB9C8, L::H2), (0xB9C9, 0xB9E3, L::H3),
    (0xB9E4, 0xB9E4, L::H2), (0xB9E5, 0xB9FF, L::H3), (0xBA00, 0xBA00, L::H2),
    (0xBA01, 0xBA1B, L::H3), (0xBA1C, 0xBA1C, L::H2), (0xBA1D, 0xBA37, L::H3),
    (0xBA38, 0xBA38, L::H2), (0xBA39, 0xBA53, L::H3), (0xBA54, 0xBA54, L::H2),
    (0xBA55, 0xBA6F, L::H3), (0xBA70, 0xBA70, L::H2), (0xBA71, 0xBA8B, L::H3),
    (0xBA8C, 0xBA8C, L::H2), (0xBA8D, 0xBAA7, L::H3), (0xBAA8, 0xBAA8, L::H2),
    (0xBAA9, 0xBAC3, L::H3), (0xBAC4, 0xBAC4, L::H2), (0xBAC5, 0xBADF, L::H3),
    (0xBAE0, 0xBAE0, L::H2), (0xBAE1, 0xBAFB, L::H3), (0xBAFC, 0xBAFC, L::H2),
    (0xBAFD, 0xBB17, L::H3), (0xBB18, 0xBB18, L::H2), (0xBB19, 0xBB33, L::H3),
    (0xBB34, 0xBB34, L::H2), (0xBB35, 0xBB4F, L::H3), (0xBB50, 0xBB50, L::H2),
    (0xBB51, 0xBB6B, L::H3), (0xBB6C, 0xBB6C, L::H2), (0xBB6D, 0xBB87, L::H3),
    (0xBB88, 0xBB88, L::H2), (0xBB89, 0xBBA3, L::H3), (0xBBA4, 0xBBA4, L::H2),
    (0xBBA5, 0xBBBF, L::H3), (0xBBC0, 0xBBC0, L::H2), (0xBBC1, 0xBBDB, L::H3),
    (0xBBDC, 0xBBDC, L::H2), (0xBBDD, 0xBBF7, L::H3), (0xBBF8, 0xBBF8, L::H2),
    (0xBBF9, 0xBC13, L::H3), (0xBC14, 0xBC14, L::H2), (0xBC15, 0xBC2F, L::H3),
    (0xBC30, 0xBC30, L::H2), (0xBC31, 0xBC4B, L::H3), (0xBC4C, 0xBC4C, L::H2),
    (0xBC4D, 0xBC67, L::H3), (0xBC68, 0xBC68, L::H2), (0xBC69, 0xBC83, L::H3),
    (0xBC84, 0xBC84, L::H2), (0xBC85, 0xBC9F, L::H3), (0xBCA0, 0xBCA0, L::H2),
    (0xBCA1, 0xBCBB, L::H3), (0xBCBC, 0xBCBC, L::H2), (0xBCBD, 0xBCD7, L::H3),
    (0xBCD8, 0xBCD8, L::H2), (0xBCD9, 0xBCF3, L::H3), (0xBCF4, 0xBCF4, L::H2),
    (0xBCF5, 0xBD0F, L::H3), (0xBD10, 0xBD10, L::H2), (0xBD11, 0xBD2B, L::H3),
    (0xBD2C, 0xBD2C, L::H2), (0xBD2D, 0xBD47, L::H3), (0xBD48, 0xBD48, L::H2),
    (0xBD49, 0xBD63, L::H3), (0xBD64, 0xBD64, L::H2), (0xBD65, 0xBD7F, L::H3),
    (0xBD80, 0xBD80, L::H2), (0xBD81, 0xBD9B, L::H3), (0xBD9C, 0xBD9C, L::H2),
    (0xBD9D, 0xBDB7, L::H3), (0xBDB8, 0xBDB8, L::H2), (0xBDB9, 0xBDD3, L::H3),
    (0xBDD4, 0xBDD4, L::H2), (0xBDD5, 0xBDEF, L::H3), (0xBDF0, 0xBDF0, L::H2),
    (0xBDF1, 0xBE0B, L::H3), (0xBE0C, 0xBE0C, L::H2), (0xBE0D, 0xBE27, L::H3),
    (0xBE28, 0xBE28, L::H2), (0xBE29, 0xBE43, L::H3), (0xBE44, 0xBE44, L::H2),
    (0xBE45, 0xBE5F, L::H3), (0xBE60, 0xBE60, L::H2), (0xBE61, 0xBE7B, L::H3),
    (0xBE7C, 0xBE7C, L::H2), (0xBE7D, 0xBE97, L::H3), (0xBE98, 0xBE98, L::H2),
    (0xBE99, 0xBEB3, L::H3), (0xBEB4, 0xBEB4, L::H2), (0xBEB5, 0xBECF, L::H3),
    (0xBED0, 0xBED0, L::H2), (0xBED1, 0xBEEB, L::H3), (0xBEEC, 0xBEEC, L::H2),
    (0xBEED, 0xBF07, L::H3), (0xBF08, 0xBF08, L::H2), (0xBF09, 0xBF23, L::H3),
    (0xBF24, 0xBF24, L::H2), (0xBF25, 0xBF3F, L::H3), (0xBF40, 0xBF40, L::H2),
    (0xBF41, 0xBF5B, L::H3), (0xBF5C, 0xBF5C, L::H2), (0xBF5D, 0xBF77, L::H3),
    (0xBF78, 0xBF78, L::H2), (0xBF79, 0xBF93, L::H3), (0xBF94, 0xBF94, L::H2),
    (0xBF95, 0xBFAF, L::H3), (0xBFB0, 0xBFB0, L::H2), (0xBFB1, 0xBFCB, L::H3),
    (0xBFCC, 0xBFCC, L::H2), (0xBFCD, 0xBFE7, L::H3), (0xBFE8, 0xBFE8, L::H2),
    (0xBFE9, 0xC003, L::H3), (0xC004, 0xC004, L::H2), (0xC005, 0xC01F, L::H3),
    (0xC020, 0xC020, L::H2), (0xC021, 0xC03B, L::H3), (0xC03C, 0xC03C, L::H2),
    (0xC03D, 0xC057, L::H3), (0xC058, 0xC058, L::H2), (0xC059, 0xC073, L::H3),
    (0xC074, 0xC074, L::H2), (0xC075, 0xC08F, L::H3), (0xC090, 0xC090, L::H2),
    (0xC091, 0xC0AB, L::H3), (0xC0AC, 0xC0AC, L::H2), (0xC0AD, 0xC0C7, L::H3),
    (0xC0C8, 0xC0C8, L::H2), (0xC0C9, 0xC0E3, L::H3), (0xC0E4, 0xC0E4, L::H2),
    (0xC0E5, 0xC0FF, L::H3), (0xC100, 0xC100, L::H2), (0xC101, 0xC11B, L::H3),
    (0xC11C, 0xC11C, L::H2), (0xC11D, 0xC137, L::H3), (0xC138, 0xC138, L::H2),
    (0xC139, 0xC153, L::H3), (0xC154, 0xC154, L::H2), (0xC155, 0xC16F, L::H3),
    (0xC170, 0xC170, L::H2), (0xC171, 0xC18B, L::H3), (0xC18C, 0xC18C, L::H2),
    (0xC18D, 0xC1A7, L::H3), (0xC1A8, 0xC1A8, L::H2), (0xC1A9, 0xC1C3, L::H3),
    (0xC1C4, 0xC1C4, L::H2), (0xC1C5, 0xC1DF, L::H3), (0xC1E0, 0xC1E0, L::H2),
    (0xC1E1, 0xC1FB, L::H3), (0xC1FC, 0xC1FC, L::H2), (0xC1FD, 0xC217, L::H3),
    (0xC218, 0xC218, L::H2), (0xC219, 0xC233, L::H3), (0xC234, 0xC234, L::H2),
    (0xC235, 0xC24F, L::H3), (0xC250, 0xC250, L::H2), (0xC251, 0xC26B, L::H3),
    (0xC26C, 0xC26C, L::H2), (0xC26D, 0xC287, L::H3), (0xC288, 0xC288, L::H2),
    (0xC289, 0xC2A3, L::H3), (0xC2A4, 0xC2A4, L::H2), (0xC2A5, 0xC2BF, L::H3),
    (0xC2C0, 0xC2C0, L::H2), (0xC2C1, 0xC2DB, L::H3), (0xC2DC, 0xC2DC, L::H2),
    (0xC2DD, 0xC2F7, L::H3), (0xC2F8, 0xC2F8, L::H2), (0xC2F9, 0xC313, L::H3),
    (0xC314, 0xC314, L::H2), (0xC315, 0xC32F, L::H3), (0xC330, 0xC330, L::H2),
    (0xC331, 0xC34B, L::H3), (0xC34C, 0xC34C, L::H2), (0xC34D, 0xC367, L::H3),
    (0xC368, 0xC368, L::H2), (0xC369, 0xC383, L::H3), (0xC384, 0xC384, L::H2),
    (0xC385, 0xC39F, L::H3), (0xC3A0, 0xC3A0, L::H2), (0xC3A1, 0xC3BB, L::H3),
    (0xC3BC, 0xC3BC, L::H2), (0xC3BD, 0xC3D7, L::H3), (0xC3D8, 0xC3D8, L::H2),
    (0xC3D9, 0xC3F3, L::H3), (0xC3F4, 0xC3F4, L::H2), (0xC3F5, 0xC40F, L::H3),
    (0xC410, 0xC410, L::H2), (0xC411, 0xC42B, L::H3), (0xC42C, 0xC42C, L::H2),
    (0xC42D, 0xC447, L::H3), (0xC448, 0xC448, L::H2), (0xC449, 0xC463, L::H3),
    (0xC464, 0xC464, L::H2), (0xC465, 0xC47F, L::H3), (0xC480, 0xC480, L::H2),
    (0xC481, 0xC49B, L::H3), (0xC49C, 0xC49C, L::H2), (0xC49D, 0xC4B7, L::H3),
    (0xC4B8, 0xC4B8, L::H2), (0xC4B9, 0xC4D3, L::H3), (0xC4D4, 0xC4D4, L::H2),
    (0xC4D5, 0xC4EF, L::H3), (0xC4F0, 0xC4F0, L::H2), (0xC4F1, 0xC50B, L::H3),
    (0xC50C, 0xC50C, L::H2), (0xC50D, 0xC527, L::H3), (0xC528, 0xC528, L::H2),
    (0xC529, 0xC543, L::H3), (0xC544, 0xC544, L::H2), (0xC545, 0xC55F, L::H3),
    (0xC560, 0xC560, L::H2), (0xC561, 0xC57B, L::H3), (0xC57C, 0xC57C, L::H2),
    (0xC57D, 0xC597, L::H3), (0xC598, 0xC598, L::H2), (0xC599, 0xC5B3, L::H3),
    (0xC5B4, 0xC5B4, L::H2), (0xC5B5, 0xC5CF, L::H3), (0xC5D0, 0xC5D0, L::H2),
    (0xC5D1, 0xC5EB, L::H3), (0xC5EC, 0xC5EC, L::H2), (0xC5ED, 0xC607, L::H3),
    (0xC608, 0xC608, L::H2), (0xC609, 0xC623, L::H3), (0xC624, 0xC624, L::H2),
    (0xC625, 0xC63F, L::H3), (0xC640, 0xC640, L::H2), (0xC641, 0xC65B, L::H3),
    (0xC65C, 0xC65C, L::H2), (0xC65D, 0xC677, L::H3), (0xC678, 0xC678, L::H2),
    (0xC679, 0xC693, L::H3), (0xC694, 0xC694, L::H2), (0xC695, 0xC6AF, L::H3),
    (0xC6B0, 0xC6B0, L::H2), (0xC6B1, 0xC6CB, L::H3), (0xC6CC, 0xC6CC, L::H2),
    (0xC6CD, 0xC6E7, L::H3), (0xC6E8, 0xC6E8, L::H2), (0xC6E9, 0xC703, L::H3),
    (0xC704, 0xC704, L::H2), (0xC705, 0xC71F, L::H3), (0xC720, 0xC720, L::H2),
    (0xC721, 0xC73B, L::H3), (0xC73C, 0xC73C, L::H2), (0xC73D, 0xC757, L::H3),
    (0xC758, 0xC758, L::H2), (0xC759, 0xC773, L::H3), (0xC774, 0xC774, L::H2),
    (0xC775, 0xC78F, L::H3), (0xC790, 0xC790, L::H2), (0xC791, 0xC7AB, L::H3),
    (0xC7AC, 0xC7AC, L::H2), (0xC7AD, 0xC7C7, L::H3), (0xC7C8, 0xC7C8, L::H2),
    (0xC7C9, 0xC7E3, L::H3), (0xC7E4, 0xC7E4, L::H2), (0xC7E5, 0xC7FF, L::H3),
    (0xC800, 0xC800, L::H2), (0xC801, 0xC81B, L::H3), (0xC81C, 0xC81C, L::H2),
    (0xC81D, 0xC837, L::H3), (0xC838, 0xC838, L::H2), (0xC839, 0xC853, L::H3),
    (0xC854, 0xC854, L::H2), (0xC855, 0xC86F, L::H3), (0xC870, 0xC870, L::H2),
    (0xC871, 0xC88B, L::H3), (0xC88C, 0xC88C, L::H2), (0xC88D, 0xC8A7, L::H3),
    (0xC8A8, 0xC8A8, L::H2), (0xC8A9, 0xC8C3, L::H3), (0xC8C4, 0xC8C4, L::H2),
    (0xC8C5, 0xC8DF, L::H3), (0xC8E0, 0xC8E0, L::H2), (0xC8E1, 0xC8FB, L::H3),
    (0xC8FC, 0xC8FC, L::H2), (0xC8FD, 0xC917, L::H3), (0xC918, 0xC918, L::H2),
    (0xC919, 0xC933, L::H3), (0xC934, 0xC934, L::H2), (0xC935, 0xC94F, L::H3),
    (0xC950, 0xC950, L::H2), (0xC951, 0xC96B, L::H3), (0xC96C, 0xC96C, L::H2),
    (0xC96D, 0xC987, L::H3), (0xC988, 0xC988, L::H2), (0xC989, 0xC9A3, L::H3),
    (0xC9A4, 0xC9A4, L::H2), (0xC9A5, 0xC9BF, L::H3), (0xC9C0, 0xC9C0, L::H2),
    (0xC9C1, 0xC9DB, L::H3), (0xC9DC, 0xC9DC, L::H2), (0xC9DD, 0xC9F7, L::H3),
    (0xC9F8, 0xC9F8, L::H2), (0xC9F9, 0xCA13, L::H3), (0xCA14, 0xCA14, L::H2),
    (0xCA15, 0xCA2F, L::H3), (0xCA30, 0xCA30, L::H2), (0xCA31, 0xCA4B, L::H3),
    (0xCA4C, 0xCA4C, L::H2), (0xCA4D, 0xCA67, L::H3), (0xCA68, 0xCA68, L::H2),
    (0xCA69, 0xCA83, L::H3), (0xCA84, 0xCA84, L::H2), (0xCA85, 0xCA9F, L::H3),
    (0xCAA0, 0xCAA0, L::H2), (0xCAA1, 0xCABB, L::H3), (0xCABC, 0xCABC, L::H2),
    (0xCABD, 0xCAD7, L::H3), (0xCAD8, 0xCAD8, L::H2), (0xCAD9, 0xCAF3, L::H3),
    (0xCAF4, 0xCAF4, L::H2), (0xCAF5, 0xCB0F, L::H3), (0xCB10, 0xCB10, L::H2),
    (0xCB11, 0xCB2B, L::H3), (0xCB2C, 0xCB2C, L::H2), (0xCB2D, 0xCB47, L::H3),
    (0xCB48, 0xCB48, L::H2), (0xCB49, 0xCB63, L::H3), (0xCB64, 0xCB64, L::H2),
    (0xCB65, 0xCB7F, L::H3), (0xCB80, 0xCB80, L::H2), (0xCB81, 0xCB9B, L::H3),
    (0xCB9C, 0xCB9C, L::H2), (0xCB9D, 0xCBB7, L::H3), (0xCBB8, 0xCBB8, L::H2),
    (0xCBB9, 0xCBD3, L::H3), (0xCBD4, 0xCBD4, L::H2), (0xCBD5, 0xCBEF, L::H3),
    (0xCBF0, 0xCBF0, L::H2), (0xCBF1, 0xCC0B, L::H3), (0xCC0C, 0xCC0C, L::H2),
    (0xCC0D, 0xCC27, L::H3), (0xCC28, 0xCC28, L::H2), (0xCC29, 0xCC43, L::H3),
    (0xCC44, 0xCC44, L::H2), (0xCC45, 0xCC5F, L::H3), (0xCC60, 0xCC60, L::H2),
    (0xCC61, 0xCC7B, L::H3), (0xCC7C, 0xCC7C, L::H2), (0xCC7D, 0xCC97, L::H3),
    (0xCC98, 0xCC98, L::H2), (0xCC99, 0xCCB3, L::H3), (0xCCB4, 0xCCB4, L::H2),
    (0xCCB5, 0xCCCF, L::H3), (0xCCD0, 0xCCD0, L::H2), (0xCCD1, 0xCCEB, L::H3),
    (0xCCEC, 0xCCEC, L::H2), (0xCCED, 0xCD07, L::H3), (0xCD08, 0xCD08, L::H2),
    (0xCD09, 0xCD23, L::H3), (0xCD24, 0xCD24, L::H2), (0xCD25, 0xCD3F, L::H3),
    (0xCD40, 0xCD40, L::H2), (0xCD41, 0xCD5B, L::H3), (0xCD5C, 0xCD5C, L::H2),
    (0xCD5D, 0xCD77, L::H3), (0xCD78, 0xCD78, L::H2), (0xCD79, 0xCD93, L::H3),
    (0xCD94, 0xCD94, L::H2), (0xCD95, 0xCDAF, L::H3), (0xCDB0, 0xCDB0, L::H2),
    (0xCDB1, 0xCDCB, L::H3), (0xCDCC, 0xCDCC, L::H2), (0xCDCD, 0xCDE7, L::H3),
    (0xCDE8, 0xCDE8, L::H2), (0xCDE9, 0xCE03, L::H3), (0xCE04, 0xCE04, L::H2),
    (0xCE05, 0xCE1F, L::H3), (0xCE20, 0xCE20, L::H2), (0xCE21, 0xCE3B, L::H3),
    (0xCE3C, 0xCE3C, L::H2), (0xCE3D, 0xCE57, L::H3), (0xCE58, 0xCE58, L::H2),
    (0xCE59, 0xCE73, L::H3), (0xCE74, 0xCE74, L::H2), (0xCE75, 0xCE8F, L::H3),
    (0xCE90, 0xCE90, L::H2), (0xCE91, 0xCEAB, L::H3), (0xCEAC, 0xCEAC, L::H2),
    (0xCEAD, 0xCEC7, L::H3), (0xCEC8, 0xCEC8, L::H2), (0xCEC9, 0xCEE3, L::H3),
    (0xCEE4, 0xCEE4, L::H2), (0xCEE5, 0xCEFF, L::H3), (0xCF00, 0xCF00, L::H2),
    (0xCF01, 0xCF1B, L::H3), (0xCF1C, 0xCF1C, L::H2), (0xCF1D, 0xCF37, L::H3),
    (0xCF38, 0xCF38, L::H2), (0xCF39, 0xCF53, L::H3), (0xCF54, 0xCF54, L::H2),
    (0xCF55, 0xCF6F, L::H3), (0xCF70, 0xCF70, L::H2), (0xCF71, 0xCF8B, L::H3),
    (0xCF8C, 0xCF8C, L::H2), (0xCF8D, 0xCFA7, L::H3), (0xCFA8, 0xCFA8, L::H2),
    (0xCFA9, 0xCFC3, L::H3), (0xCFC4, 0xCFC4, L::H2), (0xCFC5, 0xCFDF, L::H3),
    (0xCFE0, 0xCFE0, L::H2), (0xCFE1, 0xCFFB, L::H3), (0xCFFC, 0xCFFC, L::H2),
    (0xCFFD, 0xD017, L::H3), (0xD018, 0xD018, L::H2), (0xD019, 0xD033, L::H3),
    (0xD034, 0xD034, L::H2), (0xD035, 0xD04F, L::H3), (0xD050, 0xD050, L::H2),
    (0xD051, 0xD06B, L::H3), (0xD06C, 0xD06C, L::H2), (0xD06D, 0xD087, L::H3),
    (0xD088, 0xD088, L::H2), (0xD089, 0xD0A3, L::H3), (0xD0A4, 0xD0A4, L::H2),
    (0xD0A5, 0xD0BF, L::H3), (0xD0C0, 0xD0C0, L::H2), (0xD0C1, 0xD0DB, L::H3),
    (0xD0DC, 0xD0DC, L::H2), (0xD0DD, 0xD0F7, L::H3), (0xD0F8, 0xD0F8, L::H2),
    (0xD0F9, 0xD113, L::H3), (0xD114, 0xD114, L::H2), (0xD115, 0xD12F, L::H3),
    (0xD130, 0xD130, L::H2), (0xD131, 0xD14B, L::H3), (0xD14C, 0xD14C, L::H2),
    (0xD14D, 0xD167, L::H3), (0xD168, 0xD168, L::H2), (0xD169, 0xD183, L::H3),
    (0xD184, 0xD184, L::H2), (0xD185, 0xD19F, L::H3), (0xD1A0, 0xD1A0, L::H2),
    (0xD1A1, 0xD1BB, L::H3), (0xD1BC, 0xD1BC, L::H2), (0xD1BD, 0xD1D7, L::H3),
    (0xD1D8, 0xD1D8, L::H2), (0xD1D9, 0xD1F3, L::H3), (0xD1F4, 0xD1F4, L::H2),
    (0xD1F5, 0xD20F, L::H3), (0xD210, 0xD210, L::H2), (0xD211, 0xD22B, L::H3),
    (0xD22C, 0xD22C, L::H2), (0xD22D, 0xD247, L::H3), (0xD248, 0xD248, L::H2),
    (0xD249, 0xD263, L::H3), (0xD264, 0xD264, L::H2), (0xD265, 0xD27F, L::H3),
    (0xD280, 0xD280, L::H2), (0xD281, 0xD29B, L::H3), (0xD29C, 0xD29C, L::H2),
    (0xD29D, 0xD2B7, L::H3), (0xD2B8, 0xD2B8, L::H2), (0xD2B9, 0xD2D3, L::H3),
    (0xD2D4, 0xD2D4, L::H2), (0xD2D5, 0xD2EF, L::H3), (0xD2F0, 0xD2F0, L::H2),
    (0xD2F1, 0xD30B, L::H3), (0xD30C, 0xD30C, L::H2), (0xD30D, 0xD327, L::H3),
    (0xD328, 0xD328, L::H2), (0xD329, 0xD343, L::H3), (0xD344, 0xD344, L::H2),
    (0xD345, 0xD35F, L::H3), (0xD360, 0xD360, L::H2), (0xD361, 0xD37B, L::H3),
    (0xD37C, 0xD37C, L::H2), (0xD37D, 0xD397, L::H3), (0xD398, 0xD398, L::H2),
    (0xD399, 0xD3B3, L::H3), (0xD3B4, 0xD3B4, L::H2), (0xD3B5, 0xD3CF, L::H3),
    (0xD3D0, 0xD3D0, L::H2), (0xD3D1, 0xD3EB, L::H3), (0xD3EC, 0xD3EC, L::H2),
    (0xD3ED, 0xD407, L::H3), (0xD408, 0xD408, L::H2), (0xD409, 0xD423, L::H3),
    (0xD424, 0xD424, L::H2), (0xD425, 0xD43F, L::H3), (0xD440, 0xD440, L::H2),
    (0xD441, 0xD45B, L::H3), (0xD45C, 0xD45C, L::H2), (0xD45D, 0xD477, L::H3),
    (0xD478, 0xD478, L::H2), (0xD479, 0xD493, L::H3), (0xD494, 0xD494, L::H2),
    (0xD495, 0xD4AF, L::H3), (0xD4B0, 0xD4B0, L::H2), (0xD4B1, 0xD4CB, L::H3),
    (0xD4CC, 0xD4CC, L::H2), (0xD4CD, 0xD4E7, L::H3), (0xD4E8, 0xD4E8, L::H2),
    (0xD4E9, 0xD503, L::H3), (0xD504, 0xD504, L::H2), (0xD505, 0xD51F, L::H3),
    (0xD520, 0xD520, L::H2), (0xD521, 0xD53B, L::H3), (0xD53C, 0xD53C, L::H2),
    (0xD53D, 0xD557, L::H3), (0xD558, 0xD558, L::H2), (0xD559, 0xD573, L::H3),
    (0xD574, 0xD574, L::H2), (0xD575, 0xD58F, L::H3), (0xD590, 0xD590, L::H2),
    (0xD591, 0xD5AB, L::H3), (0xD5AC, 0xD5AC, L::H2), (0xD5AD, 0xD5C7, L::H3),
    (0xD5C8, 0xD5C8, L::H2), (0xD5C9, 0xD5E3, L::H3), (0xD5E4, 0xD5E4, L::H2),
    (0xD5E5, 0xD5FF, L::H3), (0xD600, 0xD600, L::H2), (0xD601, 0xD61B, L::H3),
    (0xD61C, 0xD61C, L::H2), (0xD61D, 0xD637, L::H3), (0xD638, 0xD638, L::H2),
    (0xD639, 0xD653, L::H3), (0xD654, 0xD654, L::H2), (0xD655, 0xD66F, L::H3),
    (0xD670, 0xD670, L::H2), (0xD671, 0xD68B, L::H3), (0xD68C, 0xD68C, L::H2),
    (0xD68D, 0xD6A7, L::H3), (0xD6A8, 0xD6A8, L::H2), (0xD6A9, 0xD6C3, L::H3),
    (0xD6C4, 0xD6C4, L::H2), (0xD6C5, 0xD6DF, L::H3), (0xD6E0, 0xD6E0, L::H2),
    (0xD6E1, 0xD6FB, L::H3), (0xD6FC, 0xD6FC, L::H2), (0xD6FD, 0xD717, L::H3),
    (0xD718, 0xD718, L::H2), (0xD719, 0xD733, L::H3), (0xD734, 0xD734, L::H2),
    (0xD735, 0xD74F, L::H3), (0xD750, 0xD750, L::H2), (0xD751, 0xD76B, L::H3),
    (0xD76C, 0xD76C, L::H2), (0xD76D, 0xD787, L::H3), (0xD788, 0xD788, L::H2),
    (0xD789, 0xD7A3, L::H3), (0xD7B0, 0xD7C6, L::JV), (0xD7CB, 0xD7FB, L::JT),
    (0xF900, 0xFAFF, L::ID), (0xFB00, 0xFB06, L::AL), (0xFB13, 0xFB17, L::AL),
    (0xFB1D, 0xFB1D, L::HL), (0xFB1E, 0xFB1E, L::CM), (0xFB1F, 0xFB28, L::HL),
    (0xFB29, 0xFB29, L::AL), (0xFB2A, 0xFB36, L::HL), (0xFB38, 0xFB3C, L::HL),
    (0xFB3E, 0xFB3E, L::HL), (0xFB40, 0xFB41, L::HL), (0xFB43, 0xFB44, L::HL),
    (0xFB46, 0xFB4F, L::HL), (0xFB50, 0xFD3D, L::AL), (0xFD3E, 0xFD3E, L::CL),
    (0xFD3F, 0xFD3F, L::OP), (0xFD40, 0xFDCF, L::AL), (0xFDF0, 0xFDFB, L::AL),
    (0xFDFC, 0xFDFC, L::PO), (0xFDFD, 0xFDFF, L::AL), (0xFE00, 0xFE0F, L::CM),
    (0xFE10, 0xFE12, L::CL), (0xFE13, 0xFE14, L::NS), (0xFE15, 0xFE16, L::EX),
    (0xFE17, 0xFE17, L::OP), (0xFE18, 0xFE18, L::CL), (0xFE19, 0xFE19, L::IN),
    (0xFE20, 0xFE20, L::GL), (0xFE21, 0xFE21, L::CM), (0xFE22, 0xFE22, L::GL),
    (0xFE23, 0xFE23, L::CM), (0xFE24, 0xFE24, L::GL), (0xFE25, 0xFE25, L::CM),
    (0xFE26, 0xFE27, L::GL), (0xFE28, 0xFE28, L::CM), (0xFE29, 0xFE29, L::GL),
    (0xFE2A, 0xFE2A, L::CM), (0xFE2B, 0xFE2B, L::GL), (0xFE2C, 0xFE2C, L::CM),
    (0xFE2D, 0xFE2E, L::GL), (0xFE2F, 0xFE2F, L::CM), (0xFE30, 0xFE34, L::ID),
    (0xFE35, 0xFE35, L::OP), (0xFE36, 0xFE36, L::CL), (0xFE37, 0xFE37, L::OP),
    (0xFE38, 0xFE38, L::CL), (0xFE39, 0xFE39, L::OP), (0xFE3A, 0xFE3A, L::CL),
    (0xFE3B, 0xFE3B, L::OP), (0xFE3C, 0xFE3C, L::CL), (0xFE3D, 0xFE3D, L::OP),
    (0xFE3E, 0xFE3E, L::CL), (0xFE3F, 0xFE3F, L::OP), (0xFE40, 0xFE40, L::CL),
    (0xFE41, 0xFE41, L::OP), (0xFE42, 0xFE42, L::CL), (0xFE43, 0xFE43, L::OP),
    (0xFE44, 0xFE44, L::CL), (0xFE45, 0xFE46, L::ID), (0xFE47, 0xFE47, L::OP),
    (0xFE48, 0xFE48, L::CL), (0xFE49, 0xFE4F, L::ID), (0xFE50, 0xFE50, L::CL),
    (0xFE51, 0xFE51, L::ID), (0xFE52, 0xFE52, L::CL), (0xFE54, 0xFE55, L::NS),
    (0xFE56, 0xFE57, L::EX), (0xFE58, 0xFE58, L::ID), (0xFE59, 0xFE59, L::OP),
    (0xFE5A, 0xFE5A, L::CL), (0xFE5B, 0xFE5B, L::OP), (0xFE5C, 0xFE5C, L::CL),
    (0xFE5D, 0xFE5D, L::OP), (0xFE5E, 0xFE5E, L::CL), (0xFE5F, 0xFE66, L::ID),
    (0xFE68, 0xFE68, L::ID), (0xFE69, 0xFE69, L::PR), (0xFE6A, 0xFE6A, L::PO),
    (0xFE6B, 0xFE6B, L::ID), (0xFE70, 0xFE74, L::AL), (0xFE76, 0xFEFC, L::AL),
    (0xFEFF, 0xFEFF, L::WJ), (0xFF01, 0xFF01, L::EX), (0xFF02, 0xFF03, L::ID),
    (0xFF04, 0xFF04, L::PR), (0xFF05, 0xFF05, L::PO), (0xFF06, 0xFF07, L::ID),
    (0xFF08, 0xFF08, L::OP), (0xFF09, 0xFF09, L::CL), (0xFF0A, 0xFF0B, L::ID),
    (0xFF0C, 0xFF0C, L::CL), (0xFF0D, 0xFF0D, L::ID), (0xFF0E, 0xFF0E, L::CL),
    (0xFF0F, 0xFF19, L::ID), (0xFF1A, 0xFF1B, L::NS), (0xFF1C, 0xFF1E, L::ID),
    (0xFF1F, 0xFF1F, L::EX), (0xFF20, 0xFF3A, L::ID), (0xFF3B, 0xFF3B, L::OP),
    (0xFF3C, 0xFF3C, L::ID), (0xFF3D, 0xFF3D, L::CL), (0xFF3E, 0xFF5A, L::ID),
    (0xFF5B, 0xFF5B, L::OP), (0xFF5C, 0xFF5C, L::ID), (0xFF5D, 0xFF5D, L::CL),
    (0xFF5E, 0xFF5E, L::ID), (0xFF5F, 0xFF5F, L::OP), (0xFF60, 0xFF61, L::CL),
    (0xFF62, 0xFF62, L::OP), (0xFF63, 0xFF64, L::CL), (0xFF65, 0xFF65, L::NS),
    (0xFF66, 0xFF66, L::ID), (0xFF67, 0xFF70, L::CJ), (0xFF71, 0xFF9D, L::ID),
    (0xFF9E, 0xFF9F, L::NS), (0xFFA0, 0xFFBE, L::ID), (0xFFC2, 0xFFC7, L::ID),
    (0xFFCA, 0xFFCF, L::ID), (0xFFD2, 0xFFD7, L::ID), (0xFFDA, 0xFFDC, L::ID),
    (0xFFE0, 0xFFE0, L::PO), (0xFFE1, 0xFFE1, L::PR), (0xFFE2, 0xFFE4, L::ID),
    (0xFFE5, 0xFFE6, L::PR), (0xFFE8, 0xFFEE, L::AL), (0xFFF9, 0xFFFB, L::CM),
    (0xFFFC, 0xFFFC, L::CB), (0xFFFD, 0xFFFD, L::AI), (0x10000, 0x1000B, L::AL),
    (0x1000D, 0x10026, L::AL), (0x10028, 0x1003A, L::AL), (0x1003C, 0x1003D, L::AL),
    (0x1003F, 0x1004D, L::AL), (0x10050, 0x1005D, L::AL), (0x10080, 0x100FA, L::AL),
    (0x10100, 0x10102, L::BA), (0x10107, 0x10133, L::AL), (0x10137, 0x1018E, L::AL),
    (0x10190, 0x1019C, L::AL), (0x101A0, 0x101A0, L::AL), (0x101D0, 0x101FC, L::AL),
    (0x101FD, 0x101FD, L::CM), (0x10280, 0x1029C, L::AL), (0x102A0, 0x102D0, L::AL),
    (0x102E0, 0x102E0, L::CM), (0x102E1, 0x102FB, L::AL), (0x10300, 0x10323, L::AL),
    (0x1032D, 0x1034A, L::AL), (0x10350, 0x10375, L::AL), (0x10376, 0x1037A, L::CM),
    (0x10380, 0x1039D, L::AL), (0x1039F, 0x1039F, L::BA), (0x103A0, 0x103C3, L::AL),
    (0x103C8, 0x103CF, L::AL), (0x103D0, 0x103D0, L::BA), (0x103D1, 0x103D5, L::AL),
    (0x10400, 0x1049D, L::AL), (0x104A0, 0x104A9, L::NU), (0x104B0, 0x104D3, L::AL),
    (0x104D8, 0x104FB, L::AL), (0x10500, 0x10527, L::AL), (0x10530, 0x10563, L::AL),
    (0x1056F, 0x1057A, L::AL), (0x1057C, 0x1058A, L::AL), (0x1058C, 0x10592, L::AL),
    (0x10594, 0x10595, L::AL), (0x10597, 0x105A1, L::AL), (0x105A3, 0x105B1, L::AL),
    (0x105B3, 0x105B9, L::AL), (0x105BB, 0x105BC, L::AL), (0x105C0, 0x105F3, L::AL),
    (0x10600, 0x10736, L::AL), (0x10740, 0x10755, L::AL), (0x10760, 0x10767, L::AL),
    (0x10780, 0x10785, L::AL), (0x10787, 0x107B0, L::AL), (0x107B2, 0x107BA, L::AL),
    (0x10800, 0x10805, L::AL), (0x10808, 0x10808, L::AL), (0x1080A, 0x10835, L::AL),
    (0x10837, 0x10838, L::AL), (0x1083C, 0x1083C, L::AL), (0x1083F, 0x10855, L::AL),
    (0x10857, 0x10857, L::BA), (0x10858, 0x1089E, L::AL), (0x108A7, 0x108AF, L::AL),
    (0x108E0, 0x108F2, L::AL), (0x108F4, 0x108F5, L::AL), (0x108FB, 0x1091B, L::AL),
    (0x1091F, 0x1091F, L::BA), (0x10920, 0x10939, L::AL), (0x1093F, 0x10959, L::AL),
    (0x10980, 0x109B7, L::AL), (0x109BC, 0x109CF, L::AL), (0x109D2, 0x10A00, L::AL),
    (0x10A01, 0x10A03, L::CM), (0x10A05, 0x10A06, L::CM), (0x10A0C, 0x10A0F, L::CM),
    (0x10A10, 0x10A13, L::AL), (0x10A15, 0x10A17, L::AL), (0x10A19, 0x10A35, L::AL),
    (0x10A38, 0x10A3A, L::CM), (0x10A3F, 0x10A3F, L::CM), (0x10A40, 0x10A48, L::AL),
    (0x10A50, 0x10A57, L::BA), (0x10A58, 0x10A58, L::AL), (0x10A60, 0x10A9F, L::AL),
    (0x10AC0, 0x10AE4, L::AL), (0x10AE5, 0x10AE6, L::CM), (0x10AEB, 0x10AEF, L::AL),
    (0x10AF0, 0x10AF5, L::BA), (0x10AF6, 0x10AF6, L::IN), (0x10B00, 0x10B35, L::AL),
    (0x10B39, 0x10B3F, L::BA), (0x10B40, 0x10B55, L::AL), (0x10B58, 0x10B72, L::AL),
    (0x10B78, 0x10B91, L::AL), (0x10B99, 0x10B9C, L::AL), (0x10BA9, 0x10BAF, L::AL),
    (0x10C00, 0x10C48, L::AL), (0x10C80, 0x10CB2, L::AL), (0x10CC0, 0x10CF2, L::AL),
    (0x10CFA, 0x10D23, L::AL), (0x10D24, 0x10D27, L::CM), (0x10D30, 0x10D39, L::NU),
    (0x10D40, 0x10D49, L::NU), (0x10D4A, 0x10D65, L::AL), (0x10D69, 0x10D6D, L::CM),
    (0x10D6F, 0x10D85, L::AL), (0x10D8E, 0x10D8F, L::AL), (0x10E60, 0x10E7E, L::AL),
    (0x10E80, 0x10EA9, L::AL), (0x10EAB, 0x10EAC, L::CM), (0x10EB0, 0x10EB1, L::AL),
    (0x10EC2, 0x10EC7, L::AL), (0x10ED0, 0x10ED0, L::BA), (0x10ED1, 0x10ED8, L::AL),
    (0x10EFA, 0x10EFF, L::CM), (0x10F00, 0x10F27, L::AL), (0x10F30, 0x10F45, L::AL),
    (0x10F46, 0x10F50, L::CM), (0x10F51, 0x10F59, L::AL), (0x10F70, 0x10F81, L::AL),
    (0x10F82, 0x10F85, L::CM), (0x10F86, 0x10F89, L::AL), (0x10FB0, 0x10FCB, L::AL),
    (0x10FE0, 0x10FF6, L::AL), (0x11000, 0x11002, L::CM), (0x11003, 0x11004, L::AP),
    (0x11005, 0x11037, L::AK), (0x11038, 0x11045, L::CM), (0x11046, 0x11046, L::VI),
    (0x11047, 0x11048, L::BA), (0x11049, 0x1104D, L::ID), (0x11052, 0x11065, L::ID),
    (0x11066, 0x1106F, L::AS), (0x11070, 0x11070, L::CM), (0x11071, 0x11072, L::AK),
    (0x11073, 0x11074, L::CM), (0x11075, 0x11075, L::AK), (0x1107F, 0x1107F, L::GL),
    (0x11080, 0x11082, L::CM), (0x11083, 0x110AF, L::AL), (0x110B0, 0x110BA, L::CM),
    (0x110BB, 0x110BC, L::AL), (0x110BD, 0x110BD, L::NU), (0x110BE, 0x110C1, L::BA),
    (0x110C2, 0x110C2, L::CM), (0x110CD, 0x110CD, L::NU), (0x110D0, 0x110E8, L::AL),
    (0x110F0, 0x110F9, L::NU), (0x11100, 0x11102, L::CM), (0x11103, 0x11126, L::AL),
    (0x11127, 0x11134, L::CM), (0x11136, 0x1113F, L::NU), (0x11140, 0x11143, L::BA),
    (0x11144, 0x11144, L::AL), (0x11145, 0x11146, L::CM), (0x11147, 0x11147, L::AL),
    (0x11150, 0x11172, L::AL), (0x11173, 0x11173, L::CM), (0x11174, 0x11174, L::AL),
    (0x11175, 0x11175, L::BB), (0x11176, 0x11176, L::AL), (0x11180, 0x11182, L::CM),
    (0x11183, 0x111B2, L::AL), (0x111B3, 0x111C0, L::CM), (0x111C1, 0x111C4, L::AL),
    (0x111C5, 0x111C6, L::BA), (0x111C7, 0x111C7, L::AL), (0x111C8, 0x111C8, L::BA),
    (0x111C9, 0x111CC, L::CM), (0x111CD, 0x111CD, L::AL), (0x111CE, 0x111CF, L::CM),
    (0x111D0, 0x111D9, L::NU), (0x111DA, 0x111DA, L::AL), (0x111DB, 0x111DB, L::BB),
    (0x111DC, 0x111DC, L::AL), (0x111DD, 0x111DF, L::BA), (0x111E1, 0x111F4, L::AL),
    (0x11200, 0x11211, L::AL), (0x11213, 0x1122B, L::AL), (0x1122C, 0x11237, L::CM),
    (0x11238, 0x11239, L::BA), (0x1123A, 0x1123A, L::AL), (0x1123B, 0x1123C, L::BA),
    (0x1123D, 0x1123D, L::AL), (0x1123E, 0x1123E, L::CM), (0x1123F, 0x11240, L::AL),
    (0x11241, 0x11241, L::CM), (0x11280, 0x11286, L::AL), (0x11288, 0x11288, L::AL),
    (0x1128A, 0x1128D, L::AL), (0x1128F, 0x1129D, L::AL), (0x1129F, 0x112A8, L::AL),
    (0x112A9, 0x112A9, L::BA), (0x112B0, 0x112DE, L::AL), (0x112DF, 0x112EA, L::CM),
    (0x112F0, 0x112F9, L::NU), (0x11300, 0x11303, L::CM), (0x11305, 0x1130C, L::AK),
    (0x1130F, 0x11310, L::AK), (0x11313, 0x11328, L::AK), (0x1132A, 0x11330, L::AK),
    (0x11332, 0x11333, L::AK), (0x11335, 0x11339, L::AK), (0x1133B, 0x1133C, L::CM),
    (0x1133D, 0x1133D, L::BA), (0x1133E, 0x11344, L::CM), (0x11347, 0x11348, L::CM),
    (0x1134B, 0x1134C, L::CM), (0x1134D, 0x1134D, L::VI), (0x11350, 0x11350, L::AS),
    (0x11357, 0x11357, L::CM), (0x1135D, 0x1135D, L::BA), (0x1135E, 0x1135F, L::AS),
    (0x11360, 0x11361, L::AK), (0x11362, 0x11363, L::CM), (0x11366, 0x1136C, L::CM),
    (0x11370, 0x11374, L::CM), (0x11380, 0x11389, L::AS), (0x1138B, 0x1138B, L::AS),
    (0x1138E, 0x1138E, L::AS), (0x11390, 0x11391, L::AS), (0x11392, 0x113B5, L::AK),
    (0x113B7, 0x113B7, L::ID), (0x113B8, 0x113C0, L::CM), (0x113C2, 0x113C2, L::CM),
    (0x113C5, 0x113C5, L::CM), (0x113C7, 0x113CA, L::CM), (0x113CC, 0x113CF, L::CM),
    (0x113D0, 0x113D0, L::VI), (0x113D1, 0x113D1, L::AP), (0x113D2, 0x113D2, L::CM),
    (0x113D3, 0x113D5, L::ID), (0x113D7, 0x113D8, L::ID), (0x113E1, 0x113E2, L::CM),
    (0x11400, 0x11434, L::AL), (0x11435, 0x11446, L::CM), (0x11447, 0x1144A, L::AL),
    (0x1144B, 0x1144E, L::BA), (0x1144F, 0x1144F, L::AL), (0x11450, 0x11459, L::NU),
    (0x1145A, 0x1145B, L::BA), (0x1145D, 0x1145D, L::AL), (0x1145E, 0x1145E, L::CM),
    (0x1145F, 0x11461, L::AL), (0x11480, 0x114AF, L::AL), (0x114B0, 0x114C3, L::CM),
    (0x114C4, 0x114C7, L::AL), (0x114D0, 0x114D9, L::NU), (0x11580, 0x115AE, L::AL),
    (0x115AF, 0x115B5, L::CM), (0x115B8, 0x115C0, L::CM), (0x115C1, 0x115C1, L::BB),
    (0x115C2, 0x115C3, L::BA), (0x115C4, 0x115C5, L::EX), (0x115C6, 0x115C8, L::AL),
    (0x115C9, 0x115D7, L::BA), (0x115D8, 0x115DB, L::AL), (0x115DC, 0x115DD, L::CM),
    (0x11600, 0x1162F, L::AL), (0x11630, 0x11640, L::CM), (0x11641, 0x11642, L::BA),
    (0x11643, 0x11644, L::AL), (0x11650, 0x11659, L::NU), (0x11660, 0x1166C, L::BB),
    (0x11680, 0x116AA, L::AL), (0x116AB, 0x116B7, L::CM), (0x116B8, 0x116B9, L::AL),
    (0x116C0, 0x116C9, L::NU), (0x116D0, 0x116E3, L::NU), (0x11700, 0x1171A, L::SA),
    (0x1171D, 0x1172B, L::SA), (0x11730, 0x11739, L::NU), (0x1173A, 0x1173B, L::SA),
    (0x1173C, 0x1173E, L::BA), (0x1173F, 0x11746, L::SA), (0x11800, 0x1182B, L::AL),
    (0x1182C, 0x1183A, L::CM), (0x1183B, 0x1183B, L::AL), (0x118A0, 0x118DF, L::AL),
    (0x118E0, 0x118E9, L::NU), (0x118EA, 0x118F2, L::AL), (0x118FF, 0x118FF, L::AL),
    (0x11900, 0x11906, L::AK), (0x11909, 0x11909, L::AK), (0x1190C, 0x11913, L::AK),
    (0x11915, 0x11916, L::AK), (0x11918, 0x1192F, L::AK), (0x11930, 0x11935, L::CM),
    (0x11937, 0x11938, L::CM), (0x1193B, 0x1193D, L::CM), (0x1193E, 0x1193E, L::VI),
    (0x1193F, 0x1193F, L::AP), (0x11940, 0x11940, L::CM), (0x11941, 0x11941, L::AP),
    (0x11942, 0x11943, L::CM), (0x11944, 0x11946, L::BA), (0x11950, 0x11959, L::AS),
    (0x119A0, 0x119A7, L::AL), (0x119AA, 0x119D0, L::AL), (0x119D1, 0x119D7, L::CM),
    (0x119DA, 0x119E0, L::CM), (0x119E1, 0x119E1, L::AL), (0x119E2, 0x119E2, L::BB),
    (0x119E3, 0x119E3, L::AL), (0x119E4, 0x119E4, L::CM), (0x11A00, 0x11A00, L::AL),
    (0x11A01, 0x11A0A, L::CM), (0x11A0B, 0x11A32, L::AL), (0x11A33, 0x11A39, L::CM),
    (0x11A3A, 0x11A3A, L::AL), (0x11A3B, 0x11A3E, L::CM), (0x11A3F, 0x11A3F, L::BB),
    (0x11A40, 0x11A40, L::AL), (0x11A41, 0x11A44, L::BA), (0x11A45, 0x11A45, L::BB),
    (0x11A46, 0x11A46, L::AL), (0x11A47, 0x11A47, L::CM), (0x11A50, 0x11A50, L::AL),
    (0x11A51, 0x11A5B, L::CM), (0x11A5C, 0x11A89, L::AL), (0x11A8A, 0x11A99, L::CM),
    (0x11A9A, 0x11A9C, L::BA), (0x11A9D, 0x11A9D, L::AL), (0x11A9E, 0x11AA0, L::BB),
    (0x11AA1, 0x11AA2, L::BA), (0x11AB0, 0x11AF8, L::AL), (0x11B00, 0x11B09, L::BB),
    (0x11B60, 0x11B67, L::CM), (0x11BC0, 0x11BE1, L::AL), (0x11BF0, 0x11BF9, L::NU),
    (0x11C00, 0x11C08, L::AL), (0x11C0A, 0x11C2E, L::AL), (0x11C2F, 0x11C36, L::CM),
    (0x11C38, 0x11C3F, L::CM), (0x11C40, 0x11C40, L::AL), (0x11C41, 0x11C45, L::BA),
    (0x11C50, 0x11C59, L::NU), (0x11C5A, 0x11C6C, L::AL), (0x11C70, 0x11C70, L::BB),
    (0x11C71, 0x11C71, L::EX), (0x11C72, 0x11C8F, L::AL), (0x11C92, 0x11CA7, L::CM),
    (0x11CA9, 0x11CB6, L::CM), (0x11D00, 0x11D06, L::AL), (0x11D08, 0x11D09, L::AL),
    (0x11D0B, 0x11D30, L::AL), (0x11D31, 0x11D36, L::CM), (0x11D3A, 0x11D3A, L::CM),
    (0x11D3C, 0x11D3D, L::CM), (0x11D3F, 0x11D45, L::CM), (0x11D46, 0x11D46, L::AL),
    (0x11D47, 0x11D47, L::CM), (0x11D50, 0x11D59, L::NU), (0x11D60, 0x11D65, L::AL),
    (0x11D67, 0x11D68, L::AL), (0x11D6A, 0x11D89, L::AL), (0x11D8A, 0x11D8E, L::CM),
    (0x11D90, 0x11D91, L::CM), (0x11D93, 0x11D97, L::CM), (0x11D98, 0x11D98, L::AL),
    (0x11DA0, 0x11DA9, L::NU), (0x11DB0, 0x11DDB, L::AL), (0x11DE0, 0x11DE9, L::NU),
    (0x11EE0, 0x11EF1, L::AS), (0x11EF2, 0x11EF2, L::BA), (0x11EF3, 0x11EF6, L::CM),
    (0x11EF7, 0x11EF8, L::BA), (0x11F00, 0x11F01, L::CM), (0x11F02, 0x11F02, L::AP),
    (0x11F03, 0x11F03, L::CM), (0x11F04, 0x11F10, L::AK), (0x11F12, 0x11F33, L::AK),
    (0x11F34, 0x11F3A, L::CM), (0x11F3E, 0x11F41, L::CM), (0x11F42, 0x11F42, L::VI),
    (0x11F43, 0x11F44, L::BA), (0x11F45, 0x11F4F, L::ID), (0x11F50, 0x11F59, L::AS),
    (0x11F5A, 0x11F5A, L::CM), (0x11FB0, 0x11FB0, L::AL), (0x11FC0, 0x11FDC, L::AL),
    (0x11FDD, 0x11FE0, L::PO), (0x11FE1, 0x11FF1, L::AL), (0x11FFF, 0x11FFF, L::BA),
    (0x12000, 0x12399, L::AL), (0x12400, 0x1246E, L::AL), (0x12470, 0x12474, L::BA),
    (0x12480, 0x12543, L::AL), (0x12F90, 0x12FF2, L::AL), (0x13000, 0x13257, L::AL),
    (0x13258, 0x1325A, L::OP), (0x1325B, 0x1325D, L::CL), (0x1325E, 0x13281, L::AL),
    (0x13282, 0x13282, L::CL), (0x13283, 0x13285, L::AL), (0x13286, 0x13286, L::OP),
    (0x13287, 0x13287, L::CL), (0x13288, 0x13288, L::OP), (0x13289, 0x13289, L::CL),
    (0x1328A, 0x13378, L::AL), (0x13379, 0x13379, L::OP), (0x1337A, 0x1337B, L::CL),
    (0x1337C, 0x1342E, L::AL), (0x1342F, 0x1342F, L::OP), (0x13430, 0x13436, L::GL),
    (0x13437, 0x13437, L::OP), (0x13438, 0x13438, L::CL), (0x13439, 0x1343B, L::GL),
    (0x1343C, 0x1343C, L::OP), (0x1343D, 0x1343D, L::CL), (0x1343E, 0x1343E, L::OP),
    (0x1343F, 0x1343F, L::CL), (0x13440, 0x13440, L::CM), (0x13441, 0x13446, L::AL),
    (0x13447, 0x13455, L::CM), (0x13460, 0x143FA, L::AL), (0x14400, 0x145CD, L::AL),
    (0x145CE, 0x145CE, L::OP), (0x145CF, 0x145CF, L::CL), (0x145D0, 0x14646, L::AL),
    (0x16100, 0x1611D, L::AS), (0x1611E, 0x1612F, L::CM), (0x16130, 0x16139, L::AS),
    (0x16800, 0x16A38, L::AL), (0x16A40, 0x16A5E, L::AL), (0x16A60, 0x16A69, L::NU),
    (0x16A6E, 0x16A6F, L::BA), (0x16A70, 0x16ABE, L::AL), (0x16AC0, 0x16AC9, L::NU),
    (0x16AD0, 0x16AED, L::AL), (0x16AF0, 0x16AF4, L::CM), (0x16AF5, 0x16AF5, L::BA),
    (0x16B00, 0x16B2F, L::AL), (0x16B30, 0x16B36, L::CM), (0x16B37, 0x16B39, L::BA),
    (0x16B3A, 0x16B43, L::AL), (0x16B44, 0x16B44, L::BA), (0x16B45, 0x16B45, L::AL),
    (0x16B50, 0x16B59, L::NU), (0x16B5B, 0x16B61, L::AL), (0x16B63, 0x16B77, L::AL),
    (0x16B7D, 0x16B8F, L::AL), (0x16D40, 0x16D6D, L::AL), (0x16D6E, 0x16D6F, L::BA),
    (0x16D70, 0x16D79, L::NU), (0x16E40, 0x16E96, L::AL), (0x16E97, 0x16E98, L::BA),
    (0x16E99, 0x16E9A, L::AL), (0x16EA0, 0x16EB8, L::AL), (0x16EBB, 0x16ED3, L::AL),
    (0x16F00, 0x16F4A, L::AL), (0x16F4F, 0x16F4F, L::CM), (0x16F50, 0x16F50, L::AL),
    (0x16F51, 0x16F87, L::CM), (0x16F8F, 0x16F92, L::CM), (0x16F93, 0x16F9F, L::AL),
    (0x16FE0, 0x16FE3, L::NS), (0x16FE4, 0x16FE4, L::GL), (0x16FF0, 0x16FF1, L::CM),
    (0x16FF2, 0x16FF3, L::NS), (0x16FF4, 0x16FF6, L::ID), (0x17000, 0x18AFF, L::ID),
    (0x18B00, 0x18CD5, L::AL), (0x18CFF, 0x18CFF, L::AL), (0x18D00, 0x18D1E, L::ID),
    (0x18D80, 0x18DF2, L::ID), (0x1AFF0, 0x1AFF3, L::AL), (0x1AFF5, 0x1AFFB, L::AL),
    (0x1AFFD, 0x1AFFE, L::AL), (0x1B000, 0x1B122, L::ID), (0x1B132, 0x1B132, L::CJ),
    (0x1B150, 0x1B152, L::CJ), (0x1B155, 0x1B155, L::CJ), (0x1B164, 0x1B167, L::CJ),
    (0x1B170, 0x1B2FB, L::ID), (0x1BC00, 0x1BC6A, L::AL), (0x1BC70, 0x1BC7C, L::AL),
    (0x1BC80, 0x1BC88, L::AL), (0x1BC90, 0x1BC99, L::AL), (0x1BC9C, 0x1BC9C, L::AL),
    (0x1BC9D, 0x1BC9E, L::CM), (0x1BC9F, 0x1BC9F, L::BA), (0x1BCA0, 0x1BCA3, L::CM),
    (0x1CC00, 0x1CCEF, L::AL), (0x1CCF0, 0x1CCF9, L::NU), (0x1CCFA, 0x1CCFC, L::AL),
    (0x1CD00, 0x1CEB3, L::AL), (0x1CEBA, 0x1CED0, L::AL), (0x1CEE0, 0x1CEF0, L::AL),
    (0x1CF00, 0x1CF2D, L::CM), (0x1CF30, 0x1CF46, L::CM), (0x1CF50, 0x1CFC3, L::AL),
    (0x1D000, 0x1D0F5, L::AL), (0x1D100, 0x1D126, L::AL), (0x1D129, 0x1D164, L::AL),
    (0x1D165, 0x1D169, L::CM), (0x1D16A, 0x1D16C, L::AL), (0x1D16D, 0x1D182, L::CM),
    (0x1D183, 0x1D184, L::AL), (0x1D185, 0x1D18B, L::CM), (0x1D18C, 0x1D1A9, L::AL),
    (0x1D1AA, 0x1D1AD, L::CM), (0x1D1AE, 0x1D1EA, L::AL), (0x1D200, 0x1D241, L::AL),
    (0x1D242, 0x1D244, L::CM), (0x1D245, 0x1D245, L::AL), (0x1D2C0, 0x1D2D3, L::AL),
    (0x1D2E0, 0x1D2F3, L::AL), (0x1D300, 0x1D356, L::AL), (0x1D360, 0x1D378, L::AL),
    (0x1D400, 0x1D454, L::AL), (0x1D456, 0x1D49C, L::AL), (0x1D49E, 0x1D49F, L::AL),
    (0x1D4A2, 0x1D4A2, L::AL), (0x1D4A5, 0x1D4A6, L::AL), (0x1D4A9, 0x1D4AC, L::AL),
    (0x1D4AE, 0x1D4B9, L::AL), (0x1D4BB, 0x1D4BB, L::AL), (0x1D4BD, 0x1D4C3, L::AL),
    (0x1D4C5, 0x1D505, L::AL), (0x1D507, 0x1D50A, L::AL), (0x1D50D, 0x1D514, L::AL),
    (0x1D516, 0x1D51C, L::AL), (0x1D51E, 0x1D539, L::AL), (0x1D53B, 0x1D53E, L::AL),
    (0x1D540, 0x1D544, L::AL), (0x1D546, 0x1D546, L::AL), (0x1D54A, 0x1D550, L::AL),
    (0x1D552, 0x1D6A5, L::AL), (0x1D6A8, 0x1D7CB, L::AL), (0x1D7CE, 0x1D7FF, L::NU),
    (0x1D800, 0x1D9FF, L::AL), (0x1DA00, 0x1DA36, L::CM), (0x1DA37, 0x1DA3A, L::AL),
    (0x1DA3B, 0x1DA6C, L::CM), (0x1DA6D, 0x1DA74, L::AL), (0x1DA75, 0x1DA75, L::CM),
    (0x1DA76, 0x1DA83, L::AL), (0x1DA84, 0x1DA84, L::CM), (0x1DA85, 0x1DA86, L::AL),
    (0x1DA87, 0x1DA8A, L::BA), (0x1DA8B, 0x1DA8B, L::AL), (0x1DA9B, 0x1DA9F, L::CM),
    (0x1DAA1, 0x1DAAF, L::CM), (0x1DF00, 0x1DF1E, L::AL), (0x1DF25, 0x1DF2A, L::AL),
    (0x1E000, 0x1E006, L::CM), (0x1E008, 0x1E018, L::CM), (0x1E01B, 0x1E021, L::CM),
    (0x1E023, 0x1E024, L::CM), (0x1E026, 0x1E02A, L::CM), (0x1E030, 0x1E06D, L::AL),
    (0x1E08F, 0x1E08F, L::CM), (0x1E100, 0x1E12C, L::AL), (0x1E130, 0x1E136, L::CM),
    (0x1E137, 0x1E13D, L::AL), (0x1E140, 0x1E149, L::NU), (0x1E14E, 0x1E14F, L::AL),
    (0x1E290, 0x1E2AD, L::AL), (0x1E2AE, 0x1E2AE, L::CM), (0x1E2C0, 0x1E2EB, L::AL),
    (0x1E2EC, 0x1E2EF, L::CM), (0x1E2F0, 0x1E2F9, L::NU), (0x1E2FF, 0x1E2FF, L::PR),
    (0x1E4D0, 0x1E4EB, L::AL), (0x1E4EC, 0x1E4EF, L::CM), (0x1E4F0, 0x1E4F9, L::NU),
    (0x1E5D0, 0x1E5ED, L::AL), (0x1E5EE, 0x1E5EF, L::CM), (0x1E5F0, 0x1E5F0, L::AL),
    (0x1E5F1, 0x1E5FA, L::NU), (0x1E5FF, 0x1E5FF, L::AL), (0x1E6C0, 0x1E6DE, L::AL),
    (0x1E6E0, 0x1E6E2, L::AL), (0x1E6E3, 0x1E6E3, L::CM), (0x1E6E4, 0x1E6E5, L::AL),
    (0x1E6E6, 0x1E6E6, L::CM), (0x1E6E7, 0x1E6ED, L::AL), (0x1E6EE, 0x1E6EF, L::CM),
    (0x1E6F0, 0x1E6F4, L::AL), (0x1E6F5, 0x1E6F5, L::CM), (0x1E6FE, 0x1E6FF, L::AL),
    (0x1E7E0, 0x1E7E6, L::AL), (0x1E7E8, 0x1E7EB, L::AL), (0x1E7ED, 0x1E7EE, L::AL),
    (0x1E7F0, 0x1E7FE, L::AL), (0x1E800, 0x1E8C4, L::AL), (0x1E8C7, 0x1E8CF, L::AL),
    (0x1E8D0, 0x1E8D6, L::CM), (0x1E900, 0x1E943, L::AL), (0x1E944, 0x1E94A, L::CM),
    (0x1E94B, 0x1E94B, L::AL), (0x1E950, 0x1E959, L::NU), (0x1E95E, 0x1E95F, L::OP),
    (0x1EC71, 0x1ECAB, L::AL), (0x1ECAC, 0x1ECAC, L::PO), (0x1ECAD, 0x1ECAF, L::AL),
    (0x1ECB0, 0x1ECB0, L::PO), (0x1ECB1, 0x1ECB4, L::AL), (0x1ED01, 0x1ED3D, L::AL),
    (0x1EE00, 0x1EE03, L::AL), (0x1EE05, 0x1EE1F, L::AL), (0x1EE21, 0x1EE22, L::AL),
    (0x1EE24, 0x1EE24, L::AL), (0x1EE27, 0x1EE27, L::AL), (0x1EE29, 0x1EE32, L::AL),
    (0x1EE34, 0x1EE37, L::AL), (0x1EE39, 0x1EE39, L::AL), (0x1EE3B, 0x1EE3B, L::AL),
    (0x1EE42, 0x1EE42, L::AL), (0x1EE47, 0x1EE47, L::AL), (0x1EE49, 0x1EE49, L::AL),
    (0x1EE4B, 0x1EE4B, L::AL), (0x1EE4D, 0x1EE4F, L::AL), (0x1EE51, 0x1EE52, L::AL),
    (0x1EE54, 0x1EE54, L::AL), (0x1EE57, 0x1EE57, L::AL), (0x1EE59, 0x1EE59, L::AL),
    (0x1EE5B, 0x1EE5B, L::AL), (0x1EE5D, 0x1EE5D, L::AL), (0x1EE5F, 0x1EE5F, L::AL),
    (0x1EE61, 0x1EE62, L::AL), (0x1EE64, 0x1EE64, L::AL), (0x1EE67, 0x1EE6A, L::AL),
    (0x1EE6C, 0x1EE72, L::AL), (0x1EE74, 0x1EE77, L::AL), (0x1EE79, 0x1EE7C, L::AL),
    (0x1EE7E, 0x1EE7E, L::AL), (0x1EE80, 0x1EE89, L::AL), (0x1EE8B, 0x1EE9B, L::AL),
    (0x1EEA1, 0x1EEA3, L::AL), (0x1EEA5, 0x1EEA9, L::AL), (0x1EEAB, 0x1EEBB, L::AL),
    (0x1EEF0, 0x1EEF1, L::AL), (0x1F000, 0x1F0FF, L::ID), (0x1F100, 0x1F10C, L::AI),
    (0x1F10D, 0x1F10F, L::AL), (0x1F110, 0x1F12D, L::AI), (0x1F12E, 0x1F12F, L::AL),
    (0x1F130, 0x1F169, L::AI), (0x1F16A, 0x1F16F, L::AL), (0x1F170, 0x1F1AC, L::AI),
    (0x1F1AD, 0x1F1AD, L::AL), (0x1F1AE, 0x1F1E5, L::ID), (0x1F1E6, 0x1F1FF, L::RI),
    (0x1F200, 0x1F384, L::ID), (0x1F385, 0x1F385, L::EB), (0x1F386, 0x1F39B, L::ID),
    (0x1F39C, 0x1F39D, L::AL), (0x1F39E, 0x1F3B4, L::ID), (0x1F3B5, 0x1F3B6, L::AL),
    (0x1F3B7, 0x1F3BB, L::ID), (0x1F3BC, 0x1F3BC, L::AL), (0x1F3BD, 0x1F3C1, L::ID),
    (0x1F3C2, 0x1F3C4, L::EB), (0x1F3C5, 0x1F3C6, L::ID), (0x1F3C7, 0x1F3C7, L::EB),
    (0x1F3C8, 0x1F3C9, L::ID), (0x1F3CA, 0x1F3CC, L::EB), (0x1F3CD, 0x1F3FA, L::ID),
    (0x1F3FB, 0x1F3FF, L::EM), (0x1F400, 0x1F441, L::ID), (0x1F442, 0x1F443, L::EB),
    (0x1F444, 0x1F445, L::ID), (0x1F446, 0x1F450, L::EB), (0x1F451, 0x1F465, L::ID),
    (0x1F466, 0x1F478, L::EB), (0x1F479, 0x1F47B, L::ID), (0x1F47C, 0x1F47C, L::EB),
    (0x1F47D, 0x1F480, L::ID), (0x1F481, 0x1F483, L::EB), (0x1F484, 0x1F484, L::ID),
    (0x1F485, 0x1F487, L::EB), (0x1F488, 0x1F48E, L::ID), (0x1F48F, 0x1F48F, L::EB),
    (0x1F490, 0x1F490, L::ID), (0x1F491, 0x1F491, L::EB), (0x1F492, 0x1F49F, L::ID),
    (0x1F4A0, 0x1F4A0, L::AL), (0x1F4A1, 0x1F4A1, L::ID), (0x1F4A2, 0x1F4A2, L::AL),
    (0x1F4A3, 0x1F4A3, L::ID), (0x1F4A4, 0x1F4A4, L::AL), (0x1F4A5, 0x1F4A9, L::ID),
    (0x1F4AA, 0x1F4AA, L::EB), (0x1F4AB, 0x1F4AE, L::ID), (0x1F4AF, 0x1F4AF, L::AL),
    (0x1F4B0, 0x1F4B0, L::ID), (0x1F4B1, 0x1F4B2, L::AL), (0x1F4B3, 0x1F4FF, L::ID),
    (0x1F500, 0x1F506, L::AL), (0x1F507, 0x1F516, L::ID), (0x1F517, 0x1F524, L::AL),
    (0x1F525, 0x1F531, L::ID), (0x1F532, 0x1F549, L::AL), (0x1F54A, 0x1F573, L::ID),
    (0x1F574, 0x1F575, L::EB), (0x1F576, 0x1F579, L::ID), (0x1F57A, 0x1F57A, L::EB),
    (0x1F57B, 0x1F58F, L::ID), (0x1F590, 0x1F590, L::EB), (0x1F591, 0x1F594, L::ID),
    (0x1F595, 0x1F596, L::EB), (0x1F597, 0x1F5D3, L::ID), (0x1F5D4, 0x1F5DB, L::AL),
    (0x1F5DC, 0x1F5F3, L::ID), (0x1F5F4, 0x1F5F9, L::AL), (0x1F5FA, 0x1F644, L::ID),
    (0x1F645, 0x1F647, L::EB), (0x1F648, 0x1F64A, L::ID), (0x1F64B, 0x1F64F, L::EB),
    (0x1F650, 0x1F675, L::AL), (0x1F676, 0x1F678, L::QU), (0x1F679, 0x1F67B, L::NS),
    (0x1F67C, 0x1F67F, L::AL), (0x1F680, 0x1F6A2, L::ID), (0x1F6A3, 0x1F6A3, L::EB),
    (0x1F6A4, 0x1F6B3, L::ID), (0x1F6B4, 0x1F6B6, L::EB), (0x1F6B7, 0x1F6BF, L::ID),
    (0x1F6C0, 0x1F6C0, L::EB), (0x1F6C1, 0x1F6CB, L::ID), (0x1F6CC, 0x1F6CC, L::EB),
    (0x1F6CD, 0x1F6FF, L::ID), (0x1F700, 0x1F773, L::AL), (0x1F774, 0x1F776, L::ID),
    (0x1F777, 0x1F77A, L::AL), (0x1F77B, 0x1F77F, L::ID), (0x1F780, 0x1F7D4, L::AL),
    (0x1F7D5, 0x1F7FF, L::ID), (0x1F800, 0x1F80B, L::AL), (0x1F810, 0x1F847, L::AL),
    (0x1F850, 0x1F859, L::AL), (0x1F860, 0x1F887, L::AL), (0x1F890, 0x1F8AD, L::AL),
    (0x1F8B0, 0x1F8BB, L::AL), (0x1F8C0, 0x1F8C1, L::AL), (0x1F8D0, 0x1F8D8, L::AL),
    (0x1F900, 0x1F90B, L::AL), (0x1F90C, 0x1F90C, L::EB), (0x1F90D, 0x1F90E, L::ID),
    (0x1F90F, 0x1F90F, L::EB), (0x1F910, 0x1F917, L::ID), (0x1F918, 0x1F91F, L::EB),
    (0x1F920, 0x1F925, L::ID), (0x1F926, 0x1F926, L::EB), (0x1F927, 0x1F92F, L::ID),
    (0x1F930, 0x1F939, L::EB), (0x1F93A, 0x1F93B, L::ID), (0x1F93C, 0x1F93E, L::EB),
    (0x1F93F, 0x1F976, L::ID), (0x1F977, 0x1F977, L::EB), (0x1F978, 0x1F9B4, L::ID),
    (0x1F9B5, 0x1F9B6, L::EB), (0x1F9B7, 0x1F9B7, L::ID), (0x1F9B8, 0x1F9B9, L::EB),
    (0x1F9BA, 0x1F9BA, L::ID), (0x1F9BB, 0x1F9BB, L::EB), (0x1F9BC, 0x1F9CC, L::ID),
    (0x1F9CD, 0x1F9CF, L::EB), (0x1F9D0, 0x1F9D0, L::ID), (0x1F9D1, 0x1F9DD, L::EB),
    (0x1F9DE, 0x1F9FF, L::ID), (0x1FA00, 0x1FA57, L::AL), (0x1FA58, 0x1FAC2, L::ID),
    (0x1FAC3, 0x1FAC5, L::EB), (0x1FAC6, 0x1FAEF, L::ID), (0x1FAF0, 0x1FAF8, L::EB),
    (0x1FAF9, 0x1FAFF, L::ID), (0x1FB00, 0x1FB92, L::AL), (0x1FB94, 0x1FBEF, L::AL),
    (0x1FBF0, 0x1FBF9, L::NU), (0x1FBFA, 0x1FBFA, L::AL), (0x1FC00, 0x1FFFD, L::ID),
    (0x20000, 0x2FFFD, L::ID), (0x30000, 0x3FFFD, L::ID), (0xE0001, 0xE0001, L::CM),
    (0xE0020, 0xE007F, L::CM), (0xE0100, 0xE01EF, L::CM),
];

/// `Indic_Conjunct_Break` property (`None` omitted).
#[rustfmt::skip]
pub(crate) static INDIC_CONJUNCT_BREAK: &[(u32, u32, I)] = &[
    (0x0300, 0x036F, I::Extend), (0x0483, 0x0489, I::Extend), (0x0591, 0x05BD, I::Extend),
    (0x05BF, 0x05BF, I::Extend), (0x05C1, 0x05C2, I::Extend), (0x05C4, 0x05C5, I::Extend),
    (0x05C7, 0x05C7, I::Extend), (0x0610, 0x061A, I::Extend), (0x064B, 0x065F, I::Extend),
    (0x0670, 0x0670, I::Extend), (0x06D6, 0x06DC, I::Extend), (0x06DF, 0x06E4, I::Extend),
    (0x06E7, 0x06E8, I::Extend), (0x06EA, 0x06ED, I::Extend), (0x0711, 0x0711, I::Extend),
    (0x0730, 0x074A, I::Extend), (0x07A6, 0x07B0, I::Extend), (0x07EB, 0x07F3, I::Extend),
    (0x07FD, 0x07FD, I::Extend), (0x0816, 0x0819, I::Extend), (0x081B, 0x0823, I::Extend),
    (0x0825, 0x0827, I::Extend), (0x0829, 0x082D, I::Extend), (0x0859, 0x085B, I::Extend),
    (0x0897, 0x089F, I::Extend), (0x08CA, 0x08E1, I::Extend), (0x08E3, 0x0902, I::Extend),
    (0x0915, 0x0939, I::Consonant), (0x093A, 0x093A, I::Extend), (0x093C, 0x093C, I::Extend),
    (0x0941, 0x0948, I::Extend), (0x094D, 0x094D, I::Linker), (0x0951, 0x0957, I::Extend),
    (0x0958, 0x095F, I::Consonant), (0x0962, 0x0963, I::Extend), (0x0978, 0x097F, I::Consonant),
    (0x0981, 0x0981, I::Extend), (0x0995, 0x09A8, I::Consonant), (0x09AA, 0x09B0, I::Consonant),
    (0x09B2, 0x09B2, I::Consonant), (0x09B6, 0x09B9, I::Consonant), (0x09BC, 0x09BC, I::Extend),
    (0x09BE, 0x09BE, I::Extend), (0x09C1, 0x09C4, I::Extend), (0x09CD, 0x09CD, I::Linker),
    (0x09D7, 0x09D7, I::Extend), (0x09DC, 0x09DD, I::Consonant), (0x09DF, 0x09DF, I::Consonant),
    (0x09E2, 0x09E3, I::Extend), (0x09F0, 0x09F1, I::Consonant), (0x09FE, 0x09FE, I::Extend),
    (0x0A01, 0x0A02, I::Extend), (0x0A3C, 0x0A3C, I::Extend), (0x0A41, 0x0A42, I::Extend),
    (0x0A47, 0x0A48, I::Extend), (0x0A4B, 0x0A4D, I::Extend), (0x0A51, 0x0A51, I::Extend),
    (0x0A70, 0x0A71, I::Extend), (0x0A75, 0x0A75, I::Extend), (0x0A81, 0x0A82, I::Extend),
    (0x0A95, 0x0AA8, I::Consonant), (0x0AAA, 0x0AB0, I::Consonant), (0x0AB2, 0x0AB3, I::Consonant),
    (0x0AB5, 0x0AB9, I::Consonant), (0x0ABC, 0x0ABC, I::Extend), (0x0AC1, 0x0AC5, I::Extend),
    (0x0AC7, 0x0AC8, I::Extend), (0x0ACD, 0x0ACD, I::Linker), (0x0AE2, 0x0AE3, I::Extend),
    (0x0AF9, 0x0AF9, I::Consonant), (0x0AFA, 0x0AFF, I::Extend), (0x0B01, 0x0B01, I::Extend),
    (0x0B15, 0x0B28, I::Consonant), (0x0B2A, 0x0B30, I::Consonant), (0x0B32, 0x0B33, I::Consonant),
    (0x0B35, 0x0B39, I::Consonant), (0x0B3C, 0x0B3C, I::Extend), (0x0B3E, 0x0B3F, I::Extend),
    (0x0B41, 0x0B44, I::Extend), (0x0B4D, 0x0B4D, I::Linker), (0x0B55, 0x0B57, I::Extend),
    (0x0B5C, 0x0B5D, I::Consonant), (0x0B5F, 0x0B5F, I::Consonant), (0x0B62, 0x0B63, I::Extend),
    (0x0B71, 0x0B71, I::Consonant), (0x0B82, 0x0B82, I::Extend), (0x0BBE, 0x0BBE, I::Extend),
    (0x0BC0, 0x0BC0, I::Extend), (0x0BCD, 0x0BCD, I::Extend), (0x0BD7, 0x0BD7, I::Extend),
    (0x0C00, 0x0C00, I::Extend), (0x0C04, 0x0C04, I::Extend), (0x0C15, 0x0C28, I::Consonant),
    (0x0C2A, 0x0C39, I::Consonant), (0x0C3C, 0x0C3C, I::Extend), (0x0C3E, 0x0C40, I::Extend),
    (0x0C46, 0x0C48, I::Extend), (0x0C4A, 0x0C4C, I::Extend), (0x0C4D, 0x0C4D, I::Linker),
    (0x0C55, 0x0C56, I::Extend), (0x0C58, 0x0C5A, I::Consonant), (0x0C62, 0x0C63, I::Extend),
    (0x0C81, 0x0C81, I::Extend), (0x0CBC, 0x0CBC, I::Extend), (0x0CBF, 0x0CC0, I::Extend),
    (0x0CC2, 0x0CC2, I::Extend), (0x0CC6, 0x0CC8, I::Extend), (0x0CCA, 0x0CCD, I::Extend),
    (0x0CD5, 0x0CD6, I::Extend), (0x0CE2, 0x0CE3, I::Extend), (0x0D00, 0x0D01, I::Extend),
    (0x0D15, 0x0D3A, I::Consonant), (0x0D3B, 0x0D3C, I::Extend), (0x0D3E, 0x0D3E, I::Extend),
    (0x0D41, 0x0D44, I::Extend), (0x0D4D, 0x0D4D, I::Linker), (0x0D57, 0x0D57, I::Extend),
    (0x0D62, 0x0D63, I::Extend), (0x0D81, 0x0D81, I::Extend), (0x0DCA, 0x0DCA, I::Extend),
    (0x0DCF, 0x0DCF, I::Extend), (0x0DD2, 0x0DD4, I::Extend), (0x0DD6, 0x0DD6, I::Extend),
    (0x0DDF, 0x0DDF, I::Extend), (0x0E31, 0x0E31, I::Extend), (0x0E34, 0x0E3A, I::Extend),
    (0x0E47, 0x0E4E, I::Extend), (0x0EB1, 0x0EB1, I::Extend), (0x0EB4, 0x0EBC, I::Extend),
    (0x0EC8, 0x0ECE, I::Extend), (0x0F18, 0x0F19, I::Extend), (0x0F35, 0x0F35, I::Extend),
    (0x0F37, 0x0F37, I::Extend), (0x0F39, 0x0F39, I::Extend), (0x0F71, 0x0F7E, I::Extend),
    (0x0F80, 0x0F84, I::Extend), (0x0F86, 0x0F87, I::Extend), (0x0F8D, 0x0F97, I::Extend),
    (0x0F99, 0x0FBC, I::Extend), (0x0FC6, 0x0FC6, I::Extend), (0x1000, 0x102A, I::Consonant),
    (0x102D, 0x1030, I::Extend), (0x1032, 0x1037, I::Extend), (0x1039, 0x1039, I::Linker),
    (0x103A, 0x103A, I::Extend), (0x103D, 0x103E, I::Extend), (0x103F, 0x103F, I::Consonant),
    (0x1050, 0x1055, I::Consonant), (0x1058, 0x1059, I::Extend), (0x105A, 0x105D, I::Consonant),
    (0x105E, 0x1060, I::Extend), (0x1061, 0x1061, I::Consonant), (0x1065, 0x1066, I::Consonant),
    (0x106E, 0x1070, I::Consonant), (0x1071, 0x1074, I::Extend), (0x1075, 0x1081, I::Consonant),
    (0x1082, 0x1082, I::Extend), (0x1085, 0x1086, I::Extend), (0x108D, 0x108D, I::Extend),
    (0x108E, 0x108E, I::Consonant), (0x109D, 0x109D, I::Extend), (0x135D, 0x135F, I::Extend),
    (0x1712, 0x1715, I::Extend), (0x1732, 0x1734, I::Extend), (0x1752, 0x1753, I::Extend),
    (0x1772, 0x1773, I::Extend), (0x1780, 0x17B3, I::Consonant), (0x17B4, 0x17B5, I::Extend),
    (0x17B7, 0x17BD, I::Extend), (0x17C6, 0x17C6, I::Extend), (0x17C9, 0x17D1, I::Extend),
    (0x17D2, 0x17D2, I::Linker), (0x17D3, 0x17D3, I::Extend), (0x17DD, 0x17DD, I::Extend),
    (0x180B, 0x180D, I::Extend), (0x180F, 0x180F, I::Extend), (0x1885, 0x1886, I::Extend),
    (0x18A9, 0x18A9, I::Extend), (0x1920, 0x1922, I::Extend), (0x1927, 0x1928, I::Extend),
    (0x1932, 0x1932, I::Extend), (0x1939, 0x193B, I::Extend), (0x1A17, 0x1A18, I::Extend),
    (0x1A1B, 0x1A1B, I::Extend), (0x1A20, 0x1A54, I::Consonant), (0x1A56, 0x1A56, I::Extend),
    (0x1A58, 0x1A5E, I::Extend), (0x1A60, 0x1A60, I::Linker), (0x1A62, 0x1A62, I::Extend),
    (0x1A65, 0x1A6C, I::Extend), (0x1A73, 0x1A7C, I::Extend), (0x1A7F, 0x1A7F, I::Extend),
    (0x1AB0, 0x1ADD, I::Extend), (0x1AE0, 0x1AEB, I::Extend), (0x1B00, 0x1B03, I::Extend),
    (0x1B0B, 0x1B0C, I::Consonant), (0x1B13, 0x1B33, I::Consonant), (0x1B34, 0x1B3D, I::Extend),
    (0x1B42, 0x1B43, I::Extend), (0x1B44, 0x1B44, I::Linker), (0x1B45, 0x1B4C, I::Consonant),
    (0x1B6B, 0x1B73, I::Extend), (0x1B80, 0x1B81, I::Extend), (0x1B83, 0x1BA0, I::Consonant),
    (0x1BA2, 0x1BA5, I::Extend), (0x1BA8, 0x1BAA, I::Extend), (0x1BAB, 0x1BAB, I::Linker),
    (0x1BAC, 0x1BAD, I::Extend), (0x1BAE, 0x1BAF, I::Consonant), (0x1BBB, 0x1BBD, I::Consonant),
    (0x1BE6, 0x1BE6, I::Extend), (0x1BE8, 0x1BE9, I::Extend), (0x1BED, 0x1BED, I::Extend),
    (0x1BEF, 0x1BF3, I::Extend), (0x1C2C, 0x1C33, I::Extend), (0x1C36, 0x1C37, I::Extend),
    (0x1CD0, 0x1CD2, I::Extend), (0x1CD4, 0x1CE0, I::Extend), (0x1CE2, 0x1CE8, I::Extend),
    (0x1CED, 0x1CED, I::Extend), (0x1CF4, 0x1CF4, I::Extend), (0x1CF8, 0x1CF9, I::Extend),
    (0x1DC0, 0x1DFF, I::Extend), (0x200D, 0x200D, I::Extend), (0x20D0, 0x20F0, I::Extend),
    (0x2CEF, 0x2CF1, I::Extend), (0x2D7F, 0x2D7F, I::Extend), (0x2DE0, 0x2DFF, I::Extend),
    (0x302A, 0x302F, I::Extend), (0x3099, 0x309A, I::Extend), (0xA66F, 0xA672, I::Extend),
    (0xA674, 0xA67D, I::Extend), (0xA69E, 0xA69F, I::Extend), (0xA6F0, 0xA6F1, I::Extend),
    (0xA802, 0xA802, I::Extend), (0xA806, 0xA806, I::Extend), (0xA80B, 0xA80B, I::Extend),
    (0xA825, 0xA826, I::Extend), (0xA82C, 0xA82C, I::Extend), (0xA8C4, 0xA8C5, I::Extend),
    (0xA8E0, 0xA8F1, I::Extend), (0xA8FF, 0xA8FF, I::Extend), (0xA926, 0xA92D, I::Extend),
    (0xA947, 0xA951, I::Extend), (0xA953, 0xA953, I::Extend), (0xA980, 0xA982, I::Extend),
    (0xA989, 0xA98B, I::Consonant), (0xA98F, 0xA9B2, I::Consonant), (0xA9B3, 0xA9B3, I::Extend),
    (0xA9B6, 0xA9B9, I::Extend), (0xA9BC, 0xA9BD, I::Extend), (0xA9C0, 0xA9C0, I::Linker),
    (0xA9E0, 0xA9E4, I::Consonant), (0xA9E5, 0xA9E5, I::Extend), (0xA9E7, 0xA9EF, I::Consonant),
    (0xA9FA, 0xA9FE, I::Consonant), (0xAA29, 0xAA2E, I::Extend), (0xAA31, 0xAA32, I::Extend),
    (0xAA35, 0xAA36, I::Extend), (0xAA43, 0xAA43, I::Extend), (0xAA4C, 0xAA4C, I::Extend),
    (0xAA60, 0xAA6F, I::Consonant), (0xAA71, 0xAA73, I::Consonant), (0xAA7A, 0xAA7A, I::Consonant),
    (0xAA7C, 0xAA7C, I::Extend), (0xAA7E, 0xAA7F, I::Consonant), (0xAAB0, 0xAAB0, I::Extend),
    (0xAAB2, 0xAAB4, I::Extend), (0xAAB7, 0xAAB8, I::Extend), (0xAABE, 0xAABF, I::Extend),
    (0xAAC1, 0xAAC1, I::Extend), (0xAAE0, 0xAAEA, I::Consonant), (0xAAEC, 0xAAED, I::Extend),
    (0xAAF6, 0xAAF6, I::Linker), (0xABC0, 0xABDA, I::Consonant), (0xABE5, 0xABE5, I::Extend),
    (0xABE8, 0xABE8, I::Extend), (0xABED, 0xABED, I::Extend), (0xFB1E, 0xFB1E, I::Extend),
    (0xFE00, 0xFE0F, I::Extend), (0xFE20, 0xFE2F, I::Extend), (0xFF9E, 0xFF9F, I::Extend),
    (0x101FD, 0x101FD, I::Extend), (0x102E0, 0x102E0, I::Extend), (0x10376, 0x1037A, I::Extend),
    (0x10A00, 0x10A00, I::Consonant), (0x10A01, 0x10A03, I::Extend), (0x10A05, 0x10A06, I::Extend),
    (0x10A0C, 0x10A0F, I::Extend), (0x10A10, 0x10A13, I::Consonant), (0x10A15, 0x10A17, I::Consonant),
    (0x10A19, 0x10A35, I::Consonant), (0x10A38, 0x10A3A, I::Extend), (0x10A3F, 0x10A3F, I::Linker),
    (0x10AE5, 0x10AE6, I::Extend), (0x10D24, 0x10D27, I::Extend), (0x10D69, 0x10D6D, I::Extend),
    (0x10EAB, 0x10EAC, I::Extend), (0x10EFA, 0x10EFF, I::Extend), (0x10F46, 0x10F50, I::Extend),
    (0x10F82, 0x10F85, I::Extend), (0x11001, 0x11001, I::Extend), (0x11038, 0x11046, I::Extend),
    (0x11070, 0x11070, I::Extend), (0x11073, 0x11074, I::Extend), (0x1107F, 0x11081, I::Extend),
    (0x110B3, 0x110B6, I::Extend), (0x110B9, 0x110BA, I::Extend), (0x110C2, 0x110C2, I::Extend),
    (0x11100, 0x11102, I::Extend), (0x11103, 0x11126, I::Consonant), (0x11127, 0x1112B, I::Extend),
    (0x1112D, 0x11132, I::Extend), (0x11133, 0x11133, I::Linker), (0x11134, 0x11134, I::Extend),
    (0x11144, 0x11144, I::Consonant), (0x11147, 0x11147, I::Consonant), (0x11173, 0x11173, I::Extend),
    (0x11180, 0x11181, I::Extend), (0x111B6, 0x111BE, I::Extend), (0x111C0, 0x111C0, I::Extend),
    (0x111C9, 0x111CC, I::Extend), (0x111CF, 0x111CF, I::Extend), (0x1122F, 0x11231, I::Extend),
    (0x11234, 0x11237, I::Extend), (0x1123E, 0x1123E, I::Extend), (0x11241, 0x11241, I::Extend),
    (0x112DF, 0x112DF, I::Extend), (0x112E3, 0x112EA, I::Extend), (0x11300, 0x11301, I::Extend),
    (0x1133B, 0x1133C, I::Extend), (0x1133E, 0x1133E, I::Extend), (0x11340, 0x11340, I::Extend),
    (0x1134D, 0x1134D, I::Extend), (0x11357, 0x11357, I::Extend), (0x11366, 0x1136C, I::Extend),
    (0x11370, 0x11374, I::Extend), (0x11380, 0x11389, I::Consonant), (0x1138B, 0x1138B, I::Consonant),
    (0x1138E, 0x1138E, I::Consonant), (0x11390, 0x113B5, I::Consonant), (0x113B8, 0x113B8, I::Extend),
    (0x113BB, 0x113C0, I::Extend), (0x113C2, 0x113C2, I::Extend), (0x113C5, 0x113C5, I::Extend),
    (0x113C7, 0x113C9, I::Extend), (0x113CE, 0x113CF, I::Extend), (0x113D0, 0x113D0, I::Linker),
    (0x113D2, 0x113D2, I::Extend), (0x113E1, 0x113E2, I::Extend), (0x11438, 0x1143F, I::Extend),
    (0x11442, 0x11444, I::Extend), (0x11446, 0x11446, I::Extend), (0x1145E, 0x1145E, I::Extend),
    (0x114B0, 0x114B0, I::Extend), (0x114B3, 0x114B8, I::Extend), (0x114BA, 0x114BA, I::Extend),
    (0x114BD, 0x114BD, I::Extend), (0x114BF, 0x114C0, I::Extend), (0x114C2, 0x114C3, I::Extend),
    (0x115AF, 0x115AF, I::Extend), (0x115B2, 0x115B5, I::Extend), (0x115BC, 0x115BD, I::Extend),
    (0x115BF, 0x115C0, I::Extend), (0x115DC, 0x115DD, I::Extend), (0x11633, 0x1163A, I::Extend),
    (0x1163D, 0x1163D, I::Extend), (0x1163F, 0x11640, I::Extend), (0x116AB, 0x116AB, I::Extend),
    (0x116AD, 0x116AD, I::Extend), (0x116B0, 0x116B7, I::Extend), (0x1171D, 0x1171D, I::Extend),
    (0x1171F, 0x1171F, I::Extend), (0x11722, 0x11725, I::Extend), (0x11727, 0x1172B, I::Extend),
    (0x1182F, 0x11837, I::Extend), (0x11839, 0x1183A, I::Extend), (0x11900, 0x11906, I::Consonant),
    (0x11909, 0x11909, I::Consonant), (0x1190C, 0x11913, I::Consonant), (0x11915, 0x11916, I::Consonant),
    (0x11918, 0x1192F, I::Consonant), (0x11930, 0x11930, I::Extend), (0x1193B, 0x1193D, I::Extend),
    (0x1193E, 0x1193E, I::Linker), (0x11943, 0x11943, I::Extend), (0x119D4, 0x119D7, I::Extend),
    (0x119DA, 0x119DB, I::Extend), (0x119E0, 0x119E0, I::Extend), (0x11A00, 0x11A00, I::Consonant),
    (0x11A01, 0x11A0A, I::Extend), (0x11A0B, 0x11A32, I::Consonant), (0x11A33, 0x11A38, I::Extend),
    (0x11A3B, 0x11A3E, I::Extend), (0x11A47, 0x11A47, I::Linker), (0x11A50, 0x11A50, I::Consonant),
    (0x11A51, 0x11A56, I::Extend), (0x11A59, 0x11A5B, I::Extend), (0x11A5C, 0x11A83, I::Consonant),
    (0x11A8A, 0x11A96, I::Extend), (0x11A98, 0x11A98, I::Extend), (0x11A99, 0x11A99, I::Linker),
    (0x11B60, 0x11B60, I::Extend), (0x11B62, 0x11B64, I::Extend), (0x11B66, 0x11B66, I::Extend),
    (0x11C30, 0x11C36, I::Extend), (0x11C38, 0x11C3D, I::Extend), (0x11C3F, 0x11C3F, I::Extend),
    (0x11C92, 0x11CA7, I::Extend), (0x11CAA, 0x11CB0, I::Extend), (0x11CB2, 0x11CB3, I::Extend),
    (0x11CB5, 0x11CB6, I::Extend), (0x11D31, 0x11D36, I::Extend), (0x11D3A, 0x11D3A, I::Extend),
    (0x11D3C, 0x11D3D, I::Extend), (0x11D3F, 0x11D45, I::Extend), (0x11D47, 0x11D47, I::Extend),
    (0x11D90, 0x11D91, I::Extend), (0x11D95, 0x11D95, I::Extend), (0x11D97, 0x11D97, I::Extend),
    (0x11EF3, 0x11EF4, I::Extend), (0x11F00, 0x11F01, I::Extend), (0x11F04, 0x11F10, I::Consonant),
    (0x11F12, 0x11F33, I::Consonant), (0x11F36, 0x11F3A, I::Extend), (0x11F40, 0x11F41, I::Extend),
    (0x11F42, 0x11F42, I::Linker), (0x11F5A, 0x11F5A, I::Extend), (0x13440, 0x13440, I::Extend),
    (0x13447, 0x13455, I::Extend), (0x1611E, 0x16129, I::Extend), (0x1612D, 0x1612F, I::Extend),
    (0x16AF0, 0x16AF4, I::Extend), (0x16B30, 0x16B36, I::Extend), (0x16F4F, 0x16F4F, I::Extend),
    (0x16F8F, 0x16F92, I::Extend), (0x16FE4, 0x16FE4, I::Extend), (0x16FF0, 0x16FF1, I::Extend),
    (0x1BC9D, 0x1BC9E, I::Extend), (0x1CF00, 0x1CF2D, I::Extend), (0x1CF30, 0x1CF46, I::Extend),
    (0x1D165, 0x1D169, I::Extend), (0x1D16D, 0x1D172, I::Extend), (0x1D17B, 0x1D182, I::Extend),
    (0x1D185, 0x1D18B, I::Extend), (0x1D1AA, 0x1D1AD, I::Extend), (0x1D242, 0x1D244, I::Extend),
    (0x1DA00, 0x1DA36, I::Extend), (0x1DA3B, 0x1DA6C, I::Extend), (0x1DA75, 0x1DA75, I::Extend),
    (0x1DA84, 0x1DA84, I::Extend), (0x1DA9B, 0x1DA9F, I::Extend), (0x1DAA1, 0x1DAAF, I::Extend),
    (0x1E000, 0x1E006, I::Extend), (0x1E008, 0x1E018, I::Extend), (0x1E01B, 0x1E021, I::Extend),
    (0x1E023, 0x1E024, I::Extend), (0x1E026, 0x1E02A, I::Extend), (0x1E08F, 0x1E08F, I::Extend),
    (0x1E130, 0x1E136, I::Extend), (0x1E2AE, 0x1E2AE, I::Extend), (0x1E2EC, 0x1E2EF, I::Extend),
    (0x1E4EC, 0x1E4EF, I::Extend), (0x1E5EE, 0x1E5EF, I::Extend), (0x1E6E3, 0x1E6E3, I::Extend),
    (0x1E6E6, 0x1E6E6, I::Extend), (0x1E6EE, 0x1E6EF, I::Extend), (0x1E6F5, 0x1E6F5, I::Extend),
    (0x1E8D0, 0x1E8D6, I::Extend), (0x1E944, 0x1E94A, I::Extend), (0x1F3FB, 0x1F3FF, I::Extend),
    (0xE0020, 0xE007F, I::Extend), (0xE0100, 0xE01EF, I::Extend),
];

/// `Extended_Pictographic` property.
#[rustfmt::skip]
pub(crate) static EXTENDED_PICTOGRAPHIC: &[(u32, u32)] = &[
    (0x00A9, 0x00A9), (0x00AE, 0x00AE), (0x203C, 0x203C), (0x2049, 0x2049), (0x2122, 0x2122),
    (0x2139, 0x2139), (0x2194, 0x2199), (0x21A9, 0x21AA), (0x231A, 0x231B), (0x2328, 0x2328),
    (0x23CF, 0x23CF), (0x23E9, 0x23F3), (0x23F8, 0x23FA), (0x24C2, 0x24C2), (0x25AA, 0x25AB),
    (0x25B6, 0x25B6), (0x25C0, 0x25C0), (0x25FB, 0x25FE), (0x2600, 0x2604), (0x260E, 0x260E),
    (0x2611, 0x2611), (0x2614, 0x2615), (0x2618, 0x2618), (0x261D, 0x261D), (0x2620, 0x2620),
    (0x2622, 0x2623), (0x2626, 0x2626), (0x262A, 0x262A), (0x262E, 0x262F), (0x2638, 0x263A),
    (0x2640, 0x2640), (0x2642, 0x2642), (0x2648, 0x2653), (0x265F, 0x2660), (0x2663, 0x2663),
    (0x2665, 0x2666), (0x2668, 0x2668), (0x267B, 0x267B), (0x267E, 0x267F), (0x2692, 0x2697),
    (0x2699, 0x2699), (0x269B, 0x269C), (0x26A0, 0x26A1), (0x26A7, 0x26A7), (0x26AA, 0x26AB),
    (0x26B0, 0x26B1), (0x26BD, 0x26BE), (0x26C4, 0x26C5), (0x26C8, 0x26C8), (0x26CE, 0x26CF),
    (0x26D1, 0x26D1), (0x26D3, 0x26D4), (0x26E9, 0x26EA), (0x26F0, 0x26F5), (0x26F7, 0x26FA),
    (0x26FD, 0x26FD), (0x2702, 0x2702), (0x2705, 0x2705), (0x2708, 0x270D), (0x270F, 0x270F),
    (0x2712, 0x2712), (0x2714, 0x2714), (0x2716, 0x2716), (0x271D, 0x271D), (0x2721, 0x2721),
    (0x2728, 0x2728), (0x2733, 0x2734), (0x2744, 0x2744), (0x2747, 0x2747), (0x274C, 0x274C),
    (0x274E, 0x274E), (0x2753, 0x2755), (0x2757, 0x2757), (0x2763, 0x2764), (0x2795, 0x2797),
    (0x27A1, 0x27A1), (0x27B0, 0x27B0), (0x27BF, 0x27BF), (0x2934, 0x2935), (0x2B05, 0x2B07),
    (0x2B1B, 0x2B1C), (0x2B50, 0x2B50), (0x2B55, 0x2B55), (0x3030, 0x3030), (0x303D, 0x303D),
    (0x3297, 0x3297), (0x3299, 0x3299), (0x1F004, 0x1F004), (0x1F02C, 0x1F02F), (0x1F094, 0x1F09F),
    (0x1F0AF, 0x1F0B0), (0x1F0C0, 0x1F0C0), (0x1F0CF, 0x1F0D0), (0x1F0F6, 0x1F0FF), (0x1F170, 0x1F171),
    (0x1F17E, 0x1F17F), (0x1F18E, 0x1F18E), (0x1F191, 0x1F19A), (0x1F1AE, 0x1F1E5), (0x1F201, 0x1F20F),
    (0x1F21A, 0x1F21A), (0x1F22F, 0x1F22F), (0x1F232, 0x1F23A), (0x1F23C, 0x1F23F), (0x1F249, 0x1F25F),
    (0x1F266, 0x1F321), (0x1F324, 0x1F393), (0x1F396, 0x1F397), (0x1F399, 0x1F39B), (0x1F39E, 0x1F3F0),
    (0x1F3F3, 0x1F3F5), (0x1F3F7, 0x1F3FA), (0x1F400, 0x1F4FD), (0x1F4FF, 0x1F53D), (0x1F549, 0x1F54E),
    (0x1F550, 0x1F567), (0x1F56F, 0x1F570), (0x1F573, 0x1F57A), (0x1F587, 0x1F587), (0x1F58A, 0x1F58D),
    (0x1F590, 0x1F590), (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A5), (0x1F5A8, 0x1F5A8), (0x1F5B1, 0x1F5B2),
    (0x1F5BC, 0x1F5BC), (0x1F5C2, 0x1F5C4), (0x1F5D1, 0x1F5D3), (0x1F5DC, 0x1F5DE), (0x1F5E1, 0x1F5E1),
    (0x1F5E3, 0x1F5E3), (0x1F5E8, 0x1F5E8), (0x1F5EF, 0x1F5EF), (0x1F5F3, 0x1F5F3), (0x1F5FA, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CB, 0x1F6D2), (0x1F6D5, 0x1F6E5), (0x1F6E9, 0x1F6E9), (0x1F6EB, 0x1F6F0),
    (0x1F6F3, 0x1F6FF), (0x1F7DA, 0x1F7FF), (0x1F80C, 0x1F80F), (0x1F848, 0x1F84F), (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8AF), (0x1F8BC, 0x1F8BF), (0x1F8C2, 0x1F8CF), (0x1F8D9, 0x1F8FF),
    (0x1F90C, 0x1F93A), (0x1F93C, 0x1F945), (0x1F947, 0x1F9FF), (0x1FA58, 0x1FA5F), (0x1FA6E, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// Unassigned code points that are `Extended_Pictographic`.
#[rustfmt::skip]
pub(crate) static EXTENDED_PICTOGRAPHIC_UNASSIGNED: &[(u32, u32)] = &[
    (0x1F02C, 0x1F02F), (0x1F094, 0x1F09F), (0x1F0AF, 0x1F0B0), (0x1F0C0, 0x1F0C0), (0x1F0D0, 0x1F0D0),
    (0x1F0F6, 0x1F0FF), (0x1F1AE, 0x1F1E5), (0x1F203, 0x1F20F), (0x1F23C, 0x1F23F), (0x1F249, 0x1F24F),
    (0x1F252, 0x1F25F), (0x1F266, 0x1F2FF), (0x1F6D9, 0x1F6DB), (0x1F6ED, 0x1F6EF), (0x1F6FD, 0x1F6FF),
    (0x1F7DA, 0x1F7DF), (0x1F7EC, 0x1F7EF), (0x1F7F1, 0x1F7FF), (0x1F80C, 0x1F80F), (0x1F848, 0x1F84F),
    (0x1F85A, 0x1F85F), (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8AF), (0x1F8BC, 0x1F8BF), (0x1F8C2, 0x1F8CF),
    (0x1F8D9, 0x1F8FF), (0x1FA58, 0x1FA5F), (0x1FA6E, 0x1FA6F), (0x1FA7D, 0x1FA7F), (0x1FA8B, 0x1FA8D),
    (0x1FAC7, 0x1FAC7), (0x1FAC9, 0x1FACC), (0x1FADD, 0x1FADE), (0x1FAEB, 0x1FAEE), (0x1FAF9, 0x1FAFF),
    (0x1FC00, 0x1FFFD),
];

/// `East_Asian_Width` of F, W or H.
#[rustfmt::skip]
pub(crate) static EAST_ASIAN_WIDE: &[(u32, u32)] = &[
    (0x0378, 0x0379), (0x0380, 0x0383), (0x038B, 0x038B), (0x038D, 0x038D), (0x03A2, 0x03A2),
    (0x0530, 0x0530), (0x0557, 0x0558), (0x058B, 0x058C), (0x0590, 0x0590), (0x05C8, 0x05CF),
    (0x05EB, 0x05EE), (0x05F5, 0x05FF), (0x070E, 0x070E), (0x074B, 0x074C), (0x07B2, 0x07BF),
    (0x07FB, 0x07FC), (0x082E, 0x082F), (0x083F, 0x083F), (0x085C, 0x085D), (0x085F, 0x085F),
    (0x086B, 0x086F), (0x0892, 0x0896), (0x0984, 0x0984), (0x098D, 0x098E), (0x0991, 0x0992),
    (0x09A9, 0x09A9), (0x09B1, 0x09B1), (0x09B3, 0x09B5), (0x09BA, 0x09BB), (0x09C5, 0x09C6),
    (0x09C9, 0x09CA), (0x09CF, 0x09D6), (0x09D8, 0x09DB), (0x09DE, 0x09DE), (0x09E4, 0x09E5),
    (0x09FF, 0x0A00), (0x0A04, 0x0A04), (0x0A0B, 0x0A0E), (0x0A11, 0x0A12), (0x0A29, 0x0A29),
    (0x0A31, 0x0A31), (0x0A34, 0x0A34), (0x0A37, 0x0A37), (0x0A3A, 0x0A3B), (0x0A3D, 0x0A3D),
    (0x0A43, 0x0A46), (0x0A49, 0x0A4A), (0x0A4E, 0x0A50), (0x0A52, 0x0A58), (0x0A5D, 0x0A5D),
    (0x0A5F, 0x0A65), (0x0A77, 0x0A80), (0x0A84, 0x0A84), (0x0A8E, 0x0A8E), (0x0A92, 0x0A92),
    (0x0AA9, 0x0AA9), (0x0AB1, 0x0AB1), (0x0AB4, 0x0AB4), (0x0ABA, 0x0ABB), (0x0AC6, 0x0AC6),
    (0x0ACA, 0x0ACA), (0x0ACE, 0x0ACF), (0x0AD1, 0x0ADF), (0x0AE4, 0x0AE5), (0x0AF2, 0x0AF8),
    (0x0B00, 0x0B00), (0x0B04, 0x0B04), (0x0B0D, 0x0B0E), (0x0B11, 0x0B12), (0x0B29, 0x0B29),
    (0x0B31, 0x0B31), (0x0B34, 0x0B34), (0x0B3A, 0x0B3B), (0x0B45, 0x0B46), (0x0B49, 0x0B4A),
    (0x0B4E, 0x0B54), (0x0B58, 0x0B5B), (0x0B5E, 0x0B5E), (0x0B64, 0x0B65), (0x0B78, 0x0B81),
    (0x0B84, 0x0B84), (0x0B8B, 0x0B8D), (0x0B91, 0x0B91), (0x0B96, 0x0B98), (0x0B9B, 0x0B9B),
    (0x0B9D, 0x0B9D), (0x0BA0, 0x0BA2), (0x0BA5, 0x0BA7), (0x0BAB, 0x0BAD), (0x0BBA, 0x0BBD),
    (0x0BC3, 0x0BC5), (0x0BC9, 0x0BC9), (0x0BCE, 0x0BCF), (0x0BD1, 0x0BD6), (0x0BD8, 0x0BE5),
    (0x0BFB, 0x0BFF), (0x0C0D, 0x0C0D), (0x0C11, 0x0C11), (0x0C29, 0x0C29), (0x0C3A, 0x0C3B),
    (0x0C45, 0x0C45), (0x0C49, 0x0C49), (0x0C4E, 0x0C54), (0x0C57, 0x0C57), (0x0C5B, 0x0C5B),
    (0x0C5E, 0x0C5F), (0x0C64, 0x0C65), (0x0C70, 0x0C76), (0x0C8D, 0x0C8D), (0x0C91, 0x0C91),
    (0x0CA9, 0x0CA9), (0x0CB4, 0x0CB4), (0x0CBA, 0x0CBB), (0x0CC5, 0x0CC5), (0x0CC9, 0x0CC9),
    (0x0CCE, 0x0CD4), (0x0CD7, 0x0CDB), (0x0CDF, 0x0CDF), (0x0CE4, 0x0CE5), (0x0CF0, 0x0CF0),
    (0x0CF4, 0x0CFF), (0x0D0D, 0x0D0D), (0x0D11, 0x0D11), (0x0D45, 0x0D45), (0x0D49, 0x0D49),
    (0x0D50, 0x0D53), (0x0D64, 0x0D65), (0x0D80, 0x0D80), (0x0D84, 0x0D84), (0x0D97, 0x0D99),
    (0x0DB2, 0x0DB2), (0x0DBC, 0x0DBC), (0x0DBE, 0x0DBF), (0x0DC7, 0x0DC9), (0x0DCB, 0x0DCE),
    (0x0DD5, 0x0DD5), (0x0DD7, 0x0DD7), (0x0DE0, 0x0DE5), (0x0DF0, 0x0DF1), (0x0DF5, 0x0E00),
    (0x0E3B, 0x0E3E), (0x0E5C, 0x0E80), (0x0E83, 0x0E83), (0x0E85, 0x0E85), (0x0E8B, 0x0E8B),
    (0x0EA4, 0x0EA4), (0x0EA6, 0x0EA6), (0x0EBE, 0x0EBF), (0x0EC5, 0x0EC5), (0x0EC7, 0x0EC7),
    (0x0ECF, 0x0ECF), (0x0EDA, 0x0EDB), (0x0EE0, 0x0EFF), (0x0F48, 0x0F48), (0x0F6D, 0x0F70),
    (0x0F98, 0x0F98), (0x0FBD, 0x0FBD), (0x0FCD, 0x0FCD), (0x0FDB, 0x0FFF), (0x10C6, 0x10C6),
    (0x10C8, 0x10CC), (0x10CE, 0x10CF), (0x1100, 0x115F), (0x1249, 0x1249), (0x124E, 0x124F),
    (0x1257, 0x1257), (0x1259, 0x1259), (0x125E, 0x125F), (0x1289, 0x1289), (0x128E, 0x128F),
    (0x12B1, 0x12B1), (0x12B6, 0x12B7), (0x12BF, 0x12BF), (0x12C1, 0x12C1), (0x12C6, 0x12C7),
    (0x12D7, 0x12D7), (0x1311, 0x1311), (0x1316, 0x1317), (0x135B, 0x135C), (0x137D, 0x137F),
    (0x139A, 0x139F), (0x13F6, 0x13F7), (0x13FE, 0x13FF), (0x169D, 0x169F), (0x16F9, 0x16FF),
    (0x1716, 0x171E), (0x1737, 0x173F), (0x1754, 0x175F), (0x176D, 0x176D), (0x1771, 0x1771),
    (0x1774, 0x177F), (0x17DE, 0x17DF), (0x17EA, 0x17EF), (0x17FA, 0x17FF), (0x181A, 0x181F),
    (0x1879, 0x187F), (0x18AB, 0x18AF), (0x18F6, 0x18FF), (0x191F, 0x191F), (0x192C, 0x192F),
    (0x193C, 0x193F), (0x1941, 0x1943), (0x196E, 0x196F), (0x1975, 0x197F), (0x19AC, 0x19AF),
    (0x19CA, 0x19CF), (0x19DB, 0x19DD), (0x1A1C, 0x1A1D), (0x1A5F, 0x1A5F), (0x1A7D, 0x1A7E),
    (0x1A8A, 0x1A8F), (0x1A9A, 0x1A9F), (0x1AAE, 0x1AAF), (0x1ADE, 0x1ADF), (0x1AEC, 0x1AFF),
    (0x1B4D, 0x1B4D), (0x1BF4, 0x1BFB), (0x1C38, 0x1C3A), (0x1C4A, 0x1C4C), (0x1C8B, 0x1C8F),
    (0x1CBB, 0x1CBC), (0x1CC8, 0x1CCF), (0x1CFB, 0x1CFF), (0x1F16, 0x1F17), (0x1F1E, 0x1F1F),
    (0x1F46, 0x1F47), (0x1F4E, 0x1F4F), (0x1F58, 0x1F58), (0x1F5A, 0x1F5A), (0x1F5C, 0x1F5C),
    (0x1F5E, 0x1F5E), (0x1F7E, 0x1F7F), (0x1FB5, 0x1FB5), (0x1FC5, 0x1FC5), (0x1FD4, 0x1FD5),
    (0x1FDC, 0x1FDC), (0x1FF0, 0x1FF1), (0x1FF5, 0x1FF5), (0x1FFF, 0x1FFF), (0x2065, 0x2065),
    (0x2072, 0x2073), (0x208F, 0x208F), (0x209D, 0x209F), (0x20A9, 0x20A9), (0x20C2, 0x20CF),
    (0x20F1, 0x20FF), (0x218C, 0x218F), (0x231A, 0x231B), (0x2329, 0x232A), (0x23E9, 0x23EC),
    (0x23F0, 0x23F0), (0x23F3, 0x23F3), (0x242A, 0x243F), (0x244B, 0x245F), (0x25FD, 0x25FE),
    (0x2614, 0x2615), (0x2630, 0x2637), (0x2648, 0x2653), (0x267F, 0x267F), (0x268A, 0x268F),
    (0x2693, 0x2693), (0x26A1, 0x26A1), (0x26AA, 0x26AB), (0x26BD, 0x26BE), (0x26C4, 0x26C5),
    (0x26CE, 0x26CE), (0x26D4, 0x26D4), (0x26EA, 0x26EA), (0x26F2, 0x26F3), (0x26F5, 0x26F5),
    (0x26FA, 0x26FA), (0x26FD, 0x26FD), (0x2705, 0x2705), (0x270A, 0x270B), (0x2728, 0x2728),
    (0x274C, 0x274C), (0x274E, 0x274E), (0x2753, 0x2755), (0x2757, 0x2757), (0x2795, 0x2797),
    (0x27B0, 0x27B0), (0x27BF, 0x27BF), (0x2B1B, 0x2B1C), (0x2B50, 0x2B50), (0x2B55, 0x2B55),
    (0x2B74, 0x2B75), (0x2CF4, 0x2CF8), (0x2D26, 0x2D26), (0x2D28, 0x2D2C), (0x2D2E, 0x2D2F),
    (0x2D68, 0x2D6E), (0x2D71, 0x2D7E), (0x2D97, 0x2D9F), (0x2DA7, 0x2DA7), (0x2DAF, 0x2DAF),
    (0x2DB7, 0x2DB7), (0x2DBF, 0x2DBF), (0x2DC7, 0x2DC7), (0x2DCF, 0x2DCF), (0x2DD7, 0x2DD7),
    (0x2DDF, 0x2DDF), (0x2E5E, 0x303E), (0x3040, 0x3247), (0x3250, 0xA4CF), (0xA62C, 0xA63F),
    (0xA6F8, 0xA6FF), (0xA7DD, 0xA7F0), (0xA82D, 0xA82F), (0xA83A, 0xA83F), (0xA878, 0xA87F),
    (0xA8C6, 0xA8CD), (0xA8DA, 0xA8DF), (0xA954, 0xA95E), (0xA960, 0xA97F), (0xA9CE, 0xA9CE),
    (0xA9DA, 0xA9DD), (0xA9FF, 0xA9FF), (0xAA37, 0xAA3F), (0xAA4E, 0xAA4F), (0xAA5A, 0xAA5B),
    (0xAAC3, 0xAADA), (0xAAF7, 0xAB00), (0xAB07, 0xAB08), (0xAB0F, 0xAB10), (0xAB17, 0xAB1F),
    (0xAB27, 0xAB27), (0xAB2F, 0xAB2F), (0xAB6C, 0xAB6F), (0xABEE, 0xABEF), (0xABFA, 0xD7AF),
    (0xD7C7, 0xD7CA), (0xD7FC, 0xD7FF), (0xF900, 0xFAFF), (0xFB07, 0xFB12), (0xFB18, 0xFB1C),
    (0xFB37, 0xFB37), (0xFB3D, 0xFB3D), (0xFB3F, 0xFB3F), (0xFB42, 0xFB42), (0xFB45, 0xFB45),
    (0xFDD0, 0xFDEF), (0xFE10, 0xFE1F), (0xFE30, 0xFE6F), (0xFE75, 0xFE75), (0xFEFD, 0xFEFE),
    (0xFF00, 0xFFF8), (0xFFFE, 0xFFFF), (0x1000C, 0x1000C), (0x10027, 0x10027), (0x1003B, 0x1003B),
    (0x1003E, 0x1003E), (0x1004E, 0x1004F), (0x1005E, 0x1007F), (0x100FB, 0x100FF), (0x10103, 0x10106),
    (0x10134, 0x10136), (0x1018F, 0x1018F), (0x1019D, 0x1019F), (0x101A1, 0x101CF), (0x101FE, 0x1027F),
    (0x1029D, 0x1029F), (0x102D1, 0x102DF), (0x102FC, 0x102FF), (0x10324, 0x1032C), (0x1034B, 0x1034F),
    (0x1037B, 0x1037F), (0x1039E, 0x1039E), (0x103C4, 0x103C7), (0x103D6, 0x103FF), (0x1049E, 0x1049F),
    (0x104AA, 0x104AF), (0x104D4, 0x104D7), (0x104FC, 0x104FF), (0x10528, 0x1052F), (0x10564, 0x1056E),
    (0x1057B, 0x1057B), (0x1058B, 0x1058B), (0x10593, 0x10593), (0x10596, 0x10596), (0x105A2, 0x105A2),
    (0x105B2, 0x105B2), (0x105BA, 0x105BA), (0x105BD, 0x105BF), (0x105F4, 0x105FF), (0x10737, 0x1073F),
    (0x10756, 0x1075F), (0x10768, 0x1077F), (0x10786, 0x10786), (0x107B1, 0x107B1), (0x107BB, 0x107FF),
    (0x10806, 0x10807), (0x10809, 0x10809), (0x10836, 0x10836), (0x10839, 0x1083B), (0x1083D, 0x1083E),
    (0x10856, 0x10856), (0x1089F, 0x108A6), (0x108B0, 0x108DF), (0x108F3, 0x108F3), (0x108F6, 0x108FA),
    (0x1091C, 0x1091E), (0x1093A, 0x1093E), (0x1095A, 0x1097F), (0x109B8, 0x109BB), (0x109D0, 0x109D1),
    (0x10A04, 0x10A04), (0x10A07, 0x10A0B), (0x10A14, 0x10A14), (0x10A18, 0x10A18), (0x10A36, 0x10A37),
    (0x10A3B, 0x10A3E), (0x10A49, 0x10A4F), (0x10A59, 0x10A5F), (0x10AA0, 0x10ABF), (0x10AE7, 0x10AEA),
    (0x10AF7, 0x10AFF), (0x10B36, 0x10B38), (0x10B56, 0x10B57), (0x10B73, 0x10B77), (0x10B92, 0x10B98),
    (0x10B9D, 0x10BA8), (0x10BB0, 0x10BFF), (0x10C49, 0x10C7F), (0x10CB3, 0x10CBF), (0x10CF3, 0x10CF9),
    (0x10D28, 0x10D2F), (0x10D3A, 0x10D3F), (0x10D66, 0x10D68), (0x10D86, 0x10D8D), (0x10D90, 0x10E5F),
    (0x10E7F, 0x10E7F), (0x10EAA, 0x10EAA), (0x10EAE, 0x10EAF), (0x10EB2, 0x10EC1), (0x10EC8, 0x10ECF),
    (0x10ED9, 0x10EF9), (0x10F28, 0x10F2F), (0x10F5A, 0x10F6F), (0x10F8A, 0x10FAF), (0x10FCC, 0x10FDF),
    (0x10FF7, 0x10FFF), (0x1104E, 0x11051), (0x11076, 0x1107E), (0x110C3, 0x110CC), (0x110CE, 0x110CF),
    (0x110E9, 0x110EF), (0x110FA, 0x110FF), (0x11135, 0x11135), (0x11148, 0x1114F), (0x11177, 0x1117F),
    (0x111E0, 0x111E0), (0x111F5, 0x111FF), (0x11212, 0x11212), (0x11242, 0x1127F), (0x11287, 0x11287),
    (0x11289, 0x11289), (0x1128E, 0x1128E), (0x1129E, 0x1129E), (0x112AA, 0x112AF), (0x112EB, 0x112EF),
    (0x112FA, 0x112FF), (0x11304, 0x11304), (0x1130D, 0x1130E), (0x11311, 0x11312), (0x11329, 0x11329),
    (0x11331, 0x11331), (0x11334, 0x11334), (0x1133A, 0x1133A), (0x11345, 0x11346), (0x11349, 0x1134A),
    (0x1134E, 0x1134F), (0x11351, 0x11356), (0x11358, 0x1135C), (0x11364, 0x11365), (0x1136D, 0x1136F),
    (0x11375, 0x1137F), (0x1138A, 0x1138A), (0x1138C, 0x1138D), (0x1138F, 0x1138F), (0x113B6, 0x113B6),
    (0x113C1, 0x113C1), (0x113C3, 0x113C4), (0x113C6, 0x113C6), (0x113CB, 0x113CB), (0x113D6, 0x113D6),
    (0x113D9, 0x113E0), (0x113E3, 0x113FF), (0x1145C, 0x1145C), (0x11462, 0x1147F), (0x114C8, 0x114CF),
    (0x114DA, 0x1157F), (0x115B6, 0x115B7), (0x115DE, 0x115FF), (0x11645, 0x1164F), (0x1165A, 0x1165F),
    (0x1166D, 0x1167F), (0x116BA, 0x116BF), (0x116CA, 0x116CF), (0x116E4, 0x116FF), (0x1171B, 0x1171C),
    (0x1172C, 0x1172F), (0x11747, 0x117FF), (0x1183C, 0x1189F), (0x118F3, 0x118FE), (0x11907, 0x11908),
    (0x1190A, 0x1190B), (0x11914, 0x11914), (0x11917, 0x11917), (0x11936, 0x11936), (0x11939, 0x1193A),
    (0x11947, 0x1194F), (0x1195A, 0x1199F), (0x119A8, 0x119A9), (0x119D8, 0x119D9), (0x119E5, 0x119FF),
    (0x11A48, 0x11A4F), (0x11AA3, 0x11AAF), (0x11AF9, 0x11AFF), (0x11B0A, 0x11B5F), (0x11B68, 0x11BBF),
    (0x11BE2, 0x11BEF), (0x11BFA, 0x11BFF), (0x11C09, 0x11C09), (0x11C37, 0x11C37), (0x11C46, 0x11C4F),
    (0x11C6D, 0x11C6F), (0x11C90, 0x11C91), (0x11CA8, 0x11CA8), (0x11CB7, 0x11CFF), (0x11D07, 0x11D07),
    (0x11D0A, 0x11D0A), (0x11D37, 0x11D39), (0x11D3B, 0x11D3B), (0x11D3E, 0x11D3E), (0x11D48, 0x11D4F),
    (0x11D5A, 0x11D5F), (0x11D66, 0x11D66), (0x11D69, 0x11D69), (0x11D8F, 0x11D8F), (0x11D92, 0x11D92),
    (0x11D99, 0x11D9F), (0x11DAA, 0x11DAF), (0x11DDC, 0x11DDF), (0x11DEA, 0x11EDF), (0x11EF9, 0x11EFF),
    (0x11F11, 0x11F11), (0x11F3B, 0x11F3D), (0x11F5B, 0x11FAF), (0x11FB1, 0x11FBF), (0x11FF2, 0x11FFE),
    (0x1239A, 0x123FF), (0x1246F, 0x1246F), (0x12475, 0x1247F), (0x12544, 0x12F8F), (0x12FF3, 0x12FFF),
    (0x13456, 0x1345F), (0x143FB, 0x143FF), (0x14647, 0x160FF), (0x1613A, 0x167FF), (0x16A39, 0x16A3F),
    (0x16A5F, 0x16A5F), (0x16A6A, 0x16A6D), (0x16ABF, 0x16ABF), (0x16ACA, 0x16ACF), (0x16AEE, 0x16AEF),
    (0x16AF6, 0x16AFF), (0x16B46, 0x16B4F), (0x16B5A, 0x16B5A), (0x16B62, 0x16B62), (0x16B78, 0x16B7C),
    (0x16B90, 0x16D3F), (0x16D7A, 0x16E3F), (0x16E9B, 0x16E9F), (0x16EB9, 0x16EBA), (0x16ED4, 0x16EFF),
    (0x16F4B, 0x16F4E), (0x16F88, 0x16F8E), (0x16FA0, 0x1BBFF), (0x1BC6B, 0x1BC6F), (0x1BC7D, 0x1BC7F),
    (0x1BC89, 0x1BC8F), (0x1BC9A, 0x1BC9B), (0x1BCA4, 0x1CBFF), (0x1CCFD, 0x1CCFF), (0x1CEB4, 0x1CEB9),
    (0x1CED1, 0x1CEDF), (0x1CEF1, 0x1CEFF), (0x1CF2E, 0x1CF2F), (0x1CF47, 0x1CF4F), (0x1CFC4, 0x1CFFF),
    (0x1D0F6, 0x1D0FF), (0x1D127, 0x1D128), (0x1D1EB, 0x1D1FF), (0x1D246, 0x1D2BF), (0x1D2D4, 0x1D2DF),
    (0x1D2F4, 0x1D376), (0x1D379, 0x1D3FF), (0x1D455, 0x1D455), (0x1D49D, 0x1D49D), (0x1D4A0, 0x1D4A1),
    (0x1D4A3, 0x1D4A4), (0x1D4A7, 0x1D4A8), (0x1D4AD, 0x1D4AD), (0x1D4BA, 0x1D4BA), (0x1D4BC, 0x1D4BC),
    (0x1D4C4, 0x1D4C4), (0x1D506, 0x1D506), (0x1D50B, 0x1D50C), (0x1D515, 0x1D515), (0x1D51D, 0x1D51D),
    (0x1D53A, 0x1D53A), (0x1D53F, 0x1D53F), (0x1D545, 0x1D545), (0x1D547, 0x1D549), (0x1D551, 0x1D551),
    (0x1D6A6, 0x1D6A7), (0x1D7CC, 0x1D7CD), (0x1DA8C, 0x1DA9A), (0x1DAA0, 0x1DAA0), (0x1DAB0, 0x1DEFF),
    (0x1DF1F, 0x1DF24), (0x1DF2B, 0x1DFFF), (0x1E007, 0x1E007), (0x1E019, 0x1E01A), (0x1E022, 0x1E022),
    (0x1E025, 0x1E025), (0x1E02B, 0x1E02F), (0x1E06E, 0x1E08E), (0x1E090, 0x1E0FF), (0x1E12D, 0x1E12F),
    (0x1E13E, 0x1E13F), (0x1E14A, 0x1E14D), (0x1E150, 0x1E28F), (0x1E2AF, 0x1E2BF), (0x1E2FA, 0x1E2FE),
    (0x1E300, 0x1E4CF), (0x1E4FA, 0x1E5CF), (0x1E5FB, 0x1E5FE), (0x1E600, 0x1E6BF), (0x1E6DF, 0x1E6DF),
    (0x1E6F6, 0x1E6FD), (0x1E700, 0x1E7DF), (0x1E7E7, 0x1E7E7), (0x1E7EC, 0x1E7EC), (0x1E7EF, 0x1E7EF),
    (0x1E7FF, 0x1E7FF), (0x1E8C5, 0x1E8C6), (0x1E8D7, 0x1E8FF), (0x1E94C, 0x1E94F), (0x1E95A, 0x1E95D),
    (0x1E960, 0x1EC70), (0x1ECB5, 0x1ED00), (0x1ED3E, 0x1EDFF), (0x1EE04, 0x1EE04), (0x1EE20, 0x1EE20),
    (0x1EE23, 0x1EE23), (0x1EE25, 0x1EE26), (0x1EE28, 0x1EE28), (0x1EE33, 0x1EE33), (0x1EE38, 0x1EE38),
    (0x1EE3A, 0x1EE3A), (0x1EE3C, 0x1EE41), (0x1EE43, 0x1EE46), (0x1EE48, 0x1EE48), (0x1EE4A, 0x1EE4A),
    (0x1EE4C, 0x1EE4C), (0x1EE50, 0x1EE50), (0x1EE53, 0x1EE53), (0x1EE55, 0x1EE56), (0x1EE58, 0x1EE58),
    (0x1EE5A, 0x1EE5A), (0x1EE5C, 0x1EE5C), (0x1EE5E, 0x1EE5E), (0x1EE60, 0x1EE60), (0x1EE63, 0x1EE63),
    (0x1EE65, 0x1EE66), (0x1EE6B, 0x1EE6B), (0x1EE73, 0x1EE73), (0x1EE78, 0x1EE78), (0x1EE7D, 0x1EE7D),
    (0x1EE7F, 0x1EE7F), (0x1EE8A, 0x1EE8A), (0x1EE9C, 0x1EEA0), (0x1EEA4, 0x1EEA4), (0x1EEAA, 0x1EEAA),
    (0x1EEBC, 0x1EEEF), (0x1EEF2, 0x1EFFF), (0x1F004, 0x1F004), (0x1F02C, 0x1F02F), (0x1F094, 0x1F09F),
    (0x1F0AF, 0x1F0B0), (0x1F0C0, 0x1F0C0), (0x1F0CF, 0x1F0D0), (0x1F0F6, 0x1F0FF), (0x1F18E, 0x1F18E),
    (0x1F191, 0x1F19A), (0x1F1AE, 0x1F1E5), (0x1F200, 0x1F320), (0x1F32D, 0x1F335), (0x1F337, 0x1F37C),
    (0x1F37E, 0x1F393), (0x1F3A0, 0x1F3CA), (0x1F3CF, 0x1F3D3), (0x1F3E0, 0x1F3F0), (0x1F3F4, 0x1F3F4),
    (0x1F3F8, 0x1F43E), (0x1F440, 0x1F440), (0x1F442, 0x1F4FC), (0x1F4FF, 0x1F53D), (0x1F54B, 0x1F54E),
    (0x1F550, 0x1F567), (0x1F57A, 0x1F57A), (0x1F595, 0x1F596), (0x1F5A4, 0x1F5A4), (0x1F5FB, 0x1F64F),
    (0x1F680, 0x1F6C5), (0x1F6CC, 0x1F6CC), (0x1F6D0, 0x1F6D2), (0x1F6D5, 0x1F6DF), (0x1F6EB, 0x1F6EF),
    (0x1F6F4, 0x1F6FF), (0x1F7DA, 0x1F7FF), (0x1F80C, 0x1F80F), (0x1F848, 0x1F84F), (0x1F85A, 0x1F85F),
    (0x1F888, 0x1F88F), (0x1F8AE, 0x1F8AF), (0x1F8BC, 0x1F8BF), (0x1F8C2, 0x1F8CF), (0x1F8D9, 0x1F8FF),
    (0x1F90C, 0x1F93A), (0x1F93C, 0x1F945), (0x1F947, 0x1F9FF), (0x1FA58, 0x1FA5F), (0x1FA6E, 0x1FAFF),
    (0x1FB93, 0x1FB93), (0x1FBFB, 0xE0000), (0xE0002, 0xE001F), (0xE0080, 0xE00FF), (0xE01F0, 0xEFFFF),
    (0xFFFFE, 0xFFFFF), (0x10FFFE, 0x10FFFF),
];

/// `East_Asian_Width` of A.
#[rustfmt::skip]
pub(crate) static EAST_ASIAN_AMBIGUOUS: &[(u32, u32)] = &[
    (0x00A1, 0x00A1), (0x00A4, 0x00A4), (0x00A7, 0x00A8), (0x00AA, 0x00AA), (0x00AD, 0x00AE),
    (0x00B0, 0x00B4), (0x00B6, 0x00BA), (0x00BC, 0x00BF), (0x00C6, 0x00C6), (0x00D0, 0x00D0),
    (0x00D7, 0x00D8), (0x00DE, 0x00E1), (0x00E6, 0x00E6), (0x00E8, 0x00EA), (0x00EC, 0x00ED),
    (0x00F0, 0x00F0), (0x00F2, 0x00F3), (0x00F7, 0x00FA), (0x00FC, 0x00FC), (0x00FE, 0x00FE),
    (0x0101, 0x0101), (0x0111, 0x0111), (0x0113, 0x0113), (0x011B, 0x011B), (0x0126, 0x0127),
    (0x012B, 0x012B), (0x0131, 0x0133), (0x0138, 0x0138), (0x013F, 0x0142), (0x0144, 0x0144),
    (0x0148, 0x014B), (0x014D, 0x014D), (0x0152, 0x0153), (0x0166, 0x0167), (0x016B, 0x016B),
    (0x01CE, 0x01CE), (0x01D0, 0x01D0), (0x01D2, 0x01D2), (0x01D4, 0x01D4), (0x01D6, 0x01D6),
    (0x01D8, 0x01D8), (0x01DA, 0x01DA), (0x01DC, 0x01DC), (0x0251, 0x0251), (0x0261, 0x0261),
    (0x02C4, 0x02C4), (0x02C7, 0x02C7), (0x02C9, 0x02CB), (0x02CD, 0x02CD), (0x02D0, 0x02D0),
    (0x02D8, 0x02DB), (0x02DD, 0x02DD), (0x02DF, 0x02DF), (0x0300, 0x036F), (0x0391, 0x03A1),
    (0x03A3, 0x03A9), (0x03B1, 0x03C1), (0x03C3, 0x03C9), (0x0401, 0x0401), (0x0410, 0x044F),
    (0x0451, 0x0451), (0x2010, 0x2010), (0x2013, 0x2016), (0x2018, 0x2019), (0x201C, 0x201D),
    (0x2020, 0x2022), (0x2024, 0x2027), (0x2030, 0x2030), (0x2032, 0x2033), (0x2035, 0x2035),
    (0x203B, 0x203B), (0x203E, 0x203E), (0x2074, 0x2074), (0x207F, 0x207F), (0x2081, 0x2084),
    (0x20AC, 0x20AC), (0x2103, 0x2103), (0x2105, 0x2105), (0x2109, 0x2109), (0x2113, 0x2113),
    (0x2116, 0x2116), (0x2121, 0x2122), (0x2126, 0x2126), (0x212B, 0x212B), (0x2153, 0x2154),
    (0x215B, 0x215E), (0x2160, 0x216B), (0x2170, 0x2179), (0x2189, 0x2189), (0x2190, 0x2199),
    (0x21B8, 0x21B9), (0x21D2, 0x21D2), (0x21D4, 0x21D4), (0x21E7, 0x21E7), (0x2200, 0x2200),
    (0x2202, 0x2203), (0x2207, 0x2208), (0x220B, 0x220B), (0x220F, 0x220F), (0x2211, 0x2211),
    (0x2215, 0x2215), (0x221A, 0x221A), (0x221D, 0x2220), (0x2223, 0x2223), (0x2225, 0x2225),
    (0x2227, 0x222C), (0x222E, 0x222E), (0x2234, 0x2237), (0x223C, 0x223D), (0x2248, 0x2248),
    (0x224C, 0x224C), (0x2252, 0x2252), (0x2260, 0x2261), (0x2264, 0x2267), (0x226A, 0x226B),
    (0x226E, 0x226F), (0x2282, 0x2283), (0x2286, 0x2287), (0x2295, 0x2295), (0x2299, 0x2299),
    (0x22A5, 0x22A5), (0x22BF, 0x22BF), (0x2312, 0x2312), (0x2460, 0x24E9), (0x24EB, 0x254B),
    (0x2550, 0x2573), (0x2580, 0x258F), (0x2592, 0x2595), (0x25A0, 0x25A1), (0x25A3, 0x25A9),
    (0x25B2, 0x25B3), (0x25B6, 0x25B7), (0x25BC, 0x25BD), (0x25C0, 0x25C1), (0x25C6, 0x25C8),
    (0x25CB, 0x25CB), (0x25CE, 0x25D1), (0x25E2, 0x25E5), (0x25EF, 0x25EF), (0x2605, 0x2606),
    (0x2609, 0x2609), (0x260E, 0x260F), (0x261C, 0x261C), (0x261E, 0x261E), (0x2640, 0x2640),
    (0x2642, 0x2642), (0x2660, 0x2661), (0x2663, 0x2665), (0x2667, 0x266A), (0x266C, 0x266D),
    (0x266F, 0x266F), (0x269E, 0x269F), (0x26BF, 0x26BF), (0x26C6, 0x26CD), (0x26CF, 0x26D3),
    (0x26D5, 0x26E1), (0x26E3, 0x26E3), (0x26E8, 0x26E9), (0x26EB, 0x26F1), (0x26F4, 0x26F4),
    (0x26F6, 0x26F9), (0x26FB, 0x26FC), (0x26FE, 0x26FF), (0x273D, 0x273D), (0x2776, 0x277F),
    (0x2B56, 0x2B59), (0x3248, 0x324F), (0xE000, 0xF8FF), (0xFE00, 0xFE0F), (0xFFFD, 0xFFFD),
    (0x1F100, 0x1F10A), (0x1F110, 0x1F12D), (0x1F130, 0x1F169), (0x1F170, 0x1F18D), (0x1F18F, 0x1F190),
    (0x1F19B, 0x1F1AC), (0xE0100, 0xE01EF), (0xF0000, 0xFFFFD), (0x100000, 0x10FFFD),
];

/// `Line_Break=QU` with `General_Category=Pi`.
#[rustfmt::skip]
pub(crate) static INITIAL_PUNCTUATION_QUOTES: &[(u32, u32)] = &[
    (0x00AB, 0x00AB), (0x2018, 0x2018), (0x201B, 0x201C), (0x201F, 0x201F), (0x2039, 0x2039),
    (0x2E02, 0x2E02), (0x2E04, 0x2E04), (0x2E09, 0x2E09), (0x2E0C, 0x2E0C), (0x2E1C, 0x2E1C),
    (0x2E20, 0x2E20),
];

/// `Line_Break=QU` with `General_Category=Pf`.
#[rustfmt::skip]
pub(crate) static FINAL_PUNCTUATION_QUOTES: &[(u32, u32)] = &[
    (0x00BB, 0x00BB), (0x2019, 0x2019), (0x201D, 0x201D), (0x203A, 0x203A), (0x2E03, 0x2E03),
    (0x2E05, 0x2E05), (0x2E0A, 0x2E0A), (0x2E0D, 0x2E0D), (0x2E1D, 0x2E1D), (0x2E21, 0x2E21),
];

/// `Line_Break=SA` with `General_Category` of Mn or Mc.
#[rustfmt::skip]
pub(crate) static SOUTHEAST_ASIAN_MARKS: &[(u32, u32)] = &[
    (0x0E31, 0x0E31), (0x0E34, 0x0E3A), (0x0E47, 0x0E4E), (0x0EB1, 0x0EB1), (0x0EB4, 0x0EBC),
    (0x0EC8, 0x0ECE), (0x102B, 0x103E), (0x1056, 0x1059), (0x105E, 0x1060), (0x1062, 0x1064),
    (0x1067, 0x106D), (0x1071, 0x1074), (0x1082, 0x108D), (0x108F, 0x108F), (0x109A, 0x109D),
    (0x17B4, 0x17D3), (0x17DD, 0x17DD), (0x1A55, 0x1A5E), (0x1A60, 0x1A7C), (0xA9E5, 0xA9E5),
    (0xAA7B, 0xAA7D), (0xAAB0, 0xAAB0), (0xAAB2, 0xAAB4), (0xAAB7, 0xAAB8), (0xAABE, 0xAABF),
    (0xAAC1, 0xAAC1), (0x1171D, 0x1172B),
];
