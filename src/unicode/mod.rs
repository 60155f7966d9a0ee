//! Unicode text segmentation.
//!
//! Grapheme cluster, word and sentence boundaries follow UAX #29; line break
//! opportunities follow UAX #14. All four share one engine: property lookup,
//! token reduction, a static pairwise table, and numbered context rules.
//!
//! Offsets are code units of the input: UTF-8 bytes for `&str`, UTF-16 units
//! for the `*_utf16` functions.
//!
//! ```
//! use notetree::unicode::{BoundaryKind, boundaries, words};
//!
//! let b: Vec<usize> = boundaries("Hello, world.", BoundaryKind::Word).collect();
//! assert_eq!(b, vec![0, 5, 6, 7, 12, 13]);
//!
//! let w: Vec<&str> = words("can't stop").collect();
//! assert_eq!(w, vec!["can't", " ", "stop"]);
//! ```

mod boundaries;
mod engine;
mod grapheme;
mod line;
mod property;
mod sentence;
mod tables;
mod width;
mod word;
pub mod wrap;

pub use boundaries::{Boundaries, BreakUnits, BreakUnits16, Breakables};
pub use engine::Decision;
pub use property::{
    BoundaryKind, GraphemeClass, IndicConjunct, LineClass, PropertyClass, SentenceClass,
    WordClass, classify, pairwise,
};
pub use width::{WidthMethod, cluster_width, display_width_char_with_method, display_width_with_method};
pub use wrap::{Formatter, TextWrapper, WrapOptions, wrap_text};

use engine::CodePoint;

/// Segmentation options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SegmentOptions {
    /// Line breaking only: treat East Asian ambiguous characters as
    /// ideographic (legacy CJK typography).
    pub legacy: bool,
}

fn compute(points: &[CodePoint], total: usize, kind: BoundaryKind, options: &SegmentOptions) -> Vec<bool> {
    match kind {
        BoundaryKind::Grapheme => grapheme::breakables(points, total),
        BoundaryKind::Word => word::breakables(points, total),
        BoundaryKind::Sentence => sentence::breakables(points, total),
        BoundaryKind::Line => line::breakables(points, total, options.legacy),
    }
}

/// Compute breakable flags for `s`.
#[must_use]
pub fn breakables(s: &str, kind: BoundaryKind) -> Breakables {
    breakables_with(s, kind, &SegmentOptions::default())
}

/// Compute breakable flags for `s` with explicit options.
#[must_use]
pub fn breakables_with(s: &str, kind: BoundaryKind, options: &SegmentOptions) -> Breakables {
    let points = engine::code_points_utf8(s);
    Breakables::from_flags(compute(&points, s.len(), kind, options))
}

/// Compute breakable flags for UTF-16 input.
///
/// Unpaired surrogates are classified individually and never merge with
/// their neighbours except through the ordinary rules for their class.
#[must_use]
pub fn breakables_utf16(units: &[u16], kind: BoundaryKind, options: &SegmentOptions) -> Breakables {
    let points = engine::code_points_utf16(units);
    Breakables::from_flags(compute(&points, units.len(), kind, options))
}

/// Boundary offsets of `s`.
#[must_use]
pub fn boundaries(s: &str, kind: BoundaryKind) -> Boundaries {
    breakables(s, kind).into_boundaries()
}

/// Boundary offsets of UTF-16 input.
#[must_use]
pub fn boundaries_utf16(units: &[u16], kind: BoundaryKind, options: &SegmentOptions) -> Boundaries {
    breakables_utf16(units, kind, options).into_boundaries()
}

/// Substrings of `s` between consecutive boundaries.
#[must_use]
pub fn break_units(s: &str, kind: BoundaryKind) -> BreakUnits<'_> {
    BreakUnits::new(s, boundaries(s, kind))
}

/// UTF-16 slices between consecutive boundaries.
#[must_use]
pub fn break_units_utf16<'a>(
    units: &'a [u16],
    kind: BoundaryKind,
    options: &SegmentOptions,
) -> BreakUnits16<'a> {
    breakables_utf16(units, kind, options).split_utf16(units)
}

/// Grapheme cluster boundaries of `s`.
#[must_use]
pub fn grapheme_cluster_boundaries(s: &str) -> Boundaries {
    boundaries(s, BoundaryKind::Grapheme)
}

/// Grapheme clusters of `s`.
#[must_use]
pub fn grapheme_clusters(s: &str) -> BreakUnits<'_> {
    break_units(s, BoundaryKind::Grapheme)
}

/// Word boundaries of `s`.
#[must_use]
pub fn word_boundaries(s: &str) -> Boundaries {
    boundaries(s, BoundaryKind::Word)
}

/// Words (and the runs between them) of `s`.
#[must_use]
pub fn words(s: &str) -> BreakUnits<'_> {
    break_units(s, BoundaryKind::Word)
}

/// Sentence boundaries of `s`.
#[must_use]
pub fn sentence_boundaries(s: &str) -> Boundaries {
    boundaries(s, BoundaryKind::Sentence)
}

/// Sentences of `s`.
#[must_use]
pub fn sentences(s: &str) -> BreakUnits<'_> {
    break_units(s, BoundaryKind::Sentence)
}

/// Line break opportunities of `s`.
#[must_use]
pub fn line_break_boundaries(s: &str, legacy: bool) -> Boundaries {
    breakables_with(s, BoundaryKind::Line, &SegmentOptions { legacy }).into_boundaries()
}

/// Unbreakable units of `s` for line wrapping.
#[must_use]
pub fn line_break_units(s: &str, legacy: bool) -> BreakUnits<'_> {
    BreakUnits::new(s, line_break_boundaries(s, legacy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_tables_are_indexed_by_discriminant() {
        for (idx, class) in GraphemeClass::ALL.iter().enumerate() {
            assert_eq!(*class as usize, idx);
        }
        for (idx, class) in WordClass::ALL.iter().enumerate() {
            assert_eq!(*class as usize, idx);
        }
        for (idx, class) in SentenceClass::ALL.iter().enumerate() {
            assert_eq!(*class as usize, idx);
        }
        for (idx, class) in LineClass::ALL.iter().enumerate() {
            assert_eq!(*class as usize, idx);
        }
    }

    #[test]
    fn test_single_code_point() {
        for kind in [
            BoundaryKind::Grapheme,
            BoundaryKind::Word,
            BoundaryKind::Sentence,
            BoundaryKind::Line,
        ] {
            assert_eq!(boundaries("中", kind).collect::<Vec<_>>(), vec![0, 3]);
            assert_eq!(boundaries("", kind).count(), 0);
        }
    }

    #[test]
    fn test_utf16_offsets() {
        let units: Vec<u16> = "a😀b".encode_utf16().collect();
        let b: Vec<usize> =
            boundaries_utf16(&units, BoundaryKind::Grapheme, &SegmentOptions::default()).collect();
        assert_eq!(b, vec![0, 1, 3, 4]);
    }

    #[test]
    fn test_utf16_lone_surrogate_is_its_own_cluster() {
        let units = [0x61, 0xD800, 0x0301, 0x62];
        let parts: Vec<&[u16]> =
            break_units_utf16(&units, BoundaryKind::Grapheme, &SegmentOptions::default()).collect();
        // The surrogate is a Control: it neither joins 'a' nor takes the mark.
        assert_eq!(parts, vec![&[0x61][..], &[0xD800][..], &[0x0301][..], &[0x62][..]]);
        let lines: Vec<usize> =
            boundaries_utf16(&units, BoundaryKind::Line, &SegmentOptions::default()).collect();
        assert_eq!(lines.first(), Some(&0));
        assert_eq!(lines.last(), Some(&4));
    }

    #[test]
    fn test_tailoring_hook() {
        // Keep only the start boundary.
        let merged = breakables("a b", BoundaryKind::Word).tailor(|idx, flag| flag && idx == 0);
        assert_eq!(merged.split("a b").collect::<Vec<_>>(), vec!["a b"]);
    }

    #[test]
    fn test_matches_unicode_segmentation_on_samples() {
        use unicode_segmentation::UnicodeSegmentation;
        for s in [
            "Hello, wörld!",
            "🇺🇸🇫🇷🇩",
            "👨\u{200D}👩\u{200D}👧 family",
            "\r\n\r\n",
            "한국어",
            "e\u{0301}\u{0302}x",
        ] {
            let ours: Vec<&str> = grapheme_clusters(s).collect();
            let theirs: Vec<&str> = s.graphemes(true).collect();
            assert_eq!(ours, theirs, "grapheme mismatch for {s:?}");
        }
    }
}
