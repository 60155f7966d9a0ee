//! Fixed-width column measurement for wrapping.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::unicode::property::is_east_asian_ambiguous;

/// Width calculation method for ambiguous-width characters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WidthMethod {
    /// Ambiguous width = 1.
    #[default]
    Narrow,
    /// Ambiguous width = 2 (East Asian typography).
    AmbiguousWide,
}

impl WidthMethod {
    /// Pick the method matching an `ambiguous_as_wide` flag.
    #[must_use]
    pub const fn from_ambiguous_as_wide(wide: bool) -> Self {
        if wide { Self::AmbiguousWide } else { Self::Narrow }
    }
}

/// Get the display width of a string in columns using a specific method.
#[must_use]
pub fn display_width_with_method(s: &str, method: WidthMethod) -> usize {
    match method {
        WidthMethod::Narrow => UnicodeWidthStr::width(s),
        WidthMethod::AmbiguousWide => {
            // `width_cjk` leaves some ambiguous letters (Greek, Cyrillic) narrow.
            let widened = s
                .chars()
                .filter(|&c| narrow_ambiguous(c))
                .count();
            UnicodeWidthStr::width_cjk(s) + widened
        }
    }
}

/// Get the display width of a character in columns using a specific method.
#[must_use]
pub fn display_width_char_with_method(c: char, method: WidthMethod) -> usize {
    match method {
        WidthMethod::Narrow => UnicodeWidthChar::width(c).unwrap_or(0),
        WidthMethod::AmbiguousWide if narrow_ambiguous(c) => 2,
        WidthMethod::AmbiguousWide => UnicodeWidthChar::width_cjk(c).unwrap_or(0),
    }
}

fn narrow_ambiguous(c: char) -> bool {
    is_east_asian_ambiguous(u32::from(c)) && UnicodeWidthChar::width_cjk(c) == Some(1)
}

/// Logical width of a grapheme cluster on fixed-width typography.
///
/// The leading code point decides: wide and fullwidth characters take two
/// columns, everything else (including clusters led by a zero-width mark)
/// takes one.
#[must_use]
pub fn cluster_width(cluster: &str, method: WidthMethod) -> usize {
    match cluster.chars().next() {
        Some(c) if display_width_char_with_method(c, method) >= 2 => 2,
        Some(_) => 1,
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(display_width_with_method("hello", WidthMethod::Narrow), 5);
        assert_eq!(cluster_width("a", WidthMethod::Narrow), 1);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(display_width_with_method("漢字", WidthMethod::Narrow), 4);
        assert_eq!(cluster_width("漢", WidthMethod::Narrow), 2);
    }

    #[test]
    fn test_combining_cluster_is_narrow() {
        assert_eq!(cluster_width("g\u{0308}", WidthMethod::Narrow), 1);
        assert_eq!(cluster_width("\u{0301}", WidthMethod::Narrow), 1);
        assert_eq!(cluster_width("", WidthMethod::Narrow), 0);
    }

    #[test]
    fn test_width_methods() {
        // Greek alpha is East Asian ambiguous.
        assert_eq!(cluster_width("α", WidthMethod::Narrow), 1);
        assert_eq!(cluster_width("α", WidthMethod::AmbiguousWide), 2);
        assert_eq!(
            display_width_char_with_method('①', WidthMethod::from_ambiguous_as_wide(true)),
            2
        );
    }

    #[test]
    fn test_ambiguous_letters_widen_in_strings() {
        assert_eq!(display_width_char_with_method('Ω', WidthMethod::AmbiguousWide), 2);
        assert_eq!(display_width_char_with_method('ж', WidthMethod::AmbiguousWide), 2);
        assert_eq!(display_width_with_method("αβ", WidthMethod::Narrow), 2);
        assert_eq!(display_width_with_method("αβ", WidthMethod::AmbiguousWide), 4);
        assert_eq!(display_width_with_method("a漢α", WidthMethod::AmbiguousWide), 5);
    }
}
