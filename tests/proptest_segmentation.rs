//! Property-based tests for boundary coverage and determinism.

use notetree::unicode::{
    BoundaryKind, SegmentOptions, boundaries, boundaries_utf16, break_units, grapheme_clusters,
};
use proptest::prelude::*;

const KINDS: [BoundaryKind; 4] = [
    BoundaryKind::Grapheme,
    BoundaryKind::Word,
    BoundaryKind::Sentence,
    BoundaryKind::Line,
];

// ============================================================================
// Strategies
// ============================================================================

/// Generate arbitrary UTF-8 strings (proptest default).
fn utf8_string() -> impl Strategy<Value = String> {
    "\\PC{0,80}"
}

/// Strings dense in the characters the rules care about.
fn tricky_string() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "\r", "\n", "\r\n", " ", "\t", "a", "Z", "9", ".", "?", "'", "\"", "(", ")", ",", "-",
            "\u{200D}", "\u{0301}", "🇺", "🇸", "👍", "🏽", "中", "。", "カ", "ᄀ", "ᅡ", "ᆨ", "ก",
            "\u{00AD}", "\u{00A0}", "%", "$", "/", "e\u{0301}",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn any_string() -> impl Strategy<Value = String> {
    prop_oneof![utf8_string(), tricky_string()]
}

// ============================================================================
// Coverage Properties
// ============================================================================

proptest! {
    /// Boundaries start at 0, end at the length and strictly increase.
    #[test]
    fn boundaries_cover_input(s in any_string()) {
        for kind in KINDS {
            let offsets: Vec<usize> = boundaries(&s, kind).collect();
            if s.is_empty() {
                prop_assert!(offsets.is_empty());
                continue;
            }
            prop_assert_eq!(offsets.first(), Some(&0));
            prop_assert_eq!(offsets.last(), Some(&s.len()));
            prop_assert!(offsets.windows(2).all(|w| w[0] < w[1]), "{:?}: {:?}", kind, offsets);
            prop_assert!(offsets.iter().all(|&o| s.is_char_boundary(o)));
        }
    }

    /// Concatenating the units reproduces the input.
    #[test]
    fn units_are_lossless(s in any_string()) {
        for kind in KINDS {
            let joined: String = break_units(&s, kind).collect();
            prop_assert_eq!(&joined, &s);
            prop_assert!(break_units(&s, kind).all(|unit| !unit.is_empty()));
        }
    }

    /// Segmenting twice gives the same answer, and the iterator restarts.
    #[test]
    fn segmentation_is_deterministic(s in any_string()) {
        for kind in KINDS {
            let first = boundaries(&s, kind);
            let again = first.clone();
            prop_assert_eq!(first.collect::<Vec<_>>(), again.collect::<Vec<_>>());
            prop_assert_eq!(
                boundaries(&s, kind).collect::<Vec<_>>(),
                boundaries(&s, kind).collect::<Vec<_>>()
            );
        }
    }

    /// UTF-16 boundaries map onto the UTF-8 boundaries of the same text.
    #[test]
    fn utf16_agrees_with_utf8(s in any_string()) {
        let units: Vec<u16> = s.encode_utf16().collect();
        for kind in KINDS {
            let utf8: Vec<usize> = boundaries(&s, kind).collect();
            let utf16: Vec<usize> =
                boundaries_utf16(&units, kind, &SegmentOptions::default()).collect();
            let mapped: Vec<usize> = utf8
                .iter()
                .map(|&byte| s[..byte].encode_utf16().count())
                .collect();
            prop_assert_eq!(utf16, mapped);
        }
    }

    /// Every word boundary is also a grapheme boundary (no Prepend
    /// characters in this alphabet).
    #[test]
    fn word_boundaries_are_grapheme_boundaries(s in tricky_string()) {
        let graphemes: Vec<usize> = grapheme_clusters(&s)
            .scan(0, |offset, unit| {
                let start = *offset;
                *offset += unit.len();
                Some(start)
            })
            .chain(std::iter::once(s.len()))
            .collect();
        for offset in boundaries(&s, BoundaryKind::Word) {
            prop_assert!(graphemes.contains(&offset), "word boundary {} splits a cluster", offset);
        }
    }
}
