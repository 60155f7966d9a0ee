//! Fuzz target for the segmenters.
//!
//! Every boundary kind must cover the input exactly, for both UTF-8 and
//! UTF-16 (including unpaired surrogates).

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use notetree::unicode::{
    BoundaryKind, SegmentOptions, boundaries, boundaries_utf16, break_units,
};

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    units: Vec<u16>,
    legacy: bool,
}

fuzz_target!(|input: Input| {
    let options = SegmentOptions {
        legacy: input.legacy,
    };
    for kind in [
        BoundaryKind::Grapheme,
        BoundaryKind::Word,
        BoundaryKind::Sentence,
        BoundaryKind::Line,
    ] {
        let joined: String = break_units(&input.text, kind).collect();
        assert_eq!(joined, input.text);
        let offsets: Vec<usize> = boundaries(&input.text, kind).collect();
        assert!(offsets.windows(2).all(|w| w[0] < w[1]));

        let offsets: Vec<usize> = boundaries_utf16(&input.units, kind, &options).collect();
        if !input.units.is_empty() {
            assert_eq!(offsets.first(), Some(&0));
            assert_eq!(offsets.last(), Some(&input.units.len()));
        }
    }
});
