//! Node text storage on top of `ropey`.
//!
//! Offsets are character (Unicode scalar) indices. Embedded objects are
//! stored in-line as [`OBJECT_SLOT`] so that every offset in the buffer maps
//! to exactly one rope character.

use std::ops::Range;

use ropey::{Rope, RopeSlice};

/// Placeholder character occupying an embedded object's slot.
pub const OBJECT_SLOT: char = '\u{FFFC}';

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextRope {
    rope: Rope,
}

impl TextRope {
    /// Number of offsets, slots included.
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Out-of-range requests yield an empty slice.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> RopeSlice<'_> {
        match self.rope.get_slice(range) {
            Some(slice) => slice,
            None => self.rope.slice(..0),
        }
    }

    /// Insert at `offset`. Offsets past the end are ignored.
    pub fn insert(&mut self, offset: usize, text: &str) {
        if offset <= self.len_chars() {
            self.rope.insert(offset, text);
        }
    }

    pub fn insert_slot(&mut self, offset: usize) {
        if offset <= self.len_chars() {
            self.rope.insert_char(offset, OBJECT_SLOT);
        }
    }

    /// Remove `range`, clamped to the rope.
    pub fn remove(&mut self, range: Range<usize>) {
        let len = self.len_chars();
        let (start, end) = (range.start.min(len), range.end.min(len));
        if start < end {
            self.rope.remove(start..end);
        }
    }

    pub fn clear(&mut self) {
        self.rope = Rope::new();
    }

    /// Full contents, slots included.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    /// Text of `range` with object slots removed.
    #[must_use]
    pub fn text_without_slots(&self, range: Range<usize>) -> String {
        self.slice(range).chars().filter(|&c| c != OBJECT_SLOT).collect()
    }

    /// Character offset of a UTF-8 byte position in [`Self::contents`].
    #[must_use]
    pub fn byte_to_char(&self, byte: usize) -> usize {
        self.rope.byte_to_char(byte.min(self.rope.len_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rope(text: &str) -> TextRope {
        let mut rope = TextRope::default();
        rope.insert(0, text);
        rope
    }

    #[test]
    fn test_edits_clamp_to_length() {
        let mut rope = rope("note!");
        rope.insert(4, "book");
        assert_eq!(rope.contents(), "notebook!");
        rope.insert(50, "dropped");
        rope.remove(4..50);
        assert_eq!(rope.contents(), "note");
    }

    #[test]
    fn test_slots() {
        let mut rope = rope("abcd");
        rope.insert_slot(2);
        assert_eq!(rope.len_chars(), 5);
        assert_eq!(rope.slice(2..3).char(0), OBJECT_SLOT);
        assert_eq!(rope.text_without_slots(0..5), "abcd");
        assert_eq!(rope.slice(4..9).len_chars(), 0);
        rope.clear();
        assert!(rope.is_empty());
    }

    #[test]
    fn test_byte_offsets_map_to_chars() {
        let rope = rope("né\u{FFFC}x");
        assert_eq!(rope.byte_to_char(3), 2);
        assert_eq!(rope.byte_to_char(6), 3);
        assert_eq!(rope.byte_to_char(99), 4);
    }
}
