//! Rich-text content buffer: text, styled spans and embedded objects.
//!
//! Offsets are character indices into the buffer. Every embedded object
//! occupies one slot, so a buffer holding `"ab"`, an image, then `"c"` has
//! length 4 and the image at offset 2.
//!
//! Spans tile every non-slot position. Two spans that touch never carry equal
//! attribute sets; spans on either side of an object slot may.
//!
//! # Examples
//!
//! ```
//! use notetree::model::{AttrKey, AttributeSet, ContentBuffer};
//!
//! let mut buf = ContentBuffer::new();
//! buf.insert_text(0, "Hello world", &AttributeSet::new()).unwrap();
//! buf.apply_attribute(0, 5, AttrKey::Weight, Some("heavy")).unwrap();
//! assert_eq!(buf.spans().len(), 2);
//! assert_eq!(buf.attributes_at(1).unwrap().get(AttrKey::Weight), Some("heavy"));
//! ```

use std::ops::Range;

use crate::error::{Error, Result};
use crate::model::attrs::{AttrKey, AttributeSet, Justification};
use crate::model::object::{EmbeddedObject, ObjectKind};
use crate::model::rope::{OBJECT_SLOT, TextRope};
use crate::unicode::word_boundaries;

/// A contiguous run of text sharing one attribute set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub attrs: AttributeSet,
}

impl Span {
    #[must_use]
    pub fn new(start: usize, end: usize, attrs: AttributeSet) -> Self {
        Self { start, end, attrs }
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// One element of [`ContentBuffer::query_runs_and_objects`].
#[derive(Clone, Debug, PartialEq)]
pub enum Piece<'a> {
    /// Styled text clipped to the queried range.
    Run {
        range: Range<usize>,
        text: String,
        attrs: &'a AttributeSet,
    },
    /// An embedded object inside the queried range.
    Object(&'a EmbeddedObject),
}

/// The content of one node.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentBuffer {
    rope: TextRope,
    spans: Vec<Span>,
    objects: Vec<EmbeddedObject>,
}

impl ContentBuffer {
    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding unstyled text.
    pub fn from_text(text: &str) -> Result<Self> {
        let mut buf = Self::new();
        buf.insert_text(0, text, &AttributeSet::new())?;
        Ok(buf)
    }

    /// Length in character slots, objects included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.is_empty()
    }

    /// Text without object slots.
    #[must_use]
    pub fn text(&self) -> String {
        self.rope.text_without_slots(0..self.len())
    }

    /// Text of `range` without object slots.
    #[must_use]
    pub fn slice_text(&self, range: Range<usize>) -> String {
        self.rope.text_without_slots(range)
    }

    /// Styled spans in offset order.
    #[must_use]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Embedded objects in offset order.
    #[must_use]
    pub fn objects(&self) -> &[EmbeddedObject] {
        &self.objects
    }

    /// The object whose slot is at `offset`.
    #[must_use]
    pub fn object_at(&self, offset: usize) -> Option<&EmbeddedObject> {
        self.objects
            .binary_search_by_key(&offset, |obj| obj.offset)
            .ok()
            .map(|idx| &self.objects[idx])
    }

    /// Attributes of the text at `offset`, `None` on an object slot or past the end.
    #[must_use]
    pub fn attributes_at(&self, offset: usize) -> Option<&AttributeSet> {
        let idx = self.spans.partition_point(|span| span.end <= offset);
        self.spans
            .get(idx)
            .filter(|span| span.start <= offset)
            .map(|span| &span.attrs)
    }

    /// Remove all content.
    pub fn clear(&mut self) {
        self.rope.clear();
        self.spans.clear();
        self.objects.clear();
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::InvalidOffset { offset, len });
        }
        Ok(())
    }

    fn check_range(&self, start: usize, end: usize) -> Result<()> {
        self.check_offset(end)?;
        if start > end {
            return Err(Error::InvalidOffset {
                offset: start,
                len: self.len(),
            });
        }
        Ok(())
    }

    /// Open a gap of `count` slots at `offset`, splitting the span under it.
    fn open_gap(&mut self, offset: usize, count: usize) {
        let mut tail = None;
        for span in &mut self.spans {
            if span.start >= offset {
                span.start += count;
                span.end += count;
            } else if span.end > offset {
                tail = Some(Span::new(offset + count, span.end + count, span.attrs.clone()));
                span.end = offset;
            }
        }
        if let Some(tail) = tail {
            let idx = self.spans.partition_point(|span| span.start < tail.start);
            self.spans.insert(idx, tail);
        }
        for obj in &mut self.objects {
            if obj.offset >= offset {
                obj.offset += count;
            }
        }
    }

    /// Merge touching spans with equal attributes.
    fn coalesce(&mut self) {
        let mut merged: Vec<Span> = Vec::with_capacity(self.spans.len());
        for span in self.spans.drain(..) {
            if span.is_empty() {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.end == span.start && last.attrs == span.attrs => {
                    last.end = span.end;
                }
                _ => merged.push(span),
            }
        }
        self.spans = merged;
    }

    /// Insert `text` at `offset` with `attrs`.
    ///
    /// Objects at or after `offset` move right by the inserted length.
    pub fn insert_text(&mut self, offset: usize, text: &str, attrs: &AttributeSet) -> Result<()> {
        self.check_offset(offset)?;
        if let Some(pos) = text.chars().position(|c| c == OBJECT_SLOT) {
            return Err(Error::ReservedCharacter {
                offset: offset + pos,
            });
        }
        let count = text.chars().count();
        if count == 0 {
            return Ok(());
        }
        self.rope.insert(offset, text);
        self.open_gap(offset, count);
        let idx = self.spans.partition_point(|span| span.start < offset);
        self.spans
            .insert(idx, Span::new(offset, offset + count, attrs.clone()));
        self.coalesce();
        Ok(())
    }

    /// Remove `[start, end)`, dropping objects anchored inside it.
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<()> {
        self.check_range(start, end)?;
        let count = end - start;
        if count == 0 {
            return Ok(());
        }
        self.rope.remove(start..end);
        let mut kept = Vec::with_capacity(self.spans.len() + 1);
        for span in self.spans.drain(..) {
            if span.start < start {
                kept.push(Span::new(span.start, span.end.min(start), span.attrs.clone()));
            }
            if span.end > end {
                kept.push(Span::new(span.start.max(end) - count, span.end - count, span.attrs));
            }
        }
        self.spans = kept;
        self.objects
            .retain(|obj| obj.offset < start || obj.offset >= end);
        for obj in &mut self.objects {
            if obj.offset >= end {
                obj.offset -= count;
            }
        }
        self.coalesce();
        Ok(())
    }

    /// Set (or with `None`, clear) `key` on all text inside `[start, end)`.
    ///
    /// With [`AttrKey::Justification`] the objects inside the range are
    /// re-justified too.
    pub fn apply_attribute(
        &mut self,
        start: usize,
        end: usize,
        key: AttrKey,
        value: Option<&str>,
    ) -> Result<()> {
        self.check_range(start, end)?;
        let value = value.filter(|v| !v.is_empty());
        let justification = if key == AttrKey::Justification {
            Some(value.map_or(Ok(Justification::Left), str::parse)?)
        } else {
            None
        };
        if start == end {
            return Ok(());
        }

        let mut split = Vec::with_capacity(self.spans.len() + 2);
        for span in self.spans.drain(..) {
            if span.end <= start || span.start >= end {
                split.push(span);
                continue;
            }
            if span.start < start {
                split.push(Span::new(span.start, start, span.attrs.clone()));
            }
            let mut attrs = span.attrs.clone();
            attrs.set(key, value.map(str::to_string));
            split.push(Span::new(span.start.max(start), span.end.min(end), attrs));
            if span.end > end {
                split.push(Span::new(end, span.end, span.attrs));
            }
        }
        self.spans = split;

        if let Some(justification) = justification {
            for obj in &mut self.objects {
                if (start..end).contains(&obj.offset) {
                    obj.justification = justification;
                }
            }
        }
        self.coalesce();
        Ok(())
    }

    /// Clear `key` on all text inside `[start, end)`.
    pub fn remove_attribute(&mut self, start: usize, end: usize, key: AttrKey) -> Result<()> {
        self.apply_attribute(start, end, key, None)
    }

    /// Insert `object` into a new slot at `offset`.
    ///
    /// The object's own offset is overwritten with `offset`.
    pub fn insert_embedded_object(&mut self, offset: usize, mut object: EmbeddedObject) -> Result<()> {
        self.check_offset(offset)?;
        self.rope.insert_slot(offset);
        self.open_gap(offset, 1);
        object.offset = offset;
        let idx = self.objects.partition_point(|obj| obj.offset < offset);
        self.objects.insert(idx, object);
        Ok(())
    }

    /// Runs and objects intersecting `range`, left to right.
    #[must_use]
    pub fn query_runs_and_objects(&self, range: Range<usize>) -> Vec<Piece<'_>> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let mut pieces = Vec::new();
        let mut spans = self
            .spans
            .iter()
            .filter(|span| span.end > start && span.start < end)
            .peekable();
        let mut objects = self
            .objects
            .iter()
            .filter(|obj| obj.offset >= start && obj.offset < end)
            .peekable();
        loop {
            let take_span = match (spans.peek(), objects.peek()) {
                (Some(span), Some(obj)) => span.start < obj.offset,
                (Some(_), None) => true,
                (None, Some(_)) => false,
                (None, None) => break,
            };
            if take_span {
                if let Some(span) = spans.next() {
                    let clipped = span.start.max(start)..span.end.min(end);
                    pieces.push(Piece::Run {
                        text: self.rope.slice(clipped.clone()).to_string(),
                        range: clipped,
                        attrs: &span.attrs,
                    });
                }
            } else if let Some(obj) = objects.next() {
                pieces.push(Piece::Object(obj));
            }
        }
        pieces
    }

    /// Text export: tables become tab-separated lines, code boxes their
    /// text; images and anchors are dropped.
    #[must_use]
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for piece in self.query_runs_and_objects(0..self.len()) {
            match piece {
                Piece::Run { text, .. } => out.push_str(&text),
                Piece::Object(obj) => out.push_str(&obj.plain_text()),
            }
        }
        out
    }

    /// Word segments as character ranges, flagged when they hold a word character.
    fn word_segments(&self) -> Vec<(Range<usize>, bool)> {
        let text = self.rope.contents();
        let mut segments = Vec::new();
        let mut prev: Option<usize> = None;
        for byte in word_boundaries(&text) {
            if let Some(prev_byte) = prev {
                let is_word = text[prev_byte..byte]
                    .chars()
                    .any(|c| c.is_alphanumeric() || c == '_');
                let range = self.rope.byte_to_char(prev_byte)..self.rope.byte_to_char(byte);
                segments.push((range, is_word));
            }
            prev = Some(byte);
        }
        segments
    }

    /// Offset of the end of the next word after `offset`, or the buffer end.
    #[must_use]
    pub fn next_word_boundary(&self, offset: usize) -> usize {
        self.word_segments()
            .into_iter()
            .find(|(range, is_word)| *is_word && range.end > offset)
            .map_or(self.len(), |(range, _)| range.end)
    }

    /// Offset of the start of the word before `offset`, or 0.
    #[must_use]
    pub fn prev_word_boundary(&self, offset: usize) -> usize {
        self.word_segments()
            .into_iter()
            .rev()
            .find(|(range, is_word)| *is_word && range.start < offset)
            .map_or(0, |(range, _)| range.start)
    }

    /// The word segment containing `offset`.
    #[must_use]
    pub fn word_range_at(&self, offset: usize) -> Option<Range<usize>> {
        self.word_segments()
            .into_iter()
            .map(|(range, _)| range)
            .find(|range| range.contains(&offset))
    }

    /// Object kinds present, for relational presence flags.
    pub(crate) fn object_kinds(&self) -> impl Iterator<Item = &ObjectKind> {
        self.objects.iter().map(|obj| &obj.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::object::{Image, Table};

    fn bold() -> AttributeSet {
        AttributeSet::new().with(AttrKey::Weight, "heavy")
    }

    fn image() -> EmbeddedObject {
        EmbeddedObject::new(0, ObjectKind::Image(Image::png(vec![1, 2, 3])))
    }

    fn assert_tiled(buf: &ContentBuffer) {
        let mut covered = vec![false; buf.len()];
        for pair in buf.spans().windows(2) {
            assert!(pair[0].end <= pair[1].start);
            if pair[0].end == pair[1].start {
                assert_ne!(pair[0].attrs, pair[1].attrs);
            }
        }
        for span in buf.spans() {
            assert!(!span.is_empty());
            for slot in &mut covered[span.range()] {
                *slot = true;
            }
        }
        for obj in buf.objects() {
            assert!(!covered[obj.offset], "span covers object slot");
            covered[obj.offset] = true;
        }
        assert!(covered.iter().all(|&c| c));
    }

    #[test]
    fn test_insert_coalesces_equal_attributes() {
        let mut buf = ContentBuffer::new();
        buf.insert_text(0, "Hello", &AttributeSet::new()).unwrap();
        buf.insert_text(5, " world", &AttributeSet::new()).unwrap();
        assert_eq!(buf.spans().len(), 1);
        buf.insert_text(5, "!!", &bold()).unwrap();
        assert_eq!(buf.text(), "Hello!! world");
        assert_eq!(buf.spans().len(), 3);
        assert_tiled(&buf);
    }

    #[test]
    fn test_insert_rejects_placeholder() {
        let mut buf = ContentBuffer::from_text("abc").unwrap();
        let err = buf
            .insert_text(1, "x\u{FFFC}", &AttributeSet::new())
            .unwrap_err();
        assert!(matches!(err, Error::ReservedCharacter { offset: 2 }));
        assert!(matches!(
            buf.insert_text(9, "x", &AttributeSet::new()),
            Err(Error::InvalidOffset { offset: 9, len: 3 })
        ));
    }

    #[test]
    fn test_object_shift_on_insert() {
        let mut buf = ContentBuffer::from_text("0123456789").unwrap();
        buf.insert_embedded_object(5, image()).unwrap();
        buf.insert_text(0, "AB", &AttributeSet::new()).unwrap();
        assert_eq!(buf.objects().len(), 1);
        assert_eq!(buf.objects()[0].offset, 7);
        assert_eq!(buf.text(), "AB0123456789");
        assert_eq!(buf.spans().len(), 2);
        assert_tiled(&buf);
    }

    #[test]
    fn test_delete_drops_objects_inside() {
        let mut buf = ContentBuffer::from_text("abcdef").unwrap();
        buf.insert_embedded_object(2, image()).unwrap();
        buf.insert_embedded_object(5, image()).unwrap();
        buf.delete_range(1, 4).unwrap();
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.objects().len(), 1);
        assert_eq!(buf.objects()[0].offset, 2);
        assert_tiled(&buf);
    }

    #[test]
    fn test_delete_slot_merges_neighbours() {
        let mut buf = ContentBuffer::from_text("abcd").unwrap();
        buf.insert_embedded_object(2, image()).unwrap();
        assert_eq!(buf.spans().len(), 2);
        buf.delete_range(2, 3).unwrap();
        assert_eq!(buf.spans().len(), 1);
        assert!(buf.objects().is_empty());
    }

    #[test]
    fn test_apply_attribute_splits_and_coalesces() {
        let mut buf = ContentBuffer::from_text("Hello world").unwrap();
        buf.apply_attribute(2, 8, AttrKey::Style, Some("italic")).unwrap();
        assert_eq!(buf.spans().len(), 3);
        buf.remove_attribute(0, 11, AttrKey::Style).unwrap();
        assert_eq!(buf.spans().len(), 1);
        assert!(buf.spans()[0].attrs.is_empty());
        assert_tiled(&buf);
    }

    #[test]
    fn test_justification_reaches_objects() {
        let mut buf = ContentBuffer::from_text("ab").unwrap();
        buf.insert_embedded_object(1, image()).unwrap();
        buf.apply_attribute(0, 3, AttrKey::Justification, Some("center"))
            .unwrap();
        assert_eq!(buf.objects()[0].justification, Justification::Center);
        assert!(buf
            .apply_attribute(0, 3, AttrKey::Justification, Some("sideways"))
            .is_err());
    }

    #[test]
    fn test_query_interleaves_objects() {
        let mut buf = ContentBuffer::from_text("abcd").unwrap();
        buf.insert_embedded_object(2, image()).unwrap();
        buf.apply_attribute(0, 1, AttrKey::Weight, Some("heavy")).unwrap();
        let pieces = buf.query_runs_and_objects(0..buf.len());
        assert_eq!(pieces.len(), 4);
        assert!(matches!(&pieces[0], Piece::Run { text, .. } if text == "a"));
        assert!(matches!(&pieces[1], Piece::Run { text, .. } if text == "b"));
        assert!(matches!(pieces[2], Piece::Object(obj) if obj.offset == 2));
        assert!(matches!(&pieces[3], Piece::Run { text, .. } if text == "cd"));

        let clipped = buf.query_runs_and_objects(1..4);
        assert!(matches!(&clipped[0], Piece::Run { range, .. } if *range == (1..2)));
    }

    #[test]
    fn test_attributes_and_objects_lookup() {
        let mut buf = ContentBuffer::from_text("ab").unwrap();
        buf.insert_embedded_object(1, image()).unwrap();
        assert!(buf.attributes_at(0).is_some());
        assert!(buf.attributes_at(1).is_none());
        assert!(buf.object_at(1).is_some());
        assert!(buf.object_at(0).is_none());
        assert!(buf.attributes_at(3).is_none());
    }

    #[test]
    fn test_plain_text_export() {
        let mut buf = ContentBuffer::from_text("T:\n").unwrap();
        let table = Table::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec!["1".to_string(), "2".to_string()]],
            40,
            400,
        )
        .unwrap();
        buf.insert_embedded_object(3, EmbeddedObject::new(0, ObjectKind::Table(table)))
            .unwrap();
        buf.insert_embedded_object(0, image()).unwrap();
        assert_eq!(buf.to_plain_text(), "T:\na\tb\n1\t2");
    }

    #[test]
    fn test_word_navigation() {
        let buf = ContentBuffer::from_text("Hello, world.").unwrap();
        assert_eq!(buf.next_word_boundary(0), 5);
        assert_eq!(buf.next_word_boundary(5), 12);
        assert_eq!(buf.next_word_boundary(12), 13);
        assert_eq!(buf.prev_word_boundary(13), 7);
        assert_eq!(buf.prev_word_boundary(7), 0);
        assert_eq!(buf.prev_word_boundary(0), 0);
        assert_eq!(buf.word_range_at(8), Some(7..12));
        assert_eq!(buf.word_range_at(5), Some(5..6));
        assert_eq!(buf.word_range_at(13), None);
    }

    #[test]
    fn test_clear() {
        let mut buf = ContentBuffer::from_text("abc").unwrap();
        buf.insert_embedded_object(1, image()).unwrap();
        buf.clear();
        assert!(buf.is_empty());
        assert!(buf.spans().is_empty());
        assert!(buf.objects().is_empty());
    }
}
