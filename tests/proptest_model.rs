//! Property-based tests for the content buffer and its codecs.
//!
//! Buffers are built from random edit scripts, then checked for span
//! invariants and for lossless XML and relational round trips.

use notetree::codec::{XmlOptions, content_from_xml, content_to_xml};
use notetree::model::{
    AttrKey, AttributeSet, CodeBox, ContentBuffer, Document, EmbeddedObject, Image, ImageSource,
    Node, NodeKind, ObjectKind, Table,
};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

#[derive(Clone, Debug)]
enum Edit {
    Insert { at: f64, text: String },
    Style { from: f64, to: f64, key: AttrKey, value: Option<&'static str> },
    Object { at: f64, kind: ObjectKind },
    Delete { from: f64, to: f64 },
}

/// Text without the object placeholder or carriage returns.
fn text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "a", "b", "Z", "9", " ", "  ", ",", ".", "\n", "\t", "é", "中", "😀", "<", "&", "_",
        ]),
        1..6,
    )
    .prop_map(|parts| parts.concat())
}

fn style() -> impl Strategy<Value = (AttrKey, Option<&'static str>)> {
    prop_oneof![
        prop::sample::select(vec![Some("heavy"), None]).prop_map(|v| (AttrKey::Weight, v)),
        prop::sample::select(vec![Some("#ff0000"), Some("#00ff00"), None])
            .prop_map(|v| (AttrKey::Foreground, v)),
        prop::sample::select(vec![Some("single"), None]).prop_map(|v| (AttrKey::Underline, v)),
        prop::sample::select(vec![Some("h1"), Some("sup"), None]).prop_map(|v| (AttrKey::Scale, v)),
        prop::sample::select(vec![Some("center"), Some("right"), Some("left"), None])
            .prop_map(|v| (AttrKey::Justification, v)),
        prop::sample::select(vec![Some("webs https://example.com/?a=1&b=2"), None])
            .prop_map(|v| (AttrKey::Link, v)),
    ]
}

fn object() -> impl Strategy<Value = ObjectKind> {
    prop_oneof![
        "[a-z]{1,8}".prop_map(ObjectKind::Anchor),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(|data| ObjectKind::Image(Image::png(data))),
        (prop::collection::vec(any::<u8>(), 0..16), 0u32..100_000).prop_map(|(data, t)| {
            ObjectKind::Image(Image {
                source: ImageSource::File {
                    name: "notes.txt".to_string(),
                    data,
                    time: f64::from(t) / 4.0,
                },
                link: Some("webs https://example.com".to_string()),
            })
        }),
        (text(), any::<bool>()).prop_map(|(text, numbers)| {
            ObjectKind::CodeBox(CodeBox {
                text,
                syntax: "rust".to_string(),
                show_line_numbers: numbers,
                ..CodeBox::default()
            })
        }),
        prop::collection::vec(prop::sample::select(vec!["", "x", "a b", "<&>"]), 6).prop_map(
            |cells| {
                let cells: Vec<String> = cells.into_iter().map(str::to_string).collect();
                ObjectKind::Table(
                    Table::new(
                        cells[..3].to_vec(),
                        vec![cells[3..].to_vec()],
                        40,
                        400,
                    )
                    .unwrap(),
                )
            }
        ),
    ]
}

fn edit() -> impl Strategy<Value = Edit> {
    prop_oneof![
        3 => (0.0..=1.0f64, text()).prop_map(|(at, text)| Edit::Insert { at, text }),
        3 => (0.0..=1.0f64, 0.0..=1.0f64, style())
            .prop_map(|(from, to, (key, value))| Edit::Style { from, to, key, value }),
        1 => (0.0..=1.0f64, object()).prop_map(|(at, kind)| Edit::Object { at, kind }),
        1 => (0.0..=1.0f64, 0.0..=1.0f64).prop_map(|(from, to)| Edit::Delete { from, to }),
    ]
}

fn position(buffer: &ContentBuffer, fraction: f64) -> usize {
    (buffer.len() as f64 * fraction).floor() as usize
}

fn ordered(buffer: &ContentBuffer, a: f64, b: f64) -> (usize, usize) {
    let (a, b) = (position(buffer, a), position(buffer, b));
    (a.min(b), a.max(b))
}

fn build(edits: &[Edit]) -> ContentBuffer {
    let mut buffer = ContentBuffer::new();
    for edit in edits {
        match edit {
            Edit::Insert { at, text } => {
                let at = position(&buffer, *at);
                let attrs = buffer.attributes_at(at.saturating_sub(1)).cloned().unwrap_or_default();
                buffer.insert_text(at, text, &attrs).unwrap();
            }
            Edit::Style {
                from,
                to,
                key,
                value,
            } => {
                let (start, end) = ordered(&buffer, *from, *to);
                buffer.apply_attribute(start, end, *key, *value).unwrap();
            }
            Edit::Object { at, kind } => {
                let at = position(&buffer, *at);
                buffer
                    .insert_embedded_object(at, EmbeddedObject::new(0, kind.clone()))
                    .unwrap();
            }
            Edit::Delete { from, to } => {
                let (start, end) = ordered(&buffer, *from, *to);
                buffer.delete_range(start, end).unwrap();
            }
        }
    }
    buffer
}

fn buffer() -> impl Strategy<Value = ContentBuffer> {
    prop::collection::vec(edit(), 0..24).prop_map(|edits| build(&edits))
}

// ============================================================================
// Span Invariants
// ============================================================================

proptest! {
    /// Touching spans never share an attribute set.
    #[test]
    fn adjacent_spans_differ(buffer in buffer()) {
        for pair in buffer.spans().windows(2) {
            if pair[0].end == pair[1].start {
                prop_assert_ne!(&pair[0].attrs, &pair[1].attrs, "uncoalesced spans {:?}", pair);
            }
        }
    }

    /// Spans and object slots tile the whole buffer without overlap.
    #[test]
    fn spans_and_slots_tile_buffer(buffer in buffer()) {
        let mut covered = vec![0u8; buffer.len()];
        for span in buffer.spans() {
            prop_assert!(!span.is_empty());
            for slot in span.range() {
                covered[slot] += 1;
            }
        }
        for object in buffer.objects() {
            covered[object.offset] += 1;
        }
        prop_assert!(covered.iter().all(|&count| count == 1), "coverage {:?}", covered);
        prop_assert!(buffer.objects().windows(2).all(|w| w[0].offset < w[1].offset));
    }

    /// Text length plus object count is the buffer length.
    #[test]
    fn text_excludes_slots(buffer in buffer()) {
        prop_assert_eq!(buffer.text().chars().count() + buffer.objects().len(), buffer.len());
    }
}

// ============================================================================
// Round Trips
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// XML serialization reproduces text, span boundaries and objects.
    #[test]
    fn xml_round_trip(buffer in buffer()) {
        let kind = NodeKind::RichText;
        let xml = content_to_xml(&buffer, &kind, &XmlOptions::default()).unwrap();
        let back = content_from_xml(&xml, &kind).unwrap();
        prop_assert_eq!(back, buffer);
    }

    /// Plain nodes keep their text and nothing else.
    #[test]
    fn plain_xml_round_trip(s in text()) {
        let kind = NodeKind::PlainText;
        let buffer = ContentBuffer::from_text(&s).unwrap();
        let xml = content_to_xml(&buffer, &kind, &XmlOptions::default()).unwrap();
        prop_assert_eq!(content_from_xml(&xml, &kind).unwrap(), buffer);
    }

    /// Relational rows reproduce every node's content, loaded lazily.
    #[test]
    fn relational_round_trip(first in buffer(), second in buffer()) {
        let mut doc = Document::new();
        let a = doc
            .add_node(None, Node::new("a", NodeKind::RichText).with_content(first.clone()))
            .unwrap();
        let b = doc
            .add_node(Some(a), Node::new("b", NodeKind::RichText).with_content(second.clone()))
            .unwrap();
        let store = doc.to_rows().unwrap();
        let mut back = Document::from_rows(&store).unwrap();
        prop_assert_eq!(back.parent(b), Some(a));
        prop_assert_eq!(back.content_mut(a).unwrap().clone(), first);
        prop_assert_eq!(back.content_mut(b).unwrap().clone(), second);
    }

    /// Attribute removal restores the empty set on the whole range.
    #[test]
    fn remove_attribute_clears_range(buffer in buffer()) {
        let mut buffer = buffer;
        let len = buffer.len();
        for key in AttrKey::ALL {
            buffer.remove_attribute(0, len, key).unwrap();
        }
        let plain = AttributeSet::new();
        prop_assert!(buffer.spans().iter().all(|span| span.attrs == plain));
        prop_assert!(buffer.spans().len() <= buffer.objects().len() + 1);
    }
}
