//! Codec and history benchmarks on a synthetic styled node.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use notetree::codec::{XmlOptions, content_from_xml, content_to_xml};
use notetree::history::{NodeState, StateMachine};
use notetree::model::{
    AttrKey, AttributeSet, CodeBox, ContentBuffer, Document, EmbeddedObject, Node, NodeId,
    NodeKind, ObjectKind, Table,
};
use std::hint::black_box;

/// A few hundred styled paragraphs with an object every tenth line.
fn styled_buffer() -> ContentBuffer {
    let mut buffer = ContentBuffer::new();
    let plain = AttributeSet::new();
    for line in 0..300 {
        let start = buffer.len();
        buffer
            .insert_text(start, &format!("Paragraph {line} with some bold words.\n"), &plain)
            .unwrap();
        buffer
            .apply_attribute(start + 15, start + 25, AttrKey::Weight, Some("heavy"))
            .unwrap();
        if line % 10 == 0 {
            let kind = if line % 20 == 0 {
                ObjectKind::CodeBox(CodeBox {
                    text: "fn main() {}".to_string(),
                    ..CodeBox::default()
                })
            } else {
                ObjectKind::Table(
                    Table::new(
                        vec!["a".into(), "b".into()],
                        vec![vec!["1".into(), "2".into()]],
                        40,
                        400,
                    )
                    .unwrap(),
                )
            };
            let end = buffer.len();
            buffer
                .insert_embedded_object(end, EmbeddedObject::new(0, kind))
                .unwrap();
        }
    }
    buffer
}

fn bench_xml(c: &mut Criterion) {
    let buffer = styled_buffer();
    let kind = NodeKind::RichText;
    let options = XmlOptions::default();
    let xml = content_to_xml(&buffer, &kind, &options).unwrap();

    c.bench_function("xml_serialize_node", |b| {
        b.iter(|| content_to_xml(black_box(&buffer), &kind, &options).unwrap())
    });
    c.bench_function("xml_deserialize_node", |b| {
        b.iter(|| content_from_xml(black_box(&xml), &kind).unwrap())
    });
}

fn bench_relational(c: &mut Criterion) {
    let mut doc = Document::new();
    for n in 0..20 {
        doc.add_node(
            None,
            Node::new(format!("node {n}"), NodeKind::RichText).with_content(styled_buffer()),
        )
        .unwrap();
    }
    let store = doc.to_rows().unwrap();

    c.bench_function("relational_to_rows", |b| b.iter(|| black_box(&doc).to_rows().unwrap()));
    c.bench_function("relational_from_rows_and_load", |b| {
        b.iter(|| {
            let mut doc = Document::from_rows(black_box(&store)).unwrap();
            doc.content_mut(NodeId(1)).unwrap().len()
        })
    });
}

fn bench_history(c: &mut Criterion) {
    let buffer = styled_buffer();
    let kind = NodeKind::RichText;
    c.bench_function("history_update_state", |b| {
        let mut machine = StateMachine::new();
        let id = NodeId(1);
        machine
            .ensure_node(id, NodeState::new(&buffer, &kind, 0))
            .unwrap();
        b.iter(|| {
            machine
                .update_state(id, NodeState::new(black_box(&buffer), &kind, 0))
                .unwrap()
        })
    });
}

criterion_group!(benches, bench_xml, bench_relational, bench_history);
criterion_main!(benches);
