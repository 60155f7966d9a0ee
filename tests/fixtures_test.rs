//! Literal fixtures and end-to-end scenarios.

use notetree::codec::relational::{table_from_row, table_to_xml};
use notetree::codec::{
    RelationalStore, TableRow, XmlOptions, document_from_xml, document_to_xml,
};
use notetree::history::{NodeState, StateMachine, VisitHistory, restore};
use notetree::model::{
    AttrKey, AttributeSet, ContentBuffer, Document, EmbeddedObject, Image, Justification, Node,
    NodeId, NodeKind, ObjectKind, Table,
};
use notetree::unicode::{
    BoundaryKind, WrapOptions, boundaries, line_break_units, sentences, word_boundaries, words,
    wrap_text,
};

// ============================================================================
// Segmentation
// ============================================================================

#[test]
fn hello_world_word_boundaries() {
    let offsets: Vec<usize> = word_boundaries("Hello, world.").collect();
    assert_eq!(offsets, vec![0, 5, 6, 7, 12, 13]);
    let tokens: Vec<&str> = words("Hello, world.").collect();
    assert_eq!(tokens, vec!["Hello", ",", " ", "world", "."]);
}

#[test]
fn sentence_and_line_fixtures() {
    let parts: Vec<&str> = sentences("Hello there. How are you? Pi is 3.14 today.").collect();
    assert_eq!(parts, vec!["Hello there. ", "How are you? ", "Pi is 3.14 today."]);
    let units: Vec<&str> = line_break_units("a-b c\nd", false).collect();
    assert_eq!(units, vec!["a-", "b ", "c\n", "d"]);
    assert_eq!(
        boundaries("e\u{0301}x", BoundaryKind::Grapheme).collect::<Vec<_>>(),
        vec![0, 3, 4]
    );
}

#[test]
fn wrap_breaks_at_opportunities() {
    let options = WrapOptions {
        width: Some(10),
        ..WrapOptions::default()
    };
    let lines = wrap_text("the quick brown fox", &options);
    assert_eq!(lines, vec!["the quick ", "brown fox"]);
}

// ============================================================================
// Document Model Scenarios
// ============================================================================

#[test]
fn image_moves_with_inserted_text() {
    let mut buffer = ContentBuffer::from_text("0123456789").unwrap();
    buffer
        .insert_embedded_object(5, EmbeddedObject::new(0, ObjectKind::Image(Image::png(vec![1, 2]))))
        .unwrap();
    buffer.insert_text(0, "AB", &AttributeSet::new()).unwrap();

    assert_eq!(buffer.objects().len(), 1);
    assert_eq!(buffer.objects()[0].offset, 7);
    assert!(buffer.object_at(7).is_some());
    assert_eq!(buffer.text(), "AB0123456789");
    let covered: usize = buffer.spans().iter().map(|span| span.len()).sum();
    assert_eq!(covered, 12);
    assert_eq!(buffer.spans().len(), 2);
}

#[test]
fn word_navigation_skips_punctuation() {
    let buffer = ContentBuffer::from_text("Hello, world.").unwrap();
    assert_eq!(buffer.next_word_boundary(0), 5);
    assert_eq!(buffer.next_word_boundary(5), 12);
    assert_eq!(buffer.prev_word_boundary(13), 7);
    assert_eq!(buffer.word_range_at(9), Some(7..12));
}

#[test]
fn relational_table_round_trip() {
    let header = vec!["Name".to_string(), String::new(), "Notes".to_string()];
    let row = vec!["ropey".to_string(), String::new(), String::new()];
    let table = Table::new(header.clone(), vec![row.clone()], 30, 300).unwrap();

    let stored = TableRow {
        node_id: 1,
        offset: 3,
        justification: "center".to_string(),
        txt: table_to_xml(&table).unwrap(),
        col_min: table.col_min,
        col_max: table.col_max,
    };
    let object = table_from_row(&stored).unwrap();
    assert_eq!(object.offset, 3);
    assert_eq!(object.justification, Justification::Center);
    let ObjectKind::Table(back) = object.kind else {
        panic!("expected a table, got {:?}", object.kind);
    };
    assert_eq!(back.header, header);
    assert_eq!(back.rows, vec![row]);
    assert_eq!((back.col_min, back.col_max), (30, 300));
}

#[test]
fn whole_document_survives_both_codecs() {
    let mut doc = Document::new();
    let mut text = ContentBuffer::from_text("Read the manual").unwrap();
    text.apply_attribute(9, 15, AttrKey::Link, Some("node 2 intro")).unwrap();
    let root = doc
        .add_node(None, Node::new("root", NodeKind::RichText).with_content(text.clone()))
        .unwrap();
    let code = doc
        .add_node(
            Some(root),
            Node::new("script", NodeKind::Code("sh".into()))
                .with_content(ContentBuffer::from_text("echo hi").unwrap()),
        )
        .unwrap();
    doc.bookmark(code).unwrap();

    let xml = document_to_xml(&doc, &XmlOptions::default()).unwrap();
    let mut from_xml = document_from_xml(&xml).unwrap();
    assert_eq!(from_xml.content_mut(root).unwrap(), &text);
    assert_eq!(from_xml.node(code).unwrap().kind, NodeKind::Code("sh".into()));

    let store: RelationalStore = from_xml.to_rows().unwrap();
    let mut from_rows = Document::from_rows(&store).unwrap();
    assert_eq!(from_rows.bookmarks(), &[code]);
    assert_eq!(from_rows.content_mut(code).unwrap().text(), "echo hi");
    assert_eq!(from_rows.content_mut(root).unwrap(), &text);
}

// ============================================================================
// History Scenarios
// ============================================================================

#[test]
fn undo_replay_inside_external_scope() {
    let kind = NodeKind::RichText;
    let id = NodeId(1);
    let mut machine = StateMachine::new();
    let mut buffer = ContentBuffer::from_text("draft").unwrap();
    machine.ensure_node(id, NodeState::new(&buffer, &kind, 0)).unwrap();

    buffer.insert_text(5, " two", &AttributeSet::new()).unwrap();
    machine
        .text_variation(id, " two", NodeState::new(&buffer, &kind, 9))
        .unwrap();

    let snapshot = machine
        .request_previous(id, NodeState::new(&buffer, &kind, 9))
        .unwrap()
        .cloned()
        .unwrap();
    // Replaying a snapshot is a programmatic edit; it must not re-arm the machine.
    machine.begin_external();
    let replayed = restore(&snapshot, &kind).unwrap();
    machine
        .text_variation(id, "draft", NodeState::new(&replayed, &kind, 0))
        .unwrap();
    machine.end_external();

    assert_eq!(replayed.text(), "draft");
    assert!(machine.can_redo(id));
    let redo = machine.request_next(id).unwrap();
    assert_eq!(restore(redo, &kind).unwrap(), buffer);
}

#[test]
fn removed_nodes_leave_navigation() {
    let mut doc = Document::new();
    let a = doc.add_node(None, Node::new("a", NodeKind::RichText)).unwrap();
    let b = doc.add_node(Some(a), Node::new("b", NodeKind::RichText)).unwrap();
    let c = doc.add_node(None, Node::new("c", NodeKind::RichText)).unwrap();

    let mut visits = VisitHistory::new();
    let mut machine = StateMachine::new();
    let empty = ContentBuffer::new();
    for id in [a, b, c] {
        visits.visit(id);
        machine
            .ensure_node(id, NodeState::new(&empty, &NodeKind::RichText, 0))
            .unwrap();
    }

    for gone in doc.remove_node(a).unwrap() {
        visits.purge(gone);
        machine.forget_node(gone);
    }
    assert_eq!(visits.entries(), &[c]);
    assert!(!machine.is_tracked(b));
    assert!(machine.is_tracked(c));
}
