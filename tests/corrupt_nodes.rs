//! Corrupt node content degrades one node and notifies the host.
//!
//! The host callbacks are process-global, so this binary holds a single test.

use std::sync::{Arc, Mutex, Once};

use notetree::codec::{
    ChildRow, NodeRow, RelationalStore, XmlOptions, document_from_xml, document_to_xml,
};
use notetree::model::{Document, NodeId};
use notetree::{
    LogLevel, NODE_CORRUPT, clear_event_callback, clear_log_callback, set_event_callback,
    set_log_callback,
};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

#[test]
fn corrupt_nodes_are_reported_and_isolated() {
    setup_test_logging();
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&events);
    set_event_callback(move |name, data| {
        if name == NODE_CORRUPT {
            sink.lock().unwrap().push(data.to_string());
        }
    });
    let warnings = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&warnings);
    set_log_callback(move |level, _| {
        if level == LogLevel::Warn {
            *counter.lock().unwrap() += 1;
        }
    });

    // XML: the first node points an image past its text.
    let xml = r#"<cherrytree>
        <node name="broken" unique_id="3" prog_lang="custom-colors">
            <rich_text>ab</rich_text>
            <encoded_png char_offset="40">AAAA</encoded_png>
            <node name="child" unique_id="4" prog_lang="plain-text"><rich_text>kept</rich_text></node>
        </node>
        <node name="fine" unique_id="5" prog_lang="custom-colors"><rich_text>ok</rich_text></node>
    </cherrytree>"#;
    let mut doc = document_from_xml(xml).unwrap();
    assert!(doc.node(NodeId(3)).unwrap().is_corrupt());
    assert!(doc.content_mut(NodeId(3)).unwrap().is_empty());
    assert_eq!(doc.content_mut(NodeId(4)).unwrap().text(), "kept");
    assert_eq!(doc.content_mut(NodeId(5)).unwrap().text(), "ok");
    assert_eq!(doc.children(Some(NodeId(3))), &[NodeId(4)]);

    // Rows: the failure surfaces on first access, once.
    let store = RelationalStore {
        nodes: vec![NodeRow {
            node_id: 8,
            name: "bad".to_string(),
            txt: "<node><rich_text>open".to_string(),
            syntax: "custom-colors".to_string(),
            is_richtxt: true,
            ..NodeRow::default()
        }],
        children: vec![ChildRow {
            node_id: 8,
            father_id: 0,
            sequence: 1,
        }],
        ..RelationalStore::default()
    };
    let mut lazy = Document::from_rows(&store).unwrap();
    assert_eq!(events.lock().unwrap().len(), 1);
    assert!(lazy.content_mut(NodeId(8)).unwrap().is_empty());
    assert!(lazy.content_mut(NodeId(8)).unwrap().is_empty());
    assert!(lazy.node(NodeId(8)).unwrap().is_corrupt());

    // Exporting a never-opened corrupt node reports it too, once.
    let store = RelationalStore {
        nodes: vec![NodeRow {
            node_id: 9,
            name: "unopened".to_string(),
            txt: "<node><rich_text>lost words".to_string(),
            syntax: "custom-colors".to_string(),
            is_richtxt: true,
            ..NodeRow::default()
        }],
        ..RelationalStore::default()
    };
    let mut unopened = Document::from_rows(&store).unwrap();
    let xml = document_to_xml(&unopened, &XmlOptions::default()).unwrap();
    assert!(xml.contains(r#"unique_id="9""#));
    assert!(!xml.contains("lost words"));
    assert!(unopened.node(NodeId(9)).unwrap().is_corrupt());
    document_to_xml(&unopened, &XmlOptions::default()).unwrap();
    assert!(unopened.content_mut(NodeId(9)).unwrap().is_empty());

    clear_event_callback();
    clear_log_callback();
    let events = events.lock().unwrap();
    assert_eq!(events.len(), 3);
    assert!(events[0].starts_with("3: "));
    assert!(events[1].starts_with("8: "));
    assert!(events[2].starts_with("9: "));
    assert_eq!(*warnings.lock().unwrap(), 3);
}
