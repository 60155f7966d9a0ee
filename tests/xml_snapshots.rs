//! Inline snapshots of small serialized fragments.

use notetree::codec::{XmlOptions, content_to_xml, document_to_xml, selection_to_xml};
use notetree::model::{
    AttrKey, CodeBox, ContentBuffer, Document, EmbeddedObject, Justification, Node, NodeKind,
    ObjectKind, Table,
};

const BARE: XmlOptions = XmlOptions { declaration: false };

#[test]
fn styled_text_with_codebox() {
    let mut buffer = ContentBuffer::from_text("Hi there").unwrap();
    buffer.apply_attribute(3, 8, AttrKey::Weight, Some("heavy")).unwrap();
    buffer
        .insert_embedded_object(
            8,
            EmbeddedObject::new(
                0,
                ObjectKind::CodeBox(CodeBox {
                    text: "let x = 1;".to_string(),
                    ..CodeBox::default()
                }),
            )
            .with_justification(Justification::Center),
        )
        .unwrap();

    let xml = content_to_xml(&buffer, &NodeKind::RichText, &BARE).unwrap();
    insta::assert_snapshot!(xml, @r#"<node><rich_text>Hi </rich_text><rich_text weight="heavy">there</rich_text><codebox char_offset="8" justification="center" frame_width="500" frame_height="100" width_in_pixels="True" syntax_highlighting="plain-text" highlight_brackets="True" show_line_numbers="False">let x = 1;</codebox></node>"#);
}

#[test]
fn table_header_is_last() {
    let mut buffer = ContentBuffer::new();
    let table = Table::new(
        vec!["h1".to_string(), "h2".to_string()],
        vec![vec!["a".to_string(), String::new()]],
        40,
        400,
    )
    .unwrap();
    buffer
        .insert_embedded_object(0, EmbeddedObject::new(0, ObjectKind::Table(table)))
        .unwrap();

    let xml = content_to_xml(&buffer, &NodeKind::RichText, &BARE).unwrap();
    insta::assert_snapshot!(xml, @r#"<node><table char_offset="0" col_min="40" col_max="400"><row><cell>a</cell><cell/></row><row><cell>h1</cell><cell>h2</cell></row></table></node>"#);
}

#[test]
fn selection_rebases_offsets() {
    let mut buffer = ContentBuffer::from_text("abcdef").unwrap();
    buffer
        .insert_embedded_object(4, EmbeddedObject::new(0, ObjectKind::Anchor("mid".to_string())))
        .unwrap();

    let xml = selection_to_xml(&buffer, &NodeKind::RichText, 2..6, &BARE).unwrap();
    insta::assert_snapshot!(xml, @r#"<node><rich_text>cd</rich_text><rich_text>e</rich_text><encoded_png char_offset="2" anchor="mid"/></node>"#);
}

#[test]
fn document_with_bookmark() {
    let mut doc = Document::new();
    let id = doc
        .add_node(
            None,
            Node::new("a & b", NodeKind::RichText)
                .with_content(ContentBuffer::from_text("x").unwrap()),
        )
        .unwrap();
    doc.bookmark(id).unwrap();

    let xml = document_to_xml(&doc, &XmlOptions::default()).unwrap();
    insta::assert_snapshot!(xml, @r#"<?xml version="1.0" encoding="UTF-8"?><cherrytree><node name="a &amp; b" unique_id="1" prog_lang="custom-colors" tags="" readonly="False" ts_creation="0" ts_lastsave="0"><rich_text>x</rich_text></node><bookmarks list="1"/></cherrytree>"#);
}
