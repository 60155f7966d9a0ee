//! XML node-content and whole-document codec.
//!
//! Node content is a `node` element holding `rich_text` records followed by
//! object elements (`encoded_png`, `table`, `codebox`) that carry their
//! position as `char_offset`. Record text excludes object slots; on load the
//! objects are spliced back in ascending offset order.
//!
//! Attribute toggles: every record lists all non-empty attributes of its
//! run, and additionally an explicit empty value for each attribute the
//! previous record set and this one does not. The reader keeps attributes a
//! record does not mention and clears those given an empty value.

use std::ops::Range;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tracing::{debug, trace};

use crate::codec::dom::{self, Element};
use crate::error::{Error, Result};
use crate::event::report_corrupt_node;
use crate::model::{
    AttrKey, AttributeSet, CodeBox, ContentBuffer, Document, EmbeddedObject, Image, ImageSource,
    Justification, Node, NodeId, NodeKind, ObjectKind, Piece, Table,
};

pub(crate) const NODE: &str = "node";
pub(crate) const RICH_TEXT: &str = "rich_text";
pub(crate) const ENCODED_PNG: &str = "encoded_png";
pub(crate) const TABLE: &str = "table";
pub(crate) const CODEBOX: &str = "codebox";
const ROOT: &str = "cherrytree";
const BOOKMARKS: &str = "bookmarks";
const CHAR_OFFSET: &str = "char_offset";

/// XML output options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XmlOptions {
    /// Write an `<?xml ...?>` declaration.
    pub declaration: bool,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self { declaration: true }
    }
}

pub(crate) const fn format_bool(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Accepts `True`/`true`/`1`; anything else is false.
pub(crate) fn parse_bool(value: &str) -> bool {
    matches!(value, "True" | "true" | "1")
}

pub(crate) fn parse_number<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidAttribute {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn number_attr<T: FromStr>(element: &Element, key: &str, default: T) -> Result<T> {
    match element.get(key) {
        None | Some("") => Ok(default),
        Some(value) => parse_number(key, value),
    }
}

fn justification_attr(element: &Element) -> Result<Justification> {
    match element.get(AttrKey::Justification.name()) {
        None | Some("") => Ok(Justification::Left),
        Some(value) => value.parse(),
    }
}

pub(crate) fn decode_blob(text: &str) -> Result<Vec<u8>> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

// ============================================================================
// Styled-text records
// ============================================================================

/// Append one `rich_text` record per run of `range` to `parent`.
fn push_records(parent: &mut Element, buffer: &ContentBuffer, range: Range<usize>) {
    let empty = AttributeSet::new();
    let mut prev = &empty;
    for piece in buffer.query_runs_and_objects(range) {
        let Piece::Run { text, attrs, .. } = piece else {
            continue;
        };
        let mut record = Element::new(RICH_TEXT);
        for key in AttrKey::ALL {
            match attrs.get(key) {
                Some(value) => record = record.attr(key.name(), value),
                None if prev.get(key).is_some() => record = record.attr(key.name(), ""),
                None => {}
            }
        }
        parent.push(record.text(text));
        prev = attrs;
    }
}

/// Read `rich_text` records into `buffer`, appending at its end.
fn read_records<'a>(
    buffer: &mut ContentBuffer,
    records: impl Iterator<Item = &'a Element>,
    styled: bool,
) -> Result<()> {
    let mut current = AttributeSet::new();
    for record in records {
        if styled {
            for (name, value) in &record.attrs {
                match AttrKey::from_name(name) {
                    Some(key) => current.set(key, Some(value.clone())),
                    None => trace!(attribute = %name, "ignoring unknown text attribute"),
                }
            }
        }
        let text = record.text_content();
        if !text.is_empty() {
            buffer.insert_text(buffer.len(), &text, &current)?;
        }
    }
    Ok(())
}

/// Serialize only the styled text of `buffer` (no objects).
pub fn rich_text_to_xml(buffer: &ContentBuffer, options: &XmlOptions) -> Result<String> {
    let mut node = Element::new(NODE);
    push_records(&mut node, buffer, 0..buffer.len());
    node.to_xml(options.declaration)
}

// ============================================================================
// Embedded objects
// ============================================================================

/// Element for `object`, with its offset moved left by `shift`.
#[must_use]
pub fn object_to_element(object: &EmbeddedObject, shift: usize) -> Element {
    let offset = object.offset.saturating_sub(shift).to_string();
    let name = match &object.kind {
        ObjectKind::Image(_) | ObjectKind::Anchor(_) => ENCODED_PNG,
        ObjectKind::Table(_) => TABLE,
        ObjectKind::CodeBox(_) => CODEBOX,
    };
    let mut element = Element::new(name).attr(CHAR_OFFSET, offset);
    if object.justification != Justification::Left {
        element = element.attr(AttrKey::Justification.name(), object.justification.as_str());
    }
    match &object.kind {
        ObjectKind::Anchor(anchor) => element.attr("anchor", anchor.as_str()),
        ObjectKind::Image(image) => {
            let (element, data) = match &image.source {
                ImageSource::Png(data) => (element, data),
                ImageSource::File { name, data, time } => (
                    element.attr("filename", name.as_str()).attr("time", time.to_string()),
                    data,
                ),
            };
            let element = match &image.link {
                Some(link) => element.attr("link", link.as_str()),
                None => element,
            };
            element.text(STANDARD.encode(data))
        }
        ObjectKind::Table(table) => push_table_rows(
            element
                .attr("col_min", table.col_min.to_string())
                .attr("col_max", table.col_max.to_string()),
            table,
        ),
        ObjectKind::CodeBox(codebox) => element
            .attr("frame_width", codebox.width.to_string())
            .attr("frame_height", codebox.height.to_string())
            .attr("width_in_pixels", format_bool(codebox.width_in_pixels))
            .attr("syntax_highlighting", codebox.syntax.as_str())
            .attr("highlight_brackets", format_bool(codebox.highlight_brackets))
            .attr("show_line_numbers", format_bool(codebox.show_line_numbers))
            .text(codebox.text.as_str()),
    }
}

/// Add `row`/`cell` children; the header row goes last.
pub(crate) fn push_table_rows(mut element: Element, table: &Table) -> Element {
    let row = |cells: &[String]| {
        cells.iter().fold(Element::new("row"), |row, cell| {
            row.child(Element::new("cell").text(cell.as_str()))
        })
    };
    for cells in &table.rows {
        element.push(row(cells));
    }
    element.push(row(&table.header));
    element
}

/// Read a table matrix whose header row is stored last.
pub(crate) fn read_table(element: &Element, col_min: u32, col_max: u32) -> Result<Table> {
    let mut rows: Vec<Vec<String>> = element
        .elements_named("row")
        .map(|row| {
            row.elements_named("cell")
                .map(|cell| cell.text_content().into_owned())
                .collect()
        })
        .collect();
    let header = rows.pop().unwrap_or_default();
    Table::new(header, rows, col_min, col_max)
}

/// Parse an object element.
pub fn object_from_element(element: &Element) -> Result<EmbeddedObject> {
    let offset = match element.get(CHAR_OFFSET) {
        Some(value) => parse_number(CHAR_OFFSET, value)?,
        None => {
            return Err(Error::InvalidAttribute {
                key: CHAR_OFFSET.to_string(),
                value: String::new(),
            });
        }
    };
    let justification = justification_attr(element)?;
    let kind = match element.name.as_str() {
        ENCODED_PNG => match element.get("anchor").filter(|a| !a.is_empty()) {
            Some(anchor) => ObjectKind::Anchor(anchor.to_string()),
            None => {
                let data = decode_blob(&element.text_content())?;
                let source = match element.get("filename").filter(|f| !f.is_empty()) {
                    Some(name) => ImageSource::File {
                        name: name.to_string(),
                        data,
                        time: number_attr(element, "time", 0.0)?,
                    },
                    None => ImageSource::Png(data),
                };
                let link = element
                    .get("link")
                    .filter(|l| !l.is_empty())
                    .map(str::to_string);
                ObjectKind::Image(Image { source, link })
            }
        },
        TABLE => ObjectKind::Table(read_table(
            element,
            number_attr(element, "col_min", 40)?,
            number_attr(element, "col_max", 400)?,
        )?),
        CODEBOX => ObjectKind::CodeBox(CodeBox {
            text: element.text_content().into_owned(),
            syntax: element
                .get("syntax_highlighting")
                .unwrap_or("plain-text")
                .to_string(),
            width: number_attr(element, "frame_width", 500)?,
            height: number_attr(element, "frame_height", 100)?,
            width_in_pixels: element.get("width_in_pixels").is_none_or(parse_bool),
            highlight_brackets: element.get("highlight_brackets").is_some_and(parse_bool),
            show_line_numbers: element.get("show_line_numbers").is_some_and(parse_bool),
        }),
        other => {
            return Err(Error::UnexpectedElement {
                expected: ENCODED_PNG,
                found: other.to_string(),
            });
        }
    };
    Ok(EmbeddedObject {
        offset,
        justification,
        kind,
    })
}

/// Insert `objects` into their slots in ascending offset order.
pub(crate) fn splice_objects(buffer: &mut ContentBuffer, mut objects: Vec<EmbeddedObject>) -> Result<()> {
    objects.sort_by_key(|object| object.offset);
    for object in objects {
        buffer.insert_embedded_object(object.offset, object)?;
    }
    Ok(())
}

// ============================================================================
// Node content
// ============================================================================

/// Build the `node` content element for `range` of `buffer`.
///
/// Object offsets are made relative to `range.start`.
#[must_use]
pub fn content_element(buffer: &ContentBuffer, kind: &NodeKind, range: Range<usize>) -> Element {
    let mut node = Element::new(NODE);
    append_content(&mut node, buffer, kind, range);
    node
}

fn append_content(node: &mut Element, buffer: &ContentBuffer, kind: &NodeKind, range: Range<usize>) {
    if !kind.is_rich() {
        let text = buffer.slice_text(range);
        if !text.is_empty() {
            node.push(Element::new(RICH_TEXT).text(text));
        }
        return;
    }
    push_records(node, buffer, range.clone());
    for object in buffer.objects() {
        if range.contains(&object.offset) {
            node.push(object_to_element(object, range.start));
        }
    }
}

/// Rebuild content from a `node` element. Nested `node` elements are skipped.
pub fn content_from_element(element: &Element, kind: &NodeKind) -> Result<ContentBuffer> {
    let mut buffer = ContentBuffer::new();
    let mut objects = Vec::new();
    for child in element.elements() {
        match child.name.as_str() {
            RICH_TEXT | NODE => {}
            ENCODED_PNG | TABLE | CODEBOX if kind.is_rich() => {
                objects.push(object_from_element(child)?);
            }
            ENCODED_PNG | TABLE | CODEBOX => {
                debug!(element = %child.name, "dropping object from non-rich node");
            }
            other => {
                return Err(Error::UnexpectedElement {
                    expected: RICH_TEXT,
                    found: other.to_string(),
                });
            }
        }
    }
    read_records(&mut buffer, element.elements_named(RICH_TEXT), kind.is_rich())?;
    splice_objects(&mut buffer, objects)?;
    Ok(buffer)
}

/// Serialize a node's whole content.
pub fn content_to_xml(buffer: &ContentBuffer, kind: &NodeKind, options: &XmlOptions) -> Result<String> {
    selection_to_xml(buffer, kind, 0..buffer.len(), options)
}

/// Serialize a sub-range of a node's content.
pub fn selection_to_xml(
    buffer: &ContentBuffer,
    kind: &NodeKind,
    range: Range<usize>,
    options: &XmlOptions,
) -> Result<String> {
    let end = range.end.min(buffer.len());
    let start = range.start.min(end);
    content_element(buffer, kind, start..end).to_xml(options.declaration)
}

/// Parse node content produced by [`content_to_xml`] or [`rich_text_to_xml`].
pub fn content_from_xml(xml: &str, kind: &NodeKind) -> Result<ContentBuffer> {
    let root = dom::parse(xml)?;
    content_from_element(root.expect_name(NODE)?, kind)
}

// ============================================================================
// Whole documents
// ============================================================================

fn node_element(doc: &Document, id: NodeId) -> Element {
    let mut element = Element::new(NODE);
    if let Some(node) = doc.node(id) {
        element = element
            .attr("name", node.name.as_str())
            .attr("unique_id", id.to_string())
            .attr("prog_lang", node.kind.syntax())
            .attr("tags", node.tags.as_str())
            .attr("readonly", format_bool(node.read_only))
            .attr("ts_creation", node.ts_creation.to_string())
            .attr("ts_lastsave", node.ts_lastsave.to_string());
        let content = node.content_view(id);
        append_content(&mut element, &content, &node.kind, 0..content.len());
    }
    for &child in doc.children(Some(id)) {
        element.push(node_element(doc, child));
    }
    element
}

/// Serialize a whole document.
pub fn document_to_xml(doc: &Document, options: &XmlOptions) -> Result<String> {
    let mut root = Element::new(ROOT);
    for &id in doc.children(None) {
        root.push(node_element(doc, id));
    }
    if !doc.bookmarks().is_empty() {
        let list: Vec<String> = doc.bookmarks().iter().map(ToString::to_string).collect();
        root.push(Element::new(BOOKMARKS).attr("list", list.join(",")));
    }
    root.to_xml(options.declaration)
}

fn load_node(doc: &mut Document, element: &Element, parent: Option<NodeId>) -> Result<()> {
    let kind = NodeKind::from_syntax(element.get("prog_lang").unwrap_or_default());
    let mut node = Node::new(element.get("name").unwrap_or_default(), kind.clone());
    node.tags = element.get("tags").unwrap_or_default().to_string();
    node.read_only = element.get("readonly").is_some_and(parse_bool);
    node.ts_creation = number_attr(element, "ts_creation", 0).unwrap_or_default();
    node.ts_lastsave = number_attr(element, "ts_lastsave", 0).unwrap_or_default();

    let requested = element
        .get("unique_id")
        .and_then(|value| value.trim().parse().ok())
        .map(NodeId);
    let content = content_from_element(element, &kind);
    let id = match requested {
        Some(id) => doc.add_node_with_id(id, parent, node)?,
        None => doc.add_node(parent, node)?,
    };
    match content {
        Ok(buffer) => {
            if let Some(node) = doc.node_mut(id) {
                node.set_content(buffer);
            }
        }
        Err(err) => {
            report_corrupt_node(id, &err.to_string());
            if let Some(node) = doc.node(id) {
                node.mark_corrupt();
            }
        }
    }
    for child in element.elements_named(NODE) {
        load_node(doc, child, Some(id))?;
    }
    Ok(())
}

/// Parse a whole document.
///
/// Malformed node content leaves that node empty and flagged corrupt; the
/// rest of the document still loads.
pub fn document_from_xml(xml: &str) -> Result<Document> {
    let root = dom::parse(xml)?;
    let root = root.expect_name(ROOT)?;
    let mut doc = Document::new();
    for child in root.elements() {
        match child.name.as_str() {
            NODE => load_node(&mut doc, child, None)?,
            BOOKMARKS => {
                for id in child.get("list").unwrap_or_default().split(',') {
                    let Ok(id) = id.trim().parse() else {
                        continue;
                    };
                    if doc.bookmark(NodeId(id)).is_err() {
                        debug!(node = id, "bookmark of unknown node dropped");
                    }
                }
            }
            other => {
                return Err(Error::UnexpectedElement {
                    expected: NODE,
                    found: other.to_string(),
                });
            }
        }
    }
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_buffer() -> ContentBuffer {
        let mut buf = ContentBuffer::from_text("Hello bold world").unwrap();
        buf.apply_attribute(6, 10, AttrKey::Weight, Some("heavy")).unwrap();
        buf.apply_attribute(6, 16, AttrKey::Foreground, Some("#ff0000"))
            .unwrap();
        buf.insert_embedded_object(5, EmbeddedObject::new(0, ObjectKind::Anchor("here".into())))
            .unwrap();
        buf
    }

    #[test]
    fn test_toggle_encoding_writes_explicit_clears() {
        let buf = sample_buffer();
        let xml = rich_text_to_xml(&buf, &XmlOptions { declaration: false }).unwrap();
        assert_eq!(
            xml,
            "<node><rich_text>Hello</rich_text><rich_text> </rich_text>\
             <rich_text weight=\"heavy\" foreground=\"#ff0000\">bold</rich_text>\
             <rich_text weight=\"\" foreground=\"#ff0000\"> world</rich_text></node>"
        );
    }

    #[test]
    fn test_reader_persists_unmentioned_keys() {
        let xml = "<node><rich_text weight=\"heavy\">A</rich_text>\
                   <rich_text style=\"italic\">B</rich_text>\
                   <rich_text weight=\"\">C</rich_text></node>";
        let buf = content_from_xml(xml, &NodeKind::RichText).unwrap();
        assert_eq!(buf.text(), "ABC");
        let b = buf.attributes_at(1).unwrap();
        assert_eq!(b.get(AttrKey::Weight), Some("heavy"));
        assert_eq!(b.get(AttrKey::Style), Some("italic"));
        let c = buf.attributes_at(2).unwrap();
        assert_eq!(c.get(AttrKey::Weight), None);
        assert_eq!(c.get(AttrKey::Style), Some("italic"));
    }

    #[test]
    fn test_content_round_trip() {
        let mut buf = sample_buffer();
        let table = Table::new(
            vec!["h1".into(), "h2".into()],
            vec![vec!["a".into(), String::new()]],
            30,
            300,
        )
        .unwrap();
        buf.insert_embedded_object(
            0,
            EmbeddedObject::new(0, ObjectKind::Table(table))
                .with_justification(Justification::Right),
        )
        .unwrap();
        buf.insert_embedded_object(
            buf.len(),
            EmbeddedObject::new(0, ObjectKind::CodeBox(CodeBox {
                text: "x < y && z".into(),
                syntax: "rust".into(),
                show_line_numbers: true,
                ..CodeBox::default()
            })),
        )
        .unwrap();
        buf.insert_embedded_object(
            3,
            EmbeddedObject::new(0, ObjectKind::Image(Image {
                source: ImageSource::File {
                    name: "a.bin".into(),
                    data: vec![0, 159, 146, 150],
                    time: 1_611_952_177.0,
                },
                link: Some("webs https://example.com".into()),
            })),
        )
        .unwrap();
        let xml = content_to_xml(&buf, &NodeKind::RichText, &XmlOptions::default()).unwrap();
        let back = content_from_xml(&xml, &NodeKind::RichText).unwrap();
        assert_eq!(back, buf);
    }

    #[test]
    fn test_table_header_stored_last() {
        let table = Table::new(vec!["H".into()], vec![vec!["r".into()]], 40, 400).unwrap();
        let element = object_to_element(&EmbeddedObject::new(2, ObjectKind::Table(table)), 0);
        let rows: Vec<String> = element
            .elements_named("row")
            .map(|row| row.elements().next().unwrap().text_content().into_owned())
            .collect();
        assert_eq!(rows, vec!["r", "H"]);
        assert_eq!(element.get("char_offset"), Some("2"));
    }

    #[test]
    fn test_plain_text_node_ignores_attributes() {
        let mut buf = ContentBuffer::from_text("print(1)").unwrap();
        buf.apply_attribute(0, 5, AttrKey::Weight, Some("heavy")).unwrap();
        let kind = NodeKind::Code("python3".into());
        let xml = content_to_xml(&buf, &kind, &XmlOptions { declaration: false }).unwrap();
        assert_eq!(xml, "<node><rich_text>print(1)</rich_text></node>");
        let back = content_from_xml(&xml, &kind).unwrap();
        assert_eq!(back.spans().len(), 1);
        assert!(back.spans()[0].attrs.is_empty());
    }

    #[test]
    fn test_selection_shifts_offsets() {
        let buf = sample_buffer();
        let xml = selection_to_xml(&buf, &NodeKind::RichText, 3..8, &XmlOptions::default()).unwrap();
        let back = content_from_xml(&xml, &NodeKind::RichText).unwrap();
        assert_eq!(back.text(), "lo b");
        assert_eq!(back.objects()[0].offset, 2);
    }

    #[test]
    fn test_malformed_content() {
        let kind = NodeKind::RichText;
        assert!(matches!(
            content_from_xml("<root/>", &kind),
            Err(Error::UnexpectedElement { expected: "node", .. })
        ));
        assert!(content_from_xml("<node><rich_text>x</node>", &kind).is_err());
        assert!(matches!(
            content_from_xml("<node><encoded_png char_offset=\"9\">AAAA</encoded_png></node>", &kind),
            Err(Error::InvalidOffset { offset: 9, .. })
        ));
        assert!(matches!(
            content_from_xml("<node><encoded_png char_offset=\"0\">@@</encoded_png></node>", &kind),
            Err(Error::Base64(_))
        ));
        assert!(matches!(
            content_from_xml("<node><blob/></node>", &kind),
            Err(Error::UnexpectedElement { .. })
        ));
    }

    #[test]
    fn test_document_round_trip() {
        let mut doc = Document::new();
        let a = doc
            .add_node(None, Node::new("a", NodeKind::RichText).with_content(sample_buffer()))
            .unwrap();
        let mut code = Node::new("b & c", NodeKind::Code("sh".into()));
        code.read_only = true;
        code.ts_creation = 1_611_952_177;
        let b = doc
            .add_node(Some(a), code.with_content(ContentBuffer::from_text("ls -la").unwrap()))
            .unwrap();
        doc.bookmark(b).unwrap();

        let xml = document_to_xml(&doc, &XmlOptions::default()).unwrap();
        let mut back = document_from_xml(&xml).unwrap();
        assert_eq!(back.walk().collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(back.parent(b), Some(a));
        assert_eq!(back.bookmarks(), &[b]);
        let node = back.node(b).unwrap();
        assert_eq!(node.name, "b & c");
        assert!(node.read_only);
        assert_eq!(node.ts_creation, 1_611_952_177);
        assert_eq!(back.content_mut(a).unwrap(), &sample_buffer());
        assert_eq!(back.content_mut(b).unwrap().text(), "ls -la");
    }

    #[test]
    fn test_corrupt_node_degrades_alone() {
        let xml = "<cherrytree>\
                   <node name=\"bad\" unique_id=\"1\" prog_lang=\"custom-colors\">\
                   <table char_offset=\"0\"><row><cell>a</cell></row><row><cell>b</cell><cell>c</cell></row></table>\
                   </node>\
                   <node name=\"good\" unique_id=\"2\" prog_lang=\"plain-text\"><rich_text>ok</rich_text></node>\
                   </cherrytree>";
        let mut doc = document_from_xml(xml).unwrap();
        assert_eq!(doc.len(), 2);
        assert!(doc.node(NodeId(1)).unwrap().is_corrupt());
        assert!(doc.content_mut(NodeId(1)).unwrap().is_empty());
        assert!(!doc.node(NodeId(2)).unwrap().is_corrupt());
        assert_eq!(doc.content_mut(NodeId(2)).unwrap().text(), "ok");
    }
}
