//! Relational row codec.
//!
//! A document maps to flat rows: one [`NodeRow`] per node holding its
//! metadata and styled-text XML, side rows for every embedded object
//! ([`CodeboxRow`], [`TableRow`], [`ImageRow`]), hierarchy rows
//! ([`ChildRow`]) and [`BookmarkRow`]s. Object rows carry their own offsets
//! and are spliced back into the text on load in ascending offset order.
//!
//! [`Document::from_rows`] keeps node content in its stored form until it is
//! first accessed.

use std::collections::{HashMap, HashSet};

use bitflags::bitflags;
use tracing::{debug, warn};

use crate::codec::dom::{self, Element};
use crate::codec::xml::{
    NODE, TABLE, XmlOptions, content_from_element, push_table_rows, read_table, rich_text_to_xml,
    splice_objects,
};
use crate::error::Result;
use crate::model::{
    CodeBox, ContentBuffer, Document, EmbeddedObject, Image, ImageSource, Justification, Node,
    NodeId, NodeKind, ObjectKind, Table,
};

bitflags! {
    /// Object kinds present in a node, mirrored by the `has_*` columns.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct ObjectPresence: u8 {
        const CODEBOX = 0x01;
        const TABLE   = 0x02;
        /// Images, embedded files and anchors.
        const IMAGE   = 0x04;
    }
}

impl ObjectPresence {
    /// Presence flags of `buffer`'s objects.
    #[must_use]
    pub fn of(buffer: &ContentBuffer) -> Self {
        buffer
            .object_kinds()
            .fold(Self::empty(), |flags, kind| flags | Self::for_kind(kind))
    }

    const fn for_kind(kind: &ObjectKind) -> Self {
        match kind {
            ObjectKind::CodeBox(_) => Self::CODEBOX,
            ObjectKind::Table(_) => Self::TABLE,
            ObjectKind::Image(_) | ObjectKind::Anchor(_) => Self::IMAGE,
        }
    }
}

/// Node metadata and text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeRow {
    pub node_id: u64,
    pub name: String,
    /// Styled-text XML for rich nodes, raw text otherwise.
    pub txt: String,
    pub syntax: String,
    pub tags: String,
    pub is_ro: bool,
    pub is_richtxt: bool,
    pub has_codebox: bool,
    pub has_table: bool,
    pub has_image: bool,
    pub level: u32,
    pub ts_creation: i64,
    pub ts_lastsave: i64,
}

impl NodeRow {
    /// Presence flags from the `has_*` columns.
    #[must_use]
    pub fn presence(&self) -> ObjectPresence {
        let mut flags = ObjectPresence::empty();
        flags.set(ObjectPresence::CODEBOX, self.has_codebox);
        flags.set(ObjectPresence::TABLE, self.has_table);
        flags.set(ObjectPresence::IMAGE, self.has_image);
        flags
    }

    fn set_presence(&mut self, flags: ObjectPresence) {
        self.has_codebox = flags.contains(ObjectPresence::CODEBOX);
        self.has_table = flags.contains(ObjectPresence::TABLE);
        self.has_image = flags.contains(ObjectPresence::IMAGE);
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodeboxRow {
    pub node_id: u64,
    pub offset: usize,
    pub justification: String,
    pub txt: String,
    pub syntax: String,
    pub width: u32,
    pub height: u32,
    pub is_width_pix: bool,
    pub do_highl_bra: bool,
    pub do_show_linenum: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableRow {
    pub node_id: u64,
    pub offset: usize,
    pub justification: String,
    /// `<table><row><cell>..` matrix, header row last.
    pub txt: String,
    pub col_min: u32,
    pub col_max: u32,
}

/// Image, embedded file or anchor.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageRow {
    pub node_id: u64,
    pub offset: usize,
    pub justification: String,
    /// Anchor name; non-empty only for anchors.
    pub anchor: String,
    pub png: Vec<u8>,
    /// Embedded file name; non-empty only for embedded files.
    pub filename: String,
    pub link: String,
    pub time: f64,
}

/// Hierarchy row. `father_id` is 0 for top-level nodes; `sequence` starts at 1.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChildRow {
    pub node_id: u64,
    pub father_id: u64,
    pub sequence: u32,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BookmarkRow {
    pub node_id: u64,
    pub sequence: u32,
}

/// In-memory image of the relational tables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationalStore {
    pub nodes: Vec<NodeRow>,
    pub codeboxes: Vec<CodeboxRow>,
    pub tables: Vec<TableRow>,
    pub images: Vec<ImageRow>,
    pub children: Vec<ChildRow>,
    pub bookmarks: Vec<BookmarkRow>,
}

/// A node's content as stored, before it is parsed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StoredContent {
    pub txt: String,
    pub presence: ObjectPresence,
    pub codeboxes: Vec<CodeboxRow>,
    pub tables: Vec<TableRow>,
    pub images: Vec<ImageRow>,
}

fn is_bad_char(c: char) -> bool {
    matches!(c, '\u{00}'..='\u{08}' | '\u{0B}' | '\u{0C}' | '\u{0E}'..='\u{1F}')
}

fn justification_of(value: &str) -> Result<Justification> {
    if value.is_empty() {
        Ok(Justification::Left)
    } else {
        value.parse()
    }
}

// ============================================================================
// Object rows
// ============================================================================

/// Serialize a table matrix for [`TableRow::txt`].
pub fn table_to_xml(table: &Table) -> Result<String> {
    push_table_rows(Element::new(TABLE), table).to_xml(true)
}

/// Parse a [`TableRow`] into a table object.
pub fn table_from_row(row: &TableRow) -> Result<EmbeddedObject> {
    let root = dom::parse(&row.txt)?;
    let table = read_table(root.expect_name(TABLE)?, row.col_min, row.col_max)?;
    Ok(EmbeddedObject {
        offset: row.offset,
        justification: justification_of(&row.justification)?,
        kind: ObjectKind::Table(table),
    })
}

fn codebox_from_row(row: &CodeboxRow) -> Result<EmbeddedObject> {
    Ok(EmbeddedObject {
        offset: row.offset,
        justification: justification_of(&row.justification)?,
        kind: ObjectKind::CodeBox(CodeBox {
            text: row.txt.clone(),
            syntax: row.syntax.clone(),
            width: row.width,
            height: row.height,
            width_in_pixels: row.is_width_pix,
            highlight_brackets: row.do_highl_bra,
            show_line_numbers: row.do_show_linenum,
        }),
    })
}

fn image_from_row(row: &ImageRow) -> Result<EmbeddedObject> {
    let kind = if !row.anchor.is_empty() {
        ObjectKind::Anchor(row.anchor.clone())
    } else {
        let source = if row.filename.is_empty() {
            ImageSource::Png(row.png.clone())
        } else {
            ImageSource::File {
                name: row.filename.clone(),
                data: row.png.clone(),
                time: row.time,
            }
        };
        ObjectKind::Image(Image {
            source,
            link: Some(row.link.clone()).filter(|link| !link.is_empty()),
        })
    };
    Ok(EmbeddedObject {
        offset: row.offset,
        justification: justification_of(&row.justification)?,
        kind,
    })
}

fn push_object_rows(stored: &mut StoredContent, node_id: u64, object: &EmbeddedObject) -> Result<()> {
    let justification = object.justification.as_str().to_string();
    match &object.kind {
        ObjectKind::CodeBox(codebox) => stored.codeboxes.push(CodeboxRow {
            node_id,
            offset: object.offset,
            justification,
            txt: codebox.text.clone(),
            syntax: codebox.syntax.clone(),
            width: codebox.width,
            height: codebox.height,
            is_width_pix: codebox.width_in_pixels,
            do_highl_bra: codebox.highlight_brackets,
            do_show_linenum: codebox.show_line_numbers,
        }),
        ObjectKind::Table(table) => stored.tables.push(TableRow {
            node_id,
            offset: object.offset,
            justification,
            txt: table_to_xml(table)?,
            col_min: table.col_min,
            col_max: table.col_max,
        }),
        ObjectKind::Anchor(anchor) => stored.images.push(ImageRow {
            node_id,
            offset: object.offset,
            justification,
            anchor: anchor.clone(),
            ..ImageRow::default()
        }),
        ObjectKind::Image(image) => {
            let (png, filename, time) = match &image.source {
                ImageSource::Png(data) => (data.clone(), String::new(), 0.0),
                ImageSource::File { name, data, time } => (data.clone(), name.clone(), *time),
            };
            stored.images.push(ImageRow {
                node_id,
                offset: object.offset,
                justification,
                anchor: String::new(),
                png,
                filename,
                link: image.link.clone().unwrap_or_default(),
                time,
            });
        }
    }
    Ok(())
}

// ============================================================================
// Node content
// ============================================================================

/// Split a buffer into its stored form.
pub fn store_content(node_id: NodeId, buffer: &ContentBuffer, kind: &NodeKind) -> Result<StoredContent> {
    if !kind.is_rich() {
        return Ok(StoredContent {
            txt: buffer.text(),
            ..StoredContent::default()
        });
    }
    let mut stored = StoredContent {
        txt: rich_text_to_xml(buffer, &XmlOptions::default())?,
        presence: ObjectPresence::of(buffer),
        ..StoredContent::default()
    };
    for object in buffer.objects() {
        push_object_rows(&mut stored, node_id.0, object)?;
    }
    Ok(stored)
}

/// Rebuild a buffer from its stored form.
///
/// Object rows are consulted only for kinds flagged present.
pub fn load_content(stored: &StoredContent, kind: &NodeKind) -> Result<ContentBuffer> {
    if !kind.is_rich() {
        return ContentBuffer::from_text(&stored.txt);
    }
    let txt: String = stored.txt.chars().filter(|&c| !is_bad_char(c)).collect();
    let mut buffer = if txt.trim().is_empty() {
        ContentBuffer::new()
    } else {
        let root = dom::parse(&txt)?;
        content_from_element(root.expect_name(NODE)?, kind)?
    };

    let mut objects = Vec::new();
    if stored.presence.contains(ObjectPresence::CODEBOX) {
        for row in &stored.codeboxes {
            objects.push(codebox_from_row(row)?);
        }
    }
    if stored.presence.contains(ObjectPresence::TABLE) {
        for row in &stored.tables {
            objects.push(table_from_row(row)?);
        }
    }
    if stored.presence.contains(ObjectPresence::IMAGE) {
        for row in &stored.images {
            objects.push(image_from_row(row)?);
        }
    }
    splice_objects(&mut buffer, objects)?;
    Ok(buffer)
}

// ============================================================================
// Whole documents
// ============================================================================

impl Document {
    /// Flatten into relational rows.
    ///
    /// Nodes whose content was never loaded keep their stored rows as-is.
    pub fn to_rows(&self) -> Result<RelationalStore> {
        let mut store = RelationalStore::default();
        for id in self.walk() {
            let Some(node) = self.node(id) else {
                continue;
            };
            let stored = match node.stored() {
                Some(stored) => stored.clone(),
                None => store_content(id, &node.content_view(id), &node.kind)?,
            };
            let mut row = NodeRow {
                node_id: id.0,
                name: node.name.clone(),
                txt: stored.txt,
                syntax: node.kind.syntax().to_string(),
                tags: node.tags.clone(),
                is_ro: node.read_only,
                is_richtxt: node.kind.is_rich(),
                level: u32::try_from(self.level(id)).unwrap_or(u32::MAX),
                ts_creation: node.ts_creation,
                ts_lastsave: node.ts_lastsave,
                ..NodeRow::default()
            };
            row.set_presence(stored.presence);
            store.nodes.push(row);
            store.codeboxes.extend(stored.codeboxes);
            store.tables.extend(stored.tables);
            store.images.extend(stored.images);
            store.children.push(ChildRow {
                node_id: id.0,
                father_id: self.parent(id).map_or(0, |parent| parent.0),
                sequence: self
                    .sequence(id)
                    .and_then(|seq| u32::try_from(seq + 1).ok())
                    .unwrap_or(u32::MAX),
            });
        }
        for (idx, &id) in self.bookmarks().iter().enumerate() {
            store.bookmarks.push(BookmarkRow {
                node_id: id.0,
                sequence: u32::try_from(idx + 1).unwrap_or(u32::MAX),
            });
        }
        Ok(store)
    }

    /// Rebuild a document from relational rows.
    ///
    /// Content stays stored until first accessed through
    /// [`Document::content_mut`]. Nodes the root does not reach (no hierarchy
    /// row, a missing parent, a parent cycle) are placed at top level after
    /// the others, keeping the subtree below them.
    pub fn from_rows(store: &RelationalStore) -> Result<Self> {
        let mut codeboxes: HashMap<u64, Vec<CodeboxRow>> = HashMap::new();
        for row in &store.codeboxes {
            codeboxes.entry(row.node_id).or_default().push(row.clone());
        }
        let mut tables: HashMap<u64, Vec<TableRow>> = HashMap::new();
        for row in &store.tables {
            tables.entry(row.node_id).or_default().push(row.clone());
        }
        let mut images: HashMap<u64, Vec<ImageRow>> = HashMap::new();
        for row in &store.images {
            images.entry(row.node_id).or_default().push(row.clone());
        }
        let mut rows: HashMap<u64, &NodeRow> = HashMap::new();
        for row in &store.nodes {
            if rows.insert(row.node_id, row).is_some() {
                warn!(node = row.node_id, "duplicate node row, keeping the last one");
            }
        }

        let mut hierarchy: HashMap<u64, Vec<ChildRow>> = HashMap::new();
        for row in &store.children {
            hierarchy.entry(row.father_id).or_default().push(*row);
        }
        for siblings in hierarchy.values_mut() {
            siblings.sort_by_key(|row| row.sequence);
        }

        let mut doc = Self::new();
        let mut placed = HashSet::new();
        let mut pending: Vec<(u64, Option<NodeId>)> = hierarchy
            .get(&0)
            .map(|top| top.iter().rev().map(|row| (row.node_id, None)).collect())
            .unwrap_or_default();
        let linked: HashSet<u64> = store.children.iter().map(|row| row.node_id).collect();
        let mut stray = store.nodes.iter();

        loop {
            while let Some((node_id, parent)) = pending.pop() {
                if !placed.insert(node_id) {
                    debug!(node = node_id, "node already placed, skipping hierarchy row");
                    continue;
                }
                let Some(row) = rows.get(&node_id) else {
                    warn!(node = node_id, "hierarchy row without node row");
                    continue;
                };
                let kind = NodeKind::from_syntax(&row.syntax);
                let stored = StoredContent {
                    txt: row.txt.clone(),
                    presence: row.presence(),
                    codeboxes: codeboxes.remove(&node_id).unwrap_or_default(),
                    tables: tables.remove(&node_id).unwrap_or_default(),
                    images: images.remove(&node_id).unwrap_or_default(),
                };
                let mut node = Node::new(row.name.clone(), kind).with_stored(stored);
                node.tags = row.tags.clone();
                node.read_only = row.is_ro;
                node.ts_creation = row.ts_creation;
                node.ts_lastsave = row.ts_lastsave;
                let id = doc.add_node_with_id(NodeId(node_id), parent, node)?;
                if let Some(children) = hierarchy.get(&node_id) {
                    pending.extend(children.iter().rev().map(|row| (row.node_id, Some(id))));
                }
            }

            // Rows the root never reached: no hierarchy row, a missing
            // parent, or a parent cycle. They go to top level in row order.
            let Some(row) = stray.find(|row| !placed.contains(&row.node_id)) else {
                break;
            };
            if linked.contains(&row.node_id) {
                warn!(node = row.node_id, "node unreachable from the root, placing it at top level");
            } else {
                debug!(node = row.node_id, "node without hierarchy row placed at top level");
            }
            pending.push((row.node_id, None));
        }

        let mut marks = store.bookmarks.clone();
        marks.sort_by_key(|row| row.sequence);
        for mark in marks {
            if doc.bookmark(NodeId(mark.node_id)).is_err() {
                debug!(node = mark.node_id, "bookmark of unknown node dropped");
            }
        }
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttrKey;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_bad_chars_stripped() {
        let stored = StoredContent {
            txt: "<node><rich_text>a\u{01}b\tc\u{1F}</rich_text></node>".to_string(),
            ..StoredContent::default()
        };
        let buffer = load_content(&stored, &NodeKind::RichText).unwrap();
        assert_eq!(buffer.text(), "ab\tc");
    }

    #[test]
    fn test_presence_flags_gate_rows() {
        let mut buffer = ContentBuffer::from_text("ab").unwrap();
        buffer
            .insert_embedded_object(1, EmbeddedObject::new(0, ObjectKind::Anchor("x".into())))
            .unwrap();
        let mut stored = store_content(NodeId(1), &buffer, &NodeKind::RichText).unwrap();
        assert_eq!(stored.presence, ObjectPresence::IMAGE);
        assert_eq!(stored.images.len(), 1);
        assert_eq!(load_content(&stored, &NodeKind::RichText).unwrap(), buffer);

        stored.presence = ObjectPresence::empty();
        let text_only = load_content(&stored, &NodeKind::RichText).unwrap();
        assert!(text_only.objects().is_empty());
    }

    #[test]
    fn test_table_row_round_trip() {
        let table = Table::new(
            cells(&["name", "", "kind"]),
            vec![cells(&["a", "", "x"])],
            25,
            250,
        )
        .unwrap();
        let mut stored = StoredContent::default();
        let object = EmbeddedObject::new(4, ObjectKind::Table(table.clone()))
            .with_justification(Justification::Fill);
        push_object_rows(&mut stored, 9, &object).unwrap();
        let row = &stored.tables[0];
        assert_eq!(row.col_min, 25);
        assert_eq!(row.col_max, 250);
        assert_eq!(row.justification, "fill");
        let back = table_from_row(row).unwrap();
        assert_eq!(back, object);
    }

    #[test]
    fn test_plain_node_stores_raw_text() {
        let buffer = ContentBuffer::from_text("echo <hi>").unwrap();
        let stored = store_content(NodeId(3), &buffer, &NodeKind::Code("sh".into())).unwrap();
        assert_eq!(stored.txt, "echo <hi>");
        assert_eq!(
            load_content(&stored, &NodeKind::Code("sh".into())).unwrap(),
            buffer
        );
    }

    #[test]
    fn test_document_rows_round_trip() {
        let mut doc = Document::new();
        let mut rich = ContentBuffer::from_text("Hello").unwrap();
        rich.apply_attribute(0, 2, AttrKey::Underline, Some("single"))
            .unwrap();
        let a = doc
            .add_node(None, Node::new("a", NodeKind::RichText).with_content(rich.clone()))
            .unwrap();
        let b = doc.add_node(Some(a), Node::new("b", NodeKind::PlainText)).unwrap();
        let c = doc.add_node(Some(a), Node::new("c", NodeKind::RichText)).unwrap();
        doc.bookmark(c).unwrap();

        let store = doc.to_rows().unwrap();
        assert_eq!(store.nodes.len(), 3);
        assert_eq!(store.nodes[1].level, 1);
        assert_eq!(
            store.children[2],
            ChildRow {
                node_id: c.0,
                father_id: a.0,
                sequence: 2
            }
        );

        let mut back = Document::from_rows(&store).unwrap();
        assert_eq!(back.walk().collect::<Vec<_>>(), vec![a, b, c]);
        assert!(!back.node(a).unwrap().is_loaded());
        assert_eq!(back.content_mut(a).unwrap(), &rich);
        assert!(back.node(a).unwrap().is_loaded());
        assert_eq!(back.bookmarks(), &[c]);

        // Unloaded nodes pass their rows through unchanged.
        assert_eq!(back.to_rows().unwrap(), store);
    }

    #[test]
    fn test_corrupt_stored_node() {
        let store = RelationalStore {
            nodes: vec![
                NodeRow {
                    node_id: 1,
                    name: "broken".into(),
                    txt: "<node><rich_text>unterminated".into(),
                    syntax: "custom-colors".into(),
                    is_richtxt: true,
                    ..NodeRow::default()
                },
                NodeRow {
                    node_id: 2,
                    name: "fine".into(),
                    txt: "plain words".into(),
                    syntax: "plain-text".into(),
                    ..NodeRow::default()
                },
            ],
            children: vec![
                ChildRow {
                    node_id: 1,
                    father_id: 0,
                    sequence: 1,
                },
                ChildRow {
                    node_id: 2,
                    father_id: 0,
                    sequence: 2,
                },
            ],
            ..RelationalStore::default()
        };
        let mut doc = Document::from_rows(&store).unwrap();
        assert!(doc.content_mut(NodeId(1)).unwrap().is_empty());
        assert!(doc.node(NodeId(1)).unwrap().is_corrupt());
        assert_eq!(doc.content_mut(NodeId(2)).unwrap().text(), "plain words");
        assert!(!doc.node(NodeId(2)).unwrap().is_corrupt());
    }

    #[test]
    fn test_unreachable_nodes_land_at_top_level() {
        let node = |id: u64| NodeRow {
            node_id: id,
            name: format!("n{id}"),
            txt: format!("text {id}"),
            syntax: "plain-text".into(),
            ..NodeRow::default()
        };
        let link = |id: u64, father: u64| ChildRow {
            node_id: id,
            father_id: father,
            sequence: 1,
        };
        let store = RelationalStore {
            nodes: vec![node(1), node(2), node(3), node(4), node(5)],
            // 2 names a missing parent, 3 and 4 form a cycle, 5 has no row.
            children: vec![link(1, 0), link(2, 99), link(3, 4), link(4, 3)],
            ..RelationalStore::default()
        };
        let mut doc = Document::from_rows(&store).unwrap();

        assert_eq!(doc.len(), 5);
        assert_eq!(
            doc.children(None),
            &[NodeId(1), NodeId(2), NodeId(3), NodeId(5)]
        );
        assert_eq!(doc.children(Some(NodeId(3))), &[NodeId(4)]);
        assert_eq!(doc.content_mut(NodeId(4)).unwrap().text(), "text 4");
    }
}
