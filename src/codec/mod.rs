//! Lossless persistence codecs.
//!
//! - [`xml`]: node content and whole documents as XML
//! - [`relational`]: documents as flat table rows, with lazy node content
//!
//! Both share the owned element tree in [`dom`].

pub mod dom;
pub mod relational;
pub mod xml;

pub use relational::{
    BookmarkRow, ChildRow, CodeboxRow, ImageRow, NodeRow, ObjectPresence, RelationalStore,
    StoredContent, TableRow,
};
pub use xml::{
    XmlOptions, content_from_xml, content_to_xml, document_from_xml, document_to_xml,
    rich_text_to_xml, selection_to_xml,
};
