//! Rich-text document model.
//!
//! A [`Document`] is a tree of [`Node`]s; each node owns one
//! [`ContentBuffer`] holding text, [`Span`]s and [`EmbeddedObject`]s.

mod attrs;
mod buffer;
mod document;
mod node;
mod object;
mod rope;

use std::fmt;

pub use attrs::{AttrKey, AttributeSet, Justification, LinkTarget, Scale};
pub use buffer::{ContentBuffer, Piece, Span};
pub use document::{Document, Walk};
pub use node::{Node, NodeKind, PLAIN_TEXT_SYNTAX, RICH_TEXT_SYNTAX};
pub use object::{CodeBox, EmbeddedObject, Image, ImageSource, ObjectKind, Table};
pub use rope::OBJECT_SLOT;

/// Identifier of a node, unique within a document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
