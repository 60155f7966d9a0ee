//! Tree nodes and their content kinds.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::codec::relational::{self, StoredContent};
use crate::event::report_corrupt_node;
use crate::model::NodeId;
use crate::model::buffer::ContentBuffer;

/// Syntax tag of rich-text nodes.
pub const RICH_TEXT_SYNTAX: &str = "custom-colors";
/// Syntax tag of plain-text nodes.
pub const PLAIN_TEXT_SYNTAX: &str = "plain-text";

/// What a node's content holds.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Styled text with embedded objects.
    #[default]
    RichText,
    /// Unstyled text.
    PlainText,
    /// Source code in the named language.
    Code(String),
}

impl NodeKind {
    /// Parse a syntax tag.
    #[must_use]
    pub fn from_syntax(syntax: &str) -> Self {
        match syntax {
            RICH_TEXT_SYNTAX => Self::RichText,
            PLAIN_TEXT_SYNTAX | "" => Self::PlainText,
            lang => Self::Code(lang.to_string()),
        }
    }

    /// The syntax tag of this kind.
    #[must_use]
    pub fn syntax(&self) -> &str {
        match self {
            Self::RichText => RICH_TEXT_SYNTAX,
            Self::PlainText => PLAIN_TEXT_SYNTAX,
            Self::Code(lang) => lang,
        }
    }

    /// Only rich-text nodes carry spans and objects.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        matches!(self, Self::RichText)
    }
}

/// Set once a node's stored content failed to load and was reported.
#[derive(Debug, Default)]
struct CorruptFlag(AtomicBool);

impl CorruptFlag {
    fn get(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Returns the previous value.
    fn raise(&self) -> bool {
        self.0.swap(true, Ordering::Relaxed)
    }
}

impl Clone for CorruptFlag {
    fn clone(&self) -> Self {
        Self(AtomicBool::new(self.get()))
    }
}

/// One entry of the document tree.
#[derive(Clone, Debug, Default)]
pub struct Node {
    pub name: String,
    pub kind: NodeKind,
    pub tags: String,
    pub read_only: bool,
    /// Creation time, seconds since the epoch.
    pub ts_creation: i64,
    /// Last save time, seconds since the epoch.
    pub ts_lastsave: i64,
    content: ContentBuffer,
    /// Relational form not yet loaded into `content`.
    stored: Option<StoredContent>,
    corrupt: CorruptFlag,
}

impl Node {
    /// Create an empty node.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Builder-style content setter.
    #[must_use]
    pub fn with_content(mut self, buffer: ContentBuffer) -> Self {
        self.set_content(buffer);
        self
    }

    /// Builder-style stored content setter; the content loads on first access.
    #[must_use]
    pub fn with_stored(mut self, stored: StoredContent) -> Self {
        self.content = ContentBuffer::new();
        self.stored = Some(stored);
        self
    }

    /// Content if already loaded.
    #[must_use]
    pub fn content(&self) -> Option<&ContentBuffer> {
        match self.stored {
            Some(_) => None,
            None => Some(&self.content),
        }
    }

    /// Stored rows if the content has not been loaded yet.
    #[must_use]
    pub fn stored(&self) -> Option<&StoredContent> {
        self.stored.as_ref()
    }

    /// Replace the content.
    pub fn set_content(&mut self, buffer: ContentBuffer) {
        self.content = buffer;
        self.stored = None;
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.stored.is_none()
    }

    /// Whether the content failed to load.
    #[must_use]
    pub fn is_corrupt(&self) -> bool {
        self.corrupt.get()
    }

    pub(crate) fn mark_corrupt(&self) {
        self.corrupt.raise();
    }

    /// Load stored content, degrading to an empty buffer on failure.
    pub(crate) fn materialize(&mut self, id: NodeId) -> &mut ContentBuffer {
        if let Some(stored) = self.stored.take() {
            self.content = self.load_or_report(id, &stored);
        }
        &mut self.content
    }

    /// Content for serialization without caching; corrupt content reads as empty.
    pub(crate) fn content_view(&self, id: NodeId) -> Cow<'_, ContentBuffer> {
        match &self.stored {
            Some(stored) => Cow::Owned(self.load_or_report(id, stored)),
            None => Cow::Borrowed(&self.content),
        }
    }

    fn load_or_report(&self, id: NodeId, stored: &StoredContent) -> ContentBuffer {
        match relational::load_content(stored, &self.kind) {
            Ok(buffer) => buffer,
            Err(err) => {
                if !self.corrupt.raise() {
                    report_corrupt_node(id, &err.to_string());
                }
                ContentBuffer::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_syntax_round_trip() {
        for kind in [
            NodeKind::RichText,
            NodeKind::PlainText,
            NodeKind::Code("python3".to_string()),
        ] {
            assert_eq!(NodeKind::from_syntax(kind.syntax()), kind);
        }
        assert!(NodeKind::RichText.is_rich());
        assert!(!NodeKind::Code("sh".to_string()).is_rich());
    }

    #[test]
    fn test_new_node_is_loaded_and_empty() {
        let node = Node::new("notes", NodeKind::PlainText);
        assert!(node.is_loaded());
        assert!(node.content().is_some_and(ContentBuffer::is_empty));
        assert!(!node.is_corrupt());
    }

    #[test]
    fn test_corrupt_stored_content_flags_on_view() {
        let node = Node::new("broken", NodeKind::RichText).with_stored(StoredContent {
            txt: "<node><rich_text>lost words".to_string(),
            ..StoredContent::default()
        });
        assert!(!node.is_corrupt());
        assert!(node.content_view(NodeId(7)).is_empty());
        assert!(node.is_corrupt());
        assert!(node.stored().is_some());

        let mut copy = node.clone();
        assert!(copy.is_corrupt());
        assert!(copy.materialize(NodeId(7)).is_empty());
        assert!(copy.is_loaded());
    }
}
