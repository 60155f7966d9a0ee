//! The document tree: an arena of nodes keyed by [`NodeId`].
//!
//! Parent/child relations are stored as ids, never as references. The
//! document exclusively owns every node and, through it, every buffer.

use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::model::NodeId;
use crate::model::buffer::ContentBuffer;
use crate::model::node::Node;

#[derive(Clone, Debug)]
struct Entry {
    node: Node,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree of notes.
#[derive(Clone, Debug, Default)]
pub struct Document {
    entries: HashMap<NodeId, Entry>,
    roots: Vec<NodeId>,
    bookmarks: Vec<NodeId>,
    next_id: u64,
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            next_id: 1,
            ..Self::default()
        }
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.entries.contains_key(&id)
    }

    fn entry(&self, id: NodeId) -> Result<&Entry> {
        self.entries.get(&id).ok_or(Error::UnknownNode(id))
    }

    fn siblings_mut(&mut self, parent: Option<NodeId>) -> Result<&mut Vec<NodeId>> {
        match parent {
            None => Ok(&mut self.roots),
            Some(pid) => self
                .entries
                .get_mut(&pid)
                .map(|entry| &mut entry.children)
                .ok_or(Error::UnknownNode(pid)),
        }
    }

    /// Append `node` as the last child of `parent` (or at top level).
    pub fn add_node(&mut self, parent: Option<NodeId>, node: Node) -> Result<NodeId> {
        let id = NodeId(self.next_id.max(1));
        self.add_node_with_id(id, parent, node)
    }

    /// Append `node` under a caller-chosen id.
    ///
    /// A duplicate id is replaced by a fresh one; the id actually used is
    /// returned.
    pub fn add_node_with_id(&mut self, id: NodeId, parent: Option<NodeId>, node: Node) -> Result<NodeId> {
        if let Some(pid) = parent {
            self.entry(pid)?;
        }
        let id = if self.entries.contains_key(&id) {
            let fresh = NodeId(self.next_id.max(1));
            debug!(duplicate = %id, fresh = %fresh, "renumbering duplicate node id");
            fresh
        } else {
            id
        };
        self.next_id = self.next_id.max(id.0 + 1);
        self.siblings_mut(parent)?.push(id);
        self.entries.insert(
            id,
            Entry {
                node,
                parent,
                children: Vec::new(),
            },
        );
        Ok(id)
    }

    /// Remove `id` and its subtree. Returns the removed ids in pre-order.
    pub fn remove_node(&mut self, id: NodeId) -> Result<Vec<NodeId>> {
        let parent = self.entry(id)?.parent;
        self.siblings_mut(parent)?.retain(|&sibling| sibling != id);
        let removed: Vec<NodeId> = self.walk_from(id).collect();
        for gone in &removed {
            self.entries.remove(gone);
        }
        self.bookmarks.retain(|mark| !removed.contains(mark));
        Ok(removed)
    }

    /// Move `id` under `new_parent` at `position` among its new siblings.
    ///
    /// Positions past the end append.
    pub fn move_node(&mut self, id: NodeId, new_parent: Option<NodeId>, position: usize) -> Result<()> {
        let old_parent = self.entry(id)?.parent;
        if let Some(pid) = new_parent {
            self.entry(pid)?;
            if self.walk_from(id).any(|descendant| descendant == pid) {
                return Err(Error::InvalidMove {
                    node: id,
                    parent: pid,
                });
            }
        }
        self.siblings_mut(old_parent)?.retain(|&sibling| sibling != id);
        let siblings = self.siblings_mut(new_parent)?;
        let position = position.min(siblings.len());
        siblings.insert(position, id);
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.parent = new_parent;
        }
        Ok(())
    }

    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.entries.get(&id).map(|entry| &entry.node)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.entries.get_mut(&id).map(|entry| &mut entry.node)
    }

    /// Content of `id`, loading stored content on first access.
    ///
    /// Content that fails to load is reported once and replaced by an empty
    /// buffer; the node is then flagged corrupt.
    pub fn content_mut(&mut self, id: NodeId) -> Result<&mut ContentBuffer> {
        let entry = self.entries.get_mut(&id).ok_or(Error::UnknownNode(id))?;
        Ok(entry.node.materialize(id))
    }

    /// Children of `parent`, or the top-level nodes for `None`.
    #[must_use]
    pub fn children(&self, parent: Option<NodeId>) -> &[NodeId] {
        match parent {
            None => &self.roots,
            Some(pid) => self
                .entries
                .get(&pid)
                .map_or(&[][..], |entry| &entry.children),
        }
    }

    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.entries.get(&id).and_then(|entry| entry.parent)
    }

    /// Position of `id` among its siblings.
    #[must_use]
    pub fn sequence(&self, id: NodeId) -> Option<usize> {
        let parent = self.entries.get(&id)?.parent;
        self.children(parent).iter().position(|&sibling| sibling == id)
    }

    /// Depth of `id`, 0 for top-level nodes.
    #[must_use]
    pub fn level(&self, id: NodeId) -> usize {
        std::iter::successors(self.parent(id), |&pid| self.parent(pid)).count()
    }

    /// All nodes, depth-first pre-order.
    #[must_use]
    pub fn walk(&self) -> Walk<'_> {
        Walk {
            doc: self,
            stack: self.roots.iter().rev().copied().collect(),
        }
    }

    fn walk_from(&self, id: NodeId) -> Walk<'_> {
        Walk {
            doc: self,
            stack: vec![id],
        }
    }

    /// Bookmarked nodes, in bookmark order.
    #[must_use]
    pub fn bookmarks(&self) -> &[NodeId] {
        &self.bookmarks
    }

    /// Append `id` to the bookmarks if not already there.
    pub fn bookmark(&mut self, id: NodeId) -> Result<()> {
        self.entry(id)?;
        if !self.bookmarks.contains(&id) {
            self.bookmarks.push(id);
        }
        Ok(())
    }

    /// Remove `id` from the bookmarks. Returns whether it was bookmarked.
    pub fn unbookmark(&mut self, id: NodeId) -> bool {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|&mark| mark != id);
        self.bookmarks.len() != before
    }
}

/// Depth-first pre-order walk over a [`Document`].
#[derive(Clone, Debug)]
pub struct Walk<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Walk<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(Some(id)).iter().rev().copied());
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::node::NodeKind;

    fn node(name: &str) -> Node {
        Node::new(name, NodeKind::RichText)
    }

    fn sample() -> (Document, [NodeId; 4]) {
        let mut doc = Document::new();
        let a = doc.add_node(None, node("a")).unwrap();
        let b = doc.add_node(Some(a), node("b")).unwrap();
        let c = doc.add_node(Some(b), node("c")).unwrap();
        let d = doc.add_node(None, node("d")).unwrap();
        (doc, [a, b, c, d])
    }

    #[test]
    fn test_tree_shape() {
        let (doc, [a, b, c, d]) = sample();
        assert_eq!(doc.len(), 4);
        assert_eq!(doc.children(None), &[a, d]);
        assert_eq!(doc.parent(c), Some(b));
        assert_eq!(doc.level(a), 0);
        assert_eq!(doc.level(c), 2);
        assert_eq!(doc.walk().collect::<Vec<_>>(), vec![a, b, c, d]);
        assert_eq!(doc.sequence(d), Some(1));
    }

    #[test]
    fn test_remove_subtree() {
        let (mut doc, [a, b, c, d]) = sample();
        doc.bookmark(c).unwrap();
        doc.bookmark(d).unwrap();
        let removed = doc.remove_node(b).unwrap();
        assert_eq!(removed, vec![b, c]);
        assert_eq!(doc.children(Some(a)), &[] as &[NodeId]);
        assert_eq!(doc.bookmarks(), &[d]);
        assert!(matches!(doc.remove_node(b), Err(Error::UnknownNode(_))));
    }

    #[test]
    fn test_move_node() {
        let (mut doc, [a, b, c, d]) = sample();
        doc.move_node(c, None, 0).unwrap();
        assert_eq!(doc.children(None), &[c, a, d]);
        assert_eq!(doc.level(c), 0);
        doc.move_node(d, Some(a), 0).unwrap();
        assert_eq!(doc.children(Some(a)), &[d, b]);
        assert!(matches!(
            doc.move_node(a, Some(b), 0),
            Err(Error::InvalidMove { .. })
        ));
    }

    #[test]
    fn test_duplicate_id_is_renumbered() {
        let mut doc = Document::new();
        let first = doc.add_node_with_id(NodeId(7), None, node("x")).unwrap();
        let second = doc.add_node_with_id(NodeId(7), None, node("y")).unwrap();
        assert_eq!(first, NodeId(7));
        assert_eq!(second, NodeId(8));
        assert_eq!(doc.add_node(None, node("z")).unwrap(), NodeId(9));
    }

    #[test]
    fn test_bookmarks() {
        let (mut doc, [a, _, _, d]) = sample();
        doc.bookmark(d).unwrap();
        doc.bookmark(a).unwrap();
        doc.bookmark(d).unwrap();
        assert_eq!(doc.bookmarks(), &[d, a]);
        assert!(doc.unbookmark(d));
        assert!(!doc.unbookmark(d));
        assert!(doc.bookmark(NodeId(99)).is_err());
    }
}
