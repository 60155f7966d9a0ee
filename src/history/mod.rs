//! Per-node undo/redo history.
//!
//! Each node touched in a session owns a bounded ring of [`Snapshot`]s, a
//! current index and an [`Indicator`] telling how far the live buffer has
//! moved past the current snapshot. Edits are coalesced: a run of typing
//! becomes one snapshot when the user pauses on a non-word character.
//!
//! # Example
//!
//! ```
//! use notetree::history::{NodeState, StateMachine, restore};
//! use notetree::model::{AttributeSet, ContentBuffer, NodeId, NodeKind};
//!
//! let kind = NodeKind::RichText;
//! let mut buffer = ContentBuffer::new();
//! let mut machine = StateMachine::new();
//! let id = NodeId(1);
//! machine.ensure_node(id, NodeState::new(&buffer, &kind, 0)).unwrap();
//!
//! buffer.insert_text(0, "hello", &AttributeSet::new()).unwrap();
//! machine.text_variation(id, "hello", NodeState::new(&buffer, &kind, 5)).unwrap();
//!
//! let previous = machine.request_previous(id, NodeState::new(&buffer, &kind, 5)).unwrap();
//! let restored = restore(previous.unwrap(), &kind).unwrap();
//! assert!(restored.is_empty());
//! ```

mod visited;

pub use visited::VisitHistory;

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::codec::xml::{XmlOptions, content_from_xml, rich_text_to_xml, splice_objects};
use crate::error::Result;
use crate::model::{ContentBuffer, EmbeddedObject, NodeId, NodeKind};

/// Default ring size.
pub const DEFAULT_MAX_SNAPSHOTS: usize = 30;

/// History configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryOptions {
    /// Snapshots kept per node; the oldest are evicted beyond this.
    pub max_snapshots: usize,
}

impl Default for HistoryOptions {
    fn default() -> Self {
        Self {
            max_snapshots: DEFAULT_MAX_SNAPSHOTS,
        }
    }
}

/// How far the live buffer is ahead of the current snapshot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Indicator {
    /// The current snapshot matches the buffer.
    #[default]
    Saved,
    /// Only non-word characters changed.
    TrivialAhead,
    /// Word characters changed.
    SignificantAhead,
}

/// Captured node content.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Styled-text XML for rich nodes, raw text otherwise.
    pub xml: String,
    /// Embedded objects at their buffer offsets.
    pub objects: Vec<EmbeddedObject>,
    /// Cursor offset at capture time.
    pub cursor: usize,
}

impl Snapshot {
    /// Capture `buffer` with the cursor at `cursor`.
    pub fn capture(buffer: &ContentBuffer, kind: &NodeKind, cursor: usize) -> Result<Self> {
        let snapshot = if kind.is_rich() {
            Self {
                xml: rich_text_to_xml(buffer, &XmlOptions { declaration: false })?,
                objects: buffer.objects().to_vec(),
                cursor,
            }
        } else {
            Self {
                xml: buffer.text(),
                objects: Vec::new(),
                cursor,
            }
        };
        trace!(
            bytes = snapshot.xml.len(),
            objects = snapshot.objects.len(),
            cursor,
            "captured snapshot"
        );
        Ok(snapshot)
    }
}

/// Rebuild the buffer a snapshot was captured from.
pub fn restore(snapshot: &Snapshot, kind: &NodeKind) -> Result<ContentBuffer> {
    if !kind.is_rich() {
        return ContentBuffer::from_text(&snapshot.xml);
    }
    let mut buffer = content_from_xml(&snapshot.xml, kind)?;
    splice_objects(&mut buffer, snapshot.objects.clone())?;
    Ok(buffer)
}

/// The live state of a node, borrowed for a capture.
#[derive(Clone, Copy, Debug)]
pub struct NodeState<'a> {
    pub buffer: &'a ContentBuffer,
    pub kind: &'a NodeKind,
    pub cursor: usize,
}

impl<'a> NodeState<'a> {
    #[must_use]
    pub fn new(buffer: &'a ContentBuffer, kind: &'a NodeKind, cursor: usize) -> Self {
        Self {
            buffer,
            kind,
            cursor,
        }
    }

    fn capture(self) -> Result<Snapshot> {
        Snapshot::capture(self.buffer, self.kind, self.cursor)
    }
}

#[derive(Clone, Debug)]
struct NodeHistory {
    ring: Vec<Snapshot>,
    current: usize,
    indicator: Indicator,
}

/// Whether `changed` holds a word character.
fn is_significant(changed: &str) -> bool {
    changed.chars().any(|c| c.is_alphanumeric() || c == '_')
}

/// Undo/redo state machine over all nodes of a session.
#[derive(Clone, Debug, Default)]
pub struct StateMachine {
    options: HistoryOptions,
    nodes: HashMap<NodeId, NodeHistory>,
    external_depth: usize,
}

impl StateMachine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_options(options: HistoryOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn options(&self) -> HistoryOptions {
        self.options
    }

    fn history_mut(&mut self, id: NodeId, op: &'static str) -> Option<&mut NodeHistory> {
        let found = self.nodes.get_mut(&id);
        debug_assert!(found.is_some(), "{op} on node {id} without history");
        if found.is_none() {
            warn!(node = %id, op, "no history for node");
        }
        found
    }

    /// Start tracking `id` with its current content. Returns `true` if the
    /// node was not tracked yet.
    pub fn ensure_node(&mut self, id: NodeId, state: NodeState<'_>) -> Result<bool> {
        if self.nodes.contains_key(&id) {
            return Ok(false);
        }
        // The first snapshot always starts with the cursor at the top.
        let snapshot = state.capture()?;
        self.nodes.insert(
            id,
            NodeHistory {
                ring: vec![Snapshot { cursor: 0, ..snapshot }],
                current: 0,
                indicator: Indicator::Saved,
            },
        );
        debug!(node = %id, "history started");
        Ok(true)
    }

    /// Whether `id` has a history.
    #[must_use]
    pub fn is_tracked(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Record that `changed` was inserted or removed in `id`.
    ///
    /// A word character marks the buffer significantly ahead. A non-word
    /// change after significant edits captures a snapshot. Ignored inside an
    /// external-mutation scope.
    pub fn text_variation(&mut self, id: NodeId, changed: &str, state: NodeState<'_>) -> Result<()> {
        if self.external_depth > 0 {
            trace!(node = %id, "text variation during external mutation ignored");
            return Ok(());
        }
        let significant = is_significant(changed);
        let Some(history) = self.history_mut(id, "text_variation") else {
            return Ok(());
        };
        match (history.indicator, significant) {
            (Indicator::SignificantAhead, false) => {
                debug!(node = %id, "pause after significant edit");
                self.update_state(id, state)?;
            }
            (Indicator::SignificantAhead, true) => {}
            (_, true) => {
                history.indicator = Indicator::SignificantAhead;
                debug!(node = %id, "indicator -> significant");
            }
            (_, false) => {
                history.indicator = Indicator::TrivialAhead;
                debug!(node = %id, "indicator -> trivial");
            }
        }
        Ok(())
    }

    /// Capture the live state as the newest snapshot, dropping any redo tail.
    pub fn update_state(&mut self, id: NodeId, state: NodeState<'_>) -> Result<()> {
        let max = self.options.max_snapshots.max(1);
        if !self.nodes.contains_key(&id) {
            let _ = self.history_mut(id, "update_state");
            return Ok(());
        }
        let snapshot = state.capture()?;
        let Some(history) = self.nodes.get_mut(&id) else {
            return Ok(());
        };
        history.ring.truncate(history.current + 1);
        history.ring.push(snapshot);
        if history.ring.len() > max {
            let excess = history.ring.len() - max;
            history.ring.drain(..excess);
        }
        history.current = history.ring.len() - 1;
        history.indicator = Indicator::Saved;
        debug!(node = %id, snapshots = history.ring.len(), "state updated");
        Ok(())
    }

    /// Step back one snapshot.
    ///
    /// Pending edits are captured first, so they can be redone. Returns
    /// `None` when there is nothing to undo.
    pub fn request_previous(&mut self, id: NodeId, state: NodeState<'_>) -> Result<Option<&Snapshot>> {
        let Some(history) = self.history_mut(id, "request_previous") else {
            return Ok(None);
        };
        if history.indicator != Indicator::Saved {
            self.update_state(id, state)?;
        }
        let Some(history) = self.nodes.get_mut(&id) else {
            return Ok(None);
        };
        if history.current == 0 {
            debug!(node = %id, "nothing to undo");
            return Ok(None);
        }
        history.current -= 1;
        debug!(node = %id, index = history.current, "undo");
        Ok(history.ring.get(history.current))
    }

    /// Step forward one snapshot. Only possible when no edits are pending.
    pub fn request_next(&mut self, id: NodeId) -> Option<&Snapshot> {
        let history = self.history_mut(id, "request_next")?;
        if history.indicator != Indicator::Saved || history.current + 1 >= history.ring.len() {
            debug!(node = %id, "nothing to redo");
            return None;
        }
        history.current += 1;
        debug!(node = %id, index = history.current, "redo");
        history.ring.get(history.current)
    }

    /// The current snapshot of `id`.
    #[must_use]
    pub fn request_current(&self, id: NodeId) -> Option<&Snapshot> {
        let history = self.nodes.get(&id)?;
        history.ring.get(history.current)
    }

    /// Store the cursor in the current snapshot. Untracked nodes are ignored.
    pub fn update_cursor(&mut self, id: NodeId, cursor: usize) {
        if let Some(history) = self.nodes.get_mut(&id) {
            let current = history.current;
            if let Some(snapshot) = history.ring.get_mut(current) {
                snapshot.cursor = cursor;
            }
        }
    }

    /// Drop the history of a removed node.
    pub fn forget_node(&mut self, id: NodeId) -> bool {
        self.nodes.remove(&id).is_some()
    }

    /// Drop every history.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.external_depth = 0;
    }

    /// Whether undo would change the buffer.
    #[must_use]
    pub fn can_undo(&self, id: NodeId) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|h| h.current > 0 || h.indicator != Indicator::Saved)
    }

    /// Whether redo would change the buffer.
    #[must_use]
    pub fn can_redo(&self, id: NodeId) -> bool {
        self.nodes
            .get(&id)
            .is_some_and(|h| h.indicator == Indicator::Saved && h.current + 1 < h.ring.len())
    }

    #[must_use]
    pub fn indicator(&self, id: NodeId) -> Option<Indicator> {
        self.nodes.get(&id).map(|h| h.indicator)
    }

    /// Number of snapshots held for `id`.
    #[must_use]
    pub fn snapshot_count(&self, id: NodeId) -> usize {
        self.nodes.get(&id).map_or(0, |h| h.ring.len())
    }

    /// Open a scope of programmatic mutations (undo replay, search and
    /// replace) whose text variations must not be recorded.
    pub fn begin_external(&mut self) {
        self.external_depth += 1;
    }

    /// Close a scope opened by [`StateMachine::begin_external`].
    pub fn end_external(&mut self) {
        self.external_depth = self.external_depth.saturating_sub(1);
    }

    #[must_use]
    pub fn in_external(&self) -> bool {
        self.external_depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttrKey, ObjectKind};

    fn typed(text: &str) -> ContentBuffer {
        ContentBuffer::from_text(text).unwrap()
    }

    fn tracked(machine: &mut StateMachine, buffer: &ContentBuffer) -> NodeId {
        let id = NodeId(7);
        machine
            .ensure_node(id, NodeState::new(buffer, &NodeKind::RichText, 0))
            .unwrap();
        id
    }

    #[test]
    fn test_ensure_node_once() {
        let kind = NodeKind::RichText;
        let buffer = typed("abc");
        let mut machine = StateMachine::new();
        assert!(machine.ensure_node(NodeId(1), NodeState::new(&buffer, &kind, 2)).unwrap());
        assert!(!machine.ensure_node(NodeId(1), NodeState::new(&buffer, &kind, 2)).unwrap());
        assert_eq!(machine.snapshot_count(NodeId(1)), 1);
        assert_eq!(machine.request_current(NodeId(1)).unwrap().cursor, 0);
        assert!(!machine.can_undo(NodeId(1)));
    }

    #[test]
    fn test_indicator_transitions() {
        let kind = NodeKind::RichText;
        let mut machine = StateMachine::new();
        let buffer = typed("");
        let id = tracked(&mut machine, &buffer);

        machine.text_variation(id, " ", NodeState::new(&buffer, &kind, 0)).unwrap();
        assert_eq!(machine.indicator(id), Some(Indicator::TrivialAhead));
        machine.text_variation(id, "w", NodeState::new(&buffer, &kind, 0)).unwrap();
        assert_eq!(machine.indicator(id), Some(Indicator::SignificantAhead));
        machine.text_variation(id, "_", NodeState::new(&buffer, &kind, 0)).unwrap();
        assert_eq!(machine.indicator(id), Some(Indicator::SignificantAhead));
        assert_eq!(machine.snapshot_count(id), 1);

        let buffer = typed(" w_.");
        machine.text_variation(id, ".", NodeState::new(&buffer, &kind, 4)).unwrap();
        assert_eq!(machine.indicator(id), Some(Indicator::Saved));
        assert_eq!(machine.snapshot_count(id), 2);
        assert_eq!(machine.request_current(id).unwrap().cursor, 4);
    }

    #[test]
    fn test_external_scope_suppresses_variations() {
        let kind = NodeKind::RichText;
        let mut machine = StateMachine::new();
        let buffer = typed("");
        let id = tracked(&mut machine, &buffer);
        machine.begin_external();
        machine.begin_external();
        machine.text_variation(id, "abc", NodeState::new(&buffer, &kind, 0)).unwrap();
        machine.end_external();
        assert!(machine.in_external());
        machine.end_external();
        assert_eq!(machine.indicator(id), Some(Indicator::Saved));
        machine.text_variation(id, "abc", NodeState::new(&buffer, &kind, 0)).unwrap();
        assert_eq!(machine.indicator(id), Some(Indicator::SignificantAhead));
    }

    #[test]
    fn test_undo_captures_pending_edit() {
        let kind = NodeKind::RichText;
        let mut machine = StateMachine::new();
        let id = tracked(&mut machine, &typed("a"));
        let edited = typed("ab");
        machine.text_variation(id, "b", NodeState::new(&edited, &kind, 2)).unwrap();

        let previous = machine
            .request_previous(id, NodeState::new(&edited, &kind, 2))
            .unwrap()
            .cloned()
            .unwrap();
        assert_eq!(restore(&previous, &kind).unwrap().text(), "a");
        assert!(machine.can_redo(id));
        let next = machine.request_next(id).unwrap();
        assert_eq!(restore(next, &kind).unwrap().text(), "ab");
        assert!(machine.request_next(id).is_none());
    }

    #[test]
    fn test_redo_blocked_by_pending_edit() {
        let kind = NodeKind::RichText;
        let mut machine = StateMachine::new();
        let base = typed("a");
        let id = tracked(&mut machine, &base);
        machine.update_state(id, NodeState::new(&typed("ab"), &kind, 2)).unwrap();
        machine.request_previous(id, NodeState::new(&typed("ab"), &kind, 2)).unwrap();
        machine.text_variation(id, "x", NodeState::new(&base, &kind, 1)).unwrap();
        assert!(!machine.can_redo(id));
        assert!(machine.request_next(id).is_none());

        // A new state drops the redo tail.
        machine.update_state(id, NodeState::new(&typed("ax"), &kind, 2)).unwrap();
        assert_eq!(machine.snapshot_count(id), 2);
    }

    #[test]
    fn test_ring_eviction() {
        let kind = NodeKind::RichText;
        let mut machine = StateMachine::with_options(HistoryOptions { max_snapshots: 3 });
        let id = tracked(&mut machine, &typed(""));
        for n in 0..5 {
            let buffer = typed(&"x".repeat(n + 1));
            machine.update_state(id, NodeState::new(&buffer, &kind, n)).unwrap();
        }
        assert_eq!(machine.snapshot_count(id), 3);
        let state = typed("xxxxx");
        let mut steps = 0;
        while machine
            .request_previous(id, NodeState::new(&state, &kind, 0))
            .unwrap()
            .is_some()
        {
            steps += 1;
        }
        assert_eq!(steps, 2);
        assert_eq!(restore(machine.request_current(id).unwrap(), &kind).unwrap().text(), "xxx");
    }

    #[test]
    fn test_snapshot_keeps_styles_and_objects() {
        let kind = NodeKind::RichText;
        let mut buffer = typed("bold move");
        buffer.apply_attribute(0, 4, AttrKey::Weight, Some("heavy")).unwrap();
        buffer
            .insert_embedded_object(4, EmbeddedObject::new(0, ObjectKind::Anchor("a".into())))
            .unwrap();
        let snapshot = Snapshot::capture(&buffer, &kind, 3).unwrap();
        assert!(!snapshot.xml.contains("anchor"));
        assert_eq!(snapshot.objects.len(), 1);
        assert_eq!(restore(&snapshot, &kind).unwrap(), buffer);
    }

    #[test]
    fn test_plain_snapshot_is_raw_text() {
        let kind = NodeKind::Code("rust".into());
        let buffer = ContentBuffer::from_text("fn main() {}").unwrap();
        let snapshot = Snapshot::capture(&buffer, &kind, 0).unwrap();
        assert_eq!(snapshot.xml, "fn main() {}");
        assert_eq!(restore(&snapshot, &kind).unwrap(), buffer);
    }

    #[test]
    fn test_update_cursor_and_forget() {
        let mut machine = StateMachine::new();
        let id = tracked(&mut machine, &typed("abc"));
        machine.update_cursor(id, 2);
        machine.update_cursor(NodeId(99), 5);
        assert_eq!(machine.request_current(id).unwrap().cursor, 2);
        assert!(machine.forget_node(id));
        assert!(!machine.is_tracked(id));
        assert!(!machine.forget_node(id));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "without history")]
    fn test_unknown_node_asserts() {
        let mut machine = StateMachine::new();
        let _ = machine.request_next(NodeId(3));
    }

    #[test]
    fn test_significance() {
        assert!(is_significant("a"));
        assert!(is_significant("_"));
        assert!(is_significant("é"));
        assert!(is_significant("7"));
        assert!(!is_significant(" .,\n"));
        assert!(!is_significant(""));
    }
}
