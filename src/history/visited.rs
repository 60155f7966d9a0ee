//! Back/forward trail of selected nodes.

use tracing::debug;

use crate::model::NodeId;

/// Navigation trail over node selections.
///
/// Selecting a node after going back drops the forward tail, like a web
/// browser. A jump returned by [`VisitHistory::back`] or
/// [`VisitHistory::forward`] is pending until the host selects that node;
/// that selection is not recorded again.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisitHistory {
    trail: Vec<NodeId>,
    index: usize,
    pending_jump: Option<NodeId>,
}

impl VisitHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `id` was selected. Returns whether it was recorded.
    pub fn visit(&mut self, id: NodeId) -> bool {
        if self.pending_jump.take() == Some(id) {
            return false;
        }
        if !self.trail.is_empty() {
            self.trail.truncate(self.index + 1);
        }
        self.trail.push(id);
        self.index = self.trail.len() - 1;
        true
    }

    /// Step back. The returned node is the selection to apply.
    pub fn back(&mut self) -> Option<NodeId> {
        if self.index == 0 || self.trail.is_empty() {
            return None;
        }
        self.index -= 1;
        self.jump()
    }

    /// Step forward. The returned node is the selection to apply.
    pub fn forward(&mut self) -> Option<NodeId> {
        if self.index + 1 >= self.trail.len() {
            return None;
        }
        self.index += 1;
        self.jump()
    }

    fn jump(&mut self) -> Option<NodeId> {
        let target = self.trail.get(self.index).copied();
        self.pending_jump = target;
        debug!(index = self.index, target = ?target, "visit jump");
        target
    }

    /// Drop the most recent entry.
    pub fn forget_last(&mut self) -> Option<NodeId> {
        let last = self.trail.pop();
        self.index = self.index.min(self.trail.len().saturating_sub(1));
        last
    }

    /// Remove every entry of a deleted node.
    pub fn purge(&mut self, id: NodeId) {
        let before = self
            .trail
            .iter()
            .take(self.index + 1)
            .filter(|&&entry| entry != id)
            .count();
        self.trail.retain(|&entry| entry != id);
        self.index = before.saturating_sub(1);
        if self.pending_jump == Some(id) {
            self.pending_jump = None;
        }
    }

    /// Current selection in the trail.
    #[must_use]
    pub fn current(&self) -> Option<NodeId> {
        self.trail.get(self.index).copied()
    }

    #[must_use]
    pub fn entries(&self) -> &[NodeId] {
        &self.trail
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.trail.len()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u64]) -> Vec<NodeId> {
        values.iter().copied().map(NodeId).collect()
    }

    fn visited(values: &[u64]) -> VisitHistory {
        let mut history = VisitHistory::new();
        for &value in values {
            history.visit(NodeId(value));
        }
        history
    }

    #[test]
    fn test_back_and_forward() {
        let mut history = visited(&[1, 2, 3]);
        assert_eq!(history.back(), Some(NodeId(2)));
        assert!(!history.visit(NodeId(2)));
        assert_eq!(history.back(), Some(NodeId(1)));
        assert!(!history.visit(NodeId(1)));
        assert_eq!(history.back(), None);
        assert_eq!(history.forward(), Some(NodeId(2)));
        assert!(!history.visit(NodeId(2)));
        assert_eq!(history.entries(), ids(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_visit_truncates_forward_tail() {
        let mut history = visited(&[1, 2, 3]);
        history.back();
        history.visit(NodeId(2));
        history.back();
        history.visit(NodeId(1));
        assert!(history.visit(NodeId(4)));
        assert_eq!(history.entries(), ids(&[1, 4]).as_slice());
        assert!(!history.can_go_forward());
        assert_eq!(history.current(), Some(NodeId(4)));
    }

    #[test]
    fn test_jump_to_other_node_is_recorded() {
        let mut history = visited(&[1, 2]);
        assert_eq!(history.back(), Some(NodeId(1)));
        assert!(history.visit(NodeId(5)));
        assert_eq!(history.entries(), ids(&[1, 5]).as_slice());
    }

    #[test]
    fn test_forget_last() {
        let mut history = visited(&[1, 2]);
        assert_eq!(history.forget_last(), Some(NodeId(2)));
        assert_eq!(history.current(), Some(NodeId(1)));
        assert_eq!(history.forget_last(), Some(NodeId(1)));
        assert_eq!(history.current(), None);
        assert_eq!(history.forget_last(), None);
    }

    #[test]
    fn test_purge() {
        let mut history = visited(&[1, 2, 1, 3, 4]);
        history.back();
        history.visit(NodeId(3));
        history.purge(NodeId(1));
        assert_eq!(history.entries(), ids(&[2, 3, 4]).as_slice());
        assert_eq!(history.current(), Some(NodeId(3)));
        assert!(history.can_go_forward());
    }
}
