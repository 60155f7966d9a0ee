//! Property-based tests for the undo/redo state machine.

use notetree::history::{HistoryOptions, NodeState, StateMachine, restore};
use notetree::model::{AttrKey, ContentBuffer, NodeId, NodeKind};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

/// A styled single-paragraph buffer.
fn state() -> impl Strategy<Value = ContentBuffer> {
    ("[a-z ,.]{0,20}", any::<bool>()).prop_map(|(text, bold)| {
        let mut buffer = ContentBuffer::from_text(&text).unwrap();
        if bold && buffer.len() > 1 {
            buffer
                .apply_attribute(0, buffer.len() / 2, AttrKey::Weight, Some("heavy"))
                .unwrap();
        }
        buffer
    })
}

fn rich() -> NodeKind {
    NodeKind::RichText
}

// ============================================================================
// Undo/Redo Properties
// ============================================================================

proptest! {
    /// k undos followed by k redos land on the last captured state.
    #[test]
    fn undo_redo_symmetry(
        initial in state(),
        updates in prop::collection::vec(state(), 1..12),
        k_seed in any::<prop::sample::Index>(),
    ) {
        let kind = rich();
        let id = NodeId(1);
        let mut machine = StateMachine::new();
        machine.ensure_node(id, NodeState::new(&initial, &kind, 0)).unwrap();
        for (cursor, buffer) in updates.iter().enumerate() {
            machine.update_state(id, NodeState::new(buffer, &kind, cursor)).unwrap();
        }
        let last = updates.last().unwrap();
        let k = k_seed.index(updates.len() + 1);

        for _ in 0..k {
            let previous = machine.request_previous(id, NodeState::new(last, &kind, 0)).unwrap();
            prop_assert!(previous.is_some());
        }
        for _ in 0..k {
            prop_assert!(machine.request_next(id).is_some());
        }
        prop_assert!(!machine.can_redo(id));
        let current = machine.request_current(id).unwrap();
        prop_assert_eq!(&restore(current, &kind).unwrap(), last);
        prop_assert_eq!(current.cursor, updates.len() - 1);
    }

    /// After more than N updates exactly N snapshots remain, and the N-th
    /// undo from the end reports nothing to undo.
    #[test]
    fn ring_bound(n in 1usize..10, extra in 1usize..20) {
        let kind = rich();
        let id = NodeId(4);
        let mut machine = StateMachine::with_options(HistoryOptions { max_snapshots: n });
        let empty = ContentBuffer::new();
        machine.ensure_node(id, NodeState::new(&empty, &kind, 0)).unwrap();
        for step in 0..n + extra {
            let buffer = ContentBuffer::from_text(&format!("state {step}")).unwrap();
            machine.update_state(id, NodeState::new(&buffer, &kind, step)).unwrap();
        }
        prop_assert_eq!(machine.snapshot_count(id), n);

        for call in 1..=n {
            let previous = machine.request_previous(id, NodeState::new(&empty, &kind, 0)).unwrap();
            if call < n {
                prop_assert!(previous.is_some(), "undo {} of {} failed", call, n);
            } else {
                prop_assert!(previous.is_none());
            }
        }
        let oldest = restore(machine.request_current(id).unwrap(), &kind).unwrap();
        prop_assert_eq!(oldest.text(), format!("state {}", extra));
    }

    /// Typing words separated by punctuation captures one snapshot per pause.
    #[test]
    fn pauses_capture_words(words in prop::collection::vec("[a-z]{1,6}", 1..8)) {
        let kind = rich();
        let id = NodeId(9);
        let mut machine = StateMachine::new();
        let mut buffer = ContentBuffer::new();
        machine.ensure_node(id, NodeState::new(&buffer, &kind, 0)).unwrap();
        for word in &words {
            let end = buffer.len();
            buffer.insert_text(end, word, &Default::default()).unwrap();
            machine
                .text_variation(id, word, NodeState::new(&buffer, &kind, buffer.len()))
                .unwrap();
            let end = buffer.len();
            buffer.insert_text(end, " ", &Default::default()).unwrap();
            machine
                .text_variation(id, " ", NodeState::new(&buffer, &kind, buffer.len()))
                .unwrap();
        }
        prop_assert_eq!(machine.snapshot_count(id), words.len() + 1);
        prop_assert!(!machine.can_redo(id));
        let current = machine.request_current(id).unwrap();
        prop_assert_eq!(&restore(current, &kind).unwrap(), &buffer);
    }
}
