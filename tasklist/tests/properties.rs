//! Property tests for the task list reducer
//!
//! Drives the reducer with arbitrary action sequences and checks the
//! structural invariants that must hold after any interleaving.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Test code

use proptest::prelude::*;
use tasklist::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
use tasklist_core::reducer::Reducer;
use tasklist_testing::{FixedClock, test_clock};

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

fn arb_action() -> impl Strategy<Value = TaskListAction> {
    prop_oneof![
        arb_text().prop_map(|text| TaskListAction::InputChanged { text }),
        arb_text().prop_map(|text| TaskListAction::AddTask { text }),
        (0usize..8).prop_map(|index| TaskListAction::RemoveTask { index }),
        Just(TaskListAction::UndoDelete),
        (0usize..8).prop_map(|index| TaskListAction::StartEdit { index }),
        arb_text().prop_map(|text| TaskListAction::DraftChanged { text }),
        Just(TaskListAction::SaveEdit),
        Just(TaskListAction::CancelEdit),
        (0u64..6).prop_map(|generation| TaskListAction::UndoWindowElapsed { generation }),
        (0u64..6).prop_map(|generation| TaskListAction::SnackbarShown { generation }),
        (0u64..6).prop_map(|generation| TaskListAction::SnackbarHidden { generation }),
    ]
}

fn apply_all(actions: Vec<TaskListAction>) -> TaskListState {
    let reducer: TaskListReducer<FixedClock> = TaskListReducer::new();
    let env = TaskListEnvironment::new(test_clock());
    let mut state = TaskListState::new();
    for action in actions {
        let _ = reducer.reduce(&mut state, action, &env);
    }
    state
}

proptest! {
    /// No sequence of actions, including out-of-range indices and stale
    /// generation tokens, may leave an empty or untrimmed text in the list.
    #[test]
    fn task_texts_stay_trimmed_and_non_empty(actions in prop::collection::vec(arb_action(), 0..40)) {
        let state = apply_all(actions);
        for text in state.texts() {
            prop_assert!(!text.is_empty());
            prop_assert_eq!(text.trim(), text);
        }
    }

    /// The pending delete's task must never also be present in the list.
    #[test]
    fn pending_delete_is_disjoint_from_list(actions in prop::collection::vec(arb_action(), 0..40)) {
        let state = apply_all(actions);
        if let Some(pending) = &state.pending_delete {
            prop_assert!(state.position_of(&pending.task.id).is_none());
        }
    }

    /// A remove immediately followed by an undo restores the exact previous
    /// list, no matter what state the editor was in beforehand.
    #[test]
    fn remove_then_undo_is_identity(
        prefix in prop::collection::vec(arb_action(), 0..25),
        index in 0usize..8,
    ) {
        let reducer: TaskListReducer<FixedClock> = TaskListReducer::new();
        let env = TaskListEnvironment::new(test_clock());
        let mut state = apply_all(prefix);
        let before: Vec<String> = state.texts().map(String::from).collect();

        // A rejected remove leaves any older pending delete in place, and the
        // undo would then restore that one instead; only a successful remove
        // pairs with its own undo.
        if index < state.len() {
            let _ = reducer.reduce(&mut state, TaskListAction::RemoveTask { index }, &env);
            let _ = reducer.reduce(&mut state, TaskListAction::UndoDelete, &env);

            let after: Vec<String> = state.texts().map(String::from).collect();
            prop_assert_eq!(before, after);
        }
    }
}
