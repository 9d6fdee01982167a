//! Property-based tests for the task list controller.
//!
//! Uses proptest to check, over arbitrary inputs and intent sequences:
//! 1. Idle commits of non-empty text append one task each, in order.
//! 2. Blank commits never change state and always fail.
//! 3. start_edit + cancel_edit leaves the list untouched.
//! 4. start_edit + commit replaces exactly one task's text in place.
//! 5. Any intent sequence keeps ids unique and the edit target valid.

use proptest::prelude::*;
use todolist::model::task::{EditTarget, Task};
use todolist::ops::task_ops::{Intent, TaskError, TaskListController};

/// Text with at least one non-whitespace character.
fn arb_text() -> impl Strategy<Value = String> {
    "[ \t]{0,3}[a-zA-Z0-9][a-zA-Z0-9 ]{0,20}"
}

/// Empty or whitespace-only text.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t\n]{0,6}"
}

fn arb_list() -> impl Strategy<Value = TaskListController> {
    prop::collection::vec(arb_text(), 0..8).prop_map(|texts| {
        let mut list = TaskListController::new();
        for text in texts {
            list.set_buffer(text);
            list.commit().unwrap();
        }
        list
    })
}

/// Intents over a small id space so edits and deletes hit real tasks.
fn arb_intent() -> impl Strategy<Value = Intent> {
    let id = (1u8..8).prop_map(|n| n.to_string());
    prop_oneof![
        prop_oneof![arb_text(), arb_blank()].prop_map(Intent::SetBuffer),
        Just(Intent::Commit),
        id.clone().prop_map(Intent::StartEdit),
        Just(Intent::CancelEdit),
        id.prop_map(Intent::Delete),
    ]
}

proptest! {
    #[test]
    fn idle_commits_append_in_order(texts in prop::collection::vec(arb_text(), 0..20)) {
        let mut list = TaskListController::new();
        for text in &texts {
            list.set_buffer(text.clone());
            prop_assert_eq!(list.commit(), Ok(()));
        }
        prop_assert_eq!(list.tasks().len(), texts.len());
        for (task, text) in list.tasks().iter().zip(&texts) {
            prop_assert_eq!(&task.text, text.trim());
        }
    }

    #[test]
    fn blank_commit_changes_nothing(mut list in arb_list(), blank in arb_blank(), edit in any::<bool>()) {
        let first = list.tasks().first().map(|t| t.id.clone());
        if let (true, Some(id)) = (edit, first) {
            list.start_edit(&id);
        }
        list.set_buffer(blank);
        let before = list.view();
        prop_assert_eq!(list.commit(), Err(TaskError::EmptyText));
        prop_assert_eq!(list.view(), before);
    }

    #[test]
    fn edit_then_cancel_is_identity(mut list in arb_list(), pick in any::<prop::sample::Index>()) {
        prop_assume!(!list.tasks().is_empty());
        let before: Vec<Task> = list.tasks().to_vec();
        let id = before[pick.index(before.len())].id.clone();

        list.start_edit(&id);
        list.cancel_edit();
        prop_assert_eq!(list.tasks(), before.as_slice());
        prop_assert_eq!(list.edit_target(), &EditTarget::Idle);
        prop_assert_eq!(list.buffer(), "");
    }

    #[test]
    fn edit_then_commit_replaces_one(
        mut list in arb_list(),
        pick in any::<prop::sample::Index>(),
        text in arb_text(),
    ) {
        prop_assume!(!list.tasks().is_empty());
        let before: Vec<Task> = list.tasks().to_vec();
        let pos = pick.index(before.len());
        let id = before[pos].id.clone();

        list.start_edit(&id);
        list.set_buffer(text.clone());
        prop_assert_eq!(list.commit(), Ok(()));

        prop_assert_eq!(list.tasks().len(), before.len());
        for (i, (after, prev)) in list.tasks().iter().zip(&before).enumerate() {
            prop_assert_eq!(&after.id, &prev.id);
            if i == pos {
                prop_assert_eq!(&after.text, text.trim());
            } else {
                prop_assert_eq!(&after.text, &prev.text);
            }
        }
        prop_assert_eq!(list.edit_target(), &EditTarget::Idle);
    }

    #[test]
    fn invariants_hold_for_any_sequence(intents in prop::collection::vec(arb_intent(), 0..60)) {
        let mut list = TaskListController::new();
        for intent in intents {
            let deleting_edited = matches!(
                &intent,
                Intent::Delete(id) if list.edit_target().is_editing_task(id)
            );
            let _ = list.dispatch(intent);

            let mut ids: Vec<&str> = list.tasks().iter().map(|t| t.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), list.tasks().len());

            if let EditTarget::Editing(id) = list.edit_target() {
                prop_assert!(list.find_task(id).is_some());
            }
            for task in list.tasks() {
                prop_assert!(!task.text.trim().is_empty());
            }
            if deleting_edited {
                prop_assert_eq!(list.edit_target(), &EditTarget::Idle);
                prop_assert_eq!(list.buffer(), "");
            }
        }
    }
}
