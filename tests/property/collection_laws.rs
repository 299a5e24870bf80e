//! Property-based tests for collection invariants.
//!
//! Uses proptest to verify:
//! 1. Any sequence of operations keeps list names unique and the selection
//!    in bounds, and the view counts match the live collection.
//! 2. Saving then loading yields an equal collection.
//! 3. Two toggles restore a task's completion.

#![allow(clippy::unwrap_used)]

use std::collections::HashSet;

use proptest::prelude::*;
use tasklists::lists::Collection;
use tasklists::presentation::View;
use tasklists::storage::{MemoryStore, StorageAdapter};

/// One user-level operation on the collection.
#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Select(String),
    Delete(String),
    Add(String),
    Toggle(usize),
    Remove(usize),
}

/// Small name pool so duplicates and hits are common.
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Groceries".to_string()),
        Just("Work".to_string()),
        Just("Home".to_string()),
        Just(" Work ".to_string()),
        "[a-z]{1,6}",
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arb_name().prop_map(Op::Create),
        arb_name().prop_map(Op::Select),
        arb_name().prop_map(Op::Delete),
        "[ a-z]{0,8}".prop_map(Op::Add),
        (0usize..6).prop_map(Op::Toggle),
        (0usize..6).prop_map(Op::Remove),
    ]
}

fn apply(collection: &mut Collection, op: &Op) {
    match op {
        Op::Create(name) => {
            let _ = collection.create_list(name);
        }
        Op::Select(name) => {
            let _ = collection.select_list(name);
        }
        Op::Delete(name) => {
            let _ = collection.delete_list(name);
        }
        Op::Add(text) => {
            let _ = collection.add_task(text);
        }
        Op::Toggle(position) => {
            if let Some(id) = collection.task_id_at(*position) {
                let _ = collection.toggle_task(id);
            }
        }
        Op::Remove(position) => {
            if let Some(id) = collection.task_id_at(*position) {
                let _ = collection.remove_task(id);
            }
        }
    }
}

fn build(ops: &[Op]) -> Collection {
    let mut collection = Collection::new();
    for op in ops {
        apply(&mut collection, op);
    }
    collection
}

proptest! {
    #[test]
    fn invariants_hold_after_any_sequence(ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut collection = Collection::new();
        for op in &ops {
            apply(&mut collection, op);

            let names: HashSet<&str> = collection.lists().iter().map(|l| l.name()).collect();
            prop_assert_eq!(names.len(), collection.lists().len());
            if let Some(idx) = collection.selected_index() {
                prop_assert!(idx < collection.lists().len());
            }
            prop_assert!(collection
                .lists()
                .iter()
                .flat_map(|l| l.items())
                .all(|t| !t.text().is_empty() && t.text() == t.text().trim()));

            let view = View::project(&collection);
            for (entry, list) in view.lists.iter().zip(collection.lists()) {
                prop_assert_eq!(entry.task_count, list.items().len());
            }
            prop_assert_eq!(view.has_selection(), collection.selected().is_some());
        }
    }

    #[test]
    fn save_then_load_preserves_content(ops in prop::collection::vec(arb_op(), 0..40)) {
        let collection = build(&ops);
        let mut adapter = StorageAdapter::new(MemoryStore::new());
        adapter.save(&collection).unwrap();
        let loaded = adapter.load();
        prop_assert_eq!(loaded.snapshot(), collection.snapshot());
        prop_assert_eq!(loaded, collection);
    }

    #[test]
    fn double_toggle_is_identity(
        ops in prop::collection::vec(arb_op(), 0..30),
        position in 0usize..6,
    ) {
        let mut collection = build(&ops);
        let before = collection.snapshot();
        if let Some(id) = collection.task_id_at(position) {
            prop_assert!(collection.toggle_task(id));
            prop_assert!(collection.toggle_task(id));
        }
        prop_assert_eq!(collection.snapshot(), before);
    }
}
