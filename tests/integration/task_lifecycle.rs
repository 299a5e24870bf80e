//! Integration tests for tasks inside the selected list.
//!
//! Covers adding, toggling and deleting tasks by rendered position, the
//! prompt request/response flow, and rejection of blank input.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use tasklists::controller::{Controller, InputRequest, LatestView, Notice};
use tasklists::lists::ListError;
use tasklists::storage::{DEFAULT_KEY, KeyValueStore, MemoryStore, StorageAdapter};
use tasklists_proto::codec;
use tasklists_proto::stored::{StoredCollection, StoredList, StoredTask};

fn make_controller() -> Controller<MemoryStore, LatestView> {
    Controller::new(StorageAdapter::new(MemoryStore::new()), LatestView::new())
}

fn stored_blob(controller: &Controller<MemoryStore, LatestView>) -> StoredCollection {
    let text = controller
        .adapter()
        .store()
        .get(DEFAULT_KEY)
        .unwrap()
        .expect("blob should be saved");
    codec::decode(&text).unwrap()
}

#[test]
fn groceries_scenario_persists_expected_blob() {
    let mut controller = make_controller();
    controller.add_list("Groceries").unwrap();
    controller.select_list("Groceries").unwrap();
    controller.add_task("Milk").unwrap();
    controller.add_task("Eggs").unwrap();
    controller.toggle_task(0);

    assert_eq!(
        stored_blob(&controller),
        StoredCollection {
            lists: vec![StoredList::new(
                "Groceries",
                vec![
                    StoredTask::new("Milk", true),
                    StoredTask::new("Eggs", false),
                ],
            )],
        }
    );
}

#[test]
fn empty_task_is_rejected_without_writing() {
    let mut controller = make_controller();
    controller.add_list("Groceries").unwrap();
    controller.select_list("Groceries").unwrap();
    let writes = controller.adapter().store().writes();

    let err = controller.add_task("").unwrap_err();
    assert!(matches!(err, ListError::InvalidInput(_)));
    assert!(controller.collection().selected().unwrap().items().is_empty());
    assert_eq!(controller.adapter().store().writes(), writes);
    assert_eq!(controller.notice(), Some(&Notice::EmptyInput));
}

#[test]
fn toggling_twice_restores_completion() {
    let mut controller = make_controller();
    controller.add_list("A").unwrap();
    controller.select_list("A").unwrap();
    controller.add_task("x").unwrap();

    controller.toggle_task(0);
    assert!(controller.renderer().view().tasks[0].completed);
    controller.toggle_task(0);
    assert!(!controller.renderer().view().tasks[0].completed);
    assert!(!stored_blob(&controller).lists[0].list_items[0].completed);
}

#[test]
fn toggling_deleted_position_is_silent() {
    let mut controller = make_controller();
    controller.add_list("A").unwrap();
    controller.select_list("A").unwrap();
    controller.add_task("only").unwrap();
    controller.delete_task(0);

    let writes = controller.adapter().store().writes();
    controller.toggle_task(0);
    controller.delete_task(0);
    assert!(controller.notice().is_none());
    assert_eq!(controller.adapter().store().writes(), writes);
}

#[test]
fn task_positions_follow_rendered_order() {
    let mut controller = make_controller();
    controller.add_list("A").unwrap();
    controller.select_list("A").unwrap();
    for text in ["first", "second", "third"] {
        controller.add_task(text).unwrap();
    }
    controller.delete_task(1);
    controller.toggle_task(1);

    let tasks = &controller.renderer().view().tasks;
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].text, "first");
    assert!(!tasks[0].completed);
    assert_eq!(tasks[1].text, "third");
    assert!(tasks[1].completed);
}

#[test]
fn prompt_flow_without_selection_shows_notice() {
    let mut controller = make_controller();
    controller.add_list("A").unwrap();

    assert_eq!(controller.request_task_text(), None);
    assert_eq!(
        controller.renderer().view().notice.as_deref(),
        Some("Please select a list before adding tasks.")
    );
}

#[test]
fn prompt_flow_adds_trimmed_task() {
    let mut controller = make_controller();
    let request = controller.request_list_name();
    controller
        .respond(request, Some("Groceries".to_string()))
        .unwrap();
    controller.select_list("Groceries").unwrap();

    let request = controller.request_task_text().unwrap();
    assert_eq!(request, InputRequest::TaskText);
    controller
        .respond(request, Some("  Milk  ".to_string()))
        .unwrap();

    assert_eq!(controller.renderer().view().tasks[0].text, "Milk");
}

#[test]
fn cancelled_prompt_changes_nothing() {
    let mut controller = make_controller();
    controller.add_list("A").unwrap();
    controller.select_list("A").unwrap();
    let writes = controller.adapter().store().writes();
    let renders = controller.renderer().renders();

    let request = controller.request_task_text().unwrap();
    controller.respond(request, None).unwrap();

    assert_eq!(controller.adapter().store().writes(), writes);
    assert_eq!(controller.renderer().renders(), renders);
    assert!(controller.collection().selected().unwrap().items().is_empty());
}
