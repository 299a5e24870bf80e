//! Integration tests for persistence across sessions.
//!
//! Each test builds a controller over a `FileStore` in a temporary
//! directory, drops it, and builds a new one over the same directory.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use tasklists::controller::{Controller, LatestView, Notice};
use tasklists::storage::{FileStore, KeyValueStore, MemoryStore, StorageAdapter};

fn open(dir: &std::path::Path) -> Controller<FileStore, LatestView> {
    Controller::new(StorageAdapter::new(FileStore::new(dir)), LatestView::new())
}

#[test]
fn lists_survive_restart() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut controller = open(dir.path());
        controller.add_list("Groceries").unwrap();
        controller.add_list("Work").unwrap();
        controller.select_list("Groceries").unwrap();
        controller.add_task("Milk").unwrap();
        controller.toggle_task(0);
    }

    let controller = open(dir.path());
    let view = controller.renderer().view();
    let names: Vec<&str> = view.lists.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Groceries", "Work"]);
    assert_eq!(view.lists[0].task_count, 1);
    // Selection is not persisted.
    assert!(!view.has_selection());

    let groceries = &controller.collection().lists()[0];
    assert_eq!(groceries.items()[0].text(), "Milk");
    assert!(groceries.items()[0].is_completed());
}

#[test]
fn corrupt_file_starts_empty_and_is_overwritten() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("lists.json"), "{ this is not json").unwrap();

    let mut controller = open(dir.path());
    assert!(controller.collection().is_empty());
    assert!(controller.notice().is_none());

    controller.add_list("Fresh").unwrap();
    let reopened = open(dir.path());
    assert_eq!(reopened.collection().lists()[0].name(), "Fresh");
}

#[test]
fn legacy_array_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("lists.json"),
        r#"[{"name":"Old","listItems":[{"text":"Carried over","completed":true}]}]"#,
    )
    .unwrap();

    let mut controller = open(dir.path());
    assert_eq!(controller.collection().lists()[0].name(), "Old");

    // The next save rewrites it in the current shape.
    controller.add_list("New").unwrap();
    let text = FileStore::new(dir.path()).get("lists").unwrap().unwrap();
    assert!(text.starts_with(r#"{"lists":["#));
}

#[test]
fn separate_keys_hold_separate_collections() {
    let dir = tempfile::tempdir().unwrap();
    let mut home = Controller::new(
        StorageAdapter::with_key(FileStore::new(dir.path()), "home"),
        LatestView::new(),
    );
    home.add_list("Chores").unwrap();

    let work = Controller::new(
        StorageAdapter::with_key(FileStore::new(dir.path()), "work"),
        LatestView::new(),
    );
    assert!(work.collection().is_empty());
}

#[test]
fn failed_save_keeps_working_in_memory() {
    let adapter = StorageAdapter::new(MemoryStore::with_quota(64));
    let mut controller = Controller::new(adapter, LatestView::new());

    controller.add_list("Short").unwrap();
    assert!(controller.notice().is_none());

    controller
        .add_list("A name long enough to push the blob past the quota")
        .unwrap();
    assert!(matches!(controller.notice(), Some(Notice::SaveFailed(_))));
    assert_eq!(controller.collection().lists().len(), 2);
    assert_eq!(controller.renderer().view().lists.len(), 2);

    // The last good blob is still what the store holds.
    let text = controller.adapter().store().get("lists").unwrap().unwrap();
    assert!(text.contains("Short"));
    assert!(!text.contains("quota"));
}

#[test]
fn single_list_store_opens_and_keeps_due_dates() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tasks.json"),
        r#"[{"id":1,"title":"Dentist","dateTime":"2024-05-01T09:00","completed":false},{"id":2,"title":"Gym","dateTime":"2024-05-02T18:30","completed":true}]"#,
    )
    .unwrap();

    let mut controller = Controller::new(
        StorageAdapter::with_key(FileStore::new(dir.path()), "tasks"),
        LatestView::new(),
    );
    controller.select_list("Tasks").unwrap();
    let view = controller.renderer().view();
    assert_eq!(view.tasks.len(), 2);
    assert_eq!(view.tasks[0].due.as_deref(), Some("2024-05-01 09:00"));
    assert!(view.tasks[1].completed);

    controller.set_due(1, "2024-05-03 07:00").unwrap();
    let text = FileStore::new(dir.path()).get("tasks").unwrap().unwrap();
    assert_eq!(
        text,
        r#"{"lists":[{"name":"Tasks","listItems":[{"text":"Dentist","completed":false,"dateTime":"2024-05-01T09:00"},{"text":"Gym","completed":true,"dateTime":"2024-05-03T07:00"}]}]}"#
    );
}
