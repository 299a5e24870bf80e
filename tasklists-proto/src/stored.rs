//! Persisted shapes for the list collection.
//!
//! The stored blob is a JSON object with a single `lists` field:
//!
//! ```json
//! { "lists": [ { "name": "Groceries", "listItems": [ { "text": "Milk", "completed": true } ] } ] }
//! ```
//!
//! A task may also carry a `dateTime` due date (`YYYY-MM-DDTHH:MM`); the
//! field is omitted when unset.
//!
//! Two older shapes also decode, but only the object shape is ever written:
//!
//! - the bare array of lists, without the wrapping object;
//! - the single-list store, a bare array of
//!   `{ "id", "title", "dateTime", "completed" }` tasks, which becomes one
//!   list named [`SINGLE_LIST_NAME`].

use serde::{Deserialize, Serialize};

/// Name given to the list built from a single-list store.
pub const SINGLE_LIST_NAME: &str = "Tasks";

/// The full persisted collection of lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredCollection {
    /// Lists in display order.
    pub lists: Vec<StoredList>,
}

/// A single persisted list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredList {
    /// List name, unique within the collection.
    pub name: String,
    /// Tasks in display order.
    #[serde(rename = "listItems", default)]
    pub list_items: Vec<StoredTask>,
}

/// A single persisted task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTask {
    /// Task text.
    pub text: String,
    /// Whether the task has been checked off.
    #[serde(default)]
    pub completed: bool,
    /// Due date as written, e.g. `2024-05-01T14:30`.
    #[serde(rename = "dateTime", default, skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
}

impl StoredList {
    /// Creates a persisted list with the given name and tasks.
    #[must_use]
    pub fn new(name: impl Into<String>, list_items: Vec<StoredTask>) -> Self {
        Self {
            name: name.into(),
            list_items,
        }
    }
}

impl StoredTask {
    /// Creates a persisted task.
    #[must_use]
    pub fn new(text: impl Into<String>, completed: bool) -> Self {
        Self {
            text: text.into(),
            completed,
            date_time: None,
        }
    }

    /// Sets the due date text.
    #[must_use]
    pub fn with_date_time(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = Some(date_time.into());
        self
    }
}

/// A task as the single-list store wrote it. Its numeric `id` is ignored.
#[derive(Deserialize)]
pub(crate) struct SingleListTask {
    title: String,
    #[serde(rename = "dateTime", default)]
    date_time: Option<String>,
    #[serde(default)]
    completed: bool,
}

impl From<SingleListTask> for StoredTask {
    fn from(task: SingleListTask) -> Self {
        Self {
            text: task.title,
            completed: task.completed,
            date_time: task.date_time.filter(|d| !d.is_empty()),
        }
    }
}

/// Any blob shape accepted on decode.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum AnyShape {
    /// Current `{ "lists": [...] }` shape.
    Wrapped(StoredCollection),
    /// Legacy bare array of lists.
    Bare(Vec<StoredList>),
    /// Single-list store: a bare array of tasks.
    SingleList(Vec<SingleListTask>),
}

impl From<AnyShape> for StoredCollection {
    fn from(shape: AnyShape) -> Self {
        match shape {
            AnyShape::Wrapped(collection) => collection,
            AnyShape::Bare(lists) => Self { lists },
            AnyShape::SingleList(tasks) => Self {
                lists: vec![StoredList::new(
                    SINGLE_LIST_NAME,
                    tasks.into_iter().map(StoredTask::from).collect(),
                )],
            },
        }
    }
}
