//! Lists, tasks, and the list-level operations on [`Collection`].
//!
//! Equality on [`Task`], [`TodoList`] and [`Collection`] compares content
//! only: names, texts, completed flags and due dates, in order. Session ids
//! and the selection are ignored, so a collection equals itself after a
//! save and load.

use chrono::NaiveDateTime;
use tasklists_proto::ids::{ListId, TaskId};
use tasklists_proto::stored::{StoredCollection, StoredList, StoredTask};

use super::{EMPTY_NAME, ListError, due};

/// A text item with a completed flag and an optional due date.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    text: String,
    completed: bool,
    due: Option<NaiveDateTime>,
}

impl Task {
    /// Creates an open task. `text` must already be trimmed and non-empty.
    pub(crate) fn new(text: String) -> Self {
        Self {
            id: TaskId::new(),
            text,
            completed: false,
            due: None,
        }
    }

    /// Session-stable identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Task text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the task has been checked off.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the task is due, if set.
    #[must_use]
    pub const fn due(&self) -> Option<NaiveDateTime> {
        self.due
    }

    pub(crate) const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    pub(crate) const fn set_due(&mut self, due: Option<NaiveDateTime>) {
        self.due = due;
    }

    fn from_stored(stored: StoredTask, list: &str) -> Option<Self> {
        let text = stored.text.trim();
        if text.is_empty() {
            tracing::warn!(list, "dropping stored task with blank text");
            return None;
        }
        let mut task = Self::new(text.to_string());
        task.completed = stored.completed;
        task.due = stored
            .date_time
            .as_deref()
            .and_then(|raw| match due::parse_due(raw) {
                Ok(due) => Some(due),
                Err(_) => {
                    tracing::warn!(list, task = text, due = raw, "dropping unreadable due date");
                    None
                }
            });
        Some(task)
    }

    fn to_stored(&self) -> StoredTask {
        let stored = StoredTask::new(self.text.clone(), self.completed);
        match &self.due {
            Some(due) => stored.with_date_time(due::to_stored(due)),
            None => stored,
        }
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.completed == other.completed && self.due == other.due
    }
}

impl Eq for Task {}

/// A named, ordered sequence of tasks.
#[derive(Debug, Clone)]
pub struct TodoList {
    id: ListId,
    name: String,
    pub(crate) items: Vec<Task>,
}

impl TodoList {
    fn new(name: String) -> Self {
        Self {
            id: ListId::new(),
            name,
            items: Vec::new(),
        }
    }

    /// Session-stable identifier.
    #[must_use]
    pub const fn id(&self) -> ListId {
        self.id
    }

    /// List name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tasks in display order.
    #[must_use]
    pub fn items(&self) -> &[Task] {
        &self.items
    }
}

impl PartialEq for TodoList {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.items == other.items
    }
}

impl Eq for TodoList {}

/// The full in-memory state: every list plus the current selection.
///
/// Names are unique at all times and `selected` always indexes into `lists`.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    lists: Vec<TodoList>,
    selected: Option<usize>,
}

impl PartialEq for Collection {
    fn eq(&self, other: &Self) -> bool {
        self.lists == other.lists
    }
}

impl Eq for Collection {}

impl Collection {
    /// Creates an empty collection with nothing selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a collection from its persisted form.
    ///
    /// Fresh ids are assigned. Lists whose name repeats an earlier one,
    /// tasks or lists whose text is blank, and unreadable due dates are
    /// dropped with a warning so the in-memory invariants hold whatever the
    /// stored blob contained.
    #[must_use]
    pub fn from_snapshot(stored: StoredCollection) -> Self {
        let mut collection = Self::new();
        for stored_list in stored.lists {
            let name = stored_list.name.trim();
            if name.is_empty() {
                tracing::warn!(
                    tasks = stored_list.list_items.len(),
                    "dropping stored list with blank name"
                );
                continue;
            }
            if collection.position(name).is_some() {
                tracing::warn!(
                    name,
                    tasks = stored_list.list_items.len(),
                    "dropping stored list with duplicate name"
                );
                continue;
            }
            let mut list = TodoList::new(name.to_string());
            list.items = stored_list
                .list_items
                .into_iter()
                .filter_map(|stored_task| Task::from_stored(stored_task, name))
                .collect();
            collection.lists.push(list);
        }
        collection
    }

    /// Projects the collection into its persisted form.
    ///
    /// Two collections with equal snapshots hold the same content; ids and
    /// selection are not part of it.
    #[must_use]
    pub fn snapshot(&self) -> StoredCollection {
        StoredCollection {
            lists: self
                .lists
                .iter()
                .map(|list| {
                    StoredList::new(
                        list.name.clone(),
                        list.items.iter().map(Task::to_stored).collect(),
                    )
                })
                .collect(),
        }
    }

    /// Appends a new empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] if the trimmed name is empty, or
    /// [`ListError::AlreadyExists`] if a list with that name exists.
    pub fn create_list(&mut self, name: &str) -> Result<ListId, ListError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ListError::InvalidInput(EMPTY_NAME));
        }
        if self.position(name).is_some() {
            return Err(ListError::AlreadyExists(name.to_string()));
        }
        let list = TodoList::new(name.to_string());
        let id = list.id;
        self.lists.push(list);
        Ok(id)
    }

    /// Selects the first list with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no list has that name.
    pub fn select_list(&mut self, name: &str) -> Result<ListId, ListError> {
        let name = name.trim();
        let index = self
            .position(name)
            .ok_or_else(|| ListError::NotFound(name.to_string()))?;
        self.selected = Some(index);
        Ok(self.lists[index].id)
    }

    /// Removes the first list with the given name.
    ///
    /// Returns the removed list's id, or `None` if nothing matched. Removing
    /// the selected list clears the selection; removing an earlier list keeps
    /// the selection on the same list.
    pub fn delete_list(&mut self, name: &str) -> Option<ListId> {
        let index = self.position(name.trim())?;
        let removed = self.lists.remove(index);
        self.selected = match self.selected {
            Some(current) if current == index => None,
            Some(current) if current > index => Some(current - 1),
            other => other,
        };
        Some(removed.id)
    }

    /// Number of tasks in the given list, or `None` if it no longer exists.
    #[must_use]
    pub fn task_count(&self, list: ListId) -> Option<usize> {
        self.list(list).map(|l| l.items.len())
    }

    /// All lists in display order.
    #[must_use]
    pub fn lists(&self) -> &[TodoList] {
        &self.lists
    }

    /// Looks up a list by id.
    #[must_use]
    pub fn list(&self, id: ListId) -> Option<&TodoList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Index of the selected list.
    #[must_use]
    pub const fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected list.
    #[must_use]
    pub fn selected(&self) -> Option<&TodoList> {
        self.selected.and_then(|i| self.lists.get(i))
    }

    pub(crate) fn selected_mut(&mut self) -> Option<&mut TodoList> {
        self.selected.and_then(|i| self.lists.get_mut(i))
    }

    /// Whether the collection holds no lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.lists.iter().position(|l| l.name == name)
    }
}
