//! Task operations on the selected list.

use chrono::NaiveDateTime;
use tasklists_proto::ids::TaskId;

use super::collection::{Collection, Task};
use super::{EMPTY_TEXT, ListError, NO_SELECTION};

impl Collection {
    /// Appends an open task to the selected list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] if the trimmed text is empty or no
    /// list is selected.
    pub fn add_task(&mut self, text: &str) -> Result<TaskId, ListError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ListError::InvalidInput(EMPTY_TEXT));
        }
        let list = self
            .selected_mut()
            .ok_or(ListError::InvalidInput(NO_SELECTION))?;
        let task = Task::new(text.to_string());
        let id = task.id();
        list.items.push(task);
        Ok(id)
    }

    /// Flips `completed` on the task with the given id.
    ///
    /// Returns `false` when the id no longer resolves.
    pub fn toggle_task(&mut self, id: TaskId) -> bool {
        let Some(task) = self
            .selected_mut()
            .and_then(|list| list.items.iter_mut().find(|t| t.id() == id))
        else {
            return false;
        };
        task.toggle();
        true
    }

    /// Sets or clears the due date of the task with the given id.
    ///
    /// Returns `false` when the id no longer resolves.
    pub fn set_due(&mut self, id: TaskId, due: Option<NaiveDateTime>) -> bool {
        let Some(task) = self
            .selected_mut()
            .and_then(|list| list.items.iter_mut().find(|t| t.id() == id))
        else {
            return false;
        };
        task.set_due(due);
        true
    }

    /// Removes the task with the given id.
    ///
    /// Returns `false` when the task was already gone.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let Some(list) = self.selected_mut() else {
            return false;
        };
        let before = list.items.len();
        list.items.retain(|t| t.id() != id);
        list.items.len() != before
    }

    /// Resolves a position in the selected list to its task id.
    #[must_use]
    pub fn task_id_at(&self, position: usize) -> Option<TaskId> {
        self.selected()
            .and_then(|list| list.items().get(position))
            .map(Task::id)
    }
}
