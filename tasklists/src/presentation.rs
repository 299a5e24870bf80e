//! Projection of the collection into what the screen should show.
//!
//! A [`View`] is rebuilt from the [`Collection`] after every change and
//! carries no state of its own.

use crate::lists::{Collection, due};

/// Header text shown while no list is selected.
pub const PLACEHOLDER_HEADER: &str = "Select a list";

/// A sidebar row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    /// List name.
    pub name: String,
    /// Number of tasks in the list.
    pub task_count: usize,
    /// Whether this is the selected list.
    pub selected: bool,
}

/// A task row for the selected list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEntry {
    /// Task text.
    pub text: String,
    /// Whether the task is checked off.
    pub completed: bool,
    /// Due date as `YYYY-MM-DD HH:MM`, if set.
    pub due: Option<String>,
}

/// Everything the screen should display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct View {
    /// Sidebar rows in display order.
    pub lists: Vec<ListEntry>,
    /// Tasks of the selected list, empty when nothing is selected.
    pub tasks: Vec<TaskEntry>,
    /// Selected list's name, or the placeholder.
    pub header: String,
    /// Task count shown beside the header.
    pub selected_task_count: usize,
    /// User-facing notice from the last action, if any.
    pub notice: Option<String>,
}

impl View {
    /// Projects the collection using [`PLACEHOLDER_HEADER`].
    #[must_use]
    pub fn project(collection: &Collection) -> Self {
        Self::project_with_placeholder(collection, PLACEHOLDER_HEADER)
    }

    /// Projects the collection, showing `placeholder` when nothing is selected.
    #[must_use]
    pub fn project_with_placeholder(collection: &Collection, placeholder: &str) -> Self {
        let selected_index = collection.selected_index();
        let lists = collection
            .lists()
            .iter()
            .enumerate()
            .map(|(idx, list)| ListEntry {
                name: list.name().to_string(),
                task_count: list.items().len(),
                selected: Some(idx) == selected_index,
            })
            .collect();

        let (header, tasks) = collection.selected().map_or_else(
            || (placeholder.to_string(), Vec::new()),
            |list| {
                let tasks = list
                    .items()
                    .iter()
                    .map(|task| TaskEntry {
                        text: task.text().to_string(),
                        completed: task.is_completed(),
                        due: task.due().as_ref().map(due::to_display),
                    })
                    .collect();
                (list.name().to_string(), tasks)
            },
        );

        Self {
            lists,
            selected_task_count: tasks.len(),
            tasks,
            header,
            notice: None,
        }
    }

    /// Whether a list is selected.
    #[must_use]
    pub fn has_selection(&self) -> bool {
        self.lists.iter().any(|l| l.selected)
    }
}
