//! In-memory list collection.
//!
//! The [`Collection`] holds every list in display order together with the
//! current selection. List operations (create, select, delete, count) live in
//! [`collection`]; task operations on the selected list live in [`items`];
//! due-date parsing and formatting live in [`due`].

pub mod collection;
pub mod due;
pub mod items;

pub use collection::{Collection, Task, TodoList};

use thiserror::Error;

/// Errors that can occur during list and task operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListError {
    /// A list with this name already exists.
    #[error("a list named \"{0}\" already exists")]
    AlreadyExists(String),
    /// No list with this name exists.
    #[error("list not found: {0}")]
    NotFound(String),
    /// Empty text, an unreadable due date, or a task operation with no list
    /// selected.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),
}

/// Reason attached to [`ListError::InvalidInput`] for blank names.
pub const EMPTY_NAME: &str = "list name cannot be empty";

/// Reason attached to [`ListError::InvalidInput`] for blank task text.
pub const EMPTY_TEXT: &str = "task text cannot be empty";

/// Reason attached to [`ListError::InvalidInput`] when nothing is selected.
pub const NO_SELECTION: &str = "no list is selected";

/// Reason attached to [`ListError::InvalidInput`] for unreadable due dates.
pub const INVALID_DUE: &str = "due date must look like YYYY-MM-DD HH:MM";
