//! Orchestration of user intents.
//!
//! The [`Controller`] owns the [`Collection`] and runs every user action in
//! the same order: mutate the collection, save it through the
//! [`StorageAdapter`], then hand a fresh [`View`] to the [`Renderer`].
//!
//! Expected failures (duplicate name, unknown list, blank input, unreadable
//! due date) are returned to the caller and also surfaced as a [`Notice`] in the rendered
//! view. A failed save never propagates: it is logged, shown as a notice,
//! and the in-memory collection stays authoritative until the next save.

use std::fmt;

use tasklists_proto::ids::TaskId;

use crate::lists::{Collection, EMPTY_NAME, EMPTY_TEXT, INVALID_DUE, ListError, NO_SELECTION, due};
use crate::presentation::{PLACEHOLDER_HEADER, View};
use crate::storage::{KeyValueStore, StorageAdapter};

/// Receives a fresh [`View`] after every action.
pub trait Renderer {
    /// Displays `view`, replacing whatever was shown before.
    fn render(&mut self, view: &View);
}

/// Renderer that keeps the most recent view for a frame-driven front end.
#[derive(Debug, Default, Clone)]
pub struct LatestView {
    view: View,
    renders: usize,
}

impl LatestView {
    /// Creates an empty renderer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last view rendered.
    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// How many times `render` has been called.
    #[must_use]
    pub const fn renders(&self) -> usize {
        self.renders
    }
}

impl Renderer for LatestView {
    fn render(&mut self, view: &View) {
        self.view = view.clone();
        self.renders += 1;
    }
}

/// Text the controller needs from the user before it can act.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputRequest {
    /// Name for a new list.
    ListName,
    /// Text for a new task in the selected list.
    TaskText,
    /// Due date for an existing task.
    DueDate(TaskId),
}

impl InputRequest {
    /// Prompt shown to the user.
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        match self {
            Self::ListName => "Enter a name for the new list:",
            Self::TaskText => "Enter task text:",
            Self::DueDate(_) => "Enter a due date (YYYY-MM-DD HH:MM):",
        }
    }
}

/// A non-fatal message for the user about the last action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A task action was attempted with no list selected.
    SelectListFirst,
    /// A list with this name already exists.
    ListExists(String),
    /// No list with this name exists.
    ListNotFound(String),
    /// Blank text was submitted.
    EmptyInput,
    /// A due date could not be read.
    InvalidDueDate,
    /// The collection could not be saved; changes are kept in memory.
    SaveFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectListFirst => write!(f, "Please select a list before adding tasks."),
            Self::ListExists(name) => write!(f, "List \"{name}\" already exists."),
            Self::ListNotFound(name) => write!(f, "List \"{name}\" not found."),
            Self::EmptyInput => write!(f, "Text cannot be empty."),
            Self::InvalidDueDate => write!(f, "Could not read that date. Use YYYY-MM-DD HH:MM."),
            Self::SaveFailed(reason) => write!(f, "Changes not saved: {reason}"),
        }
    }
}

impl From<&ListError> for Notice {
    fn from(err: &ListError) -> Self {
        match err {
            ListError::AlreadyExists(name) => Self::ListExists(name.clone()),
            ListError::NotFound(name) => Self::ListNotFound(name.clone()),
            ListError::InvalidInput(reason) if *reason == NO_SELECTION => Self::SelectListFirst,
            ListError::InvalidInput(reason) if *reason == INVALID_DUE => Self::InvalidDueDate,
            ListError::InvalidInput(_) => Self::EmptyInput,
        }
    }
}

/// Sequences user actions into mutation, persistence, and rendering.
pub struct Controller<S: KeyValueStore, R: Renderer> {
    collection: Collection,
    adapter: StorageAdapter<S>,
    renderer: R,
    notice: Option<Notice>,
    placeholder: String,
}

impl<S: KeyValueStore, R: Renderer> Controller<S, R> {
    /// Loads the collection from `adapter` and renders it once.
    pub fn new(adapter: StorageAdapter<S>, renderer: R) -> Self {
        let collection = adapter.load();
        let mut controller = Self {
            collection,
            adapter,
            renderer,
            notice: None,
            placeholder: PLACEHOLDER_HEADER.to_string(),
        };
        controller.render();
        controller
    }

    /// Sets the header shown while no list is selected, and re-renders.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self.render();
        self
    }

    /// Creates a list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] for a blank name or
    /// [`ListError::AlreadyExists`] for a duplicate. Nothing is saved.
    pub fn add_list(&mut self, name: &str) -> Result<(), ListError> {
        self.notice = None;
        if name.trim().is_empty() {
            return self.reject(ListError::InvalidInput(EMPTY_NAME));
        }
        match self.collection.create_list(name) {
            Ok(id) => {
                tracing::info!(list = %id, name = name.trim(), "list created");
                self.commit();
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Selects a list by name.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::NotFound`] if no list has that name.
    pub fn select_list(&mut self, name: &str) -> Result<(), ListError> {
        self.notice = None;
        match self.collection.select_list(name) {
            Ok(id) => {
                tracing::info!(list = %id, name = name.trim(), "list selected");
                self.commit();
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Deletes a list by name. Deleting an unknown list does nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] for a blank name.
    pub fn delete_list(&mut self, name: &str) -> Result<(), ListError> {
        self.notice = None;
        if name.trim().is_empty() {
            return self.reject(ListError::InvalidInput(EMPTY_NAME));
        }
        if let Some(id) = self.collection.delete_list(name) {
            tracing::info!(list = %id, name = name.trim(), "list deleted");
            self.commit();
        } else {
            tracing::debug!(name = name.trim(), "delete of unknown list ignored");
            self.render();
        }
        Ok(())
    }

    /// Adds a task to the selected list.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] for blank text or when no list is
    /// selected. Nothing is saved.
    pub fn add_task(&mut self, text: &str) -> Result<(), ListError> {
        self.notice = None;
        if text.trim().is_empty() {
            return self.reject(ListError::InvalidInput(EMPTY_TEXT));
        }
        match self.collection.add_task(text) {
            Ok(id) => {
                tracing::debug!(task = %id, "task created");
                self.commit();
                Ok(())
            }
            Err(err) => self.reject(err),
        }
    }

    /// Flips the task at `position` in the selected list.
    ///
    /// A position that no longer resolves is ignored.
    pub fn toggle_task(&mut self, position: usize) {
        self.notice = None;
        match self.collection.task_id_at(position) {
            Some(id) if self.collection.toggle_task(id) => {
                tracing::debug!(task = %id, "task toggled");
                self.commit();
            }
            _ => {
                tracing::debug!(position, "toggle of unknown task ignored");
                self.render();
            }
        }
    }

    /// Removes the task at `position` in the selected list.
    ///
    /// A position that no longer resolves is ignored.
    pub fn delete_task(&mut self, position: usize) {
        self.notice = None;
        match self.collection.task_id_at(position) {
            Some(id) if self.collection.remove_task(id) => {
                tracing::debug!(task = %id, "task deleted");
                self.commit();
            }
            _ => {
                tracing::debug!(position, "delete of unknown task ignored");
                self.render();
            }
        }
    }

    /// Sets the due date of the task at `position` from typed text.
    ///
    /// A position that no longer resolves is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::InvalidInput`] if `text` is not a readable date.
    /// Nothing is saved.
    pub fn set_due(&mut self, position: usize, text: &str) -> Result<(), ListError> {
        match self.collection.task_id_at(position) {
            Some(id) => self.apply_due(id, text),
            None => {
                self.notice = None;
                tracing::debug!(position, "due date for unknown task ignored");
                self.render();
                Ok(())
            }
        }
    }

    /// Removes the due date of the task at `position`.
    ///
    /// A position that no longer resolves, or a task without a due date, is
    /// ignored.
    pub fn clear_due(&mut self, position: usize) {
        self.notice = None;
        let has_due = self
            .collection
            .selected()
            .and_then(|list| list.items().get(position))
            .is_some_and(|task| task.due().is_some());
        match self.collection.task_id_at(position) {
            Some(id) if has_due && self.collection.set_due(id, None) => {
                tracing::debug!(task = %id, "due date cleared");
                self.commit();
            }
            _ => self.render(),
        }
    }

    /// Asks for a new list name.
    #[must_use]
    pub const fn request_list_name(&self) -> InputRequest {
        InputRequest::ListName
    }

    /// Asks for new task text, or shows "select a list first" and returns
    /// `None` when no list is selected.
    pub fn request_task_text(&mut self) -> Option<InputRequest> {
        if self.collection.selected().is_some() {
            return Some(InputRequest::TaskText);
        }
        self.notice = Some(Notice::SelectListFirst);
        self.render();
        None
    }

    /// Asks for a due date for the task at `position`, or returns `None`
    /// when no task is there.
    #[must_use]
    pub fn request_due_date(&self, position: usize) -> Option<InputRequest> {
        self.collection
            .task_id_at(position)
            .map(InputRequest::DueDate)
    }

    /// Completes an [`InputRequest`] with the user's answer.
    ///
    /// A cancelled (`None`) or blank answer does nothing.
    ///
    /// # Errors
    ///
    /// Propagates the error of [`add_list`](Self::add_list) or
    /// [`add_task`](Self::add_task).
    pub fn respond(
        &mut self,
        request: InputRequest,
        response: Option<String>,
    ) -> Result<(), ListError> {
        let Some(text) = response.filter(|t| !t.trim().is_empty()) else {
            tracing::debug!(?request, "input cancelled");
            return Ok(());
        };
        match request {
            InputRequest::ListName => self.add_list(&text),
            InputRequest::TaskText => self.add_task(&text),
            InputRequest::DueDate(id) => self.apply_due(id, &text),
        }
    }

    /// Clears the current notice.
    pub fn dismiss_notice(&mut self) {
        if self.notice.take().is_some() {
            self.render();
        }
    }

    /// The live collection.
    #[must_use]
    pub const fn collection(&self) -> &Collection {
        &self.collection
    }

    /// The current notice, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// The renderer.
    #[must_use]
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }

    /// The storage adapter.
    #[must_use]
    pub const fn adapter(&self) -> &StorageAdapter<S> {
        &self.adapter
    }

    /// Saves, then renders.
    fn commit(&mut self) {
        if let Err(err) = self.adapter.save(&self.collection) {
            tracing::warn!(
                key = %self.adapter.key(),
                error = %err,
                "save failed, changes kept in memory only"
            );
            self.notice = Some(Notice::SaveFailed(err.to_string()));
        }
        self.render();
    }

    fn apply_due(&mut self, id: TaskId, text: &str) -> Result<(), ListError> {
        self.notice = None;
        let due = match due::parse_due(text) {
            Ok(due) => due,
            Err(err) => return self.reject(err),
        };
        if self.collection.set_due(id, Some(due)) {
            tracing::debug!(task = %id, due = %due, "due date set");
            self.commit();
        } else {
            tracing::debug!(task = %id, "due date for removed task ignored");
            self.render();
        }
        Ok(())
    }

    fn render(&mut self) {
        let mut view = View::project_with_placeholder(&self.collection, &self.placeholder);
        view.notice = self.notice.as_ref().map(ToString::to_string);
        self.renderer.render(&view);
    }

    fn reject(&mut self, err: ListError) -> Result<(), ListError> {
        tracing::debug!(error = %err, "action rejected");
        self.notice = Some(Notice::from(&err));
        self.render();
        Err(err)
    }
}
