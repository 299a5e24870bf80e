//! Application state and event handling.
//!
//! [`App`] hosts the [`Controller`] for the terminal front end: it turns key
//! presses into controller calls, tracks panel focus and cursors, and holds
//! the open [`Prompt`] while the controller waits for text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::controller::{Controller, InputRequest, LatestView};
use crate::presentation::View;
use crate::storage::KeyValueStore;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Lists sidebar (default).
    Lists,
    /// Tasks of the selected list.
    Tasks,
}

/// An open text prompt answering an [`InputRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    /// What the controller asked for.
    pub request: InputRequest,
    /// Text typed so far.
    pub input: String,
    /// Cursor position in input (character index).
    pub cursor_position: usize,
}

impl Prompt {
    const fn new(request: InputRequest) -> Self {
        Self {
            request,
            input: String::new(),
            cursor_position: 0,
        }
    }

    fn byte_index(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor_position)
            .map_or(self.input.len(), |(idx, _)| idx)
    }

    fn enter_char(&mut self, c: char) {
        let idx = self.byte_index();
        self.input.insert(idx, c);
        self.cursor_position += 1;
    }

    fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index();
            self.input.remove(idx);
        }
    }

    const fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
        }
    }

    fn move_cursor_right(&mut self) {
        if self.cursor_position < self.input.chars().count() {
            self.cursor_position += 1;
        }
    }
}

/// Main application state.
pub struct App<S: KeyValueStore> {
    /// Controller owning the collection.
    pub controller: Controller<S, LatestView>,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Highlighted row in the lists sidebar.
    pub list_cursor: usize,
    /// Highlighted row in the tasks panel.
    pub task_cursor: usize,
    /// Open prompt, if the controller is waiting for text.
    pub prompt: Option<Prompt>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new application around a controller.
    #[must_use]
    pub fn new(controller: Controller<S, LatestView>) -> Self {
        let mut app = Self {
            controller,
            focus: PanelFocus::Lists,
            list_cursor: 0,
            task_cursor: 0,
            prompt: None,
            should_quit: false,
        };
        if let Some(idx) = app.view().lists.iter().position(|l| l.selected) {
            app.list_cursor = idx;
        }
        app
    }

    /// The most recently rendered view.
    #[must_use]
    pub const fn view(&self) -> &View {
        self.controller.renderer().view()
    }

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            self.clamp_cursors();
            return;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Esc | KeyCode::Char('q'), _) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::Lists => self.handle_lists_key(key),
            PanelFocus::Tasks => self.handle_tasks_key(key),
        }
        self.clamp_cursors();
    }

    /// Handle key event when the lists sidebar is focused.
    fn handle_lists_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_list_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_list_cursor(true),
            KeyCode::Enter => self.select_under_cursor(),
            KeyCode::Char('n' | 'a') => {
                self.prompt = Some(Prompt::new(self.controller.request_list_name()));
            }
            KeyCode::Char('d') => {
                if let Some(name) = self.list_name_under_cursor() {
                    let _ = self.controller.delete_list(&name);
                }
            }
            _ => {}
        }
    }

    /// Handle key event when the tasks panel is focused.
    fn handle_tasks_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_task_cursor(false),
            KeyCode::Down | KeyCode::Char('j') => self.move_task_cursor(true),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.controller.toggle_task(self.task_cursor);
            }
            KeyCode::Char('a' | 'n') => {
                self.prompt = self.controller.request_task_text().map(Prompt::new);
            }
            KeyCode::Char('d') => self.controller.delete_task(self.task_cursor),
            KeyCode::Char('t') => {
                self.prompt = self.controller.request_due_date(self.task_cursor).map(Prompt::new);
            }
            KeyCode::Char('T') => self.controller.clear_due(self.task_cursor),
            _ => {}
        }
    }

    /// Handle key event while a prompt is open.
    fn handle_prompt_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(prompt) = self.prompt.take() {
                    let _ = self
                        .controller
                        .respond(prompt.request, Some(prompt.input));
                    if prompt.request == InputRequest::TaskText {
                        self.task_cursor = self.view().tasks.len().saturating_sub(1);
                    }
                }
                return;
            }
            KeyCode::Esc => {
                if let Some(prompt) = self.prompt.take() {
                    let _ = self.controller.respond(prompt.request, None);
                }
                return;
            }
            _ => {}
        }

        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        match key.code {
            KeyCode::Char(c) => prompt.enter_char(c),
            KeyCode::Backspace => prompt.delete_char(),
            KeyCode::Left => prompt.move_cursor_left(),
            KeyCode::Right => prompt.move_cursor_right(),
            KeyCode::Home => prompt.cursor_position = 0,
            KeyCode::End => prompt.cursor_position = prompt.input.chars().count(),
            _ => {}
        }
    }

    /// Switch focus between the two panels.
    const fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            PanelFocus::Lists => PanelFocus::Tasks,
            PanelFocus::Tasks => PanelFocus::Lists,
        };
    }

    fn select_under_cursor(&mut self) {
        if let Some(name) = self.list_name_under_cursor()
            && self.controller.select_list(&name).is_ok()
        {
            self.task_cursor = 0;
            self.focus = PanelFocus::Tasks;
        }
    }

    fn list_name_under_cursor(&self) -> Option<String> {
        self.view()
            .lists
            .get(self.list_cursor)
            .map(|entry| entry.name.clone())
    }

    fn move_list_cursor(&mut self, down: bool) {
        self.controller.dismiss_notice();
        let len = self.view().lists.len();
        self.list_cursor = step(self.list_cursor, len, down);
    }

    fn move_task_cursor(&mut self, down: bool) {
        self.controller.dismiss_notice();
        let len = self.view().tasks.len();
        self.task_cursor = step(self.task_cursor, len, down);
    }

    /// Keep both cursors inside the rows currently shown.
    fn clamp_cursors(&mut self) {
        let lists = self.view().lists.len();
        let tasks = self.view().tasks.len();
        self.list_cursor = self.list_cursor.min(lists.saturating_sub(1));
        self.task_cursor = self.task_cursor.min(tasks.saturating_sub(1));
    }
}

/// Move a cursor one row up or down within `len` rows.
const fn step(cursor: usize, len: usize, down: bool) -> usize {
    if down {
        if cursor + 1 < len { cursor + 1 } else { cursor }
    } else {
        cursor.saturating_sub(1)
    }
}
