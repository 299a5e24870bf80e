//! Terminal UI rendering.
//!
//! Every panel draws from the last [`View`](crate::presentation::View) the
//! controller rendered; nothing here reads the collection directly.

pub mod prompt;
pub mod sidebar;
pub mod status_bar;
pub mod task_panel;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;
use crate::storage::KeyValueStore;

/// Main draw function for the entire UI.
pub fn draw<S: KeyValueStore>(frame: &mut Frame, app: &App<S>) {
    // Create main layout with status bar at bottom
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(frame.area());

    let content_area = main_chunks[0];
    let status_area = main_chunks[1];

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30), // Lists
            Constraint::Percentage(70), // Tasks
        ])
        .split(content_area);

    sidebar::render(frame, content_chunks[0], app);
    task_panel::render(frame, content_chunks[1], app);
    status_bar::render(frame, status_area, app);

    if let Some(prompt) = &app.prompt {
        prompt::render(frame, frame.area(), prompt);
    }
}
