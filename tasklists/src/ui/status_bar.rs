//! Status bar rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// Render the status bar at the bottom of the screen.
///
/// Shows the current notice when there is one, key help otherwise.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let help_text = if app.prompt.is_some() {
        "Enter: submit | Esc: cancel | ←→: move cursor"
    } else {
        match app.focus {
            PanelFocus::Lists => {
                "Tab: switch panel | ↑↓/jk: navigate | Enter: open | n: new list | d: delete | q: quit"
            }
            PanelFocus::Tasks => {
                "Tab: switch panel | ↑↓/jk: navigate | Space: toggle | a: add task | t/T: set/clear due | d: delete | q: quit"
            }
        }
    };

    let mut spans = vec![
        Span::styled(
            concat!("Tasklists v", env!("CARGO_PKG_VERSION")),
            theme::BOLD,
        ),
        Span::raw(" | "),
    ];
    match &app.view().notice {
        Some(notice) => spans.push(Span::styled(notice.as_str(), theme::NOTICE)),
        None => spans.push(Span::styled(help_text, theme::DIMMED)),
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(theme::STATUS_BAR);
    frame.render_widget(paragraph, area);
}
