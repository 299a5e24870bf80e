//! Sidebar rendering for the list of lists.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// Render the sidebar with every list and its task count.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.focus == PanelFocus::Lists;

    let items: Vec<ListItem> = app
        .view()
        .lists
        .iter()
        .enumerate()
        .map(|(idx, entry)| {
            let marker = if entry.selected { "▸ " } else { "  " };
            let line = Line::from(vec![
                Span::raw(marker),
                Span::raw(&entry.name),
                Span::raw(" "),
                Span::styled(format!("({})", entry.task_count), theme::COUNT),
            ]);

            let style = if idx == app.list_cursor && is_focused {
                theme::CURSOR_ROW
            } else if entry.selected {
                theme::ACCENTED
            } else {
                theme::NORMAL
            };

            ListItem::new(line).style(style)
        })
        .collect();

    let block = Block::default()
        .title(Span::styled("Lists", theme::LISTS_TITLE))
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
