//! Task panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::theme;
use crate::app::{App, PanelFocus};
use crate::storage::KeyValueStore;

/// Render the selected list's tasks, or a hint when nothing is selected.
pub fn render<S: KeyValueStore>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let is_focused = app.focus == PanelFocus::Tasks;
    let view = app.view();

    let title = if view.has_selection() {
        format!("{} ({})", view.header, view.selected_task_count)
    } else {
        view.header.clone()
    };

    let block = Block::default()
        .title(Span::styled(title, theme::TASKS_TITLE))
        .borders(Borders::ALL)
        .border_style(theme::border(is_focused));

    if !view.has_selection() {
        let hint = Paragraph::new(Line::from(Span::styled(
            "Choose a list on the left, or press n to create one.",
            theme::DIMMED,
        )))
        .block(block);
        frame.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = view
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let checkbox = if task.completed { "[✓]" } else { "[ ]" };
            let style = if task.completed {
                theme::COMPLETED
            } else {
                theme::NORMAL
            };

            let mut spans = vec![
                Span::styled(checkbox, style),
                Span::raw(" "),
                Span::styled(&task.text, style),
            ];
            if let Some(due) = &task.due {
                spans.push(Span::styled(format!("  due {due}"), theme::DIMMED));
            }
            let line = Line::from(spans);

            let item = ListItem::new(line);
            if is_focused && idx == app.task_cursor {
                item.style(theme::CURSOR_ROW)
            } else {
                item
            }
        })
        .collect();

    let list = List::new(items).block(block);

    frame.render_widget(list, area);
}
