//! Centered text prompt.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use super::theme;
use crate::app::Prompt;

/// Render the prompt box over the middle of `area`.
pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt) {
    let popup = centered(area, 50, 3);

    // Build the input text with cursor
    let mut display_text = prompt.input.clone();
    let byte_idx = display_text
        .char_indices()
        .nth(prompt.cursor_position)
        .map_or(display_text.len(), |(idx, _)| idx);
    display_text.insert(byte_idx, '█');

    let block = Block::default()
        .title(prompt.request.prompt())
        .borders(Borders::ALL)
        .border_style(theme::ACCENTED);

    let paragraph =
        Paragraph::new(Line::from(Span::styled(display_text, theme::INPUT))).block(block);

    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

/// A `percent_x`-wide, `height`-tall rectangle centered in `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);
    popup
}
