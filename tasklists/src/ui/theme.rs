//! Colors and styles shared by the panels.

use ratatui::style::{Color, Modifier, Style};

const TEXT: Color = Color::White;
const MUTED: Color = Color::Gray;
const ACCENT: Color = Color::Cyan;
const STATUS_BG: Color = Color::Rgb(30, 30, 50);

/// Plain text and unfocused borders.
pub const NORMAL: Style = Style::new().fg(TEXT);

/// Hints and key help.
pub const DIMMED: Style = Style::new().fg(MUTED);

/// Version tag in the status bar.
pub const BOLD: Style = NORMAL.add_modifier(Modifier::BOLD);

/// Focused borders and the selected list's name.
pub const ACCENTED: Style = Style::new().fg(ACCENT).add_modifier(Modifier::BOLD);

/// Row under the cursor in the focused panel.
pub const CURSOR_ROW: Style = Style::new()
    .fg(Color::Black)
    .bg(ACCENT)
    .add_modifier(Modifier::BOLD);

/// Task counts in the sidebar.
pub const COUNT: Style = Style::new().fg(Color::LightBlue);

/// Completed tasks, struck through.
pub const COMPLETED: Style = DIMMED.add_modifier(Modifier::CROSSED_OUT);

/// Notices in the status bar.
pub const NOTICE: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Text being typed into a prompt.
pub const INPUT: Style = BOLD;

pub const STATUS_BAR: Style = Style::new().fg(TEXT).bg(STATUS_BG);

pub const LISTS_TITLE: Style = Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD);

pub const TASKS_TITLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Border style for a panel depending on focus.
#[must_use]
pub const fn border(focused: bool) -> Style {
    if focused { ACCENTED } else { NORMAL }
}
