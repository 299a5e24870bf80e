//! Due dates on tasks.
//!
//! Stored as `YYYY-MM-DDTHH:MM` (the form a browser `datetime-local` field
//! produces) and shown as `YYYY-MM-DD HH:MM`. Typed input may use either
//! separator, may carry seconds, or may be a bare date meaning midnight.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use super::{INVALID_DUE, ListError};

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
];

/// Parses typed or stored due-date text.
///
/// # Errors
///
/// Returns [`ListError::InvalidInput`] if the text is not a date or date-time
/// in one of the accepted forms.
pub fn parse_due(text: &str) -> Result<NaiveDateTime, ListError> {
    let text = text.trim();
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
        .ok_or(ListError::InvalidInput(INVALID_DUE))
}

/// Stored form. Seconds are kept only when non-zero.
#[must_use]
pub fn to_stored(due: &NaiveDateTime) -> String {
    if due.second() == 0 {
        due.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        due.format("%Y-%m-%dT%H:%M:%S").to_string()
    }
}

/// Form shown next to the task.
#[must_use]
pub fn to_display(due: &NaiveDateTime) -> String {
    due.format("%Y-%m-%d %H:%M").to_string()
}
