//! The fixed `MM/DD/YYYY h:mm AM|PM` timestamp format shared by the text codec,
//! the CLI, and the request parameters.
//!
//! Timestamps carry no timezone and have minute granularity. Rendering always
//! uses two-digit month/day and a 12-hour clock without a leading zero on the
//! hour (`07/25/2025 9:00 AM`). Parsing is a little more lenient: one-digit
//! months, days and hours and lowercase `am`/`pm` are accepted.

use crate::error::{ApptError, Result};
use chrono::{NaiveDateTime, Timelike};

/// `chrono` format string used to render timestamps.
pub const FORMAT: &str = "%m/%d/%Y %-I:%M %p";

/// `chrono` format string used to parse timestamps.
const PARSE_FORMAT: &str = "%m/%d/%Y %I:%M %p";

/// Render a timestamp in the canonical `MM/DD/YYYY h:mm AM|PM` form.
pub fn format(ts: &NaiveDateTime) -> String {
    ts.format(FORMAT).to_string()
}

/// Parse a timestamp in `MM/DD/YYYY h:mm AM|PM` form.
///
/// Surrounding whitespace is ignored. On failure the error carries the raw value
/// and no line number; the parser fills in line context itself.
pub fn parse(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), PARSE_FORMAT).map_err(|_| {
        ApptError::InvalidTimestamp {
            line: None,
            content: value.to_string(),
        }
    })
}

/// Drop seconds and sub-second precision.
pub(crate) fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}
