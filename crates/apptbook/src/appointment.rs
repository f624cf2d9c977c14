//! Appointments and the canonical ordering between them.
//!
//! An [`Appointment`] is an immutable value: a description plus a begin and end
//! timestamp. Every invariant is checked in [`Appointment::new`], so any value of
//! this type can be rendered by the text codec and parsed back unchanged.

use crate::error::{ApptError, Result};
use crate::timestamp;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// A single time-bounded appointment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Appointment {
    description: String,
    begin: NaiveDateTime,
    end: NaiveDateTime,
}

impl Appointment {
    /// Build an appointment.
    ///
    /// The description is trimmed; both timestamps are truncated to the minute.
    ///
    /// # Errors
    /// - `InvalidDescription` if the description is blank or contains `|`, `\n` or `\r`.
    /// - `InvalidRange` if `end` is before `begin`.
    pub fn new(
        description: impl AsRef<str>,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self> {
        let raw = description.as_ref();
        let description = raw.trim();
        if description.is_empty() || description.contains(['|', '\n', '\r']) {
            return Err(ApptError::InvalidDescription(raw.to_string()));
        }

        let begin = timestamp::truncate_to_minute(begin);
        let end = timestamp::truncate_to_minute(end);
        if end < begin {
            return Err(ApptError::InvalidRange {
                begin: timestamp::format(&begin),
                end: timestamp::format(&end),
            });
        }

        Ok(Self {
            description: description.to_string(),
            begin,
            end,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Begin timestamp in the canonical `MM/DD/YYYY h:mm AM|PM` form.
    pub fn begin_string(&self) -> String {
        timestamp::format(&self.begin)
    }

    /// End timestamp in the canonical `MM/DD/YYYY h:mm AM|PM` form.
    pub fn end_string(&self) -> String {
        timestamp::format(&self.end)
    }

    /// Length of the appointment in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.begin).num_minutes()
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} from {} until {}",
            self.description,
            self.begin_string(),
            self.end_string()
        )
    }
}

/// The canonical total order over appointments.
///
/// Begin ascending, then end ascending, then description in byte order.
/// Appointments comparing `Equal` are identical in every field.
pub fn compare(a: &Appointment, b: &Appointment) -> Ordering {
    a.begin
        .cmp(&b.begin)
        .then_with(|| a.end.cmp(&b.end))
        .then_with(|| a.description.as_bytes().cmp(b.description.as_bytes()))
}

impl Ord for Appointment {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Appointment {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
