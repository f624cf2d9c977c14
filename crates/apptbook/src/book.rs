//! Appointment books: one owner plus an always-sorted list of appointments.

use crate::appointment::Appointment;
use crate::error::{ApptError, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

/// A validated owner name.
///
/// Owners are kept verbatim (no trimming) so the owner line of the text form
/// round-trips byte for byte. A blank name, or one containing a line break, is
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Owner(String);

impl Owner {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() || name.contains(['\n', '\r']) {
            return Err(ApptError::InvalidOwner(name));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Owner {
    type Err = ApptError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl AsRef<str> for Owner {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Owner {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The named collection of appointments for one owner.
///
/// The appointment sequence is kept in canonical order (see
/// [`crate::appointment::compare`]) on every insertion, so two books with the same
/// contents enumerate identically no matter how they were filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentBook {
    owner: Owner,
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    /// Create an empty book.
    pub fn new(owner: Owner) -> Self {
        Self {
            owner,
            appointments: Vec::new(),
        }
    }

    pub fn owner(&self) -> &Owner {
        &self.owner
    }

    /// Appointments in canonical order.
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Insert an appointment at its sorted position.
    ///
    /// Duplicates are kept; an appointment equal in order to existing ones is
    /// placed after them.
    pub fn add(&mut self, appointment: Appointment) {
        let at = self.appointments.partition_point(|a| a <= &appointment);
        self.appointments.insert(at, appointment);
    }

    /// A new book for the same owner holding every appointment whose begin time
    /// lies in `range_begin..=range_end`. End times play no part.
    pub fn between(&self, range_begin: NaiveDateTime, range_end: NaiveDateTime) -> Self {
        // Already sorted, so the filtered copy is too.
        let appointments = self
            .appointments
            .iter()
            .filter(|a| range_begin <= a.begin() && a.begin() <= range_end)
            .cloned()
            .collect();
        Self {
            owner: self.owner.clone(),
            appointments,
        }
    }
}

impl Extend<Appointment> for AppointmentBook {
    fn extend<I: IntoIterator<Item = Appointment>>(&mut self, iter: I) {
        for appointment in iter {
            self.add(appointment);
        }
    }
}

impl<'a> IntoIterator for &'a AppointmentBook {
    type Item = &'a Appointment;
    type IntoIter = std::slice::Iter<'a, Appointment>;

    fn into_iter(self) -> Self::IntoIter {
        self.appointments.iter()
    }
}

impl fmt::Display for AppointmentBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.appointments.len();
        write!(
            f,
            "{}'s appointment book with {} appointment{}",
            self.owner,
            n,
            if n == 1 { "" } else { "s" }
        )
    }
}
