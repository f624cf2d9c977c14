//! Range queries over the store.
//!
//! Inclusion depends on the begin timestamp only: an appointment is returned when
//! `range_begin <= begin <= range_end`. An appointment that starts before the
//! range but runs into it is not included. An inverted range simply matches
//! nothing.

use crate::book::AppointmentBook;
use crate::error::{ApptError, Result};
use crate::store::Store;
use chrono::NaiveDateTime;

/// The owner's appointments beginning within `range_begin..=range_end`, as a new
/// book for the same owner.
///
/// # Errors
/// `UnknownOwner` if the store holds no book for `owner`. An owner whose book has
/// no appointments in range yields an empty book, not an error.
pub fn between(
    store: &Store,
    owner: &str,
    range_begin: NaiveDateTime,
    range_end: NaiveDateTime,
) -> Result<AppointmentBook> {
    store
        .with_book(owner, |book| book.between(range_begin, range_end))
        .ok_or_else(|| ApptError::UnknownOwner(owner.to_string()))
}
