//! The query surface consumed by transports (HTTP handlers, tests, embedders).
//!
//! [`AppointmentService`] decodes named string parameters, applies them to a
//! shared [`Store`], and renders results with the text dumper. It knows nothing
//! about HTTP: a transport only has to hand it something implementing
//! [`Params`] and turn the returned `Result` into a response.
//!
//! Parameters sent with an empty value are treated exactly like missing ones.

use crate::appointment::Appointment;
use crate::book::Owner;
use crate::dumper::dump;
use crate::error::{ApptError, Result};
use crate::query;
use crate::store::Store;
use crate::timestamp;
use std::collections::HashMap;
use std::hash::BuildHasher;
use std::sync::Arc;

pub const OWNER_PARAMETER: &str = "owner";
pub const DESCRIPTION_PARAMETER: &str = "description";
pub const BEGIN_PARAMETER: &str = "begin";
pub const END_PARAMETER: &str = "end";

/// A source of named request parameters.
pub trait Params {
    /// The raw value for `name`, if present.
    fn param(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> Params for HashMap<String, String, S> {
    fn param(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Params for [(K, V)] {
    fn param(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> Params for [(K, V); N] {
    fn param(&self, name: &str) -> Option<&str> {
        self[..].param(name)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> Params for Vec<(K, V)> {
    fn param(&self, name: &str) -> Option<&str> {
        self[..].param(name)
    }
}

fn optional<'p, P: Params + ?Sized>(params: &'p P, name: &str) -> Option<&'p str> {
    params.param(name).filter(|v| !v.is_empty())
}

fn required<'p, P: Params + ?Sized>(params: &'p P, name: &str) -> Result<&'p str> {
    optional(params, name).ok_or_else(|| ApptError::MissingParameter(name.to_string()))
}

/// Request-level operations over a shared store.
#[derive(Debug, Clone, Default)]
pub struct AppointmentService {
    store: Arc<Store>,
}

impl AppointmentService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatch a read by which parameters are present:
    ///
    /// - none → every book ([`Self::fetch_everything`])
    /// - `owner` → that owner's book ([`Self::fetch_owner`])
    /// - `owner`, `begin`, `end` → a range query ([`Self::fetch_in_range`])
    ///
    /// Supplying only one of `begin`/`end` is `MissingParameter` for the other, and
    /// a range without an owner is `MissingParameter` for the owner.
    pub fn fetch<P: Params + ?Sized>(&self, params: &P) -> Result<String> {
        let owner = optional(params, OWNER_PARAMETER);
        let begin = optional(params, BEGIN_PARAMETER);
        let end = optional(params, END_PARAMETER);

        match (owner, begin, end) {
            (None, None, None) => Ok(self.fetch_everything()),
            (None, _, _) => Err(ApptError::MissingParameter(OWNER_PARAMETER.to_string())),
            (Some(owner), None, None) => self.fetch_owner(owner),
            (Some(owner), Some(begin), Some(end)) => self.fetch_in_range(owner, begin, end),
            (Some(_), Some(_), None) => Err(ApptError::MissingParameter(END_PARAMETER.to_string())),
            (Some(_), None, Some(_)) => {
                Err(ApptError::MissingParameter(BEGIN_PARAMETER.to_string()))
            }
        }
    }

    /// The owner's book in text form. An unknown owner is not an error: the
    /// result is just the owner line.
    ///
    /// # Errors
    /// `InvalidOwner` if the name is blank or spans lines, since it is echoed
    /// as the owner line of the result.
    pub fn fetch_owner(&self, owner: &str) -> Result<String> {
        let owner = Owner::new(owner)?;
        Ok(self
            .store
            .with_book(owner.as_str(), dump)
            .unwrap_or_else(|| format!("{owner}\n")))
    }

    /// The owner's appointments beginning within `begin..=end`, in text form.
    ///
    /// # Errors
    /// `InvalidOwner` for a blank or multi-line name; `InvalidTimestamp` for an
    /// unparseable bound; `UnknownOwner` if the owner has no book.
    pub fn fetch_in_range(&self, owner: &str, begin: &str, end: &str) -> Result<String> {
        let owner = Owner::new(owner)?;
        let range_begin = timestamp::parse(begin)?;
        let range_end = timestamp::parse(end)?;
        let book = query::between(&self.store, owner.as_str(), range_begin, range_end)?;
        Ok(dump(&book))
    }

    /// Every book in text form, back to back, ordered by owner.
    pub fn fetch_everything(&self) -> String {
        self.store.books().iter().map(dump).collect()
    }

    /// Add one appointment from `owner`, `description`, `begin` and `end`.
    ///
    /// Returns a one-line acknowledgment.
    ///
    /// # Errors
    /// `MissingParameter` (checked in the order owner, description, begin, end),
    /// then any construction error: `InvalidOwner`, `InvalidTimestamp`,
    /// `InvalidDescription` or `InvalidRange`.
    pub fn add<P: Params + ?Sized>(&self, params: &P) -> Result<String> {
        let owner = required(params, OWNER_PARAMETER)?;
        let description = required(params, DESCRIPTION_PARAMETER)?;
        let begin = required(params, BEGIN_PARAMETER)?;
        let end = required(params, END_PARAMETER)?;

        let owner = Owner::new(owner)?;
        let appointment =
            Appointment::new(description, timestamp::parse(begin)?, timestamp::parse(end)?)?;

        let ack = format!("Added appointment: {appointment} for {owner}\n");
        self.store.upsert(&owner, appointment);
        Ok(ack)
    }

    /// Clear the store.
    pub fn reset(&self) -> String {
        self.store.remove_all();
        "All appointment books deleted\n".to_string()
    }
}
