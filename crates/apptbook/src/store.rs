//! The shared, multi-owner appointment store.
//!
//! One [`AppointmentBook`] per owner, created on first write. The whole map sits
//! behind a single `RwLock`: writers (`upsert`, `remove_all`) are exclusive, and
//! readers finish walking the map or a book before the lock is released. Nothing
//! here blocks on I/O, so the lock is only ever held for in-memory work bounded
//! by the size of the affected book.

use crate::appointment::Appointment;
use crate::book::{AppointmentBook, Owner};
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Process-wide mapping from owner name to book.
#[derive(Debug, Default)]
pub struct Store {
    books: RwLock<BTreeMap<String, AppointmentBook>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the owner's book, or `None` if the owner has none.
    ///
    /// Never creates a book.
    pub fn get(&self, owner: &str) -> Option<AppointmentBook> {
        self.books.read().get(owner).cloned()
    }

    /// Run `f` against the owner's book while holding the read lock.
    ///
    /// Returns `None` without calling `f` when the owner has no book.
    pub fn with_book<T>(&self, owner: &str, f: impl FnOnce(&AppointmentBook) -> T) -> Option<T> {
        self.books.read().get(owner).map(f)
    }

    /// Add an appointment to the owner's book, creating the book if needed.
    pub fn upsert(&self, owner: &Owner, appointment: Appointment) {
        let mut books = self.books.write();
        books
            .entry(owner.as_str().to_string())
            .or_insert_with(|| AppointmentBook::new(owner.clone()))
            .add(appointment);
    }

    /// Drop every book.
    pub fn remove_all(&self) {
        self.books.write().clear();
    }

    /// Snapshot of every book, ordered by owner name.
    pub fn books(&self) -> Vec<AppointmentBook> {
        self.books.read().values().cloned().collect()
    }

    /// Number of owners with a book.
    pub fn len(&self) -> usize {
        self.books.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.read().is_empty()
    }
}
