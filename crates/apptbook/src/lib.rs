//! # apptbook
//!
//! Appointment books for many owners, with a lossless line-oriented text format
//! and a concurrent in-memory store.
//!
//! ## Quick start
//!
//! ```rust
//! use apptbook::{dump, parse, Appointment, AppointmentBook, Owner};
//! use chrono::NaiveDate;
//!
//! let day = NaiveDate::from_ymd_opt(2025, 7, 25).unwrap();
//! let mut book = AppointmentBook::new(Owner::new("Tanya").unwrap());
//! book.add(Appointment::new(
//!     "Dentist",
//!     day.and_hms_opt(9, 0, 0).unwrap(),
//!     day.and_hms_opt(10, 0, 0).unwrap(),
//! ).unwrap());
//!
//! let text = dump(&book);
//! assert_eq!(text, "Tanya\nDentist|07/25/2025 9:00 AM|07/25/2025 10:00 AM\n");
//! assert_eq!(parse(&text).unwrap(), book);
//! ```
//!
//! ## Modules
//!
//! - [`appointment`] — `Appointment` and its canonical ordering
//! - [`book`] — `Owner` and the always-sorted `AppointmentBook`
//! - [`dumper`] — book → text
//! - [`parser`] — text → book
//! - [`pretty`] — human-readable listing
//! - [`store`] — shared owner → book map
//! - [`query`] — inclusive begin-time range queries
//! - [`service`] — parameter-level query surface for transports
//! - [`timestamp`] — the `MM/DD/YYYY h:mm AM|PM` format
//! - [`error`] — error types

pub mod appointment;
pub mod book;
pub mod dumper;
pub mod error;
pub mod parser;
pub mod pretty;
pub mod query;
pub mod service;
pub mod store;
pub mod timestamp;

pub use appointment::Appointment;
pub use book::{AppointmentBook, Owner};
pub use dumper::{dump, dump_to};
pub use error::{ApptError, Result};
pub use parser::{parse, parse_from};
pub use pretty::{pretty_print, pretty_to};
pub use query::between;
pub use service::{AppointmentService, Params};
pub use store::Store;
