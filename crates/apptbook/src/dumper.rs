//! Text dumper — renders an [`AppointmentBook`] in the line-oriented text format.
//!
//! The format is the one [`crate::parser`] reads back:
//!
//! ```text
//! <owner>
//! <description>|<MM/DD/YYYY h:mm AM|PM>|<MM/DD/YYYY h:mm AM|PM>
//! ...
//! ```
//!
//! - The owner line is always written, even for an empty book.
//! - Appointments appear in canonical order, one per line.
//! - Every line ends with `\n`; nothing follows the last appointment.
//!
//! The same bytes serve as the on-disk file and the HTTP response body.
//!
//! # Example
//! ```
//! use apptbook::{dump, Appointment, AppointmentBook, Owner};
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
//! assert_eq!(
//!     dump(&book),
//!     "Tanya\nDentist|07/25/2025 9:00 AM|07/25/2025 10:00 AM\n"
//! );
//! ```

use crate::appointment::Appointment;
use crate::book::AppointmentBook;
use crate::error::Result;
use std::io::Write;

/// Field separator between description, begin and end.
pub const SEPARATOR: char = '|';

/// Render a book to a string.
pub fn dump(book: &AppointmentBook) -> String {
    let mut out = String::new();
    out.push_str(book.owner().as_str());
    out.push('\n');
    for appointment in book {
        push_line(appointment, &mut out);
    }
    out
}

/// Render a book into any writer.
pub fn dump_to<W: Write>(book: &AppointmentBook, mut writer: W) -> Result<()> {
    writer.write_all(dump(book).as_bytes())?;
    writer.flush()?;
    Ok(())
}

fn push_line(appointment: &Appointment, out: &mut String) {
    out.push_str(appointment.description());
    out.push(SEPARATOR);
    out.push_str(&appointment.begin_string());
    out.push(SEPARATOR);
    out.push_str(&appointment.end_string());
    out.push('\n');
}
