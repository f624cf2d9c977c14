//! Human-readable rendering of a book. Not meant to be parsed back.

use crate::book::AppointmentBook;
use crate::error::Result;
use std::fmt::Write as _;
use std::io::Write;

/// Render a book as an indented, labelled listing with durations.
///
/// ```text
/// Appointment book for Tanya (1 appointment)
///
///   Dentist
///     Begins:   07/25/2025 9:00 AM
///     Ends:     07/25/2025 10:00 AM
///     Duration: 60 minutes
/// ```
pub fn pretty_print(book: &AppointmentBook) -> String {
    let mut out = String::new();
    let n = book.len();
    let _ = writeln!(
        out,
        "Appointment book for {} ({} appointment{})",
        book.owner(),
        n,
        if n == 1 { "" } else { "s" }
    );

    for appointment in book {
        let minutes = appointment.duration_minutes();
        out.push('\n');
        let _ = writeln!(out, "  {}", appointment.description());
        let _ = writeln!(out, "    Begins:   {}", appointment.begin_string());
        let _ = writeln!(out, "    Ends:     {}", appointment.end_string());
        let _ = writeln!(
            out,
            "    Duration: {} minute{}",
            minutes,
            if minutes == 1 { "" } else { "s" }
        );
    }
    out
}

/// Write the pretty form into any writer.
pub fn pretty_to<W: Write>(book: &AppointmentBook, mut writer: W) -> Result<()> {
    writer.write_all(pretty_print(book).as_bytes())?;
    writer.flush()?;
    Ok(())
}
