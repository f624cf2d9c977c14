//! Text parser — reads the format written by [`crate::dumper`] back into an
//! [`AppointmentBook`].
//!
//! # Rules
//!
//! - The first line is the owner. Empty input, or a blank first line, fails with
//!   `MissingOwner`.
//! - Every later line that is not blank must hold exactly three `|`-separated
//!   fields: description, begin, end. Anything else is `MalformedLine`.
//! - Fields are trimmed, so the ` | `-padded variant of the format is accepted.
//! - A timestamp that does not parse is `InvalidTimestamp`; an appointment that
//!   ends before it begins is `InvalidRange`.
//! - Blank lines are skipped and `\r\n` endings are accepted.
//!
//! Line numbers in errors are 1-based and count the owner line.

use crate::appointment::Appointment;
use crate::book::{AppointmentBook, Owner};
use crate::dumper::SEPARATOR;
use crate::error::{ApptError, Result};
use crate::timestamp;
use std::io::Read;

/// Parse a book from its text form.
pub fn parse(text: &str) -> Result<AppointmentBook> {
    let mut lines = text.lines();

    let owner = lines
        .next()
        .and_then(|line| Owner::new(line).ok())
        .ok_or(ApptError::MissingOwner)?;
    let mut book = AppointmentBook::new(owner);

    for (idx, line) in lines.enumerate() {
        // +2: one for the owner line, one for 1-based numbering.
        let line_no = idx + 2;
        if line.trim().is_empty() {
            continue;
        }
        book.add(parse_appointment(line, line_no)?);
    }

    Ok(book)
}

/// Parse a book from a reader, e.g. an open file.
pub fn parse_from<R: Read>(mut reader: R) -> Result<AppointmentBook> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse(&text)
}

fn parse_appointment(line: &str, line_no: usize) -> Result<Appointment> {
    let malformed = || ApptError::MalformedLine {
        line: line_no,
        content: line.to_string(),
    };

    let fields: Vec<&str> = line.split(SEPARATOR).map(str::trim).collect();
    let [description, begin, end] = fields[..] else {
        return Err(malformed());
    };
    if description.is_empty() {
        return Err(malformed());
    }

    let begin = parse_field(begin, line, line_no)?;
    let end = parse_field(end, line, line_no)?;

    Appointment::new(description, begin, end).map_err(|e| match e {
        ApptError::InvalidDescription(_) => malformed(),
        other => other,
    })
}

fn parse_field(value: &str, line: &str, line_no: usize) -> Result<chrono::NaiveDateTime> {
    timestamp::parse(value).map_err(|_| ApptError::InvalidTimestamp {
        line: Some(line_no),
        content: line.to_string(),
    })
}
