//! Error types for appointment construction, text parsing, and store queries.

use thiserror::Error;

/// Errors that can occur while building, parsing, or querying appointment books.
#[derive(Error, Debug)]
pub enum ApptError {
    /// An appointment's end timestamp precedes its begin timestamp.
    #[error("appointment ends ({end}) before it begins ({begin})")]
    InvalidRange { begin: String, end: String },

    /// The description is blank or contains a `|` or a line break.
    #[error("invalid description {0:?}: must be non-blank and contain no '|' or line breaks")]
    InvalidDescription(String),

    /// The owner name is blank or contains a line break.
    #[error("invalid owner {0:?}: must be non-blank and contain no line breaks")]
    InvalidOwner(String),

    /// The text had no owner line (including totally empty input).
    #[error("missing owner line")]
    MissingOwner,

    /// An appointment line did not split into exactly three `|`-separated fields.
    /// `line` is 1-based.
    #[error("malformed appointment at line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },

    /// A timestamp did not match `MM/DD/YYYY h:mm AM|PM`.
    ///
    /// `line` is the 1-based line number when the timestamp came from a parsed
    /// document; `content` is the raw line, or the raw value when there is no line.
    #[error("invalid timestamp{}: {content:?} (expected MM/DD/YYYY h:mm AM|PM)", at_line(.line))]
    InvalidTimestamp { line: Option<usize>, content: String },

    /// A range query named an owner the store has no book for.
    #[error("no appointment book for owner {0:?}")]
    UnknownOwner(String),

    /// A request omitted a required parameter (or sent it empty).
    #[error("missing required parameter: {0}")]
    MissingParameter(String),

    /// Reading or writing the text form failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn at_line(line: &Option<usize>) -> String {
    match line {
        Some(n) => format!(" at line {n}"),
        None => String::new(),
    }
}

/// Convenience alias used throughout apptbook.
pub type Result<T> = std::result::Result<T, ApptError>;
