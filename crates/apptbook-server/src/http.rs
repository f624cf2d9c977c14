//! Request routing: maps method + URL + body onto [`AppointmentService`] calls.
//!
//! Kept free of sockets so routing and status mapping can be tested directly.
//!
//! | Method   | Path                      | Service call |
//! |----------|---------------------------|--------------|
//! | `GET`    | `/apptbook/appointments`  | `fetch`      |
//! | `POST`   | `/apptbook/appointments`  | `add`        |
//! | `DELETE` | `/apptbook/appointments`  | `reset`      |
//! | `GET`    | `/health`                 | liveness     |
//!
//! Parameters come from the query string and, for `POST`, also from a
//! form-encoded body. Query-string values win when both name the same key.

use crate::form;
use apptbook::{ApptError, AppointmentService};
use std::io::Read;
use tiny_http::Method;

pub const APPOINTMENTS_PATH: &str = "/apptbook/appointments";
pub const HEALTH_PATH: &str = "/health";

/// Largest request body accepted; anything longer is answered with 413.
pub const MAX_BODY_BYTES: u64 = 64 * 1024;

/// A plain-text response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

impl Reply {
    pub fn ok(body: String) -> Self {
        Self { status: 200, body }
    }

    pub fn error(status: u16, message: impl std::fmt::Display) -> Self {
        Self {
            status,
            body: format!("{message}\n"),
        }
    }
}

/// HTTP status for a failed service call.
pub fn status_for(err: &ApptError) -> u16 {
    match err {
        ApptError::MissingParameter(_) => 412,
        ApptError::UnknownOwner(_) => 404,
        ApptError::Io(_) => 500,
        ApptError::InvalidRange { .. }
        | ApptError::InvalidDescription(_)
        | ApptError::InvalidOwner(_)
        | ApptError::MissingOwner
        | ApptError::MalformedLine { .. }
        | ApptError::InvalidTimestamp { .. } => 400,
    }
}

/// Read at most `limit` bytes of request body as UTF-8.
///
/// Errors come back as the reply to send: 413 past the limit, 400 for a body
/// that cannot be read or is not UTF-8.
pub fn read_body<R: Read>(reader: R, limit: u64) -> Result<String, Reply> {
    let mut buf = Vec::new();
    reader
        .take(limit + 1)
        .read_to_end(&mut buf)
        .map_err(|e| Reply::error(400, format!("unreadable request body: {e}")))?;
    if buf.len() as u64 > limit {
        return Err(Reply::error(413, format!("request body exceeds {limit} bytes")));
    }
    String::from_utf8(buf).map_err(|_| Reply::error(400, "request body is not UTF-8"))
}

/// Route one request.
pub fn handle(service: &AppointmentService, method: &Method, url: &str, body: &str) -> Reply {
    let (path, query) = url.split_once('?').unwrap_or((url, ""));

    if path == HEALTH_PATH {
        return match method {
            Method::Get | Method::Head => Reply::ok("OK\n".to_string()),
            _ => Reply::error(405, "method not allowed"),
        };
    }
    if path != APPOINTMENTS_PATH {
        return Reply::error(404, "not found");
    }

    let mut params = form::parse_pairs(query);
    let result = match method {
        Method::Get => service.fetch(&params),
        Method::Post => {
            params.extend(form::parse_pairs(body.trim_end()));
            service.add(&params)
        }
        Method::Delete => Ok(service.reset()),
        _ => return Reply::error(405, "method not allowed"),
    };

    match result {
        Ok(body) => Reply::ok(body),
        Err(err) => Reply::error(status_for(&err), err),
    }
}
