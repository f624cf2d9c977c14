//! Remote execution against a running `apptbook-server`.
//!
//! Each method maps onto one route of `/apptbook/appointments`. Books come back
//! in the text format and are parsed with [`apptbook::parse`].

use anyhow::{bail, Context, Result};
use apptbook::service::{BEGIN_PARAMETER, DESCRIPTION_PARAMETER, END_PARAMETER, OWNER_PARAMETER};
use apptbook::AppointmentBook;
use log::debug;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::StatusCode;
use std::time::Duration;

const APPOINTMENTS_PATH: &str = "/apptbook/appointments";

/// Blocking client for the appointment book server.
pub struct RestClient {
    url: String,
    http: Client,
}

impl RestClient {
    /// Client for the server at `http://host:port/apptbook/appointments`.
    pub fn new(host: &str, port: u16) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            url: format!("http://{host}:{port}{APPOINTMENTS_PATH}"),
            http,
        })
    }

    /// Add one appointment. Returns the server's acknowledgment line.
    pub fn add_appointment(
        &self,
        owner: &str,
        description: &str,
        begin: &str,
        end: &str,
    ) -> Result<String> {
        let form = [
            (OWNER_PARAMETER, owner),
            (DESCRIPTION_PARAMETER, description),
            (BEGIN_PARAMETER, begin),
            (END_PARAMETER, end),
        ];
        self.send(self.http.post(&self.url).form(&form))
    }

    /// The owner's whole book. An owner the server has never seen comes back
    /// as an empty book.
    pub fn book(&self, owner: &str) -> Result<AppointmentBook> {
        let body = self.send(self.http.get(&self.url).query(&[(OWNER_PARAMETER, owner)]))?;
        parse_reply(&body)
    }

    /// The owner's appointments beginning within `begin..=end`.
    pub fn between(&self, owner: &str, begin: &str, end: &str) -> Result<AppointmentBook> {
        let query = [
            (OWNER_PARAMETER, owner),
            (BEGIN_PARAMETER, begin),
            (END_PARAMETER, end),
        ];
        let body = self.send(self.http.get(&self.url).query(&query))?;
        parse_reply(&body)
    }

    /// Delete every book on the server.
    pub fn remove_all(&self) -> Result<String> {
        self.send(self.http.delete(&self.url))
    }

    fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request
            .send()
            .with_context(|| format!("Failed to contact server at {}", self.url))?;
        let status = response.status();
        let body = response.text().context("Failed to read server response")?;
        debug!("{} -> {} ({} bytes)", self.url, status, body.len());

        if status != StatusCode::OK {
            bail!("Server returned {}: {}", status, body.trim_end());
        }
        Ok(body)
    }
}

fn parse_reply(body: &str) -> Result<AppointmentBook> {
    apptbook::parse(body).context("Failed to parse server response")
}
