//! `apptbook-server` — serves the shared appointment store over HTTP.
//!
//! ```sh
//! RUST_LOG=info apptbook-server --addr 0.0.0.0:8080 --workers 8
//!
//! curl -d owner=Tanya -d description=Dentist \
//!      --data-urlencode "begin=07/25/2025 9:00 AM" \
//!      --data-urlencode "end=07/25/2025 10:00 AM" \
//!      http://localhost:8080/apptbook/appointments
//! curl "http://localhost:8080/apptbook/appointments?owner=Tanya"
//! curl -X DELETE http://localhost:8080/apptbook/appointments
//! ```
//!
//! Every worker thread pulls requests from the same listener and shares one
//! [`AppointmentService`]. State lives in memory for the life of the process.

use anyhow::{anyhow, Context, Result};
use apptbook::AppointmentService;
use clap::Parser;
use env_logger::{Builder, Env};
use log::{error, info};
use std::sync::Arc;
use tiny_http::Server;

#[derive(Parser, Debug)]
#[command(
    name = "apptbook-server",
    version,
    about = "HTTP front end for the shared appointment book store"
)]
struct Opt {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:8080")]
    addr: String,
    /// Number of worker threads handling requests
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u16).range(1..))]
    workers: u16,
}

fn init_logger() {
    // Level from RUST_LOG, default info.
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

fn main() {
    init_logger();

    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let opt = Opt::parse();

    let server = Server::http(&opt.addr).map_err(|e| anyhow!("bind http at {}: {}", opt.addr, e))?;
    info!("apptbook-server listening on {} ({} workers)", opt.addr, opt.workers);

    let workers = apptbook_server::spawn_workers(
        Arc::new(server),
        AppointmentService::default(),
        opt.workers,
    )
    .context("spawn worker threads")?;

    for handle in workers {
        if handle.join().is_err() {
            error!("worker thread panicked");
        }
    }
    Ok(())
}
