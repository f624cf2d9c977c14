//! HTTP front end for a shared [`apptbook::Store`].
//!
//! [`http`] routes requests onto an [`AppointmentService`] without touching
//! sockets; [`spawn_workers`] runs that routing on a `tiny_http` listener.
//! The `apptbook-server` binary is a thin clap wrapper around these.

pub mod form;
pub mod http;

use apptbook::AppointmentService;
use log::{error, info, warn};
use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tiny_http::{Header, Request, Response, Server};

/// Start `workers` threads, each pulling requests from the same listener and
/// sharing one service.
pub fn spawn_workers(
    server: Arc<Server>,
    service: AppointmentService,
    workers: u16,
) -> io::Result<Vec<JoinHandle<()>>> {
    (0..workers)
        .map(|id| {
            let server = Arc::clone(&server);
            let service = service.clone();
            thread::Builder::new()
                .name(format!("apptbook-worker-{id}"))
                .spawn(move || serve(&server, &service))
        })
        .collect()
}

/// Answer requests for the life of the process.
pub fn serve(server: &Server, service: &AppointmentService) {
    loop {
        match server.recv() {
            Ok(rq) => respond(rq, service),
            Err(e) => error!("http recv error: {}", e),
        }
    }
}

fn respond(mut rq: Request, service: &AppointmentService) {
    let method = rq.method().clone();
    let url = rq.url().to_string();

    let reply = match http::read_body(rq.as_reader(), http::MAX_BODY_BYTES) {
        Ok(body) => http::handle(service, &method, &url, &body),
        Err(reply) => reply,
    };
    if reply.status >= 400 {
        warn!("{} {} -> {}: {}", method, url, reply.status, reply.body.trim_end());
    } else {
        info!("{} {} -> {}", method, url, reply.status);
    }

    let mut resp = Response::from_string(reply.body).with_status_code(reply.status);
    if let Ok(ct) = Header::from_bytes(&b"Content-Type"[..], &b"text/plain; charset=utf-8"[..]) {
        resp.add_header(ct);
    }
    if let Err(e) = rq.respond(resp) {
        warn!("{} {}: failed to send response: {}", method, url, e);
    }
}
