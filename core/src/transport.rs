//! Executes `HttpRequest`s against the network.
//!
//! # Design
//! `Transport` is the single I/O seam. `UreqTransport` is the production
//! implementation; tests plug in canned responses instead. HTTP status codes
//! come back as data so `CepClient` decides what a 4xx or 5xx means.

use std::time::Duration;

use tracing::warn;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Performs exactly one round-trip per call. Implementations must not retry.
pub trait Transport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request)
    }
}

/// Blocking transport backed by a `ureq` agent with a global timeout.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }
}

impl Transport for UreqTransport {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = self.agent.get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }

        let mut response = builder
            .call()
            .map_err(|e| failed(&request.url, "request failed", e))?;

        let status = response.status().as_u16();
        let body = response
            .body_mut()
            .read_to_string()
            .map_err(|e| failed(&request.url, "reading response body failed", e))?;
        Ok(HttpResponse { status, body })
    }
}

/// Classify and log a failure at either stage of the exchange.
fn failed(url: &str, stage: &'static str, err: ureq::Error) -> TransportError {
    let err = classify(err);
    warn!(url, error = %err, kind = ?err.kind(), "{stage}");
    err
}

fn classify(err: ureq::Error) -> TransportError {
    match err {
        ureq::Error::Timeout(_) => TransportError::Timeout,
        ureq::Error::HostNotFound => TransportError::HostNotFound,
        ureq::Error::ConnectionFailed => TransportError::ConnectionFailed,
        ureq::Error::StatusCode(status) => TransportError::Status(status),
        ureq::Error::Io(e) => TransportError::Io(e.to_string()),
        other => TransportError::Other(other.to_string()),
    }
}
