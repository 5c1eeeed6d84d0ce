//! Client core for a ViaCEP-style postal-code lookup service.
//!
//! # Overview
//! Validates postal codes and state codes, strips accents from free-text
//! fields, builds the service's GET requests, executes them through a
//! `Transport`, and classifies the reply as a result, `NotFound`, or a
//! connection failure.
//!
//! # Design
//! - `CepClient` is stateless and never touches the network; it only builds
//!   `HttpRequest`s and parses `HttpResponse`s.
//! - `Transport` is the I/O seam. `UreqTransport` is the blocking production
//!   implementation with a fixed 5 second timeout.
//! - `AddressLookup` runs exactly one round-trip per call and never retries.
//! - The base URL arrives through `Config`, never from ambient globals.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod lookup;
pub mod normalize;
pub mod transport;
pub mod types;
pub mod validate;

pub use client::CepClient;
pub use config::Config;
pub use error::{ConfigError, LookupError, TransportError, TransportErrorKind, ValidationError};
pub use http::{HttpRequest, HttpResponse};
pub use lookup::AddressLookup;
pub use normalize::remove_diacritics;
pub use transport::{Transport, UreqTransport};
pub use types::{Address, PostalCode, StateCode};
pub use validate::{validate_postal_code, validate_state_code, VALID_STATES};
