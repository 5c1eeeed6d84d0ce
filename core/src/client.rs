//! Stateless request builder and response parser for the address service.
//!
//! # Design
//! `CepClient` holds only a `base_url`. Each lookup is split into a `build_*`
//! method that produces an `HttpRequest` and a `parse_*` method that consumes
//! an `HttpResponse`. `AddressLookup` glues the two together with a
//! `Transport`; the split keeps response interpretation testable without a
//! network.

use serde_json::Value;
use tracing::debug;

use crate::error::{LookupError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::normalize::remove_diacritics;
use crate::types::{Address, PostalCode, StateCode};

/// Marker key the service sets on a record for an unknown postal code.
const NOT_FOUND_MARKER: &str = "erro";

#[derive(Debug, Clone)]
pub struct CepClient {
    base_url: String,
}

impl CepClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/{code}/json/`
    pub fn build_lookup_by_postal_code(&self, code: &PostalCode) -> HttpRequest {
        get(format!("{}/{code}/json/", self.base_url))
    }

    /// `GET {base}/{uf}/{city}/{street}/json/`, with city and street trimmed,
    /// stripped of accents and percent-encoded.
    pub fn build_lookup_by_address(&self, state: &StateCode, city: &str, street: &str) -> HttpRequest {
        let city = path_segment(city);
        let street = path_segment(street);
        get(format!("{}/{state}/{city}/{street}/json/", self.base_url))
    }

    pub fn parse_lookup_by_postal_code(&self, response: HttpResponse) -> Result<Address, LookupError> {
        let value = decode_body(&response)?;
        if value.get(NOT_FOUND_MARKER).is_some() {
            debug!("service flagged postal code as unknown");
            return Err(LookupError::NotFound);
        }
        decode_record(value).map_err(LookupError::Connection)
    }

    /// A body that is not an array, or an array with no address records,
    /// counts as "no match". Elements that are not records are skipped.
    pub fn parse_lookup_by_address(&self, response: HttpResponse) -> Result<Vec<Address>, LookupError> {
        let Value::Array(elements) = decode_body(&response)? else {
            debug!("address search returned a non-array body");
            return Err(LookupError::NotFound);
        };
        let total = elements.len();
        let addresses: Vec<Address> = elements
            .into_iter()
            .filter_map(|element| match decode_record(element) {
                Ok(address) => Some(address),
                Err(e) => {
                    debug!(error = %e, "skipping element that is not an address record");
                    None
                }
            })
            .collect();
        if addresses.is_empty() {
            debug!(total, "address search had no usable records");
            return Err(LookupError::NotFound);
        }
        Ok(addresses)
    }
}

fn get(url: String) -> HttpRequest {
    HttpRequest {
        url,
        headers: vec![("accept".to_string(), "application/json".to_string())],
    }
}

fn path_segment(text: &str) -> String {
    urlencoding::encode(&remove_diacritics(text.trim())).into_owned()
}

/// Decode one JSON object as an `Address`. Serde would also accept an array
/// positionally, so anything but an object is rejected up front.
fn decode_record(value: Value) -> Result<Address, TransportError> {
    if !value.is_object() {
        return Err(TransportError::MalformedBody(format!("expected an object, got {value}")));
    }
    serde_json::from_value(value).map_err(|e| TransportError::MalformedBody(e.to_string()))
}

/// Reject non-2xx statuses, then parse the body as JSON.
fn decode_body(response: &HttpResponse) -> Result<Value, TransportError> {
    if !response.is_success() {
        return Err(TransportError::Status(response.status));
    }
    serde_json::from_str(&response.body).map_err(|e| TransportError::MalformedBody(e.to_string()))
}
