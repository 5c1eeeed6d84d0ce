//! Error types for the address lookup core.
//!
//! # Design
//! Validation failures are detected before any request is built and never
//! reach the network. Lookup failures are a closed two-way split: the service
//! answered "no match" (`NotFound`), or the round-trip itself failed
//! (`Connection`). The transport keeps the precise cause in `TransportError`
//! so callers can tell a timeout from a DNS failure even though the shell
//! reports them all the same way.

/// Local input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Postal code is not exactly 8 digits once separators are removed.
    #[error("invalid postal code: expected exactly 8 digits")]
    InvalidFormat,

    /// State code is not one of the 27 federative units.
    #[error("invalid state code: {0:?}")]
    InvalidState(String),
}

/// Outcome of a well-formed lookup that did not produce a result.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    /// The service answered but reported no matching address.
    #[error("no address found")]
    NotFound,

    /// The round-trip failed or the response could not be interpreted.
    #[error("connection error: {0}")]
    Connection(#[from] TransportError),
}

impl LookupError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LookupError::NotFound)
    }
}

/// Why a single request/response exchange failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("host not found")]
    HostNotFound,

    #[error("connection failed")]
    ConnectionFailed,

    /// The service answered with a non-2xx status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// The body was not valid JSON, or not a record where one was required.
    #[error("malformed response body: {0}")]
    MalformedBody(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("{0}")]
    Other(String),
}

/// Coarse classification of a `TransportError`, without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    Timeout,
    Dns,
    Connect,
    Http,
    Body,
    Other,
}

impl TransportError {
    pub fn kind(&self) -> TransportErrorKind {
        match self {
            TransportError::Timeout => TransportErrorKind::Timeout,
            TransportError::HostNotFound => TransportErrorKind::Dns,
            TransportError::ConnectionFailed | TransportError::Io(_) => TransportErrorKind::Connect,
            TransportError::Status(_) => TransportErrorKind::Http,
            TransportError::MalformedBody(_) => TransportErrorKind::Body,
            TransportError::Other(_) => TransportErrorKind::Other,
        }
    }
}

/// The service base URL could not be determined.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set; point it at the address service, e.g. https://viacep.com.br/ws")]
    MissingBaseUrl(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_errors_collapse_into_connection() {
        let err: LookupError = TransportError::Timeout.into();
        assert!(matches!(err, LookupError::Connection(TransportError::Timeout)));
        assert!(!err.is_not_found());
    }

    #[test]
    fn kinds_distinguish_failure_causes() {
        assert_eq!(TransportError::Timeout.kind(), TransportErrorKind::Timeout);
        assert_eq!(TransportError::HostNotFound.kind(), TransportErrorKind::Dns);
        assert_eq!(TransportError::Status(503).kind(), TransportErrorKind::Http);
        assert_eq!(
            TransportError::Io("reset".to_string()).kind(),
            TransportErrorKind::Connect
        );
    }

    #[test]
    fn invalid_state_mentions_input() {
        let msg = ValidationError::InvalidState("XX".to_string()).to_string();
        assert!(msg.contains("XX"));
    }
}
