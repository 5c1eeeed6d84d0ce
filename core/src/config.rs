//! Runtime configuration for the lookup client.

use std::time::Duration;

use crate::error::ConfigError;

/// Environment variable holding the service base URL.
pub const BASE_URL_VAR: &str = "API_VIACEP_URL";

/// Per-request timeout applied to every lookup.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Read the base URL from `API_VIACEP_URL`. Unset or blank is an error.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, but resolving variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(BASE_URL_VAR) {
            Some(url) if !url.trim().is_empty() => Ok(Self::new(url.trim())),
            _ => Err(ConfigError::MissingBaseUrl(BASE_URL_VAR)),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
