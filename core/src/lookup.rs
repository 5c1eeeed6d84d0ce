//! Address lookups: one validated input, one GET, one classified outcome.

use tracing::debug;

use crate::client::CepClient;
use crate::config::Config;
use crate::error::LookupError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Address, PostalCode, StateCode};

/// Couples a `CepClient` with the `Transport` that executes its requests.
#[derive(Clone)]
pub struct AddressLookup<T> {
    client: CepClient,
    transport: T,
}

impl AddressLookup<UreqTransport> {
    /// Production lookup using `ureq` and the configured timeout.
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            CepClient::new(&config.base_url),
            UreqTransport::new(config.timeout),
        )
    }
}

impl<T: Transport> AddressLookup<T> {
    pub fn new(client: CepClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &CepClient {
        &self.client
    }

    pub fn lookup_by_postal_code(&self, code: &PostalCode) -> Result<Address, LookupError> {
        let request = self.client.build_lookup_by_postal_code(code);
        debug!(url = %request.url, "looking up postal code");
        let response = self.transport.execute(request)?;
        self.client.parse_lookup_by_postal_code(response)
    }

    pub fn lookup_by_address(
        &self,
        state: &StateCode,
        city: &str,
        street: &str,
    ) -> Result<Vec<Address>, LookupError> {
        let request = self.client.build_lookup_by_address(state, city, street);
        debug!(url = %request.url, "searching addresses");
        let response = self.transport.execute(request)?;
        let addresses = self.client.parse_lookup_by_address(response)?;
        debug!(count = addresses.len(), "address search matched");
        Ok(addresses)
    }
}
