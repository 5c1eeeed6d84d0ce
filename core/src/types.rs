//! Domain types for the address service.
//!
//! # Design
//! `PostalCode` and `StateCode` are validated newtypes; the only way to get
//! one is through `crate::validate`, so holding one means the value already
//! passed the format checks. `Address` mirrors the service's JSON record with
//! English field names and is passed through untouched.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An 8-digit postal code (CEP) with separators removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostalCode(pub(crate) String);

impl PostalCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A two-letter federative unit code (UF), always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateCode(pub(crate) String);

impl StateCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single address record returned by the service.
///
/// Fields are taken as-is; a missing or `null` field decodes as an empty
/// string so one sparse record never hides the rest of a result set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    #[serde(rename = "cep", default, deserialize_with = "null_as_empty")]
    pub postal_code: String,
    #[serde(rename = "uf", default, deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(rename = "localidade", default, deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(rename = "bairro", default, deserialize_with = "null_as_empty")]
    pub neighborhood: String,
    #[serde(rename = "logradouro", default, deserialize_with = "null_as_empty")]
    pub street: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
