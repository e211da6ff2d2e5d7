//! Serde implementation of the [`Deserializer`] trait.
//!
//! This module provides the JSON deserializer used by default for
//! response payloads.
//!
//! [`Deserializer`]: crate::core::Deserializer

use crate::core::{DecodeError, Deserializer};

/// JSON deserializer backed by [`serde_json`].
///
/// Installed by default when building a [`Client`]; replace it through
/// the builder to decode other payload formats.
///
/// [`Client`]: crate::client::Client
/// [`serde_json`]: https://crates.io/crates/serde_json
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeDeserializer;

impl Deserializer for SerdeDeserializer {
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, DecodeError>
    where
        T: serde::de::DeserializeOwned,
    {
        serde_json::from_slice(bytes).map_err(|error| DecodeError {
            details: error.to_string(),
        })
    }
}
