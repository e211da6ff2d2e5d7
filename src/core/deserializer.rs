//! Deserialization of response payloads.
//!
//! This module contains the [`Deserializer`] trait which is used to
//! turn response bytes into typed values.
//!
//! You can implement this trait for your own types, or use the provided
//! [`SerdeDeserializer`].
//!
//! [`SerdeDeserializer`]: crate::providers::deserialization_serde::SerdeDeserializer

/// A payload that could not be decoded.
///
/// Carries the underlying detail for logging; callers of the pipeline
/// only ever observe [`NetworkError::decoding`].
///
/// [`NetworkError::decoding`]: crate::core::NetworkError::decoding
#[derive(thiserror::Error, Debug)]
#[error("malformed payload: {details}")]
pub struct DecodeError {
    /// Human-readable description of what went wrong.
    pub details: String,
}

/// Trait for deserializing response payloads.
///
/// To implement this trait, provide a `deserialize` method that takes a
/// `&[u8]` and returns the decoded value or a [`DecodeError`].
pub trait Deserializer: Send + Sync {
    /// Deserialize a `&[u8]` into a value of type `T`.
    fn deserialize<T>(&self, bytes: &[u8]) -> Result<T, DecodeError>
    where
        T: serde::de::DeserializeOwned;
}
