//! # Transport failure conversion
//!
//! This module contains the [`ErrorConverter`] trait and the
//! [`StandardConverter`] mapping for the default [`Error`] taxonomy.

use super::{
    error::{Error, NetworkError},
    transport::TransportError,
};

/// Maps connection-level failures into the domain error taxonomy.
///
/// The conversion happens exactly once, at the transport boundary, and
/// must be a pure total function over [`TransportError`]: same input,
/// same output, nothing left unmapped.
pub trait ErrorConverter<E>: Send + Sync
where
    E: NetworkError,
{
    /// Convert one transport failure into a domain error.
    fn convert(&self, failure: &TransportError) -> E;
}

/// Default conversion for the [`Error`] taxonomy.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardConverter;

impl ErrorConverter<Error> for StandardConverter {
    fn convert(&self, failure: &TransportError) -> Error {
        match failure {
            TransportError::BadUrl(_) => Error::BadUrl,
            TransportError::TimedOut => Error::TimedOut,
            TransportError::HostNotFound(_) | TransportError::ConnectFailed(_) => {
                Error::HostUnreachable
            }
            TransportError::TooManyRedirects => Error::TooManyRedirects,
            TransportError::ResourceUnavailable => Error::ResourceUnavailable,
            TransportError::Offline | TransportError::ConnectionLost => Error::Reachability,
            _ => Error::Unspecified,
        }
    }
}
