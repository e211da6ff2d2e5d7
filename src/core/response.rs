//! This module contains the [`TransportResponse`] struct.
//!
//! A response represents a completed transfer, including transfers that
//! came back with a 4xx or 5xx status code. Failures that produced no
//! response at all are represented by [`TransportError`].
//!
//! [`TransportError`]: crate::core::TransportError

use std::collections::HashMap;

/// A received response, whatever its status code.
///
/// Classification of the status code into success or a domain error is
/// the responsibility of the [`ResponseHandler`] chain, not of the
/// transport that produced this value.
///
/// [`ResponseHandler`]: crate::core::ResponseHandler
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TransportResponse {
    /// Status code of the response.
    pub status: u16,

    /// Headers of the response.
    pub headers: HashMap<String, String>,

    /// Body of the response.
    pub body: Option<Vec<u8>>,
}
