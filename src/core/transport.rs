//! # Transport module
//!
//! This module contains the [`Transport`] trait and the
//! [`TransportError`] enumeration.
//!
//! You can implement the trait for your own types, or use the provided
//! [`ReqwestTransport`] behind the `reqwest` feature.
//!
//! [`ReqwestTransport`]: crate::transport::ReqwestTransport

use super::{request::TransportRequest, response::TransportResponse};

/// A connection-level failure: the transfer produced no response.
///
/// This enumeration is closed on purpose. An [`ErrorConverter`] maps
/// each member into the domain error taxonomy exactly once, at the
/// transport boundary; nothing downstream re-classifies these.
///
/// [`ErrorConverter`]: crate::core::ErrorConverter
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request URL was malformed or rejected before transmission.
    #[error("malformed request URL: {0}")]
    BadUrl(String),

    /// The transfer did not complete within the transport's deadline.
    #[error("request timed out")]
    TimedOut,

    /// Name resolution failed for the request host.
    #[error("cannot find host: {0}")]
    HostNotFound(String),

    /// A connection to the host could not be established.
    #[error("cannot connect to host: {0}")]
    ConnectFailed(String),

    /// The transfer was aborted after following too many redirects.
    #[error("too many redirects")]
    TooManyRedirects,

    /// The requested resource cannot be provided by the host.
    #[error("requested resource unavailable")]
    ResourceUnavailable,

    /// There is no network connection.
    #[error("network is offline")]
    Offline,

    /// The connection was dropped mid-transfer.
    #[error("network connection was lost")]
    ConnectionLost,

    /// The transfer was cancelled before completion.
    #[error("request was cancelled")]
    Cancelled,

    /// Any transport failure not covered by the members above.
    #[error("transport failure: {0}")]
    Other(String),
}

/// This trait is used to send requests over the wire.
///
/// Implementations return a [`TransportResponse`] whenever a response
/// was received, no matter its status code, and a [`TransportError`]
/// only when the transfer itself failed.
///
/// # Examples
/// ```
/// use courier::core::{Transport, TransportError, TransportRequest, TransportResponse};
///
/// struct MyTransport;
///
/// #[async_trait::async_trait]
/// impl Transport for MyTransport {
///     async fn send(
///         &self,
///         request: TransportRequest,
///     ) -> Result<TransportResponse, TransportError> {
///         // Send your request here
///
///         Ok(TransportResponse::default())
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Perform one transfer.
    ///
    /// # Errors
    /// Should return a [`TransportError`] if no response could be
    /// obtained.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait::async_trait]
impl<T> Transport for std::sync::Arc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}
