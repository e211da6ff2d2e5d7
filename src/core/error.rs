//! # Error types
//!
//! This module contains the error taxonomy for the [`courier`] crate.
//!
//! [`courier`]: ../index.html

/// Capability contract for domain error types.
///
/// Every error type that travels through a [`Client`] must be able to
/// produce the members below. The pipeline raises them at fixed points:
/// [`reachability`] before a request is attempted while the network is
/// unavailable, [`decoding`] when a payload cannot be turned into the
/// requested type, [`client`] / [`server`] when a response is classified
/// by status code, and [`unspecified`] for everything that fits nowhere
/// else.
///
/// Refinements for transport-level failures (bad URL, timeout, and so
/// on) are not part of this contract; they belong to the
/// [`ErrorConverter`] paired with the error type.
///
/// You can use the provided [`Error`] type, or bring your own:
///
/// ```
/// use courier::core::NetworkError;
///
/// #[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
/// enum ApiError {
///     #[error("offline")]
///     Offline,
///     #[error("bad payload")]
///     BadPayload,
///     #[error("rejected")]
///     Rejected,
///     #[error("backend down")]
///     BackendDown,
///     #[error("unknown")]
///     Unknown,
/// }
///
/// impl NetworkError for ApiError {
///     fn reachability() -> Self {
///         Self::Offline
///     }
///     fn decoding() -> Self {
///         Self::BadPayload
///     }
///     fn client() -> Self {
///         Self::Rejected
///     }
///     fn server() -> Self {
///         Self::BackendDown
///     }
///     fn unspecified() -> Self {
///         Self::Unknown
///     }
/// }
/// ```
///
/// [`Client`]: crate::client::Client
/// [`ErrorConverter`]: crate::core::ErrorConverter
/// [`reachability`]: NetworkError::reachability
/// [`decoding`]: NetworkError::decoding
/// [`client`]: NetworkError::client
/// [`server`]: NetworkError::server
/// [`unspecified`]: NetworkError::unspecified
pub trait NetworkError: std::error::Error + Send + Sync + 'static {
    /// The network was reported unavailable before the request was
    /// attempted.
    fn reachability() -> Self;

    /// A received payload could not be decoded into the requested type.
    fn decoding() -> Self;

    /// The response carried a status code in `400..=499`.
    fn client() -> Self;

    /// The response carried a status code in `500..=599`.
    fn server() -> Self;

    /// Fallback for conditions not covered by any other member.
    fn unspecified() -> Self;
}

/// Default domain error type.
///
/// Closed taxonomy covering connectivity failures, response
/// classification and payload decoding. Used as the error type of a
/// [`Client`] unless a custom [`NetworkError`] implementation is
/// installed together with its own handling strategy.
///
/// [`Client`]: crate::client::Client
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The request URL could not be formed or was rejected by the
    /// transport.
    #[error("bad URL, please try again later")]
    BadUrl,

    /// The transfer did not complete in time.
    #[error("timed out, please check your internet connection")]
    TimedOut,

    /// The host could not be found or connected to.
    #[error("host unreachable, please try again later")]
    HostUnreachable,

    /// The transfer was aborted after too many redirects.
    #[error("too many redirects, please try again later")]
    TooManyRedirects,

    /// The requested resource is not available.
    #[error("resource unavailable, please try again later")]
    ResourceUnavailable,

    /// There is no usable network connection.
    #[error("internet connection problem, please check your internet connection")]
    Reachability,

    /// The received payload could not be decoded.
    #[error("unable to decode the data that came from the server")]
    Decoding,

    /// The server rejected the request (status `400..=499`).
    #[error("an error occurred on the client side")]
    Client,

    /// The server failed to process the request (status `500..=599`).
    #[error("an error occurred on the server side")]
    Server,

    /// Something went wrong for an unknown reason.
    #[error("for unknown reasons, something went wrong")]
    Unspecified,
}

impl NetworkError for Error {
    fn reachability() -> Self {
        Self::Reachability
    }

    fn decoding() -> Self {
        Self::Decoding
    }

    fn client() -> Self {
        Self::Client
    }

    fn server() -> Self {
        Self::Server
    }

    fn unspecified() -> Self {
        Self::Unspecified
    }
}
