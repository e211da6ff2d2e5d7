//! This module contains the [`Plugin`] trait.
//!
//! Plugins rewrite a constructed [`TransportRequest`] before it is
//! transmitted. Most often you will use them to inject cross-cutting
//! request headers.

use super::request::TransportRequest;

/// A cross-cutting request mutator.
///
/// A list of plugins is handed to the [`Client`]; every request built
/// from an [`Endpoint`] passes through each plugin in list order before
/// the endpoint's own header fields are applied. Endpoint headers
/// therefore win on key collision, which makes plugins the right place
/// for defaults that individual endpoints may override.
///
/// # Examples
/// ```
/// use courier::core::{Plugin, TransportRequest};
///
/// struct UserAgent;
///
/// impl Plugin for UserAgent {
///     fn modify_request(&self, request: &mut TransportRequest) {
///         request
///             .headers
///             .insert("User-Agent".into(), "my-app/1.0".into());
///     }
/// }
/// ```
///
/// [`Client`]: crate::client::Client
/// [`Endpoint`]: crate::core::Endpoint
pub trait Plugin: Send + Sync {
    /// Rewrite the request in place.
    fn modify_request(&self, request: &mut TransportRequest);
}
