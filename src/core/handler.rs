//! # Response handling
//!
//! This module contains the [`ResponseHandler`] trait and its default
//! implementation, [`StatusCodeHandler`].
//!
//! Handlers receive every completed transfer together with a deferred
//! replay of the whole pipeline, and decide whether the outcome is a
//! success, a domain error, or something worth recovering from.

use std::{future::Future, pin::Pin};

use super::{error::NetworkError, response::TransportResponse};

/// A deferred re-invocation of the full request pipeline for the same
/// endpoint.
///
/// The future is inert until awaited: a handler that never polls it
/// causes no additional request. Replaying starts the pipeline from the
/// top, including the reachability check.
pub type RetryFuture<'a, E> = Pin<Box<dyn Future<Output = Result<Vec<u8>, E>> + Send + 'a>>;

/// Strategy for classifying completed transfers.
///
/// Implementations turn a [`TransportResponse`] into either the
/// response bytes or a domain error, and may await `retry` to replay
/// the original request — see [`AuthRetryHandler`] for the recovery
/// decorator shipped with this crate.
///
/// [`AuthRetryHandler`]: crate::auth::AuthRetryHandler
#[async_trait::async_trait]
pub trait ResponseHandler<E>: Send + Sync
where
    E: NetworkError,
{
    /// Classify one completed transfer.
    async fn handle(
        &self,
        response: TransportResponse,
        retry: RetryFuture<'_, E>,
    ) -> Result<Vec<u8>, E>;
}

/// Default, terminal response handler.
///
/// Classifies purely by status code: `200..=399` succeeds with the
/// received bytes, `400..=499` maps to [`NetworkError::client`],
/// `500..=599` to [`NetworkError::server`], and anything outside those
/// ranges to [`NetworkError::unspecified`]. Never replays.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatusCodeHandler;

#[async_trait::async_trait]
impl<E> ResponseHandler<E> for StatusCodeHandler
where
    E: NetworkError,
{
    async fn handle(
        &self,
        response: TransportResponse,
        _retry: RetryFuture<'_, E>,
    ) -> Result<Vec<u8>, E> {
        match response.status {
            200..=399 => Ok(response.body.unwrap_or_default()),
            400..=499 => Err(E::client()),
            500..=599 => Err(E::server()),
            _ => Err(E::unspecified()),
        }
    }
}
