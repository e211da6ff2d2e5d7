//! # Authenticated retry
//!
//! This module contains [`AuthRetryHandler`], a [`ResponseHandler`]
//! decorator that recovers from `401 Unauthorized` responses, and the
//! token service traits it is wired with.
//!
//! On a 401 the handler runs the refresh chain — obtain the refresh
//! payload, exchange it for fresh credentials, commit them — and only
//! then replays the original request, once. Every other response is
//! delegated untouched to the wrapped fallback handler.

use crate::core::{NetworkError, ResponseHandler, RetryFuture, TransportResponse};

/// Exchanges refresh credentials for a fresh token payload.
///
/// Usually backed by a second, non-intercepted client pointed at the
/// token endpoint of the API.
#[async_trait::async_trait]
pub trait TokenRequestService: Send + Sync {
    /// Error type shared with the pipeline this service is installed in.
    type Error: NetworkError;

    /// Payload carrying the refresh credentials.
    type RefreshRequest: Send + 'static;

    /// Payload carrying the fresh credentials.
    type RefreshResponse: Send + 'static;

    /// Perform the token refresh round trip.
    async fn refresh(
        &self,
        request: Self::RefreshRequest,
    ) -> Result<Self::RefreshResponse, Self::Error>;
}

/// Produces refresh payloads and persists refreshed credentials.
///
/// The counterpart of [`TokenRequestService`]: it knows where the
/// current credentials live, hands out the payload to refresh with,
/// and commits whatever the refresh returned.
#[async_trait::async_trait]
pub trait TokenResponseService: Send + Sync {
    /// Error type shared with the pipeline this service is installed in.
    type Error: NetworkError;

    /// Payload carrying the refresh credentials.
    type RefreshRequest: Send + 'static;

    /// Payload carrying the fresh credentials.
    type RefreshResponse: Send + 'static;

    /// Produce the payload to refresh with.
    async fn refresh_request(&self) -> Result<Self::RefreshRequest, Self::Error>;

    /// Persist freshly received credentials.
    async fn commit(&self, token: Self::RefreshResponse) -> Result<(), Self::Error>;
}

/// Ready-made token payload for APIs that answer with an access/refresh
/// token pair.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct TokenPair {
    /// Short-lived token attached to authenticated requests.
    pub access_token: String,

    /// Long-lived token exchanged for the next pair.
    pub refresh_token: String,
}

/// Response handler decorator that refreshes credentials on 401.
///
/// Wraps a fallback [`ResponseHandler`] which keeps full authority over
/// every non-401 response. For a 401 the refresh chain runs through the
/// two injected services; if any step fails, that step's error becomes
/// the final result and no replay happens. After a fully successful
/// chain the original request is replayed exactly once — from the top
/// of the pipeline, so the replay is reachability-checked, rebuilt and
/// classified like any first attempt. A replay answered with another
/// 401 triggers the chain again; there is no built-in cycle cap.
///
/// # Examples
/// ```no_run
/// # use courier::auth::{AuthRetryHandler, TokenPair, TokenRequestService, TokenResponseService};
/// # use courier::core::{Error, StatusCodeHandler};
/// # struct Refresher;
/// # #[async_trait::async_trait]
/// # impl TokenRequestService for Refresher {
/// #     type Error = Error;
/// #     type RefreshRequest = String;
/// #     type RefreshResponse = TokenPair;
/// #     async fn refresh(&self, _: String) -> Result<TokenPair, Error> { unimplemented!() }
/// # }
/// # struct Vault;
/// # #[async_trait::async_trait]
/// # impl TokenResponseService for Vault {
/// #     type Error = Error;
/// #     type RefreshRequest = String;
/// #     type RefreshResponse = TokenPair;
/// #     async fn refresh_request(&self) -> Result<String, Error> { unimplemented!() }
/// #     async fn commit(&self, _: TokenPair) -> Result<(), Error> { unimplemented!() }
/// # }
/// let handler = AuthRetryHandler::new(Refresher, Vault, StatusCodeHandler);
/// ```
pub struct AuthRetryHandler<Q, S, F> {
    request_service: Q,
    response_service: S,
    fallback: F,
}

impl<Q, S, F> AuthRetryHandler<Q, S, F> {
    /// Wrap `fallback` with 401 recovery through the given services.
    pub fn new(request_service: Q, response_service: S, fallback: F) -> Self {
        Self {
            request_service,
            response_service,
            fallback,
        }
    }
}

#[async_trait::async_trait]
impl<Q, S, F> ResponseHandler<Q::Error> for AuthRetryHandler<Q, S, F>
where
    Q: TokenRequestService,
    S: TokenResponseService<
        Error = Q::Error,
        RefreshRequest = Q::RefreshRequest,
        RefreshResponse = Q::RefreshResponse,
    >,
    F: ResponseHandler<Q::Error>,
{
    async fn handle(
        &self,
        response: TransportResponse,
        retry: RetryFuture<'_, Q::Error>,
    ) -> Result<Vec<u8>, Q::Error> {
        if response.status != 401 {
            return self.fallback.handle(response, retry).await;
        }

        let refresh_request = self.response_service.refresh_request().await?;
        let token = self.request_service.refresh(refresh_request).await?;
        self.response_service.commit(token).await?;

        retry.await
    }
}
