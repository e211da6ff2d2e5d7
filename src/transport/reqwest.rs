//! # Reqwest transport implementation
//!
//! This module contains the [`ReqwestTransport`] struct, the default
//! [`Transport`] used when the `reqwest` feature is enabled.
//!
//! [`Transport`]: crate::core::Transport
//! [`reqwest`]: https://docs.rs/reqwest

use bytes::Bytes;
use reqwest::header::HeaderMap;

use crate::{
    client::{ClientBuilder, ClientTransportBuilder},
    core::{Transport, TransportError, TransportMethod, TransportRequest, TransportResponse},
};
use std::collections::HashMap;

/// Sends requests with a shared [`reqwest::Client`].
///
/// Connection pooling, TLS and redirect policy are whatever the wrapped
/// client is configured with; pass your own through [`with_client`] to
/// tune them.
///
/// # Examples
/// ```
/// use courier::transport::ReqwestTransport;
///
/// let transport = ReqwestTransport::new();
/// ```
///
/// [`with_client`]: ReqwestTransport::with_client
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with a default [`reqwest::Client`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport around a preconfigured [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let mut builder = self
            .client
            .request(request_method(request.method), request.url)
            .headers(request_headers(&request.headers)?);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(convert_error)?;

        let status = response.status().as_u16();
        let headers = response_headers(response.headers());
        let body: Bytes = response.bytes().await.map_err(convert_error)?;

        Ok(TransportResponse {
            status,
            headers,
            body: (!body.is_empty()).then(|| body.to_vec()),
        })
    }
}

fn request_method(method: TransportMethod) -> reqwest::Method {
    match method {
        TransportMethod::Get => reqwest::Method::GET,
        TransportMethod::Post => reqwest::Method::POST,
        TransportMethod::Put => reqwest::Method::PUT,
        TransportMethod::Patch => reqwest::Method::PATCH,
        TransportMethod::Delete => reqwest::Method::DELETE,
        TransportMethod::Head => reqwest::Method::HEAD,
        TransportMethod::Options => reqwest::Method::OPTIONS,
    }
}

fn request_headers(headers: &HashMap<String, String>) -> Result<HeaderMap, TransportError> {
    HeaderMap::try_from(headers).map_err(|error| TransportError::Other(error.to_string()))
}

fn response_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.to_string(), value.to_string()))
        })
        .collect()
}

fn convert_error(error: reqwest::Error) -> TransportError {
    if error.is_builder() {
        TransportError::BadUrl(error.to_string())
    } else if error.is_timeout() {
        TransportError::TimedOut
    } else if error.is_connect() {
        TransportError::ConnectFailed(
            error
                .url()
                .and_then(|url| url.host_str().map(ToString::to_string))
                .unwrap_or_else(|| error.to_string()),
        )
    } else if error.is_redirect() {
        TransportError::TooManyRedirects
    } else {
        TransportError::Other(error.to_string())
    }
}

impl ClientBuilder {
    /// Start the builder chain with the default [`ReqwestTransport`].
    ///
    /// # Examples
    /// ```
    /// use courier::ClientBuilder;
    /// use url::Url;
    ///
    /// let client = ClientBuilder::with_reqwest_transport()
    ///     .with_base_url(Url::parse("https://api.example.com").expect("valid URL"))
    ///     .build();
    /// ```
    pub fn with_reqwest_transport() -> ClientTransportBuilder<ReqwestTransport> {
        ClientBuilder::with_transport(ReqwestTransport::new())
    }
}
