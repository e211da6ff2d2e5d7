//! # Client
//!
//! This module contains the [`Client`] struct, the request executor of
//! the crate, and the builder chain that assembles it.
//!
//! A client sequences one attempt as: reachability check → request
//! building → transport call → failure conversion or response handling
//! (with a deferred replay on offer) → optional payload decoding. It is
//! transport-layer-agnostic; any type implementing [`Transport`] can
//! drive the wire.

use std::sync::Arc;

use url::Url;

use crate::{
    core::{
        logging, ConnectionMonitor, Deserializer, Endpoint, Error, ErrorConverter, NetworkError,
        Plugin, Reachability, ResponseHandler, RetryFuture, StandardConverter, StatusCodeHandler,
        Transport,
    },
    providers::deserialization_serde::SerdeDeserializer,
};

/// Request executor.
///
/// Holds immutable configuration only — base URL, transport,
/// deserializer, reachability view and the handling strategies — so one
/// instance can serve any number of concurrent calls. Clones are cheap
/// and share the same configuration.
///
/// # Examples
/// ```no_run
/// use courier::{core::{Endpoint, TransportMethod}, ClientBuilder};
/// use url::Url;
///
/// #[derive(serde::Deserialize)]
/// struct Status {
///     ok: bool,
/// }
///
/// struct GetStatus;
///
/// impl Endpoint for GetStatus {
///     fn path(&self) -> String {
///         "/status".into()
///     }
///
///     fn method(&self) -> TransportMethod {
///         TransportMethod::Get
///     }
/// }
///
/// # async fn run() -> Result<(), courier::core::Error> {
/// let client = ClientBuilder::with_reqwest_transport()
///     .with_base_url(Url::parse("https://api.example.com").expect("valid URL"))
///     .build();
///
/// let status: Status = client.execute(&GetStatus).await?;
/// # Ok(())
/// # }
/// ```
///
/// # Cancellation
///
/// Dropping the future returned by any of the `execute` operations
/// aborts the in-flight transfer and discards a pending replay without
/// polling it.
pub struct Client<T, D = SerdeDeserializer, E = Error> {
    inner: Arc<ClientRef<T, D, E>>,
}

impl<T, D, E> Clone for Client<T, D, E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

struct ClientRef<T, D, E> {
    base_url: Url,
    transport: T,
    deserializer: D,
    reachability: Arc<dyn Reachability>,
    plugins: Vec<Arc<dyn Plugin>>,
    handler: Arc<dyn ResponseHandler<E>>,
    converter: Arc<dyn ErrorConverter<E>>,
}

impl<T, D, E> Client<T, D, E>
where
    T: Transport,
    D: Deserializer,
    E: NetworkError,
{
    /// Run one request and return the raw response bytes.
    ///
    /// The returned future is the same deferred-replay type handed to
    /// response handlers: creating it costs nothing and no work happens
    /// until it is awaited. Each attempt — first or replayed — passes
    /// the reachability gate, is rebuilt from the endpoint, logged,
    /// transmitted and classified.
    pub fn execute_raw<'a, En>(&'a self, endpoint: &'a En) -> RetryFuture<'a, E>
    where
        En: Endpoint + Sync,
    {
        Box::pin(async move {
            if !self.inner.reachability.is_connected() {
                return Err(E::reachability());
            }

            let request = endpoint.request(&self.inner.base_url, &self.inner.plugins);
            logging::log_request(&request);

            match self.inner.transport.send(request).await {
                Err(failure) => Err(self.inner.converter.convert(&failure)),
                Ok(response) => {
                    logging::log_response(&response);
                    self.inner
                        .handler
                        .handle(response, self.execute_raw(endpoint))
                        .await
                }
            }
        })
    }

    /// Run one request and decode the response payload into `Out`.
    ///
    /// Any decoding failure — malformed payload or schema mismatch —
    /// surfaces as [`NetworkError::decoding`], whatever status code
    /// produced the bytes.
    pub async fn execute<Out, En>(&self, endpoint: &En) -> Result<Out, E>
    where
        Out: serde::de::DeserializeOwned,
        En: Endpoint + Sync,
    {
        let bytes = self.execute_raw(endpoint).await?;

        self.inner.deserializer.deserialize(&bytes).map_err(|error| {
            log::warn!("response payload rejected: {error}");
            E::decoding()
        })
    }

    /// Run one request, decode the payload as `Out` and convert it into
    /// the abstraction `Abs`.
    ///
    /// Useful when callers should only see a trait-shaped or otherwise
    /// narrowed view of the concrete payload type. A payload that
    /// decodes but does not satisfy the abstraction surfaces as
    /// [`NetworkError::decoding`].
    pub async fn execute_as<Out, Abs, En>(&self, endpoint: &En) -> Result<Abs, E>
    where
        Out: serde::de::DeserializeOwned + TryInto<Abs>,
        En: Endpoint + Sync,
    {
        let concrete: Out = self.execute(endpoint).await?;

        concrete.try_into().map_err(|_| E::decoding())
    }

    /// Run one request and discard the successful payload.
    pub async fn execute_discarding<En>(&self, endpoint: &En) -> Result<(), E>
    where
        En: Endpoint + Sync,
    {
        self.execute_raw(endpoint).await.map(|_| ())
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }
}

/// Entry point of the builder chain for [`Client`].
///
/// The chain fixes the transport first, then the base URL, and then
/// accepts the optional pieces:
///
/// ```
/// use courier::{core::ConnectionMonitor, ClientBuilder};
/// use url::Url;
///
/// let monitor = ConnectionMonitor::online();
///
/// let client = ClientBuilder::with_reqwest_transport()
///     .with_base_url(Url::parse("https://api.example.com").expect("valid URL"))
///     .with_reachability(monitor.clone())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder;

impl ClientBuilder {
    /// Set the transport layer for the client.
    pub fn with_transport<T>(transport: T) -> ClientTransportBuilder<T>
    where
        T: Transport,
    {
        ClientTransportBuilder { transport }
    }
}

/// Builder step holding the chosen transport.
#[derive(Debug, Clone)]
pub struct ClientTransportBuilder<T> {
    transport: T,
}

impl<T> ClientTransportBuilder<T>
where
    T: Transport,
{
    /// Set the base URL requests are resolved against.
    ///
    /// Returns the configuration builder with defaults installed for
    /// everything else: JSON deserialization, an always-online
    /// reachability view, no plugins, status-range response handling
    /// and the standard failure conversion for [`Error`].
    pub fn with_base_url(self, base_url: Url) -> ClientConfigBuilder<T, SerdeDeserializer, Error> {
        ClientConfigBuilder {
            transport: self.transport,
            base_url,
            deserializer: SerdeDeserializer,
            reachability: Arc::new(ConnectionMonitor::online()),
            plugins: Vec::new(),
            handler: Arc::new(StatusCodeHandler),
            converter: Arc::new(StandardConverter),
        }
    }
}

/// Configuration builder for [`Client`].
pub struct ClientConfigBuilder<T, D, E> {
    transport: T,
    base_url: Url,
    deserializer: D,
    reachability: Arc<dyn Reachability>,
    plugins: Vec<Arc<dyn Plugin>>,
    handler: Arc<dyn ResponseHandler<E>>,
    converter: Arc<dyn ErrorConverter<E>>,
}

impl<T, D, E> ClientConfigBuilder<T, D, E>
where
    T: Transport,
    D: Deserializer,
    E: NetworkError,
{
    /// Set the reachability view consulted before every attempt.
    pub fn with_reachability<R>(mut self, reachability: R) -> Self
    where
        R: Reachability + 'static,
    {
        self.reachability = Arc::new(reachability);
        self
    }

    /// Append one request plugin; plugins run in the order added.
    pub fn with_plugin<P>(mut self, plugin: P) -> Self
    where
        P: Plugin + 'static,
    {
        self.plugins.push(Arc::new(plugin));
        self
    }

    /// Replace the whole plugin list.
    pub fn with_plugins(mut self, plugins: Vec<Arc<dyn Plugin>>) -> Self {
        self.plugins = plugins;
        self
    }

    /// Replace the payload deserializer.
    pub fn with_deserializer<D2>(self, deserializer: D2) -> ClientConfigBuilder<T, D2, E>
    where
        D2: Deserializer,
    {
        ClientConfigBuilder {
            transport: self.transport,
            base_url: self.base_url,
            deserializer,
            reachability: self.reachability,
            plugins: self.plugins,
            handler: self.handler,
            converter: self.converter,
        }
    }

    /// Replace the response handler, keeping the current error type.
    ///
    /// This is where [`AuthRetryHandler`] is installed.
    ///
    /// [`AuthRetryHandler`]: crate::auth::AuthRetryHandler
    pub fn with_handler<H>(mut self, handler: H) -> Self
    where
        H: ResponseHandler<E> + 'static,
    {
        self.handler = Arc::new(handler);
        self
    }

    /// Replace the transport failure conversion, keeping the current
    /// error type.
    pub fn with_error_converter<C>(mut self, converter: C) -> Self
    where
        C: ErrorConverter<E> + 'static,
    {
        self.converter = Arc::new(converter);
        self
    }

    /// Switch the client to a custom error type.
    ///
    /// Handler and converter are replaced together; they must agree on
    /// the error type, so there is no way to swap one without the
    /// other.
    pub fn with_error_handling<E2, H, C>(
        self,
        handler: H,
        converter: C,
    ) -> ClientConfigBuilder<T, D, E2>
    where
        E2: NetworkError,
        H: ResponseHandler<E2> + 'static,
        C: ErrorConverter<E2> + 'static,
    {
        ClientConfigBuilder {
            transport: self.transport,
            base_url: self.base_url,
            deserializer: self.deserializer,
            reachability: self.reachability,
            plugins: self.plugins,
            handler: Arc::new(handler),
            converter: Arc::new(converter),
        }
    }

    /// Assemble the client.
    pub fn build(self) -> Client<T, D, E> {
        Client {
            inner: Arc::new(ClientRef {
                base_url: self.base_url,
                transport: self.transport,
                deserializer: self.deserializer,
                reachability: self.reachability,
                plugins: self.plugins,
                handler: self.handler,
                converter: self.converter,
            }),
        }
    }
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::{
        TransportError, TransportMethod, TransportRequest, TransportResponse,
    };
    use std::{
        collections::{HashMap, VecDeque},
        sync::Mutex,
    };
    use test_case::test_case;

    struct ScriptedTransport {
        script: Mutex<VecDeque<Result<TransportResponse, TransportError>>>,
        requests: Mutex<Vec<TransportRequest>>,
    }

    impl ScriptedTransport {
        fn replying(script: Vec<Result<TransportResponse, TransportError>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                requests: Mutex::new(Vec::new()),
            })
        }

        fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }

        fn last_request(&self) -> TransportRequest {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl Transport for ScriptedTransport {
        async fn send(
            &self,
            request: TransportRequest,
        ) -> Result<TransportResponse, TransportError> {
            self.requests.lock().unwrap().push(request);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .expect("transport called more often than scripted")
        }
    }

    fn ok(status: u16, body: &[u8]) -> Result<TransportResponse, TransportError> {
        Ok(TransportResponse {
            status,
            body: (!body.is_empty()).then(|| body.to_vec()),
            ..Default::default()
        })
    }

    struct TestEndpoint {
        method: TransportMethod,
        headers: Option<HashMap<String, String>>,
    }

    impl TestEndpoint {
        fn get() -> Self {
            Self {
                method: TransportMethod::Get,
                headers: None,
            }
        }
    }

    impl Endpoint for TestEndpoint {
        fn path(&self) -> String {
            "/things".into()
        }

        fn method(&self) -> TransportMethod {
            self.method
        }

        fn header_fields(&self) -> Option<HashMap<String, String>> {
            self.headers.clone()
        }
    }

    struct HeaderPlugin;

    impl Plugin for HeaderPlugin {
        fn modify_request(&self, request: &mut TransportRequest) {
            request.headers.insert("X-Track".into(), "plugin".into());
        }
    }

    fn client(
        transport: Arc<ScriptedTransport>,
    ) -> Client<Arc<ScriptedTransport>, SerdeDeserializer, Error> {
        ClientBuilder::with_transport(transport)
            .with_base_url(Url::parse("https://api.example.com").unwrap())
            .build()
    }

    #[tokio::test]
    async fn return_payload_bytes_on_success() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"hello")]);

        let result = client(transport.clone()).execute_raw(&TestEndpoint::get()).await;

        assert_eq!(Ok(b"hello".to_vec()), result);
        assert_eq!(1, transport.request_count());
    }

    #[test_case(404, Error::Client ; "client error")]
    #[test_case(500, Error::Server ; "server error")]
    #[test_case(42, Error::Unspecified ; "status outside known ranges")]
    #[tokio::test]
    async fn classify_response_statuses(status: u16, expected: Error) {
        let transport = ScriptedTransport::replying(vec![ok(status, b"")]);

        let result = client(transport).execute_raw(&TestEndpoint::get()).await;

        assert_eq!(Err(expected), result);
    }

    #[tokio::test]
    async fn fail_with_reachability_without_touching_transport() {
        let transport = ScriptedTransport::replying(Vec::new());
        let client = ClientBuilder::with_transport(transport.clone())
            .with_base_url(Url::parse("https://api.example.com").unwrap())
            .with_reachability(ConnectionMonitor::offline())
            .build();

        let result = client.execute_raw(&TestEndpoint::get()).await;

        assert_eq!(Err(Error::Reachability), result);
        assert_eq!(0, transport.request_count());
    }

    #[tokio::test]
    async fn convert_transport_failure_at_the_boundary() {
        let transport = ScriptedTransport::replying(vec![Err(TransportError::TimedOut)]);

        let result = client(transport).execute_raw(&TestEndpoint::get()).await;

        assert_eq!(Err(Error::TimedOut), result);
    }

    #[derive(serde::Deserialize, Debug, PartialEq)]
    struct Greeting {
        message: String,
    }

    #[tokio::test]
    async fn decode_typed_payload() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"{\"message\":\"hi\"}")]);

        let result: Result<Greeting, _> =
            client(transport).execute(&TestEndpoint::get()).await;

        assert_eq!(
            Ok(Greeting {
                message: "hi".into()
            }),
            result
        );
    }

    #[tokio::test]
    async fn report_decoding_error_for_malformed_payload() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"not json at all")]);

        let result: Result<Greeting, _> =
            client(transport).execute(&TestEndpoint::get()).await;

        assert_eq!(Err(Error::Decoding), result);
    }

    struct Message(String);

    impl TryFrom<Greeting> for Message {
        type Error = ();

        fn try_from(greeting: Greeting) -> Result<Self, Self::Error> {
            if greeting.message.is_empty() {
                Err(())
            } else {
                Ok(Message(greeting.message))
            }
        }
    }

    #[tokio::test]
    async fn narrow_payload_to_abstraction() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"{\"message\":\"hi\"}")]);

        let result = client(transport)
            .execute_as::<Greeting, Message, _>(&TestEndpoint::get())
            .await;

        assert_eq!(Ok("hi".to_string()), result.map(|message| message.0));
    }

    #[tokio::test]
    async fn report_decoding_error_when_abstraction_is_not_satisfied() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"{\"message\":\"\"}")]);

        let result = client(transport)
            .execute_as::<Greeting, Message, _>(&TestEndpoint::get())
            .await;

        assert_eq!(Err(Error::Decoding), result.map(|message| message.0));
    }

    #[tokio::test]
    async fn discard_successful_payload() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"whatever")]);

        let result = client(transport)
            .execute_discarding(&TestEndpoint::get())
            .await;

        assert_eq!(Ok(()), result);
    }

    #[tokio::test]
    async fn let_endpoint_headers_override_plugins() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"")]);
        let client = ClientBuilder::with_transport(transport.clone())
            .with_base_url(Url::parse("https://api.example.com").unwrap())
            .with_plugin(HeaderPlugin)
            .build();

        let endpoint = TestEndpoint {
            method: TransportMethod::Get,
            headers: Some(HashMap::from([("X-Track".into(), "endpoint".into())])),
        };

        client.execute_discarding(&endpoint).await.unwrap();

        assert_eq!(
            Some(&"endpoint".to_string()),
            transport.last_request().headers.get("X-Track")
        );
    }

    #[tokio::test]
    async fn resolve_requests_against_the_base_url() {
        let transport = ScriptedTransport::replying(vec![ok(200, b"")]);

        client(transport.clone())
            .execute_discarding(&TestEndpoint::get())
            .await
            .unwrap();

        assert_eq!(
            "https://api.example.com/things",
            transport.last_request().url.as_str()
        );
    }
}
