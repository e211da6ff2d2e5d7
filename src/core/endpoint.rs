//! # Endpoint descriptors
//!
//! This module contains the [`Endpoint`] trait. An endpoint describes
//! one logical request declaratively; the provided [`request`] method
//! turns the description into a concrete [`TransportRequest`].
//!
//! It is convenient to implement the trait on an enum, with one variant
//! per request of the API being modeled.
//!
//! [`request`]: Endpoint::request

use std::{collections::HashMap, sync::Arc};

use url::Url;

use super::{
    multipart::MultipartForm,
    plugin::Plugin,
    request::{TransportMethod, TransportRequest},
};

/// Query items appended to the request URL.
pub type QueryItems = HashMap<String, String>;

/// Header fields added to the request.
pub type HeaderFields = HashMap<String, String>;

/// Declarative description of one request.
///
/// Only [`path`] and [`method`] are mandatory; every other accessor has
/// a `None` default, so simple endpoints stay short:
///
/// ```
/// use courier::core::{Endpoint, TransportMethod};
///
/// enum Catalog {
///     Items,
///     Item(u64),
/// }
///
/// impl Endpoint for Catalog {
///     fn path(&self) -> String {
///         match self {
///             Catalog::Items => "/items".into(),
///             Catalog::Item(id) => format!("/items/{id}"),
///         }
///     }
///
///     fn method(&self) -> TransportMethod {
///         TransportMethod::Get
///     }
/// }
/// ```
///
/// # Body resolution
///
/// `GET` requests never carry a body, whatever [`body`] and
/// [`multipart_body`] return. For other methods a multipart form wins
/// over a plain body; do not provide both from one endpoint.
///
/// [`path`]: Endpoint::path
/// [`method`]: Endpoint::method
/// [`body`]: Endpoint::body
/// [`multipart_body`]: Endpoint::multipart_body
pub trait Endpoint {
    /// The path appended to the base URL.
    fn path(&self) -> String;

    /// The HTTP method of the request.
    fn method(&self) -> TransportMethod;

    /// Query items appended to the request URL, if any.
    fn query(&self) -> Option<QueryItems> {
        None
    }

    /// Data added as the request body, if any.
    fn body(&self) -> Option<Vec<u8>> {
        None
    }

    /// A base URL used instead of the one injected by the client.
    ///
    /// Serves as an exception to the rule; specify it only when this
    /// particular request targets a different host than the rest of the
    /// API.
    fn base_url(&self) -> Option<Url> {
        None
    }

    /// Header fields added on top of those contributed by plugins.
    ///
    /// On key collision these win over plugin-injected values.
    fn header_fields(&self) -> Option<HeaderFields> {
        None
    }

    /// A multipart form used as the request body.
    ///
    /// When present (and the method is not `GET`), the encoded form
    /// becomes the body and the matching `Content-Type` and
    /// `Content-Length` headers are set.
    fn multipart_body(&self) -> Option<MultipartForm> {
        None
    }

    /// Build the wire request for this endpoint.
    ///
    /// The effective base URL is [`base_url`], falling back to the
    /// given `base_url` parameter. Plugins run first, in list order;
    /// the endpoint's [`header_fields`] are merged afterwards and win
    /// on collision. Multipart framing headers are set last so that
    /// they always describe the encoded body.
    ///
    /// # Panics
    /// Panics when the effective base URL cannot carry path segments
    /// (for example `data:` URLs). This signals a mistake by the
    /// endpoint author, not a runtime condition, and is therefore not
    /// represented in the error taxonomy.
    ///
    /// [`base_url`]: Endpoint::base_url
    /// [`header_fields`]: Endpoint::header_fields
    fn request(&self, base_url: &Url, plugins: &[Arc<dyn Plugin>]) -> TransportRequest {
        let base = self.base_url().unwrap_or_else(|| base_url.clone());
        let url = resolve_url(&base, &self.path(), self.query().as_ref());

        let mut request = TransportRequest::new(url, self.method());

        for plugin in plugins {
            plugin.modify_request(&mut request);
        }

        if let Some(fields) = self.header_fields() {
            request.headers.extend(fields);
        }

        if self.method() == TransportMethod::Get {
            return request;
        }

        match self.multipart_body() {
            Some(form) => {
                let body = form.encode();
                request.headers.insert(
                    "Content-Type".into(),
                    format!("multipart/form-data; boundary={}", form.boundary()),
                );
                request
                    .headers
                    .insert("Content-Length".into(), body.len().to_string());
                request.body = Some(body);
            }
            None => request.body = self.body(),
        }

        request
    }
}

/// Append `path` and `query` to `base`, percent-encoding as needed.
fn resolve_url(base: &Url, path: &str, query: Option<&QueryItems>) -> Url {
    let mut url = base.clone();

    {
        let mut segments = url
            .path_segments_mut()
            .unwrap_or_else(|_| panic!("base URL `{base}` cannot carry the path `{path}`"));
        segments.pop_if_empty();
        for segment in path.split('/').filter(|segment| !segment.is_empty()) {
            segments.push(segment);
        }
    }

    if let Some(query) = query {
        url.query_pairs_mut().extend_pairs(query.iter());
    }

    url
}

#[cfg(test)]
mod should {
    use super::*;
    use crate::core::multipart::MultipartPart;

    struct StubEndpoint {
        path: String,
        method: TransportMethod,
        query: Option<QueryItems>,
        body: Option<Vec<u8>>,
        base_url: Option<Url>,
        header_fields: Option<HeaderFields>,
        multipart_body: Option<MultipartForm>,
    }

    impl StubEndpoint {
        fn new(path: &str, method: TransportMethod) -> Self {
            Self {
                path: path.into(),
                method,
                query: None,
                body: None,
                base_url: None,
                header_fields: None,
                multipart_body: None,
            }
        }
    }

    impl Endpoint for StubEndpoint {
        fn path(&self) -> String {
            self.path.clone()
        }

        fn method(&self) -> TransportMethod {
            self.method
        }

        fn query(&self) -> Option<QueryItems> {
            self.query.clone()
        }

        fn body(&self) -> Option<Vec<u8>> {
            self.body.clone()
        }

        fn base_url(&self) -> Option<Url> {
            self.base_url.clone()
        }

        fn header_fields(&self) -> Option<HeaderFields> {
            self.header_fields.clone()
        }

        fn multipart_body(&self) -> Option<MultipartForm> {
            self.multipart_body.clone()
        }
    }

    struct HeaderPlugin(&'static str, &'static str);

    impl Plugin for HeaderPlugin {
        fn modify_request(&self, request: &mut TransportRequest) {
            request.headers.insert(self.0.into(), self.1.into());
        }
    }

    fn base() -> Url {
        Url::parse("https://api.example.com").unwrap()
    }

    #[test]
    fn append_path_to_base_url() {
        let endpoint = StubEndpoint::new("/users/42/avatar", TransportMethod::Get);

        let request = endpoint.request(&base(), &[]);

        assert_eq!("https://api.example.com/users/42/avatar", request.url.as_str());
    }

    #[test]
    fn append_query_items() {
        let mut endpoint = StubEndpoint::new("/search", TransportMethod::Get);
        endpoint.query = Some(HashMap::from([("q".into(), "hello world".into())]));

        let request = endpoint.request(&base(), &[]);

        assert_eq!(Some("q=hello+world"), request.url.query());
    }

    #[test]
    fn prefer_endpoint_base_url_over_injected_one() {
        let mut endpoint = StubEndpoint::new("/ping", TransportMethod::Get);
        endpoint.base_url = Some(Url::parse("https://other.example.org").unwrap());

        let request = endpoint.request(&base(), &[]);

        assert_eq!("other.example.org", request.url.host_str().unwrap());
    }

    #[test]
    fn let_endpoint_headers_win_over_plugin_headers() {
        let mut endpoint = StubEndpoint::new("/resource", TransportMethod::Post);
        endpoint.header_fields = Some(HashMap::from([("X-Flavor".into(), "2".into())]));
        let plugins: [Arc<dyn Plugin>; 1] = [Arc::new(HeaderPlugin("X-Flavor", "1"))];

        let request = endpoint.request(&base(), &plugins);

        assert_eq!(Some(&"2".to_string()), request.headers.get("X-Flavor"));
    }

    #[test]
    fn keep_plugin_headers_without_collision() {
        let endpoint = StubEndpoint::new("/resource", TransportMethod::Post);
        let plugins: [Arc<dyn Plugin>; 2] = [
            Arc::new(HeaderPlugin("X-One", "1")),
            Arc::new(HeaderPlugin("X-Two", "2")),
        ];

        let request = endpoint.request(&base(), &plugins);

        assert_eq!(Some(&"1".to_string()), request.headers.get("X-One"));
        assert_eq!(Some(&"2".to_string()), request.headers.get("X-Two"));
    }

    #[test]
    fn attach_plain_body_for_post() {
        let mut endpoint = StubEndpoint::new("/items", TransportMethod::Post);
        endpoint.body = Some(b"{\"name\":\"thing\"}".to_vec());

        let request = endpoint.request(&base(), &[]);

        assert_eq!(Some(b"{\"name\":\"thing\"}".to_vec()), request.body);
    }

    #[test]
    fn never_attach_body_to_get() {
        let mut endpoint = StubEndpoint::new("/items", TransportMethod::Get);
        endpoint.body = Some(b"ignored".to_vec());
        endpoint.multipart_body = Some(MultipartForm::new(vec![MultipartPart {
            name: "f".into(),
            file_name: "f.txt".into(),
            mime_type: None,
            data: b"ignored".to_vec(),
        }]));

        let request = endpoint.request(&base(), &[]);

        assert!(request.body.is_none());
        assert!(!request.headers.contains_key("Content-Type"));
    }

    #[test]
    fn prefer_multipart_body_over_plain_body() {
        let form = MultipartForm::new(vec![MultipartPart {
            name: "f".into(),
            file_name: "f.txt".into(),
            mime_type: Some("text/plain".into()),
            data: b"hi".to_vec(),
        }]);
        let encoded = form.encode();

        let mut endpoint = StubEndpoint::new("/upload", TransportMethod::Post);
        endpoint.body = Some(b"plain".to_vec());
        endpoint.multipart_body = Some(form.clone());

        let request = endpoint.request(&base(), &[]);

        assert_eq!(Some(encoded.clone()), request.body);
        assert_eq!(
            Some(&format!(
                "multipart/form-data; boundary={}",
                form.boundary()
            )),
            request.headers.get("Content-Type")
        );
        assert_eq!(
            Some(&encoded.len().to_string()),
            request.headers.get("Content-Length")
        );
    }

    #[test]
    fn keep_multipart_framing_headers_over_plugin_content_type() {
        let mut endpoint = StubEndpoint::new("/upload", TransportMethod::Post);
        endpoint.multipart_body = Some(MultipartForm::new(vec![MultipartPart {
            name: "f".into(),
            file_name: "f.txt".into(),
            mime_type: None,
            data: b"hi".to_vec(),
        }]));
        let plugins: [Arc<dyn Plugin>; 1] =
            [Arc::new(HeaderPlugin("Content-Type", "application/json"))];

        let request = endpoint.request(&base(), &plugins);

        assert!(request
            .headers
            .get("Content-Type")
            .unwrap()
            .starts_with("multipart/form-data; boundary="));
    }

    #[test]
    fn percent_encode_path_segments() {
        let endpoint = StubEndpoint::new("/files/report 2024.txt", TransportMethod::Get);

        let request = endpoint.request(&base(), &[]);

        assert_eq!(
            "https://api.example.com/files/report%202024.txt",
            request.url.as_str()
        );
    }

    #[test]
    #[should_panic(expected = "cannot carry the path")]
    fn panic_on_base_url_that_cannot_carry_segments() {
        let endpoint = StubEndpoint::new("/x", TransportMethod::Get);
        let base = Url::parse("data:text/plain,hello").unwrap();

        let _ = endpoint.request(&base, &[]);
    }
}
