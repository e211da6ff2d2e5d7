//! # Transport request
//!
//! This module contains the [`TransportRequest`] struct and related
//! types. A request is built once per attempt from an [`Endpoint`] and
//! is never mutated after it has been handed to a [`Transport`].
//!
//! [`Endpoint`]: crate::core::Endpoint
//! [`Transport`]: crate::core::Transport

use std::{collections::HashMap, fmt::Display};

use url::Url;

/// The HTTP method of a request.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default, Hash)]
pub enum TransportMethod {
    /// `GET`. Requests with this method never carry a body.
    #[default]
    Get,

    /// `POST`
    Post,

    /// `PUT`
    Put,

    /// `PATCH`
    Patch,

    /// `DELETE`
    Delete,

    /// `HEAD`
    Head,

    /// `OPTIONS`
    Options,
}

impl TransportMethod {
    /// The wire representation of the method.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportMethod::Get => "GET",
            TransportMethod::Post => "POST",
            TransportMethod::Put => "PUT",
            TransportMethod::Patch => "PATCH",
            TransportMethod::Delete => "DELETE",
            TransportMethod::Head => "HEAD",
            TransportMethod::Options => "OPTIONS",
        }
    }
}

impl Display for TransportMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A concrete wire request.
///
/// All parts of the request are fully resolved: the URL already carries
/// the effective base, path and query, and the header map holds the
/// merged result of plugin and endpoint contributions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TransportRequest {
    /// Fully resolved request URL.
    pub url: Url,

    /// Method to use for the request.
    pub method: TransportMethod,

    /// Headers to be sent with the request.
    pub headers: HashMap<String, String>,

    /// Body to be sent with the request.
    pub body: Option<Vec<u8>>,
}

impl TransportRequest {
    /// Create a request with no headers and no body.
    pub fn new(url: Url, method: TransportMethod) -> Self {
        Self {
            url,
            method,
            headers: HashMap::new(),
            body: None,
        }
    }
}
