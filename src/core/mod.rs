//! # Core
//!
//! Traits and value types of the request pipeline.
//!
//! The `core` module defines every seam the pipeline is assembled from:
//! the endpoint description, the wire request/response pair, the
//! transport boundary and its failure enumeration, the error taxonomy,
//! and the pluggable strategies for response handling, failure
//! conversion, payload decoding and reachability.

pub use error::{Error, NetworkError};
pub mod error;

pub use endpoint::{Endpoint, HeaderFields, QueryItems};
pub mod endpoint;

pub use request::{TransportMethod, TransportRequest};
pub mod request;

pub use response::TransportResponse;
pub mod response;

pub use transport::{Transport, TransportError};
pub mod transport;

pub use multipart::{MultipartForm, MultipartPart};
pub mod multipart;

pub use plugin::Plugin;
pub mod plugin;

pub use handler::{ResponseHandler, RetryFuture, StatusCodeHandler};
pub mod handler;

pub use convert::{ErrorConverter, StandardConverter};
pub mod convert;

pub use deserializer::{DecodeError, Deserializer};
pub mod deserializer;

pub use reachability::{ConnectionMonitor, Reachability};
pub mod reachability;

pub mod logging;
