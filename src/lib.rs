//! # courier
//!
//! Transport-agnostic HTTP request execution pipeline for client
//! applications.
//!
//! An API call is described declaratively as an [`Endpoint`] and handed
//! to a [`Client`], which checks network reachability, builds the wire
//! request (applying cross-cutting [`Plugin`]s and multipart encoding),
//! performs the transfer through a pluggable [`Transport`], classifies
//! the outcome into a typed error taxonomy, optionally refreshes
//! credentials and replays on `401 Unauthorized`, and decodes
//! successful payloads into typed values.
//!
//! # Examples
//!
//! ```no_run
//! use courier::{
//!     core::{Endpoint, TransportMethod},
//!     ClientBuilder,
//! };
//! use url::Url;
//!
//! #[derive(serde::Deserialize)]
//! struct User {
//!     name: String,
//! }
//!
//! struct GetUser(u64);
//!
//! impl Endpoint for GetUser {
//!     fn path(&self) -> String {
//!         format!("/users/{}", self.0)
//!     }
//!
//!     fn method(&self) -> TransportMethod {
//!         TransportMethod::Get
//!     }
//! }
//!
//! # async fn run() -> Result<(), courier::core::Error> {
//! let client = ClientBuilder::with_reqwest_transport()
//!     .with_base_url(Url::parse("https://api.example.com").expect("valid URL"))
//!     .build();
//!
//! let user: User = client.execute(&GetUser(42)).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `reqwest` *(default)* — ships [`ReqwestTransport`] as the default
//!   transport layer.
//!
//! [`Endpoint`]: crate::core::Endpoint
//! [`Plugin`]: crate::core::Plugin
//! [`Transport`]: crate::core::Transport
//! [`ReqwestTransport`]: crate::transport::ReqwestTransport

pub mod auth;
pub mod client;
pub mod core;
pub mod providers;
pub mod transport;

#[doc(inline)]
pub use crate::client::{Client, ClientBuilder, ClientConfigBuilder, ClientTransportBuilder};
