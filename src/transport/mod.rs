//! # Transport implementations
//!
//! Default [`Transport`] implementations shipped with the crate.
//!
//! [`Transport`]: crate::core::Transport

#[cfg(feature = "reqwest")]
#[doc(inline)]
pub use self::reqwest::ReqwestTransport;
#[cfg(feature = "reqwest")]
pub mod reqwest;
