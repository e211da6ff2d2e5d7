//! # Providers
//!
//! Implementations of core traits backed by third-party crates.

pub mod deserialization_serde;
