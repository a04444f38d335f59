//! Core components of the `ezbio-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`EzClient`] and its builder.
//! - The primary [`EzError`] type.
//! - Internal networking helpers.

/// The main client (`EzClient`), builder, and configuration.
pub mod client;
/// The primary error type (`EzError`) for the crate.
pub mod error;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::EzClient`
pub use client::{EzClient, EzClientBuilder};
pub use error::EzError;
