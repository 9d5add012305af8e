//! Wolt Relay - Read-only client for the shared message relay
//!
//! The relay is a trusted append-only store behind a PostgREST-style
//! interface; this crate owns the query shape and the JSON decoding, plus
//! the reqwest-backed implementation of the [`wolt_core::Fetcher`]
//! capability used throughout the subsystem.

#![forbid(unsafe_code)]

/// Relay REST client
pub mod client;

/// reqwest-backed fetch capability
pub mod http;

pub use client::{RelayClient, RelayError};
pub use http::HttpFetcher;
