//! Wolt Core - Wire types and pure protocol logic
//!
//! This crate defines the pieces of the wolt messaging protocol that involve
//! no I/O: the message record exchanged over the relay, the canonical byte
//! sequence that signatures cover, timestamp handling, and the configuration
//! structs the networked crates are constructed from.
//!
//! Network access is abstracted behind the [`fetch::Fetcher`] trait so the
//! verification and reporting crates can be exercised against deterministic
//! fixtures instead of live endpoints.

#![forbid(unsafe_code)]

/// Message record and per-message verification outcome
pub mod message;

/// Canonical signing payload
pub mod canonical;

/// Signer timestamp format and relay round-trip normalization
pub mod time;

/// Relay and report configuration
pub mod config;

/// HTTP fetch capability interface
pub mod fetch;

pub use canonical::signing_bytes;
pub use config::{RelayConfig, ReportConfig, SiteCheck};
pub use fetch::{FetchError, FetchResponse, Fetcher};
pub use message::{Message, VerificationOutcome, VerifiedMessage};
pub use time::{normalize_timestamp, wire_timestamp};
