//! Wolt Verify - Remote key resolution and signature verification
//!
//! Verifying a relay-fetched message means fetching whatever key is
//! currently published at its `pubkey_url`, undoing the relay's timestamp
//! rewrite, recomputing the canonical bytes, and running Ed25519 verify.
//! Each message stands alone: any failure along the way classifies that one
//! message as unverified and never aborts the rest of a batch.

#![forbid(unsafe_code)]

/// Public key resolution over HTTP
pub mod resolver;

/// Message verification
pub mod verifier;

pub use resolver::{KeyResolver, ResolveError};
pub use verifier::Verifier;
