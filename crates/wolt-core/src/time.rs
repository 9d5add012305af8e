//! Signer timestamp format and relay round-trip normalization
//!
//! Signers stamp messages with ISO-8601 UTC at millisecond precision and a
//! `Z` suffix (`2026-02-01T12:34:56.789Z`). The relay's storage layer
//! rewrites that suffix to a `+00:00` offset on round-trip, which would make
//! every fetched message fail verification since the timestamp is part of
//! the signed bytes. [`normalize_timestamp`] reconstructs the signer's
//! original string before the canonical payload is recomputed.

use chrono::{DateTime, SecondsFormat, Utc};

/// Render an instant in the exact format signers put on the wire.
pub fn wire_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Undo the relay's `Z` → `+00:00` rewrite.
///
/// Only a trailing `+00:00` is touched. A timestamp carrying any other
/// offset was not produced by a conforming signer and is passed through
/// unchanged (it will fail signature verification on its own).
pub fn normalize_timestamp(ts: &str) -> String {
    match ts.strip_suffix("+00:00") {
        Some(base) => format!("{base}Z"),
        None => ts.to_string(),
    }
}
