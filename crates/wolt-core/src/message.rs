//! Message record exchanged over the wolt relay
//!
//! A message is immutable once signed. The relay stores it verbatim apart
//! from rewriting the `created_at` UTC suffix (see [`crate::time`]), so the
//! record deserialized from a relay response is verifiable against the key
//! published at `pubkey_url`.

use serde::{Deserialize, Serialize};

/// A signed message as it travels over the relay.
///
/// All five fields are required; a relay record missing any of them is
/// rejected at the serde boundary before it ever reaches verification.
/// Unknown fields added by the relay (row ids and the like) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Identity name claimed by the signer. Only as trustworthy as the key
    /// currently hosted at `pubkey_url`.
    pub from_wolt: String,
    /// URL where the signer's Ed25519 public key can be fetched.
    pub pubkey_url: String,
    /// Arbitrary UTF-8 payload.
    pub content: String,
    /// Base64-encoded Ed25519 signature over the canonical signing bytes.
    pub signature: String,
    /// ISO-8601 UTC timestamp produced by the signer at signing time.
    pub created_at: String,
}

/// Why a message did or did not verify.
///
/// Kept richer than a boolean so callers (and tests) can tell an invalid
/// signature apart from an unreachable key; the distinction collapses to
/// [`VerificationOutcome::is_valid`] only at the display boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Signature verifies against the published key.
    Valid,
    /// Key was resolved but the signature does not match the record.
    BadSignature,
    /// The public key could not be fetched or parsed.
    KeyUnavailable(String),
    /// The record itself is unusable (e.g. signature is not valid base64).
    MalformedRecord(String),
}

impl VerificationOutcome {
    /// Collapse the outcome to the boolean shown to users.
    pub fn is_valid(&self) -> bool {
        matches!(self, VerificationOutcome::Valid)
    }
}

/// A message annotated with its verification outcome. Ephemeral; computed
/// per batch item and never persisted.
#[derive(Debug, Clone)]
pub struct VerifiedMessage {
    /// The record as fetched from the relay.
    pub message: Message,
    /// Result of resolving the key and checking the signature.
    pub outcome: VerificationOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_complete_record() {
        let json = r#"{
            "from_wolt": "alice",
            "pubkey_url": "https://alice.example/.well-known/wolt.pub",
            "content": "hello wolts",
            "signature": "c2ln",
            "created_at": "2026-02-01T12:00:00.000Z"
        }"#;
        let msg: Message = serde_json::from_str(json).unwrap();
        assert_eq!(msg.from_wolt, "alice");
        assert_eq!(msg.created_at, "2026-02-01T12:00:00.000Z");
    }

    #[test]
    fn rejects_record_missing_required_field() {
        // No signature field.
        let json = r#"{
            "from_wolt": "alice",
            "pubkey_url": "https://alice.example/.well-known/wolt.pub",
            "content": "hello",
            "created_at": "2026-02-01T12:00:00.000Z"
        }"#;
        assert!(serde_json::from_str::<Message>(json).is_err());
    }

    #[test]
    fn ignores_relay_added_fields() {
        let json = r#"{
            "id": 42,
            "from_wolt": "alice",
            "pubkey_url": "https://alice.example/.well-known/wolt.pub",
            "content": "hello",
            "signature": "c2ln",
            "created_at": "2026-02-01T12:00:00.000+00:00"
        }"#;
        assert!(serde_json::from_str::<Message>(json).is_ok());
    }

    #[test]
    fn outcome_collapses_to_bool() {
        assert!(VerificationOutcome::Valid.is_valid());
        assert!(!VerificationOutcome::BadSignature.is_valid());
        assert!(!VerificationOutcome::KeyUnavailable("404".into()).is_valid());
    }
}
