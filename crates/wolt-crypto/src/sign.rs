//! Message signing
//!
//! Produces relay-ready [`Message`] records. The signature covers the
//! canonical concatenation of identity, content, and timestamp; the
//! timestamp is rendered once at signing time and that exact string goes
//! both into the signed bytes and onto the wire.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use ed25519_dalek::Signer;
use wolt_core::{signing_bytes, wire_timestamp, Message};

use crate::error::CryptoError;
use crate::keys::parse_private_key;

/// Sign `content` as `identity` at the current instant.
pub fn sign_message(
    identity: &str,
    pubkey_url: &str,
    content: &str,
    private_key: &str,
) -> Result<Message, CryptoError> {
    sign_message_at(identity, pubkey_url, content, private_key, Utc::now())
}

/// Sign `content` as `identity` with an explicit timestamp.
///
/// Pure EdDSA over the raw canonical bytes; the bytes are handed to the
/// signing primitive directly, never pre-hashed.
pub fn sign_message_at(
    identity: &str,
    pubkey_url: &str,
    content: &str,
    private_key: &str,
    at: DateTime<Utc>,
) -> Result<Message, CryptoError> {
    let signing_key = parse_private_key(private_key)?;
    let created_at = wire_timestamp(at);

    let payload = signing_bytes(identity, content, &created_at);
    let signature = signing_key.sign(&payload);

    Ok(Message {
        from_wolt: identity.to_string(),
        pubkey_url: pubkey_url.to_string(),
        content: content.to_string(),
        signature: BASE64.encode(signature.to_bytes()),
        created_at,
    })
}
