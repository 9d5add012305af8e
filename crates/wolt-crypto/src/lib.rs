//! Wolt Crypto - Ed25519 key material and signing
//!
//! Wraps `ed25519-dalek` with the encodings the wolt network uses on the
//! wire: public keys as base64(SPKI DER) or PEM, private keys as
//! base64(PKCS8 DER), signatures as base64 of the raw 64 bytes. Signing is
//! pure EdDSA over the canonical message bytes; no external prehash step.

#![forbid(unsafe_code)]

/// Crypto error type
pub mod error;

/// Keypair generation and key encoding/decoding
pub mod keys;

/// Message signing
pub mod sign;

pub use error::CryptoError;
pub use keys::{
    decode_signature, generate_keypair, parse_private_key, parse_public_key, verify_signature,
    KeyPair,
};
pub use sign::{sign_message, sign_message_at};

// Re-export the dalek types that appear in public signatures.
pub use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
