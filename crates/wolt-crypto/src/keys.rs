//! Keypair generation and key encoding/decoding
//!
//! Wire encodings match what the rest of the network publishes: public keys
//! are SPKI DER (raw base64 or PEM-wrapped, both accepted), private keys are
//! PKCS8 DER in base64. A wolt commits the public half to a well-known URL
//! and keeps the private half in a secret store; nothing here performs I/O.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use ed25519_dalek::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use ed25519_dalek::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::error::CryptoError;

/// A freshly generated identity keypair, text-encoded for storage.
///
/// `public` is base64(SPKI DER), `private` is base64(PKCS8 DER). The private
/// half must never be committed or transmitted; it intentionally has no
/// `Serialize` impl and is excluded from `Debug` output.
#[derive(Clone)]
pub struct KeyPair {
    /// Base64-encoded SPKI DER public key, suitable for publishing.
    pub public: String,
    /// Base64-encoded PKCS8 DER private key, to be kept secret.
    pub private: String,
}

impl std::fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("private", &"<redacted>")
            .finish()
    }
}

/// Generate a fresh Ed25519 keypair from the OS RNG.
pub fn generate_keypair() -> Result<KeyPair, CryptoError> {
    let signing_key = SigningKey::generate(&mut OsRng);

    let private_der = signing_key
        .to_pkcs8_der()
        .map_err(|e| CryptoError::key_encoding(format!("PKCS8 export: {e}")))?;
    let public_der = signing_key
        .verifying_key()
        .to_public_key_der()
        .map_err(|e| CryptoError::key_encoding(format!("SPKI export: {e}")))?;

    Ok(KeyPair {
        public: BASE64.encode(public_der.as_bytes()),
        private: BASE64.encode(private_der.as_bytes()),
    })
}

/// Parse a published public key, tolerating both wire encodings.
///
/// PEM-wrapped bodies are detected by the `-----BEGIN` prefix; anything else
/// is treated as raw base64 of SPKI DER. Hosting setups differ in which form
/// they serve, so the resolver must not require a specific one.
pub fn parse_public_key(body: &str) -> Result<VerifyingKey, CryptoError> {
    let trimmed = body.trim();
    if trimmed.starts_with("-----BEGIN") {
        VerifyingKey::from_public_key_pem(trimmed)
            .map_err(|e| CryptoError::key_decoding(format!("PEM public key: {e}")))
    } else {
        let der = BASE64
            .decode(trimmed)
            .map_err(|e| CryptoError::key_decoding(format!("base64 public key: {e}")))?;
        VerifyingKey::from_public_key_der(&der)
            .map_err(|e| CryptoError::key_decoding(format!("SPKI public key: {e}")))
    }
}

/// Parse a base64(PKCS8 DER) private key as produced by [`generate_keypair`].
pub fn parse_private_key(encoded: &str) -> Result<SigningKey, CryptoError> {
    let der = BASE64
        .decode(encoded.trim())
        .map_err(|e| CryptoError::key_decoding(format!("base64 private key: {e}")))?;
    SigningKey::from_pkcs8_der(&der)
        .map_err(|e| CryptoError::key_decoding(format!("PKCS8 private key: {e}")))
}

/// Check a detached signature over raw payload bytes.
pub fn verify_signature(key: &VerifyingKey, payload: &[u8], signature: &Signature) -> bool {
    use ed25519_dalek::Verifier as _;
    key.verify(payload, signature).is_ok()
}

/// Decode a base64 signature field into an Ed25519 signature.
pub fn decode_signature(encoded: &str) -> Result<Signature, CryptoError> {
    let bytes = BASE64
        .decode(encoded)
        .map_err(|e| CryptoError::signature(format!("base64: {e}")))?;
    Signature::from_slice(&bytes)
        .map_err(|e| CryptoError::signature(format!("not a 64-byte signature: {e}")))
}
