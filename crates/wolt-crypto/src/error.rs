//! Crypto error type

/// Failures in key handling or signing.
///
/// All variants are fatal to the single operation that raised them; batch
/// isolation happens a layer up, in verification.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CryptoError {
    /// A freshly generated key could not be DER-encoded.
    #[error("key encoding failed: {message}")]
    KeyEncoding {
        /// Description of the encoding failure.
        message: String,
    },

    /// Supplied key material could not be decoded or parsed.
    #[error("key decoding failed: {message}")]
    KeyDecoding {
        /// Description of the decoding failure.
        message: String,
    },

    /// A signature field could not be decoded into 64 signature bytes.
    #[error("malformed signature: {message}")]
    Signature {
        /// Description of the malformed signature.
        message: String,
    },
}

impl CryptoError {
    /// Create a key encoding error.
    pub fn key_encoding(message: impl Into<String>) -> Self {
        Self::KeyEncoding {
            message: message.into(),
        }
    }

    /// Create a key decoding error.
    pub fn key_decoding(message: impl Into<String>) -> Self {
        Self::KeyDecoding {
            message: message.into(),
        }
    }

    /// Create a malformed signature error.
    pub fn signature(message: impl Into<String>) -> Self {
        Self::Signature {
            message: message.into(),
        }
    }
}
