//! Public key resolution over HTTP
//!
//! A wolt's key lives at a stable well-known URL and is fetched fresh for
//! every verification; there is no cache and no revocation model beyond
//! "whatever the URL serves right now". Bodies may be PEM or raw base64
//! SPKI DER depending on the publisher's hosting setup.

use std::sync::Arc;

use wolt_core::{FetchError, Fetcher};
use wolt_crypto::{parse_public_key, CryptoError, VerifyingKey};

/// Failure to turn a `pubkey_url` into a usable verification key.
///
/// Never fatal to a batch; callers map this to an unverified outcome for
/// the one message involved.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ResolveError {
    /// The key URL could not be fetched at all.
    #[error("key fetch failed: {0}")]
    Fetch(#[from] FetchError),

    /// The key URL answered with a non-success status.
    #[error("key fetch returned HTTP {status} for {url}")]
    Status {
        /// Requested key URL.
        url: String,
        /// HTTP status code received.
        status: u16,
    },

    /// The response body did not parse as a public key in either encoding.
    #[error("key parse failed: {0}")]
    Parse(#[from] CryptoError),
}

/// Fetches and parses published public keys.
#[derive(Clone)]
pub struct KeyResolver {
    fetcher: Arc<dyn Fetcher>,
}

impl KeyResolver {
    /// Create a resolver backed by the given fetch capability.
    pub fn new(fetcher: Arc<dyn Fetcher>) -> Self {
        Self { fetcher }
    }

    /// GET `url` and parse the body as an Ed25519 public key.
    pub async fn resolve(&self, url: &str) -> Result<VerifyingKey, ResolveError> {
        let response = self.fetcher.get(url, &[]).await?;
        if !response.is_success() {
            return Err(ResolveError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }
        Ok(parse_public_key(&response.body)?)
    }
}
