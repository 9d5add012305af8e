//! HTTP fetch capability interface
//!
//! Key resolution, relay queries, and health probes all go through this
//! trait rather than calling an HTTP client directly, so the verification
//! and reporting crates can be driven by deterministic fixtures in tests.
//! The reqwest-backed implementation lives in `wolt-relay`.

use async_trait::async_trait;

/// Minimal view of an HTTP response.
#[derive(Debug, Clone)]
pub struct FetchResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl FetchResponse {
    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Failure to complete an HTTP exchange at all (transport-level).
///
/// A response with a non-2xx status is not a `FetchError`; callers decide
/// what statuses mean for them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FetchError {
    /// Connection, DNS, TLS, or protocol failure.
    #[error("request to {url} failed: {reason}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying failure description.
        reason: String,
    },
    /// The request exceeded its timeout.
    #[error("request to {url} timed out")]
    Timeout {
        /// Requested URL.
        url: String,
    },
}

impl FetchError {
    /// Build a transport-failure error.
    pub fn request(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Request {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Build a timeout error.
    pub fn timeout(url: impl Into<String>) -> Self {
        Self::Timeout { url: url.into() }
    }
}

/// Capability to perform plain HTTP requests with a bounded lifetime.
///
/// Implementations must apply a per-request timeout; callers assume no call
/// hangs indefinitely.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET a URL with optional extra headers, returning status and body.
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<FetchResponse, FetchError>;

    /// HEAD a URL, returning just the status code.
    async fn head(&self, url: &str) -> Result<u16, FetchError>;
}
