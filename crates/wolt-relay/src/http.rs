//! reqwest-backed fetch capability
//!
//! The one place real HTTP happens. Every request carries the subsystem's
//! 10-second ceiling; a timeout is reported as such rather than left to
//! hang a batch.

use async_trait::async_trait;
use std::time::Duration;
use wolt_core::config::REQUEST_TIMEOUT;
use wolt_core::{FetchError, FetchResponse, Fetcher};

/// [`Fetcher`] implementation over a shared [`reqwest::Client`].
#[derive(Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher with the default request timeout.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    /// Build a fetcher with an explicit per-request timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::request("<client setup>", e.to_string()))?;
        Ok(Self { client })
    }

    fn map_error(url: &str, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::timeout(url)
        } else {
            FetchError::request(url, error.to_string())
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn get(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<FetchResponse, FetchError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Self::map_error(url, e))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| Self::map_error(url, e))?;

        tracing::debug!(url, status, "GET completed");
        Ok(FetchResponse { status, body })
    }

    async fn head(&self, url: &str) -> Result<u16, FetchError> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| Self::map_error(url, e))?;
        let status = response.status().as_u16();
        tracing::debug!(url, status, "HEAD completed");
        Ok(status)
    }
}
