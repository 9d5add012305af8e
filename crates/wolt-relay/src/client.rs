//! Relay REST client
//!
//! Queries `/rest/v1/messages` newest-first with an optional recency filter.
//! Read-only: this subsystem never writes to the relay, so only GET is
//! implemented. Records come back in relay order (newest first); callers
//! wanting chronological display reverse or re-sort.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use wolt_core::{wire_timestamp, FetchError, Fetcher, Message, RelayConfig};

/// Failure querying the relay.
///
/// The report pipeline degrades to an explicit "no messages" error line on
/// any of these rather than crashing the run.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RelayError {
    /// The relay could not be reached.
    #[error("relay unreachable: {0}")]
    Http(#[from] FetchError),

    /// The relay answered with a non-success status.
    #[error("relay returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code received.
        status: u16,
        /// Response body, for the error note.
        body: String,
    },

    /// The response body was not a JSON array of message records.
    #[error("relay response decode failed: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

/// Read-only client for the shared relay.
#[derive(Clone)]
pub struct RelayClient {
    config: RelayConfig,
    fetcher: Arc<dyn Fetcher>,
}

impl RelayClient {
    /// Create a client for the relay described by `config`.
    pub fn new(config: RelayConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Fetch up to `limit` messages, newest first, optionally only those
    /// created after `since`.
    pub async fn fetch_recent(
        &self,
        since: Option<DateTime<Utc>>,
        limit: usize,
    ) -> Result<Vec<Message>, RelayError> {
        let url = self.query_url(since, limit);
        tracing::debug!(%url, "querying relay");

        let response = self
            .fetcher
            .get(&url, &[("apikey", &self.config.anon_key)])
            .await?;

        if !response.is_success() {
            return Err(RelayError::Status {
                status: response.status,
                body: response.body,
            });
        }

        let messages: Vec<Message> =
            serde_json::from_str(&response.body).map_err(|e| RelayError::Decode {
                message: e.to_string(),
            })?;
        tracing::debug!(count = messages.len(), "relay query returned");
        Ok(messages)
    }

    /// Build the PostgREST query URL for a fetch.
    fn query_url(&self, since: Option<DateTime<Utc>>, limit: usize) -> String {
        let mut url = format!(
            "{}/rest/v1/messages?order=created_at.desc&limit={limit}",
            self.config.url
        );
        if let Some(since) = since {
            url.push_str(&format!("&created_at=gt.{}", wire_timestamp(since)));
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::TimeZone;
    use wolt_core::FetchResponse;

    struct CannedFetcher {
        expect_url_contains: Vec<&'static str>,
        response: Result<FetchResponse, FetchError>,
    }

    #[async_trait]
    impl Fetcher for CannedFetcher {
        async fn get(
            &self,
            url: &str,
            headers: &[(&str, &str)],
        ) -> Result<FetchResponse, FetchError> {
            for fragment in &self.expect_url_contains {
                assert!(url.contains(fragment), "url {url} missing {fragment}");
            }
            assert!(headers.iter().any(|(name, _)| *name == "apikey"));
            self.response.clone()
        }

        async fn head(&self, url: &str) -> Result<u16, FetchError> {
            Err(FetchError::request(url, "not supported"))
        }
    }

    fn config() -> RelayConfig {
        RelayConfig {
            url: "https://relay.example".to_string(),
            anon_key: "anon".to_string(),
        }
    }

    const RECORDS: &str = r#"[
        {
            "from_wolt": "bob",
            "pubkey_url": "https://bob.example/wolt.pub",
            "content": "newest",
            "signature": "c2ln",
            "created_at": "2026-02-02T00:00:00.000+00:00"
        },
        {
            "from_wolt": "alice",
            "pubkey_url": "https://alice.example/wolt.pub",
            "content": "older",
            "signature": "c2ln",
            "created_at": "2026-02-01T00:00:00.000+00:00"
        }
    ]"#;

    #[tokio::test]
    async fn builds_query_and_decodes_records() {
        let client = RelayClient::new(
            config(),
            Arc::new(CannedFetcher {
                expect_url_contains: vec![
                    "https://relay.example/rest/v1/messages",
                    "order=created_at.desc",
                    "limit=20",
                ],
                response: Ok(FetchResponse {
                    status: 200,
                    body: RECORDS.to_string(),
                }),
            }),
        );

        let messages = client.fetch_recent(None, 20).await.unwrap();
        assert_eq!(messages.len(), 2);
        // Relay order preserved: newest first.
        assert_eq!(messages[0].from_wolt, "bob");
    }

    #[tokio::test]
    async fn since_filter_uses_wire_timestamp() {
        let since = Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap();
        let client = RelayClient::new(
            config(),
            Arc::new(CannedFetcher {
                expect_url_contains: vec!["&created_at=gt.2026-02-01T00:00:00.000Z"],
                response: Ok(FetchResponse {
                    status: 200,
                    body: "[]".to_string(),
                }),
            }),
        );

        let messages = client.fetch_recent(Some(since), 5).await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_relay_error() {
        let client = RelayClient::new(
            config(),
            Arc::new(CannedFetcher {
                expect_url_contains: vec![],
                response: Ok(FetchResponse {
                    status: 401,
                    body: "bad apikey".to_string(),
                }),
            }),
        );

        assert!(matches!(
            client.fetch_recent(None, 10).await,
            Err(RelayError::Status { status: 401, .. })
        ));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_error() {
        let client = RelayClient::new(
            config(),
            Arc::new(CannedFetcher {
                expect_url_contains: vec![],
                response: Ok(FetchResponse {
                    status: 200,
                    body: r#"{"unexpected": "shape"}"#.to_string(),
                }),
            }),
        );

        assert!(matches!(
            client.fetch_recent(None, 10).await,
            Err(RelayError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn record_missing_a_field_fails_decode() {
        // No signature on the record: rejected before verification.
        let body = r#"[{
            "from_wolt": "alice",
            "pubkey_url": "https://alice.example/wolt.pub",
            "content": "hi",
            "created_at": "2026-02-01T00:00:00.000+00:00"
        }]"#;
        let client = RelayClient::new(
            config(),
            Arc::new(CannedFetcher {
                expect_url_contains: vec![],
                response: Ok(FetchResponse {
                    status: 200,
                    body: body.to_string(),
                }),
            }),
        );

        assert!(matches!(
            client.fetch_recent(None, 10).await,
            Err(RelayError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_an_http_error() {
        let client = RelayClient::new(
            config(),
            Arc::new(CannedFetcher {
                expect_url_contains: vec![],
                response: Err(FetchError::timeout("https://relay.example")),
            }),
        );

        assert!(matches!(
            client.fetch_recent(None, 10).await,
            Err(RelayError::Http(_))
        ));
    }
}
