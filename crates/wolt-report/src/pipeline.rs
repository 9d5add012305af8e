//! Report orchestration
//!
//! One batch invocation per run: probe sites, fetch the window, verify with
//! bounded concurrency, render. Every network call is bounded by the fetch
//! capability's timeout and every failure degrades a section instead of
//! propagating.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use wolt_core::{normalize_timestamp, Fetcher, ReportConfig};
use wolt_relay::RelayClient;
use wolt_verify::Verifier;

use crate::health::probe_sites;
use crate::render::{render_report, MessageDigest};

/// Builds the heartbeat report.
pub struct ReportPipeline {
    config: ReportConfig,
    fetcher: Arc<dyn Fetcher>,
    relay: RelayClient,
    verifier: Verifier,
}

impl ReportPipeline {
    /// Create a pipeline from explicit configuration and a fetch capability.
    pub fn new(config: ReportConfig, fetcher: Arc<dyn Fetcher>) -> Self {
        let relay = RelayClient::new(config.relay.clone(), fetcher.clone());
        let verifier = Verifier::new(fetcher.clone());
        Self {
            config,
            fetcher,
            relay,
            verifier,
        }
    }

    /// Build the report for the window ending now.
    pub async fn build_report(&self) -> String {
        self.build_report_at(Utc::now()).await
    }

    /// Build the report for the window ending at an explicit instant.
    pub async fn build_report_at(&self, now: DateTime<Utc>) -> String {
        let sites = probe_sites(&self.fetcher, &self.config.sites).await;
        let digest = self.collect_digest(now).await;
        render_report(
            now,
            &sites,
            self.config.window_days,
            &digest,
            self.config.preview_len,
        )
    }

    async fn collect_digest(&self, now: DateTime<Utc>) -> MessageDigest {
        let since = now - Duration::days(self.config.window_days);
        let mut messages = match self.relay.fetch_recent(Some(since), self.config.limit).await {
            Ok(messages) => messages,
            Err(e) => {
                tracing::warn!("relay query failed, degrading message section: {e}");
                return MessageDigest::Error(e.to_string());
            }
        };

        // Relay order is newest-first; the report reads oldest-first.
        messages.reverse();
        let mut verified = self
            .verifier
            .verify_batch(messages, self.config.concurrency)
            .await;

        // Re-sequence after the concurrent verifications settle so display
        // order never depends on completion order.
        verified.sort_by(|a, b| {
            normalize_timestamp(&a.message.created_at)
                .cmp(&normalize_timestamp(&b.message.created_at))
        });
        MessageDigest::Messages(verified)
    }
}
