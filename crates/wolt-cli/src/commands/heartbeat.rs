//! `wolt heartbeat` - print the full heartbeat report

use std::sync::Arc;

use anyhow::Result;
use wolt_core::ReportConfig;
use wolt_relay::HttpFetcher;
use wolt_report::ReportPipeline;

use crate::env::relay_config;

/// Build and print the report. Always best-effort: partial failures show up
/// inside the report text, not as a non-zero exit.
pub async fn run(window_days: i64, limit: usize) -> Result<()> {
    let config = ReportConfig {
        relay: relay_config(),
        window_days,
        limit,
        ..ReportConfig::default()
    };

    let fetcher = Arc::new(HttpFetcher::new()?);
    let pipeline = ReportPipeline::new(config, fetcher);

    println!("{}", pipeline.build_report().await);
    Ok(())
}
