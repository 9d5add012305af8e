//! `wolt messages` - fetch and display recent relay messages

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use wolt_relay::{HttpFetcher, RelayClient};
use wolt_verify::Verifier;

use crate::env::relay_config;

const VERIFY_CONCURRENCY: usize = 8;

/// Fetch up to `limit` messages (optionally after `since`), verify each,
/// and print them oldest-first with verification markers.
pub async fn run(since: Option<&str>, limit: usize) -> Result<()> {
    let since = since
        .map(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map(|at| at.with_timezone(&Utc))
                .with_context(|| format!("invalid --since timestamp: {raw}"))
        })
        .transpose()?;

    let fetcher: Arc<dyn wolt_core::Fetcher> =
        Arc::new(HttpFetcher::new()?);
    let client = RelayClient::new(relay_config(), fetcher.clone());
    let verifier = Verifier::new(fetcher);

    println!("=== Wolt Message Check ===");
    println!();

    let mut messages = client
        .fetch_recent(since, limit)
        .await
        .context("relay query failed")?;

    let since_note = since
        .map(|at| format!(" since {}", wolt_core::wire_timestamp(at)))
        .unwrap_or_default();
    if messages.is_empty() {
        println!("No messages{since_note}");
        println!();
        return Ok(());
    }
    println!("Found {} message(s){since_note}", messages.len());
    println!();

    // Relay order is newest-first; display oldest-first.
    messages.reverse();
    for verified in verifier.verify_batch(messages, VERIFY_CONCURRENCY).await {
        let marker = if verified.outcome.is_valid() { "✓" } else { "✗" };
        println!(
            "{marker} [{}] {}",
            verified.message.from_wolt, verified.message.created_at
        );
        println!("  {}", verified.message.content);
        println!();
    }

    Ok(())
}
