//! `wolt verify` - verify a single message from stdin

use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use wolt_core::{Message, VerificationOutcome};
use wolt_relay::HttpFetcher;
use wolt_verify::Verifier;

/// Read one message record as JSON from stdin, resolve its key, and verify.
///
/// Exits non-zero when the signature does not check out so the command can
/// gate scripts.
pub async fn run() -> Result<()> {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;
    let message: Message =
        serde_json::from_str(&input).context("stdin is not a wolt message record")?;

    println!("Verifying message from: {}", message.from_wolt);
    println!("Public key URL: {}", message.pubkey_url);

    let fetcher = Arc::new(HttpFetcher::new()?);
    let verifier = Verifier::new(fetcher);
    let outcome = verifier.verify(&message).await;

    println!();
    match outcome {
        VerificationOutcome::Valid => {
            println!("✓ Signature VALID");
            println!("  From: {}", message.from_wolt);
            println!("  Content: {}", message.content);
            println!("  Time: {}", message.created_at);
            Ok(())
        }
        outcome => {
            println!("✗ Signature INVALID");
            if let VerificationOutcome::KeyUnavailable(reason)
            | VerificationOutcome::MalformedRecord(reason) = &outcome
            {
                eprintln!("wolt: {reason}");
            }
            std::process::exit(1);
        }
    }
}
