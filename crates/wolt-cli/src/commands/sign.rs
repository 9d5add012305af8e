//! `wolt sign` - produce a relay-ready signed message

use anyhow::{Context, Result};
use wolt_crypto::sign_message;

use crate::env::signer_env;

/// Sign `content` as the identity from the environment and print the
/// message record as JSON, ready to submit to the relay.
pub fn run(content: &str) -> Result<()> {
    let signer = signer_env()?;
    let message = sign_message(
        &signer.name,
        &signer.pubkey_url,
        content,
        &signer.private_key,
    )
    .context("signing failed")?;

    println!("{}", serde_json::to_string_pretty(&message)?);
    Ok(())
}
