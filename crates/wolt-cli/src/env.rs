//! Environment boundary
//!
//! The only place the CLI reads the process environment; everything below
//! it takes explicit configuration structs.

use anyhow::{bail, Result};
use wolt_core::RelayConfig;

/// Signing identity pulled from the environment.
pub struct SignerEnv {
    /// Identity name (`WOLT_NAME`).
    pub name: String,
    /// Published key URL (`WOLT_PUBKEY_URL`).
    pub pubkey_url: String,
    /// Base64 PKCS8 private key (`WOLT_PRIVATE_KEY`).
    pub private_key: String,
}

/// Read the signer identity, failing with a usage message listing every
/// missing variable.
pub fn signer_env() -> Result<SignerEnv> {
    let name = std::env::var("WOLT_NAME").ok();
    let pubkey_url = std::env::var("WOLT_PUBKEY_URL").ok();
    let private_key = std::env::var("WOLT_PRIVATE_KEY").ok();

    match (name, pubkey_url, private_key) {
        (Some(name), Some(pubkey_url), Some(private_key)) => Ok(SignerEnv {
            name,
            pubkey_url,
            private_key,
        }),
        _ => bail!(
            "required environment variables:\n  \
             WOLT_NAME        - your wolt name\n  \
             WOLT_PUBKEY_URL  - URL to your public key\n  \
             WOLT_PRIVATE_KEY - your private key (base64)"
        ),
    }
}

/// Relay configuration with environment overrides for the defaults.
pub fn relay_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    if let Ok(url) = std::env::var("WOLT_RELAY_URL") {
        config.url = url;
    }
    if let Ok(anon_key) = std::env::var("WOLT_RELAY_ANON_KEY") {
        config.anon_key = anon_key;
    }
    config
}
