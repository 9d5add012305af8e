//! `wolt keygen` - generate an identity keypair

use anyhow::{Context, Result};
use wolt_crypto::generate_keypair;

/// Generate and print a fresh keypair for `name`.
pub fn run(name: &str) -> Result<()> {
    let pair = generate_keypair().context("keypair generation failed")?;

    println!();
    println!("=== Keypair for {name} ===");
    println!();
    println!("PUBLIC KEY (commit to .well-known/wolt.pub):");
    println!("--------------------------------------------");
    println!("{}", pair.public);
    println!();
    println!("PRIVATE KEY (store as env var WOLT_PRIVATE_KEY):");
    println!("------------------------------------------------");
    println!("{}", pair.private);
    println!();
    println!("IMPORTANT: never commit the private key to git!");
    println!();

    Ok(())
}
