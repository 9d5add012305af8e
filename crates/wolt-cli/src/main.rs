//! Operator tooling for the wolt network

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands {
    pub mod heartbeat;
    pub mod keygen;
    pub mod messages;
    pub mod sign;
    pub mod verify;
}
mod env;

#[derive(Parser)]
#[command(name = "wolt")]
#[command(about = "Wolt messaging protocol tools", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a fresh Ed25519 identity keypair
    Keygen {
        /// Display label for the identity
        #[arg(short, long, default_value = "unnamed-wolt")]
        name: String,
    },

    /// Sign a message as the identity configured in the environment
    ///
    /// Reads WOLT_NAME, WOLT_PUBKEY_URL, and WOLT_PRIVATE_KEY; the private
    /// key is never accepted on the command line.
    Sign {
        /// Message content
        content: String,
    },

    /// Verify a single message read as JSON from stdin
    Verify,

    /// Fetch and display recent relay messages with verification markers
    Messages {
        /// Only messages created after this ISO-8601 timestamp
        #[arg(long)]
        since: Option<String>,

        /// Maximum number of messages to fetch
        #[arg(long, default_value = "20")]
        limit: usize,
    },

    /// Print the heartbeat report (site health + verified message digest)
    Heartbeat {
        /// Trailing window, in days
        #[arg(long, default_value = "7")]
        window_days: i64,

        /// Maximum number of messages in the digest
        #[arg(long, default_value = "50")]
        limit: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Keygen { name } => commands::keygen::run(&name),
        Commands::Sign { content } => commands::sign::run(&content),
        Commands::Verify => commands::verify::run().await,
        Commands::Messages { since, limit } => commands::messages::run(since.as_deref(), limit).await,
        Commands::Heartbeat { window_days, limit } => {
            commands::heartbeat::run(window_days, limit).await
        }
    }
}
