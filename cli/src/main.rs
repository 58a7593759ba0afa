//! `hmedia-cli` binary entry point.

use anyhow::Result;
use clap::Parser;
use hmedia_cli::{cli::Cli, client::ContentClient, commands};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Default to info-level logs; override via RUST_LOG if needed.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ContentClient::new(&cli.api_base)?;
    commands::run(&client, cli.command).await
}
