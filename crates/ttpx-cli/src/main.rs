//! TTPX CLI - MITRE ATT&CK TTP Extractor
//!
//! Serves a single-page utility that maps threat intelligence reports onto
//! MITRE ATT&CK TTPs via the Gemini completion API.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Cli;

/// Initialize tracing from `RUST_LOG`, with a crate-scoped default filter.
fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ttpx=info,ttpx_web=debug,ttpx_llm=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    cli.execute().await
}
