// src/main.rs
// =============================================================================
// Entry point of the link-pulse binary.
//
// What happens here:
// 1. Set up logging (stderr, so stdout stays clean for the report)
// 2. Resolve settings from flags and environment variables
// 3. Run the checks and write the report
// 4. Exit: 0 = run completed, 1 = broken URLs with --fail-on-broken,
//    2 = fatal error (bad config, unreadable input, unwritable output)
// =============================================================================

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use link_pulse::app;
use link_pulse::cli::Cli;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Unexpected error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    init_tracing()?;

    let cli = Cli::parse();
    let settings = cli
        .resolve(|key| std::env::var(key).ok())
        .context("while loading environment")?;

    let summary = app::run(&settings).await?;

    if cli.fail_on_broken && summary.failed > 0 {
        Ok(1)
    } else {
        Ok(0)
    }
}

fn init_tracing() -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::new("link_pulse=info"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}
