//! user-service binary
//!
//! Loads `.env`, parses flags, reads configuration, then connects, syncs and
//! serves until shutdown.

#![allow(missing_docs)]

use clap::Parser;
use std::process::ExitCode;
use tracing::{info, warn};
use user_service::cli::Cli;
use user_service::server;
use user_service::utils::logging::init_logging;

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Print error using Display (not Debug) to preserve newlines
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> user_service::Result<()> {
    let config = cli.load_config().await?;
    init_logging(&config.logging)?;

    if !cli.config.exists() {
        warn!(
            "Configuration file {:?} not found, using built-in defaults",
            cli.config
        );
    }

    info!(
        "Configuration loaded from {:?} (environment: {}, sync: {})",
        cli.config, config.environment, config.database.sync
    );

    server::run_server(config).await
}
