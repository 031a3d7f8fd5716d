//! Strictly Tic-Tac-Toe - terminal front end
//!
//! Two players share one keyboard. Logs go to a file so they never
//! interfere with the terminal UI.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_tictactoe::TuiConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TuiConfig::load_or_default(&cli.config)?;
    if let Some(log_file) = cli.log_file {
        config = config.with_log_file(log_file);
    }

    init_tracing(&config)?;
    info!(config = %cli.config.display(), "Configuration loaded");

    let theme = config.theme()?;
    tui::run_tui(theme)
}

/// Logs to the configured file; `RUST_LOG` wins over the config filter.
fn init_tracing(config: &TuiConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
