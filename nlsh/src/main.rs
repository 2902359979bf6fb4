//! nlsh - natural-language shell assistant
//!
//! CLI entry point: parse arguments, load configuration, set up logging,
//! and hand control to the interactive session.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use eyre::{Context, Result};
use tracing::info;

use nlsh::adapter::ProcessAdapter;
use nlsh::cli::Cli;
use nlsh::config::Config;
use nlsh::repl::Session;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // The terminal belongs to the interactive session, so logs go to a file
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nlsh")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Level priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some("INFO") | None => tracing::Level::INFO,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("nlsh.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    if let Some(adapter) = cli.adapter {
        config.adapter.path = adapter;
    }

    setup_logging(cli.log_level.as_deref(), config.log_level.as_deref()).context("Failed to setup logging")?;

    info!(
        "nlsh starting (adapter: {}, timeout_ms: {})",
        config.adapter.path.display(),
        config.adapter.timeout_ms
    );

    let adapter = Arc::new(ProcessAdapter::new(
        config.adapter.path.clone(),
        Duration::from_millis(config.adapter.timeout_ms),
    ));

    Session::new(adapter, &config).run().await
}
