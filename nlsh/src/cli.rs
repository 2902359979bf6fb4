//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

/// nlsh - natural-language shell assistant
#[derive(Debug, Parser)]
#[command(
    name = "nlsh",
    about = "Turns natural-language input into shell commands via an external adapter process",
    version
)]
pub struct Cli {
    /// Path to the adapter executable
    #[arg(value_name = "ADAPTER", help = "Path to the adapter executable (default: ./ai_adapter.py)")]
    pub adapter: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,
}
