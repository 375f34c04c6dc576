//! Command-line arguments for `ratesnap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Convert an exchange-rate XML feed into a ranked JSON snapshot.
///
/// Paths to the feed and the snapshot are read from a YAML file with the
/// keys `input-file` and `output-file`.
#[derive(Debug, Parser)]
#[command(name = "ratesnap", author, version, about)]
pub struct Cli {
    /// Path to the YAML configuration.
    #[arg(long, value_name = "PATH")]
    pub config: PathBuf,

    /// Log line format; filtering follows `RUST_LOG` (default `info`).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}
