mod cli;
mod config;
mod error;
mod logging;

use clap::Parser;
use std::process::ExitCode;
use tracing::{debug, error, info};

use crate::cli::Cli;
use crate::config::AppConfig;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_format);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(kind = err.kind(), "conversion aborted");
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = AppConfig::load(&cli.config)?;
    debug!(
        source = %config.source_file.display(),
        target = %config.target_file.display(),
        "configuration loaded"
    );

    let report = ratesnap_core::convert_with_progress(
        &config.source_file,
        &config.target_file,
        |stage| debug!(%stage, "entering stage"),
    )?;

    info!(
        records = report.records,
        target = %report.target.display(),
        "snapshot written"
    );
    Ok(())
}
