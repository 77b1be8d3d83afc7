use std::{
    path::{Path, PathBuf},
    process::ExitCode,
    str::FromStr,
};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    filter::LevelFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

use crate::cli::Cli;

mod cli;
mod commands;
mod input;
mod report;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Keep the guard alive so the log file is flushed on exit
    let _guard = match setup_logging(&cli.log_level, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Failed to set up logging: {:#}", err);
            return ExitCode::FAILURE;
        }
    };

    cli.start()
}

/// Installs the global tracing subscriber: human readable logs on stderr, and JSON
/// logs in `log_file` if given. Records from the `log` facade are forwarded too.
fn setup_logging(log_level: &str, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let log_level = tracing::Level::from_str(log_level)
        .map_err(|_| anyhow!("Invalid log level: {}", log_level))?;
    let filter = LevelFilter::from_level(log_level);

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .without_time()
        .with_filter(filter);

    let (logfile_layer, guard) = match log_file {
        Some(path) => {
            if path.exists() {
                return Err(anyhow!("Log file already exists: {}", path.display()));
            }
            let file_name = path
                .file_name()
                .with_context(|| format!("Invalid log file path: {}", path.display()))?;
            let dir = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
                _ => PathBuf::from("."),
            };
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

            let appender = tracing_appender::rolling::never(&dir, file_name);
            let (non_blocking_appender, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .json()
                .with_ansi(false)
                .with_writer(non_blocking_appender)
                .with_filter(filter);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(logfile_layer)
        .try_init()
        .context("Unable to set global tracing subscriber")?;

    if let Some(path) = log_file {
        tracing::debug!("Saving logs to {}", path.display());
    }
    Ok(guard)
}
