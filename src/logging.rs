//! Log setup
//!
//! Builds an explicit dispatcher that appends timestamped lines to a log
//! file and mirrors the bare message to stdout.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::Dispatch;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter, Registry};

pub const DEFAULT_LOG_FILE: &str = "/var/tmp/selectionproofread.log";

/// Build the dispatcher for one run.
///
/// `RUST_LOG` overrides the level; otherwise `info`, or `debug` when verbose.
pub fn build(log_file: Option<&Path>, verbose: bool) -> Result<Dispatch> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_target(false)
                    .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stdout_layer = fmt::layer()
        .without_time()
        .with_level(false)
        .with_target(false)
        .with_writer(std::io::stdout);

    let subscriber = Registry::default()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer);

    Ok(Dispatch::new(subscriber))
}
