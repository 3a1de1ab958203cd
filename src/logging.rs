//! This module sets up `tracing` for the title screen.
//!
//! The menu owns the terminal in raw mode, so log output can never share
//! stdout or stderr with it. Logs go to a file when one is configured and are
//! dropped otherwise.
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::app::SetupError;

/// Parses a filter directive such as `info,title_screen=debug`.
pub fn build_filter(directive: &str) -> Result<EnvFilter, SetupError> {
    EnvFilter::try_new(directive).map_err(|source| SetupError::LogFilter {
        filter: directive.to_string(),
        source,
    })
}

/// Opens the log file for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, SetupError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| SetupError::LogFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over `level` when it is set and non-empty.
///
/// The directive is validated even when no log file is configured, so a bad
/// `--log-level` is reported instead of silently ignored.
pub fn init(log_file: Option<&Path>, level: &str) -> Result<(), SetupError> {
    let directive = std::env::var("RUST_LOG")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| level.to_string());
    let filter = build_filter(&directive)?;

    let Some(path) = log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();

    Ok(())
}
