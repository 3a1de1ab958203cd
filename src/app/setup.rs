//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::logging;
use crate::save::SaveSlot;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Startup failures. Nothing after setup can fail with these.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("failed to open log file {path:?}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid log filter '{filter}': {source}")]
    LogFilter {
        filter: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
}

/// Everything the title screen needs to start.
pub struct PreparedApp {
    /// The command-line arguments.
    pub args: AppArgs,
    /// Where the save file is looked up.
    pub save_slot: SaveSlot,
}

/// Configures logging and resolves the save slot.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or the log filter
/// does not parse.
pub fn prepare(args: AppArgs) -> Result<PreparedApp, SetupError> {
    logging::init(args.log_file.as_deref().map(Path::new), &args.log_level)?;

    let save_slot = SaveSlot::new(&args.save_file);
    info!("Looking for save file at {}", save_slot.path().display());

    Ok(PreparedApp { args, save_slot })
}
