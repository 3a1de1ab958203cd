//! This module locates the save file.
//!
//! The save format is not read here; only its presence decides whether
//! "Load Game" is offered.
use std::path::{Path, PathBuf};

use tracing::debug;

/// File name looked up in the working directory when no path is configured.
pub const DEFAULT_SAVE_FILE: &str = "savegame.db";

/// Where the game keeps its save.
#[derive(Debug, Clone)]
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks for the save at call time. Callers are expected to do this once.
    pub fn exists(&self) -> bool {
        let exists = self.path.exists();
        debug!("Save file {} present: {}", self.path.display(), exists);
        exists
    }
}

impl Default for SaveSlot {
    fn default() -> Self {
        Self::new(DEFAULT_SAVE_FILE)
    }
}
