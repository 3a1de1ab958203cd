//! The main entry point for the title screen.
mod app;
mod logging;
mod menu;
mod save;
mod ui;

use anyhow::Result;

/// Shows the title menu and exits once the player picks an option.
///
/// # Errors
///
/// Returns an error if setup fails or the terminal cannot be driven.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
