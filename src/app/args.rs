use clap::Parser;

use crate::save::DEFAULT_SAVE_FILE;

#[derive(Parser, Debug, Clone)]
#[command(name = "title-screen")]
#[command(about = "Game title menu for the terminal")]
pub struct AppArgs {
    #[arg(
        long,
        env = "TITLE_SCREEN_SAVE_FILE",
        default_value = DEFAULT_SAVE_FILE,
        help = "Save file whose presence enables Load Game"
    )]
    pub save_file: String,

    #[arg(long, default_value = "GAME TITLE", help = "Title shown above the menu")]
    pub title: String,

    #[arg(
        long,
        env = "TITLE_SCREEN_LOG_FILE",
        help = "Write logs to this file (logging is off otherwise)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long,
        default_value = "info",
        help = "Log filter directive, overridden by RUST_LOG"
    )]
    pub log_level: String,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }
}
