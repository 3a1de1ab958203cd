//! This module contains the terminal front end of the title screen.
mod event;
pub mod runner;
pub mod terminal;

pub use event::UIEvent;
pub use runner::run_tui;
pub use terminal::TerminalUI;
