//! This module defines the terminal presenter for the title menu.
mod controller;
mod events;
mod lifecycle;
mod render;

pub use controller::TerminalUI;
