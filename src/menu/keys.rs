//! This module maps key identifiers onto menu commands.
//!
//! Input decoding happens in two steps: a terminal `KeyEvent` is normalised
//! into a key identifier (`"w"`, `"up"`, `"enter"`, ...) and the identifier is
//! looked up in a fixed table. Keeping the table on plain strings lets the
//! controller be driven without a terminal.
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A state transition requested by a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    MoveUp,
    MoveDown,
    Activate,
    Quit,
}

impl MenuCommand {
    /// Looks up the command bound to a key identifier.
    ///
    /// Identifiers are case-sensitive. Anything not in the table yields
    /// `None` and must be ignored by the caller.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "w" | "up" => Some(MenuCommand::MoveUp),
            "s" | "down" => Some(MenuCommand::MoveDown),
            "enter" => Some(MenuCommand::Activate),
            "q" | "escape" => Some(MenuCommand::Quit),
            _ => None,
        }
    }
}

/// Normalises a terminal key event into a key identifier.
///
/// Release events are dropped so a single press never fires twice on
/// terminals that report both edges. Chords with Ctrl or Alt have no
/// identifier in the table; Shift only changes the character.
pub fn key_name(key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Up => Some("up".to_string()),
        KeyCode::Down => Some("down".to_string()),
        KeyCode::Enter => Some("enter".to_string()),
        KeyCode::Esc => Some("escape".to_string()),
        _ => None,
    }
}
