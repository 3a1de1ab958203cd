//! This module defines the terminal results of the title menu.

/// What the player chose on the title screen.
///
/// Every outcome ends the menu loop. None of them load or create game state
/// yet; the message is all the caller gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// "New Game" was activated.
    StartNewGame,
    /// "Load Game" was activated while a save file was present.
    LoadGame,
    /// "Quit" was activated or the quit key was pressed.
    Quit,
}

impl Outcome {
    /// The status line printed once the terminal has been restored.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Outcome::StartNewGame => Some("Starting new game..."),
            Outcome::LoadGame => Some("Loading game..."),
            Outcome::Quit => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_carries_no_message() {
        assert_eq!(Outcome::Quit.message(), None);
        assert_eq!(Outcome::StartNewGame.message(), Some("Starting new game..."));
        assert_eq!(Outcome::LoadGame.message(), Some("Loading game..."));
    }
}
