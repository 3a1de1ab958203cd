//! This module contains the title menu state machine.
//!
//! `MenuController` owns the entries and the selection and has no knowledge
//! of the terminal. The UI feeds it key identifiers and renders its `view()`.
pub mod keys;
mod outcome;

pub use keys::{key_name, MenuCommand};
pub use outcome::Outcome;

use tracing::debug;

/// One of the fixed options on the title screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    NewGame,
    LoadGame,
    Quit,
}

impl MenuItem {
    /// Display order of the menu.
    pub const ALL: [MenuItem; 3] = [MenuItem::NewGame, MenuItem::LoadGame, MenuItem::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::NewGame => "New Game",
            MenuItem::LoadGame => "Load Game",
            MenuItem::Quit => "Quit",
        }
    }

    /// Text shown instead of the label while the item is disabled.
    fn disabled_label(&self) -> Option<&'static str> {
        match self {
            MenuItem::LoadGame => Some("No Saved Games"),
            _ => None,
        }
    }
}

/// A selectable line of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub item: MenuItem,
    pub label: &'static str,
    pub enabled: bool,
}

impl MenuEntry {
    fn new(item: MenuItem, enabled: bool) -> Self {
        Self {
            item,
            label: item.label(),
            enabled,
        }
    }

    /// The text to draw for this entry given its enabled state.
    pub fn display_label(&self) -> &'static str {
        if self.enabled {
            self.label
        } else {
            self.item.disabled_label().unwrap_or(self.label)
        }
    }
}

/// Render model for a single entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub label: &'static str,
    pub selected: bool,
    pub enabled: bool,
}

/// The title menu: three entries and a wrapping selection.
#[derive(Debug, Clone)]
pub struct MenuController {
    entries: [MenuEntry; 3],
    selected: usize,
}

impl MenuController {
    /// Builds the menu with the first entry selected.
    ///
    /// `save_exists` is consulted exactly once: it fixes whether "Load Game"
    /// can be activated for the whole session.
    pub fn new(save_exists: bool) -> Self {
        let entries = MenuItem::ALL.map(|item| match item {
            MenuItem::LoadGame => MenuEntry::new(item, save_exists),
            _ => MenuEntry::new(item, true),
        });

        Self {
            entries,
            selected: 0,
        }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> &MenuEntry {
        &self.entries[self.selected]
    }

    pub fn move_up(&mut self) {
        let len = self.entries.len();
        self.selected = (self.selected + len - 1) % len;
    }

    pub fn move_down(&mut self) {
        self.selected = (self.selected + 1) % self.entries.len();
    }

    /// Activates the selected entry.
    ///
    /// Returns `None` when the entry is disabled; nothing else changes.
    pub fn activate(&self) -> Option<Outcome> {
        let entry = self.selected_entry();
        match entry.item {
            MenuItem::NewGame => Some(Outcome::StartNewGame),
            MenuItem::LoadGame if entry.enabled => Some(Outcome::LoadGame),
            MenuItem::LoadGame => {
                debug!("Load Game activated without a save file, ignoring");
                None
            }
            MenuItem::Quit => Some(Outcome::Quit),
        }
    }

    pub fn quit(&self) -> Outcome {
        Outcome::Quit
    }

    /// Applies a single command and reports the outcome, if it produced one.
    pub fn apply(&mut self, command: MenuCommand) -> Option<Outcome> {
        match command {
            MenuCommand::MoveUp => {
                self.move_up();
                None
            }
            MenuCommand::MoveDown => {
                self.move_down();
                None
            }
            MenuCommand::Activate => self.activate(),
            MenuCommand::Quit => Some(self.quit()),
        }
    }

    /// Applies the command bound to `key`; unknown keys are ignored.
    pub fn handle_key(&mut self, key: &str) -> Option<Outcome> {
        let Some(command) = MenuCommand::from_key(key) else {
            debug!("Ignoring unbound key {:?}", key);
            return None;
        };

        let outcome = self.apply(command);
        debug!(
            "Key {:?} -> {:?}, selected {}, outcome {:?}",
            key, command, self.selected, outcome
        );
        outcome
    }

    pub fn view(&self) -> Vec<EntryView> {
        self.entries()
            .iter()
            .enumerate()
            .map(|(index, entry)| EntryView {
                label: entry.display_label(),
                selected: index == self.selected,
                enabled: entry.enabled,
            })
            .collect()
    }
}
