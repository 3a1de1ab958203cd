use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::menu::{key_name, Outcome};
use crate::ui::UIEvent;

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Option<Outcome> {
        match event {
            UIEvent::KeyPress(key_event) => self.handle_key_event(key_event),
            UIEvent::Resize(width, height) => {
                self.terminal_size = (width, height);
                None
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Option<Outcome> {
        // Raw mode swallows SIGINT, so Ctrl+C has to be honoured here.
        if let (KeyCode::Char('c'), true) =
            (key.code, key.modifiers.contains(KeyModifiers::CONTROL))
        {
            debug!("Ctrl+C pressed, quitting");
            return Some(self.menu.quit());
        }

        let name = key_name(&key)?;
        self.menu.handle_key(&name)
    }
}
