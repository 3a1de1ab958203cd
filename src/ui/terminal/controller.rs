use std::io::{stdout, Write};

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::menu::{MenuController, Outcome};
use crate::ui::UIEvent;

pub struct TerminalUI {
    pub(super) menu: MenuController,
    pub(super) title: String,
    pub(super) event_rx: mpsc::UnboundedReceiver<UIEvent>,
    pub(super) terminal_size: (u16, u16),
    pub(super) terminal_active: bool,
}

impl TerminalUI {
    pub fn new(
        menu: MenuController,
        title: impl Into<String>,
        event_rx: mpsc::UnboundedReceiver<UIEvent>,
    ) -> Self {
        Self {
            menu,
            title: title.into(),
            event_rx,
            terminal_size: (80, 24),
            terminal_active: false,
        }
    }

    pub fn menu(&self) -> &MenuController {
        &self.menu
    }

    /// Takes over the terminal and runs the menu until an outcome is reached.
    ///
    /// The terminal is left in raw mode on return; call `cleanup` before
    /// printing anything.
    pub async fn run(&mut self) -> Result<Outcome> {
        self.initialize_terminal()?;

        debug!("Starting title screen loop");

        let mut stdout = stdout();
        self.event_loop(&mut stdout).await
    }

    pub(super) async fn event_loop<W: Write>(&mut self, out: &mut W) -> Result<Outcome> {
        self.render(out)?;

        loop {
            let Some(event) = self.event_rx.recv().await else {
                warn!("Input source closed, leaving title screen");
                return Ok(self.menu.quit());
            };

            if let Some(outcome) = self.handle_event(event) {
                return Ok(outcome);
            }

            self.render(out)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> UIEvent {
        UIEvent::KeyPress(KeyEvent::new(code, KeyModifiers::NONE))
    }

    async fn drive(save_exists: bool, events: Vec<UIEvent>) -> (Outcome, TerminalUI) {
        let (tx, rx) = mpsc::unbounded_channel();
        for event in events {
            tx.send(event).unwrap();
        }
        drop(tx);

        let mut ui = TerminalUI::new(MenuController::new(save_exists), "GAME TITLE", rx);
        let mut screen = Vec::new();
        let outcome = ui.event_loop(&mut screen).await.unwrap();
        (outcome, ui)
    }

    #[tokio::test]
    async fn arrows_reach_quit() {
        let (outcome, ui) = drive(
            false,
            vec![key(KeyCode::Down), key(KeyCode::Down), key(KeyCode::Enter)],
        )
        .await;

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(ui.menu().selected_index(), 2);
    }

    #[tokio::test]
    async fn enter_on_new_game_starts() {
        let (outcome, _) = drive(false, vec![key(KeyCode::Enter)]).await;
        assert_eq!(outcome, Outcome::StartNewGame);
    }

    #[tokio::test]
    async fn disabled_load_keeps_running() {
        let (outcome, ui) = drive(
            false,
            vec![
                key(KeyCode::Char('s')),
                key(KeyCode::Enter),
                key(KeyCode::Char('x')),
                key(KeyCode::Esc),
            ],
        )
        .await;

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(ui.menu().selected_index(), 1);
    }

    #[tokio::test]
    async fn load_with_save() {
        let (outcome, _) = drive(true, vec![key(KeyCode::Down), key(KeyCode::Enter)]).await;
        assert_eq!(outcome, Outcome::LoadGame);
    }

    #[tokio::test]
    async fn resize_is_tracked() {
        let (outcome, ui) = drive(
            false,
            vec![UIEvent::Resize(120, 40), key(KeyCode::Char('q'))],
        )
        .await;

        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(ui.terminal_size, (120, 40));
    }

    #[tokio::test]
    async fn closed_input_quits() {
        let (outcome, ui) = drive(true, vec![key(KeyCode::Up)]).await;
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(ui.menu().selected_index(), 2);
    }
}
