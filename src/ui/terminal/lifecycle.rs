use anyhow::Result;
use crossterm::{cursor, execute, terminal};
use std::io::stdout;
use tracing::warn;

use super::TerminalUI;

impl TerminalUI {
    /// Switches to raw mode on the alternate screen and records its size.
    pub(super) fn initialize_terminal(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.terminal_active = true;

        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        self.terminal_size = terminal::size()?;

        Ok(())
    }

    /// Restores the terminal. Safe to call more than once; a failed restore
    /// stays pending so `Drop` tries again.
    pub fn cleanup(&mut self) -> Result<()> {
        self.restore_with(leave_title_screen)
    }

    fn restore_with(&mut self, restore: impl FnOnce() -> Result<()>) -> Result<()> {
        if !self.terminal_active {
            return Ok(());
        }

        restore()?;
        self.terminal_active = false;
        Ok(())
    }
}

fn leave_title_screen() -> Result<()> {
    terminal::disable_raw_mode()?;
    execute!(stdout(), cursor::Show, terminal::LeaveAlternateScreen)?;
    Ok(())
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        if let Err(e) = self.cleanup() {
            warn!("Failed to restore terminal: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuController;
    use anyhow::anyhow;
    use tokio::sync::mpsc;

    fn active_ui() -> TerminalUI {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut ui = TerminalUI::new(MenuController::new(false), "GAME TITLE", rx);
        ui.terminal_active = true;
        ui
    }

    #[test]
    fn failed_restore_is_retried() {
        let mut ui = active_ui();

        assert!(ui.restore_with(|| Err(anyhow!("tty gone"))).is_err());
        assert!(ui.terminal_active);

        let mut calls = 0;
        ui.restore_with(|| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 1);
        assert!(!ui.terminal_active);

        ui.restore_with(|| {
            calls += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(calls, 1);
    }

    #[test]
    fn inactive_terminal_is_left_alone() {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut ui = TerminalUI::new(MenuController::new(false), "GAME TITLE", rx);
        assert!(ui.cleanup().is_ok());
        assert!(!ui.terminal_active);
    }
}
