use super::{TerminalUI, UIEvent};
use crate::menu::{MenuController, Outcome};
use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shows the title screen and returns what the player picked.
///
/// The terminal is restored before this returns, so the caller is free to
/// print the outcome message.
pub async fn run_tui(menu: MenuController, title: String) -> Result<Outcome> {
    info!("Starting title screen");

    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();

    let mut terminal_ui = TerminalUI::new(menu, title, ui_event_rx);

    // Terminal reads block, so they stay off the async workers. The reader
    // stops on its own once the UI drops the receiving end.
    tokio::task::spawn_blocking(move || {
        while !ui_event_tx.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(false) => continue,
                Ok(true) => {}
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }

            let ui_event = match event::read() {
                Ok(Event::Key(key_event)) => UIEvent::KeyPress(key_event),
                Ok(Event::Resize(width, height)) => UIEvent::Resize(width, height),
                Ok(_) => continue,
                Err(e) => {
                    error!("Failed to read terminal event: {}", e);
                    break;
                }
            };

            if let Err(e) = ui_event_tx.send(ui_event) {
                debug!("Failed to send terminal event: {}", e);
                break;
            }
        }
    });

    let outcome = terminal_ui.run().await;
    terminal_ui.cleanup()?;
    debug!(
        "Leaving title screen with entry {} selected",
        terminal_ui.menu().selected_index()
    );
    drop(terminal_ui);

    let outcome = outcome?;
    info!("Title screen finished with {:?}", outcome);
    Ok(outcome)
}
