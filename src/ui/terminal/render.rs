use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use unicode_width::UnicodeWidthStr;

use crate::menu::EntryView;

use super::TerminalUI;

const HELP_TEXT: &str = " ↑↓/w s: move | Enter: select | q/Esc: quit";

/// Horizontal padding around each entry so the highlight reads as a button.
const ENTRY_PADDING: &str = "  ";

impl TerminalUI {
    pub(super) fn render<W: Write>(&self, out: &mut W) -> Result<()> {
        queue!(out, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.terminal_size;
        let view = self.menu.view();

        // Title, blank line, then entries separated by blank lines.
        let block_height = (2 + view.len() * 2).saturating_sub(1) as u16;
        let top = height.saturating_sub(block_height) / 2;

        queue!(
            out,
            cursor::MoveTo(centered_column(width, &self.title), top),
            SetForegroundColor(Color::Cyan),
            SetAttribute(Attribute::Bold),
            Print(&self.title),
            SetAttribute(Attribute::Reset),
            ResetColor
        )?;

        for (index, entry) in view.iter().enumerate() {
            let row = top + 2 + (index as u16) * 2;
            render_entry(out, entry, row, width)?;
        }

        if height > block_height + 2 {
            queue!(
                out,
                cursor::MoveTo(0, height - 1),
                SetForegroundColor(Color::DarkGrey),
                Print(HELP_TEXT),
                ResetColor
            )?;
        }

        out.flush()?;
        Ok(())
    }
}

fn render_entry<W: Write>(out: &mut W, entry: &EntryView, row: u16, width: u16) -> Result<()> {
    let text = format!("{ENTRY_PADDING}{}{ENTRY_PADDING}", entry.label);

    queue!(out, cursor::MoveTo(centered_column(width, &text), row))?;

    if entry.selected {
        queue!(
            out,
            SetBackgroundColor(Color::White),
            SetForegroundColor(Color::Black)
        )?;
    }
    if !entry.enabled {
        queue!(out, SetForegroundColor(Color::DarkGrey))?;
    }

    queue!(out, Print(&text), ResetColor)?;
    Ok(())
}

fn centered_column(width: u16, text: &str) -> u16 {
    let text_width = UnicodeWidthStr::width(text).min(u16::MAX as usize) as u16;
    width.saturating_sub(text_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::MenuController;
    use tokio::sync::mpsc;

    fn screen(save_exists: bool, size: (u16, u16)) -> String {
        let (_tx, rx) = mpsc::unbounded_channel();
        let mut ui = TerminalUI::new(MenuController::new(save_exists), "GAME TITLE", rx);
        ui.terminal_size = size;

        let mut out = Vec::new();
        ui.render(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn draws_title_and_entries_in_order() {
        let text = screen(true, (80, 24));

        let title = text.find("GAME TITLE").unwrap();
        let new_game = text.find("New Game").unwrap();
        let load = text.find("Load Game").unwrap();
        let quit = text.find("Quit").unwrap();
        assert!(title < new_game && new_game < load && load < quit);
        assert!(text.contains(HELP_TEXT));
    }

    #[test]
    fn disabled_load_shows_placeholder() {
        let text = screen(false, (80, 24));
        assert!(text.contains("No Saved Games"));
        assert!(!text.contains("Load Game"));
    }

    #[test]
    fn tiny_terminal_does_not_underflow() {
        let text = screen(false, (3, 2));
        assert!(text.contains("New Game"));
        assert!(!text.contains(HELP_TEXT));
    }

    #[test]
    fn centering() {
        assert_eq!(centered_column(80, "Quit"), 38);
        assert_eq!(centered_column(2, "Quit"), 0);
    }
}
