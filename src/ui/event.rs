use crossterm::event::KeyEvent;

/// Input delivered to the title screen loop, one at a time.
#[derive(Debug)]
pub enum UIEvent {
    KeyPress(KeyEvent),
    Resize(u16, u16),
}
