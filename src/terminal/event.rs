//! Terminal events and notifications
//!
//! Discrete notifications raised while processing emulator input, drained by
//! the owning session and fanned out to its client.

/// Terminal change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalEvent {
    /// Bell character (BEL) was received
    BellRang,
    /// Terminal title changed via OSC 0/2 or the title stack
    TitleChanged(String),
    /// Terminal was resized (columns, rows)
    SizeChanged(usize, usize),
    /// An application asked to write text to the system clipboard (OSC 52)
    ClipboardWriteRequested(String),
    /// Palette or default colors changed (OSC 4/10/11/12 and resets)
    ColorsChanged,
}
