//! Session wrapper tying the emulator to a host process
//!
//! A `Session` owns one emulator behind a lock shared with the renderer, a
//! writer carrying input and reply bytes to the child process, and a client
//! receiving notifications. Callbacks are dispatched after processing
//! completes, so the terminal lock is never held while client code runs.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::mouse::MouseEvent;
use crate::terminal::{Terminal, TerminalEvent};

/// Errors from session operations that touch host I/O
#[derive(Debug)]
pub enum SessionError {
    /// Writing to the child process failed
    Io(std::io::Error),
    /// The session writer has been shut down
    NotRunning,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Io(err) => write!(f, "IO error: {}", err),
            SessionError::NotRunning => write!(f, "Session is not running"),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<std::io::Error> for SessionError {
    fn from(err: std::io::Error) -> Self {
        SessionError::Io(err)
    }
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;

/// Notification sink for session-level events
///
/// All methods have default no-op implementations, so a client only
/// overrides the ones it cares about. The session owns its client
/// exclusively and never invokes it while holding the terminal lock.
pub trait SessionClient: Send {
    /// Screen contents changed after a processed chunk or a resize
    fn on_text_changed(&mut self) {}

    /// Title changed via OSC 0/2 or the title stack
    fn on_title_changed(&mut self, _title: &str) {}

    /// BEL received
    fn on_bell(&mut self) {}

    /// An application asked to place text on the clipboard (OSC 52)
    fn on_clipboard_write(&mut self, _text: &str) {}

    /// Palette or default colors changed
    fn on_colors_changed(&mut self) {}
}

/// Serializable snapshot of the observable session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub columns: usize,
    pub rows: usize,
    pub title: String,
    pub cursor_row: usize,
    pub cursor_column: usize,
    pub cursor_visible: bool,
    pub alternate_screen: bool,
    /// Visible rows joined with newlines, trailing blanks trimmed
    pub screen_text: String,
    /// Scrollback plus visible rows, wrap-aware
    pub transcript_text: String,
}

/// One terminal session: emulator, child-process writer, and client.
///
/// The reader thread calls [`Session::feed`] with chunks drained from the
/// child process; the renderer clones [`Session::terminal`] and reads the
/// screen under the same lock; user input flows through the write methods.
pub struct Session {
    terminal: Arc<Mutex<Terminal>>,
    writer: Mutex<Option<Box<dyn Write + Send>>>,
    client: Mutex<Box<dyn SessionClient>>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let term = self.terminal.lock();
        f.debug_struct("Session")
            .field("columns", &term.columns())
            .field("rows", &term.rows())
            .field("running", &self.writer.lock().is_some())
            .finish()
    }
}

impl Session {
    /// Create a session with its own emulator instance.
    ///
    /// `writer` receives everything headed to the child process: user
    /// input, pastes, and query replies. `transcript_rows` is clamped the
    /// same way as [`Terminal::with_scrollback`].
    pub fn new(
        columns: usize,
        rows: usize,
        transcript_rows: usize,
        writer: Box<dyn Write + Send>,
        client: Box<dyn SessionClient>,
    ) -> Self {
        Self {
            terminal: Arc::new(Mutex::new(Terminal::with_scrollback(
                columns,
                rows,
                transcript_rows,
            ))),
            writer: Mutex::new(Some(writer)),
            client: Mutex::new(client),
        }
    }

    /// Shared handle to the emulator for renderers.
    ///
    /// Readers must take the lock per frame and keep the critical section
    /// short; the reader thread contends on the same lock in `feed`.
    pub fn terminal(&self) -> Arc<Mutex<Terminal>> {
        Arc::clone(&self.terminal)
    }

    /// Process a chunk of child-process output.
    ///
    /// Replies the emulator generated (DSR, DA, DECRQSS and friends) are
    /// flushed to the writer before callbacks run. Client callbacks fire
    /// even when the writer has failed; the write error is still returned.
    pub fn feed(&self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        let (responses, events) = {
            let mut term = self.terminal.lock();
            term.process(bytes);
            (term.take_responses(), term.drain_events())
        };
        let written = if responses.is_empty() {
            Ok(())
        } else {
            self.write_bytes(&responses)
        };
        self.client.lock().on_text_changed();
        self.dispatch_events(events);
        written
    }

    /// Send user input text to the child process.
    pub fn write_text(&self, text: &str) -> Result<()> {
        self.write_bytes(text.as_bytes())
    }

    /// Send a single code point to the child process.
    pub fn write_code_point(&self, code_point: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_bytes(code_point.encode_utf8(&mut buf).as_bytes())
    }

    /// Send pasted text, honoring bracketed paste mode.
    ///
    /// ESC and C1 controls inside a paste would be read back as input
    /// sequences by the application, so they are stripped; newlines are
    /// normalized to CR the way terminals deliver the Enter key.
    pub fn paste(&self, text: &str) -> Result<()> {
        let mut filtered = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\u{1b}' | '\u{80}'..='\u{9f}' => {}
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    filtered.push('\r');
                }
                '\n' => filtered.push('\r'),
                _ => filtered.push(c),
            }
        }
        if self.terminal.lock().bracketed_paste() {
            let mut bytes = Vec::with_capacity(filtered.len() + 12);
            bytes.extend_from_slice(b"\x1b[200~");
            bytes.extend_from_slice(filtered.as_bytes());
            bytes.extend_from_slice(b"\x1b[201~");
            self.write_bytes(&bytes)
        } else {
            self.write_bytes(filtered.as_bytes())
        }
    }

    /// Report a focus transition when the application asked for them
    /// (DECSET 1004); otherwise a no-op.
    pub fn report_focus(&self, focused: bool) -> Result<()> {
        if !self.terminal.lock().focus_tracking() {
            return Ok(());
        }
        self.write_bytes(if focused { b"\x1b[I" } else { b"\x1b[O" })
    }

    /// Report a pointer event using the tracking mode and encoding the
    /// application selected; events the mode does not cover are dropped.
    pub fn send_mouse_event(&self, event: MouseEvent) -> Result<()> {
        let encoded = {
            let term = self.terminal.lock();
            event.encode(term.mouse_mode(), term.mouse_encoding())
        };
        match encoded {
            Some(bytes) => self.write_bytes(&bytes),
            None => Ok(()),
        }
    }

    /// Resize the emulator to match the host viewport.
    pub fn resize(&self, columns: usize, rows: usize) {
        let events = {
            let mut term = self.terminal.lock();
            term.resize(columns, rows);
            term.drain_events()
        };
        self.dispatch_events(events);
    }

    /// Scrollback plus visible text as a flat string.
    pub fn transcript_text(&self) -> String {
        self.terminal.lock().transcript_text()
    }

    /// Current session title.
    pub fn title(&self) -> String {
        self.terminal.lock().title().to_string()
    }

    /// Capture the observable state for persistence or hand-off.
    pub fn snapshot(&self) -> SessionSnapshot {
        let term = self.terminal.lock();
        SessionSnapshot {
            columns: term.columns(),
            rows: term.rows(),
            title: term.title().to_string(),
            cursor_row: term.cursor_row(),
            cursor_column: term.cursor_column(),
            cursor_visible: term.cursor_visible(),
            alternate_screen: term.is_alt_screen_active(),
            screen_text: term.visible_text(),
            transcript_text: term.transcript_text(),
        }
    }

    /// Drop the writer. Later writes fail with
    /// [`SessionError::NotRunning`]; feeding and reading stay available.
    pub fn stop(&self) {
        *self.writer.lock() = None;
    }

    fn write_bytes(&self, bytes: &[u8]) -> Result<()> {
        let mut writer = self.writer.lock();
        let writer = writer.as_mut().ok_or(SessionError::NotRunning)?;
        writer.write_all(bytes)?;
        writer.flush()?;
        Ok(())
    }

    fn dispatch_events(&self, events: Vec<TerminalEvent>) {
        if events.is_empty() {
            return;
        }
        let mut client = self.client.lock();
        for event in events {
            match event {
                TerminalEvent::BellRang => client.on_bell(),
                TerminalEvent::TitleChanged(title) => client.on_title_changed(&title),
                TerminalEvent::SizeChanged(_, _) => client.on_text_changed(),
                TerminalEvent::ClipboardWriteRequested(text) => client.on_clipboard_write(&text),
                TerminalEvent::ColorsChanged => client.on_colors_changed(),
            }
        }
    }
}
