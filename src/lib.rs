//! A terminal emulation engine: feed it the raw byte stream of a child
//! process and read back a styled screen model.
//!
//! The emulator implements the VT100/xterm sequence repertoire that
//! real programs exercise:
//!
//! - Cursor addressing, tab stops, scroll regions, insert/delete edits
//! - SGR styling: 16/256/true color, packed per-cell into one word
//! - Scrollback with O(1) scrolling and width-change reflow
//! - Alternate screen, saved cursors, DEC private modes, XTSAVE/XTRESTORE
//! - Wide characters, combining marks, and DEC line drawing
//! - Title, bell, clipboard (OSC 52), and palette change notifications
//! - Device reports (DSR/DA/DECRQM/DECRQSS/XTGETTCAP) into a reply buffer
//!
//! [`Terminal`] is the core state machine; [`session::Session`] wraps it
//! with the child-process writer and client callbacks a host needs.
//!
//! ```
//! use vtgrid::Terminal;
//!
//! let mut term = Terminal::new(80, 24);
//! term.process(b"\x1b[1;31mhello\x1b[0m world");
//! assert_eq!(term.screen().row_text(0).trim_end(), "hello world");
//! ```

pub mod color;
pub mod cursor;
pub mod debug;
pub mod mouse;
pub mod row;
pub mod screen;
pub mod session;
pub mod style;
pub mod terminal;
pub mod wcwidth;

pub use color::{Color, ColorScheme, Palette};
pub use cursor::CursorShape;
pub use mouse::{MouseButton, MouseEncoding, MouseEvent, MouseMode};
pub use row::Row;
pub use screen::Screen;
pub use session::{Session, SessionClient, SessionError, SessionSnapshot};
pub use style::{Style, TextAttributes};
pub use terminal::{Terminal, TerminalEvent};
