//! Cursor state and the saved-cursor slot

use crate::style::Style;

/// Cursor shape selected via DECSCUSR (CSI SP q).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    #[default]
    Block,
    Underline,
    Bar,
}

/// The on-screen cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
    pub visible: bool,
    pub shape: CursorShape,
    pub blinking: bool,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            visible: true,
            shape: CursorShape::Block,
            blinking: true,
        }
    }
}

/// Everything DECSC captures and DECRC restores: position, the pending
/// write style, charset designations, and the origin/autowrap modes.
/// Each screen (main and alternate) keeps its own slot.
#[derive(Debug, Clone, Copy)]
pub struct SavedCursor {
    pub row: usize,
    pub column: usize,
    pub style: Style,
    pub g0_graphics: bool,
    pub g1_graphics: bool,
    pub active_charset_is_g1: bool,
    pub origin_mode: bool,
    pub autowrap: bool,
}

impl Default for SavedCursor {
    fn default() -> Self {
        Self {
            row: 0,
            column: 0,
            style: Style::default(),
            g0_graphics: false,
            g1_graphics: false,
            active_charset_is_g1: false,
            origin_mode: false,
            autowrap: true,
        }
    }
}
