//! Terminal emulator core
//!
//! This module provides the main `Terminal` struct: the escape-sequence
//! state machine that turns a raw byte stream from a child process into
//! cursor motion, mode changes, and writes against the screen buffer.
//! Byte-level tokenization (UTF-8 decoding, parameter accumulation, string
//! termination) is `vte`'s `Parser`; every dispatch decision lives here.
//!
//! Layout:
//! - `perform`: the `vte::Perform` implementation delegating into handlers
//! - `sequences`: CSI/OSC/ESC/DCS handlers, split per command family
//! - `charset`: DEC special graphics translation
//! - `event`: notifications drained by the owning session

mod charset;
mod event;
mod perform;
mod sequences;

#[cfg(test)]
mod tests;

pub use event::TerminalEvent;

use std::collections::HashMap;

use crate::color::{Color, ColorScheme, Palette};
use crate::cursor::{Cursor, CursorShape, SavedCursor};
use crate::debug;
use crate::mouse::{MouseEncoding, MouseMode};
use crate::screen::Screen;
use crate::style::{Style, TextAttributes};
use crate::wcwidth;

/// Scrollback capacity used by [`Terminal::new`].
pub const DEFAULT_TRANSCRIPT_ROWS: usize = 2000;

/// Upper bound on configurable scrollback capacity.
pub const MAX_TRANSCRIPT_ROWS: usize = 50_000;

/// The terminal emulator: screen buffers, cursor/mode state, and the
/// dispatch side of the VT500 parser.
///
/// One instance models one terminal. Feed it bytes with
/// [`process`](Terminal::process); read it back through the screen, cursor,
/// and palette accessors; drain queued notifications with
/// [`drain_events`](Terminal::drain_events) and query replies with
/// [`take_responses`](Terminal::take_responses).
pub struct Terminal {
    /// Primary screen, with scrollback.
    main_screen: Screen,
    /// Alternate screen (DECSET 47/1047/1049), no scrollback.
    alt_screen: Screen,
    pub(crate) alt_screen_active: bool,

    pub(crate) columns: usize,
    pub(crate) rows: usize,
    /// Configured scrollback capacity for the main screen.
    transcript_rows: usize,

    pub(crate) cursor: Cursor,
    saved_cursor_main: SavedCursor,
    saved_cursor_alt: SavedCursor,

    // Pending style applied to subsequently written cells
    pub(crate) fg: Color,
    pub(crate) bg: Color,
    pub(crate) attributes: TextAttributes,

    pub(crate) palette: Palette,
    /// Base theme restored by OSC 104/110/111/112 and RIS.
    default_palette: Palette,

    /// Scroll region: first row inside, one past the last row inside.
    pub(crate) scroll_region_top: usize,
    pub(crate) scroll_region_bottom: usize,

    pub(crate) tab_stops: Vec<bool>,

    // Charset designations (SCS); only ASCII vs DEC special graphics
    pub(crate) g0_graphics: bool,
    pub(crate) g1_graphics: bool,
    pub(crate) active_charset_is_g1: bool,

    // Mode flags
    pub(crate) autowrap: bool,
    pub(crate) origin_mode: bool,
    pub(crate) insert_mode: bool,
    pub(crate) reverse_video: bool,
    pub(crate) application_cursor_keys: bool,
    pub(crate) application_keypad: bool,
    /// LNM: LF implies CR.
    pub(crate) auto_new_line: bool,
    pub(crate) bracketed_paste: bool,
    pub(crate) focus_tracking: bool,
    /// DECSET 40: permit DECCOLM column-mode side effects.
    pub(crate) allow_column_switch: bool,
    /// DECSET 45: backspace at column 0 wraps to the previous line end.
    pub(crate) reverse_wraparound: bool,
    /// DECSET 4 (DECSCLM), stored only.
    pub(crate) smooth_scroll: bool,
    pub(crate) mouse_mode: MouseMode,
    pub(crate) mouse_encoding: MouseEncoding,

    /// XTSAVE slots for DEC private modes (CSI ? Pm s / r).
    saved_private_modes: HashMap<u16, bool>,

    /// Deferred autowrap: the last print filled the final column.
    pub(crate) pending_wrap: bool,
    /// Source for REP (CSI b).
    pub(crate) last_emitted_code_point: Option<char>,

    pub(crate) title: String,
    pub(crate) title_stack: Vec<String>,

    /// Content set by OSC 52; the only thing an OSC 52 query reads back.
    pub(crate) clipboard_content: Option<String>,

    pub(crate) terminal_events: Vec<TerminalEvent>,
    response_buffer: Vec<u8>,

    parser: vte::Parser,

    // In-flight DCS state between hook and unhook
    pub(crate) dcs_active: bool,
    pub(crate) dcs_action: Option<char>,
    pub(crate) dcs_intermediate: Option<u8>,
    pub(crate) dcs_buffer: Vec<u8>,
}

impl Terminal {
    /// Create a terminal with the default scrollback capacity.
    pub fn new(columns: usize, rows: usize) -> Self {
        Self::with_scrollback(columns, rows, DEFAULT_TRANSCRIPT_ROWS)
    }

    /// Create a terminal with an explicit scrollback capacity in rows.
    /// Capacity is clamped to [`MAX_TRANSCRIPT_ROWS`].
    pub fn with_scrollback(columns: usize, rows: usize, transcript_rows: usize) -> Self {
        let columns = columns.max(1);
        let rows = rows.max(1);
        let transcript_rows = transcript_rows.min(MAX_TRANSCRIPT_ROWS);
        let palette = Palette::new();

        Terminal {
            main_screen: Screen::new(columns, rows, rows + transcript_rows),
            alt_screen: Screen::new(columns, rows, rows),
            alt_screen_active: false,
            columns,
            rows,
            transcript_rows,
            cursor: Cursor::default(),
            saved_cursor_main: SavedCursor::default(),
            saved_cursor_alt: SavedCursor::default(),
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            attributes: TextAttributes::empty(),
            palette: palette.clone(),
            default_palette: palette,
            scroll_region_top: 0,
            scroll_region_bottom: rows,
            tab_stops: Self::default_tab_stops(columns),
            g0_graphics: false,
            g1_graphics: false,
            active_charset_is_g1: false,
            autowrap: true,
            origin_mode: false,
            insert_mode: false,
            reverse_video: false,
            application_cursor_keys: false,
            application_keypad: false,
            auto_new_line: false,
            bracketed_paste: false,
            focus_tracking: false,
            allow_column_switch: false,
            reverse_wraparound: false,
            smooth_scroll: false,
            mouse_mode: MouseMode::Off,
            mouse_encoding: MouseEncoding::Default,
            saved_private_modes: HashMap::new(),
            pending_wrap: false,
            last_emitted_code_point: None,
            title: String::new(),
            title_stack: Vec::new(),
            clipboard_content: None,
            terminal_events: Vec::new(),
            response_buffer: Vec::new(),
            parser: vte::Parser::new(),
            dcs_active: false,
            dcs_action: None,
            dcs_intermediate: None,
            dcs_buffer: Vec::new(),
        }
    }

    fn default_tab_stops(columns: usize) -> Vec<bool> {
        (0..columns).map(|column| column % 8 == 0 && column != 0).collect()
    }

    /// Process a chunk of output from the child process.
    ///
    /// Parser state persists across calls, so escape sequences and UTF-8
    /// sequences may be split at any byte boundary.
    pub fn process(&mut self, data: &[u8]) {
        debug::log_vt_input(data);

        // Take the parser out so its advance() can borrow self as the
        // Perform sink.
        let mut parser = std::mem::replace(&mut self.parser, vte::Parser::new());
        parser.advance(self, data);
        self.parser = parser;
    }

    // ---- Active screen ---------------------------------------------------

    /// The screen the emulator is currently drawing to.
    pub fn screen(&self) -> &Screen {
        if self.alt_screen_active {
            &self.alt_screen
        } else {
            &self.main_screen
        }
    }

    pub(crate) fn screen_mut(&mut self) -> &mut Screen {
        if self.alt_screen_active {
            &mut self.alt_screen
        } else {
            &mut self.main_screen
        }
    }

    /// The primary screen regardless of which one is active.
    pub fn main_screen(&self) -> &Screen {
        &self.main_screen
    }

    /// The style applied to the next written cell.
    pub(crate) fn style(&self) -> Style {
        Style::encode(self.fg, self.bg, self.attributes)
    }

    // ---- Print path ------------------------------------------------------

    fn translate_charset(&self, c: char) -> char {
        let graphics = if self.active_charset_is_g1 {
            self.g1_graphics
        } else {
            self.g0_graphics
        };
        if graphics {
            charset::graphics_char(c)
        } else {
            c
        }
    }

    /// Write one printable character at the cursor, handling charset
    /// translation, insert mode, deferred autowrap, and wide characters.
    pub(crate) fn write_char(&mut self, input: char) {
        let code_point = self.translate_charset(input);
        let width = wcwidth::width(code_point);
        let style = self.style();

        if wcwidth::is_zero_width(code_point) {
            // Combining mark: attach to the preceding column. With a wrap
            // pending the base character sits under the cursor itself.
            let column = if self.pending_wrap || self.cursor.column == 0 {
                self.cursor.column
            } else {
                self.cursor.column - 1
            };
            let row = self.cursor.row;
            self.screen_mut().set_char(row, column, code_point, style);
            return;
        }

        self.last_emitted_code_point = Some(code_point);

        let wrap_needed =
            self.autowrap && (self.pending_wrap || self.cursor.column + width > self.columns);
        if wrap_needed {
            let row = self.cursor.row;
            self.screen_mut().set_line_wrapped(row, true);
            self.cursor.column = 0;
            self.pending_wrap = false;
            if self.cursor.row + 1 == self.scroll_region_bottom {
                self.scroll_region_up(1);
            } else if self.cursor.row + 1 < self.rows {
                self.cursor.row += 1;
            }
        }

        if self.insert_mode {
            let (row, column) = (self.cursor.row, self.cursor.column);
            self.screen_mut().insert_chars(row, column, width, style);
        }

        let (row, column) = (self.cursor.row, self.cursor.column);
        self.screen_mut().set_char(row, column, code_point, style);

        self.pending_wrap = self.autowrap && column + width == self.columns;
        self.cursor.column = (column + width).min(self.columns - 1);
    }

    // ---- C0 controls -----------------------------------------------------

    pub(crate) fn bell(&mut self) {
        self.terminal_events.push(TerminalEvent::BellRang);
    }

    pub(crate) fn backspace(&mut self) {
        if self.reverse_wraparound
            && self.autowrap
            && self.cursor.column == 0
            && self.cursor.row > self.scroll_region_top
        {
            self.cursor.row -= 1;
            self.cursor.column = self.columns - 1;
        } else {
            self.cursor.column = self.cursor.column.saturating_sub(1);
        }
        self.pending_wrap = false;
    }

    pub(crate) fn horizontal_tab(&mut self) {
        let mut column = self.cursor.column + 1;
        while column < self.columns && !self.tab_stops[column] {
            column += 1;
        }
        self.cursor.column = column.min(self.columns - 1);
        self.pending_wrap = false;
    }

    pub(crate) fn carriage_return(&mut self) {
        self.cursor.column = 0;
        self.pending_wrap = false;
    }

    /// LF/VT/FF: index down, honoring LNM.
    pub(crate) fn do_line_feed(&mut self) {
        self.index();
        if self.auto_new_line {
            self.cursor.column = 0;
        }
    }

    // ---- Index family ----------------------------------------------------

    /// IND: move down one row, scrolling at the bottom margin.
    pub(crate) fn index(&mut self) {
        self.pending_wrap = false;
        let below = self.cursor.row + 1;
        if below == self.scroll_region_bottom {
            self.scroll_region_up(1);
        } else if below < self.rows {
            self.cursor.row = below;
        }
    }

    /// RI: move up one row, reverse-scrolling at the top margin.
    pub(crate) fn reverse_index(&mut self) {
        self.pending_wrap = false;
        if self.cursor.row == self.scroll_region_top {
            self.scroll_region_down(1);
        } else if self.cursor.row > 0 {
            self.cursor.row -= 1;
        }
    }

    /// NEL: carriage return plus index.
    pub(crate) fn next_line(&mut self) {
        self.cursor.column = 0;
        self.index();
    }

    /// Scroll region content up by `count` (new blank rows at the bottom).
    /// With the top margin at row 0, scrolled-out rows feed the transcript.
    pub(crate) fn scroll_region_up(&mut self, count: usize) {
        let (top, bottom) = (self.scroll_region_top, self.scroll_region_bottom);
        let style = self.style();
        for _ in 0..count.min(self.rows) {
            self.screen_mut().scroll_down_one_line(top, bottom, style);
        }
    }

    /// Scroll region content down by `count` (new blank rows at the top).
    pub(crate) fn scroll_region_down(&mut self, count: usize) {
        let (top, bottom) = (self.scroll_region_top, self.scroll_region_bottom);
        let style = self.style();
        self.screen_mut().insert_lines(top, bottom, count, style);
    }

    // ---- Cursor motion ---------------------------------------------------

    /// Absolute positioning honoring origin mode (CUP/HVP; 0-based args).
    pub(crate) fn set_cursor_position(&mut self, column: usize, row: usize) {
        let (top, bottom) = if self.origin_mode {
            (self.scroll_region_top, self.scroll_region_bottom)
        } else {
            (0, self.rows)
        };
        self.cursor.row = (top + row).min(bottom - 1);
        self.cursor.column = column.min(self.columns - 1);
        self.pending_wrap = false;
    }

    /// Relative up, stopping at the top margin when starting below it.
    pub(crate) fn cursor_up(&mut self, count: usize) {
        let limit = if self.cursor.row >= self.scroll_region_top {
            self.scroll_region_top
        } else {
            0
        };
        self.cursor.row = self.cursor.row.saturating_sub(count).max(limit);
        self.pending_wrap = false;
    }

    /// Relative down, stopping at the bottom margin when starting above it.
    pub(crate) fn cursor_down(&mut self, count: usize) {
        let limit = if self.cursor.row < self.scroll_region_bottom {
            self.scroll_region_bottom - 1
        } else {
            self.rows - 1
        };
        self.cursor.row = (self.cursor.row + count).min(limit);
        self.pending_wrap = false;
    }

    pub(crate) fn cursor_forward(&mut self, count: usize) {
        self.cursor.column = (self.cursor.column + count).min(self.columns - 1);
        self.pending_wrap = false;
    }

    pub(crate) fn cursor_back(&mut self, count: usize) {
        self.cursor.column = self.cursor.column.saturating_sub(count);
        self.pending_wrap = false;
    }

    // ---- Saved cursor (DECSC/DECRC) --------------------------------------

    pub(crate) fn save_cursor(&mut self) {
        let slot = SavedCursor {
            row: self.cursor.row,
            column: self.cursor.column,
            style: self.style(),
            g0_graphics: self.g0_graphics,
            g1_graphics: self.g1_graphics,
            active_charset_is_g1: self.active_charset_is_g1,
            origin_mode: self.origin_mode,
            autowrap: self.autowrap,
        };
        if self.alt_screen_active {
            self.saved_cursor_alt = slot;
        } else {
            self.saved_cursor_main = slot;
        }
    }

    pub(crate) fn restore_cursor(&mut self) {
        let slot = if self.alt_screen_active {
            self.saved_cursor_alt
        } else {
            self.saved_cursor_main
        };
        self.cursor.row = slot.row.min(self.rows - 1);
        self.cursor.column = slot.column.min(self.columns - 1);
        self.fg = slot.style.foreground();
        self.bg = slot.style.background();
        self.attributes = slot.style.attributes();
        self.g0_graphics = slot.g0_graphics;
        self.g1_graphics = slot.g1_graphics;
        self.active_charset_is_g1 = slot.active_charset_is_g1;
        self.origin_mode = slot.origin_mode;
        self.autowrap = slot.autowrap;
        self.pending_wrap = false;
    }

    // ---- Screen switching ------------------------------------------------

    pub(crate) fn switch_to_alt_screen(&mut self) {
        if !self.alt_screen_active {
            debug::log_screen_switch(true, "enter alternate screen");
            self.alt_screen_active = true;
            self.pending_wrap = false;
        }
    }

    pub(crate) fn switch_to_main_screen(&mut self) {
        if self.alt_screen_active {
            debug::log_screen_switch(false, "return to main screen");
            self.alt_screen_active = false;
            self.pending_wrap = false;
        }
    }

    pub(crate) fn clear_alt_screen(&mut self) {
        let style = self.style();
        let rows = self.rows;
        self.alt_screen.clear_rows(0, rows, style, false);
    }

    // ---- Margins and region setup ----------------------------------------

    /// DECSTBM with 1-based arguments (0 selects the default edge).
    pub(crate) fn set_scroll_region(&mut self, top: usize, bottom: usize) {
        let top = top.max(1) - 1;
        let bottom = if bottom == 0 { self.rows } else { bottom.min(self.rows) };
        if bottom < top + 2 {
            debug::log(
                debug::DebugLevel::Warn,
                "CSI",
                &format!("ignoring degenerate scroll region {}..{}", top, bottom),
            );
            return;
        }
        self.scroll_region_top = top;
        self.scroll_region_bottom = bottom;
        self.set_cursor_position(0, 0);
    }

    /// DECCOLM side effects: clear, home, reset margins. The column count
    /// itself never changes; hosts resize through [`Terminal::resize`].
    pub(crate) fn column_mode_reset(&mut self) {
        if !self.allow_column_switch {
            return;
        }
        self.scroll_region_top = 0;
        self.scroll_region_bottom = self.rows;
        let style = self.style();
        let rows = self.rows;
        self.screen_mut().clear_rows(0, rows, style, false);
        self.origin_mode = false;
        self.set_cursor_position(0, 0);
    }

    // ---- Private mode bookkeeping ----------------------------------------

    /// Current value of a readable DEC private mode, for XTSAVE and DECRQM.
    pub(crate) fn private_mode_value(&self, param: u16) -> Option<bool> {
        Some(match param {
            1 => self.application_cursor_keys,
            4 => self.smooth_scroll,
            5 => self.reverse_video,
            6 => self.origin_mode,
            7 => self.autowrap,
            9 => self.mouse_mode == MouseMode::X10,
            12 => self.cursor.blinking,
            25 => self.cursor.visible,
            40 => self.allow_column_switch,
            45 => self.reverse_wraparound,
            47 | 1047 | 1049 => self.alt_screen_active,
            66 => self.application_keypad,
            1000 => self.mouse_mode == MouseMode::Normal,
            1002 => self.mouse_mode == MouseMode::ButtonEvent,
            1003 => self.mouse_mode == MouseMode::AnyEvent,
            1004 => self.focus_tracking,
            1006 => self.mouse_encoding == MouseEncoding::Sgr,
            2004 => self.bracketed_paste,
            _ => return None,
        })
    }

    pub(crate) fn save_private_mode(&mut self, param: u16) {
        if let Some(value) = self.private_mode_value(param) {
            self.saved_private_modes.insert(param, value);
        }
    }

    pub(crate) fn restore_private_mode(&mut self, param: u16) {
        if let Some(value) = self.saved_private_modes.get(&param).copied() {
            if value {
                self.handle_decset(param);
            } else {
                self.handle_decrst(param);
            }
        }
    }

    // ---- Resets ----------------------------------------------------------

    /// DECSTR: reset modes, margins, charsets, pending style, and the saved
    /// cursors. Screen content, tab stops, palette, and title survive.
    pub(crate) fn reset_emulator_state(&mut self) {
        self.fg = Color::DEFAULT_FG;
        self.bg = Color::DEFAULT_BG;
        self.attributes = TextAttributes::empty();
        self.scroll_region_top = 0;
        self.scroll_region_bottom = self.rows;
        self.origin_mode = false;
        self.insert_mode = false;
        self.autowrap = true;
        self.reverse_video = false;
        self.application_cursor_keys = false;
        self.application_keypad = false;
        self.auto_new_line = false;
        self.bracketed_paste = false;
        self.focus_tracking = false;
        self.allow_column_switch = false;
        self.reverse_wraparound = false;
        self.smooth_scroll = false;
        self.mouse_mode = MouseMode::Off;
        self.mouse_encoding = MouseEncoding::Default;
        self.g0_graphics = false;
        self.g1_graphics = false;
        self.active_charset_is_g1 = false;
        self.cursor.visible = true;
        self.cursor.shape = CursorShape::Block;
        self.cursor.blinking = true;
        self.pending_wrap = false;
        self.saved_cursor_main = SavedCursor::default();
        self.saved_cursor_alt = SavedCursor::default();
        self.saved_private_modes.clear();
    }

    /// RIS: full reset. Clears both screens and the transcript, restores
    /// the base palette, and rebuilds the default tab stops.
    pub fn reset(&mut self) {
        self.main_screen = Screen::new(self.columns, self.rows, self.rows + self.transcript_rows);
        self.alt_screen = Screen::new(self.columns, self.rows, self.rows);
        self.alt_screen_active = false;
        self.cursor = Cursor::default();
        self.reset_emulator_state();
        self.tab_stops = Self::default_tab_stops(self.columns);
        self.palette = self.default_palette.clone();
        self.title_stack.clear();
        self.clipboard_content = None;
        self.last_emitted_code_point = None;
    }

    // ---- Resize ----------------------------------------------------------

    /// Resize both screens. The main screen reflows (rewrapping logical
    /// lines and preserving scrollback up to capacity), the alternate
    /// screen crops or pads. Degenerate dimensions are ignored.
    pub fn resize(&mut self, columns: usize, rows: usize) {
        if columns == 0 || rows == 0 {
            debug::log(
                debug::DebugLevel::Warn,
                "RESIZE",
                &format!("ignoring degenerate resize to {}x{}", columns, rows),
            );
            return;
        }
        if columns == self.columns && rows == self.rows {
            return;
        }

        let mut cursor = (self.cursor.row, self.cursor.column);
        let mut saved_main = (self.saved_cursor_main.row, self.saved_cursor_main.column);
        let mut saved_alt = (self.saved_cursor_alt.row, self.saved_cursor_alt.column);

        let main_total = rows + self.transcript_rows;
        if self.alt_screen_active {
            self.main_screen.resize(columns, rows, main_total, &mut saved_main, true);
            self.alt_screen.resize(columns, rows, rows, &mut cursor, false);
        } else {
            self.main_screen.resize(columns, rows, main_total, &mut cursor, true);
            self.alt_screen.resize(columns, rows, rows, &mut saved_alt, false);
        }

        self.columns = columns;
        self.rows = rows;
        self.cursor.row = cursor.0.min(rows - 1);
        self.cursor.column = cursor.1.min(columns - 1);
        self.saved_cursor_main.row = saved_main.0.min(rows - 1);
        self.saved_cursor_main.column = saved_main.1.min(columns - 1);
        self.saved_cursor_alt.row = saved_alt.0.min(rows - 1);
        self.saved_cursor_alt.column = saved_alt.1.min(columns - 1);
        self.scroll_region_top = 0;
        self.scroll_region_bottom = rows;
        self.tab_stops = Self::default_tab_stops(columns);
        self.pending_wrap = false;
        self.terminal_events
            .push(TerminalEvent::SizeChanged(columns, rows));
    }

    // ---- Host configuration ----------------------------------------------

    /// Apply a color scheme as the new base theme.
    pub fn apply_color_scheme(&mut self, scheme: &ColorScheme) {
        self.palette.apply_scheme(scheme);
        self.default_palette = self.palette.clone();
        self.terminal_events.push(TerminalEvent::ColorsChanged);
    }

    // ---- Events and replies ----------------------------------------------

    /// Take every queued notification, oldest first.
    pub fn drain_events(&mut self) -> Vec<TerminalEvent> {
        std::mem::take(&mut self.terminal_events)
    }

    /// Take buffered reply bytes destined for the child process.
    pub fn take_responses(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.response_buffer)
    }

    pub(crate) fn push_response(&mut self, bytes: &[u8]) {
        self.response_buffer.extend_from_slice(bytes);
    }

    // ---- Read-only accessors ---------------------------------------------

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cursor_row(&self) -> usize {
        self.cursor.row
    }

    pub fn cursor_column(&self) -> usize {
        self.cursor.column
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor.visible
    }

    pub fn cursor_shape(&self) -> CursorShape {
        self.cursor.shape
    }

    pub fn cursor_blinking(&self) -> bool {
        self.cursor.blinking
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_alt_screen_active(&self) -> bool {
        self.alt_screen_active
    }

    pub fn is_reverse_video(&self) -> bool {
        self.reverse_video
    }

    pub fn mouse_mode(&self) -> MouseMode {
        self.mouse_mode
    }

    pub fn mouse_encoding(&self) -> MouseEncoding {
        self.mouse_encoding
    }

    pub fn bracketed_paste(&self) -> bool {
        self.bracketed_paste
    }

    pub fn focus_tracking(&self) -> bool {
        self.focus_tracking
    }

    pub fn application_cursor_keys(&self) -> bool {
        self.application_cursor_keys
    }

    pub fn application_keypad(&self) -> bool {
        self.application_keypad
    }

    // ---- Text export -----------------------------------------------------

    /// Scrollback plus visible screen as one wrap-aware string.
    pub fn transcript_text(&self) -> String {
        self.screen().transcript_text()
    }

    /// The visible screen as one wrap-aware string.
    pub fn visible_text(&self) -> String {
        self.screen().visible_text()
    }

    /// Text between two selection endpoints, in either order. Negative rows
    /// address the transcript.
    pub fn selected_text(
        &self,
        column1: usize,
        row1: isize,
        column2: usize,
        row2: isize,
    ) -> String {
        self.screen().selected_text(column1, row1, column2, row2)
    }
}
