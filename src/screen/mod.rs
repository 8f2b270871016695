//! Scrollback screen buffer
//!
//! A ring of rows holding the visible screen plus the transcript (lines
//! scrolled off the top). External row indices are what callers use:
//! `0..screen_rows` addresses the visible screen top to bottom, negative
//! indices address the transcript (`-1` is the line most recently
//! scrolled out). The mapping to ring slots is pure rotation arithmetic,
//! so scrolling the full screen is O(1).
//!
//! Rows materialize lazily: a slot holds `None` until first written, and
//! reads treat `None` as a blank default-styled line.

use crate::row::Row;
use crate::style::Style;

mod edit;
mod erase;
mod export;
mod scroll;

/// Screen plus transcript rows, circularly indexed.
#[derive(Debug, Clone)]
pub struct Screen {
    /// Ring storage, `total_rows` slots.
    pub(crate) lines: Vec<Option<Row>>,
    /// Ring capacity: visible rows plus transcript capacity.
    pub(crate) total_rows: usize,
    /// Visible rows.
    pub(crate) screen_rows: usize,
    pub(crate) columns: usize,
    /// Transcript rows currently filled, `<= total_rows - screen_rows`.
    pub(crate) active_transcript_rows: usize,
    /// Ring slot of external row 0.
    pub(crate) screen_first_row: usize,
}

impl Screen {
    /// Create a screen of `screen_rows` visible rows inside a ring of
    /// `total_rows` slots; the difference is the transcript capacity.
    pub fn new(columns: usize, screen_rows: usize, total_rows: usize) -> Self {
        let total_rows = total_rows.max(screen_rows);
        Self {
            lines: vec![None; total_rows],
            total_rows,
            screen_rows,
            columns,
            active_transcript_rows: 0,
            screen_first_row: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn screen_rows(&self) -> usize {
        self.screen_rows
    }

    pub fn total_rows(&self) -> usize {
        self.total_rows
    }

    /// Transcript rows currently retained.
    pub fn active_transcript_rows(&self) -> usize {
        self.active_transcript_rows
    }

    /// Map an external row (negative = transcript) to its ring slot.
    pub fn external_to_internal_row(&self, external_row: isize) -> usize {
        (self.screen_first_row as isize + external_row).rem_euclid(self.total_rows as isize)
            as usize
    }

    fn in_range(&self, external_row: isize) -> bool {
        external_row >= -(self.active_transcript_rows as isize)
            && external_row < self.screen_rows as isize
    }

    /// Materialize the row in a ring slot, blank and default-styled.
    pub(crate) fn allocate_full_line_if_necessary(&mut self, internal_row: usize) -> &mut Row {
        let columns = self.columns;
        let slot = &mut self.lines[internal_row];
        let row = slot.get_or_insert_with(|| Row::new(columns, Style::default()));
        row.ensure_capacity(columns);
        row
    }

    /// Read access to a row; `None` for unmaterialized or out-of-range
    /// rows (both render as blank).
    pub fn line(&self, external_row: isize) -> Option<&Row> {
        if !self.in_range(external_row) {
            return None;
        }
        self.lines[self.external_to_internal_row(external_row)].as_ref()
    }

    /// Mutable access to a visible screen row, materializing it.
    pub(crate) fn line_mut(&mut self, external_row: usize) -> Option<&mut Row> {
        if external_row >= self.screen_rows {
            return None;
        }
        let internal = self.external_to_internal_row(external_row as isize);
        Some(self.allocate_full_line_if_necessary(internal))
    }

    /// Write one code point at a screen position. Out-of-range writes
    /// are dropped.
    pub fn set_char(&mut self, row: usize, column: usize, code_point: char, style: Style) {
        if column >= self.columns {
            return;
        }
        if let Some(line) = self.line_mut(row) {
            line.set_char(column, code_point, style);
        }
    }

    /// The primary code point at a position; blank rows read as spaces.
    pub fn char_at(&self, row: isize, column: usize) -> char {
        match self.line(row) {
            Some(line) => line.char_at(column),
            None => ' ',
        }
    }

    /// The style at a position; blank rows read as default.
    pub fn style_at(&self, row: isize, column: usize) -> Style {
        match self.line(row) {
            Some(line) => line.style(column),
            None => Style::default(),
        }
    }

    /// Patch styles over a column range of one screen row.
    pub fn set_style_range(
        &mut self,
        row: usize,
        start_column: usize,
        end_column: usize,
        style: Style,
    ) {
        if let Some(line) = self.line_mut(row) {
            line.set_style_range(start_column, end_column, style);
        }
    }

    /// Flag a screen row as continuing onto the next (autowrap).
    pub fn set_line_wrapped(&mut self, row: usize, wrapped: bool) {
        if let Some(line) = self.line_mut(row) {
            line.set_wrapped(wrapped);
        }
    }

    pub fn is_line_wrapped(&self, row: isize) -> bool {
        self.line(row).is_some_and(Row::is_wrapped)
    }

    /// Visible text of one row, placeholders skipped.
    pub fn row_text(&self, row: isize) -> String {
        match self.line(row) {
            Some(line) => line.text(),
            None => " ".repeat(self.columns),
        }
    }
}
