//! Line and column insertion/deletion within the scroll region

use crate::screen::Screen;
use crate::style::Style;

impl Screen {
    /// Insert `count` blank lines at `row`, shifting rows down within
    /// the region; lines pushed past `bottom` (exclusive) are lost.
    pub fn insert_lines(&mut self, row: usize, bottom: usize, count: usize, style: Style) {
        if row >= bottom || bottom > self.screen_rows || count == 0 {
            return;
        }
        let count = count.min(bottom - row);
        for dest in ((row + count)..bottom).rev() {
            let src = self.external_to_internal_row((dest - count) as isize);
            let dst = self.external_to_internal_row(dest as isize);
            self.lines[dst] = self.lines[src].take();
        }
        for cleared in row..row + count {
            let internal = self.external_to_internal_row(cleared as isize);
            self.clear_internal_row(internal, style);
        }
    }

    /// Delete `count` lines at `row`, shifting rows up within the region
    /// and blanking the vacated lines above `bottom` (exclusive).
    pub fn delete_lines(&mut self, row: usize, bottom: usize, count: usize, style: Style) {
        if row >= bottom || bottom > self.screen_rows || count == 0 {
            return;
        }
        let count = count.min(bottom - row);
        for dest in row..(bottom - count) {
            let src = self.external_to_internal_row((dest + count) as isize);
            let dst = self.external_to_internal_row(dest as isize);
            self.lines[dst] = self.lines[src].take();
        }
        for cleared in (bottom - count)..bottom {
            let internal = self.external_to_internal_row(cleared as isize);
            self.clear_internal_row(internal, style);
        }
    }

    /// Insert blank columns at `column` across rows `[top, bottom)`,
    /// shifting content right (DECIC).
    pub fn insert_columns(
        &mut self,
        column: usize,
        count: usize,
        top: usize,
        bottom: usize,
        style: Style,
    ) {
        if column >= self.columns || count == 0 {
            return;
        }
        for row in top..bottom.min(self.screen_rows) {
            if let Some(line) = self.line_mut(row) {
                line.insert_blanks(column, count, style);
            }
        }
    }

    /// Delete columns at `column` across rows `[top, bottom)`, shifting
    /// content left (DECDC).
    pub fn delete_columns(
        &mut self,
        column: usize,
        count: usize,
        top: usize,
        bottom: usize,
        style: Style,
    ) {
        if column >= self.columns || count == 0 {
            return;
        }
        for row in top..bottom.min(self.screen_rows) {
            if let Some(line) = self.line_mut(row) {
                line.delete_chars(column, count, style);
            }
        }
    }

    /// Insert blank cells at a position, shifting the row tail right
    /// (ICH).
    pub fn insert_chars(&mut self, row: usize, column: usize, count: usize, style: Style) {
        if let Some(line) = self.line_mut(row) {
            line.insert_blanks(column, count, style);
        }
    }

    /// Delete cells at a position, shifting the row tail left (DCH).
    pub fn delete_chars(&mut self, row: usize, column: usize, count: usize, style: Style) {
        if let Some(line) = self.line_mut(row) {
            line.delete_chars(column, count, style);
        }
    }
}
