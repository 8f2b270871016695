//! Region clearing (ED/EL families)

use crate::screen::Screen;
use crate::style::{Style, TextAttributes};

impl Screen {
    /// Blank `[start_column, end_column)` of one screen row with `style`.
    /// With `keep_protected`, cells carrying the protection attribute
    /// survive (DECSEL/DECSED).
    pub fn clear_row_range(
        &mut self,
        row: usize,
        start_column: usize,
        end_column: usize,
        style: Style,
        keep_protected: bool,
    ) {
        if row >= self.screen_rows {
            return;
        }
        let end = end_column.min(self.columns);
        if let Some(line) = self.line_mut(row) {
            if !keep_protected {
                line.clear_range(start_column, end, style);
                return;
            }
            for column in start_column..end {
                if !line
                    .style(column)
                    .attributes()
                    .contains(TextAttributes::PROTECTED)
                {
                    line.clear_range(column, column + 1, style);
                }
            }
        }
    }

    /// Blank whole screen rows `[start_row, end_row)`.
    pub fn clear_rows(
        &mut self,
        start_row: usize,
        end_row: usize,
        style: Style,
        keep_protected: bool,
    ) {
        let end = end_row.min(self.screen_rows);
        for row in start_row..end {
            if keep_protected {
                self.clear_row_range(row, 0, self.columns, style, true);
            } else {
                let internal = self.external_to_internal_row(row as isize);
                self.clear_internal_row(internal, style);
            }
        }
    }

    /// Drop all transcript content, leaving the visible screen intact
    /// (ED 3).
    pub fn clear_transcript(&mut self) {
        for offset in self.screen_rows..self.total_rows {
            let internal = (self.screen_first_row + offset) % self.total_rows;
            self.lines[internal] = None;
        }
        self.active_transcript_rows = 0;
    }
}
