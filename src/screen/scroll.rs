//! Scrolling and reflow for the screen buffer

use crate::debug::{self, DebugLevel};
use crate::row::{Cell, Row, WIDE_PLACEHOLDER};
use crate::screen::Screen;
use crate::style::Style;

impl Screen {
    /// Scroll the region `[top_margin, bottom_margin)` up by one line.
    ///
    /// With the top margin at row 0 this is the transcript-feeding path:
    /// the ring start index rotates forward so the old top row becomes
    /// external row -1 without copying row contents, fixed rows below the
    /// bottom margin are shifted one slot to keep their on-screen
    /// position, and the revealed line above the bottom margin is blanked
    /// with `style`. At transcript capacity the rotation recycles the
    /// oldest transcript row as the new blanked line (FIFO eviction).
    ///
    /// With an interior top margin the region is moved in place and the
    /// transcript is untouched, matching xterm.
    pub fn scroll_down_one_line(&mut self, top_margin: usize, bottom_margin: usize, style: Style) {
        if top_margin + 1 > bottom_margin || bottom_margin > self.screen_rows {
            debug::log(
                DebugLevel::Warn,
                "screen",
                &format!(
                    "invalid scroll region: top={} bottom={} rows={}",
                    top_margin, bottom_margin, self.screen_rows
                ),
            );
            return;
        }
        debug::log_scroll("scroll_down", top_margin, bottom_margin, 1);

        if top_margin > 0 {
            self.delete_lines(top_margin, bottom_margin, 1, style);
            return;
        }

        // Fixed rows below the bottom margin keep their external position
        // across the rotation.
        let below = self.external_to_internal_row(bottom_margin as isize);
        self.block_copy_lines_down(below, self.screen_rows - bottom_margin);

        self.screen_first_row = (self.screen_first_row + 1) % self.total_rows;
        if self.active_transcript_rows < self.total_rows - self.screen_rows {
            self.active_transcript_rows += 1;
        }

        let blank = self.external_to_internal_row(bottom_margin as isize - 1);
        self.clear_internal_row(blank, style);
    }

    /// Rotate the ring window `[internal, internal + count]` one slot
    /// forward: each of `count` rows moves down one, and the displaced
    /// row at the far end lands at `internal`. Moves `Option<Row>` slots,
    /// never row contents.
    fn block_copy_lines_down(&mut self, internal: usize, count: usize) {
        if count == 0 {
            return;
        }
        let total = self.total_rows;
        let displaced = self.lines[(internal + count) % total].take();
        for i in (0..count).rev() {
            self.lines[(internal + i + 1) % total] = self.lines[(internal + i) % total].take();
        }
        self.lines[internal % total] = displaced;
    }

    pub(crate) fn clear_internal_row(&mut self, internal_row: usize, style: Style) {
        match &mut self.lines[internal_row] {
            Some(row) => row.clear(style),
            slot => {
                if style != Style::default() {
                    *slot = Some(Row::new(self.columns, style));
                }
            }
        }
    }

    /// Resize to new dimensions, remapping `cursor` (row, column).
    ///
    /// With `reflow` set, logical lines (runs of wrap-flagged rows across
    /// transcript and screen) are re-broken at the new width; content
    /// beyond the visible rows moves into the transcript and history past
    /// ring capacity is evicted oldest-first. Without it (the alternate
    /// screen) rows are cropped or padded in place. Degenerate dimensions
    /// leave the buffer unchanged.
    pub fn resize(
        &mut self,
        new_columns: usize,
        new_rows: usize,
        new_total_rows: usize,
        cursor: &mut (usize, usize),
        reflow: bool,
    ) {
        if new_columns == 0 || new_rows == 0 || new_total_rows < new_rows {
            return;
        }
        if new_columns == self.columns
            && new_rows == self.screen_rows
            && new_total_rows == self.total_rows
        {
            return;
        }
        if reflow {
            self.resize_reflow(new_columns, new_rows, new_total_rows, cursor);
        } else {
            self.resize_crop(new_columns, new_rows, new_total_rows, cursor);
        }
    }

    fn resize_reflow(
        &mut self,
        new_columns: usize,
        new_rows: usize,
        new_total_rows: usize,
        cursor: &mut (usize, usize),
    ) {
        let (mut logical, cursor_line, cursor_offset) = self.extract_logical_lines(cursor);

        // Trailing blank lines below the cursor need not survive resize.
        let min_keep = cursor_line + 1;
        while logical.len() > min_keep && logical.last().is_some_and(Vec::is_empty) {
            logical.pop();
        }

        let mut rows: Vec<Option<Row>> = Vec::new();
        let mut cursor_abs: Option<(usize, usize)> = None;
        for (index, line) in logical.iter().enumerate() {
            let first_row_of_line = rows.len();
            append_rewrapped(&mut rows, line, new_columns);
            if index == cursor_line {
                let rows_in_line = rows.len() - first_row_of_line;
                let wanted_row = cursor_offset / new_columns;
                let (line_row, column) = if wanted_row < rows_in_line {
                    (wanted_row, cursor_offset % new_columns)
                } else {
                    (rows_in_line - 1, new_columns - 1)
                };
                cursor_abs = Some((first_row_of_line + line_row, column));
            }
        }

        // Evict oldest history beyond ring capacity.
        if rows.len() > new_total_rows {
            let excess = rows.len() - new_total_rows;
            rows.drain(0..excess);
            if let Some((row, _)) = &mut cursor_abs {
                *row = row.saturating_sub(excess);
            }
        }

        let first_screen_line = rows.len().saturating_sub(new_rows);
        self.columns = new_columns;
        self.screen_rows = new_rows;
        self.total_rows = new_total_rows;
        self.screen_first_row = 0;
        self.active_transcript_rows = first_screen_line;
        self.lines = vec![None; new_total_rows];
        for (index, row) in rows.into_iter().enumerate() {
            let external = index as isize - first_screen_line as isize;
            let internal = self.external_to_internal_row(external);
            self.lines[internal] = row;
        }

        match cursor_abs {
            Some((row, column)) => {
                let external = row.saturating_sub(first_screen_line);
                cursor.0 = external.min(new_rows - 1);
                cursor.1 = column.min(new_columns - 1);
            }
            None => {
                cursor.0 = cursor.0.min(new_rows - 1);
                cursor.1 = cursor.1.min(new_columns - 1);
            }
        }
    }

    /// Join wrap-flagged rows into logical lines over the whole buffer,
    /// transcript first. Returns the lines plus the cursor's logical line
    /// index and column offset within it.
    fn extract_logical_lines(
        &self,
        cursor: &(usize, usize),
    ) -> (Vec<Vec<Cell>>, usize, usize) {
        let mut logical: Vec<Vec<Cell>> = Vec::new();
        let mut current: Vec<Cell> = Vec::new();
        let mut current_columns = 0usize;
        let mut cursor_line = 0usize;
        let mut cursor_offset = 0usize;

        let start = -(self.active_transcript_rows as isize);
        for external in start..self.screen_rows as isize {
            if external == cursor.0 as isize {
                cursor_line = logical.len();
                cursor_offset = current_columns + cursor.1;
            }
            let mut wrapped = false;
            if let Some(row) = self.line(external) {
                wrapped = row.is_wrapped();
                for cell in row.cells() {
                    if cell.is_placeholder() {
                        continue;
                    }
                    current_columns += cell.width();
                    current.push(cell);
                }
            }
            if !wrapped {
                while current
                    .last()
                    .is_some_and(|c| c.units == [0x20] && c.style == Style::default())
                {
                    current.pop();
                }
                logical.push(std::mem::take(&mut current));
                current_columns = 0;
            }
        }
        if !current.is_empty() {
            logical.push(current);
        }
        (logical, cursor_line, cursor_offset)
    }

    fn resize_crop(
        &mut self,
        new_columns: usize,
        new_rows: usize,
        new_total_rows: usize,
        cursor: &mut (usize, usize),
    ) {
        let keep = self.screen_rows.min(new_rows);
        let mut kept: Vec<Option<Row>> = Vec::with_capacity(keep);
        for external in 0..keep {
            let internal = self.external_to_internal_row(external as isize);
            let row = self.lines[internal].take().map(|row| {
                if row.columns() == new_columns {
                    row
                } else {
                    let wrapped = row.is_wrapped();
                    Row::from_cells(new_columns, row.cells(), wrapped)
                }
            });
            kept.push(row);
        }

        self.columns = new_columns;
        self.screen_rows = new_rows;
        self.total_rows = new_total_rows.max(new_rows);
        self.screen_first_row = 0;
        self.active_transcript_rows = 0;
        self.lines = vec![None; self.total_rows];
        for (index, row) in kept.into_iter().enumerate() {
            self.lines[index] = row;
        }

        cursor.0 = cursor.0.min(new_rows - 1);
        cursor.1 = cursor.1.min(new_columns - 1);
    }
}

/// Re-break one logical line at `width` columns, pushing the resulting
/// rows (blank lines as `None`). Wide characters never split across rows:
/// one that would straddle the edge pads the row and wraps whole.
fn append_rewrapped(rows: &mut Vec<Option<Row>>, line: &[Cell], width: usize) {
    if line.is_empty() {
        rows.push(None);
        return;
    }
    let mut row_cells: Vec<Cell> = Vec::with_capacity(width);
    let mut column = 0usize;
    for cell in line {
        let cell_width = cell.width();
        if cell_width > width {
            row_cells.push(Cell::blank(cell.style));
            column += 1;
            continue;
        }
        if column + cell_width > width {
            while row_cells.len() < width {
                row_cells.push(Cell::blank(Style::default()));
            }
            rows.push(Some(Row::from_cells(width, std::mem::take(&mut row_cells), true)));
            column = 0;
        }
        column += cell_width;
        let style = cell.style;
        let wide = cell_width == 2;
        row_cells.push(cell.clone());
        if wide {
            row_cells.push(Cell {
                units: vec![WIDE_PLACEHOLDER],
                style,
            });
        }
    }
    rows.push(Some(Row::from_cells(width, row_cells, false)));
}
