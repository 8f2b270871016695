//! Text extraction: transcript export and selection

use crate::screen::Screen;

impl Screen {
    /// Full transcript plus visible screen as flat text. Wrap-flagged
    /// rows join without a line break so logical lines come back intact;
    /// trailing blank lines are dropped.
    pub fn transcript_text(&self) -> String {
        self.text_in_rows(
            -(self.active_transcript_rows as isize),
            self.screen_rows as isize,
        )
    }

    /// The visible screen as flat text.
    pub fn visible_text(&self) -> String {
        self.text_in_rows(0, self.screen_rows as isize)
    }

    fn text_in_rows(&self, start_row: isize, end_row: isize) -> String {
        let mut out = String::new();
        for row in start_row..end_row {
            if self.is_line_wrapped(row) {
                out.push_str(&self.row_text(row));
            } else {
                let text = self.row_text(row);
                out.push_str(text.trim_end_matches(' '));
                out.push('\n');
            }
        }
        while out.ends_with('\n') {
            out.pop();
        }
        out
    }

    /// Text in the on-screen selection from (`row1`, `column1`) to
    /// (`row2`, `column2`) inclusive, reading row-major like a visual
    /// selection. Endpoints may arrive in either order; a selection
    /// starting on the trailing half of a wide character widens to
    /// include it.
    pub fn selected_text(
        &self,
        column1: usize,
        row1: isize,
        column2: usize,
        row2: isize,
    ) -> String {
        let ((top_row, top_col), (bottom_row, bottom_col)) = if (row1, column1) <= (row2, column2)
        {
            ((row1, column1), (row2, column2))
        } else {
            ((row2, column2), (row1, column1))
        };
        let first = top_row.max(-(self.active_transcript_rows as isize));
        let last = bottom_row.min(self.screen_rows as isize - 1);

        let mut out = String::new();
        for row in first..=last {
            let mut start = if row == top_row { top_col } else { 0 };
            let end = if row == bottom_row {
                (bottom_col + 1).min(self.columns)
            } else {
                self.columns
            };
            let mut wrapped = false;
            let text = match self.line(row) {
                Some(line) => {
                    wrapped = line.is_wrapped();
                    if start > 0 && line.is_wide_placeholder(start) {
                        start -= 1;
                    }
                    line.text_range(start, end)
                }
                None => String::new(),
            };
            if wrapped && row != last {
                // Mid logical line: keep interior spaces, no break.
                out.push_str(&text);
            } else {
                out.push_str(text.trim_end_matches(' '));
                if row != last {
                    out.push('\n');
                }
            }
        }
        out
    }
}
