//! Erase-related CSI sequence handling
//!
//! ED/EL plus the DEC selective variants (DECSED/DECSEL, with the `?`
//! marker) that skip cells carrying the DECSCA protection attribute.

use crate::debug;
use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_erase(
        &mut self,
        action: char,
        params: &Params,
        intermediates: &[u8],
    ) {
        // DECSED/DECSEL erase only unprotected cells
        let selective = intermediates.contains(&b'?');
        let cursor_row = self.cursor.row;
        let cursor_column = self.cursor.column;
        let columns = self.columns;
        let rows = self.rows;
        let style = self.style();

        match action {
            'J' => {
                // Erase in display (ED)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                match n {
                    0 => {
                        let screen = self.screen_mut();
                        screen.clear_row_range(cursor_row, cursor_column, columns, style, selective);
                        screen.clear_rows(cursor_row + 1, rows, style, selective);
                    }
                    1 => {
                        let screen = self.screen_mut();
                        screen.clear_rows(0, cursor_row, style, selective);
                        screen.clear_row_range(cursor_row, 0, cursor_column + 1, style, selective);
                    }
                    2 => {
                        self.screen_mut().clear_rows(0, rows, style, selective);
                    }
                    3 => {
                        // Scrollback only; the visible screen is untouched
                        if !selective {
                            self.screen_mut().clear_transcript();
                            debug::log(
                                debug::DebugLevel::Debug,
                                "CLEAR",
                                "Cleared scrollback (ED 3)",
                            );
                        }
                    }
                    _ => {}
                }
                self.pending_wrap = false;
            }
            'K' => {
                // Erase in line (EL)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                match n {
                    0 => {
                        self.screen_mut().clear_row_range(
                            cursor_row,
                            cursor_column,
                            columns,
                            style,
                            selective,
                        );
                    }
                    1 => {
                        self.screen_mut().clear_row_range(
                            cursor_row,
                            0,
                            cursor_column + 1,
                            style,
                            selective,
                        );
                    }
                    2 => {
                        self.screen_mut()
                            .clear_row_range(cursor_row, 0, columns, style, selective);
                    }
                    _ => {}
                }
                self.pending_wrap = false;
            }
            'X' => {
                // Erase characters (ECH); protection does not apply
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                let end = (cursor_column + n.max(1)).min(columns);
                self.screen_mut()
                    .clear_row_range(cursor_row, cursor_column, end, style, false);
            }
            _ => {}
        }
    }
}
