//! Edit-related CSI sequence handling (insertion/deletion)

use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_edit(&mut self, action: char, params: &Params, _intermediates: &[u8]) {
        let cursor_row = self.cursor.row;
        let cursor_column = self.cursor.column;
        let scroll_top = self.scroll_region_top;
        let scroll_bottom = self.scroll_region_bottom;
        let in_region = cursor_row >= scroll_top && cursor_row < scroll_bottom;
        let style = self.style();

        match action {
            'L' => {
                // Insert lines (IL); no-op with the cursor outside the region
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                if in_region {
                    self.screen_mut()
                        .insert_lines(cursor_row, scroll_bottom, n.max(1), style);
                    self.pending_wrap = false;
                }
            }
            'M' => {
                // Delete lines (DL)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                if in_region {
                    self.screen_mut()
                        .delete_lines(cursor_row, scroll_bottom, n.max(1), style);
                    self.pending_wrap = false;
                }
            }
            '@' => {
                // Insert characters (ICH)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                let n = n.max(1).min(self.columns - cursor_column);
                self.screen_mut()
                    .insert_chars(cursor_row, cursor_column, n, style);
            }
            'P' => {
                // Delete characters (DCH)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                let n = n.max(1).min(self.columns - cursor_column);
                self.screen_mut()
                    .delete_chars(cursor_row, cursor_column, n, style);
            }
            'b' => {
                // Repeat preceding graphic character (REP)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                if let Some(code_point) = self.last_emitted_code_point {
                    for _ in 0..n.max(1) {
                        self.write_char(code_point);
                    }
                }
            }
            '}' => {
                // Insert columns (DECIC); reached with the ' intermediate
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                if in_region {
                    self.screen_mut().insert_columns(
                        cursor_column,
                        n.max(1),
                        scroll_top,
                        scroll_bottom,
                        style,
                    );
                }
            }
            '~' => {
                // Delete columns (DECDC)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                if in_region {
                    self.screen_mut().delete_columns(
                        cursor_column,
                        n.max(1),
                        scroll_top,
                        scroll_bottom,
                        style,
                    );
                }
            }
            _ => {}
        }
    }
}
