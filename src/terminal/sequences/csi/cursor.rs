//! Cursor-related CSI sequence handling

use crate::cursor::CursorShape;
use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_cursor(
        &mut self,
        action: char,
        params: &Params,
        _intermediates: &[u8],
    ) {
        match action {
            'A' => {
                // Cursor up (CUU)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor_up(n.max(1));
            }
            'B' | 'e' => {
                // Cursor down (CUD) / line position relative (VPR)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor_down(n.max(1));
            }
            'C' | 'a' => {
                // Cursor forward (CUF) / character position relative (HPR)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor_forward(n.max(1));
            }
            'D' => {
                // Cursor back (CUB)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor_back(n.max(1));
            }
            'E' => {
                // Cursor next line (CNL)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor_down(n.max(1));
                self.cursor.column = 0;
            }
            'F' => {
                // Cursor preceding line (CPL)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor_up(n.max(1));
                self.cursor.column = 0;
            }
            'G' | '`' => {
                // Cursor horizontal absolute (CHA/HPA)
                let column = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                self.cursor.column = column.saturating_sub(1).min(self.columns - 1);
                self.pending_wrap = false;
            }
            'd' => {
                // Line position absolute (VPA), origin-relative like CUP
                let row = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                let column = self.cursor.column;
                self.set_cursor_position(column, row.saturating_sub(1));
            }
            'H' | 'f' => {
                // Cursor position (CUP/HVP)
                let mut iter = params.iter();
                let row = iter.next().and_then(|p| p.first()).copied().unwrap_or(1) as usize;
                let column = iter.next().and_then(|p| p.first()).copied().unwrap_or(1) as usize;
                self.set_cursor_position(column.saturating_sub(1), row.saturating_sub(1));
            }
            'I' => {
                // Cursor horizontal tab (CHT)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                for _ in 0..n.max(1) {
                    self.horizontal_tab();
                }
            }
            'Z' => {
                // Cursor backward tab (CBT)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(1) as usize;
                for _ in 0..n.max(1) {
                    let mut column = self.cursor.column;
                    if column > 0 {
                        column -= 1;
                        while column > 0 && !self.tab_stops[column] {
                            column -= 1;
                        }
                        self.cursor.column = column;
                    }
                }
                self.pending_wrap = false;
            }
            'g' => {
                // Tabulation clear (TBC)
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                match n {
                    0 => self.tab_stops[self.cursor.column] = false,
                    3 => self.tab_stops.fill(false),
                    _ => {}
                }
            }
            'q' => {
                // Set cursor style (DECSCUSR); reached with the SP intermediate
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                let (shape, blinking) = match n {
                    0 | 1 => (CursorShape::Block, true),
                    2 => (CursorShape::Block, false),
                    3 => (CursorShape::Underline, true),
                    4 => (CursorShape::Underline, false),
                    5 => (CursorShape::Bar, true),
                    6 => (CursorShape::Bar, false),
                    _ => (CursorShape::Block, true),
                };
                self.cursor.shape = shape;
                self.cursor.blinking = blinking;
            }
            _ => {}
        }
    }
}
