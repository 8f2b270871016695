//! ESC (Escape) sequence handling
//!
//! Two-character escapes (ESC + final byte):
//! - Cursor save/restore (DECSC/DECRC)
//! - Index family (IND, RI, NEL) and tab stop set (HTS)
//! - Keypad modes, RIS, DECALN
//! - Charset designation (ESC ( / ESC ))

use crate::debug;
use crate::style::Style;
use crate::terminal::Terminal;

impl Terminal {
    /// VTE ESC dispatch - handle ESC sequences
    pub(in crate::terminal) fn esc_dispatch_impl(
        &mut self,
        intermediates: &[u8],
        _ignore: bool,
        byte: u8,
    ) {
        debug::log_esc_dispatch(intermediates, byte as char);
        match (byte, intermediates) {
            (b'7', []) => {
                // Save cursor (DECSC)
                self.save_cursor();
            }
            (b'8', []) => {
                // Restore cursor (DECRC)
                self.restore_cursor();
            }
            (b'8', [b'#']) => {
                // DECALN - screen alignment pattern
                self.screen_alignment_pattern();
            }
            (b'D', []) => {
                // Index (IND)
                self.index();
            }
            (b'E', []) => {
                // Next line (NEL)
                self.next_line();
            }
            (b'H', []) => {
                // Set tab stop at current column (HTS)
                if self.cursor.column < self.tab_stops.len() {
                    self.tab_stops[self.cursor.column] = true;
                }
            }
            (b'M', []) => {
                // Reverse index (RI)
                self.reverse_index();
            }
            (b'Z', []) => {
                // DECID - answered like primary DA
                self.report_primary_device_attributes();
            }
            (b'c', []) => {
                // Reset to initial state (RIS)
                self.reset();
            }
            (b'=', []) => {
                // Application keypad (DECKPAM)
                self.application_keypad = true;
            }
            (b'>', []) => {
                // Numeric keypad (DECKPNM)
                self.application_keypad = false;
            }
            (final_byte, [b'(']) => {
                self.designate_charset(false, final_byte);
            }
            (final_byte, [b')']) => {
                self.designate_charset(true, final_byte);
            }
            _ => {}
        }
    }

    /// SCS: designate G0 or G1. `0` selects DEC special graphics; `B` and
    /// the national variants some programs emit all map to US-ASCII.
    fn designate_charset(&mut self, g1: bool, final_byte: u8) {
        let graphics = final_byte == b'0';
        if g1 {
            self.g1_graphics = graphics;
        } else {
            self.g0_graphics = graphics;
        }
    }

    /// DECALN: fill the screen with `E`, reset margins, home the cursor.
    fn screen_alignment_pattern(&mut self) {
        self.scroll_region_top = 0;
        self.scroll_region_bottom = self.rows;
        self.pending_wrap = false;
        let style = Style::default();
        for row in 0..self.rows {
            for column in 0..self.columns {
                self.screen_mut().set_char(row, column, 'E', style);
            }
        }
        self.cursor.row = 0;
        self.cursor.column = 0;
    }
}
