//! Report-related CSI sequence handling (DSR, DA, DECRQM, XTWINOPS)

use crate::terminal::{Terminal, TerminalEvent};
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_report(
        &mut self,
        action: char,
        params: &Params,
        intermediates: &[u8],
    ) {
        match action {
            'n' => {
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                match n {
                    5 => {
                        // Operating status: always "OK"
                        self.push_response(b"\x1b[0n");
                    }
                    6 => {
                        // Cursor position report, origin-relative when DECOM is set
                        let row = if self.origin_mode {
                            self.cursor.row.saturating_sub(self.scroll_region_top)
                        } else {
                            self.cursor.row
                        };
                        let response = format!("\x1b[{};{}R", row + 1, self.cursor.column + 1);
                        self.push_response(response.as_bytes());
                    }
                    _ => {}
                }
            }
            'c' => {
                if intermediates.contains(&b'>') {
                    // Secondary DA: VT420-class with a fixed firmware number
                    self.push_response(b"\x1b[>41;320;0c");
                } else {
                    self.report_primary_device_attributes();
                }
            }
            'x' => {
                // DECREQTPARM
                let n = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                if n == 0 || n == 1 {
                    let response = format!("\x1b[{};1;1;120;120;1;0x", n + 2);
                    self.push_response(response.as_bytes());
                }
            }
            'p' => {
                // DECRQM: report the state of a single mode
                let mode = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                if intermediates.contains(&b'?') {
                    let status = match self.private_mode_value(mode) {
                        Some(true) => 1,
                        Some(false) => 2,
                        None => 0,
                    };
                    let response = format!("\x1b[?{};{}$y", mode, status);
                    self.push_response(response.as_bytes());
                } else {
                    let status = match mode {
                        4 => {
                            if self.insert_mode {
                                1
                            } else {
                                2
                            }
                        }
                        20 => {
                            if self.auto_new_line {
                                1
                            } else {
                                2
                            }
                        }
                        _ => 0,
                    };
                    let response = format!("\x1b[{};{}$y", mode, status);
                    self.push_response(response.as_bytes());
                }
            }
            't' => self.handle_window_ops(params),
            _ => {}
        }
    }

    /// Primary DA reply, shared with ESC Z (DECID).
    pub(crate) fn report_primary_device_attributes(&mut self) {
        self.push_response(b"\x1b[?64;1;2;6;9;15;18;21;22c");
    }

    fn handle_window_ops(&mut self, params: &Params) {
        let op = params
            .iter()
            .next()
            .and_then(|p| p.first())
            .copied()
            .unwrap_or(0);
        match op {
            18 => {
                // Report text area size in characters
                let response = format!("\x1b[8;{};{}t", self.rows, self.columns);
                self.push_response(response.as_bytes());
            }
            22 => {
                self.title_stack.push(self.title.clone());
            }
            23 => {
                if let Some(title) = self.title_stack.pop() {
                    self.title = title.clone();
                    self.terminal_events.push(TerminalEvent::TitleChanged(title));
                }
            }
            _ => {}
        }
    }
}
