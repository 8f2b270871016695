//! VTE Perform trait implementation for Terminal
//!
//! The interface between the byte-level parser and the terminal state.
//! Every method delegates to a handler in `mod.rs` or `sequences/`.

use crate::debug;
use crate::terminal::Terminal;
use vte::{Params, Perform};

impl Perform for Terminal {
    fn print(&mut self, c: char) {
        debug::log_print(c, self.cursor.column, self.cursor.row);
        self.write_char(c);
    }

    fn execute(&mut self, byte: u8) {
        debug::log_execute(byte);
        match byte {
            b'\x07' => self.bell(),
            b'\x08' => self.backspace(),
            b'\t' => self.horizontal_tab(),
            // LF, VT, and FF all index down
            b'\n' | b'\x0b' | b'\x0c' => self.do_line_feed(),
            b'\r' => self.carriage_return(),
            b'\x0e' => self.active_charset_is_g1 = true,
            b'\x0f' => self.active_charset_is_g1 = false,
            _ => {}
        }
    }

    fn hook(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        self.dcs_hook(params, intermediates, ignore, action);
    }

    fn put(&mut self, byte: u8) {
        self.dcs_put(byte);
    }

    fn unhook(&mut self) {
        self.dcs_unhook();
    }

    fn osc_dispatch(&mut self, params: &[&[u8]], bell_terminated: bool) {
        self.osc_dispatch_impl(params, bell_terminated);
    }

    fn csi_dispatch(&mut self, params: &Params, intermediates: &[u8], ignore: bool, action: char) {
        self.csi_dispatch_impl(params, intermediates, ignore, action);
    }

    fn esc_dispatch(&mut self, intermediates: &[u8], ignore: bool, byte: u8) {
        self.esc_dispatch_impl(intermediates, ignore, byte);
    }
}
