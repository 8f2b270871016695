//! Mode-related CSI sequence handling (SM/RM, DECSET/DECRST, XTSAVE/XTRESTORE)

use crate::debug;
use crate::mouse::{MouseEncoding, MouseMode};
use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_mode(&mut self, action: char, params: &Params, intermediates: &[u8]) {
        let private = intermediates.contains(&b'?');

        match action {
            'h' => {
                // Set mode (SM / DECSET)
                for param_slice in params {
                    let param = param_slice.first().copied().unwrap_or(0);
                    if private {
                        self.handle_decset(param);
                    } else {
                        match param {
                            4 => self.insert_mode = true,
                            20 => self.auto_new_line = true,
                            _ => {}
                        }
                    }
                }
            }
            'l' => {
                // Reset mode (RM / DECRST)
                for param_slice in params {
                    let param = param_slice.first().copied().unwrap_or(0);
                    if private {
                        self.handle_decrst(param);
                    } else {
                        match param {
                            4 => self.insert_mode = false,
                            20 => self.auto_new_line = false,
                            _ => {}
                        }
                    }
                }
            }
            's' => {
                // XTSAVE: stash the current value of each listed mode
                if private {
                    for param_slice in params {
                        let param = param_slice.first().copied().unwrap_or(0);
                        self.save_private_mode(param);
                    }
                }
            }
            'r' => {
                // XTRESTORE: re-apply stashed mode values
                if private {
                    for param_slice in params {
                        let param = param_slice.first().copied().unwrap_or(0);
                        self.restore_private_mode(param);
                    }
                }
            }
            _ => {}
        }
    }

    pub(crate) fn handle_decset(&mut self, param: u16) {
        match param {
            1 => self.application_cursor_keys = true,
            3 => self.column_mode_reset(),
            4 => self.smooth_scroll = true,
            5 => self.reverse_video = true,
            6 => {
                self.origin_mode = true;
                self.set_cursor_position(0, 0);
            }
            7 => self.autowrap = true,
            9 => self.mouse_mode = MouseMode::X10,
            12 => self.cursor.blinking = true,
            25 => self.cursor.visible = true,
            40 => self.allow_column_switch = true,
            45 => self.reverse_wraparound = true,
            47 => self.switch_to_alt_screen(),
            66 => self.application_keypad = true,
            1000 => self.mouse_mode = MouseMode::Normal,
            1002 => self.mouse_mode = MouseMode::ButtonEvent,
            1003 => self.mouse_mode = MouseMode::AnyEvent,
            1004 => self.focus_tracking = true,
            1006 => self.mouse_encoding = MouseEncoding::Sgr,
            1047 => self.switch_to_alt_screen(),
            1048 => self.save_cursor(),
            1049 => {
                if !self.alt_screen_active {
                    self.save_cursor();
                    self.switch_to_alt_screen();
                    self.clear_alt_screen();
                }
            }
            2004 => self.bracketed_paste = true,
            _ => {
                debug::log(
                    debug::DebugLevel::Debug,
                    "CSI",
                    &format!("Unsupported DECSET: {}", param),
                );
            }
        }
    }

    pub(crate) fn handle_decrst(&mut self, param: u16) {
        match param {
            1 => self.application_cursor_keys = false,
            3 => self.column_mode_reset(),
            4 => self.smooth_scroll = false,
            5 => self.reverse_video = false,
            6 => {
                self.origin_mode = false;
                self.set_cursor_position(0, 0);
            }
            7 => self.autowrap = false,
            9 => self.mouse_mode = MouseMode::Off,
            12 => self.cursor.blinking = false,
            25 => self.cursor.visible = false,
            40 => self.allow_column_switch = false,
            45 => self.reverse_wraparound = false,
            47 => self.switch_to_main_screen(),
            66 => self.application_keypad = false,
            1000 | 1002 | 1003 => self.mouse_mode = MouseMode::Off,
            1004 => self.focus_tracking = false,
            1006 => self.mouse_encoding = MouseEncoding::Default,
            1047 => {
                if self.alt_screen_active {
                    self.clear_alt_screen();
                    self.switch_to_main_screen();
                }
            }
            1048 => self.restore_cursor(),
            1049 => {
                if self.alt_screen_active {
                    self.switch_to_main_screen();
                    self.restore_cursor();
                }
            }
            2004 => self.bracketed_paste = false,
            _ => {
                debug::log(
                    debug::DebugLevel::Debug,
                    "CSI",
                    &format!("Unsupported DECRST: {}", param),
                );
            }
        }
    }
}
