//! CSI (Control Sequence Introducer) sequence handling dispatcher

mod cursor;
mod edit;
mod erase;
mod mode;
mod report;
mod scroll;
mod style;

use crate::debug;
use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    /// VTE CSI dispatch - handle CSI sequences
    pub(in crate::terminal) fn csi_dispatch_impl(
        &mut self,
        params: &Params,
        intermediates: &[u8],
        _ignore: bool,
        action: char,
    ) {
        if debug::enabled(debug::DebugLevel::Debug) {
            let params_vec: Vec<u16> = params
                .iter()
                .flat_map(|subparams| subparams.iter().copied())
                .collect();
            debug::log_csi_dispatch(&params_vec, intermediates, action);
        }

        let private = intermediates.contains(&b'?');

        match action {
            'A' | 'B' | 'C' | 'D' | 'E' | 'F' | 'G' | '`' | 'a' | 'd' | 'e' | 'H' | 'f' | 'I'
            | 'Z' | 'g' => {
                self.handle_csi_cursor(action, params, intermediates);
            }
            '@' | 'P' | 'L' | 'M' | 'b' => {
                self.handle_csi_edit(action, params, intermediates);
            }
            '}' | '~' => {
                // DECIC / DECDC carry a ' intermediate
                if intermediates.contains(&b'\'') {
                    self.handle_csi_edit(action, params, intermediates);
                }
            }
            'J' | 'K' | 'X' => {
                self.handle_csi_erase(action, params, intermediates);
            }
            'S' | 'T' => {
                self.handle_csi_scroll(action, params, intermediates);
            }
            'm' => {
                self.handle_csi_style(action, params, intermediates);
            }
            'h' | 'l' => {
                self.handle_csi_mode(action, params, intermediates);
            }
            'n' | 'c' | 'x' | 't' => {
                self.handle_csi_report(action, params, intermediates);
            }
            'r' => {
                // DECSTBM, or XTRESTORE with the ? marker
                if private {
                    self.handle_csi_mode(action, params, intermediates);
                } else {
                    self.handle_csi_scroll(action, params, intermediates);
                }
            }
            's' => {
                // SCOSC, or XTSAVE with the ? marker
                if private {
                    self.handle_csi_mode(action, params, intermediates);
                } else {
                    self.save_cursor();
                }
            }
            'u' => {
                // SCORC
                self.restore_cursor();
            }
            'q' => {
                // q is DECSCUSR (with space) or DECSCA (with ")
                if intermediates.contains(&b' ') {
                    self.handle_csi_cursor(action, params, intermediates);
                } else if intermediates.contains(&b'"') {
                    self.handle_csi_style(action, params, intermediates);
                }
            }
            'p' => {
                // p is DECSTR (with !) or DECRQM (with $)
                if intermediates.contains(&b'!') {
                    self.reset_emulator_state();
                } else if intermediates.contains(&b'$') {
                    self.handle_csi_report(action, params, intermediates);
                }
            }
            _ => {
                debug::log(
                    debug::DebugLevel::Debug,
                    "CSI",
                    &format!("Unsupported CSI action: {}", action),
                );
            }
        }
    }
}
