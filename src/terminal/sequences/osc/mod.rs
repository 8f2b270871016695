//! OSC (Operating System Command) sequence handling dispatcher

mod clipboard;
mod color;
mod title;

use crate::debug;
use crate::terminal::Terminal;

/// Maximum total OSC data length in bytes (1 MB)
const MAX_OSC_DATA_LENGTH: usize = 1_048_576;

impl Terminal {
    /// VTE OSC dispatch - handle OSC sequences
    pub(in crate::terminal) fn osc_dispatch_impl(
        &mut self,
        params: &[&[u8]],
        bell_terminated: bool,
    ) {
        debug::log_osc_dispatch(params);
        if params.is_empty() {
            return;
        }

        // Reject excessively large OSC data to prevent memory exhaustion
        let total_len: usize = params.iter().map(|p| p.len()).sum();
        if total_len > MAX_OSC_DATA_LENGTH {
            debug::log(
                debug::DebugLevel::Debug,
                "OSC",
                &format!(
                    "OSC data too large: {} bytes (max {}), ignoring",
                    total_len, MAX_OSC_DATA_LENGTH
                ),
            );
            return;
        }

        if let Ok(command) = std::str::from_utf8(params[0]) {
            match command {
                "0" | "1" | "2" => self.handle_osc_title(command, params),
                "52" => self.handle_osc_clipboard(params, bell_terminated),
                "4" | "104" | "10" | "11" | "12" | "110" | "111" | "112" => {
                    self.handle_osc_color(command, params, bell_terminated)
                }
                // Highlight color reset, accepted without effect
                "119" => {}
                _ => {
                    debug::log(
                        debug::DebugLevel::Debug,
                        "OSC",
                        &format!("Unsupported OSC command: {}", command),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::terminal::Terminal;

    #[test]
    fn test_unknown_osc_ignored() {
        let mut term = Terminal::new(80, 24);
        term.process(b"\x1b]9999;whatever\x07hello");
        assert_eq!(term.screen().row_text(0).trim_end(), "hello");
    }

    #[test]
    fn test_osc_st_terminator() {
        let mut term = Terminal::new(80, 24);
        term.process(b"\x1b]2;with st\x1b\\done");
        assert_eq!(term.title(), "with st");
        assert_eq!(term.screen().row_text(0).trim_end(), "done");
    }
}
