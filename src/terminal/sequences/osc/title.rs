//! Title-related OSC sequence handling

use crate::terminal::{Terminal, TerminalEvent};

impl Terminal {
    pub(crate) fn handle_osc_title(&mut self, command: &str, params: &[&[u8]]) {
        match command {
            "0" | "2" => {
                if params.len() >= 2 {
                    if let Ok(title) = std::str::from_utf8(params[1]) {
                        let new_title = title.to_string();
                        if self.title != new_title {
                            self.title = new_title.clone();
                            self.terminal_events
                                .push(TerminalEvent::TitleChanged(new_title));
                        }
                    }
                }
            }
            // Icon name, accepted without effect
            "1" => {}
            _ => {}
        }
    }
}
