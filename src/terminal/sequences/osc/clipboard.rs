//! Clipboard OSC sequence handling

use crate::terminal::{Terminal, TerminalEvent};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

impl Terminal {
    pub(crate) fn handle_osc_clipboard(&mut self, params: &[&[u8]], bell_terminated: bool) {
        // Format: OSC 52 ; selection ; data (BEL | ST)
        if params.len() < 3 {
            return;
        }
        if let Ok(selection) = std::str::from_utf8(params[1]) {
            if let Ok(data) = std::str::from_utf8(params[2]) {
                let data = data.trim();

                if selection.contains('c') || selection.is_empty() {
                    if data == "?" {
                        // Only content this session stored itself is echoed
                        // back; the host clipboard is never exposed.
                        let encoded = self
                            .clipboard_content
                            .as_deref()
                            .map(|content| BASE64.encode(content.as_bytes()))
                            .unwrap_or_default();
                        let terminator = if bell_terminated { "\x07" } else { "\x1b\\" };
                        let response = format!("\x1b]52;c;{}{}", encoded, terminator);
                        self.push_response(response.as_bytes());
                    } else if !data.is_empty() {
                        if let Ok(decoded) = BASE64.decode(data.as_bytes()) {
                            if let Ok(text) = String::from_utf8(decoded) {
                                self.clipboard_content = Some(text.clone());
                                self.terminal_events
                                    .push(TerminalEvent::ClipboardWriteRequested(text));
                            }
                        }
                    } else {
                        self.clipboard_content = None;
                    }
                }
            }
        }
    }
}
