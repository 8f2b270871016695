//! Color-related OSC sequence handling

use crate::color::{self, BACKGROUND_INDEX, CURSOR_INDEX, FOREGROUND_INDEX};
use crate::terminal::{Terminal, TerminalEvent};

impl Terminal {
    pub(crate) fn handle_osc_color(
        &mut self,
        command: &str,
        params: &[&[u8]],
        bell_terminated: bool,
    ) {
        // Queries echo the terminator the request arrived with, like xterm.
        let terminator = if bell_terminated { "\x07" } else { "\x1b\\" };

        match command {
            "4" => {
                // OSC 4: one or more index;spec pairs. A spec of "?" queries.
                let mut changed = false;
                for pair in params[1..].chunks(2) {
                    if pair.len() < 2 {
                        break;
                    }
                    let index = match std::str::from_utf8(pair[0])
                        .ok()
                        .and_then(|text| text.trim().parse::<u16>().ok())
                    {
                        Some(index) if (index as usize) < color::NUM_INDEXED_COLORS => index,
                        _ => continue,
                    };
                    if let Ok(spec) = std::str::from_utf8(pair[1]) {
                        let spec = spec.trim();
                        if spec == "?" {
                            let (r, g, b) = self.palette.color(index);
                            let response = format!(
                                "\x1b]4;{};rgb:{:04x}/{:04x}/{:04x}{}",
                                index,
                                r as u16 * 257,
                                g as u16 * 257,
                                b as u16 * 257,
                                terminator
                            );
                            self.push_response(response.as_bytes());
                        } else if let Some(rgb) = color::parse_color_spec(spec) {
                            self.palette.set_color(index, rgb);
                            changed = true;
                        }
                    }
                }
                if changed {
                    self.terminal_events.push(TerminalEvent::ColorsChanged);
                }
            }
            "10" | "11" | "12" => {
                // Dynamic colors. Extra parameters advance to the next slot,
                // so OSC 10;fg;bg sets both foreground and background.
                let mut index = match command {
                    "10" => FOREGROUND_INDEX,
                    "11" => BACKGROUND_INDEX,
                    _ => CURSOR_INDEX,
                };
                let mut changed = false;
                for param in &params[1..] {
                    if index > CURSOR_INDEX {
                        break;
                    }
                    if let Ok(spec) = std::str::from_utf8(param) {
                        let spec = spec.trim();
                        if spec == "?" {
                            let (r, g, b) = self.palette.color(index);
                            let response = format!(
                                "\x1b]{};rgb:{:04x}/{:04x}/{:04x}{}",
                                index - FOREGROUND_INDEX + 10,
                                r as u16 * 257,
                                g as u16 * 257,
                                b as u16 * 257,
                                terminator
                            );
                            self.push_response(response.as_bytes());
                        } else if let Some(rgb) = color::parse_color_spec(spec) {
                            self.palette.set_color(index, rgb);
                            changed = true;
                        }
                    }
                    index += 1;
                }
                if changed {
                    self.terminal_events.push(TerminalEvent::ColorsChanged);
                }
            }
            "104" => {
                // Bare OSC 104 restores the whole table to the session default
                if params.len() == 1 || (params.len() >= 2 && params[1].is_empty()) {
                    self.palette = self.default_palette.clone();
                    self.terminal_events.push(TerminalEvent::ColorsChanged);
                } else {
                    let mut changed = false;
                    for param in &params[1..] {
                        if let Some(index) = std::str::from_utf8(param)
                            .ok()
                            .and_then(|text| text.trim().parse::<u16>().ok())
                        {
                            if (index as usize) < color::NUM_INDEXED_COLORS {
                                self.palette.set_color(index, self.default_palette.color(index));
                                changed = true;
                            }
                        }
                    }
                    if changed {
                        self.terminal_events.push(TerminalEvent::ColorsChanged);
                    }
                }
            }
            "110" | "111" | "112" => {
                let index = match command {
                    "110" => FOREGROUND_INDEX,
                    "111" => BACKGROUND_INDEX,
                    _ => CURSOR_INDEX,
                };
                self.palette.set_color(index, self.default_palette.color(index));
                self.terminal_events.push(TerminalEvent::ColorsChanged);
            }
            _ => {}
        }
    }
}
