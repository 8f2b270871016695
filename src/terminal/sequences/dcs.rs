//! DCS (Device Control String) handling: DECRQSS and XTGETTCAP
//!
//! The tokenizer delivers a DCS as hook (final byte and intermediates),
//! a run of put bytes (the data string), and unhook. The data is buffered
//! and interpreted at unhook time. Unrecognized device control strings
//! are consumed and discarded.

use crate::color::Color;
use crate::cursor::CursorShape;
use crate::debug;
use crate::style::TextAttributes;
use crate::terminal::Terminal;
use vte::Params;

/// Maximum buffered DCS data length in bytes (1 MB)
const MAX_DCS_DATA_LENGTH: usize = 1_048_576;

impl Terminal {
    pub(in crate::terminal) fn dcs_hook(
        &mut self,
        _params: &Params,
        intermediates: &[u8],
        ignore: bool,
        action: char,
    ) {
        self.dcs_active = !ignore;
        self.dcs_action = Some(action);
        self.dcs_intermediate = intermediates.first().copied();
        self.dcs_buffer.clear();
    }

    pub(in crate::terminal) fn dcs_put(&mut self, byte: u8) {
        if self.dcs_active && self.dcs_buffer.len() < MAX_DCS_DATA_LENGTH {
            self.dcs_buffer.push(byte);
        }
    }

    pub(in crate::terminal) fn dcs_unhook(&mut self) {
        let action = self.dcs_action.take();
        let intermediate = self.dcs_intermediate.take();
        let data = std::mem::take(&mut self.dcs_buffer);
        let active = self.dcs_active;
        self.dcs_active = false;

        if !active {
            return;
        }
        match (action, intermediate) {
            (Some('q'), Some(b'$')) => self.handle_decrqss(&data),
            (Some('q'), Some(b'+')) => self.handle_xtgettcap(&data),
            _ => {
                debug::log(
                    debug::DebugLevel::Debug,
                    "DCS",
                    &format!(
                        "Discarding device control string: action={:?} intermediate={:?}",
                        action, intermediate
                    ),
                );
            }
        }
    }

    /// DECRQSS: report the current setting of a control function.
    /// Replies DCS 1 $ r ... ST for recognized selectors, DCS 0 $ r ST
    /// otherwise.
    fn handle_decrqss(&mut self, data: &[u8]) {
        let response = match data {
            b"m" => Some(format!("\x1bP1$r{}m\x1b\\", self.pending_sgr_params())),
            b"r" => Some(format!(
                "\x1bP1$r{};{}r\x1b\\",
                self.scroll_region_top + 1,
                self.scroll_region_bottom
            )),
            b"\"q" => {
                let protected = self.attributes.contains(TextAttributes::PROTECTED);
                Some(format!(
                    "\x1bP1$r{}\"q\x1b\\",
                    if protected { 1 } else { 0 }
                ))
            }
            b" q" => {
                let code = match (self.cursor.shape, self.cursor.blinking) {
                    (CursorShape::Block, true) => 1,
                    (CursorShape::Block, false) => 2,
                    (CursorShape::Underline, true) => 3,
                    (CursorShape::Underline, false) => 4,
                    (CursorShape::Bar, true) => 5,
                    (CursorShape::Bar, false) => 6,
                };
                Some(format!("\x1bP1$r{} q\x1b\\", code))
            }
            _ => None,
        };
        match response {
            Some(response) => self.push_response(response.as_bytes()),
            None => self.push_response(b"\x1bP0$r\x1b\\"),
        }
    }

    /// Rebuild an SGR parameter string describing the pending write style.
    fn pending_sgr_params(&self) -> String {
        let mut parts = vec!["0".to_string()];
        let attributes = self.attributes;
        if attributes.contains(TextAttributes::BOLD) {
            parts.push("1".to_string());
        }
        if attributes.contains(TextAttributes::DIM) {
            parts.push("2".to_string());
        }
        if attributes.contains(TextAttributes::ITALIC) {
            parts.push("3".to_string());
        }
        if attributes.contains(TextAttributes::UNDERLINE) {
            parts.push("4".to_string());
        }
        if attributes.contains(TextAttributes::BLINK) {
            parts.push("5".to_string());
        }
        if attributes.contains(TextAttributes::INVERSE) {
            parts.push("7".to_string());
        }
        if attributes.contains(TextAttributes::INVISIBLE) {
            parts.push("8".to_string());
        }
        if attributes.contains(TextAttributes::STRIKETHROUGH) {
            parts.push("9".to_string());
        }
        match self.fg {
            Color::Indexed(index) if index < 8 => parts.push((30 + index).to_string()),
            Color::Indexed(index) if index < 16 => parts.push((90 + index - 8).to_string()),
            Color::Indexed(index) if index <= 255 => parts.push(format!("38:5:{}", index)),
            Color::Indexed(_) => {}
            Color::Rgb(r, g, b) => parts.push(format!("38:2:{}:{}:{}", r, g, b)),
        }
        match self.bg {
            Color::Indexed(index) if index < 8 => parts.push((40 + index).to_string()),
            Color::Indexed(index) if index < 16 => parts.push((100 + index - 8).to_string()),
            Color::Indexed(index) if index <= 255 => parts.push(format!("48:5:{}", index)),
            Color::Indexed(_) => {}
            Color::Rgb(r, g, b) => parts.push(format!("48:2:{}:{}:{}", r, g, b)),
        }
        parts.join(";")
    }

    /// XTGETTCAP: termcap/terminfo query with hex-encoded names.
    fn handle_xtgettcap(&mut self, data: &[u8]) {
        let mut replies = Vec::new();
        for name in data.split(|&byte| byte == b';') {
            let decoded = match decode_hex(name) {
                Some(decoded) => decoded,
                None => continue,
            };
            let value = match decoded.as_str() {
                "TN" | "name" => Some("xterm-256color"),
                "Co" | "colors" => Some("256"),
                "RGB" => Some("8/8/8"),
                _ => None,
            };
            if let Some(value) = value {
                replies.push(format!(
                    "{}={}",
                    encode_hex(&decoded),
                    encode_hex(value)
                ));
            }
        }
        if replies.is_empty() {
            self.push_response(b"\x1bP0+r\x1b\\");
        } else {
            let response = format!("\x1bP1+r{}\x1b\\", replies.join(";"));
            self.push_response(response.as_bytes());
        }
    }
}

fn encode_hex(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 2);
    for byte in text.bytes() {
        out.push_str(&format!("{:02x}", byte));
    }
    out
}

fn decode_hex(data: &[u8]) -> Option<String> {
    if data.is_empty() || data.len() % 2 != 0 {
        return None;
    }
    let mut out = Vec::with_capacity(data.len() / 2);
    for pair in data.chunks(2) {
        let text = std::str::from_utf8(pair).ok()?;
        out.push(u8::from_str_radix(text, 16).ok()?);
    }
    String::from_utf8(out).ok()
}
