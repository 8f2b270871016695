//! SGR (Select Graphic Rendition) and style CSI sequence handling

use crate::color::Color;
use crate::style::TextAttributes;
use crate::terminal::Terminal;
use vte::Params;

impl Terminal {
    pub(crate) fn handle_csi_style(&mut self, action: char, params: &Params, _intermediates: &[u8]) {
        match action {
            'm' => self.handle_sgr(params),
            'q' => {
                // Select character protection (DECSCA); reached with the
                // " intermediate
                let ps = params
                    .iter()
                    .next()
                    .and_then(|p| p.first())
                    .copied()
                    .unwrap_or(0);
                match ps {
                    1 => self.attributes.insert(TextAttributes::PROTECTED),
                    0 | 2 => self.attributes.remove(TextAttributes::PROTECTED),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    fn handle_sgr(&mut self, params: &Params) {
        if params.is_empty() {
            self.reset_pending_style();
            return;
        }

        let mut iter = params.iter();
        while let Some(param_slice) = iter.next() {
            let param = param_slice.first().copied().unwrap_or(0);
            match param {
                0 => self.reset_pending_style(),
                1 => self.attributes.insert(TextAttributes::BOLD),
                2 => self.attributes.insert(TextAttributes::DIM),
                3 => self.attributes.insert(TextAttributes::ITALIC),
                4 => {
                    // 4:0 switches underline off; any other style maps to
                    // the single underline this model carries
                    if param_slice.get(1) == Some(&0) {
                        self.attributes.remove(TextAttributes::UNDERLINE);
                    } else {
                        self.attributes.insert(TextAttributes::UNDERLINE);
                    }
                }
                5 | 6 => self.attributes.insert(TextAttributes::BLINK),
                7 => self.attributes.insert(TextAttributes::INVERSE),
                8 => self.attributes.insert(TextAttributes::INVISIBLE),
                9 => self.attributes.insert(TextAttributes::STRIKETHROUGH),
                21 => self.attributes.insert(TextAttributes::UNDERLINE),
                22 => self
                    .attributes
                    .remove(TextAttributes::BOLD | TextAttributes::DIM),
                23 => self.attributes.remove(TextAttributes::ITALIC),
                24 => self.attributes.remove(TextAttributes::UNDERLINE),
                25 => self.attributes.remove(TextAttributes::BLINK),
                27 => self.attributes.remove(TextAttributes::INVERSE),
                28 => self.attributes.remove(TextAttributes::INVISIBLE),
                29 => self.attributes.remove(TextAttributes::STRIKETHROUGH),
                30..=37 => self.fg = Color::Indexed(param - 30),
                38 => {
                    if let Some(color) = Self::extended_color(param_slice, &mut iter) {
                        self.fg = color;
                    }
                }
                39 => self.fg = Color::DEFAULT_FG,
                40..=47 => self.bg = Color::Indexed(param - 40),
                48 => {
                    if let Some(color) = Self::extended_color(param_slice, &mut iter) {
                        self.bg = color;
                    }
                }
                49 => self.bg = Color::DEFAULT_BG,
                58 => {
                    // Underline color: consume the payload; the style model
                    // does not carry it
                    let _ = Self::extended_color(param_slice, &mut iter);
                }
                59 => {}
                90..=97 => self.fg = Color::Indexed(param - 90 + 8),
                100..=107 => self.bg = Color::Indexed(param - 100 + 8),
                _ => {}
            }
        }
    }

    fn reset_pending_style(&mut self) {
        self.fg = Color::DEFAULT_FG;
        self.bg = Color::DEFAULT_BG;
        self.attributes = TextAttributes::empty();
    }

    /// Parse the payload of SGR 38/48, accepting both the colon subparameter
    /// form (`38:2:…:r:g:b`, `38:5:n`) and the legacy semicolon form
    /// (`38;2;r;g;b`, `38;5;n`).
    fn extended_color<'a>(
        param_slice: &[u16],
        iter: &mut impl Iterator<Item = &'a [u16]>,
    ) -> Option<Color> {
        if param_slice.len() > 1 {
            // Colon form: everything in one slice. A six-element form
            // carries a color-space identifier before the channels.
            match *param_slice.get(1)? {
                2 => {
                    let offset = if param_slice.len() >= 6 { 3 } else { 2 };
                    let r = *param_slice.get(offset)? as u8;
                    let g = *param_slice.get(offset + 1)? as u8;
                    let b = *param_slice.get(offset + 2)? as u8;
                    Some(Color::Rgb(r, g, b))
                }
                5 => {
                    let index = *param_slice.get(2)?;
                    Some(Color::Indexed(index.min(255)))
                }
                _ => None,
            }
        } else {
            // Semicolon form: the mode and channels arrive as separate params
            match *iter.next()?.first()? {
                2 => {
                    let r = *iter.next()?.first()? as u8;
                    let g = *iter.next()?.first()? as u8;
                    let b = *iter.next()?.first()? as u8;
                    Some(Color::Rgb(r, g, b))
                }
                5 => {
                    let index = *iter.next()?.first()?;
                    Some(Color::Indexed(index.min(255)))
                }
                _ => None,
            }
        }
    }
}
