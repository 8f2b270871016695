//! Packed per-cell style
//!
//! Every column of every row (including scrollback) stores one [`Style`]:
//! a `u64` packing foreground color, background color, and the attribute
//! bitmask. Layout:
//!
//! ```text
//! bits 0..=8    attribute flags (TextAttributes)
//! bit  9        foreground-is-RGB marker
//! bit  10       background-is-RGB marker
//! bits 16..=39  background payload (palette index, or 0xRRGGBB)
//! bits 40..=63  foreground payload (palette index, or 0xRRGGBB)
//! ```
//!
//! Encoding and decoding are constant-time and lossless; an invalid palette
//! index is clamped to the default foreground/background index instead of
//! failing, so the escape-sequence layer never has to handle a style error.

use crate::color::{Color, BACKGROUND_INDEX, CURSOR_INDEX, FOREGROUND_INDEX};
use bitflags::bitflags;

bitflags! {
    /// Text attribute bits carried by a cell style.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct TextAttributes: u16 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
        const STRIKETHROUGH = 1 << 3;
        const BLINK = 1 << 4;
        const INVERSE = 1 << 5;
        const INVISIBLE = 1 << 6;
        const DIM = 1 << 7;
        /// DECSCA protection: selective erase (DECSED/DECSEL) skips the cell.
        const PROTECTED = 1 << 8;
    }
}

/// One cell's packed style.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style(u64);

const FG_RGB: u64 = 1 << 9;
const BG_RGB: u64 = 1 << 10;
const ATTR_MASK: u64 = 0x1ff;
const COLOR_MASK: u64 = 0xff_ffff;
const BG_SHIFT: u32 = 16;
const FG_SHIFT: u32 = 40;

fn color_payload(color: Color, default_index: u16) -> (u64, bool) {
    match color {
        Color::Indexed(index) => {
            let index = if index > CURSOR_INDEX {
                default_index
            } else {
                index
            };
            (u64::from(index), false)
        }
        Color::Rgb(r, g, b) => {
            let packed = (u64::from(r) << 16) | (u64::from(g) << 8) | u64::from(b);
            (packed, true)
        }
    }
}

fn payload_color(payload: u64, rgb: bool) -> Color {
    if rgb {
        Color::Rgb(
            ((payload >> 16) & 0xff) as u8,
            ((payload >> 8) & 0xff) as u8,
            (payload & 0xff) as u8,
        )
    } else {
        Color::Indexed((payload as u16).min(CURSOR_INDEX))
    }
}

impl Style {
    /// Pack a foreground, background, and attribute set into one value.
    pub fn encode(fg: Color, bg: Color, attributes: TextAttributes) -> Style {
        let (fg_payload, fg_rgb) = color_payload(fg, FOREGROUND_INDEX);
        let (bg_payload, bg_rgb) = color_payload(bg, BACKGROUND_INDEX);
        let mut packed = u64::from(attributes.bits()) & ATTR_MASK;
        if fg_rgb {
            packed |= FG_RGB;
        }
        if bg_rgb {
            packed |= BG_RGB;
        }
        packed |= (bg_payload & COLOR_MASK) << BG_SHIFT;
        packed |= (fg_payload & COLOR_MASK) << FG_SHIFT;
        Style(packed)
    }

    /// The decoded foreground color.
    pub fn foreground(self) -> Color {
        payload_color((self.0 >> FG_SHIFT) & COLOR_MASK, self.0 & FG_RGB != 0)
    }

    /// The decoded background color.
    pub fn background(self) -> Color {
        payload_color((self.0 >> BG_SHIFT) & COLOR_MASK, self.0 & BG_RGB != 0)
    }

    /// The decoded attribute set.
    pub fn attributes(self) -> TextAttributes {
        TextAttributes::from_bits_truncate((self.0 & ATTR_MASK) as u16)
    }

    /// The raw packed value, for bulk storage or interchange.
    pub fn raw(self) -> u64 {
        self.0
    }

    /// Rebuild a style from a previously obtained [`raw`](Style::raw) value.
    pub fn from_raw(raw: u64) -> Style {
        Style(raw)
    }
}

impl Default for Style {
    /// Default foreground on default background, no attributes. Distinct
    /// from any explicit palette color, including color 0.
    fn default() -> Style {
        Style::encode(
            Color::Indexed(FOREGROUND_INDEX),
            Color::Indexed(BACKGROUND_INDEX),
            TextAttributes::empty(),
        )
    }
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Style")
            .field("fg", &self.foreground())
            .field("bg", &self.background())
            .field("attrs", &self.attributes())
            .finish()
    }
}
