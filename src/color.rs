//! Colors and the session palette
//!
//! A cell references color either by palette index (0-258) or as direct
//! truecolor RGB. The palette holds the 16 ANSI colors, the 6x6x6 cube,
//! the grayscale ramp, and three special slots: default foreground,
//! default background, and cursor. OSC sequences mutate palette entries;
//! a full reset (RIS) restores the base theme.

use serde::{Deserialize, Serialize};

/// Palette slot for the default foreground color.
pub const FOREGROUND_INDEX: u16 = 256;
/// Palette slot for the default background color.
pub const BACKGROUND_INDEX: u16 = 257;
/// Palette slot for the cursor color.
pub const CURSOR_INDEX: u16 = 258;
/// Total number of indexed palette slots.
pub const NUM_INDEXED_COLORS: usize = 259;

const DEFAULT_FOREGROUND: (u8, u8, u8) = (0xe5, 0xe5, 0xe5);
const DEFAULT_BACKGROUND: (u8, u8, u8) = (0x14, 0x19, 0x1e);
const DEFAULT_CURSOR: (u8, u8, u8) = (0xe5, 0xe5, 0xe5);

/// The 16 base ANSI colors (xterm defaults).
const ANSI_COLORS: [(u8, u8, u8); 16] = [
    (0x00, 0x00, 0x00), // black
    (0xcd, 0x00, 0x00), // red
    (0x00, 0xcd, 0x00), // green
    (0xcd, 0xcd, 0x00), // yellow
    (0x00, 0x00, 0xee), // blue
    (0xcd, 0x00, 0xcd), // magenta
    (0x00, 0xcd, 0xcd), // cyan
    (0xe5, 0xe5, 0xe5), // white
    (0x7f, 0x7f, 0x7f), // bright black
    (0xff, 0x00, 0x00), // bright red
    (0x00, 0xff, 0x00), // bright green
    (0xff, 0xff, 0x00), // bright yellow
    (0x5c, 0x5c, 0xff), // bright blue
    (0xff, 0x00, 0xff), // bright magenta
    (0x00, 0xff, 0xff), // bright cyan
    (0xff, 0xff, 0xff), // bright white
];

/// A cell color reference: palette slot or direct RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// Palette index 0-258 (256+ are the default/cursor slots).
    Indexed(u16),
    /// 24-bit truecolor.
    Rgb(u8, u8, u8),
}

impl Color {
    /// The default foreground reference.
    pub const DEFAULT_FG: Color = Color::Indexed(FOREGROUND_INDEX);
    /// The default background reference.
    pub const DEFAULT_BG: Color = Color::Indexed(BACKGROUND_INDEX);
}

/// The mutable 259-entry color table owned by one terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: [(u8, u8, u8); NUM_INDEXED_COLORS],
}

fn base_color(index: usize) -> (u8, u8, u8) {
    match index {
        0..=15 => ANSI_COLORS[index],
        16..=231 => {
            // 6x6x6 color cube; component levels 0, 95, 135, 175, 215, 255.
            let i = index - 16;
            let level = |v: usize| if v == 0 { 0 } else { (55 + v * 40) as u8 };
            (level(i / 36), level((i / 6) % 6), level(i % 6))
        }
        232..=255 => {
            let gray = (8 + (index - 232) * 10) as u8;
            (gray, gray, gray)
        }
        256 => DEFAULT_FOREGROUND,
        257 => DEFAULT_BACKGROUND,
        _ => DEFAULT_CURSOR,
    }
}

impl Palette {
    pub fn new() -> Palette {
        let mut colors = [(0, 0, 0); NUM_INDEXED_COLORS];
        for (index, slot) in colors.iter_mut().enumerate() {
            *slot = base_color(index);
        }
        Palette { colors }
    }

    /// The RGB value at a palette slot (out-of-range clamps to the last slot).
    pub fn color(&self, index: u16) -> (u8, u8, u8) {
        self.colors[(index as usize).min(NUM_INDEXED_COLORS - 1)]
    }

    pub fn set_color(&mut self, index: u16, rgb: (u8, u8, u8)) {
        if (index as usize) < NUM_INDEXED_COLORS {
            self.colors[index as usize] = rgb;
        }
    }

    /// Restore one slot to the base theme.
    pub fn reset_color(&mut self, index: u16) {
        if (index as usize) < NUM_INDEXED_COLORS {
            self.colors[index as usize] = base_color(index as usize);
        }
    }

    /// Restore every slot to the base theme.
    pub fn reset_all(&mut self) {
        for (index, slot) in self.colors.iter_mut().enumerate() {
            *slot = base_color(index);
        }
    }

    /// Resolve a cell color reference to concrete RGB.
    pub fn resolve(&self, color: Color) -> (u8, u8, u8) {
        match color {
            Color::Indexed(index) => self.color(index),
            Color::Rgb(r, g, b) => (r, g, b),
        }
    }

    pub fn foreground(&self) -> (u8, u8, u8) {
        self.color(FOREGROUND_INDEX)
    }

    pub fn background(&self) -> (u8, u8, u8) {
        self.color(BACKGROUND_INDEX)
    }

    pub fn cursor(&self) -> (u8, u8, u8) {
        self.color(CURSOR_INDEX)
    }

    /// Apply a host-supplied theme. Unparseable or missing entries leave
    /// the current value in place.
    pub fn apply_scheme(&mut self, scheme: &ColorScheme) {
        for (index, spec) in scheme.ansi.iter().enumerate().take(16) {
            if let Some(rgb) = parse_color_spec(spec) {
                self.colors[index] = rgb;
            }
        }
        if let Some(rgb) = parse_color_spec(&scheme.foreground) {
            self.colors[FOREGROUND_INDEX as usize] = rgb;
        }
        if let Some(rgb) = parse_color_spec(&scheme.background) {
            self.colors[BACKGROUND_INDEX as usize] = rgb;
        }
        if let Some(rgb) = parse_color_spec(&scheme.cursor) {
            self.colors[CURSOR_INDEX as usize] = rgb;
        }
    }
}

impl Default for Palette {
    fn default() -> Palette {
        Palette::new()
    }
}

/// A host-defined theme, typically deserialized from configuration.
/// Color values use the same specs OSC sequences accept (`#RRGGBB`,
/// `rgb:RR/GG/BB`). Empty strings are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    #[serde(default)]
    pub foreground: String,
    #[serde(default)]
    pub background: String,
    #[serde(default)]
    pub cursor: String,
    /// Up to 16 ANSI color overrides, index order.
    #[serde(default)]
    pub ansi: Vec<String>,
}

fn scale_component(digits: &str) -> Option<u8> {
    if digits.is_empty() || digits.len() > 4 {
        return None;
    }
    let value = u32::from_str_radix(digits, 16).ok()?;
    let max = (1u32 << (4 * digits.len() as u32)) - 1;
    // Scale an n-digit component onto 0-255 (X11 semantics).
    Some(((value * 255 + max / 2) / max) as u8)
}

/// Parse an X11/xterm color specification.
///
/// Accepted forms: `#RGB`, `#RRGGBB`, `#RRRGGGBBB`, `#RRRRGGGGBBBB`, and
/// `rgb:R/G/B` with 1-4 hex digits per component.
pub fn parse_color_spec(spec: &str) -> Option<(u8, u8, u8)> {
    let spec = spec.trim();
    if spec.is_empty() {
        return None;
    }

    if let Some(hex) = spec.strip_prefix('#') {
        if hex.len() % 3 != 0 || hex.is_empty() || hex.len() > 12 {
            return None;
        }
        let width = hex.len() / 3;
        let r = scale_component(&hex[..width])?;
        let g = scale_component(&hex[width..2 * width])?;
        let b = scale_component(&hex[2 * width..])?;
        return Some((r, g, b));
    }

    if let Some(body) = spec
        .strip_prefix("rgb:")
        .or_else(|| spec.strip_prefix("RGB:"))
    {
        let mut parts = body.split('/');
        let r = scale_component(parts.next()?)?;
        let g = scale_component(parts.next()?)?;
        let b = scale_component(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        return Some((r, g, b));
    }

    None
}
