//! Mouse tracking: protocol modes and event reporting
//!
//! The emulator only stores which tracking mode and encoding the
//! application selected (DECSET 9/1000/1002/1003 and 1006); turning a
//! host-side pointer event into the byte report the application expects
//! happens here.

/// Mouse tracking mode selected by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseMode {
    /// No tracking.
    #[default]
    Off,
    /// X10 compatibility: press events only (DECSET 9).
    X10,
    /// Press and release (DECSET 1000).
    Normal,
    /// Press, release, and motion while a button is held (DECSET 1002).
    ButtonEvent,
    /// All motion (DECSET 1003).
    AnyEvent,
}

/// Coordinate encoding for mouse reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseEncoding {
    /// Legacy X11 single-byte coordinates, limited to column/row 223.
    #[default]
    Default,
    /// SGR extended encoding (DECSET 1006), unlimited coordinates.
    Sgr,
}

/// Button involved in a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    WheelUp,
    WheelDown,
    /// Motion with no button held.
    None,
}

impl MouseButton {
    fn code(self) -> u8 {
        match self {
            MouseButton::Left => 0,
            MouseButton::Middle => 1,
            MouseButton::Right => 2,
            MouseButton::WheelUp => 64,
            MouseButton::WheelDown => 65,
            MouseButton::None => 3,
        }
    }
}

/// One pointer event in screen cell coordinates (0-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub button: MouseButton,
    pub column: usize,
    pub row: usize,
    /// False for a release event.
    pub pressed: bool,
    /// True for movement rather than a button transition.
    pub motion: bool,
    /// Modifier bits: 1 shift, 2 alt, 4 ctrl.
    pub modifiers: u8,
}

impl MouseEvent {
    pub fn press(button: MouseButton, column: usize, row: usize) -> Self {
        Self {
            button,
            column,
            row,
            pressed: true,
            motion: false,
            modifiers: 0,
        }
    }

    pub fn release(button: MouseButton, column: usize, row: usize) -> Self {
        Self {
            button,
            column,
            row,
            pressed: false,
            motion: false,
            modifiers: 0,
        }
    }

    pub fn motion(button: MouseButton, column: usize, row: usize) -> Self {
        Self {
            button,
            column,
            row,
            pressed: true,
            motion: true,
            modifiers: 0,
        }
    }

    fn button_code(&self) -> u8 {
        let mut code = self.button.code();
        code |= self.modifiers << 2;
        if self.motion {
            code += 32;
        }
        code
    }

    /// Encode for the wire, or `None` when the active mode does not
    /// report this kind of event.
    pub fn encode(&self, mode: MouseMode, encoding: MouseEncoding) -> Option<Vec<u8>> {
        let wanted = match mode {
            MouseMode::Off => false,
            MouseMode::X10 => self.pressed && !self.motion,
            MouseMode::Normal => !self.motion,
            MouseMode::ButtonEvent => !self.motion || self.button != MouseButton::None,
            MouseMode::AnyEvent => true,
        };
        if !wanted {
            return None;
        }
        Some(match encoding {
            MouseEncoding::Sgr => self.encode_sgr(),
            MouseEncoding::Default => self.encode_default(),
        })
    }

    fn encode_sgr(&self) -> Vec<u8> {
        let terminator = if self.pressed { 'M' } else { 'm' };
        format!(
            "\x1b[<{};{};{}{}",
            self.button_code(),
            self.column + 1,
            self.row + 1,
            terminator
        )
        .into_bytes()
    }

    fn encode_default(&self) -> Vec<u8> {
        // Releases lose button identity in the legacy encoding.
        let code = if self.pressed {
            self.button_code()
        } else {
            (3 | (self.modifiers << 2)) + if self.motion { 32 } else { 0 }
        };
        vec![
            0x1b,
            b'[',
            b'M',
            32 + code,
            32 + (self.column + 1).min(223) as u8,
            32 + (self.row + 1).min(223) as u8,
        ]
    }
}
