//! Opt-in diagnostic logging
//!
//! Gated by the `VTGRID_DEBUG` environment variable (`off`, `error`, `warn`,
//! `info`, `debug`, `trace`, or a digit 0-5). The variable is read once; when
//! logging is off the per-call cost is a single comparison. Output goes to
//! stderr so it never interleaves with reply bytes headed to the child.

use std::sync::OnceLock;

/// Logging verbosity, ordered so that `level <= active` enables a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DebugLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

static ACTIVE_LEVEL: OnceLock<DebugLevel> = OnceLock::new();

fn active_level() -> DebugLevel {
    *ACTIVE_LEVEL.get_or_init(|| match std::env::var("VTGRID_DEBUG") {
        Ok(value) => match value.trim().to_ascii_lowercase().as_str() {
            "" | "0" | "off" | "false" => DebugLevel::Off,
            "1" | "error" => DebugLevel::Error,
            "2" | "warn" => DebugLevel::Warn,
            "3" | "info" => DebugLevel::Info,
            "4" | "debug" | "true" => DebugLevel::Debug,
            "5" | "trace" => DebugLevel::Trace,
            _ => DebugLevel::Debug,
        },
        Err(_) => DebugLevel::Off,
    })
}

/// Whether a message at `level` would be emitted.
pub fn enabled(level: DebugLevel) -> bool {
    level != DebugLevel::Off && level <= active_level()
}

/// Emit one category-tagged line.
pub fn log(level: DebugLevel, category: &str, message: &str) {
    if enabled(level) {
        eprintln!("[vtgrid:{category}] {message}");
    }
}

/// Log a chunk of raw input bytes (trace level, escaped).
pub fn log_vt_input(data: &[u8]) {
    if enabled(DebugLevel::Trace) {
        let printable: String = data
            .iter()
            .map(|&b| match b {
                0x1b => "\\e".to_string(),
                0x20..=0x7e => (b as char).to_string(),
                _ => format!("\\x{b:02x}"),
            })
            .collect();
        log(
            DebugLevel::Trace,
            "INPUT",
            &format!("{} bytes: {}", data.len(), printable),
        );
    }
}

/// Log a printable character landing on the grid.
pub fn log_print(c: char, col: usize, row: usize) {
    if enabled(DebugLevel::Trace) {
        log(
            DebugLevel::Trace,
            "PRINT",
            &format!("{c:?} at ({row},{col})"),
        );
    }
}

/// Log a C0 control dispatch.
pub fn log_execute(byte: u8) {
    if enabled(DebugLevel::Trace) {
        log(DebugLevel::Trace, "CTRL", &format!("0x{byte:02x}"));
    }
}

/// Log a CSI dispatch with its collected parameters.
pub fn log_csi_dispatch(params: &[u16], intermediates: &[u8], action: char) {
    if enabled(DebugLevel::Debug) {
        log(
            DebugLevel::Debug,
            "CSI",
            &format!(
                "params={params:?} intermediates={:?} action={action:?}",
                intermediates
                    .iter()
                    .map(|&b| b as char)
                    .collect::<String>()
            ),
        );
    }
}

/// Log an OSC dispatch (first parameter identifies the command).
pub fn log_osc_dispatch(params: &[&[u8]]) {
    if enabled(DebugLevel::Debug) {
        let command = params
            .first()
            .map(|p| String::from_utf8_lossy(p).into_owned())
            .unwrap_or_default();
        log(
            DebugLevel::Debug,
            "OSC",
            &format!("command={command} parts={}", params.len()),
        );
    }
}

/// Log a two-character escape dispatch.
pub fn log_esc_dispatch(intermediates: &[u8], byte: char) {
    if enabled(DebugLevel::Debug) {
        log(
            DebugLevel::Debug,
            "ESC",
            &format!(
                "intermediates={:?} final={byte:?}",
                intermediates
                    .iter()
                    .map(|&b| b as char)
                    .collect::<String>()
            ),
        );
    }
}

/// Log a scroll operation within margins.
pub fn log_scroll(label: &str, top: usize, bottom: usize, lines: usize) {
    if enabled(DebugLevel::Debug) {
        log(
            DebugLevel::Debug,
            "SCROLL",
            &format!("{label}: region {top}..{bottom} by {lines}"),
        );
    }
}

/// Log a main/alternate screen switch.
pub fn log_screen_switch(alt: bool, label: &str) {
    if enabled(DebugLevel::Debug) {
        log(
            DebugLevel::Debug,
            "SCREEN",
            &format!("{label}: alt={alt}"),
        );
    }
}
