// Mode-related terminal tests
use crate::mouse::{MouseEncoding, MouseMode};
use crate::terminal::*;

#[test]
fn test_insert_mode_shifts_text() {
    let mut term = Terminal::new(80, 24);
    term.process(b"abcdef\x1b[1;3H\x1b[4hXY\x1b[4l");
    assert_eq!(term.screen().row_text(0).trim_end(), "abXYcdef");
    // Back to replace mode
    term.process(b"\x1b[1;1HZ");
    assert_eq!(term.screen().row_text(0).trim_end(), "ZbXYcdef");
}

#[test]
fn test_automatic_newline_mode() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[20habc\ndef\x1b[20l");
    // LNM makes LF imply CR
    assert_eq!(term.screen().row_text(1).trim_end(), "def");
}

#[test]
fn test_alt_screen_isolation() {
    let mut term = Terminal::new(80, 24);
    term.process(b"primary");
    term.process(b"\x1b[?1049h");
    assert!(term.is_alt_screen_active());
    // 1049 starts with a cleared alternate screen
    assert_eq!(term.visible_text(), "");

    term.process(b"alternate");
    assert!(term.visible_text().contains("alternate"));

    term.process(b"\x1b[?1049l");
    assert!(!term.is_alt_screen_active());
    assert!(term.visible_text().contains("primary"));
    assert!(!term.visible_text().contains("alternate"));
}

#[test]
fn test_alt_screen_1049_restores_cursor() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[7;11H\x1b[?1049h\x1b[H\x1b[?1049l");
    assert_eq!((term.cursor_row(), term.cursor_column()), (6, 10));
}

#[test]
fn test_alt_screen_47_keeps_content() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?47hstale\x1b[?47l\x1b[?47h");
    // Plain 47 neither clears on entry nor on re-entry
    assert!(term.visible_text().contains("stale"));
}

#[test]
fn test_alt_screen_1047_clears_on_leave() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?1047hgone\x1b[?1047l\x1b[?1047h");
    assert_eq!(term.visible_text(), "");
}

#[test]
fn test_repeated_alt_switch_is_idempotent() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?1049h\x1b[?1049h");
    assert!(term.is_alt_screen_active());
    term.process(b"\x1b[?1049l\x1b[?1049l");
    assert!(!term.is_alt_screen_active());
}

#[test]
fn test_1048_saves_and_restores_cursor() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[9;13H\x1b[?1048h\x1b[H\x1b[?1048l");
    assert_eq!((term.cursor_row(), term.cursor_column()), (8, 12));
}

#[test]
fn test_cursor_visibility() {
    let mut term = Terminal::new(80, 24);
    assert!(term.cursor_visible());
    term.process(b"\x1b[?25l");
    assert!(!term.cursor_visible());
    term.process(b"\x1b[?25h");
    assert!(term.cursor_visible());
}

#[test]
fn test_cursor_blink_mode() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?12l");
    assert!(!term.cursor_blinking());
    term.process(b"\x1b[?12h");
    assert!(term.cursor_blinking());
}

#[test]
fn test_mouse_modes() {
    let mut term = Terminal::new(80, 24);
    assert_eq!(term.mouse_mode(), MouseMode::Off);

    term.process(b"\x1b[?9h");
    assert_eq!(term.mouse_mode(), MouseMode::X10);
    term.process(b"\x1b[?1000h");
    assert_eq!(term.mouse_mode(), MouseMode::Normal);
    term.process(b"\x1b[?1002h");
    assert_eq!(term.mouse_mode(), MouseMode::ButtonEvent);
    term.process(b"\x1b[?1003h");
    assert_eq!(term.mouse_mode(), MouseMode::AnyEvent);
    term.process(b"\x1b[?1003l");
    assert_eq!(term.mouse_mode(), MouseMode::Off);
}

#[test]
fn test_sgr_mouse_encoding() {
    let mut term = Terminal::new(80, 24);
    assert_eq!(term.mouse_encoding(), MouseEncoding::Default);
    term.process(b"\x1b[?1006h");
    assert_eq!(term.mouse_encoding(), MouseEncoding::Sgr);
    term.process(b"\x1b[?1006l");
    assert_eq!(term.mouse_encoding(), MouseEncoding::Default);
}

#[test]
fn test_bracketed_paste_flag() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?2004h");
    assert!(term.bracketed_paste());
    term.process(b"\x1b[?2004l");
    assert!(!term.bracketed_paste());
}

#[test]
fn test_focus_tracking_flag() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?1004h");
    assert!(term.focus_tracking());
}

#[test]
fn test_application_modes() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?1h\x1b[?66h");
    assert!(term.application_cursor_keys());
    assert!(term.application_keypad());
    term.process(b"\x1b[?1l\x1b[?66l");
    assert!(!term.application_cursor_keys());
    assert!(!term.application_keypad());
}

#[test]
fn test_reverse_video_flag() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?5h");
    assert!(term.is_reverse_video());
    term.process(b"\x1b[?5l");
    assert!(!term.is_reverse_video());
}

#[test]
fn test_multiple_modes_in_one_sequence() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?25;2004;1004h");
    assert!(term.cursor_visible());
    assert!(term.bracketed_paste());
    assert!(term.focus_tracking());
}

#[test]
fn test_xtsave_xtrestore() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?2004h\x1b[?2004s");
    term.process(b"\x1b[?2004l");
    assert!(!term.bracketed_paste());
    term.process(b"\x1b[?2004r");
    assert!(term.bracketed_paste());
}

#[test]
fn test_xtrestore_without_save_is_noop() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?2004h\x1b[?2004r");
    assert!(term.bracketed_paste());
}

#[test]
fn test_reverse_wraparound_backspace() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789X");
    // Cursor wrapped to row 1; with mode 45 set, BS crosses back up
    assert_eq!(term.cursor_row(), 1);
    term.process(b"\x1b[?45h\x08\x08");
    assert_eq!((term.cursor_row(), term.cursor_column()), (0, 9));
}

#[test]
fn test_backspace_stays_put_without_reverse_wraparound() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789X\x1b[1G\x08");
    assert_eq!((term.cursor_row(), term.cursor_column()), (1, 0));
}

#[test]
fn test_deccolm_requires_enable() {
    let mut term = Terminal::new(80, 24);
    term.process(b"content\x1b[?3h");
    // Without DECSET 40 the clear/home side effects are suppressed
    assert_eq!(term.screen().row_text(0).trim_end(), "content");

    term.process(b"\x1b[?40h\x1b[5;10H\x1b[?3h");
    assert_eq!(term.screen().row_text(0).trim_end(), "");
    assert_eq!((term.cursor_row(), term.cursor_column()), (0, 0));
}

#[test]
fn test_deccolm_resets_margins() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[?40h\x1b[5;20r\x1b[?3l");
    assert_eq!(term.scroll_region_top, 0);
    assert_eq!(term.scroll_region_bottom, 24);
}

#[test]
fn test_decstr_resets_modes_keeps_content() {
    let mut term = Terminal::new(80, 24);
    term.process(b"keep me\x1b[?6h\x1b[?25l\x1b[4h\x1b[5;20r\x1b[31m");
    term.process(b"\x1b[!p");

    assert_eq!(term.screen().row_text(0).trim_end(), "keep me");
    assert!(term.cursor_visible());
    assert!(!term.insert_mode);
    assert!(!term.origin_mode);
    assert_eq!(term.scroll_region_top, 0);
    assert_eq!(term.scroll_region_bottom, 24);
    // Pending style is back to default
    term.process(b"\x1b[1;10HX");
    use crate::color::Color;
    assert_eq!(term.screen().style_at(0, 9).foreground(), Color::DEFAULT_FG);
}

#[test]
fn test_ris_clears_everything() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b]2;titled\x07wiped\x1b[?1049h");
    term.process(b"\x1bc");

    assert!(!term.is_alt_screen_active());
    assert_eq!(term.visible_text(), "");
    assert_eq!(term.transcript_text(), "");
    assert_eq!((term.cursor_row(), term.cursor_column()), (0, 0));
}

#[test]
fn test_ris_restores_palette() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b]4;1;#123456\x07\x1bc");
    assert_eq!(term.palette().color(1), (0xcd, 0x00, 0x00));
}
