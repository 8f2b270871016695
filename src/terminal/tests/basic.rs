// Basic printing and C0 control tests
use crate::terminal::*;

#[test]
fn test_terminal_creation() {
    let term = Terminal::new(80, 24);
    assert_eq!(term.columns(), 80);
    assert_eq!(term.rows(), 24);
    assert_eq!((term.cursor_row(), term.cursor_column()), (0, 0));
}

#[test]
fn test_degenerate_dimensions_clamped() {
    let term = Terminal::new(0, 0);
    assert_eq!(term.columns(), 1);
    assert_eq!(term.rows(), 1);
}

#[test]
fn test_write_simple_text() {
    let mut term = Terminal::new(80, 24);
    term.process(b"Hello");
    assert_eq!(term.screen().row_text(0).trim_end(), "Hello");
    assert_eq!(term.cursor_column(), 5);
}

#[test]
fn test_lf_without_cr_keeps_column() {
    let mut term = Terminal::new(80, 24);
    term.process(b"abc\ndef");
    assert_eq!(term.screen().row_text(0).trim_end(), "abc");
    // LF alone moves down without resetting the column
    assert_eq!(term.screen().row_text(1).trim_end(), "   def");
}

#[test]
fn test_crlf() {
    let mut term = Terminal::new(80, 24);
    term.process(b"one\r\ntwo");
    assert_eq!(term.screen().row_text(0).trim_end(), "one");
    assert_eq!(term.screen().row_text(1).trim_end(), "two");
}

#[test]
fn test_carriage_return_overwrites() {
    let mut term = Terminal::new(80, 24);
    term.process(b"aaaa\rbb");
    assert_eq!(term.screen().row_text(0).trim_end(), "bbaa");
}

#[test]
fn test_backspace_clamps_at_left_edge() {
    let mut term = Terminal::new(80, 24);
    term.process(b"a\x08\x08\x08b");
    // First BS moves onto 'a', further ones stop at column 0
    assert_eq!(term.screen().row_text(0).trim_end(), "b");
    assert_eq!(term.cursor_column(), 1);
}

#[test]
fn test_bell_raises_event() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x07");
    assert_eq!(term.drain_events(), vec![TerminalEvent::BellRang]);
    // Draining empties the queue
    assert!(term.drain_events().is_empty());
}

#[test]
fn test_vt_and_ff_act_as_line_feed() {
    let mut term = Terminal::new(80, 24);
    term.process(b"a\x0bb\x0cc");
    assert_eq!(term.screen().char_at(0, 0), 'a');
    assert_eq!(term.screen().char_at(1, 1), 'b');
    assert_eq!(term.screen().char_at(2, 2), 'c');
}

#[test]
fn test_nul_ignored() {
    let mut term = Terminal::new(80, 24);
    term.process(b"a\x00b");
    assert_eq!(term.screen().row_text(0).trim_end(), "ab");
}

#[test]
fn test_default_tab_stops() {
    let term = Terminal::new(80, 24);
    assert!(!term.tab_stops[0]);
    assert!(term.tab_stops[8]);
    assert!(term.tab_stops[16]);
    assert!(!term.tab_stops[1]);
}

#[test]
fn test_tab_advances_to_next_stop() {
    let mut term = Terminal::new(80, 24);
    term.process(b"a\tb");
    assert_eq!(term.cursor_column(), 9);
    assert_eq!(term.screen().char_at(0, 8), 'b');
}

#[test]
fn test_tab_clamps_at_last_column() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[1;79H\t\t");
    assert_eq!(term.cursor_column(), 79);
}

#[test]
fn test_clear_tab_stop_at_cursor() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[1;9H\x1b[0g");
    assert!(!term.tab_stops[8]);
    term.process(b"\x1b[1;1H\t");
    assert_eq!(term.cursor_column(), 16);
}

#[test]
fn test_clear_all_tab_stops() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[3g");
    assert!(term.tab_stops.iter().all(|&stop| !stop));
    term.process(b"\t");
    assert_eq!(term.cursor_column(), 79);
}

#[test]
fn test_autowrap_continues_on_next_row() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789AB");
    assert_eq!(term.screen().row_text(0), "0123456789");
    assert_eq!(term.screen().row_text(1).trim_end(), "AB");
    assert!(term.screen().is_line_wrapped(0));
    assert!(!term.screen().is_line_wrapped(1));
}

#[test]
fn test_wrap_is_deferred_until_next_print() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789");
    // Cursor holds at the last column until another printable arrives
    assert_eq!(term.cursor_row(), 0);
    assert_eq!(term.cursor_column(), 9);
    term.process(b"X");
    assert_eq!(term.cursor_row(), 1);
    assert_eq!(term.cursor_column(), 1);
}

#[test]
fn test_cr_cancels_pending_wrap() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789\rX");
    assert_eq!(term.screen().row_text(0), "X123456789");
    assert_eq!(term.cursor_row(), 0);
}

#[test]
fn test_autowrap_off_overwrites_last_column() {
    let mut term = Terminal::new(10, 24);
    term.process(b"\x1b[?7l0123456789XY");
    assert_eq!(term.screen().row_text(0), "012345678Y");
    assert_eq!(term.cursor_row(), 0);
    assert!(!term.screen().is_line_wrapped(0));
}

#[test]
fn test_visible_text_snapshot() {
    let mut term = Terminal::new(20, 5);
    term.process(b"first\r\nsecond");
    let text = term.visible_text();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "first");
    assert_eq!(lines[1], "second");
}
