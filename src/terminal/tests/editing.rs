// Line, character, and column editing tests
use crate::terminal::*;

fn filled(term: &mut Terminal, rows: usize) {
    for row in 0..rows {
        term.process(format!("\x1b[{};1HRow{:02}", row + 1, row).as_bytes());
    }
}

#[test]
fn test_insert_lines() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 5);
    term.process(b"\x1b[2;1H\x1b[2L");

    assert_eq!(term.screen().row_text(1).trim_end(), "");
    assert_eq!(term.screen().row_text(2).trim_end(), "");
    // Old row 1 content moved down by two
    assert_eq!(term.screen().row_text(3).trim_end(), "Row01");
    assert_eq!(term.screen().row_text(0).trim_end(), "Row00");
}

#[test]
fn test_delete_lines() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 5);
    term.process(b"\x1b[2;1H\x1b[2M");

    assert_eq!(term.screen().row_text(1).trim_end(), "Row03");
    assert_eq!(term.screen().row_text(2).trim_end(), "Row04");
    assert_eq!(term.screen().row_text(3).trim_end(), "");
}

#[test]
fn test_il_dl_confined_to_scroll_region() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 10);
    term.process(b"\x1b[3;6r");
    // Insert inside the region must not move rows past its bottom
    term.process(b"\x1b[3;1H\x1b[1L");
    assert_eq!(term.screen().row_text(2).trim_end(), "");
    assert_eq!(term.screen().row_text(3).trim_end(), "Row02");
    // Row below the region is untouched
    assert_eq!(term.screen().row_text(6).trim_end(), "Row06");
}

#[test]
fn test_il_outside_region_ignored() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 10);
    term.process(b"\x1b[3;6r\x1b[8;1H\x1b[5L");
    // Cursor below the region: IL does nothing
    assert_eq!(term.screen().row_text(7).trim_end(), "Row07");
}

#[test]
fn test_insert_chars() {
    let mut term = Terminal::new(80, 24);
    term.process(b"abcdef\x1b[1;3H\x1b[2@");
    assert_eq!(term.screen().row_text(0).trim_end(), "ab  cdef");
}

#[test]
fn test_insert_chars_drops_overflow() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789\x1b[1;5H\x1b[3@");
    // Shifted-out characters fall off the right edge
    assert_eq!(term.screen().row_text(0), "0123   456");
}

#[test]
fn test_delete_chars() {
    let mut term = Terminal::new(80, 24);
    term.process(b"abcdef\x1b[1;3H\x1b[2P");
    assert_eq!(term.screen().row_text(0).trim_end(), "abef");
}

#[test]
fn test_delete_more_chars_than_remain() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789\x1b[1;5H\x1b[99P");
    assert_eq!(term.screen().row_text(0).trim_end(), "0123");
}

#[test]
fn test_erase_chars() {
    let mut term = Terminal::new(80, 24);
    term.process(b"abcdef\x1b[1;2H\x1b[3X");
    assert_eq!(term.screen().row_text(0).trim_end(), "a   ef");
    // ECH does not move the cursor
    assert_eq!(term.cursor_column(), 1);
}

#[test]
fn test_repeat_preceding_character() {
    let mut term = Terminal::new(80, 24);
    term.process(b"ab\x1b[3b");
    assert_eq!(term.screen().row_text(0).trim_end(), "abbbb");
}

#[test]
fn test_repeat_without_preceding_print_ignored() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[5b");
    assert_eq!(term.screen().row_text(0).trim_end(), "");
}

#[test]
fn test_repeat_wraps_like_prints() {
    let mut term = Terminal::new(10, 24);
    term.process(b"0123456789");
    term.process(b"a\x1b[2b");
    assert_eq!(term.screen().row_text(1).trim_end(), "aaa");
}

#[test]
fn test_erase_display_below() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 5);
    term.process(b"\x1b[2;3H\x1b[0J");
    assert_eq!(term.screen().row_text(0).trim_end(), "Row00");
    // Cursor row is cleared from the cursor on
    assert_eq!(term.screen().row_text(1).trim_end(), "Ro");
    assert_eq!(term.screen().row_text(2).trim_end(), "");
    assert_eq!(term.screen().row_text(4).trim_end(), "");
}

#[test]
fn test_erase_display_above() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 5);
    term.process(b"\x1b[2;3H\x1b[1J");
    assert_eq!(term.screen().row_text(0).trim_end(), "");
    // Cursor row is cleared up to and including the cursor
    assert_eq!(term.screen().row_text(1).trim_end(), "   01");
    assert_eq!(term.screen().row_text(2).trim_end(), "Row02");
}

#[test]
fn test_erase_display_all() {
    let mut term = Terminal::new(80, 24);
    filled(&mut term, 5);
    term.process(b"\x1b[2J");
    for row in 0..5 {
        assert_eq!(term.screen().row_text(row).trim_end(), "");
    }
    // Cursor does not move
    assert_eq!(term.cursor_row(), 4);
}

#[test]
fn test_erase_line_variants() {
    let mut term = Terminal::new(80, 24);
    term.process(b"abcdefgh\x1b[1;4H\x1b[0K");
    assert_eq!(term.screen().row_text(0).trim_end(), "abc");

    term.process(b"\rabcdefgh\x1b[1;4H\x1b[1K");
    assert_eq!(term.screen().row_text(0).trim_end(), "    efgh");

    term.process(b"\x1b[2K");
    assert_eq!(term.screen().row_text(0).trim_end(), "");
}

#[test]
fn test_selective_erase_preserves_protected() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[1\"qSAFE\x1b[0\"q gone");
    term.process(b"\x1b[?2J");
    assert_eq!(term.screen().row_text(0).trim_end(), "SAFE");
}

#[test]
fn test_selective_erase_line_preserves_protected() {
    let mut term = Terminal::new(80, 24);
    term.process(b"plain \x1b[1\"qkeep\x1b[0\"q tail");
    term.process(b"\x1b[1;1H\x1b[?2K");
    assert_eq!(term.screen().row_text(0).trim_end(), "      keep");
}

#[test]
fn test_plain_erase_removes_protected() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[1\"qSAFE\x1b[0\"q");
    term.process(b"\x1b[2J");
    assert_eq!(term.screen().row_text(0).trim_end(), "");
}

#[test]
fn test_ech_ignores_protection() {
    let mut term = Terminal::new(80, 24);
    term.process(b"\x1b[1\"qSAFE\x1b[0\"q\x1b[1;1H\x1b[4X");
    assert_eq!(term.screen().row_text(0).trim_end(), "");
}

#[test]
fn test_insert_columns() {
    let mut term = Terminal::new(10, 4);
    filled(&mut term, 4);
    term.process(b"\x1b[1;2H\x1b['}");
    // One blank column inserted at column 2 in every region row
    assert_eq!(term.screen().row_text(0).trim_end(), "R ow00");
    assert_eq!(term.screen().row_text(3).trim_end(), "R ow03");
}

#[test]
fn test_delete_columns() {
    let mut term = Terminal::new(10, 4);
    filled(&mut term, 4);
    term.process(b"\x1b[1;2H\x1b[2'~");
    assert_eq!(term.screen().row_text(0).trim_end(), "R00");
    assert_eq!(term.screen().row_text(3).trim_end(), "R03");
}

#[test]
fn test_column_edits_respect_region() {
    let mut term = Terminal::new(10, 6);
    filled(&mut term, 6);
    term.process(b"\x1b[2;4r\x1b[2;2H\x1b['}");
    // Rows outside the region keep their text
    assert_eq!(term.screen().row_text(0).trim_end(), "Row00");
    assert_eq!(term.screen().row_text(1).trim_end(), "R ow01");
    assert_eq!(term.screen().row_text(4).trim_end(), "Row04");
}
