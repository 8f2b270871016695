//! Character set designation (SCS) support
//!
//! Only the two sets real programs still select are implemented: US-ASCII
//! and the DEC special graphics (line drawing) set. Translation happens at
//! print time; stored cells contain the translated code points.

/// Map a code point through the DEC special graphics set (`ESC ( 0`).
///
/// Code points outside the remapped `_`..`~` range pass through unchanged.
pub(crate) fn graphics_char(c: char) -> char {
    match c {
        '_' => ' ',
        '`' => '\u{25c6}', // diamond
        '0' => '\u{2588}', // solid block
        'a' => '\u{2592}', // checker board
        'b' => '\u{2409}', // HT symbol
        'c' => '\u{240c}', // FF symbol
        'd' => '\u{240d}', // CR symbol
        'e' => '\u{240a}', // LF symbol
        'f' => '\u{00b0}', // degree
        'g' => '\u{00b1}', // plus/minus
        'h' => '\u{2424}', // NL symbol
        'i' => '\u{240b}', // VT symbol
        'j' => '\u{2518}',
        'k' => '\u{2510}',
        'l' => '\u{250c}',
        'm' => '\u{2514}',
        'n' => '\u{253c}',
        'o' => '\u{23ba}',
        'p' => '\u{23bb}',
        'q' => '\u{2500}',
        'r' => '\u{23bc}',
        's' => '\u{23bd}',
        't' => '\u{251c}',
        'u' => '\u{2524}',
        'v' => '\u{2534}',
        'w' => '\u{252c}',
        'x' => '\u{2502}',
        'y' => '\u{2264}',
        'z' => '\u{2265}',
        '{' => '\u{03c0}', // pi
        '|' => '\u{2260}', // not equal
        '}' => '\u{00a3}', // pound sign
        '~' => '\u{00b7}', // middle dot
        _ => c,
    }
}
