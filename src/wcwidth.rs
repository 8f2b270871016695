//! Display-width lookup
//!
//! Answers how many terminal columns a code point occupies: 0 for
//! combining/zero-width marks, 1 for normal characters, 2 for wide ones
//! (CJK ideographs, fullwidth forms, most emoji). Pure lookup, no state.
//!
//! Width data comes from the `unicode-width` crate (UAX #11). Control
//! characters never reach the layout path - the state machine dispatches
//! them - so they measure 0 here rather than the crate's `None`.

use unicode_width::UnicodeWidthChar;

/// Display width of one code point: 0, 1, or 2.
pub fn width(code_point: char) -> usize {
    match code_point {
        // Zero-width characters the terminal must never advance over,
        // pinned explicitly: ZWSP, ZWNJ, ZWJ, LRM/RLM, BOM.
        '\u{200b}'..='\u{200f}' | '\u{feff}' => 0,
        _ => match code_point.width() {
            Some(w) => w.min(2),
            // C0/C1 controls and DEL.
            None => 0,
        },
    }
}

/// Whether the code point occupies two columns.
pub fn is_wide(code_point: char) -> bool {
    width(code_point) == 2
}

/// Whether the code point occupies no column of its own (combines into
/// the preceding cell).
pub fn is_zero_width(code_point: char) -> bool {
    width(code_point) == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascii_is_narrow() {
        assert_eq!(width('A'), 1);
        assert_eq!(width('z'), 1);
        assert_eq!(width(' '), 1);
        assert_eq!(width('~'), 1);
    }

    #[test]
    fn test_cjk_is_wide() {
        assert_eq!(width('\u{4e00}'), 2); // CJK ideograph
        assert_eq!(width('中'), 2);
        assert_eq!(width('日'), 2);
        assert_eq!(width('한'), 2);
    }

    #[test]
    fn test_fullwidth_forms_are_wide() {
        assert_eq!(width('！'), 2); // U+FF01
        assert_eq!(width('Ａ'), 2); // U+FF21
    }

    #[test]
    fn test_emoji_is_wide() {
        assert_eq!(width('😀'), 2); // U+1F600
        assert_eq!(width('🎉'), 2);
    }

    #[test]
    fn test_combining_marks_are_zero_width() {
        assert_eq!(width('\u{0301}'), 0); // combining acute accent
        assert_eq!(width('\u{0300}'), 0); // combining grave accent
        assert_eq!(width('\u{20d7}'), 0); // combining right arrow above
    }

    #[test]
    fn test_explicit_zero_width_set() {
        assert_eq!(width('\u{200b}'), 0); // ZWSP
        assert_eq!(width('\u{200c}'), 0); // ZWNJ
        assert_eq!(width('\u{200d}'), 0); // ZWJ
        assert_eq!(width('\u{feff}'), 0); // BOM
    }

    #[test]
    fn test_controls_measure_zero() {
        assert_eq!(width('\u{0000}'), 0);
        assert_eq!(width('\u{001b}'), 0);
        assert_eq!(width('\u{007f}'), 0);
        assert_eq!(width('\u{009b}'), 0);
    }

    #[test]
    fn test_predicates() {
        assert!(is_wide('中'));
        assert!(!is_wide('A'));
        assert!(is_zero_width('\u{0301}'));
        assert!(!is_zero_width('A'));
    }

    proptest! {
        #[test]
        fn prop_width_is_total_and_bounded(c: char) {
            let w = width(c);
            prop_assert!(w <= 2);
        }

        #[test]
        fn prop_width_is_pure(c: char) {
            prop_assert_eq!(width(c), width(c));
        }
    }
}
