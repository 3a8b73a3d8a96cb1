//! Unit tests for named codes

use ansi_sgr::codes::{lookup_code, NAMED_CODES};
use ansi_sgr::*;

#[test]
fn constants_have_their_documented_values() {
    let expected: &[(&str, u8)] = &[
        (RESET, 0),
        (BOLD, 1),
        (FAINT, 2),
        (ITALIC, 3),
        (UNDERLINE, 4),
        (BLINK_SLOW, 5),
        (BLINK_RAPID, 6),
        (REVERSE_VIDEO, 7),
        (CONCEAL, 8),
        (CROSSED_OUT, 9),
        (PRIMARY_FONT, 10),
        (FRAKTUR, 20),
        (DOUBLY_UNDERLINE, 21),
        (NORMAL_COLOR_OR_INTENSITY, 22),
        (REVEAL, 28),
        (FG_BLACK, 30),
        (FG_WHITE, 37),
        (FG_DEFAULT, 39),
        (BG_BLACK, 40),
        (BG_DEFAULT, 49),
        (FRAMED, 51),
        (OVERLINED, 53),
        (IDEOGRAM_UNDERLINE, 60),
        (IDEOGRAM_ATTRIBUTES_OFF, 65),
        (FG_BRIGHT_BLACK, 90),
        (FG_BRIGHT_WHITE, 97),
        (BG_BRIGHT_BLACK, 100),
        (BG_BRIGHT_WHITE, 107),
    ];
    for (constant, code) in expected {
        assert_eq!(*constant, build_code([*code]), "code {}", code);
    }
}

#[test]
fn table_sequences_match_builder() {
    for code in NAMED_CODES {
        assert_eq!(code.sequence, build_code([code.code]), "{}", code.name);
    }
}

#[test]
fn code_26_is_not_named() {
    for code in [26, 38, 48] {
        assert!(NAMED_CODES.iter().all(|c| c.code != code), "code {}", code);
    }
}

#[test]
fn lookup_is_forgiving_about_spelling() {
    for name in ["fg-bright-red", "FgBrightRed", "fg_bright_red", "FG BRIGHT RED"] {
        assert_eq!(lookup_code(name).map(|c| c.code), Some(91), "{}", name);
    }
    assert!(lookup_code("").is_none());
    assert!(lookup_code("fg-orange").is_none());
}
