//! Unit tests for the sequence builders

use ansi_sgr::{
    apply_modifiers, bg_from_hsl, bg_true_color, build_code, escape_visible, fg_from_hsl,
    fg_true_color, sgr, BOLD, FG_RED, RESET,
};

use crate::helpers::split_sequences;

#[test]
fn build_code_joins_in_order() {
    assert_eq!(build_code([38, 5, 196]), "\x1b[38;5;196m");
    assert_eq!(build_code([196, 5, 38]), "\x1b[196;5;38m");
}

#[test]
fn build_code_accepts_anything_displayable() {
    assert_eq!(build_code(["1", "31"]), "\x1b[1;31m");
    assert_eq!(build_code([-1]), "\x1b[-1m");
    assert_eq!(build_code([1.5]), "\x1b[1.5m");
    assert_eq!(build_code([300]), "\x1b[300m");
}

#[test]
fn build_code_with_no_codes_is_a_bare_reset() {
    assert_eq!(build_code(Vec::<u8>::new()), "\x1b[m");
}

#[test]
fn macro_matches_runtime_builder() {
    assert_eq!(sgr!(0), build_code([0]));
    assert_eq!(sgr!(1, 31), build_code([1, 31]));
    assert_eq!(sgr!(48, 2, 10, 20, 30), build_code([48, 2, 10, 20, 30]));
}

#[test]
fn apply_modifiers_keeps_order_and_resets() {
    let out = apply_modifiers("warn", [BOLD, FG_RED]);
    assert_eq!(split_sequences(&out), vec![BOLD, FG_RED, "warn", RESET]);
}

#[test]
fn apply_modifiers_does_not_deduplicate() {
    assert_eq!(
        apply_modifiers("x", [BOLD, BOLD]),
        "\x1b[1m\x1b[1mx\x1b[0m"
    );
}

#[test]
fn apply_modifiers_without_modifiers_still_resets() {
    assert_eq!(apply_modifiers("", Vec::<String>::new()), RESET);
}

#[test]
fn apply_modifiers_accepts_arbitrary_strings() {
    assert_eq!(apply_modifiers("b", ["a"]), "ab\x1b[0m");
}

#[test]
fn escape_visible_only_touches_esc() {
    assert_eq!(escape_visible("plain"), "plain");
    assert_eq!(escape_visible(&build_code([1])), "\\x1b[1m");
}

#[test]
fn repeated_calls_produce_identical_output() {
    let outputs = || {
        vec![
            build_code([1, 38, 5, 196]),
            apply_modifiers("hello", [BOLD, FG_RED]),
            fg_true_color(12.5, 0.25, 255.0),
            bg_true_color(1, 2, 3),
            fg_from_hsl(260.0, 0.57, 0.64),
            bg_from_hsl(30.0, 1.0, 0.5),
        ]
    };
    let first = outputs();
    let second = outputs();
    assert_eq!(first, second);
    assert_eq!(first[2], "\x1b[38;2;12.5;0.25;255m");
}
