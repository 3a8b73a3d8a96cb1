//! CLI output snapshot tests
//!
//! Runs the binary in escaped mode so the snapshots are readable text.

use crate::helpers::run_sgr;

#[test]
fn snapshot_code_escaped() {
    insta::assert_snapshot!(run_sgr(&["--escaped", "code", "1", "2", "3"]), @r"\x1b[1;2;3m");
}

#[test]
fn snapshot_paint_spec_escaped() {
    let out = run_sgr(&[
        "--escaped",
        "paint",
        "note",
        "--spec",
        "italic fg=hsl(260, 0.57, 0.64)",
    ]);
    insta::assert_snapshot!(out, @r"\x1b[3m\x1b[38;2;146;111;216mnote\x1b[0m");
}

#[test]
fn snapshot_hsl_background_escaped() {
    insta::assert_snapshot!(run_sgr(&["--escaped", "hsl", "--bg", "30", "1", "0.5"]), @r"\x1b[48;2;255;128;0m");
}

#[test]
fn snapshot_list_fg_bright_escaped() {
    let out = run_sgr(&["--escaped", "list", "--filter", "fg-bright"]);
    insta::assert_snapshot!(out, @r"
    NAME                      CODE  SAMPLE
    fg-bright-black             90  \x1b[90m
    fg-bright-red               91  \x1b[91m
    fg-bright-green             92  \x1b[92m
    fg-bright-yellow            93  \x1b[93m
    fg-bright-blue              94  \x1b[94m
    fg-bright-magenta           95  \x1b[95m
    fg-bright-cyan              96  \x1b[96m
    fg-bright-white             97  \x1b[97m
    ");
}
