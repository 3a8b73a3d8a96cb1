//! CLI behavior tests

use predicates::prelude::*;

use crate::helpers::{run_sgr, sgr_cmd};

#[test]
fn code_prints_raw_sequence() {
    assert_eq!(run_sgr(&["code", "1", "31"]), "\x1b[1;31m");
}

#[test]
fn code_passes_values_through_unchecked() {
    assert_eq!(run_sgr(&["code", "300", "-1"]), "\x1b[300;-1m");
}

#[test]
fn code_without_values_fails() {
    let (_home, mut cmd) = sgr_cmd();
    cmd.arg("code")
        .assert()
        .failure()
        .stderr(predicate::str::contains("<CODES>"));
}

#[test]
fn paint_combines_flags() {
    assert_eq!(
        run_sgr(&["paint", "hi", "--fg", "red", "-a", "bold"]),
        "\x1b[1m\x1b[31mhi\x1b[0m"
    );
}

#[test]
fn paint_rejects_unknown_color() {
    let (_home, mut cmd) = sgr_cmd();
    cmd.args(["paint", "hi", "--fg", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --fg color 'chartreuse'"));
}

#[test]
fn paint_unknown_named_style_fails() {
    let (_home, mut cmd) = sgr_cmd();
    cmd.args(["paint", "hi", "--style", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No style named 'ghost'"));
}

#[test]
fn rgb_foreground_and_background() {
    assert_eq!(run_sgr(&["rgb", "255", "128", "0"]), "\x1b[38;2;255;128;0m");
    assert_eq!(run_sgr(&["rgb", "--bg", "1", "2", "3"]), "\x1b[48;2;1;2;3m");
}

#[test]
fn hsl_show_rgb_prints_both_lines() {
    let out = run_sgr(&["--escaped", "hsl", "260", "0.57", "0.64", "--show-rgb"]);
    assert_eq!(out, "\\x1b[38;2;146;111;216m\nrgb(146, 111, 216)");
}

#[test]
fn list_filter_without_matches() {
    let (_home, mut cmd) = sgr_cmd();
    cmd.args(["list", "--filter", "zzz"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No codes match 'zzz'."));
}

#[test]
fn completions_generate_for_bash() {
    let (_home, mut cmd) = sgr_cmd();
    cmd.args(["completions", "--shell", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_sgr"));
}

#[test]
fn version_flag_prints_package_version() {
    let (_home, mut cmd) = sgr_cmd();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}
