//! Config subcommand tests against a temp HOME

use std::fs;

use predicates::prelude::*;
use tempfile::TempDir;

use ansi_sgr::Config;

use crate::helpers::{config_path, sgr_cmd_in};

#[test]
fn path_points_into_home() {
    let home = TempDir::new().unwrap();
    sgr_cmd_in(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".config/ansi-sgr/config.toml"));
}

#[test]
fn init_then_paint_with_named_style() {
    let home = TempDir::new().unwrap();
    sgr_cmd_in(&home)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert_eq!(
        Config::load_from(&config_path(&home)).unwrap(),
        Config::example()
    );

    sgr_cmd_in(&home)
        .args(["--escaped", "paint", "oops", "--style", "error"])
        .assert()
        .success()
        .stdout("\\x1b[1m\\x1b[31moops\\x1b[0m\n");
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    sgr_cmd_in(&home).args(["config", "init"]).assert().success();
    sgr_cmd_in(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
    sgr_cmd_in(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn set_and_remove_style() {
    let home = TempDir::new().unwrap();
    sgr_cmd_in(&home)
        .args(["config", "set-style", "note", "italic fg=cyan"])
        .assert()
        .success()
        .stdout("Added style 'note'\n");
    sgr_cmd_in(&home)
        .args(["config", "set-style", "note", "bold"])
        .assert()
        .success()
        .stdout("Updated style 'note'\n");

    let config = Config::load_from(&config_path(&home)).unwrap();
    assert_eq!(config.styles["note"], "bold");

    sgr_cmd_in(&home)
        .args(["config", "remove-style", "note"])
        .assert()
        .success();
    sgr_cmd_in(&home)
        .args(["config", "remove-style", "note"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No style named 'note'"));
}

#[test]
fn escaped_setting_in_config_applies() {
    let home = TempDir::new().unwrap();
    let path = config_path(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[output]\nescaped = true\n").unwrap();

    sgr_cmd_in(&home)
        .args(["code", "4"])
        .assert()
        .success()
        .stdout("\\x1b[4m\n");
}

#[test]
fn broken_config_blocks_commands_but_not_config_path() {
    let home = TempDir::new().unwrap();
    let path = config_path(&home);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "[output]\ntheme = \"neon\"\n").unwrap();

    sgr_cmd_in(&home)
        .args(["code", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown theme 'neon'"));
    sgr_cmd_in(&home)
        .args(["config", "path"])
        .assert()
        .success();
}
