//! Test helper utilities

#![allow(dead_code)]

use assert_cmd::Command;
use tempfile::TempDir;

/// An `sgr` command isolated from the user's real config.
///
/// HOME points at a fresh temp dir, so the config lives at
/// `<tmp>/.config/ansi-sgr/config.toml`.
pub fn sgr_cmd() -> (TempDir, Command) {
    let home = TempDir::new().expect("Failed to create temp dir");
    let cmd = sgr_cmd_in(&home);
    (home, cmd)
}

/// An `sgr` command using `home` as HOME.
pub fn sgr_cmd_in(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sgr").expect("Failed to find sgr binary");
    cmd.env("HOME", home.path());
    cmd
}

/// Run `sgr` with `args` in a clean HOME and return trimmed stdout.
pub fn run_sgr(args: &[&str]) -> String {
    let (_home, mut cmd) = sgr_cmd();
    let output = cmd.args(args).output().expect("Failed to execute sgr");
    assert!(
        output.status.success(),
        "sgr {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

/// Config file path inside a temp HOME.
pub fn config_path(home: &TempDir) -> std::path::PathBuf {
    home.path()
        .join(".config")
        .join("ansi-sgr")
        .join("config.toml")
}
