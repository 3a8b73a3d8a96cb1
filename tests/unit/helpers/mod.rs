//! Test helper utilities

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Write `contents` to a config.toml inside a fresh temp dir.
pub fn temp_config(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    fs::write(&path, contents).expect("Failed to write temp config");
    (temp_dir, path)
}

/// Split a string into its escape sequences and plain text runs.
///
/// `"\x1b[1mhi\x1b[0m"` becomes `["\x1b[1m", "hi", "\x1b[0m"]`.
pub fn split_sequences(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_sequence = false;

    for c in s.chars() {
        if c == '\x1b' {
            if !current.is_empty() {
                parts.push(std::mem::take(&mut current));
            }
            in_sequence = true;
        }
        current.push(c);
        if in_sequence && c == 'm' {
            parts.push(std::mem::take(&mut current));
            in_sequence = false;
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}
