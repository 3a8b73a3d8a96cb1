//! Command handlers for the sgr CLI.
//!
//! Each submodule handles a specific CLI command or command group.
//! The main dispatch logic remains in main.rs.

pub mod code;
pub mod color;
pub mod completions;
pub mod config;
pub mod list;
pub mod paint;

use ansi_sgr::escape_visible;

/// Prepare a generated sequence for printing.
///
/// In escaped mode the ESC characters are shown as `\x1b` so the terminal
/// prints the sequence instead of interpreting it.
pub fn render(output: &str, escaped: bool) -> String {
    if escaped {
        escape_visible(output)
    } else {
        output.to_string()
    }
}
