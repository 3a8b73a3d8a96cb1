//! RGB and HSL command handlers

use anyhow::Result;
use tracing::debug;

use ansi_sgr::{bg_from_hsl, bg_true_color, fg_from_hsl, fg_true_color, Hsl};

use super::render;

/// Print a true-color sequence for an RGB triple.
#[cfg(not(tarpaulin_include))]
pub fn handle_rgb(r: f64, g: f64, b: f64, background: bool, escaped: bool) -> Result<()> {
    println!("{}", format_rgb(r, g, b, background, escaped));
    Ok(())
}

/// Convert HSL to RGB and print the true-color sequence.
///
/// With `show_rgb`, the converted triple is printed on a second line.
#[cfg(not(tarpaulin_include))]
pub fn handle_hsl(
    h: f64,
    s: f64,
    l: f64,
    background: bool,
    show_rgb: bool,
    escaped: bool,
) -> Result<()> {
    for line in format_hsl(h, s, l, background, show_rgb, escaped) {
        println!("{}", line);
    }
    Ok(())
}

pub(crate) fn format_rgb(r: f64, g: f64, b: f64, background: bool, escaped: bool) -> String {
    let sequence = if background {
        bg_true_color(r, g, b)
    } else {
        fg_true_color(r, g, b)
    };
    render(&sequence, escaped)
}

pub(crate) fn format_hsl(
    h: f64,
    s: f64,
    l: f64,
    background: bool,
    show_rgb: bool,
    escaped: bool,
) -> Vec<String> {
    let hsl = Hsl::new(h, s, l);
    debug!(hsl = ?hsl, "Converting HSL");

    let sequence = if background {
        bg_from_hsl(hsl.h, hsl.s, hsl.l)
    } else {
        fg_from_hsl(hsl.h, hsl.s, hsl.l)
    };

    let mut lines = vec![render(&sequence, escaped)];
    if show_rgb {
        lines.push(hsl.to_rgb().to_string());
    }
    lines
}
