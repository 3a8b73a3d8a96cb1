//! Textual color specs.
//!
//! Accepted forms:
//! - named colors: `red`, `bright-red`, `bright_red`, `BrightRed`, `default`
//! - hex: `#rgb`, `#rrggbb`
//! - `rgb(r, g, b)` with channels 0-255
//! - `hsl(h, s, l)` with `s`/`l` as fractions or percentages
//! - a bare palette index `0`-`255`

use std::str::FromStr;

use super::{hsl_to_rgb, Color};
use crate::error::ColorParseError;

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let lower = input.to_ascii_lowercase();

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(input.to_string()));
        }
        if let Some(args) = function_args(&lower, "rgb") {
            return parse_rgb(&args, input);
        }
        if let Some(args) = function_args(&lower, "hsl") {
            return parse_hsl(&args, input);
        }
        if !lower.is_empty() && lower.bytes().all(|b| b.is_ascii_digit()) {
            return lower
                .parse::<u8>()
                .map(Color::Indexed)
                .map_err(|_| ColorParseError::OutOfRange(input.to_string()));
        }

        named_color(&lower).ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }
}

fn named_color(name: &str) -> Option<Color> {
    let key: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .collect();
    if key == "default" {
        return Some(Color::Default);
    }
    Color::NAMED
        .into_iter()
        .find(|c| c.name().is_some_and(|n| n.replace('-', "") == key))
}

/// Split `name(a, b, c)` into its trimmed arguments.
fn function_args<'a>(s: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = s
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        // #rgb expands each digit: #f80 == #ff8800
        3 => Some(Color::Rgb(
            channel(&hex[0..1])? * 17,
            channel(&hex[1..2])? * 17,
            channel(&hex[2..3])? * 17,
        )),
        _ => None,
    }
}

fn parse_rgb(args: &[&str], input: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction {
        kind: "rgb",
        input: input.to_string(),
        expected: "three channels 0-255",
    };
    let [r, g, b] = args else {
        return Err(invalid());
    };
    let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
    Ok(Color::Rgb(channel(*r)?, channel(*g)?, channel(*b)?))
}

fn parse_hsl(args: &[&str], input: &str) -> Result<Color, ColorParseError> {
    let invalid = || ColorParseError::InvalidFunction {
        kind: "hsl",
        input: input.to_string(),
        expected: "hue in degrees, saturation and lightness as 0-1 or 0%-100%",
    };
    let [h, s, l] = args else {
        return Err(invalid());
    };
    let h = h
        .trim_end_matches("deg")
        .parse::<f64>()
        .map_err(|_| invalid())?;
    let s = fraction(s).ok_or_else(invalid)?;
    let l = fraction(l).ok_or_else(invalid)?;

    hsl_to_rgb(h, s, l)
        .to_color()
        .ok_or_else(|| ColorParseError::OutOfRange(input.to_string()))
}

/// Parse `0.57` or `57%` as a fraction.
fn fraction(s: &str) -> Option<f64> {
    let value = match s.strip_suffix('%') {
        Some(pct) => pct.trim().parse::<f64>().ok()? / 100.0,
        None => s.parse::<f64>().ok()?,
    };
    value.is_finite().then_some(value)
}
