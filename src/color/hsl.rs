//! HSL to RGB conversion.
//!
//! Uses the standard piecewise-linear HSL model. Inputs are not validated:
//! hue is expected in degrees `[0, 360)`, saturation and lightness in `[0, 1]`,
//! and anything else is converted as-is.

use std::fmt;

use super::{bg_true_color, fg_true_color, Color};

/// An integer RGB triple.
///
/// Channels are `i64` rather than `u8` so that out-of-range HSL input keeps
/// its unclamped result instead of silently wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: i64,
    pub g: i64,
    pub b: i64,
}

impl Rgb {
    pub const fn new(r: i64, g: i64, b: i64) -> Self {
        Self { r, g, b }
    }

    /// Convert to [`Color::Rgb`], or `None` if any channel is outside `0..=255`.
    pub fn to_color(self) -> Option<Color> {
        let r = u8::try_from(self.r).ok()?;
        let g = u8::try_from(self.g).ok()?;
        let b = u8::try_from(self.b).ok()?;
        Some(Color::Rgb(r, g, b))
    }
}

impl From<(i64, i64, i64)> for Rgb {
    fn from((r, g, b): (i64, i64, i64)) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for (i64, i64, i64) {
    fn from(rgb: Rgb) -> Self {
        (rgb.r, rgb.g, rgb.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// A hue/saturation/lightness triple.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsl {
    /// Hue in degrees
    pub h: f64,
    /// Saturation, 0 to 1
    pub s: f64,
    /// Lightness, 0 to 1
    pub l: f64,
}

impl Hsl {
    pub const fn new(h: f64, s: f64, l: f64) -> Self {
        Self { h, s, l }
    }

    pub fn to_rgb(self) -> Rgb {
        hsl_to_rgb(self.h, self.s, self.l)
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        hsl.to_rgb()
    }
}

/// Convert HSL to an RGB triple in `[0, 255]`.
///
/// Red samples the hue ramp at `h + 1/3`, green at `h` and blue at `h - 1/3`.
/// Channels are rounded half-up, so a lightness of `0.5` with no saturation
/// gives `128`.
///
/// # Examples
/// ```
/// use ansi_sgr::{hsl_to_rgb, Rgb};
/// assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
/// ```
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let [r, g, b] = rounded_channels(h, s, l);
    // Only non-finite or astronomically large channels saturate here; the
    // sequence builders below format the float channels directly.
    Rgb {
        r: r as i64,
        g: g as i64,
        b: b as i64,
    }
}

/// Rounded `[0, 255]`-scaled channels, kept as floats so nothing is capped.
fn rounded_channels(h: f64, s: f64, l: f64) -> [f64; 3] {
    let h = h / 360.0;

    let (r, g, b) = if s == 0.0 {
        // achromatic
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    [to_channel(r), to_channel(g), to_channel(b)]
}

/// Sample the four-piece hue ramp at `t`, wrapping `t` into `[0, 1]` once.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Scale a `[0, 1]` channel to `[0, 255]`, rounding half-up. NaN stays NaN.
///
/// Adding `0.5` before flooring never yields `-0.0`, so a zero channel always
/// prints as `0`.
fn to_channel(x: f64) -> f64 {
    (x * 255.0 + 0.5).floor()
}

/// Foreground true-color sequence for an HSL color.
///
/// Out-of-range and non-finite results are written as computed, e.g.
/// `fg_from_hsl(0.0, 0.0, f64::NAN)` gives `ESC[38;2;NaN;NaN;NaNm`.
pub fn fg_from_hsl(h: f64, s: f64, l: f64) -> String {
    let [r, g, b] = rounded_channels(h, s, l);
    fg_true_color(r, g, b)
}

/// Background true-color sequence for an HSL color.
pub fn bg_from_hsl(h: f64, s: f64, l: f64) -> String {
    let [r, g, b] = rounded_channels(h, s, l);
    bg_true_color(r, g, b)
}
