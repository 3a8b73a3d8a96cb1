//! Terminal colors and their SGR sequences.
//!
//! - [`Color`]: the 16 standard colors, default, 256-color index and RGB
//! - [`fg_true_color`] / [`bg_true_color`]: 24-bit sequences (`38;2` / `48;2`)
//! - [`fg_indexed`] / [`bg_indexed`]: 256-color sequences (`38;5` / `48;5`)
//! - [`hsl`]: HSL to RGB conversion
//! - [`parse`]: textual color specs like `bright-red`, `#ff8800` or `hsl(260,0.57,0.64)`

pub mod hsl;
pub mod parse;

use std::borrow::Cow;
use std::fmt::Display;

use crate::codes;
use crate::sgr::build_code;

pub use hsl::{bg_from_hsl, fg_from_hsl, hsl_to_rgb, Hsl, Rgb};

/// SGR parameter selecting an extended foreground color
pub const FG_EXTENDED: u8 = 38;
/// SGR parameter selecting an extended background color
pub const BG_EXTENDED: u8 = 48;
/// Extended color sub-parameter for a 256-color palette index
pub const MODE_INDEXED: u8 = 5;
/// Extended color sub-parameter for 24-bit RGB
pub const MODE_RGB: u8 = 2;

/// Foreground true-color sequence, `ESC[38;2;r;g;bm`.
///
/// Channels are not clamped: out-of-range or fractional values end up in
/// the sequence as given.
pub fn fg_true_color(r: impl Display, g: impl Display, b: impl Display) -> String {
    true_color(FG_EXTENDED, r, g, b)
}

/// Background true-color sequence, `ESC[48;2;r;g;bm`.
///
/// Channels are not clamped, see [`fg_true_color`].
pub fn bg_true_color(r: impl Display, g: impl Display, b: impl Display) -> String {
    true_color(BG_EXTENDED, r, g, b)
}

fn true_color(target: u8, r: impl Display, g: impl Display, b: impl Display) -> String {
    let params: [&dyn Display; 5] = [&target, &MODE_RGB, &r, &g, &b];
    build_code(params)
}

/// Foreground 256-color sequence, `ESC[38;5;nm`.
pub fn fg_indexed(index: u8) -> String {
    build_code([FG_EXTENDED, MODE_INDEXED, index])
}

/// Background 256-color sequence, `ESC[48;5;nm`.
pub fn bg_indexed(index: u8) -> String {
    build_code([BG_EXTENDED, MODE_INDEXED, index])
}

/// ANSI color codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's default color (SGR 39 / 49)
    #[default]
    Default,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
    /// 256-color palette index
    Indexed(u8),
    /// RGB color
    Rgb(u8, u8, u8),
}

impl Color {
    /// The 16 named colors, standard then bright.
    pub const NAMED: [Color; 16] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::BrightBlack,
        Color::BrightRed,
        Color::BrightGreen,
        Color::BrightYellow,
        Color::BrightBlue,
        Color::BrightMagenta,
        Color::BrightCyan,
        Color::BrightWhite,
    ];

    /// Whether this is the terminal default color.
    pub fn is_default(self) -> bool {
        self == Color::Default
    }

    /// Kebab-case name for the named colors (`bright-red`), `None` otherwise.
    pub fn name(self) -> Option<&'static str> {
        let name = match self {
            Color::Default => "default",
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::BrightBlack => "bright-black",
            Color::BrightRed => "bright-red",
            Color::BrightGreen => "bright-green",
            Color::BrightYellow => "bright-yellow",
            Color::BrightBlue => "bright-blue",
            Color::BrightMagenta => "bright-magenta",
            Color::BrightCyan => "bright-cyan",
            Color::BrightWhite => "bright-white",
            Color::Indexed(_) | Color::Rgb(..) => return None,
        };
        Some(name)
    }

    /// Escape sequence selecting this color as foreground.
    ///
    /// Named colors borrow the constants from [`codes`]; indexed and RGB
    /// colors are built on demand.
    pub fn fg_code(self) -> Cow<'static, str> {
        let code = match self {
            Color::Default => codes::FG_DEFAULT,
            Color::Black => codes::FG_BLACK,
            Color::Red => codes::FG_RED,
            Color::Green => codes::FG_GREEN,
            Color::Yellow => codes::FG_YELLOW,
            Color::Blue => codes::FG_BLUE,
            Color::Magenta => codes::FG_MAGENTA,
            Color::Cyan => codes::FG_CYAN,
            Color::White => codes::FG_WHITE,
            Color::BrightBlack => codes::FG_BRIGHT_BLACK,
            Color::BrightRed => codes::FG_BRIGHT_RED,
            Color::BrightGreen => codes::FG_BRIGHT_GREEN,
            Color::BrightYellow => codes::FG_BRIGHT_YELLOW,
            Color::BrightBlue => codes::FG_BRIGHT_BLUE,
            Color::BrightMagenta => codes::FG_BRIGHT_MAGENTA,
            Color::BrightCyan => codes::FG_BRIGHT_CYAN,
            Color::BrightWhite => codes::FG_BRIGHT_WHITE,
            Color::Indexed(n) => return Cow::Owned(fg_indexed(n)),
            Color::Rgb(r, g, b) => return Cow::Owned(fg_true_color(r, g, b)),
        };
        Cow::Borrowed(code)
    }

    /// Escape sequence selecting this color as background.
    pub fn bg_code(self) -> Cow<'static, str> {
        let code = match self {
            Color::Default => codes::BG_DEFAULT,
            Color::Black => codes::BG_BLACK,
            Color::Red => codes::BG_RED,
            Color::Green => codes::BG_GREEN,
            Color::Yellow => codes::BG_YELLOW,
            Color::Blue => codes::BG_BLUE,
            Color::Magenta => codes::BG_MAGENTA,
            Color::Cyan => codes::BG_CYAN,
            Color::White => codes::BG_WHITE,
            Color::BrightBlack => codes::BG_BRIGHT_BLACK,
            Color::BrightRed => codes::BG_BRIGHT_RED,
            Color::BrightGreen => codes::BG_BRIGHT_GREEN,
            Color::BrightYellow => codes::BG_BRIGHT_YELLOW,
            Color::BrightBlue => codes::BG_BRIGHT_BLUE,
            Color::BrightMagenta => codes::BG_BRIGHT_MAGENTA,
            Color::BrightCyan => codes::BG_BRIGHT_CYAN,
            Color::BrightWhite => codes::BG_BRIGHT_WHITE,
            Color::Indexed(n) => return Cow::Owned(bg_indexed(n)),
            Color::Rgb(r, g, b) => return Cow::Owned(bg_true_color(r, g, b)),
        };
        Cow::Borrowed(code)
    }

    /// SGR parameters selecting this color as foreground.
    ///
    /// Used when several attributes are merged into one sequence.
    pub fn fg_params(self) -> Vec<u8> {
        self.params(FG_EXTENDED)
    }

    /// SGR parameters selecting this color as background.
    pub fn bg_params(self) -> Vec<u8> {
        self.params(BG_EXTENDED)
    }

    fn params(self, extended: u8) -> Vec<u8> {
        // 38 -> 30 for foreground, 48 -> 40 for background
        let base = extended - 8;
        match self {
            Color::Default => vec![base + 9],
            Color::Indexed(n) => vec![extended, MODE_INDEXED, n],
            Color::Rgb(r, g, b) => vec![extended, MODE_RGB, r, g, b],
            named => {
                let Some(index) = Color::NAMED.iter().position(|c| *c == named) else {
                    return Vec::new();
                };
                let index = index as u8;
                if index < 8 {
                    vec![base + index]
                } else {
                    // Bright colors live at 90-97 / 100-107
                    vec![base + 60 + (index - 8)]
                }
            }
        }
    }

    /// Append the foreground sequence to `buf`.
    ///
    /// # Returns
    /// `true` if a code was appended, `false` if the color is default
    pub fn push_fg(self, buf: &mut String) -> bool {
        if self.is_default() {
            return false;
        }
        buf.push_str(&self.fg_code());
        true
    }

    /// Append the background sequence to `buf`.
    ///
    /// # Returns
    /// `true` if a code was appended, `false` if the color is default
    pub fn push_bg(self, buf: &mut String) -> bool {
        if self.is_default() {
            return false;
        }
        buf.push_str(&self.bg_code());
        true
    }
}
