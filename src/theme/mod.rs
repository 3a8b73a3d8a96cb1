//! Theme configuration for CLI output
//!
//! A theme assigns a [`Color`] to each role (primary text, accent, errors...).
//! The text helpers in [`cli`] wrap strings in the role's escape sequence.

use crate::color::Color;

pub mod cli;

/// Names accepted by [`Theme::by_name`].
pub const THEME_NAMES: [&str; 3] = ["standard", "classic", "ocean"];

/// Color roles used when printing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for headers and highlights
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Light gray text with a bright green accent.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::BrightBlack,
            accent: Color::BrightGreen,
            error: Color::Red,
            success: Color::BrightGreen,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::BrightWhite,
            text_secondary: Color::BrightBlack,
            accent: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::BrightBlack,
            accent: Color::BrightCyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Look up a preset by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "standard" | "default" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }
}
