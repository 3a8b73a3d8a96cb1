//! ANSI SGR escape-sequence builder
//!
//! Builds the `ESC [ ... m` sequences terminals use for colors and text
//! attributes: numeric codes, named constants, 24-bit RGB, 256-color
//! indexes and HSL colors, plus a small [`Style`] type that combines them.
//!
//! ```
//! use ansi_sgr::{build_code, hsl_to_rgb, sgr, Color, Rgb, Style, BOLD, FG_RED};
//!
//! assert_eq!(build_code([1, 31]), "\x1b[1;31m");
//! assert_eq!(sgr!(1, 31), "\x1b[1;31m");
//! assert_eq!(BOLD, "\x1b[1m");
//! assert_eq!(FG_RED, "\x1b[31m");
//! assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
//!
//! let style = Style::new().bold().fg(Color::Red);
//! assert_eq!(style.paint("hi"), "\x1b[1m\x1b[31mhi\x1b[0m");
//! ```

pub mod cli;
pub mod codes;
pub mod color;
pub mod config;
pub mod error;
pub mod interop;
pub mod sgr;
pub mod style;
pub mod theme;

pub use codes::*;
pub use color::{
    bg_from_hsl, bg_indexed, bg_true_color, fg_from_hsl, fg_indexed, fg_true_color, hsl_to_rgb,
    Color, Hsl, Rgb,
};
pub use config::Config;
pub use error::{ColorParseError, StyleParseError};
pub use sgr::{apply_modifiers, build_code, escape_visible};
pub use style::{Attr, Style};
pub use theme::Theme;
