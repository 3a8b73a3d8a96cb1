//! CLI definitions for sgr
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use clap_complete::Shell as CompletionShell;

/// Version string; dev builds carry the git commit hash.
#[cfg(not(feature = "release"))]
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VERGEN_GIT_SHA"), ")");

/// Version string; dev builds carry the git commit hash.
#[cfg(feature = "release")]
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build clap styles using our theme colors.
///
/// - Green: headers, usage, command names (accent color)
/// - White: descriptions, placeholders
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser)]
#[command(name = "sgr")]
#[command(about = "Build ANSI SGR escape sequences - codes, styles, true color and HSL")]
#[command(
    long_about = "sgr - build ANSI SGR (Select Graphic Rendition) escape sequences.

Prints raw escape sequences for numeric codes, named styles, RGB and HSL
colors. Sequences are written unconditionally; pipe them wherever you need
them, or pass --escaped to see them as text.

QUICK START:
    sgr code 1 31                      Bold red: ESC[1;31m
    sgr paint \"hello\" --fg red --attr bold
    sgr rgb 255 128 0                  True-color foreground
    sgr hsl 260 0.57 0.64 --show-rgb   HSL to true color
    sgr list --filter bright           Named codes with swatches"
)]
#[command(version = VERSION)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// Print escape characters visibly as \x1b instead of raw
    #[arg(long, global = true)]
    pub escaped: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the escape sequence for one or more numeric SGR codes
    #[command(long_about = "Print the escape sequence for one or more numeric SGR codes.

Codes are joined with ';' in the order given. Values are not range-checked.

EXAMPLES:
    sgr code 1                 ESC[1m
    sgr code 38 5 196          ESC[38;5;196m")]
    Code {
        /// SGR codes, applied left to right
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i64>,
    },

    /// Print text wrapped in a style, followed by a reset
    #[command(long_about = "Print text wrapped in a style, followed by a full reset.

Colors accept names (red, bright-red), #rrggbb, rgb(r,g,b), hsl(h,s,l) or a
palette index 0-255. Named styles come from the [styles] table of the config.

EXAMPLES:
    sgr paint \"done\" --fg bright-green --attr bold
    sgr paint \"note\" --spec \"italic fg=hsl(200, 0.8, 0.6)\"
    sgr paint \"oops\" --style error")]
    Paint {
        /// Text to style
        text: String,
        /// Foreground color
        #[arg(long)]
        fg: Option<String>,
        /// Background color
        #[arg(long)]
        bg: Option<String>,
        /// Attribute to add (bold, italic, underline, ...); repeatable
        #[arg(long = "attr", short = 'a')]
        attrs: Vec<String>,
        /// Inline style spec, e.g. "bold fg=red"
        #[arg(long)]
        spec: Option<String>,
        /// Named style from the config file
        #[arg(long, short)]
        style: Option<String>,
    },

    /// Print a 24-bit true-color sequence
    Rgb {
        /// Red channel (0-255, not clamped)
        #[arg(allow_negative_numbers = true)]
        r: f64,
        /// Green channel (0-255, not clamped)
        #[arg(allow_negative_numbers = true)]
        g: f64,
        /// Blue channel (0-255, not clamped)
        #[arg(allow_negative_numbers = true)]
        b: f64,
        /// Background instead of foreground
        #[arg(long)]
        bg: bool,
    },

    /// Convert an HSL color to a true-color sequence
    Hsl {
        /// Hue in degrees (0-360)
        #[arg(allow_negative_numbers = true)]
        h: f64,
        /// Saturation (0-1)
        s: f64,
        /// Lightness (0-1)
        l: f64,
        /// Background instead of foreground
        #[arg(long)]
        bg: bool,
        /// Also print the converted RGB triple
        #[arg(long)]
        show_rgb: bool,
    },

    /// List named SGR codes
    List {
        /// Only show names containing this text
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(long, value_enum)]
        shell: CompletionShell,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a starter configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Add or replace a named style
    SetStyle {
        /// Style name
        name: String,
        /// Style spec, e.g. "bold fg=yellow"
        spec: String,
    },
    /// Remove a named style
    RemoveStyle {
        /// Style name
        name: String,
    },
}
