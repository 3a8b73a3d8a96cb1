//! Conversions to and from ratatui styles.
//!
//! Keeps the ratatui dependency in a single file. ratatui names the 16
//! colors differently: its `Gray` is SGR 37 (our `White`), `DarkGray` is
//! SGR 90 and `White` is SGR 97.

use ratatui::style::{Color as TuiColor, Modifier, Style as TuiStyle};

use crate::color::Color;
use crate::style::{Attr, Style};

impl From<TuiColor> for Color {
    fn from(color: TuiColor) -> Self {
        match color {
            TuiColor::Reset => Color::Default,
            TuiColor::Black => Color::Black,
            TuiColor::Red => Color::Red,
            TuiColor::Green => Color::Green,
            TuiColor::Yellow => Color::Yellow,
            TuiColor::Blue => Color::Blue,
            TuiColor::Magenta => Color::Magenta,
            TuiColor::Cyan => Color::Cyan,
            TuiColor::Gray => Color::White,
            TuiColor::DarkGray => Color::BrightBlack,
            TuiColor::LightRed => Color::BrightRed,
            TuiColor::LightGreen => Color::BrightGreen,
            TuiColor::LightYellow => Color::BrightYellow,
            TuiColor::LightBlue => Color::BrightBlue,
            TuiColor::LightMagenta => Color::BrightMagenta,
            TuiColor::LightCyan => Color::BrightCyan,
            TuiColor::White => Color::BrightWhite,
            TuiColor::Rgb(r, g, b) => Color::Rgb(r, g, b),
            TuiColor::Indexed(n) => Color::Indexed(n),
        }
    }
}

impl From<Color> for TuiColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Default => TuiColor::Reset,
            Color::Black => TuiColor::Black,
            Color::Red => TuiColor::Red,
            Color::Green => TuiColor::Green,
            Color::Yellow => TuiColor::Yellow,
            Color::Blue => TuiColor::Blue,
            Color::Magenta => TuiColor::Magenta,
            Color::Cyan => TuiColor::Cyan,
            Color::White => TuiColor::Gray,
            Color::BrightBlack => TuiColor::DarkGray,
            Color::BrightRed => TuiColor::LightRed,
            Color::BrightGreen => TuiColor::LightGreen,
            Color::BrightYellow => TuiColor::LightYellow,
            Color::BrightBlue => TuiColor::LightBlue,
            Color::BrightMagenta => TuiColor::LightMagenta,
            Color::BrightCyan => TuiColor::LightCyan,
            Color::BrightWhite => TuiColor::White,
            Color::Indexed(n) => TuiColor::Indexed(n),
            Color::Rgb(r, g, b) => TuiColor::Rgb(r, g, b),
        }
    }
}

impl Attr {
    /// The matching ratatui modifier, if ratatui has one.
    pub fn to_modifier(self) -> Option<Modifier> {
        let modifier = match self {
            Attr::Bold => Modifier::BOLD,
            Attr::Faint => Modifier::DIM,
            Attr::Italic => Modifier::ITALIC,
            Attr::Underline | Attr::DoublyUnderline => Modifier::UNDERLINED,
            Attr::BlinkSlow => Modifier::SLOW_BLINK,
            Attr::BlinkRapid => Modifier::RAPID_BLINK,
            Attr::ReverseVideo => Modifier::REVERSED,
            Attr::Conceal => Modifier::HIDDEN,
            Attr::CrossedOut => Modifier::CROSSED_OUT,
            Attr::Framed | Attr::Encircled | Attr::Overlined => return None,
        };
        Some(modifier)
    }
}

/// Framed, encircled and overlined have no ratatui modifier and are dropped.
impl From<&Style> for TuiStyle {
    fn from(style: &Style) -> Self {
        let modifiers = style
            .attrs
            .iter()
            .filter_map(|a| a.to_modifier())
            .fold(Modifier::empty(), |acc, m| acc | m);

        let mut out = TuiStyle::default().add_modifier(modifiers);
        if !style.fg.is_default() {
            out = out.fg(TuiColor::from(style.fg));
        }
        if !style.bg.is_default() {
            out = out.bg(TuiColor::from(style.bg));
        }
        out
    }
}

impl From<TuiStyle> for Style {
    fn from(tui: TuiStyle) -> Self {
        let mut style = Style::new();
        if let Some(fg) = tui.fg {
            style.fg = fg.into();
        }
        if let Some(bg) = tui.bg {
            style.bg = bg.into();
        }
        for attr in Attr::ALL {
            if attr == Attr::DoublyUnderline {
                continue;
            }
            if let Some(m) = attr.to_modifier() {
                if tui.add_modifier.contains(m) {
                    style = style.attr(attr);
                }
            }
        }
        style
    }
}
