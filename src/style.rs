//! Text attributes and composite styles.
//!
//! [`Style`] gathers a foreground, a background and a set of [`Attr`]s and
//! renders them either as separate modifiers for [`apply_modifiers`] or as
//! one merged SGR sequence.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::codes;
use crate::color::Color;
use crate::error::StyleParseError;
use crate::sgr::{apply_modifiers, build_code};

/// A toggleable text attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attr {
    Bold,
    Faint,
    Italic,
    Underline,
    BlinkSlow,
    BlinkRapid,
    ReverseVideo,
    Conceal,
    CrossedOut,
    DoublyUnderline,
    Framed,
    Encircled,
    Overlined,
}

impl Attr {
    pub const ALL: [Attr; 13] = [
        Attr::Bold,
        Attr::Faint,
        Attr::Italic,
        Attr::Underline,
        Attr::BlinkSlow,
        Attr::BlinkRapid,
        Attr::ReverseVideo,
        Attr::Conceal,
        Attr::CrossedOut,
        Attr::DoublyUnderline,
        Attr::Framed,
        Attr::Encircled,
        Attr::Overlined,
    ];

    /// Numeric SGR parameter that turns the attribute on.
    pub fn code(self) -> u8 {
        match self {
            Attr::Bold => 1,
            Attr::Faint => 2,
            Attr::Italic => 3,
            Attr::Underline => 4,
            Attr::BlinkSlow => 5,
            Attr::BlinkRapid => 6,
            Attr::ReverseVideo => 7,
            Attr::Conceal => 8,
            Attr::CrossedOut => 9,
            Attr::DoublyUnderline => 21,
            Attr::Framed => 51,
            Attr::Encircled => 52,
            Attr::Overlined => 53,
        }
    }

    /// Escape sequence that turns the attribute on.
    pub fn sequence(self) -> &'static str {
        match self {
            Attr::Bold => codes::BOLD,
            Attr::Faint => codes::FAINT,
            Attr::Italic => codes::ITALIC,
            Attr::Underline => codes::UNDERLINE,
            Attr::BlinkSlow => codes::BLINK_SLOW,
            Attr::BlinkRapid => codes::BLINK_RAPID,
            Attr::ReverseVideo => codes::REVERSE_VIDEO,
            Attr::Conceal => codes::CONCEAL,
            Attr::CrossedOut => codes::CROSSED_OUT,
            Attr::DoublyUnderline => codes::DOUBLY_UNDERLINE,
            Attr::Framed => codes::FRAMED,
            Attr::Encircled => codes::ENCIRCLED,
            Attr::Overlined => codes::OVERLINED,
        }
    }

    /// Kebab-case name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Attr::Bold => "bold",
            Attr::Faint => "faint",
            Attr::Italic => "italic",
            Attr::Underline => "underline",
            Attr::BlinkSlow => "blink-slow",
            Attr::BlinkRapid => "blink-rapid",
            Attr::ReverseVideo => "reverse-video",
            Attr::Conceal => "conceal",
            Attr::CrossedOut => "crossed-out",
            Attr::DoublyUnderline => "doubly-underline",
            Attr::Framed => "framed",
            Attr::Encircled => "encircled",
            Attr::Overlined => "overlined",
        }
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Attr {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('_', "-");
        let attr = match key.as_str() {
            "dim" => Attr::Faint,
            "blink" => Attr::BlinkSlow,
            "reverse" | "inverse" => Attr::ReverseVideo,
            "hidden" => Attr::Conceal,
            "strike" | "strikethrough" => Attr::CrossedOut,
            "double-underline" => Attr::DoublyUnderline,
            _ => codes::lookup_code(&key)
                .and_then(|named| Attr::ALL.into_iter().find(|a| a.code() == named.code))
                .ok_or_else(|| StyleParseError::UnknownAttr(s.trim().to_string()))?,
        };
        Ok(attr)
    }
}

/// Foreground, background and attributes for a run of text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Color,
    pub bg: Color,
    /// Attributes in the order they were added, without duplicates
    pub attrs: Vec<Attr>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Add an attribute. Adding one that is already set is a no-op.
    pub fn attr(mut self, attr: Attr) -> Self {
        if !self.attrs.contains(&attr) {
            self.attrs.push(attr);
        }
        self
    }

    pub fn bold(self) -> Self {
        self.attr(Attr::Bold)
    }

    pub fn italic(self) -> Self {
        self.attr(Attr::Italic)
    }

    pub fn underline(self) -> Self {
        self.attr(Attr::Underline)
    }

    pub fn has(&self, attr: Attr) -> bool {
        self.attrs.contains(&attr)
    }

    /// A style with default colors and no attributes.
    pub fn is_plain(&self) -> bool {
        self.fg.is_default() && self.bg.is_default() && self.attrs.is_empty()
    }

    /// One escape sequence per attribute, then foreground, then background.
    ///
    /// Default colors are skipped.
    pub fn modifiers(&self) -> Vec<Cow<'static, str>> {
        let mut out: Vec<Cow<'static, str>> = self
            .attrs
            .iter()
            .map(|a| Cow::Borrowed(a.sequence()))
            .collect();
        if !self.fg.is_default() {
            out.push(self.fg.fg_code());
        }
        if !self.bg.is_default() {
            out.push(self.bg.bg_code());
        }
        out
    }

    /// All codes merged into a single sequence, e.g. `ESC[1;31m`.
    ///
    /// Returns an empty string for a plain style.
    pub fn sequence(&self) -> String {
        if self.is_plain() {
            return String::new();
        }
        let mut params: Vec<u8> = self.attrs.iter().map(|a| a.code()).collect();
        if !self.fg.is_default() {
            params.extend(self.fg.fg_params());
        }
        if !self.bg.is_default() {
            params.extend(self.bg.bg_params());
        }
        build_code(params)
    }

    /// Wrap text in this style's modifiers, ending with a reset.
    pub fn paint(&self, text: &str) -> String {
        apply_modifiers(text, self.modifiers())
    }

    /// Parse a whitespace-separated style spec.
    ///
    /// Tokens are attribute names (`bold`, `underline`, ...), `fg=COLOR`,
    /// `bg=COLOR`, or a bare color which sets the foreground. Whitespace
    /// inside parentheses is kept, so `fg=hsl(260, 0.57, 0.64)` is one token.
    ///
    /// ```
    /// use ansi_sgr::{Color, Style};
    /// let style = Style::from_spec("bold fg=red bg=#000000").unwrap();
    /// assert_eq!(style, Style::new().bold().fg(Color::Red).bg(Color::Rgb(0, 0, 0)));
    /// ```
    pub fn from_spec(spec: &str) -> Result<Self, StyleParseError> {
        let mut style = Style::new();
        for token in tokenize(spec)? {
            let lower = token.to_ascii_lowercase();
            if let Some(color) = lower.strip_prefix("fg=") {
                style.fg = parse_color(color, token)?;
            } else if let Some(color) = lower.strip_prefix("bg=") {
                style.bg = parse_color(color, token)?;
            } else if let Ok(attr) = token.parse::<Attr>() {
                style = style.attr(attr);
            } else if let Ok(color) = token.parse::<Color>() {
                style.fg = color;
            } else {
                return Err(StyleParseError::UnknownAttr(token.to_string()));
            }
        }
        Ok(style)
    }
}

impl FromStr for Style {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Style::from_spec(s)
    }
}

fn parse_color(value: &str, token: &str) -> Result<Color, StyleParseError> {
    value
        .parse::<Color>()
        .map_err(|source| StyleParseError::InvalidColor {
            token: token.to_string(),
            source,
        })
}

/// Split on whitespace outside parentheses.
fn tokenize(spec: &str) -> Result<Vec<&str>, StyleParseError> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start: Option<usize> = None;

    for (i, c) in spec.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| StyleParseError::Unbalanced(spec.to_string()))?;
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(s) = start.take() {
                    tokens.push(&spec[s..i]);
                }
                continue;
            }
            _ => {}
        }
        if start.is_none() {
            start = Some(i);
        }
    }

    if depth != 0 {
        return Err(StyleParseError::Unbalanced(spec.to_string()));
    }
    if let Some(s) = start {
        tokens.push(&spec[s..]);
    }
    Ok(tokens)
}
