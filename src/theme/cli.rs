//! Themed text wrappers for CLI output

use crate::color::Color;
use crate::sgr::apply_modifiers;

use super::Theme;

fn paint(color: Color, text: &str) -> String {
    // A default role color adds nothing before the text
    let mut prefix = String::new();
    color.push_fg(&mut prefix);
    apply_modifiers(text, [prefix])
}

impl Theme {
    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        paint(self.accent, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        paint(self.text_primary, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        paint(self.text_secondary, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        paint(self.error, text)
    }

    /// Format text with the success color.
    pub fn success_text(&self, text: &str) -> String {
        paint(self.success, text)
    }
}
