//! Configuration management for the `sgr` CLI

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::error::StyleParseError;
use crate::style::Style;
use crate::theme::{Theme, THEME_NAMES};

impl Config {
    /// Get the config file path (~/.config/ansi-sgr/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        io::config_path()
    }

    /// Get the config directory path (~/.config/ansi-sgr)
    pub fn config_dir() -> Result<PathBuf> {
        io::config_dir()
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from a specific file, or return defaults if not found
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        io::save(self)
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        io::save_to(self, path)
    }

    /// A starter configuration with a few named styles, written by `sgr config init`.
    pub fn example() -> Self {
        let mut config = Config::default();
        for (name, spec) in [
            ("error", "bold fg=red"),
            ("warning", "bold fg=yellow"),
            ("success", "fg=bright-green"),
            ("header", "underline fg=hsl(260, 0.57, 0.64)"),
        ] {
            config.styles.insert(name.to_string(), spec.to_string());
        }
        config
    }

    /// Check the theme name and every named style spec.
    pub fn validate(&self) -> Result<(), String> {
        if Theme::by_name(&self.output.theme).is_none() {
            return Err(format!(
                "unknown theme '{}' (expected one of: {})",
                self.output.theme,
                THEME_NAMES.join(", ")
            ));
        }
        for (name, spec) in &self.styles {
            Style::from_spec(spec).map_err(|e| format!("style '{}': {}", name, e))?;
        }
        Ok(())
    }

    /// Resolve a named style.
    ///
    /// Returns `Ok(None)` if no style with that name is configured.
    pub fn style(&self, name: &str) -> Result<Option<Style>, StyleParseError> {
        self.styles
            .get(name)
            .map(|spec| Style::from_spec(spec))
            .transpose()
    }

    /// Add or replace a named style. Returns `true` if the name was new.
    pub fn set_style(&mut self, name: &str, spec: &str) -> Result<bool, StyleParseError> {
        Style::from_spec(spec)?;
        Ok(self
            .styles
            .insert(name.to_string(), spec.to_string())
            .is_none())
    }

    /// Remove a named style. Returns `true` if it existed.
    pub fn remove_style(&mut self, name: &str) -> bool {
        self.styles.remove(name).is_some()
    }

    /// The configured theme, falling back to the default for unknown names.
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.output.theme).unwrap_or_default()
    }
}
