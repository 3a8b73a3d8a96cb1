//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    /// Named style specs, e.g. `warning = "bold fg=yellow"`
    #[serde(default)]
    pub styles: BTreeMap<String, String>,
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Print escape characters visibly (`\x1b`) instead of raw
    #[serde(default)]
    pub escaped: bool,
    /// Theme preset used for CLI headers and messages
    #[serde(default = "default_theme")]
    pub theme: String,
}

pub fn default_theme() -> String {
    "standard".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            escaped: false,
            theme: default_theme(),
        }
    }
}
