//! Parse errors for color and style specs.
//!
//! The escape-sequence builders never fail; only text that has to be
//! interpreted (color names, hex triples, style specs) can be rejected.

/// Errors from parsing a color spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Unknown color name: '{0}'")]
    UnknownName(String),

    #[error("Invalid hex color '{0}'. Expected #rgb or #rrggbb.")]
    InvalidHex(String),

    #[error("Invalid {kind}() color '{input}'. Expected {expected}.")]
    InvalidFunction {
        kind: &'static str,
        input: String,
        expected: &'static str,
    },

    #[error("Color '{0}' is out of range")]
    OutOfRange(String),
}

/// Errors from parsing a style spec.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleParseError {
    #[error("Unknown attribute: '{0}'")]
    UnknownAttr(String),

    #[error("Invalid color in '{token}': {source}")]
    InvalidColor {
        token: String,
        #[source]
        source: ColorParseError,
    },

    #[error("Unbalanced parentheses in style spec: '{0}'")]
    Unbalanced(String),
}
