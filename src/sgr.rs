//! SGR escape sequence builders.
//!
//! An SGR (Select Graphic Rendition) sequence has the form `ESC [ n1 ; n2 ; ... m`.
//! Terminals apply the codes left to right. Nothing in this module validates
//! its input: whatever the caller passes is formatted verbatim.

use std::fmt::{Display, Write};

pub use crate::codes::RESET;

/// Control Sequence Introducer (`ESC [`)
pub const CSI: &str = "\x1b[";

/// Final byte of an SGR sequence
pub const SGR_TERMINATOR: char = 'm';

/// Build an SGR sequence at compile time.
///
/// Expands to a `&'static str` identical to what [`build_code`] returns for
/// the same codes, so named constants never have to be computed at runtime.
///
/// ```
/// assert_eq!(ansi_sgr::sgr!(1, 31), "\x1b[1;31m");
/// ```
#[macro_export]
macro_rules! sgr {
    ($first:literal $(, $rest:literal)* $(,)?) => {
        concat!("\x1b[", $first $(, ";", $rest)*, "m")
    };
}

/// Build an SGR escape sequence from zero or more codes.
///
/// Codes are rendered with their `Display` impl and joined with `;`.
/// An empty input yields `ESC[m`, which terminals treat like a reset;
/// callers should avoid relying on it.
///
/// Negative, fractional or otherwise out-of-range codes are passed through
/// unchanged. Keeping them in range is the caller's responsibility.
///
/// # Examples
/// ```
/// use ansi_sgr::build_code;
/// assert_eq!(build_code([1, 2, 3]), "\x1b[1;2;3m");
/// ```
pub fn build_code<I>(codes: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut buf = String::from(CSI);
    for (i, code) in codes.into_iter().enumerate() {
        if i > 0 {
            buf.push(';');
        }
        // Writing into a String cannot fail
        let _ = write!(buf, "{}", code);
    }
    buf.push(SGR_TERMINATOR);
    buf
}

/// Wrap text in modifiers and terminate it with a full reset.
///
/// The modifiers (usually escape sequences) are emitted in the order given,
/// without deduplication or merging. The result always ends with [`RESET`],
/// even when no modifiers are supplied.
pub fn apply_modifiers<I, S>(text: &str, modifiers: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut buf = String::new();
    for modifier in modifiers {
        buf.push_str(modifier.as_ref());
    }
    buf.push_str(text);
    buf.push_str(RESET);
    buf
}

/// Render escape characters as visible `\x1b` text.
///
/// Used by the CLI to print sequences without the terminal interpreting them.
pub fn escape_visible(s: &str) -> String {
    s.replace('\x1b', "\\x1b")
}
