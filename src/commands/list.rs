//! List command handler

use anyhow::Result;

use ansi_sgr::codes::{NamedCode, NAMED_CODES};
use ansi_sgr::{apply_modifiers, escape_visible, Theme};

/// List named SGR codes with a styled sample of each.
#[cfg(not(tarpaulin_include))]
pub fn handle(filter: Option<&str>, theme: &Theme, escaped: bool) -> Result<()> {
    let codes = filter_codes(filter);
    if codes.is_empty() {
        let message = match filter {
            Some(f) => format!("No codes match '{}'.", f),
            None => "No codes.".to_string(),
        };
        println!("{}", message);
        return Ok(());
    }

    for line in format_listing(&codes, theme, escaped) {
        println!("{}", line);
    }
    Ok(())
}

/// Named codes whose name contains `filter`, ignoring ASCII case.
pub(crate) fn filter_codes(filter: Option<&str>) -> Vec<&'static NamedCode> {
    let needle = filter.map(|f| f.trim().to_ascii_lowercase());
    NAMED_CODES
        .iter()
        .filter(|c| match &needle {
            Some(n) => c.name.contains(n.as_str()),
            None => true,
        })
        .collect()
}

/// Header plus one row per code.
///
/// In escaped mode nothing is styled and the sample column shows the
/// sequence itself.
pub(crate) fn format_listing(codes: &[&NamedCode], theme: &Theme, escaped: bool) -> Vec<String> {
    let header = format!("{:<26}{:>4}  {}", "NAME", "CODE", "SAMPLE");
    let mut lines = Vec::with_capacity(codes.len() + 1);
    lines.push(if escaped {
        header
    } else {
        theme.accent_text(&header)
    });

    for code in codes {
        let sample = if escaped {
            escape_visible(code.sequence)
        } else {
            apply_modifiers("sample", [code.sequence])
        };
        lines.push(format!("{:<26}{:>4}  {}", code.name, code.code, sample));
    }
    lines
}
