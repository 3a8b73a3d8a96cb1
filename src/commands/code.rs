//! Code command handler

use anyhow::Result;
use tracing::debug;

use ansi_sgr::build_code;

use super::render;

/// Print the escape sequence for a list of numeric SGR codes.
#[cfg(not(tarpaulin_include))]
pub fn handle(codes: &[i64], escaped: bool) -> Result<()> {
    debug!(codes = ?codes, "Building SGR sequence");
    println!("{}", format_codes(codes, escaped));
    Ok(())
}

pub(crate) fn format_codes(codes: &[i64], escaped: bool) -> String {
    render(&build_code(codes), escaped)
}
