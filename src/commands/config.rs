//! Config subcommands handler

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::debug;

use ansi_sgr::Config;

/// Show the current configuration as TOML, followed by a preview of each
/// named style.
#[cfg(not(tarpaulin_include))]
pub fn handle_show(escaped: bool) -> Result<()> {
    let config = Config::load()?;
    print!("{}", format_show(&config, escaped)?);
    Ok(())
}

/// Print the configuration file path.
#[cfg(not(tarpaulin_include))]
pub fn handle_path() -> Result<()> {
    println!("{}", Config::config_path()?.display());
    Ok(())
}

/// Write the starter configuration.
#[cfg(not(tarpaulin_include))]
pub fn handle_init(force: bool) -> Result<()> {
    let path = Config::config_path()?;
    init_at(&path, force)?;
    let theme = Config::load_from(&path)?.theme();
    println!(
        "{}",
        theme.success_text(&format!("Wrote {}", path.display()))
    );
    Ok(())
}

/// Add or replace a named style in the config file.
#[cfg(not(tarpaulin_include))]
pub fn handle_set_style(name: &str, spec: &str) -> Result<()> {
    let path = Config::config_path()?;
    let added = set_style_at(&path, name, spec)?;
    let verb = if added { "Added" } else { "Updated" };
    println!("{} style '{}'", verb, name);
    Ok(())
}

/// Remove a named style from the config file.
#[cfg(not(tarpaulin_include))]
pub fn handle_remove_style(name: &str) -> Result<()> {
    let path = Config::config_path()?;
    remove_style_at(&path, name)?;
    println!("Removed style '{}'", name);
    Ok(())
}

pub(crate) fn format_show(config: &Config, escaped: bool) -> Result<String> {
    let mut out = toml::to_string_pretty(config).context("Failed to serialize config")?;
    if config.styles.is_empty() {
        return Ok(out);
    }

    out.push_str("\n# Preview\n");
    for name in config.styles.keys() {
        let Some(style) = config.style(name)? else {
            continue;
        };
        let sample = super::render(&style.paint(name), escaped);
        out.push_str(&format!("# {}\n", sample));
    }
    Ok(out)
}

pub(crate) fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists: {} (use --force to overwrite)",
            path.display()
        );
    }
    debug!(path = %path.display(), force, "Writing starter config");
    Config::example().save_to(path)
}

pub(crate) fn set_style_at(path: &Path, name: &str, spec: &str) -> Result<bool> {
    let mut config = Config::load_from(path)?;
    let added = config
        .set_style(name, spec)
        .with_context(|| format!("Invalid style spec '{}'", spec))?;
    config.save_to(path)?;
    Ok(added)
}

pub(crate) fn remove_style_at(path: &Path, name: &str) -> Result<()> {
    let mut config = Config::load_from(path)?;
    if !config.remove_style(name) {
        bail!("No style named '{}' in config", name);
    }
    config.save_to(path)
}
