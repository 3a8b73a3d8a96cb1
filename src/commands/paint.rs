//! Paint command handler

use anyhow::{anyhow, Context, Result};
use tracing::debug;

use ansi_sgr::{Attr, Color, Config, Style};

use super::render;

/// Options collected from `sgr paint` flags.
#[derive(Debug, Default)]
pub struct PaintArgs<'a> {
    pub fg: Option<&'a str>,
    pub bg: Option<&'a str>,
    pub attrs: &'a [String],
    pub spec: Option<&'a str>,
    pub style: Option<&'a str>,
}

/// Print text wrapped in the requested style.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, args: &PaintArgs, config: &Config, escaped: bool) -> Result<()> {
    let style = resolve_style(args, config)?;
    debug!(style = ?style, "Painting text");
    println!("{}", render(&style.paint(text), escaped));
    Ok(())
}

/// Build the style for `sgr paint`.
///
/// Layers apply in order: named config style, inline spec, then the
/// individual `--fg`, `--bg` and `--attr` flags.
pub(crate) fn resolve_style(args: &PaintArgs, config: &Config) -> Result<Style> {
    let mut style = match args.style {
        Some(name) => config
            .style(name)
            .with_context(|| format!("Invalid style '{}' in config", name))?
            .ok_or_else(|| anyhow!("No style named '{}' in config", name))?,
        None => Style::new(),
    };

    if let Some(spec) = args.spec {
        let inline = Style::from_spec(spec).with_context(|| format!("Invalid spec '{}'", spec))?;
        style = merge(style, inline);
    }

    if let Some(fg) = args.fg {
        let color: Color = fg
            .parse()
            .with_context(|| format!("Invalid --fg color '{}'", fg))?;
        style = style.fg(color);
    }
    if let Some(bg) = args.bg {
        let color: Color = bg
            .parse()
            .with_context(|| format!("Invalid --bg color '{}'", bg))?;
        style = style.bg(color);
    }
    for attr in args.attrs {
        let attr: Attr = attr
            .parse()
            .with_context(|| format!("Invalid --attr '{}'", attr))?;
        style = style.attr(attr);
    }

    Ok(style)
}

fn merge(base: Style, overlay: Style) -> Style {
    let mut merged = base;
    if !overlay.fg.is_default() {
        merged = merged.fg(overlay.fg);
    }
    if !overlay.bg.is_default() {
        merged = merged.bg(overlay.bg);
    }
    for attr in overlay.attrs {
        merged = merged.attr(attr);
    }
    merged
}
