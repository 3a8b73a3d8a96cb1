//! sgr - CLI entry point for building ANSI SGR escape sequences

mod commands;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use ansi_sgr::cli::{Cli, Commands, ConfigCommands};
use ansi_sgr::Config;

use commands::paint::PaintArgs;

#[cfg(not(tarpaulin_include))]
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config subcommands manage the file themselves, so a broken config must
    // not stop them from running.
    if let Commands::Config(cmd) = cli.command {
        return match cmd {
            ConfigCommands::Show => commands::config::handle_show(cli.escaped),
            ConfigCommands::Path => commands::config::handle_path(),
            ConfigCommands::Init { force } => commands::config::handle_init(force),
            ConfigCommands::SetStyle { name, spec } => {
                commands::config::handle_set_style(&name, &spec)
            }
            ConfigCommands::RemoveStyle { name } => commands::config::handle_remove_style(&name),
        };
    }

    let config = Config::load()?;
    let escaped = cli.escaped || config.output.escaped;
    debug!(escaped, theme = %config.output.theme, "Resolved output settings");

    match cli.command {
        Commands::Code { codes } => commands::code::handle(&codes, escaped),
        Commands::Paint {
            text,
            fg,
            bg,
            attrs,
            spec,
            style,
        } => {
            let args = PaintArgs {
                fg: fg.as_deref(),
                bg: bg.as_deref(),
                attrs: &attrs,
                spec: spec.as_deref(),
                style: style.as_deref(),
            };
            commands::paint::handle(&text, &args, &config, escaped)
        }
        Commands::Rgb { r, g, b, bg } => commands::color::handle_rgb(r, g, b, bg, escaped),
        Commands::Hsl {
            h,
            s,
            l,
            bg,
            show_rgb,
        } => commands::color::handle_hsl(h, s, l, bg, show_rgb, escaped),
        Commands::List { filter } => {
            commands::list::handle(filter.as_deref(), &config.theme(), escaped)
        }
        Commands::Completions { shell } => commands::completions::handle::<Cli>(shell),
        Commands::Config(_) => Ok(()),
    }
}
