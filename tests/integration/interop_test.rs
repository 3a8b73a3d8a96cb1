//! Conversions between our styles and ratatui styles

use ratatui::style::{Color as TuiColor, Modifier, Style as TuiStyle};

use ansi_sgr::{Attr, Color, Style};

#[test]
fn style_survives_ratatui_round_trip() {
    let style = Style::new()
        .bold()
        .italic()
        .fg(Color::BrightRed)
        .bg(Color::Rgb(10, 20, 30));
    let tui = TuiStyle::from(&style);
    assert_eq!(tui.fg, Some(TuiColor::LightRed));
    assert_eq!(tui.bg, Some(TuiColor::Rgb(10, 20, 30)));
    assert!(tui.add_modifier.contains(Modifier::BOLD | Modifier::ITALIC));

    let back = Style::from(tui);
    assert_eq!(back.fg, style.fg);
    assert_eq!(back.bg, style.bg);
    assert!(back.has(Attr::Bold));
    assert!(back.has(Attr::Italic));
}

#[test]
fn attrs_without_modifier_are_dropped() {
    let style = Style::new().attr(Attr::Framed).attr(Attr::Overlined);
    let tui = TuiStyle::from(&style);
    assert!(tui.add_modifier.is_empty());
    assert!(Style::from(tui).is_plain());
}

#[test]
fn ratatui_theme_colors_paint_identically() {
    let ours = Style::new().fg(Color::from(TuiColor::DarkGray));
    assert_eq!(ours.sequence(), "\x1b[90m");
}
