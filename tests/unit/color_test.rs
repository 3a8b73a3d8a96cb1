//! Unit tests for colors and color parsing

use ansi_sgr::{bg_indexed, bg_true_color, fg_indexed, fg_true_color, Color, ColorParseError};

#[test]
fn true_color_formats_channels_verbatim() {
    assert_eq!(fg_true_color(255, 128, 0), "\x1b[38;2;255;128;0m");
    assert_eq!(bg_true_color(0, 0, 0), "\x1b[48;2;0;0;0m");
    // No clamping or rounding
    assert_eq!(fg_true_color(300, -5, 1.25), "\x1b[38;2;300;-5;1.25m");
    assert_eq!(bg_true_color(1.0, 2.0, 3.0), "\x1b[48;2;1;2;3m");
}

#[test]
fn indexed_sequences() {
    assert_eq!(fg_indexed(196), "\x1b[38;5;196m");
    assert_eq!(bg_indexed(0), "\x1b[48;5;0m");
}

#[test]
fn named_color_codes() {
    assert_eq!(Color::Red.fg_code(), "\x1b[31m");
    assert_eq!(Color::Red.bg_code(), "\x1b[41m");
    assert_eq!(Color::BrightCyan.fg_code(), "\x1b[96m");
    assert_eq!(Color::BrightCyan.bg_code(), "\x1b[106m");
    assert_eq!(Color::Default.fg_code(), "\x1b[39m");
    assert_eq!(Color::Default.bg_code(), "\x1b[49m");
}

#[test]
fn extended_color_codes() {
    assert_eq!(Color::Indexed(236).bg_code(), "\x1b[48;5;236m");
    assert_eq!(Color::Rgb(1, 2, 3).fg_code(), "\x1b[38;2;1;2;3m");
}

#[test]
fn params_agree_with_codes() {
    let mut colors = Color::NAMED.to_vec();
    colors.extend([Color::Default, Color::Indexed(42), Color::Rgb(9, 8, 7)]);
    for color in colors {
        assert_eq!(
            ansi_sgr::build_code(color.fg_params()),
            color.fg_code(),
            "{:?}",
            color
        );
        assert_eq!(
            ansi_sgr::build_code(color.bg_params()),
            color.bg_code(),
            "{:?}",
            color
        );
    }
}

#[test]
fn push_skips_default() {
    let mut buf = String::new();
    assert!(!Color::Default.push_fg(&mut buf));
    assert!(Color::Green.push_fg(&mut buf));
    assert!(Color::Indexed(5).push_bg(&mut buf));
    assert_eq!(buf, "\x1b[32m\x1b[48;5;5m");
}

#[test]
fn parse_accepts_every_form() {
    assert_eq!("magenta".parse::<Color>(), Ok(Color::Magenta));
    assert_eq!("bright-black".parse::<Color>(), Ok(Color::BrightBlack));
    assert_eq!("#000".parse::<Color>(), Ok(Color::Rgb(0, 0, 0)));
    assert_eq!("#1a2B3c".parse::<Color>(), Ok(Color::Rgb(26, 43, 60)));
    assert_eq!("rgb(1, 2, 3)".parse::<Color>(), Ok(Color::Rgb(1, 2, 3)));
    assert_eq!("208".parse::<Color>(), Ok(Color::Indexed(208)));
    assert_eq!(
        "hsl(260, 0.57, 0.64)".parse::<Color>(),
        Ok(Color::Rgb(146, 111, 216))
    );
    assert_eq!(
        "hsl(120deg, 100%, 50%)".parse::<Color>(),
        Ok(Color::Rgb(0, 255, 0))
    );
}

#[test]
fn parse_rejects_bad_input() {
    assert!(matches!(
        "orange".parse::<Color>(),
        Err(ColorParseError::UnknownName(_))
    ));
    assert!(matches!(
        "#ggg".parse::<Color>(),
        Err(ColorParseError::InvalidHex(_))
    ));
    assert!(matches!(
        "rgb(1, 2)".parse::<Color>(),
        Err(ColorParseError::InvalidFunction { kind: "rgb", .. })
    ));
    assert!(matches!(
        "rgb(1, 2, 256)".parse::<Color>(),
        Err(ColorParseError::InvalidFunction { .. })
    ));
    assert!(matches!(
        "256".parse::<Color>(),
        Err(ColorParseError::OutOfRange(_))
    ));
    assert!(matches!(
        "hsl(0, 0, 2)".parse::<Color>(),
        Err(ColorParseError::OutOfRange(_))
    ));
}

#[test]
fn parse_error_messages_name_the_input() {
    let err = "#12".parse::<Color>().unwrap_err();
    assert!(err.to_string().contains("#12"));
}
