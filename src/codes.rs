//! Named SGR codes.
//!
//! Every constant is the single-code escape sequence for a standard
//! ECMA-48 SGR parameter, built at compile time with [`sgr!`](crate::sgr).
//! The numeric values are part of the public contract: changing one is a
//! compatibility break for anything that writes them to a terminal.

/// A named SGR code with its escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCode {
    /// Kebab-case name (e.g. `fg-bright-red`)
    pub name: &'static str,
    /// Numeric SGR parameter
    pub code: u8,
    /// The escape sequence, `ESC[<code>m`
    pub sequence: &'static str,
}

macro_rules! named_codes {
    ($($(#[$meta:meta])* $ident:ident = $code:literal, $name:literal;)*) => {
        $(
            $(#[$meta])*
            pub const $ident: &str = crate::sgr!($code);
        )*

        /// Every named code, in declaration order.
        pub const NAMED_CODES: &[NamedCode] = &[
            $(NamedCode { name: $name, code: $code, sequence: $ident },)*
        ];
    };
}

named_codes! {
    // Attributes
    /// [0] Resets all attributes.
    RESET = 0, "reset";
    /// [1]
    BOLD = 1, "bold";
    /// [2]
    FAINT = 2, "faint";
    /// [3]
    ITALIC = 3, "italic";
    /// [4]
    UNDERLINE = 4, "underline";
    /// [5]
    BLINK_SLOW = 5, "blink-slow";
    /// [6]
    BLINK_RAPID = 6, "blink-rapid";
    /// [7] Swaps foreground and background colors.
    REVERSE_VIDEO = 7, "reverse-video";
    /// [8]
    CONCEAL = 8, "conceal";
    /// [9]
    CROSSED_OUT = 9, "crossed-out";
    /// [10]
    PRIMARY_FONT = 10, "primary-font";
    /// [11]
    ALTERNATIVE_FONT_1 = 11, "alternative-font-1";
    /// [12]
    ALTERNATIVE_FONT_2 = 12, "alternative-font-2";
    /// [13]
    ALTERNATIVE_FONT_3 = 13, "alternative-font-3";
    /// [14]
    ALTERNATIVE_FONT_4 = 14, "alternative-font-4";
    /// [15]
    ALTERNATIVE_FONT_5 = 15, "alternative-font-5";
    /// [16]
    ALTERNATIVE_FONT_6 = 16, "alternative-font-6";
    /// [17]
    ALTERNATIVE_FONT_7 = 17, "alternative-font-7";
    /// [18]
    ALTERNATIVE_FONT_8 = 18, "alternative-font-8";
    /// [19]
    ALTERNATIVE_FONT_9 = 19, "alternative-font-9";
    /// [20]
    FRAKTUR = 20, "fraktur";
    /// [21]
    DOUBLY_UNDERLINE = 21, "doubly-underline";
    /// [22] Neither bold nor faint.
    NORMAL_COLOR_OR_INTENSITY = 22, "normal-color-or-intensity";
    /// [23]
    NOT_ITALIC_OR_FRAKTUR = 23, "not-italic-or-fraktur";
    /// [24]
    UNDERLINE_OFF = 24, "underline-off";
    /// [25]
    BLINK_OFF = 25, "blink-off";
    /// [27]
    INVERSE_OFF = 27, "inverse-off";
    /// [28] Undoes [`CONCEAL`].
    REVEAL = 28, "reveal";
    /// [29]
    NOT_CROSSED_OUT = 29, "not-crossed-out";
    /// [51]
    FRAMED = 51, "framed";
    /// [52]
    ENCIRCLED = 52, "encircled";
    /// [53]
    OVERLINED = 53, "overlined";
    /// [54]
    NOT_FRAMED_OR_ENCIRCLED = 54, "not-framed-or-encircled";
    /// [55]
    NOT_OVERLINED = 55, "not-overlined";
    /// [60] Ideogram underline or right side line.
    IDEOGRAM_UNDERLINE = 60, "ideogram-underline";
    /// [61]
    IDEOGRAM_DOUBLE_UNDERLINE = 61, "ideogram-double-underline";
    /// [62] Ideogram overline or left side line.
    IDEOGRAM_OVERLINE = 62, "ideogram-overline";
    /// [63]
    IDEOGRAM_DOUBLE_OVERLINE = 63, "ideogram-double-overline";
    /// [64]
    IDEOGRAM_STRESS_MARKING = 64, "ideogram-stress-marking";
    /// [65] Resets 60-64.
    IDEOGRAM_ATTRIBUTES_OFF = 65, "ideogram-attributes-off";
    // Standard foreground colors
    /// [30]
    FG_BLACK = 30, "fg-black";
    /// [31]
    FG_RED = 31, "fg-red";
    /// [32]
    FG_GREEN = 32, "fg-green";
    /// [33]
    FG_YELLOW = 33, "fg-yellow";
    /// [34]
    FG_BLUE = 34, "fg-blue";
    /// [35]
    FG_MAGENTA = 35, "fg-magenta";
    /// [36]
    FG_CYAN = 36, "fg-cyan";
    /// [37]
    FG_WHITE = 37, "fg-white";
    // Bright foreground colors
    /// [90]
    FG_BRIGHT_BLACK = 90, "fg-bright-black";
    /// [91]
    FG_BRIGHT_RED = 91, "fg-bright-red";
    /// [92]
    FG_BRIGHT_GREEN = 92, "fg-bright-green";
    /// [93]
    FG_BRIGHT_YELLOW = 93, "fg-bright-yellow";
    /// [94]
    FG_BRIGHT_BLUE = 94, "fg-bright-blue";
    /// [95]
    FG_BRIGHT_MAGENTA = 95, "fg-bright-magenta";
    /// [96]
    FG_BRIGHT_CYAN = 96, "fg-bright-cyan";
    /// [97]
    FG_BRIGHT_WHITE = 97, "fg-bright-white";
    /// [39] Default foreground color.
    FG_DEFAULT = 39, "fg-default";
    // Standard background colors
    /// [40]
    BG_BLACK = 40, "bg-black";
    /// [41]
    BG_RED = 41, "bg-red";
    /// [42]
    BG_GREEN = 42, "bg-green";
    /// [43]
    BG_YELLOW = 43, "bg-yellow";
    /// [44]
    BG_BLUE = 44, "bg-blue";
    /// [45]
    BG_MAGENTA = 45, "bg-magenta";
    /// [46]
    BG_CYAN = 46, "bg-cyan";
    /// [47]
    BG_WHITE = 47, "bg-white";
    // Bright background colors
    /// [100]
    BG_BRIGHT_BLACK = 100, "bg-bright-black";
    /// [101]
    BG_BRIGHT_RED = 101, "bg-bright-red";
    /// [102]
    BG_BRIGHT_GREEN = 102, "bg-bright-green";
    /// [103]
    BG_BRIGHT_YELLOW = 103, "bg-bright-yellow";
    /// [104]
    BG_BRIGHT_BLUE = 104, "bg-bright-blue";
    /// [105]
    BG_BRIGHT_MAGENTA = 105, "bg-bright-magenta";
    /// [106]
    BG_BRIGHT_CYAN = 106, "bg-bright-cyan";
    /// [107]
    BG_BRIGHT_WHITE = 107, "bg-bright-white";
    /// [49] Default background color.
    BG_DEFAULT = 49, "bg-default";
}

/// Look up a named code.
///
/// Matching ignores ASCII case and `-`, `_` or space separators, so
/// `FgBrightRed`, `fg_bright_red` and `fg-bright-red` all resolve.
pub fn lookup_code(name: &str) -> Option<&'static NamedCode> {
    let wanted = normalize(name);
    if wanted.is_empty() {
        return None;
    }
    NAMED_CODES.iter().find(|c| normalize(c.name) == wanted)
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
