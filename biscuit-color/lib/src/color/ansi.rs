//! Conversion between RGB colors and the 16 basic ANSI color codes.
//!
//! Basic colors are addressed with SGR parameters in four ranges:
//!
//! | Range     | Meaning              |
//! |-----------|----------------------|
//! | `30-37`   | standard foreground  |
//! | `40-47`   | standard background  |
//! | `90-97`   | bright foreground    |
//! | `100-107` | bright background    |

use serde::{Deserialize, Serialize};

use super::{palette::c256_to_rgb, rgb::Rgb};

/// SGR parameter of the first standard foreground color.
pub const FG_BASE: u8 = 30;

/// SGR parameter of the first standard background color.
pub const BG_BASE: u8 = 40;

/// Distance between the standard and bright ranges.
const BRIGHT_OFFSET: u8 = 60;

/// Basic 8 color mode (ANSI colors 0-7 and bright variants 8-15).
///
/// Discriminants match the color's index in the 256-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl BasicColor {
    /// All basic colors in palette order.
    pub const ALL: [BasicColor; 16] = [
        BasicColor::Black,
        BasicColor::Red,
        BasicColor::Green,
        BasicColor::Yellow,
        BasicColor::Blue,
        BasicColor::Magenta,
        BasicColor::Cyan,
        BasicColor::White,
        BasicColor::BrightBlack,
        BasicColor::BrightRed,
        BasicColor::BrightGreen,
        BasicColor::BrightYellow,
        BasicColor::BrightBlue,
        BasicColor::BrightMagenta,
        BasicColor::BrightCyan,
        BasicColor::BrightWhite,
    ];

    /// Index of this color in the 256-color palette (0-15).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this is one of the bright variants.
    #[inline]
    pub const fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// The SGR foreground parameter (`30-37` or `90-97`).
    pub const fn fg_code(self) -> u8 {
        let hue = self.index() % 8;
        if self.is_bright() {
            FG_BASE + BRIGHT_OFFSET + hue
        } else {
            FG_BASE + hue
        }
    }

    /// The SGR background parameter (`40-47` or `100-107`).
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + (BG_BASE - FG_BASE)
    }

    /// The SGR parameter for either layer.
    #[inline]
    pub const fn code(self, is_background: bool) -> u8 {
        if is_background { self.bg_code() } else { self.fg_code() }
    }

    /// The RGB value the xterm palette assigns this color.
    #[inline]
    pub fn rgb(self) -> Rgb {
        c256_to_rgb(self.index())
    }

    /// Resolves an SGR color parameter from any of the four basic ranges.
    ///
    /// ```
    /// use biscuit_color::color::ansi::BasicColor;
    ///
    /// assert_eq!(BasicColor::from_ansi_code(31), Some(BasicColor::Red));
    /// assert_eq!(BasicColor::from_ansi_code(107), Some(BasicColor::BrightWhite));
    /// assert_eq!(BasicColor::from_ansi_code(38), None);
    /// ```
    pub fn from_ansi_code(code: u8) -> Option<Self> {
        let index = match code {
            30..=37 => code - 30,
            40..=47 => code - 40,
            90..=97 => code - 90 + 8,
            100..=107 => code - 100 + 8,
            _ => return None,
        };
        Self::ALL.get(usize::from(index)).copied()
    }
}

/// Picks the basic color an RGB value falls into.
///
/// Pure grays split at the channel midpoint (`> 127` is lit). Other colors
/// light every channel at or above the channel average, where the average is
/// taken over the 8-bit wrapping sum of the channels. Any channel at full
/// intensity selects the bright variant, as does exact mid gray `(128,128,128)`.
pub fn rgb_to_basic(rgb: Rgb) -> BasicColor {
    let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());

    if (r, g, b) == (0x80, 0x80, 0x80) {
        return BasicColor::BrightBlack;
    }
    let bright = r == 0xff || g == 0xff || b == 0xff;

    let (lit_r, lit_g, lit_b) = if r == g && g == b {
        (r > 0x7f, g > 0x7f, b > 0x7f)
    } else {
        let average = r.wrapping_add(g).wrapping_add(b) / 3;
        (r >= average, g >= average, b >= average)
    };

    let hue = u8::from(lit_r)
        + match (lit_g, lit_b) {
            (true, true) => 6,
            (true, false) => 2,
            (false, true) => 4,
            (false, false) => 0,
        };

    BasicColor::ALL[usize::from(hue + if bright { 8 } else { 0 })]
}

/// Converts an RGB triple to the SGR parameter of the matching basic color.
///
/// ## Examples
///
/// ```
/// use biscuit_color::color::ansi::rgb_to_ansi;
///
/// assert_eq!(rgb_to_ansi(204, 204, 204, false), 37);
/// assert_eq!(rgb_to_ansi(102, 102, 102, true), 40);
/// assert_eq!(rgb_to_ansi(127, 127, 127, false), 30);
/// assert_eq!(rgb_to_ansi(128, 128, 128, false), 90);
/// assert_eq!(rgb_to_ansi(255, 255, 255, true), 107);
/// ```
pub fn rgb_to_ansi(r: u8, g: u8, b: u8, is_background: bool) -> u8 {
    rgb_to_basic(Rgb::new(r, g, b)).code(is_background)
}

/// The RGB value of a basic SGR color parameter, or `None` when `code` is
/// not in one of the four basic ranges.
pub fn ansi_to_rgb(code: u8) -> Option<Rgb> {
    BasicColor::from_ansi_code(code).map(BasicColor::rgb)
}
