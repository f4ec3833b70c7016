//! The `Rgb` value type and hex string conversions.
//!
//! Two flavors of API live here:
//!
//! - [`Rgb::from_hex`] and the [`FromStr`] impl return a [`ColorError`] describing
//!   why the input was rejected.
//! - [`hex_to_rgb`] and [`rgb_to_hex`] never fail; invalid input produces an
//!   empty result which callers check with `is_empty()`.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing a color from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("hex color must have 3 or 6 digits, got {0}")]
    InvalidHexLength(usize),

    #[error("invalid hex digit in {0:?}")]
    InvalidHexDigit(String),

    #[error("invalid RGB triple {0:?}: expected three comma separated values in 0-255")]
    InvalidRgbTriple(String),
}

/// A 24-bit color made of three 8-bit channels.
///
/// ## Examples
///
/// ```
/// use biscuit_color::color::rgb::Rgb;
///
/// let rgb: Rgb = "#abc".parse().unwrap();
/// assert_eq!(rgb, Rgb::new(170, 187, 204));
/// assert_eq!(rgb.to_hex(), "aabbcc");
///
/// let rgb: Rgb = "170, 153, 205".parse().unwrap();
/// assert_eq!(rgb.to_hex(), "aa99cd");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    red: u8,
    green: u8,
    blue: u8,
}

impl Rgb {
    /// Creates a new color from its channel values.
    #[inline]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Builds a color from a packed `0xRRGGBB` value; the top byte is ignored.
    #[inline]
    pub const fn from_u32(packed: u32) -> Self {
        Self::new(
            ((packed >> 16) & 0xff) as u8,
            ((packed >> 8) & 0xff) as u8,
            (packed & 0xff) as u8,
        )
    }

    /// Returns the red channel value.
    #[inline]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green channel value.
    #[inline]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue channel value.
    #[inline]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// The channels as `[red, green, blue]`.
    #[inline]
    pub const fn to_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Formats the color as six lowercase hex digits with no `#` prefix.
    pub fn to_hex(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// Parses a hex color string.
    ///
    /// Accepted forms (case-insensitive, surrounding whitespace ignored):
    ///
    /// - `"abc"` / `"#abc"`: shorthand, each digit is doubled
    /// - `"aabbcc"` / `"#aabbcc"`
    /// - `"0xaabbcc"`
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let digits = if digits.len() == 8 {
            digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .unwrap_or(digits)
        } else {
            digits
        };

        let nibbles = digits
            .bytes()
            .map(|b| char::from(b).to_digit(16).map(|d| d as u8))
            .collect::<Option<Vec<u8>>>()
            .ok_or_else(|| ColorError::InvalidHexDigit(hex.to_string()))?;

        let nibbles = match nibbles.len() {
            3 => nibbles.iter().flat_map(|&n| [n, n]).collect(),
            6 => nibbles,
            n => return Err(ColorError::InvalidHexLength(n)),
        };

        Ok(Self::new(
            (nibbles[0] << 4) | nibbles[1],
            (nibbles[2] << 4) | nibbles[3],
            (nibbles[4] << 4) | nibbles[5],
        ))
    }

    fn from_triple(text: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidRgbTriple(text.to_string());

        let channels = text
            .split(',')
            .map(|part| part.trim().parse::<u8>())
            .collect::<Result<Vec<u8>, _>>()
            .map_err(|_| invalid())?;

        match channels.as_slice() {
            [r, g, b] => Ok(Self::new(*r, *g, *b)),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Parses either a hex color (see [`Rgb::from_hex`]) or a decimal
    /// `"r,g,b"` triple.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            Self::from_triple(s)
        } else {
            Self::from_hex(s)
        }
    }
}

impl From<[u8; 3]> for Rgb {
    #[inline]
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb> for [u8; 3] {
    #[inline]
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

/// Converts a hex color string to its `[red, green, blue]` channels.
///
/// Returns an empty `Vec` when the input is not a valid 3 or 6 digit hex
/// color, so callers test validity with `is_empty()`.
///
/// ## Examples
///
/// ```
/// use biscuit_color::color::rgb::hex_to_rgb;
///
/// assert_eq!(hex_to_rgb("#aa99cd"), vec![170, 153, 205]);
/// assert_eq!(hex_to_rgb("666"), vec![102, 102, 102]);
/// assert!(hex_to_rgb("13").is_empty());
/// ```
pub fn hex_to_rgb(hex: &str) -> Vec<u8> {
    match Rgb::from_hex(hex) {
        Ok(rgb) => rgb.to_array().to_vec(),
        Err(error) => {
            tracing::trace!(input = hex, %error, "rejected hex color");
            Vec::new()
        }
    }
}

/// Formats `[red, green, blue]` as six lowercase hex digits.
///
/// Each value is clamped to `0..=255`. Anything other than exactly three
/// values produces an empty string.
///
/// ## Examples
///
/// ```
/// use biscuit_color::color::rgb::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(&[170, 187, 204]), "aabbcc");
/// assert_eq!(rgb_to_hex(&[-20, 300, 15]), "00ff0f");
/// assert_eq!(rgb_to_hex(&[1, 2]), "");
/// ```
pub fn rgb_to_hex(rgb: &[i32]) -> String {
    match rgb {
        [r, g, b] => Rgb::new(clamp_channel(*r), clamp_channel(*g), clamp_channel(*b)).to_hex(),
        _ => String::new(),
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}
