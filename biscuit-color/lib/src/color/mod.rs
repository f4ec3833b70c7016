//! Color-space conversion utilities
//!
//! Pure functions translating between hex strings, RGB triples, the
//! 256-color palette and the basic 16 ANSI color codes.

pub mod ansi;
pub mod hsl;
pub mod palette;
pub mod rgb;

pub use ansi::{BasicColor, ansi_to_rgb, rgb_to_ansi, rgb_to_basic};
pub use hsl::{hsl_to_rgb, rgb_to_hsl};
pub use palette::{
    c256_to_rgb, c256_to_rgb_analytic, rgb_to_256, rgb_to_256_analytic, rgb_to_256_table,
};
pub use rgb::{ColorError, Rgb, hex_to_rgb, rgb_to_hex};
