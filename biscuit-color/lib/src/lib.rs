//! # biscuit-color
//!
//! Terminal color-capability detection and color-space conversion.
//!
//! This crate provides:
//!
//! - **Color Support**: classify the terminal as no color, basic 16 colors,
//!   256 colors or truecolor from the process environment
//! - **Console Detection**: check whether a stream is an interactive terminal
//! - **Hex / RGB**: parse and format `#abc`, `aabbcc` and `r,g,b` colors
//! - **256 Colors**: map between RGB and the xterm 256-color palette
//! - **ANSI Codes**: map RGB onto the 16 basic SGR color codes
//!
//! ## Quick Start
//!
//! ```
//! use biscuit_color::color::{rgb_to_256, rgb_to_ansi, Rgb};
//! use biscuit_color::discovery::{detect_color_level, ColorLevel};
//!
//! let orange: Rgb = "#ff8700".parse().unwrap();
//!
//! match detect_color_level() {
//!     ColorLevel::TrueColor => println!(
//!         "\x1b[38;2;{};{};{}morange\x1b[0m",
//!         orange.red(),
//!         orange.green(),
//!         orange.blue()
//!     ),
//!     ColorLevel::Color256 => println!(
//!         "\x1b[38;5;{}morange\x1b[0m",
//!         rgb_to_256(orange.red(), orange.green(), orange.blue())
//!     ),
//!     ColorLevel::Basic16 => println!(
//!         "\x1b[{}morange\x1b[0m",
//!         rgb_to_ansi(orange.red(), orange.green(), orange.blue(), false)
//!     ),
//!     ColorLevel::NoColor => println!("orange"),
//! }
//! ```
//!
//! ## Modules
//!
//! - [`discovery`] - Environment and stream inspection
//!   - [`discovery::detection`] - Color support levels
//!   - [`discovery::console`] - Interactive console checks
//! - [`color`] - Pure conversion functions
//!   - [`color::rgb`] - `Rgb` type and hex conversions
//!   - [`color::palette`] - 256-color palette lookups
//!   - [`color::ansi`] - Basic 16 color SGR codes
//!   - [`color::hsl`] - HSL conversions

pub mod color;
pub mod discovery;

#[cfg(test)]
mod test_helpers;
