//! Terminal capability utilities
//!
//! This module provides functions for detecting terminal color support
//! and whether a stream is attached to an interactive console. Every query
//! reads the process environment at call time; nothing is cached.

pub mod console;
pub mod detection;

pub use console::{ConsoleStream, is_console};
pub use detection::{
    ColorLevel, detect_color_level, is_msys, is_support_256_color, is_support_color,
    is_support_true_color,
};
