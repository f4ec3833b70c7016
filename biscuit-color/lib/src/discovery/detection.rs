use std::env;

use serde::{Deserialize, Serialize};

/// How many colors the host terminal can display.
///
/// Levels are ordered, so `level >= ColorLevel::Color256` reads naturally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColorLevel {
    /// no color support
    NoColor,
    /// 16 colors (8 normal plus "bright" variants)
    Basic16,
    /// 256 color palette (8 bit)
    Color256,
    /// 16 million colors (24 bit)
    TrueColor,
}

/// `TERM` values known to render basic ANSI color.
const COLOR_TERMS: &[&str] = &[
    "xterm",
    "xterm-color",
    "xterm-256color",
    "screen",
    "screen-256color",
    "tmux",
    "tmux-256color",
    "rxvt-unicode",
    "rxvt-unicode-256color",
    "linux",
    "cygwin",
    "alacritty",
];

/// Reads an environment variable, treating empty and non-unicode values as unset.
fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.is_empty())
}

fn is_con_emu_ansi() -> bool {
    env::var("ConEmuANSI").is_ok_and(|value| value == "ON")
}

fn is_ansicon() -> bool {
    env_value("ANSICON").is_some()
}

/// Whether a `TERM` value names a color capable terminal type.
fn is_color_term(term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    COLOR_TERMS.contains(&term)
        || term.starts_with("xterm")
        || term.contains("256color")
        || term.contains("-color")
        || term.ends_with("color")
}

/// Whether the process runs inside an MSYS2 / MinGW shell.
///
/// Detected through a non-empty `MSYSTEM` environment variable.
pub fn is_msys() -> bool {
    env_value("MSYSTEM").is_some()
}

/// Returns whether the terminal supports basic ANSI colors.
///
/// Signals are checked in order:
///
/// 1. `ConEmuANSI=ON`
/// 2. `ANSICON` or `WT_SESSION` set (ANSICON, Windows Terminal)
/// 3. `TERM=dumb` disables color
/// 4. `COLORTERM` set to anything
/// 5. `TERM` names a known color terminal, or contains `256color` / `-color`
///
/// An unset `TERM` with none of the override variables reports `false`.
pub fn is_support_color() -> bool {
    if is_con_emu_ansi() {
        tracing::debug!(source = "ConEmuANSI", "color supported");
        return true;
    }

    if is_ansicon() || env_value("WT_SESSION").is_some() {
        tracing::debug!(source = "ANSICON/WT_SESSION", "color supported");
        return true;
    }

    let term = env_value("TERM").unwrap_or_default();
    if term == "dumb" {
        tracing::debug!(source = "TERM", term = %term, "dumb terminal, color disabled");
        return false;
    }

    if let Some(colorterm) = env_value("COLORTERM") {
        tracing::debug!(source = "COLORTERM", colorterm = %colorterm, "color supported");
        return true;
    }

    let supported = is_color_term(&term);
    tracing::debug!(source = "TERM", term = %term, supported, "checked TERM for color support");
    supported
}

/// Returns whether the terminal supports the 256 color palette.
///
/// True when `TERM` contains `256color`, `ConEmuANSI=ON`, or `ANSICON` is set.
pub fn is_support_256_color() -> bool {
    let term = env_value("TERM").unwrap_or_default();
    let supported = term.contains("256color") || is_con_emu_ansi() || is_ansicon();
    tracing::debug!(term = %term, supported, "checked 256 color support");
    supported
}

/// Returns whether the terminal supports 24-bit color.
///
/// True when `COLORTERM` is `truecolor` or `24bit` (any case), or `TERM`
/// contains `truecolor`.
pub fn is_support_true_color() -> bool {
    if let Some(colorterm) = env_value("COLORTERM") {
        let colorterm_lower = colorterm.to_lowercase();
        if colorterm_lower == "truecolor" || colorterm_lower == "24bit" {
            tracing::debug!(
                source = "COLORTERM",
                colorterm = %colorterm,
                "Detected truecolor support from COLORTERM env var"
            );
            return true;
        }
    }

    let supported = env_value("TERM").is_some_and(|term| term.contains("truecolor"));
    tracing::debug!(source = "TERM", supported, "checked TERM for truecolor support");
    supported
}

/// Resolves `FORCE_COLOR` into a color level, if it is set.
fn forced_level() -> Option<ColorLevel> {
    let value = env_value("FORCE_COLOR")?;
    let level = match value.to_lowercase().as_str() {
        "0" | "false" => ColorLevel::NoColor,
        "2" => ColorLevel::Color256,
        "3" => ColorLevel::TrueColor,
        _ => ColorLevel::Basic16,
    };
    Some(level)
}

/// Classifies the terminal's color support from the current environment.
///
/// `NO_COLOR` and `FORCE_COLOR` take precedence; after that `TERM=dumb`
/// disables color and the truecolor, 256 color and basic checks run in
/// that order. An MSYS shell counts as basic color support.
///
/// ```
/// use biscuit_color::discovery::detection::{detect_color_level, ColorLevel};
///
/// let level = detect_color_level();
/// if level >= ColorLevel::Color256 {
///     println!("\x1b[38;5;208morange\x1b[0m");
/// }
/// ```
pub fn detect_color_level() -> ColorLevel {
    if env_value("NO_COLOR").is_some() {
        tracing::debug!(level = ?ColorLevel::NoColor, source = "NO_COLOR", "color level");
        return ColorLevel::NoColor;
    }

    if let Some(level) = forced_level() {
        tracing::debug!(?level, source = "FORCE_COLOR", "color level");
        return level;
    }

    if env_value("TERM").is_some_and(|term| term == "dumb") {
        tracing::debug!(level = ?ColorLevel::NoColor, source = "TERM", "color level");
        return ColorLevel::NoColor;
    }

    let level = if is_support_true_color() {
        ColorLevel::TrueColor
    } else if is_support_256_color() {
        ColorLevel::Color256
    } else if is_support_color() || is_msys() {
        ColorLevel::Basic16
    } else {
        ColorLevel::NoColor
    };

    tracing::debug!(?level, source = "environment", "color level");
    level
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{ScopedEnv, clear_color_env};

    #[test]
    #[serial_test::serial]
    fn msys_tracks_msystem() {
        let _clean = clear_color_env();

        {
            let _msys = ScopedEnv::new("MSYSTEM", "MINGW64");
            assert!(is_msys());
        }
        assert!(!is_msys());

        let _empty = ScopedEnv::new("MSYSTEM", "");
        assert!(!is_msys());
    }

    #[test]
    #[serial_test::serial]
    fn no_term_means_no_color() {
        let _clean = clear_color_env();

        assert!(!is_support_color());
        assert!(!is_support_256_color());
        assert!(!is_support_true_color());
        assert_eq!(detect_color_level(), ColorLevel::NoColor);
    }

    #[test]
    #[serial_test::serial]
    fn con_emu_enables_color() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("ConEmuANSI", "ON");

        assert!(is_support_color());
        assert!(is_support_256_color());
    }

    #[test]
    #[serial_test::serial]
    fn con_emu_is_case_sensitive() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("ConEmuANSI", "on");

        assert!(!is_support_color());
    }

    #[test]
    #[serial_test::serial]
    fn ansicon_enables_color() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("ANSICON", "189x2000 (189x43)");

        assert!(is_support_color());
        assert!(is_support_256_color());
    }

    #[test]
    #[serial_test::serial]
    fn windows_terminal_enables_color() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("WT_SESSION", "0b8c9a4e-1d2f-4f0a-9a77-3e4d5c6b7a89");

        assert!(is_support_color());
        assert!(!is_support_256_color());
    }

    #[test]
    #[serial_test::serial]
    fn colorterm_truecolor() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("COLORTERM", "truecolor");

        assert!(is_support_true_color());
        assert!(is_support_color());
        assert_eq!(detect_color_level(), ColorLevel::TrueColor);
    }

    #[test]
    #[serial_test::serial]
    fn colorterm_24bit_any_case() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("COLORTERM", "24BIT");

        assert!(is_support_true_color());
    }

    #[test]
    #[serial_test::serial]
    fn known_color_terms() {
        let _clean = clear_color_env();

        for term in [
            "screen-256color",
            "tmux-256color",
            "rxvt-unicode-256color",
            "xterm-vt220",
            "xterm",
            "linux",
            "cygwin",
            "putty-color",
        ] {
            let _env = ScopedEnv::new("TERM", term);
            assert!(is_support_color(), "TERM={term}");
        }
    }

    #[test]
    #[serial_test::serial]
    fn unknown_term_has_no_color() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("TERM", "vt52");

        assert!(!is_support_color());
    }

    #[test]
    #[serial_test::serial]
    fn dumb_term_overrides_colorterm() {
        let _clean = clear_color_env();
        let _term = ScopedEnv::new("TERM", "dumb");
        let _colorterm = ScopedEnv::new("COLORTERM", "truecolor");

        assert!(!is_support_color());
        assert_eq!(detect_color_level(), ColorLevel::NoColor);
    }

    #[test]
    #[serial_test::serial]
    fn term_256color() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("TERM", "xterm-256color");

        assert!(is_support_256_color());
        assert!(!is_support_true_color());
        assert_eq!(detect_color_level(), ColorLevel::Color256);
    }

    #[test]
    #[serial_test::serial]
    fn term_truecolor() {
        let _clean = clear_color_env();
        let _env = ScopedEnv::new("TERM", "xterm-truecolor");

        assert!(is_support_true_color());
    }

    #[test]
    #[serial_test::serial]
    fn basic_level_from_term_or_msys() {
        let _clean = clear_color_env();

        {
            let _env = ScopedEnv::new("TERM", "xterm");
            assert_eq!(detect_color_level(), ColorLevel::Basic16);
        }

        let _env = ScopedEnv::new("MSYSTEM", "MINGW64");
        assert_eq!(detect_color_level(), ColorLevel::Basic16);
    }

    #[test]
    #[serial_test::serial]
    fn no_color_wins() {
        let _clean = clear_color_env();
        let _colorterm = ScopedEnv::new("COLORTERM", "truecolor");
        let _no_color = ScopedEnv::new("NO_COLOR", "1");

        assert_eq!(detect_color_level(), ColorLevel::NoColor);
        // the individual checks do not consult NO_COLOR
        assert!(is_support_true_color());
    }

    #[test]
    #[serial_test::serial]
    fn force_color_levels() {
        let _clean = clear_color_env();

        for (value, level) in [
            ("0", ColorLevel::NoColor),
            ("false", ColorLevel::NoColor),
            ("1", ColorLevel::Basic16),
            ("true", ColorLevel::Basic16),
            ("2", ColorLevel::Color256),
            ("3", ColorLevel::TrueColor),
        ] {
            let _env = ScopedEnv::new("FORCE_COLOR", value);
            assert_eq!(detect_color_level(), level, "FORCE_COLOR={value}");
        }
    }

    #[test]
    #[serial_test::serial]
    fn detection_is_not_cached() {
        let _clean = clear_color_env();
        assert!(!is_support_color());

        let term = ScopedEnv::new("TERM", "screen");
        assert!(is_support_color());

        drop(term);
        assert!(!is_support_color());
    }

    #[test]
    fn color_levels_are_ordered() {
        assert!(ColorLevel::NoColor < ColorLevel::Basic16);
        assert!(ColorLevel::Basic16 < ColorLevel::Color256);
        assert!(ColorLevel::Color256 < ColorLevel::TrueColor);
    }

    #[test]
    fn color_level_serializes_by_name() {
        let json = serde_json::to_string(&ColorLevel::Color256).unwrap();
        assert_eq!(json, "\"Color256\"");
        let level: ColorLevel = serde_json::from_str("\"TrueColor\"").unwrap();
        assert_eq!(level, ColorLevel::TrueColor);
    }
}
