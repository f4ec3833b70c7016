//! Helpers shared by the unit tests.

use std::env;

/// Environment variables consulted by color detection.
pub const COLOR_ENV_VARS: &[&str] = &[
    "TERM",
    "COLORTERM",
    "ConEmuANSI",
    "ANSICON",
    "WT_SESSION",
    "MSYSTEM",
    "NO_COLOR",
    "FORCE_COLOR",
];

/// RAII guard for temporarily setting or removing an environment variable.
///
/// The original value is restored (or the variable removed) on drop.
///
/// # Safety
///
/// Mutating the environment is only sound while no other thread reads it;
/// every test using this guard must carry `#[serial_test::serial]`.
pub struct ScopedEnv {
    key: String,
    original: Option<String>,
}

impl ScopedEnv {
    /// Sets an environment variable and stores the original value for restoration.
    pub fn new(key: &str, value: &str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            original,
        }
    }

    /// Removes an environment variable and stores the original value for restoration.
    pub fn unset(key: &str) -> Self {
        let original = env::var(key).ok();
        unsafe {
            env::remove_var(key);
        }
        Self {
            key: key.to_string(),
            original,
        }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        match &self.original {
            Some(val) => unsafe { env::set_var(&self.key, val) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

/// Removes every color related variable for the lifetime of the returned guards.
pub fn clear_color_env() -> Vec<ScopedEnv> {
    COLOR_ENV_VARS.iter().map(|key| ScopedEnv::unset(key)).collect()
}
