//! Configuration module for facilitate
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority, applied by the binary)
//! 2. Environment variables (FACILITATE_*)
//! 3. `$FACILITATE_CONFIG` or `<config dir>/facilitate/config.toml`
//! 4. Built-in defaults (lowest priority)

mod loader;
#[cfg(test)]
mod tests;
mod types;

use std::path::PathBuf;

pub use loader::{expand_home, CONFIG_ENV};
pub use types::{
    AnimationMode, AwsConfig, ColorMode, Config, DefaultsConfig, OutputConfig, SshConfig,
    DEFAULT_IDENTITY_FILE, DEFAULT_USER,
};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}
