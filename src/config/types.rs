//! Configuration types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::FacilitateResult;
use crate::models::AddressKind;

use super::loader;
use super::ConfigWarning;

/// Default login user on ECS-optimized Amazon Linux AMIs
pub const DEFAULT_USER: &str = "ec2-user";
/// Default private key used for the ssh hop
pub const DEFAULT_IDENTITY_FILE: &str = "~/.ssh/id_rsa";

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub aws: AwsConfig,
    pub ssh: SshConfig,
    pub output: OutputConfig,
}

/// Fallbacks for `ecs exec` flags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub cluster: Option<String>,

    #[serde(default)]
    pub service: Option<String>,

    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default = "default_identity_file")]
    pub identity_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            cluster: None,
            service: None,
            user: default_user(),
            identity_file: default_identity_file(),
        }
    }
}

/// How the `aws` executable is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwsConfig {
    #[serde(default = "default_aws_bin")]
    pub bin: String,

    #[serde(default)]
    pub profile: Option<String>,

    #[serde(default)]
    pub region: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            bin: default_aws_bin(),
            profile: None,
            region: None,
        }
    }
}

/// How the `ssh` executable is invoked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SshConfig {
    #[serde(default = "default_ssh_bin")]
    pub bin: String,

    /// Inserted before the destination, e.g. `["-o", "StrictHostKeyChecking=accept-new"]`
    #[serde(default)]
    pub extra_args: Vec<String>,

    #[serde(default)]
    pub use_private_ip: bool,
}

impl Default for SshConfig {
    fn default() -> Self {
        Self {
            bin: default_ssh_bin(),
            extra_args: Vec::new(),
            use_private_ip: false,
        }
    }
}

impl SshConfig {
    pub fn address_kind(&self) -> AddressKind {
        if self.use_private_ip {
            AddressKind::Private
        } else {
            AddressKind::Public
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub color: ColorMode,

    #[serde(default)]
    pub animation: AnimationMode,

    #[serde(default = "default_true")]
    pub unicode: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            animation: AnimationMode::default(),
            unicode: true,
        }
    }
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Spinner animation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnimationMode {
    #[default]
    Auto,
    Always,
    Never,
}

fn default_user() -> String {
    DEFAULT_USER.to_string()
}

fn default_identity_file() -> String {
    DEFAULT_IDENTITY_FILE.to_string()
}

fn default_aws_bin() -> String {
    "aws".to_string()
}

fn default_ssh_bin() -> String {
    "ssh".to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> FacilitateResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FacilitateResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the user config (if any) with env overrides applied
    pub fn load_layered() -> FacilitateResult<(Self, Vec<ConfigWarning>)> {
        loader::load_layered(|key| std::env::var(key).ok())
    }

    /// Identity file with a leading `~` expanded
    pub fn identity_path(&self) -> PathBuf {
        loader::expand_home(&self.defaults.identity_file)
    }
}
