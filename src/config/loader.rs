//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FacilitateError, FacilitateResult};

use super::types::{ColorMode, Config};
use super::ConfigWarning;

/// Env var naming an explicit config file
pub const CONFIG_ENV: &str = "FACILITATE_CONFIG";

/// Parse `path`, reporting unknown keys as warnings instead of errors
pub fn load_with_warnings(path: &Path) -> FacilitateResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    let invalid = |message: String| FacilitateError::InvalidConfig {
        file: path.to_path_buf(),
        message,
    };

    let mut ignored = Vec::new();
    let config: Config = serde_ignored::deserialize(
        toml::de::Deserializer::new(&content),
        |unknown| ignored.push(unknown.to_string()),
    )
    .map_err(|e| invalid(e.to_string()))?;

    let warnings = ignored
        .iter()
        .map(|dotted| {
            let key = dotted.rsplit('.').next().unwrap_or(dotted).to_string();
            ConfigWarning {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve config file, read it if present, then apply env overrides
///
/// A file named by `FACILITATE_CONFIG` must exist; the default location
/// is optional.
pub fn load_layered(
    get_env: impl Fn(&str) -> Option<String>,
) -> FacilitateResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match get_env(CONFIG_ENV) {
        Some(explicit) => load_with_warnings(Path::new(&explicit))?,
        None => match user_config_path(&get_env) {
            Some(path) if path.exists() => load_with_warnings(&path)?,
            _ => (Config::default(), Vec::new()),
        },
    };

    Ok((with_env_overrides(config, get_env), warnings))
}

/// Apply environment variable overrides (FACILITATE_* prefix)
pub fn with_env_overrides(mut config: Config, get_env: impl Fn(&str) -> Option<String>) -> Config {
    let non_empty = |key: &str| get_env(key).filter(|v| !v.trim().is_empty());

    if let Some(cluster) = non_empty("FACILITATE_CLUSTER") {
        config.defaults.cluster = Some(cluster);
    }
    if let Some(service) = non_empty("FACILITATE_SERVICE") {
        config.defaults.service = Some(service);
    }
    if let Some(user) = non_empty("FACILITATE_USER") {
        config.defaults.user = user;
    }
    if let Some(identity) = non_empty("FACILITATE_IDENTITY_FILE") {
        config.defaults.identity_file = identity;
    }
    if let Some(bin) = non_empty("FACILITATE_AWS_BIN") {
        config.aws.bin = bin;
    }
    if let Some(profile) = non_empty("FACILITATE_AWS_PROFILE") {
        config.aws.profile = Some(profile);
    }
    if let Some(region) = non_empty("FACILITATE_AWS_REGION") {
        config.aws.region = Some(region);
    }
    if let Some(bin) = non_empty("FACILITATE_SSH_BIN") {
        config.ssh.bin = bin;
    }
    if let Some(color) = non_empty("FACILITATE_COLOR") {
        match ColorMode::parse(&color) {
            Some(mode) => config.output.color = mode,
            None => debug!(value = %color, "ignoring unknown FACILITATE_COLOR"),
        }
    }

    config
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    expand_home_with(path, dirs::home_dir())
}

fn expand_home_with(path: &str, home: Option<PathBuf>) -> PathBuf {
    let Some(home) = home else {
        return PathBuf::from(path);
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

fn user_config_path(get_env: &impl Fn(&str) -> Option<String>) -> Option<PathBuf> {
    get_env("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .map(|dir| dir.join("facilitate/config.toml"))
}

/// 1-based line where `key` is assigned
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

const KNOWN_KEYS: &[&str] = &[
    "defaults",
    "cluster",
    "service",
    "user",
    "identity_file",
    "aws",
    "bin",
    "profile",
    "region",
    "ssh",
    "extra_args",
    "use_private_ip",
    "output",
    "color",
    "animation",
    "unicode",
];

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(dist, _)| *dist <= 2)
        .min_by_key(|(dist, _)| *dist)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitute = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitute.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
