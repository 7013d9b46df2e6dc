//! Tests for the config module

use super::loader::{load_layered, with_env_overrides, CONFIG_ENV};
use super::types::*;
use crate::error::FacilitateError;
use crate::models::AddressKind;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(config.defaults.user, "ec2-user");
    assert_eq!(config.defaults.identity_file, "~/.ssh/id_rsa");
    assert_eq!(config.defaults.cluster, None);
    assert_eq!(config.aws.bin, "aws");
    assert_eq!(config.ssh.bin, "ssh");
    assert_eq!(config.ssh.address_kind(), AddressKind::Public);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[defaults]
cluster = "prod"
service = "web"
user = "ubuntu"

[aws]
profile = "ops"
region = "eu-west-1"

[ssh]
extra_args = ["-o", "StrictHostKeyChecking=accept-new"]
use_private_ip = true

[output]
color = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();
    assert_eq!(config.defaults.cluster.as_deref(), Some("prod"));
    assert_eq!(config.defaults.service.as_deref(), Some("web"));
    assert_eq!(config.defaults.user, "ubuntu");
    assert_eq!(config.defaults.identity_file, "~/.ssh/id_rsa");
    assert_eq!(config.aws.profile.as_deref(), Some("ops"));
    assert_eq!(config.aws.bin, "aws");
    assert_eq!(config.ssh.extra_args.len(), 2);
    assert_eq!(config.ssh.address_kind(), AddressKind::Private);
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(config.output.unicode);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults]\nclustr = \"prod\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.defaults.cluster, None);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "clustr");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("cluster"));
}

#[test]
fn test_load_rejects_malformed_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[defaults\ncluster = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, FacilitateError::InvalidConfig { .. }));
}

#[test]
fn test_env_overrides_win_over_file_values() {
    let mut config = Config::default();
    config.defaults.cluster = Some("from-file".to_string());

    let config = with_env_overrides(
        config,
        env_of(&[
            ("FACILITATE_CLUSTER", "from-env"),
            ("FACILITATE_USER", "admin"),
            ("FACILITATE_AWS_REGION", "us-east-2"),
            ("FACILITATE_COLOR", "ALWAYS"),
        ]),
    );

    assert_eq!(config.defaults.cluster.as_deref(), Some("from-env"));
    assert_eq!(config.defaults.user, "admin");
    assert_eq!(config.aws.region.as_deref(), Some("us-east-2"));
    assert_eq!(config.output.color, ColorMode::Always);
}

#[test]
fn test_env_overrides_ignore_empty_and_invalid_values() {
    let config = with_env_overrides(
        Config::default(),
        env_of(&[("FACILITATE_SERVICE", "  "), ("FACILITATE_COLOR", "rainbow")]),
    );

    assert_eq!(config.defaults.service, None);
    assert_eq!(config.output.color, ColorMode::Auto);
}

#[test]
fn test_load_layered_reads_xdg_config() {
    let dir = tempdir().unwrap();
    let app_dir = dir.path().join("facilitate");
    fs::create_dir_all(&app_dir).unwrap();
    fs::write(app_dir.join("config.toml"), "[defaults]\nservice = \"api\"\n").unwrap();

    let xdg = dir.path().to_string_lossy().to_string();
    let (config, warnings) = load_layered(env_of(&[("XDG_CONFIG_HOME", xdg.as_str())])).unwrap();

    assert_eq!(config.defaults.service.as_deref(), Some("api"));
    assert!(warnings.is_empty());
}

#[test]
fn test_load_layered_missing_default_file_is_fine() {
    let dir = tempdir().unwrap();
    let xdg = dir.path().to_string_lossy().to_string();

    let (config, _) = load_layered(env_of(&[("XDG_CONFIG_HOME", xdg.as_str())])).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_layered_explicit_file_must_exist() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml").to_string_lossy().to_string();

    let err = load_layered(env_of(&[(CONFIG_ENV, missing.as_str())])).unwrap_err();
    assert!(matches!(err, FacilitateError::Io(_)));
}
