//! Unit tests for config module
//!
//! Tests configuration types, defaults, validation and the file loader.

#![allow(clippy::panic)]

use std::fs;

use tempfile::TempDir;

use crate::BridgeError;
use crate::config::{Config, DEFAULT_PORT, LogLevel};

#[test]
fn config_default() {
    let config = Config::default();

    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.server.host, None);
    assert_eq!(config.audio.helper, "pactl");
    assert_eq!(config.audio.cache_ttl_secs, 10);
    assert_eq!(config.audio.helper_timeout_secs, 10);
    assert_eq!(config.general.log_level, LogLevel::Info);
}

#[test]
fn config_serialize_toml() {
    let toml_str = toml::to_string(&Config::default()).unwrap();

    assert!(toml_str.contains("[general]"));
    assert!(toml_str.contains("[server]"));
    assert!(toml_str.contains("[audio]"));
    assert!(toml_str.contains("[media]"));
    assert!(!toml_str.contains("host"));
}

#[test]
fn config_serialize_roundtrip() {
    let original = Config::default();

    let toml_str = toml::to_string(&original).unwrap();
    let deserialized: Config = toml::from_str(&toml_str).unwrap();

    assert_eq!(original, deserialized);
}

#[test]
fn config_empty_toml() {
    let config: Config = toml::from_str("").unwrap();

    assert_eq!(config, Config::default());
}

#[test]
fn config_partial_sections_keep_defaults() {
    let toml_str = r#"
        [server]
        host = "192.168.1.20"

        [audio]
        cache_ttl_secs = 3
    "#;

    let config: Config = toml::from_str(toml_str).unwrap();

    assert_eq!(config.server.host.as_deref(), Some("192.168.1.20"));
    assert_eq!(config.server.port, DEFAULT_PORT);
    assert_eq!(config.audio.cache_ttl_secs, 3);
    assert_eq!(config.audio.helper_timeout_secs, 10);
}

#[test]
fn config_log_level_lowercase() {
    let config: Config = toml::from_str("[general]\nlog_level = \"debug\"").unwrap();

    assert_eq!(config.general.log_level, LogLevel::Debug);
    assert_eq!(config.general.log_level.to_string(), "debug");
}

#[test]
fn config_invalid_toml() {
    let invalid_toml = r#"
        [server
        port = 
    "#;

    let result = Config::from_toml(invalid_toml, None);

    assert!(matches!(
        result,
        Err(BridgeError::TomlParseError { ref location, .. }) if location == "string"
    ));
}

#[test]
fn config_unknown_fields() {
    let toml_with_unknown = r#"
        [general]
        log_level = "info"
        unknown_field = "should be ignored"

        [unknown_section]
        some_field = "ignored"
    "#;

    let config: Config = toml::from_str(toml_with_unknown).unwrap();
    assert_eq!(config.general.log_level, LogLevel::Info);
}

#[test]
fn validate_rejects_zero_helper_timeout() {
    let mut config = Config::default();
    config.audio.helper_timeout_secs = 0;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("helper_timeout_secs"));
}

#[test]
fn validate_rejects_bad_player_pattern() {
    let mut config = Config::default();
    config.media.ignored_players = vec!["chromium(".to_string()];

    let err = config.validate().unwrap_err();
    assert!(matches!(err, BridgeError::ConfigValidation { ref component, .. } if component == "media"));
}

#[test]
fn load_creates_missing_file_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested/config.toml");

    let config = Config::load(&path).unwrap();

    assert_eq!(config, Config::default());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with("# media-bridge configuration file"));
    assert!(written.contains("port = 8765"));
}

#[test]
fn ensure_file_reports_creation_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    assert!(Config::ensure_file(&path).unwrap());
    assert!(!Config::ensure_file(&path).unwrap());
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn ensure_file_keeps_user_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9001\n").unwrap();

    assert!(!Config::ensure_file(&path).unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "[server]\nport = 9001\n");
}

#[test]
fn load_reads_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[server]\nport = 9001\n").unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(config.server.port, 9001);
}

#[test]
fn load_rejects_invalid_values() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[media]\nartwork_timeout_secs = 0\n").unwrap();

    assert!(Config::load(&path).is_err());
}
