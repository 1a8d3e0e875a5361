//! Tests for config functionality.

use super::model::default_data_file;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::JotterError;
use crate::test_support::DirGuard;
use serial_test::serial;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.data_file, PathBuf::from("data/jotter.jsonl"));
    assert_eq!(config.data_file, default_data_file());
    assert_eq!(config.bot_name, "Jotter");
    assert!(config.show_border);
}

#[test]
fn test_parse_empty_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r#"
bot_name: Ada
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.bot_name, "Ada");
    assert_eq!(config.data_file, default_data_file());
    assert!(config.show_border);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
data_file: /tmp/tasks.jsonl
bot_name: Ada
show_border: false
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.data_file, PathBuf::from("/tmp/tasks.jsonl"));
    assert_eq!(config.bot_name, "Ada");
    assert!(!config.show_border);
}

#[test]
fn test_parse_yaml_with_unknown_fields() {
    let yaml = r#"
bot_name: Ada
theme: dark
plugins:
  - calendar
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.bot_name, "Ada");
}

#[test]
fn test_invalid_yaml_is_a_config_error() {
    let err = Config::from_yaml("show_border: [not, a, bool]").unwrap_err();
    assert!(matches!(err, JotterError::Config(_)));
}

#[test]
fn test_validate_rejects_blank_values() {
    let err = Config::from_yaml("bot_name: '   '").unwrap_err();
    assert!(err.to_string().contains("bot_name"));

    let err = Config::from_yaml("data_file: ''").unwrap_err();
    assert!(err.to_string().contains("data_file"));
}

#[test]
fn test_to_yaml_round_trip() {
    let config = Config {
        bot_name: "Ada".to_string(),
        show_border: false,
        ..Config::default()
    };

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("bot_name: Ada"));
    assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
}

#[test]
fn test_config_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.yaml");
    std::fs::write(&path, "bot_name: FromFile\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.bot_name, "FromFile");
}

#[test]
fn test_config_load_missing_file() {
    let err = Config::load("/nonexistent/jotter.yaml").unwrap_err();
    assert!(matches!(err, JotterError::Config(_)));
}

#[test]
#[serial]
fn test_discover_reads_working_directory() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "bot_name: Local\n").unwrap();

    let _guard = DirGuard::new(temp_dir.path());
    let config = Config::discover().unwrap();
    assert_eq!(config.bot_name, "Local");
}

#[test]
#[serial]
fn test_discover_defaults_without_file() {
    let temp_dir = TempDir::new().unwrap();

    let _guard = DirGuard::new(temp_dir.path());
    assert_eq!(Config::discover().unwrap(), Config::default());
}
