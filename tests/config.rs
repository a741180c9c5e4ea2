//! Configuration system tests
//!
//! Tests for config paths and library config loading.

use frayer::config::LibraryConfig;
use frayer::config_paths;
use frayer::locale;
use tempfile::TempDir;

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    let dir = config_paths::config_dir().expect("config dir");
    assert!(dir.to_string_lossy().contains("frayer-library"));
}

#[test]
fn test_config_file_ends_with_yaml() {
    let file = config_paths::config_file().expect("config file");
    assert_eq!(file.file_name().and_then(|n| n.to_str()), Some("config.yaml"));
}

#[test]
fn test_logs_dir_is_inside_config_dir() {
    let config = config_paths::config_dir().expect("config dir");
    let logs = config_paths::logs_dir().expect("logs dir");
    assert!(logs.starts_with(&config));
    assert!(logs.ends_with("logs"));
}

// ========================================================================
// Library Config Tests
// ========================================================================

#[test]
fn test_default_export_file_name() {
    let config = LibraryConfig::default();
    assert_eq!(config.export_file_name, locale::DEFAULT_EXPORT_FILE_NAME);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = LibraryConfig::load_from(&dir.path().join("config.yaml"));
    assert_eq!(config, LibraryConfig::default());
}

#[test]
fn test_load_export_file_name() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "export_file_name: fogalmak.csv\n").unwrap();

    let config = LibraryConfig::load_from(&path);

    assert_eq!(config.export_file_name, "fogalmak.csv");
}

#[test]
fn test_load_does_not_create_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    LibraryConfig::load_from(&path);

    assert!(!path.exists());
}

#[test]
fn test_missing_field_falls_back_to_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "{}\n").unwrap();

    let config = LibraryConfig::load_from(&path);

    assert_eq!(config.export_file_name, locale::DEFAULT_EXPORT_FILE_NAME);
}

#[test]
fn test_invalid_yaml_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(&path, "export_file_name: [unclosed\n").unwrap();

    assert_eq!(LibraryConfig::load_from(&path), LibraryConfig::default());
}
