//! Integration test for settings persistence

use std::fs;

use docdeck::config::DEFAULT_API_URL;
use docdeck::Settings;
use tempfile::TempDir;

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let settings = Settings {
        api_url: "https://api.internal.example/v2".to_string(),
        api_type: "custom".to_string(),
        log_level: "debug".to_string(),
        log_to_file: false,
    };
    settings.save_to(&path).unwrap();

    let loaded = Settings::load_from(&path);
    assert_eq!(loaded.api_url, "https://api.internal.example/v2");
    assert_eq!(loaded.api_type, "custom");
    assert_eq!(loaded.log_level, "debug");
    assert!(!loaded.log_to_file);

    // Atomic save leaves no temp file behind
    assert!(!path.with_extension("toml.tmp").exists());
}

#[test]
fn test_missing_file_creates_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let loaded = Settings::load_from(&path);
    assert_eq!(loaded.api_url, DEFAULT_API_URL);
    assert_eq!(loaded.api_type, "AWS Serverless");

    // A default config file was written for next time
    assert!(path.exists());
    let on_disk: Settings = toml::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk.api_url, DEFAULT_API_URL);
}

#[test]
fn test_corrupted_file_is_backed_up_and_replaced() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_url = [this is not toml").unwrap();

    let loaded = Settings::load_from(&path);
    assert_eq!(loaded.api_url, DEFAULT_API_URL);

    let backup = path.with_extension("toml.backup");
    assert!(backup.exists());
    assert!(fs::read_to_string(&backup)
        .unwrap()
        .contains("this is not toml"));
}

#[test]
fn test_partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "log_level = \"warn\"\n").unwrap();

    let loaded = Settings::load_from(&path);
    assert_eq!(loaded.log_level, "warn");
    assert_eq!(loaded.api_url, DEFAULT_API_URL);
    assert_eq!(loaded.api_type, "AWS Serverless");
    assert!(loaded.log_to_file);
}

#[test]
fn test_bad_values_are_repaired_on_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "api_url = \"ftp://nope\"\nlog_level = \"loud\"\n",
    )
    .unwrap();

    let loaded = Settings::load_from(&path);
    assert_eq!(loaded.api_url, DEFAULT_API_URL);
    assert_eq!(loaded.log_level, "info");
}

#[test]
fn test_loaded_settings_seed_the_session() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "api_url = \"http://localhost:9000/v1\"\n").unwrap();

    let settings = Settings::load_from(&path);
    let session = docdeck::create_shared_session(&settings);

    assert_eq!(session.snapshot().api_url, "http://localhost:9000/v1");
}
