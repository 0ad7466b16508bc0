use std::fs;
use tempfile::TempDir;
use yamlkeys::config::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(!config.create_backup);
    assert_eq!(config.log_level, "warn");
}

#[test]
fn test_config_path_location() {
    if let Some(path) = Config::config_path() {
        assert!(path.ends_with(".config/yamlkeys/config.toml"));
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let config = Config {
        create_backup: true,
        log_level: "debug".to_string(),
    };
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_partial_config_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "create_backup = true\n").unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert!(loaded.create_backup);
    assert_eq!(loaded.log_level, "warn");
}

#[test]
fn test_invalid_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "create_backup = \"maybe\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Invalid config file"));
}

#[test]
fn test_missing_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(Config::load_from(dir.path().join("absent.toml")).is_err());
}
