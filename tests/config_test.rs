//! Integration tests for configuration loading and saving

use iota_recovery_tool::config::{
    load_config, save_config, ConfigError, ConfigOverrides, GlobalConfig, PayoutConfig,
    RecipientConfig,
};
use std::fs;
use tempfile::TempDir;

const FILE_RECIPIENT: &str = "file-public-key";
const CLI_RECIPIENT: &str = "cli-public-key";

fn file_config() -> GlobalConfig {
    GlobalConfig {
        recipient: RecipientConfig {
            public_key: Some(FILE_RECIPIENT.to_string()),
            public_key_file: None,
        },
        payout: PayoutConfig {
            required_prefix: Some("iota".to_string()),
        },
    }
}

#[test]
fn test_save_and_load_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");

    let saved_path = save_config(&file_config(), Some(&path)).expect("Failed to save config");
    assert_eq!(saved_path, path);
    assert!(path.exists());

    let loaded = load_config(Some(&path), ConfigOverrides::new()).expect("Failed to load config");
    assert_eq!(loaded, file_config());
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let loaded = load_config(Some(&path), ConfigOverrides::new()).unwrap();
    assert_eq!(loaded, GlobalConfig::default());
}

#[test]
fn test_partial_file_fills_missing_sections() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "payout": { "required_prefix": "atoi" } }"#).unwrap();

    let loaded = load_config(Some(&path), ConfigOverrides::new()).unwrap();
    assert_eq!(loaded.payout.required_prefix.as_deref(), Some("atoi"));
    assert_eq!(loaded.recipient, RecipientConfig::default());
}

#[test]
fn test_cli_overrides_take_precedence_over_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    save_config(&file_config(), Some(&path)).unwrap();

    let overrides = ConfigOverrides {
        recipient: Some(CLI_RECIPIENT.to_string()),
        payout_prefix: Some("atoi".to_string()),
        ..Default::default()
    };
    let loaded = load_config(Some(&path), overrides).unwrap();

    assert_eq!(loaded.recipient.public_key.as_deref(), Some(CLI_RECIPIENT));
    assert_eq!(loaded.payout.required_prefix.as_deref(), Some("atoi"));
}

#[test]
fn test_recipient_file_override_replaces_inline_key() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    save_config(&file_config(), Some(&path)).unwrap();

    let overrides = ConfigOverrides {
        recipient_file: Some("/etc/recovery/recipient.txt".to_string()),
        ..Default::default()
    };
    let loaded = load_config(Some(&path), overrides).unwrap();

    assert_eq!(loaded.recipient.public_key, None);
    assert_eq!(
        loaded.recipient.public_key_file.as_deref(),
        Some("/etc/recovery/recipient.txt")
    );
}

#[test]
fn test_config_path_override_is_used() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("custom.json");
    save_config(&file_config(), Some(&path)).unwrap();

    let overrides = ConfigOverrides {
        config_path: Some(path.to_string_lossy().to_string()),
        ..Default::default()
    };
    let loaded = load_config(None, overrides).unwrap();
    assert_eq!(loaded.recipient.public_key.as_deref(), Some(FILE_RECIPIENT));
}

#[test]
fn test_invalid_json_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        load_config(Some(&path), ConfigOverrides::new()),
        Err(ConfigError::Serialization(_))
    ));
}

#[test]
fn test_invalid_payout_prefix_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.json");

    let overrides = ConfigOverrides {
        payout_prefix: Some("io ta".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        load_config(Some(&path), overrides),
        Err(ConfigError::Invalid(_))
    ));
}

#[test]
fn test_merge_prefers_other() {
    let base = ConfigOverrides {
        recipient: Some("base".to_string()),
        payout_prefix: Some("iota".to_string()),
        ..Default::default()
    };
    let other = ConfigOverrides {
        recipient: Some("other".to_string()),
        ..Default::default()
    };

    let merged = base.merge(other);
    assert_eq!(merged.recipient.as_deref(), Some("other"));
    assert_eq!(merged.payout_prefix.as_deref(), Some("iota"));
}
