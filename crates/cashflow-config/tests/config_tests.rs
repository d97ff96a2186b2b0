use cashflow_config::{Config, ConfigError, ConfigManager};
use std::{fs, path::PathBuf};
use tempfile::tempdir;

#[test]
fn default_config_has_gbp_and_week_horizon() {
    let cfg = Config::default();

    assert_eq!(cfg.currency_symbol, "£");
    assert_eq!(cfg.soon_horizon(), 7);
    assert!(cfg.ui_color_enabled);
    assert_eq!(cfg.resolve_data_file(), PathBuf::from("cashflow.json"));
}

#[test]
fn config_manager_returns_defaults_when_missing() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    assert!(!manager.config_path().exists());
    assert_eq!(manager.load().expect("load"), Config::default());
    assert!(!dir.path().join("config").exists());
}

#[test]
fn config_manager_creates_directories_only_on_save() {
    let dir = tempdir().expect("tempdir");
    let base = dir.path().join("cashflow-calendar");
    let manager = ConfigManager::with_base_dir(base.clone());
    manager.load().expect("load");
    assert!(!base.exists());

    manager.save(&Config::default()).expect("save");
    assert!(manager.config_path().exists());
}

#[test]
fn legacy_locale_key_is_ignored() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    fs::create_dir_all(dir.path().join("config")).expect("config dir");
    fs::write(
        manager.config_path(),
        r#"{ "locale": "en-US", "currency_symbol": "$" }"#,
    )
    .expect("write");

    assert_eq!(manager.load().expect("load").currency_symbol, "$");
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());

    let cfg = Config {
        currency_symbol: "$".to_string(),
        soon_horizon_days: 14,
        ui_color_enabled: false,
        title: Some("Cinder Hill Farm".to_string()),
        default_data_file: Some(dir.path().join("farm.json")),
    };

    manager.save(&cfg).expect("save config");
    assert_eq!(manager.load().expect("load config"), cfg);
    assert!(manager.config_path().ends_with("config/config.json"));
}

#[test]
fn partial_config_files_fill_in_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    fs::create_dir_all(dir.path().join("config")).expect("config dir");
    fs::write(manager.config_path(), r#"{ "soon_horizon_days": -3 }"#).expect("write");

    let loaded = manager.load().expect("load");
    assert_eq!(loaded.currency_symbol, "£");
    assert_eq!(loaded.soon_horizon(), 0);
}

#[test]
fn malformed_config_is_a_serde_error() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path().to_path_buf());
    fs::create_dir_all(dir.path().join("config")).expect("config dir");
    fs::write(manager.config_path(), "not json").expect("write");

    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}
