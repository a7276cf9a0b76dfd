use std::path::PathBuf;

use tabsplit::config::{Config, ConfigManager};
use tabsplit::currency::CurrencyCode;
use tempfile::tempdir;

#[test]
fn default_config_reads_receipt_yaml() {
    let cfg = Config::default();

    assert_eq!(cfg.currency.as_str(), "USD");
    assert_eq!(cfg.default_receipt, PathBuf::from("receipt.yaml"));
    assert!(cfg.reconciliation_tolerance > 0.0);
}

#[test]
fn missing_config_file_yields_defaults() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::with_base_dir(dir.path());

    assert_eq!(manager.load().expect("load"), Config::default());
}

#[test]
fn config_manager_persists_and_loads_config() {
    let dir = tempdir().expect("tempdir");
    let manager = ConfigManager::new(dir.path().join("nested").join("config.json"));

    let cfg = Config {
        currency: CurrencyCode::new("gbp"),
        decimal_separator: ',',
        grouping_separator: '.',
        ui_color_enabled: false,
        default_receipt: PathBuf::from("dinner.json"),
        ..Config::default()
    };

    manager.save(&cfg).expect("save config");
    let loaded = manager.load().expect("load config");

    assert_eq!(loaded, cfg);
    assert_eq!(loaded.currency.as_str(), "GBP");
    assert!(!manager.config_path().with_extension("json.tmp").exists());
}

#[test]
fn corrupt_config_is_an_error() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{ not json").expect("write");

    assert!(ConfigManager::new(path).load().is_err());
}
