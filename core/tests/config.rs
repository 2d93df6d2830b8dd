//! Dashboard configuration loading.

use riskguard_core::config::{DashConfig, CONFIG_FILE, DEFAULT_CSV_PATH};
use std::fs;

fn scratch_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("riskguard-{name}-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    dir
}

#[test]
fn missing_file_means_defaults() {
    let dir = scratch_dir("cfg-missing");
    let config = DashConfig::load(dir.to_str().unwrap()).unwrap();
    assert_eq!(config, DashConfig::default());
    assert_eq!(config.csv_path, DEFAULT_CSV_PATH);
    assert_eq!(config.activity_preview, 2);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = scratch_dir("cfg-partial");
    fs::write(dir.join(CONFIG_FILE), r#"{ "asset_root": "/srv/www", "detail_db": "detail.db" }"#)
        .unwrap();
    let config = DashConfig::load(dir.to_str().unwrap()).unwrap();
    assert_eq!(config.asset_root, "/srv/www");
    assert_eq!(config.detail_db.as_deref(), Some("detail.db"));
    assert_eq!(config.csv_path, DEFAULT_CSV_PATH);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = scratch_dir("cfg-bad");
    fs::write(dir.join(CONFIG_FILE), "{ not json").unwrap();
    let err = DashConfig::load(dir.to_str().unwrap()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"), "got: {err}");
}

/// The test profile serves the bundled fixture directory.
#[test]
fn test_profile_serves_fixture_csv() {
    use riskguard_core::loader::{DatasetLoader, StaticDirSource};

    let config = DashConfig::default_test();
    let loader = DatasetLoader::new(StaticDirSource::new(&config.asset_root), &config.csv_path);
    let accounts = loader.load().expect("fixture loads");
    assert_eq!(accounts.len(), 4);
}
