use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE: &str = "dashboard.json";
pub const DEFAULT_CSV_PATH: &str = "/fan_pattern_results_combined.csv";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DashConfig {
    /// Directory the CSV resource is served from.
    pub asset_root: String,
    /// Fixed resource path fetched once per session.
    pub csv_path: String,
    /// SQLite file with drill-down data. Built-in tables when absent.
    pub detail_db: Option<String>,
    /// Activity labels per table row before "+N more".
    pub activity_preview: usize,
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            asset_root:       "./public".into(),
            csv_path:         DEFAULT_CSV_PATH.into(),
            detail_db:        None,
            activity_preview: 2,
        }
    }
}

impl DashConfig {
    /// Load `<data_dir>/dashboard.json`; defaults when the file is absent.
    pub fn load(data_dir: &str) -> anyhow::Result<Self> {
        let path = Path::new(data_dir).join(CONFIG_FILE);
        if !path.exists() {
            log::info!("no {} in {data_dir}, using defaults", CONFIG_FILE);
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: DashConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn default_test() -> Self {
        Self {
            asset_root:       "./tests/fixtures".into(),
            csv_path:         DEFAULT_CSV_PATH.into(),
            detail_db:        None,
            activity_preview: 2,
        }
    }
}
