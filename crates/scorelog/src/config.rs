use scorelog_core::ConstantTable;
use serde::{Deserialize, Serialize};

use crate::app::DEFAULT_TAG;
use crate::result_log::DEFAULT_LOG_PATH;

/// Scorelog configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScorelogConfig {
    /// Base directory relative paths are resolved against
    pub base_dir: String,

    /// Log document path
    pub log_path: String,

    /// Log level
    pub log_level: String,

    /// Fixed third input passed to the combiner
    pub tag: String,

    /// Constant for each recognised test type
    pub test_types: ConstantTable,
}

impl Default for ScorelogConfig {
    fn default() -> Self {
        Self {
            base_dir: ".".to_string(),
            log_path: DEFAULT_LOG_PATH.to_string(),
            log_level: "info".to_string(),
            tag: DEFAULT_TAG.to_string(),
            test_types: ConstantTable::default(),
        }
    }
}

impl ScorelogConfig {
    /// Load from configuration file (TOML when the extension is `.toml`, JSON otherwise)
    pub fn load_from_file(path: &std::path::Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;

        if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse config file: {}", e))
        }
    }
}
