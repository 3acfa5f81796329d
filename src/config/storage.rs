use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::AppConfig;

/// Where settings, history and images live
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Data directory; defaults to the global config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl StorageConfig {
    /// Effective data directory
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(AppConfig::global_config_dir)
    }

    /// `<data_dir>/settings.toml`
    pub fn settings_path(&self) -> PathBuf {
        self.data_dir().join("settings.toml")
    }

    /// `<data_dir>/history.json`
    pub fn history_path(&self) -> PathBuf {
        self.data_dir().join("history.json")
    }

    /// `<data_dir>/images/`
    pub fn images_dir(&self) -> PathBuf {
        self.data_dir().join("images")
    }
}
