//! Configuration file I/O operations

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::AppConfig;
use crate::storage::write_atomic;

impl AppConfig {
    /// Get the global config directory path (~/.image-playground/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".image-playground")
    }

    /// Get the global config file path (~/.image-playground/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: AppConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Save configuration with atomic write and file locking
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;
        write_atomic(path, content.as_bytes())
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Load configuration from `path`, creating it with defaults if missing.
    ///
    /// Returns the config and whether the file had to be created.
    pub fn load_or_init(path: &Path) -> Result<(Self, bool)> {
        if path.exists() {
            return Ok((Self::from_file(path)?, false));
        }

        let config = Self::default();
        config.save_to_file(path)?;
        tracing::info!("Created {}", path.display());
        Ok((config, true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_init_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let (config, created) = AppConfig::load_or_init(&path).unwrap();
        assert!(created);
        assert!(path.exists());
        assert_eq!(config, AppConfig::default());

        let (again, created) = AppConfig::load_or_init(&path).unwrap();
        assert!(!created);
        assert_eq!(again, config);
    }

    #[test]
    fn test_save_and_reload_custom_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        let mut config = AppConfig::default();
        config.gui.api_key_url = "https://example.com/keys".to_string();
        config.storage.data_dir = Some(dir.path().join("data"));

        config.save_to_file(&path).unwrap();
        assert_eq!(AppConfig::from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[gui\nwindow_width = ").unwrap();
        let err = AppConfig::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
