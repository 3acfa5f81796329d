//! Persisted API settings
//!
//! Two plain string values under fixed keys. Stores expose a small key/value
//! contract so the dialog does not care whether values live in a file or in
//! memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::{StorageError, write_atomic};

/// Key for the API key value
pub const API_KEY_KEY: &str = "OPENAI_API_KEY";
/// Key for the model identifier
pub const MODEL_KEY: &str = "OPENAI_MODEL";
/// Model used when none has been saved
pub const DEFAULT_MODEL: &str = "gpt-image-1";

/// Key/value persistence for settings strings
pub trait SettingsStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Settings kept as a flat TOML table on disk
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        toml::from_str(&content).map_err(|source| StorageError::SettingsFormat {
            path: self.path.clone(),
            source,
        })
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());
        let content = toml::to_string(&values)?;
        write_atomic(&self.path, content.as_bytes())?;
        debug!("Wrote setting {} to {}", key, self.path.display());
        Ok(())
    }
}

/// In-memory store for tests
#[derive(Debug, Clone, Default)]
pub struct MemorySettingsStore {
    values: BTreeMap<String, String>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// API key and model as edited in the settings dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub api_key: String,
    pub model: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl ApiSettings {
    /// Read both values from `store`.
    ///
    /// Missing or empty values keep their defaults. Read errors are logged and
    /// treated as missing.
    pub fn load(store: &dyn SettingsStore) -> Self {
        let mut settings = Self::default();
        if let Some(api_key) = read_non_empty(store, API_KEY_KEY) {
            settings.api_key = api_key;
        }
        if let Some(model) = read_non_empty(store, MODEL_KEY) {
            settings.model = model;
        }
        settings
    }

    /// Write both values, empty strings included
    pub fn save(&self, store: &mut dyn SettingsStore) -> Result<(), StorageError> {
        store.set(API_KEY_KEY, &self.api_key)?;
        store.set(MODEL_KEY, &self.model)?;
        Ok(())
    }
}

fn read_non_empty(store: &dyn SettingsStore, key: &str) -> Option<String> {
    match store.get(key) {
        Ok(value) => value.filter(|v| !v.is_empty()),
        Err(e) => {
            warn!("Failed to read setting {}: {}", key, e);
            None
        }
    }
}
