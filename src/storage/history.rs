//! History persistence as a JSON array on disk

use std::path::{Path, PathBuf};

use tracing::info;

use super::{StorageError, write_atomic};
use crate::domain::HistoryMetadata;

/// Reads and writes the generation history file
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all entries. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<HistoryMetadata>, StorageError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|source| StorageError::HistoryFormat {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, history: &[HistoryMetadata]) -> Result<(), StorageError> {
        let content = serde_json::to_vec_pretty(history)?;
        write_atomic(&self.path, &content)
    }

    /// Drop every entry. Image files are left on disk.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.save(&[])?;
        info!("Cleared history at {}", self.path.display());
        Ok(())
    }
}
