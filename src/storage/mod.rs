//! On-disk persistence for settings and history

mod atomic;
mod error;
mod history;
mod settings;

pub use atomic::write_atomic;
pub use error::StorageError;
pub use history::HistoryStore;
pub use settings::{
    API_KEY_KEY, ApiSettings, DEFAULT_MODEL, FileSettingsStore, MODEL_KEY, MemorySettingsStore,
    SettingsStore,
};
