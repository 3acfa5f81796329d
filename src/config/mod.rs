//! Configuration loading and management

mod gui;
mod io;
mod storage;

pub use gui::GuiConfig;
pub use storage::StorageConfig;

use serde::{Deserialize, Serialize};

/// Main configuration structure (`~/.image-playground/config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window settings
    #[serde(default)]
    pub gui: GuiConfig,

    /// Data locations
    #[serde(default)]
    pub storage: StorageConfig,
}
