//! Main GUI application state
//!
//! Owns what the components only borrow: the history list, the current mode,
//! the settings store and the clipboard. Components report actions back here.

use eframe::egui;
use tracing::{info, warn};

use super::clipboard::{Clipboard, SystemClipboard};
use super::history_panel::{HistoryPanelAction, HistoryPanelState};
use super::image_source::DirectoryImages;
use super::preview::ImagePreview;
use super::settings_button::SettingsButton;
use crate::config::AppConfig;
use crate::domain::{GenerationMode, HistoryMetadata};
use crate::storage::{FileSettingsStore, HistoryStore, SettingsStore};

/// Main application state
pub struct PlaygroundApp {
    pub(super) history: Vec<HistoryMetadata>,
    history_store: HistoryStore,
    pub(super) mode: GenerationMode,
    pub(super) preview: Option<ImagePreview>,
    pub(super) settings_store: Box<dyn SettingsStore>,
    pub(super) settings_button: SettingsButton,
    pub(super) history_panel: HistoryPanelState,
    pub(super) images: DirectoryImages,
    pub(super) clipboard: Box<dyn Clipboard>,
    pub(super) history_panel_width: f32,
}

impl PlaygroundApp {
    /// Build the app from configuration, using file-backed stores
    pub fn new(config: &AppConfig) -> Self {
        let storage = &config.storage;
        let mut app = Self::from_parts(
            config,
            HistoryStore::new(storage.history_path()),
            Box::new(FileSettingsStore::new(storage.settings_path())),
            Box::new(SystemClipboard::new()),
        );
        app.reload_history();
        app
    }

    /// Build the app from explicit parts. History starts empty.
    pub fn from_parts(
        config: &AppConfig,
        history_store: HistoryStore,
        settings_store: Box<dyn SettingsStore>,
        clipboard: Box<dyn Clipboard>,
    ) -> Self {
        Self {
            history: Vec::new(),
            history_store,
            mode: GenerationMode::default(),
            preview: None,
            settings_store,
            settings_button: SettingsButton::new(config.gui.api_key_url.clone()),
            history_panel: HistoryPanelState::new(),
            images: DirectoryImages::new(config.storage.images_dir()),
            clipboard,
            history_panel_width: config.gui.history_panel_width,
        }
    }

    /// Load history from disk, newest first. Errors leave an empty history.
    pub fn reload_history(&mut self) {
        match self.history_store.load() {
            Ok(mut history) => {
                history.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
                info!(
                    "Loaded {} history entries from {}",
                    history.len(),
                    self.history_store.path().display()
                );
                self.history = history;
            }
            Err(e) => {
                warn!("Failed to load history: {}. Starting empty.", e);
                self.history.clear();
            }
        }
    }

    pub fn history(&self) -> &[HistoryMetadata] {
        &self.history
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: GenerationMode) {
        if self.mode != mode {
            info!("Mode changed: {} -> {}", self.mode, mode);
            self.mode = mode;
        }
    }

    /// Entry currently shown in the preview
    pub fn selected(&self) -> Option<&HistoryMetadata> {
        let timestamp = self.preview.as_ref()?.timestamp();
        self.history.iter().find(|item| item.timestamp == timestamp)
    }

    pub fn settings_button(&self) -> &SettingsButton {
        &self.settings_button
    }

    pub fn settings_store(&self) -> &dyn SettingsStore {
        self.settings_store.as_ref()
    }

    /// Apply an action reported by the history panel
    pub fn handle_history_action(&mut self, action: HistoryPanelAction) {
        match action {
            HistoryPanelAction::SelectImage(item) => {
                info!("Selected history entry {}", item.timestamp);
                self.preview = Some(ImagePreview::load(&item, &self.images));
            }
            HistoryPanelAction::ClearHistory => {
                self.history.clear();
                self.preview = None;
                if let Err(e) = self.history_store.clear() {
                    warn!("Failed to clear history file: {}", e);
                }
            }
        }
    }

    /// Open the settings dialog as if the gear icon was clicked
    pub fn open_settings(&mut self) {
        self.settings_button.trigger(self.settings_store.as_ref());
    }

    /// Install image loaders and theme on the egui context
    pub fn install(ctx: &egui::Context) {
        egui_extras::install_image_loaders(ctx);
        super::theme::apply_theme(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HistoryImage;
    use crate::gui::clipboard::ClipboardError;
    use crate::storage::{API_KEY_KEY, MemorySettingsStore};
    use tempfile::TempDir;

    struct NullClipboard;

    impl Clipboard for NullClipboard {
        fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn entry(timestamp: i64) -> HistoryMetadata {
        HistoryMetadata {
            timestamp,
            mode: GenerationMode::Generate,
            prompt: Some(format!("prompt {}", timestamp)),
            duration_ms: 900,
            quality: "auto".to_string(),
            background: "auto".to_string(),
            moderation: "auto".to_string(),
            images: vec![HistoryImage {
                filename: format!("{}-0.png", timestamp),
            }],
            cost_details: None,
            output_format: None,
        }
    }

    fn app_with_history(dir: &TempDir, history: &[HistoryMetadata]) -> PlaygroundApp {
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        let store = HistoryStore::new(config.storage.history_path());
        store.save(history).unwrap();

        let mut app = PlaygroundApp::from_parts(
            &config,
            store,
            Box::new(MemorySettingsStore::new()),
            Box::new(NullClipboard),
        );
        app.reload_history();
        app
    }

    #[test]
    fn test_reload_sorts_newest_first() {
        let dir = TempDir::new().unwrap();
        let app = app_with_history(&dir, &[entry(1), entry(3), entry(2)]);
        let order: Vec<i64> = app.history().iter().map(|h| h.timestamp).collect();
        assert_eq!(order, vec![3, 2, 1]);
    }

    #[test]
    fn test_clear_history_empties_list_and_file() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_history(&dir, &[entry(1), entry(2)]);
        app.handle_history_action(HistoryPanelAction::SelectImage(entry(2)));
        assert!(app.selected().is_some());

        app.handle_history_action(HistoryPanelAction::ClearHistory);
        assert!(app.history().is_empty());
        assert!(app.selected().is_none());

        app.reload_history();
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_select_image_sets_preview() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_history(&dir, &[entry(10), entry(20)]);
        app.handle_history_action(HistoryPanelAction::SelectImage(entry(10)));
        assert_eq!(app.selected().map(|h| h.timestamp), Some(10));
    }

    #[test]
    fn test_set_mode() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_history(&dir, &[]);
        assert_eq!(app.mode(), GenerationMode::Generate);
        app.set_mode(GenerationMode::Edit);
        assert_eq!(app.mode().as_str(), "edit");
    }

    #[test]
    fn test_corrupt_history_starts_empty() {
        let dir = TempDir::new().unwrap();
        let mut app = app_with_history(&dir, &[entry(1)]);
        std::fs::write(dir.path().join("history.json"), "[{").unwrap();
        app.reload_history();
        assert!(app.history().is_empty());
    }

    #[test]
    fn test_open_settings_seeds_from_store() {
        let dir = TempDir::new().unwrap();
        let mut config = AppConfig::default();
        config.storage.data_dir = Some(dir.path().to_path_buf());
        let mut store = MemorySettingsStore::new();
        store.set(API_KEY_KEY, "sk-abc").unwrap();

        let mut app = PlaygroundApp::from_parts(
            &config,
            HistoryStore::new(config.storage.history_path()),
            Box::new(store),
            Box::new(NullClipboard),
        );
        app.open_settings();
        assert!(app.settings_button().is_open());
        assert_eq!(app.settings_button().dialog().form().api_key, "sk-abc");
    }
}
