//! GUI module for the image playground
//!
//! Components borrow state from [`PlaygroundApp`] and report back through
//! return values:
//! - [`settings_button`] / [`settings_dialog`]: API key and model
//! - [`history_panel`]: past generations with cost breakdowns
//! - [`mode_toggle`]: generate / edit switch

pub mod app;
mod app_eframe;
pub mod clipboard;
mod helpers;
pub mod history_panel;
pub mod image_source;
pub mod mode_toggle;
pub mod preview;
pub mod runner;
pub mod settings_button;
pub mod settings_dialog;
pub mod theme;

pub use app::PlaygroundApp;
pub use clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use history_panel::{HistoryPanelAction, HistoryPanelState, OpenDialog, render_history_panel};
pub use image_source::{DirectoryImages, ImageResolver};
pub use mode_toggle::render_mode_toggle;
pub use runner::run_gui;
pub use settings_button::SettingsButton;
pub use settings_dialog::{SettingsDialog, SettingsDialogOutcome};
