//! Gear button that owns the settings dialog's open state

use eframe::egui::{self, RichText};

use super::settings_dialog::{SettingsDialog, SettingsDialogOutcome};
use crate::gui::theme::TEXT_MUTED;
use crate::storage::SettingsStore;

pub struct SettingsButton {
    open: bool,
    dialog: SettingsDialog,
}

impl SettingsButton {
    pub fn new(api_key_url: impl Into<String>) -> Self {
        Self {
            open: false,
            dialog: SettingsDialog::new(api_key_url),
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn dialog(&self) -> &SettingsDialog {
        &self.dialog
    }

    pub fn dialog_mut(&mut self) -> &mut SettingsDialog {
        &mut self.dialog
    }

    /// closed -> open: seed the form and show the dialog
    pub fn trigger(&mut self, store: &dyn SettingsStore) {
        self.dialog.open(store);
        self.open = true;
    }

    /// open -> closed
    pub fn close(&mut self, outcome: SettingsDialogOutcome) {
        tracing::debug!("Settings dialog closed: {:?}", outcome);
        self.open = false;
    }

    /// Render the trigger icon and, while open, the dialog
    pub fn render(&mut self, ui: &mut egui::Ui, store: &mut dyn SettingsStore) {
        let trigger = ui
            .add(egui::Button::new(RichText::new("⚙").size(18.0).color(TEXT_MUTED)).frame(false))
            .on_hover_text("Settings");
        if trigger.clicked() {
            self.trigger(store);
        }

        if self.open {
            if let Some(outcome) = self.dialog.render(ui.ctx(), store) {
                self.close(outcome);
            }
        }
    }
}
