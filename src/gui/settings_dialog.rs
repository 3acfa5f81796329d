//! Settings dialog for the API key and model
//!
//! The form is seeded from the settings store every time the dialog opens.
//! Saving writes both values unconditionally; dismissing discards edits.

use eframe::egui::{self, RichText};
use tracing::{error, info};

use crate::gui::helpers::{render_dialog_title, render_status_message};
use crate::gui::theme::{TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};
use crate::storage::{ApiSettings, SettingsStore};

/// Models offered by the selector: (value, label)
pub const KNOWN_MODELS: &[(&str, &str)] = &[("gpt-image-1", "GPT Image 1")];

/// Label for a model value; unknown values are shown verbatim
pub fn model_label(model: &str) -> &str {
    KNOWN_MODELS
        .iter()
        .find(|(value, _)| *value == model)
        .map(|(_, label)| *label)
        .unwrap_or(model)
}

/// How the dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsDialogOutcome {
    Saved,
    Dismissed,
}

/// Form state of the settings dialog
pub struct SettingsDialog {
    form: ApiSettings,
    /// Last save error, shown inline
    status: Option<(String, bool)>,
    api_key_url: String,
}

impl SettingsDialog {
    pub fn new(api_key_url: impl Into<String>) -> Self {
        Self {
            form: ApiSettings::default(),
            status: None,
            api_key_url: api_key_url.into(),
        }
    }

    /// Seed the form from persisted values
    pub fn open(&mut self, store: &dyn SettingsStore) {
        self.form = ApiSettings::load(store);
        self.status = None;
    }

    pub fn form(&self) -> &ApiSettings {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ApiSettings {
        &mut self.form
    }

    pub fn status(&self) -> Option<&(String, bool)> {
        self.status.as_ref()
    }

    /// Persist both fields. Returns true when the dialog may close.
    pub fn save(&mut self, store: &mut dyn SettingsStore) -> bool {
        match self.form.save(store) {
            Ok(()) => {
                info!("Saved API settings (model: {})", self.form.model);
                self.status = None;
                true
            }
            Err(e) => {
                error!("Failed to save settings: {}", e);
                self.status = Some((format!("Failed to save: {}", e), true));
                false
            }
        }
    }

    /// Render the modal. Returns an outcome once the dialog should close.
    pub fn render(
        &mut self,
        ctx: &egui::Context,
        store: &mut dyn SettingsStore,
    ) -> Option<SettingsDialogOutcome> {
        let mut save_clicked = false;
        let mut cancel_clicked = false;

        let modal = egui::Modal::new(egui::Id::new("settings_dialog")).show(ctx, |ui| {
            ui.set_width(380.0);
            render_dialog_title(ui, "Settings");

            ui.label(RichText::new("OpenAI API Key").color(TEXT_DIM));
            ui.add(
                egui::TextEdit::singleline(&mut self.form.api_key)
                    .password(true)
                    .hint_text("Enter your OpenAI API key")
                    .text_color(TEXT_PRIMARY)
                    .desired_width(f32::INFINITY),
            );
            ui.add_space(10.0);

            ui.label(RichText::new("Model").color(TEXT_DIM));
            egui::ComboBox::from_id_salt("settings_model")
                .width(ui.available_width())
                .selected_text(model_label(&self.form.model).to_string())
                .show_ui(ui, |ui| {
                    for (value, label) in KNOWN_MODELS {
                        ui.selectable_value(&mut self.form.model, value.to_string(), *label);
                    }
                });
            ui.add_space(10.0);

            render_status_message(ui, &self.status);

            ui.horizontal(|ui| {
                ui.hyperlink_to(
                    RichText::new("Get API Key").small(),
                    self.api_key_url.as_str(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(RichText::new("Save").color(TEXT_PRIMARY)).clicked() {
                        save_clicked = true;
                    }
                    if ui.button(RichText::new("Cancel").color(TEXT_MUTED)).clicked() {
                        cancel_clicked = true;
                    }
                });
            });
        });

        if save_clicked {
            return self.save(store).then_some(SettingsDialogOutcome::Saved);
        }
        if cancel_clicked || modal.should_close() {
            return Some(SettingsDialogOutcome::Dismissed);
        }
        None
    }
}
