//! Small reusable UI pieces shared by the panels and dialogs

use eframe::egui::{self, RichText};

use crate::gui::theme::{
    ACCENT_EMERALD, ACCENT_GREEN, ACCENT_RED, BG_HIGHLIGHT, BORDER, TEXT_MUTED, TEXT_PRIMARY,
};

/// Render a status message (error or success)
pub fn render_status_message(ui: &mut egui::Ui, status: &Option<(String, bool)>) {
    if let Some((msg, is_error)) = status {
        let color = if *is_error { ACCENT_RED } else { ACCENT_GREEN };
        ui.label(RichText::new(msg).color(color));
    }
}

/// Render a bordered block with the highlight background
pub fn render_section_frame<R>(
    ui: &mut egui::Ui,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::NONE
        .fill(BG_HIGHLIGHT)
        .stroke(egui::Stroke::new(1.0, BORDER))
        .corner_radius(4.0)
        .inner_margin(8.0)
        .show(ui, add_contents)
        .inner
}

/// Small pill-shaped cost badge; returns its response for click handling
pub fn cost_badge(ui: &mut egui::Ui, text: &str) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
            .fill(ACCENT_EMERALD)
            .corner_radius(10.0)
            .min_size(egui::vec2(0.0, 18.0)),
    )
}

/// Title line of a dialog
pub fn render_dialog_title(ui: &mut egui::Ui, title: &str) {
    ui.label(RichText::new(title).size(17.0).strong().color(TEXT_PRIMARY));
    ui.add_space(8.0);
}

/// A "label ... value" row with the value pushed to the right
pub fn render_value_row(ui: &mut egui::Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(RichText::new(label).color(TEXT_MUTED));
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(value).monospace().color(TEXT_PRIMARY));
        });
    });
}

/// A "Label: value" detail line
pub fn render_detail_line(ui: &mut egui::Ui, label: &str, value: &str) -> egui::Response {
    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("{}:", label)).small().strong().color(TEXT_PRIMARY));
        ui.label(RichText::new(value).small().color(TEXT_MUTED));
    })
    .response
}
