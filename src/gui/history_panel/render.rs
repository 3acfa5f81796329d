//! Rendering of the history list

use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea};

use super::dialogs::render_open_dialog;
use super::state::{HistoryPanelAction, HistoryPanelState, OpenDialog};
use crate::domain::{HistoryMetadata, HistoryTotals, format_duration, format_timestamp};
use crate::gui::clipboard::Clipboard;
use crate::gui::helpers::{cost_badge, render_detail_line, render_section_frame};
use crate::gui::image_source::ImageResolver;
use crate::gui::theme::{BG_HIGHLIGHT, TEXT_MUTED, TEXT_PRIMARY};

const THUMBNAIL_SIZE: f32 = 72.0;

/// Dollar amount with sign, or "N/A"
pub(super) fn dollars(amount: f64) -> String {
    if amount.is_finite() {
        format!("${:.4}", amount)
    } else {
        crate::domain::NOT_AVAILABLE.to_string()
    }
}

/// Render the history panel into `ui`.
///
/// Returns the action triggered this frame, if any.
pub fn render_history_panel(
    ui: &mut egui::Ui,
    state: &mut HistoryPanelState,
    history: &[HistoryMetadata],
    images: &dyn ImageResolver,
    clipboard: &mut dyn Clipboard,
) -> Option<HistoryPanelAction> {
    let now = Instant::now();
    state.reconcile(history, now);

    let totals = HistoryTotals::from_history(history);
    let mut action = None;

    ui.horizontal(|ui| {
        ui.label(RichText::new("History").size(17.0).strong().color(TEXT_PRIMARY));
        if totals.has_cost()
            && cost_badge(ui, &format!("Total Cost: {}", dollars(totals.total_cost)))
                .on_hover_text("Show total cost summary")
                .clicked()
        {
            state.open(OpenDialog::TotalCost);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new("Clear History").color(TEXT_MUTED))
                .clicked()
            {
                action = Some(HistoryPanelAction::ClearHistory);
            }
        });
    });
    ui.separator();

    if history.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new("No history yet. Generate or edit some images to see them here.")
                    .color(TEXT_MUTED),
            );
        });
    } else {
        ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for item in history {
                    ui.push_id(item.timestamp, |ui| {
                        if let Some(item_action) = render_history_item(ui, state, item, images) {
                            action = Some(item_action);
                        }
                    });
                    ui.separator();
                }
            });
    }

    render_open_dialog(ui.ctx(), state, history, &totals, clipboard, now);

    if let Some(remaining) = state.copy_feedback().remaining(now) {
        ui.ctx().request_repaint_after(remaining);
    }

    action
}

fn render_history_item(
    ui: &mut egui::Ui,
    state: &mut HistoryPanelState,
    item: &HistoryMetadata,
    images: &dyn ImageResolver,
) -> Option<HistoryPanelAction> {
    ui.horizontal(|ui| {
        ui.label(RichText::new(item.title()).strong().color(TEXT_PRIMARY));
        if let Some(details) = &item.cost_details {
            let badge = cost_badge(ui, &format!("Cost: {}", dollars(details.item_total())));
            if badge.on_hover_text("Show cost details").clicked() {
                state.open(OpenDialog::Cost {
                    timestamp: item.timestamp,
                });
            }
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .button(RichText::new("View Prompt").color(TEXT_MUTED))
                .clicked()
            {
                state.open(OpenDialog::Prompt {
                    timestamp: item.timestamp,
                });
            }
        });
    });

    render_section_frame(ui, |ui| {
        ui.set_width(ui.available_width());
        render_detail_line(ui, "Time", &format_duration(item.duration_ms))
            .on_hover_text(format!("Generated on: {}", format_timestamp(item.timestamp)));
        render_detail_line(ui, "Quality", &item.quality);
        render_detail_line(ui, "BG", &item.background);
        render_detail_line(ui, "Mod", &item.moderation);
    });
    ui.add_space(6.0);

    render_thumbnails(ui, item, images).then(|| HistoryPanelAction::SelectImage(item.clone()))
}

/// Thumbnail grid; returns true when any image was clicked
fn render_thumbnails(ui: &mut egui::Ui, item: &HistoryMetadata, images: &dyn ImageResolver) -> bool {
    let mut clicked = false;
    let size = egui::vec2(THUMBNAIL_SIZE, THUMBNAIL_SIZE);

    ui.horizontal_wrapped(|ui| {
        for image in &item.images {
            let response = match images.image_src(&image.filename) {
                Some(uri) => ui.add(
                    egui::Image::new(uri)
                        .fit_to_exact_size(size)
                        .corner_radius(4.0)
                        .sense(egui::Sense::click()),
                ),
                None => ui.add(
                    egui::Button::new(RichText::new("🖼").size(24.0).color(TEXT_MUTED))
                        .fill(BG_HIGHLIGHT)
                        .min_size(size),
                ),
            };
            if response.on_hover_text(&image.filename).clicked() {
                clicked = true;
            }
        }
    });

    clicked
}
