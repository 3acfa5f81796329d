//! Prompt, cost-details and total-cost dialogs

use std::time::Instant;

use eframe::egui::{self, RichText, ScrollArea};

use super::render::dollars;
use super::state::{HistoryPanelState, OpenDialog};
use crate::domain::{
    CostDetails, HistoryMetadata, HistoryTotals, IMAGE_TOKEN_RATE, NOT_AVAILABLE,
    TEXT_INPUT_TOKEN_RATE, TEXT_OUTPUT_TOKEN_RATE, calculate_cost, format_count,
};
use crate::gui::clipboard::Clipboard;
use crate::gui::helpers::{render_dialog_title, render_section_frame, render_value_row};
use crate::gui::theme::{ACCENT_GREEN, TEXT_DIM, TEXT_MUTED};

const DIALOG_WIDTH: f32 = 520.0;
const DIALOG_BODY_MAX_HEIGHT: f32 = 400.0;

/// Render whichever dialog is open and close it when dismissed
pub(super) fn render_open_dialog(
    ctx: &egui::Context,
    state: &mut HistoryPanelState,
    history: &[HistoryMetadata],
    totals: &HistoryTotals,
    clipboard: &mut dyn Clipboard,
    now: Instant,
) {
    let Some(dialog) = state.open_dialog() else {
        return;
    };

    let find = |timestamp: i64| history.iter().find(|item| item.timestamp == timestamp);

    let should_close = match dialog {
        OpenDialog::TotalCost => render_total_cost_dialog(ctx, totals),
        OpenDialog::Cost { timestamp } => {
            match find(timestamp).and_then(|item| item.cost_details.as_ref()) {
                Some(details) => render_cost_dialog(ctx, timestamp, details),
                None => true,
            }
        }
        OpenDialog::Prompt { timestamp } => match find(timestamp) {
            Some(item) => render_prompt_dialog(ctx, state, item, clipboard, now),
            None => true,
        },
    };

    if should_close {
        state.close();
    }
}

/// Modal frame shared by the dialogs. Returns true when it should close.
fn show_dialog(
    ctx: &egui::Context,
    id: egui::Id,
    title: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) -> bool {
    let mut close_clicked = false;

    let modal = egui::Modal::new(id).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        render_dialog_title(ui, title);
        render_section_frame(ui, |ui| {
            ui.set_width(ui.available_width());
            ScrollArea::vertical()
                .max_height(DIALOG_BODY_MAX_HEIGHT)
                .show(ui, add_contents);
        });
        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button(RichText::new("Close").color(TEXT_DIM)).clicked() {
                close_clicked = true;
            }
        });
    });

    close_clicked || modal.should_close()
}

fn render_total_cost_dialog(ctx: &egui::Context, totals: &HistoryTotals) -> bool {
    show_dialog(
        ctx,
        egui::Id::new("history_total_cost"),
        "Total Cost Summary",
        |ui| {
            render_value_row(
                ui,
                "Total Images Generated:",
                &format_count(totals.total_images as u64),
            );
            render_value_row(
                ui,
                "Total Text Input Tokens:",
                &format_count(totals.text_input_tokens),
            );
            render_value_row(
                ui,
                "Total Text Output Tokens:",
                &format_count(totals.text_output_tokens),
            );
            render_value_row(ui, "Total Image Tokens:", &format_count(totals.image_tokens));
            render_value_row(
                ui,
                "Average Cost per Image:",
                &dollars(totals.average_cost_per_image()),
            );
            ui.separator();
            render_value_row(ui, "Total Cost:", &dollars(totals.total_cost));
        },
    )
}

/// "12,345 (~$0.0617)" or "N/A (~$N/A)" for a missing count
fn token_line(tokens: Option<u64>, rate: f64) -> String {
    let count = tokens.map_or_else(|| NOT_AVAILABLE.to_string(), format_count);
    let value = tokens.map_or(f64::NAN, |t| t as f64);
    format!("{} (~${})", count, calculate_cost(value, rate))
}

fn render_cost_dialog(ctx: &egui::Context, timestamp: i64, details: &CostDetails) -> bool {
    show_dialog(
        ctx,
        egui::Id::new(("history_cost", timestamp)),
        "Cost Details",
        |ui| {
            render_value_row(
                ui,
                "Text Input Tokens:",
                &token_line(details.text_input_tokens, TEXT_INPUT_TOKEN_RATE),
            );
            render_value_row(
                ui,
                "Text Output Tokens:",
                &token_line(details.text_output_tokens, TEXT_OUTPUT_TOKEN_RATE),
            );
            render_value_row(
                ui,
                "Image Tokens:",
                &token_line(details.image_tokens, IMAGE_TOKEN_RATE),
            );
            ui.separator();
            render_value_row(ui, "Total Cost:", &dollars(details.item_total()));
        },
    )
}

fn render_prompt_dialog(
    ctx: &egui::Context,
    state: &mut HistoryPanelState,
    item: &HistoryMetadata,
    clipboard: &mut dyn Clipboard,
    now: Instant,
) -> bool {
    let timestamp = item.timestamp;
    let prompt = item.prompt_text();

    show_dialog(
        ctx,
        egui::Id::new(("history_prompt", timestamp)),
        "Prompt",
        |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let copied = state.is_copied(timestamp, now);
                    let label = if copied {
                        RichText::new("✔ Copied").color(ACCENT_GREEN)
                    } else {
                        RichText::new("📋 Copy").color(TEXT_DIM)
                    };
                    let button = ui
                        .add_enabled(prompt.is_some(), egui::Button::new(label).small())
                        .on_hover_text("Copy prompt");
                    if button.clicked() {
                        state.copy_prompt(prompt, timestamp, clipboard, now);
                    }
                });
            });
            ui.label(
                RichText::new(prompt.unwrap_or("No prompt recorded."))
                    .color(if prompt.is_some() { TEXT_DIM } else { TEXT_MUTED }),
            );
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_line() {
        assert_eq!(token_line(Some(1000), TEXT_INPUT_TOKEN_RATE), "1,000 (~$0.0050)");
        assert_eq!(token_line(Some(4160), IMAGE_TOKEN_RATE), "4,160 (~$0.0416)");
        assert_eq!(token_line(None, IMAGE_TOKEN_RATE), "N/A (~$N/A)");
    }
}
