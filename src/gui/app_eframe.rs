//! eframe::App implementation for PlaygroundApp
//!
//! Contains the main update loop that runs every frame.

use eframe::egui::{self, RichText};

use super::app::PlaygroundApp;
use super::history_panel::render_history_panel;
use super::mode_toggle::render_mode_toggle;
use super::preview::render_preview;
use super::theme::{BG_PRIMARY, BG_SECONDARY, TEXT_PRIMARY};

impl eframe::App for PlaygroundApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar")
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(8.0))
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new("Image Playground")
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(16.0);
                    if let Some(mode) = render_mode_toggle(ui, self.mode) {
                        self.set_mode(mode);
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        self.settings_button
                            .render(ui, self.settings_store.as_mut());
                    });
                });
            });

        let action = egui::SidePanel::right("history_panel")
            .resizable(true)
            .default_width(self.history_panel_width)
            .frame(egui::Frame::NONE.fill(BG_SECONDARY).inner_margin(12.0))
            .show(ctx, |ui| {
                render_history_panel(
                    ui,
                    &mut self.history_panel,
                    &self.history,
                    &self.images,
                    self.clipboard.as_mut(),
                )
            })
            .inner;

        if let Some(action) = action {
            self.handle_history_action(action);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BG_PRIMARY).inner_margin(16.0))
            .show(ctx, |ui| {
                render_preview(ui, self.preview.as_ref(), self.selected());
            });
    }
}
