//! Integration tests for the generate/edit switch driven by pointer input

mod common;

use common::click_widget;
use image_playground::domain::GenerationMode;
use image_playground::gui::render_mode_toggle;

#[test]
fn test_clicking_edit_tab_switches_mode() {
    let ctx = egui::Context::default();

    let changes: Vec<GenerationMode> = click_widget(&ctx, "Edit", |ui| {
        render_mode_toggle(ui, GenerationMode::Generate)
    })
    .into_iter()
    .flatten()
    .collect();

    assert_eq!(changes, vec![GenerationMode::Edit]);
    assert_eq!(changes[0].to_string(), "edit");
}

#[test]
fn test_clicking_active_tab_changes_nothing() {
    let ctx = egui::Context::default();

    let changes: Vec<GenerationMode> = click_widget(&ctx, "Generate", |ui| {
        render_mode_toggle(ui, GenerationMode::Generate)
    })
    .into_iter()
    .flatten()
    .collect();

    assert!(changes.is_empty());
}
