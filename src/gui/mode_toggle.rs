//! Generate/Edit switch
//!
//! Fully controlled: the caller owns the current mode and applies the value
//! returned from [`render_mode_toggle`].

use eframe::egui::{self, RichText, Stroke};

use crate::domain::GenerationMode;
use crate::gui::theme::{BG_SELECTED, BORDER_INACTIVE, TEXT_MUTED, TEXT_ON_SELECTED};

/// Resolve a tab click against the current mode.
///
/// Returns the new mode only when it differs from `current`.
pub fn resolve_mode_click(
    current: GenerationMode,
    clicked: Option<GenerationMode>,
) -> Option<GenerationMode> {
    clicked.filter(|mode| *mode != current)
}

/// Visual style for one tab
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabStyle {
    pub active: bool,
    pub fill: egui::Color32,
    pub stroke: Stroke,
    pub text: egui::Color32,
}

/// Style for `tab` given the currently selected mode
pub fn tab_style(current: GenerationMode, tab: GenerationMode) -> TabStyle {
    if current == tab {
        TabStyle {
            active: true,
            fill: BG_SELECTED,
            stroke: Stroke::new(1.0, BG_SELECTED),
            text: TEXT_ON_SELECTED,
        }
    } else {
        TabStyle {
            active: false,
            fill: egui::Color32::TRANSPARENT,
            stroke: Stroke::new(1.0, BORDER_INACTIVE),
            text: TEXT_MUTED,
        }
    }
}

/// Render the two tabs side by side.
///
/// Returns `Some(mode)` when the user switched to a different mode.
pub fn render_mode_toggle(ui: &mut egui::Ui, current: GenerationMode) -> Option<GenerationMode> {
    let mut clicked = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        for mode in GenerationMode::ALL {
            let style = tab_style(current, mode);
            let button = egui::Button::new(RichText::new(mode.label()).color(style.text))
                .fill(style.fill)
                .stroke(style.stroke)
                .corner_radius(4.0)
                .selected(style.active);
            if ui.add(button).clicked() {
                clicked = Some(mode);
            }
        }
    });

    resolve_mode_click(current, clicked)
}
