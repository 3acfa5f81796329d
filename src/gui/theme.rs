//! GUI Theme: neutral dark studio palette
//!
//! Color constants for the playground GUI.

use eframe::egui::{self, Color32, Stroke};

// ═══════════════════════════════════════════════════════════════════════════
// BACKGROUNDS
// ═══════════════════════════════════════════════════════════════════════════

/// Window background (neutral-950)
pub const BG_PRIMARY: Color32 = Color32::from_rgb(10, 10, 10);
/// Panels and cards (neutral-900)
pub const BG_SECONDARY: Color32 = Color32::from_rgb(23, 23, 23);
/// Detail blocks and dialog bodies (neutral-800)
pub const BG_HIGHLIGHT: Color32 = Color32::from_rgb(38, 38, 38);
/// Active tab fill (neutral-200)
pub const BG_SELECTED: Color32 = Color32::from_rgb(229, 229, 229);

// ═══════════════════════════════════════════════════════════════════════════
// TEXT COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(245, 245, 245);
pub const TEXT_DIM: Color32 = Color32::from_rgb(212, 212, 212);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(163, 163, 163);
/// Text drawn on the light active-tab fill
pub const TEXT_ON_SELECTED: Color32 = Color32::from_rgb(23, 23, 23);

// ═══════════════════════════════════════════════════════════════════════════
// BORDERS & ACCENTS
// ═══════════════════════════════════════════════════════════════════════════

pub const BORDER: Color32 = Color32::from_rgb(64, 64, 64);
pub const BORDER_INACTIVE: Color32 = Color32::from_rgb(82, 82, 82);

/// Cost badges (emerald-600)
pub const ACCENT_EMERALD: Color32 = Color32::from_rgb(5, 150, 105);
pub const ACCENT_GREEN: Color32 = Color32::from_rgb(80, 220, 120);
pub const ACCENT_RED: Color32 = Color32::from_rgb(248, 113, 113);
pub const ACCENT_BLUE: Color32 = Color32::from_rgb(59, 130, 246);

/// Apply the dark theme to the egui context.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.dark_mode = true;
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_SECONDARY;
    style.visuals.window_stroke = Stroke::new(1.0, BORDER);
    style.visuals.extreme_bg_color = BG_HIGHLIGHT;
    style.visuals.widgets.noninteractive.bg_fill = BG_SECONDARY;
    style.visuals.widgets.inactive.bg_fill = BG_HIGHLIGHT;
    style.visuals.widgets.hovered.bg_fill = BORDER;
    style.visuals.widgets.active.bg_fill = BORDER;
    style.visuals.selection.bg_fill = BORDER_INACTIVE;
    style.visuals.selection.stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.hyperlink_color = ACCENT_BLUE;
    ctx.set_style(style);
}
