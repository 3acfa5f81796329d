//! Shared test utilities for the integration tests

#![allow(dead_code)]

use egui::accesskit;
use image_playground::domain::{CostDetails, GenerationMode, HistoryImage, HistoryMetadata};
use image_playground::gui::{Clipboard, ClipboardError};

/// Logical screen size used by the frame helpers
pub const SCREEN_SIZE: egui::Vec2 = egui::vec2(800.0, 600.0);

/// Creates a history entry with `images` images and an optional recorded cost
pub fn history_item(timestamp: i64, images: usize, cost: Option<f64>) -> HistoryMetadata {
    HistoryMetadata {
        timestamp,
        mode: GenerationMode::Generate,
        prompt: Some(format!("prompt for {}", timestamp)),
        duration_ms: 1800,
        quality: "high".to_string(),
        background: "auto".to_string(),
        moderation: "auto".to_string(),
        images: (0..images)
            .map(|i| HistoryImage {
                filename: format!("{}-{}.png", timestamp, i),
            })
            .collect(),
        cost_details: cost.map(|estimated_cost_usd| CostDetails {
            estimated_cost_usd,
            text_input_tokens: Some(50),
            text_output_tokens: Some(0),
            image_tokens: Some(4160),
        }),
        output_format: Some("png".to_string()),
    }
}

/// Clipboard that records every write
#[derive(Default)]
pub struct RecordingClipboard {
    pub writes: Vec<String>,
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

/// Run one egui frame with `f` inside a central panel
pub fn run_frame<R>(ctx: &egui::Context, mut f: impl FnMut(&mut egui::Ui) -> R) -> Option<R> {
    let mut out = None;
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            out = Some(f(ui));
        });
    });
    out
}

fn screen_input(events: Vec<egui::Event>) -> egui::RawInput {
    egui::RawInput {
        screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, SCREEN_SIZE)),
        events,
        ..Default::default()
    }
}

/// Run one frame on a fixed-size screen, collecting what every pass returned
fn run_input_frame<R>(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    f: &mut impl FnMut(&mut egui::Ui) -> R,
) -> (Vec<R>, egui::FullOutput) {
    let mut out = Vec::new();
    let output = ctx.run(screen_input(events), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            out.push(f(ui));
        });
    });
    (out, output)
}

/// Center of the widget whose accessibility label is `label`
pub fn widget_center(output: &egui::FullOutput, label: &str) -> Option<egui::Pos2> {
    let update = output.platform_output.accesskit_update.as_ref()?;
    let bounds: accesskit::Rect = update
        .nodes
        .iter()
        .find(|(_, node)| node.label() == Some(label))
        .and_then(|(_, node)| node.bounds())?;
    Some(egui::pos2(
        ((bounds.x0 + bounds.x1) / 2.0) as f32,
        ((bounds.y0 + bounds.y1) / 2.0) as f32,
    ))
}

/// Click the widget labelled `label` with the primary mouse button.
///
/// Runs a layout frame, then hover, press, release and one idle frame.
/// Returns the values produced after the layout frame, in order.
pub fn click_widget<R>(
    ctx: &egui::Context,
    label: &str,
    mut f: impl FnMut(&mut egui::Ui) -> R,
) -> Vec<R> {
    ctx.enable_accesskit();
    let (_, layout) = run_input_frame(ctx, Vec::new(), &mut f);
    let pos = widget_center(&layout, label)
        .unwrap_or_else(|| panic!("no widget labelled {:?}", label));

    let button = |pressed| egui::Event::PointerButton {
        pos,
        button: egui::PointerButton::Primary,
        pressed,
        modifiers: egui::Modifiers::NONE,
    };

    let mut results = Vec::new();
    for events in [
        vec![egui::Event::PointerMoved(pos)],
        vec![button(true)],
        vec![button(false)],
        Vec::new(),
    ] {
        results.extend(run_input_frame(ctx, events, &mut f).0);
    }
    results
}
