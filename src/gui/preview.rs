//! Large preview of the selected history entry

use eframe::egui::{self, RichText, ScrollArea};
use tracing::debug;

use super::image_source::{DirectoryImages, ImageResolver};
use crate::domain::{HistoryMetadata, format_timestamp};
use crate::gui::theme::{TEXT_DIM, TEXT_MUTED, TEXT_PRIMARY};

const PREVIEW_MAX_SIZE: f32 = 512.0;

/// One image of the previewed entry
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewImage {
    pub filename: String,
    pub uri: Option<String>,
    /// Pixel size read from the file header
    pub dimensions: Option<(u32, u32)>,
}

/// Images of the selected entry, resolved once on selection
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePreview {
    timestamp: i64,
    images: Vec<PreviewImage>,
}

impl ImagePreview {
    pub fn load(item: &HistoryMetadata, images: &DirectoryImages) -> Self {
        let images = item
            .images
            .iter()
            .map(|image| {
                let path = images.path_of(&image.filename);
                let dimensions = path.as_ref().and_then(|p| match image::image_dimensions(p) {
                    Ok(dims) => Some(dims),
                    Err(e) => {
                        debug!("Could not read dimensions of {}: {}", p.display(), e);
                        None
                    }
                });
                PreviewImage {
                    filename: image.filename.clone(),
                    uri: images.image_src(&image.filename),
                    dimensions,
                }
            })
            .collect();

        Self {
            timestamp: item.timestamp,
            images,
        }
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn images(&self) -> &[PreviewImage] {
        &self.images
    }
}

/// Render the preview, or a hint when nothing is selected
pub fn render_preview(
    ui: &mut egui::Ui,
    preview: Option<&ImagePreview>,
    item: Option<&HistoryMetadata>,
) {
    let (Some(preview), Some(item)) = (preview, item) else {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("Select an image from the history to preview it.").color(TEXT_MUTED));
        });
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.label(RichText::new(item.title()).size(16.0).strong().color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format_timestamp(item.timestamp))
                    .small()
                    .color(TEXT_MUTED),
            );
            if let Some(prompt) = item.prompt_text() {
                ui.add_space(4.0);
                ui.label(RichText::new(prompt).color(TEXT_DIM));
            }
            ui.add_space(12.0);

            for image in preview.images() {
                match &image.uri {
                    Some(uri) => {
                        ui.add(
                            egui::Image::new(uri.clone())
                                .max_size(egui::vec2(PREVIEW_MAX_SIZE, PREVIEW_MAX_SIZE))
                                .corner_radius(6.0),
                        );
                    }
                    None => {
                        ui.label(
                            RichText::new(format!("{} is not available", image.filename))
                                .color(TEXT_MUTED),
                        );
                    }
                }
                let caption = match image.dimensions {
                    Some((w, h)) => format!("{} · {}×{}", image.filename, w, h),
                    None => image.filename.clone(),
                };
                ui.label(RichText::new(caption).small().color(TEXT_MUTED));
                ui.add_space(12.0);
            }
        });
}
