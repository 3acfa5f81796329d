//! GUI runner - launches the playground window

use anyhow::Result;
use eframe::egui::{self, IconData};
use tracing::info;

use super::app::PlaygroundApp;
use crate::config::AppConfig;

const ICON_SIZE: u32 = 64;

/// Build the window icon: a rounded emerald tile with a lighter diagonal band
fn build_icon() -> IconData {
    let radius = ICON_SIZE as f32 / 2.0;
    let img = image::RgbaImage::from_fn(ICON_SIZE, ICON_SIZE, |x, y| {
        let dx = x as f32 + 0.5 - radius;
        let dy = y as f32 + 0.5 - radius;
        if dx * dx + dy * dy > radius * radius {
            return image::Rgba([0, 0, 0, 0]);
        }
        if (x as i32 - y as i32).abs() < 8 {
            image::Rgba([209, 250, 229, 255])
        } else {
            image::Rgba([5, 150, 105, 255])
        }
    });

    IconData {
        rgba: img.into_raw(),
        width: ICON_SIZE,
        height: ICON_SIZE,
    }
}

/// Run the main GUI application
pub fn run_gui(config: AppConfig) -> Result<()> {
    info!(
        "Starting GUI (data dir: {})",
        config.storage.data_dir().display()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.gui.window_width, config.gui.window_height])
            .with_min_inner_size([720.0, 420.0])
            .with_decorations(true)
            .with_resizable(true)
            .with_icon(std::sync::Arc::new(build_icon())),
        centered: true,
        ..Default::default()
    };

    let app = PlaygroundApp::new(&config);

    eframe::run_native(
        "image-playground",
        options,
        Box::new(|cc| {
            PlaygroundApp::install(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run GUI: {}", e))?;

    Ok(())
}
