//! Logo and background image loading.
//!
//! Images are picked with a native file dialog, read from disk, decoded with
//! the `image` crate, and uploaded as egui textures. Failures are reported in
//! the status line and logged; they never abort the editor.

use super::state::DesignerApp;
use crate::types::SettingsUpdate;
use eframe::egui;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an image asset failed to load.
#[derive(Debug, Error)]
pub enum AssetError {
    /// The file could not be read from disk.
    #[error("failed to read image file: {0}")]
    Io(#[from] std::io::Error),
    /// The file contents are not a decodable image.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Reads and decodes an image file into an egui color image.
pub fn load_color_image(path: &Path) -> Result<egui::ColorImage, AssetError> {
    let bytes = std::fs::read(path)?;
    let decoded = image::load_from_memory(&bytes)?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw()))
}

/// Shows the native image picker.
fn pick_image_file() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
        .pick_file()
}

impl DesignerApp {
    /// Prompts for a logo image and loads it into the logo slot.
    pub fn pick_logo(&mut self, ctx: &egui::Context) {
        let Some(path) = pick_image_file() else {
            return;
        };
        match load_color_image(&path) {
            Ok(image) => {
                self.assets.logo =
                    Some(ctx.load_texture("logo", image, egui::TextureOptions::LINEAR));
                self.assets.last_error = None;
            }
            Err(err) => {
                log::warn!("logo load failed for {}: {err}", path.display());
                self.assets.last_error = Some(format!("Could not load logo: {err}"));
            }
        }
    }

    /// Removes the uploaded logo; the element stops rendering.
    pub fn remove_logo(&mut self) {
        self.assets.logo = None;
    }

    /// Prompts for a background image, loads it, and resets its opacity.
    pub fn pick_background(&mut self, ctx: &egui::Context) {
        let Some(path) = pick_image_file() else {
            return;
        };
        match load_color_image(&path) {
            Ok(image) => {
                self.assets.background =
                    Some(ctx.load_texture("background", image, egui::TextureOptions::LINEAR));
                self.assets.last_error = None;
                // A fresh upload always starts fully opaque.
                self.settings.apply_update(SettingsUpdate {
                    background_opacity: Some(1.0),
                    ..Default::default()
                });
            }
            Err(err) => {
                log::warn!("background load failed for {}: {err}", path.display());
                self.assets.last_error = Some(format!("Could not load background: {err}"));
            }
        }
    }

    /// Removes the uploaded background image; the layer is simply omitted.
    pub fn remove_background(&mut self) {
        self.assets.background = None;
    }
}
