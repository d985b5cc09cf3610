use std::path::Path;

use egui::{Color32, Vec2};
use image::{ImageFormat, RgbaImage};
use log::info;

use crate::element::Drawable;
use crate::error::ExportError;
use crate::renderer::{RasterSurface, Renderer, Scene};

/// Largest width or height an export may request
pub const MAX_EXPORT_DIMENSION: u32 = 16_384;

/// Uniform scale that fits a canvas of `canvas_size` into the target.
///
/// With mismatched aspect ratios the smaller ratio wins so nothing is cropped.
pub fn export_scale(canvas_size: Vec2, width: u32, height: u32) -> f32 {
    (width as f32 / canvas_size.x).min(height as f32 / canvas_size.y)
}

/// Render `drawables` onto a fresh bitmap of `width` x `height`.
///
/// The tool preview is never part of an export.
pub fn render_to_image(
    drawables: &[Drawable],
    canvas_size: Vec2,
    width: u32,
    height: u32,
    background: Option<Color32>,
) -> Result<RgbaImage, ExportError> {
    if width == 0
        || height == 0
        || width > MAX_EXPORT_DIMENSION
        || height > MAX_EXPORT_DIMENSION
        || canvas_size.x <= 0.0
        || canvas_size.y <= 0.0
    {
        return Err(ExportError::InvalidDimensions { width, height });
    }

    let scale = export_scale(canvas_size, width, height);
    let mut surface = RasterSurface::new(width, height);
    Renderer::new()
        .with_scale(scale)
        .render(&mut surface, &Scene::new(drawables).with_background(background));

    info!(
        "Exported {} drawables at {width}x{height} (scale {scale})",
        drawables.len()
    );
    Ok(surface.into_image())
}

/// Encode an export as PNG at `path`
pub fn save_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), ExportError> {
    image.save_with_format(path.as_ref(), ImageFormat::Png)?;
    info!("Saved export to {}", path.as_ref().display());
    Ok(())
}
