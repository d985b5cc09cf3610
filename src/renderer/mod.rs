use egui::{Color32, Pos2, pos2};

use crate::element::common::{PREVIEW_ALPHA, STICKER_COLOR, with_alpha};
use crate::element::{Drawable, hue_color};
use crate::tools::ToolPreview;

mod painter;
mod raster;
mod recording;
mod surface;

pub use painter::PainterSurface;
pub use raster::RasterSurface;
pub use recording::{PaintOp, RecordingSurface};
pub use surface::Surface;

/// Line width of the thickness preview circle, before scaling
pub const PREVIEW_OUTLINE_WIDTH: f32 = 1.0;

/// Everything one render pass paints
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub drawables: &'a [Drawable],
    pub preview: Option<&'a ToolPreview>,
    /// False while the pointer is drawing; the preview is then skipped
    pub preview_visible: bool,
    pub background: Option<Color32>,
}

impl<'a> Scene<'a> {
    pub fn new(drawables: &'a [Drawable]) -> Self {
        Self {
            drawables,
            preview: None,
            preview_visible: false,
            background: None,
        }
    }

    pub fn with_preview(mut self, preview: Option<&'a ToolPreview>, visible: bool) -> Self {
        self.preview = preview;
        self.preview_visible = visible;
        self
    }

    pub fn with_background(mut self, background: Option<Color32>) -> Self {
        self.background = background;
        self
    }
}

/// Paints a scene onto any [`Surface`] at a uniform scale.
///
/// The same drawing logic serves the live canvas (scale 1) and bitmap export
/// (scale k onto a surface k times larger), so exports never re-derive
/// coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Renderer {
    scale: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn render(&self, surface: &mut dyn Surface, scene: &Scene<'_>) {
        surface.clear();
        if let Some(background) = scene.background {
            surface.fill(background);
        }

        for drawable in scene.drawables {
            self.paint_drawable(surface, drawable);
        }

        if scene.preview_visible {
            if let Some(preview) = scene.preview {
                self.paint_preview(surface, preview);
            }
        }
    }

    fn paint_drawable(&self, surface: &mut dyn Surface, drawable: &Drawable) {
        match drawable {
            Drawable::Stroke(stroke) => {
                let points: Vec<Pos2> = stroke.points().iter().map(|p| self.scale_pos(*p)).collect();
                surface.polyline(&points, stroke.thickness() * self.scale, stroke.color());
            }
            Drawable::Sticker(sticker) => {
                surface.glyph(
                    sticker.glyph(),
                    self.scale_pos(sticker.position()),
                    sticker.size() * self.scale,
                    sticker.rotation(),
                    STICKER_COLOR,
                );
            }
        }
    }

    fn paint_preview(&self, surface: &mut dyn Surface, preview: &ToolPreview) {
        match preview {
            ToolPreview::Thickness { position, thickness, hue } => {
                surface.circle_outline(
                    self.scale_pos(*position),
                    thickness / 2.0 * self.scale,
                    PREVIEW_OUTLINE_WIDTH * self.scale,
                    hue_color(*hue),
                );
            }
            ToolPreview::Glyph { position, glyph, size, rotation } => {
                surface.glyph(
                    glyph,
                    self.scale_pos(*position),
                    size * self.scale,
                    *rotation,
                    with_alpha(STICKER_COLOR, PREVIEW_ALPHA),
                );
            }
        }
    }

    fn scale_pos(&self, p: Pos2) -> Pos2 {
        pos2(p.x * self.scale, p.y * self.scale)
    }
}
