use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke, emath::Rot2};

use super::Surface;

/// Paints onto the live canvas through an egui [`Painter`].
///
/// `rect` is the canvas area in screen space; surface coordinates are offset
/// from its top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self) {
        // egui rebuilds every frame from scratch; the canvas backdrop is
        // painted by the panel before the renderer runs.
    }

    fn fill(&mut self, color: Color32) {
        self.painter.rect_filled(self.rect, 0.0, color);
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let screen_points = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter.add(Shape::line(screen_points, Stroke::new(width, color)));
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.painter
            .circle_stroke(self.to_screen(center), radius, Stroke::new(width, color));
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32) {
        let galley = self
            .painter
            .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), color);

        // TextShape pivots around its top-left corner, so back off from the
        // center by the rotated half-extent.
        let rot = Rot2::from_angle(rotation.to_radians());
        let pos = self.to_screen(center) - rot * (galley.size() / 2.0);

        self.painter
            .add(TextShape::new(pos, galley, color).with_angle(rot.angle()));
    }
}
