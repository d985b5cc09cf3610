use egui::{Color32, Pos2};

/// A 2D target the renderer can paint onto.
///
/// Coordinates are surface-local pixels. Scaling happens in the renderer, so
/// implementations paint exactly what they are given.
pub trait Surface {
    /// Reset the drawing region to transparent
    fn clear(&mut self);

    /// Cover the whole drawing region with `color`
    fn fill(&mut self, color: Color32);

    /// Connected path through `points`. Fewer than two points paint nothing.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32);

    /// Text centered on `center`, rotated clockwise by `rotation` degrees
    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32);
}
