use egui::Pos2;

use crate::element::common;

/// A glyph stamped onto the canvas.
///
/// Only the position changes after creation: the sticker follows the pointer
/// until the drag that placed it ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Sticker {
    id: usize,
    position: Pos2,
    glyph: String,
    size: f32,
    rotation: f32,
}

impl Sticker {
    pub fn new(id: usize, position: Pos2, glyph: impl Into<String>, size: f32, rotation: f32) -> Self {
        Self {
            id,
            position,
            glyph: glyph.into(),
            size,
            rotation: common::normalize_degrees(rotation),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Move the sticker so it is centered on `point`
    pub fn reposition(&mut self, point: Pos2) {
        self.position = point;
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Font size in surface units
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Rotation in degrees, `[0, 360)`
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}
