use egui::Pos2;

pub(crate) mod common;
mod sticker;
mod stroke;

pub use common::{hue_color, normalize_degrees};
pub use sticker::Sticker;
pub use stroke::Stroke;

/// Surface-local coordinate
pub type Point = Pos2;

/// A committed, renderable unit of content in the display list
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl Drawable {
    pub fn id(&self) -> usize {
        match self {
            Drawable::Stroke(s) => s.id(),
            Drawable::Sticker(s) => s.id(),
        }
    }

    pub fn element_type(&self) -> &'static str {
        match self {
            Drawable::Stroke(_) => "stroke",
            Drawable::Sticker(_) => "sticker",
        }
    }

    /// Follow the pointer during an active drag.
    ///
    /// Strokes grow by one point; stickers jump to the new position.
    pub fn drag_to(&mut self, point: Point) {
        match self {
            Drawable::Stroke(s) => s.extend(point),
            Drawable::Sticker(s) => s.reposition(point),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Drawable::Stroke(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Drawable::Sticker(s) => Some(s),
            _ => None,
        }
    }
}

impl From<Stroke> for Drawable {
    fn from(stroke: Stroke) -> Self {
        Drawable::Stroke(stroke)
    }
}

impl From<Sticker> for Drawable {
    fn from(sticker: Sticker) -> Self {
        Drawable::Sticker(sticker)
    }
}

/// Factory functions for creating drawables with fresh ids
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;

    /// Create a one-point stroke at `start`
    pub fn create_stroke(start: Point, thickness: f32, hue: f32) -> Drawable {
        Drawable::Stroke(Stroke::new(generate_id(), start, thickness, hue))
    }

    /// Create a sticker centered at `position`
    pub fn create_sticker(position: Point, glyph: &str, size: f32, rotation: f32) -> Drawable {
        Drawable::Sticker(Sticker::new(generate_id(), position, glyph, size, rotation))
    }
}
