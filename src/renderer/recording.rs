use egui::{Color32, Pos2};

use super::Surface;

/// One primitive handed to a surface
#[derive(Clone, Debug, PartialEq)]
pub enum PaintOp {
    Clear,
    Fill(Color32),
    Polyline {
        points: Vec<Pos2>,
        width: f32,
        color: Color32,
    },
    CircleOutline {
        center: Pos2,
        radius: f32,
        width: f32,
        color: Color32,
    },
    Glyph {
        glyph: String,
        center: Pos2,
        size: f32,
        rotation: f32,
        color: Color32,
    },
}

/// Surface that records primitives instead of painting them
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(PaintOp::Clear);
    }

    fn fill(&mut self, color: Color32) {
        self.ops.push(PaintOp::Fill(color));
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        self.ops.push(PaintOp::Polyline {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn circle_outline(&mut self, center: Pos2, radius: f32, width: f32, color: Color32) {
        self.ops.push(PaintOp::CircleOutline {
            center,
            radius,
            width,
            color,
        });
    }

    fn glyph(&mut self, glyph: &str, center: Pos2, size: f32, rotation: f32, color: Color32) {
        self.ops.push(PaintOp::Glyph {
            glyph: glyph.to_owned(),
            center,
            size,
            rotation,
            color,
        });
    }
}
