use egui::{Color32, Pos2};

use crate::element::common;

/// Freehand line through the points the pointer visited while dragging
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    id: usize,
    points: Vec<Pos2>,
    thickness: f32,
    hue: f32,
}

impl Stroke {
    /// Start a stroke at `start`. A stroke never has fewer than one point.
    pub fn new(id: usize, start: Pos2, thickness: f32, hue: f32) -> Self {
        Self {
            id,
            points: vec![start],
            thickness,
            hue: common::normalize_degrees(hue),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Append a point to the end of the stroke
    pub fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    /// Ink color derived from the hue
    pub fn color(&self) -> Color32 {
        common::hue_color(self.hue)
    }

    /// A stroke that never moved paints nothing.
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 2
    }
}
