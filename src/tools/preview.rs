use egui::Pos2;

use super::{ActiveTool, ToolState};

/// Non-committed hint of what the next pointer-down would produce
#[derive(Clone, Debug, PartialEq)]
pub enum ToolPreview {
    /// Pen: circle whose diameter is the stroke thickness
    Thickness { position: Pos2, thickness: f32, hue: f32 },
    /// Sticker: the glyph as it would be stamped
    Glyph {
        position: Pos2,
        glyph: String,
        size: f32,
        rotation: f32,
    },
}

impl ToolPreview {
    /// Build the preview for `tool` at `position`.
    ///
    /// `sticker_scale` converts the user-facing sticker size into the font size
    /// a committed sticker would get.
    pub fn for_tool(tool: &ToolState, position: Pos2, sticker_scale: f32) -> Self {
        match tool.active() {
            ActiveTool::Pen { thickness, hue } => ToolPreview::Thickness {
                position,
                thickness,
                hue,
            },
            ActiveTool::Sticker { glyph, size, rotation } => ToolPreview::Glyph {
                position,
                glyph: glyph.to_owned(),
                size: size * sticker_scale,
                rotation,
            },
        }
    }

    pub fn position(&self) -> Pos2 {
        match self {
            ToolPreview::Thickness { position, .. } | ToolPreview::Glyph { position, .. } => *position,
        }
    }
}
