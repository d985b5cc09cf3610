use log::debug;

use crate::element::normalize_degrees;

mod preview;
pub use preview::ToolPreview;

/// Which instrument the next pointer-down uses
#[derive(Clone, Debug, PartialEq)]
pub enum ToolMode {
    Pen,
    Sticker {
        glyph: String,
        /// Unscaled size as chosen by the user
        size: f32,
    },
}

/// Tagged view of the active instrument with only the parameters it uses
#[derive(Clone, Debug, PartialEq)]
pub enum ActiveTool<'a> {
    Pen { thickness: f32, hue: f32 },
    Sticker { glyph: &'a str, size: f32, rotation: f32 },
}

/// The current instrument and its adjustable parameters.
///
/// Thickness, hue and rotation are stored independently of the mode, so a hue
/// picked for the pen survives a detour through sticker mode and vice versa.
#[derive(Clone, Debug, PartialEq)]
pub struct ToolState {
    mode: ToolMode,
    thickness: f32,
    hue: f32,
    rotation: f32,
}

impl Default for ToolState {
    fn default() -> Self {
        Self::new(2.0, 0.0)
    }
}

impl ToolState {
    /// Start with a pen of the given thickness and hue
    pub fn new(thickness: f32, hue: f32) -> Self {
        Self {
            mode: ToolMode::Pen,
            thickness: if is_positive(thickness) { thickness } else { 1.0 },
            hue: if hue.is_finite() { normalize_degrees(hue) } else { 0.0 },
            rotation: 0.0,
        }
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    pub fn active(&self) -> ActiveTool<'_> {
        match &self.mode {
            ToolMode::Pen => ActiveTool::Pen {
                thickness: self.thickness,
                hue: self.hue,
            },
            ToolMode::Sticker { glyph, size } => ActiveTool::Sticker {
                glyph,
                size: *size,
                rotation: self.rotation,
            },
        }
    }

    pub fn is_pen(&self) -> bool {
        matches!(self.mode, ToolMode::Pen)
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn hue(&self) -> f32 {
        self.hue
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Switch to the pen. Returns false if the parameters were rejected.
    pub fn select_pen(&mut self, thickness: f32, hue: f32) -> bool {
        if !is_positive(thickness) || !hue.is_finite() {
            debug!("Rejected pen selection: thickness {thickness}, hue {hue}");
            return false;
        }
        self.mode = ToolMode::Pen;
        self.thickness = thickness;
        self.hue = normalize_degrees(hue);
        true
    }

    /// Switch to a sticker. An empty glyph means the user declined, so the
    /// current tool is kept. Returns whether the selection took effect.
    pub fn select_sticker(&mut self, glyph: &str, size: f32, rotation: f32) -> bool {
        let glyph = glyph.trim();
        if glyph.is_empty() || !is_positive(size) || !rotation.is_finite() {
            debug!("Rejected sticker selection: {glyph:?}, size {size}, rotation {rotation}");
            return false;
        }
        self.mode = ToolMode::Sticker {
            glyph: glyph.to_owned(),
            size,
        };
        self.rotation = normalize_degrees(rotation);
        true
    }

    pub fn set_thickness(&mut self, thickness: f32) -> bool {
        if !is_positive(thickness) {
            debug!("Rejected thickness {thickness}");
            return false;
        }
        self.thickness = thickness;
        true
    }

    pub fn set_hue(&mut self, hue: f32) -> bool {
        if !hue.is_finite() {
            return false;
        }
        self.hue = normalize_degrees(hue);
        true
    }

    pub fn set_rotation(&mut self, rotation: f32) -> bool {
        if !rotation.is_finite() {
            return false;
        }
        self.rotation = normalize_degrees(rotation);
        true
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
