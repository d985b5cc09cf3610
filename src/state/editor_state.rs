//! Pointer interaction state machine.
//!
//! ```text
//!          pointer down
//!   ┌──────┐ ───────────► ┌─────────┐
//!   │ Idle │              │ Drawing │ ◄─┐ pointer move:
//!   └──────┘ ◄─────────── └─────────┘ ──┘ drag the active drawable
//!          pointer up
//! ```
//!
//! An idle pointer move only updates the tool preview.

use egui::Pos2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EditorState {
    #[default]
    Idle,
    Drawing {
        /// Id of the drawable following the pointer
        active: usize,
    },
}

impl EditorState {
    pub fn is_drawing(&self) -> bool {
        matches!(self, Self::Drawing { .. })
    }
}

/// Where the pointer is and whether it is pressed
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub active: bool,
    /// Latest known position, tracked even while idle
    pub position: Pos2,
    /// False until the first pointer event and after the pointer leaves
    pub inside: bool,
}
