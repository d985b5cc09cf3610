//! The drawing engine behind the canvas.
//!
//! `EditorContext` owns the display list, redo history, tool state, pointer
//! state and tool preview. UI code drives it through plain method calls and
//! listens for [`EditorEvent`]s to know when to repaint:
//!
//! - `on_pointer_down` / `on_pointer_move` / `on_pointer_up` / `on_pointer_leave`
//! - `select_pen`, `select_sticker`, `set_thickness`, `set_hue`, `set_rotation`
//! - `undo`, `redo`, `clear_all`
//! - `request_export` and `render`
//!
//! Every call runs to completion synchronously. Calls that change nothing
//! (undo on an empty drawing, a declined sticker) emit nothing.

use egui::{Color32, Pos2, Vec2};
use image::RgbaImage;
use log::{debug, info, warn};

use super::{EditorState, PointerState};
use crate::command::CommandHistory;
use crate::config::PaintConfig;
use crate::document::Document;
use crate::element::{Drawable, factory};
use crate::error::ExportError;
use crate::event::{EditorEvent, EventBus, EventHandler};
use crate::export;
use crate::renderer::{Renderer, Scene, Surface};
use crate::tools::{ActiveTool, ToolPreview, ToolState};

#[derive(Debug)]
pub struct EditorContext {
    document: Document,
    history: CommandHistory,
    tool: ToolState,
    state: EditorState,
    pointer: PointerState,
    preview: Option<ToolPreview>,
    canvas_size: Vec2,
    sticker_size_multiplier: f32,
    event_bus: EventBus,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(&PaintConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: &PaintConfig) -> Self {
        let mut sticker_size_multiplier = config.sticker_size_multiplier;
        if !(sticker_size_multiplier.is_finite() && sticker_size_multiplier > 0.0) {
            let fallback = PaintConfig::default().sticker_size_multiplier;
            warn!("Invalid sticker size multiplier {sticker_size_multiplier}, using {fallback}");
            sticker_size_multiplier = fallback;
        }

        Self {
            document: Document::new(),
            history: CommandHistory::new(),
            tool: ToolState::new(config.thin_thickness, config.default_hue),
            state: EditorState::Idle,
            pointer: PointerState::default(),
            preview: None,
            canvas_size: config.canvas_size(),
            sticker_size_multiplier,
            event_bus: EventBus::new(),
        }
    }

    /// Register a repaint listener
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.event_bus.subscribe(handler);
    }

    // ---- pointer -------------------------------------------------------

    /// Start a new stroke or sticker at `pos` with the current tool
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        if self.state.is_drawing() {
            debug!("Pointer down while drawing; ending previous drag");
            self.state = EditorState::Idle;
        }

        self.pointer.active = true;
        self.pointer.position = pos;
        self.pointer.inside = true;

        let drawable = match self.tool.active() {
            ActiveTool::Pen { thickness, hue } => factory::create_stroke(pos, thickness, hue),
            ActiveTool::Sticker { glyph, size, rotation } => {
                factory::create_sticker(pos, glyph, size * self.sticker_size_multiplier, rotation)
            }
        };

        self.state = EditorState::Drawing {
            active: drawable.id(),
        };
        self.history.commit_new(&mut self.document, drawable);
        self.event_bus.emit(EditorEvent::DrawingChanged);
    }

    /// Track the pointer. While drawing this drags the active drawable;
    /// otherwise it moves the tool preview.
    pub fn on_pointer_move(&mut self, pos: Pos2) {
        self.pointer.position = pos;
        self.pointer.inside = true;

        match self.state {
            EditorState::Drawing { active } => {
                // The drawable may have been undone or cleared mid-drag
                if let Some(drawable) = self.document.find_mut(active) {
                    drawable.drag_to(pos);
                    self.event_bus.emit(EditorEvent::DrawingChanged);
                }
            }
            EditorState::Idle => {
                self.refresh_preview();
                self.event_bus.emit(EditorEvent::ToolMoved);
            }
        }
    }

    /// Finish the current drag. The released drawable is never touched again.
    pub fn on_pointer_up(&mut self) {
        if !self.state.is_drawing() {
            return;
        }
        self.state = EditorState::Idle;
        self.pointer.active = false;

        if self.pointer.inside {
            self.refresh_preview();
        }
        self.event_bus.emit(EditorEvent::ToolMoved);
    }

    /// The pointer left the canvas: hide the preview
    pub fn on_pointer_leave(&mut self) {
        self.pointer.inside = false;
        if self.preview.take().is_some() {
            self.event_bus.emit(EditorEvent::ToolMoved);
        }
    }

    // ---- tool selection -------------------------------------------------

    pub fn select_pen(&mut self, thickness: f32, hue: f32) {
        if self.tool.select_pen(thickness, hue) {
            info!("Selected pen: thickness {thickness}, hue {hue}");
            self.tool_changed();
        }
    }

    /// Select a sticker. An empty glyph (a declined prompt) keeps the current tool.
    pub fn select_sticker(&mut self, glyph: &str, size: f32, rotation: f32) {
        if self.tool.select_sticker(glyph, size, rotation) {
            info!("Selected sticker {glyph:?}: size {size}, rotation {rotation}");
            self.tool_changed();
        }
    }

    pub fn set_thickness(&mut self, thickness: f32) {
        if self.tool.set_thickness(thickness) {
            self.tool_changed();
        }
    }

    pub fn set_hue(&mut self, hue: f32) {
        if self.tool.set_hue(hue) {
            self.tool_changed();
        }
    }

    pub fn set_rotation(&mut self, rotation: f32) {
        if self.tool.set_rotation(rotation) {
            self.tool_changed();
        }
    }

    fn tool_changed(&mut self) {
        // A drag in progress keeps its parameters; the change applies to the
        // next drawable and the preview reappears on pointer up.
        if self.state.is_drawing() {
            return;
        }
        self.refresh_preview();
        self.event_bus.emit(EditorEvent::ToolMoved);
    }

    fn refresh_preview(&mut self) {
        self.preview = self.pointer.inside.then(|| {
            ToolPreview::for_tool(&self.tool, self.pointer.position, self.sticker_size_multiplier)
        });
    }

    // ---- history ----------------------------------------------------------

    pub fn undo(&mut self) {
        if self.history.undo(&mut self.document) {
            self.event_bus.emit(EditorEvent::DrawingChanged);
        }
    }

    pub fn redo(&mut self) {
        if self.history.redo(&mut self.document) {
            self.event_bus.emit(EditorEvent::DrawingChanged);
        }
    }

    /// Discard the drawing and all undo/redo history
    pub fn clear_all(&mut self) {
        self.history.clear_all(&mut self.document);
        info!("Cleared drawing");
        self.event_bus.emit(EditorEvent::DrawingChanged);
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo(&self.document)
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ---- output -----------------------------------------------------------

    /// Paint the drawing and, when idle, the tool preview
    pub fn render(&self, surface: &mut dyn Surface) {
        let scene = Scene::new(self.document.drawables())
            .with_preview(self.preview.as_ref(), self.preview_visible());
        Renderer::new().render(surface, &scene);
    }

    /// Render the drawing into a new bitmap of the requested size
    pub fn request_export(
        &self,
        target_width: u32,
        target_height: u32,
        background: Option<Color32>,
    ) -> Result<RgbaImage, ExportError> {
        export::render_to_image(
            self.document.drawables(),
            self.canvas_size,
            target_width,
            target_height,
            background,
        )
    }

    // ---- queries ----------------------------------------------------------

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn drawables(&self) -> &[Drawable] {
        self.document.drawables()
    }

    /// Bottom first; the last element is what `redo` restores next
    pub fn redo_stack(&self) -> &[Drawable] {
        self.history.redo_stack()
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// The preview is painted only while the pointer is idle
    pub fn preview_visible(&self) -> bool {
        !self.state.is_drawing() && self.preview.is_some()
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    pub fn sticker_size_multiplier(&self) -> f32 {
        self.sticker_size_multiplier
    }
}
