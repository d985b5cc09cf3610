use egui::{Key, KeyboardShortcut, Modifiers};

use crate::config::PaintConfig;
use crate::event::EditorEvent;
use crate::input::InputHandler;
use crate::panels;
use crate::state::EditorContext;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Y);

/// eframe shell around the editor. Holds UI-only state; the drawing lives in
/// [`EditorContext`] and is not persisted.
pub struct PaintApp {
    pub(crate) editor: EditorContext,
    pub(crate) input: InputHandler,
    pub(crate) config: PaintConfig,
    /// User-facing sticker size applied by the sticker buttons
    pub(crate) sticker_size: f32,
    /// Contents of the custom sticker field
    pub(crate) custom_sticker: String,
    /// Result of the last export, shown under the export button
    pub(crate) status: Option<String>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: PaintConfig) -> Self {
        let app = Self::with_config(config);

        let egui_ctx = cc.egui_ctx.clone();
        app.editor.subscribe(Box::new(move |_: &EditorEvent| egui_ctx.request_repaint()));

        app
    }

    /// Build the app without a window, e.g. for tests
    pub fn with_config(config: PaintConfig) -> Self {
        Self {
            editor: EditorContext::new(&config),
            input: InputHandler::new(),
            sticker_size: config.default_sticker_size,
            custom_sticker: String::new(),
            status: None,
            config,
        }
    }

    /// Export at the configured scale and write the PNG to the configured path
    pub fn export(&mut self) {
        let (width, height) = self.config.export_size();
        let background = Some(self.config.background_color());
        let result = self
            .editor
            .request_export(width, height, background)
            .and_then(|image| crate::export::save_png(&image, &self.config.export_path));

        self.status = Some(match result {
            Ok(()) => format!("Saved {}", self.config.export_path.display()),
            Err(err) => {
                log::warn!("Export failed: {err}");
                format!("Export failed: {err}")
            }
        });
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.editor.undo();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.editor.redo();
        }
    }
}

impl eframe::App for PaintApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
