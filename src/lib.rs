#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod export;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod tools;

pub use app::PaintApp;
pub use command::CommandHistory;
pub use config::PaintConfig;
pub use document::Document;
pub use element::{Drawable, Point, Sticker, Stroke};
pub use error::{ConfigError, ExportError};
pub use event::{EditorEvent, EventHandler};
pub use input::{InputEvent, InputHandler};
pub use renderer::{Renderer, Scene, Surface};
pub use state::{EditorContext, EditorState, PointerState};
pub use tools::{ActiveTool, ToolPreview, ToolState};
