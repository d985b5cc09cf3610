mod context;
mod editor_state;

pub use context::EditorContext;
pub use editor_state::{EditorState, PointerState};
