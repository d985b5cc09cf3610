/// Repaint notifications emitted by the editor.
///
/// Neither variant carries a payload: listeners redraw from the editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorEvent {
    /// The committed drawing changed (new content, drag, undo, redo, clear)
    DrawingChanged,
    /// Only the tool preview changed; the display list is untouched
    ToolMoved,
}
