use crate::state::EditorContext;

use super::InputEvent;

/// Forward a canvas input event to the editor
pub fn route_event(event: &InputEvent, editor: &mut EditorContext) {
    match *event {
        InputEvent::PointerDown { position } => editor.on_pointer_down(position),
        InputEvent::PointerMove { position } => editor.on_pointer_move(position),
        InputEvent::PointerUp => editor.on_pointer_up(),
        InputEvent::PointerLeave => editor.on_pointer_leave(),
    }
}
