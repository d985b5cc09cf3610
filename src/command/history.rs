use log::debug;

use crate::document::Document;
use crate::element::Drawable;

/// Undo/redo over committed drawables.
///
/// The document itself is the undo stack: undo pops its last drawable onto
/// the redo stack and redo pushes it back. Any new commit empties the redo
/// stack, so redo only ever replays a straight run of undos.
#[derive(Clone, Debug, Default)]
pub struct CommandHistory {
    /// Most recently undone drawable on top (last)
    redo_stack: Vec<Drawable>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new drawable to the document and invalidate redo history
    pub fn commit_new(&mut self, document: &mut Document, item: Drawable) {
        debug!("Committing {} {}", item.element_type(), item.id());
        document.append(item);
        self.redo_stack.clear();
    }

    /// Move the top drawable onto the redo stack.
    ///
    /// Returns false and changes nothing when the document is empty.
    pub fn undo(&mut self, document: &mut Document) -> bool {
        match document.pop_last() {
            Some(item) => {
                debug!("Undo {} {}", item.element_type(), item.id());
                self.redo_stack.push(item);
                true
            }
            None => false,
        }
    }

    /// Restore the most recently undone drawable.
    ///
    /// Returns false and changes nothing when there is nothing to redo.
    pub fn redo(&mut self, document: &mut Document) -> bool {
        match self.redo_stack.pop() {
            Some(item) => {
                debug!("Redo {} {}", item.element_type(), item.id());
                document.push_back(item);
                true
            }
            None => false,
        }
    }

    /// Discard the whole drawing along with any redo history
    pub fn clear_all(&mut self, document: &mut Document) {
        document.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self, document: &Document) -> bool {
        !document.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Bottom first; the last element is what `redo` restores next
    pub fn redo_stack(&self) -> &[Drawable] {
        &self.redo_stack
    }
}
