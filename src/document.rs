use crate::element::Drawable;

/// The display list: committed drawables in paint order, last on top.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    drawables: Vec<Drawable>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, item: Drawable) {
        self.drawables.push(item);
    }

    /// Empties the list. Only `CommandHistory::clear_all` calls this, so the
    /// redo stack is always cleared with it.
    pub(crate) fn clear(&mut self) {
        self.drawables.clear();
    }

    pub fn pop_last(&mut self) -> Option<Drawable> {
        self.drawables.pop()
    }

    /// Restore an item to the top of the list
    pub fn push_back(&mut self, item: Drawable) {
        self.drawables.push(item);
    }

    pub fn drawables(&self) -> &[Drawable] {
        &self.drawables
    }

    pub fn len(&self) -> usize {
        self.drawables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawables.is_empty()
    }

    /// Find a drawable by id. Searches from the top, where the drawable being
    /// dragged almost always sits.
    pub fn find_mut(&mut self, id: usize) -> Option<&mut Drawable> {
        self.drawables.iter_mut().rev().find(|d| d.id() == id)
    }
}
