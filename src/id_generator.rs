use std::sync::atomic::{AtomicUsize, Ordering};

// Shared by strokes and stickers so ids never collide across kinds
static NEXT_DRAWABLE_ID: AtomicUsize = AtomicUsize::new(1);

pub fn generate_id() -> usize {
    NEXT_DRAWABLE_ID.fetch_add(1, Ordering::Relaxed)
}
