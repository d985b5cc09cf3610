use egui::{Pos2, Rect, Response};

mod router;
pub use router::route_event;

/// Pointer events on the canvas, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { position: Pos2 },
    PointerMove { position: Pos2 },
    PointerUp,
    PointerLeave,
}

/// What the canvas saw of the pointer during one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub drag_started: bool,
    pub drag_stopped: bool,
    /// Canvas-local pointer position, `None` when the pointer is elsewhere
    pub position: Option<Pos2>,
}

impl PointerSample {
    /// Sample an egui canvas response whose widget covers `canvas_rect`
    pub fn from_response(response: &Response, canvas_rect: Rect) -> Self {
        let screen_pos = if response.dragged() || response.drag_stopped() {
            response.interact_pointer_pos()
        } else {
            response.hover_pos()
        };
        Self {
            drag_started: response.drag_started(),
            drag_stopped: response.drag_stopped(),
            position: screen_pos.map(|pos| (pos - canvas_rect.min).to_pos2()),
        }
    }
}

/// Turns per-frame pointer samples into discrete [`InputEvent`]s
#[derive(Debug, Default)]
pub struct InputHandler {
    last_position: Option<Pos2>,
    pressed: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn process_response(&mut self, response: &Response, canvas_rect: Rect) -> Vec<InputEvent> {
        self.process(PointerSample::from_response(response, canvas_rect))
    }

    pub fn process(&mut self, sample: PointerSample) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if sample.drag_started {
            if let Some(position) = sample.position {
                events.push(InputEvent::PointerDown { position });
                self.pressed = true;
                self.last_position = Some(position);
            }
        }

        match sample.position {
            Some(position) if self.last_position != Some(position) => {
                events.push(InputEvent::PointerMove { position });
                self.last_position = Some(position);
            }
            // Keep drags alive while the pointer strays off the canvas
            None if !self.pressed && self.last_position.is_some() => {
                events.push(InputEvent::PointerLeave);
                self.last_position = None;
            }
            _ => {}
        }

        if sample.drag_stopped && self.pressed {
            events.push(InputEvent::PointerUp);
            self.pressed = false;
        }

        events
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }
}
