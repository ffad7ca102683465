use egui::{Context, Key, PointerButton, Pos2, Rect};

mod router;
pub use router::route_event;

/// Input events in canvas-local device pixels
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Mouse button was pressed over the canvas
    PointerDown { position: Pos2, button: PointerButton },
    /// Mouse button was released
    PointerUp { position: Pos2, button: PointerButton },
    /// Mouse moved over the canvas
    PointerMove { position: Pos2 },
    /// Mouse left the canvas
    PointerLeave,
    /// Key was released
    KeyUp { key: Key },
}

/// Handles converting raw egui input into canvas [`InputEvent`]s
#[derive(Debug, Clone)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Process raw egui input and generate our InputEvents
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        ctx.input(|input| {
            let hover = input
                .pointer
                .hover_pos()
                .filter(|pos| self.canvas_rect.contains(*pos));
            let mut events = self.pointer_events(hover);

            if let Some(pos) = hover {
                for button in [PointerButton::Primary, PointerButton::Secondary, PointerButton::Middle] {
                    if input.pointer.button_pressed(button) {
                        events.push(InputEvent::PointerDown {
                            position: self.to_canvas(pos),
                            button,
                        });
                    }
                    if input.pointer.button_released(button) {
                        events.push(InputEvent::PointerUp {
                            position: self.to_canvas(pos),
                            button,
                        });
                    }
                }
            }

            for event in &input.raw.events {
                if let egui::Event::Key { key, pressed: false, .. } = event {
                    events.push(InputEvent::KeyUp { key: *key });
                }
            }

            events
        })
    }

    /// Move and leave events from the pointer's hover position this frame
    fn pointer_events(&mut self, hover: Option<Pos2>) -> Vec<InputEvent> {
        let mut events = Vec::new();
        match hover {
            Some(pos) if Some(pos) != self.last_pointer_pos => {
                events.push(InputEvent::PointerMove {
                    position: self.to_canvas(pos),
                });
                self.last_pointer_pos = Some(pos);
            }
            Some(_) => {}
            None => {
                if self.last_pointer_pos.take().is_some() {
                    events.push(InputEvent::PointerLeave);
                }
            }
        }
        events
    }
}
