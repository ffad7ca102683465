use egui::PointerButton;

use super::InputEvent;
use crate::floorplanner::Floorplanner;
use crate::view::FloorplanView;

/// Routes an input event to the floorplanner. Only the primary button edits;
/// other buttons are ignored.
pub fn route_event<V: FloorplanView>(event: &InputEvent, floorplanner: &mut Floorplanner<V>) {
    match event {
        InputEvent::PointerDown {
            position,
            button: PointerButton::Primary,
        } => floorplanner.pointer_down(*position),
        InputEvent::PointerUp {
            button: PointerButton::Primary,
            ..
        } => floorplanner.pointer_up(),
        InputEvent::PointerMove { position } => floorplanner.pointer_move(*position),
        InputEvent::PointerLeave => floorplanner.pointer_leave(),
        InputEvent::KeyUp { key } => floorplanner.key_up(*key),
        InputEvent::PointerDown { .. } | InputEvent::PointerUp { .. } => {}
    }
}
