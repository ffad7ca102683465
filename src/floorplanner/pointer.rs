use egui::{Key, Pos2, Vec2};
use log::{debug, info};

use super::Floorplanner;
use crate::model::MergeOutcome;
use crate::state::{ActiveEntity, Mode};
use crate::units::pixels_to_cm;
use crate::view::FloorplanView;

/// Per axis, take the node's coordinate when the pointer is within
/// `tolerance` of it, otherwise the pointer's.
pub fn snap_target(pointer: Pos2, node: Pos2, tolerance: f32) -> Pos2 {
    let snap = |pointer: f32, node: f32| {
        if (pointer - node).abs() < tolerance {
            node
        } else {
            pointer
        }
    };
    Pos2::new(snap(pointer.x, node.x), snap(pointer.y, node.y))
}

impl<V: FloorplanView> Floorplanner<V> {
    /// Pointer button pressed at a canvas-local position
    pub fn pointer_down(&mut self, raw: Pos2) {
        let position = self.to_model(raw);
        self.pointer.press(raw, position);

        if self.mode == Mode::Delete {
            self.delete_active();
            return;
        }

        let handle_radius = self.config.item_handle_radius;
        if let Some(item) = self
            .floorplan
            .selected_item()
            .and_then(|id| self.floorplan.item_mut(id))
        {
            if item.on_pointer_down(position, handle_radius) {
                self.view.draw();
            }
        }
    }

    /// Pointer moved to a canvas-local position, with or without the button held
    pub fn pointer_move(&mut self, raw: Pos2) {
        let position = self.to_model(raw);
        self.pointer.move_to(position);
        let dragging = self.pointer.is_dragging();

        if self.mode == Mode::Draw || (self.mode == Mode::Move && dragging) {
            self.update_target();
        }

        if self.mode != Mode::Draw && !dragging {
            self.update_hover();
        }

        if dragging {
            let raw_delta = raw - self.pointer.last_raw;
            if self.active.is_none() {
                self.origin -= raw_delta;
                // the model point under the cursor shifted with the origin
                self.pointer.position = self.to_model(raw);
                if self.mode == Mode::Draw {
                    self.update_target();
                }
                self.view.draw();
            } else if self.mode == Mode::Move {
                self.drag_active(raw_delta, position);
            }
        }

        self.pointer.last_raw = raw;
    }

    /// Pointer button released
    pub fn pointer_up(&mut self) {
        if !self.pointer.down {
            return;
        }
        if let Some(item) = self
            .floorplan
            .selected_item()
            .and_then(|id| self.floorplan.item_mut(id))
        {
            item.on_pointer_up();
        }

        let moved = self.pointer.moved;
        self.pointer.release();
        if moved {
            return;
        }

        match self.mode {
            Mode::Draw => self.place_corner(),
            Mode::Move => {
                let active_item = self.active.item();
                self.floorplan.set_selected_item(active_item);
                self.view.draw();
            }
            Mode::Delete => {}
        }
    }

    /// Pointer left the canvas
    pub fn pointer_leave(&mut self) {
        if let Some(item) = self
            .floorplan
            .selected_item()
            .and_then(|id| self.floorplan.item_mut(id))
        {
            item.on_pointer_up();
        }
        self.pointer.release();
        self.set_active(ActiveEntity::None);
        self.view.draw();
    }

    pub fn key_up(&mut self, key: Key) {
        if key == Key::Escape {
            self.set_mode(Mode::Move);
        }
    }

    /// Hit test item, then corner, then wall under the pointer
    fn update_hover(&mut self) {
        let pos = self.pointer.position;
        let hit = if let Some(id) = self.floorplan.item_at(pos, self.config.item_handle_radius) {
            ActiveEntity::Item(id)
        } else if let Some(id) = self.floorplan.corner_at(pos, self.config.hover_tolerance) {
            ActiveEntity::Corner(id)
        } else if let Some(id) = self.floorplan.wall_at(pos, self.config.hover_tolerance) {
            ActiveEntity::Wall(id)
        } else {
            ActiveEntity::None
        };

        if hit != self.active {
            debug!("Hover changed to {:?}", hit);
            self.set_active(hit);
            self.view.draw();
        }
    }

    fn drag_active(&mut self, raw_delta: Vec2, position: Pos2) {
        let delta = pixels_to_cm(raw_delta);
        let tolerance = self.config.snap_tolerance;

        match self.active {
            ActiveEntity::Item(id) => {
                let Some(item) = self.floorplan.item_mut(id) else {
                    return;
                };
                if item.owns_drag() {
                    if !item.on_pointer_drag(position) {
                        return;
                    }
                } else {
                    self.floorplan.move_item(id, delta);
                }
            }
            ActiveEntity::Corner(id) => {
                // Follow the pointer rather than accumulate deltas, so a
                // snapped corner can be pulled free again.
                let Some(current) = self.floorplan.corner(id).map(|corner| corner.position) else {
                    return;
                };
                self.floorplan.move_corner(id, position - current);
                self.floorplan.snap_corner_to_axis(id, tolerance);
                self.floorplan.remove_duplicate_walls();
            }
            ActiveEntity::Wall(id) => {
                self.floorplan.move_wall(id, delta);
                self.floorplan.snap_wall_to_axis(id, tolerance);
                self.floorplan.remove_duplicate_walls();
            }
            ActiveEntity::None => return,
        }

        self.notify_changed();
        self.view.draw();
    }

    fn delete_active(&mut self) {
        let removed = match self.active {
            ActiveEntity::Item(id) => self.floorplan.remove_item(id),
            ActiveEntity::Corner(id) => self.floorplan.remove_corner(id),
            ActiveEntity::Wall(id) => self.floorplan.remove_wall(id),
            ActiveEntity::None => {
                self.set_mode(Mode::Move);
                return;
            }
        };

        if removed {
            info!("Deleted {:?}", self.active);
            self.notify_changed();
        }
        self.active = ActiveEntity::None;
        self.view.draw();
    }

    /// Draw-mode click: drop a corner at the target and wall it to the previous one
    fn place_corner(&mut self) {
        let corner = self.floorplan.new_corner(self.target);
        let previous = self
            .last_node
            .filter(|id| self.floorplan.corner(*id).is_some());
        if let Some(previous) = previous {
            self.floorplan.new_wall(previous, corner);
        }

        let outcome = self
            .floorplan
            .merge_with_intersected(corner, self.config.merge_tolerance);
        let placed = match outcome {
            MergeOutcome::Corner(kept) => kept,
            MergeOutcome::Wall(_) | MergeOutcome::None => corner,
        };
        self.floorplan.remove_duplicate_walls();
        info!("Placed corner {} at {:?} ({:?})", placed, self.target, outcome);

        if outcome.merged() && previous.is_some() {
            self.set_mode(Mode::Move);
        } else {
            self.last_node = Some(placed);
            self.update_target();
        }

        self.view.draw();
        self.notify_changed();
    }
}
