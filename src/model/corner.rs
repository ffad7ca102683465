use egui::{Pos2, Vec2};

use super::CornerId;

/// A point that one or more walls meet at
#[derive(Debug, Clone, PartialEq)]
pub struct Corner {
    id: CornerId,
    pub position: Pos2,
}

impl Corner {
    pub fn new(id: CornerId, position: Pos2) -> Self {
        Self { id, position }
    }

    pub fn id(&self) -> CornerId {
        self.id
    }

    pub fn relative_move(&mut self, delta: Vec2) {
        self.position += delta;
    }

    pub fn distance_from(&self, pos: Pos2) -> f32 {
        self.position.distance(pos)
    }
}
