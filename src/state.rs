use egui::Pos2;

use crate::model::{CornerId, ItemId, WallId};

/// What a click on the canvas does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Hover, select and drag existing geometry; drag empty space to pan
    #[default]
    Move,
    /// Each click places a corner, chained to the previous one by a wall
    Draw,
    /// Click removes the hovered entity
    Delete,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Move, Mode::Draw, Mode::Delete];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Move => "Move",
            Self::Draw => "Draw",
            Self::Delete => "Delete",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The entity under the pointer. Only one can be active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveEntity {
    #[default]
    None,
    Corner(CornerId),
    Wall(WallId),
    Item(ItemId),
}

impl ActiveEntity {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn corner(&self) -> Option<CornerId> {
        match self {
            Self::Corner(id) => Some(*id),
            _ => None,
        }
    }

    pub fn wall(&self) -> Option<WallId> {
        match self {
            Self::Wall(id) => Some(*id),
            _ => None,
        }
    }

    pub fn item(&self) -> Option<ItemId> {
        match self {
            Self::Item(id) => Some(*id),
            _ => None,
        }
    }
}

/// Where the pointer is and what the button is doing.
///
/// `position` is in model units; `last_raw` is canvas-local pixels.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    pub position: Pos2,
    /// Canvas position the last drag step was measured from
    pub last_raw: Pos2,
    pub down: bool,
    /// Set by any move since the last press
    pub moved: bool,
}

impl PointerState {
    pub fn press(&mut self, raw: Pos2, position: Pos2) {
        self.position = position;
        self.last_raw = raw;
        self.down = true;
        self.moved = false;
    }

    pub fn move_to(&mut self, position: Pos2) {
        self.position = position;
        self.moved = true;
    }

    pub fn release(&mut self) {
        self.down = false;
    }

    pub fn is_dragging(&self) -> bool {
        self.down
    }
}
