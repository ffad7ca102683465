use super::{CornerId, WallId};

/// A straight segment between two corners
#[derive(Debug, Clone, PartialEq)]
pub struct Wall {
    id: WallId,
    pub start: CornerId,
    pub end: CornerId,
}

impl Wall {
    pub fn new(id: WallId, start: CornerId, end: CornerId) -> Self {
        Self { id, start, end }
    }

    pub fn id(&self) -> WallId {
        self.id
    }

    pub fn is_connected_to(&self, corner: CornerId) -> bool {
        self.start == corner || self.end == corner
    }

    /// The other end of the wall, if `corner` is one of its ends
    pub fn opposite(&self, corner: CornerId) -> Option<CornerId> {
        if self.start == corner {
            Some(self.end)
        } else if self.end == corner {
            Some(self.start)
        } else {
            None
        }
    }

    /// True if both walls join the same pair of corners, in either direction
    pub fn joins_same_corners(&self, other: &Wall) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}
