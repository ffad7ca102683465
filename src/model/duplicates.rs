use super::{Wall, WallId};

/// Walls that repeat an earlier wall's corner pair (in either direction),
/// plus walls that start and end on the same corner.
///
/// The first wall of each corner pair is kept. This compares every pair of
/// walls, which is fine for the few dozen walls a floorplan has.
pub fn find_duplicate_walls(walls: &[Wall]) -> Vec<WallId> {
    walls
        .iter()
        .enumerate()
        .filter(|(index, wall)| {
            wall.is_degenerate()
                || walls[..*index]
                    .iter()
                    .any(|earlier| earlier.joins_same_corners(wall))
        })
        .map(|(_, wall)| wall.id())
        .collect()
}
