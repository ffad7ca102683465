use egui::{Pos2, Rect, Vec2};
use log::{debug, info};

use super::duplicates::find_duplicate_walls;
use super::export::{CornerExport, FloorplanExport, ItemExport, WallExport};
use super::{Corner, CornerId, Item, ItemId, Wall, WallId};
use crate::error::{FloorplanError, Result};
use crate::event::Callbacks;
use crate::geometry::hit_testing::{closest_point_on_segment, distance_to_segment};

/// What [`Floorplan::merge_with_intersected`] did with a corner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    /// Nothing was close enough
    None,
    /// The corner was absorbed into this existing corner
    Corner(CornerId),
    /// The corner was moved onto this wall, which was split in two there
    Wall(WallId),
}

impl MergeOutcome {
    pub fn merged(&self) -> bool {
        !matches!(self, MergeOutcome::None)
    }
}

/// The geometric model the editor works on: corners, the walls between them
/// and the items placed in the rooms.
///
/// Collections keep insertion order; hit tests and duplicate removal rely on it.
#[derive(Debug, Default)]
pub struct Floorplan {
    corners: Vec<Corner>,
    walls: Vec<Wall>,
    items: Vec<Item>,
    selected_item: Option<ItemId>,
    room_loaded: Callbacks<()>,
}

impl Floorplan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn corner(&self, id: CornerId) -> Option<&Corner> {
        self.corners.iter().find(|corner| corner.id() == id)
    }

    pub fn wall(&self, id: WallId) -> Option<&Wall> {
        self.walls.iter().find(|wall| wall.id() == id)
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn item_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    fn corner_mut(&mut self, id: CornerId) -> Option<&mut Corner> {
        self.corners.iter_mut().find(|corner| corner.id() == id)
    }

    /// Notified after [`Floorplan::load`] replaces the plan
    pub fn room_loaded(&self) -> &Callbacks<()> {
        &self.room_loaded
    }

    pub fn new_corner(&mut self, position: Pos2) -> CornerId {
        let id = CornerId::new();
        self.corners.push(Corner::new(id, position));
        id
    }

    pub fn new_wall(&mut self, start: CornerId, end: CornerId) -> WallId {
        let id = WallId::new();
        self.walls.push(Wall::new(id, start, end));
        id
    }

    pub fn add_item(&mut self, item: Item) -> ItemId {
        let id = item.id();
        self.items.push(item);
        id
    }

    pub fn walls_of(&self, corner: CornerId) -> impl Iterator<Item = &Wall> {
        self.walls.iter().filter(move |wall| wall.is_connected_to(corner))
    }

    /// Start and end positions of a wall
    pub fn wall_endpoints(&self, wall: &Wall) -> Option<(Pos2, Pos2)> {
        let start = self.corner(wall.start)?.position;
        let end = self.corner(wall.end)?.position;
        Some((start, end))
    }

    /// Remove a corner together with every wall attached to it
    pub fn remove_corner(&mut self, id: CornerId) -> bool {
        let before = self.corners.len();
        self.corners.retain(|corner| corner.id() != id);
        if self.corners.len() == before {
            return false;
        }
        let walls_before = self.walls.len();
        self.walls.retain(|wall| !wall.is_connected_to(id));
        debug!(
            "Removed corner {} and {} attached walls",
            id,
            walls_before - self.walls.len()
        );
        true
    }

    pub fn remove_wall(&mut self, id: WallId) -> bool {
        let before = self.walls.len();
        self.walls.retain(|wall| wall.id() != id);
        self.walls.len() != before
    }

    pub fn remove_item(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        if self.selected_item == Some(id) {
            self.selected_item = None;
        }
        self.items.len() != before
    }

    pub fn move_corner(&mut self, id: CornerId, delta: Vec2) {
        if let Some(corner) = self.corner_mut(id) {
            corner.relative_move(delta);
        }
    }

    pub fn move_wall(&mut self, id: WallId, delta: Vec2) {
        let Some(wall) = self.wall(id).cloned() else {
            return;
        };
        self.move_corner(wall.start, delta);
        if !wall.is_degenerate() {
            self.move_corner(wall.end, delta);
        }
    }

    pub fn move_item(&mut self, id: ItemId, delta: Vec2) {
        if let Some(item) = self.item_mut(id) {
            item.relative_move(delta);
        }
    }

    /// Per axis, pull the corner onto a wall neighbour's coordinate when it is
    /// within `tolerance` of it.
    pub fn snap_corner_to_axis(&mut self, id: CornerId, tolerance: f32) {
        let Some(mut position) = self.corner(id).map(|corner| corner.position) else {
            return;
        };
        let neighbours: Vec<Pos2> = self
            .walls_of(id)
            .filter_map(|wall| wall.opposite(id))
            .filter(|other| *other != id)
            .filter_map(|other| self.corner(other).map(|corner| corner.position))
            .collect();

        for neighbour in neighbours {
            if (position.x - neighbour.x).abs() < tolerance {
                position.x = neighbour.x;
            }
            if (position.y - neighbour.y).abs() < tolerance {
                position.y = neighbour.y;
            }
        }

        if let Some(corner) = self.corner_mut(id) {
            corner.position = position;
        }
    }

    pub fn snap_wall_to_axis(&mut self, id: WallId, tolerance: f32) {
        if let Some(wall) = self.wall(id).cloned() {
            self.snap_corner_to_axis(wall.start, tolerance);
            self.snap_corner_to_axis(wall.end, tolerance);
        }
    }

    /// Topmost item under `pos`. Items added later are drawn above earlier ones.
    pub fn item_at(&self, pos: Pos2, handle_radius: f32) -> Option<ItemId> {
        self.items
            .iter()
            .rev()
            .find(|item| item.contains(pos, handle_radius))
            .map(Item::id)
    }

    pub fn corner_at(&self, pos: Pos2, tolerance: f32) -> Option<CornerId> {
        self.corners
            .iter()
            .find(|corner| corner.distance_from(pos) < tolerance)
            .map(Corner::id)
    }

    pub fn wall_at(&self, pos: Pos2, tolerance: f32) -> Option<WallId> {
        self.walls
            .iter()
            .find(|wall| {
                self.wall_endpoints(wall)
                    .is_some_and(|(start, end)| distance_to_segment(pos, start, end) < tolerance)
            })
            .map(Wall::id)
    }

    /// Fold a freshly placed corner into nearby geometry.
    ///
    /// A corner within `tolerance` absorbs it; failing that, a wall within
    /// `tolerance` that it is not already part of gets split at the corner's
    /// projection onto it.
    pub fn merge_with_intersected(&mut self, id: CornerId, tolerance: f32) -> MergeOutcome {
        let Some(position) = self.corner(id).map(|corner| corner.position) else {
            return MergeOutcome::None;
        };

        let nearby_corner = self
            .corners
            .iter()
            .find(|corner| corner.id() != id && corner.distance_from(position) < tolerance)
            .map(Corner::id);
        if let Some(target) = nearby_corner {
            self.combine_corners(target, id);
            return MergeOutcome::Corner(target);
        }

        let nearby_wall = self.walls.iter().find_map(|wall| {
            if wall.is_connected_to(id) {
                return None;
            }
            let (start, end) = self.wall_endpoints(wall)?;
            (distance_to_segment(position, start, end) < tolerance)
                .then(|| (wall.id(), closest_point_on_segment(position, start, end)))
        });
        if let Some((wall_id, on_wall)) = nearby_wall {
            self.split_wall(wall_id, id, on_wall);
            return MergeOutcome::Wall(wall_id);
        }

        MergeOutcome::None
    }

    /// Re-point every wall of `absorbed` at `kept` and drop `absorbed`
    fn combine_corners(&mut self, kept: CornerId, absorbed: CornerId) {
        for wall in &mut self.walls {
            if wall.start == absorbed {
                wall.start = kept;
            }
            if wall.end == absorbed {
                wall.end = kept;
            }
        }
        self.corners.retain(|corner| corner.id() != absorbed);
        self.remove_duplicate_walls();
        debug!("Merged corner {} into {}", absorbed, kept);
    }

    fn split_wall(&mut self, wall_id: WallId, corner: CornerId, at: Pos2) {
        if let Some(c) = self.corner_mut(corner) {
            c.position = at;
        }
        let Some(old_end) = self.wall(wall_id).map(|wall| wall.end) else {
            return;
        };
        self.new_wall(corner, old_end);
        if let Some(wall) = self.walls.iter_mut().find(|wall| wall.id() == wall_id) {
            wall.end = corner;
        }
        self.remove_duplicate_walls();
        debug!("Split wall {} at corner {}", wall_id, corner);
    }

    /// Drop repeated and degenerate walls, keeping the first of each pair.
    /// Returns how many walls were removed.
    pub fn remove_duplicate_walls(&mut self) -> usize {
        let duplicates = find_duplicate_walls(&self.walls);
        if duplicates.is_empty() {
            return 0;
        }
        self.walls.retain(|wall| !duplicates.contains(&wall.id()));
        debug!("Removed {} duplicate walls", duplicates.len());
        duplicates.len()
    }

    pub fn selected_item(&self) -> Option<ItemId> {
        self.selected_item
    }

    /// Select an item (or nothing). Unknown ids clear the selection.
    pub fn set_selected_item(&mut self, id: Option<ItemId>) {
        if let Some(previous) = self.selected_item.take() {
            if let Some(item) = self.item_mut(previous) {
                item.set_selected(false);
            }
        }
        if let Some(item) = id.and_then(|id| self.item_mut(id)) {
            item.set_selected(true);
            self.selected_item = Some(item.id());
        }
    }

    /// Centre of the bounding box of all corners, or the origin for an empty plan
    pub fn center(&self) -> Pos2 {
        if self.corners.is_empty() {
            return Pos2::ZERO;
        }
        Rect::from_points(
            &self
                .corners
                .iter()
                .map(|corner| corner.position)
                .collect::<Vec<_>>(),
        )
        .center()
    }

    pub fn export(&self) -> FloorplanExport {
        FloorplanExport {
            corners: self
                .corners
                .iter()
                .map(|corner| CornerExport {
                    id: corner.id(),
                    x: corner.position.x,
                    y: corner.position.y,
                })
                .collect(),
            walls: self
                .walls
                .iter()
                .map(|wall| WallExport {
                    corner1: wall.start,
                    corner2: wall.end,
                })
                .collect(),
            items: self
                .items
                .iter()
                .map(|item| ItemExport {
                    id: item.id(),
                    name: item.name.clone(),
                    x: item.position.x,
                    y: item.position.y,
                    width: item.size.x,
                    depth: item.size.y,
                })
                .collect(),
        }
    }

    /// Replace the plan with an export and notify room-loaded listeners.
    ///
    /// The plan is left untouched if the export is inconsistent.
    pub fn load(&mut self, export: &FloorplanExport) -> Result<()> {
        let corners: Vec<Corner> = export
            .corners
            .iter()
            .map(|corner| Corner::new(corner.id, Pos2::new(corner.x, corner.y)))
            .collect();

        let mut walls = Vec::with_capacity(export.walls.len());
        for wall in &export.walls {
            for end in [wall.corner1, wall.corner2] {
                if !corners.iter().any(|corner| corner.id() == end) {
                    return Err(FloorplanError::UnknownCorner(end.to_string()));
                }
            }
            walls.push(Wall::new(WallId::new(), wall.corner1, wall.corner2));
        }

        let items = export
            .items
            .iter()
            .map(|item| {
                Item::with_id(
                    item.id,
                    item.name.clone(),
                    Pos2::new(item.x, item.y),
                    Vec2::new(item.width, item.depth),
                )
            })
            .collect();

        self.corners = corners;
        self.walls = walls;
        self.items = items;
        self.selected_item = None;
        info!(
            "Loaded floorplan with {} corners, {} walls, {} items",
            self.corners.len(),
            self.walls.len(),
            self.items.len()
        );
        self.room_loaded.fire(&());
        Ok(())
    }

    pub fn load_json(&mut self, json: &str) -> Result<()> {
        self.load(&FloorplanExport::from_json(json)?)
    }
}
