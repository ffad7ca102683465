use egui::{Pos2, Rect, Vec2};

use super::ItemId;
use crate::geometry::hit_testing::is_point_near_handle;

/// Items never shrink below this edge length (cm) while resizing
pub const MIN_ITEM_SIZE: f32 = 10.0;

/// What an item is doing with the pointer it was pressed with
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ItemInteraction {
    #[default]
    Idle,
    /// Dragging the resize handle; the top-left corner stays fixed
    Resizing { anchor: Pos2 },
}

/// A piece of furniture placed on the plan
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    id: ItemId,
    pub name: String,
    /// Centre of the item's footprint
    pub position: Pos2,
    /// Width (x) and depth (y) of the footprint
    pub size: Vec2,
    selected: bool,
    hovered: bool,
    interaction: ItemInteraction,
}

impl Item {
    pub fn new(name: impl Into<String>, position: Pos2, size: Vec2) -> Self {
        Self::with_id(ItemId::new(), name, position, size)
    }

    pub fn with_id(id: ItemId, name: impl Into<String>, position: Pos2, size: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            size: size.max(Vec2::splat(MIN_ITEM_SIZE)),
            selected: false,
            hovered: false,
            interaction: ItemInteraction::Idle,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn rect(&self) -> Rect {
        Rect::from_center_size(self.position, self.size)
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn interaction(&self) -> ItemInteraction {
        self.interaction
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if !selected {
            self.interaction = ItemInteraction::Idle;
        }
    }

    pub(crate) fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Hit test against the footprint, plus the resize handle once selected
    pub fn contains(&self, pos: Pos2, handle_radius: f32) -> bool {
        let rect = self.rect();
        rect.contains(pos) || (self.selected && is_point_near_handle(pos, rect, handle_radius))
    }

    pub fn relative_move(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// A press on the selected item's handle starts a resize.
    /// Returns true if the item took the press.
    pub fn on_pointer_down(&mut self, pos: Pos2, handle_radius: f32) -> bool {
        let rect = self.rect();
        if self.selected && is_point_near_handle(pos, rect, handle_radius) {
            self.interaction = ItemInteraction::Resizing {
                anchor: rect.left_top(),
            };
            log::debug!("Item {} resize started", self.id);
            true
        } else {
            false
        }
    }

    /// True while the item handles drag events itself instead of being moved
    pub fn owns_drag(&self) -> bool {
        !matches!(self.interaction, ItemInteraction::Idle)
    }

    /// Apply a drag while the item owns it. Returns true if the item changed.
    pub fn on_pointer_drag(&mut self, pos: Pos2) -> bool {
        match self.interaction {
            ItemInteraction::Resizing { anchor } => {
                let size = (pos - anchor).max(Vec2::splat(MIN_ITEM_SIZE));
                if size == self.size {
                    return false;
                }
                self.size = size;
                self.position = anchor + size / 2.0;
                true
            }
            ItemInteraction::Idle => false,
        }
    }

    pub fn on_pointer_up(&mut self) {
        if self.owns_drag() {
            log::debug!("Item {} resize finished at {:?}", self.id, self.size);
        }
        self.interaction = ItemInteraction::Idle;
    }
}
