//! The floorplan the editor manipulates.

mod corner;
mod duplicates;
mod export;
mod floorplan;
mod ids;
mod item;
mod wall;

pub use corner::Corner;
pub use duplicates::find_duplicate_walls;
pub use export::{CornerExport, FloorplanExport, ItemExport, WallExport};
pub use floorplan::{Floorplan, MergeOutcome};
pub use ids::{CornerId, ItemId, WallId};
pub use item::{Item, ItemInteraction, MIN_ITEM_SIZE};
pub use wall::Wall;
