use serde::{Deserialize, Serialize};

use super::{CornerId, ItemId};

/// Plain snapshot of a floorplan, handed to model-changed listeners and
/// used by the app to persist the plan between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorplanExport {
    pub corners: Vec<CornerExport>,
    pub walls: Vec<WallExport>,
    pub items: Vec<ItemExport>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CornerExport {
    pub id: CornerId,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallExport {
    pub corner1: CornerId,
    pub corner2: CornerId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemExport {
    pub id: ItemId,
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub depth: f32,
}

impl FloorplanExport {
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
