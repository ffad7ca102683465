use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Tunable tolerances and timings for the interaction layer.
///
/// All distances are in model units (centimetres).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old config
pub struct EditorConfig {
    /// Distance under which a drawn or dragged point adopts a neighbour's axis coordinate
    pub snap_tolerance: f32,
    /// Pick radius for hovering corners and walls
    pub hover_tolerance: f32,
    /// Distance under which a newly placed corner merges into existing geometry
    pub merge_tolerance: f32,
    /// Radius of the resize handle drawn on the selected item
    pub item_handle_radius: f32,
    /// Quiet period before a model-changed notification fires
    pub change_debounce_ms: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            snap_tolerance: 25.0,
            hover_tolerance: 20.0,
            merge_tolerance: 20.0,
            item_handle_radius: 15.0,
            change_debounce_ms: 250,
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file. Missing fields fall back to their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn change_debounce_secs(&self) -> f64 {
        self.change_debounce_ms as f64 / 1000.0
    }
}
