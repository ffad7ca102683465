use egui::Vec2;

use crate::model::FloorplanExport;

/// Payload of the model-changed notification
#[derive(Debug, Clone, PartialEq)]
pub struct ModelChange {
    /// The floorplan as it stood when the notification fired
    pub floorplan: FloorplanExport,
    /// View origin in device pixels
    pub origin: Vec2,
}
