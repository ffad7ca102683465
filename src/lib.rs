#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod error;
pub mod event;
pub mod floorplanner;
pub mod geometry;
pub mod input;
pub mod model;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod units;
pub mod util;
pub mod view;

pub use app::FloorplanApp;
pub use config::EditorConfig;
pub use error::{FloorplanError, Result};
pub use event::{Callbacks, ListenerId, ModelChange};
pub use floorplanner::Floorplanner;
pub use input::{InputEvent, InputHandler};
pub use model::{Corner, CornerId, Floorplan, FloorplanExport, Item, ItemId, Wall, WallId};
pub use renderer::Renderer;
pub use state::{ActiveEntity, Mode, PointerState};
pub use view::{CanvasView, FloorplanView};
