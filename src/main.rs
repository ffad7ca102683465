#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use floorplan_editor::{EditorConfig, FloorplanApp};

/// Optional path to a JSON file with [`EditorConfig`] overrides
const CONFIG_ENV: &str = "FLOORPLAN_CONFIG";

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> EditorConfig {
    match std::env::var(CONFIG_ENV) {
        Ok(path) => EditorConfig::load(&path).unwrap_or_else(|err| {
            log::warn!("Ignoring config {}: {}", path, err);
            EditorConfig::default()
        }),
        Err(_) => EditorConfig::default(),
    }
}

// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let config = load_config();
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Floorplan Editor",
        native_options,
        Box::new(|cc| Ok(Box::new(FloorplanApp::new(cc, config)))),
    )
}

// The web entry point lives in the hosting page; nothing to run here.
#[cfg(target_arch = "wasm32")]
fn main() {}
