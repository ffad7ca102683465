use egui::{Pos2, vec2};

use crate::config::EditorConfig;
use crate::floorplanner::Floorplanner;
use crate::input::InputHandler;
use crate::model::{Floorplan, FloorplanExport, Item};
use crate::panels::{central_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::Mode;
use crate::view::{CanvasView, FloorplanView};

/// Storage key for the floorplan between sessions
pub const FLOORPLAN_KEY: &str = "floorplan";

pub struct FloorplanApp {
    floorplanner: Floorplanner<CanvasView>,
    renderer: Renderer,
    input: InputHandler,
    /// The canvas has been laid out and the view centred on it
    centred: bool,
}

impl FloorplanApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        let view = CanvasView::new(cc.egui_ctx.clone());
        let canvas_rect = view.canvas_rect();
        let mut floorplanner = Floorplanner::new(Floorplan::new(), view, config);

        if let Some(export) = cc
            .storage
            .and_then(|storage| eframe::get_value::<FloorplanExport>(storage, FLOORPLAN_KEY))
        {
            if let Err(err) = floorplanner.load_floorplan(&export) {
                log::warn!("Discarding stored floorplan: {}", err);
            }
        }

        floorplanner
            .mode_changed()
            .add(|mode: &Mode| log::debug!("Mode is now {}", mode));
        floorplanner.model_changed().add(|change| {
            log::info!(
                "Floorplan has {} corners, {} walls, {} items (origin {:?})",
                change.floorplan.corners.len(),
                change.floorplan.walls.len(),
                change.floorplan.items.len(),
                change.origin
            );
        });

        Self {
            floorplanner,
            renderer: Renderer::new(),
            input: InputHandler::new(canvas_rect),
            centred: false,
        }
    }

    pub fn floorplanner(&self) -> &Floorplanner<CanvasView> {
        &self.floorplanner
    }

    pub fn floorplanner_mut(&mut self) -> &mut Floorplanner<CanvasView> {
        &mut self.floorplanner
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    /// Both the floorplanner and the renderer, for painting the canvas
    pub fn parts(&self) -> (&Floorplanner<CanvasView>, &Renderer) {
        (&self.floorplanner, &self.renderer)
    }

    /// Centre the view once the first frame has sized the canvas
    pub fn centre_once(&mut self) {
        if !self.centred {
            self.floorplanner.reset();
            self.centred = true;
        }
    }

    /// Drop a new item in the middle of the visible canvas
    pub fn add_item(&mut self) {
        let centre = Pos2::ZERO + self.floorplanner.view().canvas_size() / 2.0;
        let position = self.floorplanner.to_model(centre);
        let name = format!("Item {}", self.floorplanner.floorplan().items().len() + 1);
        let id = self
            .floorplanner
            .floorplan_mut()
            .add_item(Item::new(name, position, vec2(60.0, 60.0)));
        log::info!("Added item {}", id);
        self.floorplanner.notify_changed();
        self.floorplanner.view_mut().draw();
    }
}

impl eframe::App for FloorplanApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, FLOORPLAN_KEY, &self.floorplanner.floorplan().export());
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.floorplanner.flush_changes();
    }

    /// Called each time the UI needs repainting
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.floorplanner.poll();
        if let Some(remaining) = self.floorplanner.pending_change_in() {
            ctx.request_repaint_after(std::time::Duration::from_secs_f64(remaining));
        }
    }
}
