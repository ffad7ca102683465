use egui::{Rect, Vec2};

/// What the interaction layer needs from whatever draws the floorplan
pub trait FloorplanView {
    /// Request a redraw
    fn draw(&mut self);

    /// The canvas may have changed size; refresh any cached layout
    fn handle_window_resize(&mut self);

    /// Canvas size in device pixels
    fn canvas_size(&self) -> Vec2;
}

/// View backed by an egui context. Drawing itself happens in the
/// [`Renderer`](crate::Renderer) every frame; this only schedules repaints.
#[derive(Debug, Clone)]
pub struct CanvasView {
    ctx: egui::Context,
    canvas_rect: Rect,
}

impl CanvasView {
    pub fn new(ctx: egui::Context) -> Self {
        let canvas_rect = ctx.screen_rect();
        Self { ctx, canvas_rect }
    }

    /// Record where the canvas ended up in this frame's layout
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }
}

impl FloorplanView for CanvasView {
    fn draw(&mut self) {
        self.ctx.request_repaint();
    }

    fn handle_window_resize(&mut self) {
        if !self.canvas_rect.is_positive() {
            self.canvas_rect = self.ctx.screen_rect();
        }
        log::debug!("Canvas size is {:?}", self.canvas_rect.size());
    }

    fn canvas_size(&self) -> Vec2 {
        self.canvas_rect.size()
    }
}
