//! The interaction controller: turns pointer and keyboard input into edits of
//! the [`Floorplan`] and of the view state (origin, draw target, hover).
//!
//! Everything runs on the UI thread. Model edits are announced through a
//! debounced model-changed notification which the host drives by calling
//! [`Floorplanner::poll`] once per frame.

mod pointer;

pub use pointer::snap_target;

use egui::{Pos2, Vec2};
use log::info;

use crate::config::EditorConfig;
use crate::error::Result;
use crate::event::{Callbacks, Debouncer, ModelChange};
use crate::model::{CornerId, Floorplan, FloorplanExport, ItemId, WallId};
use crate::state::{ActiveEntity, Mode, PointerState};
use crate::units::{self, PIXELS_PER_CM};
use crate::util::time::current_time_secs;
use crate::view::FloorplanView;

type Clock = Box<dyn Fn() -> f64>;

pub struct Floorplanner<V: FloorplanView> {
    floorplan: Floorplan,
    view: V,
    config: EditorConfig,
    mode: Mode,
    pointer: PointerState,
    active: ActiveEntity,
    /// Pan offset in device pixels
    origin: Vec2,
    /// Where the next corner goes in draw mode
    target: Pos2,
    /// Corner placed by the previous draw click
    last_node: Option<CornerId>,
    mode_changed: Callbacks<Mode>,
    model_changed: Callbacks<ModelChange>,
    change_debouncer: Debouncer,
    clock: Clock,
}

impl<V: FloorplanView> std::fmt::Debug for Floorplanner<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Floorplanner")
            .field("mode", &self.mode)
            .field("active", &self.active)
            .field("origin", &self.origin)
            .field("target", &self.target)
            .field("last_node", &self.last_node)
            .field("pending_change", &self.change_debouncer.is_pending())
            .finish_non_exhaustive()
    }
}

impl<V: FloorplanView> Floorplanner<V> {
    /// Start in move mode with the view centred on the floorplan
    pub fn new(floorplan: Floorplan, view: V, config: EditorConfig) -> Self {
        let change_debouncer = Debouncer::new(config.change_debounce_secs());
        let mut floorplanner = Self {
            floorplan,
            view,
            config,
            mode: Mode::Move,
            pointer: PointerState::default(),
            active: ActiveEntity::None,
            origin: Vec2::ZERO,
            target: Pos2::ZERO,
            last_node: None,
            mode_changed: Callbacks::new(),
            model_changed: Callbacks::new(),
            change_debouncer,
            clock: Box::new(current_time_secs),
        };
        floorplanner.reset_origin();
        floorplanner
    }

    /// Replace the time source used for debouncing (seconds, monotonic enough)
    pub fn with_clock(mut self, clock: impl Fn() -> f64 + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn floorplan(&self) -> &Floorplan {
        &self.floorplan
    }

    /// Direct access to the model. Edits made here are not announced; call
    /// [`Floorplanner::notify_changed`] afterwards if listeners should hear of them.
    pub fn floorplan_mut(&mut self) -> &mut Floorplan {
        &mut self.floorplan
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
        self.view.draw();
    }

    pub fn target(&self) -> Pos2 {
        self.target
    }

    pub fn last_node(&self) -> Option<CornerId> {
        self.last_node
    }

    pub fn active(&self) -> ActiveEntity {
        self.active
    }

    pub fn active_corner(&self) -> Option<CornerId> {
        self.active.corner()
    }

    pub fn active_wall(&self) -> Option<WallId> {
        self.active.wall()
    }

    pub fn active_item(&self) -> Option<ItemId> {
        self.active.item()
    }

    /// Make an item the active entity, clearing any active corner or wall
    pub fn set_active_item(&mut self, item: Option<ItemId>) {
        self.set_active(item.map_or(ActiveEntity::None, ActiveEntity::Item));
    }

    /// Swap the active entity, moving the item hover flag along with it
    fn set_active(&mut self, next: ActiveEntity) {
        if let ActiveEntity::Item(previous) = self.active {
            if let Some(item) = self.floorplan.item_mut(previous) {
                item.set_hovered(false);
            }
        }
        if let ActiveEntity::Item(id) = next {
            if let Some(item) = self.floorplan.item_mut(id) {
                item.set_hovered(true);
            }
        }
        self.active = next;
    }

    /// Fired with the new mode on every mode change
    pub fn mode_changed(&self) -> &Callbacks<Mode> {
        &self.mode_changed
    }

    /// Fired once edits have settled for the configured quiet period
    pub fn model_changed(&self) -> &Callbacks<ModelChange> {
        &self.model_changed
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.set_active(ActiveEntity::None);
        self.last_node = None;
        self.floorplan.set_selected_item(None);
        self.update_target();
        self.view.draw();
        info!("Mode changed to {}", mode);
        self.mode_changed.fire(&mode);
    }

    /// Refit the view, go back to move mode and centre on the floorplan
    pub fn reset(&mut self) {
        self.view.handle_window_resize();
        self.set_mode(Mode::Move);
        self.reset_origin();
        self.view.draw();
    }

    /// Put the centre of the floorplan in the middle of the canvas
    pub fn reset_origin(&mut self) {
        let center = self.floorplan.center().to_vec2() * PIXELS_PER_CM;
        self.origin = center - self.view.canvas_size() / 2.0;
    }

    /// Replace the floorplan and reset the view onto it
    pub fn load_floorplan(&mut self, export: &FloorplanExport) -> Result<()> {
        self.floorplan.load(export)?;
        self.set_active(ActiveEntity::None);
        self.reset();
        Ok(())
    }

    /// Model coordinates to canvas-local pixels under the current origin
    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        units::model_to_canvas(pos, self.origin)
    }

    /// Canvas-local pixels to model coordinates under the current origin
    pub fn to_model(&self, raw: Pos2) -> Pos2 {
        units::canvas_to_model(raw, self.origin)
    }

    /// Announce a model edit once things have been quiet for a while.
    /// Re-arming replaces any notification still pending.
    pub fn notify_changed(&mut self) {
        self.change_debouncer.schedule((self.clock)());
    }

    /// Fire the model-changed notification if its quiet period is over.
    /// Returns true if it fired.
    pub fn poll(&mut self) -> bool {
        if self.change_debouncer.poll((self.clock)()) {
            self.fire_model_changed();
            true
        } else {
            false
        }
    }

    /// Fire a pending notification right away
    pub fn flush_changes(&mut self) {
        if self.change_debouncer.is_pending() {
            self.change_debouncer.cancel();
            self.fire_model_changed();
        }
    }

    /// Seconds until a pending notification is due
    pub fn pending_change_in(&self) -> Option<f64> {
        self.change_debouncer.remaining((self.clock)())
    }

    fn fire_model_changed(&self) {
        let change = ModelChange {
            floorplan: self.floorplan.export(),
            origin: self.origin,
        };
        log::debug!(
            "Model changed: {} corners, {} walls",
            change.floorplan.corners.len(),
            change.floorplan.walls.len()
        );
        self.model_changed.fire(&change);
    }

    pub(crate) fn update_target(&mut self) {
        let pointer = self.pointer.position;
        let last_node = self.last_node.and_then(|id| self.floorplan.corner(id));
        self.target = match (self.mode, last_node) {
            (Mode::Draw, Some(node)) => snap_target(pointer, node.position, self.config.snap_tolerance),
            _ => pointer,
        };
    }
}
