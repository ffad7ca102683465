#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use egui::{Pos2, Vec2, vec2};
use floorplan_editor::{EditorConfig, Floorplan, FloorplanView, Floorplanner, Mode, ModelChange};

/// Counts what the floorplanner asks of its view
pub struct RecordingView {
    pub draws: usize,
    pub resizes: usize,
    pub size: Vec2,
}

impl FloorplanView for RecordingView {
    fn draw(&mut self) {
        self.draws += 1;
    }

    fn handle_window_resize(&mut self) {
        self.resizes += 1;
    }

    fn canvas_size(&self) -> Vec2 {
        self.size
    }
}

/// A floorplanner with the origin at zero, a manual clock and recorded events
pub struct Harness {
    pub fp: Floorplanner<RecordingView>,
    pub clock: Rc<Cell<f64>>,
    pub changes: Rc<RefCell<Vec<ModelChange>>>,
    pub modes: Rc<RefCell<Vec<Mode>>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_floorplan(Floorplan::new())
    }

    pub fn with_floorplan(floorplan: Floorplan) -> Self {
        let view = RecordingView {
            draws: 0,
            resizes: 0,
            size: vec2(800.0, 600.0),
        };
        let clock = Rc::new(Cell::new(100.0));
        let time = Rc::clone(&clock);
        let mut fp = Floorplanner::new(floorplan, view, EditorConfig::default())
            .with_clock(move || time.get());
        fp.set_origin(Vec2::ZERO);

        let changes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&changes);
        fp.model_changed()
            .add(move |change: &ModelChange| sink.borrow_mut().push(change.clone()));

        let modes = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&modes);
        fp.mode_changed().add(move |mode: &Mode| sink.borrow_mut().push(*mode));

        Self {
            fp,
            clock,
            changes,
            modes,
        }
    }

    pub fn advance(&self, secs: f64) {
        self.clock.set(self.clock.get() + secs);
    }

    /// Canvas position of a model point
    pub fn raw(&self, model: Pos2) -> Pos2 {
        self.fp.to_canvas(model)
    }

    pub fn hover(&mut self, raw: Pos2) {
        self.fp.pointer_move(raw);
    }

    /// Move onto `raw`, then press and release without moving
    pub fn click(&mut self, raw: Pos2) {
        self.fp.pointer_move(raw);
        self.fp.pointer_down(raw);
        self.fp.pointer_up();
    }

    pub fn drag(&mut self, from: Pos2, to: Pos2) {
        self.fp.pointer_move(from);
        self.fp.pointer_down(from);
        self.fp.pointer_move(to);
        self.fp.pointer_up();
    }

    /// Let the debounce period pass and return how many changes have fired in total
    pub fn settle(&mut self) -> usize {
        self.advance(1.0);
        self.fp.poll();
        self.changes.borrow().len()
    }
}

pub fn assert_close(actual: Pos2, expected: Pos2) {
    assert!(
        (actual.x - expected.x).abs() < 1e-2 && (actual.y - expected.y).abs() < 1e-2,
        "{actual:?} != {expected:?}"
    );
}
