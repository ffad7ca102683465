mod common;

use std::cell::Cell;
use std::rc::Rc;

use common::{Harness, assert_close};
use egui::{pos2, vec2};
use floorplan_editor::units::{CM_PER_PIXEL, PIXELS_PER_CM};
use floorplan_editor::{ActiveEntity, Floorplan, Item, Mode};

#[test]
fn test_hover_prefers_item_then_corner_then_wall() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    let wall = plan.new_wall(a, b);
    let table = plan.add_item(Item::new("table", pos2(0.0, 0.0), vec2(100.0, 100.0)));
    let mut h = Harness::with_floorplan(plan);

    // the table covers corner a and the start of the wall
    h.hover(h.raw(pos2(0.0, 0.0)));
    assert_eq!(h.fp.active(), ActiveEntity::Item(table));
    assert!(h.fp.floorplan().item(table).unwrap().is_hovered());

    h.hover(h.raw(pos2(400.0, 0.0)));
    assert_eq!(h.fp.active(), ActiveEntity::Corner(b));
    assert!(!h.fp.floorplan().item(table).unwrap().is_hovered());

    h.hover(h.raw(pos2(200.0, 10.0)));
    assert_eq!(h.fp.active(), ActiveEntity::Wall(wall));

    h.hover(h.raw(pos2(200.0, 300.0)));
    assert_eq!(h.fp.active(), ActiveEntity::None);
}

#[test]
fn test_hover_redraws_only_when_the_hit_changes() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    plan.new_wall(a, b);
    let mut h = Harness::with_floorplan(plan);

    let before = h.fp.view().draws;
    h.hover(h.raw(pos2(150.0, 5.0)));
    assert_eq!(h.fp.view().draws, before + 1);

    h.hover(h.raw(pos2(250.0, 8.0)));
    assert_eq!(h.fp.view().draws, before + 1);

    h.hover(h.raw(pos2(250.0, 200.0)));
    assert_eq!(h.fp.view().draws, before + 2);
}

#[test]
fn test_hover_is_skipped_in_draw_mode() {
    let mut plan = Floorplan::new();
    plan.new_corner(pos2(0.0, 0.0));
    let mut h = Harness::with_floorplan(plan);
    h.fp.set_mode(Mode::Draw);

    h.hover(h.raw(pos2(0.0, 0.0)));
    assert_eq!(h.fp.active(), ActiveEntity::None);
}

#[test]
fn test_dragged_corner_snaps_to_neighbour_axis_and_can_be_pulled_free() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    plan.new_wall(a, b);
    let mut h = Harness::with_floorplan(plan);

    h.drag(h.raw(pos2(400.0, 0.0)), h.raw(pos2(300.0, 15.0)));
    assert_close(h.fp.floorplan().corner(b).unwrap().position, pos2(300.0, 0.0));

    h.drag(h.raw(pos2(300.0, 0.0)), h.raw(pos2(300.0, 60.0)));
    assert_close(h.fp.floorplan().corner(b).unwrap().position, pos2(300.0, 60.0));
    assert_close(h.fp.floorplan().corner(a).unwrap().position, pos2(0.0, 0.0));

    assert_eq!(h.settle(), 1);
}

#[test]
fn test_dragging_a_corner_removes_duplicate_walls() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    let c = plan.new_corner(pos2(400.0, 300.0));
    let kept = plan.new_wall(a, b);
    plan.new_wall(b, c);
    plan.new_wall(b, a);
    let mut h = Harness::with_floorplan(plan);

    h.drag(h.raw(pos2(400.0, 300.0)), h.raw(pos2(450.0, 350.0)));

    let plan = h.fp.floorplan();
    assert_eq!(plan.walls().len(), 2);
    assert!(plan.wall(kept).is_some());
    assert_close(plan.corner(c).unwrap().position, pos2(450.0, 350.0));
}

#[test]
fn test_dragging_a_wall_moves_both_corners() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    plan.new_wall(a, b);
    let mut h = Harness::with_floorplan(plan);

    let grab = h.raw(pos2(200.0, 5.0));
    h.drag(grab, grab + vec2(0.0, 50.0));

    let dy = 50.0 * CM_PER_PIXEL;
    assert_close(h.fp.floorplan().corner(a).unwrap().position, pos2(0.0, dy));
    assert_close(h.fp.floorplan().corner(b).unwrap().position, pos2(400.0, dy));
    assert_eq!(h.settle(), 1);
}

#[test]
fn test_dragged_wall_snaps_onto_a_neighbour_axis() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    let c = plan.new_corner(pos2(430.0, 300.0));
    plan.new_wall(a, b);
    plan.new_wall(b, c);
    let mut h = Harness::with_floorplan(plan);

    // 10px right puts b about 10cm short of c's x
    let grab = h.raw(pos2(200.0, 5.0));
    h.drag(grab, grab + vec2(10.0, 0.0));

    let plan = h.fp.floorplan();
    assert_close(plan.corner(b).unwrap().position, pos2(430.0, 0.0));
    assert_close(plan.corner(a).unwrap().position, pos2(10.0 * CM_PER_PIXEL, 0.0));
    assert_close(plan.corner(c).unwrap().position, pos2(430.0, 300.0));
}

#[test]
fn test_dragging_a_wall_removes_duplicate_walls() {
    let mut plan = Floorplan::new();
    let a = plan.new_corner(pos2(0.0, 0.0));
    let b = plan.new_corner(pos2(400.0, 0.0));
    let kept = plan.new_wall(a, b);
    plan.new_wall(b, a);
    let mut h = Harness::with_floorplan(plan);

    let grab = h.raw(pos2(200.0, 5.0));
    h.hover(grab);
    assert_eq!(h.fp.active_wall(), Some(kept));
    h.drag(grab, grab + vec2(0.0, 20.0));

    let plan = h.fp.floorplan();
    assert_eq!(plan.walls().len(), 1);
    assert!(plan.wall(kept).is_some());
    assert_close(plan.corner(a).unwrap().position, pos2(0.0, 20.0 * CM_PER_PIXEL));
    assert_eq!(h.settle(), 1);
}

#[test]
fn test_dragging_an_item_moves_it() {
    let mut plan = Floorplan::new();
    let sofa = plan.add_item(Item::new("sofa", pos2(300.0, 300.0), vec2(100.0, 100.0)));
    let mut h = Harness::with_floorplan(plan);

    let grab = h.raw(pos2(300.0, 300.0));
    h.drag(grab, grab + vec2(10.0, 0.0));

    let item = h.fp.floorplan().item(sofa).unwrap();
    assert_close(item.position, pos2(300.0 + 10.0 * CM_PER_PIXEL, 300.0));
    assert_eq!(item.size, vec2(100.0, 100.0));
    // a drag is not a click, so nothing gets selected
    assert_eq!(h.fp.floorplan().selected_item(), None);
}

#[test]
fn test_selected_item_resizes_from_its_handle() {
    let mut plan = Floorplan::new();
    let sofa = plan.add_item(Item::new("sofa", pos2(300.0, 300.0), vec2(100.0, 100.0)));
    let mut h = Harness::with_floorplan(plan);

    h.click(h.raw(pos2(300.0, 300.0)));
    assert_eq!(h.fp.floorplan().selected_item(), Some(sofa));

    h.drag(h.raw(pos2(352.0, 352.0)), h.raw(pos2(400.0, 380.0)));

    let item = h.fp.floorplan().item(sofa).unwrap();
    assert_close(pos2(item.size.x, item.size.y), pos2(150.0, 130.0));
    assert_close(item.rect().left_top(), pos2(250.0, 250.0));
    assert!(!item.owns_drag());
    assert_eq!(h.fp.floorplan().selected_item(), Some(sofa));
}

#[test]
fn test_click_selects_and_click_elsewhere_deselects() {
    let mut plan = Floorplan::new();
    let lamp = plan.add_item(Item::new("lamp", pos2(100.0, 100.0), vec2(40.0, 40.0)));
    let mut h = Harness::with_floorplan(plan);

    h.click(h.raw(pos2(100.0, 100.0)));
    assert!(h.fp.floorplan().item(lamp).unwrap().is_selected());

    h.click(h.raw(pos2(600.0, 600.0)));
    assert_eq!(h.fp.floorplan().selected_item(), None);
    assert!(!h.fp.floorplan().item(lamp).unwrap().is_selected());
}

#[test]
fn test_panning_does_not_announce_a_model_change() {
    let mut h = Harness::new();

    h.drag(pos2(10.0, 10.0), pos2(20.0, 30.0));

    assert_eq!(h.fp.origin(), vec2(-10.0, -20.0));
    assert_eq!(h.settle(), 0);
}

#[test]
fn test_leaving_the_canvas_drops_the_drag() {
    let mut plan = Floorplan::new();
    let lamp = plan.add_item(Item::new("lamp", pos2(100.0, 100.0), vec2(40.0, 40.0)));
    let mut h = Harness::with_floorplan(plan);

    let on_lamp = h.raw(pos2(100.0, 100.0));
    h.hover(on_lamp);
    h.fp.pointer_down(on_lamp);
    h.fp.pointer_leave();

    assert_eq!(h.fp.active(), ActiveEntity::None);
    assert!(!h.fp.pointer().down);
    assert!(!h.fp.floorplan().item(lamp).unwrap().is_hovered());

    // the release arrives after leaving and is ignored
    h.fp.pointer_up();
    assert_eq!(h.fp.floorplan().selected_item(), None);
}

#[test]
fn test_loading_resets_the_view_without_announcing_a_change() {
    let mut source = Floorplan::new();
    let a = source.new_corner(pos2(0.0, 0.0));
    let b = source.new_corner(pos2(600.0, 400.0));
    source.new_wall(a, b);
    let export = source.export();

    let mut h = Harness::new();
    h.fp.set_mode(Mode::Draw);
    let loaded = Rc::new(Cell::new(0));
    let counter = Rc::clone(&loaded);
    h.fp
        .floorplan()
        .room_loaded()
        .add(move |_| counter.set(counter.get() + 1));

    h.fp.load_floorplan(&export).unwrap();

    assert_eq!(loaded.get(), 1);
    assert_eq!(h.fp.mode(), Mode::Move);
    assert_eq!(h.fp.view().resizes, 1);
    assert_eq!(h.fp.floorplan().walls().len(), 1);

    let expected = vec2(300.0, 200.0) * PIXELS_PER_CM - vec2(800.0, 600.0) / 2.0;
    assert!((h.fp.origin() - expected).length() < 1e-3);
    assert_close(h.fp.to_canvas(pos2(300.0, 200.0)), pos2(400.0, 300.0));
    assert_eq!(h.settle(), 0);
}
