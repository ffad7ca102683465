use egui::{Color32, Painter, Pos2, Rect, Stroke};

use crate::floorplanner::Floorplanner;
use crate::model::{Floorplan, Item, ItemInteraction};
use crate::state::{ActiveEntity, Mode};
use crate::units::cm_to_pixels;
use crate::view::FloorplanView;

const WALL_WIDTH: f32 = 5.0;
const CORNER_RADIUS: f32 = 4.0;
const ACTIVE_CORNER_RADIUS: f32 = 7.0;

/// Paints the floorplan and the interaction feedback onto the canvas
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    wall_color: Color32,
    active_color: Color32,
    delete_color: Color32,
    item_color: Color32,
    grid_spacing_cm: f32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            background: Color32::from_gray(250),
            wall_color: Color32::from_gray(60),
            active_color: Color32::from_rgb(0, 140, 255),
            delete_color: Color32::from_rgb(220, 40, 40),
            item_color: Color32::from_rgb(150, 110, 70),
            grid_spacing_cm: 100.0,
        }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the current frame into `rect`, which is the canvas
    pub fn render<V: FloorplanView>(&self, painter: &Painter, rect: Rect, floorplanner: &Floorplanner<V>) {
        painter.rect_filled(rect, 0.0, self.background);
        self.draw_grid(painter, rect, floorplanner);

        let to_screen = |pos: Pos2| floorplanner.to_canvas(pos) + rect.min.to_vec2();
        let highlight = match floorplanner.mode() {
            Mode::Delete => self.delete_color,
            Mode::Move | Mode::Draw => self.active_color,
        };
        let floorplan = floorplanner.floorplan();
        let active = floorplanner.active();

        for wall in floorplan.walls() {
            let Some((start, end)) = floorplan.wall_endpoints(wall) else {
                continue;
            };
            let color = if active == ActiveEntity::Wall(wall.id()) {
                highlight
            } else {
                self.wall_color
            };
            painter.line_segment([to_screen(start), to_screen(end)], Stroke::new(WALL_WIDTH, color));
        }

        for corner in floorplan.corners() {
            if active == ActiveEntity::Corner(corner.id()) {
                painter.circle_filled(to_screen(corner.position), ACTIVE_CORNER_RADIUS, highlight);
            } else {
                painter.circle_filled(to_screen(corner.position), CORNER_RADIUS, self.wall_color);
            }
        }

        for item in floorplan.items() {
            self.draw_item(painter, item, highlight, floorplanner.config().item_handle_radius, &to_screen);
        }

        if floorplanner.mode() == Mode::Draw {
            self.draw_target(painter, floorplan, floorplanner, &to_screen);
        }
    }

    fn draw_item(
        &self,
        painter: &Painter,
        item: &Item,
        highlight: Color32,
        handle_radius: f32,
        to_screen: &impl Fn(Pos2) -> Pos2,
    ) {
        let rect = item.rect();
        let screen_rect = Rect::from_min_max(to_screen(rect.min), to_screen(rect.max));
        painter.rect_filled(screen_rect, 2.0, self.item_color.gamma_multiply(0.35));

        let outline = if item.is_hovered() || item.is_selected() {
            highlight
        } else {
            self.item_color
        };
        painter.rect_stroke(screen_rect, 2.0, Stroke::new(2.0, outline));

        if item.is_selected() {
            let handle = screen_rect.right_bottom();
            let radius = cm_to_pixels(handle_radius);
            match item.interaction() {
                ItemInteraction::Resizing { .. } => {
                    painter.circle_filled(handle, radius, highlight);
                }
                ItemInteraction::Idle => {
                    painter.circle_stroke(handle, radius, Stroke::new(1.5, highlight));
                }
            }
        }
    }

    fn draw_target<V: FloorplanView>(
        &self,
        painter: &Painter,
        floorplan: &Floorplan,
        floorplanner: &Floorplanner<V>,
        to_screen: &impl Fn(Pos2) -> Pos2,
    ) {
        let target = to_screen(floorplanner.target());
        if let Some(node) = floorplanner.last_node().and_then(|id| floorplan.corner(id)) {
            painter.line_segment(
                [to_screen(node.position), target],
                Stroke::new(WALL_WIDTH, self.active_color.gamma_multiply(0.5)),
            );
        }
        painter.circle_stroke(target, ACTIVE_CORNER_RADIUS, Stroke::new(2.0, self.active_color));
    }

    fn draw_grid<V: FloorplanView>(&self, painter: &Painter, rect: Rect, floorplanner: &Floorplanner<V>) {
        let spacing = cm_to_pixels(self.grid_spacing_cm);
        let stroke = Stroke::new(1.0, Color32::from_gray(225));
        let offset = floorplanner.origin();

        let mut x = rect.min.x - offset.x.rem_euclid(spacing);
        while x < rect.max.x {
            painter.vline(x, rect.y_range(), stroke);
            x += spacing;
        }
        let mut y = rect.min.y - offset.y.rem_euclid(spacing);
        while y < rect.max.y {
            painter.hline(rect.x_range(), y, stroke);
            y += spacing;
        }
    }
}
