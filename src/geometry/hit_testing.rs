use egui::{Pos2, Rect};

/// Closest point to `pos` on the segment `start..end`
pub fn closest_point_on_segment(pos: Pos2, start: Pos2, end: Pos2) -> Pos2 {
    let segment = end - start;
    let length_sq = segment.length_sq();
    if length_sq == 0.0 {
        return start;
    }
    let t = ((pos - start).dot(segment) / length_sq).clamp(0.0, 1.0);
    start + segment * t
}

pub fn distance_to_segment(pos: Pos2, start: Pos2, end: Pos2) -> f32 {
    pos.distance(closest_point_on_segment(pos, start, end))
}

/// The resize handle sits on the bottom-right corner of an item's rect
pub fn handle_position(rect: Rect) -> Pos2 {
    rect.right_bottom()
}

pub fn is_point_near_handle(pos: Pos2, rect: Rect, radius: f32) -> bool {
    pos.distance(handle_position(rect)) <= radius
}
