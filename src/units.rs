//! Conversions between device pixels and model units (centimetres).
//!
//! The view origin is kept in device pixels, so converting a canvas-local
//! pointer position into the model adds the origin before scaling.

use egui::{Pos2, Vec2};

pub const CM_PER_FOOT: f32 = 30.48;
pub const PIXELS_PER_FOOT: f32 = 15.0;
pub const CM_PER_PIXEL: f32 = CM_PER_FOOT / PIXELS_PER_FOOT;
pub const PIXELS_PER_CM: f32 = 1.0 / CM_PER_PIXEL;

/// Canvas-local device position to model coordinates.
#[inline]
pub fn canvas_to_model(raw: Pos2, origin: Vec2) -> Pos2 {
    ((raw.to_vec2() + origin) * CM_PER_PIXEL).to_pos2()
}

/// Model coordinates to canvas-local pixels for rendering.
#[inline]
pub fn model_to_canvas(pos: Pos2, origin: Vec2) -> Pos2 {
    (pos.to_vec2() * PIXELS_PER_CM - origin).to_pos2()
}

/// A raw pointer delta expressed in model units.
#[inline]
pub fn pixels_to_cm(delta: Vec2) -> Vec2 {
    delta * CM_PER_PIXEL
}

#[inline]
pub fn cm_to_pixels(length: f32) -> f32 {
    length * PIXELS_PER_CM
}
