//! Screen/canvas coordinate transform.
//!
//! The whole model is a single affine map:
//!
//! ```text
//! screen = canvas * scale + pan_offset + screen_origin
//! ```
//!
//! `screen` is in page coordinates (the same frame the host reports pointer
//! positions in). `screen_origin` is the viewport's top-left corner in that
//! frame and must be refreshed whenever the viewport may have moved on the
//! page; a stale origin silently offsets every conversion.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use crate::vector::Vector2;

/// Scale, pan offset and screen origin of one viewport.
///
/// `scale` is kept positive by the zoom controller; the raw setters here do
/// not check it.
#[derive(Debug, Clone, PartialEq)]
pub struct TransformState {
    scale: f64,
    pan_offset: Vector2,
    screen_origin: Vector2,
}

impl Default for TransformState {
    fn default() -> Self {
        Self { scale: 1.0, pan_offset: Vector2::ZERO, screen_origin: Vector2::ZERO }
    }
}

impl TransformState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Accessors ---

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Live view of the accumulated pan translation, in screen pixels.
    #[must_use]
    pub fn pan_offset(&self) -> &Vector2 {
        &self.pan_offset
    }

    #[must_use]
    pub fn screen_origin(&self) -> &Vector2 {
        &self.screen_origin
    }

    // --- Raw mutators (no clamping, no render requests) ---

    pub fn set_scale(&mut self, scale: f64) {
        self.scale = scale;
    }

    pub fn set_pan_offset(&mut self, x: f64, y: f64) {
        self.pan_offset.set(x, y);
    }

    /// Shift the pan offset by a screen-space delta.
    pub fn translate_pan(&mut self, dx: f64, dy: f64) {
        self.pan_offset.translate(dx, dy);
    }

    pub fn set_screen_origin(&mut self, left: f64, top: f64) {
        self.screen_origin.set(left, top);
    }

    // --- Conversions ---

    /// Convert a page-space point to canvas space, in place.
    ///
    /// Mutates `point` and returns the same reference.
    pub fn screen_to_canvas<'a>(&self, point: &'a mut Vector2) -> &'a mut Vector2 {
        point
            .sub_vec(&self.screen_origin)
            .sub_vec(&self.pan_offset)
            .div_scalar(self.scale)
    }

    /// Convert a canvas-space point to page space, in place.
    ///
    /// Mutates `point` and returns the same reference.
    pub fn canvas_to_screen<'a>(&self, point: &'a mut Vector2) -> &'a mut Vector2 {
        point
            .scale(self.scale)
            .add_vec(&self.screen_origin)
            .add_vec(&self.pan_offset)
    }

    /// Non-mutating [`screen_to_canvas`](Self::screen_to_canvas).
    #[must_use]
    pub fn to_canvas(&self, mut point: Vector2) -> Vector2 {
        self.screen_to_canvas(&mut point);
        point
    }

    /// Non-mutating [`canvas_to_screen`](Self::canvas_to_screen).
    #[must_use]
    pub fn to_screen(&self, mut point: Vector2) -> Vector2 {
        self.canvas_to_screen(&mut point);
        point
    }

    /// Convert a point relative to the viewport's top-left corner to canvas space.
    #[must_use]
    pub fn viewport_to_canvas(&self, local: Vector2) -> Vector2 {
        (local - self.pan_offset) / self.scale
    }

    /// Convert a screen-space distance to a canvas-space distance.
    #[must_use]
    pub fn screen_dist_to_canvas(&self, screen_dist: f64) -> f64 {
        screen_dist / self.scale
    }
}
