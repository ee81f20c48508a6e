//! Zoom-to-cursor controller.
//!
//! A wheel step multiplies the scale by `zoom_factor` (or its reciprocal) and
//! shifts the pan offset so the canvas point under the anchor stays under the
//! anchor. For a canvas point `c` the screen position under scale `s` and pan
//! `o` is `c * s + o + origin`; keeping it fixed across `s0 -> s1` needs
//! `o1 = o0 + c * (s0 - s1)`.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::config::ViewportConfig;
use crate::consts::{DEFAULT_MIN_SCALE, DEFAULT_ZOOM_FACTOR};
use crate::transform::TransformState;
use crate::vector::Vector2;

/// Wheel-driven zoom with a scale floor.
///
/// `zoom_factor` must be greater than 1. This is not checked here; a factor
/// at or below 1 inverts or freezes the zoom direction and is a caller bug.
/// Use [`ViewportConfig::validate`] at the boundary where values come in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomController {
    pub zoom_factor: f64,
    pub min_scale: f64,
}

impl Default for ZoomController {
    fn default() -> Self {
        Self { zoom_factor: DEFAULT_ZOOM_FACTOR, min_scale: DEFAULT_MIN_SCALE }
    }
}

impl From<&ViewportConfig> for ZoomController {
    fn from(config: &ViewportConfig) -> Self {
        Self { zoom_factor: config.zoom_factor, min_scale: config.min_scale }
    }
}

impl ZoomController {
    /// Scale multiplier for one wheel step.
    ///
    /// Positive `delta_y` zooms out, negative zooms in, zero leaves the scale alone.
    #[must_use]
    pub fn step_multiplier(&self, delta_y: f64) -> f64 {
        if delta_y > 0.0 {
            1.0 / self.zoom_factor
        } else if delta_y < 0.0 {
            self.zoom_factor
        } else {
            1.0
        }
    }

    /// Scale that one wheel step produces from `current`, floored at `min_scale`.
    #[must_use]
    pub fn next_scale(&self, current: f64, delta_y: f64) -> f64 {
        self.clamp_scale(current * self.step_multiplier(delta_y))
    }

    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.max(self.min_scale)
    }

    /// Apply one wheel step anchored at the page-space point `anchor`.
    ///
    /// Returns the new scale.
    pub fn zoom_at(&self, state: &mut TransformState, anchor: Vector2, delta_y: f64) -> f64 {
        let target = self.next_scale(state.scale(), delta_y);
        Self::rescale_about(state, anchor, target);
        target
    }

    /// Jump to an explicit scale, anchored at `anchor`. The floor still applies.
    ///
    /// Returns the scale actually applied.
    pub fn zoom_to(&self, state: &mut TransformState, anchor: Vector2, scale: f64) -> f64 {
        let target = self.clamp_scale(scale);
        Self::rescale_about(state, anchor, target);
        target
    }

    fn rescale_about(state: &mut TransformState, anchor: Vector2, new_scale: f64) {
        let anchor_canvas = state.to_canvas(anchor);
        let correction = anchor_canvas * (state.scale() - new_scale);
        state.translate_pan(correction.x, correction.y);
        state.set_scale(new_scale);
    }
}
