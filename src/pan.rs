//! Drag-to-pan controller.
//!
//! The host's gesture recogniser reports a start, a stream of per-move deltas
//! (relative to the previous move, not the drag start) and an end. A start
//! can be vetoed, e.g. when the pointer went down on a child element rather
//! than the viewport background. A vetoed start mutates nothing: an idle
//! controller stays idle and an active gesture keeps running until its end.

#[cfg(test)]
#[path = "pan_test.rs"]
mod pan_test;

use crate::input::{BoundingBox, DragState};
use crate::transform::TransformState;

#[derive(Debug, Clone, Copy, Default)]
pub struct PanController {
    drag: DragState,
}

impl PanController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.drag.is_active()
    }

    /// Begin a pan gesture if `should_start` allows it.
    ///
    /// On acceptance the screen origin is refreshed from `bounds` so that
    /// page scrolling since the last refresh does not skew conversions.
    /// Returns whether this start was accepted.
    pub fn start<P>(&mut self, state: &mut TransformState, bounds: BoundingBox, should_start: P) -> bool
    where
        P: FnOnce() -> bool,
    {
        if !should_start() {
            return false;
        }
        state.set_screen_origin(bounds.left, bounds.top);
        self.drag = DragState::Panning;
        true
    }

    /// Apply one move delta. Ignored unless a gesture is active.
    ///
    /// Returns whether the pan offset changed.
    pub fn drag_move(&self, state: &mut TransformState, dx: f64, dy: f64) -> bool {
        if !self.drag.is_active() {
            return false;
        }
        state.translate_pan(dx, dy);
        true
    }

    /// End the gesture. Returns whether one was active.
    pub fn end(&mut self) -> bool {
        let was_active = self.drag.is_active();
        self.drag = DragState::Idle;
        was_active
    }
}
