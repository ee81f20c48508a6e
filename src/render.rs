//! Render coalescing: one visual write per animation frame.
//!
//! Pan and zoom mutate [`TransformState`] immediately, in event order. Only
//! the write of the content-layer transform is deferred. [`RenderSync`] is a
//! single-slot pending flag: the first request in a frame asks the host to
//! schedule a frame callback, later requests in the same frame are absorbed,
//! and the flush reads whatever the state holds at that moment.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::fmt;

use crate::transform::TransformState;
use crate::vector::Vector2;

/// The affine transform applied to the viewport's content layer.
///
/// Translate by the pan offset, then scale, with `transform-origin: 0 0`.
/// The screen origin is not part of it: the content layer already sits at
/// the viewport's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContentTransform {
    pub translate: Vector2,
    pub scale: f64,
}

impl ContentTransform {
    #[must_use]
    pub fn from_state(state: &TransformState) -> Self {
        Self { translate: *state.pan_offset(), scale: state.scale() }
    }

    /// CSS `transform` property value.
    #[must_use]
    pub fn css(&self) -> String {
        self.to_string()
    }

    /// Equivalent 2D matrix `[a, b, c, d, e, f]` as used by CSS `matrix()`
    /// and `CanvasRenderingContext2D::setTransform`.
    #[must_use]
    pub fn matrix(&self) -> [f64; 6] {
        [self.scale, 0.0, 0.0, self.scale, self.translate.x, self.translate.y]
    }
}

impl fmt::Display for ContentTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translate({}px, {}px) scale({})", self.translate.x, self.translate.y, self.scale)
    }
}

/// Single-slot debounce for frame requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderSync {
    pending: bool,
}

impl RenderSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a flush on the next frame.
    ///
    /// Returns `true` only when this call moved the slot from idle to pending,
    /// i.e. when the host must actually schedule a frame callback.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Clear the pending slot and produce the transform for the current state.
    ///
    /// Flushing with nothing pending is allowed and yields the same transform
    /// again; re-applying it is harmless.
    pub fn flush(&mut self, state: &TransformState) -> ContentTransform {
        self.pending = false;
        ContentTransform::from_state(state)
    }
}
