//! Input model: payloads the host delivers and the drag gesture state.
//!
//! The host's gesture recogniser and wheel listener translate DOM events
//! into these types before handing them to [`crate::engine::ViewportCore`].

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Deserialize;

use crate::vector::Vector2;

/// Wheel / trackpad scroll delta.
///
/// Only the vertical axis drives zoom. Other fields of a host `WheelEvent`
/// payload (`deltaX`, `deltaMode`) are ignored when deserializing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct WheelDelta {
    /// Vertical scroll amount in pixels (positive = down = zoom out).
    pub dy: f64,
}

/// The viewport's on-screen bounding box, in page coordinates.
///
/// Field names match `DOMRect` so a host can forward
/// `getBoundingClientRect()` as JSON unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    #[serde(default)]
    pub width: f64,
    #[serde(default)]
    pub height: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Top-left corner; seeds the transform's screen origin.
    #[must_use]
    pub fn origin(&self) -> Vector2 {
        Vector2::new(self.left, self.top)
    }

    /// Centre of the box in page coordinates.
    #[must_use]
    pub fn center(&self) -> Vector2 {
        Vector2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }
}

/// State of the pan gesture between drag-start and drag-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A pan gesture is active; move deltas translate the pan offset.
    Panning,
}

impl DragState {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Panning)
    }
}
