use tracing::{debug, trace};

use crate::config::ViewportConfig;
use crate::consts::{CURSOR_IDLE, CURSOR_PANNING};
use crate::input::{BoundingBox, WheelDelta};
use crate::pan::PanController;
use crate::render::{ContentTransform, RenderSync};
use crate::transform::TransformState;
use crate::vector::Vector2;
use crate::zoom::ZoomController;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from handlers for the host to process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// A render became pending; schedule one frame callback that calls
    /// [`ViewportCore::frame`].
    ScheduleFrame,
    /// Change the viewport's CSS cursor.
    SetCursor(&'static str),
}

/// Viewport state and interaction, independent of any host element.
///
/// All mutations happen synchronously in the handler that receives the
/// event. Only the visual write is deferred to [`frame`](Self::frame).
#[derive(Debug, Clone, Default)]
pub struct ViewportCore {
    /// Wheel zoom tunables. `zoom.zoom_factor` is a plain field; see
    /// [`ZoomController`] for its precondition.
    pub zoom: ZoomController,
    transform: TransformState,
    pan: PanController,
    render: RenderSync,
    bounds: Option<BoundingBox>,
}

impl ViewportCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a core from already-validated settings.
    #[must_use]
    pub fn with_config(config: &ViewportConfig) -> Self {
        Self { zoom: ZoomController::from(config), ..Self::default() }
    }

    // --- Host lifecycle ---

    /// The viewport was attached; seed the screen origin from its bounds.
    pub fn mount(&mut self, bounds: BoundingBox) -> Vec<Action> {
        debug!(left = bounds.left, top = bounds.top, "viewport mounted");
        self.apply_bounds(bounds);
        self.request_render()
    }

    /// The viewport may have moved or resized on the page.
    pub fn on_resize(&mut self, bounds: BoundingBox) {
        debug!(left = bounds.left, top = bounds.top, "viewport bounds refreshed");
        self.apply_bounds(bounds);
    }

    fn apply_bounds(&mut self, bounds: BoundingBox) {
        self.transform.set_screen_origin(bounds.left, bounds.top);
        self.bounds = Some(bounds);
    }

    // --- Transform accessors ---

    /// Live view of the pan offset.
    #[must_use]
    pub fn position(&self) -> &Vector2 {
        self.transform.pan_offset()
    }

    /// Jump to a pan offset. No validation.
    pub fn set_position(&mut self, x: f64, y: f64) -> Vec<Action> {
        self.transform.set_pan_offset(x, y);
        self.request_render()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.transform.scale()
    }

    /// Jump to a scale. Not clamped; only wheel zoom applies the floor.
    pub fn set_scale(&mut self, scale: f64) -> Vec<Action> {
        self.transform.set_scale(scale);
        self.request_render()
    }

    #[must_use]
    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    /// Bounds from the last mount, resize or drag start.
    #[must_use]
    pub fn bounds(&self) -> Option<BoundingBox> {
        self.bounds
    }

    // --- Coordinate queries ---

    /// Page point to canvas point, in place. Returns `point`.
    pub fn screen_to_canvas<'a>(&self, point: &'a mut Vector2) -> &'a mut Vector2 {
        self.transform.screen_to_canvas(point)
    }

    /// Canvas point to page point, in place. Returns `point`.
    pub fn canvas_to_screen<'a>(&self, point: &'a mut Vector2) -> &'a mut Vector2 {
        self.transform.canvas_to_screen(point)
    }

    #[must_use]
    pub fn to_canvas(&self, point: Vector2) -> Vector2 {
        self.transform.to_canvas(point)
    }

    #[must_use]
    pub fn to_screen(&self, point: Vector2) -> Vector2 {
        self.transform.to_screen(point)
    }

    // --- Input events ---

    /// Wheel step anchored at the page-space cursor position.
    pub fn on_wheel(&mut self, cursor: Vector2, delta: WheelDelta) -> Vec<Action> {
        let scale = self.zoom.zoom_at(&mut self.transform, cursor, delta.dy);
        trace!(delta_y = delta.dy, scale, "wheel zoom");
        self.request_render()
    }

    /// Drag gesture started. `should_start` can veto it (e.g. the pointer
    /// went down on a child element); a vetoed start returns no actions and
    /// leaves the state untouched, including any gesture already running.
    pub fn on_drag_start<P>(&mut self, bounds: BoundingBox, should_start: P) -> Vec<Action>
    where
        P: FnOnce() -> bool,
    {
        if !self.pan.start(&mut self.transform, bounds, should_start) {
            debug!("drag start vetoed");
            return Vec::new();
        }
        self.bounds = Some(bounds);
        vec![Action::SetCursor(CURSOR_PANNING)]
    }

    /// One drag move; `(dx, dy)` is relative to the previous move.
    pub fn on_drag_move(&mut self, dx: f64, dy: f64) -> Vec<Action> {
        if !self.pan.drag_move(&mut self.transform, dx, dy) {
            return Vec::new();
        }
        trace!(dx, dy, "pan");
        self.request_render()
    }

    pub fn on_drag_end(&mut self) -> Vec<Action> {
        if self.pan.end() {
            vec![Action::SetCursor(CURSOR_IDLE)]
        } else {
            Vec::new()
        }
    }

    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_active()
    }

    // --- Programmatic view changes ---

    /// Zoom to `scale` keeping the centre of the viewport fixed.
    ///
    /// Falls back to the screen origin when no size has been reported.
    pub fn zoom_about_center(&mut self, scale: f64) -> Vec<Action> {
        let anchor = self.bounds.map_or(*self.transform.screen_origin(), |b| b.center());
        self.zoom.zoom_to(&mut self.transform, anchor, scale);
        self.request_render()
    }

    /// Back to scale 1 with no pan. The screen origin is kept.
    pub fn reset_view(&mut self) -> Vec<Action> {
        self.transform.set_scale(1.0);
        self.transform.set_pan_offset(0.0, 0.0);
        self.request_render()
    }

    // --- Render ---

    #[must_use]
    pub fn is_render_pending(&self) -> bool {
        self.render.is_pending()
    }

    /// Frame callback: clear the pending flag and return the transform to write.
    pub fn frame(&mut self) -> ContentTransform {
        self.render.flush(&self.transform)
    }

    fn request_render(&mut self) -> Vec<Action> {
        if self.render.request() {
            vec![Action::ScheduleFrame]
        } else {
            Vec::new()
        }
    }
}
