//! Browser binding: owns the viewport element and its content layer.
//!
//! The host page forwards DOM events here. Bounds come from
//! `getBoundingClientRect`, pointer positions must be `clientX`/`clientY` so
//! both sit in the same frame. Frame callbacks go through
//! `requestAnimationFrame`, at most one outstanding at a time.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::HtmlElement;

use crate::config::ViewportConfig;
use crate::engine::{Action, ViewportCore};
use crate::input::{BoundingBox, WheelDelta};
use crate::vector::Vector2;

/// Error returned by DOM calls made on behalf of the viewport.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Raised by the browser when a DOM call throws.
    #[error("dom call failed: {0}")]
    Js(String),
}

impl From<JsValue> for HostError {
    fn from(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

type FrameCallback = Closure<dyn FnMut(f64)>;

/// A mounted viewport.
pub struct Viewport {
    element: HtmlElement,
    content: HtmlElement,
    core: Rc<RefCell<ViewportCore>>,
    frame_cb: RefCell<Option<FrameCallback>>,
}

impl Viewport {
    #[must_use]
    pub fn new(element: HtmlElement, content: HtmlElement, config: &ViewportConfig) -> Self {
        Self {
            element,
            content,
            core: Rc::new(RefCell::new(ViewportCore::with_config(config))),
            frame_cb: RefCell::new(None),
        }
    }

    /// Read the element's bounds and apply the initial transform.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Js`] if a style write or frame request throws.
    pub fn mount(&self) -> Result<(), HostError> {
        self.content.style().set_property("transform-origin", "0 0")?;
        let actions = self.core.borrow_mut().mount(self.bounds());
        self.dispatch(actions)
    }

    /// Refresh bounds after a page scroll, resize or reflow.
    pub fn on_resize(&self) {
        self.core.borrow_mut().on_resize(self.bounds());
    }

    /// Wheel event at client position `(client_x, client_y)`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Js`] if a frame cannot be scheduled or applied.
    pub fn on_wheel(&self, client_x: f64, client_y: f64, delta_y: f64) -> Result<(), HostError> {
        let actions = self
            .core
            .borrow_mut()
            .on_wheel(Vector2::new(client_x, client_y), WheelDelta { dy: delta_y });
        self.dispatch(actions)
    }

    /// Veto hook for the drag recogniser. Returns whether the drag may start.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Js`] if the cursor style cannot be written.
    pub fn on_drag_start<P>(&self, should_start: P) -> Result<bool, HostError>
    where
        P: FnOnce() -> bool,
    {
        let bounds = self.bounds();
        let mut accepted = false;
        let actions = self.core.borrow_mut().on_drag_start(bounds, || {
            accepted = should_start();
            accepted
        });
        self.dispatch(actions)?;
        Ok(accepted)
    }

    /// # Errors
    ///
    /// Returns [`HostError::Js`] if a frame cannot be scheduled or applied.
    pub fn on_drag_move(&self, dx: f64, dy: f64) -> Result<(), HostError> {
        let actions = self.core.borrow_mut().on_drag_move(dx, dy);
        self.dispatch(actions)
    }

    /// # Errors
    ///
    /// Returns [`HostError::Js`] if the cursor style cannot be written.
    pub fn on_drag_end(&self) -> Result<(), HostError> {
        let actions = self.core.borrow_mut().on_drag_end();
        self.dispatch(actions)
    }

    #[must_use]
    pub fn screen_to_canvas(&self, point: Vector2) -> Vector2 {
        self.core.borrow().to_canvas(point)
    }

    #[must_use]
    pub fn canvas_to_screen(&self, point: Vector2) -> Vector2 {
        self.core.borrow().to_screen(point)
    }

    /// Shared handle to the core for programmatic view changes.
    ///
    /// Actions returned by calls made through this handle are the caller's to
    /// dispatch; use [`Viewport::apply`] to hand them back.
    #[must_use]
    pub fn core(&self) -> Rc<RefCell<ViewportCore>> {
        Rc::clone(&self.core)
    }

    /// Process actions produced by direct core calls.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Js`] if a style write or frame request throws.
    pub fn apply(&self, actions: Vec<Action>) -> Result<(), HostError> {
        self.dispatch(actions)
    }

    fn bounds(&self) -> BoundingBox {
        let rect = self.element.get_bounding_client_rect();
        BoundingBox::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    fn dispatch(&self, actions: Vec<Action>) -> Result<(), HostError> {
        for action in actions {
            match action {
                Action::ScheduleFrame => self.schedule_frame()?,
                Action::SetCursor(cursor) => self.element.style().set_property("cursor", cursor)?,
            }
        }
        Ok(())
    }

    fn schedule_frame(&self) -> Result<(), HostError> {
        let Some(window) = web_sys::window() else {
            warn!("no window; applying content transform immediately");
            return apply_frame(&self.core, &self.content);
        };

        let core = Rc::clone(&self.core);
        let content = self.content.clone();
        let cb = Closure::wrap(Box::new(move |_ts: f64| {
            if let Err(e) = apply_frame(&core, &content) {
                warn!(error = %e, "content transform write failed");
            }
        }) as Box<dyn FnMut(f64)>);

        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(_) => {
                // The previous callback has already fired: a new frame is only
                // scheduled after the last flush cleared the pending flag.
                *self.frame_cb.borrow_mut() = Some(cb);
                Ok(())
            }
            Err(e) => {
                warn!(error = ?e, "requestAnimationFrame failed; applying immediately");
                apply_frame(&self.core, &self.content)
            }
        }
    }
}

fn apply_frame(core: &RefCell<ViewportCore>, content: &HtmlElement) -> Result<(), HostError> {
    let transform = core.borrow_mut().frame();
    content.style().set_property("transform", &transform.css())?;
    Ok(())
}
