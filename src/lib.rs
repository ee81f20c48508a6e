//! Pan/zoom viewport core.
//!
//! A viewport shows a virtual, pannable and zoomable plane ("canvas space")
//! through a rectangle on the page ("screen space"). This crate owns the
//! coordinate transform between the two and the pan/zoom interaction that
//! mutates it. The host is responsible for mounting the viewport element,
//! recognising drag gestures and wheel events, and applying the content
//! transform this crate produces once per animation frame.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::ViewportCore`] and the host [`engine::Action`]s |
//! | [`vector`] | [`vector::Vector2`] point/delta type with in-place mutation |
//! | [`transform`] | [`transform::TransformState`] and screen/canvas conversions |
//! | [`zoom`] | Zoom-to-cursor controller |
//! | [`pan`] | Drag gesture controller |
//! | [`render`] | Once-per-frame render coalescing and the content transform |
//! | [`input`] | Host event payloads (wheel deltas, bounding boxes, drag state) |
//! | [`config`] | Tunables loaded from JSON with validation |
//! | [`consts`] | Shared defaults |
//! | `host` | Browser binding (`web` feature): DOM bounds, `requestAnimationFrame`, style writes |

pub mod config;
pub mod consts;
pub mod engine;
#[cfg(feature = "web")]
pub mod host;
pub mod input;
pub mod pan;
pub mod render;
pub mod transform;
pub mod vector;
pub mod zoom;
