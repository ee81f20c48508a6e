//! Shared numeric constants for the viewport crate.

// ── Zoom ────────────────────────────────────────────────────────

/// Scale multiplier applied per wheel step. Must be greater than 1.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;

/// Lowest scale the zoom controller will produce.
pub const DEFAULT_MIN_SCALE: f64 = 0.1;

// ── Cursors ─────────────────────────────────────────────────────

/// CSS cursor shown while a pan gesture is active.
pub const CURSOR_PANNING: &str = "grabbing";

/// CSS cursor restored when a pan gesture ends.
pub const CURSOR_IDLE: &str = "grab";
