#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// WheelDelta
// =============================================================

#[test]
fn wheel_delta_default_is_zero() {
    assert_eq!(WheelDelta::default().dy, 0.0);
}

#[test]
fn wheel_delta_from_json() {
    let d: WheelDelta = serde_json::from_str(r#"{"dy": -100}"#).unwrap();
    assert_eq!(d, WheelDelta { dy: -100.0 });
}

#[test]
fn wheel_delta_ignores_other_event_fields() {
    let d: WheelDelta = serde_json::from_str(r#"{"dx": 40, "dy": 3, "deltaMode": 0}"#).unwrap();
    assert_eq!(d, WheelDelta { dy: 3.0 });
}

// =============================================================
// BoundingBox
// =============================================================

#[test]
fn bounding_box_origin_is_top_left() {
    let b = BoundingBox::new(50.0, 20.0, 800.0, 600.0);
    assert_eq!(b.origin(), Vector2::new(50.0, 20.0));
}

#[test]
fn bounding_box_center() {
    let b = BoundingBox::new(50.0, 20.0, 800.0, 600.0);
    assert_eq!(b.center(), Vector2::new(450.0, 320.0));
}

#[test]
fn bounding_box_from_dom_rect_json() {
    let b: BoundingBox =
        serde_json::from_str(r#"{"left": 50, "top": 20, "width": 640, "height": 480}"#).unwrap();
    assert_eq!(b, BoundingBox::new(50.0, 20.0, 640.0, 480.0));
}

#[test]
fn bounding_box_size_is_optional() {
    let b: BoundingBox = serde_json::from_str(r#"{"left": 5, "top": 6}"#).unwrap();
    assert_eq!(b.width, 0.0);
    assert_eq!(b.height, 0.0);
}

#[test]
fn bounding_box_requires_position() {
    assert!(serde_json::from_str::<BoundingBox>(r#"{"width": 5}"#).is_err());
}

// =============================================================
// DragState
// =============================================================

#[test]
fn drag_state_default_is_idle() {
    assert_eq!(DragState::default(), DragState::Idle);
    assert!(!DragState::Idle.is_active());
}

#[test]
fn panning_is_active() {
    assert!(DragState::Panning.is_active());
}
