#![allow(clippy::float_cmp)]

use super::*;
use crate::vector::Vector2;

fn bounds(left: f64, top: f64) -> BoundingBox {
    BoundingBox::new(left, top, 800.0, 600.0)
}

// =============================================================
// Start / veto
// =============================================================

#[test]
fn new_controller_is_idle() {
    let pan = PanController::new();
    assert_eq!(pan.drag_state(), DragState::Idle);
    assert!(!pan.is_active());
}

#[test]
fn accepted_start_activates() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    assert!(pan.start(&mut s, bounds(0.0, 0.0), || true));
    assert_eq!(pan.drag_state(), DragState::Panning);
}

#[test]
fn accepted_start_refreshes_screen_origin() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    s.set_screen_origin(50.0, 20.0);
    pan.start(&mut s, bounds(50.0, -180.0), || true);
    assert_eq!(*s.screen_origin(), Vector2::new(50.0, -180.0));
}

#[test]
fn vetoed_start_mutates_nothing() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    s.set_screen_origin(50.0, 20.0);
    let before = s.clone();
    assert!(!pan.start(&mut s, bounds(999.0, 999.0), || false));
    assert_eq!(s, before);
    assert!(!pan.is_active());
}

#[test]
fn vetoed_gesture_ignores_moves() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    pan.start(&mut s, bounds(0.0, 0.0), || false);
    assert!(!pan.drag_move(&mut s, 10.0, 10.0));
    assert_eq!(*s.pan_offset(), Vector2::ZERO);
}

#[test]
fn predicate_runs_once() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    let mut calls = 0;
    pan.start(&mut s, bounds(0.0, 0.0), || {
        calls += 1;
        true
    });
    assert_eq!(calls, 1);
}

// =============================================================
// Moves
// =============================================================

#[test]
fn deltas_accumulate_relative_to_previous_move() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    pan.start(&mut s, bounds(0.0, 0.0), || true);
    pan.drag_move(&mut s, 3.0, 4.0);
    pan.drag_move(&mut s, -1.0, 2.0);
    assert_eq!(*s.pan_offset(), Vector2::new(2.0, 6.0));
    assert_eq!(pan.drag_state(), DragState::Panning);
}

#[test]
fn moves_add_to_existing_offset() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    s.set_pan_offset(100.0, -100.0);
    pan.start(&mut s, bounds(0.0, 0.0), || true);
    pan.drag_move(&mut s, 5.0, 5.0);
    assert_eq!(*s.pan_offset(), Vector2::new(105.0, -95.0));
}

#[test]
fn move_without_start_is_ignored() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    assert!(!pan.drag_move(&mut s, 1.0, 1.0));
    assert_eq!(*s.pan_offset(), Vector2::ZERO);
}

#[test]
fn pan_is_independent_of_scale() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    s.set_scale(4.0);
    pan.start(&mut s, bounds(0.0, 0.0), || true);
    pan.drag_move(&mut s, 8.0, 0.0);
    assert_eq!(*s.pan_offset(), Vector2::new(8.0, 0.0));
}

// =============================================================
// End
// =============================================================

#[test]
fn end_returns_to_idle() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    pan.start(&mut s, bounds(0.0, 0.0), || true);
    assert!(pan.end());
    assert!(!pan.is_active());
    assert!(!pan.drag_move(&mut s, 1.0, 1.0));
}

#[test]
fn end_when_idle_reports_inactive() {
    let mut pan = PanController::new();
    assert!(!pan.end());
}

#[test]
fn vetoed_restart_keeps_active_gesture() {
    let mut pan = PanController::new();
    let mut s = TransformState::new();
    pan.start(&mut s, bounds(10.0, 10.0), || true);
    assert!(!pan.start(&mut s, bounds(99.0, 99.0), || false));
    assert!(pan.is_active());
    assert_eq!(*s.screen_origin(), Vector2::new(10.0, 10.0));
    assert!(pan.drag_move(&mut s, 4.0, -2.0));
    assert_eq!(*s.pan_offset(), Vector2::new(4.0, -2.0));
    assert!(pan.end());
}
