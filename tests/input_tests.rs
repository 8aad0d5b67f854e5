// Host-side tests for pointer normalization and the shared drag state.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::DVec2;
use input::*;
use vismath_core::{CanvasRect, DragSource, DragState, PinchState, PointerSample};
use vismath_core::input::{nearest_point, Viewport};

fn pinch_at(x: f64, y: f64) -> Option<PinchState> {
    Some(PinchState {
        is_pinching: true,
        x,
        y,
    })
}

fn released() -> Option<PinchState> {
    Some(PinchState::default())
}

#[test]
fn wheel_delta_modes() {
    assert_eq!(wheel_delta_pixels(100.0, DOM_DELTA_PIXEL, 800.0), 100.0);
    assert_eq!(wheel_delta_pixels(3.0, DOM_DELTA_LINE, 800.0), 3.0 * WHEEL_LINE_PX);
    assert_eq!(wheel_delta_pixels(-1.0, DOM_DELTA_PAGE, 800.0), -800.0);
    assert_eq!(wheel_delta_pixels(f64::NAN, DOM_DELTA_PIXEL, 800.0), 0.0);
}

#[test]
fn pointer_normalization() {
    let rect = CanvasRect {
        left: 100.0,
        top: 50.0,
        width: 800.0,
        height: 400.0,
    };
    let s = PointerSample::new(500.0, 150.0, rect);
    assert_eq!(s.local_px(), DVec2::new(400.0, 100.0));
    assert_eq!(s.normalized(), DVec2::new(0.5, 0.25));
    assert_eq!(s.viewport(), Viewport::new(800.0, 400.0));
    assert_eq!(s.viewport().aspect(), 2.0);
}

#[test]
fn zero_sized_canvas_maps_to_center() {
    let rect = CanvasRect {
        left: 0.0,
        top: 0.0,
        width: 0.0,
        height: 0.0,
    };
    let s = PointerSample::new(10.0, 10.0, rect);
    assert_eq!(s.normalized(), DVec2::splat(0.5));
    assert_eq!(s.viewport().aspect(), 1.0);
}

#[test]
fn pointer_capture_and_release() {
    let mut d = DragState::<usize>::idle();
    assert_eq!(d.pointer_down(Some(2)), Some(2));
    assert_eq!(d.source(), Some(DragSource::Pointer));
    assert_eq!(d.pointer_move(), Some(2));
    d.pointer_up();
    assert!(!d.is_active());
    assert_eq!(d.pointer_move(), None);
}

#[test]
fn pointer_down_on_nothing_stays_idle() {
    let mut d = DragState::<usize>::idle();
    assert_eq!(d.pointer_down(None), None);
    assert!(d.pointer_held());
    assert_eq!(d.pointer_move(), None);
}

#[test]
fn pinch_picks_only_when_it_begins() {
    let mut d = DragState::<usize>::idle();
    // pinch starts away from everything
    assert_eq!(d.pinch(pinch_at(0.1, 0.1), |_| None), None);
    // sliding onto a target while still pinching does not grab it
    assert_eq!(d.pinch(pinch_at(0.5, 0.5), |_| Some(0)), None);
    d.pinch(released(), |_| None);
    let moved = d.pinch(pinch_at(0.5, 0.5), |_| Some(0));
    assert_eq!(moved, Some((0, DVec2::new(0.5, 0.5))));
    assert_eq!(d.source(), Some(DragSource::Pinch));
    // continued pinch follows the hand
    assert_eq!(d.pinch(pinch_at(0.6, 0.4), |_| Some(1)), Some((0, DVec2::new(0.6, 0.4))));
}

#[test]
fn pinch_release_ends_capture() {
    let mut d = DragState::<usize>::idle();
    d.pinch(pinch_at(0.5, 0.5), |_| Some(1));
    assert!(d.is_captured(1));
    assert_eq!(d.pinch(None, |_| None), None);
    assert!(!d.is_active());
}

#[test]
fn held_pointer_survives_pinch_noise() {
    let mut d = DragState::<usize>::idle();
    d.pointer_down(Some(0));
    // a flickering pinch neither steals nor drops the pointer drag
    assert_eq!(d.pinch(pinch_at(0.9, 0.9), |_| Some(1)), None);
    assert_eq!(d.pinch(released(), |_| None), None);
    assert!(d.is_captured(0));
    assert_eq!(d.source(), Some(DragSource::Pointer));
}

#[test]
fn pointer_down_does_not_steal_pinch_capture() {
    let mut d = DragState::<usize>::idle();
    d.pinch(pinch_at(0.5, 0.5), |_| Some(1));
    assert_eq!(d.pointer_down(Some(2)), Some(1));
    d.pointer_up();
    assert!(!d.is_active());
}

#[test]
fn clear_forgets_everything() {
    let mut d = DragState::<usize>::idle();
    d.pointer_down(Some(0));
    d.clear();
    assert_eq!(d, DragState::idle());
    assert!(!d.pointer_held());
}

#[test]
fn nearest_point_prefers_closest_within_radius() {
    let pts = [(0, DVec2::new(0.5, 0.5)), (1, DVec2::new(0.53, 0.5))];
    assert_eq!(nearest_point(pts, DVec2::new(0.52, 0.5), 0.05), Some(1));
    assert_eq!(nearest_point(pts, DVec2::new(0.9, 0.9), 0.05), None);
    // the radius is exclusive
    assert_eq!(nearest_point([(7, DVec2::ZERO)], DVec2::new(0.05, 0.0), 0.05), None);
}
