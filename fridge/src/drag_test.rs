#![allow(clippy::float_cmp)]

use super::*;
use crate::geometry::Size;

// =============================================================
// Helpers
// =============================================================

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

/// 50×20 tile rendered at (50, 30) inside a 500×300 container, pressed at (60, 40).
fn sample() -> PressSample {
    PressSample {
        pointer: pt(60.0, 40.0),
        element: pt(50.0, 30.0),
        tile: Size::new(50.0, 20.0),
        container: Some(Size::new(500.0, 300.0)),
        scroll: pt(0.0, 0.0),
    }
}

fn pressed() -> DragController {
    let mut drag = DragController::new(TileDomId::from_tile(1));
    drag.press(&sample()).expect("press should succeed");
    drag
}

// =============================================================
// Press
// =============================================================

#[test]
fn new_controller_is_idle() {
    let drag = DragController::new(TileDomId::from_tile(1));
    assert!(!drag.is_active());
    assert_eq!(drag.dom_id().as_str(), "w-1");
}

#[test]
fn press_captures_session() {
    let drag = pressed();
    let DragState::Pressed(session) = drag.state() else {
        panic!("expected Pressed, got {:?}", drag.state());
    };
    assert_eq!(session.pointer_offset, pt(10.0, 10.0));
    assert_eq!(session.bounds, Size::new(496.0, 296.0));
    assert_eq!(session.current, pt(50.0, 30.0));
    assert_eq!(session.scroll.anchor, pt(0.0, 0.0));
}

#[test]
fn press_without_offset_parent_fails_and_stays_idle() {
    let mut drag = DragController::new(TileDomId::from_tile(3));
    let err = drag
        .press(&PressSample { container: None, ..sample() })
        .expect_err("press should fail");
    assert_eq!(err, DragError::NoOffsetParent(TileDomId::from_tile(3)));
    assert!(!drag.is_active());
    assert!(drag.pointer_move(pt(100.0, 100.0)).is_none());
    assert!(drag.release().is_none());
}

// =============================================================
// Move
// =============================================================

#[test]
fn move_in_range_follows_pointer_exactly() {
    let mut drag = pressed();
    assert_eq!(drag.pointer_move(pt(110.5, 90.25)), Some(pt(100.5, 80.25)));
    assert!(matches!(drag.state(), DragState::Dragging(_)));
}

#[test]
fn move_past_right_edge_clamps_only_x() {
    let mut drag = pressed();
    assert_eq!(drag.pointer_move(pt(1000.0, 40.0)), Some(pt(446.0, 30.0)));
}

#[test]
fn move_past_top_left_clamps_each_axis_independently() {
    let mut drag = pressed();
    assert_eq!(drag.pointer_move(pt(-500.0, 100.0)), Some(pt(0.0, 90.0)));
    assert_eq!(drag.pointer_move(pt(100.0, -500.0)), Some(pt(90.0, 0.0)));
    assert_eq!(drag.pointer_move(pt(9000.0, 9000.0)), Some(pt(446.0, 276.0)));
}

#[test]
fn move_while_idle_is_ignored() {
    let mut drag = DragController::new(TileDomId::from_tile(1));
    assert!(drag.pointer_move(pt(10.0, 10.0)).is_none());
}

// =============================================================
// Scroll
// =============================================================

#[test]
fn scroll_without_pointer_motion_shifts_by_negative_delta() {
    let mut drag = pressed();
    let before = drag.pointer_move(pt(210.0, 140.0)).expect("dragging");
    assert_eq!(before, pt(200.0, 130.0));

    let after = drag.scroll(pt(15.0, 40.0)).expect("dragging");
    assert_eq!(after, pt(185.0, 90.0));
}

#[test]
fn scroll_deltas_are_incremental() {
    let mut drag = pressed();
    drag.pointer_move(pt(210.0, 140.0));
    drag.scroll(pt(0.0, 40.0));
    let after = drag.scroll(pt(0.0, 50.0)).expect("dragging");
    assert_eq!(after, pt(200.0, 80.0));
}

#[test]
fn scroll_compensation_persists_across_later_moves() {
    let mut drag = pressed();
    drag.scroll(pt(0.0, 25.0));
    assert_eq!(drag.pointer_move(pt(110.0, 140.0)), Some(pt(100.0, 105.0)));
}

#[test]
fn scroll_result_is_clamped() {
    let mut drag = pressed();
    drag.pointer_move(pt(20.0, 20.0));
    assert_eq!(drag.scroll(pt(500.0, 500.0)), Some(pt(0.0, 0.0)));
}

#[test]
fn scroll_before_any_move_starts_dragging() {
    let mut drag = pressed();
    assert_eq!(drag.scroll(pt(0.0, 10.0)), Some(pt(50.0, 20.0)));
    assert!(matches!(drag.state(), DragState::Dragging(_)));
}

// =============================================================
// Release
// =============================================================

#[test]
fn release_returns_rounded_position_and_goes_idle() {
    let mut drag = pressed();
    drag.pointer_move(pt(110.4, 90.6));
    assert_eq!(drag.release(), Some((100, 81)));
    assert!(!drag.is_active());
    assert!(drag.release().is_none());
}

#[test]
fn release_without_motion_returns_start_position() {
    let mut drag = pressed();
    assert_eq!(drag.release(), Some((50, 30)));
}

#[test]
fn press_again_restarts_session() {
    let mut drag = pressed();
    drag.pointer_move(pt(300.0, 200.0));
    drag.press(&PressSample { pointer: pt(5.0, 5.0), element: pt(0.0, 0.0), ..sample() })
        .expect("press");
    assert_eq!(drag.release(), Some((0, 0)));
}
