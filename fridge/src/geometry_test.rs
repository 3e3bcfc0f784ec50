#![allow(clippy::float_cmp)]

use super::*;

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

const TILE: Size = Size { width: 50.0, height: 20.0 };
const BOUNDS: Size = Size { width: 496.0, height: 296.0 };

// =============================================================
// Point / Size
// =============================================================

#[test]
fn point_minus_subtracts_per_axis() {
    assert_eq!(pt(60.0, 40.0).minus(pt(50.0, 30.0)), pt(10.0, 10.0));
}

#[test]
fn point_rounded_goes_to_nearest_pixel() {
    assert_eq!(pt(10.4, 10.6).rounded(), (10, 11));
    assert_eq!(pt(-0.4, 445.5).rounded(), (0, 446));
}

#[test]
fn size_inset_removes_both_sides() {
    assert_eq!(Size::new(500.0, 300.0).inset(2.0), Size::new(496.0, 296.0));
}

// =============================================================
// clamp_to_container
// =============================================================

#[test]
fn clamp_leaves_in_range_positions_untouched() {
    for (x, y) in [(0.0, 0.0), (10.5, 7.25), (446.0, 276.0), (200.0, 100.0)] {
        assert_eq!(clamp_to_container(pt(x, y), TILE, BOUNDS), pt(x, y));
    }
}

#[test]
fn clamp_negative_x_only_touches_x() {
    assert_eq!(clamp_to_container(pt(-30.0, 120.0), TILE, BOUNDS), pt(0.0, 120.0));
}

#[test]
fn clamp_negative_y_only_touches_y() {
    assert_eq!(clamp_to_container(pt(99.0, -1.0), TILE, BOUNDS), pt(99.0, 0.0));
}

#[test]
fn clamp_far_edges_pin_to_bound_minus_tile() {
    assert_eq!(clamp_to_container(pt(990.0, 30.0), TILE, BOUNDS), pt(446.0, 30.0));
    assert_eq!(clamp_to_container(pt(30.0, 990.0), TILE, BOUNDS), pt(30.0, 276.0));
    assert_eq!(clamp_to_container(pt(990.0, 990.0), TILE, BOUNDS), pt(446.0, 276.0));
}

#[test]
fn clamp_tile_wider_than_bounds_pins_far_edge() {
    let wide = Size::new(600.0, 20.0);
    assert_eq!(clamp_to_container(pt(10.0, 10.0), wide, BOUNDS).x, -104.0);
}

// =============================================================
// TileDomId
// =============================================================

#[test]
fn dom_id_uses_prefix() {
    assert_eq!(TileDomId::from_tile(7).as_str(), "w-7");
    assert_eq!(TileDomId::from_tile(7).selector(), "#w-7");
}

#[test]
fn dom_id_round_trips_for_non_negative_ids() {
    for id in [0, 1, 9, 10, 42, 1_000_000, u64::from(u32::MAX) + 1, u64::MAX] {
        assert_eq!(TileDomId::from_tile(id).tile_id().expect("tile id"), id);
    }
}

#[test]
fn dom_id_without_prefix_is_rejected() {
    let err = TileDomId::from_element_id("x-7").tile_id().expect_err("prefix");
    assert!(matches!(err, TileIdError::MissingPrefix(ref raw) if raw == "x-7"));
}

#[test]
fn dom_id_with_non_numeric_suffix_is_rejected() {
    let err = TileDomId::from_element_id("w-abc").tile_id().expect_err("digits");
    assert!(matches!(err, TileIdError::NotANumber { .. }));
    assert!(TileDomId::from_element_id("w--3").tile_id().is_err());
}

#[test]
fn dom_id_display_is_raw_id() {
    assert_eq!(TileDomId::from(12).to_string(), "w-12");
}
