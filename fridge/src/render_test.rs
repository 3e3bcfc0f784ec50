#![allow(clippy::float_cmp)]

use super::*;
use crate::animator::Easing;

fn tile(id: u64, text: &str, x: f64, y: f64) -> Tile {
    Tile { id, text: text.to_owned(), position: Point::new(x, y) }
}

fn transition() -> Transition {
    Transition { duration_ms: 1500, left: Easing::EaseOutCirc, top: Easing::EaseOutBack }
}

#[test]
fn memory_renderer_default_has_canvas_and_counter() {
    let r = MemoryRenderer::default();
    assert!(r.has_canvas());
    assert_eq!(r.counter_text(), Some(""));
    assert!(r.tiles().is_empty());
}

#[test]
fn create_tile_appends_in_order() {
    let mut r = MemoryRenderer::new();
    r.create_tile(&tile(2, "b", 0.0, 0.0));
    r.create_tile(&tile(1, "a", 0.0, 0.0));
    assert_eq!(r.dom_ids(), vec![TileDomId::from_tile(2), TileDomId::from_tile(1)]);
    assert_eq!(r.created(), 2);
}

#[test]
fn create_tile_without_canvas_is_dropped() {
    let mut r = MemoryRenderer::without_canvas();
    r.create_tile(&tile(1, "a", 0.0, 0.0));
    assert!(r.tiles().is_empty());
}

#[test]
fn remove_tile_counts_removals() {
    let mut r = MemoryRenderer::new();
    r.create_tile(&tile(1, "a", 0.0, 0.0));
    r.remove_tile(&TileDomId::from_tile(1));
    r.remove_tile(&TileDomId::from_tile(1));
    assert!(!r.contains_tile(&TileDomId::from_tile(1)));
    assert_eq!(r.removed(), 1);
}

#[test]
fn animate_then_clear_transition() {
    let mut r = MemoryRenderer::new();
    let id = TileDomId::from_tile(1);
    r.create_tile(&tile(1, "a", 0.0, 0.0));
    r.animate_position(&id, Point::new(5.0, 6.0), &transition());
    assert_eq!(r.tile(&id).map(|t| t.transition), Some(Some(transition())));
    assert_eq!(r.tile(&id).map(|t| t.position), Some(Point::new(5.0, 6.0)));

    r.clear_transition(&id);
    assert_eq!(r.tile(&id).map(|t| t.transition), Some(None));
}

#[test]
fn set_counter_without_element_is_a_no_op() {
    let mut r = MemoryRenderer::without_counter();
    r.set_counter(4);
    assert_eq!(r.counter_text(), None);
    assert_eq!(r.counter_writes(), 0);
}

#[test]
fn set_counter_writes_decimal_text() {
    let mut r = MemoryRenderer::new();
    r.set_counter(12);
    assert_eq!(r.counter_text(), Some("12"));
    assert_eq!(r.counter_writes(), 1);
}
