use super::*;
use crate::path::segment::Segment;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn literal_outlines_align_one_to_one() {
    let shapes = NotchShapes::load().unwrap();
    assert_eq!(shapes.collapsed.len(), 12);
    assert_eq!(shapes.expanded.len(), 12);
    assert!(matches!(shapes.collapsed.segments()[0], Segment::MoveTo(_)));
    assert_eq!(shapes.collapsed.segments()[11], Segment::Close);
}

#[test]
fn collapsed_bounds_match_literal_extent() {
    let b = collapsed_shape().bounds();
    assert!(approx(b.x0, 0.786133));
    assert!(approx(b.x1, 221.215));
    assert!(approx(b.y0, 0.0));
    assert!(approx(b.y1, 31.4896));
}

#[test]
fn expanded_bounds_match_literal_extent() {
    let b = expanded_shape().bounds();
    assert!(approx(b.x0, 2.068));
    assert!(approx(b.x1, 583.932));
    assert!(approx(b.y1, 84.942));
}

#[test]
fn mismatched_pair_fails_at_startup() {
    let broken = PathModel::builder().move_to(0.0, 0.0).close().build();
    assert!(NotchShapes::from_pair(collapsed_shape(), broken).is_err());
}
