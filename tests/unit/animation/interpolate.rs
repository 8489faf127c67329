use super::*;
use crate::foundation::core::Point;
use crate::path::shapes::{collapsed_shape, expanded_shape};

fn assert_paths_close(a: &PathModel, b: &PathModel) {
    assert_eq!(a.len(), b.len());
    for (sa, sb) in a.segments().iter().zip(b.segments()) {
        assert_eq!(sa.kind(), sb.kind());
        for (pa, pb) in sa.points().zip(sb.points()) {
            assert!((pa.x - pb.x).abs() < 1e-9, "{pa:?} vs {pb:?}");
            assert!((pa.y - pb.y).abs() < 1e-9, "{pa:?} vs {pb:?}");
        }
    }
}

#[test]
fn endpoints_reproduce_inputs() {
    let from = collapsed_shape();
    let to = expanded_shape();
    assert_paths_close(&interpolate(&from, &to, 0.0).unwrap(), &from);
    assert_paths_close(&interpolate(&from, &to, 1.0).unwrap(), &to);
}

#[test]
fn midpoint_is_arithmetic_mean() {
    let mid = interpolate(&collapsed_shape(), &expanded_shape(), 0.5).unwrap();
    let Segment::MoveTo(p) = mid.segments()[0] else {
        panic!("expected move-to, got {:?}", mid.segments()[0]);
    };
    assert!((p.x - (0.786133 + 2.068) / 2.0).abs() < 1e-9);
    assert_eq!(p.y, 0.0);

    let Segment::CubicTo(c1, c2, end) = mid.segments()[2] else {
        panic!("expected cubic-to, got {:?}", mid.segments()[2]);
    };
    assert!((c1.x - (15.992 + 42.137) / 2.0).abs() < 1e-9);
    assert_eq!(c1.y, 0.0);
    assert!((c2.x - (18.1068 + 47.699) / 2.0).abs() < 1e-9);
    assert!((c2.y - (2.11476 + 6.562) / 2.0).abs() < 1e-9);
    assert!((end.y - (4.72344 + 13.413) / 2.0).abs() < 1e-9);
}

#[test]
fn overshoot_extrapolates_past_target() {
    let out = interpolate(&collapsed_shape(), &expanded_shape(), 1.0625).unwrap();
    let b = out.bounds();
    assert!(b.x1 > 583.932);
    assert!(b.y1 > 84.942);
}

#[test]
fn incompatible_inputs_are_configuration_errors() {
    let short = PathModel::builder()
        .move_to(0.0, 0.0)
        .line_to(1.0, 1.0)
        .close()
        .build();
    let err = interpolate(&collapsed_shape(), &short, 0.5).unwrap_err();
    assert!(matches!(err, NotchError::Configuration(_)));
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn dangling_draw_segments_are_dropped() {
    let a = PathModel::builder()
        .line_to(1.0, 1.0)
        .move_to(0.0, 0.0)
        .line_to(2.0, 0.0)
        .close()
        .line_to(5.0, 5.0)
        .build();
    let b = PathModel::builder()
        .line_to(3.0, 3.0)
        .move_to(2.0, 2.0)
        .line_to(4.0, 2.0)
        .close()
        .line_to(7.0, 7.0)
        .build();
    let out = interpolate(&a, &b, 0.5).unwrap();
    assert_eq!(
        out.segments(),
        &[
            Segment::MoveTo(Point::new(1.0, 1.0)),
            Segment::LineTo(Point::new(3.0, 1.0)),
            Segment::Close,
        ]
    );
}

#[test]
fn inputs_are_left_untouched() {
    let from = collapsed_shape();
    let to = expanded_shape();
    let _ = interpolate(&from, &to, 0.3).unwrap();
    assert_eq!(from, collapsed_shape());
    assert_eq!(to, expanded_shape());
}
