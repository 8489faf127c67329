use super::*;
use kurbo::PathEl;

fn tri() -> PathModel {
    PathModel::builder()
        .move_to(0.0, 0.0)
        .line_to(10.0, 0.0)
        .curve_to(12.0, -3.0, 14.0, 8.0, 10.0, 10.0)
        .close()
        .build()
}

#[test]
fn bounds_include_curve_control_points() {
    let b = tri().bounds();
    assert_eq!(b.x0, 0.0);
    assert_eq!(b.x1, 14.0);
    assert_eq!(b.y0, -3.0);
    assert_eq!(b.y1, 10.0);
}

#[test]
fn empty_path_has_zero_bounds() {
    let p = PathModel::new(Vec::new());
    assert!(p.is_empty());
    assert_eq!(p.bounds(), Rect::ZERO);
}

#[test]
fn compatible_with_itself() {
    let p = tri();
    p.check_compatible(&p.clone()).unwrap();
}

#[test]
fn tag_mismatch_names_first_index() {
    let a = tri();
    let b = PathModel::builder()
        .move_to(0.0, 0.0)
        .line_to(1.0, 0.0)
        .line_to(1.0, 1.0)
        .close()
        .build();
    let err = a.check_compatible(&b).unwrap_err();
    assert!(matches!(err, NotchError::Configuration(_)));
    let msg = err.to_string();
    assert!(msg.contains("index 2"), "{msg}");
    assert!(msg.contains("cubic-to vs line-to"), "{msg}");
}

#[test]
fn length_mismatch_reports_end() {
    let a = tri();
    let b = PathModel::builder()
        .move_to(0.0, 0.0)
        .line_to(10.0, 0.0)
        .build();
    let msg = a.check_compatible(&b).unwrap_err().to_string();
    assert!(msg.contains("index 2"), "{msg}");
    assert!(msg.contains("vs end"), "{msg}");
}

#[test]
fn bez_path_mirrors_segments() {
    let bez = tri().to_bez_path();
    let els = bez.elements();
    assert_eq!(els.len(), 4);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(0.0, 0.0)));
    assert!(matches!(els[2], PathEl::CurveTo(..)));
    assert_eq!(els[3], PathEl::ClosePath);
}
