use super::*;
use crate::foundation::core::Canvas;
use crate::path::shapes::collapsed_shape;

fn default_surface() -> FrameRGBA {
    FrameRGBA::new(Canvas {
        width: 621,
        height: 91,
    })
    .unwrap()
}

fn opaque_span(surface: &FrameRGBA, y: u32) -> Option<(u32, u32)> {
    let cols: Vec<u32> = (0..surface.width)
        .filter(|&x| surface.pixel(x, y).is_some_and(|px| px[3] == 255))
        .collect();
    Some((*cols.first()?, *cols.last()?))
}

#[test]
fn offset_centers_bounds() {
    let bounds = Rect::new(10.0, 0.0, 110.0, 20.0);
    let off = center_offset_x(300.0, bounds);
    assert_eq!(off, 90.0);
    assert_eq!(bounds.x0 + off, 300.0 - (bounds.x1 + off));
}

#[test]
fn collapsed_shape_is_centered_and_top_aligned() {
    let mut surface = default_surface();
    let mut renderer = CpuRenderer::new([0, 0, 0, 255]);
    renderer.render(&collapsed_shape(), &mut surface).unwrap();

    assert_eq!(surface.pixel(310, 10), Some([0, 0, 0, 255]));
    assert_eq!(surface.pixel(0, 0).map(|px| px[3]), Some(0));
    assert_eq!(surface.pixel(310, 60).map(|px| px[3]), Some(0));

    let (left, right) = opaque_span(&surface, 10).unwrap();
    let center = f64::from(left + right) / 2.0;
    assert!((center - 310.0).abs() <= 1.5, "span {left}..{right}");
}

#[test]
fn rerender_clears_previous_frame() {
    let mut surface = default_surface();
    let mut renderer = CpuRenderer::new([0, 0, 0, 255]);
    let wide = PathModel::builder()
        .move_to(0.0, 0.0)
        .line_to(600.0, 0.0)
        .line_to(600.0, 80.0)
        .line_to(0.0, 80.0)
        .close()
        .build();
    renderer.render(&wide, &mut surface).unwrap();
    assert_eq!(surface.pixel(20, 70).map(|px| px[3]), Some(255));

    renderer.render(&collapsed_shape(), &mut surface).unwrap();
    assert_eq!(surface.pixel(20, 70).map(|px| px[3]), Some(0));
}

#[test]
fn fill_color_is_premultiplied() {
    let mut surface = default_surface();
    let mut renderer = CpuRenderer::new([255, 0, 0, 255]);
    renderer.render(&collapsed_shape(), &mut surface).unwrap();
    assert_eq!(surface.pixel(310, 10), Some([255, 0, 0, 255]));
    assert!(surface.premultiplied);
}

#[test]
fn unusable_surfaces_are_reported() {
    let mut renderer = CpuRenderer::new([0, 0, 0, 255]);
    let mut empty = FrameRGBA {
        width: 0,
        height: 0,
        data: Vec::new(),
        premultiplied: true,
    };
    assert!(matches!(
        renderer.render(&collapsed_shape(), &mut empty),
        Err(NotchError::RenderSurface(_))
    ));

    let mut short = FrameRGBA {
        width: 4,
        height: 4,
        data: vec![0; 8],
        premultiplied: true,
    };
    assert!(matches!(
        renderer.render(&collapsed_shape(), &mut short),
        Err(NotchError::RenderSurface(_))
    ));
}
