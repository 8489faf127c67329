use crate::foundation::core::{Affine, BezPath, Rect, Vec2};
use crate::foundation::error::{NotchError, NotchResult};
use crate::path::model::PathModel;
use crate::render::surface::FrameRGBA;

/// Horizontal translation that centers `bounds` in a surface `surface_width` pixels wide.
pub fn center_offset_x(surface_width: f64, bounds: Rect) -> f64 {
    (surface_width - bounds.width()) / 2.0 - bounds.x0
}

/// CPU rasterizer powered by `vello_cpu`.
///
/// Fills an outline with a solid color, horizontally centered and top-aligned. The render
/// context and pixmap are kept between frames and rebuilt only when the surface size changes.
pub struct CpuRenderer {
    fill_rgba: [u8; 4],
    ctx: Option<vello_cpu::RenderContext>,
    target: Option<CpuTarget>,
}

struct CpuTarget {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl CpuRenderer {
    /// Renderer filling with the straight-alpha color `fill_rgba`.
    pub fn new(fill_rgba: [u8; 4]) -> Self {
        Self {
            fill_rgba,
            ctx: None,
            target: None,
        }
    }

    /// Clear `surface` and fill `path` into it.
    pub fn render(&mut self, path: &PathModel, surface: &mut FrameRGBA) -> NotchResult<()> {
        let canvas = surface.validate()?;
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| NotchError::render_surface("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| NotchError::render_surface("surface height exceeds u16"))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == width && ctx.height() == height => ctx,
            _ => vello_cpu::RenderContext::new(width, height),
        };
        ctx.reset();

        let offset_x = center_offset_x(f64::from(canvas.width), path.bounds());
        let [r, g, b, a] = self.fill_rgba;
        ctx.set_transform(affine_to_cpu(Affine::translate(Vec2::new(offset_x, 0.0))));
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
        ctx.fill_path(&bezpath_to_cpu(&path.to_bez_path()));
        ctx.flush();

        let mut target = match self.target.take() {
            Some(t) if t.width == width && t.height == height => t,
            _ => CpuTarget {
                width,
                height,
                pixmap: vello_cpu::Pixmap::new(width, height),
            },
        };
        clear_pixmap_to_transparent(&mut target.pixmap);
        ctx.render_to_pixmap(&mut target.pixmap);

        let src = target.pixmap.data_as_u8_slice();
        if src.len() != surface.data.len() {
            return Err(NotchError::render_surface("pixmap byte len mismatch"));
        }
        surface.data.copy_from_slice(src);
        surface.premultiplied = true;

        self.ctx = Some(ctx);
        self.target = Some(target);
        Ok(())
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
