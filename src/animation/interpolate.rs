use crate::foundation::error::{NotchError, NotchResult};
use crate::path::model::PathModel;
use crate::path::segment::Segment;

/// Blend two compatible outlines at `t`.
///
/// `t` is used as given: values outside [0, 1] extrapolate. Drawing segments that appear
/// before any `MoveTo` (or after a `Close` without a new `MoveTo`) are dropped.
pub fn interpolate(from: &PathModel, to: &PathModel, t: f64) -> NotchResult<PathModel> {
    from.check_compatible(to)?;

    let mut out = Vec::with_capacity(from.len());
    let mut open = false;
    for (i, (a, b)) in from.segments().iter().zip(to.segments()).enumerate() {
        let seg = a.lerp(b, t).ok_or_else(|| {
            NotchError::configuration(format!(
                "segment index {i} cannot blend {} with {}",
                a.kind(),
                b.kind()
            ))
        })?;
        match seg {
            Segment::MoveTo(_) => {
                open = true;
                out.push(seg);
            }
            Segment::LineTo(_) | Segment::CubicTo(..) => {
                if open {
                    out.push(seg);
                }
            }
            Segment::Close => {
                out.push(seg);
                open = false;
            }
        }
    }
    Ok(PathModel::new(out))
}

#[cfg(test)]
#[path = "../../tests/unit/animation/interpolate.rs"]
mod tests;
