use std::sync::Arc;

use crate::foundation::core::{BezPath, Point, Rect};
use crate::foundation::error::{NotchError, NotchResult};
use crate::path::segment::{Segment, SegmentKind};

/// Immutable vector outline: an ordered sequence of [`Segment`]s.
///
/// Clones share the underlying segment buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PathModel {
    segments: Arc<[Segment]>,
}

impl PathModel {
    /// Wrap an already-authored segment list.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self {
            segments: segments.into(),
        }
    }

    /// Start authoring an outline segment by segment.
    pub fn builder() -> PathBuilder {
        PathBuilder::default()
    }

    /// Segments in drawing order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments, `Close` included.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// True when the outline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Axis-aligned box over every control and end point.
    ///
    /// Curve control points are included, so the box is conservative rather than tight. An
    /// empty outline yields `Rect::ZERO`.
    pub fn bounds(&self) -> Rect {
        let mut pts = self.segments.iter().flat_map(Segment::points);
        let Some(first) = pts.next() else {
            return Rect::ZERO;
        };
        pts.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
    }

    /// Verify that `other` can be blended with `self` index by index.
    ///
    /// The error names the first index where lengths or tags disagree; a missing segment is
    /// reported as `end`.
    pub fn check_compatible(&self, other: &PathModel) -> NotchResult<()> {
        let n = self.len().max(other.len());
        for i in 0..n {
            let a = self.segments.get(i).map(Segment::kind);
            let b = other.segments.get(i).map(Segment::kind);
            if a != b {
                return Err(NotchError::configuration(format!(
                    "outlines are not interpolation-compatible at segment index {i}: {} vs {}",
                    kind_label(a),
                    kind_label(b)
                )));
            }
        }
        Ok(())
    }

    /// Convert to a `kurbo` path for rasterization.
    pub fn to_bez_path(&self) -> BezPath {
        BezPath::from_vec(self.segments.iter().map(|s| s.to_path_el()).collect())
    }
}

fn kind_label(kind: Option<SegmentKind>) -> String {
    match kind {
        Some(k) => k.to_string(),
        None => "end".to_owned(),
    }
}

/// Incremental builder for [`PathModel`].
#[derive(Clone, Debug, Default)]
pub struct PathBuilder {
    segments: Vec<Segment>,
}

impl PathBuilder {
    /// Begin a subpath.
    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::MoveTo(Point::new(x, y)));
        self
    }

    /// Straight line to `(x, y)`.
    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        self.segments.push(Segment::LineTo(Point::new(x, y)));
        self
    }

    /// Cubic Bézier through two control points to `(x, y)`.
    pub fn curve_to(mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> Self {
        self.segments.push(Segment::CubicTo(
            Point::new(c1x, c1y),
            Point::new(c2x, c2y),
            Point::new(x, y),
        ));
        self
    }

    /// Close the current subpath.
    pub fn close(mut self) -> Self {
        self.segments.push(Segment::Close);
        self
    }

    /// Freeze into an immutable outline.
    pub fn build(self) -> PathModel {
        PathModel::new(self.segments)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/model.rs"]
mod tests;
