use std::fmt;

use kurbo::PathEl;

use crate::foundation::core::Point;

/// One drawing instruction of an outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Segment {
    /// Start a new subpath at the point.
    MoveTo(Point),
    /// Straight line to the point.
    LineTo(Point),
    /// Cubic Bézier with two control points and an end point.
    CubicTo(Point, Point, Point),
    /// Close the current subpath.
    Close,
}

/// Payload-free tag of a [`Segment`], used for compatibility checks and error messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// [`Segment::MoveTo`].
    MoveTo,
    /// [`Segment::LineTo`].
    LineTo,
    /// [`Segment::CubicTo`].
    CubicTo,
    /// [`Segment::Close`].
    Close,
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::MoveTo => "move-to",
            Self::LineTo => "line-to",
            Self::CubicTo => "cubic-to",
            Self::Close => "close",
        };
        f.write_str(s)
    }
}

impl Segment {
    /// Tag of this segment.
    pub fn kind(&self) -> SegmentKind {
        match self {
            Self::MoveTo(_) => SegmentKind::MoveTo,
            Self::LineTo(_) => SegmentKind::LineTo,
            Self::CubicTo(..) => SegmentKind::CubicTo,
            Self::Close => SegmentKind::Close,
        }
    }

    /// Control and end points, in drawing order.
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let (pts, n) = match *self {
            Self::MoveTo(p) | Self::LineTo(p) => ([p, Point::ZERO, Point::ZERO], 1),
            Self::CubicTo(c1, c2, p) => ([c1, c2, p], 3),
            Self::Close => ([Point::ZERO; 3], 0),
        };
        pts.into_iter().take(n)
    }

    /// Blend two segments of the same kind coordinate-wise.
    ///
    /// `t` is not clamped; values above 1 extrapolate past `other`. Returns `None` when the
    /// kinds differ.
    pub fn lerp(&self, other: &Segment, t: f64) -> Option<Segment> {
        let seg = match (self, other) {
            (Self::MoveTo(a), Self::MoveTo(b)) => Self::MoveTo(a.lerp(*b, t)),
            (Self::LineTo(a), Self::LineTo(b)) => Self::LineTo(a.lerp(*b, t)),
            (Self::CubicTo(a1, a2, a3), Self::CubicTo(b1, b2, b3)) => {
                Self::CubicTo(a1.lerp(*b1, t), a2.lerp(*b2, t), a3.lerp(*b3, t))
            }
            (Self::Close, Self::Close) => Self::Close,
            _ => return None,
        };
        Some(seg)
    }

    pub(crate) fn to_path_el(self) -> PathEl {
        match self {
            Self::MoveTo(p) => PathEl::MoveTo(p),
            Self::LineTo(p) => PathEl::LineTo(p),
            Self::CubicTo(c1, c2, p) => PathEl::CurveTo(c1, c2, p),
            Self::Close => PathEl::ClosePath,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/segment.rs"]
mod tests;
