//! The two hand-authored notch outlines.
//!
//! Both outlines share one segment-tag sequence (move, then ten line/cubic segments ending
//! in a line back to the start, then close) so they can be blended index by index.

use crate::foundation::error::NotchResult;
use crate::path::model::PathModel;

/// Small rounded "pill" shown while the pointer is away.
pub fn collapsed_shape() -> PathModel {
    PathModel::builder()
        .move_to(0.786133, 0.0)
        .line_to(13.3834, 0.0)
        .curve_to(15.992, 0.0, 18.1068, 2.11476, 18.1068, 4.72344)
        .line_to(18.1068, 22.0427)
        .curve_to(18.1068, 27.2601, 22.3363, 31.4896, 27.5537, 31.4896)
        .line_to(196.023, 31.4896)
        .curve_to(200.371, 31.4896, 203.895, 27.965, 203.895, 23.6172)
        .line_to(203.895, 4.72344)
        .curve_to(203.895, 2.11476, 206.01, 0.0, 208.619, 0.0)
        .line_to(221.215, 0.0)
        .line_to(0.786133, 0.0)
        .close()
        .build()
}

/// Larger rounded "pill" shown while the pointer hovers.
pub fn expanded_shape() -> PathModel {
    PathModel::builder()
        .move_to(2.068, 0.0)
        .line_to(35.285, 0.0)
        .curve_to(42.137, 0.0, 47.699, 6.562, 47.699, 13.413)
        .line_to(47.699, 57.267)
        .curve_to(47.699, 72.819, 58.872, 84.942, 74.424, 84.942)
        .line_to(528.385, 84.942)
        .curve_to(540.083, 84.942, 549.364, 75.661, 549.364, 63.963)
        .line_to(549.364, 13.413)
        .curve_to(549.364, 6.562, 554.926, 0.0, 561.778, 0.0)
        .line_to(583.932, 0.0)
        .line_to(2.068, 0.0)
        .close()
        .build()
}

/// Both endpoint outlines, checked for compatibility once.
#[derive(Clone, Debug)]
pub struct NotchShapes {
    /// Resting outline.
    pub collapsed: PathModel,
    /// Hover outline.
    pub expanded: PathModel,
}

impl NotchShapes {
    /// Build the literal outlines and fail fast if they cannot be blended.
    pub fn load() -> NotchResult<Self> {
        Self::from_pair(collapsed_shape(), expanded_shape())
    }

    /// Pair arbitrary outlines, applying the same startup check as [`NotchShapes::load`].
    pub fn from_pair(collapsed: PathModel, expanded: PathModel) -> NotchResult<Self> {
        collapsed.check_compatible(&expanded)?;
        tracing::debug!(segments = collapsed.len(), "notch outlines validated");
        Ok(Self {
            collapsed,
            expanded,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/shapes.rs"]
mod tests;
