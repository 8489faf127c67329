use crate::foundation::error::{NotchError, NotchResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Monotonic host timestamp in milliseconds.
///
/// The engine never reads a clock itself; hosts convert whatever time source they have into
/// `Millis` and pass it in.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Milliseconds elapsed since `earlier`, saturating at zero for out-of-order timestamps.
    pub fn saturating_since(self, earlier: Millis) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    /// Timestamp `ms` milliseconds later.
    pub fn add_ms(self, ms: u64) -> Self {
        Self(self.0.saturating_add(ms))
    }
}

/// Pixel size of a drawable surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Reject sizes that no raster surface can hold.
    pub fn validate(self) -> NotchResult<Self> {
        if self.width == 0 || self.height == 0 {
            return Err(NotchError::render_surface(format!(
                "surface must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(NotchError::render_surface(format!(
                "surface {}x{} exceeds {}px per side",
                self.width,
                self.height,
                u16::MAX
            )));
        }
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
