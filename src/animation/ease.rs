/// Timing curves mapping linear progress to eased progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Identity.
    Linear,
    /// Decelerating cubic, stays within [0, 1].
    OutCubic,
    /// Decelerating with overshoot: `1 - (1-t)^3 (1-3t)`, peaking at 1.0625 for `t = 0.5`.
    #[default]
    OutBack,
}

impl Ease {
    /// Peak output value of [`Ease::OutBack`].
    pub const OUT_BACK_PEAK: f64 = 1.0625;

    /// Input is clamped to [0, 1]; output is not, so overshooting curves keep their bounce.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::OutBack => 1.0 - (1.0 - t).powi(3) * (1.0 - 3.0 * t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
