use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::animation::ease::Ease;
use crate::animation::morph::MorphTiming;
use crate::foundation::core::Canvas;
use crate::foundation::error::{NotchError, NotchResult};

/// Unscaled pixel extent of the expanded outline.
const EXPANDED_EXTENT: (f64, f64) = (584.0, 85.0);

/// Default surface: the expanded extent grown by the ease-out-back peak so the overshoot frame
/// is never clipped.
pub fn default_surface() -> Canvas {
    let (w, h) = EXPANDED_EXTENT;
    Canvas {
        width: (w * Ease::OUT_BACK_PEAK).ceil() as u32,
        height: (h * Ease::OUT_BACK_PEAK).ceil() as u32,
    }
}

/// Runtime settings for a notch widget.
///
/// Every field is optional in JSON; missing ones take their defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotchConfig {
    /// Length of one morph run.
    pub duration_ms: u64,
    /// Scheduler period while a run is in flight.
    pub tick_interval_ms: u64,
    /// Timing curve.
    pub ease: Ease,
    /// Surface size in pixels.
    pub surface: Canvas,
    /// Straight-alpha fill color.
    pub fill_rgba: [u8; 4],
}

impl Default for NotchConfig {
    fn default() -> Self {
        let timing = MorphTiming::default();
        Self {
            duration_ms: timing.duration_ms,
            tick_interval_ms: timing.tick_interval_ms,
            ease: timing.ease,
            surface: default_surface(),
            fill_rgba: [0, 0, 0, 255],
        }
    }
}

impl NotchConfig {
    /// Parse a config from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> NotchResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| NotchError::serde(format!("parse notch config JSON: {e}")))
    }

    /// Parse a config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> NotchResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            NotchError::configuration(format!("open config JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Apply `NOTCH_DURATION_MS` / `NOTCH_TICK_MS` from the process environment.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup. Unparsable or zero values are ignored.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| -> Option<u64> {
            let raw = lookup(key)?;
            match raw.trim().parse::<u64>() {
                Ok(n) if n > 0 => Some(n),
                _ => {
                    tracing::warn!(key, value = %raw, "ignoring invalid override");
                    None
                }
            }
        };
        if let Some(ms) = read("NOTCH_DURATION_MS") {
            self.duration_ms = ms;
        }
        if let Some(ms) = read("NOTCH_TICK_MS") {
            self.tick_interval_ms = ms;
        }
        self
    }

    /// Timing portion of the config.
    pub fn timing(&self) -> MorphTiming {
        MorphTiming {
            duration_ms: self.duration_ms,
            tick_interval_ms: self.tick_interval_ms,
            ease: self.ease,
        }
    }

    /// Reject settings the widget cannot run with.
    pub fn validate(&self) -> NotchResult<()> {
        self.timing().validate()?;
        self.surface.validate()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/config.rs"]
mod tests;
