use crate::animation::ease::Ease;
use crate::animation::interpolate::interpolate;
use crate::foundation::core::Millis;
use crate::foundation::error::{NotchError, NotchResult};
use crate::path::model::PathModel;

/// Fixed timing of a morph run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MorphTiming {
    /// Length of one run.
    pub duration_ms: u64,
    /// Interval at which the host should call [`MorphAnimator::advance`].
    pub tick_interval_ms: u64,
    /// Curve applied to linear progress.
    pub ease: Ease,
}

impl Default for MorphTiming {
    fn default() -> Self {
        Self {
            duration_ms: 500,
            tick_interval_ms: 5,
            ease: Ease::OutBack,
        }
    }
}

impl MorphTiming {
    /// Reject timings that would divide by zero or never tick.
    pub fn validate(self) -> NotchResult<Self> {
        if self.duration_ms == 0 {
            return Err(NotchError::configuration("morph duration must be > 0 ms"));
        }
        if self.tick_interval_ms == 0 {
            return Err(NotchError::configuration("tick interval must be > 0 ms"));
        }
        Ok(self)
    }

    /// Linear progress for `elapsed_ms`, clamped to 1.
    pub fn raw_progress(self, elapsed_ms: u64) -> f64 {
        (elapsed_ms as f64 / self.duration_ms as f64).min(1.0)
    }
}

/// Animation state: either at rest or blending `from` toward `to`.
#[derive(Clone, Debug, PartialEq)]
pub enum MorphState {
    /// No run in flight.
    Idle,
    /// A run started at `started_at`.
    Running {
        /// Outline at progress 0.
        from: PathModel,
        /// Outline at progress 1.
        to: PathModel,
        /// Host time when the run began.
        started_at: Millis,
    },
}

/// Result of evaluating a running state at some instant.
#[derive(Clone, Debug)]
pub struct MorphFrame {
    /// Blended outline for this instant.
    pub path: PathModel,
    /// Linear progress in [0, 1].
    pub raw_progress: f64,
    /// Whether this frame ends the run.
    pub finished: bool,
}

impl MorphState {
    /// Evaluate the state at `now` without mutating anything.
    ///
    /// Returns `None` when idle.
    pub fn frame_at(&self, now: Millis, timing: MorphTiming) -> NotchResult<Option<MorphFrame>> {
        let Self::Running {
            from,
            to,
            started_at,
        } = self
        else {
            return Ok(None);
        };
        let raw = timing.raw_progress(now.saturating_since(*started_at));
        let eased = timing.ease.apply(raw);
        let path = interpolate(from, to, eased)?;
        Ok(Some(MorphFrame {
            path,
            raw_progress: raw,
            finished: raw >= 1.0,
        }))
    }

    /// Pure transition: the state after `now` and the frame it produced.
    pub fn advance(
        self,
        now: Millis,
        timing: MorphTiming,
    ) -> NotchResult<(Self, Option<MorphFrame>)> {
        let frame = self.frame_at(now, timing)?;
        let next = match &frame {
            Some(f) if f.finished => Self::Idle,
            _ => self,
        };
        Ok((next, frame))
    }
}

/// What a tick changed, so the host knows whether to repaint or stop its scheduler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The current outline changed.
    pub repaint: bool,
    /// The run reached progress 1 on this tick.
    pub finished: bool,
}

/// Stateful morph engine: owns the run state and the latest blended outline.
#[derive(Clone, Debug)]
pub struct MorphAnimator {
    timing: MorphTiming,
    state: MorphState,
    progress: f64,
    current: PathModel,
}

impl MorphAnimator {
    /// Idle animator showing `initial`.
    pub fn new(initial: PathModel, timing: MorphTiming) -> NotchResult<Self> {
        Ok(Self {
            timing: timing.validate()?,
            state: MorphState::Idle,
            progress: 0.0,
            current: initial,
        })
    }

    /// Begin a run from `from` to `to` at `now`.
    ///
    /// Any in-flight run is dropped; the new run starts at progress 0 and the current outline
    /// snaps to `from`.
    #[tracing::instrument(level = "debug", skip_all, fields(now = now.0))]
    pub fn start(&mut self, from: PathModel, to: PathModel, now: Millis) -> NotchResult<()> {
        from.check_compatible(&to)?;
        if self.is_running() {
            tracing::debug!(progress = self.progress, "cancelling in-flight morph");
        }
        self.progress = 0.0;
        self.current = from.clone();
        self.state = MorphState::Running {
            from,
            to,
            started_at: now,
        };
        Ok(())
    }

    /// Recompute progress and the current outline for `now`.
    ///
    /// Idle animators ignore ticks.
    pub fn advance(&mut self, now: Millis) -> NotchResult<TickOutcome> {
        // Cloning the state only bumps the outline refcounts.
        let (next, frame) = self.state.clone().advance(now, self.timing)?;
        self.state = next;
        let Some(frame) = frame else {
            return Ok(TickOutcome::default());
        };

        tracing::trace!(progress = frame.raw_progress, "morph tick");
        self.progress = frame.raw_progress;
        self.current = frame.path;
        if frame.finished {
            tracing::debug!("morph finished");
        }
        Ok(TickOutcome {
            repaint: true,
            finished: frame.finished,
        })
    }

    /// Drop the in-flight run, leaving the current outline where it is.
    pub fn stop(&mut self) {
        if self.is_running() {
            tracing::debug!(progress = self.progress, "morph stopped");
        }
        self.state = MorphState::Idle;
    }

    /// Latest blended outline.
    pub fn current_path(&self) -> &PathModel {
        &self.current
    }

    /// Linear progress of the latest tick.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Whether a run is in flight.
    pub fn is_running(&self) -> bool {
        matches!(self.state, MorphState::Running { .. })
    }

    /// Current run state.
    pub fn state(&self) -> &MorphState {
        &self.state
    }

    /// Timing this animator was built with.
    pub fn timing(&self) -> MorphTiming {
        self.timing
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/morph.rs"]
mod tests;
