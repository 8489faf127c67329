use crate::foundation::core::Millis;
use crate::foundation::error::{NotchError, NotchResult};
use crate::render::surface::FrameRGBA;
use crate::widget::config::NotchConfig;
use crate::widget::host::HeadlessHost;
use crate::widget::notch::NotchWidget;

/// A scripted hover session replayed on a virtual clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoverScript {
    /// When the pointer enters, if ever.
    pub enter_at: Option<Millis>,
    /// When the pointer leaves, if ever.
    pub leave_at: Option<Millis>,
    /// End of the session (inclusive).
    pub until: Millis,
}

/// Counters from a finished playback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlaybackStats {
    /// Ticks delivered to the widget.
    pub ticks: u64,
    /// Frames painted.
    pub frames: u64,
}

/// Replay `script` against a headless widget, painting every requested repaint.
///
/// The clock advances by the configured tick interval; pointer events fire at the first step at
/// or after their timestamp, using their own timestamp. A tick is not delivered on the step
/// that installed the tick source. Idle stretches are skipped, and playback ends early once no
/// event is pending and the tick source is stopped, or when the clock would pass `u64::MAX`.
pub fn play(
    config: &NotchConfig,
    script: HoverScript,
    mut on_frame: impl FnMut(Millis, &FrameRGBA) -> NotchResult<()>,
) -> NotchResult<PlaybackStats> {
    config.validate()?;
    if let (Some(enter), Some(leave)) = (script.enter_at, script.leave_at)
        && leave < enter
    {
        return Err(NotchError::configuration(
            "hover script leaves before it enters",
        ));
    }

    let mut widget = NotchWidget::new(config, HeadlessHost::default())?;
    let mut surface = FrameRGBA::new(config.surface)?;
    let mut stats = PlaybackStats::default();
    let mut pending_enter = script.enter_at;
    let mut pending_leave = script.leave_at;

    widget.render(&mut surface)?;
    on_frame(Millis(0), &surface)?;
    stats.frames += 1;

    let step = config.tick_interval_ms;
    let mut now = Millis(0);
    while now <= script.until {
        let mut started = false;
        if let Some(at) = pending_enter.filter(|at| *at <= now) {
            widget.on_pointer_enter(at)?;
            pending_enter = None;
            started = true;
        }
        if let Some(at) = pending_leave.filter(|at| *at <= now) {
            widget.on_pointer_leave(at)?;
            pending_leave = None;
            started = true;
        }
        if !started && widget.host().is_ticking() {
            widget.on_tick(now)?;
            stats.ticks += 1;
        }
        if widget.host_mut().take_repaint() {
            widget.render(&mut surface)?;
            on_frame(now, &surface)?;
            stats.frames += 1;
        }
        let next = if widget.host().is_ticking() {
            now.0.checked_add(step)
        } else {
            // Nothing changes until the next pointer event, so jump to its step.
            match pending_enter.or(pending_leave) {
                Some(at) => at.0.div_ceil(step).checked_mul(step),
                None => break,
            }
        };
        match next {
            Some(next) => now = Millis(next),
            None => break,
        }
    }

    tracing::debug!(ticks = stats.ticks, frames = stats.frames, "playback finished");
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/widget/playback.rs"]
mod tests;
