use crate::animation::morph::{MorphAnimator, TickOutcome};
use crate::foundation::core::Millis;
use crate::foundation::error::NotchResult;
use crate::path::model::PathModel;
use crate::path::shapes::NotchShapes;
use crate::render::cpu::CpuRenderer;
use crate::render::surface::FrameRGBA;
use crate::widget::config::NotchConfig;
use crate::widget::host::HostWindow;

/// A hover-reactive notch bound to a host window.
///
/// Pointer-enter morphs collapsed → expanded, pointer-leave morphs expanded → collapsed. A
/// leave during an enter run restarts from the expanded outline at progress 0; it does not
/// reverse from the on-screen state.
pub struct NotchWidget<H: HostWindow> {
    shapes: NotchShapes,
    animator: MorphAnimator,
    renderer: CpuRenderer,
    tick_interval_ms: u64,
    host: H,
}

impl<H: HostWindow> NotchWidget<H> {
    /// Widget using the literal notch outlines.
    pub fn new(config: &NotchConfig, host: H) -> NotchResult<Self> {
        Self::with_shapes(NotchShapes::load()?, config, host)
    }

    /// Widget using custom, already-validated outlines.
    pub fn with_shapes(shapes: NotchShapes, config: &NotchConfig, host: H) -> NotchResult<Self> {
        config.validate()?;
        let animator = MorphAnimator::new(shapes.collapsed.clone(), config.timing())?;
        Ok(Self {
            shapes,
            animator,
            renderer: CpuRenderer::new(config.fill_rgba),
            tick_interval_ms: config.tick_interval_ms,
            host,
        })
    }

    /// Pointer entered the notch area.
    pub fn on_pointer_enter(&mut self, now: Millis) -> NotchResult<()> {
        let (from, to) = (self.shapes.collapsed.clone(), self.shapes.expanded.clone());
        self.begin(from, to, now)
    }

    /// Pointer left the notch area.
    pub fn on_pointer_leave(&mut self, now: Millis) -> NotchResult<()> {
        let (from, to) = (self.shapes.expanded.clone(), self.shapes.collapsed.clone());
        self.begin(from, to, now)
    }

    fn begin(&mut self, from: PathModel, to: PathModel, now: Millis) -> NotchResult<()> {
        self.host.cancel_ticks();
        self.animator.start(from, to, now)?;
        self.host.schedule_ticks(self.tick_interval_ms);
        self.host.request_repaint();
        Ok(())
    }

    /// Scheduler callback.
    pub fn on_tick(&mut self, now: Millis) -> NotchResult<TickOutcome> {
        let outcome = self.animator.advance(now)?;
        if outcome.repaint {
            self.host.request_repaint();
        }
        if outcome.finished {
            self.host.cancel_ticks();
        }
        Ok(outcome)
    }

    /// Paint callback: fill the current outline into `surface`.
    pub fn render(&mut self, surface: &mut FrameRGBA) -> NotchResult<()> {
        self.renderer.render(self.animator.current_path(), surface)
    }

    /// Outline the next paint will draw.
    pub fn current_path(&self) -> &PathModel {
        self.animator.current_path()
    }

    /// The underlying animator.
    pub fn animator(&self) -> &MorphAnimator {
        &self.animator
    }

    /// The host collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host collaborator.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}

#[cfg(test)]
#[path = "../../tests/unit/widget/notch.rs"]
mod tests;
