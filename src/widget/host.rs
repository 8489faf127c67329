/// The window-system collaborator that owns the real surface, timer and repaint queue.
///
/// All calls happen on the host's UI thread.
pub trait HostWindow {
    /// Start (or replace) the periodic tick source.
    fn schedule_ticks(&mut self, interval_ms: u64);

    /// Stop the periodic tick source. No tick may be delivered after this returns.
    fn cancel_ticks(&mut self);

    /// Ask for a paint callback.
    fn request_repaint(&mut self);
}

/// Window-less host that only records what the widget asked for.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    tick_interval_ms: Option<u64>,
    repaint_pending: bool,
    repaint_requests: u64,
    schedules: u64,
}

impl HeadlessHost {
    /// Interval of the active tick source, if any.
    pub fn tick_interval_ms(&self) -> Option<u64> {
        self.tick_interval_ms
    }

    /// Whether ticks are currently scheduled.
    pub fn is_ticking(&self) -> bool {
        self.tick_interval_ms.is_some()
    }

    /// Consume a pending repaint request.
    pub fn take_repaint(&mut self) -> bool {
        std::mem::take(&mut self.repaint_pending)
    }

    /// Total repaint requests seen.
    pub fn repaint_requests(&self) -> u64 {
        self.repaint_requests
    }

    /// Total times a tick source was installed.
    pub fn schedules(&self) -> u64 {
        self.schedules
    }
}

impl HostWindow for HeadlessHost {
    fn schedule_ticks(&mut self, interval_ms: u64) {
        self.tick_interval_ms = Some(interval_ms);
        self.schedules += 1;
    }

    fn cancel_ticks(&mut self) {
        self.tick_interval_ms = None;
    }

    fn request_repaint(&mut self) {
        self.repaint_pending = true;
        self.repaint_requests += 1;
    }
}
