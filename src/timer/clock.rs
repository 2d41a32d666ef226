//! Round timer bookkeeping and `M:SS` formatting.

use std::time::Duration;

use super::TimerId;

/// Format whole seconds as `M:SS`.
///
/// Minutes are not padded and keep counting past 59.
///
/// ```
/// use memory_match::timer::format_elapsed;
///
/// assert_eq!(format_elapsed(0), "0:00");
/// assert_eq!(format_elapsed(65), "1:05");
/// assert_eq!(format_elapsed(3600), "60:00");
/// ```
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Elapsed-time counter for one round.
///
/// The timer only counts; the coordinator owns the scheduler and hands the
/// timer the id of the pending tick so a stop can cancel it.
#[derive(Clone, Debug, Default)]
pub struct RoundTimer {
    /// Virtual time the timer was started at.
    started_at: Option<Duration>,
    /// Whole seconds between start and the latest tick.
    elapsed_secs: u64,
    /// Next scheduled tick, while running.
    pending_tick: Option<TimerId>,
}

impl RoundTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a tick is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.pending_tick.is_some()
    }

    /// Whether the timer has ever been started this round.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started_at.is_some()
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    /// Current reading as `M:SS`.
    #[must_use]
    pub fn text(&self) -> String {
        format_elapsed(self.elapsed_secs)
    }

    /// Mark the timer started at `now` with its first tick pending.
    pub fn start(&mut self, now: Duration, tick: TimerId) {
        self.started_at = Some(now);
        self.pending_tick = Some(tick);
    }

    /// Record a tick at `now` and remember the next one.
    ///
    /// The reading is whole seconds since start, independent of how often
    /// ticks fire.
    pub fn tick(&mut self, now: Duration, next: TimerId) -> u64 {
        if let Some(started_at) = self.started_at {
            self.elapsed_secs = now.saturating_sub(started_at).as_secs();
        }
        self.pending_tick = Some(next);
        self.elapsed_secs
    }

    /// Stop counting. Returns the pending tick so the caller can cancel it.
    pub fn stop(&mut self) -> Option<TimerId> {
        self.pending_tick.take()
    }

    /// Stop and zero. Returns the pending tick so the caller can cancel it.
    pub fn reset(&mut self) -> Option<TimerId> {
        let pending = self.stop();
        self.started_at = None;
        self.elapsed_secs = 0;
        pending
    }
}
