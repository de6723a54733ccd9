//! Virtual-time periodic timer.

/// A timer that fires at regular intervals on a virtual clock.
///
/// Stopping discards the elapsed part of the current interval; starting
/// again always waits a full period.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    /// Interval in milliseconds
    interval_ms: u64,
    /// Virtual time of the next firing, if running
    due_ms: Option<u64>,
    /// Number of times the timer has fired
    tick_count: u64,
}

impl IntervalTimer {
    /// Create a stopped timer.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            interval_ms: 0,
            due_ms: None,
            tick_count: 0,
        }
    }

    /// Arm the timer at `now_ms` with a fresh `interval_ms` period.
    pub fn start(&mut self, now_ms: u64, interval_ms: u32) {
        self.interval_ms = u64::from(interval_ms).max(1);
        self.due_ms = Some(now_ms + self.interval_ms);
    }

    /// Cancel the timer.
    pub fn stop(&mut self) {
        self.due_ms = None;
    }

    /// Check if the timer is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.due_ms.is_some()
    }

    /// Virtual time of the next firing.
    #[must_use]
    pub const fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Get the tick count.
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Record a firing and re-arm for the following period.
    pub fn fire(&mut self) {
        if let Some(due) = self.due_ms {
            self.tick_count += 1;
            self.due_ms = Some(due + self.interval_ms);
        }
    }
}
