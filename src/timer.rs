//! Single-shot deadlines on the host's millisecond clock.
//!
//! Nothing here reads the wall clock. Callers pass `now_ms` from a monotonic source and poll
//! with [`Timer::fire`] from their tick.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// A cancelable, single-shot deadline.
pub struct Timer {
    deadline: Option<u64>,
}

impl Timer {
    #[must_use]
    /// A timer with nothing scheduled.
    pub const fn idle() -> Self {
        Self { deadline: None }
    }

    /// Schedules the timer `delay_ms` after `now_ms`, replacing any pending deadline.
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.deadline = Some(now_ms.saturating_add(delay_ms));
    }

    /// Drops the pending deadline. Returns whether one was pending.
    ///
    /// Cancelling an idle or already fired timer is a no-op.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    #[must_use]
    /// True while a deadline is scheduled and has not fired.
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    /// The pending deadline, if any.
    pub fn deadline(&self) -> Option<u64> {
        self.deadline
    }

    /// Consumes the deadline if it has elapsed by `now_ms`. Fires at most once per schedule.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if deadline <= now_ms => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "tests/timer.rs"]
mod tests;
