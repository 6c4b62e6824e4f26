//! Rate limiting for outgoing scroll commands.
//!
//! Both modes are trailing-edge: a call parks its argument and the argument comes back out of
//! [`ScrollCommandThrottle::poll`] once the window closes. The caller forwards whatever `poll`
//! returns to the list.

use crate::timer::Timer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// How calls are collapsed.
pub enum RateLimit {
    /// At most one forward per interval, always the latest argument.
    Throttled {
        /// Minimum spacing between forwards.
        interval_ms: u64,
    },
    /// One forward once calls have stopped for the delay.
    Debounced {
        /// Quiet period required before forwarding.
        delay_ms: u64,
    },
}

#[derive(Clone, Debug)]
/// Throttled or debounced forwarding of the latest command argument.
pub struct ScrollCommandThrottle<T> {
    mode: RateLimit,
    timer: Timer,
    pending: Option<T>,
}

impl<T> ScrollCommandThrottle<T> {
    #[must_use]
    /// Forwards at most once per `interval_ms`.
    pub fn throttled(interval_ms: u64) -> Self {
        Self::new(RateLimit::Throttled { interval_ms })
    }

    #[must_use]
    /// Forwards `delay_ms` after the last call.
    pub fn debounced(delay_ms: u64) -> Self {
        Self::new(RateLimit::Debounced { delay_ms })
    }

    #[must_use]
    /// Creates a limiter in the given mode.
    pub fn new(mode: RateLimit) -> Self {
        Self {
            mode,
            timer: Timer::idle(),
            pending: None,
        }
    }

    #[must_use]
    /// The configured mode.
    pub fn mode(&self) -> RateLimit {
        self.mode
    }

    /// Parks `value` for forwarding, replacing any earlier pending value.
    pub fn call(&mut self, value: T, now_ms: u64) {
        self.pending = Some(value);
        match self.mode {
            RateLimit::Throttled { interval_ms } => {
                if !self.timer.is_pending() {
                    self.timer.schedule(now_ms, interval_ms);
                }
            }
            RateLimit::Debounced { delay_ms } => self.timer.schedule(now_ms, delay_ms),
        }
    }

    /// Returns the value to forward if its window has closed by `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> Option<T> {
        if self.timer.fire(now_ms) {
            self.pending.take()
        } else {
            None
        }
    }

    /// Drops the pending value without forwarding it. Returns whether one was pending.
    ///
    /// Safe to call any number of times, before or after the value fired.
    pub fn cancel(&mut self) -> bool {
        self.timer.cancel();
        self.pending.take().is_some()
    }

    #[must_use]
    /// True while a value is waiting to be forwarded.
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    /// When the pending value will be forwarded.
    pub fn deadline(&self) -> Option<u64> {
        self.pending.as_ref().and(self.timer.deadline())
    }
}

#[cfg(test)]
#[path = "tests/throttle.rs"]
mod tests;
