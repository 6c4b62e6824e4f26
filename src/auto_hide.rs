//! Show-on-activity, hide-when-idle visibility for the affordance.

use crate::timer::Timer;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Snapshot of an [`AutoHideTimer`].
pub struct VisibilityState {
    /// Whether the affordance should be drawn.
    pub visible: bool,
    /// True while locked visible.
    pub locked_visible: bool,
    /// When the affordance will hide if nothing else happens.
    pub hide_deadline: Option<u64>,
}

#[derive(Clone, Debug)]
/// Debounced visibility state machine.
///
/// A `timeout_ms` of `0` keeps the affordance permanently visible.
pub struct AutoHideTimer {
    timeout_ms: u64,
    visible: bool,
    locked: bool,
    hide: Timer,
}

impl AutoHideTimer {
    #[must_use]
    /// Starts hidden, unless the timeout is `0`.
    pub fn new(timeout_ms: u64) -> Self {
        Self {
            timeout_ms,
            visible: timeout_ms == 0,
            locked: false,
            hide: Timer::idle(),
        }
    }

    #[must_use]
    /// Whether the affordance should be drawn.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    /// Configured idle timeout.
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    #[must_use]
    /// Snapshot of the state.
    pub fn state(&self) -> VisibilityState {
        VisibilityState {
            visible: self.visible,
            locked_visible: self.locked,
            hide_deadline: self.hide.deadline(),
        }
    }

    /// Shows the affordance and restarts the idle countdown.
    pub fn show_activity(&mut self, now_ms: u64) {
        self.visible = true;
        self.schedule_hide(now_ms);
    }

    /// Locks the affordance visible, or unlocks it and restarts the countdown.
    pub fn lock(&mut self, locked: bool, now_ms: u64) {
        if self.locked == locked {
            return;
        }
        self.locked = locked;
        if locked {
            self.visible = true;
            self.hide.cancel();
        } else {
            self.schedule_hide(now_ms);
        }
    }

    /// Hides at once, dropping any lock and pending countdown.
    pub fn hide(&mut self) {
        self.visible = false;
        self.locked = false;
        self.hide.cancel();
    }

    /// Changes the idle timeout. `0` shows the affordance for good.
    pub fn set_timeout(&mut self, timeout_ms: u64, now_ms: u64) {
        self.timeout_ms = timeout_ms;
        if timeout_ms == 0 {
            self.visible = true;
            self.hide.cancel();
        } else if self.visible {
            self.schedule_hide(now_ms);
        }
    }

    /// Hides the affordance if its deadline has elapsed. Returns true on the transition.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.hide.fire(now_ms) || self.locked || self.timeout_ms == 0 || !self.visible {
            return false;
        }
        self.visible = false;
        debug!(now_ms, "affordance hidden after idle timeout");
        true
    }

    fn schedule_hide(&mut self, now_ms: u64) {
        if self.timeout_ms == 0 || self.locked {
            return;
        }
        self.hide.schedule(now_ms, self.timeout_ms);
    }
}

#[cfg(test)]
#[path = "tests/auto_hide.rs"]
mod tests;
