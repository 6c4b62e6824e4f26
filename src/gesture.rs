//! Drag handling on a section affordance.
//!
//! The controller moves through a small state machine:
//!
//! ```text
//! Idle -> Dragging -> Settling -> Idle
//!            ^            |
//!            |____________|
//!        (new drag preempts settling)
//! ```
//!
//! - **Dragging**: the pointer is down. The first contact scrolls the list at once; later
//!   section changes go through a throttle so fast drags do not flood the list.
//! - **Settling**: the pointer is up. The thumb snaps to the section's dot, one debounced jump
//!   is sent, and list reports stay suppressed until the settle window closes. The jump can be
//!   re-sent once at the end of the window to correct for list-side animation drift.

use crate::active_section::{ActiveSectionTracker, SectionChanged};
use crate::position::{pixel_to_nearest_section, DotLayout};
use crate::throttle::ScrollCommandThrottle;
use crate::timer::Timer;
use tracing::{debug, trace};

#[derive(Clone, Copy, Debug, PartialEq)]
/// A request for the list to move. Fire-and-forget.
pub enum ScrollCommand {
    /// Bring a list row into view.
    ScrollToIndex {
        /// Target list position.
        index: usize,
        /// Whether the list should animate the jump.
        animated: bool,
    },
    /// Scroll to a fraction of the list's total extent.
    ScrollToOffset {
        /// Target percentage in `[0, 1]`.
        offset_percentage: f32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Where the controller is in the drag lifecycle.
pub enum DragPhase {
    /// No gesture in flight.
    Idle,
    /// Pointer is down.
    Dragging,
    /// Pointer released; waiting for the list to settle.
    Settling,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Timing windows for drag commands.
pub struct GestureTiming {
    /// Minimum spacing between scroll commands while dragging.
    pub throttle_interval_ms: u64,
    /// Quiet period before the release jump is sent.
    pub release_debounce_ms: u64,
    /// How long list reports stay suppressed after the release jump.
    pub settle_ms: u64,
    /// Re-send the jump once when the settle window closes.
    pub settle_reissue: bool,
}

impl Default for GestureTiming {
    fn default() -> Self {
        Self {
            throttle_interval_ms: 120,
            release_debounce_ms: 1000,
            settle_ms: 1000,
            settle_reissue: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
/// Immediate results of a gesture input.
pub struct GestureUpdate {
    /// The active section changed.
    pub changed: Option<SectionChanged>,
    /// A command to forward to the list right away.
    pub command: Option<ScrollCommand>,
}

struct Located {
    list_index: usize,
    pixel: f32,
    snapped: f32,
}

#[derive(Debug)]
/// Maps pointer drags on the affordance onto section jumps.
pub struct GestureDragController {
    layout: DotLayout,
    timing: GestureTiming,
    phase: DragPhase,
    thumb_pixel: Option<f32>,
    target: Option<usize>,
    move_commands: ScrollCommandThrottle<usize>,
    release_command: ScrollCommandThrottle<usize>,
    settle: Timer,
}

impl GestureDragController {
    #[must_use]
    /// Creates an idle controller.
    pub fn new(layout: DotLayout, timing: GestureTiming) -> Self {
        Self {
            layout,
            timing,
            phase: DragPhase::Idle,
            thumb_pixel: None,
            target: None,
            move_commands: ScrollCommandThrottle::throttled(timing.throttle_interval_ms),
            release_command: ScrollCommandThrottle::debounced(timing.release_debounce_ms),
            settle: Timer::idle(),
        }
    }

    #[must_use]
    /// Current lifecycle phase.
    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    #[must_use]
    /// Dot layout used for hit testing and snapping.
    pub fn layout(&self) -> DotLayout {
        self.layout
    }

    /// Replaces the dot layout, e.g. after a resize.
    pub fn set_layout(&mut self, layout: DotLayout) {
        self.layout = layout;
    }

    #[must_use]
    /// Thumb position owned by the gesture; `None` once idle.
    pub fn thumb_pixel(&self) -> Option<f32> {
        self.thumb_pixel
    }

    #[must_use]
    /// List position the gesture last aimed at.
    pub fn target(&self) -> Option<usize> {
        self.target
    }

    #[must_use]
    /// Earliest pending timer deadline.
    pub fn next_deadline(&self) -> Option<u64> {
        [
            self.move_commands.deadline(),
            self.release_command.deadline(),
            self.settle.deadline(),
        ]
        .into_iter()
        .flatten()
        .min()
    }

    /// Pointer down at `pixel`. Preempts settling and scrolls the list at once.
    pub fn on_drag_start(
        &mut self,
        pixel: f32,
        now_ms: u64,
        tracker: &mut ActiveSectionTracker,
    ) -> GestureUpdate {
        if self.phase == DragPhase::Settling {
            debug!(now_ms, "drag preempts settling");
        }
        self.cancel_pending();

        let Some(located) = self.locate(pixel, tracker) else {
            self.phase = DragPhase::Idle;
            self.thumb_pixel = None;
            tracker.release_suppression();
            return GestureUpdate::default();
        };
        self.phase = DragPhase::Dragging;
        self.thumb_pixel = Some(located.pixel);
        self.target = Some(located.list_index);

        let changed = tracker.report_gesture_index(located.list_index);
        debug!(index = located.list_index, "drag started");
        GestureUpdate {
            changed,
            command: Some(ScrollCommand::ScrollToIndex {
                index: located.list_index,
                animated: false,
            }),
        }
    }

    /// Pointer moved to `pixel`. Throttles a jump when the section under the pointer changes.
    pub fn on_drag_move(
        &mut self,
        pixel: f32,
        now_ms: u64,
        tracker: &mut ActiveSectionTracker,
    ) -> Option<SectionChanged> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let located = self.locate(pixel, tracker)?;
        self.thumb_pixel = Some(located.pixel);
        if self.target == Some(located.list_index) {
            return None;
        }

        self.target = Some(located.list_index);
        self.move_commands.call(located.list_index, now_ms);
        tracker.report_gesture_index(located.list_index)
    }

    /// Pointer released at `pixel`. Snaps, debounces the final jump and starts settling.
    ///
    /// A throttled move still pending fires on its own schedule ahead of the final jump.
    pub fn on_drag_end(
        &mut self,
        pixel: f32,
        now_ms: u64,
        tracker: &mut ActiveSectionTracker,
    ) -> Option<SectionChanged> {
        if self.phase != DragPhase::Dragging {
            return None;
        }
        let Some(located) = self.locate(pixel, tracker) else {
            self.on_drag_cancel(tracker);
            return None;
        };

        self.thumb_pixel = Some(located.snapped);
        self.target = Some(located.list_index);
        self.release_command.call(located.list_index, now_ms);
        self.phase = DragPhase::Settling;
        self.settle.schedule(now_ms, self.timing.settle_ms);
        debug!(index = located.list_index, "drag released");
        tracker.report_gesture_index(located.list_index)
    }

    /// Gesture cancelled by the platform. Drops pending commands and releases suppression.
    pub fn on_drag_cancel(&mut self, tracker: &mut ActiveSectionTracker) {
        self.cancel_pending();
        self.phase = DragPhase::Idle;
        self.thumb_pixel = None;
        tracker.release_suppression();
        debug!("drag cancelled");
    }

    /// Jumps straight to a section, e.g. from a tab or picker tap.
    ///
    /// Supersedes any pending drag command and suppresses list reports for the settle window.
    pub fn tap(
        &mut self,
        section_index: usize,
        now_ms: u64,
        tracker: &mut ActiveSectionTracker,
    ) -> GestureUpdate {
        let Some(section) = tracker.sections().get(section_index) else {
            trace!(section_index, "tap on unknown section ignored");
            return GestureUpdate::default();
        };
        let list_index = section.index;
        let snapped = self.layout.section_to_pixel(section);

        self.cancel_pending();
        self.phase = DragPhase::Settling;
        self.thumb_pixel = Some(snapped);
        self.target = Some(list_index);
        self.settle.schedule(now_ms, self.timing.settle_ms);

        let changed = tracker.report_gesture_index(list_index);
        debug!(index = list_index, "tap jump");
        GestureUpdate {
            changed,
            command: Some(ScrollCommand::ScrollToIndex {
                index: list_index,
                animated: true,
            }),
        }
    }

    /// Fires due timers and returns the commands to forward.
    pub fn tick(&mut self, now_ms: u64, tracker: &mut ActiveSectionTracker) -> Vec<ScrollCommand> {
        let mut commands = Vec::new();

        if let Some(index) = self.move_commands.poll(now_ms) {
            commands.push(ScrollCommand::ScrollToIndex {
                index,
                animated: false,
            });
        }
        if let Some(index) = self.release_command.poll(now_ms) {
            commands.push(ScrollCommand::ScrollToIndex {
                index,
                animated: true,
            });
        }
        if self.phase == DragPhase::Settling && self.settle.fire(now_ms) {
            if self.timing.settle_reissue {
                if let Some(index) = self.target {
                    debug!(index, "re-issuing jump after settle");
                    commands.push(ScrollCommand::ScrollToIndex {
                        index,
                        animated: false,
                    });
                }
            }
            self.phase = DragPhase::Idle;
            self.thumb_pixel = None;
            tracker.release_suppression();
        }

        commands
    }

    fn cancel_pending(&mut self) {
        self.move_commands.cancel();
        self.release_command.cancel();
        self.settle.cancel();
    }

    fn locate(&self, pixel: f32, tracker: &ActiveSectionTracker) -> Option<Located> {
        let sections = tracker.sections().sections();
        let (first, last) = self.layout.track_bounds(sections)?;
        if !first.is_finite() || !last.is_finite() {
            return None;
        }
        let (low, high) = if first <= last {
            (first, last)
        } else {
            (last, first)
        };
        let clamped = if pixel.is_nan() {
            low
        } else {
            pixel.clamp(low, high)
        };
        if pixel < low || pixel > high {
            trace!(pixel, low, high, "pointer outside section track");
        }

        let dimensions = self.layout.dimensions(sections);
        let section = pixel_to_nearest_section(clamped, &dimensions)?;
        Some(Located {
            list_index: section.index,
            pixel: clamped,
            snapped: self.layout.section_to_pixel(section),
        })
    }
}

#[cfg(test)]
#[path = "tests/gesture.rs"]
mod tests;
