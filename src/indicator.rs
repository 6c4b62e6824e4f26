//! Plain fast-scroll thumb: one handle standing for the whole list, no sections.
//!
//! The thumb follows the list's scroll percentage until the user grabs it; from then on the
//! pointer drives the list and list reports are ignored until release.

use crate::auto_hide::AutoHideTimer;
use crate::gesture::ScrollCommand;
use crate::handle::ScrollListener;
use crate::position::ThumbTrack;
use tracing::debug;

#[derive(Clone, Debug)]
/// Draggable thumb bound to the list's offset percentage.
pub struct ThumbIndicator {
    track: ThumbTrack,
    visibility: AutoHideTimer,
    thumb_offset: f32,
    dragging: bool,
}

impl ThumbIndicator {
    #[must_use]
    /// Creates an indicator hidden until the list first scrolls (unless `hide_timeout_ms` is 0).
    pub fn new(track: ThumbTrack, hide_timeout_ms: u64) -> Self {
        Self {
            track,
            visibility: AutoHideTimer::new(hide_timeout_ms),
            thumb_offset: 0.0,
            dragging: false,
        }
    }

    #[must_use]
    /// Leading edge of the thumb along the track.
    pub fn thumb_offset(&self) -> f32 {
        self.thumb_offset
    }

    #[must_use]
    /// Track geometry.
    pub fn track(&self) -> ThumbTrack {
        self.track
    }

    /// Replaces the track geometry, e.g. after a resize.
    pub fn set_track(&mut self, track: ThumbTrack) {
        self.track = track;
    }

    #[must_use]
    /// Whether the indicator should be drawn.
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    /// True while the thumb is held.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Thumb grabbed at `pointer`.
    pub fn on_drag_start(&mut self, pointer: f32, now_ms: u64) -> ScrollCommand {
        self.dragging = true;
        self.visibility.lock(true, now_ms);
        debug!(pointer, "thumb grabbed");
        self.follow_pointer(pointer)
    }

    /// Thumb dragged to `pointer`.
    pub fn on_drag_move(&mut self, pointer: f32, now_ms: u64) -> Option<ScrollCommand> {
        if !self.dragging {
            return None;
        }
        self.visibility.lock(true, now_ms);
        Some(self.follow_pointer(pointer))
    }

    /// Thumb released at `pointer`; the idle countdown restarts.
    pub fn on_drag_end(&mut self, pointer: f32, now_ms: u64) -> Option<ScrollCommand> {
        if !self.dragging {
            return None;
        }
        let command = self.follow_pointer(pointer);
        self.release(now_ms);
        Some(command)
    }

    /// Gesture cancelled; the thumb stays where it is.
    pub fn on_drag_cancel(&mut self, now_ms: u64) {
        if self.dragging {
            self.release(now_ms);
        }
    }

    /// Hides the indicator once idle. Returns true on the transition.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        self.visibility.tick(now_ms)
    }

    fn follow_pointer(&mut self, pointer: f32) -> ScrollCommand {
        let position = self.track.pointer_to_thumb(pointer);
        self.thumb_offset = position.offset;
        ScrollCommand::ScrollToOffset {
            offset_percentage: position.percentage,
        }
    }

    fn release(&mut self, now_ms: u64) {
        self.dragging = false;
        self.visibility.lock(false, now_ms);
    }
}

impl ScrollListener for ThumbIndicator {
    fn on_scroll_to_offset_percentage(&mut self, offset_percentage: f32, now_ms: u64) {
        if self.dragging {
            return;
        }
        self.thumb_offset = self.track.thumb_offset(offset_percentage);
        self.visibility.show_activity(now_ms);
    }
}

#[cfg(test)]
#[path = "tests/indicator.rs"]
mod tests;
