//! Full list of sections shown beside the dots while the user drags.
//!
//! Dots carry no labels, so while a drag is choosing sections the picker lists every section
//! label with the current one highlighted and scrolled to the middle. Its own list may not have
//! measured the target row yet when asked to centre it, so the centring request is repeated once
//! after a settle delay.

use crate::auto_hide::AutoHideTimer;
use crate::handle::SectionPresenter;
use crate::section::Section;
use crate::timer::Timer;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Results of advancing the picker's clock.
pub struct PickerTick {
    /// The picker went from visible to hidden.
    pub hidden: bool,
    /// The picker should centre its list on this section again.
    pub centre_on: Option<usize>,
}

#[derive(Clone, Debug)]
/// Section list overlay with its own idle timeout.
pub struct SectionPicker {
    visibility: AutoHideTimer,
    highlighted: Option<usize>,
    recentre: Timer,
    recentre_ms: u64,
    pending_centre: Option<usize>,
}

impl SectionPicker {
    #[must_use]
    /// Creates a hidden picker.
    pub fn new(timeout_ms: u64, recentre_ms: u64) -> Self {
        let mut visibility = AutoHideTimer::new(timeout_ms);
        visibility.hide();
        Self {
            visibility,
            highlighted: None,
            recentre: Timer::idle(),
            recentre_ms,
            pending_centre: None,
        }
    }

    #[must_use]
    /// Whether the picker should be drawn.
    pub fn is_visible(&self) -> bool {
        self.visibility.is_visible()
    }

    #[must_use]
    /// Ordinal of the highlighted section.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Takes the centring request raised by the last [`SectionPresenter::show`].
    pub fn take_centre_request(&mut self) -> Option<usize> {
        self.pending_centre.take()
    }

    /// The user scrolled the picker's own list; keeps it open.
    pub fn on_scroll(&mut self, now_ms: u64) {
        if self.visibility.is_visible() {
            self.visibility.show_activity(now_ms);
        }
    }

    /// Closes the picker, e.g. after an entry was picked.
    pub fn hide(&mut self) {
        self.visibility.hide();
        self.recentre.cancel();
        self.pending_centre = None;
    }

    /// Fires the idle timeout and the delayed re-centre.
    pub fn tick(&mut self, now_ms: u64) -> PickerTick {
        let centre_on = if self.recentre.fire(now_ms) && self.visibility.is_visible() {
            self.highlighted
        } else {
            None
        };
        let hidden = self.visibility.tick(now_ms);
        if hidden {
            self.recentre.cancel();
        }
        PickerTick { hidden, centre_on }
    }
}

impl SectionPresenter for SectionPicker {
    fn show(&mut self, section: &Section, now_ms: u64) {
        self.highlighted = Some(section.section_index);
        self.visibility.show_activity(now_ms);
        self.pending_centre = Some(section.section_index);
        self.recentre.schedule(now_ms, self.recentre_ms);
    }
}

#[cfg(test)]
#[path = "tests/picker.rs"]
mod tests;
