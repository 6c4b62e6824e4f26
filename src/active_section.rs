//! The active section, fed from two channels that must not fight.
//!
//! The list reports which row is visible; gestures report which row the user is pointing at.
//! While a gesture or a programmatic jump is in flight the list's own settling events would drag
//! the highlight back to wherever the list happens to be mid-animation, so list reports are
//! suppressed until the owner explicitly releases suppression.

use crate::section::{Section, SectionIndex};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which channel last changed the active section.
pub enum UpdateSource {
    /// The list's visible index.
    List,
    /// A drag, tap or other affordance input.
    Gesture,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Emitted when the active section changes.
///
/// Both positions are `None` when the list scrolled above the first section.
pub struct SectionChanged {
    /// Ordinal of the new active section.
    pub section_index: Option<usize>,
    /// List position of the new active section's header.
    pub list_index: Option<usize>,
    /// Channel that caused the change.
    pub source: UpdateSource,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Read-only view of the tracker's state.
pub struct ActiveSectionState<'a> {
    /// Current active section, if the list is inside one.
    pub active_section: Option<&'a Section>,
    /// True while list reports are being ignored.
    pub suppress_list_events: bool,
    /// Channel that last changed the active section.
    pub last_update_source: UpdateSource,
}

#[derive(Debug)]
/// Owns the section table and the active-section state machine.
pub struct ActiveSectionTracker {
    sections: SectionIndex,
    active: Option<usize>,
    suppress_list_events: bool,
    last_update_source: UpdateSource,
    last_list_position: Option<usize>,
}

impl ActiveSectionTracker {
    #[must_use]
    /// Starts with no active section and list reports enabled.
    pub fn new(sections: SectionIndex) -> Self {
        Self {
            sections,
            active: None,
            suppress_list_events: false,
            last_update_source: UpdateSource::List,
            last_list_position: None,
        }
    }

    #[must_use]
    /// The section table.
    pub fn sections(&self) -> &SectionIndex {
        &self.sections
    }

    #[must_use]
    /// Current active section.
    pub fn active_section(&self) -> Option<&Section> {
        self.active.and_then(|ordinal| self.sections.get(ordinal))
    }

    #[must_use]
    /// True while list reports are being ignored.
    pub fn is_suppressed(&self) -> bool {
        self.suppress_list_events
    }

    #[must_use]
    /// Last visible index the list reported, including reports ignored under suppression.
    pub fn last_list_position(&self) -> Option<usize> {
        self.last_list_position
    }

    #[must_use]
    /// Snapshot of the full state.
    pub fn state(&self) -> ActiveSectionState<'_> {
        ActiveSectionState {
            active_section: self.active_section(),
            suppress_list_events: self.suppress_list_events,
            last_update_source: self.last_update_source,
        }
    }

    /// List channel: the first visible row moved to `list_position`.
    ///
    /// Ignored while suppressed. Emits only when the resulting section differs from the current,
    /// including a move above the first section, which clears it.
    pub fn report_list_visible_index(&mut self, list_position: usize) -> Option<SectionChanged> {
        self.last_list_position = Some(list_position);
        if self.suppress_list_events {
            return None;
        }
        self.apply(list_position, UpdateSource::List)
    }

    /// Gesture channel: the affordance points at `list_position`.
    ///
    /// Always processed, and latches suppression until [`Self::release_suppression`].
    pub fn report_gesture_index(&mut self, list_position: usize) -> Option<SectionChanged> {
        self.suppress_list_events = true;
        self.apply(list_position, UpdateSource::Gesture)
    }

    /// Re-enables list reports. Call on every gesture end, including cancellation.
    pub fn release_suppression(&mut self) {
        if self.suppress_list_events {
            debug!("list events re-enabled");
        }
        self.suppress_list_events = false;
    }

    fn apply(&mut self, list_position: usize, source: UpdateSource) -> Option<SectionChanged> {
        let section = self.sections.nearest_active_section(list_position);
        let section_index = section.map(|s| s.section_index);
        if self.active == section_index {
            return None;
        }

        let change = SectionChanged {
            section_index,
            list_index: section.map(|s| s.index),
            source,
        };
        self.active = section_index;
        self.last_update_source = source;
        debug!(
            section = ?change.section_index,
            list_index = ?change.list_index,
            ?source,
            "active section changed"
        );
        Some(change)
    }
}

#[cfg(test)]
#[path = "tests/active_section.rs"]
mod tests;
