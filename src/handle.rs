//! Command interfaces an owner uses to push list state into affordance components.

use crate::section::Section;

/// Receives scroll state from the list.
pub trait ScrollListener {
    /// The list scrolled; `offset_percentage` is its position in `[0, 1]`.
    fn on_scroll_to_offset_percentage(&mut self, offset_percentage: f32, now_ms: u64);

    /// The first visible row of the list changed.
    fn on_viewable_index_changed(&mut self, _index: usize, _now_ms: u64) {}
}

/// Presents a section to the user, e.g. by opening a list of sections on it.
pub trait SectionPresenter {
    /// Shows `section` as the current one.
    fn show(&mut self, section: &Section, now_ms: u64);
}
