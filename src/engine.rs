//! The synchronization engine: list events in, affordance state and list commands out.
//!
//! Every input carries `now_ms` from the host's monotonic clock and the host calls
//! [`FastScrollEngine::tick`] from its event loop so timers can fire. Inputs are processed in
//! arrival order and never fail; everything the host must act on lands in an outbox drained with
//! [`FastScrollEngine::drain_events`].

use crate::active_section::{ActiveSectionState, ActiveSectionTracker, SectionChanged};
use crate::auto_hide::AutoHideTimer;
use crate::error::{InvalidInputError, ScrollTargetFailure};
use crate::gesture::{DragPhase, GestureDragController, GestureTiming, GestureUpdate, ScrollCommand};
use crate::handle::{ScrollListener, SectionPresenter};
use crate::indicator::ThumbIndicator;
use crate::picker::SectionPicker;
use crate::position::{
    column_scroll_offset, tab_scroll_amount, DotLayout, SectionWithDimensions, TabMeasurement,
    ThumbTrack,
};
use crate::section::{Section, SectionIndex, SectionMarker};
use crate::throttle::ScrollCommandThrottle;
use tracing::{debug, warn};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Something the host should act on.
pub enum EngineEvent {
    /// Move the list.
    Scroll(ScrollCommand),
    /// The active section changed.
    SectionChanged(SectionChanged),
    /// Centre the section picker's own list on this section.
    CentrePicker {
        /// Ordinal of the section to centre.
        section_index: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Tunables for the engine.
pub struct EngineConfig {
    /// Dot size and spacing of the section affordance.
    pub layout: DotLayout,
    /// Drag throttle, release debounce and settle windows.
    pub timing: GestureTiming,
    /// Idle time before the affordance hides; `0` never hides.
    pub hide_timeout_ms: u64,
    /// Idle time before the section picker hides.
    pub picker_timeout_ms: u64,
    /// Delay before the picker re-centres on its highlighted section.
    pub picker_recentre_ms: u64,
    /// Delay before retrying a scroll the list could not complete.
    pub retry_delay_ms: u64,
    /// Geometry of the plain thumb indicator.
    pub thumb_track: ThumbTrack,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            layout: DotLayout::default(),
            timing: GestureTiming::default(),
            hide_timeout_ms: 2000,
            picker_timeout_ms: 3000,
            picker_recentre_ms: 1000,
            retry_delay_ms: 250,
            thumb_track: ThumbTrack {
                track_length: 0.0,
                thumb_length: 50.0,
            },
        }
    }
}

#[derive(Debug)]
/// Keeps a sectioned list and its fast-navigation affordance in sync.
pub struct FastScrollEngine {
    tracker: ActiveSectionTracker,
    gesture: GestureDragController,
    bar: AutoHideTimer,
    picker: SectionPicker,
    indicator: ThumbIndicator,
    retry: ScrollCommandThrottle<usize>,
    retried: Option<usize>,
    offset_percentage: f32,
    column_offset: f32,
    events: Vec<EngineEvent>,
}

impl FastScrollEngine {
    #[must_use]
    /// Creates an engine over a validated section table, positioned at the top of the list.
    pub fn new(sections: SectionIndex, config: &EngineConfig) -> Self {
        let mut tracker = ActiveSectionTracker::new(sections);
        tracker.report_list_visible_index(0);

        Self {
            tracker,
            gesture: GestureDragController::new(config.layout, config.timing),
            bar: AutoHideTimer::new(config.hide_timeout_ms),
            picker: SectionPicker::new(config.picker_timeout_ms, config.picker_recentre_ms),
            indicator: ThumbIndicator::new(config.thumb_track, config.hide_timeout_ms),
            retry: ScrollCommandThrottle::debounced(config.retry_delay_ms),
            retried: None,
            offset_percentage: 0.0,
            column_offset: 0.0,
            events: Vec::new(),
        }
    }

    /// Builds the section table from `markers` and creates an engine over it.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError`] if the markers are not strictly increasing.
    pub fn from_markers<I>(markers: I, config: &EngineConfig) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = SectionMarker>,
    {
        Ok(Self::new(SectionIndex::from_markers(markers)?, config))
    }

    /// Takes every event raised since the last call.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    // List channel.

    /// The list scrolled to `offset_percentage` of its extent.
    pub fn on_scroll(&mut self, offset_percentage: f32, now_ms: u64) {
        let offset_percentage = if offset_percentage.is_nan() {
            0.0
        } else {
            offset_percentage.clamp(0.0, 1.0)
        };
        self.offset_percentage = offset_percentage;
        self.bar.show_activity(now_ms);
        self.indicator
            .on_scroll_to_offset_percentage(offset_percentage, now_ms);
    }

    /// The first visible row of the list is now `list_position`.
    pub fn on_visible_index_changed(&mut self, list_position: usize, _now_ms: u64) {
        if let Some(change) = self.tracker.report_list_visible_index(list_position) {
            self.events.push(EngineEvent::SectionChanged(change));
        }
    }

    /// The list could not complete a scroll. Retried once; a second failure is dropped.
    ///
    /// Only a fresh jump to the same index re-arms the retry.
    pub fn on_scroll_to_index_failed(&mut self, failure: ScrollTargetFailure, now_ms: u64) {
        if self.retried == Some(failure.index) {
            warn!(index = failure.index, "scroll retry failed, giving up");
            self.retried = None;
            return;
        }
        debug!(index = failure.index, "scheduling scroll retry");
        self.retried = Some(failure.index);
        self.retry.call(failure.index, now_ms);
    }

    // Section affordance channel.

    /// Pointer down on the section affordance at `pixel`.
    pub fn on_drag_start(&mut self, pixel: f32, now_ms: u64) {
        self.retry.cancel();
        let update = self.gesture.on_drag_start(pixel, now_ms, &mut self.tracker);
        self.bar.show_activity(now_ms);
        self.apply_update(update);
        self.present_active(now_ms);
    }

    /// Pointer moved on the section affordance.
    pub fn on_drag_move(&mut self, pixel: f32, now_ms: u64) {
        if let Some(change) = self.gesture.on_drag_move(pixel, now_ms, &mut self.tracker) {
            self.events.push(EngineEvent::SectionChanged(change));
            self.present_active(now_ms);
        }
    }

    /// Pointer released on the section affordance.
    pub fn on_drag_end(&mut self, pixel: f32, now_ms: u64) {
        if self.gesture.phase() != DragPhase::Dragging {
            return;
        }
        if let Some(change) = self.gesture.on_drag_end(pixel, now_ms, &mut self.tracker) {
            self.events.push(EngineEvent::SectionChanged(change));
        }
        self.present_active(now_ms);
    }

    /// The platform cancelled the gesture on the section affordance.
    pub fn on_drag_cancel(&mut self, now_ms: u64) {
        self.gesture.on_drag_cancel(&mut self.tracker);
        if !self.picker.is_visible() {
            self.bar.lock(false, now_ms);
        }
        self.bar.show_activity(now_ms);
    }

    /// Jumps to a section chosen directly, e.g. a tab tap.
    pub fn scroll_to_section(&mut self, section_index: usize, now_ms: u64) {
        self.retry.cancel();
        let update = self.gesture.tap(section_index, now_ms, &mut self.tracker);
        self.apply_update(update);
        self.bar.show_activity(now_ms);
    }

    /// An entry was picked from the section picker: close it and jump without waiting.
    pub fn pick_section(&mut self, section_index: usize, now_ms: u64) {
        self.picker.hide();
        self.bar.lock(false, now_ms);
        self.scroll_to_section(section_index, now_ms);
    }

    /// The user scrolled the section picker's own list.
    pub fn on_picker_scroll(&mut self, now_ms: u64) {
        self.picker.on_scroll(now_ms);
    }

    // Plain thumb channel.

    /// Thumb grabbed at `pointer`.
    pub fn on_thumb_drag_start(&mut self, pointer: f32, now_ms: u64) {
        let command = self.indicator.on_drag_start(pointer, now_ms);
        self.emit_scroll(command);
    }

    /// Thumb dragged to `pointer`.
    pub fn on_thumb_drag_move(&mut self, pointer: f32, now_ms: u64) {
        if let Some(command) = self.indicator.on_drag_move(pointer, now_ms) {
            self.emit_scroll(command);
        }
    }

    /// Thumb released at `pointer`.
    pub fn on_thumb_drag_end(&mut self, pointer: f32, now_ms: u64) {
        if let Some(command) = self.indicator.on_drag_end(pointer, now_ms) {
            self.emit_scroll(command);
        }
    }

    /// Thumb gesture cancelled.
    pub fn on_thumb_drag_cancel(&mut self, now_ms: u64) {
        self.indicator.on_drag_cancel(now_ms);
    }

    // Layout.

    /// Replaces the dot layout.
    pub fn set_layout(&mut self, layout: DotLayout) {
        self.gesture.set_layout(layout);
    }

    /// Replaces the thumb indicator's track geometry.
    pub fn set_thumb_track(&mut self, track: ThumbTrack) {
        self.indicator.set_track(track);
    }

    /// Changes the affordance idle timeout at runtime.
    pub fn set_hide_timeout(&mut self, timeout_ms: u64, now_ms: u64) {
        self.bar.set_timeout(timeout_ms, now_ms);
    }

    /// Advances every timer to `now_ms`.
    pub fn tick(&mut self, now_ms: u64) {
        for command in self.gesture.tick(now_ms, &mut self.tracker) {
            self.emit_scroll(command);
        }

        if let Some(index) = self.retry.poll(now_ms) {
            debug!(index, "retrying scroll");
            self.events.push(EngineEvent::Scroll(ScrollCommand::ScrollToIndex {
                index,
                animated: false,
            }));
        }

        let picker = self.picker.tick(now_ms);
        if let Some(section_index) = picker.centre_on {
            self.events.push(EngineEvent::CentrePicker { section_index });
        }
        // A held drag keeps the affordance up even once the picker times out.
        if picker.hidden && self.gesture.phase() != DragPhase::Dragging {
            self.bar.lock(false, now_ms);
        }

        self.bar.tick(now_ms);
        self.indicator.tick(now_ms);
    }

    // Renderer queries.

    #[must_use]
    /// The section table.
    pub fn sections(&self) -> &[Section] {
        self.tracker.sections().sections()
    }

    #[must_use]
    /// Every section placed in the current dot layout.
    pub fn dimensions(&self) -> Vec<SectionWithDimensions<'_>> {
        self.gesture.layout().dimensions(self.sections())
    }

    #[must_use]
    /// Current active section.
    pub fn active_section(&self) -> Option<&Section> {
        self.tracker.active_section()
    }

    #[must_use]
    /// Active-section state snapshot.
    pub fn state(&self) -> ActiveSectionState<'_> {
        self.tracker.state()
    }

    #[must_use]
    /// Lifecycle phase of the section gesture.
    pub fn phase(&self) -> DragPhase {
        self.gesture.phase()
    }

    #[must_use]
    /// Whether the section affordance should be drawn.
    pub fn is_visible(&self) -> bool {
        self.bar.is_visible()
    }

    #[must_use]
    /// The section affordance's visibility timer.
    pub fn visibility(&self) -> &AutoHideTimer {
        &self.bar
    }

    #[must_use]
    /// The section picker.
    pub fn picker(&self) -> &SectionPicker {
        &self.picker
    }

    #[must_use]
    /// The plain thumb indicator.
    pub fn indicator(&self) -> &ThumbIndicator {
        &self.indicator
    }

    #[must_use]
    /// Last list scroll percentage.
    pub fn offset_percentage(&self) -> f32 {
        self.offset_percentage
    }

    #[must_use]
    /// Where to draw the section thumb: under the pointer during a gesture, otherwise on the
    /// active section's dot.
    pub fn thumb_pixel(&self) -> Option<f32> {
        let layout = self.gesture.layout();
        self.gesture
            .thumb_pixel()
            .or_else(|| self.active_section().map(|s| layout.section_to_pixel(s)))
    }

    /// Scroll offset for a dot column shown in `viewport_length`, following the thumb.
    pub fn column_scroll_offset(&mut self, viewport_length: f32) -> f32 {
        let layout = self.gesture.layout();
        let column_length = layout.column_length(self.sections().len());
        if let Some(thumb) = self.thumb_pixel() {
            self.column_offset = column_scroll_offset(
                thumb,
                self.column_offset,
                viewport_length,
                column_length,
                layout.dot_size,
            );
        }
        self.column_offset
    }

    #[must_use]
    /// Scroll offset for a tab strip that centres the active tab.
    pub fn tab_scroll_amount(
        &self,
        tabs: &[TabMeasurement],
        strip_width: f32,
        container_width: f32,
    ) -> f32 {
        self.active_section().map_or(0.0, |section| {
            tab_scroll_amount(tabs, section.section_index, strip_width, container_width)
        })
    }

    fn apply_update(&mut self, update: GestureUpdate) {
        if let Some(change) = update.changed {
            self.events.push(EngineEvent::SectionChanged(change));
        }
        if let Some(command) = update.command {
            self.emit_scroll(command);
        }
    }

    fn emit_scroll(&mut self, command: ScrollCommand) {
        let rearms_retry = matches!(
            command,
            ScrollCommand::ScrollToIndex { index, .. } if self.retried == Some(index)
        );
        if rearms_retry {
            self.retried = None;
        }
        debug!(?command, "scroll command");
        self.events.push(EngineEvent::Scroll(command));
    }

    fn present_active(&mut self, now_ms: u64) {
        let Some(section) = self.tracker.active_section() else {
            return;
        };
        self.picker.show(section, now_ms);
        if let Some(section_index) = self.picker.take_centre_request() {
            self.events.push(EngineEvent::CentrePicker { section_index });
        }
        self.bar.lock(true, now_ms);
    }
}

impl ScrollListener for FastScrollEngine {
    fn on_scroll_to_offset_percentage(&mut self, offset_percentage: f32, now_ms: u64) {
        self.on_scroll(offset_percentage, now_ms);
    }

    fn on_viewable_index_changed(&mut self, index: usize, now_ms: u64) {
        self.on_visible_index_changed(index, now_ms);
    }
}

#[cfg(test)]
#[path = "tests/engine.rs"]
mod tests;
