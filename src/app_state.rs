//! The terminal front end's state: a simulated list viewport wired to the engine.
//!
//! The engine never touches the list directly. This module plays the external list: it reports
//! scroll percentage and first visible row after every move, carries out the engine's scroll
//! commands (animating animated jumps over a few ticks, the way a real list would drift), and
//! reports targets it cannot reach. It also hit-tests mouse input against the regions the UI
//! last drew and forwards it as pointer events.

use crate::config::Config;
use crate::engine::{EngineEvent, FastScrollEngine};
use crate::error::ScrollTargetFailure;
use crate::gesture::ScrollCommand;
use crate::position::TabMeasurement;
use crate::section::SectionIndex;
use ratatui::layout::{Position, Rect};
use std::str::FromStr;
use tracing::trace;

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
/// Which fast-navigation affordance is shown.
pub enum Affordance {
    /// Column of per-section dots with a thumb and a section picker.
    Dots,
    /// Horizontal strip of section tabs.
    Tabs,
    /// Plain draggable thumb for the whole list.
    Indicator,
}

impl Affordance {
    #[must_use]
    /// The next affordance in display order.
    pub fn next(self) -> Self {
        match self {
            Self::Dots => Self::Tabs,
            Self::Tabs => Self::Indicator,
            Self::Indicator => Self::Dots,
        }
    }
}

impl FromStr for Affordance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dots" => Ok(Self::Dots),
            "tabs" => Ok(Self::Tabs),
            "indicator" => Ok(Self::Indicator),
            _ => Err(format!(
                "Invalid affordance: {s}. Use 'dots', 'tabs' or 'indicator'"
            )),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// Viewport over a long list of rows, standing in for a virtualised list widget.
pub struct ListView {
    rows: Vec<String>,
    offset: usize,
    height: usize,
    target: Option<usize>,
}

impl ListView {
    #[must_use]
    /// Creates a viewport at the top of `rows`.
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            rows,
            offset: 0,
            height: 1,
            target: None,
        }
    }

    #[must_use]
    /// All rows.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    /// First visible row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    /// Number of visible rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Resizes the viewport, keeping the offset in range.
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.offset = self.offset.min(self.max_offset());
    }

    #[must_use]
    /// Largest first-visible row.
    pub fn max_offset(&self) -> usize {
        self.rows.len().saturating_sub(self.height)
    }

    #[must_use]
    /// Scroll position as a fraction of the scrollable extent.
    #[allow(clippy::cast_precision_loss)]
    pub fn offset_percentage(&self) -> f32 {
        let max = self.max_offset();
        if max == 0 {
            0.0
        } else {
            self.offset as f32 / max as f32
        }
    }

    #[must_use]
    /// True while an animated jump is in progress.
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Moves by `delta` rows, cancelling any animation.
    pub fn scroll_by(&mut self, delta: isize) {
        self.target = None;
        self.offset = self
            .offset
            .saturating_add_signed(delta)
            .min(self.max_offset());
    }

    /// Brings `index` to the top of the viewport, as far as the list allows.
    ///
    /// # Errors
    ///
    /// Returns [`ScrollTargetFailure`] when `index` is past the last row.
    pub fn scroll_to_index(
        &mut self,
        index: usize,
        animated: bool,
    ) -> Result<(), ScrollTargetFailure> {
        if index >= self.rows.len() {
            return Err(ScrollTargetFailure { index });
        }
        let target = index.min(self.max_offset());
        if animated {
            self.target = Some(target);
        } else {
            self.target = None;
            self.offset = target;
        }
        Ok(())
    }

    /// Jumps to a fraction of the scrollable extent.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn scroll_to_offset(&mut self, offset_percentage: f32) {
        self.target = None;
        let max = self.max_offset();
        let fraction = if offset_percentage.is_nan() {
            0.0
        } else {
            offset_percentage.clamp(0.0, 1.0)
        };
        self.offset = ((fraction * max as f32).round() as usize).min(max);
    }

    /// Advances an animated jump by one frame. Returns true if the offset moved.
    pub fn step(&mut self) -> bool {
        let Some(target) = self.target else {
            return false;
        };
        let distance = target.abs_diff(self.offset);
        let stride = (distance / 4).max(1);
        if distance <= stride {
            self.offset = target;
            self.target = None;
        } else if target > self.offset {
            self.offset += stride;
        } else {
            self.offset -= stride;
        }
        distance > 0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which region a held mouse button went down in.
pub enum PointerTarget {
    /// The section dots.
    Dots,
    /// The plain indicator track.
    Indicator,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
/// Screen regions from the last frame, used for hit testing.
pub struct HitAreas {
    /// Document rows.
    pub list: Rect,
    /// Dot column.
    pub dots: Option<Rect>,
    /// Section picker, including its border.
    pub picker: Option<Rect>,
    /// Tab strip.
    pub tabs: Option<Rect>,
    /// Indicator track.
    pub indicator: Option<Rect>,
}

/// Ties the list viewport, the engine and the last drawn layout together.
pub struct AppState {
    /// The simulated list.
    pub list: ListView,
    /// The synchronization engine.
    pub engine: FastScrollEngine,
    /// Affordance being shown.
    pub affordance: Affordance,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Regions drawn in the last frame.
    pub areas: HitAreas,
    /// Dot column scroll offset used in the last frame.
    pub column_offset: f32,
    /// Tab strip scroll offset used in the last frame.
    pub tab_scroll: u16,
    /// Tab placement from the last frame.
    pub tabs: Vec<TabMeasurement>,
    /// First section shown in the picker.
    pub picker_offset: usize,
    pointer: Option<PointerTarget>,
    reported_offset: Option<usize>,
}

impl AppState {
    #[must_use]
    /// Wires a fresh engine over `sections` to a viewport over `rows`.
    pub fn new(
        rows: Vec<String>,
        sections: SectionIndex,
        affordance: Affordance,
        cfg: &Config,
    ) -> Self {
        Self {
            list: ListView::new(rows),
            engine: FastScrollEngine::new(sections, &cfg.engine_config()),
            affordance,
            message: None,
            areas: HitAreas::default(),
            column_offset: 0.0,
            tab_scroll: 0,
            tabs: Vec::new(),
            picker_offset: 0,
            pointer: None,
            reported_offset: None,
        }
    }

    /// Scrolls the list by `delta` rows from the keyboard or wheel.
    pub fn scroll_by(&mut self, delta: isize, now_ms: u64) {
        self.list.scroll_by(delta);
        self.report_list(now_ms);
    }

    /// Scrolls one viewport up or down.
    pub fn page(&mut self, down: bool, now_ms: u64) {
        let rows = isize::try_from(self.list.height()).unwrap_or(isize::MAX);
        self.scroll_by(if down { rows } else { -rows }, now_ms);
    }

    /// Jumps to the section after (or before) the active one.
    pub fn jump_section(&mut self, forward: bool, now_ms: u64) {
        let count = self.engine.sections().len();
        if count == 0 {
            return;
        }
        let next = match self.engine.active_section() {
            Some(section) if forward => (section.section_index + 1).min(count - 1),
            Some(section) => section.section_index.saturating_sub(1),
            None => 0,
        };
        self.engine.scroll_to_section(next, now_ms);
        self.apply_engine_events(now_ms);
    }

    /// Advances engine timers and list animation by one frame.
    pub fn tick(&mut self, now_ms: u64) {
        self.engine.tick(now_ms);
        self.apply_engine_events(now_ms);
        if self.list.step() {
            self.report_list(now_ms);
        }
    }

    /// Mouse button pressed at a screen cell.
    pub fn on_mouse_down(&mut self, column: u16, row: u16, now_ms: u64) {
        let position = Position::new(column, row);
        let areas = self.areas;

        if let Some(area) = areas.picker.filter(|a| a.contains(position)) {
            let entry = usize::from(row.saturating_sub(area.y + 1));
            let section_index = self.picker_offset + entry;
            if section_index < self.engine.sections().len() {
                self.engine.pick_section(section_index, now_ms);
            }
        } else if let Some(area) = areas.dots.filter(|a| a.contains(position)) {
            if self.engine.is_visible() {
                self.pointer = Some(PointerTarget::Dots);
                let pixel = self.dot_pixel(area, row);
                self.engine.on_drag_start(pixel, now_ms);
            }
        } else if let Some(area) = areas.indicator.filter(|a| a.contains(position)) {
            self.pointer = Some(PointerTarget::Indicator);
            self.engine
                .on_thumb_drag_start(cell_center(row, area.y), now_ms);
        } else if let Some(area) = areas.tabs.filter(|a| a.contains(position)) {
            let x = f32::from(column - area.x) + f32::from(self.tab_scroll);
            if let Some(section_index) = self
                .tabs
                .iter()
                .position(|tab| x >= tab.left && x < tab.left + tab.width)
            {
                self.engine.scroll_to_section(section_index, now_ms);
            }
        }
        self.apply_engine_events(now_ms);
    }

    /// Mouse dragged with the button held.
    pub fn on_mouse_drag(&mut self, row: u16, now_ms: u64) {
        match (self.pointer, self.areas.dots, self.areas.indicator) {
            (Some(PointerTarget::Dots), Some(area), _) => {
                let pixel = self.dot_pixel(area, row);
                self.engine.on_drag_move(pixel, now_ms);
            }
            (Some(PointerTarget::Indicator), _, Some(area)) => {
                self.engine
                    .on_thumb_drag_move(cell_center(row, area.y), now_ms);
            }
            _ => {}
        }
        self.apply_engine_events(now_ms);
    }

    /// Mouse button released.
    pub fn on_mouse_up(&mut self, row: u16, now_ms: u64) {
        match (self.pointer.take(), self.areas.dots, self.areas.indicator) {
            (Some(PointerTarget::Dots), Some(area), _) => {
                let pixel = self.dot_pixel(area, row);
                self.engine.on_drag_end(pixel, now_ms);
            }
            (Some(PointerTarget::Indicator), _, Some(area)) => {
                self.engine
                    .on_thumb_drag_end(cell_center(row, area.y), now_ms);
            }
            (Some(PointerTarget::Dots), None, _) => self.engine.on_drag_cancel(now_ms),
            (Some(PointerTarget::Indicator), _, None) => self.engine.on_thumb_drag_cancel(now_ms),
            _ => {}
        }
        self.apply_engine_events(now_ms);
    }

    /// Mouse wheel over a screen cell.
    pub fn on_wheel(&mut self, column: u16, row: u16, down: bool, now_ms: u64) {
        let position = Position::new(column, row);
        if let Some(area) = self.areas.picker.filter(|a| a.contains(position)) {
            let visible = usize::from(area.height.saturating_sub(2));
            let max = self.engine.sections().len().saturating_sub(visible);
            self.picker_offset = if down {
                (self.picker_offset + 1).min(max)
            } else {
                self.picker_offset.saturating_sub(1)
            };
            self.engine.on_picker_scroll(now_ms);
        } else {
            self.scroll_by(if down { 3 } else { -3 }, now_ms);
        }
    }

    /// Applies everything the engine asked for since the last call.
    pub fn apply_engine_events(&mut self, now_ms: u64) {
        for event in self.engine.drain_events() {
            match event {
                EngineEvent::Scroll(ScrollCommand::ScrollToIndex { index, animated }) => {
                    if let Err(failure) = self.list.scroll_to_index(index, animated) {
                        self.message = Some(failure.to_string());
                        self.engine.on_scroll_to_index_failed(failure, now_ms);
                    }
                    self.report_list(now_ms);
                }
                EngineEvent::Scroll(ScrollCommand::ScrollToOffset { offset_percentage }) => {
                    self.list.scroll_to_offset(offset_percentage);
                    self.report_list(now_ms);
                }
                EngineEvent::SectionChanged(change) => {
                    trace!(section = ?change.section_index, "section highlighted");
                }
                EngineEvent::CentrePicker { section_index } => {
                    let visible = self
                        .areas
                        .picker
                        .map_or(0, |area| usize::from(area.height.saturating_sub(2)));
                    self.picker_offset = section_index.saturating_sub(visible / 2);
                }
            }
        }
    }

    fn report_list(&mut self, now_ms: u64) {
        let offset = self.list.offset();
        if self.reported_offset == Some(offset) {
            return;
        }
        self.reported_offset = Some(offset);
        self.engine.on_scroll(self.list.offset_percentage(), now_ms);
        self.engine.on_visible_index_changed(offset, now_ms);
    }

    fn dot_pixel(&self, area: Rect, row: u16) -> f32 {
        cell_center(row, area.y) + self.column_offset
    }
}

fn cell_center(row: u16, origin: u16) -> f32 {
    f32::from(row.saturating_sub(origin)) + 0.5
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
