//! Pure conversions between scroll percentages, sections and affordance pixels.
//!
//! Pixels are whatever unit the affordance is laid out in; the terminal front end uses rows and
//! columns. Input outside a track is clamped here and never reported as an error.

use crate::section::Section;

#[must_use]
/// Maps a list scroll percentage onto a track of `track_length` pixels.
pub fn offset_percentage_to_pixel(offset_percentage: f32, track_length: f32) -> f32 {
    clamp_unit(offset_percentage) * track_length
}

#[must_use]
/// Maps a pixel on `[track_min, track_max]` back to a percentage in `[0, 1]`.
///
/// Pixels outside the track are clamped to it. A degenerate track yields `0`.
pub fn pixel_to_offset_percentage(pixel: f32, track_min: f32, track_max: f32) -> f32 {
    let span = track_max - track_min;
    if span.is_nan() || span <= 0.0 {
        return 0.0;
    }
    if pixel.is_nan() {
        return 0.0;
    }
    if pixel < track_min || pixel > track_max {
        tracing::trace!(pixel, track_min, track_max, "clamping pointer to track");
    }
    (pixel.clamp(track_min, track_max) - track_min) / span
}

#[must_use]
/// Centre of the dot (or tab) drawn for `section`.
pub fn section_to_pixel(section: &Section, dot_size: f32, dot_margin: f32) -> f32 {
    ordinal_center(section.section_index, dot_size, dot_margin)
}

#[must_use]
/// The section whose centre is closest to `pixel`; ties go to the lower ordinal.
pub fn pixel_to_nearest_section<'a>(
    pixel: f32,
    sections: &[SectionWithDimensions<'a>],
) -> Option<&'a Section> {
    let mut best: Option<(&'a Section, f32)> = None;
    for dims in sections {
        let distance = (dims.center - pixel).abs();
        if best.is_none_or(|(_, closest)| distance < closest) {
            best = Some((dims.section, distance));
        }
    }
    best.map(|(section, _)| section)
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        return 0.0;
    }
    if !(0.0..=1.0).contains(&value) {
        tracing::trace!(value, "clamping scroll percentage");
    }
    value.clamp(0.0, 1.0)
}

#[allow(clippy::cast_precision_loss)]
fn ordinal_center(section_index: usize, dot_size: f32, dot_margin: f32) -> f32 {
    let ordinal = section_index as f32;
    dot_margin * (ordinal + 1.0) + dot_size * ordinal + dot_size / 2.0
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// A section with its position in a fixed dot layout.
pub struct SectionWithDimensions<'a> {
    /// The section being placed.
    pub section: &'a Section,
    /// Leading edge of the dot.
    pub top: f32,
    /// Snap point for gestures, equal to [`section_to_pixel`].
    pub center: f32,
    /// Trailing edge of the dot.
    pub end: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Fixed dot size and spacing for a column of per-section dots or a strip of tabs.
pub struct DotLayout {
    /// Extent of each dot along the track.
    pub dot_size: f32,
    /// Gap before each dot.
    pub dot_margin: f32,
}

impl Default for DotLayout {
    fn default() -> Self {
        Self {
            dot_size: 10.0,
            dot_margin: 12.0,
        }
    }
}

impl DotLayout {
    #[must_use]
    /// Creates a layout.
    pub fn new(dot_size: f32, dot_margin: f32) -> Self {
        Self {
            dot_size,
            dot_margin,
        }
    }

    #[must_use]
    /// Centre of the dot for `section` in this layout.
    pub fn section_to_pixel(&self, section: &Section) -> f32 {
        section_to_pixel(section, self.dot_size, self.dot_margin)
    }

    #[must_use]
    /// Lays out every section. Recompute whenever the table or the layout changes.
    pub fn dimensions<'a>(&self, sections: &'a [Section]) -> Vec<SectionWithDimensions<'a>> {
        sections
            .iter()
            .map(|section| {
                let center = self.section_to_pixel(section);
                let top = center - self.dot_size / 2.0;
                SectionWithDimensions {
                    section,
                    top,
                    center,
                    end: top + self.dot_size,
                }
            })
            .collect()
    }

    #[must_use]
    /// The valid pointer range: from the first section's centre to the last's.
    pub fn track_bounds(&self, sections: &[Section]) -> Option<(f32, f32)> {
        let first = sections.first()?;
        let last = sections.last()?;
        Some((self.section_to_pixel(first), self.section_to_pixel(last)))
    }

    #[must_use]
    /// Total extent of a column holding `count` dots, trailing margin included.
    #[allow(clippy::cast_precision_loss)]
    pub fn column_length(&self, count: usize) -> f32 {
        let count = count as f32;
        self.dot_margin * (count + 1.0) + self.dot_size * count
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Where the thumb of a plain scroll indicator sits, and the matching list percentage.
pub struct ThumbPosition {
    /// Leading edge of the thumb along the track.
    pub offset: f32,
    /// List scroll percentage the thumb stands for.
    pub percentage: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Track geometry for a draggable thumb that stands for the whole list.
pub struct ThumbTrack {
    /// Length of the track the thumb moves along.
    pub track_length: f32,
    /// Length of the thumb itself.
    pub thumb_length: f32,
}

impl ThumbTrack {
    fn travel(&self) -> f32 {
        (self.track_length - self.thumb_length).max(0.0)
    }

    #[must_use]
    /// Thumb leading edge for a list scroll percentage.
    pub fn thumb_offset(&self, offset_percentage: f32) -> f32 {
        offset_percentage_to_pixel(offset_percentage, self.travel())
    }

    #[must_use]
    /// Converts a pointer position into a thumb position, keeping the thumb centred on the
    /// pointer wherever the track allows.
    pub fn pointer_to_thumb(&self, pointer: f32) -> ThumbPosition {
        let half = self.thumb_length / 2.0;
        let percentage = pixel_to_offset_percentage(pointer, half, self.track_length - half);
        ThumbPosition {
            offset: percentage * self.travel(),
            percentage,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Horizontal placement of one tab inside the tab strip.
pub struct TabMeasurement {
    /// Offset of the tab from the start of the strip.
    pub left: f32,
    /// Width of the tab.
    pub width: f32,
}

#[must_use]
/// Scroll offset for a tab strip that centres the tab at `active` inside `container_width`.
///
/// Clamped so the strip never scrolls past either end. Unmeasured tabs scroll to the start.
pub fn tab_scroll_amount(
    tabs: &[TabMeasurement],
    active: usize,
    strip_width: f32,
    container_width: f32,
) -> f32 {
    let Some(tab) = tabs.get(active) else {
        return 0.0;
    };
    let centred = tab.left - (container_width - tab.width) / 2.0;
    let right_bound = (strip_width - container_width).max(0.0);
    if centred.is_nan() {
        return 0.0;
    }
    centred.clamp(0.0, right_bound)
}

#[must_use]
/// Scroll offset for a dot column taller than its viewport.
///
/// Keeps `current_offset` while the thumb is inside the visible window (inset by one dot at
/// either end) and re-centres on the thumb once it leaves it.
pub fn column_scroll_offset(
    thumb: f32,
    current_offset: f32,
    viewport_length: f32,
    column_length: f32,
    dot_size: f32,
) -> f32 {
    let max_offset = (column_length - viewport_length).max(0.0);
    let window_start = current_offset + dot_size;
    let window_end = current_offset + viewport_length - dot_size;
    let next = if thumb < window_start || thumb > window_end {
        thumb - viewport_length / 2.0
    } else {
        current_offset
    };
    if next.is_nan() {
        return 0.0;
    }
    next.clamp(0.0, max_offset)
}

#[cfg(test)]
#[path = "tests/position.rs"]
mod tests;
