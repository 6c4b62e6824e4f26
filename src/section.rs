//! Section table for a long list.
//!
//! A section is a labelled boundary anchored at the list position of its header row. The table
//! is built once from raw markers and then only looked up: the "last section at or before this
//! list position" rule in [`nearest_active_section`] decides what section the list is in, for
//! both scroll-driven and drag-driven updates.

use crate::error::InvalidInputError;
use ratatui::style::Color;
use ratatui::text::Line;
use std::fmt;
use std::sync::Arc;

/// Builds a label for a section on demand, given whether it is the active one.
pub type LabelRenderer = Arc<dyn Fn(&Section, bool) -> Line<'static> + Send + Sync>;

#[derive(Clone)]
/// Label data attached to a section. Opaque to the engine; only renderers look inside.
pub enum SectionLabel {
    /// Fixed text.
    Text(String),
    /// Built per frame from the section and its active state.
    Renderer(LabelRenderer),
}

impl SectionLabel {
    #[must_use]
    /// Produces the displayable label for `section`.
    pub fn render(&self, section: &Section, is_active: bool) -> Line<'static> {
        match self {
            Self::Text(text) => Line::from(text.clone()),
            Self::Renderer(render) => render(section, is_active),
        }
    }
}

impl fmt::Debug for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Renderer(_) => f.write_str("Renderer(..)"),
        }
    }
}

impl From<&str> for SectionLabel {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for SectionLabel {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

#[derive(Clone, Debug)]
/// Raw section boundary as supplied by the host, before table construction.
pub struct SectionMarker {
    /// List position of the section header.
    pub index: usize,
    /// Label shown on tabs and in the section picker.
    pub label: SectionLabel,
    /// Overrides the default dot colour for this section.
    pub dot_color: Option<Color>,
}

impl SectionMarker {
    #[must_use]
    /// Creates a marker with the default dot colour.
    pub fn new(index: usize, label: impl Into<SectionLabel>) -> Self {
        Self {
            index,
            label: label.into(),
            dot_color: None,
        }
    }

    #[must_use]
    /// Sets a per-section dot colour.
    pub fn with_dot_color(mut self, color: Color) -> Self {
        self.dot_color = Some(color);
        self
    }
}

#[derive(Clone, Debug)]
/// One entry of the section table.
pub struct Section {
    /// List position of the section header.
    pub index: usize,
    /// List position of the first content row (`index + 1`).
    pub start_index: usize,
    /// Dense ordinal among sections, used for affordance layout.
    pub section_index: usize,
    /// Label shown on tabs and in the section picker.
    pub label: SectionLabel,
    /// Overrides the default dot colour for this section.
    pub dot_color: Option<Color>,
}

impl PartialEq for Section {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
            && self.start_index == other.start_index
            && self.section_index == other.section_index
            && self.dot_color == other.dot_color
    }
}

#[derive(Clone, Debug, Default)]
/// Ordered, validated section table.
///
/// Sections are sorted by `index`, no two share an `index`, and `section_index` runs
/// `0..len()` without gaps.
pub struct SectionIndex {
    sections: Vec<Section>,
}

impl SectionIndex {
    /// Builds the table from markers in list order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::UnsortedMarkers`] if any marker does not come strictly after
    /// the one before it.
    pub fn from_markers<I>(markers: I) -> Result<Self, InvalidInputError>
    where
        I: IntoIterator<Item = SectionMarker>,
    {
        let mut sections: Vec<Section> = Vec::new();

        for (position, marker) in markers.into_iter().enumerate() {
            if let Some(previous) = sections.last() {
                if marker.index <= previous.index {
                    return Err(InvalidInputError::UnsortedMarkers {
                        position,
                        index: marker.index,
                        previous: previous.index,
                    });
                }
            }

            sections.push(Section {
                index: marker.index,
                start_index: marker.index + 1,
                section_index: position,
                label: marker.label,
                dot_color: marker.dot_color,
            });
        }

        Ok(Self { sections })
    }

    /// Builds the table from bare header positions, labelling each section with its 1-based
    /// ordinal.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::UnsortedMarkers`] if the positions are not strictly
    /// increasing.
    pub fn from_header_indices(indices: &[usize]) -> Result<Self, InvalidInputError> {
        Self::from_markers(
            indices
                .iter()
                .enumerate()
                .map(|(ordinal, &index)| SectionMarker::new(index, (ordinal + 1).to_string())),
        )
    }

    #[must_use]
    /// All sections in list order.
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    #[must_use]
    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    /// True when the list has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    /// Looks up a section by its ordinal.
    pub fn get(&self, section_index: usize) -> Option<&Section> {
        self.sections.get(section_index)
    }

    #[must_use]
    /// The section containing `list_position`, see [`nearest_active_section`].
    pub fn nearest_active_section(&self, list_position: usize) -> Option<&Section> {
        nearest_active_section(&self.sections, list_position)
    }
}

#[must_use]
/// Returns the last section whose header is at or before `list_position`.
///
/// `None` when the position precedes every section, including when the table is empty.
pub fn nearest_active_section(table: &[Section], list_position: usize) -> Option<&Section> {
    table
        .iter()
        .rev()
        .find(|section| section.index <= list_position)
}

#[cfg(test)]
#[path = "tests/section.rs"]
mod tests;
