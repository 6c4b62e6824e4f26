//! Section markers as JSON.
//!
//! Markers found in a document can be printed for inspection or editing, and a marker file can
//! replace the headings entirely when the sections should not follow the document's structure.

use crate::error::InvalidInputError;
use crate::input::Heading;
use crate::section::SectionMarker;
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// Serialisable list of section markers.
pub struct MarkerPlan {
    /// Markers in list order.
    pub sections: Vec<MarkerEntry>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
/// One marker in a marker file.
pub struct MarkerEntry {
    /// List row of the section header.
    pub index: usize,
    /// Label text.
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Dot colour name or `#rrggbb` hex.
    pub dot_color: Option<String>,
}

impl MarkerPlan {
    #[must_use]
    /// Markers for every heading at or above `max_level`. Sub-headings get a dimmer dot.
    pub fn from_headings(headings: &[Heading], max_level: usize) -> Self {
        let sections = headings
            .iter()
            .filter(|heading| heading.level <= max_level)
            .map(|heading| MarkerEntry {
                index: heading.row,
                text: heading.title.clone(),
                dot_color: (heading.level > 1).then(|| "gray".to_string()),
            })
            .collect();
        Self { sections }
    }

    /// Parses a marker file.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::MalformedMarkers`] if the JSON does not describe markers.
    pub fn from_json(json: &str) -> Result<Self, InvalidInputError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a marker file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not describe markers.
    pub fn load(path: &Path) -> io::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Pretty-printed JSON for this plan.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Converts entries into section markers, parsing dot colours.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidInputError::InvalidDotColor`] for a colour ratatui does not recognise.
    pub fn into_markers(self) -> Result<Vec<SectionMarker>, InvalidInputError> {
        self.sections
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                let marker = SectionMarker::new(entry.index, entry.text);
                match entry.dot_color {
                    None => Ok(marker),
                    Some(value) => Color::from_str(&value)
                        .map(|color| marker.with_dot_color(color))
                        .map_err(|_| InvalidInputError::InvalidDotColor { position, value }),
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/markers.rs"]
mod tests;
