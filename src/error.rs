//! Error types raised while building section tables and reported back by the list.
//!
//! Out-of-range pointer and scroll input has no error type: it is clamped where it arrives.

use thiserror::Error;

/// Malformed section input; fatal to constructing a section table.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    /// Markers must be strictly increasing by list index.
    #[error("section marker #{position} at list index {index} must come after list index {previous}")]
    UnsortedMarkers {
        /// Ordinal of the offending marker.
        position: usize,
        /// List index of the offending marker.
        index: usize,
        /// List index of the marker before it.
        previous: usize,
    },

    /// A dot colour string that does not name a colour.
    #[error("section marker #{position} has an unrecognised dot colour {value:?}")]
    InvalidDotColor {
        /// Ordinal of the offending marker.
        position: usize,
        /// The colour string as written.
        value: String,
    },

    /// The marker file could not be parsed.
    #[error("could not read section markers: {0}")]
    MalformedMarkers(String),
}

impl From<serde_json::Error> for InvalidInputError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedMarkers(err.to_string())
    }
}

/// The list could not complete a scroll-to-index command.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("list could not scroll to index {index}")]
pub struct ScrollTargetFailure {
    /// The list index the command targeted.
    pub index: usize,
}
