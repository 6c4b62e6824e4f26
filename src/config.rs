//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a fastscroll.toml, and if present we load settings from there.
//! This provides timing windows, affordance geometry and file extension preferences. Geometry is
//! in terminal cells.

use crate::engine::EngineConfig;
use crate::gesture::GestureTiming;
use crate::position::{DotLayout, ThumbTrack};
use facet::Facet;
use std::fs;

const CONFIG_FILE: &str = "fastscroll.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from fastscroll.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 2000)]
    /// Idle time before the affordance hides; `0` keeps it visible.
    pub hide_timeout_ms: u64,
    #[facet(default = 120)]
    /// Minimum spacing between list jumps while dragging.
    pub throttle_interval_ms: u64,
    #[facet(default = 1000)]
    /// Quiet period before the jump on drag release is sent.
    pub release_debounce_ms: u64,
    #[facet(default = 1000)]
    /// How long list reports are ignored after a jump.
    pub settle_ms: u64,
    #[facet(default = false)]
    /// Re-send the jump once the settle window closes.
    pub settle_reissue: bool,
    #[facet(default = 250)]
    /// Delay before retrying a jump the list could not complete.
    pub retry_delay_ms: u64,
    #[facet(default = 3000)]
    /// Idle time before the section picker closes.
    pub picker_timeout_ms: u64,
    #[facet(default = 1.0)]
    /// Rows per dot.
    pub dot_size: f32,
    #[facet(default = 1.0)]
    /// Rows between dots.
    pub dot_margin: f32,
    #[facet(default = 3.0)]
    /// Rows covered by the plain indicator's thumb.
    pub thumb_length: f32,
    #[facet(default = 2)]
    /// Deepest heading level that starts a section.
    pub max_heading_level: usize,
    #[facet(default = vec!["md".to_string()])]
    /// File suffixes to match when scanning directories.
    pub file_extensions: Vec<String>,
    #[facet(default = "dots".to_string())]
    /// Affordance to show: `dots`, `tabs` or `indicator`.
    pub affordance: String,
    #[facet(default = 16)]
    /// Event loop tick interval.
    pub tick_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hide_timeout_ms: 2000,
            throttle_interval_ms: 120,
            release_debounce_ms: 1000,
            settle_ms: 1000,
            settle_reissue: false,
            retry_delay_ms: 250,
            picker_timeout_ms: 3000,
            dot_size: 1.0,
            dot_margin: 1.0,
            thumb_length: 3.0,
            max_heading_level: 2,
            file_extensions: vec!["md".to_string()],
            affordance: "dots".to_string(),
            tick_ms: 16,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from fastscroll.toml if present.
    pub fn load() -> Self {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(contents) => Self::parse(&contents),
            Err(_) => Self::default(),
        }
    }

    #[must_use]
    /// Parse TOML configuration, falling back to defaults when it is invalid.
    pub fn parse(contents: &str) -> Self {
        match facet_toml::from_str::<Self>(contents) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "ignoring invalid {CONFIG_FILE}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// Engine tunables derived from these preferences.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            layout: DotLayout::new(self.dot_size, self.dot_margin),
            timing: GestureTiming {
                throttle_interval_ms: self.throttle_interval_ms,
                release_debounce_ms: self.release_debounce_ms,
                settle_ms: self.settle_ms,
                settle_reissue: self.settle_reissue,
            },
            hide_timeout_ms: self.hide_timeout_ms,
            picker_timeout_ms: self.picker_timeout_ms,
            picker_recentre_ms: self.settle_ms,
            retry_delay_ms: self.retry_delay_ms,
            thumb_track: ThumbTrack {
                track_length: 0.0,
                thumb_length: self.thumb_length,
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
