//! fastscroll: keep a long sectioned list and its fast-navigation affordance in sync.
//!
//! The core is a pure state machine driven by an injected millisecond clock:
//! [`engine::FastScrollEngine`] takes list scroll reports and pointer gestures, decides which
//! section is active, and emits scroll commands for the list to carry out. The terminal front end
//! (documents, headings, drawing) sits on top of it.
#![allow(clippy::multiple_crate_versions)]

pub mod active_section;
pub mod app_state;
pub mod auto_hide;
pub mod config;
pub mod engine;
pub mod error;
pub mod formats;
pub mod gesture;
pub mod handle;
pub mod indicator;
pub mod input;
pub mod logging;
pub mod markers;
pub mod picker;
pub mod position;
pub mod section;
pub mod throttle;
pub mod timer;
pub mod ui;
