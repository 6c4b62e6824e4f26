//! File logging for the terminal front end.
//!
//! stdout belongs to the UI, so log lines go to a file. `RUST_LOG` overrides the level given on
//! the command line.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs a global subscriber appending plaintext lines to `log_path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a subscriber is already installed.
pub fn init_to_file(log_path: &Path, default_level: Level) -> io::Result<()> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let log_file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{default_level},fastscroll={default_level}"))
    });
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false);
    #[cfg(debug_assertions)]
    let layer = layer.with_file(true).with_line_number(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(io::Error::other)
}
