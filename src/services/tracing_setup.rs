//! Tracing subscriber setup
//!
//! The TUI owns the terminal while it runs, so diagnostics go to a log file.
//! Verbosity follows `RUST_LOG` and defaults to `info`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// `tabletop.log` in the system temp dir
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("tabletop.log")
}

/// Install the global subscriber writing to `log_file`.
///
/// Logging is best effort: if the file cannot be opened or a subscriber is
/// already installed, the app runs without one. Returns whether the
/// subscriber was installed.
pub fn init_global(log_file: &Path) -> bool {
    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file {}: {}",
                log_file.display(),
                e
            );
            return false;
        }
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
