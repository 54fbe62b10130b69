//! Tracing setup
//!
//! `RUST_LOG` overrides the default `warn` filter. The TUI owns the terminal,
//! so it logs to a file instead of stderr.

use std::fs::File;
use std::io;
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Log file used while the TUI is running
pub const TUI_LOG_FILE: &str = "hangman_tui.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Log to stderr
///
/// Does nothing if a subscriber is already installed.
pub fn init_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_target(false)
        .try_init(); // already installed
}

/// Log to a file, truncating it first
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn init_file<P: AsRef<Path>>(path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init(); // already installed
    Ok(())
}
