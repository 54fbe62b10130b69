//! Formatting utilities for terminal output

use crate::core::Status;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many tries are left out of the starting amount
#[must_use]
pub fn tries_bar(remaining: u32, total: u32, width: usize) -> String {
    create_progress_bar(f64::from(remaining), f64::from(total), width)
}

/// Miss list, or a placeholder when there are none
#[must_use]
pub fn misses_or_none(misses: &str) -> &str {
    if misses.is_empty() { "(none)" } else { misses }
}

/// Short banner for a finished round
#[must_use]
pub const fn status_banner(status: Status) -> &'static str {
    match status {
        Status::Playing => "",
        Status::Won => "🎉 Y O U   W I N !",
        Status::Lost => "💀 G A M E   O V E R",
        Status::Quit => "🏳  R O U N D   A B A N D O N E D",
    }
}
