//! Progress indicators for CLI mode
//!
//! This module provides progress display using indicatif.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while checks are in flight
pub struct CheckSpinner {
    bar: ProgressBar,
    total: usize,
}

impl CheckSpinner {
    /// Start a spinner for `total` checks
    pub fn start(total: usize) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner())
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "✓"]),
        );
        bar.set_message(format!("Running {} checks...", total));
        bar.enable_steady_tick(Duration::from_millis(80));
        Self { bar, total }
    }

    /// Show how many checks have finished
    pub fn finished(&self, done: usize, last: &str) {
        self.bar
            .set_message(format!("[{}/{}] {} done", done, self.total, last));
    }

    /// Finish and clear the spinner
    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}
