//! Progress display for batch submission and table writing

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static TRACKER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] {{msg}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Single progress bar over a known number of steps
///
/// A disabled tracker accepts every call and draws nothing, so callers never
/// need to branch on `--quiet`.
pub struct ProgressTracker {
    bar: Option<ProgressBar>,
}

impl ProgressTracker {
    /// Create a tracker; `enabled == false` yields a silent tracker
    pub fn new(enabled: bool) -> Self {
        Self {
            bar: enabled.then(|| {
                let bar = ProgressBar::new(0);
                bar.set_style(TRACKER_STYLE.clone());
                bar
            }),
        }
    }

    /// Create a tracker that never draws
    pub const fn hidden() -> Self {
        Self { bar: None }
    }

    /// Reset the bar for a new phase of `total` steps
    pub fn start(&self, label: &str, total: usize) {
        if let Some(ref bar) = self.bar {
            bar.reset();
            bar.set_length(total as u64);
            bar.set_message(label.to_string());
        }
    }

    /// Advance by one step
    pub fn advance(&self) {
        if let Some(ref bar) = self.bar {
            bar.inc(1);
        }
    }

    /// Steps completed in the current phase
    pub fn position(&self) -> u64 {
        self.bar.as_ref().map_or(0, ProgressBar::position)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        if let Some(ref bar) = self.bar {
            bar.finish_and_clear();
        }
    }
}
