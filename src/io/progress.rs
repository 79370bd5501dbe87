//! Progress display for parallel tile placement

use crate::reconstruction::runner::ProgressObserver;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;

static PLACEMENT_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("Placing tiles [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Terminal progress bar tracking tile completion
///
/// Completion callbacks arrive from worker threads in arbitrary order; the
/// bar only tracks the completed count out of the total, so out-of-order
/// updates are harmless.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a progress bar for the given number of tiles
    pub fn visible(total: usize) -> Self {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(PLACEMENT_STYLE.clone());

        Self { bar }
    }

    /// Create a manager that displays nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Number of tiles reported complete so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Clear the display once all tiles are processed
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl ProgressObserver for ProgressManager {
    fn tile_completed(&self, completed: usize, _total: usize) {
        self.bar.set_position(completed as u64);
    }
}
