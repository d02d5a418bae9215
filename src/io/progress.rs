//! Terminal progress display for a benchmark run

use crate::io::configuration::PROGRESS_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static SWEEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress over all (instance, thread count) records of a run
///
/// Drawn on stderr. Diagnostic text must be written through
/// [`ProgressManager::suspend`] so it does not tear the bar.
pub struct ProgressManager {
    bar: ProgressBar,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::hidden()
    }
}

impl ProgressManager {
    /// Create a visible progress display
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(Some(0), ProgressDrawTarget::stderr());
        bar.set_style(SWEEP_STYLE.clone());
        Self { bar }
    }

    /// Create a progress display that never draws
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Set the total number of expected records
    pub fn initialize(&self, instances: usize, thread_counts: usize) {
        self.bar
            .set_length(instances.saturating_mul(thread_counts) as u64);
    }

    /// Show the instance currently being swept
    pub fn start_instance(&self, path: &Path) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_message(name);
    }

    /// Count one finished record
    pub fn record_done(&self) {
        self.bar.inc(1);
    }

    /// Count the records of an instance that was skipped
    pub fn skip_instance(&self, thread_counts: usize) {
        self.bar.inc(thread_counts as u64);
    }

    /// Records counted so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Hide the bar while `f` writes to the terminal
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
