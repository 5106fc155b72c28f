//! Step-by-step progress display for the training pipeline

use crate::io::configuration::{PIPELINE_STEPS, PROGRESS_BAR_WIDTH};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::sync::atomic::{AtomicU64, Ordering};

static STEP_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "[{{elapsed_precise}}] [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks completion of the pipeline steps on a single bar
///
/// A hidden tracker keeps the same bookkeeping without drawing, which is used
/// when tool output is streamed to the terminal.
///
/// The completed count is kept apart from the bar, whose position jumps to
/// its length once it is finished or cleared.
pub struct StepProgress {
    bar: ProgressBar,
    completed: AtomicU64,
}

impl StepProgress {
    /// Create a visible tracker sized to the full pipeline
    pub fn new() -> Self {
        let bar = ProgressBar::new(PIPELINE_STEPS);
        bar.set_style(STEP_STYLE.clone());
        Self::around(bar)
    }

    /// Create a tracker that never draws
    pub fn hidden() -> Self {
        let bar = ProgressBar::with_draw_target(Some(PIPELINE_STEPS), ProgressDrawTarget::hidden());
        Self::around(bar)
    }

    const fn around(bar: ProgressBar) -> Self {
        Self {
            bar,
            completed: AtomicU64::new(0),
        }
    }

    /// Announce the step about to run
    pub fn start_step(&self, label: &str) {
        self.bar.set_message(label.to_string());
    }

    /// Mark the current step as done
    pub fn complete_step(&self) {
        self.completed.fetch_add(1, Ordering::Relaxed);
        self.bar.inc(1);
    }

    /// Number of completed steps
    pub fn completed(&self) -> u64 {
        self.completed.load(Ordering::Relaxed)
    }

    /// Leave the bar in its final state after a successful run
    pub fn finish(&self) {
        self.bar.finish_with_message("done");
    }

    /// Remove the bar after a failed run so the error message stands alone
    pub fn abandon(&self) {
        self.bar.finish_and_clear();
    }
}

impl Default for StepProgress {
    fn default() -> Self {
        Self::new()
    }
}
