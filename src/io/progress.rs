//! Stage progress display for a single compositing run

use crate::algorithm::executor::{Stage, StageObserver};
use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_TICK_MS};
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{spinner}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Tracks the load, interleave, and write stages of one run
///
/// The bar draws to stderr so it never mixes with the success message.
pub struct ProgressManager {
    bar: ProgressBar,
    completed: usize,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a progress display on stderr
    pub fn new() -> Self {
        Self::with_bar(ProgressBar::new(0))
    }

    /// Create a progress display that renders nothing
    pub fn hidden() -> Self {
        Self::with_bar(ProgressBar::with_draw_target(
            Some(0),
            ProgressDrawTarget::hidden(),
        ))
    }

    fn with_bar(bar: ProgressBar) -> Self {
        bar.set_style(STAGE_STYLE.clone());
        Self { bar, completed: 0 }
    }

    /// Set the number of stages the run will go through
    pub fn initialize(&mut self, stage_count: usize) {
        self.completed = 0;
        self.bar.set_length(stage_count as u64);
        self.bar.set_position(0);
        self.bar
            .enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
    }

    /// Announce the stage now running
    pub fn start_stage(&self, label: impl Into<String>) {
        self.bar.set_message(label.into());
    }

    /// Mark the running stage as done
    pub fn complete_stage(&mut self) {
        self.completed += 1;
        self.bar.set_position(self.completed as u64);
    }

    /// Number of stages completed so far
    pub const fn completed(&self) -> usize {
        self.completed
    }

    /// Remove the bar from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl StageObserver for ProgressManager {
    fn plan(&mut self, stage_count: usize) {
        self.initialize(stage_count);
    }

    fn stage_started(&mut self, stage: &Stage) {
        self.start_stage(stage.to_string());
    }

    fn stage_finished(&mut self, _stage: &Stage) {
        self.complete_stage();
    }
}
