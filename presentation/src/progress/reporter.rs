//! Progress reporting for inquiry submission

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use naturemind_application::ProgressNotifier;
use std::sync::Mutex;

/// Reports submission progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {percent}% {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_processing_start(&self, total_steps: u32) {
        let pb = ProgressBar::new(u64::from(total_steps));
        pb.set_style(Self::bar_style());
        pb.set_prefix("Processing");
        pb.set_message("Analyzing query...");

        if let Ok(mut bar) = self.bar.lock() {
            *bar = Some(pb);
        }
    }

    fn on_step_complete(&self, _step: u32) {
        if let Ok(bar) = self.bar.lock()
            && let Some(pb) = bar.as_ref()
        {
            pb.inc(1);
        }
    }

    fn on_ready(&self) {
        if let Ok(mut bar) = self.bar.lock()
            && let Some(pb) = bar.take()
        {
            pb.finish_with_message(format!("{}", "Query submitted successfully!".green()));
        }
    }
}
