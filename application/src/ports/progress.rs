//! Progress notification port
//!
//! Defines the interface for reporting progress while an inquiry is processed.

/// Callback for progress updates during inquiry submission
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bar, plain text, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called when the status moves to Processing
    fn on_processing_start(&self, total_steps: u32);

    /// Called after each paced step
    fn on_step_complete(&self, step: u32);

    /// Called when the status moves to Ready
    fn on_ready(&self);

    /// Called when a submission is rejected; the status is unchanged
    fn on_rejected(&self, _warning: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_processing_start(&self, _total_steps: u32) {}
    fn on_step_complete(&self, _step: u32) {}
    fn on_ready(&self) {}
}
