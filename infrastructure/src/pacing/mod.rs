//! Timer-backed pacing for the processing animation.

use async_trait::async_trait;
use naturemind_application::PacingStrategy;
use std::time::Duration;

/// Sleeps a fixed duration before every progress step
#[derive(Debug, Clone, Copy)]
pub struct TimedPacing {
    step_delay: Duration,
}

impl TimedPacing {
    pub fn new(step_delay: Duration) -> Self {
        Self { step_delay }
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }
}

#[async_trait]
impl PacingStrategy for TimedPacing {
    async fn pause(&self, _step: u32, _total: u32) {
        if !self.step_delay.is_zero() {
            tokio::time::sleep(self.step_delay).await;
        }
    }
}
