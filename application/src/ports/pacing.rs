//! Pacing port
//!
//! The progress animation shown while an inquiry is processing has no
//! functional effect. How long each step takes is injected here so tests
//! run instantly and the CLI can still animate.

use async_trait::async_trait;

/// Delay strategy applied between progress steps
#[async_trait]
pub trait PacingStrategy: Send + Sync {
    /// Wait before reporting `step` of `total`
    async fn pause(&self, step: u32, total: u32);
}

/// Immediate pacing: every step completes without waiting
pub struct NoPacing;

#[async_trait]
impl PacingStrategy for NoPacing {
    async fn pause(&self, _step: u32, _total: u32) {}
}
