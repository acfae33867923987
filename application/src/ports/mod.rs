//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters must implement.

pub mod asset_locator;
pub mod inquiry_logger;
pub mod pacing;
pub mod progress;
