//! Indicator readings and the resilience calculator.
//!
//! - [`reading::IndicatorReading`] — the three normalized environmental inputs
//! - [`resilience::compute_resilience`] — weighted blend into a [0, 1] score
//! - [`mode::classify_mode`] — confidence → [`mode::OperatingMode`]

pub mod mode;
pub mod reading;
pub mod resilience;
