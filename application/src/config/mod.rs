//! Application-level configuration.
//!
//! - [`DashboardParams`] — default inputs and the policies use cases apply

pub mod dashboard_params;

pub use dashboard_params::{DashboardParams, IndicatorGating, RangePolicy};
