//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod build_dashboard;
pub mod evaluate_indicators;
pub mod submit_inquiry;
