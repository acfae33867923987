//! Report content: static compliance findings and display assets.

pub mod asset;
pub mod compliance;
