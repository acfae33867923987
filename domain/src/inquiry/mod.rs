//! Inquiry lifecycle.
//!
//! - [`status::SubmissionStatus`] — Idle → Processing → Ready

pub mod status;
