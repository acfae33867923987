//! Domain error types

use crate::inquiry::status::SubmissionStatus;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("{indicator} must be a finite number")]
    NotFinite { indicator: &'static str },

    #[error("{indicator} must be within [0.0, 1.0], got {value}")]
    IndicatorOutOfRange { indicator: &'static str, value: f64 },

    #[error("Cannot move submission status from {from} to {to}")]
    InvalidTransition {
        from: SubmissionStatus,
        to: SubmissionStatus,
    },

    #[error("Unknown site: {0}")]
    UnknownSite(u32),
}
