//! Submission status of the current inquiry

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle label for one user inquiry.
///
/// ```text
/// Idle ──submit──▶ Processing ──complete──▶ Ready
///                      ▲                      │
///                      └──────submit──────────┘
/// ```
///
/// A rejected (empty) submission never touches the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Processing,
    Ready,
}

impl SubmissionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Processing => "processing",
            SubmissionStatus::Ready => "ready",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "Idle",
            SubmissionStatus::Processing => "Processing",
            SubmissionStatus::Ready => "Ready",
        }
    }

    /// Start handling a new inquiry.
    ///
    /// Allowed from `Idle` and `Ready`; a submission while one is already
    /// processing is a lifecycle error.
    pub fn begin(self) -> Result<Self, DomainError> {
        match self {
            SubmissionStatus::Idle | SubmissionStatus::Ready => Ok(SubmissionStatus::Processing),
            SubmissionStatus::Processing => Err(DomainError::InvalidTransition {
                from: self,
                to: SubmissionStatus::Processing,
            }),
        }
    }

    /// Mark the in-flight inquiry as done.
    pub fn complete(self) -> Result<Self, DomainError> {
        match self {
            SubmissionStatus::Processing => Ok(SubmissionStatus::Ready),
            _ => Err(DomainError::InvalidTransition {
                from: self,
                to: SubmissionStatus::Ready,
            }),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, SubmissionStatus::Ready)
    }

    pub fn is_processing(&self) -> bool {
        matches!(self, SubmissionStatus::Processing)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionStatus::default(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_full_lifecycle() {
        let status = SubmissionStatus::Idle.begin().unwrap();
        assert!(status.is_processing());
        let status = status.complete().unwrap();
        assert!(status.is_ready());
    }

    #[test]
    fn test_resubmit_from_ready() {
        assert_eq!(
            SubmissionStatus::Ready.begin(),
            Ok(SubmissionStatus::Processing)
        );
    }

    #[test]
    fn test_begin_while_processing_fails() {
        assert!(SubmissionStatus::Processing.begin().is_err());
    }

    #[test]
    fn test_complete_requires_processing() {
        assert!(SubmissionStatus::Idle.complete().is_err());
        assert!(SubmissionStatus::Ready.complete().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Processing).unwrap();
        assert_eq!(json, "\"processing\"");
        let status: SubmissionStatus = serde_json::from_str("\"ready\"").unwrap();
        assert_eq!(status, SubmissionStatus::Ready);
    }
}
