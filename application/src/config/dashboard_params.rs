//! Dashboard parameters — default inputs and use case policies.
//!
//! These are application-layer concerns, not domain policy: the calculator
//! itself never clamps, gates, or paces anything.

use naturemind_domain::IndicatorReading;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What to do with indicator inputs outside [0.0, 1.0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePolicy {
    /// Clamp into range and log a warning
    #[default]
    Clamp,
    /// Fail the evaluation
    Reject,
}

impl fmt::Display for RangePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangePolicy::Clamp => write!(f, "clamp"),
            RangePolicy::Reject => write!(f, "reject"),
        }
    }
}

impl std::str::FromStr for RangePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "clamp" => Ok(RangePolicy::Clamp),
            "reject" => Ok(RangePolicy::Reject),
            _ => Err(format!("Invalid RangePolicy: {}", s)),
        }
    }
}

/// Whether indicators are shown before a query has been submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorGating {
    /// Only once the current inquiry is Ready
    #[default]
    AfterSubmission,
    /// Regardless of submission status
    Always,
}

impl std::str::FromStr for IndicatorGating {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "after_submission" => Ok(IndicatorGating::AfterSubmission),
            "always" => Ok(IndicatorGating::Always),
            _ => Err(format!("Invalid IndicatorGating: {}", s)),
        }
    }
}

/// Default inputs and policies for one dashboard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardParams {
    /// Initial indicator values
    pub reading: IndicatorReading,
    /// Initial confidence value
    pub confidence: f64,
    /// Location label shown next to the mode
    pub location: String,
    pub range_policy: RangePolicy,
    pub gating: IndicatorGating,
    /// Number of progress increments while an inquiry is processing
    pub progress_steps: u32,
}

impl Default for DashboardParams {
    fn default() -> Self {
        Self {
            reading: IndicatorReading::default(),
            confidence: 0.92,
            location: "Oxfordshire, England".to_string(),
            range_policy: RangePolicy::default(),
            gating: IndicatorGating::default(),
            progress_steps: 100,
        }
    }
}

impl DashboardParams {
    // ==================== Builder Methods ====================

    pub fn with_reading(mut self, reading: IndicatorReading) -> Self {
        self.reading = reading;
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_range_policy(mut self, policy: RangePolicy) -> Self {
        self.range_policy = policy;
        self
    }

    pub fn with_gating(mut self, gating: IndicatorGating) -> Self {
        self.gating = gating;
        self
    }

    pub fn with_progress_steps(mut self, steps: u32) -> Self {
        self.progress_steps = steps;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = DashboardParams::default();
        assert_eq!(params.reading, IndicatorReading::new(0.82, 0.48, 0.63));
        assert_eq!(params.confidence, 0.92);
        assert_eq!(params.location, "Oxfordshire, England");
        assert_eq!(params.range_policy, RangePolicy::Clamp);
        assert_eq!(params.gating, IndicatorGating::AfterSubmission);
        assert_eq!(params.progress_steps, 100);
    }

    #[test]
    fn test_builder() {
        let params = DashboardParams::default()
            .with_confidence(0.4)
            .with_range_policy(RangePolicy::Reject)
            .with_gating(IndicatorGating::Always)
            .with_progress_steps(5);

        assert_eq!(params.confidence, 0.4);
        assert_eq!(params.range_policy, RangePolicy::Reject);
        assert_eq!(params.gating, IndicatorGating::Always);
        assert_eq!(params.progress_steps, 5);
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("Reject".parse::<RangePolicy>(), Ok(RangePolicy::Reject));
        assert!("ignore".parse::<RangePolicy>().is_err());
        assert_eq!(
            "after-submission".parse::<IndicatorGating>(),
            Ok(IndicatorGating::AfterSubmission)
        );
        assert_eq!("always".parse::<IndicatorGating>(), Ok(IndicatorGating::Always));
    }

    #[test]
    fn test_gating_serde() {
        let json = serde_json::to_string(&IndicatorGating::AfterSubmission).unwrap();
        assert_eq!(json, "\"after_submission\"");
    }
}
