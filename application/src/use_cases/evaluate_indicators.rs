//! Evaluate Indicators use case
//!
//! Applies the configured [`RangePolicy`] to raw inputs, then runs the
//! resilience calculator and the mode classifier.

use crate::config::RangePolicy;
use naturemind_domain::{
    DomainError, IndicatorKind, IndicatorReading, OperatingMode, ResilienceResult,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum EvaluateError {
    #[error("Input rejected: {0}")]
    OutOfRange(#[from] DomainError),
}

/// Raw inputs as collected from the user
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluateIndicatorsInput {
    pub reading: IndicatorReading,
    pub confidence: f64,
}

impl EvaluateIndicatorsInput {
    pub fn new(reading: IndicatorReading, confidence: f64) -> Self {
        Self {
            reading,
            confidence,
        }
    }
}

/// Effective inputs and the resulting score/mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorEvaluation {
    pub reading: IndicatorReading,
    pub confidence: f64,
    pub result: ResilienceResult,
    /// Inputs that were clamped into range
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub clamped: Vec<IndicatorKind>,
}

impl IndicatorEvaluation {
    pub fn score(&self) -> f64 {
        self.result.score
    }

    pub fn mode(&self) -> OperatingMode {
        self.result.mode
    }
}

/// Use case for computing the resilience score and operating mode
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluateIndicatorsUseCase {
    policy: RangePolicy,
}

impl EvaluateIndicatorsUseCase {
    pub fn new(policy: RangePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> RangePolicy {
        self.policy
    }

    pub fn execute(
        &self,
        input: EvaluateIndicatorsInput,
    ) -> Result<IndicatorEvaluation, EvaluateError> {
        let (reading, confidence, clamped) = match self.policy {
            RangePolicy::Reject => {
                input.reading.validate()?;
                IndicatorKind::Confidence.check(input.confidence)?;
                (input.reading, input.confidence, Vec::new())
            }
            RangePolicy::Clamp => Self::clamp(input)?,
        };

        let result = ResilienceResult::evaluate(&reading, confidence);
        debug!(
            "Resilience score {:.2} ({}) for {:?}",
            result.score, result.mode, reading
        );

        Ok(IndicatorEvaluation {
            reading,
            confidence,
            result,
            clamped,
        })
    }

    fn clamp(
        input: EvaluateIndicatorsInput,
    ) -> Result<(IndicatorReading, f64, Vec<IndicatorKind>), DomainError> {
        let reading = input.reading.clamped()?;
        let confidence = IndicatorKind::Confidence.clamp(input.confidence)?;

        let mut clamped: Vec<IndicatorKind> = [
            IndicatorKind::FloodRisk,
            IndicatorKind::VegetationIndex,
            IndicatorKind::Imperviousness,
        ]
        .into_iter()
        .filter(|kind| input.reading.get(*kind) != reading.get(*kind))
        .collect();
        if confidence != input.confidence {
            clamped.push(IndicatorKind::Confidence);
        }

        for kind in &clamped {
            warn!("{} was outside [0.0, 1.0] and has been clamped", kind);
        }
        Ok((reading, confidence, clamped))
    }
}
