//! Resilience score computation.
//!
//! ```text
//! score = round(0.4 * (1 - flood_risk) + 0.3 * vegetation_index + 0.3 * (1 - imperviousness), 2)
//! ```
//!
//! The weights sum to 1.0 and every term lies in [0, 1] for in-range
//! inputs, so the score is a convex combination and stays in [0, 1].

use super::mode::{OperatingMode, classify_mode};
use super::reading::IndicatorReading;
use serde::{Deserialize, Serialize};

/// Weight of the inverted flood risk term
pub const FLOOD_RISK_WEIGHT: f64 = 0.4;
/// Weight of the vegetation index term
pub const VEGETATION_WEIGHT: f64 = 0.3;
/// Weight of the inverted imperviousness term
pub const IMPERVIOUSNESS_WEIGHT: f64 = 0.3;

/// Blend three indicators into a resilience score rounded to two decimals.
///
/// Total over the reals: out-of-range inputs still produce a number, but the
/// [0, 1] bound only holds when all three inputs are in [0, 1].
pub fn compute_resilience(flood_risk: f64, vegetation_index: f64, imperviousness: f64) -> f64 {
    let raw = FLOOD_RISK_WEIGHT * (1.0 - flood_risk)
        + VEGETATION_WEIGHT * vegetation_index
        + IMPERVIOUSNESS_WEIGHT * (1.0 - imperviousness);
    round2(raw)
}

/// Round the exact binary value to two decimals, ties to even.
fn round2(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

/// Score and operating mode derived from one evaluation (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResilienceResult {
    pub score: f64,
    pub mode: OperatingMode,
}

impl ResilienceResult {
    pub fn evaluate(reading: &IndicatorReading, confidence: f64) -> Self {
        Self {
            score: compute_resilience(
                reading.flood_risk,
                reading.vegetation_index,
                reading.imperviousness,
            ),
            mode: classify_mode(confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one() {
        let sum = FLOOD_RISK_WEIGHT + VEGETATION_WEIGHT + IMPERVIOUSNESS_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_demo_reading_matches_formula() {
        assert_eq!(compute_resilience(0.82, 0.48, 0.63), 0.33);
    }

    #[test]
    fn test_best_case() {
        assert_eq!(compute_resilience(0.0, 1.0, 0.0), 1.0);
    }

    #[test]
    fn test_worst_case() {
        assert_eq!(compute_resilience(1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn test_score_bounded_over_grid() {
        let steps: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();
        for &f in &steps {
            for &v in &steps {
                for &i in &steps {
                    let score = compute_resilience(f, v, i);
                    assert!(
                        (0.0..=1.0).contains(&score),
                        "score {} out of range for ({}, {}, {})",
                        score,
                        f,
                        v,
                        i
                    );
                }
            }
        }
    }

    #[test]
    fn test_out_of_range_inputs_are_not_bounded() {
        assert!(compute_resilience(-1.0, 1.0, 0.0) > 1.0);
    }

    #[test]
    fn test_two_decimal_rounding() {
        let score = compute_resilience(0.5, 0.5, 0.5);
        assert_eq!(score, 0.5);
        let score = compute_resilience(0.33, 0.71, 0.12);
        assert_eq!(round2(score), score);
    }

    #[test]
    fn test_half_way_values_round_to_even() {
        assert_eq!(compute_resilience(0.0, 0.0, 0.25), 0.62);
        assert_eq!(compute_resilience(0.0, 0.0, 0.35), 0.59);
        assert_eq!(compute_resilience(0.6875, 0.0, 1.0), 0.12);
    }

    #[test]
    fn test_round2_non_finite_passes_through() {
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_idempotent() {
        let a = compute_resilience(0.21, 0.67, 0.44);
        let b = compute_resilience(0.21, 0.67, 0.44);
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_evaluate_combines_score_and_mode() {
        let result = ResilienceResult::evaluate(&IndicatorReading::default(), 0.92);
        assert_eq!(result.mode, OperatingMode::Auto);
        assert_eq!(result.score, compute_resilience(0.82, 0.48, 0.63));
    }
}
