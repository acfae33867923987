//! Indicator reading value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The indicator a scalar belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    FloodRisk,
    VegetationIndex,
    Imperviousness,
    Confidence,
}

impl IndicatorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorKind::FloodRisk => "flood_risk",
            IndicatorKind::VegetationIndex => "vegetation_index",
            IndicatorKind::Imperviousness => "imperviousness",
            IndicatorKind::Confidence => "confidence",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndicatorKind::FloodRisk => "Flood Risk",
            IndicatorKind::VegetationIndex => "NDVI (Vegetation Index)",
            IndicatorKind::Imperviousness => "Imperviousness",
            IndicatorKind::Confidence => "Confidence",
        }
    }

    /// Reject NaN and infinities.
    pub fn require_finite(&self, value: f64) -> Result<f64, DomainError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(DomainError::NotFinite {
                indicator: self.as_str(),
            })
        }
    }

    /// Check that `value` lies in the inclusive unit interval.
    pub fn check(&self, value: f64) -> Result<f64, DomainError> {
        let value = self.require_finite(value)?;
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(DomainError::IndicatorOutOfRange {
                indicator: self.as_str(),
                value,
            })
        }
    }

    /// Clamp a finite `value` into [0.0, 1.0].
    pub fn clamp(&self, value: f64) -> Result<f64, DomainError> {
        Ok(self.require_finite(value)?.clamp(0.0, 1.0))
    }
}

impl fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for IndicatorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "flood" | "flood_risk" | "flood-risk" => Ok(IndicatorKind::FloodRisk),
            "ndvi" | "vegetation" | "vegetation_index" => Ok(IndicatorKind::VegetationIndex),
            "impervious" | "imperviousness" => Ok(IndicatorKind::Imperviousness),
            "confidence" | "conf" => Ok(IndicatorKind::Confidence),
            _ => Err(format!("Unknown indicator: {}", s)),
        }
    }
}

/// Three co-occurring indicator measurements, each expected in [0.0, 1.0].
///
/// Construction through [`IndicatorReading::new`] does not enforce the range;
/// use [`IndicatorReading::try_new`] to reject or [`IndicatorReading::clamped`]
/// to coerce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorReading {
    pub flood_risk: f64,
    pub vegetation_index: f64,
    pub imperviousness: f64,
}

impl IndicatorReading {
    pub fn new(flood_risk: f64, vegetation_index: f64, imperviousness: f64) -> Self {
        Self {
            flood_risk,
            vegetation_index,
            imperviousness,
        }
    }

    /// Create a reading, rejecting the first value outside [0.0, 1.0]
    pub fn try_new(
        flood_risk: f64,
        vegetation_index: f64,
        imperviousness: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            flood_risk: IndicatorKind::FloodRisk.check(flood_risk)?,
            vegetation_index: IndicatorKind::VegetationIndex.check(vegetation_index)?,
            imperviousness: IndicatorKind::Imperviousness.check(imperviousness)?,
        })
    }

    /// Return a copy with every value clamped into [0.0, 1.0].
    ///
    /// Non-finite values cannot be clamped meaningfully and are rejected.
    pub fn clamped(&self) -> Result<Self, DomainError> {
        Ok(Self {
            flood_risk: IndicatorKind::FloodRisk.clamp(self.flood_risk)?,
            vegetation_index: IndicatorKind::VegetationIndex.clamp(self.vegetation_index)?,
            imperviousness: IndicatorKind::Imperviousness.clamp(self.imperviousness)?,
        })
    }

    /// Validate this reading in place
    pub fn validate(&self) -> Result<(), DomainError> {
        Self::try_new(self.flood_risk, self.vegetation_index, self.imperviousness).map(|_| ())
    }

    pub fn get(&self, kind: IndicatorKind) -> Option<f64> {
        match kind {
            IndicatorKind::FloodRisk => Some(self.flood_risk),
            IndicatorKind::VegetationIndex => Some(self.vegetation_index),
            IndicatorKind::Imperviousness => Some(self.imperviousness),
            IndicatorKind::Confidence => None,
        }
    }

    /// Return a copy with one indicator replaced. Confidence is not part of a reading.
    pub fn with(mut self, kind: IndicatorKind, value: f64) -> Self {
        match kind {
            IndicatorKind::FloodRisk => self.flood_risk = value,
            IndicatorKind::VegetationIndex => self.vegetation_index = value,
            IndicatorKind::Imperviousness => self.imperviousness = value,
            IndicatorKind::Confidence => {}
        }
        self
    }
}

impl Default for IndicatorReading {
    /// Oxfordshire demo values
    fn default() -> Self {
        Self::new(0.82, 0.48, 0.63)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_in_range() {
        let reading = IndicatorReading::try_new(0.0, 1.0, 0.5).unwrap();
        assert_eq!(reading.vegetation_index, 1.0);
    }

    #[test]
    fn test_try_new_rejects_first_offender() {
        let err = IndicatorReading::try_new(0.5, 1.2, -0.3).unwrap_err();
        assert_eq!(
            err,
            DomainError::IndicatorOutOfRange {
                indicator: "vegetation_index",
                value: 1.2
            }
        );
    }

    #[test]
    fn test_try_new_rejects_non_finite() {
        assert_eq!(
            IndicatorReading::try_new(f64::NAN, 0.5, 0.5),
            Err(DomainError::NotFinite {
                indicator: "flood_risk"
            })
        );
        assert!(IndicatorReading::try_new(0.5, f64::INFINITY, 0.5).is_err());
        assert!(IndicatorKind::Confidence.check(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_clamped() {
        let reading = IndicatorReading::new(1.4, -0.2, 0.3).clamped().unwrap();
        assert_eq!(reading, IndicatorReading::new(1.0, 0.0, 0.3));
    }

    #[test]
    fn test_clamped_rejects_nan() {
        let err = IndicatorReading::new(0.2, f64::NAN, 0.3).clamped().unwrap_err();
        assert_eq!(
            err,
            DomainError::NotFinite {
                indicator: "vegetation_index"
            }
        );
    }

    #[test]
    fn test_kind_clamp() {
        assert_eq!(IndicatorKind::Confidence.clamp(1.3), Ok(1.0));
        assert_eq!(IndicatorKind::FloodRisk.clamp(-0.4), Ok(0.0));
        assert!(IndicatorKind::Confidence.clamp(f64::INFINITY).is_err());
    }

    #[test]
    fn test_default_matches_demo_values() {
        let reading = IndicatorReading::default();
        assert_eq!(reading.flood_risk, 0.82);
        assert_eq!(reading.vegetation_index, 0.48);
        assert_eq!(reading.imperviousness, 0.63);
    }

    #[test]
    fn test_with_replaces_single_value() {
        let reading = IndicatorReading::default().with(IndicatorKind::Imperviousness, 0.1);
        assert_eq!(reading.imperviousness, 0.1);
        assert_eq!(reading.flood_risk, 0.82);
        assert_eq!(reading.with(IndicatorKind::Confidence, 0.3), reading);
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("ndvi".parse::<IndicatorKind>(), Ok(IndicatorKind::VegetationIndex));
        assert_eq!("Flood".parse::<IndicatorKind>(), Ok(IndicatorKind::FloodRisk));
        assert_eq!("impervious".parse::<IndicatorKind>(), Ok(IndicatorKind::Imperviousness));
        assert_eq!("conf".parse::<IndicatorKind>(), Ok(IndicatorKind::Confidence));
        assert!("rain".parse::<IndicatorKind>().is_err());
    }
}
