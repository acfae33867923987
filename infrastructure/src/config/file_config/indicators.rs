//! Indicator defaults from TOML (`[indicators]` section)

use super::ConfigValidationError;
use naturemind_application::RangePolicy;
use naturemind_domain::IndicatorReading;
use serde::{Deserialize, Serialize};

/// Raw indicator configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileIndicatorConfig {
    pub flood_risk: f64,
    pub vegetation_index: f64,
    pub imperviousness: f64,
    pub confidence: f64,
    /// How out-of-range inputs are handled ("clamp" or "reject")
    pub range_policy: RangePolicy,
}

impl Default for FileIndicatorConfig {
    fn default() -> Self {
        let reading = IndicatorReading::default();
        Self {
            flood_risk: reading.flood_risk,
            vegetation_index: reading.vegetation_index,
            imperviousness: reading.imperviousness,
            confidence: 0.92,
            range_policy: RangePolicy::default(),
        }
    }
}

impl FileIndicatorConfig {
    pub fn reading(&self) -> IndicatorReading {
        IndicatorReading::new(self.flood_risk, self.vegetation_index, self.imperviousness)
    }

    pub(super) fn validate(&self) -> Vec<ConfigValidationError> {
        [
            ("indicators.flood_risk", self.flood_risk),
            ("indicators.vegetation_index", self.vegetation_index),
            ("indicators.imperviousness", self.imperviousness),
            ("indicators.confidence", self.confidence),
        ]
        .into_iter()
        .filter(|(_, value)| !(0.0..=1.0).contains(value))
        .map(|(field, value)| ConfigValidationError::OutOfRange { field, value })
        .collect()
    }
}
