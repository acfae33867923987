//! Operating mode classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence at or above this value selects [`OperatingMode::Auto`].
pub const AUTO_MODE_THRESHOLD: f64 = 0.6;

/// How the dashboard operates for the current confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OperatingMode {
    /// Confidence is high enough to proceed without review
    Auto,
    /// Confidence is low; results need a human in the loop
    #[default]
    Interactive,
}

impl OperatingMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperatingMode::Auto => "Auto",
            OperatingMode::Interactive => "Interactive",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// `Auto` iff `confidence >= 0.6`; the boundary belongs to `Auto`.
///
/// NaN compares false and therefore classifies as `Interactive`.
pub fn classify_mode(confidence: f64) -> OperatingMode {
    if confidence >= AUTO_MODE_THRESHOLD {
        OperatingMode::Auto
    } else {
        OperatingMode::Interactive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_high_confidence() {
        assert_eq!(classify_mode(0.92), OperatingMode::Auto);
    }

    #[test]
    fn test_classify_low_confidence() {
        assert_eq!(classify_mode(0.59), OperatingMode::Interactive);
        assert_eq!(classify_mode(0.0), OperatingMode::Interactive);
    }

    #[test]
    fn test_boundary_is_auto() {
        assert_eq!(classify_mode(0.6), OperatingMode::Auto);
    }

    #[test]
    fn test_nan_is_interactive() {
        assert_eq!(classify_mode(f64::NAN), OperatingMode::Interactive);
    }

    #[test]
    fn test_display() {
        assert_eq!(OperatingMode::Auto.to_string(), "Auto");
        assert_eq!(OperatingMode::Interactive.to_string(), "Interactive");
    }

    #[test]
    fn test_serialize_matches_label() {
        let json = serde_json::to_string(&OperatingMode::Interactive).unwrap();
        assert_eq!(json, "\"Interactive\"");
    }
}
