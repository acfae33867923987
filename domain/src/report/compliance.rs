//! Static compliance evaluation from the final report

use serde::{Deserialize, Serialize};

/// Policy compliance findings (Value Object)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceSummary {
    pub score: f64,
    pub verdict: String,
    pub legislation: Vec<String>,
    pub recommendations: Vec<String>,
}

impl ComplianceSummary {
    pub fn is_compliant(&self) -> bool {
        self.verdict == "Fully Compliant"
    }
}

impl Default for ComplianceSummary {
    fn default() -> Self {
        Self {
            score: 0.85,
            verdict: "Fully Compliant".to_string(),
            legislation: vec![
                "Flood & Water Management Act (2010)".to_string(),
                "Climate Change Act (2008)".to_string(),
            ],
            recommendations: vec![
                "Expand wetlands and woodland buffers".to_string(),
                "Incentivize NbS adoption in land-use planning".to_string(),
                "Integrate NbS into local infrastructure upgrades".to_string(),
            ],
        }
    }
}
