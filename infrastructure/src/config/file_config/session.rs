//! Session configuration from TOML (`[session]` section)

use naturemind_application::IndicatorGating;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw session configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSessionConfig {
    /// Location label shown with the operating mode
    pub location: String,
    /// "after_submission" or "always"
    pub gating: IndicatorGating,
    /// Progress increments while an inquiry is processing
    pub progress_steps: u32,
    /// Delay per progress increment; 0 disables pacing
    pub step_delay_ms: u64,
}

impl Default for FileSessionConfig {
    fn default() -> Self {
        Self {
            location: "Oxfordshire, England".to_string(),
            gating: IndicatorGating::default(),
            progress_steps: 100,
            step_delay_ms: 20,
        }
    }
}

impl FileSessionConfig {
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.step_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_delay() {
        let config = FileSessionConfig {
            step_delay_ms: 15,
            ..Default::default()
        };
        assert_eq!(config.step_delay(), Duration::from_millis(15));
    }

    #[test]
    fn test_gating_deserialize() {
        let toml_str = r#"
[session]
gating = "after_submission"
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.session.gating, IndicatorGating::AfterSubmission);
    }
}
