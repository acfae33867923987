//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain/application types where appropriate.

mod assets;
mod indicators;
mod logging;
mod output;
mod repl;
mod session;

pub use assets::FileAssetsConfig;
pub use indicators::FileIndicatorConfig;
pub use logging::FileLoggingConfig;
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use session::FileSessionConfig;

use naturemind_application::DashboardParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("{field} must be within [0.0, 1.0], got {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("session.progress_steps cannot be 0")]
    ZeroProgressSteps,

    #[error("session.location cannot be empty")]
    EmptyLocation,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Default indicator values and range policy
    pub indicators: FileIndicatorConfig,
    /// Submission flow settings
    pub session: FileSessionConfig,
    /// Display asset lookup
    pub assets: FileAssetsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Inquiry log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = self.indicators.validate();

        if self.session.progress_steps == 0 {
            issues.push(ConfigValidationError::ZeroProgressSteps);
        }
        if self.session.location.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyLocation);
        }

        issues
    }

    /// Convert into the parameters the application layer consumes
    pub fn to_dashboard_params(&self) -> DashboardParams {
        DashboardParams::default()
            .with_reading(self.indicators.reading())
            .with_confidence(self.indicators.confidence)
            .with_range_policy(self.indicators.range_policy)
            .with_location(self.session.location.clone())
            .with_gating(self.session.gating)
            .with_progress_steps(self.session.progress_steps)
    }
}
