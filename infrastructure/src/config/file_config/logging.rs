//! Inquiry log configuration from TOML (`[logging]` section)

use serde::{Deserialize, Serialize};

/// Raw logging configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// JSONL file receiving one line per submission event
    pub inquiry_log: Option<String>,
    /// Directory for rolling diagnostic logs
    pub log_dir: Option<String>,
}
