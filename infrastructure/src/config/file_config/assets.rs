//! Asset lookup configuration from TOML (`[assets]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw asset configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAssetsConfig {
    /// Directory holding the report document, animation, and figures.
    /// Defaults to the working directory.
    pub base_dir: Option<String>,
}

impl FileAssetsConfig {
    pub fn base_dir(&self) -> PathBuf {
        self.base_dir
            .as_deref()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
