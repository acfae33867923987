//! Configuration file loading for naturemind
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `NATUREMIND_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./naturemind.toml` or `./.naturemind.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/naturemind/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileAssetsConfig, FileConfig, FileIndicatorConfig, FileLoggingConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileSessionConfig,
};
pub use loader::ConfigLoader;
