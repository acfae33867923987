//! Infrastructure layer for naturemind
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod assets;
pub mod config;
pub mod logging;
pub mod pacing;

// Re-export commonly used types
pub use assets::LocalAssetLocator;
pub use config::{
    ConfigLoader, ConfigValidationError, FileAssetsConfig, FileConfig, FileIndicatorConfig,
    FileLoggingConfig, FileOutputConfig, FileOutputFormat, FileReplConfig, FileSessionConfig,
};
pub use logging::JsonlInquiryLogger;
pub use pacing::TimedPacing;
