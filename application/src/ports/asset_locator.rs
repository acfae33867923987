//! Asset locator port
//!
//! Answers whether a display asset exists. Nothing is read or served.

use naturemind_domain::{AssetAvailability, ReportAsset};

pub trait AssetLocator: Send + Sync {
    /// Check whether `asset` is present
    fn locate(&self, asset: &ReportAsset) -> AssetAvailability;

    /// Human-readable description of where assets are looked up
    fn describe(&self) -> String {
        "the working directory".to_string()
    }
}
