//! Filesystem-backed asset lookup.

use naturemind_application::AssetLocator;
use naturemind_domain::{AssetAvailability, ReportAsset};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Resolves assets relative to a base directory and checks they are files
#[derive(Debug, Clone)]
pub struct LocalAssetLocator {
    base_dir: PathBuf,
}

impl LocalAssetLocator {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl AssetLocator for LocalAssetLocator {
    fn locate(&self, asset: &ReportAsset) -> AssetAvailability {
        let path = self.base_dir.join(&asset.path);
        if path.is_file() {
            AssetAvailability::Available(path)
        } else {
            debug!("Asset not found: {}", path.display());
            AssetAvailability::Missing(path)
        }
    }

    fn describe(&self) -> String {
        if self.base_dir == Path::new(".") {
            "the working directory".to_string()
        } else {
            self.base_dir.display().to_string()
        }
    }
}
