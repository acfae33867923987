//! Display assets referenced by the dashboard.
//!
//! Assets are identified by a relative path; the domain never reads them.
//! Whether one exists is answered by an `AssetLocator` adapter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// What an asset is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    /// Downloadable final report
    ReportDocument,
    /// Flood-extent animation
    Animation,
    /// Static figure
    Figure,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AssetKind::ReportDocument => "report",
            AssetKind::Animation => "animation",
            AssetKind::Figure => "figure",
        };
        write!(f, "{}", s)
    }
}

/// A file the dashboard would display or offer for download
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportAsset {
    pub kind: AssetKind,
    /// Path relative to the asset directory
    pub path: PathBuf,
    pub caption: String,
    /// Filename offered to the user, when it differs from `path`
    pub download_name: Option<String>,
}

impl ReportAsset {
    pub fn new(kind: AssetKind, path: impl Into<PathBuf>, caption: impl Into<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            caption: caption.into(),
            download_name: None,
        }
    }

    pub fn with_download_name(mut self, name: impl Into<String>) -> Self {
        self.download_name = Some(name.into());
        self
    }

    /// File name as shown to the user
    pub fn display_name(&self) -> String {
        self.download_name.clone().unwrap_or_else(|| {
            self.path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default()
        })
    }
}

/// Result of an existence check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "path", rename_all = "snake_case")]
pub enum AssetAvailability {
    Available(PathBuf),
    Missing(PathBuf),
}

impl AssetAvailability {
    pub fn is_available(&self) -> bool {
        matches!(self, AssetAvailability::Available(_))
    }
}

/// Report document, animation, and the four analytics figures
pub fn default_assets() -> Vec<ReportAsset> {
    vec![
        ReportAsset::new(
            AssetKind::ReportDocument,
            "NatureMind_Final_Report1.docx",
            "NatureMind Final Report",
        )
        .with_download_name("NatureMind_Final_Report.docx"),
        ReportAsset::new(
            AssetKind::Animation,
            "wetlands_animation.gif",
            "Temporal Flood Extent Evolution (1980-1990)",
        ),
        ReportAsset::new(
            AssetKind::Figure,
            "flood_frequency_map.png",
            "Flood Frequency Distribution (Oxfordshire)",
        ),
        ReportAsset::new(
            AssetKind::Figure,
            "temporal_segmentation_map.png",
            "Temporal Segmentation Map (Pre- and Post-Flood Zones)",
        ),
        ReportAsset::new(
            AssetKind::Figure,
            "finance_damage_by_asset.png",
            "Estimated Damages by Asset Type (EUR)",
        ),
        ReportAsset::new(
            AssetKind::Figure,
            "finance_damage_proportion1.png",
            "Proportion of Total Flood-Related Financial Damage (%)",
        ),
    ]
}
