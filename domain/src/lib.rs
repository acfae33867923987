//! Domain layer for naturemind
//!
//! This crate contains the resilience calculator, the query/submission
//! lifecycle, and the static catalogs shown on the dashboard.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Resilience
//!
//! A bounded [0, 1] score blending three indicator readings:
//!
//! - **Flood risk** (inverted, 40%)
//! - **Vegetation index** (NDVI, 30%)
//! - **Imperviousness** (inverted, 30%)
//!
//! ## Operating Mode
//!
//! - **Auto**: confidence at or above the 0.6 threshold
//! - **Interactive**: everything below it

pub mod config;
pub mod core;
pub mod indicator;
pub mod inquiry;
pub mod report;
pub mod site;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    query::{Query, validate_query},
};
pub use indicator::{
    mode::{AUTO_MODE_THRESHOLD, OperatingMode, classify_mode},
    reading::{IndicatorKind, IndicatorReading},
    resilience::{
        FLOOD_RISK_WEIGHT, IMPERVIOUSNESS_WEIGHT, ResilienceResult, VEGETATION_WEIGHT,
        compute_resilience,
    },
};
pub use inquiry::status::SubmissionStatus;
pub use report::{
    asset::{AssetAvailability, AssetKind, ReportAsset, default_assets},
    compliance::ComplianceSummary,
};
pub use site::{GeoPoint, MAP_CENTER, Site, site_by_id, site_catalog, total_area_ha};
