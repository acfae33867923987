//! Candidate wetland sites shown on the dashboard.
//!
//! The catalog is fixed; sites are listed as data and never rendered.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// A WGS84 coordinate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

/// Centre of the Oxfordshire overview
pub const MAP_CENTER: GeoPoint = GeoPoint {
    lat: 51.75,
    lon: -1.25,
};

/// A proposed wetland intervention site
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub id: u32,
    pub location: GeoPoint,
    pub area_ha: f64,
    pub suitability: String,
}

impl Site {
    fn new(id: u32, lat: f64, lon: f64, area_ha: f64, suitability: &str) -> Self {
        Self {
            id,
            location: GeoPoint { lat, lon },
            area_ha,
            suitability: suitability.to_string(),
        }
    }

    /// One-line label, e.g. `Site 675 - 32.37 ha - High Suitability`
    pub fn label(&self) -> String {
        format!(
            "Site {} - {:.2} ha - {}",
            self.id, self.area_ha, self.suitability
        )
    }
}

/// The three proposed sites, largest first
pub fn site_catalog() -> Vec<Site> {
    vec![
        Site::new(675, 51.7041, -1.55257, 32.37, "High Suitability"),
        Site::new(294, 51.8259, -1.16916, 14.54, "Moderate Suitability"),
        Site::new(607, 51.7101, -1.49567, 10.50, "Balanced Benefits"),
    ]
}

pub fn site_by_id(id: u32) -> Result<Site, DomainError> {
    site_catalog()
        .into_iter()
        .find(|s| s.id == id)
        .ok_or(DomainError::UnknownSite(id))
}

pub fn total_area_ha() -> f64 {
    site_catalog().iter().map(|s| s.area_ha).sum()
}
