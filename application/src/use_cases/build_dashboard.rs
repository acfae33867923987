//! Build Dashboard use case
//!
//! Assembles everything the presentation layer shows: submission status,
//! gated indicators, the site catalog, compliance findings, and the
//! availability of each report asset.

use crate::config::{DashboardParams, IndicatorGating};
use crate::ports::asset_locator::AssetLocator;
use crate::use_cases::evaluate_indicators::{
    EvaluateError, EvaluateIndicatorsInput, EvaluateIndicatorsUseCase, IndicatorEvaluation,
};
use crate::use_cases::submit_inquiry::InquirySession;
use naturemind_domain::{
    AssetAvailability, ComplianceSummary, GeoPoint, MAP_CENTER, ReportAsset, Site,
    SubmissionStatus, default_assets, site_catalog,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Notice shown in place of indicators before a query has been submitted
pub const SUBMIT_FIRST_NOTICE: &str =
    "Please enter a query and submit it to view indicators and the site map.";

/// One asset with its availability and fallback notice
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssetEntry {
    pub asset: ReportAsset,
    pub availability: AssetAvailability,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Everything one dashboard render needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub location: String,
    pub status: SubmissionStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicators: Option<IndicatorEvaluation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub map_center: GeoPoint,
    pub sites: Vec<Site>,
    pub compliance: ComplianceSummary,
    pub assets: Vec<AssetEntry>,
}

impl DashboardView {
    pub fn missing_assets(&self) -> impl Iterator<Item = &AssetEntry> {
        self.assets
            .iter()
            .filter(|entry| !entry.availability.is_available())
    }
}

/// Use case for assembling the dashboard view
pub struct BuildDashboardUseCase<L: AssetLocator + 'static> {
    locator: Arc<L>,
    evaluator: EvaluateIndicatorsUseCase,
    gating: IndicatorGating,
    location: String,
    assets: Vec<ReportAsset>,
}

impl<L: AssetLocator + 'static> BuildDashboardUseCase<L> {
    pub fn new(locator: Arc<L>, params: &DashboardParams) -> Self {
        Self {
            locator,
            evaluator: EvaluateIndicatorsUseCase::new(params.range_policy),
            gating: params.gating,
            location: params.location.clone(),
            assets: default_assets(),
        }
    }

    pub fn with_assets(mut self, assets: Vec<ReportAsset>) -> Self {
        self.assets = assets;
        self
    }

    pub fn execute(
        &self,
        session: &InquirySession,
        input: EvaluateIndicatorsInput,
    ) -> Result<DashboardView, EvaluateError> {
        let show_indicators = match self.gating {
            IndicatorGating::Always => true,
            IndicatorGating::AfterSubmission => session.status().is_ready(),
        };

        let (indicators, notice) = if show_indicators {
            (Some(self.evaluator.execute(input)?), None)
        } else {
            debug!("Indicators gated until submission (status {})", session.status());
            (None, Some(SUBMIT_FIRST_NOTICE.to_string()))
        };

        Ok(DashboardView {
            location: self.location.clone(),
            status: session.status(),
            query: session.last_query().map(|q| q.content().to_string()),
            indicators,
            notice,
            map_center: MAP_CENTER,
            sites: site_catalog(),
            compliance: ComplianceSummary::default(),
            assets: self.locate_assets(),
        })
    }

    fn locate_assets(&self) -> Vec<AssetEntry> {
        self.assets
            .iter()
            .map(|asset| {
                let availability = self.locator.locate(asset);
                let notice = (!availability.is_available()).then(|| {
                    format!(
                        "'{}' not found in {}.",
                        asset.display_name(),
                        self.locator.describe()
                    )
                });
                AssetEntry {
                    asset: asset.clone(),
                    availability,
                    notice,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::pacing::NoPacing;
    use crate::use_cases::submit_inquiry::SubmitInquiryUseCase;
    use naturemind_domain::{AssetKind, IndicatorReading, OperatingMode};

    /// Locator that only knows the report document
    struct ReportOnly;

    impl AssetLocator for ReportOnly {
        fn locate(&self, asset: &ReportAsset) -> AssetAvailability {
            if asset.kind == AssetKind::ReportDocument {
                AssetAvailability::Available(asset.path.clone())
            } else {
                AssetAvailability::Missing(asset.path.clone())
            }
        }
    }

    fn input() -> EvaluateIndicatorsInput {
        EvaluateIndicatorsInput::new(IndicatorReading::default(), 0.92)
    }

    async fn ready_session() -> InquirySession {
        let mut session = InquirySession::new();
        SubmitInquiryUseCase::new(Arc::new(NoPacing))
            .with_progress_steps(1)
            .execute(&mut session, Some("Analyze flood resilience"))
            .await
            .unwrap();
        session
    }

    #[test]
    fn test_indicators_gated_before_submission() {
        let uc = BuildDashboardUseCase::new(Arc::new(ReportOnly), &DashboardParams::default());
        let view = uc.execute(&InquirySession::new(), input()).unwrap();

        assert_eq!(view.status, SubmissionStatus::Idle);
        assert!(view.indicators.is_none());
        assert_eq!(view.notice.as_deref(), Some(SUBMIT_FIRST_NOTICE));
        assert_eq!(view.sites.len(), 3);
    }

    #[test]
    fn test_always_gating_shows_indicators() {
        let params = DashboardParams::default().with_gating(IndicatorGating::Always);
        let uc = BuildDashboardUseCase::new(Arc::new(ReportOnly), &params);
        let view = uc.execute(&InquirySession::new(), input()).unwrap();

        assert!(view.indicators.is_some());
        assert!(view.notice.is_none());
    }

    #[tokio::test]
    async fn test_indicators_after_submission() {
        let session = ready_session().await;
        let uc = BuildDashboardUseCase::new(Arc::new(ReportOnly), &DashboardParams::default());
        let view = uc.execute(&session, input()).unwrap();

        let indicators = view.indicators.unwrap();
        assert_eq!(indicators.mode(), OperatingMode::Auto);
        assert_eq!(view.query.as_deref(), Some("Analyze flood resilience"));
        assert_eq!(view.location, "Oxfordshire, England");
    }

    #[test]
    fn test_missing_assets_get_notices() {
        let uc = BuildDashboardUseCase::new(Arc::new(ReportOnly), &DashboardParams::default());
        let view = uc.execute(&InquirySession::new(), input()).unwrap();

        let report = &view.assets[0];
        assert!(report.availability.is_available());
        assert!(report.notice.is_none());

        let missing: Vec<_> = view.missing_assets().collect();
        assert_eq!(missing.len(), 5);
        assert_eq!(
            missing[0].notice.as_deref(),
            Some("'wetlands_animation.gif' not found in the working directory.")
        );
    }

    #[test]
    fn test_custom_asset_list() {
        let uc = BuildDashboardUseCase::new(Arc::new(ReportOnly), &DashboardParams::default())
            .with_assets(vec![]);
        let view = uc.execute(&InquirySession::new(), input()).unwrap();
        assert!(view.assets.is_empty());
    }

    #[test]
    fn test_view_serializes() {
        let uc = BuildDashboardUseCase::new(Arc::new(ReportOnly), &DashboardParams::default());
        let view = uc.execute(&InquirySession::new(), input()).unwrap();
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["status"], "idle");
        assert!(json.get("indicators").is_none());
        assert_eq!(json["sites"][0]["id"], 675);
    }
}
