//! Application layer for naturemind
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DashboardParams, IndicatorGating, RangePolicy};
pub use ports::{
    asset_locator::AssetLocator,
    inquiry_logger::{InquiryEvent, InquiryLogger, NoInquiryLogger},
    pacing::{NoPacing, PacingStrategy},
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::build_dashboard::{
    AssetEntry, BuildDashboardUseCase, DashboardView, SUBMIT_FIRST_NOTICE,
};
pub use use_cases::evaluate_indicators::{
    EvaluateError, EvaluateIndicatorsInput, EvaluateIndicatorsUseCase, IndicatorEvaluation,
};
pub use use_cases::submit_inquiry::{
    EMPTY_QUERY_WARNING, InquirySession, SubmitInquiryError, SubmitInquiryUseCase, SubmitOutcome,
};
