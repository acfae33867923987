//! Submit Inquiry use case
//!
//! Validates a query and drives the submission status through
//! `Idle → Processing → Ready`. The status lives in an [`InquirySession`]
//! owned by the caller.

use crate::ports::inquiry_logger::{InquiryEvent, InquiryLogger, NoInquiryLogger};
use crate::ports::pacing::PacingStrategy;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use naturemind_domain::{DomainError, Query, SubmissionStatus};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Warning surfaced when the query is empty or whitespace only
pub const EMPTY_QUERY_WARNING: &str = "Please enter a valid query before submitting.";

/// Errors that can occur during submission
///
/// An empty query is not an error; see [`SubmitOutcome::Rejected`].
#[derive(Error, Debug)]
pub enum SubmitInquiryError {
    #[error("Submission lifecycle error: {0}")]
    Lifecycle(#[from] DomainError),
}

/// Submission state for one interactive session
#[derive(Debug, Clone, Default)]
pub struct InquirySession {
    status: SubmissionStatus,
    last_query: Option<Query>,
    submissions: u32,
}

impl InquirySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// The most recently accepted query
    pub fn last_query(&self) -> Option<&Query> {
        self.last_query.as_ref()
    }

    /// Number of accepted submissions
    pub fn submissions(&self) -> u32 {
        self.submissions
    }
}

/// Result of one submission attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The query was valid and the inquiry is now Ready
    Accepted {
        query: Query,
        status: SubmissionStatus,
    },
    /// The query was empty; the status was left untouched
    Rejected { warning: String },
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted { .. })
    }
}

/// Use case for submitting an inquiry
pub struct SubmitInquiryUseCase<P: PacingStrategy + 'static> {
    pacer: Arc<P>,
    progress_steps: u32,
    logger: Arc<dyn InquiryLogger>,
}

impl<P: PacingStrategy + 'static> SubmitInquiryUseCase<P> {
    pub fn new(pacer: Arc<P>) -> Self {
        Self {
            pacer,
            progress_steps: 100,
            logger: Arc::new(NoInquiryLogger),
        }
    }

    pub fn with_progress_steps(mut self, steps: u32) -> Self {
        self.progress_steps = steps;
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn InquiryLogger>) -> Self {
        self.logger = logger;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        session: &mut InquirySession,
        text: Option<&str>,
    ) -> Result<SubmitOutcome, SubmitInquiryError> {
        self.execute_with_progress(session, text, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        session: &mut InquirySession,
        text: Option<&str>,
        progress: &dyn ProgressNotifier,
    ) -> Result<SubmitOutcome, SubmitInquiryError> {
        let Some(query) = text.and_then(Query::try_new) else {
            warn!("Rejected empty query (status stays {})", session.status);
            progress.on_rejected(EMPTY_QUERY_WARNING);
            self.logger.log(InquiryEvent::new(
                "query_rejected",
                json!({ "status": session.status }),
            ));
            return Ok(SubmitOutcome::Rejected {
                warning: EMPTY_QUERY_WARNING.to_string(),
            });
        };

        session.status = session.status.begin()?;
        info!("Processing query: {}", query);
        self.logger.log(InquiryEvent::new(
            "query_submitted",
            json!({ "query": query.content(), "status": session.status }),
        ));

        progress.on_processing_start(self.progress_steps);
        for step in 1..=self.progress_steps {
            self.pacer.pause(step, self.progress_steps).await;
            progress.on_step_complete(step);
        }

        session.status = session.status.complete()?;
        session.submissions += 1;
        session.last_query = Some(query.clone());
        debug!("Inquiry #{} ready", session.submissions);

        progress.on_ready();
        self.logger.log(InquiryEvent::new(
            "inquiry_ready",
            json!({ "query": query.content(), "submissions": session.submissions }),
        ));

        Ok(SubmitOutcome::Accepted {
            query,
            status: session.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::pacing::NoPacing;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[derive(Default)]
    struct RecordingProgress {
        events: Mutex<Vec<String>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_processing_start(&self, total_steps: u32) {
            self.events
                .lock()
                .unwrap()
                .push(format!("start:{}", total_steps));
        }

        fn on_step_complete(&self, step: u32) {
            self.events.lock().unwrap().push(format!("step:{}", step));
        }

        fn on_ready(&self) {
            self.events.lock().unwrap().push("ready".to_string());
        }

        fn on_rejected(&self, warning: &str) {
            self.events
                .lock()
                .unwrap()
                .push(format!("rejected:{}", warning));
        }
    }

    #[derive(Default)]
    struct CountingPacer {
        pauses: AtomicU32,
    }

    #[async_trait]
    impl PacingStrategy for CountingPacer {
        async fn pause(&self, _step: u32, _total: u32) {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl InquiryLogger for RecordingLogger {
        fn log(&self, event: InquiryEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn use_case() -> SubmitInquiryUseCase<NoPacing> {
        SubmitInquiryUseCase::new(Arc::new(NoPacing)).with_progress_steps(3)
    }

    #[tokio::test]
    async fn test_valid_query_reaches_ready() {
        let mut session = InquirySession::new();
        let outcome = use_case()
            .execute(&mut session, Some("Analyze flood resilience"))
            .await
            .unwrap();

        assert!(outcome.is_accepted());
        assert_eq!(session.status(), SubmissionStatus::Ready);
        assert_eq!(session.submissions(), 1);
        assert_eq!(
            session.last_query().map(|q| q.content()),
            Some("Analyze flood resilience")
        );
    }

    #[tokio::test]
    async fn test_empty_query_leaves_status_untouched() {
        let mut session = InquirySession::new();
        for text in [Some(""), Some("   "), None] {
            let outcome = use_case().execute(&mut session, text).await.unwrap();
            assert_eq!(
                outcome,
                SubmitOutcome::Rejected {
                    warning: EMPTY_QUERY_WARNING.to_string()
                }
            );
            assert_eq!(session.status(), SubmissionStatus::Idle);
        }
        assert_eq!(session.submissions(), 0);
    }

    #[tokio::test]
    async fn test_rejection_after_ready_keeps_ready() {
        let mut session = InquirySession::new();
        let uc = use_case();
        uc.execute(&mut session, Some("first")).await.unwrap();
        uc.execute(&mut session, Some(" ")).await.unwrap();

        assert_eq!(session.status(), SubmissionStatus::Ready);
        assert_eq!(session.last_query().map(|q| q.content()), Some("first"));
    }

    #[tokio::test]
    async fn test_resubmission() {
        let mut session = InquirySession::new();
        let uc = use_case();
        uc.execute(&mut session, Some("first")).await.unwrap();
        uc.execute(&mut session, Some("second")).await.unwrap();

        assert_eq!(session.submissions(), 2);
        assert_eq!(session.last_query().map(|q| q.content()), Some("second"));
    }

    #[tokio::test]
    async fn test_progress_callbacks_in_order() {
        let mut session = InquirySession::new();
        let progress = RecordingProgress::default();
        use_case()
            .execute_with_progress(&mut session, Some("query"), &progress)
            .await
            .unwrap();

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["start:3", "step:1", "step:2", "step:3", "ready"]
        );
    }

    #[tokio::test]
    async fn test_rejected_progress_callback() {
        let mut session = InquirySession::new();
        let progress = RecordingProgress::default();
        use_case()
            .execute_with_progress(&mut session, Some(""), &progress)
            .await
            .unwrap();

        let events = progress.events.lock().unwrap().clone();
        assert_eq!(events, vec![format!("rejected:{}", EMPTY_QUERY_WARNING)]);
    }

    #[tokio::test]
    async fn test_pacer_called_once_per_step() {
        let pacer = Arc::new(CountingPacer::default());
        let uc = SubmitInquiryUseCase::new(pacer.clone()).with_progress_steps(5);
        let mut session = InquirySession::new();
        uc.execute(&mut session, Some("query")).await.unwrap();

        assert_eq!(pacer.pauses.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn test_zero_steps_still_completes() {
        let uc = SubmitInquiryUseCase::new(Arc::new(NoPacing)).with_progress_steps(0);
        let mut session = InquirySession::new();
        uc.execute(&mut session, Some("query")).await.unwrap();
        assert!(session.status().is_ready());
    }

    #[tokio::test]
    async fn test_logger_records_events() {
        let logger = Arc::new(RecordingLogger::default());
        let uc = use_case().with_logger(logger.clone());
        let mut session = InquirySession::new();
        uc.execute(&mut session, Some("")).await.unwrap();
        uc.execute(&mut session, Some("query")).await.unwrap();

        let events = logger.events.lock().unwrap().clone();
        assert_eq!(
            events,
            vec!["query_rejected", "query_submitted", "inquiry_ready"]
        );
    }
}
