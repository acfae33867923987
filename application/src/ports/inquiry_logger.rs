//! Port for structured inquiry logging.
//!
//! Defines the [`InquiryLogger`] trait for recording submission events
//! (query submitted, query rejected, inquiry ready) to an append-only log.
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port captures each
//! submission in a machine-readable format (JSONL). The log is never read
//! back.

use serde_json::Value;

/// A structured inquiry event for logging.
pub struct InquiryEvent {
    /// Event type identifier (e.g., "query_submitted", "inquiry_ready").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl InquiryEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for logging inquiry events.
///
/// `log` is synchronous and non-fallible; failures are swallowed by the
/// implementation so the submission flow is never interrupted.
pub trait InquiryLogger: Send + Sync {
    fn log(&self, event: InquiryEvent);
}

/// No-op implementation for tests and when logging is disabled.
pub struct NoInquiryLogger;

impl InquiryLogger for NoInquiryLogger {
    fn log(&self, _event: InquiryEvent) {}
}
