//! Logging infrastructure — structured inquiry logging.
//!
//! Provides [`JsonlInquiryLogger`], a JSONL file writer that implements
//! the [`InquiryLogger`](naturemind_application::InquiryLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlInquiryLogger;
