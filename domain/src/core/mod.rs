//! Core domain concepts shared across all subdomains.
//!
//! - [`query::Query`] — a validated inquiry submitted from the dashboard
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod query;
