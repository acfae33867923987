//! Output formatting for dashboard views

pub mod console;
pub mod formatter;
