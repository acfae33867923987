//! Interactive dashboard session
//!
//! Provides a reedline-based REPL: plain lines are submitted as queries,
//! slash commands adjust indicators and show dashboard sections.

mod command;
mod repl;

pub use command::ReplCommand;
pub use repl::{DashboardRepl, ReplResponse};
