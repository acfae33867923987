//! Presentation layer for naturemind
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporters, and the interactive dashboard session.

pub mod cli;
pub mod output;
pub mod progress;
pub mod session;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::ProgressReporter;
pub use session::{DashboardRepl, ReplCommand};
