//! Output formatter trait

use naturemind_application::DashboardView;
use naturemind_domain::OutputFormat;

/// Trait for formatting dashboard views
pub trait OutputFormatter {
    /// Format every dashboard section
    fn format(&self, view: &DashboardView) -> String;

    /// Format as JSON
    fn format_json(&self, view: &DashboardView) -> String;

    /// Format score and mode only (concise output)
    fn format_summary(&self, view: &DashboardView) -> String;

    /// Dispatch on the configured output format
    fn render(&self, view: &DashboardView, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(view),
            OutputFormat::Summary => self.format_summary(view),
            OutputFormat::Json => self.format_json(view),
        }
    }
}
