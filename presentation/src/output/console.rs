//! Console output formatter for dashboard views

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use naturemind_application::{DashboardView, IndicatorEvaluation};
use naturemind_domain::{IndicatorKind, OperatingMode, SubmissionStatus};

const TITLE: &str = "NatureMind AI - Oxfordshire Flood Resilience Dashboard";

/// Formats dashboard views for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete dashboard
    pub fn format(view: &DashboardView) -> String {
        let mut output = String::new();

        output.push_str(&Self::header(TITLE));
        output.push('\n');

        output.push_str(&format!(
            "{} {}\n",
            "Status:".cyan().bold(),
            Self::status_label(view.status)
        ));
        if let Some(query) = &view.query {
            output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));
        }
        output.push_str(&format!(
            "{} {}\n",
            "Location:".cyan().bold(),
            view.location
        ));

        // Indicators (or the gating notice)
        output.push_str(&Self::section_header("Model Indicators"));
        match (&view.indicators, &view.notice) {
            (Some(evaluation), _) => output.push_str(&Self::indicators(evaluation)),
            (None, Some(notice)) => output.push_str(&format!("{}\n", notice.dimmed())),
            (None, None) => {}
        }

        // Sites
        output.push_str(&Self::section_header("Candidate Wetland Sites"));
        output.push_str(&format!(
            "{}\n",
            format!(
                "Map centre: {:.2}, {:.2}",
                view.map_center.lat, view.map_center.lon
            )
            .dimmed()
        ));
        for site in &view.sites {
            output.push_str(&format!(
                "  * {} ({:.4}, {:.5})\n",
                site.label(),
                site.location.lat,
                site.location.lon
            ));
        }

        // Compliance
        output.push_str(&Self::section_header("Compliance Evaluation"));
        output.push_str(&format!(
            "{} {:.2} ({})\n",
            "Compliance Score:".bold(),
            view.compliance.score,
            view.compliance.verdict.green()
        ));
        output.push_str(&format!(
            "Aligned with: {}\n",
            view.compliance.legislation.join(", ")
        ));
        output.push_str(&format!("\n{}\n", "Recommendations:".cyan().bold()));
        for item in &view.compliance.recommendations {
            output.push_str(&format!("  * {}\n", item));
        }

        // Assets
        output.push_str(&Self::section_header("Report & Figures"));
        for entry in &view.assets {
            match &entry.notice {
                None => output.push_str(&format!(
                    "  {} {} ({})\n",
                    "v".green(),
                    entry.asset.caption,
                    entry.asset.display_name()
                )),
                Some(notice) => {
                    output.push_str(&format!("  {} {}\n", "!".yellow(), notice.yellow()))
                }
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(view: &DashboardView) -> String {
        serde_json::to_string_pretty(view).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format score and mode only
    pub fn format_summary(view: &DashboardView) -> String {
        match &view.indicators {
            Some(evaluation) => format!(
                "{} {:.2}  {} {}  {} {}\n",
                "Resilience Score:".cyan().bold(),
                evaluation.score(),
                "Mode:".cyan().bold(),
                Self::mode_label(evaluation.mode()),
                "Location:".dimmed(),
                view.location
            ),
            None => format!(
                "{} {}\n",
                Self::status_label(view.status),
                view.notice.as_deref().unwrap_or_default().dimmed()
            ),
        }
    }

    fn indicators(evaluation: &IndicatorEvaluation) -> String {
        let mut output = String::new();
        let reading = &evaluation.reading;

        for (kind, value) in [
            (IndicatorKind::FloodRisk, reading.flood_risk),
            (IndicatorKind::VegetationIndex, reading.vegetation_index),
            (IndicatorKind::Imperviousness, reading.imperviousness),
            (IndicatorKind::Confidence, evaluation.confidence),
        ] {
            let marker = if evaluation.clamped.contains(&kind) {
                " (clamped)".yellow().to_string()
            } else {
                String::new()
            };
            output.push_str(&format!(
                "  {:<24} {:.2}{}\n",
                kind.display_name(),
                value,
                marker
            ));
        }

        output.push_str(&format!(
            "\n{} {}\n{} {:.2}\n",
            "Mode:".bold(),
            Self::mode_label(evaluation.mode()),
            "Resilience Score:".bold(),
            evaluation.score()
        ));
        output
    }

    fn mode_label(mode: OperatingMode) -> String {
        match mode {
            OperatingMode::Auto => mode.as_str().green().bold().to_string(),
            OperatingMode::Interactive => mode.as_str().yellow().bold().to_string(),
        }
    }

    fn status_label(status: SubmissionStatus) -> String {
        match status {
            SubmissionStatus::Idle => status.display_name().dimmed().to_string(),
            SubmissionStatus::Processing => status.display_name().yellow().to_string(),
            SubmissionStatus::Ready => status.display_name().green().to_string(),
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!(
            "\n{}\n{}\n",
            "=".repeat(60).cyan(),
            "NatureMind AI (c) 2025 - Demo Dashboard".dimmed()
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, view: &DashboardView) -> String {
        Self::format(view)
    }

    fn format_json(&self, view: &DashboardView) -> String {
        Self::format_json(view)
    }

    fn format_summary(&self, view: &DashboardView) -> String {
        Self::format_summary(view)
    }
}
