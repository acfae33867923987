//! REPL (Read-Eval-Print Loop) for the interactive dashboard

use super::command::ReplCommand;
use crate::ConsoleFormatter;
use crate::ProgressReporter;
use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use naturemind_application::{
    AssetLocator, BuildDashboardUseCase, DashboardParams, EvaluateIndicatorsInput, InquirySession,
    NoProgress, PacingStrategy, SubmitInquiryUseCase, SubmitOutcome,
};
use naturemind_domain::{IndicatorKind, IndicatorReading, OutputFormat, SubmissionStatus};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::path::{Path, PathBuf};
use tracing::warn;

const HISTORY_CAPACITY: usize = 1000;

/// What the loop should do after a command
#[derive(Debug, Clone, PartialEq)]
pub enum ReplResponse {
    Output(String),
    Exit,
}

/// Interactive dashboard session
///
/// Owns the [`InquirySession`], so the submission status lives exactly as
/// long as the REPL does.
pub struct DashboardRepl<P: PacingStrategy + 'static, L: AssetLocator + 'static> {
    submit: SubmitInquiryUseCase<P>,
    dashboard: BuildDashboardUseCase<L>,
    session: InquirySession,
    reading: IndicatorReading,
    confidence: f64,
    format: OutputFormat,
    show_progress: bool,
    history_path: Option<PathBuf>,
}

impl<P: PacingStrategy + 'static, L: AssetLocator + 'static> DashboardRepl<P, L> {
    /// Create a new DashboardRepl seeded with the configured inputs
    pub fn new(
        submit: SubmitInquiryUseCase<P>,
        dashboard: BuildDashboardUseCase<L>,
        params: &DashboardParams,
    ) -> Self {
        Self {
            submit,
            dashboard,
            session: InquirySession::new(),
            reading: params.reading,
            confidence: params.confidence,
            format: OutputFormat::Summary,
            show_progress: true,
            history_path: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Set the format used after each submission
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Persist line history to this file
    pub fn with_history(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn status(&self) -> SubmissionStatus {
        self.session.status()
    }

    pub fn reading(&self) -> IndicatorReading {
        self.reading
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut editor = Reedline::create();

        if let Some(path) = &self.history_path
            && prepare_history_dir(path)
        {
            match FileBackedHistory::with_file(HISTORY_CAPACITY, path.clone()) {
                Ok(history) => editor = editor.with_history(Box::new(history)),
                Err(e) => warn!("History disabled ({}): {}", path.display(), e),
            }
        }

        let prompt = DefaultPrompt::new(
            DefaultPromptSegment::Basic("naturemind".to_string()),
            DefaultPromptSegment::Empty,
        );

        self.print_welcome();

        loop {
            match editor.read_line(&prompt)? {
                Signal::Success(line) => match self.execute(ReplCommand::parse(&line)).await {
                    ReplResponse::Output(text) => println!("{}", text),
                    ReplResponse::Exit => {
                        println!("Bye!");
                        break;
                    }
                },
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                Signal::CtrlD => {
                    println!("Bye!");
                    break;
                }
            }
        }

        Ok(())
    }

    /// Apply one command to the session
    pub async fn execute(&mut self, command: ReplCommand) -> ReplResponse {
        let text = match command {
            ReplCommand::Quit => return ReplResponse::Exit,
            ReplCommand::Help => Self::help_text(),
            ReplCommand::Submit(query) => self.submit_query(&query).await,
            ReplCommand::Set(kind, value) => self.set_indicator(kind, value),
            ReplCommand::Show => self.render(OutputFormat::Full),
            ReplCommand::Status => format!(
                "{} {} ({} submitted)",
                "Status:".cyan().bold(),
                self.session.status().display_name(),
                self.session.submissions()
            ),
            ReplCommand::Sites => self
                .dashboard_sites()
                .into_iter()
                .map(|label| format!("  * {}", label))
                .collect::<Vec<_>>()
                .join("\n"),
            ReplCommand::Invalid(message) => {
                format!("{}\nType /help for available commands", message.yellow())
            }
        };
        ReplResponse::Output(text)
    }

    async fn submit_query(&mut self, query: &str) -> String {
        let result = if self.show_progress {
            let progress = ProgressReporter::new();
            self.submit
                .execute_with_progress(&mut self.session, Some(query), &progress)
                .await
        } else {
            self.submit
                .execute_with_progress(&mut self.session, Some(query), &NoProgress)
                .await
        };

        match result {
            Ok(SubmitOutcome::Accepted { .. }) => self.render(self.format),
            Ok(SubmitOutcome::Rejected { warning }) => {
                format!("{} {}", "!".yellow().bold(), warning.yellow())
            }
            Err(e) => format!("{} {}", "Error:".red().bold(), e),
        }
    }

    fn set_indicator(&mut self, kind: IndicatorKind, value: f64) -> String {
        match kind {
            IndicatorKind::Confidence => self.confidence = value,
            _ => self.reading = self.reading.with(kind, value),
        }
        let mut text = format!("{} = {:.2}", kind.display_name(), value);
        if !(0.0..=1.0).contains(&value) {
            text.push_str(&format!(" {}", "(outside [0, 1])".yellow()));
        }
        text
    }

    fn render(&self, format: OutputFormat) -> String {
        let input = EvaluateIndicatorsInput::new(self.reading, self.confidence);
        match self.dashboard.execute(&self.session, input) {
            Ok(view) => ConsoleFormatter.render(&view, format),
            Err(e) => format!("{} {}", "Error:".red().bold(), e),
        }
    }

    fn dashboard_sites(&self) -> Vec<String> {
        naturemind_domain::site_catalog()
            .iter()
            .map(|site| site.label())
            .collect()
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│       NatureMind - Interactive Dashboard    │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("Type a query and press Enter to submit it.");
        println!("{}", Self::help_text());
        println!();
    }

    fn help_text() -> String {
        [
            "Commands:",
            "  /set <indicator> <value>  - Set flood, ndvi, impervious, or confidence",
            "  /<indicator> <value>      - Shorthand for /set",
            "  /show                     - Show the full dashboard",
            "  /status                   - Show the submission status",
            "  /sites                    - List candidate wetland sites",
            "  /help, /h, /?             - Show this help",
            "  /quit, /exit, /q          - Exit",
        ]
        .join("\n")
    }
}

/// Make sure the history file's directory exists
fn prepare_history_dir(path: &Path) -> bool {
    let Some(parent) = path.parent() else {
        return true;
    };
    match std::fs::create_dir_all(parent) {
        Ok(()) => true,
        Err(e) => {
            warn!("History disabled, cannot create {}: {}", parent.display(), e);
            false
        }
    }
}
