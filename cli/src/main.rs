//! CLI entrypoint for NatureMind
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use naturemind_application::{
    BuildDashboardUseCase, DashboardParams, EvaluateIndicatorsInput, IndicatorGating,
    InquiryLogger, InquirySession, NoInquiryLogger, SubmitInquiryUseCase, SubmitOutcome,
};
use naturemind_domain::IndicatorKind;
use naturemind_infrastructure::{
    ConfigLoader, FileConfig, JsonlInquiryLogger, LocalAssetLocator, TimedPacing,
};
use naturemind_presentation::{
    Cli, ConsoleFormatter, DashboardRepl, OutputFormatter, ProgressReporter,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    // Keep the guard alive so the file writer flushes on exit
    let log_dir = cli
        .log_dir
        .clone()
        .or_else(|| config.logging.log_dir.as_ref().map(PathBuf::from));
    let _log_guard = init_logging(cli.verbose, log_dir.as_deref());

    info!("Starting NatureMind dashboard");

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("Invalid configuration: {}", issue);
        }
        bail!("Configuration has {} invalid value(s)", issues.len());
    }

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let params = apply_overrides(config.to_dashboard_params(), &cli);
    let format = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    // === Dependency Injection ===
    let step_delay = if cli.quiet {
        Duration::ZERO
    } else {
        config.session.step_delay()
    };
    let pacer = Arc::new(TimedPacing::new(step_delay));
    let locator = Arc::new(LocalAssetLocator::new(
        cli.assets_dir
            .clone()
            .unwrap_or_else(|| config.assets.base_dir()),
    ));
    let logger = inquiry_logger(&cli, &config);

    let submit = SubmitInquiryUseCase::new(pacer)
        .with_progress_steps(params.progress_steps)
        .with_logger(logger);
    let dashboard = BuildDashboardUseCase::new(locator, &params);

    // Interactive mode
    if cli.interactive {
        let mut repl = DashboardRepl::new(submit, dashboard, &params)
            .with_progress(!cli.quiet && config.repl.show_progress)
            .with_format(format)
            .with_history(config.repl.history_path());

        repl.run().await?;
        return Ok(());
    }

    // Single run: optional submission, then one render
    let mut session = InquirySession::new();
    if let Some(query) = cli.query.as_deref() {
        let outcome = if cli.quiet {
            submit.execute(&mut session, Some(query)).await?
        } else {
            let progress = ProgressReporter::new();
            submit
                .execute_with_progress(&mut session, Some(query), &progress)
                .await?
        };

        if let SubmitOutcome::Rejected { warning } = outcome {
            eprintln!("{}", warning);
        }
    }

    let view = dashboard.execute(
        &session,
        EvaluateIndicatorsInput::new(params.reading, params.confidence),
    )?;

    println!("{}", ConsoleFormatter.render(&view, format));

    Ok(())
}

/// Initialize logging based on verbosity level, optionally mirrored to a
/// daily-rotated file
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "naturemind.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .init();

    guard
}

fn inquiry_logger(cli: &Cli, config: &FileConfig) -> Arc<dyn InquiryLogger> {
    let path = cli
        .inquiry_log
        .clone()
        .or_else(|| config.logging.inquiry_log.as_ref().map(PathBuf::from));

    match path.and_then(JsonlInquiryLogger::new) {
        Some(logger) => {
            info!("Logging inquiries to {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoInquiryLogger),
    }
}

/// Command-line values take precedence over configuration files
fn apply_overrides(params: DashboardParams, cli: &Cli) -> DashboardParams {
    let mut reading = params.reading;
    for (kind, value) in [
        (IndicatorKind::FloodRisk, cli.flood_risk),
        (IndicatorKind::VegetationIndex, cli.ndvi),
        (IndicatorKind::Imperviousness, cli.imperviousness),
    ] {
        if let Some(value) = value {
            reading = reading.with(kind, value);
        }
    }

    let mut params = params.with_reading(reading);
    if let Some(confidence) = cli.confidence {
        params = params.with_confidence(confidence);
    }
    if let Some(policy) = cli.range_policy {
        params = params.with_range_policy(policy);
    }
    if cli.show_all {
        params = params.with_gating(IndicatorGating::Always);
    }
    params
}
