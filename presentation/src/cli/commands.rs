//! CLI command definitions

use clap::{Parser, ValueEnum};
use naturemind_application::RangePolicy;
use std::path::PathBuf;

/// Output format for dashboard results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Every dashboard section
    Full,
    /// Score and mode only
    Summary,
    /// JSON output
    Json,
}

impl From<OutputFormat> for naturemind_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for naturemind
#[derive(Parser, Debug)]
#[command(name = "naturemind")]
#[command(author, version, about = "Oxfordshire flood resilience dashboard (demo)")]
#[command(long_about = r#"
NatureMind shows a resilience score blended from three environmental
indicators, the operating mode derived from model confidence, the three
candidate wetland sites, and the final report's compliance summary.

  resilience = 0.4 * (1 - flood_risk) + 0.3 * ndvi + 0.3 * (1 - imperviousness)
  mode       = Auto if confidence >= 0.6, otherwise Interactive

Indicators are shown once a non-empty query has been submitted
(use --show-all to show them regardless).

Configuration files are loaded from (in priority order):
1. NATUREMIND_* environment variables
2. --config <path>     Explicit config file
3. ./naturemind.toml   Project-level config
4. ~/.config/naturemind/config.toml   Global config

Example:
  naturemind "Analyze flood resilience for Oxfordshire flood zones"
  naturemind --flood-risk 0.3 --ndvi 0.7 -o full "Compare wetland sites"
  naturemind --interactive
"#)]
pub struct Cli {
    /// The query to submit (not required in interactive mode)
    pub query: Option<String>,

    /// Start the interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Flood risk in [0, 1]
    #[arg(long, value_name = "VALUE")]
    pub flood_risk: Option<f64>,

    /// NDVI (vegetation index) in [0, 1]
    #[arg(long, value_name = "VALUE")]
    pub ndvi: Option<f64>,

    /// Imperviousness in [0, 1]
    #[arg(long, value_name = "VALUE")]
    pub imperviousness: Option<f64>,

    /// Model confidence in [0, 1]; 0.6 and above selects Auto mode
    #[arg(long, value_name = "VALUE")]
    pub confidence: Option<f64>,

    /// How out-of-range inputs are handled: clamp or reject
    #[arg(long, value_name = "POLICY")]
    pub range_policy: Option<RangePolicy>,

    /// Show indicators before a query has been submitted
    #[arg(long)]
    pub show_all: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Directory holding the report document, animation, and figures
    #[arg(long, value_name = "DIR")]
    pub assets_dir: Option<PathBuf>,

    /// Append submission events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub inquiry_log: Option<PathBuf>,

    /// Write daily-rotated diagnostic logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
