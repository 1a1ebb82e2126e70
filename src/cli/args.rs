//! CLI argument definitions using clap derive

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    classify::{DueArgs, RoiArgs},
    completions::CompletionsArgs,
    integrations::IntegrationCommands,
    report::ReportCommands,
    status::StatusArgs,
};

#[derive(Parser)]
#[command(name = "pmo")]
#[command(author, version, about = "PMO dashboard metrics")]
#[command(long_about = "Derives project status, quality KPI, coordination, portfolio and resource summaries from a static PMO dataset.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Output format (default: config `default_format`, then auto)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Dataset document (YAML or JSON); the embedded sample is used when unset
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Reference date for due-date calculations (YYYY-MM-DD)
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub today: Option<NaiveDate>,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard overview
    Status(StatusArgs),

    /// Generate dashboard reports (projects, KPIs, coordination, ...)
    #[command(subcommand)]
    Report(ReportCommands),

    /// Integration configuration records
    #[command(subcommand)]
    Integrations(IntegrationCommands),

    /// Classify an expected ROI percentage
    Roi(RoiArgs),

    /// Classify a due date relative to the reference date
    Due(DueArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Styled terminal output for `status`, markdown tables for reports
    #[default]
    Auto,
    /// Markdown tables
    Md,
    /// JSON format (for programming)
    Json,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}' (expected YYYY-MM-DD): {}", s, e))
}
