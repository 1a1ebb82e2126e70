//! Per-invocation context: resolved config, dataset and reference date

use chrono::{Local, NaiveDate};
use clap::ValueEnum;
use miette::Result;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::{Config, Dataset};

/// Everything a command needs, with CLI flags applied over config
pub struct Context {
    pub dataset: Dataset,
    pub today: NaiveDate,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Resolve config layers and load the dataset
    pub fn load(global: &GlobalOpts) -> Result<Self> {
        let config = Config::load();
        let dataset_path = global.dataset.clone().or_else(|| config.dataset.clone());
        let dataset = Dataset::load_or_sample(dataset_path.as_deref())?;
        for d in dataset.dangling_references() {
            tracing::warn!(
                source = d.source,
                record = %d.record,
                reference = %d.reference,
                "unresolved project reference"
            );
        }

        Ok(Self {
            dataset,
            today: resolve_today(global, &config),
            format: resolve_format(global, &config),
            quiet: global.quiet,
        })
    }
}

/// `--today`, then config, then the local system date
pub fn resolve_today(global: &GlobalOpts, config: &Config) -> NaiveDate {
    global
        .today
        .or_else(|| config.today())
        .unwrap_or_else(|| Local::now().date_naive())
}

/// `--format`, then the configured default, then auto
pub fn resolve_format(global: &GlobalOpts, config: &Config) -> OutputFormat {
    if let Some(format) = global.format {
        return format;
    }
    match config.default_format.as_deref() {
        Some(name) => OutputFormat::from_str(name, true).unwrap_or_else(|_| {
            tracing::warn!(value = name, "unknown default_format in config, using auto");
            OutputFormat::Auto
        }),
        None => OutputFormat::Auto,
    }
}
