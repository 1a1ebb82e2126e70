//! `pmo roi` and `pmo due` - one-shot classifiers

use chrono::NaiveDate;
use miette::Result;
use serde::Serialize;

use crate::cli::context::{resolve_format, resolve_today};
use crate::cli::helpers::{format_number, format_percent};
use crate::cli::output::{render, write_output};
use crate::cli::GlobalOpts;
use crate::core::Config;
use crate::metrics::due::{classify_due, DueStatus, URGENT_WINDOW_DAYS};
use crate::metrics::roi::{classify_roi, spend_efficiency, RoiBand};

#[derive(clap::Args, Debug)]
pub struct RoiArgs {
    /// Expected ROI in percent
    #[arg(allow_negative_numbers = true)]
    pub value: f64,

    /// Budget, to report spend efficiency together with --spent
    #[arg(long, requires = "spent")]
    pub budget: Option<f64>,

    /// Amount spent to date
    #[arg(long, requires = "budget")]
    pub spent: Option<f64>,
}

#[derive(clap::Args, Debug)]
pub struct DueArgs {
    /// Due date (YYYY-MM-DD)
    pub date: String,
}

#[derive(Serialize)]
struct RoiResult {
    roi: f64,
    band: RoiBand,
    size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    spend_efficiency: Option<i64>,
}

#[derive(Serialize)]
struct DueResult {
    due_date: String,
    today: NaiveDate,
    days: Option<i64>,
    status: DueStatus,
    urgent: bool,
    overdue: bool,
}

pub fn run_roi(args: RoiArgs, global: &GlobalOpts) -> Result<()> {
    let format = resolve_format(global, &Config::load());
    let band = classify_roi(args.value);
    let result = RoiResult {
        roi: args.value,
        band,
        size: band.size(),
        spend_efficiency: match (args.spent, args.budget) {
            (Some(spent), Some(budget)) => spend_efficiency(spent, budget),
            _ => None,
        },
    };

    let content = render(&result, format, |w| {
        w.table(
            &["ROI", "Band", "Size"],
            &[vec![
                format!("{}%", format_number(result.roi)),
                result.band.to_string(),
                result.size.to_string(),
            ]],
        );
        if args.budget.is_some() {
            w.line(&format!("Spend efficiency: {}", format_percent(result.spend_efficiency)));
        }
    })?;

    write_output(&content, None, global.quiet)
}

pub fn run_due(args: DueArgs, global: &GlobalOpts) -> Result<()> {
    let config = Config::load();
    let format = resolve_format(global, &config);
    let today = resolve_today(global, &config);
    let status = classify_due(&args.date, today);

    let result = DueResult {
        due_date: args.date,
        today,
        days: status.days(),
        status,
        urgent: status.is_urgent(),
        overdue: status.is_overdue(),
    };

    let content = render(&result, format, |w| {
        w.table(
            &["Due", "Today", "Days", "Status"],
            &[vec![
                result.due_date.clone(),
                result.today.to_string(),
                result.days.map_or_else(|| "N/A".to_string(), |d| d.to_string()),
                result.status.to_string(),
            ]],
        );
        w.line(&format!("Urgent window: {} days", URGENT_WINDOW_DAYS));
    })?;

    write_output(&content, None, global.quiet)
}
