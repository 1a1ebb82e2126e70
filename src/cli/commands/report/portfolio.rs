//! Portfolio investment report

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{format_number, format_percent, tally_rows, truncate_str};
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::metrics::roi::PortfolioSummary;

#[derive(clap::Args, Debug)]
pub struct PortfolioArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: PortfolioArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let summary = PortfolioSummary::compute(&ctx.dataset.portfolio);

    let content = render(&summary, ctx.format, |w| {
        w.title("Portfolio Report");
        let rows: Vec<Vec<String>> = summary
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    truncate_str(&r.name, 28),
                    r.status.to_string(),
                    r.phase.clone(),
                    format!("{}%", format_number(r.risk_level)),
                    format_number(r.innovation_index),
                    format_number(r.budget),
                    format_number(r.actual_spent),
                    format_percent(r.spend_efficiency),
                    format!("{}%", format_number(r.expected_roi)),
                    format!("{} ({})", r.roi_band, r.marker_size),
                ]
            })
            .collect();
        w.table(
            &[
                "ID", "Name", "Status", "Phase", "Risk", "Innovation", "Budget", "Spent", "Spend",
                "ROI", "Band",
            ],
            &rows,
        );

        w.heading("Totals");
        w.table(
            &["Budget", "Spent", "Average ROI"],
            &[vec![
                format_number(summary.total_budget),
                format_number(summary.total_spent),
                summary
                    .average_roi
                    .map_or_else(|| "N/A".to_string(), |r| format!("{}%", format_number(r))),
            ]],
        );

        w.heading("Status Breakdown");
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&summary.status));
    })?;

    write_output(&content, args.output, ctx.quiet)
}
