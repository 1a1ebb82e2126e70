//! Quality KPI report

use miette::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::helpers::{format_number, tally_rows, truncate_str};
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::entities::KpiMetric;
use crate::metrics::kpi::{kpi_rows, kpi_summary, KpiEvaluation, KpiRow, KpiStatus};
use crate::metrics::tally::StatusTally;

#[derive(clap::Args, Debug)]
pub struct KpiArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct KpiReport {
    rows: Vec<KpiRow>,
    summary: StatusTally<KpiStatus>,
}

pub fn run(args: KpiArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let report = KpiReport {
        rows: kpi_rows(&ctx.dataset.quality_kpis, &ctx.dataset.projects),
        summary: kpi_summary(&ctx.dataset.quality_kpis),
    };

    let content = render(&report, ctx.format, |w| {
        w.title("Quality KPI Report");

        let mut headers = vec!["Project", "Manager", "Phase"];
        headers.extend(KpiMetric::ALL.iter().map(|m| m.spec().label));
        headers.push("Overall");

        let rows: Vec<Vec<String>> = report
            .rows
            .iter()
            .map(|row| {
                let mut cells = vec![
                    truncate_str(&row.project_name, 28),
                    row.manager.clone(),
                    row.phase.clone(),
                ];
                cells.extend(row.evaluations.iter().map(format_evaluation));
                cells.push(format!("{}/{} {}", row.achieved, row.evaluations.len(), row.overall));
                cells
            })
            .collect();
        w.table(&headers, &rows);

        w.heading("Achievement Summary");
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&report.summary));
    })?;

    write_output(&content, args.output, ctx.quiet)
}

/// "actual / target unit (status)"
fn format_evaluation(eval: &KpiEvaluation) -> String {
    let unit = eval.metric.spec().unit;
    format!(
        "{}{unit} / {}{unit} ({})",
        format_number(eval.actual),
        format_number(eval.target),
        eval.status
    )
}
