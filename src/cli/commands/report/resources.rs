//! Resource matrix report

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::truncate_str;
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::entities::ResourceCell;
use crate::metrics::resources::{format_cell, ResourceMatrix};

#[derive(clap::Args, Debug)]
pub struct ResourcesArgs {
    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: ResourcesArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let matrix = ResourceMatrix::compute(&ctx.dataset.resource_plans);

    let content = render(&matrix, ctx.format, |w| {
        w.title("Resource Matrix (person-months)");

        let mut headers = vec!["Project", "Side"];
        headers.extend(matrix.phases.iter().copied());
        headers.push("Total");

        let mut rows: Vec<Vec<String>> = Vec::new();
        for row in &matrix.rows {
            let total = row.total();
            rows.push(side_row(
                &truncate_str(&row.project, 28),
                "user",
                row.cells.iter().map(|c| c.map(|c| c.user)),
                total.user,
            ));
            rows.push(side_row(
                "",
                "vendor",
                row.cells.iter().map(|c| c.map(|c| c.vendor)),
                total.vendor,
            ));
        }

        let grand = matrix.grand_total();
        rows.push(side_row(
            "Total",
            "user",
            matrix.totals.iter().map(|c: &ResourceCell| Some(c.user)),
            grand.user,
        ));
        rows.push(side_row(
            "",
            "vendor",
            matrix.totals.iter().map(|c: &ResourceCell| Some(c.vendor)),
            grand.vendor,
        ));
        w.table(&headers, &rows);

        for row in matrix.rows.iter().filter(|r| !r.unplaced.is_empty()) {
            w.line(&format!(
                "\n{}: phases outside the standard order were skipped: {}",
                row.project,
                row.unplaced.join(", ")
            ));
        }
    })?;

    write_output(&content, args.output, ctx.quiet)
}

fn side_row(
    project: &str,
    side: &str,
    values: impl Iterator<Item = Option<f64>>,
    total: f64,
) -> Vec<String> {
    let mut cells = vec![project.to_string(), side.to_string()];
    cells.extend(values.map(format_cell));
    cells.push(format_cell(Some(total)));
    cells
}
