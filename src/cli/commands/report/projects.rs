//! Project status report

use miette::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::helpers::{format_number, tally_rows, truncate_str};
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::entities::{Project, ProjectStatus};
use crate::metrics::tally::{tally_by, StatusTally};

#[derive(clap::Args, Debug)]
pub struct ProjectsArgs {
    /// Only list projects with this status (on-track, at-risk, delayed)
    #[arg(long, short = 's')]
    pub status: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

#[derive(Serialize)]
struct ProjectsReport<'a> {
    projects: Vec<&'a Project>,
    status: StatusTally<ProjectStatus>,
}

pub fn run(args: ProjectsArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;

    let filter = args
        .status
        .as_deref()
        .map(|s| s.parse::<ProjectStatus>().map_err(|e| miette::miette!("{}", e)))
        .transpose()?;

    let projects: Vec<&Project> = ctx
        .dataset
        .projects
        .iter()
        .filter(|p| filter.map_or(true, |f| p.status == f))
        .collect();

    // The breakdown always covers the whole dataset
    let report = ProjectsReport {
        status: tally_by(&ctx.dataset.projects, |p| p.status),
        projects,
    };

    let content = render(&report, ctx.format, |w| {
        w.title("Project Status Report");
        let rows: Vec<Vec<String>> = report
            .projects
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    truncate_str(&p.name, 36),
                    p.status.to_string(),
                    format!("{}%", format_number(p.progress)),
                    p.phase.clone(),
                    p.manager.clone(),
                ]
            })
            .collect();
        w.table(&["ID", "Name", "Status", "Progress", "Phase", "Manager"], &rows);

        w.heading("Status Breakdown");
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&report.status));
    })?;

    write_output(&content, args.output, ctx.quiet)
}
