//! Weekly progress digest report

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{format_number, tally_line, truncate_str};
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::metrics::weekly::{weekly_digests, WeeklyDigest};

#[derive(clap::Args, Debug)]
pub struct WeeklyArgs {
    /// Only the report of this project (id or name)
    #[arg(long, short = 'p')]
    pub project: Option<String>,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: WeeklyArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let mut digests = weekly_digests(&ctx.dataset, ctx.today);

    if let Some(reference) = args.project.as_deref() {
        let project_id = ctx
            .dataset
            .find_project(reference)
            .map(|p| p.id.as_str())
            .unwrap_or(reference);
        digests.retain(|d| d.project_id == project_id);
        if digests.is_empty() {
            return Err(miette::miette!("No weekly report for project '{}'", reference));
        }
    }

    let content = render(&digests, ctx.format, |w| {
        w.title(&format!("Weekly Progress Digest ({})", ctx.today));
        for digest in &digests {
            write_digest(w, digest);
        }
    })?;

    write_output(&content, args.output, ctx.quiet)
}

fn write_digest(w: &mut crate::cli::output::ReportWriter, digest: &WeeklyDigest) {
    w.heading(&format!(
        "{} (week ending {}, {}%)",
        digest.project_name,
        digest.week_ending,
        format_number(digest.progress)
    ));
    w.line(&format!("Risks by impact: {}", tally_line(&digest.risks_by_impact)));
    w.line(&format!("Issues by priority: {}", tally_line(&digest.issues_by_priority)));
    w.line(&format!(
        "Open issues: {} ({} urgent, {} overdue)",
        digest.open_issues.len(),
        digest.issue_due.urgent,
        digest.issue_due.overdue
    ));

    if !digest.open_issues.is_empty() {
        w.subheading("Open Issues");
        let rows: Vec<Vec<String>> = digest
            .open_issues
            .iter()
            .map(|i| {
                vec![
                    i.id.clone(),
                    truncate_str(&i.description, 48),
                    i.priority.to_string(),
                    i.assignee.clone(),
                    i.due.to_string(),
                ]
            })
            .collect();
        w.table(&["ID", "Description", "Priority", "Assignee", "Due"], &rows);
    }

    w.line(&format!(
        "Decisions: {} ({} pending)",
        digest.decisions.len(),
        digest.pending_decisions()
    ));

    if !digest.decisions.is_empty() {
        w.subheading("Decisions");
        let rows: Vec<Vec<String>> = digest
            .decisions
            .iter()
            .map(|d| {
                vec![
                    d.id.clone(),
                    truncate_str(&d.question, 48),
                    d.option_count.to_string(),
                    d.selected.clone().unwrap_or_else(|| "(pending)".to_string()),
                    d.selected_risk.map_or_else(|| "-".to_string(), |r| r.to_string()),
                ]
            })
            .collect();
        w.table(&["ID", "Question", "Options", "Selected", "Risk"], &rows);

        for d in &digest.decisions {
            if let Some(description) = &d.selected_description {
                w.line(&format!("{}: {}", d.id, description));
            }
            if !d.details.is_empty() {
                w.line(&format!("{} rationale: {}", d.id, d.details));
            }
        }
    }
}
