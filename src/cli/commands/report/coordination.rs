//! Coordination board report

use miette::Result;
use std::path::PathBuf;

use crate::cli::helpers::{tally_rows, truncate_str};
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::entities::CoordinationStatus;
use crate::metrics::coordination::{CoordinationBoard, ProjectRef};
use crate::metrics::due::DueCounts;

#[derive(clap::Args, Debug)]
pub struct CoordinationArgs {
    /// Hide resolved items
    #[arg(long)]
    pub open: bool,

    /// Output to file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,
}

pub fn run(args: CoordinationArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let mut board = CoordinationBoard::compute(&ctx.dataset, ctx.today);

    if args.open {
        board.cross_project.retain(|c| c.status != CoordinationStatus::Resolved);
        for group in &mut board.team_groups {
            group.items.retain(|i| i.status != CoordinationStatus::Resolved);
            group.due = DueCounts::from_statuses(group.items.iter().map(|i| i.due));
        }
        board.team_groups.retain(|g| !g.items.is_empty());
    }

    let content = render(&board, ctx.format, |w| {
        w.title(&format!("Coordination Board ({})", ctx.today));

        w.heading("Cross-Project Coordination");
        let rows: Vec<Vec<String>> = board
            .cross_project
            .iter()
            .map(|c| {
                vec![
                    c.id.clone(),
                    endpoint(&c.from),
                    endpoint(&c.to),
                    truncate_str(&c.topic, 36),
                    c.priority.to_string(),
                    c.status.to_string(),
                    c.due_date.clone(),
                    c.due.to_string(),
                ]
            })
            .collect();
        w.table(&["ID", "From", "To", "Topic", "Priority", "Status", "Due", "Remaining"], &rows);
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&board.cross_project_status));

        w.heading("Team Coordination");
        for group in &board.team_groups {
            w.subheading(&format!(
                "{} ({} items, {} urgent, {} overdue)",
                group.project_name,
                group.items.len(),
                group.due.urgent,
                group.due.overdue
            ));
            let rows: Vec<Vec<String>> = group
                .items
                .iter()
                .map(|i| {
                    vec![
                        i.id.clone(),
                        format!("{} -> {}", i.from_team, i.to_team),
                        truncate_str(&i.topic, 36),
                        i.priority.to_string(),
                        i.status.to_string(),
                        i.due_date.clone(),
                        i.due.to_string(),
                    ]
                })
                .collect();
            w.table(&["ID", "Teams", "Topic", "Priority", "Status", "Due", "Remaining"], &rows);
        }
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&board.team_status));
    })?;

    write_output(&content, args.output, ctx.quiet)
}

/// Project label, marked when the reference did not resolve
fn endpoint(project: &ProjectRef) -> String {
    if project.resolved {
        project.label.clone()
    } else {
        format!("{} (unresolved)", project.label)
    }
}
