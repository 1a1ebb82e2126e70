//! `pmo status` command - Dashboard overview

use console::style;
use miette::Result;

use crate::cli::helpers::{format_number, tally_line, tally_rows, truncate_str};
use crate::cli::output::{render, write_output, ReportWriter};
use crate::cli::{Context, GlobalOpts, OutputFormat};
use crate::entities::ProjectStatus;
use crate::metrics::dashboard::DashboardSummary;
use crate::metrics::due::DueCounts;
use crate::metrics::kpi::KpiStatus;

#[derive(clap::Args, Debug)]
pub struct StatusArgs {
    /// Show detailed breakdown (project list and team coordination groups)
    #[arg(long)]
    pub detailed: bool,
}

pub fn run(args: StatusArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let summary = DashboardSummary::compute(&ctx.dataset, ctx.today);

    if ctx.format == OutputFormat::Auto {
        print_dashboard(&summary, args.detailed);
        return Ok(());
    }

    let content = render(&summary, ctx.format, |w| write_tables(w, &summary, args.detailed))?;
    write_output(&content, None, ctx.quiet)
}

fn write_tables(w: &mut ReportWriter, summary: &DashboardSummary, detailed: bool) {
    let h = &summary.headline;
    w.title(&format!("PMO Dashboard ({})", summary.today));
    w.table(
        &["Metric", "Value"],
        &[
            vec!["Active projects".to_string(), h.active_projects.to_string()],
            vec!["KPI achievement rate".to_string(), format!("{}%", h.kpi_achievement_rate)],
            vec!["Open cross-project items".to_string(), h.open_cross_project.to_string()],
            vec!["Team coordination items".to_string(), h.team_coordinations.to_string()],
        ],
    );

    w.heading("Project status");
    w.table(&["Status", "Count", "%", "Color"], &tally_rows(&summary.project_status));

    w.heading("KPI achievement");
    w.table(&["Status", "Count", "%", "Color"], &tally_rows(&summary.kpi_summary));

    w.heading("Integration configuration");
    w.table(&["Status", "Count", "%", "Color"], &tally_rows(&summary.integration_status));

    if detailed {
        w.heading("Projects");
        let rows: Vec<Vec<String>> = summary
            .projects
            .iter()
            .map(|p| {
                vec![
                    p.id.clone(),
                    truncate_str(&p.name, 32),
                    p.status.to_string(),
                    format!("{}%", format_number(p.progress)),
                    p.phase.clone(),
                    p.manager.clone(),
                ]
            })
            .collect();
        w.table(&["ID", "Name", "Status", "Progress", "Phase", "Manager"], &rows);

        w.heading("Team coordination");
        let rows: Vec<Vec<String>> = summary
            .coordination
            .team_groups
            .iter()
            .map(|g| {
                vec![
                    g.project_name.clone(),
                    g.items.len().to_string(),
                    g.due.urgent.to_string(),
                    g.due.overdue.to_string(),
                ]
            })
            .collect();
        w.table(&["Project", "Items", "Urgent", "Overdue"], &rows);
    }
}

fn print_dashboard(summary: &DashboardSummary, detailed: bool) {
    let width = 68;
    let h = &summary.headline;

    println!("{}", style("PMO Dashboard").bold().underlined());
    println!("Reference date: {}", summary.today);
    println!("{}", "═".repeat(width));
    println!();

    print_two_columns(
        "PROJECTS",
        &[
            format!("Active:        {}", h.active_projects),
            format!("On track:      {}", summary.project_status.count(ProjectStatus::OnTrack)),
            format!("At risk:       {}", summary.project_status.count(ProjectStatus::AtRisk)),
            format!("Delayed:       {}", summary.project_status.count(ProjectStatus::Delayed)),
        ],
        "QUALITY KPIs",
        &[
            format!("Achievement:   {}%", h.kpi_achievement_rate),
            format!("Achieved:      {}", summary.kpi_summary.count(KpiStatus::Success)),
            format!("Warning:       {}", summary.kpi_summary.count(KpiStatus::Warning)),
            format!("Missed:        {}", summary.kpi_summary.count(KpiStatus::Danger)),
        ],
    );

    println!();

    let team_due = summary
        .coordination
        .team_groups
        .iter()
        .fold(DueCounts::default(), |acc, g| DueCounts {
            urgent: acc.urgent + g.due.urgent,
            overdue: acc.overdue + g.due.overdue,
        });
    print_two_columns(
        "COORDINATION",
        &[
            format!("Cross-project: {}", summary.coordination.cross_project.len()),
            format!("  unresolved:  {}", h.open_cross_project),
            format!("Team items:    {}", h.team_coordinations),
            format!("  urgent/late: {}/{}", team_due.urgent, team_due.overdue),
        ],
        "PORTFOLIO",
        &[
            format!("Investments:   {}", summary.portfolio.rows.len()),
            format!("Budget:        {}", format_number(summary.portfolio.total_budget)),
            format!("Spent:         {}", format_number(summary.portfolio.total_spent)),
            format!(
                "Average ROI:   {}",
                summary
                    .portfolio
                    .average_roi
                    .map_or_else(|| "N/A".to_string(), |r| format!("{}%", format_number(r.round())))
            ),
        ],
    );

    println!();
    println!("{}", style("INTEGRATIONS").bold());
    println!("{:-<64}", "");
    println!("  {}", tally_line(&summary.integration_status));

    if detailed {
        println!();
        println!("{}", style("PROJECTS").bold());
        println!("{:-<64}", "");
        for p in &summary.projects {
            let status = match p.status {
                ProjectStatus::OnTrack => style(p.status.to_string()).green(),
                ProjectStatus::AtRisk => style(p.status.to_string()).yellow(),
                ProjectStatus::Delayed => style(p.status.to_string()).red(),
                ProjectStatus::Unknown => style(p.status.to_string()).dim(),
            };
            println!(
                "  {:<10} {:<30} {:<10} {:>4}%",
                p.id,
                truncate_str(&p.name, 30),
                status,
                format_number(p.progress)
            );
        }
    }

    if !summary.unresolved_references.is_empty() {
        println!();
        println!(
            "{} {} unresolved project reference(s)",
            style("!").yellow().bold(),
            summary.unresolved_references.len()
        );
    }

    println!("{}", "═".repeat(width));
}

fn print_two_columns(title1: &str, lines1: &[String], title2: &str, lines2: &[String]) {
    let col_width = 32;

    println!("{:<col_width$} {}", style(title1).bold(), style(title2).bold());
    println!("{:-<col_width$} {:-<col_width$}", "", "");

    let max_lines = lines1.len().max(lines2.len());

    for i in 0..max_lines {
        let l1 = lines1.get(i).map(|s| s.as_str()).unwrap_or("");
        let l2 = lines2.get(i).map(|s| s.as_str()).unwrap_or("");
        println!("  {:<30} {}", l1, l2);
    }
}
