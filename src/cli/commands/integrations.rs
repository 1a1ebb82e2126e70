//! `pmo integrations` command - Integration configuration records

use clap::Subcommand;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::path::PathBuf;

use crate::cli::helpers::{tally_rows, truncate_str};
use crate::cli::output::{render, write_output};
use crate::cli::{Context, GlobalOpts};
use crate::core::IntegrationStore;
use crate::document::{self, DocumentFormat};
use crate::entities::{ConfigStatus, IntegrationConfig};
use crate::metrics::dashboard::IntegrationRow;
use crate::metrics::tally::StatusTally;

#[derive(Subcommand, Debug)]
pub enum IntegrationCommands {
    /// List integration records with their completeness
    List,

    /// Check an edited integration record (YAML or JSON) against the dataset
    Check(CheckArgs),
}

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Integration record file
    pub file: PathBuf,
}

#[derive(Serialize)]
struct IntegrationList {
    integrations: Vec<IntegrationRow>,
    status: StatusTally<ConfigStatus>,
}

#[derive(Serialize)]
struct CheckResult {
    id: String,
    known_project: bool,
    status: ConfigStatus,
    previous_status: Option<ConfigStatus>,
    checklist: Vec<CheckItem>,
    /// Portfolio-wide completeness with the edited record applied
    overall: StatusTally<ConfigStatus>,
}

#[derive(Serialize)]
struct CheckItem {
    setting: &'static str,
    present: bool,
}

pub fn run(cmd: IntegrationCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        IntegrationCommands::List => run_list(global),
        IntegrationCommands::Check(args) => run_check(args, global),
    }
}

fn run_list(global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;
    let store = IntegrationStore::from_records(ctx.dataset.integrations.iter().cloned());

    let list = IntegrationList {
        integrations: store
            .iter()
            .map(|c| IntegrationRow {
                id: c.id.clone(),
                name: c.name.clone(),
                status: c.status(),
                missing: c.missing(),
            })
            .collect(),
        status: store.status_tally(),
    };

    let content = render(&list, ctx.format, |w| {
        w.title("Integration Configuration");
        let rows: Vec<Vec<String>> = list
            .integrations
            .iter()
            .map(|r| {
                vec![
                    r.id.clone(),
                    truncate_str(&r.name, 32),
                    r.status.to_string(),
                    if r.missing.is_empty() {
                        "-".to_string()
                    } else {
                        r.missing.join(", ")
                    },
                ]
            })
            .collect();
        w.table(&["ID", "Name", "Status", "Missing"], &rows);

        w.heading("Status Breakdown");
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&list.status));
    })?;

    write_output(&content, None, ctx.quiet)
}

fn run_check(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let ctx = Context::load(global)?;

    let source = std::fs::read_to_string(&args.file)
        .into_diagnostic()
        .map_err(|e| e.wrap_err(format!("Failed to read {}", args.file.display())))?;
    let record: IntegrationConfig = document::parse_str(
        &source,
        &args.file.display().to_string(),
        DocumentFormat::from_path(&args.file),
    )?;

    let known_project = ctx.dataset.find_project(&record.id).is_some();
    if !known_project {
        tracing::warn!(project = %record.id, "integration record for unknown project");
    }

    let mut store = IntegrationStore::from_records(ctx.dataset.integrations.iter().cloned());
    let checklist = record
        .checklist()
        .into_iter()
        .map(|(setting, present)| CheckItem { setting, present })
        .collect();
    let status = record.status();
    let id = record.id.clone();
    let previous_status = store.replace(record).map(|previous| previous.status());

    let result = CheckResult {
        id,
        known_project,
        status,
        previous_status,
        checklist,
        overall: store.status_tally(),
    };

    let content = render(&result, ctx.format, |w| {
        w.title(&format!("Integration Check: {}", result.id));
        if !result.known_project {
            w.line("Warning: no project with this id in the dataset");
        }
        let transition = match result.previous_status {
            Some(previous) if previous != result.status => {
                format!("{} (was {})", result.status, previous)
            }
            Some(_) => format!("{} (unchanged)", result.status),
            None => format!("{} (new record)", result.status),
        };
        w.line(&format!("Status: {}", transition));
        w.line("");

        let rows: Vec<Vec<String>> = result
            .checklist
            .iter()
            .map(|c| {
                vec![
                    c.setting.to_string(),
                    if c.present { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        w.table(&["Setting", "Present"], &rows);

        w.heading("All Integrations");
        w.table(&["Status", "Count", "%", "Color"], &tally_rows(&result.overall));
    })?;

    write_output(&content, None, ctx.quiet)
}
