//! `pmo report` command - Generate dashboard reports

mod coordination;
mod kpi;
mod portfolio;
mod projects;
mod resources;
mod weekly;

use clap::Subcommand;
use miette::Result;

use crate::cli::GlobalOpts;

pub use coordination::CoordinationArgs;
pub use kpi::KpiArgs;
pub use portfolio::PortfolioArgs;
pub use projects::ProjectsArgs;
pub use resources::ResourcesArgs;
pub use weekly::WeeklyArgs;

#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Project list with status breakdown
    Projects(ProjectsArgs),

    /// Quality KPI achievement per project
    Kpi(KpiArgs),

    /// Cross-project and team coordination board
    #[clap(alias = "coord")]
    Coordination(CoordinationArgs),

    /// Weekly report digest (risks, issues, decisions)
    Weekly(WeeklyArgs),

    /// Portfolio investments with ROI classification
    #[clap(alias = "pfm")]
    Portfolio(PortfolioArgs),

    /// Resource matrix in person-months per phase
    Resources(ResourcesArgs),
}

pub fn run(cmd: ReportCommands, global: &GlobalOpts) -> Result<()> {
    match cmd {
        ReportCommands::Projects(args) => projects::run(args, global),
        ReportCommands::Kpi(args) => kpi::run(args, global),
        ReportCommands::Coordination(args) => coordination::run(args, global),
        ReportCommands::Weekly(args) => weekly::run(args, global),
        ReportCommands::Portfolio(args) => portfolio::run(args, global),
        ReportCommands::Resources(args) => resources::run(args, global),
    }
}
