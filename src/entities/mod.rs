//! Entity type definitions
//!
//! The dataset holds the following record types:
//!
//! **Delivery:**
//! - [`Project`] - Project with delivery status and progress
//! - [`WeeklyProgress`] - Weekly report with risks, issues and decisions
//! - [`QualityKpi`] - Quality figures against targets
//!
//! **Coordination:**
//! - [`CrossProjectCoordination`] - Agreements needed between projects
//! - [`TeamCoordination`] - Agreements needed between teams of one project
//!
//! **Portfolio:**
//! - [`PortfolioProject`] - Investment view with budget and expected ROI
//! - [`ResourcePlan`] - Person-months per delivery phase
//!
//! **Configuration:**
//! - [`IntegrationConfig`] - Editable tool integration settings

pub mod coordination;
pub mod integration;
pub mod kpi;
pub mod portfolio;
pub mod project;
pub mod weekly;

pub use coordination::{
    Coordination, CoordinationStatus, CrossProjectCoordination, Team, TeamCoordination,
};
pub use integration::{ConfigStatus, FolderPaths, IntegrationConfig};
pub use kpi::{KpiMetric, KpiValues, QualityKpi};
pub use portfolio::{InitiativeStatus, PortfolioProject, ResourceCell, ResourcePlan};
pub use project::{Project, ProjectStatus};
pub use weekly::{
    DecisionItem, DecisionOption, IssueItem, IssueStatus, RiskItem, RiskStatus, WeeklyProgress,
};
