//! Dashboard summary: every derived figure for one dataset and reference day

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::dataset::{DanglingReference, Dataset};
use crate::core::integrations::IntegrationStore;
use crate::entities::{ConfigStatus, CoordinationStatus, Project, ProjectStatus};
use crate::metrics::coordination::CoordinationBoard;
use crate::metrics::kpi::{kpi_rows, kpi_summary, KpiRow, KpiStatus};
use crate::metrics::resources::ResourceMatrix;
use crate::metrics::roi::PortfolioSummary;
use crate::metrics::tally::{tally_by, StatusTally};
use crate::metrics::weekly::{weekly_digests, WeeklyDigest};

/// Headline cards at the top of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadlineStats {
    /// Projects with progress below 100%
    pub active_projects: usize,
    /// Share of KPI evaluations that met their target, rounded
    pub kpi_achievement_rate: u32,
    /// Cross-project items not yet resolved
    pub open_cross_project: usize,
    pub team_coordinations: usize,
}

impl HeadlineStats {
    pub fn compute(dataset: &Dataset) -> Self {
        let kpis = kpi_summary(&dataset.quality_kpis);
        Self {
            active_projects: dataset.projects.iter().filter(|p| is_active(p)).count(),
            kpi_achievement_rate: kpis.percentage(KpiStatus::Success).unwrap_or(0),
            open_cross_project: dataset
                .cross_project_coordinations
                .iter()
                .filter(|c| c.status != CoordinationStatus::Resolved)
                .count(),
            team_coordinations: dataset.team_coordinations.len(),
        }
    }
}

fn is_active(project: &Project) -> bool {
    project.progress < 100.0
}

/// Integration record as listed on the dashboard
#[derive(Debug, Clone, Serialize)]
pub struct IntegrationRow {
    pub id: String,
    pub name: String,
    pub status: ConfigStatus,
    pub missing: Vec<&'static str>,
}

/// Every summary the dashboard shows, computed in one pass
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub today: NaiveDate,
    pub headline: HeadlineStats,
    pub projects: Vec<Project>,
    pub project_status: StatusTally<ProjectStatus>,
    pub kpi_rows: Vec<KpiRow>,
    pub kpi_summary: StatusTally<KpiStatus>,
    pub coordination: CoordinationBoard,
    pub weekly: Vec<WeeklyDigest>,
    pub portfolio: PortfolioSummary,
    pub resources: ResourceMatrix,
    pub integrations: Vec<IntegrationRow>,
    pub integration_status: StatusTally<ConfigStatus>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved_references: Vec<DanglingReference>,
}

impl DashboardSummary {
    pub fn compute(dataset: &Dataset, today: NaiveDate) -> Self {
        let store = IntegrationStore::from_records(dataset.integrations.iter().cloned());
        Self::compute_with_store(dataset, &store, today)
    }

    /// Same as [`DashboardSummary::compute`] but reading integration records
    /// from an existing store
    pub fn compute_with_store(dataset: &Dataset, store: &IntegrationStore, today: NaiveDate) -> Self {
        let integrations = store
            .iter()
            .map(|c| IntegrationRow {
                id: c.id.clone(),
                name: c.name.clone(),
                status: c.status(),
                missing: c.missing(),
            })
            .collect();

        Self {
            today,
            headline: HeadlineStats::compute(dataset),
            projects: dataset.projects.clone(),
            project_status: tally_by(&dataset.projects, |p| p.status),
            kpi_rows: kpi_rows(&dataset.quality_kpis, &dataset.projects),
            kpi_summary: kpi_summary(&dataset.quality_kpis),
            coordination: CoordinationBoard::compute(dataset, today),
            weekly: weekly_digests(dataset, today),
            portfolio: PortfolioSummary::compute(&dataset.portfolio),
            resources: ResourceMatrix::compute(&dataset.resource_plans),
            integrations,
            integration_status: store.status_tally(),
            unresolved_references: dataset.dangling_references(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 8, 6).unwrap()
    }

    #[test]
    fn test_summary_of_sample_dataset() {
        let dataset = Dataset::sample().unwrap();
        let summary = DashboardSummary::compute(&dataset, today());

        assert_eq!(summary.project_status.total, dataset.projects.len());
        assert_eq!(summary.kpi_rows.len(), dataset.quality_kpis.len());
        assert_eq!(summary.kpi_summary.total, dataset.quality_kpis.len() * 4);
        assert_eq!(summary.integrations.len(), summary.integration_status.total);
        assert!(summary.unresolved_references.is_empty());
    }

    #[test]
    fn test_summary_is_idempotent() {
        let dataset = Dataset::sample().unwrap();
        let first = serde_json::to_value(DashboardSummary::compute(&dataset, today())).unwrap();
        let second = serde_json::to_value(DashboardSummary::compute(&dataset, today())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_headline_on_empty_dataset() {
        let stats = HeadlineStats::compute(&Dataset::default());
        assert_eq!(
            stats,
            HeadlineStats {
                active_projects: 0,
                kpi_achievement_rate: 0,
                open_cross_project: 0,
                team_coordinations: 0,
            }
        );
    }

    #[test]
    fn test_headline_counts() {
        let dataset = Dataset::sample().unwrap();
        let stats = HeadlineStats::compute(&dataset);
        let open = dataset
            .cross_project_coordinations
            .iter()
            .filter(|c| c.status != CoordinationStatus::Resolved)
            .count();
        assert_eq!(stats.open_cross_project, open);
        assert_eq!(stats.team_coordinations, dataset.team_coordinations.len());
        assert!(stats.kpi_achievement_rate <= 100);
    }

    #[test]
    fn test_edited_store_changes_integration_status() {
        let dataset = Dataset::sample().unwrap();
        let mut store = IntegrationStore::from_records(dataset.integrations.iter().cloned());
        let first = store.iter().next().unwrap().clone();
        store.replace(crate::entities::IntegrationConfig {
            id: first.id.clone(),
            ..Default::default()
        });

        let summary = DashboardSummary::compute_with_store(&dataset, &store, today());
        let row = summary.integrations.iter().find(|r| r.id == first.id).unwrap();
        assert_eq!(row.status, ConfigStatus::NotConfigured);
        assert_eq!(row.missing.len(), 5);
    }
}
