//! Coordination board: cross-project and team coordination items

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::dataset::Dataset;
use crate::core::entity::Level;
use crate::entities::{
    Coordination, CoordinationStatus, CrossProjectCoordination, Team, TeamCoordination,
};
use crate::metrics::due::{classify_due, DueCounts, DueStatus};
use crate::metrics::tally::{tally_by, StatusTally};

/// A project endpoint of a cross-project item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectRef {
    /// Display name, or the raw reference when unresolved
    pub label: String,
    pub resolved: bool,
}

impl ProjectRef {
    fn resolve(dataset: &Dataset, reference: &str) -> Self {
        let (label, resolved) = dataset.project_label(reference);
        Self {
            label: label.to_string(),
            resolved,
        }
    }
}

/// A cross-project item ready for display
#[derive(Debug, Clone, Serialize)]
pub struct CrossProjectEntry {
    pub id: String,
    pub from: ProjectRef,
    pub to: ProjectRef,
    pub topic: String,
    pub priority: Level,
    pub status: CoordinationStatus,
    pub due_date: String,
    pub due: DueStatus,
}

impl CrossProjectEntry {
    fn compute(item: &CrossProjectCoordination, dataset: &Dataset, today: NaiveDate) -> Self {
        Self {
            id: item.id.clone(),
            from: ProjectRef::resolve(dataset, &item.from_project),
            to: ProjectRef::resolve(dataset, &item.to_project),
            topic: item.topic.clone(),
            priority: item.priority,
            status: item.status,
            due_date: item.due_date.clone(),
            due: classify_due(&item.due_date, today),
        }
    }
}

/// A team item ready for display
#[derive(Debug, Clone, Serialize)]
pub struct TeamEntry {
    pub id: String,
    pub from_team: Team,
    pub to_team: Team,
    pub topic: String,
    pub priority: Level,
    pub status: CoordinationStatus,
    pub due_date: String,
    pub due: DueStatus,
}

/// Team items of one project
#[derive(Debug, Clone, Serialize)]
pub struct TeamGroup {
    pub project_id: String,
    pub project_name: String,
    pub resolved: bool,
    pub items: Vec<TeamEntry>,
    pub due: DueCounts,
}

/// Everything the coordination panels show
#[derive(Debug, Clone, Serialize)]
pub struct CoordinationBoard {
    pub cross_project: Vec<CrossProjectEntry>,
    pub cross_project_status: StatusTally<CoordinationStatus>,
    pub team_groups: Vec<TeamGroup>,
    pub team_status: StatusTally<CoordinationStatus>,
}

impl CoordinationBoard {
    pub fn compute(dataset: &Dataset, today: NaiveDate) -> Self {
        let cross_project = dataset
            .cross_project_coordinations
            .iter()
            .map(|item| CrossProjectEntry::compute(item, dataset, today))
            .collect();

        Self {
            cross_project,
            cross_project_status: tally_by(&dataset.cross_project_coordinations, |c| c.status),
            team_groups: group_by_project(dataset, today),
            team_status: tally_by(&dataset.team_coordinations, |c| c.status),
        }
    }

    /// Cross-project items not yet resolved
    pub fn open_cross_project(&self) -> usize {
        self.cross_project
            .iter()
            .filter(|c| c.status != CoordinationStatus::Resolved)
            .count()
    }
}

fn team_entry(item: &TeamCoordination, today: NaiveDate) -> TeamEntry {
    TeamEntry {
        id: item.id.clone(),
        from_team: item.from_team,
        to_team: item.to_team,
        topic: item.topic().to_string(),
        priority: item.priority(),
        status: item.status(),
        due_date: item.due_date().to_string(),
        due: classify_due(item.due_date(), today),
    }
}

/// Group team items by project in project order
///
/// Projects without items are omitted. Items whose project does not resolve
/// follow in first-seen order, labeled with their raw id.
pub fn group_by_project(dataset: &Dataset, today: NaiveDate) -> Vec<TeamGroup> {
    let mut keys: Vec<(&str, &str, bool)> = dataset
        .projects
        .iter()
        .map(|p| (p.id.as_str(), p.name.as_str(), true))
        .collect();
    for item in &dataset.team_coordinations {
        let reference = item.project_id.as_str();
        if !keys.iter().any(|(id, _, _)| *id == reference) {
            keys.push((reference, reference, false));
        }
    }

    keys.into_iter()
        .filter_map(|(id, name, resolved)| {
            let items: Vec<TeamEntry> = dataset
                .team_coordinations
                .iter()
                .filter(|c| c.project_id == id)
                .map(|c| team_entry(c, today))
                .collect();
            if items.is_empty() {
                return None;
            }
            Some(TeamGroup {
                project_id: id.to_string(),
                project_name: name.to_string(),
                resolved,
                due: DueCounts::from_statuses(items.iter().map(|i| i.due)),
                items,
            })
        })
        .collect()
}
