//! Weekly report digest

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::dataset::Dataset;
use crate::core::entity::{Level, Priority};
use crate::entities::WeeklyProgress;
use crate::metrics::due::{classify_due, DueCounts, DueStatus};
use crate::metrics::tally::{tally_by, StatusTally};

/// A decision with its selection resolved
#[derive(Debug, Clone, Serialize)]
pub struct DecisionDigest {
    pub id: String,
    pub question: String,
    /// Label of the selected option; `None` when unset or unresolved
    pub selected: Option<String>,
    /// Risk of the selected option
    pub selected_risk: Option<Level>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_description: Option<String>,
    pub option_count: usize,
    /// Rationale recorded with the decision
    #[serde(skip_serializing_if = "String::is_empty")]
    pub details: String,
}

/// An open issue with its due classification
#[derive(Debug, Clone, Serialize)]
pub struct OpenIssue {
    pub id: String,
    pub description: String,
    pub priority: Priority,
    pub assignee: String,
    pub due: DueStatus,
}

/// Counts and highlights of one weekly report
#[derive(Debug, Clone, Serialize)]
pub struct WeeklyDigest {
    pub project_id: String,
    pub project_name: String,
    pub week_ending: String,
    pub progress: f64,
    pub risks_by_impact: StatusTally<Level>,
    pub issues_by_priority: StatusTally<Priority>,
    pub open_issues: Vec<OpenIssue>,
    pub issue_due: DueCounts,
    pub decisions: Vec<DecisionDigest>,
}

impl WeeklyDigest {
    pub fn compute(report: &WeeklyProgress, dataset: &Dataset, today: NaiveDate) -> Self {
        let (project_name, _) = dataset.project_label(&report.project_id);

        let open_issues: Vec<OpenIssue> = report
            .issues
            .iter()
            .filter(|i| i.is_open())
            .map(|i| OpenIssue {
                id: i.id.clone(),
                description: i.description.clone(),
                priority: i.priority,
                assignee: i.assignee.clone(),
                due: classify_due(&i.due_date, today),
            })
            .collect();

        let decisions = report
            .decisions
            .iter()
            .map(|d| {
                let selected = d.selected();
                DecisionDigest {
                    id: d.id.clone(),
                    question: d.question.clone(),
                    selected: selected.map(|o| o.label.clone()),
                    selected_risk: selected.map(|o| o.risk),
                    selected_description: selected
                        .map(|o| o.description.clone())
                        .filter(|text| !text.trim().is_empty()),
                    option_count: d.options.len(),
                    details: d.details.trim().to_string(),
                }
            })
            .collect();

        Self {
            project_id: report.project_id.clone(),
            project_name: project_name.to_string(),
            week_ending: report.week_ending.clone(),
            progress: report.progress,
            risks_by_impact: tally_by(&report.risks, |r| r.impact),
            issues_by_priority: tally_by(&report.issues, |i| i.priority),
            issue_due: DueCounts::from_statuses(open_issues.iter().map(|i| i.due)),
            open_issues,
            decisions,
        }
    }

    /// Decisions still waiting for a selection
    pub fn pending_decisions(&self) -> usize {
        self.decisions.iter().filter(|d| d.selected.is_none()).count()
    }
}

/// Digest of every weekly report, in dataset order
pub fn weekly_digests(dataset: &Dataset, today: NaiveDate) -> Vec<WeeklyDigest> {
    dataset
        .weekly_progress
        .iter()
        .map(|report| WeeklyDigest::compute(report, dataset, today))
        .collect()
}
