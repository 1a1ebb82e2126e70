//! Weekly progress report types (risks, issues and decisions)

use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_set, Level, Priority};

closed_set! {
    /// Lifecycle state of a risk
    pub enum RiskStatus ("risk status") {
        Open => ("open", "Open", "red"),
        Mitigated => ("mitigated", "Mitigated", "yellow"),
        Closed => ("closed", "Closed", "green"),
    }
}

closed_set! {
    /// Lifecycle state of an issue
    pub enum IssueStatus ("issue status") {
        Open => ("open", "Open", "red"),
        InProgress => ("in-progress", "In progress", "yellow"),
        Resolved => ("resolved", "Resolved", "green"),
    }
}

/// A project risk raised in a weekly report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskItem {
    pub id: String,

    pub description: String,

    /// Impact if the risk materializes
    #[serde(default)]
    pub impact: Level,

    /// Likelihood of the risk materializing
    #[serde(default)]
    pub probability: Level,

    /// Mitigation plan (free text)
    #[serde(default)]
    pub mitigation: String,

    #[serde(default)]
    pub status: RiskStatus,
}

/// An open problem raised in a weekly report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueItem {
    pub id: String,

    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    /// Person or team responsible
    #[serde(default)]
    pub assignee: String,

    /// Target resolution date (calendar date string)
    #[serde(default)]
    pub due_date: String,

    #[serde(default)]
    pub status: IssueStatus,

    /// Countermeasure being applied (free text)
    #[serde(default)]
    pub countermeasure: String,
}

impl IssueItem {
    /// Open or in progress
    pub fn is_open(&self) -> bool {
        !matches!(self.status, IssueStatus::Resolved)
    }
}

/// One alternative considered for a decision
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: String,

    pub label: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pros: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cons: Vec<String>,

    /// Risk of choosing this option
    #[serde(default)]
    pub risk: Level,
}

/// A decision recorded in a weekly report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionItem {
    pub id: String,

    pub question: String,

    /// Alternatives, in presentation order
    #[serde(default)]
    pub options: Vec<DecisionOption>,

    /// ID of the chosen option, if a choice has been made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,

    #[serde(default)]
    pub decision_date: String,

    /// Expected impact of the decision
    #[serde(default)]
    pub impact: String,

    /// Responsible party
    #[serde(default)]
    pub responsible: String,

    /// Rationale (free text)
    #[serde(default)]
    pub details: String,
}

impl DecisionItem {
    /// The chosen option, if `selected_option` names one of `options`
    ///
    /// A selection that does not resolve is treated as unset.
    pub fn selected(&self) -> Option<&DecisionOption> {
        let wanted = self.selected_option.as_deref()?;
        let found = self.options.iter().find(|o| o.id == wanted);
        if found.is_none() {
            tracing::warn!(
                decision = %self.id,
                option = wanted,
                "selected option does not match any option"
            );
        }
        found
    }
}

/// A project's report for one week
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyProgress {
    pub project_id: String,

    /// Last day of the reporting week
    #[serde(default)]
    pub week_ending: String,

    #[serde(default)]
    pub progress: f64,

    #[serde(default)]
    pub risks: Vec<RiskItem>,

    #[serde(default)]
    pub issues: Vec<IssueItem>,

    #[serde(default)]
    pub decisions: Vec<DecisionItem>,
}
