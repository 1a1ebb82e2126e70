//! Coordination items between projects and between teams

use serde::{Deserialize, Serialize};

use crate::core::entity::{closed_set, Level};

closed_set! {
    /// Progress of a coordination item
    pub enum CoordinationStatus ("coordination status") {
        Pending => ("pending", "Pending", "red"),
        InDiscussion => ("in-discussion", "In discussion", "yellow"),
        Resolved => ("resolved", "Resolved", "green"),
    }
}

closed_set! {
    /// Delivery team inside a project
    pub enum Team ("team") {
        App => ("app", "Application", "blue"),
        Infra => ("infra", "Infrastructure", "green"),
        Common => ("common", "Common platform", "purple"),
        Maintenance => ("maintenance", "Operations", "orange"),
    }
}

/// Fields shared by every coordination item
pub trait Coordination {
    fn topic(&self) -> &str;
    fn priority(&self) -> Level;
    fn status(&self) -> CoordinationStatus;
    fn due_date(&self) -> &str;

    /// Pending or under discussion
    fn is_open(&self) -> bool {
        self.status() != CoordinationStatus::Resolved
    }
}

/// An agreement needed between two projects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrossProjectCoordination {
    pub id: String,

    /// Requesting project (id or display name)
    pub from_project: String,

    /// Counterpart project (id or display name)
    pub to_project: String,

    pub topic: String,

    #[serde(default)]
    pub priority: Level,

    #[serde(default)]
    pub status: CoordinationStatus,

    /// Calendar date string
    #[serde(default)]
    pub due_date: String,

    #[serde(default)]
    pub description: String,
}

/// An agreement needed between two teams of the same project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamCoordination {
    pub id: String,

    pub project_id: String,

    #[serde(default)]
    pub from_team: Team,

    #[serde(default)]
    pub to_team: Team,

    pub topic: String,

    #[serde(default)]
    pub priority: Level,

    #[serde(default)]
    pub status: CoordinationStatus,

    /// Calendar date string
    #[serde(default)]
    pub due_date: String,

    #[serde(default)]
    pub description: String,
}

impl Coordination for CrossProjectCoordination {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn priority(&self) -> Level {
        self.priority
    }

    fn status(&self) -> CoordinationStatus {
        self.status
    }

    fn due_date(&self) -> &str {
        &self.due_date
    }
}

impl Coordination for TeamCoordination {
    fn topic(&self) -> &str {
        &self.topic
    }

    fn priority(&self) -> Level {
        self.priority
    }

    fn status(&self) -> CoordinationStatus {
        self.status
    }

    fn due_date(&self) -> &str {
        &self.due_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_coordination_deserialize() {
        let yaml = r#"
id: team-001
project_id: proj-001
from_team: app
to_team: infra
topic: Production capacity
priority: high
status: in-discussion
due_date: "2025-08-06"
"#;
        let item: TeamCoordination = serde_yml::from_str(yaml).unwrap();
        assert_eq!(item.from_team, Team::App);
        assert_eq!(item.to_team, Team::Infra);
        assert!(item.is_open());
    }

    #[test]
    fn test_unknown_team_falls_back() {
        assert_eq!(Team::from("security"), Team::Unknown);
    }

    #[test]
    fn test_resolved_is_not_open() {
        let item = CrossProjectCoordination {
            id: "coord-003".into(),
            from_project: "proj-003".into(),
            to_project: "proj-004".into(),
            topic: "Encryption".into(),
            priority: Level::High,
            status: CoordinationStatus::Resolved,
            due_date: "2025-08-02".into(),
            description: String::new(),
        };
        assert!(!item.is_open());
    }
}
