//! Portfolio-level investment records and resource plans

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::core::entity::closed_set;

closed_set! {
    /// Strategic status of a portfolio investment
    pub enum InitiativeStatus ("initiative status") {
        OnTrack => ("on-track", "On track", "green"),
        Accelerating => ("accelerating", "Accelerating", "blue"),
        AttentionRequired => ("attention-required", "Attention required", "orange"),
    }
}

/// A project seen as a portfolio investment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioProject {
    pub id: String,

    pub name: String,

    /// Risk level in percent (scatter X axis)
    #[serde(default)]
    pub risk_level: f64,

    /// Innovation index (scatter Y axis)
    #[serde(default)]
    pub innovation_index: f64,

    /// Approved budget (M¥)
    #[serde(default)]
    pub budget: f64,

    /// Spent to date (M¥)
    #[serde(default)]
    pub actual_spent: f64,

    /// Expected return on investment in percent
    #[serde(default)]
    pub expected_roi: f64,

    #[serde(default)]
    pub phase: String,

    #[serde(default)]
    pub status: InitiativeStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategic_value: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeframe: Option<String>,
}

/// Staffing of one phase, in person-months
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceCell {
    /// Client-side staff
    pub user: f64,
    /// Vendor staff
    pub vendor: f64,
}

/// Planned staffing of a project across delivery phases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePlan {
    /// Project display name
    pub project: String,

    /// Phase name to staffing
    #[serde(default)]
    pub phase_resources: BTreeMap<String, ResourceCell>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_portfolio_project_deserialize() {
        let yaml = r#"
id: proj-003
name: AI data platform
risk_level: 35
innovation_index: 95
budget: 1200
actual_spent: 780
expected_roi: 440
phase: Design
status: attention-required
"#;
        let p: PortfolioProject = serde_yml::from_str(yaml).unwrap();
        assert_eq!(p.status, InitiativeStatus::AttentionRequired);
        assert_eq!(p.expected_roi, 440.0);
        assert!(p.timeframe.is_none());
    }

    #[test]
    fn test_resource_plan_deserialize() {
        let yaml = r#"
project: Core system renewal
phase_resources:
  Design:
    user: 2
    vendor: 6
  UAT:
    user: 3
"#;
        let plan: ResourcePlan = serde_yml::from_str(yaml).unwrap();
        assert_eq!(plan.phase_resources["Design"].vendor, 6.0);
        assert_eq!(plan.phase_resources["UAT"].vendor, 0.0);
    }
}
