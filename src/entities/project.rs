//! Project entity type

use serde::{Deserialize, Serialize};

use crate::core::entity::closed_set;

closed_set! {
    /// Delivery status of a project
    pub enum ProjectStatus ("project status") {
        OnTrack => ("on-track", "On track", "#10b981"),
        AtRisk => ("at-risk", "At risk", "#f59e0b"),
        Delayed => ("delayed", "Delayed", "#ef4444"),
    }
}

/// A project tracked by the PMO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (e.g. "proj-001")
    pub id: String,

    /// Display name
    pub name: String,

    /// Current delivery status
    #[serde(default)]
    pub status: ProjectStatus,

    /// Progress percentage. Not clamped: upstream data may exceed 100.
    #[serde(default)]
    pub progress: f64,

    /// Current phase label
    #[serde(default)]
    pub phase: String,

    /// Owning project manager
    #[serde(default)]
    pub manager: String,
}

impl Project {
    /// Name with the trailing "PJ" marker removed, as used in compact KPI rows
    pub fn short_name(&self) -> &str {
        let trimmed = self.name.trim_end();
        trimmed
            .strip_suffix("PJ")
            .map(str::trim_end)
            .unwrap_or(trimmed)
    }
}
