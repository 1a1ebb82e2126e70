//! Tool integration configuration for a project
//!
//! These are the only editable records in the system. Completeness is
//! always derived from the fields, never stored.

use serde::{Deserialize, Serialize};

use crate::core::entity::closed_set;

closed_set! {
    /// How much of an integration record has been filled in
    pub enum ConfigStatus ("configuration status") {
        Configured => ("configured", "Configured", "green"),
        Partial => ("partial", "Partially configured", "yellow"),
        NotConfigured => ("not-configured", "Not configured", "gray"),
    }
}

/// Folder locations inside the document store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FolderPaths {
    pub documents: String,
    pub reports: String,
    pub assets: String,
}

impl FolderPaths {
    /// At least one folder path is non-blank
    pub fn any(&self) -> bool {
        [&self.documents, &self.reports, &self.assets]
            .iter()
            .any(|p| !p.trim().is_empty())
    }
}

/// Integration settings of one project
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationConfig {
    /// Project id this record belongs to
    pub id: String,

    #[serde(default)]
    pub name: String,

    /// Cloud document store (SharePoint, Google Drive, ...)
    #[serde(default)]
    pub cloud_app: String,

    /// Document kinds to collect
    #[serde(default)]
    pub document_types: Vec<String>,

    /// Task tracker (JIRA, Backlog, ...)
    #[serde(default)]
    pub task_tool: String,

    /// Agent endpoint URL
    #[serde(default)]
    pub endpoint: String,

    #[serde(default)]
    pub folder_paths: FolderPaths,
}

impl IntegrationConfig {
    /// Presence of each of the five independent settings, in display order
    pub fn checklist(&self) -> [(&'static str, bool); 5] {
        [
            ("cloud app", !self.cloud_app.trim().is_empty()),
            ("document types", self.document_types.iter().any(|d| !d.trim().is_empty())),
            ("task tool", !self.task_tool.trim().is_empty()),
            ("endpoint", !self.endpoint.trim().is_empty()),
            ("folder paths", self.folder_paths.any()),
        ]
    }

    /// Configured iff all five settings are present, not configured iff none are
    pub fn status(&self) -> ConfigStatus {
        let present = self.checklist().iter().filter(|(_, set)| *set).count();
        match present {
            5 => ConfigStatus::Configured,
            0 => ConfigStatus::NotConfigured,
            _ => ConfigStatus::Partial,
        }
    }

    /// Names of the settings still missing
    pub fn missing(&self) -> Vec<&'static str> {
        self.checklist()
            .into_iter()
            .filter(|(_, set)| !set)
            .map(|(name, _)| name)
            .collect()
    }
}
