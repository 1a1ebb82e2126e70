//! Static dataset provider
//!
//! A dataset is a single YAML or JSON document holding every collection the
//! dashboard derives its summaries from. It is loaded once and never mutated.
//! A sample dataset is embedded in the binary for use when no file is given.

use miette::Diagnostic;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::document::{self, DocumentFormat, SyntaxError};
use crate::entities::{
    CrossProjectCoordination, IntegrationConfig, PortfolioProject, Project, QualityKpi,
    ResourcePlan, TeamCoordination, WeeklyProgress,
};

#[derive(Embed)]
#[folder = "data/"]
struct EmbeddedData;

/// Name of the embedded sample dataset
pub const SAMPLE_DATASET: &str = "sample.yaml";

/// Errors raised while loading a dataset
#[derive(Debug, Error, Diagnostic)]
pub enum DatasetError {
    #[error("Failed to read dataset '{path}': {source}")]
    #[diagnostic(code(pmo::dataset::io), help("Check the --dataset path or the PMO_DATASET variable"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("Embedded dataset not found: {0}")]
    #[diagnostic(code(pmo::dataset::embedded))]
    MissingEmbedded(String),

    #[error("Embedded dataset is not valid UTF-8: {0}")]
    #[diagnostic(code(pmo::dataset::encoding))]
    InvalidEncoding(String),
}

/// Every collection of the PMO dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub weekly_progress: Vec<WeeklyProgress>,
    pub quality_kpis: Vec<QualityKpi>,
    pub cross_project_coordinations: Vec<CrossProjectCoordination>,
    pub team_coordinations: Vec<TeamCoordination>,
    pub portfolio: Vec<PortfolioProject>,
    pub resource_plans: Vec<ResourcePlan>,
    pub integrations: Vec<IntegrationConfig>,
}

/// A reference that does not resolve to a record of the target collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DanglingReference {
    /// Collection holding the reference (e.g. "quality_kpis")
    pub source: &'static str,
    /// ID of the record holding the reference, or its 1-based position
    pub record: String,
    /// The unresolved reference value
    pub reference: String,
}

impl Dataset {
    /// Load a dataset document from disk; the format follows the file extension
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let source = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::parse(&source, &path.display().to_string(), DocumentFormat::from_path(path))?;
        tracing::debug!(
            path = %path.display(),
            projects = dataset.projects.len(),
            kpis = dataset.quality_kpis.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Parse a dataset document from a string
    pub fn parse(source: &str, name: &str, format: DocumentFormat) -> Result<Self, DatasetError> {
        Ok(document::parse_str(source, name, format)?)
    }

    /// The sample dataset compiled into the binary
    pub fn sample() -> Result<Self, DatasetError> {
        let file = EmbeddedData::get(SAMPLE_DATASET)
            .ok_or_else(|| DatasetError::MissingEmbedded(SAMPLE_DATASET.to_string()))?;
        let source = std::str::from_utf8(&file.data)
            .map_err(|_| DatasetError::InvalidEncoding(SAMPLE_DATASET.to_string()))?;
        Self::parse(source, SAMPLE_DATASET, DocumentFormat::Yaml)
    }

    /// Load from `path` when given, otherwise use the embedded sample
    pub fn load_or_sample(path: Option<&Path>) -> Result<Self, DatasetError> {
        match path {
            Some(path) => Self::load(path),
            None => {
                tracing::debug!("no dataset given, using embedded sample");
                Self::sample()
            }
        }
    }

    /// Find a project by ID, falling back to an exact display-name match
    ///
    /// Coordination items refer to projects by either form.
    pub fn find_project(&self, reference: &str) -> Option<&Project> {
        self.projects
            .iter()
            .find(|p| p.id == reference)
            .or_else(|| self.projects.iter().find(|p| p.name == reference))
    }

    /// Display label for a project reference; unresolved references show as-is
    pub fn project_label<'a>(&'a self, reference: &'a str) -> (&'a str, bool) {
        match self.find_project(reference) {
            Some(project) => (project.name.as_str(), true),
            None => (reference, false),
        }
    }

    /// Every project reference that does not resolve
    pub fn dangling_references(&self) -> Vec<DanglingReference> {
        let mut dangling = Vec::new();
        let mut check = |source: &'static str, record: &str, reference: &str| {
            if self.find_project(reference).is_none() {
                dangling.push(DanglingReference {
                    source,
                    record: record.to_string(),
                    reference: reference.to_string(),
                });
            }
        };

        // Weekly reports and KPI records have no ID of their own
        for (i, weekly) in self.weekly_progress.iter().enumerate() {
            check("weekly_progress", &format!("#{}", i + 1), &weekly.project_id);
        }
        for (i, kpi) in self.quality_kpis.iter().enumerate() {
            check("quality_kpis", &format!("#{}", i + 1), &kpi.project_id);
        }
        for coord in &self.cross_project_coordinations {
            check("cross_project_coordinations", &coord.id, &coord.from_project);
            check("cross_project_coordinations", &coord.id, &coord.to_project);
        }
        for coord in &self.team_coordinations {
            check("team_coordinations", &coord.id, &coord.project_id);
        }

        dangling
    }
}
