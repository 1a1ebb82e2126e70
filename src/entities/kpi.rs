//! Quality KPI entity type

use serde::{Deserialize, Serialize};

/// The four tracked quality figures
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiValues {
    /// Defects per test case (lower is better)
    pub defect_rate: f64,

    /// Test coverage percentage
    pub test_coverage: f64,

    /// Static code quality score (0-10)
    pub code_quality: f64,

    /// Performance score
    pub performance_score: f64,
}

impl KpiValues {
    /// Value of one metric
    pub fn get(&self, metric: KpiMetric) -> f64 {
        match metric {
            KpiMetric::DefectDensity => self.defect_rate,
            KpiMetric::TestCoverage => self.test_coverage,
            KpiMetric::CodeQuality => self.code_quality,
            KpiMetric::Performance => self.performance_score,
        }
    }
}

/// Quality figures of one project against their targets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityKpi {
    pub project_id: String,

    /// Phase the figures were measured in
    #[serde(default)]
    pub phase: String,

    #[serde(default)]
    pub metrics: KpiValues,

    #[serde(default)]
    pub target: KpiValues,
}

/// The fixed set of evaluated quality metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiMetric {
    DefectDensity,
    TestCoverage,
    CodeQuality,
    Performance,
}

/// Static description of a metric
#[derive(Debug, Clone, Copy)]
pub struct MetricSpec {
    pub label: &'static str,
    pub unit: &'static str,
    /// Lower values are better
    pub reverse: bool,
}

impl KpiMetric {
    /// Evaluation order
    pub const ALL: [KpiMetric; 4] = [
        KpiMetric::DefectDensity,
        KpiMetric::TestCoverage,
        KpiMetric::CodeQuality,
        KpiMetric::Performance,
    ];

    pub fn spec(&self) -> MetricSpec {
        match self {
            KpiMetric::DefectDensity => MetricSpec {
                label: "Defect density",
                unit: "",
                reverse: true,
            },
            KpiMetric::TestCoverage => MetricSpec {
                label: "Test coverage",
                unit: "%",
                reverse: false,
            },
            KpiMetric::CodeQuality => MetricSpec {
                label: "Code quality",
                unit: "",
                reverse: false,
            },
            KpiMetric::Performance => MetricSpec {
                label: "Performance",
                unit: "",
                reverse: false,
            },
        }
    }
}

impl std::fmt::Display for KpiMetric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.spec().label)
    }
}
