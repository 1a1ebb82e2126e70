//! Resource matrix: person-months per phase

use serde::Serialize;

use crate::entities::{ResourceCell, ResourcePlan};

/// Delivery phases in display order
pub const PHASE_ORDER: [&str; 8] = [
    "Planning",
    "Requirements",
    "Design",
    "Development & Unit Test",
    "Integration Test",
    "System Test",
    "UAT",
    "Release & Hypercare",
];

/// One project's staffing laid out over `PHASE_ORDER`
#[derive(Debug, Clone, Serialize)]
pub struct ResourceRow {
    pub project: String,
    /// `None` where the plan has no entry for the phase
    pub cells: Vec<Option<ResourceCell>>,
    /// Phases present in the plan but not in `PHASE_ORDER`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unplaced: Vec<String>,
}

impl ResourceRow {
    fn from_plan(plan: &ResourcePlan) -> Self {
        let cells = PHASE_ORDER
            .iter()
            .map(|phase| plan.phase_resources.get(*phase).copied())
            .collect();
        let unplaced: Vec<String> = plan
            .phase_resources
            .keys()
            .filter(|k| !PHASE_ORDER.contains(&k.as_str()))
            .cloned()
            .collect();
        if !unplaced.is_empty() {
            tracing::warn!(project = %plan.project, phases = ?unplaced, "resource plan has unrecognized phases");
        }
        Self {
            project: plan.project.clone(),
            cells,
            unplaced,
        }
    }

    pub fn total(&self) -> ResourceCell {
        sum(self.cells.iter().flatten())
    }
}

/// Resource matrix with per-phase totals
#[derive(Debug, Clone, Serialize)]
pub struct ResourceMatrix {
    pub phases: Vec<&'static str>,
    pub rows: Vec<ResourceRow>,
    /// Per-phase sums across all plans, aligned with `phases`
    pub totals: Vec<ResourceCell>,
}

impl ResourceMatrix {
    pub fn compute(plans: &[ResourcePlan]) -> Self {
        let rows: Vec<ResourceRow> = plans.iter().map(ResourceRow::from_plan).collect();
        let totals = (0..PHASE_ORDER.len())
            .map(|i| sum(rows.iter().filter_map(|r| r.cells[i].as_ref())))
            .collect();
        Self {
            phases: PHASE_ORDER.to_vec(),
            rows,
            totals,
        }
    }

    pub fn grand_total(&self) -> ResourceCell {
        sum(self.totals.iter())
    }
}

fn sum<'a>(cells: impl Iterator<Item = &'a ResourceCell>) -> ResourceCell {
    cells.fold(ResourceCell::default(), |acc, c| ResourceCell {
        user: acc.user + c.user,
        vendor: acc.vendor + c.vendor,
    })
}

/// Render a person-month value; a missing cell shows as "-"
pub fn format_cell(value: Option<f64>) -> String {
    match value {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}
