//! Quality KPI evaluation
//!
//! Each metric is scored by its achievement ratio against the target:
//! `actual / target`, or `target / actual` for lower-is-better metrics.

use serde::Serialize;
use thiserror::Error;

use crate::core::entity::{Category, Descriptor};
use crate::entities::{KpiMetric, Project, QualityKpi};
use crate::metrics::tally::{tally, StatusTally};

/// Ratio at or above which a metric is achieved
pub const SUCCESS_RATIO: f64 = 1.0;

/// Ratio at or above which a missed metric is only a warning
pub const WARNING_RATIO: f64 = 0.9;

/// Achieved metrics needed for an overall success
const OVERALL_SUCCESS_MIN: usize = 3;

/// Achieved metrics needed for an overall warning
const OVERALL_WARNING_MIN: usize = 2;

/// Outcome of a KPI evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum KpiStatus {
    Success,
    Warning,
    Danger,
    /// Ratio could not be computed
    Undefined,
}

impl Category for KpiStatus {
    const ALL: &'static [Self] = &[
        KpiStatus::Success,
        KpiStatus::Warning,
        KpiStatus::Danger,
        KpiStatus::Undefined,
    ];

    fn key(&self) -> &'static str {
        match self {
            KpiStatus::Success => "success",
            KpiStatus::Warning => "warning",
            KpiStatus::Danger => "danger",
            KpiStatus::Undefined => "undefined",
        }
    }

    fn descriptor(&self) -> Descriptor {
        match self {
            KpiStatus::Success => Descriptor::new("Achieved", "#10b981"),
            KpiStatus::Warning => Descriptor::new("Warning", "#f59e0b"),
            KpiStatus::Danger => Descriptor::new("Missed", "#ef4444"),
            KpiStatus::Undefined => Descriptor::FALLBACK,
        }
    }
}

impl std::fmt::Display for KpiStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Direction indicator next to a metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

/// Why an achievement ratio is undefined
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RatioError {
    #[error("target is zero")]
    ZeroTarget,

    #[error("actual value is zero for a lower-is-better metric")]
    ZeroActual,

    #[error("invalid input (actual={actual}, target={target}): values must be finite and non-negative")]
    InvalidInput { actual: f64, target: f64 },
}

/// Achievement ratio of `actual` against `target`
///
/// With `reverse` set, lower is better and the ratio is `target / actual`.
/// Values above the target are not clamped.
pub fn achievement_ratio(actual: f64, target: f64, reverse: bool) -> Result<f64, RatioError> {
    let valid = |v: f64| v.is_finite() && v >= 0.0;
    if !valid(actual) || !valid(target) {
        return Err(RatioError::InvalidInput { actual, target });
    }
    if target == 0.0 {
        return Err(RatioError::ZeroTarget);
    }
    if reverse {
        if actual == 0.0 {
            return Err(RatioError::ZeroActual);
        }
        Ok(target / actual)
    } else {
        Ok(actual / target)
    }
}

/// Status for a computed ratio
pub fn classify_ratio(ratio: f64) -> KpiStatus {
    if ratio >= SUCCESS_RATIO {
        KpiStatus::Success
    } else if ratio >= WARNING_RATIO {
        KpiStatus::Warning
    } else {
        KpiStatus::Danger
    }
}

/// One metric scored against its target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct KpiEvaluation {
    pub metric: KpiMetric,
    pub actual: f64,
    pub target: f64,
    /// `None` when the ratio is undefined
    pub ratio: Option<f64>,
    pub status: KpiStatus,
    /// Progress bar fill, capped at 100
    pub bar_percent: f64,
    pub trend: Option<Trend>,
}

/// Score one value against its target
///
/// Never fails: an undefined ratio yields `KpiStatus::Undefined` with an
/// empty bar.
pub fn evaluate(metric: KpiMetric, actual: f64, target: f64) -> KpiEvaluation {
    let reverse = metric.spec().reverse;
    match achievement_ratio(actual, target, reverse) {
        Ok(ratio) => KpiEvaluation {
            metric,
            actual,
            target,
            ratio: Some(ratio),
            status: classify_ratio(ratio),
            bar_percent: (ratio * 100.0).min(100.0),
            trend: Some(if ratio >= SUCCESS_RATIO { Trend::Up } else { Trend::Down }),
        },
        Err(err) => {
            tracing::debug!(%metric, actual, target, error = %err, "KPI ratio undefined");
            KpiEvaluation {
                metric,
                actual,
                target,
                ratio: None,
                status: KpiStatus::Undefined,
                bar_percent: 0.0,
                trend: None,
            }
        }
    }
}

/// Evaluate the four fixed metrics of a KPI record, in `KpiMetric::ALL` order
pub fn evaluate_all(kpi: &QualityKpi) -> [KpiEvaluation; 4] {
    KpiMetric::ALL.map(|metric| evaluate(metric, kpi.metrics.get(metric), kpi.target.get(metric)))
}

/// Overall status from the number of achieved metrics
pub fn overall_score(evaluations: &[KpiEvaluation]) -> (usize, KpiStatus) {
    let achieved = evaluations
        .iter()
        .filter(|e| e.status == KpiStatus::Success)
        .count();
    let status = if achieved >= OVERALL_SUCCESS_MIN {
        KpiStatus::Success
    } else if achieved >= OVERALL_WARNING_MIN {
        KpiStatus::Warning
    } else {
        KpiStatus::Danger
    };
    (achieved, status)
}

/// A KPI record joined with its project
#[derive(Debug, Clone, Serialize)]
pub struct KpiRow {
    pub project_id: String,
    /// Short project name, or the raw id when the project is unknown
    pub project_name: String,
    pub resolved: bool,
    /// Project manager, "N/A" when the project is unknown
    pub manager: String,
    pub phase: String,
    pub evaluations: [KpiEvaluation; 4],
    pub achieved: usize,
    pub overall: KpiStatus,
}

/// Build one row per KPI record, in input order
pub fn kpi_rows(kpis: &[QualityKpi], projects: &[Project]) -> Vec<KpiRow> {
    kpis.iter()
        .map(|kpi| {
            let project = projects.iter().find(|p| p.id == kpi.project_id);
            let evaluations = evaluate_all(kpi);
            let (achieved, overall) = overall_score(&evaluations);
            KpiRow {
                project_id: kpi.project_id.clone(),
                project_name: project
                    .map(|p| p.short_name().to_string())
                    .unwrap_or_else(|| kpi.project_id.clone()),
                resolved: project.is_some(),
                manager: project
                    .map(|p| p.manager.clone())
                    .unwrap_or_else(|| "N/A".to_string()),
                phase: kpi.phase.clone(),
                evaluations,
                achieved,
                overall,
            }
        })
        .collect()
}

/// Status tally over every metric of every KPI record
pub fn kpi_summary(kpis: &[QualityKpi]) -> StatusTally<KpiStatus> {
    tally(kpis.iter().flat_map(|kpi| evaluate_all(kpi).map(|e| e.status)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{KpiValues, ProjectStatus};

    fn values(defect: f64, coverage: f64, quality: f64, perf: f64) -> KpiValues {
        KpiValues {
            defect_rate: defect,
            test_coverage: coverage,
            code_quality: quality,
            performance_score: perf,
        }
    }

    fn kpi(project_id: &str, metrics: KpiValues) -> QualityKpi {
        QualityKpi {
            project_id: project_id.to_string(),
            phase: "Testing".to_string(),
            metrics,
            target: values(0.5, 80.0, 8.0, 85.0),
        }
    }

    #[test]
    fn test_higher_is_better_thresholds() {
        let target = 80.0;
        assert_eq!(evaluate(KpiMetric::TestCoverage, target, target).status, KpiStatus::Success);
        assert_eq!(
            evaluate(KpiMetric::TestCoverage, 0.95 * target, target).status,
            KpiStatus::Warning
        );
        assert_eq!(
            evaluate(KpiMetric::TestCoverage, 0.5 * target, target).status,
            KpiStatus::Danger
        );
    }

    #[test]
    fn test_lower_is_better_thresholds() {
        let target = 0.5;
        assert_eq!(evaluate(KpiMetric::DefectDensity, target, target).status, KpiStatus::Success);
        assert_eq!(
            evaluate(KpiMetric::DefectDensity, target / 0.95, target).status,
            KpiStatus::Warning
        );
        assert_eq!(evaluate(KpiMetric::DefectDensity, 1.0, target).status, KpiStatus::Danger);
        assert_eq!(evaluate(KpiMetric::DefectDensity, 0.25, target).status, KpiStatus::Success);
    }

    #[test]
    fn test_bar_is_capped_but_ratio_is_not() {
        let eval = evaluate(KpiMetric::CodeQuality, 12.0, 8.0);
        assert_eq!(eval.ratio, Some(1.5));
        assert_eq!(eval.bar_percent, 100.0);
        assert_eq!(eval.trend, Some(Trend::Up));

        let eval = evaluate(KpiMetric::CodeQuality, 4.0, 8.0);
        assert_eq!(eval.bar_percent, 50.0);
        assert_eq!(eval.trend, Some(Trend::Down));
    }

    #[test]
    fn test_zero_target_is_undefined() {
        assert_eq!(achievement_ratio(5.0, 0.0, false), Err(RatioError::ZeroTarget));
        let eval = evaluate(KpiMetric::Performance, 5.0, 0.0);
        assert_eq!(eval.status, KpiStatus::Undefined);
        assert_eq!(eval.ratio, None);
        assert_eq!(eval.bar_percent, 0.0);
        assert_eq!(eval.trend, None);
    }

    #[test]
    fn test_zero_actual_on_reverse_metric_is_undefined() {
        assert_eq!(achievement_ratio(0.0, 0.5, true), Err(RatioError::ZeroActual));
        assert_eq!(evaluate(KpiMetric::DefectDensity, 0.0, 0.5).status, KpiStatus::Undefined);
    }

    #[test]
    fn test_invalid_inputs_are_undefined() {
        assert!(matches!(
            achievement_ratio(f64::NAN, 1.0, false),
            Err(RatioError::InvalidInput { .. })
        ));
        assert!(matches!(
            achievement_ratio(1.0, f64::INFINITY, false),
            Err(RatioError::InvalidInput { .. })
        ));
        assert!(matches!(
            achievement_ratio(-1.0, 1.0, false),
            Err(RatioError::InvalidInput { .. })
        ));
    }

    #[test]
    fn test_zero_actual_on_forward_metric_is_danger() {
        let eval = evaluate(KpiMetric::TestCoverage, 0.0, 80.0);
        assert_eq!(eval.ratio, Some(0.0));
        assert_eq!(eval.status, KpiStatus::Danger);
    }

    #[test]
    fn test_overall_score_thresholds() {
        let all_met = evaluate_all(&kpi("p", values(0.4, 90.0, 9.0, 90.0)));
        assert_eq!(overall_score(&all_met), (4, KpiStatus::Success));

        let two_met = evaluate_all(&kpi("p", values(0.4, 90.0, 2.0, 10.0)));
        assert_eq!(overall_score(&two_met), (2, KpiStatus::Warning));

        let one_met = evaluate_all(&kpi("p", values(2.0, 90.0, 2.0, 10.0)));
        assert_eq!(overall_score(&one_met), (1, KpiStatus::Danger));
    }

    #[test]
    fn test_rows_resolve_project_or_fall_back() {
        let projects = vec![Project {
            id: "proj-001".to_string(),
            name: "Core System PJ".to_string(),
            status: ProjectStatus::OnTrack,
            progress: 50.0,
            phase: "Testing".to_string(),
            manager: "Sato".to_string(),
        }];
        let kpis = vec![
            kpi("proj-001", values(0.5, 80.0, 8.0, 85.0)),
            kpi("proj-404", values(0.5, 80.0, 8.0, 85.0)),
        ];
        let rows = kpi_rows(&kpis, &projects);

        assert_eq!(rows[0].project_name, "Core System");
        assert_eq!(rows[0].manager, "Sato");
        assert!(rows[0].resolved);
        assert_eq!(rows[1].project_name, "proj-404");
        assert_eq!(rows[1].manager, "N/A");
        assert!(!rows[1].resolved);
        assert_eq!(rows[1].overall, KpiStatus::Success);
    }

    #[test]
    fn test_summary_counts_every_metric() {
        let kpis = vec![
            kpi("a", values(0.5, 80.0, 8.0, 85.0)),
            kpi("b", values(1.0, 76.0, 8.0, 0.0)),
        ];
        let summary = kpi_summary(&kpis);
        assert_eq!(summary.total, 8);
        assert_eq!(summary.count(KpiStatus::Success), 5);
        assert_eq!(summary.count(KpiStatus::Warning), 1);
        assert_eq!(summary.count(KpiStatus::Danger), 2);
        assert_eq!(summary.percentage(KpiStatus::Success), Some(63));
        assert_eq!(kpi_summary(&kpis), summary);
    }

    #[test]
    fn test_undefined_is_tallied_as_neutral_bucket() {
        let mut record = kpi("a", values(0.5, 80.0, 8.0, 85.0));
        record.target.performance_score = 0.0;
        let summary = kpi_summary(&[record]);
        assert_eq!(summary.count(KpiStatus::Undefined), 1);
        assert_eq!(summary.buckets.last().unwrap().label, "N/A");
    }
}
