//! Portfolio ROI classification and spend figures

use serde::Serialize;

use crate::entities::{InitiativeStatus, PortfolioProject};
use crate::metrics::tally::{tally_by, StatusTally};

/// Size band of an expected ROI, used to scale portfolio plot markers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoiBand {
    Minimal,
    Small,
    Medium,
    Large,
}

impl RoiBand {
    /// Every band with its inclusive lower bound, largest first
    const THRESHOLDS: [(f64, RoiBand); 3] = [
        (400.0, RoiBand::Large),
        (300.0, RoiBand::Medium),
        (200.0, RoiBand::Small),
    ];

    /// Marker size for the band
    pub fn size(&self) -> u32 {
        match self {
            RoiBand::Minimal => 12,
            RoiBand::Small => 14,
            RoiBand::Medium => 18,
            RoiBand::Large => 24,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RoiBand::Minimal => "minimal",
            RoiBand::Small => "small",
            RoiBand::Medium => "medium",
            RoiBand::Large => "large",
        }
    }
}

impl std::fmt::Display for RoiBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Band for an expected ROI percentage; lower bounds are inclusive
///
/// NaN compares false against every bound and lands in `Minimal`.
pub fn classify_roi(roi: f64) -> RoiBand {
    RoiBand::THRESHOLDS
        .iter()
        .find(|(bound, _)| roi >= *bound)
        .map(|(_, band)| *band)
        .unwrap_or(RoiBand::Minimal)
}

/// Spent share of the budget as a rounded percentage; `None` for a zero budget
pub fn spend_efficiency(actual_spent: f64, budget: f64) -> Option<i64> {
    if budget == 0.0 || !budget.is_finite() || !actual_spent.is_finite() {
        return None;
    }
    Some((actual_spent / budget * 100.0).round() as i64)
}

/// A portfolio investment with its derived figures
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioRow {
    pub id: String,
    pub name: String,
    pub phase: String,
    pub status: InitiativeStatus,
    pub risk_level: f64,
    pub innovation_index: f64,
    pub budget: f64,
    pub actual_spent: f64,
    pub expected_roi: f64,
    pub roi_band: RoiBand,
    pub marker_size: u32,
    /// `None` when the budget is zero
    pub spend_efficiency: Option<i64>,
}

impl From<&PortfolioProject> for PortfolioRow {
    fn from(project: &PortfolioProject) -> Self {
        let band = classify_roi(project.expected_roi);
        Self {
            id: project.id.clone(),
            name: project.name.clone(),
            phase: project.phase.clone(),
            status: project.status,
            risk_level: project.risk_level,
            innovation_index: project.innovation_index,
            budget: project.budget,
            actual_spent: project.actual_spent,
            expected_roi: project.expected_roi,
            roi_band: band,
            marker_size: band.size(),
            spend_efficiency: spend_efficiency(project.actual_spent, project.budget),
        }
    }
}

/// Portfolio-wide figures
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub rows: Vec<PortfolioRow>,
    pub total_budget: f64,
    pub total_spent: f64,
    /// Mean expected ROI, `None` for an empty portfolio
    pub average_roi: Option<f64>,
    pub status: StatusTally<InitiativeStatus>,
}

impl PortfolioSummary {
    pub fn compute(portfolio: &[PortfolioProject]) -> Self {
        let rows: Vec<PortfolioRow> = portfolio.iter().map(PortfolioRow::from).collect();
        let average_roi = if portfolio.is_empty() {
            None
        } else {
            Some(portfolio.iter().map(|p| p.expected_roi).sum::<f64>() / portfolio.len() as f64)
        };

        Self {
            total_budget: portfolio.iter().map(|p| p.budget).sum(),
            total_spent: portfolio.iter().map(|p| p.actual_spent).sum(),
            average_roi,
            status: tally_by(portfolio, |p| p.status),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investment(id: &str, budget: f64, spent: f64, roi: f64, status: &str) -> PortfolioProject {
        PortfolioProject {
            id: id.to_string(),
            name: id.to_uppercase(),
            risk_level: 20.0,
            innovation_index: 70.0,
            budget,
            actual_spent: spent,
            expected_roi: roi,
            phase: "Build".to_string(),
            status: InitiativeStatus::from(status),
            strategic_value: None,
            timeframe: None,
        }
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(classify_roi(199.0), RoiBand::Minimal);
        assert_eq!(classify_roi(200.0), RoiBand::Small);
        assert_eq!(classify_roi(299.0), RoiBand::Small);
        assert_eq!(classify_roi(300.0), RoiBand::Medium);
        assert_eq!(classify_roi(399.99), RoiBand::Medium);
        assert_eq!(classify_roi(400.0), RoiBand::Large);
        assert_eq!(classify_roi(1000.0), RoiBand::Large);
    }

    #[test]
    fn test_band_sizes() {
        assert_eq!(classify_roi(0.0).size(), 12);
        assert_eq!(classify_roi(250.0).size(), 14);
        assert_eq!(classify_roi(350.0).size(), 18);
        assert_eq!(classify_roi(440.0).size(), 24);
    }

    #[test]
    fn test_nan_and_negative_are_minimal() {
        assert_eq!(classify_roi(f64::NAN), RoiBand::Minimal);
        assert_eq!(classify_roi(-50.0), RoiBand::Minimal);
    }

    #[test]
    fn test_spend_efficiency() {
        assert_eq!(spend_efficiency(1020.0, 1200.0), Some(85));
        assert_eq!(spend_efficiency(315.0, 420.0), Some(75));
        assert_eq!(spend_efficiency(10.0, 0.0), None);
    }

    #[test]
    fn test_portfolio_summary() {
        let portfolio = vec![
            investment("a", 1200.0, 1020.0, 285.0, "on-track"),
            investment("b", 1200.0, 780.0, 440.0, "accelerating"),
            investment("c", 420.0, 315.0, 180.0, "attention-required"),
            investment("d", 0.0, 0.0, 220.0, "on-track"),
        ];
        let summary = PortfolioSummary::compute(&portfolio);

        assert_eq!(summary.rows.len(), 4);
        assert_eq!(summary.rows[1].roi_band, RoiBand::Large);
        assert_eq!(summary.rows[1].marker_size, 24);
        assert_eq!(summary.rows[3].spend_efficiency, None);
        assert_eq!(summary.total_budget, 2820.0);
        assert_eq!(summary.total_spent, 2115.0);
        assert_eq!(summary.average_roi, Some(281.25));
        assert_eq!(summary.status.count(InitiativeStatus::OnTrack), 2);
        assert_eq!(summary.status.percentage(InitiativeStatus::OnTrack), Some(50));
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = PortfolioSummary::compute(&[]);
        assert!(summary.rows.is_empty());
        assert_eq!(summary.average_roi, None);
        assert!(summary.status.is_empty());
    }
}
