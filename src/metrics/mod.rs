//! Metrics aggregation
//!
//! Pure functions deriving dashboard summaries from dataset collections.
//! Nothing here fails: degenerate input maps to an explicit fallback
//! (`Unknown`, `Undefined`, "N/A") instead of an error.

pub mod coordination;
pub mod dashboard;
pub mod due;
pub mod kpi;
pub mod resources;
pub mod roi;
pub mod tally;
pub mod weekly;

pub use coordination::CoordinationBoard;
pub use dashboard::{DashboardSummary, HeadlineStats};
pub use due::{classify_due, days_until_due, DueCounts, DueStatus, URGENT_WINDOW_DAYS};
pub use kpi::{achievement_ratio, evaluate, KpiEvaluation, KpiStatus, RatioError};
pub use resources::ResourceMatrix;
pub use roi::{classify_roi, spend_efficiency, PortfolioSummary, RoiBand};
pub use tally::{tally, tally_by, StatusTally, TallyBucket};
pub use weekly::WeeklyDigest;
