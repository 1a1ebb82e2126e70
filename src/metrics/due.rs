//! Days-until-due computation and urgency classification

use chrono::NaiveDate;
use serde::Serialize;

/// Items due within this many days (inclusive) are urgent
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// Urgency of a due date relative to a reference day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "days", rename_all = "kebab-case")]
pub enum DueStatus {
    /// Past due by this many days
    Overdue(i64),
    DueToday,
    /// Due in 1..=3 days
    Urgent(i64),
    /// Due in more than 3 days
    Remaining(i64),
    /// Due date missing or malformed
    Unknown,
}

impl DueStatus {
    pub fn classify(days: i64) -> Self {
        match days {
            d if d < 0 => DueStatus::Overdue(-d),
            0 => DueStatus::DueToday,
            d if d <= URGENT_WINDOW_DAYS => DueStatus::Urgent(d),
            d => DueStatus::Remaining(d),
        }
    }

    /// Signed days until due, `None` when unknown
    pub fn days(&self) -> Option<i64> {
        match *self {
            DueStatus::Overdue(n) => Some(-n),
            DueStatus::DueToday => Some(0),
            DueStatus::Urgent(n) | DueStatus::Remaining(n) => Some(n),
            DueStatus::Unknown => None,
        }
    }

    pub fn is_overdue(&self) -> bool {
        matches!(self, DueStatus::Overdue(_))
    }

    /// Due today or within the urgent window
    pub fn is_urgent(&self) -> bool {
        matches!(self, DueStatus::DueToday | DueStatus::Urgent(_))
    }

    /// Color token for the badge
    pub fn color(&self) -> &'static str {
        match self {
            DueStatus::Overdue(_) => "red",
            DueStatus::DueToday | DueStatus::Urgent(_) => "orange",
            DueStatus::Remaining(_) => "gray",
            DueStatus::Unknown => "gray",
        }
    }
}

impl std::fmt::Display for DueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DueStatus::Overdue(n) => write!(f, "overdue by {} day{}", n, plural(*n)),
            DueStatus::DueToday => write!(f, "due today"),
            DueStatus::Urgent(n) => write!(f, "urgent, {} day{} remaining", n, plural(*n)),
            DueStatus::Remaining(n) => write!(f, "{} days remaining", n),
            DueStatus::Unknown => write!(f, "N/A"),
        }
    }
}

fn plural(n: i64) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

/// Parse a calendar date string (`YYYY-MM-DD`, optionally followed by a time part)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Whole days from `today` to `due`
///
/// Both are calendar dates, so this equals `ceil((due - now) / 1 day)` for
/// any `now` within `today`.
pub fn days_until_due(due: NaiveDate, today: NaiveDate) -> i64 {
    (due - today).num_days()
}

/// Classify a raw due date string; unparseable input is `Unknown`
pub fn classify_due(raw: &str, today: NaiveDate) -> DueStatus {
    match parse_date(raw) {
        Some(due) => DueStatus::classify(days_until_due(due, today)),
        None => {
            if !raw.trim().is_empty() {
                tracing::warn!(value = raw, "unparseable due date");
            }
            DueStatus::Unknown
        }
    }
}

/// Urgent and overdue counters for a group of items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DueCounts {
    pub urgent: usize,
    pub overdue: usize,
}

impl DueCounts {
    pub fn from_statuses(statuses: impl IntoIterator<Item = DueStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut acc, status| {
            if status.is_urgent() {
                acc.urgent += 1;
            } else if status.is_overdue() {
                acc.overdue += 1;
            }
            acc
        })
    }
}
