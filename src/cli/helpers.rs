//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use crate::core::entity::Category;
use crate::metrics::tally::StatusTally;

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Format a number without a trailing ".0" for whole values
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format an optional percentage, "N/A" when absent
pub fn format_percent(value: Option<i64>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| format!("{}%", v))
}

/// Table rows (label, count, percentage, color) for a status tally
pub fn tally_rows<C: Category>(tally: &StatusTally<C>) -> Vec<Vec<String>> {
    tally
        .buckets
        .iter()
        .map(|b| {
            vec![
                b.label.to_string(),
                b.count.to_string(),
                format!("{}%", b.percentage),
                b.color.to_string(),
            ]
        })
        .collect()
}

/// One-line form of a tally, e.g. "On track 3 (60%), Delayed 2 (40%)"
pub fn tally_line<C: Category>(tally: &StatusTally<C>) -> String {
    if tally.is_empty() {
        return "none".to_string();
    }
    tally
        .buckets
        .iter()
        .map(|b| format!("{} {} ({}%)", b.label, b.count, b.percentage))
        .collect::<Vec<_>>()
        .join(", ")
}
