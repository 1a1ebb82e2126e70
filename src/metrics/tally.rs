//! Status tally: count/percentage breakdown of a collection by category
//!
//! Percentages are rounded half-up independently per bucket. Their sum may
//! differ from 100 (three equal buckets give 33 + 33 + 33); the remainder is
//! never redistributed.

use serde::Serialize;

use crate::core::entity::Category;

/// One non-empty category of a tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyBucket<C> {
    pub key: C,
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
    pub percentage: u32,
}

/// Breakdown of `total` items by category, in the category's display order
///
/// Categories with a zero count are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusTally<C> {
    pub total: usize,
    pub buckets: Vec<TallyBucket<C>>,
}

impl<C: Category> StatusTally<C> {
    /// Build from per-category counts given in `C::ALL` order
    fn from_counts(counts: &[usize]) -> Self {
        let total = counts.iter().sum();
        let buckets = C::ALL
            .iter()
            .zip(counts)
            .filter(|&(_, &count)| count > 0)
            .map(|(&key, &count)| {
                let descriptor = key.descriptor();
                TallyBucket {
                    key,
                    label: descriptor.label,
                    count,
                    color: descriptor.color,
                    percentage: percentage(count, total),
                }
            })
            .collect();

        Self { total, buckets }
    }

    /// Count for one category (zero when omitted)
    pub fn count(&self, key: C) -> usize {
        self.bucket(key).map_or(0, |b| b.count)
    }

    /// Rounded percentage for one category, `None` when omitted
    pub fn percentage(&self, key: C) -> Option<u32> {
        self.bucket(key).map(|b| b.percentage)
    }

    pub fn bucket(&self, key: C) -> Option<&TallyBucket<C>> {
        self.buckets.iter().find(|b| b.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// `round(count / total * 100)` with halves rounded up; zero for an empty total
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer form of floor(count * 100 / total + 0.5)
    ((count * 200 + total) / (2 * total)) as u32
}

/// Tally a sequence of category values
pub fn tally<C: Category>(values: impl IntoIterator<Item = C>) -> StatusTally<C> {
    let mut counts = vec![0usize; C::ALL.len()];
    for value in values {
        if let Some(idx) = C::ALL.iter().position(|c| *c == value) {
            counts[idx] += 1;
        }
    }
    StatusTally::from_counts(&counts)
}

/// Tally items by the category `key` extracts from each
pub fn tally_by<'a, T, C, I, F>(items: I, key: F) -> StatusTally<C>
where
    T: 'a + ?Sized,
    C: Category,
    I: IntoIterator<Item = &'a T>,
    F: Fn(&T) -> C,
{
    tally(items.into_iter().map(key))
}
