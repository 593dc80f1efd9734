//! Status counts, sums and percentages over record collections.
//!
//! Every function recomputes from the slice it is given; nothing is cached.

use std::collections::BTreeMap;

/// Number of records per status.
///
/// Only statuses that occur are stored; [`StatusCounts::get`] reads 0 for
/// the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusCounts<S: Ord> {
    counts: BTreeMap<S, usize>,
}

impl<S: Ord> StatusCounts<S> {
    pub fn get(&self, status: &S) -> usize {
        self.counts.get(status).copied().unwrap_or(0)
    }

    /// Sum over all statuses
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Number of distinct statuses present
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&S, usize)> {
        self.counts.iter().map(|(status, count)| (status, *count))
    }

    pub fn as_map(&self) -> &BTreeMap<S, usize> {
        &self.counts
    }
}

impl<S: Ord> Default for StatusCounts<S> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }
}

/// Counts records per status
pub fn count_by_status<T, S, F>(records: &[T], status_of: F) -> StatusCounts<S>
where
    S: Ord,
    F: Fn(&T) -> S,
{
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(status_of(record)).or_insert(0) += 1;
    }
    StatusCounts { counts }
}

/// Counts records satisfying a predicate
pub fn count_where<T, F>(records: &[T], predicate: F) -> usize
where
    F: Fn(&T) -> bool,
{
    records.iter().filter(|record| predicate(record)).count()
}

/// Sums a numeric field over all records
pub fn sum_field<T, F>(records: &[T], field_of: F) -> u64
where
    F: Fn(&T) -> u64,
{
    records.iter().map(field_of).sum()
}

/// `part / whole`, or 0 when `whole` is 0
pub fn ratio(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64
}

/// `part / whole` as a whole-number percentage, rounded half up.
///
/// Returns 0 when `whole` is 0. `percentage(5, 8)` is 63.
pub fn percentage(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    // Scale before dividing so exact halves such as 62.5 stay exact
    let scaled = part as f64 * 100.0 / whole as f64;
    round_half_up(scaled).max(0) as u32
}

/// Rounds to the nearest integer, with halves going toward positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
