use super::offset::Today;
use crate::model::{CommitRecord, DayOffset, WINDOW_DAYS};
use chrono::TimeZone;

/// Commit counts per aligned day bucket, `WINDOW_DAYS + 1` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCountTable {
    counts: Vec<u32>,
}

impl DayCountTable {
    pub fn new() -> Self {
        Self {
            counts: vec![0; WINDOW_DAYS + 1],
        }
    }

    /// Returns false when `bucket` lies past the window.
    pub fn increment(&mut self, bucket: usize) -> bool {
        match self.counts.get_mut(bucket) {
            Some(count) => {
                *count += 1;
                true
            }
            None => false,
        }
    }

    pub fn get(&self, bucket: usize) -> u32 {
        self.counts.get(bucket).copied().unwrap_or(0)
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Element-wise sum; order of merging never changes the result.
    pub fn merge(&mut self, other: &DayCountTable) {
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }
}

impl Default for DayCountTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl DayCountTable {
    pub(crate) fn from_counts(counts: Vec<u32>) -> Self {
        assert_eq!(counts.len(), WINDOW_DAYS + 1);
        Self { counts }
    }
}

/// Aligned bucket for a commit, or `None` when it falls outside the window.
///
/// Today lands in bucket `alignment - 1`, which is row `alignment - 1` of the
/// newest week column.
pub fn bucket_for<Tz: TimeZone>(today: &Today<Tz>, record: &CommitRecord) -> Option<usize> {
    match today.day_offset(&record.timestamp) {
        DayOffset::OutOfRange => None,
        DayOffset::Within(days) => {
            let bucket = days + today.alignment() - 1;
            (bucket <= WINDOW_DAYS).then_some(bucket)
        }
    }
}

/// Fold one repository's commits into a fresh table, keeping only `author`'s.
pub fn tally<'a, Tz, I>(commits: I, author: &str, today: &Today<Tz>) -> DayCountTable
where
    Tz: TimeZone,
    I: IntoIterator<Item = &'a CommitRecord>,
{
    let mut table = DayCountTable::new();
    for record in commits {
        // Exact, case-sensitive comparison.
        if record.author_email != author {
            continue;
        }
        if let Some(bucket) = bucket_for(today, record) {
            table.increment(bucket);
        }
    }
    table
}
