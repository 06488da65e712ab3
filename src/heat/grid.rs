use super::aggregate::DayCountTable;
use std::collections::BTreeMap;

/// One week of counts, row 0 first.
pub type Column = Vec<u32>;

/// Week-index to sealed column. Week 0 is the most recent week.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    weeks: BTreeMap<usize, Column>,
}

impl Grid {
    /// Reshape the table into weeks of seven buckets.
    ///
    /// A column is stored only once its seventh bucket has been consumed, so
    /// the trailing partial week at the old end of the window never appears.
    pub fn build(table: &DayCountTable) -> Self {
        let mut weeks = BTreeMap::new();
        let mut column = Column::with_capacity(7);

        for (offset, &count) in table.counts().iter().enumerate() {
            if offset % 7 == 0 {
                column = Column::with_capacity(7);
            }
            column.push(count);
            if offset % 7 == 6 {
                weeks.insert(offset / 7, std::mem::take(&mut column));
            }
        }

        Self { weeks }
    }

    pub fn week(&self, index: usize) -> Option<&Column> {
        self.weeks.get(&index)
    }

    /// `None` means no data for this position, which is not the same as zero.
    pub fn cell(&self, week: usize, row: usize) -> Option<u32> {
        self.weeks.get(&week).and_then(|col| col.get(row)).copied()
    }

    pub fn len(&self) -> usize {
        self.weeks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }
}
