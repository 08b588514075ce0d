//! Long-to-wide pivot of monthly rows.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use storage::UserMonthRow;
use tracing::debug;

/// One series per user name, every series aligned to the shared `months` axis.
///
/// `months` is sorted ascending and deduplicated; `series[name][i]` is the count for `months[i]`,
/// zero where the user had no messages that month. Users without any row have no entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSet {
    pub months: Vec<String>,
    pub series: BTreeMap<String, Vec<i64>>,
}

impl SeriesSet {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty() && self.series.is_empty()
    }

    /// Position of `month` on the shared axis.
    pub fn index_of(&self, month: &str) -> Option<usize> {
        self.months
            .binary_search_by(|probe| probe.as_str().cmp(month))
            .ok()
    }

    pub fn get(&self, name: &str) -> Option<&[i64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    /// Count for `name` in `month`; `None` when either is absent from the set.
    pub fn value(&self, name: &str, month: &str) -> Option<i64> {
        let index = self.index_of(month)?;
        self.get(name).and_then(|values| values.get(index).copied())
    }
}

/// Pivots `(user, month, count)` rows into a [`SeriesSet`].
///
/// Month keys are zero-padded `YYYY-MM`, so lexicographic order is chronological. Rows that share
/// a name and month (one name used by several user ids) are summed into the same cell.
pub fn pivot(rows: &[UserMonthRow]) -> SeriesSet {
    let months: Vec<String> = rows
        .iter()
        .map(|row| row.month.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect();

    let mut by_name: BTreeMap<&str, HashMap<&str, i64>> = BTreeMap::new();
    for row in rows {
        *by_name
            .entry(row.name.as_str())
            .or_default()
            .entry(row.month.as_str())
            .or_insert(0) += row.total_messages;
    }

    let series: BTreeMap<String, Vec<i64>> = by_name
        .into_iter()
        .map(|(name, counts)| {
            let values = months
                .iter()
                .map(|month| counts.get(month.as_str()).copied().unwrap_or(0))
                .collect();
            (name.to_string(), values)
        })
        .collect();

    debug!(
        rows = rows.len(),
        months = months.len(),
        series = series.len(),
        "Pivoted monthly rows"
    );

    SeriesSet { months, series }
}
