use serde::{Deserialize, Serialize};
use storage::UserTotalRow;

/// Parallel label/value arrays for the totals bar chart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsChart {
    pub labels: Vec<String>,
    pub values: Vec<i64>,
}

/// Maps rows one-to-one, in input order. Duplicate names stay as separate entries.
pub fn totals_chart(rows: &[UserTotalRow]) -> TotalsChart {
    let (labels, values) = rows
        .iter()
        .map(|row| (row.name.clone(), row.total_messages))
        .unzip();
    TotalsChart { labels, values }
}

impl TotalsChart {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
