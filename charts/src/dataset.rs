//! Chart.js-shaped payloads.
//!
//! Colors come from a fixed palette indexed by series position, so the same data always renders
//! the same way.

use serde::{Deserialize, Serialize};

use crate::pivot::SeriesSet;
use crate::totals::TotalsChart;

pub const PALETTE: [&str; 8] = [
    "rgba(54, 162, 235, 0.5)",
    "rgba(255, 99, 132, 0.5)",
    "rgba(75, 192, 192, 0.5)",
    "rgba(255, 159, 64, 0.5)",
    "rgba(153, 102, 255, 0.5)",
    "rgba(255, 205, 86, 0.5)",
    "rgba(201, 203, 207, 0.5)",
    "rgba(46, 204, 113, 0.5)",
];

const TOTALS_BORDER: &str = "rgba(54, 162, 235, 1)";

/// Palette color for the series at `index`, wrapping around.
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub label: String,
    pub data: Vec<i64>,
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
}

/// `labels` is the x axis; every dataset has one value per label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
    /// Stack datasets on both axes.
    pub stacked: bool,
}

impl SeriesSet {
    /// Stacked bar chart: months on the x axis, one dataset per user.
    pub fn to_stacked_chart(&self) -> ChartData {
        let datasets = self
            .series
            .iter()
            .enumerate()
            .map(|(index, (name, values))| Dataset {
                label: name.clone(),
                data: values.clone(),
                background_color: color_for(index).to_string(),
                border_color: None,
                border_width: None,
            })
            .collect();

        ChartData {
            labels: self.months.clone(),
            datasets,
            stacked: true,
        }
    }
}

impl TotalsChart {
    /// Single-dataset bar chart of total messages per user.
    pub fn to_bar_chart(&self) -> ChartData {
        ChartData {
            labels: self.labels.clone(),
            datasets: vec![Dataset {
                label: "Total Messages".to_string(),
                data: self.values.clone(),
                background_color: color_for(0).to_string(),
                border_color: Some(TOTALS_BORDER.to_string()),
                border_width: Some(1),
            }],
            stacked: false,
        }
    }
}
