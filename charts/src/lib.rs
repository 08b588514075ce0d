//! # charts
//!
//! Turns flat aggregation rows from [`storage`] into chart-ready structures:
//! [`pivot`] builds a month-aligned [`SeriesSet`] from per-user monthly rows, [`totals_chart`]
//! maps per-user totals to label/value arrays, and [`ChartData`] is the Chart.js shape served
//! to the dashboard page. Pure and synchronous.

mod dataset;
mod pivot;
mod totals;

#[cfg(test)]
mod pivot_test;

pub use dataset::{color_for, ChartData, Dataset, PALETTE};
pub use pivot::{pivot, SeriesSet};
pub use totals::{totals_chart, TotalsChart};
