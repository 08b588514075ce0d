//! Dashboard configuration: store, HTTP bind address, logging and the monthly allow-list.

mod base;


pub use base::{DashboardConfig, DEFAULT_ALLOWED_NAMES};
