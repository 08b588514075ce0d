//! # wdl-web
//!
//! HTTP surface of the message statistics dashboard. Wires [`storage`] (aggregation queries) and
//! [`charts`] (pivot and chart payloads) behind an axum router, loads config from env and runs the
//! server until Ctrl-C.

pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod routes;
pub mod seed;
pub mod server;
pub mod state;

pub use cli::{Cli, Commands};
pub use config::{DashboardConfig, DEFAULT_ALLOWED_NAMES};
pub use error::{ApiError, Result};
pub use logger::init_tracing;
pub use routes::build_router;
pub use seed::{read_seed_file, seed_from_file};
pub use server::{build_state, run_server};
pub use state::AppState;
