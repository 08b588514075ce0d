//! Storage crate: the `discord_messages` table and the aggregation queries behind the dashboard.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – MessageRecord, NewMessage, UserTotalRow, UserMonthRow, AllowList
//! - [`repository`] – MessageAnalytics trait (read side used by the HTTP layer)
//! - [`message_repo`] – MessageRepository (SQLite)
//! - [`sqlite_pool`] – SqlitePoolManager

mod error;
mod message_repo;
mod models;
mod repository;
mod sqlite_pool;


pub use error::{Result, StorageError};
pub use message_repo::MessageRepository;
pub use models::{AllowList, MessageRecord, NewMessage, UserMonthRow, UserTotalRow};
pub use repository::MessageAnalytics;
pub use sqlite_pool::{SqlitePoolManager, DEFAULT_MAX_CONNECTIONS};
