//! Storage error types.
//!
//! Any failure while talking to the store fails the whole operation; no partial rows are returned.

use thiserror::Error;

/// Errors that can occur when using storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The pool could not be created or the database could not be opened.
    #[error("Connection error: {0}")]
    Connection(#[source] sqlx::Error),
    /// A statement failed to execute (closed pool, malformed SQL, timeout, missing table...).
    #[error("Query error: {0}")]
    Query(#[from] sqlx::Error),
    #[error("Invalid storage config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
