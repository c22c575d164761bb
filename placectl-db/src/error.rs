//! Error types for placectl-db
//!
//! Library crates use `thiserror` for structured, composable errors.
//! The binary (placectl-cli) wraps these in `anyhow` for convenience.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DbError>;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{key}'")]
    NotFound { resource: &'static str, key: String },
}

impl DbError {
    /// Whether this error should abort the program.
    ///
    /// A single-row query that matches nothing is an empty result, not a
    /// database failure; everything else is fatal.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, DbError::NotFound { .. })
    }
}
