//! Configuration - connection string, schema, and log file path
//!
//! Values are assembled from CLI flags falling back to environment variables:
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `PLACECTL_SCHEMA`: schema the place table lives in (default: `demo`)
//! - `PLACECTL_LOG`: log file path (default: `placectl.log`)

use std::env;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_SCHEMA: &str = "demo";
const DEFAULT_LOG_FILE: &str = "placectl.log";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "DATABASE_URL not set. Set via --database-url, the DATABASE_URL environment variable, or a .env file"
    )]
    MissingDatabaseUrl,

    #[error("invalid schema name '{0}': expected a plain lowercase identifier")]
    InvalidSchema(String),
}

/// Runtime configuration for placectl
#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Schema the place table lives in
    pub schema: String,
    /// Log file for diagnostics (appended)
    pub log_file: PathBuf,
}

impl Config {
    /// Assemble config from optional parts, applying defaults.
    ///
    /// The schema name is interpolated into SQL text (identifiers cannot be
    /// bound as parameters), so it is validated here and nowhere else.
    pub fn from_parts(
        database_url: Option<String>,
        schema: Option<String>,
        log_file: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let database_url = database_url.ok_or(ConfigError::MissingDatabaseUrl)?;

        let schema = schema.unwrap_or_else(|| DEFAULT_SCHEMA.to_string());
        if !is_valid_schema_ident(&schema) {
            return Err(ConfigError::InvalidSchema(schema));
        }

        let log_file = log_file.unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

        Ok(Self {
            database_url,
            schema,
            log_file,
        })
    }

    /// Create config from environment variables only.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_parts(
            env::var("DATABASE_URL").ok(),
            env::var("PLACECTL_SCHEMA").ok(),
            env::var("PLACECTL_LOG").ok().map(PathBuf::from),
        )
    }
}

/// A plain PostgreSQL identifier: lowercase letter or underscore, then
/// lowercase letters, digits, or underscores. Max 63 bytes (NAMEDATALEN - 1).
fn is_valid_schema_ident(name: &str) -> bool {
    if name.is_empty() || name.len() > 63 {
        return false;
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}
