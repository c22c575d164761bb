//! placectl-db: data access for the placectl demo console
//!
//! # Design Principles
//!
//! - One connection opened and closed per operation - no pool, no shared handle
//! - All statements parameterized; schema names come from validated configuration
//! - Structured errors (`thiserror`); the binary layers `anyhow` on top

pub mod config;
pub mod connect;
pub mod error;
pub mod models;
pub mod repo;
pub mod schema;

pub use config::Config;
pub use connect::{close, connect, ping};
pub use error::{DbError, Result};
pub use models::{NewPlace, Place};
pub use repo::PlaceRepo;
