//! Database connection management
//!
//! Every operation opens a fresh `PgConnection` and closes it when done.
//! There is deliberately no pool: operations never overlap.

use sqlx::{Connection, PgConnection};

use crate::error::Result;

/// Open a PostgreSQL connection.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn connect(database_url: &str) -> Result<PgConnection> {
    let conn = PgConnection::connect(database_url).await?;
    Ok(conn)
}

/// Verify the connection is still alive.
pub async fn ping(conn: &mut PgConnection) -> Result<()> {
    conn.ping().await?;
    Ok(())
}

/// Close a connection gracefully.
pub async fn close(conn: PgConnection) -> Result<()> {
    conn.close().await?;
    Ok(())
}
