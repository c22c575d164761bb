//! Schema and table setup
//!
//! All statements are `IF NOT EXISTS` and safe to re-run. Schema names are
//! validated at config load; identifiers cannot be bound as parameters.

use sqlx::PgConnection;

use crate::error::Result;

/// Create the schema if it does not exist.
pub async fn create_schema(conn: &mut PgConnection, schema: &str) -> Result<()> {
    tracing::debug!(schema, "creating schema");
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {schema}"))
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Create the place table if it does not exist.
pub async fn create_table(conn: &mut PgConnection, schema: &str) -> Result<()> {
    tracing::debug!(schema, "creating place table");
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {schema}.place (
            id serial primary key,
            country text,
            city text,
            telcode integer
        )
        "#
    ))
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// Set the search path for this connection.
///
/// The setting dies with the connection, and every operation opens its own,
/// so this only affects statements issued on `conn` afterwards.
pub async fn set_search_path(conn: &mut PgConnection, schema: &str) -> Result<()> {
    sqlx::query(&format!("SET search_path TO {schema}"))
        .execute(&mut *conn)
        .await?;
    Ok(())
}
