//! Place repository
//!
//! One method per SQL operation. The repository borrows the operation's
//! connection; it never opens or closes one itself.

use sqlx::PgConnection;

use crate::error::{DbError, Result};
use crate::models::{NewPlace, Place};

/// Place repository over a borrowed connection.
///
/// The schema name comes from validated configuration and is interpolated
/// into statement text; all values are bound as parameters.
pub struct PlaceRepo<'a> {
    conn: &'a mut PgConnection,
    schema: &'a str,
}

impl<'a> PlaceRepo<'a> {
    pub fn new(conn: &'a mut PgConnection, schema: &'a str) -> Self {
        Self { conn, schema }
    }

    /// Insert a single row. A missing city is stored as NULL.
    ///
    /// Returns the affected-row count.
    pub async fn insert(&mut self, country: &str, city: Option<&str>, telcode: i32) -> Result<u64> {
        let result = sqlx::query(&format!(
            "INSERT INTO {}.place (country, city, telcode) VALUES ($1, $2, $3)",
            self.schema
        ))
        .bind(country)
        .bind(city)
        .bind(telcode)
        .execute(&mut *self.conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Struct-mapped insert: `NewPlace` fields map to columns by name.
    ///
    /// Returns the affected-row count.
    pub async fn insert_struct(&mut self, place: &NewPlace) -> Result<u64> {
        let result = sqlx::query(&format!(
            "INSERT INTO {}.place (country, city, telcode) VALUES ($1, $2, $3)",
            self.schema
        ))
        .bind(&place.country)
        .bind(place.city.as_deref())
        .bind(place.telcode)
        .execute(&mut *self.conn)
        .await?;
        Ok(result.rows_affected())
    }

    /// Fetch a single place by telephone code.
    ///
    /// An empty result is `DbError::NotFound`, which callers may treat as
    /// recoverable.
    pub async fn find_by_telcode(&mut self, telcode: i32) -> Result<Place> {
        sqlx::query_as::<_, Place>(&format!(
            "SELECT id, country, city, telcode FROM {}.place WHERE telcode = $1",
            self.schema
        ))
        .bind(telcode)
        .fetch_optional(&mut *self.conn)
        .await?
        .ok_or_else(|| DbError::NotFound {
            resource: "place",
            key: telcode.to_string(),
        })
    }

    /// Fetch all places, oldest first.
    pub async fn list(&mut self) -> Result<Vec<Place>> {
        let places = sqlx::query_as::<_, Place>(&format!(
            "SELECT id, country, city, telcode FROM {}.place ORDER BY id",
            self.schema
        ))
        .fetch_all(&mut *self.conn)
        .await?;
        Ok(places)
    }

    /// Number of rows in the table.
    pub async fn count(&mut self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(&format!(
            "SELECT COUNT(*) FROM {}.place",
            self.schema
        ))
        .fetch_one(&mut *self.conn)
        .await?;
        Ok(count)
    }

    /// Delete every row. Returns the affected-row count.
    pub async fn delete_all(&mut self) -> Result<u64> {
        let result = sqlx::query(&format!("DELETE FROM {}.place", self.schema))
            .execute(&mut *self.conn)
            .await?;
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{connect, schema};

    // Integration tests require a real database.
    // Run with: DATABASE_URL=postgres://... cargo test -p placectl-db -- --ignored
    //
    // Each test uses its own schema so tests do not interfere.

    async fn fresh_table(schema_name: &str) -> PgConnection {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let mut conn = connect::connect(&url).await.expect("connect failed");
        schema::create_schema(&mut conn, schema_name)
            .await
            .expect("create schema failed");
        schema::create_table(&mut conn, schema_name)
            .await
            .expect("create table failed");
        PlaceRepo::new(&mut conn, schema_name)
            .delete_all()
            .await
            .expect("reset failed");
        conn
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn count_tracks_inserts_and_delete_all() {
        let mut conn = fresh_table("placectl_test_counts").await;
        let mut repo = PlaceRepo::new(&mut conn, "placectl_test_counts");

        for i in 0..3 {
            let affected = repo
                .insert("Nowhere", None, 9000 + i)
                .await
                .expect("insert failed");
            assert_eq!(affected, 1);
        }
        assert_eq!(repo.count().await.expect("count failed"), 3);

        assert_eq!(repo.delete_all().await.expect("delete failed"), 3);
        assert_eq!(repo.count().await.expect("count failed"), 0);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn null_city_round_trips() {
        let mut conn = fresh_table("placectl_test_null_city").await;
        let mut repo = PlaceRepo::new(&mut conn, "placectl_test_null_city");

        repo.insert("Hong Kong", None, 852)
            .await
            .expect("insert failed");

        let place = repo.find_by_telcode(852).await.expect("query failed");
        assert_eq!(place.country, "Hong Kong");
        assert_eq!(place.city, None);
        assert_eq!(place.to_string(), "Hong Kong, N.A, 852");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn struct_insert_affects_exactly_one_row() {
        let mut conn = fresh_table("placectl_test_struct").await;
        let mut repo = PlaceRepo::new(&mut conn, "placectl_test_struct");

        let berlin = NewPlace {
            country: "Germany".into(),
            city: Some("Berlin".into()),
            telcode: 49,
        };
        let affected = repo.insert_struct(&berlin).await.expect("insert failed");
        assert_eq!(affected, 1);

        let place = repo.find_by_telcode(49).await.expect("query failed");
        assert_eq!(place.country, "Germany");
        assert_eq!(place.city.as_deref(), Some("Berlin"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_on_empty_table_is_not_found() {
        let mut conn = fresh_table("placectl_test_empty").await;
        let mut repo = PlaceRepo::new(&mut conn, "placectl_test_empty");

        let err = repo.find_by_telcode(999).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
        assert!(!err.is_fatal());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_returns_rows_in_insertion_order() {
        let mut conn = fresh_table("placectl_test_list").await;
        let mut repo = PlaceRepo::new(&mut conn, "placectl_test_list");

        repo.insert("Hungary", Some("Budapest"), 36)
            .await
            .expect("insert failed");
        repo.insert("Singapore", None, 65)
            .await
            .expect("insert failed");

        let places = repo.list().await.expect("list failed");
        assert_eq!(places.len(), 2);
        assert_eq!(places[0].country, "Hungary");
        assert_eq!(places[1].country, "Singapore");
        assert_eq!(places[1].city, None);
    }
}
