//! Menu operations
//!
//! One function per menu code. Every operation opens its own connection,
//! performs its statement(s), reports to the console, and closes the
//! connection before returning to the loop.

use anyhow::{Context, Result};
use placectl_db::{close, connect, ping, schema, Config, NewPlace, PlaceRepo};

/// Telephone code looked up by the single-row query.
const LOOKUP_TELCODE: i32 = 852;

/// Sample rows for the literal insert; two have no city.
const SAMPLE_PLACES: [(&str, Option<&str>, i32); 5] = [
    ("Hong Kong", None, 852),
    ("Hungary", Some("Budapest"), 36),
    ("Singapore", None, 65),
    ("Ukraine", Some("Kyiv"), 38),
    ("South Africa", Some("Johannesburg"), 27),
];

/// 10: connect and ping.
pub async fn run_connect(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    ping(&mut conn)
        .await
        .context("failed to ping the database")?;
    close(conn)
        .await
        .context("failed to close the connection")?;
    println!("Connection OK");
    Ok(())
}

/// 11: create the schema.
pub async fn run_create_schema(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    schema::create_schema(&mut conn, &config.schema)
        .await
        .context("create schema failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;
    println!("Schema \"{}\" is ready", config.schema);
    Ok(())
}

/// 12: set the search path.
pub async fn run_select_schema(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    schema::set_search_path(&mut conn, &config.schema)
        .await
        .context("select schema failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;
    println!(
        "search_path set to \"{}\" (for that connection only)",
        config.schema
    );
    Ok(())
}

/// 13: create the place table.
pub async fn run_create_table(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    schema::create_table(&mut conn, &config.schema)
        .await
        .context("create table failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;
    println!("Table {}.place is ready", config.schema);
    Ok(())
}

/// 14: insert the literal sample rows.
pub async fn run_insert_rows(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;

    let mut inserted = 0;
    for (country, city, telcode) in SAMPLE_PLACES {
        inserted += PlaceRepo::new(&mut conn, &config.schema)
            .insert(country, city, telcode)
            .await
            .with_context(|| format!("insert row failed ({country})"))?;
    }

    close(conn)
        .await
        .context("failed to close the connection")?;
    println!("Inserted {inserted} rows");
    Ok(())
}

/// 15: insert one row mapped from a struct and report the affected count.
pub async fn run_insert_struct(config: &Config) -> Result<()> {
    let berlin = NewPlace {
        country: "Germany".into(),
        city: Some("Berlin".into()),
        telcode: 49,
    };

    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    let affected = PlaceRepo::new(&mut conn, &config.schema)
        .insert_struct(&berlin)
        .await
        .context("insert row using struct failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;

    tracing::info!(affected, "struct insert complete");
    println!("Inserted {} row(s) for {}", affected, berlin.country);
    Ok(())
}

/// 16: fetch a single row by telephone code.
pub async fn run_query_row(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    let found = PlaceRepo::new(&mut conn, &config.schema)
        .find_by_telcode(LOOKUP_TELCODE)
        .await;
    close(conn)
        .await
        .context("failed to close the connection")?;

    match found {
        Ok(place) => println!("{place}"),
        // An empty result returns to the menu; only driver errors are fatal
        Err(err) if !err.is_fatal() => {
            println!("no place with telcode {LOOKUP_TELCODE}");
        }
        Err(err) => return Err(err).context("query row failed"),
    }
    Ok(())
}

/// 17: fetch and print all rows.
pub async fn run_query_rows(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    let places = PlaceRepo::new(&mut conn, &config.schema)
        .list()
        .await
        .context("query rows failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;

    for place in &places {
        println!("{place}");
    }
    Ok(())
}

/// 18: count rows.
pub async fn run_count(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    let count = PlaceRepo::new(&mut conn, &config.schema)
        .count()
        .await
        .context("get num of rows failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;

    println!("Num of rows in table: {count}");
    Ok(())
}

/// 19: delete every row.
pub async fn run_delete_all(config: &Config) -> Result<()> {
    let mut conn = connect(&config.database_url)
        .await
        .context("failed to connect to the database")?;
    let deleted = PlaceRepo::new(&mut conn, &config.schema)
        .delete_all()
        .await
        .context("delete all rows failed")?;
    close(conn)
        .await
        .context("failed to close the connection")?;

    println!("Deleted {deleted} rows");
    Ok(())
}
