//! placectl - a menu-driven PostgreSQL demo console
//!
//! Exercises basic PostgreSQL operations interactively: connecting, creating
//! a schema and table, inserting rows (literal and struct-mapped), querying
//! one or many rows, counting, and deleting all rows. Each operation opens
//! its own connection, runs one statement, reports to the console, and
//! closes the connection.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use placectl_db::Config;

mod commands;
mod menu;
mod tracing_setup;
mod ui;

#[derive(Parser, Debug)]
#[command(
    name = "placectl",
    author,
    version,
    about = "Menu-driven PostgreSQL demo console",
    long_about = "Interactive console exercising basic PostgreSQL operations against a \
                  single place table. Select operations by number; any unrecognized \
                  selection quits."
)]
struct Cli {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", value_name = "URL")]
    database_url: Option<String>,

    /// Schema the place table lives in
    #[arg(long, env = "PLACECTL_SCHEMA", value_name = "NAME")]
    schema: Option<String>,

    /// Log file for diagnostics (appended)
    #[arg(long, env = "PLACECTL_LOG", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Suppress screen clearing and pause prompts (for scripted use)
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before clap resolves env-backed flags
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::from_parts(cli.database_url, cli.schema, cli.log_file)?;

    tracing_setup::init(&config.log_file, cli.debug)
        .context("failed to initialize logging")?;
    ui::init_quiet_mode(cli.quiet);

    menu::run(&config).await
}
