//! Interactive command loop
//!
//! Displays the fixed menu, reads one numeric selection per iteration, and
//! dispatches to the matching operation. Any unrecognized selection (unknown
//! code, non-numeric input, or end of input) quits with exit code 0.
//!
//! Failure policy: a database error during an operation is fatal. It is
//! logged and the process aborts with a nonzero exit code instead of
//! returning to the menu.

use std::io::{self, Write};

use anyhow::Result;
use placectl_db::Config;

use crate::{commands, ui};

const MENU: &str = "\
 10  connect
 11  create schema
 12  select schema
 13  create table
 14  insert rows
 15  insert row using struct
 16  query row
 17  query rows
 18  get num of rows in table
 19  delete all rows
 20  quit";

/// Run the command loop until an unrecognized selection quits it.
pub async fn run(config: &Config) -> Result<()> {
    loop {
        ui::clear_screen();
        println!("\n{MENU}\n");
        print!("Select 10..20: ");
        io::stdout().flush()?;

        let result = match read_choice()? {
            Some(10) => commands::run_connect(config).await,
            Some(11) => commands::run_create_schema(config).await,
            Some(12) => commands::run_select_schema(config).await,
            Some(13) => commands::run_create_table(config).await,
            Some(14) => commands::run_insert_rows(config).await,
            Some(15) => commands::run_insert_struct(config).await,
            Some(16) => commands::run_query_row(config).await,
            Some(17) => commands::run_query_rows(config).await,
            Some(18) => commands::run_count(config).await,
            Some(19) => commands::run_delete_all(config).await,
            _ => {
                println!("Bye");
                return Ok(());
            }
        };

        match result {
            Ok(()) => ui::pause(),
            Err(err) => {
                tracing::error!("operation failed: {err:#}");
                return Err(err);
            }
        }
    }
}

/// Read one selection from stdin. `None` means quit: end of input or a line
/// that does not parse as a number.
fn read_choice() -> io::Result<Option<u8>> {
    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(parse_choice(&line))
}

fn parse_choice(line: &str) -> Option<u8> {
    line.trim().parse().ok()
}
