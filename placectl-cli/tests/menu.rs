//! Binary-level tests for the command loop.
//!
//! None of these touch a database: the quit path and startup validation are
//! exercised with piped stdin, and connections are only opened when a
//! database operation is selected.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const FAKE_DATABASE_URL: &str = "postgres://localhost:5432/placectl_test";

/// Command running in its own temp dir so the default log file lands there.
fn placectl_in(tmp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("placectl").expect("binary built");
    cmd.current_dir(tmp.path())
        .env("DATABASE_URL", FAKE_DATABASE_URL);
    cmd
}

#[test]
fn unrecognized_code_exits_zero() {
    let tmp = tempfile::tempdir().expect("tempdir");
    placectl_in(&tmp)
        .write_stdin("99\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye"));
}

#[test]
fn non_numeric_input_exits_zero() {
    let tmp = tempfile::tempdir().expect("tempdir");
    placectl_in(&tmp)
        .write_stdin("banana\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye"));
}

#[test]
fn end_of_input_exits_zero() {
    let tmp = tempfile::tempdir().expect("tempdir");
    placectl_in(&tmp)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bye"));
}

#[test]
fn menu_lists_all_operations() {
    let tmp = tempfile::tempdir().expect("tempdir");
    placectl_in(&tmp)
        .write_stdin("20\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("10  connect")
                .and(predicate::str::contains("11  create schema"))
                .and(predicate::str::contains("12  select schema"))
                .and(predicate::str::contains("13  create table"))
                .and(predicate::str::contains("14  insert rows"))
                .and(predicate::str::contains("15  insert row using struct"))
                .and(predicate::str::contains("16  query row"))
                .and(predicate::str::contains("17  query rows"))
                .and(predicate::str::contains("18  get num of rows in table"))
                .and(predicate::str::contains("19  delete all rows"))
                .and(predicate::str::contains("20  quit")),
        );
}

#[test]
fn missing_database_url_fails_at_startup() {
    let tmp = tempfile::tempdir().expect("tempdir");
    Command::cargo_bin("placectl")
        .expect("binary built")
        .current_dir(tmp.path())
        .env_remove("DATABASE_URL")
        .write_stdin("99\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn invalid_schema_fails_at_startup() {
    let tmp = tempfile::tempdir().expect("tempdir");
    placectl_in(&tmp)
        .arg("--schema")
        .arg("bad;schema")
        .write_stdin("99\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid schema name"));
}

#[test]
fn log_file_is_created_at_configured_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let log_path = tmp.path().join("ops.log");
    placectl_in(&tmp)
        .arg("--log-file")
        .arg(&log_path)
        .write_stdin("99\n")
        .assert()
        .success();
    assert!(log_path.exists(), "log file should be created at startup");
}
