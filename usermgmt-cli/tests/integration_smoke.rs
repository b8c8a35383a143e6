//! Smoke tests to verify command wiring

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const DB_KEYS: [&str; 6] = [
    "DB_HOST",
    "DB_PORT",
    "DB_USER",
    "DB_PASSWORD",
    "DB_NAME",
    "DB_SSLMODE",
];

fn usermgmt() -> Command {
    let mut cmd = Command::cargo_bin("usermgmt").unwrap();
    for key in DB_KEYS {
        cmd.env_remove(key);
    }
    cmd
}

#[test]
fn test_serve_help() {
    usermgmt()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"));
}

#[test]
fn test_serve_without_config_fails_fast() {
    usermgmt()
        .arg("serve")
        .arg("--bind")
        .arg("127.0.0.1:0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DB_HOST"));
}

#[test]
fn test_check_config_reports_missing_key() {
    usermgmt()
        .arg("check-config")
        .env("DB_HOST", "localhost")
        .env("DB_PORT", "5432")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DB_USER"));
}

#[test]
fn test_check_config_accepts_empty_password() {
    usermgmt()
        .arg("check-config")
        .env("DB_HOST", "localhost")
        .env("DB_PORT", "5432")
        .env("DB_USER", "app")
        .env("DB_PASSWORD", "")
        .env("DB_NAME", "users")
        .env("DB_SSLMODE", "disable")
        .assert()
        .success()
        .stdout(predicate::str::contains("app@localhost:5432/users"));
}

/// Directory holding a `.env` with a complete set of DB_* keys plus `extra`.
fn dir_with_dotenv(extra: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let contents = format!(
        "DB_HOST=fromfile\nDB_PORT=5432\nDB_USER=u\nDB_PASSWORD=p\nDB_NAME=n\nDB_SSLMODE=disable\n{extra}"
    );
    fs::write(dir.path().join(".env"), contents).unwrap();
    dir
}

#[test]
fn test_check_config_reads_dotenv_from_current_dir() {
    let dir = dir_with_dotenv("");

    usermgmt()
        .arg("check-config")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("u@fromfile:5432/n"))
        .stderr(predicate::str::contains("Loaded configuration from"));
}

#[test]
fn test_rust_log_from_dotenv_applies_to_startup_logging() {
    let dir = dir_with_dotenv("RUST_LOG=error\n");

    usermgmt()
        .arg("check-config")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("u@fromfile:5432/n"))
        .stderr(predicate::str::contains("Loaded configuration").not());
}

#[test]
fn test_dotenv_in_parent_dir_is_ignored() {
    let dir = dir_with_dotenv("");
    let sub = dir.path().join("sub");
    fs::create_dir(&sub).unwrap();

    usermgmt()
        .arg("check-config")
        .current_dir(&sub)
        .assert()
        .failure()
        .stderr(predicate::str::contains("DB_HOST"));
}
