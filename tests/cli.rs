use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn catalog_admin(session_file: &Path) -> Command {
    catalog_admin_at(session_file, "http://127.0.0.1:9")
}

fn catalog_admin_at(session_file: &Path, api_url: &str) -> Command {
    // Use env!("CARGO_BIN_EXE_catalog-admin") provided by cargo for integration tests.
    let bin_path = env!("CARGO_BIN_EXE_catalog-admin");
    let mut cmd = Command::new(bin_path);
    cmd.env_remove("CATALOG_ADMIN_CONFIG")
        .env_remove("CATALOG_ADMIN_API_URL")
        .env_remove("CATALOG_ADMIN_SESSION_FILE")
        .env_remove("LOG_FORMAT")
        .env_remove("RUST_LOG")
        .arg("--session-file")
        .arg(session_file)
        .arg("--api-url")
        .arg(api_url)
        .arg("--locale")
        .arg("en");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let bin_path = env!("CARGO_BIN_EXE_catalog-admin");
    Command::new(bin_path)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("dashboard"))
        .stdout(predicate::str::contains("delete-detail"))
        .stdout(predicate::str::contains("set-token"));
}

#[test]
fn test_products_without_session_ends_on_login() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    catalog_admin(&session_file)
        .arg("products")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Login required (/login)"));
}

#[test]
fn test_token_round_trip_through_session_file() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("nested").join("session.json");

    catalog_admin(&session_file)
        .args(["set-token", "abc123"])
        .assert()
        .success();

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&session_file).unwrap()).unwrap();
    assert_eq!(stored["token"], "abc123");

    catalog_admin(&session_file)
        .arg("clear-token")
        .assert()
        .success();

    let stored: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&session_file).unwrap()).unwrap();
    assert!(stored.get("token").is_none());
}

#[test]
fn test_empty_token_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    catalog_admin(&session_file)
        .args(["set-token", "  "])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Session token must not be empty"));
    assert!(!session_file.exists());
}

#[test]
fn test_invalid_api_url_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    catalog_admin_at(&session_file, "localhost")
        .arg("dashboard")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn test_logout_drops_token_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let session_file = dir.path().join("session.json");

    catalog_admin(&session_file)
        .args(["set-token", "abc123"])
        .assert()
        .success();

    // The remote call fails against the unreachable API; local sign-out still happens.
    catalog_admin(&session_file)
        .arg("logout")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login required (/login)"));

    let raw = std::fs::read_to_string(&session_file).unwrap();
    assert!(!raw.contains("abc123"));
}
