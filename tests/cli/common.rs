//! Cross-cutting CLI tests (help, version, error handling)

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help() {
    cargo_bin_cmd!("fences")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("fenced containers"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("fences")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_subcommand() {
    cargo_bin_cmd!("fences")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_subcommand() {
    cargo_bin_cmd!("fences")
        .arg("invalid")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_render_help() {
    cargo_bin_cmd!("fences")
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Render a document to HTML"));
}

#[test]
fn test_parse_help() {
    cargo_bin_cmd!("fences")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parse"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("fences")
        .args(["render", "does-not-exist.md"])
        .assert()
        .failure();
}
