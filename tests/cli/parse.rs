//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("fences")
        .arg("parse")
        .write_stdin(":::{#a .b}\ntext\n:::\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("DOCUMENT"))
        .stdout(predicate::str::contains("FENCED_CONTAINER"))
        .stdout(predicate::str::contains("DIV_FENCE_CLOSE"));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    fs::write(&test_file, "# Heading\n\n:::{.note}\nParagraph.\n:::\n").unwrap();

    cargo_bin_cmd!("fences")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEADING"))
        .stdout(predicate::str::contains("FENCED_CONTAINER"))
        .stdout(predicate::str::contains("PARAGRAPH"));
}

#[test]
fn test_parse_bare_marker_is_not_a_container() {
    cargo_bin_cmd!("fences")
        .arg("parse")
        .write_stdin(":::\nfoo\n:::\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("PARAGRAPH"))
        .stdout(predicate::str::contains("FENCED_CONTAINER").not());
}

#[test]
fn test_parse_with_config_disabling_containers() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("custom.toml");

    fs::write(&test_file, ":::{.note}\nx\n:::\n").unwrap();
    fs::write(&config_file, "[extensions]\nfenced_containers = false\n").unwrap();

    cargo_bin_cmd!("fences")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("FENCED_CONTAINER").not());
}

#[test]
fn test_parse_invalid_explicit_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("test.md");
    let config_file = temp_dir.path().join("bad.toml");

    fs::write(&test_file, "text\n").unwrap();
    fs::write(&config_file, "[fences]\nmin_length = 1\n").unwrap();

    cargo_bin_cmd!("fences")
        .args([
            "parse",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_length"));
}
