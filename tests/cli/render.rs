//! Render subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_render_stdin_to_stdout() {
    cargo_bin_cmd!("fences")
        .arg("render")
        .write_stdin(":::{#a .b}\ntext\n:::\n")
        .assert()
        .success()
        .stdout("<div id=\"a\" class=\"b\">\n<p>text</p>\n</div>\n");
}

#[test]
fn test_render_nav() {
    cargo_bin_cmd!("fences")
        .arg("render")
        .write_stdin(":::{.elem-nav}\nlinks\n:::\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<nav class=\"elem-nav\">"))
        .stdout(predicate::str::ends_with("</nav>\n"));
}

#[test]
fn test_render_to_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    let output = temp_dir.path().join("doc.html");
    fs::write(&input, ":::{.note}\nhello\n:::\n").unwrap();

    cargo_bin_cmd!("fences")
        .args([
            "render",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let html = fs::read_to_string(&output).unwrap();
    assert_eq!(html, "<div class=\"note\">\n<p>hello</p>\n</div>\n");
}

#[test]
fn test_render_discovers_config_next_to_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("doc.md");
    fs::write(&input, ":::{.menu}\nx\n:::\n").unwrap();
    fs::write(
        temp_dir.path().join(".fences.toml"),
        "[fences]\nnav_class = \"menu\"\n",
    )
    .unwrap();

    cargo_bin_cmd!("fences")
        .args(["render", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout("<nav class=\"menu\">\n<p>x</p>\n</nav>\n");
}

#[test]
fn test_render_xhtml_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("custom.toml");
    fs::write(&config_file, "[render]\nxhtml = true\n").unwrap();

    cargo_bin_cmd!("fences")
        .args(["render", "--config", config_file.to_str().unwrap()])
        .write_stdin("***\n")
        .assert()
        .success()
        .stdout("<hr />\n");
}
