//! End-to-end tests for the coderecon binary

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn temp_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}

#[test]
fn reconciles_a_page_against_the_embedded_list() {
    let page = temp_file("<ul><li>#2YA3DEX5</li><li>#ZZZZ9999</li></ul>");

    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg(page.path());

    let output_pred = predicate::str::contains("Codes in reference: 42")
        .and(predicate::str::contains("Codes on page: 2"))
        .and(predicate::str::contains("On page but not in reference (1):"))
        .and(predicate::str::contains("  #ZZZZ9999"))
        .and(predicate::str::contains("Common codes (1):"))
        .and(predicate::str::contains("  2YA3DEX5"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn reconciles_against_a_codes_file() {
    let page = temp_file("#AAAAAAAA text #CCCCCCCC");
    let codes = temp_file("AAAAAAAA\nBBBBBBBB\n");

    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg(page.path()).arg("--codes").arg(codes.path());

    let output_pred = predicate::str::contains("Codes in reference: 2")
        .and(predicate::str::contains("  #CCCCCCCC"))
        .and(predicate::str::contains("  BBBBBBBB"))
        .and(predicate::str::contains("Common codes (1):"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn json_format_emits_the_full_report() {
    let page = temp_file("#AAAAAAAA #CCCCCCCC");
    let codes = temp_file("AAAAAAAA BBBBBBBB");

    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg(page.path())
        .arg("--codes")
        .arg(codes.path())
        .arg("--format")
        .arg("json");

    let output = cmd.output().expect("run coderecon");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout is valid JSON");
    assert_eq!(value["reference_total"], 2);
    assert_eq!(value["page_total"], 2);
    assert_eq!(value["common"][0], "AAAAAAAA");
    assert_eq!(value["page_only"][0], "CCCCCCCC");
    assert_eq!(value["reference_only"][0], "BBBBBBBB");
}

#[test]
fn custom_marker_flag_selects_the_pattern() {
    let page = temp_file("$AAAAAAAA and #CCCCCCCC");
    let codes = temp_file("AAAAAAAA");

    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg(page.path())
        .arg("--codes")
        .arg(codes.path())
        .arg("--marker")
        .arg("$");

    let output_pred = predicate::str::contains("Codes on page: 1")
        .and(predicate::str::contains("Common codes (1):"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn missing_page_fails_with_the_underlying_error() {
    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg("/no/such/page.html");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/page.html"));
}

#[test]
fn multi_character_marker_is_rejected() {
    let page = temp_file("#AAAAAAAA");

    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg(page.path()).arg("--marker").arg("##");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("single character"));
}

#[test]
fn unknown_format_is_rejected() {
    let page = temp_file("#AAAAAAAA");

    let mut cmd = cargo_bin_cmd!("coderecon");
    cmd.arg(page.path()).arg("--format").arg("yaml");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Available formats"));
}
