//! CLI integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

/// ユーザーの設定ファイルに影響されないコマンドを作成
fn alib() -> Command {
    let mut cmd = Command::cargo_bin("alib").unwrap();
    cmd.env("ALIB_CONFIG", "/nonexistent/alib/config.toml");
    cmd
}

// ============================================================================
// help
// ============================================================================

#[test]
fn test_root_help() {
    alib()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Asset Library CLI"));
}

#[test]
fn test_list_help() {
    alib()
        .args(["list", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("--search"));
}

// ============================================================================
// list
// ============================================================================

#[test]
fn test_list_kpi_tab_simple() {
    alib()
        .args(["list", "--tab", "KPI", "--simple"])
        .assert()
        .success()
        .stdout("1\tRevenue Growth\n2\tCustomer Retention Rate\n3\tGross Margin\n4\tNet Promoter Score\n");
}

#[test]
fn test_list_revenue_search_simple() {
    alib()
        .args(["list", "--search", "revenue", "--simple"])
        .assert()
        .success()
        .stdout("1\tRevenue Growth\n3\tGross Margin\n13\tRevenue Dashboard\n");
}

#[test]
fn test_list_featured_is_paginated() {
    alib()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 4 of 18"));
}

#[test]
fn test_list_all_json() {
    let output = alib()
        .args(["list", "--tab", "DataViz", "--all", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["tab"], "DataViz");
    assert_eq!(value["matched"], 6);
    assert_eq!(value["assets"].as_array().unwrap().len(), 6);
    assert_eq!(value["assets"][0]["type"], "DataViz");
    assert_eq!(value["assets"][0]["applicableKpis"][1], 3);
}

#[test]
fn test_list_unknown_tab_lists_everything() {
    alib()
        .args(["list", "--tab", "Bogus", "--all", "--simple"])
        .assert()
        .success()
        .stdout(predicate::str::contains("18\tFunnel Conversion Bars"));
}

#[test]
fn test_list_no_search_results() {
    alib()
        .args(["list", "--search", "nothing-matches-this"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No assets match your search"));
}

#[test]
fn test_json_and_simple_conflict() {
    alib().args(["list", "--json", "--simple"]).assert().failure();
}

// ============================================================================
// show
// ============================================================================

#[test]
fn test_show_dataviz_with_dangling_reference() {
    alib()
        .args(["show", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Margin Waterfall"))
        .stdout(predicate::str::contains("Gross Margin"))
        .stdout(predicate::str::contains("#99"));
}

#[test]
fn test_show_kpi_json() {
    let output = alib().args(["show", "1", "--json"]).output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Revenue Growth");
    assert_eq!(value["type"], "KPI");
}

#[test]
fn test_show_unknown_id_fails() {
    alib()
        .args(["show", "404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Asset not found: 404"));
}

// ============================================================================
// tabs / catalog / config
// ============================================================================

#[test]
fn test_tabs_counts() {
    alib()
        .arg("tabs")
        .assert()
        .success()
        .stdout(predicate::str::contains("Featured *"))
        .stdout(predicate::str::contains("Storyboards"));
}

#[test]
fn test_custom_catalog_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(br#"{ "assets": [ { "id": 42, "name": "Only One", "type": "Layout" } ] }"#)
        .unwrap();

    alib()
        .args(["list", "--simple", "--catalog"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("42\tOnly One\n");
}

#[test]
fn test_duplicate_ids_in_catalog_fail() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(br#"{ "assets": [ { "id": 1, "name": "A" }, { "id": 1, "name": "B" } ] }"#)
        .unwrap();

    alib()
        .args(["list", "--catalog"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate asset id"));
}

#[test]
fn test_config_default_tab() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    std::fs::write(&config, "default_tab = \"Storyboards\"\n").unwrap();

    Command::cargo_bin("alib")
        .unwrap()
        .env("ALIB_CONFIG", &config)
        .args(["list", "--simple"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("9\tQuarterly Business Review\n"));
}
