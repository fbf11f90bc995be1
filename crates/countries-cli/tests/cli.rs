use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn dataset() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../countries-core/data/data.json")
}

fn countries() -> Command {
    let mut cmd = Command::cargo_bin("countries").unwrap();
    cmd.arg("--data").arg(dataset()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn list_filters_by_search_and_region() {
    countries()
        .args(["list", "--search", "LAND", "--region", "europe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Iceland"))
        .stdout(predicate::str::contains("New Zealand").not())
        .stdout(predicate::str::contains("Region: Europe"));
}

#[test]
fn list_rejects_unknown_region() {
    countries()
        .args(["list", "--region", "Atlantis"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Atlantis"));
}

#[test]
fn country_shows_neighbours_and_raw_codes() {
    countries()
        .args(["country", "france"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Border Countries:"))
        .stdout(predicate::str::contains("Spain"))
        .stdout(predicate::str::contains("CHE"));
}

#[test]
fn unknown_country_prints_placeholder() {
    countries()
        .args(["country", "Atlantis"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Country not found!"));
}

#[test]
fn open_decodes_paths() {
    countries()
        .args(["open", "/country/C%C3%B4te%20d'Ivoire"])
        .assert()
        .success()
        .stdout(predicate::str::contains("West African CFA franc"));
}

#[test]
fn open_rejects_unknown_paths() {
    countries()
        .args(["open", "/about"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("/about"));
}

#[test]
fn json_output_is_the_screen_model() {
    let output = countries()
        .args(["--json", "country", "Japan"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["body"]["view"], "detail");
    assert_eq!(value["body"]["phase"], "found");
    assert_eq!(value["body"]["country"]["capital"], "Tokyo");
}

#[test]
fn regions_counts_records() {
    countries()
        .arg("regions")
        .assert()
        .success()
        .stdout(predicate::str::contains("Europe"))
        .stdout(predicate::str::contains("Total         16"));
}

#[test]
fn browse_reads_commands_from_stdin() {
    countries()
        .arg("browse")
        .write_stdin("region asia\ndark\nopen india\nback\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[Dark Mode: on]"))
        .stdout(predicate::str::contains("Region: Asia"))
        .stdout(predicate::str::contains("<- Back (/)"));
}

#[test]
fn missing_dataset_shows_an_empty_list() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("countries")
        .unwrap()
        .arg("--data")
        .arg(dir.path().join("missing.json"))
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No countries match."));
}

#[test]
fn config_file_sets_the_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("countries.toml");
    std::fs::write(
        &config,
        format!("[data]\nlocation = {:?}\n", dataset().display().to_string()),
    )
    .unwrap();
    Command::cargo_bin("countries")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .args(["list", "--search", "kenya"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nairobi"));
}
