//! Tests for error handling, exit codes, and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn wayfarer() -> Command {
    Command::cargo_bin("wayfarer").unwrap()
}

#[test]
fn entity_name_with_special_characters_is_a_user_error() {
    wayfarer()
        .args(["entity", "my-entity"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("special characters"))
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn reserved_entity_name_is_rejected() {
    wayfarer()
        .args(["entity", "class"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("reserved keyword"));
}

#[test]
fn detail_suffixed_entity_name_is_rejected() {
    wayfarer()
        .args(["entity", "OrderDetail"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot end with 'Detail'"));
}

#[test]
fn empty_entity_name_is_rejected() {
    wayfarer()
        .args(["entity", ""])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be empty"));
}

#[test]
fn error_output_points_at_verbose_flag() {
    wayfarer()
        .args(["entity", "my-entity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose"));
}

#[test]
fn corrupt_definition_degrades_to_an_empty_entity() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".wayfarer");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("Order.json"), "{definitely not json").unwrap();

    // The unreadable file is reported, then the session continues as if the
    // entity were empty rather than aborting.
    wayfarer()
        .current_dir(temp.path())
        .args(["entity", "order", "--regenerate", "--skip-install", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("could not be read"));

    let dynamo = fs::read_to_string(temp.path().join("data/lib/OrderDynamo.js")).unwrap();
    assert!(dynamo.contains("Key: {},"));
}

#[test]
fn splice_failures_are_warnings_not_errors() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join(".wayfarer");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("Order.json"),
        r#"{"fields":[],"relationships":[]}"#,
    )
    .unwrap();

    // No shared files exist, so all five splices fail; the run still
    // succeeds and names the affected files.
    wayfarer()
        .current_dir(temp.path())
        .args(["entity", "order", "--regenerate", "--skip-install", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::contains("data/lib/schema.js"))
        .stdout(predicate::str::contains("s-project.json"))
        .stdout(predicate::str::contains("Order"));
}
