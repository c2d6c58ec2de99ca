//! End-to-end tests for the gridport binary

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

const SNAPSHOT: &str = r#"{
  "row_name": "employee",
  "first": 1,
  "page_size": 2,
  "children": [
    {"other": {"text": "People"}},
    {
      "column": {
        "header": {"text": "Name"},
        "cells": [{"field": {"name": "name"}}]
      }
    },
    {
      "column": {
        "header": {"text": "Age"},
        "cells": [{"field": {"name": "age"}}]
      }
    },
    {
      "column": {
        "visible": false,
        "header": {"text": "Secret"},
        "cells": [{"field": {"name": "secret"}}]
      }
    }
  ],
  "rows": [
    {"name": "Ada", "age": 36, "secret": "x"},
    {"name": "Grace", "age": 45, "secret": "y"},
    {"name": "Edsger", "age": 72, "secret": "z"}
  ]
}"#;

fn snapshot_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SNAPSHOT.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_csv_export_to_stdout() {
    let snapshot = snapshot_file();

    Command::cargo_bin("gridport")
        .unwrap()
        .arg(snapshot.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Name,Age"))
        .stdout(predicate::str::contains("Ada,36"))
        .stdout(predicate::str::contains("Edsger,72"))
        .stdout(predicate::str::contains("Secret").not());
}

#[test]
fn test_page_range_limits_rows() {
    let snapshot = snapshot_file();

    Command::cargo_bin("gridport")
        .unwrap()
        .arg(snapshot.path())
        .args(["--range", "page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Grace,45"))
        .stdout(predicate::str::contains("Edsger,72"))
        .stdout(predicate::str::contains("Ada,36").not());
}

#[test]
fn test_json_export_to_file() {
    let snapshot = snapshot_file();
    let output = NamedTempFile::new().unwrap();

    Command::cargo_bin("gridport")
        .unwrap()
        .arg(snapshot.path())
        .args(["--format", "json"])
        .arg("--output")
        .arg(output.path())
        .assert()
        .success();

    let value: serde_json::Value =
        serde_json::from_reader(std::fs::File::open(output.path()).unwrap()).unwrap();
    let rows = value["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0]["facet"], "header");
    assert_eq!(rows[1]["name"][0], "employee");
}

#[test]
fn test_column_count_query() {
    let snapshot = snapshot_file();

    Command::cargo_bin("gridport")
        .unwrap()
        .arg(snapshot.path())
        .arg("--columns")
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn test_missing_snapshot_fails() {
    Command::cargo_bin("gridport")
        .unwrap()
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open snapshot"));
}
