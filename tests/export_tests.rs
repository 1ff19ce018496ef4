//! Export flow tests: CSV / JSON / XLSX output of the summary table.

use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{sample_export, temp_path, write_fixture, wst};

#[test]
fn export_csv_writes_summary_table() {
    let input = write_fixture("export_csv_in", sample_export());
    let out = temp_path("export_csv_out", "csv");

    wst()
        .args(["export", &input, "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();
    let header = lines.next().expect("header line");
    assert!(header.starts_with("Утвердил,СЗ,Вес,Шт,скорость,Время,b15,b30,b45"));
    assert!(content.contains("Иванов"));
    assert!(content.contains("Петров"));
}

#[test]
fn export_json_is_parseable() {
    let input = write_fixture("export_json_in", sample_export());
    let out = temp_path("export_json_out", "json");

    wst()
        .args(["export", &input, "--format", "json", "--file", &out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let rows = parsed.as_array().expect("array of rows");
    assert_eq!(rows.len(), 2);
    assert!(rows[0].get("Утвердил").is_some());
    assert!(rows[0].get("Время").is_some());
}

#[test]
fn export_xlsx_creates_file() {
    let input = write_fixture("export_xlsx_in", sample_export());
    let out = temp_path("export_xlsx_out", "xlsx");

    wst()
        .args(["export", &input, "--format", "xlsx", "--file", &out, "--force"])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    assert!(Path::new(&out).exists());
    assert!(fs::metadata(&out).map(|m| m.len() > 0).unwrap_or(false));
}

#[test]
fn export_rejects_relative_output_path() {
    let input = write_fixture("export_relpath_in", sample_export());

    wst()
        .args(["export", &input, "--format", "csv", "--file", "relative_out.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn export_refuses_existing_file_when_not_forced() {
    let input = write_fixture("export_noforce_in", sample_export());
    let out = temp_path("export_noforce_out", "csv");
    fs::write(&out, "occupied").expect("precreate output");

    // "n" answer on the overwrite prompt aborts the export
    wst()
        .args(["export", &input, "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure();

    let content = fs::read_to_string(&out).expect("read output");
    assert_eq!(content, "occupied");
}
