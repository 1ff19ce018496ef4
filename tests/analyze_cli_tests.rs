//! CLI-level tests driving the compiled binary against fixture files.

use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{sample_export, temp_path, write_fixture, wst};

#[test]
fn analyze_prints_ranked_summary() {
    let file = write_fixture("analyze_basic", sample_export());

    wst()
        .args(["analyze", &file])
        .assert()
        .success()
        .stdout(contains("Утвердил"))
        .stdout(contains("Иванов"))
        .stdout(contains("Петров"))
        .stdout(contains("2 worker(s) in report"));
}

#[test]
fn analyze_excludes_total_rows() {
    let file = write_fixture("analyze_totals", sample_export());

    wst()
        .args(["analyze", &file])
        .assert()
        .success()
        .stdout(contains("Итого").not());
}

#[test]
fn analyze_reports_breaks_on_request() {
    let file = write_fixture("analyze_breaks", sample_export());

    // Петров: 09:00 → 09:05 → 09:40; the 35-minute gap is a break
    wst()
        .args(["analyze", &file, "--breaks"])
        .assert()
        .success()
        .stdout(contains("Breaks: Петров"))
        .stdout(contains("00:35"))
        .stdout(contains("30 min tier"));
}

#[test]
fn analyze_shows_hourly_distribution() {
    let file = write_fixture("analyze_hourly", sample_export());

    wst()
        .args(["analyze", &file, "--hourly"])
        .assert()
        .success()
        .stdout(contains("Tasks per hour"));
}

#[test]
fn analyze_joins_company_from_reference() {
    let file = write_fixture("analyze_company", sample_export());
    let employees = write_fixture(
        "analyze_company_ref",
        "Утвердил;Компания\nИванов;ООО Склад\nПетров;ООО Логистика\n",
    );

    wst()
        .args(["analyze", &file, "--employees", &employees])
        .assert()
        .success()
        .stdout(contains("Компания"))
        .stdout(contains("ООО Склад"));
}

#[test]
fn analyze_accepts_comma_delimited_files() {
    let file = write_fixture(
        "analyze_comma",
        "Утвердил:,Складская задача,Вес груза,ИсходЦелКолич в БЕИ,Время подтверждения\n\
         Иванов,T1,5.5,10,0:05:30\n",
    );

    wst()
        .args(["analyze", &file])
        .assert()
        .success()
        .stdout(contains("Иванов"));
}

#[test]
fn analyze_merges_multiple_files() {
    let f1 = write_fixture(
        "analyze_merge_1",
        "Утвердил:;Складская задача;Вес груза;ИсходЦелКолич в БЕИ;Время подтверждения\n\
         Иванов;T1;1;1;0:01:00\n",
    );
    let f2 = write_fixture(
        "analyze_merge_2",
        "Утвердил:;Складская задача;Вес груза;ИсходЦелКолич в БЕИ;Время подтверждения\n\
         Сидоров;T9;2;1;0:01:00\n",
    );

    wst()
        .args(["analyze", &f1, &f2])
        .assert()
        .success()
        .stdout(contains("Иванов"))
        .stdout(contains("Сидоров"));
}

#[test]
fn analyze_fails_on_missing_mandatory_columns() {
    let file = write_fixture(
        "analyze_bad_schema",
        "Колонка A;Колонка B;Колонка C\n1;2;3\n",
    );

    wst()
        .args(["analyze", &file])
        .assert()
        .failure()
        .stderr(contains("Required columns not found"));
}

#[test]
fn analyze_fails_on_missing_file() {
    let missing = temp_path("analyze_no_such_file", "csv");
    fs::remove_file(&missing).ok();

    wst().args(["analyze", &missing]).assert().failure();
}
