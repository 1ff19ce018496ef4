//! Config file lifecycle: init, print, check.

use predicates::str::contains;
use std::env;
use std::fs;
use std::path::PathBuf;

mod common;
use common::wst;

/// Unique fake home dir so tests never touch the real configuration
fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_warestat_home", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create fake home");
    path.to_string_lossy().to_string()
}

#[test]
fn init_creates_config_file() {
    let home = setup_home("init");

    wst()
        .env("HOME", &home)
        .args(["init"])
        .assert()
        .success()
        .stdout(contains("Configuration created"));

    let conf = PathBuf::from(&home).join(".warestat").join("warestat.conf");
    assert!(conf.exists());
    let content = fs::read_to_string(&conf).expect("read config");
    assert!(content.contains("max_rows"));
    assert!(content.contains("max_cols"));
}

#[test]
fn config_print_shows_file_contents() {
    let home = setup_home("config_print");

    wst().env("HOME", &home).args(["init"]).assert().success();

    wst()
        .env("HOME", &home)
        .args(["config", "--print"])
        .assert()
        .success()
        .stdout(contains("max_rows"));
}

#[test]
fn config_check_passes_on_defaults() {
    let home = setup_home("config_check");

    wst().env("HOME", &home).args(["init"]).assert().success();

    wst()
        .env("HOME", &home)
        .args(["config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration is valid"));
}
