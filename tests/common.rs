#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn wst() -> Command {
    cargo_bin_cmd!("warestat")
}

/// Create a unique temp file path and remove any leftover from a previous run
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_warestat.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write a CSV fixture into the temp dir and return its path
pub fn write_fixture(name: &str, content: &str) -> String {
    let path = temp_path(name, "csv");
    fs::write(&path, content).expect("write fixture");
    path
}

/// A small semicolon-separated export with an end-time column.
/// Two workers; Петров has a 35-minute break between tasks.
pub fn sample_export() -> &'static str {
    "Утвердил:;Складская задача;Вес груза;ИсходЦелКолич в БЕИ;Время подтверждения;Время завершения\n\
     Иванов;T1;5,5;10;0:05:30;01.02.2024 09:00:00\n\
     Иванов;T2;2,304;4;0:04:10;01.02.2024 09:20:00\n\
     Петров;T3;100;1;0:10:00;01.02.2024 09:00:00\n\
     Петров;T4;200;2;0:02:00;01.02.2024 09:05:00\n\
     Петров;T5;300;3;0:01:00;01.02.2024 09:40:00\n\
     Итого: 5;;607,8;;;\n"
}
