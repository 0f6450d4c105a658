#![allow(dead_code)]

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use sql2bind::parser::statement::ParseOptions;
use sql2bind::parser::template::{load_template, SqlTemplate};

pub(crate) fn fixture_dir(fixture: &str) -> PathBuf {
    PathBuf::from("tests/fixtures").join(fixture)
}

pub(crate) fn fixture_path(fixture: &str) -> PathBuf {
    fixture_dir(fixture).join("input.sql")
}

pub(crate) fn read_fixture_sql(fixture: &str) -> String {
    std::fs::read_to_string(fixture_path(fixture)).expect("fixture SQL should be readable")
}

pub(crate) fn load_fixture_template(fixture: &str) -> SqlTemplate {
    load_template(&fixture_path(fixture), &ParseOptions::default())
        .expect("fixture template should parse")
}

pub(crate) fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("{prefix}_{nanos}"));
    std::fs::create_dir_all(&dir).expect("should create temp dir");
    dir
}
