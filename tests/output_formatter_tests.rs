mod support;

use sql2bind::classifier::statement_type::StatementType;
use sql2bind::output::formatter;
use sql2bind::output::manifest::Manifest;
use sql2bind::output::report::build_report;

use support::{load_fixture_template, unique_temp_dir};

fn fixture_manifest(fixture: &str) -> Manifest {
    let template = load_fixture_template(fixture);
    Manifest::from_template(&template, &format!("{fixture}.sql"), fixture)
}

#[test]
fn written_manifest_matches_in_memory_manifest() {
    let manifest = fixture_manifest("user_repository");
    let out_dir = unique_temp_dir("sql2bind_formatter");

    formatter::write_output(&out_dir, "users", &manifest).unwrap();

    let json = std::fs::read_to_string(out_dir.join("users.json")).unwrap();
    assert_eq!(json, manifest.to_json().unwrap());
    let parsed: Manifest = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, manifest);

    let report = std::fs::read_to_string(out_dir.join("users_report.md")).unwrap();
    assert_eq!(report, build_report(std::slice::from_ref(&manifest)));
}

#[test]
fn report_summarizes_fixture_statements() {
    let manifest = fixture_manifest("user_repository");
    assert_eq!(manifest.count(StatementType::Fetch), 4);
    assert_eq!(manifest.count(StatementType::Execute), 2);

    let report = build_report(&[manifest]);
    assert!(report.contains("## UserRepository (`user_repository.sql`)"));
    assert!(report.contains("6 statements: 4 fetch, 2 execute"));
    assert!(
        report.contains("| 2 | create_user | 13 | fetch | insert | `name`, `email` | RETURNING |"),
        "unexpected report:\n{report}"
    );
    assert!(report.contains("| 4 | delete_user | 21 | execute | delete | `user_id` |  |"));
}

#[test]
fn unnamed_statements_use_fallback_names_and_stem_class() {
    let manifest = fixture_manifest("unnamed_script");
    assert_eq!(manifest.class_name, "UnnamedScript");
    let names: Vec<&str> = manifest
        .statements
        .iter()
        .map(|entry| entry.name.as_str())
        .collect();
    assert_eq!(names, vec!["statement_0", "statement_1", "statement_2"]);
}

#[test]
fn report_covers_several_manifests() {
    let report = build_report(&[
        fixture_manifest("user_repository"),
        fixture_manifest("plpgsql_functions"),
    ]);
    assert_eq!(report.matches("\n## ").count(), 2);
    assert!(report.contains("## Maintenance (`plpgsql_functions.sql`)"));
    assert!(report.contains("3 statements: 1 fetch, 2 execute"));
}

#[test]
fn output_name_with_separator_is_rejected() {
    let out_dir = unique_temp_dir("sql2bind_formatter_bad");
    let err = formatter::write_output(&out_dir, "a/b", &fixture_manifest("unnamed_script"))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid output name 'a/b': path separators are not allowed"
    );
}
