use std::fmt::Write;

use crate::classifier::statement_type::StatementType;
use crate::output::manifest::{Manifest, ManifestEntry};

/// Build a markdown report with a statement table per template.
pub fn build_report(manifests: &[Manifest]) -> String {
    let mut report = String::new();

    writeln!(report, "# sql2bind Statement Report").unwrap();

    for manifest in manifests {
        writeln!(report).unwrap();
        writeln!(report, "## {} (`{}`)", manifest.class_name, manifest.source).unwrap();
        writeln!(report).unwrap();
        writeln!(
            report,
            "{} statements: {} fetch, {} execute",
            manifest.statements.len(),
            manifest.count(StatementType::Fetch),
            manifest.count(StatementType::Execute)
        )
        .unwrap();

        if manifest.statements.is_empty() {
            continue;
        }

        writeln!(report).unwrap();
        writeln!(report, "| # | Name | Line | Type | Kind | Parameters | Notes |").unwrap();
        writeln!(report, "|---|------|------|------|------|------------|-------|").unwrap();

        for entry in &manifest.statements {
            writeln!(
                report,
                "| {} | {} | {} | {} | {} | {} | {} |",
                entry.ordinal,
                entry.name,
                entry.line,
                entry.statement_type,
                entry.kind,
                format_parameters(&entry.parameters),
                format_notes(entry)
            )
            .unwrap();
        }
    }

    report
}

fn format_parameters(parameters: &[String]) -> String {
    if parameters.is_empty() {
        return "-".to_string();
    }
    parameters
        .iter()
        .map(|p| format!("`{p}`"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_notes(entry: &ManifestEntry) -> String {
    if entry.has_returning {
        "RETURNING".to_string()
    } else if entry.sql.is_empty() {
        "empty statement".to_string()
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::template::parse_template;

    #[test]
    fn report_lists_every_statement() {
        let template = parse_template(
            "# Users\n#get_user\nSELECT * FROM users WHERE id = :id;\n#add_user\nINSERT INTO users (name) VALUES (:name) RETURNING id;",
        )
        .unwrap();
        let manifest = Manifest::from_template(&template, "users.sql", "users");
        let report = build_report(&[manifest]);

        assert!(report.starts_with("# sql2bind Statement Report"));
        assert!(report.contains("## Users (`users.sql`)"));
        assert!(report.contains("2 statements: 2 fetch, 0 execute"));
        assert!(report.contains("| 0 | get_user | 3 | fetch | select | `id` |  |"));
        assert!(report.contains("| 1 | add_user | 5 | fetch | insert | `name` | RETURNING |"));
    }

    #[test]
    fn empty_template_has_no_table() {
        let manifest = Manifest::from_template(&Default::default(), "empty.sql", "empty");
        let report = build_report(&[manifest]);
        assert!(report.contains("0 statements: 0 fetch, 0 execute"));
        assert!(!report.contains("| # |"));
    }
}
