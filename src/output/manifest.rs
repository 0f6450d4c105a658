use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::classifier::query_kind::QueryKind;
use crate::classifier::statement_type::StatementType;
use crate::parser::names::{class_name_from_stem, fallback_statement_name};
use crate::parser::template::SqlTemplate;

/// One `(name, sql, statement_type)` record plus the details a generator uses
/// to build a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Marker name, or `statement_<ordinal>` when unnamed.
    pub name: String,
    /// Zero-based position in the template.
    pub ordinal: usize,
    /// One-based line where the statement starts.
    pub line: usize,
    /// Statement text without the terminating `;`.
    pub sql: String,
    /// Fetch or execute.
    pub statement_type: StatementType,
    /// Statement family.
    pub kind: QueryKind,
    /// Named `:parameters`.
    pub parameters: Vec<String>,
    /// Whether the statement has a top-level `RETURNING` clause.
    pub has_returning: bool,
}

/// Everything a binding generator needs from one template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    /// Header class name, or one derived from the file stem.
    pub class_name: String,
    /// Where the template came from.
    pub source: String,
    /// Statements in source order.
    pub statements: Vec<ManifestEntry>,
}

impl Manifest {
    /// Build a manifest from a parsed template.
    ///
    /// `stem` names the class when the template has no header.
    pub fn from_template(template: &SqlTemplate, source: &str, stem: &str) -> Self {
        let class_name = template
            .class_name
            .clone()
            .unwrap_or_else(|| class_name_from_stem(stem));

        let mut taken: HashSet<String> = template
            .statements
            .iter()
            .filter_map(|named| named.name.clone())
            .collect();

        let statements = template
            .statements
            .iter()
            .map(|named| ManifestEntry {
                name: named.name.clone().unwrap_or_else(|| {
                    free_name(fallback_statement_name(named.statement.ordinal), &mut taken)
                }),
                ordinal: named.statement.ordinal,
                line: named.line,
                sql: named.statement.text.clone(),
                statement_type: named.statement.statement_type,
                kind: named.info.kind,
                parameters: named.info.parameters.clone(),
                has_returning: named.info.has_returning,
            })
            .collect();

        Self {
            class_name,
            source: source.to_string(),
            statements,
        }
    }

    /// Number of statements of the given type.
    pub fn count(&self, statement_type: StatementType) -> usize {
        self.statements
            .iter()
            .filter(|entry| entry.statement_type == statement_type)
            .count()
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// `base`, or `base_2`, `base_3`... if a marker already uses it. Reserves
/// the returned name.
fn free_name(base: String, taken: &mut HashSet<String>) -> String {
    let mut name = base.clone();
    let mut suffix = 2;
    while taken.contains(&name) {
        name = format!("{base}_{suffix}");
        suffix += 1;
    }
    taken.insert(name.clone());
    name
}
