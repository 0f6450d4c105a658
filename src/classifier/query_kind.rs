use serde::{Deserialize, Serialize};
use std::fmt;

use crate::classifier::statement_classifier::{
    detect_statement_type, has_returning_clause, leading_keyword,
};
use crate::classifier::statement_type::StatementType;
use crate::parser::params::extract_parameters;

/// Statement family, named after its leading keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryKind {
    /// `SELECT ...`
    Select,
    /// `INSERT ...`
    Insert,
    /// `UPDATE ...`
    Update,
    /// `DELETE ...`
    Delete,
    /// `WITH ...`
    Cte,
    /// `VALUES ...`
    Values,
    /// `SHOW ...`
    Show,
    /// `EXPLAIN ...`
    Explain,
    /// `DESC ...` / `DESCRIBE ...`
    Describe,
    /// Anything else, including DDL.
    Other,
}

impl QueryKind {
    /// Kind of the statement whose first keyword is `keyword`.
    pub fn from_keyword(keyword: &str) -> Self {
        match keyword.to_ascii_uppercase().as_str() {
            "SELECT" => QueryKind::Select,
            "INSERT" => QueryKind::Insert,
            "UPDATE" => QueryKind::Update,
            "DELETE" => QueryKind::Delete,
            "WITH" => QueryKind::Cte,
            "VALUES" => QueryKind::Values,
            "SHOW" => QueryKind::Show,
            "EXPLAIN" => QueryKind::Explain,
            "DESC" | "DESCRIBE" => QueryKind::Describe,
            _ => QueryKind::Other,
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            QueryKind::Select => "select",
            QueryKind::Insert => "insert",
            QueryKind::Update => "update",
            QueryKind::Delete => "delete",
            QueryKind::Cte => "cte",
            QueryKind::Values => "values",
            QueryKind::Show => "show",
            QueryKind::Explain => "explain",
            QueryKind::Describe => "describe",
            QueryKind::Other => "other",
        };
        f.write_str(label)
    }
}

/// What a binding generator needs to know about one statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementInfo {
    /// Statement family.
    pub kind: QueryKind,
    /// Fetch or execute.
    pub statement_type: StatementType,
    /// Named `:parameters`, first-seen order, deduplicated.
    pub parameters: Vec<String>,
    /// Whether the main statement has a top-level `RETURNING` clause.
    pub has_returning: bool,
}

/// Analyze a single statement.
pub fn analyze_statement(sql: &str) -> StatementInfo {
    let kind = leading_keyword(sql)
        .map(|keyword| QueryKind::from_keyword(&keyword))
        .unwrap_or(QueryKind::Other);

    StatementInfo {
        kind,
        statement_type: detect_statement_type(sql),
        parameters: extract_parameters(sql),
        has_returning: has_returning_clause(sql),
    }
}
