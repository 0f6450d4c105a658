use serde::{Deserialize, Serialize};

use crate::classifier::statement_classifier::detect_statement_type;
use crate::classifier::statement_type::StatementType;
use crate::parser::comments::remove_sql_comments;
use crate::parser::splitter::split_sql_file;

/// Knobs for [`parse_sql_statements_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Remove comments from each statement's text. Classification always
    /// ignores comments, whatever this is set to.
    pub strip_comments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            strip_comments: true,
        }
    }
}

/// One classified statement of a script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Statement text without the terminating `;`.
    pub text: String,
    /// Zero-based position in the script.
    pub ordinal: usize,
    /// Fetch or execute.
    pub statement_type: StatementType,
}

impl Statement {
    /// Classify `sql` as the statement at `ordinal`.
    pub fn new(ordinal: usize, sql: &str, options: &ParseOptions) -> Self {
        let text = if options.strip_comments {
            remove_sql_comments(sql)
        } else {
            sql.trim().to_string()
        };
        Self {
            statement_type: detect_statement_type(&text),
            text,
            ordinal,
        }
    }

    /// True when the statement returns rows.
    pub fn is_fetch(&self) -> bool {
        self.statement_type.is_fetch()
    }
}

/// Split, strip comments and classify every statement of `raw`.
///
/// Returns one [`Statement`] per statement found by
/// [`split_sql_file`](crate::parser::splitter::split_sql_file), in order.
///
/// # Examples
///
/// ```
/// use sql2bind::parser::statement::parse_sql_statements;
/// use sql2bind::classifier::statement_type::StatementType;
///
/// let statements = parse_sql_statements("SELECT 1; -- seed\nINSERT INTO t VALUES (2);");
/// assert_eq!(statements.len(), 2);
/// assert_eq!(statements[1].text, "INSERT INTO t VALUES (2)");
/// assert_eq!(statements[1].statement_type, StatementType::Execute);
/// ```
pub fn parse_sql_statements(raw: &str) -> Vec<Statement> {
    parse_sql_statements_with(raw, &ParseOptions::default())
}

/// [`parse_sql_statements`] with explicit options.
pub fn parse_sql_statements_with(raw: &str, options: &ParseOptions) -> Vec<Statement> {
    split_sql_file(raw)
        .iter()
        .enumerate()
        .map(|(ordinal, sql)| Statement::new(ordinal, sql, options))
        .collect()
}
