//! Split SQL template files into statements and classify each one as a
//! row-returning fetch or an effect-only execute.
#![warn(missing_docs)]

/// Statement type detection: keyword table, CTE and RETURNING handling.
pub mod classifier;
/// Error types for template loading and output writing.
pub mod error;
/// JSON manifests and markdown reports of classified templates.
pub mod output;
/// Lexical scanning, statement splitting and template parsing.
pub mod parser;

pub use classifier::statement_classifier::{
    detect_statement_type, is_execute_statement, is_fetch_statement,
};
pub use classifier::statement_type::StatementType;
pub use error::{OutputError, TemplateError};
pub use parser::comments::remove_sql_comments;
pub use parser::splitter::split_sql_file;
pub use parser::statement::{parse_sql_statements, ParseOptions, Statement};
pub use parser::template::{load_template, parse_template, SqlTemplate};
