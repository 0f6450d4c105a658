/// The fetch/execute enumeration.
pub mod statement_type;
/// Ordered leading-keyword table.
pub mod keywords;
/// Word/parenthesis tokenizer used for keyword lookups.
pub(crate) mod tokens;
/// Fetch/execute detection, including CTE and RETURNING handling.
pub mod statement_classifier;
/// Query kind and per-statement analysis for binding generators.
pub mod query_kind;
