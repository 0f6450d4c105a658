use std::ops::Range;

use log::debug;

use crate::parser::scanner::{segments, Segment};

/// Split a SQL script into its statements.
///
/// A `;` ends a statement only outside comments, quoted strings and
/// dollar-quoted blocks. Statements are trimmed and empty ones (from `;;` or
/// a trailing `;`) are dropped. Unterminated literals swallow the rest of the
/// script instead of failing.
///
/// # Examples
///
/// ```
/// use sql2bind::parser::splitter::split_sql_file;
///
/// let statements = split_sql_file("SELECT 1; INSERT INTO t VALUES (1);");
/// assert_eq!(statements, vec!["SELECT 1", "INSERT INTO t VALUES (1)"]);
/// ```
pub fn split_sql_file(raw: &str) -> Vec<String> {
    split_statement_spans(raw)
        .into_iter()
        .map(|span| raw[span].to_string())
        .collect()
}

/// Byte ranges of the trimmed statements of `raw`, in source order.
pub fn split_statement_spans(raw: &str) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut statement_start = 0usize;

    for segment in segments(raw) {
        match segment {
            Segment::Code(range) => {
                for (offset, _) in raw[range.clone()].match_indices(';') {
                    let boundary = range.start + offset;
                    push_trimmed(raw, statement_start..boundary, &mut spans);
                    statement_start = boundary + 1;
                }
            }
            Segment::Region(region) if !region.terminated => {
                debug!(
                    "unterminated {:?} at byte {}; treating the rest of the script as its content",
                    region.context, region.start
                );
            }
            Segment::Region(_) => {}
        }
    }
    push_trimmed(raw, statement_start..raw.len(), &mut spans);

    spans
}

fn push_trimmed(raw: &str, range: Range<usize>, spans: &mut Vec<Range<usize>>) {
    let slice = &raw[range.clone()];
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }
    let start = range.start + (slice.len() - slice.trim_start().len());
    spans.push(start..start + trimmed.len());
}
