use crate::parser::scanner::{segments, Segment};

/// Named bind parameters (`:name`) in order of first appearance, without
/// duplicates.
///
/// Parameters inside strings, comments and dollar-quoted blocks are ignored,
/// as are PostgreSQL casts (`value::int`) and slice bounds (`a[1:2]`).
///
/// # Examples
///
/// ```
/// use sql2bind::parser::params::extract_parameters;
///
/// let sql = "SELECT * FROM users WHERE id = :user_id AND created::date > :since OR id = :user_id";
/// assert_eq!(extract_parameters(sql), vec!["user_id", "since"]);
/// ```
pub fn extract_parameters(sql: &str) -> Vec<String> {
    let bytes = sql.as_bytes();
    let mut parameters: Vec<String> = Vec::new();

    for segment in segments(sql) {
        let Segment::Code(range) = segment else {
            continue;
        };

        let mut pos = range.start;
        while pos < range.end {
            if bytes[pos] != b':' || !starts_parameter(bytes, pos) {
                pos += 1;
                continue;
            }

            let start = pos + 1;
            let mut end = start;
            while end < range.end && (bytes[end].is_ascii_alphanumeric() || bytes[end] == b'_') {
                end += 1;
            }

            let name = &sql[start..end];
            if !parameters.iter().any(|existing| existing == name) {
                parameters.push(name.to_string());
            }
            pos = end;
        }
    }

    parameters
}

fn starts_parameter(bytes: &[u8], colon: usize) -> bool {
    let after_colon = colon > 0 && bytes[colon - 1] == b':';
    let next = bytes.get(colon + 1).copied();
    !after_colon && next.is_some_and(|byte| byte.is_ascii_alphabetic() || byte == b'_')
}
