use crate::parser::scanner::{segments, LexicalContext, Segment};

/// Strip line and block comments from a SQL fragment.
///
/// Comment markers inside quoted strings or dollar-quoted blocks are content,
/// not comments. A block comment becomes a single space so the tokens around
/// it never merge; a line comment is dropped up to its newline. The result is
/// trimmed, and applying the function twice gives the same text.
///
/// # Examples
///
/// ```
/// use sql2bind::parser::comments::remove_sql_comments;
///
/// let sql = "SELECT '--kept' -- dropped\nFROM t /* dropped */";
/// assert_eq!(remove_sql_comments(sql), "SELECT '--kept' \nFROM t");
/// ```
pub fn remove_sql_comments(sql: &str) -> String {
    let mut out = String::with_capacity(sql.len());

    for segment in segments(sql) {
        match segment {
            Segment::Code(range) => out.push_str(&sql[range]),
            Segment::Region(region) => match region.context {
                LexicalContext::LineComment => {}
                LexicalContext::BlockComment => out.push(' '),
                _ => out.push_str(region.as_str(sql)),
            },
        }
    }

    out.trim().to_string()
}
