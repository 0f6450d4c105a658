//! Coarse word tokenizer for statement classification.
//!
//! Only what the classifier needs: words, parentheses and "something else".
//! Literals and comments collapse into a single opaque token, so a quoted
//! `"returning"` column or a `'SELECT'` string never looks like a keyword.

use crate::parser::scanner::{is_identifier_byte, segments, Segment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Word(&'a str),
    Open,
    Close,
    Other,
}

pub(crate) fn tokenize(sql: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();

    for segment in segments(sql) {
        let range = match segment {
            Segment::Code(range) => range,
            Segment::Region(region) => {
                if !region.context.is_comment() {
                    tokens.push(Token::Other);
                }
                continue;
            }
        };

        let bytes = sql.as_bytes();
        let mut pos = range.start;
        while pos < range.end {
            let byte = bytes[pos];
            if is_word_byte(byte) {
                let start = pos;
                while pos < range.end && is_word_byte(bytes[pos]) {
                    pos += 1;
                }
                tokens.push(Token::Word(&sql[start..pos]));
                continue;
            }
            match byte {
                b'(' => tokens.push(Token::Open),
                b')' => tokens.push(Token::Close),
                _ if byte.is_ascii_whitespace() => {}
                _ => tokens.push(Token::Other),
            }
            pos += 1;
        }
    }

    tokens
}

/// Non-ASCII bytes count as word bytes so identifiers stay whole.
fn is_word_byte(byte: u8) -> bool {
    is_identifier_byte(byte) || !byte.is_ascii()
}
