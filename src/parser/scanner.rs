//! Lexical scanning of comments, quoted strings and dollar-quoted blocks.
//!
//! The scanner never interprets SQL. It only answers one question for a byte
//! offset: does a comment or literal start here, and if so, where does it end?
//! Every delimiter it looks for is ASCII, so all offsets it returns fall on
//! UTF-8 character boundaries.

use std::ops::Range;

/// The "inside X" state entered at a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexicalContext<'a> {
    /// Plain SQL text: delimiters are significant.
    None,
    /// `'...'`, with `''` as an escaped quote.
    SingleQuoted,
    /// `"..."`, with `""` as an escaped quote.
    DoubleQuoted,
    /// `-- ...` up to the next newline.
    LineComment,
    /// `/* ... */`, not nested.
    BlockComment,
    /// `$tag$ ... $tag$`; the tag is empty for `$$`.
    DollarQuoted {
        /// Label between the two `$` of the opening delimiter.
        tag: &'a str,
    },
}

impl LexicalContext<'_> {
    /// True for line and block comments.
    pub fn is_comment(&self) -> bool {
        matches!(self, LexicalContext::LineComment | LexicalContext::BlockComment)
    }
}

/// A comment or literal found by [`scan_region`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region<'a> {
    /// Context that is active for the whole region.
    pub context: LexicalContext<'a>,
    /// Byte offset of the opening delimiter.
    pub start: usize,
    /// Byte offset to resume scanning from (one past the closing delimiter).
    pub end: usize,
    /// False when the text ended before the closing delimiter.
    pub terminated: bool,
}

impl<'a> Region<'a> {
    /// Byte range covered by the region, delimiters included.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Source text of the region, delimiters included.
    pub fn as_str<'t>(&self, text: &'t str) -> &'t str {
        &text[self.range()]
    }

    /// True when `offset` lies strictly inside the region.
    pub fn encloses(&self, offset: usize) -> bool {
        self.start < offset && offset < self.end
    }
}

/// Determine whether a comment, string or dollar-quoted block starts at `start`.
///
/// Returns `None` when the byte at `start` is ordinary SQL. Unterminated
/// regions extend to the end of `text` and are flagged with
/// `terminated == false`; they are never an error.
pub fn scan_region(text: &str, start: usize) -> Option<Region<'_>> {
    let bytes = text.as_bytes();
    let first = *bytes.get(start)?;
    let second = bytes.get(start + 1).copied();

    let (context, end, terminated) = match (first, second) {
        (b'-', Some(b'-')) => {
            let end = find_from(text, start + 2, "\n").unwrap_or(text.len());
            (LexicalContext::LineComment, end, true)
        }
        (b'/', Some(b'*')) => match find_from(text, start + 2, "*/") {
            Some(close) => (LexicalContext::BlockComment, close + 2, true),
            None => (LexicalContext::BlockComment, text.len(), false),
        },
        (b'\'', _) => {
            let (end, terminated) = quoted_end(bytes, start, b'\'');
            (LexicalContext::SingleQuoted, end, terminated)
        }
        (b'"', _) => {
            let (end, terminated) = quoted_end(bytes, start, b'"');
            (LexicalContext::DoubleQuoted, end, terminated)
        }
        (b'$', _) => {
            let delimiter_len = dollar_delimiter_len(bytes, start)?;
            let delimiter = &text[start..start + delimiter_len];
            let tag = &delimiter[1..delimiter_len - 1];
            let context = LexicalContext::DollarQuoted { tag };
            match find_from(text, start + delimiter_len, delimiter) {
                Some(close) => (context, close + delimiter_len, true),
                None => (context, text.len(), false),
            }
        }
        _ => return None,
    };

    Some(Region {
        context,
        start,
        end,
        terminated,
    })
}

/// One piece of scanned text: either plain SQL or a comment/literal region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Plain SQL between regions.
    Code(Range<usize>),
    /// A comment, quoted string or dollar-quoted block.
    Region(Region<'a>),
}

impl Segment<'_> {
    /// Byte range covered by the segment.
    pub fn range(&self) -> Range<usize> {
        match self {
            Segment::Code(range) => range.clone(),
            Segment::Region(region) => region.range(),
        }
    }
}

/// Iterator over the [`Segment`]s of a text, in source order.
///
/// Segments are contiguous and cover the whole input.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    text: &'a str,
    pos: usize,
}

/// Walk `text` left to right, alternating plain code and regions.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, pos: 0 }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        if let Some(region) = scan_region(self.text, self.pos) {
            self.pos = region.end;
            return Some(Segment::Region(region));
        }

        let start = self.pos;
        self.pos += 1;
        while self.pos < self.text.len() && scan_region(self.text, self.pos).is_none() {
            self.pos += 1;
        }
        Some(Segment::Code(start..self.pos))
    }
}

fn find_from(text: &str, from: usize, needle: &str) -> Option<usize> {
    text.get(from..)?.find(needle).map(|offset| from + offset)
}

fn quoted_end(bytes: &[u8], start: usize, quote: u8) -> (usize, bool) {
    let mut pos = start + 1;
    while let Some(&byte) = bytes.get(pos) {
        if byte == quote {
            if bytes.get(pos + 1) == Some(&quote) {
                pos += 2;
                continue;
            }
            return (pos + 1, true);
        }
        pos += 1;
    }
    (bytes.len(), false)
}

/// Length of a `$tag$` opening delimiter at `start`, if there is one.
///
/// Tags are identifier-shaped, so `$1` placeholders and `$` inside
/// identifiers such as `price$usd` never open a block.
fn dollar_delimiter_len(bytes: &[u8], start: usize) -> Option<usize> {
    if start > 0 && is_identifier_byte(bytes[start - 1]) {
        return None;
    }

    let mut pos = start + 1;
    match bytes.get(pos) {
        Some(b'$') => return Some(2),
        Some(&byte) if byte.is_ascii_alphabetic() || byte == b'_' => pos += 1,
        _ => return None,
    }

    while let Some(&byte) = bytes.get(pos) {
        match byte {
            b'$' => return Some(pos + 1 - start),
            _ if is_identifier_byte(byte) => pos += 1,
            _ => return None,
        }
    }
    None
}

pub(crate) fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'$'
}
