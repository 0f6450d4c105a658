//! SQL template files: a class header, name markers and the statements they name.
//!
//! ```text
//! # UserRepository
//! #get_user
//! SELECT * FROM users WHERE id = :user_id;
//! -- name: create_user
//! INSERT INTO users (name) VALUES (:name) RETURNING id;
//! ```
//!
//! The first line may be a `# ClassName` header. A marker line (`#name`,
//! `# name` or `-- name: name`) names the first statement after it. Marker
//! lines inside strings, block comments or dollar-quoted blocks are content.

use std::collections::HashSet;
use std::ops::Range;
use std::path::Path;

use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::classifier::query_kind::{analyze_statement, StatementInfo};
use crate::error::{Result, TemplateError};
use crate::parser::comments::remove_sql_comments;
use crate::parser::names::is_valid_identifier;
use crate::parser::scanner::{segments, LexicalContext, Region, Segment};
use crate::parser::splitter::split_statement_spans;
use crate::parser::statement::{ParseOptions, Statement};

static HASH_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#\s*(\w+)$").unwrap());
static NAME_COMMENT_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^--\s*(?i:name)\s*:\s*(\w+)$").unwrap());

/// A statement of a template together with its marker name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedStatement {
    /// Name from the preceding marker, if any.
    pub name: Option<String>,
    /// One-based line where the statement starts.
    pub line: usize,
    /// The classified statement.
    pub statement: Statement,
    /// Kind, parameters and RETURNING flag.
    pub info: StatementInfo,
}

/// A parsed template file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqlTemplate {
    /// Class name from the `# ClassName` header.
    pub class_name: Option<String>,
    /// Statements in source order.
    pub statements: Vec<NamedStatement>,
}

impl SqlTemplate {
    /// Find a statement by marker name.
    pub fn get(&self, name: &str) -> Option<&NamedStatement> {
        self.statements
            .iter()
            .find(|named| named.name.as_deref() == Some(name))
    }
}

#[derive(Debug, Clone)]
struct Marker {
    name: String,
    line: usize,
    range: Range<usize>,
}

/// Read and parse a template file.
pub fn load_template(path: &Path, options: &ParseOptions) -> Result<SqlTemplate> {
    if !path.exists() {
        return Err(TemplateError::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loaded template {} ({} bytes)", path.display(), raw.len());
    parse_template_with(&raw, options)
}

/// Parse template text with default [`ParseOptions`].
pub fn parse_template(raw: &str) -> Result<SqlTemplate> {
    parse_template_with(raw, &ParseOptions::default())
}

/// Parse template text.
///
/// Malformed SQL never fails; only the header and the markers are checked.
pub fn parse_template_with(raw: &str, options: &ParseOptions) -> Result<SqlTemplate> {
    let lines = line_ranges(raw);

    let mut class_name = None;
    let mut header = None;
    if let Some(range) = lines.first() {
        if let Some(name) = parse_header(&raw[range.clone()])? {
            class_name = Some(name);
            header = Some(range.clone());
        }
    }

    let candidates: Vec<Marker> = lines
        .iter()
        .enumerate()
        .skip(usize::from(header.is_some()))
        .filter_map(|(index, range)| {
            marker_name(&raw[range.clone()]).map(|name| Marker {
                name,
                line: index + 1,
                range: range.clone(),
            })
        })
        .collect();

    let unmarked = mask(raw, header.iter().chain(candidates.iter().map(|m| &m.range)));
    let opaque: Vec<Region<'_>> = segments(&unmarked)
        .filter_map(|segment| match segment {
            Segment::Region(region) if region.context != LexicalContext::LineComment => {
                Some(region)
            }
            _ => None,
        })
        .collect();

    let markers: Vec<Marker> = candidates
        .into_iter()
        .filter(|marker| !opaque.iter().any(|region| region.encloses(marker.range.start)))
        .collect();

    // Rejected candidates are literal content and must stay visible.
    let masked = mask(raw, header.iter().chain(markers.iter().map(|m| &m.range)));

    let mut seen = HashSet::new();
    for marker in &markers {
        if !is_valid_identifier(&marker.name) {
            return Err(TemplateError::InvalidStatementName {
                name: marker.name.clone(),
                line: marker.line,
            });
        }
        if !seen.insert(marker.name.as_str()) {
            return Err(TemplateError::DuplicateStatementName {
                name: marker.name.clone(),
                line: marker.line,
            });
        }
    }

    let mut statements = Vec::new();
    let mut section_start = 0usize;
    let mut pending: Option<&Marker> = None;
    for next in markers.iter().map(Some).chain(std::iter::once(None)) {
        let section_end = next.map_or(raw.len(), |marker| marker.range.start);
        collect_section(
            &masked,
            &lines,
            section_start..section_end,
            pending,
            options,
            &mut statements,
        );
        if let Some(marker) = next {
            section_start = marker.range.end;
        }
        pending = next;
    }

    Ok(SqlTemplate {
        class_name,
        statements,
    })
}

fn collect_section(
    text: &str,
    lines: &[Range<usize>],
    section: Range<usize>,
    marker: Option<&Marker>,
    options: &ParseOptions,
    statements: &mut Vec<NamedStatement>,
) {
    let mut name = marker.map(|marker| marker.name.clone());

    for span in split_statement_spans(&text[section.clone()]) {
        let start = section.start + span.start;
        let sql = &text[start..section.start + span.end];
        if remove_sql_comments(sql).is_empty() {
            debug!("skipping comment-only fragment at byte {start}");
            continue;
        }
        let statement = Statement::new(statements.len(), sql, options);
        let info = analyze_statement(&statement.text);

        if name.is_none() {
            if let Some(marker) = marker {
                debug!(
                    "statement after '{}' (line {}) has no marker of its own",
                    marker.name, marker.line
                );
            }
        }

        statements.push(NamedStatement {
            name: name.take(),
            line: line_number(lines, start),
            statement,
            info,
        });
    }

    if let (Some(marker), Some(_)) = (marker, name) {
        warn!(
            "name marker '{}' on line {} is not followed by a statement; ignored",
            marker.name, marker.line
        );
    }
}

fn parse_header(line: &str) -> Result<Option<String>> {
    let line = line.trim();
    if line == "#" {
        return Err(TemplateError::EmptyClassName(line.to_string()));
    }
    let Some(name) = line.strip_prefix("# ") else {
        return Ok(None);
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(TemplateError::EmptyClassName(line.to_string()));
    }
    if !is_valid_identifier(name) {
        return Err(TemplateError::InvalidClassName {
            name: name.to_string(),
        });
    }
    Ok(Some(name.to_string()))
}

fn marker_name(line: &str) -> Option<String> {
    let line = line.trim();
    HASH_MARKER
        .captures(line)
        .or_else(|| NAME_COMMENT_MARKER.captures(line))
        .map(|captures| captures[1].to_string())
}

/// One-based line holding byte `offset`.
fn line_number(lines: &[Range<usize>], offset: usize) -> usize {
    lines.partition_point(|range| range.start <= offset).max(1)
}

/// Byte ranges of each line, without the line terminator.
fn line_ranges(raw: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0usize;
    for line in raw.split_inclusive('\n') {
        let content = line.trim_end_matches(['\n', '\r']);
        ranges.push(start..start + content.len());
        start += line.len();
    }
    ranges
}

/// Replace the given line ranges with spaces, keeping every byte offset.
fn mask<'r>(raw: &str, ranges: impl Iterator<Item = &'r Range<usize>>) -> String {
    let mut ranges: Vec<&Range<usize>> = ranges.collect();
    ranges.sort_by_key(|range| range.start);

    let mut masked = String::with_capacity(raw.len());
    let mut pos = 0usize;
    for range in ranges {
        masked.push_str(&raw[pos..range.start]);
        masked.extend(std::iter::repeat(' ').take(range.len()));
        pos = range.end;
    }
    masked.push_str(&raw[pos..]);
    masked
}
