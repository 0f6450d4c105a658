//! Error types for template loading and output writing.
//!
//! Splitting and classification never fail; only template metadata and file
//! I/O produce errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading or interpreting a SQL template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The template file does not exist.
    #[error("SQL file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The template file could not be read.
    #[error("Error reading SQL file {}: {source}", .path.display())]
    Io {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The first line is `# ` with nothing after it.
    #[error("Class name cannot be empty: {0:?}")]
    EmptyClassName(String),

    /// The class header names something that is not an identifier.
    #[error("Invalid class name {name:?} on line 1")]
    InvalidClassName {
        /// Name found in the header.
        name: String,
    },

    /// A name marker carries something that is not an identifier.
    #[error("Invalid statement name {name:?} on line {line}")]
    InvalidStatementName {
        /// Name found in the marker.
        name: String,
        /// One-based line of the marker.
        line: usize,
    },

    /// Two markers use the same name.
    #[error("Duplicate statement name {name:?} on line {line}")]
    DuplicateStatementName {
        /// Repeated name.
        name: String,
        /// One-based line of the second marker.
        line: usize,
    },
}

/// Errors raised while writing manifests and reports.
#[derive(Error, Debug)]
pub enum OutputError {
    /// The output name would escape the output directory.
    #[error("Invalid output name '{name}': {reason}")]
    InvalidName {
        /// Rejected name.
        name: String,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A file or directory could not be written.
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The manifest could not be serialized.
    #[error("Failed to serialize manifest: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for template operations.
pub type Result<T, E = TemplateError> = std::result::Result<T, E>;
