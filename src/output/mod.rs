/// Writes manifests and reports to disk.
pub mod formatter;
/// Serializable records handed to binding generators.
pub mod manifest;
/// Builds a Markdown summary of classified statements.
pub mod report;
