/// Comment, quoted-string and dollar-quoted block scanning.
pub mod scanner;
/// Top-level semicolon statement splitting.
pub mod splitter;
/// Comment removal that leaves literal content untouched.
pub mod comments;
/// Split → strip → classify orchestration into [`statement::Statement`] records.
pub mod statement;
/// Named `:parameter` extraction.
pub mod params;
/// Identifier validation and class-name derivation.
pub mod names;
/// Template files with class headers and statement name markers.
pub mod template;
