/// Return the identifier without surrounding double quotes.
pub fn unquote_identifier(ident: &str) -> &str {
    ident
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(ident)
}

/// True for `[A-Za-z_][A-Za-z0-9_]*`, the names a binding generator can
/// turn into a method without escaping.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|ch| ch.is_ascii_alphabetic() || ch == '_')
        && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// Fallback name for a statement that has no name marker.
pub fn fallback_statement_name(ordinal: usize) -> String {
    format!("statement_{ordinal}")
}

/// Derive a PascalCase class name from a template file stem.
///
/// Rules:
/// - drop surrounding double quotes
/// - split on anything that is not ASCII alphanumeric
/// - upper-case the first letter of each part, keep the rest as written
/// - if empty, return `"Queries"`
/// - if starting with a digit, prefix with `"T"`
///
/// Examples:
/// - `"user_queries"` -> `"UserQueries"`
/// - `"order-service"` -> `"OrderService"`
/// - `"2fa"` -> `"T2fa"`
pub fn class_name_from_stem(stem: &str) -> String {
    let mut class_name = String::with_capacity(stem.len());

    for part in unquote_identifier(stem.trim()).split(|ch: char| !ch.is_ascii_alphanumeric()) {
        let mut chars = part.chars();
        if let Some(first) = chars.next() {
            class_name.push(first.to_ascii_uppercase());
            class_name.extend(chars);
        }
    }

    if class_name.is_empty() {
        return "Queries".to_string();
    }

    if class_name.starts_with(|ch: char| ch.is_ascii_digit()) {
        return format!("T{class_name}");
    }

    class_name
}
