//! Leading-keyword table used by the statement classifier.

/// What a leading keyword says about the statement it starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// Always returns rows.
    Fetch,
    /// Returns rows only with a top-level `RETURNING` clause.
    ExecuteUnlessReturning,
    /// `WITH` prefix: the verb after the CTE definitions decides.
    CommonTableExpression,
}

/// One row of the keyword table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    /// Upper-case keyword.
    pub keyword: &'static str,
    /// Classification contributed by the keyword.
    pub disposition: Disposition,
    /// Whether the keyword can be the main statement after a `WITH` clause.
    pub follows_cte: bool,
}

const fn rule(keyword: &'static str, disposition: Disposition, follows_cte: bool) -> KeywordRule {
    KeywordRule {
        keyword,
        disposition,
        follows_cte,
    }
}

/// Keywords checked in order against the first word of a statement.
pub static STATEMENT_KEYWORDS: &[KeywordRule] = &[
    rule("SELECT", Disposition::Fetch, true),
    rule("WITH", Disposition::CommonTableExpression, false),
    rule("VALUES", Disposition::Fetch, true),
    rule("SHOW", Disposition::Fetch, false),
    rule("EXPLAIN", Disposition::Fetch, false),
    rule("DESCRIBE", Disposition::Fetch, false),
    rule("DESC", Disposition::Fetch, false),
    rule("INSERT", Disposition::ExecuteUnlessReturning, true),
    rule("UPDATE", Disposition::ExecuteUnlessReturning, true),
    rule("DELETE", Disposition::ExecuteUnlessReturning, true),
    rule("MERGE", Disposition::ExecuteUnlessReturning, true),
    rule("CREATE", Disposition::ExecuteUnlessReturning, false),
    rule("DROP", Disposition::ExecuteUnlessReturning, false),
    rule("ALTER", Disposition::ExecuteUnlessReturning, false),
    rule("TRUNCATE", Disposition::ExecuteUnlessReturning, false),
    rule("GRANT", Disposition::ExecuteUnlessReturning, false),
    rule("REVOKE", Disposition::ExecuteUnlessReturning, false),
];

/// Look up a word in [`STATEMENT_KEYWORDS`], ignoring ASCII case.
pub fn lookup(word: &str) -> Option<&'static KeywordRule> {
    STATEMENT_KEYWORDS
        .iter()
        .find(|rule| rule.keyword.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(lookup("select").unwrap().disposition, Disposition::Fetch);
        assert_eq!(
            lookup("Insert").unwrap().disposition,
            Disposition::ExecuteUnlessReturning
        );
        assert!(lookup("CALL").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn keywords_are_unique_and_upper_case() {
        for (i, rule) in STATEMENT_KEYWORDS.iter().enumerate() {
            assert_eq!(rule.keyword, rule.keyword.to_ascii_uppercase());
            assert!(
                STATEMENT_KEYWORDS[i + 1..]
                    .iter()
                    .all(|other| other.keyword != rule.keyword),
                "duplicate keyword {}",
                rule.keyword
            );
        }
    }
}
