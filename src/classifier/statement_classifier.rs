use crate::classifier::keywords::{self, Disposition, KeywordRule};
use crate::classifier::statement_type::StatementType;
use crate::classifier::tokens::{tokenize, Token};
use crate::parser::comments::remove_sql_comments;

/// Decide whether a statement returns rows.
///
/// Comments are stripped, then the first keyword is looked up in
/// [`keywords::STATEMENT_KEYWORDS`]. `WITH` statements are classified by the
/// verb that follows the CTE definitions, and DML/DDL verbs become
/// [`StatementType::Fetch`] when the statement carries a top-level
/// `RETURNING` clause. Anything unrecognised, empty or comment-only is
/// [`StatementType::Execute`].
///
/// # Examples
///
/// ```
/// use sql2bind::classifier::statement_classifier::detect_statement_type;
/// use sql2bind::classifier::statement_type::StatementType;
///
/// assert_eq!(detect_statement_type("-- comment\nSELECT * FROM x"), StatementType::Fetch);
/// assert_eq!(
///     detect_statement_type("INSERT INTO t(a) VALUES(1) RETURNING id"),
///     StatementType::Fetch,
/// );
/// assert_eq!(
///     detect_statement_type("WITH c AS (SELECT 1) INSERT INTO t SELECT * FROM c"),
///     StatementType::Execute,
/// );
/// ```
pub fn detect_statement_type(sql: &str) -> StatementType {
    let stripped = remove_sql_comments(sql);
    let tokens = tokenize(&stripped);
    classify_tokens(&tokens)
}

/// True when [`detect_statement_type`] returns [`StatementType::Fetch`].
pub fn is_fetch_statement(sql: &str) -> bool {
    detect_statement_type(sql) == StatementType::Fetch
}

/// True when [`detect_statement_type`] returns [`StatementType::Execute`].
pub fn is_execute_statement(sql: &str) -> bool {
    detect_statement_type(sql) == StatementType::Execute
}

/// True when the statement's main verb carries a `RETURNING` clause outside
/// any parentheses.
pub fn has_returning_clause(sql: &str) -> bool {
    let stripped = remove_sql_comments(sql);
    let tokens = tokenize(&stripped);
    main_statement(&tokens)
        .is_some_and(|(start, _)| has_top_level_word(&tokens[start..], "RETURNING"))
}

/// The first word of the statement, looking through leading parentheses.
pub fn leading_keyword(sql: &str) -> Option<String> {
    let stripped = remove_sql_comments(sql);
    let tokens = tokenize(&stripped);
    leading_word(&tokens).map(|(_, word)| word.to_ascii_uppercase())
}

fn classify_tokens(tokens: &[Token<'_>]) -> StatementType {
    let Some((start, rule)) = main_statement(tokens) else {
        return StatementType::Execute;
    };

    match rule.disposition {
        Disposition::Fetch => StatementType::Fetch,
        Disposition::ExecuteUnlessReturning => {
            if has_top_level_word(&tokens[start..], "RETURNING") {
                StatementType::Fetch
            } else {
                StatementType::Execute
            }
        }
        // `main_statement` always resolves past WITH
        Disposition::CommonTableExpression => StatementType::Execute,
    }
}

/// Locate the keyword that decides the statement: the leading keyword, or for
/// a `WITH` statement the first top-level verb after the CTE definitions.
fn main_statement(tokens: &[Token<'_>]) -> Option<(usize, &'static KeywordRule)> {
    let (index, word) = leading_word(tokens)?;
    let rule = keywords::lookup(word)?;
    if rule.disposition != Disposition::CommonTableExpression {
        return Some((index, rule));
    }

    let mut depth = 0usize;
    for (offset, token) in tokens[index + 1..].iter().enumerate() {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth = depth.saturating_sub(1),
            Token::Word(word) if depth == 0 => {
                if let Some(rule) = keywords::lookup(word).filter(|rule| rule.follows_cte) {
                    return Some((index + 1 + offset, rule));
                }
            }
            _ => {}
        }
    }
    None
}

fn leading_word<'a>(tokens: &[Token<'a>]) -> Option<(usize, &'a str)> {
    tokens
        .iter()
        .enumerate()
        .find(|(_, token)| **token != Token::Open)
        .and_then(|(index, token)| match token {
            Token::Word(word) => Some((index, *word)),
            _ => None,
        })
}

/// Whether `keyword` appears outside parentheses, relative to the first token.
fn has_top_level_word(tokens: &[Token<'_>], keyword: &str) -> bool {
    let mut depth = 0isize;
    tokens.iter().any(|token| {
        match token {
            Token::Open => depth += 1,
            Token::Close => depth -= 1,
            Token::Word(word) => return depth <= 0 && word.eq_ignore_ascii_case(keyword),
            Token::Other => {}
        }
        false
    })
}
