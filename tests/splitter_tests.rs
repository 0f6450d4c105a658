mod support;

use sql2bind::classifier::statement_type::StatementType;
use sql2bind::parser::comments::remove_sql_comments;
use sql2bind::parser::splitter::split_sql_file;
use sql2bind::parser::statement::{parse_sql_statements, parse_sql_statements_with, ParseOptions};

use support::read_fixture_sql;

const SINGLE_STATEMENTS: &[&str] = &[
    "SELECT 1",
    "SELECT ';' AS semi",
    "SELECT \"odd;name\" FROM t",
    "SELECT 1 -- trailing; comment",
    "SELECT /* ; */ 2",
    "DO $$ BEGIN PERFORM 1; END $$",
    "CREATE FUNCTION f() RETURNS int AS $fn$ SELECT 1; $fn$ LANGUAGE sql",
    "SELECT 'it''s; fine'",
    "UPDATE t SET a = $1 WHERE b = $2",
];

#[test]
fn text_without_top_level_semicolons_is_one_statement() {
    for sql in SINGLE_STATEMENTS {
        let padded = format!("\n  {sql}\t\n");
        assert_eq!(
            split_sql_file(&padded),
            vec![sql.to_string()],
            "expected a single statement for {sql:?}"
        );
    }
}

#[test]
fn joining_statements_and_splitting_recovers_them() {
    for count in 1..=SINGLE_STATEMENTS.len() {
        let parts = &SINGLE_STATEMENTS[..count];
        let script = parts.join("\n;\n");
        let split = split_sql_file(&script);
        assert_eq!(split.len(), count, "wrong statement count for:\n{script}");
        assert_eq!(split, parts);

        let with_trailing = format!("{script}\n;\n");
        assert_eq!(split_sql_file(&with_trailing), parts);
    }
}

#[test]
fn dollar_quoted_body_is_not_split() {
    let sql = "CREATE FUNCTION f() RETURNS void AS $$BEGIN INSERT INTO t VALUES (1); UPDATE t SET a = 2; END;$$ LANGUAGE plpgsql; SELECT 1;";
    let statements = split_sql_file(sql);
    assert_eq!(statements.len(), 2);
    assert!(statements[0].ends_with("LANGUAGE plpgsql"));
    assert_eq!(statements[1], "SELECT 1");
}

#[test]
fn empty_and_separator_only_input_yield_nothing() {
    assert!(split_sql_file("").is_empty());
    assert!(split_sql_file(";;\n ;").is_empty());
    assert!(parse_sql_statements("").is_empty());
}

#[test]
fn unterminated_literal_swallows_the_rest() {
    let statements = split_sql_file("SELECT 1; SELECT 'open; SELECT 2;");
    assert_eq!(statements, vec!["SELECT 1", "SELECT 'open; SELECT 2;"]);

    let statements = split_sql_file("SELECT 1; /* never closed; SELECT 2;");
    assert_eq!(statements.len(), 2);
}

#[test]
fn fixture_script_splits_and_classifies() {
    let sql = read_fixture_sql("unnamed_script");

    let raw = split_sql_file(&sql);
    assert_eq!(raw.len(), 3);
    assert!(raw[2].starts_with("/* a block comment; with a semicolon */"));

    let statements = parse_sql_statements(&sql);
    assert_eq!(statements.len(), raw.len());
    for (ordinal, statement) in statements.iter().enumerate() {
        assert_eq!(statement.ordinal, ordinal);
        assert_eq!(statement.text, remove_sql_comments(&raw[ordinal]));
    }

    assert!(statements[0].text.starts_with("CREATE TABLE"));
    assert_eq!(statements[0].statement_type, StatementType::Execute);
    assert!(statements[1].text.contains("('first; note'), ('second -- note')"));
    assert_eq!(statements[1].statement_type, StatementType::Execute);
    assert_eq!(statements[2].text, "SELECT body FROM notes");
    assert!(statements[2].is_fetch());
}

#[test]
fn keeping_comments_does_not_change_classification() {
    let sql = read_fixture_sql("unnamed_script");
    let stripped = parse_sql_statements(&sql);
    let kept = parse_sql_statements_with(
        &sql,
        &ParseOptions {
            strip_comments: false,
        },
    );

    assert_eq!(kept.len(), stripped.len());
    assert!(kept[0].text.starts_with("-- Seed data"));
    for (kept, stripped) in kept.iter().zip(&stripped) {
        assert_eq!(kept.statement_type, stripped.statement_type);
    }
}

#[test]
fn comment_removal_is_idempotent_on_fixture_statements() {
    for fixture in ["unnamed_script", "user_repository", "plpgsql_functions"] {
        for statement in split_sql_file(&read_fixture_sql(fixture)) {
            let once = remove_sql_comments(&statement);
            assert_eq!(remove_sql_comments(&once), once, "fixture {fixture}");
        }
    }
}
