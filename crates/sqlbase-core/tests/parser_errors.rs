//! Tests for syntax error reporting.

mod common;
use common::*;

use sqlbase_core::parser::DEFAULT_RECURSION_LIMIT;
use sqlbase_core::{Keyword, ParseErrorKind, Parser, ParserOptions, TokenKind};

fn nested_parens(depth: usize) -> String {
    format!("{}1{}", "(".repeat(depth), ")".repeat(depth))
}

#[test]
fn unknown_statement_lists_statement_starts() {
    let err = parse_err("FOO bar");
    assert_eq!(err.token_index, 0);
    assert_eq!(err.found_text, "FOO");
    assert_eq!(
        err.kind,
        ParseErrorKind::NoViableAlternative { rule: "statement" }
    );
    for keyword in [Keyword::Select, Keyword::Create, Keyword::Show, Keyword::With] {
        assert!(err.expected.contains(&TokenKind::Keyword(keyword)), "{keyword:?}");
    }
}

#[test]
fn empty_input_is_rejected_at_eof() {
    let err = parse_err("");
    assert_eq!(err.token_index, 0);
    assert_eq!(err.found, TokenKind::Eof);
}

#[test]
fn missing_relation_reports_eof() {
    let err = parse_err("SELECT * FROM");
    assert_eq!(err.token_index, 3);
    assert_eq!(err.found, TokenKind::Eof);
    assert!(!err.expected.is_empty());
}

#[test]
fn dangling_operator_reports_eof() {
    let err = Parser::new("a +").parse_expression().unwrap_err();
    assert_eq!(err.token_index, 2);
    assert_eq!(err.found, TokenKind::Eof);
}

#[test]
fn error_points_at_furthest_token() {
    let err = parse_err("CREATE TABLE t (a INT,)");
    assert_eq!(err.found, TokenKind::RightParen);
    assert_eq!(err.token_index, 7);
}

#[test]
fn create_with_unknown_object_reports_second_token() {
    let err = parse_err("CREATE FOO");
    assert_eq!(err.token_index, 1);
    for keyword in [Keyword::Schema, Keyword::Table, Keyword::View] {
        assert!(err.expected.contains(&TokenKind::Keyword(keyword)), "{keyword:?}");
    }
}

#[test]
fn trailing_input_is_mismatched() {
    let err = parse_err("SELECT 1 FROM t t2 t3");
    assert_eq!(err.kind, ParseErrorKind::MismatchedInput);
    assert_eq!(err.found_text, "t3");
    assert!(err.expected.contains(&TokenKind::Eof));
}

#[test]
fn unrecognized_character_is_reported() {
    let err = parse_err("SELECT a # b");
    assert_eq!(err.found, TokenKind::Unrecognized);
    assert_eq!(err.found_text, "#");
    assert_eq!(err.token_index, 2);
}

#[test]
fn unterminated_string_is_reported() {
    let err = parse_err("SELECT 'oops");
    assert_eq!(err.found, TokenKind::Unrecognized);
    assert_eq!(err.token_index, 1);
}

#[test]
fn reserved_word_as_table_name_is_rejected() {
    let err = parse_err("SELECT * FROM select");
    assert_eq!(err.token_index, 3);
}

#[test]
fn error_location_is_line_and_column() {
    let err = parse_err("SELECT a\nFROM t\nWHERE");
    assert_eq!(err.found, TokenKind::Eof);
    assert_eq!(err.location.line, 3);
}

#[test]
fn error_message_names_found_token() {
    let err = parse_err("SELECT 1 FROM t t2 t3");
    let message = err.to_string();
    assert!(message.contains("'t3'"), "{message}");
    assert!(message.starts_with("line 1:"), "{message}");
}

#[test]
fn moderate_nesting_parses() {
    let sql = format!("SELECT {}", nested_parens(20));
    let _ = parse(&sql);
}

#[test]
fn deep_nesting_hits_recursion_limit() {
    let sql = format!("SELECT {}", nested_parens(500));
    let err = parse_err(&sql);
    assert!(err.is_recursion_limit(), "{err}");
}

#[test]
fn recursion_limit_is_configurable() {
    let sql = nested_parens(10);
    let mut strict =
        Parser::new(&sql).with_options(ParserOptions::new().with_recursion_limit(4));
    let err = strict.parse_expression().unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::RecursionLimitExceeded { limit: 4 }
    );

    let mut relaxed =
        Parser::new(&sql).with_options(ParserOptions::new().with_recursion_limit(200));
    assert!(relaxed.parse_expression().is_ok());
}

#[test]
fn parenthesized_expression_at_the_limit_parses() {
    let at_limit = nested_parens(DEFAULT_RECURSION_LIMIT);
    assert!(Parser::new(&at_limit).parse_expression().is_ok());
    let _ = parse(&format!("SELECT {at_limit}"));

    let past_limit = nested_parens(DEFAULT_RECURSION_LIMIT + 1);
    let err = Parser::new(&past_limit).parse_expression().unwrap_err();
    assert_eq!(
        err.kind,
        ParseErrorKind::RecursionLimitExceeded {
            limit: DEFAULT_RECURSION_LIMIT
        }
    );
    assert!(parse_err(&format!("SELECT {past_limit}")).is_recursion_limit());
}

#[test]
fn derived_tables_at_the_limit_parse() {
    let derived = |depth: usize| {
        format!(
            "{}SELECT 1{}",
            "SELECT * FROM (".repeat(depth),
            ")".repeat(depth)
        )
    };
    let _ = parse(&derived(DEFAULT_RECURSION_LIMIT));
    assert!(parse_err(&derived(DEFAULT_RECURSION_LIMIT + 1)).is_recursion_limit());
}

#[test]
fn scalar_subqueries_at_the_limit_parse() {
    let subquery = |depth: usize| format!("{}1{}", "(SELECT ".repeat(depth), ")".repeat(depth));
    assert!(Parser::new(&subquery(DEFAULT_RECURSION_LIMIT))
        .parse_expression()
        .is_ok());
    assert!(Parser::new(&subquery(DEFAULT_RECURSION_LIMIT + 1))
        .parse_expression()
        .unwrap_err()
        .is_recursion_limit());
}

#[test]
fn nested_function_calls_count_one_level_each() {
    let calls = |depth: usize| format!("{}x{}", "f(".repeat(depth), ")".repeat(depth));
    let options = ParserOptions::new().with_recursion_limit(8);
    let mut parser = Parser::new(&calls(8)).with_options(options.clone());
    assert!(parser.parse_expression().is_ok());
    let mut parser = Parser::new(&calls(9)).with_options(options);
    assert!(parser.parse_expression().unwrap_err().is_recursion_limit());
}

#[test]
fn explain_nesting_counts_one_level_each() {
    let explain = |depth: usize| format!("{}SELECT 1", "EXPLAIN ".repeat(depth));
    let options = ParserOptions::new().with_recursion_limit(5);
    let mut parser = Parser::new(&explain(5)).with_options(options.clone());
    assert!(parser.parse_statement().is_ok());
    let mut parser = Parser::new(&explain(6)).with_options(options);
    assert!(parser.parse_statement().unwrap_err().is_recursion_limit());
}

#[test]
fn deeply_nested_subqueries_hit_recursion_limit() {
    let sql = format!(
        "{}{}",
        "SELECT * FROM (".repeat(300),
        format!("SELECT 1{}", ")".repeat(300))
    );
    let err = parse_err(&sql);
    assert!(err.is_recursion_limit(), "{err}");
}
