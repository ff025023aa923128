#![allow(dead_code)]

use sqlbase_core::tree::{
    BooleanExpression, Expression, PrimaryExpression, Query, QueryPrimary, QuerySpecification,
    QueryTerm, Statement, ValueExpression,
};
use sqlbase_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e}"))
        .statement
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_expr(sql: &str) -> Expression {
    Parser::new(sql)
        .parse_expression()
        .unwrap_or_else(|e| panic!("Failed to parse expression: {sql}\nError: {e}"))
        .expression
}

pub fn parse_query(sql: &str) -> Query {
    match parse(sql) {
        Statement::StatementDefault { query, .. } => *query,
        other => panic!("Expected a query, got {}", other.label()),
    }
}

pub fn parse_select(sql: &str) -> QuerySpecification {
    match parse_query(sql).body.term {
        QueryTerm::Default(QueryPrimary::Default(specification)) => *specification,
        other => panic!("Expected a query specification, got {}", other.label()),
    }
}

/// Unwraps an expression that is a bare value expression.
pub fn value(expression: &BooleanExpression) -> &ValueExpression {
    expression
        .as_value()
        .unwrap_or_else(|| panic!("Expected a value expression, got {}", expression.label()))
}

/// Returns the text of a column reference.
pub fn column(value: &ValueExpression) -> &str {
    match value.as_primary() {
        Some(PrimaryExpression::ColumnReference(identifier)) => &identifier.text,
        _ => panic!("Expected a column reference, got {}", value.label()),
    }
}
