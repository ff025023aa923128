//! # sqlbase-core
//!
//! A parser for the SqlBase SQL dialect.
//!
//! This crate provides:
//! - A hand-written lexer that keeps whitespace and comments on a hidden
//!   channel
//! - A recursive descent parser with binding-power tables for the
//!   left-recursive rules and speculative parsing for rules whose
//!   alternatives share a prefix
//! - A concrete parse tree with one type per grammar rule
//!
//! ## Entry points
//!
//! Input is parsed as a statement, a standalone expression or a standalone
//! routine body. Each entry point requires the whole input to be consumed.
//!
//! ```rust
//! use sqlbase_core::tree::Statement;
//!
//! let parsed = sqlbase_core::parse_statement("SELECT a, b FROM t WHERE a > 1").unwrap();
//! assert!(matches!(parsed.statement, Statement::StatementDefault { .. }));
//! assert_eq!(parsed.statement.label(), "StatementDefault");
//!
//! let expr = sqlbase_core::parse_expression("1 + 2 * 3").unwrap();
//! assert_eq!(expr.expression.label(), "Predicated");
//! ```
//!
//! ## Errors
//!
//! Syntax errors carry the offending token and the set of tokens that
//! would have been accepted:
//!
//! ```rust
//! let err = sqlbase_core::parse_statement("SELECT * FROM").unwrap_err();
//! assert_eq!(err.found, sqlbase_core::TokenKind::Eof);
//! ```

pub mod lexer;
pub mod parser;
pub mod tree;

pub use lexer::{Keyword, Lexer, Token, TokenKind};
pub use parser::{ParseError, ParseErrorKind, Parser, ParserOptions};
pub use tree::{SingleStatement, StandaloneExpression, StandaloneRoutineBody, Statement};

/// Parses `sql` as a single statement with default options.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one statement.
pub fn parse_statement(sql: &str) -> Result<SingleStatement, ParseError> {
    Parser::new(sql).parse_statement()
}

/// Parses `sql` as a standalone expression with default options.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one expression.
pub fn parse_expression(sql: &str) -> Result<StandaloneExpression, ParseError> {
    Parser::new(sql).parse_expression()
}

/// Parses `sql` as a standalone routine body with default options.
///
/// # Errors
///
/// Returns a `ParseError` if the input is not exactly one routine body.
pub fn parse_routine_body(sql: &str) -> Result<StandaloneRoutineBody, ParseError> {
    Parser::new(sql).parse_routine_body()
}
