//! SQL Parser
//!
//! A hand-written recursive descent parser for the SqlBase dialect.
//! Left-recursive rules are climbed with binding-power tables and rules
//! whose alternatives share a prefix are resolved by speculative parsing.

mod classify;
mod dcl;
mod ddl;
mod error;
mod expression;
mod options;
#[allow(clippy::module_inception)]
mod parser;
mod precedence;
mod query;
mod statement;
mod types;

pub use classify::{
    comparison_operator, continues_expression, is_identifier_token, is_non_reserved,
    is_reserved, starts_query, EXPRESSION_START, IDENTIFIER_KINDS,
};
pub use error::{ParseError, ParseErrorKind};
pub use options::{ParserOptions, DEFAULT_RECURSION_LIMIT};
pub use parser::Parser;
pub use precedence::{
    arithmetic_binding_power, logical_binding_power, set_operation_binding_power,
};
