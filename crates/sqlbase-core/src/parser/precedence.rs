//! Binding powers for the three precedence-climbing layers.
//!
//! Returns `(left_bp, right_bp)` where:
//! - Higher binding power = binds tighter
//! - Left associative: left_bp < right_bp

use crate::lexer::{Keyword, TokenKind};
use crate::tree::{ArithmeticOperator, LogicalOperator, SetOperator};

/// Left binding power of the postfix `AT TIME ZONE` operator.
pub const AT_TIME_ZONE_BP: u8 = 1;

/// Binding power of the operand of unary `+`/`-`.
pub const UNARY_BP: u8 = 8;

/// Binding power of the operand of `NOT`.
pub const NOT_BP: u8 = 5;

/// Returns the infix binding power of a value-expression operator.
#[must_use]
pub const fn arithmetic_binding_power(kind: TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Concat => Some((2, 3)),
        TokenKind::Plus | TokenKind::Minus => Some((4, 5)),
        TokenKind::Asterisk | TokenKind::Slash | TokenKind::Percent => Some((6, 7)),
        _ => None,
    }
}

/// Returns the infix binding power of a boolean connective.
#[must_use]
pub const fn logical_binding_power(kind: TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Or) => Some((1, 2)),
        TokenKind::Keyword(Keyword::And) => Some((3, 4)),
        _ => None,
    }
}

/// Returns the infix binding power of a set operator.
#[must_use]
pub const fn set_operation_binding_power(kind: TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::Union | Keyword::Except) => Some((1, 2)),
        TokenKind::Keyword(Keyword::Intersect) => Some((3, 4)),
        _ => None,
    }
}

/// Converts a token to an arithmetic operator. `||` is not one.
#[must_use]
pub const fn token_to_arithmetic_op(kind: TokenKind) -> Option<ArithmeticOperator> {
    match kind {
        TokenKind::Plus => Some(ArithmeticOperator::Add),
        TokenKind::Minus => Some(ArithmeticOperator::Subtract),
        TokenKind::Asterisk => Some(ArithmeticOperator::Multiply),
        TokenKind::Slash => Some(ArithmeticOperator::Divide),
        TokenKind::Percent => Some(ArithmeticOperator::Modulus),
        _ => None,
    }
}

/// Converts a token to a logical operator.
#[must_use]
pub const fn token_to_logical_op(kind: TokenKind) -> Option<LogicalOperator> {
    match kind {
        TokenKind::Keyword(Keyword::And) => Some(LogicalOperator::And),
        TokenKind::Keyword(Keyword::Or) => Some(LogicalOperator::Or),
        _ => None,
    }
}

/// Converts a token to a set operator.
#[must_use]
pub const fn token_to_set_operator(kind: TokenKind) -> Option<SetOperator> {
    match kind {
        TokenKind::Keyword(Keyword::Union) => Some(SetOperator::Union),
        TokenKind::Keyword(Keyword::Except) => Some(SetOperator::Except),
        TokenKind::Keyword(Keyword::Intersect) => Some(SetOperator::Intersect),
        _ => None,
    }
}
