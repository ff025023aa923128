//! Parser error types.

use std::collections::BTreeSet;

use crate::lexer::{Location, Span, Token, TokenKind};

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// No alternative of `rule` matches the input.
    #[error("no viable alternative for {rule}")]
    NoViableAlternative { rule: &'static str },
    /// A specific token was required and something else was found.
    #[error("mismatched input")]
    MismatchedInput,
    /// Nesting exceeded [`ParserOptions::recursion_limit`](super::ParserOptions).
    #[error("nesting deeper than {limit} levels")]
    RecursionLimitExceeded { limit: usize },
}

/// A syntax error.
///
/// Carries the offending token and the token kinds that would have been
/// accepted in its place.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {location}: {kind} at {}{}", quote_found(.found, .found_text), format_expected(.expected))]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Index of the offending token among the default-channel tokens.
    pub token_index: usize,
    pub span: Span,
    pub location: Location,
    pub found: TokenKind,
    pub found_text: String,
    pub expected: BTreeSet<TokenKind>,
}

impl ParseError {
    /// Creates an error located at `token`.
    #[must_use]
    pub fn at(
        kind: ParseErrorKind,
        token_index: usize,
        token: &Token,
        expected: impl IntoIterator<Item = TokenKind>,
    ) -> Self {
        Self {
            kind,
            token_index,
            span: token.span,
            location: token.location,
            found: token.kind,
            found_text: token.text.clone(),
            expected: expected.into_iter().collect(),
        }
    }

    /// Keeps whichever error got further into the input. At the same
    /// position the expected sets are merged.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        match self.token_index.cmp(&other.token_index) {
            core::cmp::Ordering::Less => other,
            core::cmp::Ordering::Greater => self,
            core::cmp::Ordering::Equal => {
                self.expected.extend(other.expected);
                self
            }
        }
    }

    /// Returns true if the error was caused by the nesting guard.
    #[must_use]
    pub const fn is_recursion_limit(&self) -> bool {
        matches!(self.kind, ParseErrorKind::RecursionLimitExceeded { .. })
    }
}

fn quote_found(found: &TokenKind, text: &str) -> String {
    if *found == TokenKind::Eof {
        found.to_string()
    } else {
        format!("'{text}'")
    }
}

fn format_expected(expected: &BTreeSet<TokenKind>) -> String {
    if expected.is_empty() {
        return String::new();
    }
    let items: Vec<String> = expected.iter().map(ToString::to_string).collect();
    format!(", expected one of {{{}}}", items.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Keyword;

    fn token(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text, Span::new(7, 7 + text.len()), Location::new(1, 8))
    }

    #[test]
    fn test_display_lists_expected_tokens() {
        let err = ParseError::at(
            ParseErrorKind::MismatchedInput,
            1,
            &token(TokenKind::Keyword(Keyword::From), "FROM"),
            [TokenKind::Identifier, TokenKind::LeftParen],
        );
        assert_eq!(
            err.to_string(),
            "line 1:8: mismatched input at 'FROM', expected one of {<identifier>, '('}"
        );
    }

    #[test]
    fn test_display_at_end_of_input() {
        let err = ParseError::at(
            ParseErrorKind::NoViableAlternative { rule: "statement" },
            0,
            &Token::eof(0, Location::new(1, 1)),
            None::<TokenKind>,
        );
        assert_eq!(
            err.to_string(),
            "line 1:1: no viable alternative for statement at <EOF>"
        );
    }

    #[test]
    fn test_merge_prefers_furthest() {
        let near = ParseError::at(
            ParseErrorKind::MismatchedInput,
            1,
            &token(TokenKind::Comma, ","),
            [TokenKind::RightParen],
        );
        let far = ParseError::at(
            ParseErrorKind::MismatchedInput,
            4,
            &token(TokenKind::Comma, ","),
            [TokenKind::Identifier],
        );
        assert_eq!(near.clone().merge(far.clone()), far);
        assert_eq!(far.clone().merge(near), far);
    }

    #[test]
    fn test_merge_unions_expected_at_same_position() {
        let a = ParseError::at(
            ParseErrorKind::MismatchedInput,
            2,
            &token(TokenKind::Comma, ","),
            [TokenKind::RightParen],
        );
        let b = ParseError::at(
            ParseErrorKind::MismatchedInput,
            2,
            &token(TokenKind::Comma, ","),
            [TokenKind::Identifier],
        );
        let merged = a.merge(b);
        assert!(merged.expected.contains(&TokenKind::RightParen));
        assert!(merged.expected.contains(&TokenKind::Identifier));
    }
}
