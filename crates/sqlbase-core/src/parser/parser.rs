//! Parser state, entry points and the terminal rules.

use std::collections::HashMap;

use tracing::{debug, trace};

use super::classify::{is_identifier_token, IDENTIFIER_KINDS};
use super::error::{ParseError, ParseErrorKind};
use super::options::ParserOptions;
use crate::lexer::{Keyword, Lexer, Location, Span, Token, TokenKind};
use crate::tree::{
    BooleanValue, ColumnAliases, Identifier, IdentifierKind, IntervalField, Number, NumberKind,
    Property, QualifiedName, QuerySpecification, SingleStatement, StandaloneExpression, StandaloneRoutineBody,
    StringLiteral, Type,
};

/// One alternative of a rule, tried by [`Parser::first_match`].
pub(crate) type Alternative<T> = fn(&mut Parser) -> Result<T, ParseError>;

/// Cursor state captured before a speculative attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Mark {
    pos: usize,
    param_counter: usize,
}

impl Mark {
    /// Token index the mark points at.
    pub(crate) const fn pos(self) -> usize {
        self.pos
    }
}

/// SQL Parser.
///
/// Holds the default-channel tokens of one input and a cursor over them.
/// The cursor can be moved backwards, which is what speculative parsing
/// relies on.
#[derive(Debug, Clone)]
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    options: ParserOptions,
    /// Parameter counter for ? placeholders.
    param_counter: usize,
    /// Query specifications already parsed, keyed by start mark and depth,
    /// with the mark just past each one.
    specifications: HashMap<(Mark, usize), (QuerySpecification, Mark)>,
}

impl Parser {
    /// Creates a new parser for the given input.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self::from_tokens(Lexer::new(input).tokenize())
    }

    /// Creates a parser over an existing token sequence.
    ///
    /// Hidden-channel tokens are dropped, anything after the first EOF is
    /// ignored, and an EOF is appended if the sequence lacks one.
    #[must_use]
    pub fn from_tokens(tokens: impl IntoIterator<Item = Token>) -> Self {
        let mut kept = Vec::new();
        for token in tokens {
            if token.is_hidden() {
                continue;
            }
            let eof = token.is_eof();
            kept.push(token);
            if eof {
                break;
            }
        }
        if !kept.last().is_some_and(Token::is_eof) {
            let (offset, location) = kept
                .last()
                .map_or((0, Location::new(1, 1)), |last| (last.span.end, last.location));
            kept.push(Token::eof(offset, location));
        }
        Self {
            tokens: kept,
            pos: 0,
            depth: 0,
            options: ParserOptions::default(),
            param_counter: 0,
            specifications: HashMap::new(),
        }
    }

    /// Replaces the parser options.
    #[must_use]
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the options in effect.
    #[must_use]
    pub const fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Returns the default-channel tokens, ending with EOF.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Returns the index of the next token to be consumed.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Parses a complete statement followed by end of input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one statement.
    pub fn parse_statement(&mut self) -> Result<SingleStatement, ParseError> {
        self.reset();
        debug!(tokens = self.tokens.len(), "parsing statement");
        let start = self.start();
        let statement = self
            .statement()
            .and_then(|statement| self.expect_eof().map(|()| statement))
            .inspect_err(|err| debug!(%err, "statement rejected"))?;
        Ok(SingleStatement {
            statement,
            span: self.span_from(start),
        })
    }

    /// Parses a standalone expression followed by end of input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one expression.
    pub fn parse_expression(&mut self) -> Result<StandaloneExpression, ParseError> {
        self.reset();
        debug!(tokens = self.tokens.len(), "parsing expression");
        let start = self.start();
        let expression = self
            .expression()
            .and_then(|expression| self.expect_eof().map(|()| expression))
            .inspect_err(|err| debug!(%err, "expression rejected"))?;
        Ok(StandaloneExpression {
            expression,
            span: self.span_from(start),
        })
    }

    /// Parses a standalone routine body followed by end of input.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the input is not exactly one routine body.
    pub fn parse_routine_body(&mut self) -> Result<StandaloneRoutineBody, ParseError> {
        self.reset();
        debug!(tokens = self.tokens.len(), "parsing routine body");
        let start = self.start();
        let body = self
            .routine_body()
            .and_then(|body| self.expect_eof().map(|()| body))
            .inspect_err(|err| debug!(%err, "routine body rejected"))?;
        Ok(StandaloneRoutineBody {
            body,
            span: self.span_from(start),
        })
    }

    fn reset(&mut self) {
        self.pos = 0;
        self.depth = 0;
        self.param_counter = 0;
        self.specifications.clear();
    }

    // ===================================================================
    // Cursor
    // ===================================================================

    /// Returns the current token.
    pub(crate) fn peek(&self) -> &Token {
        self.peek_nth(0)
    }

    /// Returns the token `n` positions ahead, or EOF past the end.
    pub(crate) fn peek_nth(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.peek().kind
    }

    pub(crate) fn peek_nth_kind(&self, n: usize) -> TokenKind {
        self.peek_nth(n).kind
    }

    /// Consumes the current token and returns it. EOF is never consumed.
    pub(crate) fn advance(&mut self) -> Token {
        let token = self.peek().clone();
        if !token.is_eof() {
            self.pos += 1;
        }
        token
    }

    /// Checks if the current token matches the given kind.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        self.peek_kind() == kind
    }

    /// Checks if the current token is the given keyword.
    pub(crate) fn check_keyword(&self, keyword: Keyword) -> bool {
        self.check(TokenKind::Keyword(keyword))
    }

    /// Checks if the token `n` positions ahead is the given keyword.
    pub(crate) fn check_nth_keyword(&self, n: usize, keyword: Keyword) -> bool {
        self.peek_nth_kind(n) == TokenKind::Keyword(keyword)
    }

    /// Checks if the upcoming tokens spell the given keywords.
    pub(crate) fn check_keywords(&self, keywords: &[Keyword]) -> bool {
        keywords
            .iter()
            .enumerate()
            .all(|(n, keyword)| self.check_nth_keyword(n, *keyword))
    }

    /// Consumes the current token if it matches.
    pub(crate) fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes the current token if it is the given keyword.
    pub(crate) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(TokenKind::Keyword(keyword))
    }

    /// Consumes the keyword sequence if all of it is present, else nothing.
    pub(crate) fn eat_keywords(&mut self, keywords: &[Keyword]) -> bool {
        if self.check_keywords(keywords) {
            self.pos += keywords.len();
            true
        } else {
            false
        }
    }

    /// Expects the current token to be the given kind.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.mismatch([kind]))
        }
    }

    /// Expects the current token to be the given keyword.
    pub(crate) fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, ParseError> {
        self.expect(TokenKind::Keyword(keyword))
    }

    /// Expects each keyword in turn.
    pub(crate) fn expect_keywords(&mut self, keywords: &[Keyword]) -> Result<(), ParseError> {
        for keyword in keywords {
            self.expect_keyword(*keyword)?;
        }
        Ok(())
    }

    pub(crate) fn expect_eof(&self) -> Result<(), ParseError> {
        if self.check(TokenKind::Eof) {
            Ok(())
        } else {
            Err(self.mismatch([TokenKind::Eof]))
        }
    }

    /// Byte offset where the next node starts.
    pub(crate) fn start(&self) -> usize {
        self.peek().span.start
    }

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: usize) -> Span {
        let end = self
            .pos
            .checked_sub(1)
            .map_or(start, |last| self.tokens[last].span.end);
        Span::new(start, end.max(start))
    }

    // ===================================================================
    // Errors
    // ===================================================================

    pub(crate) fn error(
        &self,
        kind: ParseErrorKind,
        expected: impl IntoIterator<Item = TokenKind>,
    ) -> ParseError {
        ParseError::at(kind, self.pos, self.peek(), expected)
    }

    pub(crate) fn mismatch(&self, expected: impl IntoIterator<Item = TokenKind>) -> ParseError {
        self.error(ParseErrorKind::MismatchedInput, expected)
    }

    pub(crate) fn no_viable(
        &self,
        rule: &'static str,
        expected: impl IntoIterator<Item = TokenKind>,
    ) -> ParseError {
        self.error(ParseErrorKind::NoViableAlternative { rule }, expected)
    }

    // ===================================================================
    // Prediction
    // ===================================================================

    pub(crate) const fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            param_counter: self.param_counter,
        }
    }

    pub(crate) fn restore(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.param_counter = mark.param_counter;
    }

    /// Runs `parse` at most once per start position and depth.
    ///
    /// A parenthesized query inside an expression is tried both as a
    /// subquery and as a parenthesized operand; nesting those would
    /// otherwise reparse the inner query once per enclosing level.
    pub(crate) fn memoized_specification(
        &mut self,
        parse: fn(&mut Self) -> Result<QuerySpecification, ParseError>,
    ) -> Result<QuerySpecification, ParseError> {
        let key = (self.mark(), self.depth);
        if let Some((specification, end)) = self.specifications.get(&key) {
            let (specification, end) = (specification.clone(), *end);
            trace!(pos = self.pos, "reusing query specification");
            self.restore(end);
            return Ok(specification);
        }
        let specification = parse(self)?;
        self.specifications
            .insert(key, (specification.clone(), self.mark()));
        Ok(specification)
    }

    /// Runs `f`, restoring the cursor if it fails.
    pub(crate) fn speculate<T>(
        &mut self,
        rule: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let mark = self.mark();
        let result = f(self);
        if let Err(err) = &result {
            trace!(rule, from = mark.pos, failed_at = err.token_index, "backtracking");
            self.restore(mark);
        }
        result
    }

    /// Tries `first`, then `second`. If both fail the errors are merged.
    pub(crate) fn either<T>(
        &mut self,
        rule: &'static str,
        first: impl FnOnce(&mut Self) -> Result<T, ParseError>,
        second: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        match self.speculate(rule, first) {
            Ok(value) => Ok(value),
            Err(err) if err.is_recursion_limit() => Err(err),
            Err(first_err) => self.speculate(rule, second).map_err(|second_err| {
                if second_err.is_recursion_limit() {
                    second_err
                } else {
                    first_err.merge(second_err)
                }
            }),
        }
    }

    /// Runs `f` speculatively. An ordinary failure yields `None` with the
    /// cursor restored; hitting the recursion limit is still an error.
    pub(crate) fn maybe<T>(
        &mut self,
        rule: &'static str,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Option<T>, ParseError> {
        match self.speculate(rule, f) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_recursion_limit() => Err(err),
            Err(_) => Ok(None),
        }
    }

    /// Tries each alternative in order and commits to the first that
    /// succeeds. If none does, reports the error that got furthest.
    pub(crate) fn first_match<T>(
        &mut self,
        rule: &'static str,
        alternatives: &[Alternative<T>],
    ) -> Result<T, ParseError> {
        let mut furthest: Option<ParseError> = None;
        for alternative in alternatives {
            match self.speculate(rule, *alternative) {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recursion_limit() => return Err(err),
                Err(err) => {
                    furthest = Some(match furthest {
                        Some(previous) => previous.merge(err),
                        None => err,
                    });
                }
            }
        }
        Err(match furthest {
            Some(err) if err.token_index == self.pos => ParseError {
                kind: ParseErrorKind::NoViableAlternative { rule },
                ..err
            },
            Some(err) => err,
            None => self.no_viable(rule, None::<TokenKind>),
        })
    }

    /// Runs `f` one nesting level deeper.
    pub(crate) fn nested<T>(
        &mut self,
        f: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let limit = self.options.recursion_limit;
        if self.depth >= limit {
            return Err(self.error(
                ParseErrorKind::RecursionLimitExceeded { limit },
                None::<TokenKind>,
            ));
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Allocates the index of the next `?` placeholder.
    pub(crate) fn next_parameter(&mut self) -> usize {
        let index = self.param_counter;
        self.param_counter += 1;
        index
    }

    // ===================================================================
    // Terminal rules
    // ===================================================================

    /// Returns true if the current token can start an identifier.
    pub(crate) fn at_identifier(&self) -> bool {
        is_identifier_token(self.peek_kind())
    }

    /// Parses an identifier: any identifier token or non-reserved keyword.
    pub(crate) fn identifier(&mut self) -> Result<Identifier, ParseError> {
        let kind = match self.peek_kind() {
            TokenKind::Identifier => IdentifierKind::Unquoted,
            TokenKind::QuotedIdentifier => IdentifierKind::Quoted,
            TokenKind::BackquotedIdentifier => IdentifierKind::BackQuoted,
            TokenKind::DigitIdentifier => IdentifierKind::Digit,
            kind if is_identifier_token(kind) => IdentifierKind::Unquoted,
            _ => return Err(self.mismatch(IDENTIFIER_KINDS)),
        };
        let token = self.advance();
        Ok(Identifier {
            kind,
            text: token.text,
            span: token.span,
        })
    }

    /// Parses `identifier ('.' identifier)*`.
    pub(crate) fn qualified_name(&mut self) -> Result<QualifiedName, ParseError> {
        let start = self.start();
        let mut parts = vec![self.identifier()?];
        while self.check(TokenKind::Dot) && is_identifier_token(self.peek_nth_kind(1)) {
            self.advance();
            parts.push(self.identifier()?);
        }
        Ok(QualifiedName {
            parts,
            span: self.span_from(start),
        })
    }

    /// Parses a comma-separated list of at least one item.
    pub(crate) fn comma_separated<T>(
        &mut self,
        mut item: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![item(self)?];
        while self.eat(TokenKind::Comma) {
            items.push(item(self)?);
        }
        Ok(items)
    }

    /// Parses `'(' identifier (',' identifier)* ')'`.
    pub(crate) fn column_aliases(&mut self) -> Result<ColumnAliases, ParseError> {
        let start = self.start();
        self.expect(TokenKind::LeftParen)?;
        let names = self.comma_separated(Self::identifier)?;
        self.expect(TokenKind::RightParen)?;
        Ok(ColumnAliases {
            names,
            span: self.span_from(start),
        })
    }

    /// Parses a numeric literal.
    pub(crate) fn number(&mut self) -> Result<Number, ParseError> {
        let kind = match self.peek_kind() {
            TokenKind::DecimalValue => NumberKind::Decimal,
            TokenKind::DoubleValue => NumberKind::Double,
            TokenKind::IntegerValue => NumberKind::Integer,
            _ => {
                return Err(self.mismatch([
                    TokenKind::DecimalValue,
                    TokenKind::DoubleValue,
                    TokenKind::IntegerValue,
                ]))
            }
        };
        let token = self.advance();
        Ok(Number {
            kind,
            text: token.text,
            span: token.span,
        })
    }

    /// Parses an integer literal.
    pub(crate) fn integer(&mut self) -> Result<Number, ParseError> {
        let token = self.expect(TokenKind::IntegerValue)?;
        Ok(Number {
            kind: NumberKind::Integer,
            text: token.text,
            span: token.span,
        })
    }

    /// Parses a string literal, including `U&'...' UESCAPE '...'`.
    pub(crate) fn string(&mut self) -> Result<StringLiteral, ParseError> {
        let start = self.start();
        match self.peek_kind() {
            TokenKind::String => {
                let token = self.advance();
                Ok(StringLiteral::Basic {
                    text: token.text,
                    span: token.span,
                })
            }
            TokenKind::UnicodeString => {
                let token = self.advance();
                let uescape = if self.eat_keyword(Keyword::Uescape) {
                    Some(self.expect(TokenKind::String)?.text)
                } else {
                    None
                };
                Ok(StringLiteral::Unicode {
                    text: token.text,
                    uescape,
                    span: self.span_from(start),
                })
            }
            _ => Err(self.mismatch([TokenKind::String, TokenKind::UnicodeString])),
        }
    }

    /// Parses `TRUE` or `FALSE`.
    pub(crate) fn boolean_value(&mut self) -> Result<BooleanValue, ParseError> {
        let value = match self.peek_kind() {
            TokenKind::Keyword(Keyword::True) => true,
            TokenKind::Keyword(Keyword::False) => false,
            _ => {
                return Err(self.mismatch([
                    TokenKind::Keyword(Keyword::True),
                    TokenKind::Keyword(Keyword::False),
                ]))
            }
        };
        let token = self.advance();
        Ok(BooleanValue {
            value,
            span: token.span,
        })
    }

    pub(crate) fn interval_field(&mut self) -> Result<IntervalField, ParseError> {
        let field = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Year) => IntervalField::Year,
            TokenKind::Keyword(Keyword::Month) => IntervalField::Month,
            TokenKind::Keyword(Keyword::Day) => IntervalField::Day,
            TokenKind::Keyword(Keyword::Hour) => IntervalField::Hour,
            TokenKind::Keyword(Keyword::Minute) => IntervalField::Minute,
            TokenKind::Keyword(Keyword::Second) => IntervalField::Second,
            _ => {
                return Err(self.mismatch(
                    [
                        Keyword::Year,
                        Keyword::Month,
                        Keyword::Day,
                        Keyword::Hour,
                        Keyword::Minute,
                        Keyword::Second,
                    ]
                    .map(TokenKind::Keyword),
                ))
            }
        };
        self.advance();
        Ok(field)
    }

    /// Parses `'(' property (',' property)* ')'`.
    pub(crate) fn properties(&mut self) -> Result<Vec<Property>, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        let properties = self.comma_separated(|p| {
            let start = p.start();
            let name = p.identifier()?;
            p.expect(TokenKind::Eq)?;
            let value = p.expression()?;
            Ok(Property {
                name,
                value,
                span: p.span_from(start),
            })
        })?;
        self.expect(TokenKind::RightParen)?;
        Ok(properties)
    }

    /// Parses an optional `WITH properties` clause.
    pub(crate) fn with_properties(&mut self) -> Result<Vec<Property>, ParseError> {
        if self.eat_keyword(Keyword::With) {
            self.properties()
        } else {
            Ok(Vec::new())
        }
    }

    /// Parses an optional `COMMENT string` clause.
    pub(crate) fn comment(&mut self) -> Result<Option<StringLiteral>, ParseError> {
        if self.eat_keyword(Keyword::Comment) {
            self.string().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parses `'(' (type (',' type)*)? ')'`.
    pub(crate) fn types(&mut self) -> Result<Vec<Type>, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        if self.eat(TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        let types = self.comma_separated(Self::type_)?;
        self.expect(TokenKind::RightParen)?;
        Ok(types)
    }

    /// Consumes `IF EXISTS` if present.
    pub(crate) fn if_exists(&mut self) -> bool {
        self.eat_keywords(&[Keyword::If, Keyword::Exists])
    }

    /// Consumes `IF NOT EXISTS` if present.
    pub(crate) fn if_not_exists(&mut self) -> bool {
        self.eat_keywords(&[Keyword::If, Keyword::Not, Keyword::Exists])
    }
}
