//! Expression rules: boolean, predicate, value and primary expressions.

use super::classify::{comparison_operator, is_identifier_token, starts_query, EXPRESSION_START};
use super::error::ParseError;
use super::parser::Parser;
use super::precedence::{
    arithmetic_binding_power, logical_binding_power, token_to_arithmetic_op, token_to_logical_op,
    AT_TIME_ZONE_BP, NOT_BP, UNARY_BP,
};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{
    BooleanExpression, BoundType, ComparisonOperator, ComparisonQuantifier, ConstructorType,
    DateTimeFunction, Expression, Filter, FrameBound, FrameType, FunctionArguments, FunctionCall,
    Interval, NormalForm, NullTreatment, Over, Predicate, PrimaryExpression, SetQuantifier, Sign,
    TimeZoneSpecifier, ValueExpression, WhenClause, WindowFrame,
};

impl Parser {
    /// Parses an expression.
    pub(crate) fn expression(&mut self) -> Result<Expression, ParseError> {
        self.boolean_expression()
    }

    pub(crate) fn boolean_expression(&mut self) -> Result<BooleanExpression, ParseError> {
        self.boolean_expression_bp(0)
    }

    /// Precedence climbing over `NOT`, `AND` and `OR`.
    fn boolean_expression_bp(&mut self, min_bp: u8) -> Result<BooleanExpression, ParseError> {
        let start = self.start();
        let mut lhs = if self.eat_keyword(Keyword::Not) {
            let operand = self.nested(|p| p.boolean_expression_bp(NOT_BP))?;
            BooleanExpression::LogicalNot {
                operand: Box::new(operand),
                span: self.span_from(start),
            }
        } else {
            self.predicated()?
        };

        loop {
            let kind = self.peek_kind();
            let Some((l_bp, r_bp)) = logical_binding_power(kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(operator) = token_to_logical_op(kind) else {
                break;
            };
            self.advance();
            let rhs = self.boolean_expression_bp(r_bp)?;
            lhs = BooleanExpression::LogicalBinary {
                operator,
                left: Box::new(lhs),
                right: Box::new(rhs),
                span: self.span_from(start),
            };
        }

        Ok(lhs)
    }

    /// Parses `valueExpression predicate?`.
    fn predicated(&mut self) -> Result<BooleanExpression, ParseError> {
        let start = self.start();
        let value = self.value_expression()?;
        let predicate = self.predicate()?;
        Ok(BooleanExpression::Predicated {
            value: Box::new(value),
            predicate: predicate.map(Box::new),
            span: self.span_from(start),
        })
    }

    /// Parses the predicate that may follow a value expression.
    fn predicate(&mut self) -> Result<Option<Predicate>, ParseError> {
        let start = self.start();
        if let Some(operator) = comparison_operator(self.peek_kind()) {
            self.advance();
            return self.comparison(operator, start).map(Some);
        }

        let negated = self.check_keyword(Keyword::Not)
            && matches!(
                self.peek_nth_kind(1),
                TokenKind::Keyword(Keyword::Between | Keyword::In | Keyword::Like)
            );
        if negated {
            self.advance();
        }

        let predicate = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Between) => {
                self.advance();
                let lower = self.value_expression()?;
                self.expect_keyword(Keyword::And)?;
                let upper = self.value_expression()?;
                Predicate::Between {
                    negated,
                    lower: Box::new(lower),
                    upper: Box::new(upper),
                    span: self.span_from(start),
                }
            }
            TokenKind::Keyword(Keyword::In) => {
                self.advance();
                self.nested(|p| p.in_predicate(negated, start))?
            }
            TokenKind::Keyword(Keyword::Like) => {
                self.advance();
                let pattern = self.value_expression()?;
                let escape = if self.eat_keyword(Keyword::Escape) {
                    Some(Box::new(self.value_expression()?))
                } else {
                    None
                };
                Predicate::Like {
                    negated,
                    pattern: Box::new(pattern),
                    escape,
                    span: self.span_from(start),
                }
            }
            TokenKind::Keyword(Keyword::Is) => {
                self.advance();
                let negated = self.eat_keyword(Keyword::Not);
                if self.eat_keyword(Keyword::Null) {
                    Predicate::NullPredicate {
                        negated,
                        span: self.span_from(start),
                    }
                } else if self.eat_keyword(Keyword::Distinct) {
                    self.expect_keyword(Keyword::From)?;
                    let right = self.value_expression()?;
                    Predicate::DistinctFrom {
                        negated,
                        right: Box::new(right),
                        span: self.span_from(start),
                    }
                } else {
                    return Err(self.mismatch([
                        TokenKind::Keyword(Keyword::Null),
                        TokenKind::Keyword(Keyword::Distinct),
                    ]));
                }
            }
            _ => return Ok(None),
        };
        Ok(Some(predicate))
    }

    /// Parses the right side of a comparison. A quantified comparison is
    /// taken only when it covers more input than a plain one.
    fn comparison(
        &mut self,
        operator: ComparisonOperator,
        start: usize,
    ) -> Result<Predicate, ParseError> {
        let quantifier = match self.peek_kind() {
            TokenKind::Keyword(Keyword::All) => Some(ComparisonQuantifier::All),
            TokenKind::Keyword(Keyword::Some) => Some(ComparisonQuantifier::Some),
            TokenKind::Keyword(Keyword::Any) => Some(ComparisonQuantifier::Any),
            _ => None,
        };
        let quantified = match quantifier {
            Some(quantifier) if self.peek_nth_kind(1) == TokenKind::LeftParen => {
                let mark = self.mark();
                let parsed = self.maybe("quantifiedComparison", |p| {
                    p.advance();
                    p.expect(TokenKind::LeftParen)?;
                    let query = p.nested(Self::query)?;
                    p.expect(TokenKind::RightParen)?;
                    Ok(Predicate::QuantifiedComparison {
                        operator,
                        quantifier,
                        query: Box::new(query),
                        span: p.span_from(start),
                    })
                })?;
                let parsed = parsed.map(|predicate| (predicate, self.mark()));
                self.restore(mark);
                parsed
            }
            _ => None,
        };

        let plain = self.speculate("comparison", |p| p.value_expression());
        match (plain, quantified) {
            (Ok(_), Some((predicate, end))) if end.pos() > self.position() => {
                self.restore(end);
                Ok(predicate)
            }
            (Ok(right), _) => Ok(Predicate::Comparison {
                operator,
                right: Box::new(right),
                span: self.span_from(start),
            }),
            (Err(err), _) if err.is_recursion_limit() => Err(err),
            (Err(_), Some((predicate, end))) => {
                self.restore(end);
                Ok(predicate)
            }
            (Err(err), None) => Err(err),
        }
    }

    /// Parses the part of `IN` after the keyword.
    fn in_predicate(&mut self, negated: bool, start: usize) -> Result<Predicate, ParseError> {
        self.either(
            "predicate",
            |p| {
                p.expect(TokenKind::LeftParen)?;
                let values = p.comma_separated(Self::expression)?;
                p.expect(TokenKind::RightParen)?;
                Ok(Predicate::InList {
                    negated,
                    values,
                    span: p.span_from(start),
                })
            },
            |p| {
                p.expect(TokenKind::LeftParen)?;
                let query = p.query()?;
                p.expect(TokenKind::RightParen)?;
                Ok(Predicate::InSubquery {
                    negated,
                    query: Box::new(query),
                    span: p.span_from(start),
                })
            },
        )
    }

    /// Parses a value expression.
    pub(crate) fn value_expression(&mut self) -> Result<ValueExpression, ParseError> {
        self.value_expression_bp(0)
    }

    /// Precedence climbing over unary signs, `* / %`, `+ -`, `||` and the
    /// postfix `AT TIME ZONE`.
    fn value_expression_bp(&mut self, min_bp: u8) -> Result<ValueExpression, ParseError> {
        let start = self.start();
        let mut lhs = match self.peek_kind() {
            TokenKind::Plus | TokenKind::Minus => {
                let sign = if self.advance().kind == TokenKind::Minus {
                    Sign::Minus
                } else {
                    Sign::Plus
                };
                let operand = self.nested(|p| p.value_expression_bp(UNARY_BP))?;
                ValueExpression::ArithmeticUnary {
                    sign,
                    operand: Box::new(operand),
                    span: self.span_from(start),
                }
            }
            _ => ValueExpression::Default(self.primary_expression()?),
        };

        loop {
            if self.check_keywords(&[Keyword::At, Keyword::Time, Keyword::Zone]) {
                if AT_TIME_ZONE_BP < min_bp {
                    break;
                }
                self.eat_keywords(&[Keyword::At, Keyword::Time, Keyword::Zone]);
                let time_zone = self.time_zone_specifier()?;
                lhs = ValueExpression::AtTimeZone {
                    value: Box::new(lhs),
                    time_zone,
                    span: self.span_from(start),
                };
                continue;
            }

            let kind = self.peek_kind();
            let Some((l_bp, r_bp)) = arithmetic_binding_power(kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            self.advance();
            let rhs = self.value_expression_bp(r_bp)?;
            lhs = match token_to_arithmetic_op(kind) {
                Some(operator) => ValueExpression::ArithmeticBinary {
                    operator,
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                    span: self.span_from(start),
                },
                None => ValueExpression::Concatenation {
                    left: Box::new(lhs),
                    right: Box::new(rhs),
                    span: self.span_from(start),
                },
            };
        }

        Ok(lhs)
    }

    /// Parses what follows `AT TIME ZONE`.
    fn time_zone_specifier(&mut self) -> Result<TimeZoneSpecifier, ParseError> {
        if self.check_keyword(Keyword::Interval) {
            self.interval().map(TimeZoneSpecifier::Interval)
        } else {
            self.string().map(TimeZoneSpecifier::String)
        }
    }

    /// Parses `INTERVAL sign? string from (TO to)?`.
    pub(crate) fn interval(&mut self) -> Result<Interval, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Interval)?;
        let sign = match self.peek_kind() {
            TokenKind::Plus => Some(Sign::Plus),
            TokenKind::Minus => Some(Sign::Minus),
            _ => None,
        };
        if sign.is_some() {
            self.advance();
        }
        let value = self.string()?;
        let from = self.interval_field()?;
        let to = if self.eat_keyword(Keyword::To) {
            Some(self.interval_field()?)
        } else {
            None
        };
        Ok(Interval {
            sign,
            value,
            from,
            to,
            span: self.span_from(start),
        })
    }

    /// Parses a primary expression followed by any `[index]` or `.field`
    /// suffixes.
    ///
    /// Literals and plain column references take no nesting level; every
    /// construct that can contain another expression takes one.
    pub(crate) fn primary_expression(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        let mut base = self.primary_base()?;
        loop {
            if self.eat(TokenKind::LeftBracket) {
                let index = self.nested(Self::value_expression)?;
                self.expect(TokenKind::RightBracket)?;
                base = PrimaryExpression::Subscript {
                    value: Box::new(base),
                    index: Box::new(index),
                    span: self.span_from(start),
                };
            } else if self.check(TokenKind::Dot) && is_identifier_token(self.peek_nth_kind(1)) {
                self.advance();
                let field = self.identifier()?;
                base = PrimaryExpression::Dereference {
                    base: Box::new(base),
                    field,
                    span: self.span_from(start),
                };
            } else {
                break;
            }
        }
        Ok(base)
    }

    fn primary_base(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Null) => {
                let token = self.advance();
                Ok(PrimaryExpression::NullLiteral { span: token.span })
            }
            TokenKind::IntegerValue | TokenKind::DecimalValue | TokenKind::DoubleValue => {
                self.number().map(PrimaryExpression::NumericLiteral)
            }
            TokenKind::Keyword(Keyword::True | Keyword::False) => {
                self.boolean_value().map(PrimaryExpression::BooleanLiteral)
            }
            TokenKind::String | TokenKind::UnicodeString => {
                self.string().map(PrimaryExpression::StringLiteral)
            }
            TokenKind::BinaryLiteral => {
                let token = self.advance();
                Ok(PrimaryExpression::BinaryLiteral {
                    text: token.text,
                    span: token.span,
                })
            }
            TokenKind::Question => {
                let token = self.advance();
                Ok(PrimaryExpression::Parameter {
                    index: self.next_parameter(),
                    span: token.span,
                })
            }
            TokenKind::DoublePrecision => {
                let token = self.advance();
                let value = self.string()?;
                Ok(PrimaryExpression::TypeConstructor {
                    type_name: ConstructorType::DoublePrecision { span: token.span },
                    value,
                    span: self.span_from(start),
                })
            }
            TokenKind::LeftParen => self.nested(Self::parenthesized_primary),
            TokenKind::Keyword(Keyword::Exists) => self.nested(|p| {
                p.advance();
                p.expect(TokenKind::LeftParen)?;
                let query = p.query()?;
                p.expect(TokenKind::RightParen)?;
                Ok(PrimaryExpression::Exists {
                    query: Box::new(query),
                    span: p.span_from(start),
                })
            }),
            TokenKind::Keyword(Keyword::Case) => self.nested(Self::case_expression),
            TokenKind::Keyword(Keyword::Cast) => self.nested(|p| p.cast(false)),
            TokenKind::Keyword(Keyword::CurrentDate) => {
                let token = self.advance();
                Ok(PrimaryExpression::SpecialDateTimeFunction {
                    name: DateTimeFunction::CurrentDate,
                    precision: None,
                    span: token.span,
                })
            }
            TokenKind::Keyword(
                keyword @ (Keyword::CurrentTime
                | Keyword::CurrentTimestamp
                | Keyword::Localtime
                | Keyword::Localtimestamp),
            ) => {
                self.advance();
                let name = match keyword {
                    Keyword::CurrentTime => DateTimeFunction::CurrentTime,
                    Keyword::CurrentTimestamp => DateTimeFunction::CurrentTimestamp,
                    Keyword::Localtime => DateTimeFunction::Localtime,
                    _ => DateTimeFunction::Localtimestamp,
                };
                let precision = if self.eat(TokenKind::LeftParen) {
                    let precision = self.integer()?;
                    self.expect(TokenKind::RightParen)?;
                    Some(precision)
                } else {
                    None
                };
                Ok(PrimaryExpression::SpecialDateTimeFunction {
                    name,
                    precision,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::CurrentUser) => {
                let token = self.advance();
                Ok(PrimaryExpression::CurrentUser { span: token.span })
            }
            TokenKind::Keyword(Keyword::Normalize) => self.nested(Self::normalize),
            TokenKind::Keyword(Keyword::Extract) => self.nested(|p| {
                p.advance();
                p.expect(TokenKind::LeftParen)?;
                let field = p.identifier()?;
                p.expect_keyword(Keyword::From)?;
                let value = p.value_expression()?;
                p.expect(TokenKind::RightParen)?;
                Ok(PrimaryExpression::Extract {
                    field,
                    value: Box::new(value),
                    span: p.span_from(start),
                })
            }),
            TokenKind::Keyword(Keyword::Grouping) => {
                self.advance();
                self.expect(TokenKind::LeftParen)?;
                let columns = if self.check(TokenKind::RightParen) {
                    Vec::new()
                } else {
                    self.comma_separated(Self::qualified_name)?
                };
                self.expect(TokenKind::RightParen)?;
                Ok(PrimaryExpression::GroupingOperation {
                    columns,
                    span: self.span_from(start),
                })
            }
            kind if is_identifier_token(kind) => self.identifier_led_primary(),
            _ => Err(self.no_viable("primaryExpression", EXPRESSION_START)),
        }
    }

    /// Primary expressions that begin with an identifier or a non-reserved
    /// keyword, tried in grammar order.
    fn identifier_led_primary(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();

        if self.check_keyword(Keyword::Interval) {
            if let Some(interval) = self.maybe("interval", Self::interval)? {
                return Ok(PrimaryExpression::IntervalLiteral(interval));
            }
        }

        if matches!(
            self.peek_nth_kind(1),
            TokenKind::String | TokenKind::UnicodeString
        ) {
            let type_name = self.identifier()?;
            let value = self.string()?;
            return Ok(PrimaryExpression::TypeConstructor {
                type_name: ConstructorType::Named(type_name),
                value,
                span: self.span_from(start),
            });
        }

        let opens_construct = self.peek_nth_kind(1) == TokenKind::Arrow
            || (self.check_keyword(Keyword::Array)
                && self.peek_nth_kind(1) == TokenKind::LeftBracket)
            || self.qualified_name_then_paren();
        if !opens_construct {
            return self.identifier().map(PrimaryExpression::ColumnReference);
        }
        self.nested(|p| p.identifier_construct(start))
    }

    /// Calls, constructors and lambdas that begin with an identifier.
    fn identifier_construct(&mut self, start: usize) -> Result<PrimaryExpression, ParseError> {
        let followed_by_paren = self.peek_nth_kind(1) == TokenKind::LeftParen;

        if self.check_keyword(Keyword::Position) && followed_by_paren {
            if let Some(position) = self.maybe("position", Self::position_call)? {
                return Ok(position);
            }
        }

        if self.check_keyword(Keyword::Row) && followed_by_paren {
            if let Some(row) = self.maybe("rowConstructor", Self::row_constructor)? {
                return Ok(row);
            }
        }

        if self.peek_nth_kind(1) == TokenKind::Arrow {
            let parameter = self.identifier()?;
            self.advance();
            let body = self.expression()?;
            return Ok(PrimaryExpression::Lambda {
                parameters: vec![parameter],
                body: Box::new(body),
                span: self.span_from(start),
            });
        }

        if self.check_keyword(Keyword::Array) && self.peek_nth_kind(1) == TokenKind::LeftBracket {
            self.advance();
            self.advance();
            let elements = if self.check(TokenKind::RightBracket) {
                Vec::new()
            } else {
                self.comma_separated(Self::expression)?
            };
            self.expect(TokenKind::RightBracket)?;
            return Ok(PrimaryExpression::ArrayConstructor {
                elements,
                span: self.span_from(start),
            });
        }

        if self.qualified_name_then_paren() {
            let special: Option<fn(&mut Self) -> Result<PrimaryExpression, ParseError>> =
                match self.peek_kind() {
                    TokenKind::Keyword(Keyword::Substring) => Some(Self::substring),
                    TokenKind::Keyword(Keyword::TryCast) => Some(Self::try_cast),
                    _ => None,
                };
            let call = |p: &mut Self| -> Result<PrimaryExpression, ParseError> {
                p.function_call()
                    .map(|call| PrimaryExpression::FunctionCall(Box::new(call)))
            };
            return match special {
                Some(special) => self.either("primaryExpression", call, special),
                None => call(self),
            };
        }

        self.identifier().map(PrimaryExpression::ColumnReference)
    }

    /// Returns true if the upcoming tokens are `qualifiedName '('`.
    fn qualified_name_then_paren(&self) -> bool {
        let mut n = 0;
        loop {
            if !is_identifier_token(self.peek_nth_kind(n)) {
                return false;
            }
            match self.peek_nth_kind(n + 1) {
                TokenKind::Dot => n += 2,
                TokenKind::LeftParen => return true,
                _ => return false,
            }
        }
    }

    /// Parses `POSITION '(' valueExpression IN valueExpression ')'`.
    fn position_call(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Position)?;
        self.expect(TokenKind::LeftParen)?;
        let needle = self.value_expression()?;
        self.expect_keyword(Keyword::In)?;
        let haystack = self.value_expression()?;
        self.expect(TokenKind::RightParen)?;
        Ok(PrimaryExpression::Position {
            needle: Box::new(needle),
            haystack: Box::new(haystack),
            span: self.span_from(start),
        })
    }

    /// Parses `ROW '(' expression (',' expression)* ')'`.
    fn row_constructor(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Row)?;
        self.expect(TokenKind::LeftParen)?;
        let items = self.comma_separated(Self::expression)?;
        self.expect(TokenKind::RightParen)?;
        Ok(PrimaryExpression::RowConstructor {
            row_keyword: true,
            items,
            span: self.span_from(start),
        })
    }

    /// Parses `SUBSTRING '(' value FROM value (FOR value)? ')'`.
    fn substring(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Substring)?;
        self.expect(TokenKind::LeftParen)?;
        let value = self.value_expression()?;
        self.expect_keyword(Keyword::From)?;
        let from = self.value_expression()?;
        let length = if self.eat_keyword(Keyword::For) {
            Some(Box::new(self.value_expression()?))
        } else {
            None
        };
        self.expect(TokenKind::RightParen)?;
        Ok(PrimaryExpression::Substring {
            value: Box::new(value),
            from: Box::new(from),
            length,
            span: self.span_from(start),
        })
    }

    /// Parses `NORMALIZE '(' value (',' normalForm)? ')'`.
    fn normalize(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Normalize)?;
        self.expect(TokenKind::LeftParen)?;
        let value = self.value_expression()?;
        let form = if self.eat(TokenKind::Comma) {
            let form = match self.peek_kind() {
                TokenKind::Keyword(Keyword::Nfd) => NormalForm::Nfd,
                TokenKind::Keyword(Keyword::Nfc) => NormalForm::Nfc,
                TokenKind::Keyword(Keyword::Nfkd) => NormalForm::Nfkd,
                TokenKind::Keyword(Keyword::Nfkc) => NormalForm::Nfkc,
                _ => {
                    return Err(self.mismatch(
                        [Keyword::Nfd, Keyword::Nfc, Keyword::Nfkd, Keyword::Nfkc]
                            .map(TokenKind::Keyword),
                    ))
                }
            };
            self.advance();
            Some(form)
        } else {
            None
        };
        self.expect(TokenKind::RightParen)?;
        Ok(PrimaryExpression::Normalize {
            value: Box::new(value),
            form,
            span: self.span_from(start),
        })
    }

    fn try_cast(&mut self) -> Result<PrimaryExpression, ParseError> {
        self.cast(true)
    }

    /// Parses `CAST` or `TRY_CAST`: `'(' expression AS type ')'`.
    fn cast(&mut self, try_cast: bool) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        self.expect_keyword(if try_cast {
            Keyword::TryCast
        } else {
            Keyword::Cast
        })?;
        self.expect(TokenKind::LeftParen)?;
        let expression = self.expression()?;
        self.expect_keyword(Keyword::As)?;
        let target = self.type_()?;
        self.expect(TokenKind::RightParen)?;
        Ok(PrimaryExpression::Cast {
            try_cast,
            expression: Box::new(expression),
            target: Box::new(target),
            span: self.span_from(start),
        })
    }

    /// Parses a simple or searched `CASE`.
    fn case_expression(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Case)?;
        let operand = if self.check_keyword(Keyword::When) {
            None
        } else {
            Some(self.value_expression()?)
        };

        let mut when_clauses = Vec::new();
        while self.check_keyword(Keyword::When) {
            let clause_start = self.start();
            self.advance();
            let condition = self.expression()?;
            self.expect_keyword(Keyword::Then)?;
            let result = self.expression()?;
            when_clauses.push(WhenClause {
                condition,
                result,
                span: self.span_from(clause_start),
            });
        }
        if when_clauses.is_empty() {
            return Err(self.mismatch([TokenKind::Keyword(Keyword::When)]));
        }

        let else_expression = if self.eat_keyword(Keyword::Else) {
            Some(Box::new(self.expression()?))
        } else {
            None
        };
        self.expect_keyword(Keyword::End)?;

        let span = self.span_from(start);
        Ok(match operand {
            Some(operand) => PrimaryExpression::SimpleCase {
                operand: Box::new(operand),
                when_clauses,
                else_expression,
                span,
            },
            None => PrimaryExpression::SearchedCase {
                when_clauses,
                else_expression,
                span,
            },
        })
    }

    /// Parses a primary expression starting with `(`: a lambda, a scalar
    /// subquery, a row constructor or a parenthesized expression.
    fn parenthesized_primary(&mut self) -> Result<PrimaryExpression, ParseError> {
        let start = self.start();

        if self.lambda_parameters_ahead() {
            self.advance();
            let parameters = if self.check(TokenKind::RightParen) {
                Vec::new()
            } else {
                self.comma_separated(Self::identifier)?
            };
            self.expect(TokenKind::RightParen)?;
            self.expect(TokenKind::Arrow)?;
            let body = self.expression()?;
            return Ok(PrimaryExpression::Lambda {
                parameters,
                body: Box::new(body),
                span: self.span_from(start),
            });
        }

        let expression_or_row = |p: &mut Self| -> Result<PrimaryExpression, ParseError> {
            p.expect(TokenKind::LeftParen)?;
            let first = p.expression()?;
            if p.check(TokenKind::Comma) {
                let mut items = vec![first];
                while p.eat(TokenKind::Comma) {
                    items.push(p.expression()?);
                }
                p.expect(TokenKind::RightParen)?;
                return Ok(PrimaryExpression::RowConstructor {
                    row_keyword: false,
                    items,
                    span: p.span_from(start),
                });
            }
            p.expect(TokenKind::RightParen)?;
            Ok(PrimaryExpression::Parenthesized {
                expression: Box::new(first),
                span: p.span_from(start),
            })
        };

        if !self.query_inside_parens() {
            return expression_or_row(self);
        }
        self.either(
            "primaryExpression",
            |p| {
                p.expect(TokenKind::LeftParen)?;
                let query = p.query()?;
                p.expect(TokenKind::RightParen)?;
                Ok(PrimaryExpression::SubqueryExpression {
                    query: Box::new(query),
                    span: p.span_from(start),
                })
            },
            expression_or_row,
        )
    }

    /// Returns true if the tokens ahead are `'(' identifiers? ')' '->'`.
    fn lambda_parameters_ahead(&self) -> bool {
        let mut n = 1;
        if self.peek_nth_kind(n) != TokenKind::RightParen {
            loop {
                if !is_identifier_token(self.peek_nth_kind(n)) {
                    return false;
                }
                n += 1;
                match self.peek_nth_kind(n) {
                    TokenKind::Comma => n += 1,
                    TokenKind::RightParen => break,
                    _ => return false,
                }
            }
        }
        self.peek_nth_kind(n + 1) == TokenKind::Arrow
    }

    /// Returns true if the first token after the leading `(`s can start a
    /// query.
    pub(crate) fn query_inside_parens(&self) -> bool {
        let mut n = 0;
        while self.peek_nth_kind(n) == TokenKind::LeftParen {
            n += 1;
        }
        n > 0 && starts_query(self.peek_nth_kind(n)) && self.peek_nth_kind(n) != TokenKind::LeftParen
    }

    /// Parses a function call, starting at its name.
    fn function_call(&mut self) -> Result<FunctionCall, ParseError> {
        let start = self.start();
        let name = self.qualified_name()?;
        self.expect(TokenKind::LeftParen)?;

        if self.check(TokenKind::Asterisk) && self.peek_nth_kind(1) == TokenKind::RightParen {
            let star = self.advance();
            self.advance();
            let filter = self.filter()?;
            let over = self.over()?;
            return Ok(FunctionCall {
                name,
                arguments: FunctionArguments::Star { span: star.span },
                filter,
                null_treatment: None,
                over,
                span: self.span_from(start),
            });
        }

        let (quantifier, arguments) = self.function_arguments()?;
        let order_by = if self.eat_keywords(&[Keyword::Order, Keyword::By]) {
            self.comma_separated(Self::sort_item)?
        } else {
            Vec::new()
        };
        self.expect(TokenKind::RightParen)?;

        let filter = self.filter()?;
        let null_treatment = self.null_treatment();
        let over = self.over()?;
        Ok(FunctionCall {
            name,
            arguments: FunctionArguments::List {
                quantifier,
                arguments,
                order_by,
            },
            filter,
            null_treatment,
            over,
            span: self.span_from(start),
        })
    }

    /// Parses `(setQuantifier? expression (',' expression)*)?`.
    fn function_arguments(
        &mut self,
    ) -> Result<(Option<SetQuantifier>, Vec<Expression>), ParseError> {
        if self.check(TokenKind::RightParen) || self.check_keywords(&[Keyword::Order, Keyword::By])
        {
            return Ok((None, Vec::new()));
        }
        if self.eat_keyword(Keyword::Distinct) {
            return Ok((
                Some(SetQuantifier::Distinct),
                self.comma_separated(Self::expression)?,
            ));
        }
        if self.check_keyword(Keyword::All) {
            let quantified = self.maybe("setQuantifier", |p| {
                p.advance();
                p.comma_separated(Self::expression)
            })?;
            if let Some(arguments) = quantified {
                return Ok((Some(SetQuantifier::All), arguments));
            }
        }
        Ok((None, self.comma_separated(Self::expression)?))
    }

    /// Parses `FILTER '(' WHERE booleanExpression ')'` if present.
    fn filter(&mut self) -> Result<Option<Filter>, ParseError> {
        if !(self.check_keyword(Keyword::Filter) && self.peek_nth_kind(1) == TokenKind::LeftParen) {
            return Ok(None);
        }
        let start = self.start();
        self.advance();
        self.advance();
        self.expect_keyword(Keyword::Where)?;
        let condition = self.boolean_expression()?;
        self.expect(TokenKind::RightParen)?;
        Ok(Some(Filter {
            condition,
            span: self.span_from(start),
        }))
    }

    /// Consumes `IGNORE NULLS` or `RESPECT NULLS` when a window follows.
    fn null_treatment(&mut self) -> Option<NullTreatment> {
        let treatment = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Ignore) => NullTreatment::Ignore,
            TokenKind::Keyword(Keyword::Respect) => NullTreatment::Respect,
            _ => return None,
        };
        let window_follows = self.check_nth_keyword(1, Keyword::Nulls)
            && self.check_nth_keyword(2, Keyword::Over)
            && self.peek_nth_kind(3) == TokenKind::LeftParen;
        if !window_follows {
            return None;
        }
        self.advance();
        self.advance();
        Some(treatment)
    }

    /// Parses an `OVER (...)` window specification if present.
    fn over(&mut self) -> Result<Option<Over>, ParseError> {
        if !(self.check_keyword(Keyword::Over) && self.peek_nth_kind(1) == TokenKind::LeftParen) {
            return Ok(None);
        }
        let start = self.start();
        self.advance();
        self.advance();
        let partition_by = if self.eat_keywords(&[Keyword::Partition, Keyword::By]) {
            self.comma_separated(Self::expression)?
        } else {
            Vec::new()
        };
        let order_by = if self.eat_keywords(&[Keyword::Order, Keyword::By]) {
            self.comma_separated(Self::sort_item)?
        } else {
            Vec::new()
        };
        let frame = self.window_frame()?;
        self.expect(TokenKind::RightParen)?;
        Ok(Some(Over {
            partition_by,
            order_by,
            frame,
            span: self.span_from(start),
        }))
    }

    fn window_frame(&mut self) -> Result<Option<WindowFrame>, ParseError> {
        let frame_type = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Range) => FrameType::Range,
            TokenKind::Keyword(Keyword::Rows) => FrameType::Rows,
            TokenKind::Keyword(Keyword::Groups) => FrameType::Groups,
            _ => return Ok(None),
        };
        let start = self.start();
        self.advance();
        let (frame_start, end) = if self.eat_keyword(Keyword::Between) {
            let frame_start = self.frame_bound()?;
            self.expect_keyword(Keyword::And)?;
            (frame_start, Some(self.frame_bound()?))
        } else {
            (self.frame_bound()?, None)
        };
        Ok(Some(WindowFrame {
            frame_type,
            start: frame_start,
            end,
            span: self.span_from(start),
        }))
    }

    fn frame_bound(&mut self) -> Result<FrameBound, ParseError> {
        let start = self.start();
        if self.check_keyword(Keyword::Unbounded) {
            if let Some(bound) = bound_type(self.peek_nth_kind(1)) {
                self.advance();
                self.advance();
                return Ok(FrameBound::Unbounded {
                    bound,
                    span: self.span_from(start),
                });
            }
        }
        if self.eat_keywords(&[Keyword::Current, Keyword::Row]) {
            return Ok(FrameBound::CurrentRow {
                span: self.span_from(start),
            });
        }
        let value = self.expression()?;
        let Some(bound) = bound_type(self.peek_kind()) else {
            return Err(self.mismatch(
                [Keyword::Preceding, Keyword::Following].map(TokenKind::Keyword),
            ));
        };
        self.advance();
        Ok(FrameBound::Bounded {
            value: Box::new(value),
            bound,
            span: self.span_from(start),
        })
    }
}

const fn bound_type(kind: TokenKind) -> Option<BoundType> {
    match kind {
        TokenKind::Keyword(Keyword::Preceding) => Some(BoundType::Preceding),
        TokenKind::Keyword(Keyword::Following) => Some(BoundType::Following),
        _ => None,
    }
}
