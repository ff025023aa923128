//! Type expressions.

use super::error::ParseError;
use super::parser::Parser;
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{BaseType, RowField, Type, TypeParameter};

impl Parser {
    /// Parses a type, including any trailing `ARRAY` suffixes.
    ///
    /// Each `ARRAY<..>`, `MAP<..>`, `ROW(..)` or parameter list is one
    /// nesting level.
    pub(crate) fn type_(&mut self) -> Result<Type, ParseError> {
        let start = self.start();
        let mut ty = self.type_base()?;
        while self.eat_keyword(Keyword::Array) {
            ty = Type::ArraySuffix {
                element: Box::new(ty),
                span: self.span_from(start),
            };
        }
        Ok(ty)
    }

    fn type_base(&mut self) -> Result<Type, ParseError> {
        let start = self.start();
        let next = self.peek_nth_kind(1);
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Array) if next == TokenKind::Lt => {
                self.advance();
                self.advance();
                let element = self.nested(Self::type_)?;
                self.expect(TokenKind::Gt)?;
                Ok(Type::Array {
                    element: Box::new(element),
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Map) if next == TokenKind::Lt => {
                self.advance();
                self.advance();
                let key = self.nested(Self::type_)?;
                self.expect(TokenKind::Comma)?;
                let value = self.nested(Self::type_)?;
                self.expect(TokenKind::Gt)?;
                Ok(Type::Map {
                    key: Box::new(key),
                    value: Box::new(value),
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Row) if next == TokenKind::LeftParen => {
                match self.maybe("type", Self::row_type)? {
                    Some(row) => Ok(row),
                    None => self.base_type(),
                }
            }
            TokenKind::Keyword(Keyword::Interval)
                if matches!(
                    next,
                    TokenKind::Keyword(
                        Keyword::Year
                            | Keyword::Month
                            | Keyword::Day
                            | Keyword::Hour
                            | Keyword::Minute
                            | Keyword::Second
                    )
                ) =>
            {
                self.advance();
                let from = self.interval_field()?;
                self.expect_keyword(Keyword::To)?;
                let to = self.interval_field()?;
                Ok(Type::Interval {
                    from,
                    to,
                    span: self.span_from(start),
                })
            }
            _ => self.base_type(),
        }
    }

    /// Parses `ROW '(' identifier type (',' identifier type)* ')'`.
    fn row_type(&mut self) -> Result<Type, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Row)?;
        self.expect(TokenKind::LeftParen)?;
        let fields = self.comma_separated(|p| {
            let field_start = p.start();
            let name = p.identifier()?;
            let field_type = p.nested(Self::type_)?;
            Ok(RowField {
                name,
                field_type,
                span: p.span_from(field_start),
            })
        })?;
        self.expect(TokenKind::RightParen)?;
        Ok(Type::Row {
            fields,
            span: self.span_from(start),
        })
    }

    /// Parses `baseType ('(' typeParameter (',' typeParameter)* ')')?`.
    fn base_type(&mut self) -> Result<Type, ParseError> {
        let start = self.start();
        let base = match self.peek_kind() {
            TokenKind::TimeWithTimeZone => BaseType::TimeWithTimeZone {
                span: self.advance().span,
            },
            TokenKind::TimestampWithTimeZone => BaseType::TimestampWithTimeZone {
                span: self.advance().span,
            },
            TokenKind::DoublePrecision => BaseType::DoublePrecision {
                span: self.advance().span,
            },
            _ => BaseType::Named(self.qualified_name()?),
        };
        let parameters = if self.eat(TokenKind::LeftParen) {
            let parameters = self.comma_separated(|p| {
                if p.check(TokenKind::IntegerValue) {
                    p.integer().map(TypeParameter::Integer)
                } else {
                    p.nested(Self::type_).map(TypeParameter::Type)
                }
            })?;
            self.expect(TokenKind::RightParen)?;
            parameters
        } else {
            Vec::new()
        };
        Ok(Type::Base {
            base,
            parameters,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_type(sql: &str) -> Type {
        let mut parser = Parser::new(sql);
        let ty = parser.type_().unwrap();
        parser.expect_eof().unwrap();
        ty
    }

    #[test]
    fn test_parameterized_type() {
        let ty = parse_type("DECIMAL(10, 2)");
        assert!(matches!(ty, Type::Base { ref parameters, .. } if parameters.len() == 2));
        assert_eq!(ty.to_string(), "DECIMAL(10, 2)");
    }

    #[test]
    fn test_array_forms_are_distinguished() {
        assert!(matches!(parse_type("ARRAY<INT>"), Type::Array { .. }));
        let ty = parse_type("INT ARRAY ARRAY");
        let Type::ArraySuffix { element, .. } = ty else {
            panic!("expected array suffix");
        };
        assert!(matches!(*element, Type::ArraySuffix { .. }));
    }

    #[test]
    fn test_nested_generic_types() {
        let ty = parse_type("MAP<VARCHAR, ARRAY<ROW(a BIGINT, b DOUBLE PRECISION)>>");
        assert_eq!(
            ty.to_string(),
            "MAP<VARCHAR, ARRAY<ROW(a BIGINT, b DOUBLE PRECISION)>>"
        );
    }

    #[test]
    fn test_each_nested_type_is_one_level() {
        let nested = |depth: usize| format!("{}INT{}", "ARRAY<".repeat(depth), ">".repeat(depth));
        let options = crate::parser::ParserOptions::new().with_recursion_limit(3);

        let mut parser = Parser::new(&nested(3)).with_options(options.clone());
        assert!(parser.type_().is_ok());
        let mut parser = Parser::new(&nested(4)).with_options(options);
        assert!(parser.type_().unwrap_err().is_recursion_limit());
    }

    #[test]
    fn test_compound_base_types() {
        assert!(matches!(
            parse_type("TIMESTAMP WITH TIME ZONE"),
            Type::Base {
                base: BaseType::TimestampWithTimeZone { .. },
                ..
            }
        ));
        assert!(matches!(
            parse_type("INTERVAL DAY TO SECOND"),
            Type::Interval { .. }
        ));
        assert!(matches!(
            parse_type("interval"),
            Type::Base {
                base: BaseType::Named(_),
                ..
            }
        ));
    }

    #[test]
    fn test_type_parameter_may_be_a_type() {
        let ty = parse_type("row(varchar)");
        assert!(matches!(
            ty,
            Type::Base { ref parameters, .. } if matches!(parameters[0], TypeParameter::Type(_))
        ));
    }
}
