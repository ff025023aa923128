//! SQL type expressions.

use core::fmt;

use serde::Serialize;

use super::{Identifier, IntervalField, Number, QualifiedName};
use crate::lexer::Span;

/// A type expression such as `DECIMAL(10, 2)`, `ARRAY<INT>` or
/// `ROW(a BIGINT, b VARCHAR) ARRAY`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Type {
    /// Postfix form: `element ARRAY`.
    ArraySuffix { element: Box<Type>, span: Span },
    /// Prefix form: `ARRAY<element>`.
    Array { element: Box<Type>, span: Span },
    /// `MAP<key, value>`
    Map {
        key: Box<Type>,
        value: Box<Type>,
        span: Span,
    },
    /// `ROW(name type, ...)`
    Row { fields: Vec<RowField>, span: Span },
    /// A base type with optional parameters.
    Base {
        base: BaseType,
        parameters: Vec<TypeParameter>,
        span: Span,
    },
    /// `INTERVAL from TO to`
    Interval {
        from: IntervalField,
        to: IntervalField,
        span: Span,
    },
}

impl Type {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::ArraySuffix { span, .. }
            | Self::Array { span, .. }
            | Self::Map { span, .. }
            | Self::Row { span, .. }
            | Self::Base { span, .. }
            | Self::Interval { span, .. } => *span,
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArraySuffix { element, .. } => write!(f, "{element} ARRAY"),
            Self::Array { element, .. } => write!(f, "ARRAY<{element}>"),
            Self::Map { key, value, .. } => write!(f, "MAP<{key}, {value}>"),
            Self::Row { fields, .. } => {
                f.write_str("ROW(")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{} {}", field.name, field.field_type)?;
                }
                f.write_str(")")
            }
            Self::Base {
                base, parameters, ..
            } => {
                write!(f, "{base}")?;
                if !parameters.is_empty() {
                    f.write_str("(")?;
                    for (i, parameter) in parameters.iter().enumerate() {
                        if i > 0 {
                            f.write_str(", ")?;
                        }
                        match parameter {
                            TypeParameter::Integer(number) => f.write_str(&number.text)?,
                            TypeParameter::Type(ty) => write!(f, "{ty}")?,
                        }
                    }
                    f.write_str(")")?;
                }
                Ok(())
            }
            Self::Interval { from, to, .. } => write!(f, "INTERVAL {from:?} TO {to:?}"),
        }
    }
}

/// A named field of a `ROW` type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowField {
    pub name: Identifier,
    pub field_type: Type,
    pub span: Span,
}

/// A parameter of a parameterized type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeParameter {
    Integer(Number),
    Type(Type),
}

/// The name part of a base type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BaseType {
    TimeWithTimeZone { span: Span },
    TimestampWithTimeZone { span: Span },
    DoublePrecision { span: Span },
    Named(QualifiedName),
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimeWithTimeZone { .. } => f.write_str("TIME WITH TIME ZONE"),
            Self::TimestampWithTimeZone { .. } => f.write_str("TIMESTAMP WITH TIME ZONE"),
            Self::DoublePrecision { .. } => f.write_str("DOUBLE PRECISION"),
            Self::Named(name) => write!(f, "{name}"),
        }
    }
}
