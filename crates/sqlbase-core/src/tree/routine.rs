//! SQL-invoked function definitions.

use serde::Serialize;

use super::{Expression, Identifier, Type};
use crate::lexer::Span;

/// `name type` in a function or type parameter list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SqlParameterDeclaration {
    pub name: Identifier,
    pub parameter_type: Type,
    pub span: Span,
}

/// `SQL` or an identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Language {
    Sql { span: Span },
    Named(Identifier),
}

/// `DETERMINISTIC` or `NOT DETERMINISTIC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Determinism {
    Deterministic,
    NotDeterministic,
}

/// Behavior on null input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NullCallClause {
    /// `RETURNS NULL ON NULL INPUT`
    ReturnsNullOnNullInput,
    /// `CALLED ON NULL INPUT`
    CalledOnNullInput,
}

/// A characteristic of `CREATE FUNCTION`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum RoutineCharacteristic {
    Language(Language),
    Determinism(Determinism),
    NullCall(NullCallClause),
}

/// A characteristic `ALTER FUNCTION` may change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AlterRoutineCharacteristic {
    NullCall(NullCallClause),
}

/// Function body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RoutineBody {
    /// `RETURN expression`
    Return(ReturnStatement),
    /// `EXTERNAL [NAME name]`
    External(ExternalBodyReference),
}

impl RoutineBody {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Return(statement) => statement.span,
            Self::External(reference) => reference.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    pub expression: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExternalBodyReference {
    /// The external routine name, if given.
    pub name: Option<Identifier>,
    pub span: Span,
}
