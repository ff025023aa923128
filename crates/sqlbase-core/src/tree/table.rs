//! Table elements and properties used by DDL statements.

use serde::Serialize;

use super::{ColumnAliases, Expression, Identifier, QualifiedName, StringLiteral, Type};
use crate::lexer::Span;

/// `name = value` inside a `WITH (...)` property list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// An element of a `CREATE TABLE` column list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TableElement {
    Constraint(ConstraintSpecification),
    Column(ColumnDefinition),
    Like(LikeClause),
}

/// `name type [NOT NULL] [COMMENT '...'] [WITH (...)]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnDefinition {
    pub name: Identifier,
    pub column_type: Type,
    pub not_null: bool,
    pub comment: Option<StringLiteral>,
    pub properties: Vec<Property>,
    pub span: Span,
}

/// Whether `LIKE` copies table properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LikeOption {
    Including,
    Excluding,
}

/// `LIKE table [INCLUDING|EXCLUDING PROPERTIES]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikeClause {
    pub table: QualifiedName,
    pub option: Option<LikeOption>,
    pub span: Span,
}

/// `UNIQUE` or `PRIMARY KEY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConstraintType {
    Unique,
    PrimaryKey,
}

/// A qualifier following a constraint's column list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConstraintQualifier {
    Enabled,
    Disabled,
    Rely,
    NotRely,
    Enforced,
    NotEnforced,
}

/// `[CONSTRAINT name] UNIQUE|PRIMARY KEY (columns) qualifiers...`
///
/// `name` is present for the named form only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintSpecification {
    pub name: Option<Identifier>,
    pub constraint_type: ConstraintType,
    pub columns: ColumnAliases,
    pub qualifiers: Vec<ConstraintQualifier>,
    pub span: Span,
}
