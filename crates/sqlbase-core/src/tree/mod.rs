//! Parse-tree types.
//!
//! One type per grammar rule. Rules with several alternatives are enums
//! whose variants carry the alternative's named parts. Leaves keep the raw
//! token text, and every node records the [`Span`](crate::lexer::Span) it
//! was parsed from. Nodes own their children; there are no parent links.

/// Returns the variant name of an enum value.
macro_rules! variant_label {
    ($value:expr; $($variant:ident),* $(,)?) => {
        match $value {
            $(Self::$variant { .. } => stringify!($variant),)*
        }
    };
}

mod access;
mod expression;
mod leaf;
mod query;
mod routine;
mod statement;
mod table;
mod types;

pub use access::{Grantor, Principal, Privilege, Privileges, RoleSelection};
pub use expression::{
    ArithmeticOperator, BooleanExpression, BoundType, ConstructorType, DateTimeFunction,
    Expression, Filter, FrameBound, FrameType, FunctionArguments, FunctionCall, Interval,
    LogicalOperator, Over, Predicate, PrimaryExpression, TimeZoneSpecifier, ValueExpression,
    WhenClause, WindowFrame,
};
pub use leaf::{
    BooleanValue, ComparisonOperator, ComparisonQuantifier, Identifier, IdentifierKind,
    IntervalField, NormalForm, NullTreatment, Number, NumberKind, QualifiedName, SetQuantifier,
    Sign, StringLiteral,
};
pub use query::{
    AliasedRelation, ColumnAliases, GroupBy, GroupingElement, GroupingSet, Join, JoinCriteria,
    JoinRelation, JoinType, Limit, NamedQuery, NullOrdering, Ordering, Query, QueryNoWith,
    QueryPrimary, QuerySpecification, QueryTerm, Relation, RelationPrimary, SampleType,
    SampledRelation, SelectItem, SetOperator, SortItem, TableSample, TableVersion,
    TableVersionType, With,
};
pub use routine::{
    AlterRoutineCharacteristic, Determinism, ExternalBodyReference, Language, NullCallClause,
    ReturnStatement, RoutineBody, RoutineCharacteristic, SqlParameterDeclaration,
};
pub use statement::{
    CallArgument, DropBehavior, ExplainFormat, ExplainOption, ExplainType, LevelOfIsolation,
    LikePattern, SingleStatement, StandaloneExpression, StandaloneRoutineBody, Statement,
    TransactionMode, TypeDefinition, UpdateAssignment, ViewSecurity,
};
pub use table::{
    ColumnDefinition, ConstraintQualifier, ConstraintSpecification, ConstraintType, LikeClause,
    LikeOption, Property, TableElement,
};
pub use types::{BaseType, RowField, Type, TypeParameter};
