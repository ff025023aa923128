//! Query trees: WITH, set operations, SELECT and relations.

use serde::Serialize;

use super::{
    BooleanExpression, Expression, Identifier, Number, QualifiedName, SetQuantifier,
    ValueExpression,
};
use crate::lexer::Span;

/// `[WITH ...] queryNoWith`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    pub with: Option<With>,
    pub body: QueryNoWith,
    pub span: Span,
}

/// `WITH [RECURSIVE] name AS (query), ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct With {
    pub recursive: bool,
    pub queries: Vec<NamedQuery>,
    pub span: Span,
}

/// A common table expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedQuery {
    pub name: Identifier,
    pub column_aliases: Option<ColumnAliases>,
    pub query: Box<Query>,
    pub span: Span,
}

/// A query term with trailing ORDER BY, OFFSET and LIMIT clauses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryNoWith {
    pub term: QueryTerm,
    pub order_by: Vec<SortItem>,
    pub offset: Option<Number>,
    pub limit: Option<Limit>,
    pub span: Span,
}

/// Row limit of a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Limit {
    /// `LIMIT n`
    Count(Number),
    /// `LIMIT ALL`
    All { span: Span },
    /// `FETCH FIRST n ROWS ONLY`
    FetchFirst { count: Number, span: Span },
}

/// Set operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SetOperator {
    Intersect,
    Union,
    Except,
}

/// A query term, combined by set operations.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryTerm {
    Default(QueryPrimary),
    SetOperation {
        operator: SetOperator,
        /// Absent when neither `ALL` nor `DISTINCT` was written.
        quantifier: Option<SetQuantifier>,
        left: Box<QueryTerm>,
        right: Box<QueryTerm>,
        span: Span,
    },
}

impl QueryTerm {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Default(primary) => primary.span(),
            Self::SetOperation { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self; Default, SetOperation)
    }
}

/// An operand of a set operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryPrimary {
    Default(Box<QuerySpecification>),
    /// `TABLE name`
    Table { name: QualifiedName, span: Span },
    /// `VALUES row, ...`
    InlineTable { rows: Vec<Expression>, span: Span },
    Subquery { query: Box<QueryNoWith>, span: Span },
}

impl QueryPrimary {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Default(specification) => specification.span,
            Self::Table { span, .. }
            | Self::InlineTable { span, .. }
            | Self::Subquery { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self; Default, Table, InlineTable, Subquery)
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Ordering {
    Asc,
    Desc,
}

/// Placement of nulls in a sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NullOrdering {
    First,
    Last,
}

/// `expression [ASC|DESC] [NULLS FIRST|LAST]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SortItem {
    pub expression: Expression,
    pub ordering: Option<Ordering>,
    pub null_ordering: Option<NullOrdering>,
    pub span: Span,
}

/// `SELECT ... FROM ... WHERE ... GROUP BY ... HAVING ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySpecification {
    pub quantifier: Option<SetQuantifier>,
    pub select_items: Vec<SelectItem>,
    pub from: Vec<Relation>,
    pub where_clause: Option<BooleanExpression>,
    pub group_by: Option<GroupBy>,
    pub having: Option<BooleanExpression>,
    pub span: Span,
}

/// A select list entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SelectItem {
    SelectSingle {
        expression: Expression,
        alias: Option<Identifier>,
        span: Span,
    },
    /// `*` or `qualifier.*`
    SelectAll {
        qualifier: Option<QualifiedName>,
        span: Span,
    },
}

impl SelectItem {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::SelectSingle { span, .. } | Self::SelectAll { span, .. } => *span,
        }
    }
}

/// `GROUP BY [ALL|DISTINCT] element, ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupBy {
    pub quantifier: Option<SetQuantifier>,
    pub elements: Vec<GroupingElement>,
    pub span: Span,
}

/// One element of a GROUP BY clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum GroupingElement {
    SingleGroupingSet(GroupingSet),
    Rollup {
        expressions: Vec<Expression>,
        span: Span,
    },
    Cube {
        expressions: Vec<Expression>,
        span: Span,
    },
    /// `GROUPING SETS (set, ...)`
    MultipleGroupingSets { sets: Vec<GroupingSet>, span: Span },
}

impl GroupingElement {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self; SingleGroupingSet, Rollup, Cube, MultipleGroupingSets)
    }
}

/// `(a, b)`, `()` or a single expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupingSet {
    pub parenthesized: bool,
    pub expressions: Vec<Expression>,
    pub span: Span,
}

/// A FROM item: a sampled relation, or a chain of joins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Relation {
    Join(Box<JoinRelation>),
    Default(SampledRelation),
}

impl Relation {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Join(join) => join.span,
            Self::Default(sampled) => sampled.span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self; Join, Default)
    }
}

/// `left <join> ...`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinRelation {
    pub left: Relation,
    pub join: Join,
    pub span: Span,
}

/// The right-hand part of a join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Join {
    /// `CROSS JOIN right`
    Cross { right: SampledRelation },
    /// `[type] JOIN right criteria`
    Qualified {
        join_type: JoinType,
        right: Relation,
        criteria: JoinCriteria,
    },
    /// `NATURAL [type] JOIN right`
    Natural {
        join_type: JoinType,
        right: SampledRelation,
    },
}

/// Join type; `INNER` when none is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum JoinType {
    Inner,
    Left,
    Right,
    Full,
}

/// `ON condition` or `USING (a, b)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum JoinCriteria {
    On(BooleanExpression),
    Using { columns: Vec<Identifier>, span: Span },
}

/// An aliased relation with an optional TABLESAMPLE clause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampledRelation {
    pub relation: AliasedRelation,
    pub sample: Option<TableSample>,
    pub span: Span,
}

/// Sampling method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SampleType {
    Bernoulli,
    System,
}

/// `TABLESAMPLE method (percentage)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableSample {
    pub sample_type: SampleType,
    pub percentage: Expression,
    pub span: Span,
}

/// `relation [AS] alias [(columns)]`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasedRelation {
    pub relation: RelationPrimary,
    pub alias: Option<Identifier>,
    pub column_aliases: Option<ColumnAliases>,
    pub span: Span,
}

/// `(a, b, ...)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnAliases {
    pub names: Vec<Identifier>,
    pub span: Span,
}

/// A relation that needs no join.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum RelationPrimary {
    TableName {
        name: QualifiedName,
        version: Option<TableVersion>,
        span: Span,
    },
    SubqueryRelation {
        query: Box<Query>,
        span: Span,
    },
    Unnest {
        expressions: Vec<Expression>,
        with_ordinality: bool,
        span: Span,
    },
    Lateral {
        query: Box<Query>,
        span: Span,
    },
    ParenthesizedRelation {
        relation: Box<Relation>,
        span: Span,
    },
}

impl RelationPrimary {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::TableName { span, .. }
            | Self::SubqueryRelation { span, .. }
            | Self::Unnest { span, .. }
            | Self::Lateral { span, .. }
            | Self::ParenthesizedRelation { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self; TableName, SubqueryRelation, Unnest, Lateral, ParenthesizedRelation)
    }
}

/// Kind of table version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TableVersionType {
    SystemTime,
    Timestamp,
    Version,
}

/// `FOR SYSTEM_TIME|TIMESTAMP|VERSION AS OF value`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableVersion {
    pub version_type: TableVersionType,
    pub value: ValueExpression,
    pub span: Span,
}
