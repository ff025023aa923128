//! Expression trees: boolean, predicate, value and primary expressions.

use serde::Serialize;

use super::{
    BooleanValue, ComparisonOperator, ComparisonQuantifier, Identifier, IntervalField, NormalForm,
    NullTreatment, Number, QualifiedName, Query, SetQuantifier, Sign, SortItem, StringLiteral,
    Type,
};
use crate::lexer::Span;

/// `expression: booleanExpression`.
pub type Expression = BooleanExpression;

/// Logical connective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LogicalOperator {
    And,
    Or,
}

/// A boolean expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum BooleanExpression {
    /// A value expression with an optional trailing predicate.
    Predicated {
        value: Box<ValueExpression>,
        predicate: Option<Box<Predicate>>,
        span: Span,
    },
    LogicalNot {
        operand: Box<BooleanExpression>,
        span: Span,
    },
    LogicalBinary {
        operator: LogicalOperator,
        left: Box<BooleanExpression>,
        right: Box<BooleanExpression>,
        span: Span,
    },
}

impl BooleanExpression {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Predicated { span, .. }
            | Self::LogicalNot { span, .. }
            | Self::LogicalBinary { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self; Predicated, LogicalNot, LogicalBinary)
    }

    /// Returns the value expression if this is a predicated expression
    /// without a predicate.
    #[must_use]
    pub fn as_value(&self) -> Option<&ValueExpression> {
        match self {
            Self::Predicated {
                value,
                predicate: None,
                ..
            } => Some(&**value),
            _ => None,
        }
    }
}

/// The predicate part of a predicated boolean expression. The left operand
/// is the enclosing [`BooleanExpression::Predicated`] value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Predicate {
    Comparison {
        operator: ComparisonOperator,
        right: Box<ValueExpression>,
        span: Span,
    },
    QuantifiedComparison {
        operator: ComparisonOperator,
        quantifier: ComparisonQuantifier,
        query: Box<Query>,
        span: Span,
    },
    Between {
        negated: bool,
        lower: Box<ValueExpression>,
        upper: Box<ValueExpression>,
        span: Span,
    },
    InList {
        negated: bool,
        values: Vec<Expression>,
        span: Span,
    },
    InSubquery {
        negated: bool,
        query: Box<Query>,
        span: Span,
    },
    Like {
        negated: bool,
        pattern: Box<ValueExpression>,
        escape: Option<Box<ValueExpression>>,
        span: Span,
    },
    /// `IS [NOT] NULL`
    NullPredicate { negated: bool, span: Span },
    /// `IS [NOT] DISTINCT FROM right`
    DistinctFrom {
        negated: bool,
        right: Box<ValueExpression>,
        span: Span,
    },
}

impl Predicate {
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Comparison { span, .. }
            | Self::QuantifiedComparison { span, .. }
            | Self::Between { span, .. }
            | Self::InList { span, .. }
            | Self::InSubquery { span, .. }
            | Self::Like { span, .. }
            | Self::NullPredicate { span, .. }
            | Self::DistinctFrom { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self;
            Comparison, QuantifiedComparison, Between, InList, InSubquery, Like,
            NullPredicate, DistinctFrom,
        )
    }
}

/// Binary arithmetic operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ArithmeticOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulus,
}

impl ArithmeticOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Modulus => "%",
        }
    }
}

/// An arithmetic or string-valued expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ValueExpression {
    Default(PrimaryExpression),
    /// `value AT TIME ZONE ...`
    AtTimeZone {
        value: Box<ValueExpression>,
        time_zone: TimeZoneSpecifier,
        span: Span,
    },
    ArithmeticUnary {
        sign: Sign,
        operand: Box<ValueExpression>,
        span: Span,
    },
    ArithmeticBinary {
        operator: ArithmeticOperator,
        left: Box<ValueExpression>,
        right: Box<ValueExpression>,
        span: Span,
    },
    /// `left || right`
    Concatenation {
        left: Box<ValueExpression>,
        right: Box<ValueExpression>,
        span: Span,
    },
}

impl ValueExpression {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Default(primary) => primary.span(),
            Self::AtTimeZone { span, .. }
            | Self::ArithmeticUnary { span, .. }
            | Self::ArithmeticBinary { span, .. }
            | Self::Concatenation { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self;
            Default, AtTimeZone, ArithmeticUnary, ArithmeticBinary, Concatenation,
        )
    }

    /// Returns the primary expression if no operator was applied.
    #[must_use]
    pub const fn as_primary(&self) -> Option<&PrimaryExpression> {
        match self {
            Self::Default(primary) => Some(primary),
            _ => None,
        }
    }
}

/// The zone operand of `AT TIME ZONE`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TimeZoneSpecifier {
    Interval(Interval),
    String(StringLiteral),
}

/// `INTERVAL [+|-] 'value' from [TO to]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interval {
    pub sign: Option<Sign>,
    pub value: StringLiteral,
    pub from: IntervalField,
    pub to: Option<IntervalField>,
    pub span: Span,
}

/// Type name of a type constructor such as `DATE '2001-08-22'`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ConstructorType {
    Named(Identifier),
    DoublePrecision { span: Span },
}

/// `CURRENT_DATE`, `CURRENT_TIME`, `CURRENT_TIMESTAMP`, `LOCALTIME` or
/// `LOCALTIMESTAMP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DateTimeFunction {
    CurrentDate,
    CurrentTime,
    CurrentTimestamp,
    Localtime,
    Localtimestamp,
}

/// A primary expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PrimaryExpression {
    NullLiteral {
        span: Span,
    },
    IntervalLiteral(Interval),
    TypeConstructor {
        type_name: ConstructorType,
        value: StringLiteral,
        span: Span,
    },
    NumericLiteral(Number),
    BooleanLiteral(BooleanValue),
    StringLiteral(StringLiteral),
    BinaryLiteral {
        text: String,
        span: Span,
    },
    /// `?`, numbered from zero in order of appearance.
    Parameter {
        index: usize,
        span: Span,
    },
    /// `POSITION(needle IN haystack)`
    Position {
        needle: Box<ValueExpression>,
        haystack: Box<ValueExpression>,
        span: Span,
    },
    /// `(a, b, ...)` or `ROW(a, ...)`.
    RowConstructor {
        row_keyword: bool,
        items: Vec<Expression>,
        span: Span,
    },
    FunctionCall(Box<FunctionCall>),
    Lambda {
        parameters: Vec<Identifier>,
        body: Box<Expression>,
        span: Span,
    },
    SubqueryExpression {
        query: Box<Query>,
        span: Span,
    },
    Exists {
        query: Box<Query>,
        span: Span,
    },
    SimpleCase {
        operand: Box<ValueExpression>,
        when_clauses: Vec<WhenClause>,
        else_expression: Option<Box<Expression>>,
        span: Span,
    },
    SearchedCase {
        when_clauses: Vec<WhenClause>,
        else_expression: Option<Box<Expression>>,
        span: Span,
    },
    /// `CAST(expression AS type)` or `TRY_CAST(...)`.
    Cast {
        try_cast: bool,
        expression: Box<Expression>,
        target: Box<Type>,
        span: Span,
    },
    ArrayConstructor {
        elements: Vec<Expression>,
        span: Span,
    },
    /// `value[index]`
    Subscript {
        value: Box<PrimaryExpression>,
        index: Box<ValueExpression>,
        span: Span,
    },
    ColumnReference(Identifier),
    /// `base.field`
    Dereference {
        base: Box<PrimaryExpression>,
        field: Identifier,
        span: Span,
    },
    SpecialDateTimeFunction {
        name: DateTimeFunction,
        precision: Option<Number>,
        span: Span,
    },
    CurrentUser {
        span: Span,
    },
    /// `SUBSTRING(value FROM start [FOR length])`
    Substring {
        value: Box<ValueExpression>,
        from: Box<ValueExpression>,
        length: Option<Box<ValueExpression>>,
        span: Span,
    },
    Normalize {
        value: Box<ValueExpression>,
        form: Option<NormalForm>,
        span: Span,
    },
    /// `EXTRACT(field FROM value)`
    Extract {
        field: Identifier,
        value: Box<ValueExpression>,
        span: Span,
    },
    Parenthesized {
        expression: Box<Expression>,
        span: Span,
    },
    /// `GROUPING(a, b, ...)`
    GroupingOperation {
        columns: Vec<QualifiedName>,
        span: Span,
    },
}

impl PrimaryExpression {
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::IntervalLiteral(interval) => interval.span,
            Self::NumericLiteral(number) => number.span,
            Self::BooleanLiteral(value) => value.span,
            Self::StringLiteral(string) => string.span(),
            Self::FunctionCall(call) => call.span,
            Self::ColumnReference(identifier) => identifier.span,
            Self::NullLiteral { span }
            | Self::TypeConstructor { span, .. }
            | Self::BinaryLiteral { span, .. }
            | Self::Parameter { span, .. }
            | Self::Position { span, .. }
            | Self::RowConstructor { span, .. }
            | Self::Lambda { span, .. }
            | Self::SubqueryExpression { span, .. }
            | Self::Exists { span, .. }
            | Self::SimpleCase { span, .. }
            | Self::SearchedCase { span, .. }
            | Self::Cast { span, .. }
            | Self::ArrayConstructor { span, .. }
            | Self::Subscript { span, .. }
            | Self::Dereference { span, .. }
            | Self::SpecialDateTimeFunction { span, .. }
            | Self::CurrentUser { span }
            | Self::Substring { span, .. }
            | Self::Normalize { span, .. }
            | Self::Extract { span, .. }
            | Self::Parenthesized { span, .. }
            | Self::GroupingOperation { span, .. } => *span,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self;
            NullLiteral, IntervalLiteral, TypeConstructor, NumericLiteral, BooleanLiteral,
            StringLiteral, BinaryLiteral, Parameter, Position, RowConstructor, FunctionCall,
            Lambda, SubqueryExpression, Exists, SimpleCase, SearchedCase, Cast,
            ArrayConstructor, Subscript, ColumnReference, Dereference, SpecialDateTimeFunction,
            CurrentUser, Substring, Normalize, Extract, Parenthesized, GroupingOperation,
        )
    }
}

/// A function invocation, with optional aggregate and window clauses.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionCall {
    pub name: QualifiedName,
    pub arguments: FunctionArguments,
    pub filter: Option<Filter>,
    pub null_treatment: Option<NullTreatment>,
    pub over: Option<Over>,
    pub span: Span,
}

/// The parenthesized argument part of a function call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FunctionArguments {
    /// `f(*)`
    Star { span: Span },
    /// `f([DISTINCT|ALL] a, b [ORDER BY ...])`
    List {
        quantifier: Option<SetQuantifier>,
        arguments: Vec<Expression>,
        order_by: Vec<SortItem>,
    },
}

/// `FILTER (WHERE condition)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Filter {
    pub condition: BooleanExpression,
    pub span: Span,
}

/// `OVER (PARTITION BY ... ORDER BY ... frame)`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Over {
    pub partition_by: Vec<Expression>,
    pub order_by: Vec<SortItem>,
    pub frame: Option<WindowFrame>,
    pub span: Span,
}

/// Window frame unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FrameType {
    Range,
    Rows,
    Groups,
}

/// `RANGE start` or `ROWS BETWEEN start AND end`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowFrame {
    pub frame_type: FrameType,
    pub start: FrameBound,
    pub end: Option<FrameBound>,
    pub span: Span,
}

/// Direction of a frame bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BoundType {
    Preceding,
    Following,
}

/// One end of a window frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FrameBound {
    Unbounded {
        bound: BoundType,
        span: Span,
    },
    CurrentRow {
        span: Span,
    },
    Bounded {
        value: Box<Expression>,
        bound: BoundType,
        span: Span,
    },
}

/// `WHEN condition THEN result`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WhenClause {
    pub condition: Expression,
    pub result: Expression,
    pub span: Span,
}
