//! Statements and the three entry-point roots.

use serde::Serialize;

use super::{
    AlterRoutineCharacteristic, BooleanExpression, ColumnAliases, ColumnDefinition,
    ConstraintSpecification, Expression, Grantor, Identifier, Principal, Privileges,
    Property, QualifiedName, Query, QuerySpecification, RoleSelection, RoutineBody,
    RoutineCharacteristic, SqlParameterDeclaration, StringLiteral, TableElement, Type,
};
use crate::lexer::Span;

/// Root of [`crate::parser::Parser::parse_statement`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SingleStatement {
    pub statement: Statement,
    pub span: Span,
}

/// Root of [`crate::parser::Parser::parse_expression`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandaloneExpression {
    pub expression: Expression,
    pub span: Span,
}

/// Root of [`crate::parser::Parser::parse_routine_body`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandaloneRoutineBody {
    pub body: RoutineBody,
    pub span: Span,
}

/// `CASCADE` or `RESTRICT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DropBehavior {
    Cascade,
    Restrict,
}

/// `SECURITY DEFINER` or `SECURITY INVOKER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ViewSecurity {
    Definer,
    Invoker,
}

/// Body of `CREATE TYPE name AS ...`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TypeDefinition {
    /// `(name type, ...)`
    Fields(Vec<SqlParameterDeclaration>),
    /// A type alias.
    Type(Type),
}

/// `LIKE 'pattern' [ESCAPE 'c']` in SHOW statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikePattern {
    pub pattern: StringLiteral,
    pub escape: Option<StringLiteral>,
    pub span: Span,
}

/// `column = value` in `UPDATE ... SET`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateAssignment {
    pub column: Identifier,
    pub value: Expression,
    pub span: Span,
}

/// An argument of `CALL`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CallArgument {
    Positional(Expression),
    /// `name => value`
    Named {
        name: Identifier,
        value: Expression,
        span: Span,
    },
}

/// Output format of `EXPLAIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExplainFormat {
    Text,
    Graphviz,
    Json,
}

/// Plan type of `EXPLAIN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExplainType {
    Logical,
    Distributed,
    Validate,
    Io,
}

/// An option in `EXPLAIN (...)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExplainOption {
    Format(ExplainFormat),
    Type(ExplainType),
}

/// Transaction isolation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LevelOfIsolation {
    ReadUncommitted,
    ReadCommitted,
    RepeatableRead,
    Serializable,
}

/// An option of `START TRANSACTION`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransactionMode {
    IsolationLevel(LevelOfIsolation),
    /// `READ ONLY` when `read_only` is set, `READ WRITE` otherwise.
    AccessMode { read_only: bool },
}

/// A statement.
///
/// `DESCRIBE t`, `DESC t` and `SHOW COLUMNS FROM t` all produce
/// [`Statement::ShowColumns`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Statement {
    /// A query used as a statement.
    StatementDefault { query: Box<Query>, span: Span },
    /// `USE [catalog.]schema`
    Use {
        catalog: Option<Identifier>,
        schema: Identifier,
        span: Span,
    },
    CreateSchema {
        if_not_exists: bool,
        name: QualifiedName,
        properties: Vec<Property>,
        span: Span,
    },
    DropSchema {
        if_exists: bool,
        name: QualifiedName,
        behavior: Option<DropBehavior>,
        span: Span,
    },
    /// `ALTER SCHEMA name RENAME TO new_name`
    RenameSchema {
        name: QualifiedName,
        new_name: Identifier,
        span: Span,
    },
    CreateTableAsSelect {
        if_not_exists: bool,
        name: QualifiedName,
        column_aliases: Option<ColumnAliases>,
        comment: Option<StringLiteral>,
        properties: Vec<Property>,
        query: Box<Query>,
        /// `Some(true)` for `WITH DATA`, `Some(false)` for `WITH NO DATA`.
        with_data: Option<bool>,
        span: Span,
    },
    CreateTable {
        if_not_exists: bool,
        name: QualifiedName,
        elements: Vec<TableElement>,
        comment: Option<StringLiteral>,
        properties: Vec<Property>,
        span: Span,
    },
    DropTable {
        if_exists: bool,
        name: QualifiedName,
        span: Span,
    },
    InsertInto {
        table: QualifiedName,
        columns: Option<ColumnAliases>,
        query: Box<Query>,
        span: Span,
    },
    Delete {
        table: QualifiedName,
        where_clause: Option<BooleanExpression>,
        span: Span,
    },
    TruncateTable { table: QualifiedName, span: Span },
    RenameTable {
        if_exists: bool,
        from: QualifiedName,
        to: QualifiedName,
        span: Span,
    },
    RenameColumn {
        if_exists: bool,
        table: QualifiedName,
        column_if_exists: bool,
        from: Identifier,
        to: Identifier,
        span: Span,
    },
    DropColumn {
        if_exists: bool,
        table: QualifiedName,
        column_if_exists: bool,
        column: QualifiedName,
        span: Span,
    },
    AddColumn {
        if_exists: bool,
        table: QualifiedName,
        column_if_not_exists: bool,
        column: ColumnDefinition,
        span: Span,
    },
    AddConstraint {
        if_exists: bool,
        table: QualifiedName,
        constraint: ConstraintSpecification,
        span: Span,
    },
    DropConstraint {
        if_exists: bool,
        table: QualifiedName,
        constraint_if_exists: bool,
        name: Identifier,
        span: Span,
    },
    AlterColumnSetNotNull {
        if_exists: bool,
        table: QualifiedName,
        column: Identifier,
        span: Span,
    },
    AlterColumnDropNotNull {
        if_exists: bool,
        table: QualifiedName,
        column: Identifier,
        span: Span,
    },
    SetTableProperties {
        if_exists: bool,
        table: QualifiedName,
        properties: Vec<Property>,
        span: Span,
    },
    Analyze {
        table: QualifiedName,
        properties: Vec<Property>,
        span: Span,
    },
    CreateType {
        name: QualifiedName,
        definition: TypeDefinition,
        span: Span,
    },
    CreateView {
        replace: bool,
        name: QualifiedName,
        security: Option<ViewSecurity>,
        query: Box<Query>,
        span: Span,
    },
    RenameView {
        if_exists: bool,
        from: QualifiedName,
        to: QualifiedName,
        span: Span,
    },
    DropView {
        if_exists: bool,
        name: QualifiedName,
        span: Span,
    },
    CreateMaterializedView {
        if_not_exists: bool,
        name: QualifiedName,
        comment: Option<StringLiteral>,
        properties: Vec<Property>,
        query: Box<Query>,
        span: Span,
    },
    DropMaterializedView {
        if_exists: bool,
        name: QualifiedName,
        span: Span,
    },
    RefreshMaterializedView {
        name: QualifiedName,
        where_clause: BooleanExpression,
        span: Span,
    },
    CreateFunction {
        replace: bool,
        temporary: bool,
        name: QualifiedName,
        parameters: Vec<SqlParameterDeclaration>,
        return_type: Type,
        comment: Option<StringLiteral>,
        characteristics: Vec<RoutineCharacteristic>,
        body: RoutineBody,
        span: Span,
    },
    AlterFunction {
        name: QualifiedName,
        types: Option<Vec<Type>>,
        characteristics: Vec<AlterRoutineCharacteristic>,
        span: Span,
    },
    DropFunction {
        temporary: bool,
        if_exists: bool,
        name: QualifiedName,
        types: Option<Vec<Type>>,
        span: Span,
    },
    Call {
        name: QualifiedName,
        arguments: Vec<CallArgument>,
        span: Span,
    },
    CreateRole {
        name: Identifier,
        admin: Option<Grantor>,
        span: Span,
    },
    DropRole { name: Identifier, span: Span },
    GrantRoles {
        roles: Vec<Identifier>,
        grantees: Vec<Principal>,
        with_admin_option: bool,
        grantor: Option<Grantor>,
        span: Span,
    },
    RevokeRoles {
        admin_option_for: bool,
        roles: Vec<Identifier>,
        grantees: Vec<Principal>,
        grantor: Option<Grantor>,
        span: Span,
    },
    SetRole {
        role: RoleSelection,
        catalog: Option<Identifier>,
        span: Span,
    },
    Grant {
        privileges: Privileges,
        table: QualifiedName,
        grantee: Principal,
        with_grant_option: bool,
        span: Span,
    },
    Revoke {
        grant_option_for: bool,
        privileges: Privileges,
        table: QualifiedName,
        grantee: Principal,
        span: Span,
    },
    ShowGrants {
        table: Option<QualifiedName>,
        span: Span,
    },
    Explain {
        analyze: bool,
        verbose: bool,
        options: Vec<ExplainOption>,
        statement: Box<Statement>,
        span: Span,
    },
    ShowCreateTable { name: QualifiedName, span: Span },
    ShowCreateView { name: QualifiedName, span: Span },
    ShowCreateMaterializedView { name: QualifiedName, span: Span },
    ShowCreateFunction {
        name: QualifiedName,
        types: Option<Vec<Type>>,
        span: Span,
    },
    ShowTables {
        schema: Option<QualifiedName>,
        like: Option<LikePattern>,
        span: Span,
    },
    ShowSchemas {
        catalog: Option<Identifier>,
        like: Option<LikePattern>,
        span: Span,
    },
    ShowCatalogs {
        like: Option<LikePattern>,
        span: Span,
    },
    ShowColumns { table: QualifiedName, span: Span },
    ShowStats { table: QualifiedName, span: Span },
    ShowStatsForQuery {
        query: Box<QuerySpecification>,
        span: Span,
    },
    ShowRoles {
        current: bool,
        catalog: Option<Identifier>,
        span: Span,
    },
    ShowRoleGrants {
        catalog: Option<Identifier>,
        span: Span,
    },
    ShowFunctions {
        like: Option<LikePattern>,
        span: Span,
    },
    ShowSession {
        like: Option<LikePattern>,
        span: Span,
    },
    SetSession {
        name: QualifiedName,
        value: Expression,
        span: Span,
    },
    ResetSession { name: QualifiedName, span: Span },
    StartTransaction {
        modes: Vec<TransactionMode>,
        span: Span,
    },
    Commit { span: Span },
    Rollback { span: Span },
    Prepare {
        name: Identifier,
        statement: Box<Statement>,
        span: Span,
    },
    Deallocate { name: Identifier, span: Span },
    Execute {
        name: Identifier,
        parameters: Vec<Expression>,
        span: Span,
    },
    DescribeInput { name: Identifier, span: Span },
    DescribeOutput { name: Identifier, span: Span },
    Update {
        table: QualifiedName,
        assignments: Vec<UpdateAssignment>,
        where_clause: Option<BooleanExpression>,
        span: Span,
    },
}

impl Statement {
    /// Returns the source span of the statement.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::StatementDefault { span, .. }
            | Self::Use { span, .. }
            | Self::CreateSchema { span, .. }
            | Self::DropSchema { span, .. }
            | Self::RenameSchema { span, .. }
            | Self::CreateTableAsSelect { span, .. }
            | Self::CreateTable { span, .. }
            | Self::DropTable { span, .. }
            | Self::InsertInto { span, .. }
            | Self::Delete { span, .. }
            | Self::TruncateTable { span, .. }
            | Self::RenameTable { span, .. }
            | Self::RenameColumn { span, .. }
            | Self::DropColumn { span, .. }
            | Self::AddColumn { span, .. }
            | Self::AddConstraint { span, .. }
            | Self::DropConstraint { span, .. }
            | Self::AlterColumnSetNotNull { span, .. }
            | Self::AlterColumnDropNotNull { span, .. }
            | Self::SetTableProperties { span, .. }
            | Self::Analyze { span, .. }
            | Self::CreateType { span, .. }
            | Self::CreateView { span, .. }
            | Self::RenameView { span, .. }
            | Self::DropView { span, .. }
            | Self::CreateMaterializedView { span, .. }
            | Self::DropMaterializedView { span, .. }
            | Self::RefreshMaterializedView { span, .. }
            | Self::CreateFunction { span, .. }
            | Self::AlterFunction { span, .. }
            | Self::DropFunction { span, .. }
            | Self::Call { span, .. }
            | Self::CreateRole { span, .. }
            | Self::DropRole { span, .. }
            | Self::GrantRoles { span, .. }
            | Self::RevokeRoles { span, .. }
            | Self::SetRole { span, .. }
            | Self::Grant { span, .. }
            | Self::Revoke { span, .. }
            | Self::ShowGrants { span, .. }
            | Self::Explain { span, .. }
            | Self::ShowCreateTable { span, .. }
            | Self::ShowCreateView { span, .. }
            | Self::ShowCreateMaterializedView { span, .. }
            | Self::ShowCreateFunction { span, .. }
            | Self::ShowTables { span, .. }
            | Self::ShowSchemas { span, .. }
            | Self::ShowCatalogs { span, .. }
            | Self::ShowColumns { span, .. }
            | Self::ShowStats { span, .. }
            | Self::ShowStatsForQuery { span, .. }
            | Self::ShowRoles { span, .. }
            | Self::ShowRoleGrants { span, .. }
            | Self::ShowFunctions { span, .. }
            | Self::ShowSession { span, .. }
            | Self::SetSession { span, .. }
            | Self::ResetSession { span, .. }
            | Self::StartTransaction { span, .. }
            | Self::Commit { span }
            | Self::Rollback { span }
            | Self::Prepare { span, .. }
            | Self::Deallocate { span, .. }
            | Self::Execute { span, .. }
            | Self::DescribeInput { span, .. }
            | Self::DescribeOutput { span, .. }
            | Self::Update { span, .. } => *span,
        }
    }

    /// Returns the name of the statement alternative, e.g. `"ShowColumns"`.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        variant_label!(self;
            StatementDefault, Use, CreateSchema, DropSchema, RenameSchema,
            CreateTableAsSelect, CreateTable, DropTable, InsertInto, Delete, TruncateTable,
            RenameTable, RenameColumn, DropColumn, AddColumn, AddConstraint, DropConstraint,
            AlterColumnSetNotNull, AlterColumnDropNotNull, SetTableProperties, Analyze,
            CreateType, CreateView, RenameView, DropView, CreateMaterializedView,
            DropMaterializedView, RefreshMaterializedView, CreateFunction, AlterFunction,
            DropFunction, Call, CreateRole, DropRole, GrantRoles, RevokeRoles, SetRole, Grant,
            Revoke, ShowGrants, Explain, ShowCreateTable, ShowCreateView,
            ShowCreateMaterializedView, ShowCreateFunction, ShowTables, ShowSchemas,
            ShowCatalogs, ShowColumns, ShowStats, ShowStatsForQuery, ShowRoles, ShowRoleGrants,
            ShowFunctions, ShowSession, SetSession, ResetSession, StartTransaction, Commit,
            Rollback, Prepare, Deallocate, Execute, DescribeInput, DescribeOutput, Update,
        )
    }
}
