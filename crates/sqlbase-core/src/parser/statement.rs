//! The statement rule: dispatch, DML, SHOW, EXPLAIN, session and
//! transaction control.

use super::classify::starts_query;
use super::error::ParseError;
use super::parser::Parser;
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{
    CallArgument, ExplainFormat, ExplainOption, ExplainType, Identifier, LevelOfIsolation,
    LikePattern, Statement, TransactionMode, Type, UpdateAssignment,
};

/// Tokens that can begin a statement, for error reports.
const STATEMENT_START: [TokenKind; 30] = [
    TokenKind::Keyword(Keyword::Select),
    TokenKind::Keyword(Keyword::With),
    TokenKind::Keyword(Keyword::Values),
    TokenKind::Keyword(Keyword::Table),
    TokenKind::LeftParen,
    TokenKind::Keyword(Keyword::Use),
    TokenKind::Keyword(Keyword::Create),
    TokenKind::Keyword(Keyword::Drop),
    TokenKind::Keyword(Keyword::Alter),
    TokenKind::Keyword(Keyword::Insert),
    TokenKind::Keyword(Keyword::Delete),
    TokenKind::Keyword(Keyword::Truncate),
    TokenKind::Keyword(Keyword::Analyze),
    TokenKind::Keyword(Keyword::Refresh),
    TokenKind::Keyword(Keyword::Call),
    TokenKind::Keyword(Keyword::Grant),
    TokenKind::Keyword(Keyword::Revoke),
    TokenKind::Keyword(Keyword::Set),
    TokenKind::Keyword(Keyword::Explain),
    TokenKind::Keyword(Keyword::Show),
    TokenKind::Keyword(Keyword::Describe),
    TokenKind::Keyword(Keyword::Desc),
    TokenKind::Keyword(Keyword::Reset),
    TokenKind::Keyword(Keyword::Start),
    TokenKind::Keyword(Keyword::Commit),
    TokenKind::Keyword(Keyword::Rollback),
    TokenKind::Keyword(Keyword::Prepare),
    TokenKind::Keyword(Keyword::Deallocate),
    TokenKind::Keyword(Keyword::Execute),
    TokenKind::Keyword(Keyword::Update),
];

impl Parser {
    /// Parses one statement.
    ///
    /// A single leading token picks the statement where it can. Statements
    /// sharing a prefix (`CREATE`, `ALTER TABLE`, `SHOW`, ...) are tried in
    /// grammar order, and each of those alternatives only succeeds if it
    /// reaches the end of the input.
    pub(crate) fn statement(&mut self) -> Result<Statement, ParseError> {
        let kind = self.peek_kind();
        if starts_query(kind) {
            return self.statement_default();
        }
        let TokenKind::Keyword(keyword) = kind else {
            return Err(self.no_viable("statement", STATEMENT_START));
        };
        match keyword {
            Keyword::Use => self.use_statement(),
            Keyword::Create => self.first_match(
                "statement",
                &[
                    Self::create_schema,
                    Self::create_table_as_select,
                    Self::create_table,
                    Self::create_type,
                    Self::create_view,
                    Self::create_materialized_view,
                    Self::create_function,
                    Self::create_role,
                ],
            ),
            Keyword::Drop => self.first_match(
                "statement",
                &[
                    Self::drop_schema,
                    Self::drop_table,
                    Self::drop_view,
                    Self::drop_materialized_view,
                    Self::drop_function,
                    Self::drop_role,
                ],
            ),
            Keyword::Alter => self.first_match(
                "statement",
                &[
                    Self::rename_schema,
                    Self::rename_table,
                    Self::rename_column,
                    Self::drop_column,
                    Self::add_column,
                    Self::add_constraint,
                    Self::drop_constraint,
                    Self::alter_column_set_not_null,
                    Self::alter_column_drop_not_null,
                    Self::set_table_properties,
                    Self::rename_view,
                    Self::alter_function,
                ],
            ),
            Keyword::Insert => self.insert_into(),
            Keyword::Delete => self.delete(),
            Keyword::Truncate => self.truncate_table(),
            Keyword::Analyze => self.analyze(),
            Keyword::Refresh => self.refresh_materialized_view(),
            Keyword::Call => self.call(),
            Keyword::Grant => self.first_match("statement", &[Self::grant_roles, Self::grant]),
            Keyword::Revoke => {
                self.first_match("statement", &[Self::revoke_roles, Self::revoke])
            }
            Keyword::Set => self.first_match("statement", &[Self::set_role, Self::set_session]),
            Keyword::Explain => self.explain(),
            Keyword::Show => self.first_match(
                "statement",
                &[
                    Self::show_grants,
                    Self::show_create_table,
                    Self::show_create_view,
                    Self::show_create_materialized_view,
                    Self::show_create_function,
                    Self::show_tables,
                    Self::show_schemas,
                    Self::show_catalogs,
                    Self::show_columns,
                    Self::show_stats,
                    Self::show_stats_for_query,
                    Self::show_roles,
                    Self::show_role_grants,
                    Self::show_functions,
                    Self::show_session,
                ],
            ),
            Keyword::Describe => self.first_match(
                "statement",
                &[Self::describe, Self::describe_input, Self::describe_output],
            ),
            Keyword::Desc => self.desc(),
            Keyword::Reset => self.reset_session(),
            Keyword::Start => self.start_transaction(),
            Keyword::Commit => {
                let start = self.start();
                self.advance();
                self.eat_keyword(Keyword::Work);
                Ok(Statement::Commit {
                    span: self.span_from(start),
                })
            }
            Keyword::Rollback => {
                let start = self.start();
                self.advance();
                self.eat_keyword(Keyword::Work);
                Ok(Statement::Rollback {
                    span: self.span_from(start),
                })
            }
            Keyword::Prepare => self.prepare(),
            Keyword::Deallocate => self.deallocate(),
            Keyword::Execute => self.execute(),
            Keyword::Update => self.update(),
            _ => Err(self.no_viable("statement", STATEMENT_START)),
        }
    }

    /// Returns `statement` if nothing follows it.
    pub(crate) fn complete(&self, statement: Statement) -> Result<Statement, ParseError> {
        self.expect_eof().map(|()| statement)
    }

    fn statement_default(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        let query = self.query()?;
        Ok(Statement::StatementDefault {
            query: Box::new(query),
            span: self.span_from(start),
        })
    }

    /// Parses `USE schema` or `USE catalog.schema`.
    fn use_statement(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Use)?;
        let first = self.identifier()?;
        let (catalog, schema) = if self.eat(TokenKind::Dot) {
            (Some(first), self.identifier()?)
        } else {
            (None, first)
        };
        Ok(Statement::Use {
            catalog,
            schema,
            span: self.span_from(start),
        })
    }

    // ===================================================================
    // DML
    // ===================================================================

    fn insert_into(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Insert, Keyword::Into])?;
        let table = self.qualified_name()?;
        let columns = if self.check(TokenKind::LeftParen) {
            self.maybe("insertInto", Self::column_aliases)?
        } else {
            None
        };
        let query = self.query()?;
        Ok(Statement::InsertInto {
            table,
            columns,
            query: Box::new(query),
            span: self.span_from(start),
        })
    }

    fn delete(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Delete, Keyword::From])?;
        let table = self.qualified_name()?;
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.boolean_expression()?)
        } else {
            None
        };
        Ok(Statement::Delete {
            table,
            where_clause,
            span: self.span_from(start),
        })
    }

    fn truncate_table(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Truncate, Keyword::Table])?;
        let table = self.qualified_name()?;
        Ok(Statement::TruncateTable {
            table,
            span: self.span_from(start),
        })
    }

    fn update(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Update)?;
        let table = self.qualified_name()?;
        self.expect_keyword(Keyword::Set)?;
        let assignments = self.comma_separated(|p| {
            let start = p.start();
            let column = p.identifier()?;
            p.expect(TokenKind::Eq)?;
            let value = p.expression()?;
            Ok(UpdateAssignment {
                column,
                value,
                span: p.span_from(start),
            })
        })?;
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.boolean_expression()?)
        } else {
            None
        };
        Ok(Statement::Update {
            table,
            assignments,
            where_clause,
            span: self.span_from(start),
        })
    }

    fn analyze(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Analyze)?;
        let table = self.qualified_name()?;
        let properties = self.with_properties()?;
        Ok(Statement::Analyze {
            table,
            properties,
            span: self.span_from(start),
        })
    }

    /// Parses `CALL name '(' (callArgument (',' callArgument)*)? ')'`.
    fn call(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Call)?;
        let name = self.qualified_name()?;
        self.expect(TokenKind::LeftParen)?;
        let arguments = if self.check(TokenKind::RightParen) {
            Vec::new()
        } else {
            self.comma_separated(Self::call_argument)?
        };
        self.expect(TokenKind::RightParen)?;
        Ok(Statement::Call {
            name,
            arguments,
            span: self.span_from(start),
        })
    }

    fn call_argument(&mut self) -> Result<CallArgument, ParseError> {
        if self.at_identifier() && self.peek_nth_kind(1) == TokenKind::DoubleArrow {
            let start = self.start();
            let name = self.identifier()?;
            self.advance();
            let value = self.expression()?;
            return Ok(CallArgument::Named {
                name,
                value,
                span: self.span_from(start),
            });
        }
        self.expression().map(CallArgument::Positional)
    }

    // ===================================================================
    // EXPLAIN
    // ===================================================================

    /// Parses `EXPLAIN ANALYZE? VERBOSE? ('(' explainOption, ... ')')? statement`.
    ///
    /// `ANALYZE` is also a statement, so `EXPLAIN ANALYZE t` explains an
    /// `ANALYZE t` statement.
    fn explain(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Explain)?;
        if self.check_keyword(Keyword::Analyze) {
            self.either(
                "explain",
                |p| {
                    p.advance();
                    p.explain_tail(start, true)
                },
                |p| p.explain_tail(start, false),
            )
        } else {
            self.explain_tail(start, false)
        }
    }

    fn explain_tail(&mut self, start: usize, analyze: bool) -> Result<Statement, ParseError> {
        let verbose = self.eat_keyword(Keyword::Verbose);
        let options = if self.check(TokenKind::LeftParen)
            && matches!(
                self.peek_nth_kind(1),
                TokenKind::Keyword(Keyword::Format | Keyword::Type)
            ) {
            self.advance();
            let options = self.comma_separated(Self::explain_option)?;
            self.expect(TokenKind::RightParen)?;
            options
        } else {
            Vec::new()
        };
        let statement = self.nested(Self::statement)?;
        Ok(Statement::Explain {
            analyze,
            verbose,
            options,
            statement: Box::new(statement),
            span: self.span_from(start),
        })
    }

    fn explain_option(&mut self) -> Result<ExplainOption, ParseError> {
        if self.eat_keyword(Keyword::Format) {
            let format = match self.peek_kind() {
                TokenKind::Keyword(Keyword::Text) => ExplainFormat::Text,
                TokenKind::Keyword(Keyword::Graphviz) => ExplainFormat::Graphviz,
                TokenKind::Keyword(Keyword::Json) => ExplainFormat::Json,
                _ => {
                    return Err(self.mismatch(
                        [Keyword::Text, Keyword::Graphviz, Keyword::Json].map(TokenKind::Keyword),
                    ))
                }
            };
            self.advance();
            return Ok(ExplainOption::Format(format));
        }
        if self.eat_keyword(Keyword::Type) {
            let explain_type = match self.peek_kind() {
                TokenKind::Keyword(Keyword::Logical) => ExplainType::Logical,
                TokenKind::Keyword(Keyword::Distributed) => ExplainType::Distributed,
                TokenKind::Keyword(Keyword::Validate) => ExplainType::Validate,
                TokenKind::Keyword(Keyword::Io) => ExplainType::Io,
                _ => {
                    return Err(self.mismatch(
                        [
                            Keyword::Logical,
                            Keyword::Distributed,
                            Keyword::Validate,
                            Keyword::Io,
                        ]
                        .map(TokenKind::Keyword),
                    ))
                }
            };
            self.advance();
            return Ok(ExplainOption::Type(explain_type));
        }
        Err(self.no_viable(
            "explainOption",
            [Keyword::Format, Keyword::Type].map(TokenKind::Keyword),
        ))
    }

    // ===================================================================
    // SHOW and DESCRIBE
    // ===================================================================

    /// Parses `LIKE pattern (ESCAPE escape)?` if present.
    fn like_pattern(&mut self, allow_escape: bool) -> Result<Option<LikePattern>, ParseError> {
        let start = self.start();
        if !self.eat_keyword(Keyword::Like) {
            return Ok(None);
        }
        let pattern = self.string()?;
        let escape = if allow_escape && self.eat_keyword(Keyword::Escape) {
            Some(self.string()?)
        } else {
            None
        };
        Ok(Some(LikePattern {
            pattern,
            escape,
            span: self.span_from(start),
        }))
    }

    /// Consumes `FROM` or `IN`.
    fn eat_from_or_in(&mut self) -> bool {
        self.eat_keyword(Keyword::From) || self.eat_keyword(Keyword::In)
    }

    fn show_grants(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Grants])?;
        let table = if self.eat_keyword(Keyword::On) {
            self.eat_keyword(Keyword::Table);
            Some(self.qualified_name()?)
        } else {
            None
        };
        self.complete(Statement::ShowGrants {
            table,
            span: self.span_from(start),
        })
    }

    fn show_create_table(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Create, Keyword::Table])?;
        let name = self.qualified_name()?;
        self.complete(Statement::ShowCreateTable {
            name,
            span: self.span_from(start),
        })
    }

    fn show_create_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Create, Keyword::View])?;
        let name = self.qualified_name()?;
        self.complete(Statement::ShowCreateView {
            name,
            span: self.span_from(start),
        })
    }

    fn show_create_materialized_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[
            Keyword::Show,
            Keyword::Create,
            Keyword::Materialized,
            Keyword::View,
        ])?;
        let name = self.qualified_name()?;
        self.complete(Statement::ShowCreateMaterializedView {
            name,
            span: self.span_from(start),
        })
    }

    fn show_create_function(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Create, Keyword::Function])?;
        let name = self.qualified_name()?;
        let types = self.optional_types()?;
        self.complete(Statement::ShowCreateFunction {
            name,
            types,
            span: self.span_from(start),
        })
    }

    fn show_tables(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Tables])?;
        let schema = if self.eat_from_or_in() {
            Some(self.qualified_name()?)
        } else {
            None
        };
        let like = self.like_pattern(true)?;
        self.complete(Statement::ShowTables {
            schema,
            like,
            span: self.span_from(start),
        })
    }

    fn show_schemas(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Schemas])?;
        let catalog = self.catalog_filter()?;
        let like = self.like_pattern(true)?;
        self.complete(Statement::ShowSchemas {
            catalog,
            like,
            span: self.span_from(start),
        })
    }

    fn show_catalogs(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Catalogs])?;
        let like = self.like_pattern(false)?;
        self.complete(Statement::ShowCatalogs {
            like,
            span: self.span_from(start),
        })
    }

    fn show_columns(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Columns])?;
        if !self.eat_from_or_in() {
            return Err(self.mismatch([Keyword::From, Keyword::In].map(TokenKind::Keyword)));
        }
        let table = self.qualified_name()?;
        self.complete(Statement::ShowColumns {
            table,
            span: self.span_from(start),
        })
    }

    fn show_stats(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Stats, Keyword::For])?;
        let table = self.qualified_name()?;
        self.complete(Statement::ShowStats {
            table,
            span: self.span_from(start),
        })
    }

    fn show_stats_for_query(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Stats, Keyword::For])?;
        self.expect(TokenKind::LeftParen)?;
        let query = self.query_specification()?;
        self.expect(TokenKind::RightParen)?;
        self.complete(Statement::ShowStatsForQuery {
            query: Box::new(query),
            span: self.span_from(start),
        })
    }

    fn show_roles(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Show)?;
        let current = self.eat_keyword(Keyword::Current);
        self.expect_keyword(Keyword::Roles)?;
        let catalog = self.catalog_filter()?;
        self.complete(Statement::ShowRoles {
            current,
            catalog,
            span: self.span_from(start),
        })
    }

    fn show_role_grants(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Role, Keyword::Grants])?;
        let catalog = self.catalog_filter()?;
        self.complete(Statement::ShowRoleGrants {
            catalog,
            span: self.span_from(start),
        })
    }

    fn show_functions(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Functions])?;
        let like = self.like_pattern(true)?;
        self.complete(Statement::ShowFunctions {
            like,
            span: self.span_from(start),
        })
    }

    fn show_session(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Show, Keyword::Session])?;
        let like = self.like_pattern(true)?;
        self.complete(Statement::ShowSession {
            like,
            span: self.span_from(start),
        })
    }

    /// Parses `((FROM | IN) identifier)?`.
    fn catalog_filter(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.eat_from_or_in() {
            self.identifier().map(Some)
        } else {
            Ok(None)
        }
    }

    /// Parses `DESCRIBE qualifiedName`.
    fn describe(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Describe)?;
        let table = self.qualified_name()?;
        self.complete(Statement::ShowColumns {
            table,
            span: self.span_from(start),
        })
    }

    fn describe_input(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Describe, Keyword::Input])?;
        let name = self.identifier()?;
        self.complete(Statement::DescribeInput {
            name,
            span: self.span_from(start),
        })
    }

    fn describe_output(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Describe, Keyword::Output])?;
        let name = self.identifier()?;
        self.complete(Statement::DescribeOutput {
            name,
            span: self.span_from(start),
        })
    }

    /// Parses `DESC qualifiedName`.
    fn desc(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Desc)?;
        let table = self.qualified_name()?;
        Ok(Statement::ShowColumns {
            table,
            span: self.span_from(start),
        })
    }

    // ===================================================================
    // Session and transactions
    // ===================================================================

    fn set_session(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Set, Keyword::Session])?;
        let name = self.qualified_name()?;
        self.expect(TokenKind::Eq)?;
        let value = self.expression()?;
        self.complete(Statement::SetSession {
            name,
            value,
            span: self.span_from(start),
        })
    }

    fn reset_session(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Reset, Keyword::Session])?;
        let name = self.qualified_name()?;
        Ok(Statement::ResetSession {
            name,
            span: self.span_from(start),
        })
    }

    fn start_transaction(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Start, Keyword::Transaction])?;
        let modes = if self.check_keyword(Keyword::Isolation) || self.check_keyword(Keyword::Read)
        {
            self.comma_separated(Self::transaction_mode)?
        } else {
            Vec::new()
        };
        Ok(Statement::StartTransaction {
            modes,
            span: self.span_from(start),
        })
    }

    fn transaction_mode(&mut self) -> Result<TransactionMode, ParseError> {
        if self.eat_keywords(&[Keyword::Isolation, Keyword::Level]) {
            return self
                .level_of_isolation()
                .map(TransactionMode::IsolationLevel);
        }
        if self.eat_keyword(Keyword::Read) {
            if self.eat_keyword(Keyword::Only) {
                return Ok(TransactionMode::AccessMode { read_only: true });
            }
            self.expect_keyword(Keyword::Write)?;
            return Ok(TransactionMode::AccessMode { read_only: false });
        }
        Err(self.no_viable(
            "transactionMode",
            [Keyword::Isolation, Keyword::Read].map(TokenKind::Keyword),
        ))
    }

    fn level_of_isolation(&mut self) -> Result<LevelOfIsolation, ParseError> {
        if self.eat_keywords(&[Keyword::Read, Keyword::Uncommitted]) {
            Ok(LevelOfIsolation::ReadUncommitted)
        } else if self.eat_keywords(&[Keyword::Read, Keyword::Committed]) {
            Ok(LevelOfIsolation::ReadCommitted)
        } else if self.eat_keywords(&[Keyword::Repeatable, Keyword::Read]) {
            Ok(LevelOfIsolation::RepeatableRead)
        } else if self.eat_keyword(Keyword::Serializable) {
            Ok(LevelOfIsolation::Serializable)
        } else if self.eat_keyword(Keyword::Read) {
            Err(self.mismatch(
                [Keyword::Uncommitted, Keyword::Committed].map(TokenKind::Keyword),
            ))
        } else {
            Err(self.no_viable(
                "levelOfIsolation",
                [Keyword::Read, Keyword::Repeatable, Keyword::Serializable]
                    .map(TokenKind::Keyword),
            ))
        }
    }

    // ===================================================================
    // Prepared statements
    // ===================================================================

    fn prepare(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Prepare)?;
        let name = self.identifier()?;
        self.expect_keyword(Keyword::From)?;
        let statement = self.nested(Self::statement)?;
        Ok(Statement::Prepare {
            name,
            statement: Box::new(statement),
            span: self.span_from(start),
        })
    }

    fn deallocate(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Deallocate, Keyword::Prepare])?;
        let name = self.identifier()?;
        Ok(Statement::Deallocate {
            name,
            span: self.span_from(start),
        })
    }

    fn execute(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Execute)?;
        let name = self.identifier()?;
        let parameters = if self.eat_keyword(Keyword::Using) {
            self.comma_separated(Self::expression)?
        } else {
            Vec::new()
        };
        Ok(Statement::Execute {
            name,
            parameters,
            span: self.span_from(start),
        })
    }

    /// Parses `types?` after a function name.
    pub(crate) fn optional_types(&mut self) -> Result<Option<Vec<Type>>, ParseError> {
        if self.check(TokenKind::LeftParen) {
            self.types().map(Some)
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap().statement
    }

    #[test]
    fn test_query_statement() {
        assert_eq!(parse("SELECT 1").label(), "StatementDefault");
        assert_eq!(parse("(SELECT 1)").label(), "StatementDefault");
        assert_eq!(parse("VALUES 1").label(), "StatementDefault");
    }

    #[test]
    fn test_use() {
        assert!(matches!(
            parse("USE cat.sch"),
            Statement::Use { catalog: Some(_), .. }
        ));
        assert!(matches!(parse("USE sch"), Statement::Use { catalog: None, .. }));
    }

    #[test]
    fn test_describe_forms() {
        assert_eq!(parse("DESCRIBE foo").label(), "ShowColumns");
        assert_eq!(parse("DESC foo").label(), "ShowColumns");
        assert_eq!(parse("SHOW COLUMNS FROM foo").label(), "ShowColumns");
        assert_eq!(parse("DESCRIBE input").label(), "ShowColumns");
        assert_eq!(parse("DESCRIBE INPUT stmt").label(), "DescribeInput");
        assert_eq!(parse("DESCRIBE OUTPUT stmt").label(), "DescribeOutput");
    }

    #[test]
    fn test_show_statements() {
        for (sql, label) in [
            ("SHOW GRANTS ON TABLE t", "ShowGrants"),
            ("SHOW CREATE TABLE t", "ShowCreateTable"),
            ("SHOW CREATE VIEW v", "ShowCreateView"),
            ("SHOW CREATE MATERIALIZED VIEW v", "ShowCreateMaterializedView"),
            ("SHOW CREATE FUNCTION f(integer)", "ShowCreateFunction"),
            ("SHOW TABLES FROM s LIKE 't%' ESCAPE '!'", "ShowTables"),
            ("SHOW SCHEMAS IN c", "ShowSchemas"),
            ("SHOW CATALOGS LIKE 'c%'", "ShowCatalogs"),
            ("SHOW STATS FOR t", "ShowStats"),
            ("SHOW STATS FOR (SELECT * FROM t)", "ShowStatsForQuery"),
            ("SHOW CURRENT ROLES FROM c", "ShowRoles"),
            ("SHOW ROLE GRANTS", "ShowRoleGrants"),
            ("SHOW FUNCTIONS", "ShowFunctions"),
            ("SHOW SESSION LIKE 'x'", "ShowSession"),
        ] {
            assert_eq!(parse(sql).label(), label, "{sql}");
        }
    }

    #[test]
    fn test_show_catalogs_has_no_escape() {
        assert!(Parser::new("SHOW CATALOGS LIKE 'a' ESCAPE 'b'")
            .parse_statement()
            .is_err());
    }

    #[test]
    fn test_explain() {
        let Statement::Explain {
            analyze,
            verbose,
            options,
            statement,
            ..
        } = parse("EXPLAIN ANALYZE VERBOSE (FORMAT JSON, TYPE IO) SELECT 1")
        else {
            panic!("expected explain");
        };
        assert!(analyze);
        assert!(verbose);
        assert_eq!(
            options,
            vec![
                ExplainOption::Format(ExplainFormat::Json),
                ExplainOption::Type(ExplainType::Io)
            ]
        );
        assert_eq!(statement.label(), "StatementDefault");
    }

    #[test]
    fn test_explain_of_analyze_statement() {
        let Statement::Explain {
            analyze, statement, ..
        } = parse("EXPLAIN ANALYZE t")
        else {
            panic!("expected explain");
        };
        assert!(!analyze);
        assert_eq!(statement.label(), "Analyze");
    }

    #[test]
    fn test_dml() {
        assert!(matches!(
            parse("INSERT INTO t (a, b) SELECT 1, 2"),
            Statement::InsertInto { columns: Some(_), .. }
        ));
        assert!(matches!(
            parse("INSERT INTO t (SELECT 1)"),
            Statement::InsertInto { columns: None, .. }
        ));
        assert!(matches!(
            parse("DELETE FROM t WHERE a = 1"),
            Statement::Delete { where_clause: Some(_), .. }
        ));
        assert!(matches!(
            parse("UPDATE t SET a = 1, b = b + 1 WHERE c"),
            Statement::Update { ref assignments, .. } if assignments.len() == 2
        ));
        assert_eq!(parse("TRUNCATE TABLE t").label(), "TruncateTable");
    }

    #[test]
    fn test_call_arguments() {
        let Statement::Call { arguments, .. } = parse("CALL sys.run(1, name => 'x')") else {
            panic!("expected call");
        };
        assert!(matches!(arguments[0], CallArgument::Positional(_)));
        assert!(matches!(arguments[1], CallArgument::Named { .. }));
    }

    #[test]
    fn test_session_and_transactions() {
        assert!(matches!(
            parse("SET SESSION optimizer.enabled = true"),
            Statement::SetSession { ref name, .. } if name.parts.len() == 2
        ));
        assert_eq!(parse("RESET SESSION x").label(), "ResetSession");
        let Statement::StartTransaction { modes, .. } =
            parse("START TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
        else {
            panic!("expected start transaction");
        };
        assert_eq!(
            modes,
            vec![
                TransactionMode::IsolationLevel(LevelOfIsolation::RepeatableRead),
                TransactionMode::AccessMode { read_only: true }
            ]
        );
        assert_eq!(parse("COMMIT WORK").label(), "Commit");
        assert_eq!(parse("ROLLBACK").label(), "Rollback");
    }

    #[test]
    fn test_prepared_statements() {
        assert!(matches!(
            parse("PREPARE q FROM SELECT ? FROM t"),
            Statement::Prepare { ref statement, .. } if statement.label() == "StatementDefault"
        ));
        assert!(matches!(
            parse("EXECUTE q USING 1, 'a'"),
            Statement::Execute { ref parameters, .. } if parameters.len() == 2
        ));
        assert_eq!(parse("DEALLOCATE PREPARE q").label(), "Deallocate");
    }

    #[test]
    fn test_unknown_statement() {
        let err = Parser::new("FOO").parse_statement().unwrap_err();
        assert!(err.expected.contains(&TokenKind::Keyword(Keyword::Select)));
        assert_eq!(err.token_index, 0);
    }
}
