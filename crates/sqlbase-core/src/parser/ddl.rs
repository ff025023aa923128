//! Schema, table, view, type and function definitions.

use super::error::ParseError;
use super::parser::{Alternative, Parser};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{
    AlterRoutineCharacteristic, ColumnDefinition, ConstraintQualifier, ConstraintSpecification,
    ConstraintType, Determinism, DropBehavior, ExternalBodyReference, Identifier, Language,
    LikeClause, LikeOption, NullCallClause, QualifiedName, Query, ReturnStatement, RoutineBody,
    RoutineCharacteristic, SqlParameterDeclaration, Statement, TableElement, TypeDefinition,
    ViewSecurity,
};

impl Parser {
    // ===================================================================
    // Schemas
    // ===================================================================

    pub(crate) fn create_schema(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Create, Keyword::Schema])?;
        let if_not_exists = self.if_not_exists();
        let name = self.qualified_name()?;
        let properties = self.with_properties()?;
        self.complete(Statement::CreateSchema {
            if_not_exists,
            name,
            properties,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_schema(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Drop, Keyword::Schema])?;
        let if_exists = self.if_exists();
        let name = self.qualified_name()?;
        let behavior = if self.eat_keyword(Keyword::Cascade) {
            Some(DropBehavior::Cascade)
        } else if self.eat_keyword(Keyword::Restrict) {
            Some(DropBehavior::Restrict)
        } else {
            None
        };
        self.complete(Statement::DropSchema {
            if_exists,
            name,
            behavior,
            span: self.span_from(start),
        })
    }

    pub(crate) fn rename_schema(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Alter, Keyword::Schema])?;
        let name = self.qualified_name()?;
        self.expect_keywords(&[Keyword::Rename, Keyword::To])?;
        let new_name = self.identifier()?;
        self.complete(Statement::RenameSchema {
            name,
            new_name,
            span: self.span_from(start),
        })
    }

    // ===================================================================
    // Tables
    // ===================================================================

    /// Parses `query` or `'(' query ')'` after `AS`.
    fn defining_query(&mut self) -> Result<Query, ParseError> {
        self.either("query", Self::query, |p| {
            p.expect(TokenKind::LeftParen)?;
            let query = p.query()?;
            p.expect(TokenKind::RightParen)?;
            Ok(query)
        })
    }

    pub(crate) fn create_table_as_select(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Create, Keyword::Table])?;
        let if_not_exists = self.if_not_exists();
        let name = self.qualified_name()?;
        let column_aliases = if self.check(TokenKind::LeftParen) {
            Some(self.column_aliases()?)
        } else {
            None
        };
        let comment = self.comment()?;
        let properties = self.with_properties()?;
        self.expect_keyword(Keyword::As)?;
        let query = self.defining_query()?;
        let with_data = if self.eat_keyword(Keyword::With) {
            let no = self.eat_keyword(Keyword::No);
            self.expect_keyword(Keyword::Data)?;
            Some(!no)
        } else {
            None
        };
        self.complete(Statement::CreateTableAsSelect {
            if_not_exists,
            name,
            column_aliases,
            comment,
            properties,
            query: Box::new(query),
            with_data,
            span: self.span_from(start),
        })
    }

    pub(crate) fn create_table(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Create, Keyword::Table])?;
        let if_not_exists = self.if_not_exists();
        let name = self.qualified_name()?;
        self.expect(TokenKind::LeftParen)?;
        let elements = self.comma_separated(Self::table_element)?;
        self.expect(TokenKind::RightParen)?;
        let comment = self.comment()?;
        let properties = self.with_properties()?;
        self.complete(Statement::CreateTable {
            if_not_exists,
            name,
            elements,
            comment,
            properties,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_table(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Drop, Keyword::Table])?;
        let if_exists = self.if_exists();
        let name = self.qualified_name()?;
        self.complete(Statement::DropTable {
            if_exists,
            name,
            span: self.span_from(start),
        })
    }

    /// A table element is a constraint, a column or a `LIKE` clause.
    /// `UNIQUE` and `PRIMARY` are also valid column names.
    fn table_element(&mut self) -> Result<TableElement, ParseError> {
        let alternatives: [Alternative<TableElement>; 3] = [
            |p| p.constraint_specification().map(TableElement::Constraint),
            |p| p.column_definition().map(TableElement::Column),
            |p| p.like_clause().map(TableElement::Like),
        ];
        self.first_match("tableElement", &alternatives)
    }

    /// Parses `identifier type (NOT NULL)? (COMMENT string)? (WITH properties)?`.
    fn column_definition(&mut self) -> Result<ColumnDefinition, ParseError> {
        let start = self.start();
        let name = self.identifier()?;
        let column_type = self.type_()?;
        let not_null = self.eat_keywords(&[Keyword::Not, Keyword::Null]);
        let comment = self.comment()?;
        let properties = self.with_properties()?;
        Ok(ColumnDefinition {
            name,
            column_type,
            not_null,
            comment,
            properties,
            span: self.span_from(start),
        })
    }

    fn like_clause(&mut self) -> Result<LikeClause, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Like)?;
        let table = self.qualified_name()?;
        let option = if self.eat_keyword(Keyword::Including) {
            Some(LikeOption::Including)
        } else if self.eat_keyword(Keyword::Excluding) {
            Some(LikeOption::Excluding)
        } else {
            None
        };
        if option.is_some() {
            self.expect_keyword(Keyword::Properties)?;
        }
        Ok(LikeClause {
            table,
            option,
            span: self.span_from(start),
        })
    }

    /// Parses `(CONSTRAINT identifier)? constraintType columnAliases constraintQualifier*`.
    fn constraint_specification(&mut self) -> Result<ConstraintSpecification, ParseError> {
        let start = self.start();
        let name = if self.eat_keyword(Keyword::Constraint) {
            Some(self.identifier()?)
        } else {
            None
        };
        let constraint_type = if self.eat_keyword(Keyword::Unique) {
            ConstraintType::Unique
        } else if self.eat_keywords(&[Keyword::Primary, Keyword::Key]) {
            ConstraintType::PrimaryKey
        } else {
            return Err(self.no_viable(
                "constraintType",
                [Keyword::Unique, Keyword::Primary].map(TokenKind::Keyword),
            ));
        };
        let columns = self.column_aliases()?;
        let mut qualifiers = Vec::new();
        while let Some(qualifier) = self.constraint_qualifier() {
            qualifiers.push(qualifier);
        }
        Ok(ConstraintSpecification {
            name,
            constraint_type,
            columns,
            qualifiers,
            span: self.span_from(start),
        })
    }

    fn constraint_qualifier(&mut self) -> Option<ConstraintQualifier> {
        let qualifier = match (self.peek_kind(), self.peek_nth_kind(1)) {
            (TokenKind::Keyword(Keyword::Enabled), _) => ConstraintQualifier::Enabled,
            (TokenKind::Keyword(Keyword::Disabled), _) => ConstraintQualifier::Disabled,
            (TokenKind::Keyword(Keyword::Rely), _) => ConstraintQualifier::Rely,
            (TokenKind::Keyword(Keyword::Enforced), _) => ConstraintQualifier::Enforced,
            (TokenKind::Keyword(Keyword::Not), TokenKind::Keyword(Keyword::Rely)) => {
                self.advance();
                ConstraintQualifier::NotRely
            }
            (TokenKind::Keyword(Keyword::Not), TokenKind::Keyword(Keyword::Enforced)) => {
                self.advance();
                ConstraintQualifier::NotEnforced
            }
            _ => return None,
        };
        self.advance();
        Some(qualifier)
    }

    // ===================================================================
    // ALTER TABLE
    // ===================================================================

    /// Parses `ALTER TABLE (IF EXISTS)? qualifiedName`.
    fn alter_table(&mut self) -> Result<(usize, bool, QualifiedName), ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Alter, Keyword::Table])?;
        let if_exists = self.if_exists();
        let table = self.qualified_name()?;
        Ok((start, if_exists, table))
    }

    pub(crate) fn rename_table(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, from) = self.alter_table()?;
        self.expect_keywords(&[Keyword::Rename, Keyword::To])?;
        let to = self.qualified_name()?;
        self.complete(Statement::RenameTable {
            if_exists,
            from,
            to,
            span: self.span_from(start),
        })
    }

    pub(crate) fn rename_column(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        self.expect_keywords(&[Keyword::Rename, Keyword::Column])?;
        let column_if_exists = self.if_exists();
        let from = self.identifier()?;
        self.expect_keyword(Keyword::To)?;
        let to = self.identifier()?;
        self.complete(Statement::RenameColumn {
            if_exists,
            table,
            column_if_exists,
            from,
            to,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_column(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        self.expect_keywords(&[Keyword::Drop, Keyword::Column])?;
        let column_if_exists = self.if_exists();
        let column = self.qualified_name()?;
        self.complete(Statement::DropColumn {
            if_exists,
            table,
            column_if_exists,
            column,
            span: self.span_from(start),
        })
    }

    pub(crate) fn add_column(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        self.expect_keywords(&[Keyword::Add, Keyword::Column])?;
        let column_if_not_exists = self.if_not_exists();
        let column = self.column_definition()?;
        self.complete(Statement::AddColumn {
            if_exists,
            table,
            column_if_not_exists,
            column,
            span: self.span_from(start),
        })
    }

    pub(crate) fn add_constraint(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        self.expect_keyword(Keyword::Add)?;
        let constraint = self.constraint_specification()?;
        self.complete(Statement::AddConstraint {
            if_exists,
            table,
            constraint,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_constraint(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        self.expect_keywords(&[Keyword::Drop, Keyword::Constraint])?;
        let constraint_if_exists = self.if_exists();
        let name = self.identifier()?;
        self.complete(Statement::DropConstraint {
            if_exists,
            table,
            constraint_if_exists,
            name,
            span: self.span_from(start),
        })
    }

    /// Parses `ALTER COLUMN? identifier`, where the column itself may be
    /// named `column`.
    fn altered_column(&mut self) -> Result<Identifier, ParseError> {
        self.expect_keyword(Keyword::Alter)?;
        if self.check_keyword(Keyword::Column) {
            if let Some(column) = self.maybe("alterColumn", |p| {
                p.advance();
                let column = p.identifier()?;
                if p.check_keyword(Keyword::Set) || p.check_keyword(Keyword::Drop) {
                    Ok(column)
                } else {
                    Err(p.mismatch([Keyword::Set, Keyword::Drop].map(TokenKind::Keyword)))
                }
            })? {
                return Ok(column);
            }
        }
        self.identifier()
    }

    pub(crate) fn alter_column_set_not_null(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        let column = self.altered_column()?;
        self.expect_keywords(&[Keyword::Set, Keyword::Not, Keyword::Null])?;
        self.complete(Statement::AlterColumnSetNotNull {
            if_exists,
            table,
            column,
            span: self.span_from(start),
        })
    }

    pub(crate) fn alter_column_drop_not_null(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        let column = self.altered_column()?;
        self.expect_keywords(&[Keyword::Drop, Keyword::Not, Keyword::Null])?;
        self.complete(Statement::AlterColumnDropNotNull {
            if_exists,
            table,
            column,
            span: self.span_from(start),
        })
    }

    pub(crate) fn set_table_properties(&mut self) -> Result<Statement, ParseError> {
        let (start, if_exists, table) = self.alter_table()?;
        self.expect_keywords(&[Keyword::Set, Keyword::Properties])?;
        let properties = self.properties()?;
        self.complete(Statement::SetTableProperties {
            if_exists,
            table,
            properties,
            span: self.span_from(start),
        })
    }

    // ===================================================================
    // Types and views
    // ===================================================================

    /// Parses `CREATE TYPE name AS ('(' sqlParameterDeclaration, ... ')' | type)`.
    pub(crate) fn create_type(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Create, Keyword::Type])?;
        let name = self.qualified_name()?;
        self.expect_keyword(Keyword::As)?;
        let definition = if self.eat(TokenKind::LeftParen) {
            let fields = self.comma_separated(Self::sql_parameter_declaration)?;
            self.expect(TokenKind::RightParen)?;
            TypeDefinition::Fields(fields)
        } else {
            TypeDefinition::Type(self.type_()?)
        };
        self.complete(Statement::CreateType {
            name,
            definition,
            span: self.span_from(start),
        })
    }

    pub(crate) fn create_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Create)?;
        let replace = self.eat_keywords(&[Keyword::Or, Keyword::Replace]);
        self.expect_keyword(Keyword::View)?;
        let name = self.qualified_name()?;
        let security = if self.eat_keyword(Keyword::Security) {
            if self.eat_keyword(Keyword::Definer) {
                Some(ViewSecurity::Definer)
            } else if self.eat_keyword(Keyword::Invoker) {
                Some(ViewSecurity::Invoker)
            } else {
                return Err(
                    self.mismatch([Keyword::Definer, Keyword::Invoker].map(TokenKind::Keyword))
                );
            }
        } else {
            None
        };
        self.expect_keyword(Keyword::As)?;
        let query = self.query()?;
        self.complete(Statement::CreateView {
            replace,
            name,
            security,
            query: Box::new(query),
            span: self.span_from(start),
        })
    }

    pub(crate) fn rename_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Alter, Keyword::View])?;
        let if_exists = self.if_exists();
        let from = self.qualified_name()?;
        self.expect_keywords(&[Keyword::Rename, Keyword::To])?;
        let to = self.qualified_name()?;
        self.complete(Statement::RenameView {
            if_exists,
            from,
            to,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Drop, Keyword::View])?;
        let if_exists = self.if_exists();
        let name = self.qualified_name()?;
        self.complete(Statement::DropView {
            if_exists,
            name,
            span: self.span_from(start),
        })
    }

    pub(crate) fn create_materialized_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Create, Keyword::Materialized, Keyword::View])?;
        let if_not_exists = self.if_not_exists();
        let name = self.qualified_name()?;
        let comment = self.comment()?;
        let properties = self.with_properties()?;
        self.expect_keyword(Keyword::As)?;
        let query = self.defining_query()?;
        self.complete(Statement::CreateMaterializedView {
            if_not_exists,
            name,
            comment,
            properties,
            query: Box::new(query),
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_materialized_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Drop, Keyword::Materialized, Keyword::View])?;
        let if_exists = self.if_exists();
        let name = self.qualified_name()?;
        self.complete(Statement::DropMaterializedView {
            if_exists,
            name,
            span: self.span_from(start),
        })
    }

    pub(crate) fn refresh_materialized_view(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Refresh, Keyword::Materialized, Keyword::View])?;
        let name = self.qualified_name()?;
        self.expect_keyword(Keyword::Where)?;
        let where_clause = self.boolean_expression()?;
        Ok(Statement::RefreshMaterializedView {
            name,
            where_clause,
            span: self.span_from(start),
        })
    }

    // ===================================================================
    // Functions
    // ===================================================================

    fn sql_parameter_declaration(&mut self) -> Result<SqlParameterDeclaration, ParseError> {
        let start = self.start();
        let name = self.identifier()?;
        let parameter_type = self.type_()?;
        Ok(SqlParameterDeclaration {
            name,
            parameter_type,
            span: self.span_from(start),
        })
    }

    /// Parses
    /// `CREATE (OR REPLACE)? TEMPORARY? FUNCTION name '(' params ')' RETURNS type
    /// (COMMENT string)? routineCharacteristic* routineBody`.
    pub(crate) fn create_function(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Create)?;
        let replace = self.eat_keywords(&[Keyword::Or, Keyword::Replace]);
        let temporary = self.eat_keyword(Keyword::Temporary);
        self.expect_keyword(Keyword::Function)?;
        let name = self.qualified_name()?;
        self.expect(TokenKind::LeftParen)?;
        let parameters = if self.check(TokenKind::RightParen) {
            Vec::new()
        } else {
            self.comma_separated(Self::sql_parameter_declaration)?
        };
        self.expect(TokenKind::RightParen)?;
        self.expect_keyword(Keyword::Returns)?;
        let return_type = self.type_()?;
        let comment = self.comment()?;
        let mut characteristics = Vec::new();
        while let Some(characteristic) = self.routine_characteristic()? {
            characteristics.push(characteristic);
        }
        let body = self.routine_body()?;
        self.complete(Statement::CreateFunction {
            replace,
            temporary,
            name,
            parameters,
            return_type,
            comment,
            characteristics,
            body,
            span: self.span_from(start),
        })
    }

    pub(crate) fn alter_function(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Alter, Keyword::Function])?;
        let name = self.qualified_name()?;
        let types = self.optional_types()?;
        let mut characteristics = Vec::new();
        while let Some(clause) = self.null_call_clause()? {
            characteristics.push(AlterRoutineCharacteristic::NullCall(clause));
        }
        self.complete(Statement::AlterFunction {
            name,
            types,
            characteristics,
            span: self.span_from(start),
        })
    }

    pub(crate) fn drop_function(&mut self) -> Result<Statement, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Drop)?;
        let temporary = self.eat_keyword(Keyword::Temporary);
        self.expect_keyword(Keyword::Function)?;
        let if_exists = self.if_exists();
        let name = self.qualified_name()?;
        let types = self.optional_types()?;
        self.complete(Statement::DropFunction {
            temporary,
            if_exists,
            name,
            types,
            span: self.span_from(start),
        })
    }

    /// Parses one routine characteristic, or returns `None` if the next
    /// tokens do not start one.
    fn routine_characteristic(&mut self) -> Result<Option<RoutineCharacteristic>, ParseError> {
        if self.eat_keyword(Keyword::Language) {
            let language = if self.check_keyword(Keyword::Sql) {
                Language::Sql {
                    span: self.advance().span,
                }
            } else {
                Language::Named(self.identifier()?)
            };
            return Ok(Some(RoutineCharacteristic::Language(language)));
        }
        if self.eat_keyword(Keyword::Deterministic) {
            return Ok(Some(RoutineCharacteristic::Determinism(
                Determinism::Deterministic,
            )));
        }
        if self.eat_keywords(&[Keyword::Not, Keyword::Deterministic]) {
            return Ok(Some(RoutineCharacteristic::Determinism(
                Determinism::NotDeterministic,
            )));
        }
        Ok(self
            .null_call_clause()?
            .map(RoutineCharacteristic::NullCall))
    }

    /// Parses `RETURNS NULL ON NULL INPUT` or `CALLED ON NULL INPUT` if present.
    fn null_call_clause(&mut self) -> Result<Option<NullCallClause>, ParseError> {
        let clause = if self.eat_keyword(Keyword::Returns) {
            self.expect_keyword(Keyword::Null)?;
            NullCallClause::ReturnsNullOnNullInput
        } else if self.eat_keyword(Keyword::Called) {
            NullCallClause::CalledOnNullInput
        } else {
            return Ok(None);
        };
        self.expect_keywords(&[Keyword::On, Keyword::Null, Keyword::Input])?;
        Ok(Some(clause))
    }

    /// Parses `RETURN expression` or `EXTERNAL (NAME identifier)?`.
    pub(crate) fn routine_body(&mut self) -> Result<RoutineBody, ParseError> {
        let start = self.start();
        if self.eat_keyword(Keyword::Return) {
            let expression = self.expression()?;
            return Ok(RoutineBody::Return(ReturnStatement {
                expression,
                span: self.span_from(start),
            }));
        }
        if self.eat_keyword(Keyword::External) {
            let name = if self.eat_keyword(Keyword::Name) {
                Some(self.identifier()?)
            } else {
                None
            };
            return Ok(RoutineBody::External(ExternalBodyReference {
                name,
                span: self.span_from(start),
            }));
        }
        Err(self.no_viable(
            "routineBody",
            [Keyword::Return, Keyword::External].map(TokenKind::Keyword),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::Type;

    fn parse(sql: &str) -> Statement {
        Parser::new(sql).parse_statement().unwrap().statement
    }

    #[test]
    fn test_schema_statements() {
        assert!(matches!(
            parse("CREATE SCHEMA IF NOT EXISTS c.s WITH (location = 's3://x')"),
            Statement::CreateSchema { if_not_exists: true, ref properties, .. } if properties.len() == 1
        ));
        assert!(matches!(
            parse("DROP SCHEMA s CASCADE"),
            Statement::DropSchema {
                behavior: Some(DropBehavior::Cascade),
                ..
            }
        ));
        assert_eq!(parse("ALTER SCHEMA s RENAME TO t").label(), "RenameSchema");
    }

    #[test]
    fn test_create_table_versus_ctas() {
        assert_eq!(parse("CREATE TABLE t (a bigint, b varchar)").label(), "CreateTable");
        assert_eq!(parse("CREATE TABLE t (a, b) AS SELECT 1, 2").label(), "CreateTableAsSelect");
        assert!(matches!(
            parse("CREATE TABLE t AS (SELECT 1) WITH NO DATA"),
            Statement::CreateTableAsSelect {
                with_data: Some(false),
                ..
            }
        ));
        assert!(matches!(
            parse("CREATE TABLE t COMMENT 'c' WITH (format = 'ORC') AS SELECT 1 WITH DATA"),
            Statement::CreateTableAsSelect {
                with_data: Some(true),
                comment: Some(_),
                ..
            }
        ));
    }

    #[test]
    fn test_table_elements() {
        let Statement::CreateTable { elements, .. } = parse(
            "CREATE TABLE t (id bigint NOT NULL COMMENT 'key', unique varchar, \
             CONSTRAINT pk PRIMARY KEY (id) NOT RELY ENFORCED, LIKE other INCLUDING PROPERTIES)",
        ) else {
            panic!("expected create table");
        };
        assert!(matches!(
            elements[0],
            TableElement::Column(ColumnDefinition { not_null: true, .. })
        ));
        assert!(matches!(elements[1], TableElement::Column(_)));
        let TableElement::Constraint(ref constraint) = elements[2] else {
            panic!("expected constraint");
        };
        assert_eq!(constraint.constraint_type, ConstraintType::PrimaryKey);
        assert_eq!(
            constraint.qualifiers,
            vec![ConstraintQualifier::NotRely, ConstraintQualifier::Enforced]
        );
        assert!(matches!(
            elements[3],
            TableElement::Like(LikeClause {
                option: Some(LikeOption::Including),
                ..
            })
        ));
    }

    #[test]
    fn test_alter_table_shapes() {
        for (sql, label) in [
            ("ALTER TABLE t RENAME TO u", "RenameTable"),
            ("ALTER TABLE IF EXISTS t RENAME COLUMN IF EXISTS a TO b", "RenameColumn"),
            ("ALTER TABLE t DROP COLUMN a.b", "DropColumn"),
            ("ALTER TABLE t ADD COLUMN IF NOT EXISTS c int", "AddColumn"),
            ("ALTER TABLE t ADD UNIQUE (a) DISABLED", "AddConstraint"),
            ("ALTER TABLE t DROP CONSTRAINT IF EXISTS pk", "DropConstraint"),
            ("ALTER TABLE t ALTER COLUMN c SET NOT NULL", "AlterColumnSetNotNull"),
            ("ALTER TABLE t ALTER c DROP NOT NULL", "AlterColumnDropNotNull"),
            ("ALTER TABLE t SET PROPERTIES (x = 1)", "SetTableProperties"),
        ] {
            assert_eq!(parse(sql).label(), label, "{sql}");
        }
    }

    #[test]
    fn test_column_named_column() {
        let Statement::AlterColumnSetNotNull { column, .. } =
            parse("ALTER TABLE t ALTER column SET NOT NULL")
        else {
            panic!("expected alter column");
        };
        assert_eq!(column.text, "column");
    }

    #[test]
    fn test_types_and_views() {
        assert!(matches!(
            parse("CREATE TYPE pt AS (x double, y double)"),
            Statement::CreateType {
                definition: TypeDefinition::Fields(ref fields),
                ..
            } if fields.len() == 2
        ));
        assert!(matches!(
            parse("CREATE TYPE money AS decimal(10, 2)"),
            Statement::CreateType {
                definition: TypeDefinition::Type(Type::Base { .. }),
                ..
            }
        ));
        assert!(matches!(
            parse("CREATE OR REPLACE VIEW v SECURITY INVOKER AS SELECT 1"),
            Statement::CreateView {
                replace: true,
                security: Some(ViewSecurity::Invoker),
                ..
            }
        ));
        assert_eq!(parse("ALTER VIEW IF EXISTS v RENAME TO w").label(), "RenameView");
        assert_eq!(parse("DROP VIEW v").label(), "DropView");
        assert_eq!(
            parse("CREATE MATERIALIZED VIEW IF NOT EXISTS mv AS SELECT 1").label(),
            "CreateMaterializedView"
        );
        assert_eq!(parse("DROP MATERIALIZED VIEW mv").label(), "DropMaterializedView");
        assert_eq!(
            parse("REFRESH MATERIALIZED VIEW mv WHERE ds = '2020-01-01'").label(),
            "RefreshMaterializedView"
        );
    }

    #[test]
    fn test_create_function() {
        let Statement::CreateFunction {
            replace,
            temporary,
            parameters,
            characteristics,
            body,
            ..
        } = parse(
            "CREATE OR REPLACE TEMPORARY FUNCTION tan(x double) RETURNS double \
             COMMENT 'tangent' LANGUAGE SQL DETERMINISTIC RETURNS NULL ON NULL INPUT \
             RETURN sin(x) / cos(x)",
        )
        else {
            panic!("expected create function");
        };
        assert!(replace);
        assert!(temporary);
        assert_eq!(parameters.len(), 1);
        assert_eq!(characteristics.len(), 3);
        assert!(matches!(body, RoutineBody::Return(_)));
    }

    #[test]
    fn test_external_function_body() {
        let Statement::CreateFunction {
            parameters, body, ..
        } = parse("CREATE FUNCTION f() RETURNS int LANGUAGE java NOT DETERMINISTIC EXTERNAL NAME impl")
        else {
            panic!("expected create function");
        };
        assert!(parameters.is_empty());
        assert!(matches!(
            body,
            RoutineBody::External(ExternalBodyReference { name: Some(_), .. })
        ));
    }

    #[test]
    fn test_alter_and_drop_function() {
        assert!(matches!(
            parse("ALTER FUNCTION f(int) CALLED ON NULL INPUT"),
            Statement::AlterFunction { types: Some(_), ref characteristics, .. } if characteristics.len() == 1
        ));
        assert!(matches!(
            parse("DROP TEMPORARY FUNCTION IF EXISTS f"),
            Statement::DropFunction {
                temporary: true,
                if_exists: true,
                types: None,
                ..
            }
        ));
    }

    #[test]
    fn test_create_error_lists_alternatives() {
        let err = Parser::new("CREATE FOO").parse_statement().unwrap_err();
        assert_eq!(err.token_index, 1);
        for keyword in [Keyword::Schema, Keyword::Table, Keyword::View, Keyword::Function] {
            assert!(err.expected.contains(&TokenKind::Keyword(keyword)), "{keyword}");
        }
    }
}
