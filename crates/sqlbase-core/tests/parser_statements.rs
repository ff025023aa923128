//! Tests covering every statement form.

mod common;
use common::*;

use sqlbase_core::tree::{
    CallArgument, ExplainFormat, ExplainOption, Privileges, RoutineBody, Statement,
};

#[test]
fn every_statement_form() {
    let cases = [
        ("SELECT * FROM t", "StatementDefault"),
        ("WITH x AS (SELECT 1) SELECT * FROM x", "StatementDefault"),
        ("USE hive.web", "Use"),
        ("CREATE SCHEMA IF NOT EXISTS s", "CreateSchema"),
        ("DROP SCHEMA IF EXISTS s RESTRICT", "DropSchema"),
        ("ALTER SCHEMA s RENAME TO s2", "RenameSchema"),
        ("CREATE TABLE t AS SELECT * FROM u", "CreateTableAsSelect"),
        ("CREATE TABLE t (a bigint)", "CreateTable"),
        ("DROP TABLE IF EXISTS t", "DropTable"),
        ("INSERT INTO t VALUES (1, 2)", "InsertInto"),
        ("DELETE FROM t", "Delete"),
        ("TRUNCATE TABLE t", "TruncateTable"),
        ("ALTER TABLE t RENAME TO u", "RenameTable"),
        ("ALTER TABLE t RENAME COLUMN a TO b", "RenameColumn"),
        ("ALTER TABLE t DROP COLUMN a", "DropColumn"),
        ("ALTER TABLE t ADD COLUMN a varchar NOT NULL", "AddColumn"),
        ("ALTER TABLE t ADD CONSTRAINT u UNIQUE (a)", "AddConstraint"),
        ("ALTER TABLE t DROP CONSTRAINT u", "DropConstraint"),
        ("ALTER TABLE t ALTER COLUMN a SET NOT NULL", "AlterColumnSetNotNull"),
        ("ALTER TABLE t ALTER COLUMN a DROP NOT NULL", "AlterColumnDropNotNull"),
        ("ALTER TABLE t SET PROPERTIES (retention = 7)", "SetTableProperties"),
        ("ANALYZE t WITH (partitions = ARRAY['x'])", "Analyze"),
        ("CREATE TYPE p AS (x int)", "CreateType"),
        ("CREATE VIEW v AS SELECT 1", "CreateView"),
        ("ALTER VIEW v RENAME TO w", "RenameView"),
        ("DROP VIEW IF EXISTS v", "DropView"),
        ("CREATE MATERIALIZED VIEW mv AS SELECT 1", "CreateMaterializedView"),
        ("DROP MATERIALIZED VIEW mv", "DropMaterializedView"),
        ("REFRESH MATERIALIZED VIEW mv WHERE d > 1", "RefreshMaterializedView"),
        ("CREATE FUNCTION f(x int) RETURNS int RETURN x + 1", "CreateFunction"),
        ("ALTER FUNCTION f RETURNS NULL ON NULL INPUT", "AlterFunction"),
        ("DROP FUNCTION f(int)", "DropFunction"),
        ("CALL system.flush()", "Call"),
        ("CREATE ROLE r", "CreateRole"),
        ("DROP ROLE r", "DropRole"),
        ("GRANT r TO u", "GrantRoles"),
        ("REVOKE r FROM u", "RevokeRoles"),
        ("SET ROLE NONE", "SetRole"),
        ("GRANT SELECT ON t TO u", "Grant"),
        ("REVOKE DELETE ON t FROM u", "Revoke"),
        ("SHOW GRANTS", "ShowGrants"),
        ("EXPLAIN SELECT 1", "Explain"),
        ("SHOW CREATE TABLE t", "ShowCreateTable"),
        ("SHOW CREATE VIEW v", "ShowCreateView"),
        ("SHOW CREATE MATERIALIZED VIEW mv", "ShowCreateMaterializedView"),
        ("SHOW CREATE FUNCTION f", "ShowCreateFunction"),
        ("SHOW TABLES", "ShowTables"),
        ("SHOW SCHEMAS", "ShowSchemas"),
        ("SHOW CATALOGS", "ShowCatalogs"),
        ("SHOW COLUMNS IN t", "ShowColumns"),
        ("SHOW STATS FOR t", "ShowStats"),
        ("SHOW STATS FOR (SELECT a FROM t WHERE a > 1)", "ShowStatsForQuery"),
        ("SHOW ROLES", "ShowRoles"),
        ("SHOW ROLE GRANTS FROM hive", "ShowRoleGrants"),
        ("SHOW FUNCTIONS LIKE 'f%'", "ShowFunctions"),
        ("SHOW SESSION", "ShowSession"),
        ("SET SESSION hive.x = 'y'", "SetSession"),
        ("RESET SESSION hive.x", "ResetSession"),
        ("START TRANSACTION READ WRITE", "StartTransaction"),
        ("COMMIT", "Commit"),
        ("ROLLBACK WORK", "Rollback"),
        ("PREPARE q FROM SELECT 1", "Prepare"),
        ("DEALLOCATE PREPARE q", "Deallocate"),
        ("EXECUTE q", "Execute"),
        ("DESCRIBE INPUT q", "DescribeInput"),
        ("DESCRIBE OUTPUT q", "DescribeOutput"),
        ("UPDATE t SET a = 1", "Update"),
    ];
    for (sql, label) in cases {
        assert_eq!(parse(sql).label(), label, "{sql}");
    }
}

#[test]
fn statement_keywords_are_case_insensitive() {
    assert_eq!(parse("show create table t").label(), "ShowCreateTable");
    assert_eq!(parse("Describe Output q").label(), "DescribeOutput");
}

#[test]
fn explain_wraps_nested_statement() {
    let Statement::Explain {
        options, statement, ..
    } = parse("EXPLAIN (FORMAT GRAPHVIZ) EXPLAIN ANALYZE SELECT 1")
    else {
        panic!("expected explain");
    };
    assert_eq!(options, vec![ExplainOption::Format(ExplainFormat::Graphviz)]);
    assert!(matches!(
        *statement,
        Statement::Explain { analyze: true, .. }
    ));
}

#[test]
fn explain_of_parenthesized_query() {
    let Statement::Explain {
        options, statement, ..
    } = parse("EXPLAIN (SELECT 1)")
    else {
        panic!("expected explain");
    };
    assert!(options.is_empty());
    assert_eq!(statement.label(), "StatementDefault");
}

#[test]
fn prepare_wraps_nested_statement() {
    let Statement::Prepare { statement, .. } = parse("PREPARE q FROM INSERT INTO t SELECT ?")
    else {
        panic!("expected prepare");
    };
    assert_eq!(statement.label(), "InsertInto");
}

#[test]
fn insert_with_parenthesized_query_has_no_column_list() {
    assert!(matches!(
        parse("INSERT INTO t (SELECT * FROM u)"),
        Statement::InsertInto { columns: None, .. }
    ));
    assert!(matches!(
        parse("INSERT INTO t (a) (SELECT * FROM u)"),
        Statement::InsertInto {
            columns: Some(_),
            ..
        }
    ));
}

#[test]
fn call_with_named_arguments() {
    let Statement::Call { arguments, .. } = parse("CALL p(a => 1, b => 'x', 3)") else {
        panic!("expected call");
    };
    assert_eq!(arguments.len(), 3);
    assert!(matches!(arguments[0], CallArgument::Named { .. }));
    assert!(matches!(arguments[2], CallArgument::Positional(_)));
}

#[test]
fn grant_all_is_not_a_role_name() {
    assert!(matches!(
        parse("GRANT ALL PRIVILEGES ON TABLE t TO USER u"),
        Statement::Grant {
            privileges: Privileges::All { .. },
            ..
        }
    ));
    assert_eq!(parse("GRANT all TO u").label(), "GrantRoles");
}

#[test]
fn routine_body_entry_point() {
    let body = sqlbase_core::parse_routine_body("RETURN a * 2").unwrap().body;
    assert!(matches!(body, RoutineBody::Return(_)));
    let body = sqlbase_core::parse_routine_body("EXTERNAL").unwrap().body;
    assert!(matches!(body, RoutineBody::External(ref reference) if reference.name.is_none()));
    assert!(sqlbase_core::parse_routine_body("RETURN").is_err());
}

#[test]
fn trailing_tokens_are_rejected() {
    let err = parse_err("COMMIT WORK WORK");
    assert_eq!(err.token_index, 2);
    let _ = parse_err("SHOW TABLES t");
    let _ = parse_err("SELECT 1;");
}
