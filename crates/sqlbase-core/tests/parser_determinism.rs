//! Tests that parsing is repeatable and parameters are numbered in order.

mod common;
use common::*;

use serde_json::Value;
use sqlbase_core::Parser;

/// Collects `(source offset, index)` for every `?` in a serialized tree.
fn collect_parameters(value: &Value, out: &mut Vec<(u64, u64)>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(parameter)) = map.get("Parameter") {
                let index = parameter["index"].as_u64().unwrap();
                let offset = parameter["span"]["start"].as_u64().unwrap();
                out.push((offset, index));
            }
            for child in map.values() {
                collect_parameters(child, out);
            }
        }
        Value::Array(items) => {
            for item in items {
                collect_parameters(item, out);
            }
        }
        _ => {}
    }
}

fn parameter_indices<T: serde::Serialize>(tree: &T) -> Vec<u64> {
    let mut found = Vec::new();
    collect_parameters(&serde_json::to_value(tree).unwrap(), &mut found);
    found.sort_unstable();
    found.into_iter().map(|(_, index)| index).collect()
}

#[test]
fn parsing_twice_gives_equal_trees() {
    for sql in [
        "SELECT a, b + 1 AS c FROM t JOIN u USING (id) WHERE x BETWEEN 1 AND 2",
        "CREATE TABLE IF NOT EXISTS t (a INT, b VARCHAR, LIKE other)",
        "EXPLAIN ANALYZE SELECT * FROM t",
        "GRANT SELECT, INSERT ON t TO ROLE r WITH GRANT OPTION",
    ] {
        assert_eq!(parse(sql), parse(sql), "{sql}");
    }
}

#[test]
fn reparsing_with_the_same_parser_is_stable() {
    let mut parser = Parser::new("SELECT ?, ? FROM t WHERE x IN (SELECT ? FROM u)");
    let first = parser.parse_statement().unwrap();
    let second = parser.parse_statement().unwrap();
    assert_eq!(first, second);
    assert_eq!(parameter_indices(&first), vec![0, 1, 2]);
}

#[test]
fn parameters_are_numbered_in_source_order() {
    let statement = parse("SELECT ? FROM t WHERE a = ? AND b IN (?, ?)");
    assert_eq!(parameter_indices(&statement), vec![0, 1, 2, 3]);
}

#[test]
fn backtracking_does_not_skip_parameter_indices() {
    let statement = parse("SELECT ? FROM t WHERE x = ALL (SELECT ?) AND y = ?");
    assert_eq!(parameter_indices(&statement), vec![0, 1, 2]);

    let statement = parse("SELECT * FROM t WHERE x IN (SELECT ? FROM u) OR y = ?");
    assert_eq!(parameter_indices(&statement), vec![0, 1]);

    let statement = parse("CREATE TABLE t AS SELECT ? AS a WITH NO DATA");
    assert_eq!(parameter_indices(&statement), vec![0]);
}

#[test]
fn expression_parameters_start_at_zero() {
    let expression = parse_expr("? + ? * ?");
    assert_eq!(parameter_indices(&expression), vec![0, 1, 2]);
}

#[test]
fn prepared_statement_body_numbers_its_parameters() {
    let statement = parse("PREPARE q FROM SELECT * FROM t WHERE a = ? LIMIT 5");
    assert_eq!(parameter_indices(&statement), vec![0]);
}

#[test]
fn nested_subquery_operands_keep_parameter_order() {
    let mut operand = String::from("?");
    for _ in 0..30 {
        operand = format!("((SELECT {operand}) + ?)");
    }
    let statement = parse(&format!("SELECT {operand}"));
    assert_eq!(parameter_indices(&statement), (0..=30).collect::<Vec<u64>>());
}
