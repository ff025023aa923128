//! End-to-end parses of representative inputs.

mod common;
use common::*;

use sqlbase_core::tree::{
    ArithmeticOperator, BooleanExpression, ComparisonOperator, Join, LogicalOperator,
    NumberKind, Predicate, PrimaryExpression, Relation, RelationPrimary, SelectItem, Statement,
    TableElement, ValueExpression,
};

#[test]
fn select_literal() {
    let spec = parse_select("SELECT 1");
    assert_eq!(spec.select_items.len(), 1);
    let SelectItem::SelectSingle {
        expression, alias, ..
    } = &spec.select_items[0]
    else {
        panic!("expected a single select item");
    };
    assert!(alias.is_none());
    assert!(matches!(
        value(expression).as_primary(),
        Some(PrimaryExpression::NumericLiteral(number))
            if number.kind == NumberKind::Integer && number.text == "1"
    ));
    assert!(spec.from.is_empty());
    assert!(spec.where_clause.is_none());
    assert!(spec.group_by.is_none());
    assert!(spec.having.is_none());
}

#[test]
fn create_table_if_not_exists() {
    let Statement::CreateTable {
        if_not_exists,
        name,
        elements,
        ..
    } = parse("CREATE TABLE IF NOT EXISTS t (a INT, b VARCHAR)")
    else {
        panic!("expected CreateTable");
    };
    assert!(if_not_exists);
    assert_eq!(name.to_string(), "t");
    assert_eq!(elements.len(), 2);
    assert!(elements
        .iter()
        .all(|element| matches!(element, TableElement::Column(_))));
}

#[test]
fn where_clause_with_and() {
    let spec = parse_select("SELECT a FROM t WHERE x = 1 AND y = 2");
    assert_eq!(spec.from.len(), 1);
    let Some(BooleanExpression::LogicalBinary {
        operator: LogicalOperator::And,
        left,
        right,
        ..
    }) = spec.where_clause
    else {
        panic!("expected AND");
    };
    for (side, name) in [(left, "x"), (right, "y")] {
        let BooleanExpression::Predicated {
            value,
            predicate: Some(predicate),
            ..
        } = *side
        else {
            panic!("expected a predicated comparison");
        };
        assert_eq!(column(&value), name);
        assert!(matches!(
            *predicate,
            Predicate::Comparison {
                operator: ComparisonOperator::Eq,
                ..
            }
        ));
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    let expression = parse_expr("a + b * c");
    let ValueExpression::ArithmeticBinary {
        operator: ArithmeticOperator::Add,
        left,
        right,
        ..
    } = value(&expression)
    else {
        panic!("expected addition at the root");
    };
    assert_eq!(column(left), "a");
    let ValueExpression::ArithmeticBinary {
        operator: ArithmeticOperator::Multiply,
        left,
        right,
        ..
    } = &**right
    else {
        panic!("expected multiplication on the right");
    };
    assert_eq!(column(left), "b");
    assert_eq!(column(right), "c");
}

#[test]
fn describe_and_desc_agree() {
    for sql in ["DESCRIBE foo", "DESC foo"] {
        let Statement::ShowColumns { table, .. } = parse(sql) else {
            panic!("expected ShowColumns for {sql}");
        };
        assert_eq!(table.to_string(), "foo");
    }
}

#[test]
fn join_chain_is_left_associative() {
    let spec = parse_select("SELECT * FROM a JOIN b ON a.x = b.x JOIN c ON b.y = c.y");
    let Relation::Join(outer) = &spec.from[0] else {
        panic!("expected a join");
    };
    let Relation::Join(inner) = &outer.left else {
        panic!("expected the left side to be a join");
    };
    assert!(matches!(
        &inner.left,
        Relation::Default(sampled)
            if matches!(&sampled.relation.relation, RelationPrimary::TableName { name, .. } if name.to_string() == "a")
    ));
    let Join::Qualified { right, .. } = &outer.join else {
        panic!("expected a qualified join");
    };
    assert!(matches!(
        right,
        Relation::Default(sampled)
            if matches!(&sampled.relation.relation, RelationPrimary::TableName { name, .. } if name.to_string() == "c")
    ));
}
