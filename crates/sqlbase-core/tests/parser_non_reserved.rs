//! Tests for non-reserved keywords used as identifiers.

mod common;
use common::*;

use sqlbase_core::parser::{is_non_reserved, is_reserved};
use sqlbase_core::tree::{RelationPrimary, SelectItem};
use sqlbase_core::Keyword;

fn non_reserved() -> impl Iterator<Item = Keyword> {
    Keyword::ALL.iter().copied().filter(|kw| is_non_reserved(*kw))
}

fn alias_of(item: &SelectItem) -> &str {
    match item {
        SelectItem::SelectSingle {
            alias: Some(alias), ..
        } => &alias.text,
        other => panic!("Expected an aliased select item, got {other:?}"),
    }
}

#[test]
fn non_reserved_keyword_as_column_alias() {
    for keyword in non_reserved() {
        let word = keyword.as_str();
        let spec = parse_select(&format!("SELECT 1 AS {word}"));
        assert_eq!(alias_of(&spec.select_items[0]), word);
    }
}

#[test]
fn non_reserved_keyword_as_bare_column_alias() {
    for keyword in non_reserved() {
        let word = keyword.as_str();
        let spec = parse_select(&format!("SELECT 1 {word}"));
        assert_eq!(alias_of(&spec.select_items[0]), word);
    }
}

#[test]
fn non_reserved_keyword_as_column_reference() {
    for keyword in non_reserved() {
        let word = keyword.as_str();
        let spec = parse_select(&format!("SELECT {word} FROM t"));
        let SelectItem::SelectSingle { expression, .. } = &spec.select_items[0] else {
            panic!("expected a single select item for {word}");
        };
        assert_eq!(column(value(expression)), word);
    }
}

#[test]
fn non_reserved_keyword_as_table_name() {
    for keyword in non_reserved() {
        let word = keyword.as_str();
        let spec = parse_select(&format!("SELECT * FROM {word}"));
        let sampled = match &spec.from[0] {
            sqlbase_core::tree::Relation::Default(sampled) => sampled,
            other => panic!("expected a plain relation for {word}, got {}", other.label()),
        };
        assert!(
            matches!(&sampled.relation.relation, RelationPrimary::TableName { name, .. } if name.to_string() == word),
            "{word}"
        );
    }
}

#[test]
fn reserved_keyword_is_rejected_as_alias() {
    for keyword in [Keyword::Select, Keyword::From, Keyword::Where, Keyword::Join] {
        assert!(is_reserved(keyword));
        let _ = parse_err(&format!("SELECT 1 AS {}", keyword.as_str()));
    }
}

#[test]
fn quoted_reserved_keyword_is_an_identifier() {
    let spec = parse_select("SELECT 1 AS \"select\"");
    assert_eq!(alias_of(&spec.select_items[0]), "\"select\"");
}

#[test]
fn clause_keywords_are_not_aliases_where_the_clause_parses() {
    let query = parse_query("SELECT a FROM t LIMIT 10");
    assert!(query.body.limit.is_some());

    let query = parse_query("SELECT a FROM t OFFSET 2");
    assert!(query.body.offset.is_some());

    let query = parse_query("SELECT a FROM t FETCH FIRST 3 ROWS ONLY");
    assert!(query.body.limit.is_some());

    let spec = parse_select("SELECT a FROM t TABLESAMPLE BERNOULLI (10)");
    let sqlbase_core::tree::Relation::Default(sampled) = &spec.from[0] else {
        panic!("expected a sampled relation");
    };
    assert!(sampled.sample.is_some());
    assert!(sampled.relation.alias.is_none());
}
