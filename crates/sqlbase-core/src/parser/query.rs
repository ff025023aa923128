//! Query rules: WITH, set operations, SELECT, GROUP BY and relations.

use super::classify::{continues_expression, is_identifier_token};
use super::error::ParseError;
use super::parser::Parser;
use super::precedence::{set_operation_binding_power, token_to_set_operator};
use crate::lexer::{Keyword, TokenKind};
use crate::tree::{
    AliasedRelation, Expression, GroupBy, GroupingElement, GroupingSet, Identifier, Join, JoinCriteria,
    JoinRelation, JoinType, Limit, NamedQuery, NullOrdering, Ordering, Query, QueryNoWith,
    QueryPrimary, QuerySpecification, QueryTerm, Relation, RelationPrimary, SampleType,
    SampledRelation, SelectItem, SetQuantifier, SortItem, TableSample, TableVersion,
    TableVersionType, With,
};

impl Parser {
    /// Parses `with? queryNoWith`.
    pub(crate) fn query(&mut self) -> Result<Query, ParseError> {
        let start = self.start();
        let with = if self.check_keyword(Keyword::With) {
            Some(self.with()?)
        } else {
            None
        };
        let body = self.query_no_with()?;
        Ok(Query {
            with,
            body,
            span: self.span_from(start),
        })
    }

    fn with(&mut self) -> Result<With, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::With)?;
        let recursive = self.eat_keyword(Keyword::Recursive);
        let queries = self.comma_separated(Self::named_query)?;
        Ok(With {
            recursive,
            queries,
            span: self.span_from(start),
        })
    }

    /// Parses `name columnAliases? AS '(' query ')'`.
    fn named_query(&mut self) -> Result<NamedQuery, ParseError> {
        let start = self.start();
        let name = self.identifier()?;
        let column_aliases = if self.check(TokenKind::LeftParen) {
            Some(self.column_aliases()?)
        } else {
            None
        };
        self.expect_keyword(Keyword::As)?;
        self.expect(TokenKind::LeftParen)?;
        let query = self.nested(Self::query)?;
        self.expect(TokenKind::RightParen)?;
        Ok(NamedQuery {
            name,
            column_aliases,
            query: Box::new(query),
            span: self.span_from(start),
        })
    }

    /// Parses a query term with its ORDER BY, OFFSET and LIMIT clauses.
    pub(crate) fn query_no_with(&mut self) -> Result<QueryNoWith, ParseError> {
        let start = self.start();
        let term = self.query_term_bp(0)?;

        let order_by = if self.eat_keywords(&[Keyword::Order, Keyword::By]) {
            self.comma_separated(Self::sort_item)?
        } else {
            Vec::new()
        };

        let offset = if self.check_keyword(Keyword::Offset)
            && self.peek_nth_kind(1) == TokenKind::IntegerValue
        {
            self.advance();
            let offset = self.integer()?;
            if !self.eat_keyword(Keyword::Row) {
                self.eat_keyword(Keyword::Rows);
            }
            Some(offset)
        } else {
            None
        };

        let limit = self.limit()?;

        Ok(QueryNoWith {
            term,
            order_by,
            offset,
            limit,
            span: self.span_from(start),
        })
    }

    /// Parses `LIMIT n`, `LIMIT ALL` or `FETCH FIRST n ROWS ONLY`.
    fn limit(&mut self) -> Result<Option<Limit>, ParseError> {
        let start = self.start();
        if self.check_keyword(Keyword::Limit) {
            match self.peek_nth_kind(1) {
                TokenKind::IntegerValue => {
                    self.advance();
                    return self.integer().map(|count| Some(Limit::Count(count)));
                }
                TokenKind::Keyword(Keyword::All) => {
                    self.advance();
                    self.advance();
                    return Ok(Some(Limit::All {
                        span: self.span_from(start),
                    }));
                }
                _ => {}
            }
        }
        if self.eat_keywords(&[Keyword::Fetch, Keyword::First]) {
            let count = self.integer()?;
            self.expect_keywords(&[Keyword::Rows, Keyword::Only])?;
            return Ok(Some(Limit::FetchFirst {
                count,
                span: self.span_from(start),
            }));
        }
        Ok(None)
    }

    /// Precedence climbing over `INTERSECT`, `UNION` and `EXCEPT`.
    fn query_term_bp(&mut self, min_bp: u8) -> Result<QueryTerm, ParseError> {
        let start = self.start();
        let mut lhs = QueryTerm::Default(self.query_primary()?);

        loop {
            let kind = self.peek_kind();
            let Some((l_bp, r_bp)) = set_operation_binding_power(kind) else {
                break;
            };
            if l_bp < min_bp {
                break;
            }
            let Some(operator) = token_to_set_operator(kind) else {
                break;
            };
            self.advance();
            let quantifier = self.set_quantifier();
            let rhs = self.query_term_bp(r_bp)?;
            lhs = QueryTerm::SetOperation {
                operator,
                quantifier,
                left: Box::new(lhs),
                right: Box::new(rhs),
                span: self.span_from(start),
            };
        }

        Ok(lhs)
    }

    /// Consumes `DISTINCT` or `ALL` if present.
    fn set_quantifier(&mut self) -> Option<SetQuantifier> {
        if self.eat_keyword(Keyword::Distinct) {
            Some(SetQuantifier::Distinct)
        } else if self.eat_keyword(Keyword::All) {
            Some(SetQuantifier::All)
        } else {
            None
        }
    }

    fn query_primary(&mut self) -> Result<QueryPrimary, ParseError> {
        let start = self.start();
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Select) => self
                .query_specification()
                .map(|specification| QueryPrimary::Default(Box::new(specification))),
            TokenKind::Keyword(Keyword::Table) => {
                self.advance();
                let name = self.qualified_name()?;
                Ok(QueryPrimary::Table {
                    name,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Values) => {
                self.advance();
                let rows = self.comma_separated(Self::expression)?;
                Ok(QueryPrimary::InlineTable {
                    rows,
                    span: self.span_from(start),
                })
            }
            TokenKind::LeftParen => {
                self.advance();
                let query = self.nested(Self::query_no_with)?;
                self.expect(TokenKind::RightParen)?;
                Ok(QueryPrimary::Subquery {
                    query: Box::new(query),
                    span: self.span_from(start),
                })
            }
            _ => Err(self.no_viable(
                "queryPrimary",
                [
                    TokenKind::Keyword(Keyword::Select),
                    TokenKind::Keyword(Keyword::Table),
                    TokenKind::Keyword(Keyword::Values),
                    TokenKind::LeftParen,
                ],
            )),
        }
    }

    /// Parses `expression (ASC|DESC)? (NULLS (FIRST|LAST))?`.
    pub(crate) fn sort_item(&mut self) -> Result<SortItem, ParseError> {
        let start = self.start();
        let expression = self.expression()?;
        let ordering = if self.eat_keyword(Keyword::Asc) {
            Some(Ordering::Asc)
        } else if self.eat_keyword(Keyword::Desc) {
            Some(Ordering::Desc)
        } else {
            None
        };
        let null_ordering = if self.eat_keyword(Keyword::Nulls) {
            if self.eat_keyword(Keyword::First) {
                Some(NullOrdering::First)
            } else {
                self.expect_keyword(Keyword::Last)?;
                Some(NullOrdering::Last)
            }
        } else {
            None
        };
        Ok(SortItem {
            expression,
            ordering,
            null_ordering,
            span: self.span_from(start),
        })
    }

    pub(crate) fn query_specification(&mut self) -> Result<QuerySpecification, ParseError> {
        self.memoized_specification(Self::select_clauses)
    }

    fn select_clauses(&mut self) -> Result<QuerySpecification, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::Select)?;

        let (quantifier, select_items) = if self.eat_keyword(Keyword::Distinct) {
            (
                Some(SetQuantifier::Distinct),
                self.comma_separated(Self::select_item)?,
            )
        } else {
            let quantified = if self.check_keyword(Keyword::All) {
                self.maybe("setQuantifier", |p| {
                    p.advance();
                    p.comma_separated(Self::select_item)
                })?
            } else {
                None
            };
            match quantified {
                Some(items) => (Some(SetQuantifier::All), items),
                None => (None, self.comma_separated(Self::select_item)?),
            }
        };

        let from = if self.eat_keyword(Keyword::From) {
            self.comma_separated(Self::relation)?
        } else {
            Vec::new()
        };
        let where_clause = if self.eat_keyword(Keyword::Where) {
            Some(self.boolean_expression()?)
        } else {
            None
        };
        let group_by = if self.check_keywords(&[Keyword::Group, Keyword::By]) {
            Some(self.group_by()?)
        } else {
            None
        };
        let having = if self.eat_keyword(Keyword::Having) {
            Some(self.boolean_expression()?)
        } else {
            None
        };

        Ok(QuerySpecification {
            quantifier,
            select_items,
            from,
            where_clause,
            group_by,
            having,
            span: self.span_from(start),
        })
    }

    fn select_item(&mut self) -> Result<SelectItem, ParseError> {
        let start = self.start();
        if self.eat(TokenKind::Asterisk) {
            return Ok(SelectItem::SelectAll {
                qualifier: None,
                span: self.span_from(start),
            });
        }
        if self.qualified_star_ahead() {
            let qualifier = self.qualified_name()?;
            self.expect(TokenKind::Dot)?;
            self.expect(TokenKind::Asterisk)?;
            return Ok(SelectItem::SelectAll {
                qualifier: Some(qualifier),
                span: self.span_from(start),
            });
        }

        let expression = self.expression()?;
        let alias = self.alias()?;
        Ok(SelectItem::SelectSingle {
            expression,
            alias,
            span: self.span_from(start),
        })
    }

    /// Returns true if the tokens ahead are `identifier ('.' identifier)* '.' '*'`.
    fn qualified_star_ahead(&self) -> bool {
        let mut n = 0;
        loop {
            if !is_identifier_token(self.peek_nth_kind(n)) || self.peek_nth_kind(n + 1) != TokenKind::Dot
            {
                return false;
            }
            if self.peek_nth_kind(n + 2) == TokenKind::Asterisk {
                return true;
            }
            n += 2;
        }
    }

    /// Parses `AS identifier`, or a bare identifier that does not start a
    /// clause.
    fn alias(&mut self) -> Result<Option<Identifier>, ParseError> {
        if self.eat_keyword(Keyword::As) {
            return self.identifier().map(Some);
        }
        if self.bare_alias_ahead() {
            return self.identifier().map(Some);
        }
        Ok(None)
    }

    /// Returns true if the current token can be an alias written without
    /// `AS`. Non-reserved keywords that open a clause here are left alone.
    fn bare_alias_ahead(&self) -> bool {
        if !self.at_identifier() {
            return false;
        }
        let next = self.peek_nth_kind(1);
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Limit) => !matches!(
                next,
                TokenKind::IntegerValue | TokenKind::Keyword(Keyword::All)
            ),
            TokenKind::Keyword(Keyword::Offset) => next != TokenKind::IntegerValue,
            TokenKind::Keyword(Keyword::Fetch) => next != TokenKind::Keyword(Keyword::First),
            TokenKind::Keyword(Keyword::Tablesample) => !matches!(
                next,
                TokenKind::Keyword(Keyword::Bernoulli | Keyword::System)
            ),
            _ => true,
        }
    }

    fn group_by(&mut self) -> Result<GroupBy, ParseError> {
        let start = self.start();
        self.expect_keywords(&[Keyword::Group, Keyword::By])?;

        let (quantifier, elements) = if self.eat_keyword(Keyword::Distinct) {
            (
                Some(SetQuantifier::Distinct),
                self.comma_separated(Self::grouping_element)?,
            )
        } else {
            let quantified = if self.check_keyword(Keyword::All) {
                self.maybe("setQuantifier", |p| {
                    p.advance();
                    p.comma_separated(Self::grouping_element)
                })?
            } else {
                None
            };
            match quantified {
                Some(elements) => (Some(SetQuantifier::All), elements),
                None => (None, self.comma_separated(Self::grouping_element)?),
            }
        };

        Ok(GroupBy {
            quantifier,
            elements,
            span: self.span_from(start),
        })
    }

    fn grouping_element(&mut self) -> Result<GroupingElement, ParseError> {
        let start = self.start();
        let follows_paren = self.peek_nth_kind(1) == TokenKind::LeftParen;
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Rollup) if follows_paren => {
                self.advance();
                let expressions = self.optional_expression_list()?;
                Ok(GroupingElement::Rollup {
                    expressions,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Cube) if follows_paren => {
                self.advance();
                let expressions = self.optional_expression_list()?;
                Ok(GroupingElement::Cube {
                    expressions,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Grouping)
                if self.check_nth_keyword(1, Keyword::Sets) =>
            {
                self.advance();
                self.advance();
                self.expect(TokenKind::LeftParen)?;
                let sets = self.comma_separated(Self::grouping_set)?;
                self.expect(TokenKind::RightParen)?;
                Ok(GroupingElement::MultipleGroupingSets {
                    sets,
                    span: self.span_from(start),
                })
            }
            _ => self
                .grouping_set()
                .map(GroupingElement::SingleGroupingSet),
        }
    }

    /// Parses `'(' (expression (',' expression)*)? ')'`.
    fn optional_expression_list(&mut self) -> Result<Vec<Expression>, ParseError> {
        self.expect(TokenKind::LeftParen)?;
        if self.eat(TokenKind::RightParen) {
            return Ok(Vec::new());
        }
        let expressions = self.comma_separated(Self::expression)?;
        self.expect(TokenKind::RightParen)?;
        Ok(expressions)
    }

    /// Parses a parenthesized grouping set, or a single expression. A
    /// parenthesized list followed by an operator is an expression.
    fn grouping_set(&mut self) -> Result<GroupingSet, ParseError> {
        let start = self.start();
        if self.check(TokenKind::LeftParen) {
            let parenthesized = self.maybe("groupingSet", |p| {
                let expressions = p.optional_expression_list()?;
                if continues_expression(p.peek_kind()) {
                    return Err(p.mismatch([TokenKind::Comma, TokenKind::RightParen]));
                }
                Ok(expressions)
            })?;
            if let Some(expressions) = parenthesized {
                return Ok(GroupingSet {
                    parenthesized: true,
                    expressions,
                    span: self.span_from(start),
                });
            }
        }
        let expression = self.expression()?;
        Ok(GroupingSet {
            parenthesized: false,
            expressions: vec![expression],
            span: self.span_from(start),
        })
    }

    /// Parses a relation: a sampled relation followed by any number of
    /// joins, grouped to the left.
    pub(crate) fn relation(&mut self) -> Result<Relation, ParseError> {
        let start = self.start();
        let mut left = Relation::Default(self.sampled_relation()?);

        loop {
            let join = if self.eat_keywords(&[Keyword::Cross, Keyword::Join]) {
                Join::Cross {
                    right: self.sampled_relation()?,
                }
            } else if self.eat_keyword(Keyword::Natural) {
                let join_type = self.join_type()?;
                self.expect_keyword(Keyword::Join)?;
                Join::Natural {
                    join_type,
                    right: self.sampled_relation()?,
                }
            } else if self.at_join() {
                let join_type = self.join_type()?;
                self.expect_keyword(Keyword::Join)?;
                let right = self.nested(Self::relation)?;
                let criteria = self.join_criteria()?;
                Join::Qualified {
                    join_type,
                    right,
                    criteria,
                }
            } else {
                break;
            };
            left = Relation::Join(Box::new(JoinRelation {
                left,
                join,
                span: self.span_from(start),
            }));
        }

        Ok(left)
    }

    fn at_join(&self) -> bool {
        matches!(
            self.peek_kind(),
            TokenKind::Keyword(
                Keyword::Join | Keyword::Inner | Keyword::Left | Keyword::Right | Keyword::Full
            )
        )
    }

    /// Parses `INNER? | LEFT OUTER? | RIGHT OUTER? | FULL OUTER?`.
    fn join_type(&mut self) -> Result<JoinType, ParseError> {
        let join_type = match self.peek_kind() {
            TokenKind::Keyword(Keyword::Inner) => {
                self.advance();
                return Ok(JoinType::Inner);
            }
            TokenKind::Keyword(Keyword::Left) => JoinType::Left,
            TokenKind::Keyword(Keyword::Right) => JoinType::Right,
            TokenKind::Keyword(Keyword::Full) => JoinType::Full,
            _ => return Ok(JoinType::Inner),
        };
        self.advance();
        self.eat_keyword(Keyword::Outer);
        Ok(join_type)
    }

    fn join_criteria(&mut self) -> Result<JoinCriteria, ParseError> {
        let start = self.start();
        if self.eat_keyword(Keyword::On) {
            return self.boolean_expression().map(JoinCriteria::On);
        }
        if self.eat_keyword(Keyword::Using) {
            self.expect(TokenKind::LeftParen)?;
            let columns = self.comma_separated(Self::identifier)?;
            self.expect(TokenKind::RightParen)?;
            return Ok(JoinCriteria::Using {
                columns,
                span: self.span_from(start),
            });
        }
        Err(self.no_viable(
            "joinCriteria",
            [Keyword::On, Keyword::Using].map(TokenKind::Keyword),
        ))
    }

    fn sampled_relation(&mut self) -> Result<SampledRelation, ParseError> {
        let start = self.start();
        let relation = self.aliased_relation()?;
        let sample = if self.check_keyword(Keyword::Tablesample) {
            let sample_start = self.start();
            self.advance();
            let sample_type = if self.eat_keyword(Keyword::Bernoulli) {
                SampleType::Bernoulli
            } else {
                self.expect_keyword(Keyword::System)?;
                SampleType::System
            };
            self.expect(TokenKind::LeftParen)?;
            let percentage = self.expression()?;
            self.expect(TokenKind::RightParen)?;
            Some(TableSample {
                sample_type,
                percentage,
                span: self.span_from(sample_start),
            })
        } else {
            None
        };
        Ok(SampledRelation {
            relation,
            sample,
            span: self.span_from(start),
        })
    }

    fn aliased_relation(&mut self) -> Result<AliasedRelation, ParseError> {
        let start = self.start();
        let relation = self.relation_primary()?;
        let alias = self.alias()?;
        let column_aliases = if alias.is_some() && self.check(TokenKind::LeftParen) {
            Some(self.column_aliases()?)
        } else {
            None
        };
        Ok(AliasedRelation {
            relation,
            alias,
            column_aliases,
            span: self.span_from(start),
        })
    }

    /// Parses a table name, or one nesting level of `UNNEST`, `LATERAL`
    /// or parentheses.
    fn relation_primary(&mut self) -> Result<RelationPrimary, ParseError> {
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Unnest) | TokenKind::LeftParen => {
                self.nested(Self::relation_primary_inner)
            }
            TokenKind::Keyword(Keyword::Lateral)
                if self.peek_nth_kind(1) == TokenKind::LeftParen =>
            {
                self.nested(Self::relation_primary_inner)
            }
            _ => self.relation_primary_inner(),
        }
    }

    fn relation_primary_inner(&mut self) -> Result<RelationPrimary, ParseError> {
        let start = self.start();
        let follows_paren = self.peek_nth_kind(1) == TokenKind::LeftParen;
        match self.peek_kind() {
            TokenKind::Keyword(Keyword::Unnest) => {
                self.advance();
                self.expect(TokenKind::LeftParen)?;
                let expressions = self.comma_separated(Self::expression)?;
                self.expect(TokenKind::RightParen)?;
                let with_ordinality = self.eat_keywords(&[Keyword::With, Keyword::Ordinality]);
                Ok(RelationPrimary::Unnest {
                    expressions,
                    with_ordinality,
                    span: self.span_from(start),
                })
            }
            TokenKind::Keyword(Keyword::Lateral) if follows_paren => {
                self.advance();
                self.advance();
                let query = self.query()?;
                self.expect(TokenKind::RightParen)?;
                Ok(RelationPrimary::Lateral {
                    query: Box::new(query),
                    span: self.span_from(start),
                })
            }
            TokenKind::LeftParen => self.first_match(
                "relationPrimary",
                &[
                    |p| {
                        let start = p.start();
                        p.expect(TokenKind::LeftParen)?;
                        let query = p.query()?;
                        p.expect(TokenKind::RightParen)?;
                        Ok(RelationPrimary::SubqueryRelation {
                            query: Box::new(query),
                            span: p.span_from(start),
                        })
                    },
                    |p| {
                        let start = p.start();
                        p.expect(TokenKind::LeftParen)?;
                        let relation = p.relation()?;
                        p.expect(TokenKind::RightParen)?;
                        Ok(RelationPrimary::ParenthesizedRelation {
                            relation: Box::new(relation),
                            span: p.span_from(start),
                        })
                    },
                ],
            ),
            _ => {
                let name = self.qualified_name()?;
                let version = if self.check_keyword(Keyword::For) {
                    Some(self.table_version()?)
                } else {
                    None
                };
                Ok(RelationPrimary::TableName {
                    name,
                    version,
                    span: self.span_from(start),
                })
            }
        }
    }

    /// Parses `FOR (SYSTEM_TIME|TIMESTAMP|VERSION) AS OF valueExpression`.
    fn table_version(&mut self) -> Result<TableVersion, ParseError> {
        let start = self.start();
        self.expect_keyword(Keyword::For)?;
        let version_type = match self.peek_kind() {
            TokenKind::Keyword(Keyword::SystemTime) => TableVersionType::SystemTime,
            TokenKind::Keyword(Keyword::Timestamp) => TableVersionType::Timestamp,
            TokenKind::Keyword(Keyword::Version) => TableVersionType::Version,
            _ => {
                return Err(self.mismatch(
                    [Keyword::SystemTime, Keyword::Timestamp, Keyword::Version]
                        .map(TokenKind::Keyword),
                ))
            }
        };
        self.advance();
        self.expect_keywords(&[Keyword::As, Keyword::Of])?;
        let value = self.value_expression()?;
        Ok(TableVersion {
            version_type,
            value,
            span: self.span_from(start),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::SetOperator;

    fn query(sql: &str) -> Query {
        let mut parser = Parser::new(sql);
        let query = parser.query().unwrap();
        parser.expect_eof().unwrap();
        query
    }

    fn specification(query: &Query) -> &QuerySpecification {
        match &query.body.term {
            QueryTerm::Default(QueryPrimary::Default(specification)) => specification,
            other => panic!("expected query specification, got {other:?}"),
        }
    }

    #[test]
    fn test_simple_select() {
        let query = query("SELECT a, b FROM users");
        let spec = specification(&query);
        assert_eq!(spec.select_items.len(), 2);
        assert_eq!(spec.from.len(), 1);
        assert!(spec.where_clause.is_none());
    }

    #[test]
    fn test_select_with_clauses() {
        let query = query(
            "SELECT DISTINCT a FROM t WHERE a > 1 GROUP BY a HAVING count(*) > 1 ORDER BY a DESC NULLS LAST OFFSET 5 ROWS LIMIT 10",
        );
        let spec = specification(&query);
        assert_eq!(spec.quantifier, Some(SetQuantifier::Distinct));
        assert!(spec.where_clause.is_some());
        assert!(spec.group_by.is_some());
        assert!(spec.having.is_some());
        assert_eq!(query.body.order_by[0].ordering, Some(Ordering::Desc));
        assert_eq!(query.body.order_by[0].null_ordering, Some(NullOrdering::Last));
        assert_eq!(query.body.offset.as_ref().unwrap().text, "5");
        assert!(matches!(query.body.limit, Some(Limit::Count(_))));
    }

    #[test]
    fn test_limit_forms() {
        assert!(matches!(query("SELECT 1 LIMIT ALL").body.limit, Some(Limit::All { .. })));
        assert!(matches!(
            query("SELECT 1 FETCH FIRST 3 ROWS ONLY").body.limit,
            Some(Limit::FetchFirst { .. })
        ));
    }

    #[test]
    fn test_select_all_quantifier() {
        let with_quantifier = query("SELECT ALL a FROM t");
        assert_eq!(
            specification(&with_quantifier).quantifier,
            Some(SetQuantifier::All)
        );
        let column_named_all = query("SELECT all FROM t");
        assert_eq!(specification(&column_named_all).quantifier, None);
    }

    #[test]
    fn test_select_star_forms() {
        let query = query("SELECT *, t.*, cat.s.t.* FROM t");
        let items = &specification(&query).select_items;
        assert!(matches!(items[0], SelectItem::SelectAll { qualifier: None, .. }));
        assert!(matches!(
            &items[2],
            SelectItem::SelectAll { qualifier: Some(name), .. } if name.parts.len() == 3
        ));
    }

    #[test]
    fn test_aliases() {
        let query = query("SELECT a x, b AS y FROM t u (c1, c2)");
        let spec = specification(&query);
        assert!(matches!(
            &spec.select_items[0],
            SelectItem::SelectSingle { alias: Some(alias), .. } if alias.text == "x"
        ));
        let Relation::Default(sampled) = &spec.from[0] else {
            panic!("expected plain relation");
        };
        assert_eq!(sampled.relation.alias.as_ref().unwrap().text, "u");
        assert_eq!(sampled.relation.column_aliases.as_ref().unwrap().names.len(), 2);
    }

    #[test]
    fn test_clause_keywords_are_not_bare_aliases() {
        let query = query("SELECT a FROM t LIMIT 3");
        let Relation::Default(sampled) = &specification(&query).from[0] else {
            panic!("expected plain relation");
        };
        assert!(sampled.relation.alias.is_none());
        assert!(query.body.limit.is_some());
    }

    #[test]
    fn test_set_operations() {
        // a UNION b INTERSECT c parses as a UNION (b INTERSECT c)
        let mixed = query("SELECT 1 UNION SELECT 2 INTERSECT SELECT 3");
        let QueryTerm::SetOperation {
            operator,
            quantifier,
            right,
            ..
        } = &mixed.body.term
        else {
            panic!("expected set operation");
        };
        assert_eq!(*operator, SetOperator::Union);
        assert_eq!(*quantifier, None);
        assert!(matches!(
            **right,
            QueryTerm::SetOperation {
                operator: SetOperator::Intersect,
                ..
            }
        ));

        // a EXCEPT b UNION ALL c parses as (a EXCEPT b) UNION ALL c
        let chained = query("SELECT 1 EXCEPT SELECT 2 UNION ALL SELECT 3");
        let QueryTerm::SetOperation { left, quantifier, .. } = &chained.body.term else {
            panic!("expected set operation");
        };
        assert_eq!(*quantifier, Some(SetQuantifier::All));
        assert!(matches!(**left, QueryTerm::SetOperation { .. }));
    }

    #[test]
    fn test_query_primaries() {
        assert!(matches!(
            query("TABLE cat.t").body.term,
            QueryTerm::Default(QueryPrimary::Table { .. })
        ));
        assert!(matches!(
            query("VALUES (1, 'a'), (2, 'b')").body.term,
            QueryTerm::Default(QueryPrimary::InlineTable { ref rows, .. }) if rows.len() == 2
        ));
        assert!(matches!(
            query("(SELECT 1) ORDER BY 1").body.term,
            QueryTerm::Default(QueryPrimary::Subquery { .. })
        ));
    }

    #[test]
    fn test_with_clause() {
        let query = query("WITH RECURSIVE x (a) AS (SELECT 1), y AS (SELECT 2) SELECT * FROM x");
        let with = query.with.unwrap();
        assert!(with.recursive);
        assert_eq!(with.queries.len(), 2);
        assert!(with.queries[0].column_aliases.is_some());
    }

    #[test]
    fn test_join_chain_is_left_associative() {
        let query = query("SELECT * FROM a JOIN b ON a.x = b.x LEFT OUTER JOIN c USING (y)");
        let Relation::Join(outer) = &specification(&query).from[0] else {
            panic!("expected join");
        };
        assert!(matches!(outer.left, Relation::Join(_)));
        assert!(matches!(
            outer.join,
            Join::Qualified {
                join_type: JoinType::Left,
                criteria: JoinCriteria::Using { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_cross_and_natural_joins() {
        let query = query("SELECT * FROM a CROSS JOIN b NATURAL FULL JOIN c");
        let Relation::Join(outer) = &specification(&query).from[0] else {
            panic!("expected join");
        };
        assert!(matches!(
            outer.join,
            Join::Natural {
                join_type: JoinType::Full,
                ..
            }
        ));
        assert!(matches!(
            &outer.left,
            Relation::Join(inner) if matches!(inner.join, Join::Cross { .. })
        ));
    }

    #[test]
    fn test_relation_primaries() {
        let query = query(
            "SELECT * FROM UNNEST(a, b) WITH ORDINALITY AS u, LATERAL (SELECT 1), (SELECT 2) s, (x CROSS JOIN y), t FOR VERSION AS OF 3 TABLESAMPLE BERNOULLI (10)",
        );
        let labels: Vec<&str> = specification(&query)
            .from
            .iter()
            .map(|relation| match relation {
                Relation::Default(sampled) => sampled.relation.relation.label(),
                Relation::Join(_) => "Join",
            })
            .collect();
        assert_eq!(
            labels,
            vec![
                "Unnest",
                "Lateral",
                "SubqueryRelation",
                "ParenthesizedRelation",
                "TableName"
            ]
        );
        let Relation::Default(last) = &specification(&query).from[4] else {
            panic!("expected plain relation");
        };
        assert!(last.sample.is_some());
    }

    #[test]
    fn test_grouping_elements() {
        let query = query(
            "SELECT 1 FROM t GROUP BY ALL a, (b, c), (), (d + 1) * 2, ROLLUP (a, b), CUBE (c), GROUPING SETS ((a), b)",
        );
        let group_by = specification(&query).group_by.as_ref().unwrap();
        assert_eq!(group_by.quantifier, Some(SetQuantifier::All));
        let labels: Vec<&str> = group_by.elements.iter().map(GroupingElement::label).collect();
        assert_eq!(
            labels,
            vec![
                "SingleGroupingSet",
                "SingleGroupingSet",
                "SingleGroupingSet",
                "SingleGroupingSet",
                "Rollup",
                "Cube",
                "MultipleGroupingSets"
            ]
        );
        let GroupingElement::SingleGroupingSet(set) = &group_by.elements[3] else {
            panic!("expected grouping set");
        };
        assert!(!set.parenthesized);
    }
}
