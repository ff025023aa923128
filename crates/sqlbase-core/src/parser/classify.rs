//! Token classification: which tokens play which role in the grammar.

use crate::lexer::{Keyword, TokenKind};
use crate::tree::ComparisonOperator;

/// Token kinds accepted by the `identifier` rule, besides non-reserved
/// keywords.
pub const IDENTIFIER_KINDS: [TokenKind; 4] = [
    TokenKind::Identifier,
    TokenKind::QuotedIdentifier,
    TokenKind::BackquotedIdentifier,
    TokenKind::DigitIdentifier,
];

/// Returns true if the keyword may also be used as an identifier.
#[must_use]
pub const fn is_non_reserved(keyword: Keyword) -> bool {
    use Keyword as K;
    matches!(
        keyword,
        K::Add
            | K::Admin
            | K::All
            | K::Analyze
            | K::Any
            | K::Array
            | K::Asc
            | K::At
            | K::Bernoulli
            | K::Call
            | K::Called
            | K::Cascade
            | K::Catalogs
            | K::Column
            | K::Columns
            | K::Comment
            | K::Commit
            | K::Committed
            | K::Current
            | K::CurrentRole
            | K::Data
            | K::Date
            | K::Day
            | K::Definer
            | K::Desc
            | K::Deterministic
            | K::Disabled
            | K::Distributed
            | K::Enabled
            | K::Enforced
            | K::Excluding
            | K::Explain
            | K::External
            | K::Fetch
            | K::Filter
            | K::First
            | K::Following
            | K::Format
            | K::Function
            | K::Functions
            | K::Grant
            | K::Granted
            | K::Grants
            | K::Graphviz
            | K::Groups
            | K::Hour
            | K::If
            | K::Ignore
            | K::Including
            | K::Input
            | K::Interval
            | K::Invoker
            | K::Io
            | K::Isolation
            | K::Json
            | K::Key
            | K::Language
            | K::Last
            | K::Lateral
            | K::Level
            | K::Limit
            | K::Logical
            | K::Map
            | K::Materialized
            | K::Minute
            | K::Month
            | K::Name
            | K::Nfc
            | K::Nfd
            | K::Nfkc
            | K::Nfkd
            | K::No
            | K::None
            | K::Nullif
            | K::Nulls
            | K::Of
            | K::Offset
            | K::Only
            | K::Option
            | K::Ordinality
            | K::Output
            | K::Over
            | K::Partition
            | K::Partitions
            | K::Position
            | K::Preceding
            | K::Primary
            | K::Privileges
            | K::Properties
            | K::Range
            | K::Read
            | K::Refresh
            | K::Rely
            | K::Rename
            | K::Repeatable
            | K::Replace
            | K::Reset
            | K::Respect
            | K::Restrict
            | K::Return
            | K::Returns
            | K::Revoke
            | K::Role
            | K::Roles
            | K::Rollback
            | K::Row
            | K::Rows
            | K::Schema
            | K::Schemas
            | K::Second
            | K::Security
            | K::Serializable
            | K::Session
            | K::Set
            | K::Sets
            | K::Show
            | K::Some
            | K::Sql
            | K::Start
            | K::Stats
            | K::Substring
            | K::System
            | K::SystemTime
            | K::Tables
            | K::Tablesample
            | K::Temporary
            | K::Text
            | K::Time
            | K::Timestamp
            | K::To
            | K::Transaction
            | K::Truncate
            | K::TryCast
            | K::Type
            | K::Unbounded
            | K::Uncommitted
            | K::Unique
            | K::Update
            | K::Use
            | K::User
            | K::Validate
            | K::Verbose
            | K::Version
            | K::View
            | K::Work
            | K::Write
            | K::Year
            | K::Zone
    )
}

/// Returns true if the keyword can never be used as an unquoted identifier.
#[must_use]
pub const fn is_reserved(keyword: Keyword) -> bool {
    !is_non_reserved(keyword)
}

/// Returns true if the token can be parsed by the `identifier` rule.
#[must_use]
pub const fn is_identifier_token(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Identifier
        | TokenKind::QuotedIdentifier
        | TokenKind::BackquotedIdentifier
        | TokenKind::DigitIdentifier => true,
        TokenKind::Keyword(keyword) => is_non_reserved(keyword),
        _ => false,
    }
}

/// Maps a token to the comparison operator it spells.
#[must_use]
pub const fn comparison_operator(kind: TokenKind) -> Option<ComparisonOperator> {
    match kind {
        TokenKind::Eq => Some(ComparisonOperator::Eq),
        TokenKind::Neq => Some(ComparisonOperator::Neq),
        TokenKind::Lt => Some(ComparisonOperator::Lt),
        TokenKind::Lte => Some(ComparisonOperator::Lte),
        TokenKind::Gt => Some(ComparisonOperator::Gt),
        TokenKind::Gte => Some(ComparisonOperator::Gte),
        _ => None,
    }
}

/// Returns true if the token can begin a query.
#[must_use]
pub const fn starts_query(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Keyword(Keyword::Select | Keyword::With | Keyword::Values | Keyword::Table)
            | TokenKind::LeftParen
    )
}

/// Returns true if the token, following a complete value, would extend it
/// into a larger expression.
#[must_use]
pub const fn continues_expression(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Asterisk
            | TokenKind::Slash
            | TokenKind::Percent
            | TokenKind::Concat
            | TokenKind::Eq
            | TokenKind::Neq
            | TokenKind::Lt
            | TokenKind::Lte
            | TokenKind::Gt
            | TokenKind::Gte
            | TokenKind::LeftBracket
            | TokenKind::Dot
            | TokenKind::Keyword(
                Keyword::And
                    | Keyword::Or
                    | Keyword::Is
                    | Keyword::Not
                    | Keyword::Between
                    | Keyword::In
                    | Keyword::Like
                    | Keyword::At
            )
    )
}

/// Token kinds that can begin a primary expression, for error reports.
pub const EXPRESSION_START: [TokenKind; 14] = [
    TokenKind::Identifier,
    TokenKind::QuotedIdentifier,
    TokenKind::BackquotedIdentifier,
    TokenKind::DigitIdentifier,
    TokenKind::String,
    TokenKind::UnicodeString,
    TokenKind::BinaryLiteral,
    TokenKind::IntegerValue,
    TokenKind::DecimalValue,
    TokenKind::DoubleValue,
    TokenKind::LeftParen,
    TokenKind::Question,
    TokenKind::Minus,
    TokenKind::Keyword(Keyword::Null),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_keywords() {
        for keyword in [
            Keyword::Select,
            Keyword::From,
            Keyword::Join,
            Keyword::Describe,
            Keyword::CurrentUser,
            Keyword::Unnest,
        ] {
            assert!(is_reserved(keyword), "{keyword} should be reserved");
        }
    }

    #[test]
    fn test_non_reserved_keywords() {
        for keyword in [
            Keyword::Analyze,
            Keyword::All,
            Keyword::Limit,
            Keyword::Desc,
            Keyword::CurrentRole,
            Keyword::Zone,
        ] {
            assert!(is_non_reserved(keyword), "{keyword} should be non-reserved");
        }
    }

    #[test]
    fn test_reserved_and_non_reserved_partition_keywords() {
        let reserved = Keyword::ALL.iter().filter(|kw| is_reserved(**kw)).count();
        let non_reserved = Keyword::ALL.iter().filter(|kw| is_non_reserved(**kw)).count();
        assert_eq!(reserved + non_reserved, Keyword::ALL.len());
        assert_eq!(reserved, 69);
    }

    #[test]
    fn test_identifier_tokens() {
        assert!(is_identifier_token(TokenKind::Identifier));
        assert!(is_identifier_token(TokenKind::DigitIdentifier));
        assert!(is_identifier_token(TokenKind::Keyword(Keyword::Analyze)));
        assert!(!is_identifier_token(TokenKind::Keyword(Keyword::Select)));
        assert!(!is_identifier_token(TokenKind::String));
    }

    #[test]
    fn test_comparison_operator() {
        assert_eq!(
            comparison_operator(TokenKind::Neq),
            Some(ComparisonOperator::Neq)
        );
        assert_eq!(comparison_operator(TokenKind::Plus), None);
    }
}
