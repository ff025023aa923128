//! Terminal rules: identifiers, names, literals and small keyword choices.

use core::fmt;

use serde::Serialize;

use crate::lexer::Span;

/// How an identifier was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IdentifierKind {
    /// Plain identifier or non-reserved keyword.
    Unquoted,
    /// `"double quoted"`.
    Quoted,
    /// `` `back quoted` ``.
    BackQuoted,
    /// Starts with a digit, e.g. `1st`.
    Digit,
}

/// An identifier, keeping the raw token text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Identifier {
    pub kind: IdentifierKind,
    /// Raw source text, including quotes.
    pub text: String,
    pub span: Span,
}

impl Identifier {
    /// Returns the identifier name with surrounding quotes removed and
    /// doubled quotes collapsed.
    #[must_use]
    pub fn value(&self) -> String {
        match self.kind {
            IdentifierKind::Unquoted | IdentifierKind::Digit => self.text.clone(),
            IdentifierKind::Quoted => unquote(&self.text, '"'),
            IdentifierKind::BackQuoted => unquote(&self.text, '`'),
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn unquote(text: &str, quote: char) -> String {
    let inner = text
        .strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .unwrap_or(text);
    let doubled: String = [quote, quote].iter().collect();
    inner.replace(&doubled, &quote.to_string())
}

/// A dotted name such as `catalog.schema.table`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct QualifiedName {
    pub parts: Vec<Identifier>,
    pub span: Span,
}

impl QualifiedName {
    /// Returns the last part of the name.
    #[must_use]
    pub fn suffix(&self) -> Option<&Identifier> {
        self.parts.last()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// A string literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub enum StringLiteral {
    /// `'text'`
    Basic { text: String, span: Span },
    /// `U&'text'`, optionally followed by `UESCAPE 'c'`.
    Unicode {
        text: String,
        uescape: Option<String>,
        span: Span,
    },
}

impl StringLiteral {
    /// Raw text of the literal token.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Basic { text, .. } | Self::Unicode { text, .. } => text,
        }
    }

    /// Returns the literal contents without quotes, with `''` collapsed.
    /// Unicode escapes are left as written.
    #[must_use]
    pub fn value(&self) -> String {
        let text = self.text();
        let text = text.strip_prefix("U&").or_else(|| text.strip_prefix("u&")).unwrap_or(text);
        unquote(text, '\'')
    }

    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Basic { span, .. } | Self::Unicode { span, .. } => *span,
        }
    }
}

/// Numeric literal category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NumberKind {
    Decimal,
    Double,
    Integer,
}

/// A numeric literal, keeping the raw text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Number {
    pub kind: NumberKind,
    pub text: String,
    pub span: Span,
}

/// `TRUE` or `FALSE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct BooleanValue {
    pub value: bool,
    pub span: Span,
}

/// `=`, `<>`, `<`, `<=`, `>`, `>=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOperator {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl ComparisonOperator {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Neq => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }
}

/// `ALL`, `SOME` or `ANY` before a subquery comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonQuantifier {
    All,
    Some,
    Any,
}

/// `DISTINCT` or `ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SetQuantifier {
    Distinct,
    All,
}

/// Unit of an interval literal or interval type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum IntervalField {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

/// Unicode normal form used by `NORMALIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NormalForm {
    Nfd,
    Nfc,
    Nfkd,
    Nfkc,
}

/// `IGNORE NULLS` or `RESPECT NULLS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NullTreatment {
    Ignore,
    Respect,
}

/// Leading `+` or `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Sign {
    Plus,
    Minus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(kind: IdentifierKind, text: &str) -> Identifier {
        Identifier {
            kind,
            text: text.to_string(),
            span: Span::default(),
        }
    }

    #[test]
    fn test_identifier_value() {
        assert_eq!(ident(IdentifierKind::Unquoted, "abc").value(), "abc");
        assert_eq!(ident(IdentifierKind::Quoted, "\"a\"\"b\"").value(), "a\"b");
        assert_eq!(ident(IdentifierKind::BackQuoted, "`x y`").value(), "x y");
    }

    #[test]
    fn test_qualified_name_display() {
        let name = QualifiedName {
            parts: vec![
                ident(IdentifierKind::Unquoted, "c"),
                ident(IdentifierKind::Quoted, "\"s\""),
            ],
            span: Span::default(),
        };
        assert_eq!(name.to_string(), "c.\"s\"");
        assert_eq!(name.suffix().map(Identifier::value).as_deref(), Some("s"));
    }

    #[test]
    fn test_string_value() {
        let basic = StringLiteral::Basic {
            text: "'it''s'".to_string(),
            span: Span::default(),
        };
        assert_eq!(basic.value(), "it's");
        let unicode = StringLiteral::Unicode {
            text: "U&'\\0041'".to_string(),
            uescape: None,
            span: Span::default(),
        };
        assert_eq!(unicode.value(), "\\0041");
    }
}
