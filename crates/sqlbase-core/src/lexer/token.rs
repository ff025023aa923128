//! Token types for the SQL lexer.

use core::fmt;

use serde::Serialize;

use super::{Location, Span};

macro_rules! keywords {
    ($($variant:ident => $text:literal,)*) => {
        /// SQL keywords of the dialect.
        ///
        /// Whether a keyword may also be used as an identifier is decided by
        /// [`crate::parser::is_non_reserved`].
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum Keyword {
            $(
                #[doc = concat!("`", $text, "`")]
                $variant,
            )*
        }

        impl Keyword {
            /// Every keyword, in alphabetical order.
            pub const ALL: &'static [Self] = &[$(Self::$variant,)*];

            /// Attempts to parse a keyword from a string (case-insensitive).
            #[must_use]
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                match s.to_ascii_uppercase().as_str() {
                    $($text => Some(Self::$variant),)*
                    _ => None,
                }
            }

            /// Returns the keyword as a string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)*
                }
            }
        }
    };
}

keywords! {
    Add => "ADD",
    Admin => "ADMIN",
    All => "ALL",
    Alter => "ALTER",
    Analyze => "ANALYZE",
    And => "AND",
    Any => "ANY",
    Array => "ARRAY",
    As => "AS",
    Asc => "ASC",
    At => "AT",
    Bernoulli => "BERNOULLI",
    Between => "BETWEEN",
    By => "BY",
    Call => "CALL",
    Called => "CALLED",
    Cascade => "CASCADE",
    Case => "CASE",
    Cast => "CAST",
    Catalogs => "CATALOGS",
    Column => "COLUMN",
    Columns => "COLUMNS",
    Comment => "COMMENT",
    Commit => "COMMIT",
    Committed => "COMMITTED",
    Constraint => "CONSTRAINT",
    Create => "CREATE",
    Cross => "CROSS",
    Cube => "CUBE",
    Current => "CURRENT",
    CurrentDate => "CURRENT_DATE",
    CurrentRole => "CURRENT_ROLE",
    CurrentTime => "CURRENT_TIME",
    CurrentTimestamp => "CURRENT_TIMESTAMP",
    CurrentUser => "CURRENT_USER",
    Data => "DATA",
    Date => "DATE",
    Day => "DAY",
    Deallocate => "DEALLOCATE",
    Definer => "DEFINER",
    Delete => "DELETE",
    Desc => "DESC",
    Describe => "DESCRIBE",
    Deterministic => "DETERMINISTIC",
    Disabled => "DISABLED",
    Distinct => "DISTINCT",
    Distributed => "DISTRIBUTED",
    Drop => "DROP",
    Else => "ELSE",
    Enabled => "ENABLED",
    End => "END",
    Enforced => "ENFORCED",
    Escape => "ESCAPE",
    Except => "EXCEPT",
    Excluding => "EXCLUDING",
    Execute => "EXECUTE",
    Exists => "EXISTS",
    Explain => "EXPLAIN",
    External => "EXTERNAL",
    Extract => "EXTRACT",
    False => "FALSE",
    Fetch => "FETCH",
    Filter => "FILTER",
    First => "FIRST",
    Following => "FOLLOWING",
    For => "FOR",
    Format => "FORMAT",
    From => "FROM",
    Full => "FULL",
    Function => "FUNCTION",
    Functions => "FUNCTIONS",
    Grant => "GRANT",
    Granted => "GRANTED",
    Grants => "GRANTS",
    Graphviz => "GRAPHVIZ",
    Group => "GROUP",
    Grouping => "GROUPING",
    Groups => "GROUPS",
    Having => "HAVING",
    Hour => "HOUR",
    If => "IF",
    Ignore => "IGNORE",
    In => "IN",
    Including => "INCLUDING",
    Inner => "INNER",
    Input => "INPUT",
    Insert => "INSERT",
    Intersect => "INTERSECT",
    Interval => "INTERVAL",
    Into => "INTO",
    Invoker => "INVOKER",
    Io => "IO",
    Is => "IS",
    Isolation => "ISOLATION",
    Join => "JOIN",
    Json => "JSON",
    Key => "KEY",
    Language => "LANGUAGE",
    Last => "LAST",
    Lateral => "LATERAL",
    Left => "LEFT",
    Level => "LEVEL",
    Like => "LIKE",
    Limit => "LIMIT",
    Localtime => "LOCALTIME",
    Localtimestamp => "LOCALTIMESTAMP",
    Logical => "LOGICAL",
    Map => "MAP",
    Materialized => "MATERIALIZED",
    Minute => "MINUTE",
    Month => "MONTH",
    Name => "NAME",
    Natural => "NATURAL",
    Nfc => "NFC",
    Nfd => "NFD",
    Nfkc => "NFKC",
    Nfkd => "NFKD",
    No => "NO",
    None => "NONE",
    Normalize => "NORMALIZE",
    Not => "NOT",
    Null => "NULL",
    Nullif => "NULLIF",
    Nulls => "NULLS",
    Of => "OF",
    Offset => "OFFSET",
    On => "ON",
    Only => "ONLY",
    Option => "OPTION",
    Or => "OR",
    Order => "ORDER",
    Ordinality => "ORDINALITY",
    Outer => "OUTER",
    Output => "OUTPUT",
    Over => "OVER",
    Partition => "PARTITION",
    Partitions => "PARTITIONS",
    Position => "POSITION",
    Preceding => "PRECEDING",
    Prepare => "PREPARE",
    Primary => "PRIMARY",
    Privileges => "PRIVILEGES",
    Properties => "PROPERTIES",
    Range => "RANGE",
    Read => "READ",
    Recursive => "RECURSIVE",
    Refresh => "REFRESH",
    Rely => "RELY",
    Rename => "RENAME",
    Repeatable => "REPEATABLE",
    Replace => "REPLACE",
    Reset => "RESET",
    Respect => "RESPECT",
    Restrict => "RESTRICT",
    Return => "RETURN",
    Returns => "RETURNS",
    Revoke => "REVOKE",
    Right => "RIGHT",
    Role => "ROLE",
    Roles => "ROLES",
    Rollback => "ROLLBACK",
    Rollup => "ROLLUP",
    Row => "ROW",
    Rows => "ROWS",
    Schema => "SCHEMA",
    Schemas => "SCHEMAS",
    Second => "SECOND",
    Security => "SECURITY",
    Select => "SELECT",
    Serializable => "SERIALIZABLE",
    Session => "SESSION",
    Set => "SET",
    Sets => "SETS",
    Show => "SHOW",
    Some => "SOME",
    Sql => "SQL",
    Start => "START",
    Stats => "STATS",
    Substring => "SUBSTRING",
    System => "SYSTEM",
    SystemTime => "SYSTEM_TIME",
    Table => "TABLE",
    Tables => "TABLES",
    Tablesample => "TABLESAMPLE",
    Temporary => "TEMPORARY",
    Text => "TEXT",
    Then => "THEN",
    Time => "TIME",
    Timestamp => "TIMESTAMP",
    To => "TO",
    Transaction => "TRANSACTION",
    True => "TRUE",
    Truncate => "TRUNCATE",
    TryCast => "TRY_CAST",
    Type => "TYPE",
    Uescape => "UESCAPE",
    Unbounded => "UNBOUNDED",
    Uncommitted => "UNCOMMITTED",
    Union => "UNION",
    Unique => "UNIQUE",
    Unnest => "UNNEST",
    Update => "UPDATE",
    Use => "USE",
    User => "USER",
    Using => "USING",
    Validate => "VALIDATE",
    Values => "VALUES",
    Verbose => "VERBOSE",
    Version => "VERSION",
    View => "VIEW",
    When => "WHEN",
    Where => "WHERE",
    With => "WITH",
    Work => "WORK",
    Write => "WRITE",
    Year => "YEAR",
    Zone => "ZONE",
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of token.
///
/// Kinds carry no payload; the raw text lives on [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenKind {
    /// SQL keyword
    Keyword(Keyword),

    // Identifiers
    /// Unquoted identifier (e.g., `column_name`)
    Identifier,
    /// Double-quoted identifier (e.g., `"column name"`)
    QuotedIdentifier,
    /// Backquoted identifier (e.g., `` `column` ``)
    BackquotedIdentifier,
    /// Identifier starting with a digit (e.g., `1st`)
    DigitIdentifier,

    // Literals
    /// String literal (e.g., 'hello')
    String,
    /// Unicode string literal (e.g., U&'hello')
    UnicodeString,
    /// Binary literal (e.g., X'1234')
    BinaryLiteral,
    /// Integer literal (e.g., 42)
    IntegerValue,
    /// Decimal literal (e.g., 3.14)
    DecimalValue,
    /// Double literal (e.g., 1E10)
    DoubleValue,

    // Multi-word type names
    /// `TIME WITH TIME ZONE`
    TimeWithTimeZone,
    /// `TIMESTAMP WITH TIME ZONE`
    TimestampWithTimeZone,
    /// `DOUBLE PRECISION`
    DoublePrecision,

    // Operators
    /// =
    Eq,
    /// <> or !=
    Neq,
    /// <
    Lt,
    /// <=
    Lte,
    /// >
    Gt,
    /// >=
    Gte,
    /// +
    Plus,
    /// -
    Minus,
    /// *
    Asterisk,
    /// /
    Slash,
    /// %
    Percent,
    /// ||
    Concat,
    /// ->
    Arrow,
    /// =>
    DoubleArrow,

    // Delimiters
    /// (
    LeftParen,
    /// )
    RightParen,
    /// [
    LeftBracket,
    /// ]
    RightBracket,
    /// ,
    Comma,
    /// .
    Dot,
    /// ?
    Question,

    // Hidden channel
    /// Whitespace run
    Whitespace,
    /// `-- comment`
    SimpleComment,
    /// `/* comment */`
    BracketedComment,

    // Special
    /// Invalid/unknown input
    Unrecognized,
    /// End of input
    Eof,
}

impl TokenKind {
    /// Returns true for kinds that the lexer places on the hidden channel.
    #[must_use]
    pub const fn is_trivia(&self) -> bool {
        matches!(
            self,
            Self::Whitespace | Self::SimpleComment | Self::BracketedComment
        )
    }

    /// Returns the fixed spelling of the token, if it has one.
    #[must_use]
    pub const fn symbol(&self) -> Option<&'static str> {
        let text = match self {
            Self::Keyword(kw) => kw.as_str(),
            Self::TimeWithTimeZone => "TIME WITH TIME ZONE",
            Self::TimestampWithTimeZone => "TIMESTAMP WITH TIME ZONE",
            Self::DoublePrecision => "DOUBLE PRECISION",
            Self::Eq => "=",
            Self::Neq => "<>",
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Asterisk => "*",
            Self::Slash => "/",
            Self::Percent => "%",
            Self::Concat => "||",
            Self::Arrow => "->",
            Self::DoubleArrow => "=>",
            Self::LeftParen => "(",
            Self::RightParen => ")",
            Self::LeftBracket => "[",
            Self::RightBracket => "]",
            Self::Comma => ",",
            Self::Dot => ".",
            Self::Question => "?",
            _ => return None,
        };
        Some(text)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return write!(f, "'{symbol}'");
        }
        let name = match self {
            Self::Identifier => "<identifier>",
            Self::QuotedIdentifier => "<quoted identifier>",
            Self::BackquotedIdentifier => "<backquoted identifier>",
            Self::DigitIdentifier => "<digit identifier>",
            Self::String => "<string>",
            Self::UnicodeString => "<unicode string>",
            Self::BinaryLiteral => "<binary literal>",
            Self::IntegerValue => "<integer>",
            Self::DecimalValue => "<decimal>",
            Self::DoubleValue => "<double>",
            Self::Whitespace => "<whitespace>",
            Self::SimpleComment | Self::BracketedComment => "<comment>",
            Self::Unrecognized => "<unrecognized>",
            Self::Eof => "<EOF>",
            _ => "<token>",
        };
        f.write_str(name)
    }
}

/// The channel a token is emitted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Channel {
    /// Tokens the parser consumes.
    #[default]
    Default,
    /// Whitespace and comments; skipped by the parser.
    Hidden,
}

/// A token with its raw text and location in the source code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The raw source text of the token.
    pub text: String,
    /// The location in the source code.
    pub span: Span,
    /// Line and column of the first character.
    pub location: Location,
    /// Default or hidden channel.
    pub channel: Channel,
}

impl Token {
    /// Creates a new default-channel token.
    #[must_use]
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span, location: Location) -> Self {
        let channel = if kind.is_trivia() {
            Channel::Hidden
        } else {
            Channel::Default
        };
        Self {
            kind,
            text: text.into(),
            span,
            location,
            channel,
        }
    }

    /// Creates an end-of-input token at the given offset.
    #[must_use]
    pub fn eof(offset: usize, location: Location) -> Self {
        Self::new(TokenKind::Eof, "", Span::new(offset, offset), location)
    }

    /// Returns true if this is an EOF token.
    #[must_use]
    pub const fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// Returns true if this is a keyword.
    #[must_use]
    pub const fn is_keyword(&self) -> bool {
        matches!(self.kind, TokenKind::Keyword(_))
    }

    /// Returns the keyword if this is a keyword token.
    #[must_use]
    pub const fn as_keyword(&self) -> Option<Keyword> {
        match &self.kind {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Returns true if the parser skips this token.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.channel == Channel::Hidden
    }
}
