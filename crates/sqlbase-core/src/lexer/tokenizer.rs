//! SQL Tokenizer implementation.

use super::{Keyword, Location, Span, Token, TokenKind};

/// A lexer that tokenizes SQL input.
pub struct Lexer<'a> {
    /// The input source code.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position of the start of the current token.
    start: usize,
    /// Current line/column.
    line: u32,
    column: u32,
    /// Line/column of the start of the current token.
    start_location: Location,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
            line: 1,
            column: 1,
            start_location: Location::new(1, 1),
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the next character without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    /// Creates a span from start to current position.
    const fn make_span(&self) -> Span {
        Span::new(self.start, self.pos)
    }

    /// Creates a token with the current span.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            kind,
            &self.input[self.start..self.pos],
            self.make_span(),
            self.start_location,
        )
    }

    fn is_identifier_char(c: char) -> bool {
        c.is_ascii_alphanumeric() || c == '_' || c == '@' || c == ':'
    }

    /// Scans a whitespace run.
    fn scan_whitespace(&mut self) -> Token {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.make_token(TokenKind::Whitespace)
    }

    /// Scans a `-- ...` comment up to (and including) the line break.
    fn scan_simple_comment(&mut self) -> Token {
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
        }
        self.make_token(TokenKind::SimpleComment)
    }

    /// Scans a `/* ... */` comment.
    fn scan_bracketed_comment(&mut self) -> Token {
        self.advance(); // /
        self.advance(); // *
        loop {
            match self.advance() {
                Some('*') if self.peek() == Some('/') => {
                    self.advance();
                    return self.make_token(TokenKind::BracketedComment);
                }
                Some(_) => {}
                None => return self.make_token(TokenKind::Unrecognized),
            }
        }
    }

    /// Scans an identifier or keyword.
    fn scan_identifier(&mut self) -> Token {
        while self.peek().is_some_and(Self::is_identifier_char) {
            self.advance();
        }

        let text = &self.input[self.start..self.pos];

        match Keyword::from_str(text) {
            Some(Keyword::Time) => self
                .scan_compound(&["WITH", "TIME", "ZONE"], TokenKind::TimeWithTimeZone)
                .unwrap_or_else(|| self.make_token(TokenKind::Keyword(Keyword::Time))),
            Some(Keyword::Timestamp) => self
                .scan_compound(&["WITH", "TIME", "ZONE"], TokenKind::TimestampWithTimeZone)
                .unwrap_or_else(|| self.make_token(TokenKind::Keyword(Keyword::Timestamp))),
            Some(keyword) => self.make_token(TokenKind::Keyword(keyword)),
            None if text.eq_ignore_ascii_case("DOUBLE") => self
                .scan_compound(&["PRECISION"], TokenKind::DoublePrecision)
                .unwrap_or_else(|| self.make_token(TokenKind::Identifier)),
            None => self.make_token(TokenKind::Identifier),
        }
    }

    /// Tries to extend the word just scanned into a whitespace-separated
    /// multi-word token such as `TIME WITH TIME ZONE`. On mismatch the
    /// position is restored and `None` is returned.
    fn scan_compound(&mut self, words: &[&str], compound: TokenKind) -> Option<Token> {
        let saved = (self.pos, self.line, self.column);
        for word in words {
            let separated = self.peek().is_some_and(char::is_whitespace);
            while self.peek().is_some_and(char::is_whitespace) {
                self.advance();
            }
            let word_start = self.pos;
            while self.peek().is_some_and(Self::is_identifier_char) {
                self.advance();
            }
            if !separated || !self.input[word_start..self.pos].eq_ignore_ascii_case(word) {
                (self.pos, self.line, self.column) = saved;
                return None;
            }
        }
        Some(self.make_token(compound))
    }

    /// Scans a quoted identifier (e.g., "column name" or `column name`).
    fn scan_quoted_identifier(&mut self, quote: char) -> Token {
        self.advance(); // consume opening quote

        loop {
            match self.peek() {
                Some(c) if c == quote => {
                    // Doubled quote is an escaped quote
                    if self.peek_next() == Some(quote) {
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => return self.make_token(TokenKind::Unrecognized),
            }
        }

        self.advance(); // consume closing quote
        let kind = if quote == '`' {
            TokenKind::BackquotedIdentifier
        } else {
            TokenKind::QuotedIdentifier
        };
        self.make_token(kind)
    }

    /// Scans a number (integer, decimal or double), or a digit-prefixed
    /// identifier such as `1st`.
    fn scan_number(&mut self) -> Token {
        let mut kind = TokenKind::IntegerValue;

        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        if self.peek() == Some('.') {
            kind = TokenKind::DecimalValue;
            self.advance(); // consume .
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        // Exponent
        if self.peek().is_some_and(|c| c == 'e' || c == 'E') {
            let saved = (self.pos, self.line, self.column);
            self.advance();
            if self.peek().is_some_and(|c| c == '+' || c == '-') {
                self.advance();
            }
            if self.peek().is_some_and(|c| c.is_ascii_digit()) {
                while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                    self.advance();
                }
                kind = TokenKind::DoubleValue;
            } else {
                (self.pos, self.line, self.column) = saved;
            }
        }

        if kind == TokenKind::IntegerValue && self.peek().is_some_and(Self::is_identifier_char) {
            while self.peek().is_some_and(Self::is_identifier_char) {
                self.advance();
            }
            return self.make_token(TokenKind::DigitIdentifier);
        }

        self.make_token(kind)
    }

    /// Scans a string literal body, leaving the token text intact.
    fn scan_string(&mut self, kind: TokenKind) -> Token {
        self.advance(); // consume opening quote

        loop {
            match self.peek() {
                Some('\'') => {
                    if self.peek_next() == Some('\'') {
                        self.advance();
                        self.advance();
                    } else {
                        break;
                    }
                }
                Some(_) => {
                    self.advance();
                }
                None => return self.make_token(TokenKind::Unrecognized),
            }
        }

        self.advance(); // consume closing quote
        self.make_token(kind)
    }

    /// Scans a binary literal (X'...' or x'...').
    fn scan_binary(&mut self) -> Token {
        self.advance(); // consume X/x
        self.advance(); // consume opening quote

        loop {
            match self.advance() {
                Some('\'') => return self.make_token(TokenKind::BinaryLiteral),
                Some(c) if c.is_ascii_hexdigit() || c == ' ' => {}
                _ => return self.make_token(TokenKind::Unrecognized),
            }
        }
    }

    /// Scans the next token, including hidden-channel tokens.
    #[must_use]
    pub fn next_token(&mut self) -> Token {
        self.start = self.pos;
        self.start_location = Location::new(self.line, self.column);

        let Some(c) = self.peek() else {
            return Token::eof(self.pos, self.start_location);
        };

        match c {
            c if c.is_whitespace() => self.scan_whitespace(),
            '-' if self.peek_next() == Some('-') => self.scan_simple_comment(),
            '/' if self.peek_next() == Some('*') => self.scan_bracketed_comment(),

            // String literals
            '\'' => self.scan_string(TokenKind::String),
            'U' | 'u' if self.input[self.pos + 1..].starts_with("&'") => {
                self.advance(); // U
                self.advance(); // &
                self.scan_string(TokenKind::UnicodeString)
            }

            // Binary literals
            'X' | 'x' if self.peek_next() == Some('\'') => self.scan_binary(),

            // Quoted identifiers
            '"' | '`' => self.scan_quoted_identifier(c),

            // Numbers
            c if c.is_ascii_digit() => self.scan_number(),
            '.' if self.peek_next().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(),

            // Identifiers and keywords
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            _ => {
                self.advance();
                self.scan_operator(c)
            }
        }
    }

    /// Scans an operator or delimiter whose first character was consumed.
    fn scan_operator(&mut self, c: char) -> Token {
        let kind = match c {
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            '+' => TokenKind::Plus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '-' => self.follow('>', TokenKind::Arrow, TokenKind::Minus),
            '=' => self.follow('>', TokenKind::DoubleArrow, TokenKind::Eq),
            '<' => match self.peek() {
                Some('=') => {
                    self.advance();
                    TokenKind::Lte
                }
                Some('>') => {
                    self.advance();
                    TokenKind::Neq
                }
                _ => TokenKind::Lt,
            },
            '>' => self.follow('=', TokenKind::Gte, TokenKind::Gt),
            '!' => self.follow('=', TokenKind::Neq, TokenKind::Unrecognized),
            '|' => self.follow('|', TokenKind::Concat, TokenKind::Unrecognized),
            _ => TokenKind::Unrecognized,
        };
        self.make_token(kind)
    }

    fn follow(&mut self, next: char, matched: TokenKind, otherwise: TokenKind) -> TokenKind {
        if self.peek() == Some(next) {
            self.advance();
            matched
        } else {
            otherwise
        }
    }

    /// Tokenizes the entire input, including whitespace and comments.
    #[must_use]
    pub fn tokenize_with_trivia(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Tokenizes the entire input and returns the default-channel tokens.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        self.tokenize_with_trivia()
            .into_iter()
            .filter(|token| !token.is_hidden())
            .collect()
    }
}
