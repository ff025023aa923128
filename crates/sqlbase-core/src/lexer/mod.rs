//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer for the SqlBase dialect that
//! produces a stream of tokens. Whitespace and comments are kept on a hidden
//! channel so the token stream can be re-rendered exactly.

mod span;
mod token;
mod tokenizer;

pub use span::{Location, Span};
pub use token::{Channel, Keyword, Token, TokenKind};
pub use tokenizer::Lexer;
