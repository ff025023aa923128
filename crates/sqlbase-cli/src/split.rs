//! Splitting a script into statements.

use sqlbase_core::{Lexer, Token, TokenKind};

/// Splits `sql` into the token runs between top-level `;` separators.
///
/// A `;` inside a string, quoted identifier or comment belongs to that
/// token and never splits. Empty pieces are dropped.
pub fn split_statements(sql: &str) -> Vec<Vec<Token>> {
    let mut pieces = Vec::new();
    let mut current = Vec::new();
    for token in Lexer::new(sql).tokenize() {
        if is_separator(&token) || token.is_eof() {
            if !current.is_empty() {
                pieces.push(std::mem::take(&mut current));
            }
        } else {
            current.push(token);
        }
    }
    pieces
}

fn is_separator(token: &Token) -> bool {
    token.kind == TokenKind::Unrecognized && token.text == ";"
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(sql: &str) -> Vec<String> {
        split_statements(sql)
            .into_iter()
            .map(|piece| {
                piece
                    .iter()
                    .map(|token| token.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }

    #[test]
    fn test_splits_at_semicolons() {
        assert_eq!(
            texts("SELECT 1; SHOW TABLES;\nCOMMIT"),
            vec!["SELECT 1", "SHOW TABLES", "COMMIT"]
        );
    }

    #[test]
    fn test_quoted_semicolons_do_not_split() {
        assert_eq!(
            texts("SELECT ';' AS \"a;b\" -- c;d\n; VALUES 1"),
            vec!["SELECT ';' AS \"a;b\"", "VALUES 1"]
        );
    }

    #[test]
    fn test_empty_pieces_are_dropped() {
        assert!(split_statements(" ;; -- nothing\n").is_empty());
    }
}
