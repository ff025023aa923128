//! Parser configuration.

use serde::Deserialize;

/// Default maximum nesting depth.
pub const DEFAULT_RECURSION_LIMIT: usize = 100;

/// Options controlling a [`Parser`](super::Parser).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    /// Maximum nesting of expressions, queries, relations, types and
    /// statements before parsing fails with
    /// [`ParseErrorKind::RecursionLimitExceeded`](super::ParseErrorKind).
    pub recursion_limit: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl ParserOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum nesting depth.
    #[must_use]
    pub const fn with_recursion_limit(mut self, limit: usize) -> Self {
        self.recursion_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let options = ParserOptions::new().with_recursion_limit(8);
        assert_eq!(options.recursion_limit, 8);
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let options: ParserOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParserOptions::default());
        let options: ParserOptions = serde_json::from_str(r#"{"recursion_limit": 12}"#).unwrap();
        assert_eq!(options.recursion_limit, 12);
    }
}
