//! Cache of the latest highlight spans for a whole document.

use crate::analysis::Token;
use std::collections::BTreeMap;

/// The most recent flat list of highlight spans, indexed by start line.
///
/// The index is replaced wholesale on every analysis pass and is immutable in between.
/// Spans are looked up by their *start* line only: a span covering several lines belongs to
/// its first line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightIndex {
    tokens: Vec<Token>,
    // start line -> positions in `tokens`, in backend order
    by_start_line: BTreeMap<u32, Vec<usize>>,
}

impl HighlightIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an index over `tokens`.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        let mut index = Self::new();
        index.replace(tokens);
        index
    }

    /// Replace every cached span with `tokens`.
    pub fn replace(&mut self, tokens: Vec<Token>) {
        self.by_start_line.clear();
        for (i, token) in tokens.iter().enumerate() {
            self.by_start_line
                .entry(token.range.start_line)
                .or_default()
                .push(i);
        }
        self.tokens = tokens;
    }

    /// Drop every cached span.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.by_start_line.clear();
    }

    /// All cached spans, in backend order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of cached spans.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns `true` if no spans are cached.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Spans whose start line equals `line`, in backend order.
    pub fn starting_on(&self, line: u32) -> Vec<&Token> {
        self.by_start_line
            .get(&line)
            .map(|positions| positions.iter().map(|&i| &self.tokens[i]).collect())
            .unwrap_or_default()
    }

    /// The largest start line of any cached span.
    pub fn last_start_line(&self) -> Option<u32> {
        self.by_start_line.keys().next_back().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Range;

    #[test]
    fn test_starting_on_preserves_backend_order() {
        let index = HighlightIndex::from_tokens(vec![
            Token::new(Range::on_line(2, 9, 12), "b"),
            Token::new(Range::on_line(1, 1, 3), "x"),
            Token::new(Range::on_line(2, 1, 4), "a"),
        ]);

        let tags: Vec<&str> = index
            .starting_on(2)
            .iter()
            .map(|t| t.tag.as_str())
            .collect();
        assert_eq!(tags, vec!["b", "a"]);
        assert!(index.starting_on(3).is_empty());
        assert_eq!(index.last_start_line(), Some(2));
    }

    #[test]
    fn test_multi_line_span_belongs_to_start_line() {
        let index =
            HighlightIndex::from_tokens(vec![Token::new(Range::new(4, 1, 6, 2), "comment")]);
        assert_eq!(index.starting_on(4).len(), 1);
        assert!(index.starting_on(5).is_empty());
        assert!(index.starting_on(6).is_empty());
    }

    #[test]
    fn test_replace_discards_previous_spans() {
        let mut index = HighlightIndex::from_tokens(vec![Token::new(Range::on_line(1, 1, 2), "a")]);
        index.replace(vec![Token::new(Range::on_line(3, 1, 2), "b")]);
        assert!(index.starting_on(1).is_empty());
        assert_eq!(index.len(), 1);

        index.clear();
        assert!(index.is_empty());
        assert_eq!(index.last_start_line(), None);
    }
}
