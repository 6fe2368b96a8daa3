//! Per-line render token generation.
//!
//! The host pulls tokens line by line. Each line is computed from the [`HighlightIndex`] alone,
//! so [`HighlightIndex::tokenize_line`] is a plain function of the line number. The
//! [`TokensProvider`] protocol (initial state, tokenize, end state) is layered on top for hosts
//! that thread a state object between lines.

use crate::analysis::Token;
use crate::highlights::HighlightIndex;
use crate::tags::STYLE_FILLER;
use serde::{Deserialize, Serialize};

/// One rendered token: the style applies from `start_offset` up to the next token on the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderToken {
    /// 0-based column where the style starts.
    #[serde(rename = "startIndex")]
    pub start_offset: u32,
    /// Host style identifier.
    #[serde(rename = "scopes")]
    pub style: String,
}

impl RenderToken {
    /// Create a render token.
    pub fn new(start_offset: u32, style: impl Into<String>) -> Self {
        Self {
            start_offset,
            style: style.into(),
        }
    }
}

/// Build the render tokens for the spans selected on one line (backend order).
///
/// Every span yields a primary token at its start. A filler token is appended at the span's
/// end offset when the span is the last one selected, or when the next selected span starts
/// strictly after that offset. The combined list is then stably sorted by start offset.
pub fn render_line(selected: &[&Token]) -> Vec<RenderToken> {
    let mut tokens: Vec<RenderToken> = selected
        .iter()
        .map(|token| {
            RenderToken::new(
                token.range.start_column.saturating_sub(1),
                token.tag.render_style(),
            )
        })
        .collect();

    let fillers: Vec<RenderToken> = selected
        .iter()
        .enumerate()
        .filter_map(|(i, token)| {
            let end_offset = token.range.end_column.saturating_sub(1);
            match tokens.get(i + 1) {
                Some(next) if next.start_offset <= end_offset => None,
                _ => Some(RenderToken::new(end_offset, STYLE_FILLER)),
            }
        })
        .collect();

    tokens.extend(fillers);
    tokens.sort_by_key(|token| token.start_offset);
    tokens
}

impl HighlightIndex {
    /// Render tokens for `line`. Lines without spans (including lines past the end of the
    /// document) yield an empty list.
    pub fn tokenize_line(&self, line: u32) -> Vec<RenderToken> {
        let selected = self.starting_on(line);
        let tokens = render_line(&selected);
        tracing::trace!(line, spans = selected.len(), tokens = tokens.len(), "tokenized line");
        tokens
    }
}

/// Incremental tokenizer state: a counter of the line about to be tokenized.
///
/// Two cursors always compare equal. Hosts must therefore never skip re-tokenizing a line
/// because its incoming state matches a cached one; cached lines are invalidated by content
/// changes only.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCursor {
    line: u32,
}

impl LineCursor {
    /// A cursor positioned at `line`.
    pub fn at(line: u32) -> Self {
        Self { line }
    }

    /// The line this cursor selects spans for.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// The cursor for the following line.
    pub fn next(&self) -> Self {
        Self {
            line: self.line.saturating_add(1),
        }
    }
}

impl PartialEq for LineCursor {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for LineCursor {}

/// Tokens for one line plus the state to feed into the next call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens<S> {
    /// Render tokens, sorted by start offset.
    pub tokens: Vec<RenderToken>,
    /// State for the next line.
    pub end_state: S,
}

/// Host-facing incremental token provider protocol.
pub trait TokensProvider {
    /// State threaded between consecutive lines.
    type State: Clone + PartialEq;

    /// State for the first line of the document.
    fn initial_state(&self) -> Self::State;

    /// Tokenize one line. `line_text` is supplied by the host and may be ignored.
    fn tokenize(&self, line_text: &str, state: &Self::State) -> LineTokens<Self::State>;
}

/// [`TokensProvider`] reading from a [`HighlightIndex`].
#[derive(Debug, Clone, Copy)]
pub struct LineTokenizer<'a> {
    index: &'a HighlightIndex,
}

impl<'a> LineTokenizer<'a> {
    /// Create a tokenizer over `index`.
    pub fn new(index: &'a HighlightIndex) -> Self {
        Self { index }
    }
}

impl TokensProvider for LineTokenizer<'_> {
    type State = LineCursor;

    fn initial_state(&self) -> LineCursor {
        LineCursor::at(0)
    }

    fn tokenize(&self, _line_text: &str, state: &LineCursor) -> LineTokens<LineCursor> {
        LineTokens {
            tokens: self.index.tokenize_line(state.line()),
            end_state: state.next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Range;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_adjacent_spans_share_one_trailing_filler() {
        let index = HighlightIndex::from_tokens(vec![
            Token::new(Range::on_line(3, 1, 5), "literal"),
            Token::new(Range::on_line(3, 5, 8), "builtin"),
        ]);

        assert_eq!(
            index.tokenize_line(3),
            vec![
                RenderToken::new(0, "number"),
                RenderToken::new(4, "variable.predefined"),
                RenderToken::new(7, "operator"),
            ]
        );
    }

    #[test]
    fn test_separated_spans_each_get_a_filler() {
        let index = HighlightIndex::from_tokens(vec![
            Token::new(Range::on_line(1, 1, 3), "keyword"),
            Token::new(Range::on_line(1, 4, 8), "function"),
        ]);

        assert_eq!(
            index.tokenize_line(1),
            vec![
                RenderToken::new(0, "keyword"),
                RenderToken::new(2, "operator"),
                RenderToken::new(3, "function"),
                RenderToken::new(7, "operator"),
            ]
        );
    }

    #[test]
    fn test_unsorted_spans_are_sorted_by_offset() {
        // The next span in backend order starts before the first span ends, which suppresses
        // the first span's filler.
        let index = HighlightIndex::from_tokens(vec![
            Token::new(Range::on_line(2, 6, 9), "macro"),
            Token::new(Range::on_line(2, 1, 4), "keyword"),
        ]);

        let tokens = index.tokenize_line(2);
        assert_eq!(
            tokens,
            vec![
                RenderToken::new(0, "keyword"),
                RenderToken::new(3, "operator"),
                RenderToken::new(5, "number.hex"),
            ]
        );
        assert!(tokens.windows(2).all(|w| w[0].start_offset <= w[1].start_offset));
    }

    #[test]
    fn test_cursor_walk_never_skips_lines() {
        let index = HighlightIndex::from_tokens(vec![
            Token::new(Range::on_line(0, 1, 2), "a"),
            Token::new(Range::on_line(1, 1, 2), "b"),
            Token::new(Range::on_line(2, 1, 2), "c"),
        ]);
        let tokenizer = LineTokenizer::new(&index);

        let mut state = tokenizer.initial_state();
        let mut styles = Vec::new();
        for _ in 0..6 {
            let line = tokenizer.tokenize("", &state);
            assert_eq!(line.end_state.line(), state.line() + 1);
            styles.push(line.tokens.first().map(|t| t.style.clone()));
            state = line.end_state;
        }

        assert_eq!(
            styles,
            vec![
                Some("a".to_string()),
                Some("b".to_string()),
                Some("c".to_string()),
                None,
                None,
                None,
            ]
        );
    }

    #[test]
    fn test_cursors_always_compare_equal() {
        assert_eq!(LineCursor::at(0), LineCursor::at(41));
        assert_eq!(LineCursor::default().line(), 0);
    }

    #[test]
    fn test_render_token_uses_host_field_names() {
        let value = serde_json::to_value(RenderToken::new(4, "key")).unwrap();
        assert_eq!(value, serde_json::json!({ "startIndex": 4, "scopes": "key" }));
    }
}
