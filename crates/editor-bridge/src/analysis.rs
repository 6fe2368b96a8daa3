//! Results of a full analysis pass over one document.

use crate::diagnostics::Diagnostic;
use crate::position::Range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic classification of a span, as reported by the backend (e.g. `"keyword"`, `"macro"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SemanticTag(String);

impl SemanticTag {
    /// Create a tag from its backend name.
    pub fn new(tag: impl Into<String>) -> Self {
        Self(tag.into())
    }

    /// The tag name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SemanticTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SemanticTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A tagged span of the document.
///
/// Several tokens may share a line, and the backend does not guarantee any ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Span covered by the token (1-based, end column exclusive).
    pub range: Range,
    /// Semantic classification.
    pub tag: SemanticTag,
}

impl Token {
    /// Create a new token.
    pub fn new(range: Range, tag: impl Into<SemanticTag>) -> Self {
        Self {
            range,
            tag: tag.into(),
        }
    }
}

/// Output of one full analysis pass. Each pass replaces the previous one wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Diagnostics, in backend order.
    pub diagnostics: Vec<Diagnostic>,
    /// Highlight spans, in backend order.
    pub highlights: Vec<Token>,
}

impl AnalysisResult {
    /// Create a result from its parts.
    pub fn new(diagnostics: Vec<Diagnostic>, highlights: Vec<Token>) -> Self {
        Self {
            diagnostics,
            highlights,
        }
    }
}
