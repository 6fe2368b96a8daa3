//! Hover provider.

use super::settle;
use crate::backend::AnalysisBackend;
use crate::session::DocumentSession;
use editor_bridge::Position;
use serde::{Deserialize, Serialize};

/// A markdown string, as rendered by the host's hover widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownString {
    /// Markdown source.
    pub value: String,
}

/// Hover contents for one position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// Rendered blocks, top to bottom.
    pub contents: Vec<MarkdownString>,
}

/// Hover contents at `pos`, or `None` if the backend has nothing to say.
pub fn provide_hover<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<Hover> {
    let text = settle(session.hover(pos), "hover")?;
    Some(Hover {
        contents: vec![MarkdownString { value: text }],
    })
}
