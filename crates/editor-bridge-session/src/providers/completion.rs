//! Completion provider.

use super::settle;
use crate::backend::AnalysisBackend;
use crate::session::DocumentSession;
use editor_bridge::Position;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Completion items for one request; items are forwarded in the backend's shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionList {
    /// Completion items.
    pub suggestions: Vec<Value>,
}

/// Completion items at `pos`, forwarded unmodified.
pub fn provide_completion_items<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<CompletionList> {
    settle(session.completions(pos), "completions")
        .map(|suggestions| CompletionList { suggestions })
}
