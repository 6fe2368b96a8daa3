//! Document symbols and folding ranges. Both are whole-document queries forwarded as-is.

use super::settle;
use crate::backend::AnalysisBackend;
use crate::session::DocumentSession;
use serde_json::Value;

/// Document outline.
pub fn provide_document_symbols<B: AnalysisBackend>(
    session: &DocumentSession<B>,
) -> Option<Vec<Value>> {
    settle(session.document_symbols(), "document_symbols")
}

/// Folding ranges of the document.
pub fn provide_folding_ranges<B: AnalysisBackend>(
    session: &DocumentSession<B>,
) -> Option<Vec<Value>> {
    settle(session.folding_ranges(), "folding_ranges")
}
