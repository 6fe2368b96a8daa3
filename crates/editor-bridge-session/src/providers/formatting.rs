//! On-type formatting provider.

use super::settle;
use crate::backend::{AnalysisBackend, TextEdit};
use crate::session::DocumentSession;
use editor_bridge::Position;

/// Edits to apply after `ch` was typed at `pos`.
pub fn provide_on_type_formatting_edits<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
    ch: char,
) -> Option<Vec<TextEdit>> {
    settle(session.on_type_formatting(pos, ch), "on_type_formatting")
}
