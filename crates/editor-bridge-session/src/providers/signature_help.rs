//! Signature help provider.

use super::settle;
use crate::backend::AnalysisBackend;
use crate::session::DocumentSession;
use editor_bridge::Position;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signature help wrapped the way the host's parameter hints widget expects it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignatureHelpResult {
    /// The backend's signature help payload.
    pub value: Value,
}

/// Signature help at `pos`.
pub fn provide_signature_help<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<SignatureHelpResult> {
    settle(session.signature_help(pos), "signature_help")
        .map(|value| SignatureHelpResult { value })
}
