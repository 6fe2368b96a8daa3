//! Two-phase rename.
//!
//! The host first resolves the renamable range at the cursor (showing a generic error when
//! there is none), then asks for the edits once the user has typed the new name. Requesting
//! edits at a non-renamable position yields `None`, never an error.

use super::settle;
use crate::backend::{AnalysisBackend, TextEdit};
use crate::session::DocumentSession;
use editor_bridge::{DocumentUri, Position, Range};
use serde::{Deserialize, Serialize};

/// Edits for one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTextEdits {
    /// Document the edits apply to.
    pub resource: DocumentUri,
    /// Edits, in backend order.
    pub edits: Vec<TextEdit>,
}

/// A set of edits across resources. Renames always touch only the current document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceEdit {
    /// Per-resource edits.
    pub edits: Vec<ResourceTextEdits>,
}

/// The range that would be renamed at `pos`.
pub fn resolve_rename_location<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<Range> {
    settle(session.prepare_rename(pos), "prepare_rename")
}

/// Edits renaming the symbol at `pos` to `new_name`.
pub fn provide_rename_edits<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
    new_name: &str,
) -> Option<WorkspaceEdit> {
    let edits = settle(session.rename(pos, new_name), "rename")?;
    Some(WorkspaceEdit {
        edits: vec![ResourceTextEdits {
            resource: session.uri().clone(),
            edits,
        }],
    })
}
