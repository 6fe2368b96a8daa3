//! References and document highlights.
//!
//! Both features issue the same backend query; they differ only in the declaration flag
//! (document highlights always include it) and in how the sites are shaped for the host. No
//! filtering happens here.

use super::navigation::Location;
use super::settle;
use crate::backend::AnalysisBackend;
use crate::session::DocumentSession;
use editor_bridge::{Position, Range};
use editor_bridge_lang::LanguageConfig;
use serde::{Deserialize, Serialize};

/// Host-supplied options of a reference search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceContext {
    /// Whether the declaration itself should be reported.
    pub include_declaration: bool,
}

impl ReferenceContext {
    /// The configured default, for hosts that do not pass a context.
    pub fn from_config(config: &LanguageConfig) -> Self {
        Self {
            include_declaration: config.references_include_declaration,
        }
    }
}

/// A symbol occurrence to highlight in the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentHighlight {
    /// Range of the occurrence.
    pub range: Range,
}

/// References to the symbol at `pos` as locations in this document.
pub fn provide_references<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
    context: ReferenceContext,
) -> Option<Vec<Location>> {
    let references = settle(
        session.references(pos, context.include_declaration),
        "references",
    )?;
    Some(
        references
            .into_iter()
            .map(|reference| Location::new(session.uri().clone(), reference.range))
            .collect(),
    )
}

/// Occurrences of the symbol at `pos`, declaration included.
pub fn provide_document_highlights<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<Vec<DocumentHighlight>> {
    let references = settle(session.references(pos, true), "document_highlights")?;
    Some(
        references
            .into_iter()
            .map(|reference| DocumentHighlight {
                range: reference.range,
            })
            .collect(),
    )
}
