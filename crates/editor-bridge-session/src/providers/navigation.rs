//! "Go to" providers: definition, type definition, implementation.
//!
//! The backend is resource-agnostic, so every returned target is stamped with the URI of the
//! document the request was made in.

use super::settle;
use crate::backend::{AnalysisBackend, NavigationTarget};
use crate::session::DocumentSession;
use editor_bridge::{DocumentUri, Position, Range};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A range inside a specific document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Document the range belongs to.
    pub uri: DocumentUri,
    /// Range within the document.
    pub range: Range,
    /// Any other fields the backend attached to the target.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Location {
    /// A location with no extra fields.
    pub fn new(uri: DocumentUri, range: Range) -> Self {
        Self {
            uri,
            range,
            extra: Map::new(),
        }
    }

    /// Attach `uri` to a backend target, keeping its other fields.
    pub fn from_target(uri: &DocumentUri, target: NavigationTarget) -> Self {
        Self {
            uri: uri.clone(),
            range: target.range,
            extra: target.extra,
        }
    }
}

fn with_uri(uri: &DocumentUri, targets: Vec<NavigationTarget>) -> Vec<Location> {
    targets
        .into_iter()
        .map(|target| Location::from_target(uri, target))
        .collect()
}

/// Definitions of the symbol at `pos`, stamped with the session URI.
pub fn provide_definition<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<Vec<Location>> {
    settle(session.definition(pos), "definition").map(|list| with_uri(session.uri(), list))
}

/// Type definitions of the symbol at `pos`, stamped with the session URI.
pub fn provide_type_definition<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<Vec<Location>> {
    settle(session.type_definition(pos), "type_definition")
        .map(|list| with_uri(session.uri(), list))
}

/// Implementations of the symbol at `pos`, stamped with the session URI.
pub fn provide_implementation<B: AnalysisBackend>(
    session: &DocumentSession<B>,
    pos: Position,
) -> Option<Vec<Location>> {
    settle(session.implementation(pos), "implementation")
        .map(|list| with_uri(session.uri(), list))
}
