//! Host diagnostics marker sink.

use editor_bridge::{Diagnostic, DocumentUri};
use std::collections::HashMap;

/// Receives the diagnostics of each analysis pass, keyed by document and owner.
pub trait DiagnosticsSink {
    /// Replace every marker `owner` has set on `uri` with `diagnostics`.
    fn set_markers(&mut self, uri: &DocumentUri, owner: &str, diagnostics: &[Diagnostic]);

    /// Remove every marker `owner` has set on `uri`.
    fn clear_markers(&mut self, uri: &DocumentUri, owner: &str) {
        self.set_markers(uri, owner, &[]);
    }
}

/// An in-memory [`DiagnosticsSink`] for headless hosts.
#[derive(Debug, Default)]
pub struct MarkerStore {
    markers: HashMap<(DocumentUri, String), Vec<Diagnostic>>,
    publish_count: usize,
}

impl MarkerStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Markers `owner` currently has on `uri`.
    pub fn markers(&self, uri: &DocumentUri, owner: &str) -> &[Diagnostic] {
        self.markers
            .get(&(uri.clone(), owner.to_string()))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of `set_markers` calls received so far.
    pub fn publish_count(&self) -> usize {
        self.publish_count
    }
}

impl DiagnosticsSink for MarkerStore {
    fn set_markers(&mut self, uri: &DocumentUri, owner: &str, diagnostics: &[Diagnostic]) {
        self.publish_count += 1;
        let key = (uri.clone(), owner.to_string());
        if diagnostics.is_empty() {
            self.markers.remove(&key);
        } else {
            self.markers.insert(key, diagnostics.to_vec());
        }
    }
}
