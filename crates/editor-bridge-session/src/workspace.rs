//! Multiple open documents, one [`DocumentSession`] each.
//!
//! Sessions share nothing: every document gets its own backend handle from the workspace's
//! factory, and its own highlight and diagnostics caches.

use crate::backend::AnalysisBackend;
use crate::session::{DocumentSession, SessionError};
use crate::sink::DiagnosticsSink;
use editor_bridge::{AnalysisResult, DocumentUri};
use editor_bridge_lang::LanguageConfig;
use std::collections::HashMap;

/// Open documents of one bridged language.
pub struct Workspace<B, F> {
    config: LanguageConfig,
    factory: F,
    sessions: HashMap<DocumentUri, DocumentSession<B>>,
}

impl<B, F> Workspace<B, F>
where
    B: AnalysisBackend,
    F: FnMut(&DocumentUri) -> B,
{
    /// Create an empty workspace. `factory` produces a fresh backend handle per document.
    pub fn new(config: LanguageConfig, factory: F) -> Self {
        Self {
            config,
            factory,
            sessions: HashMap::new(),
        }
    }

    /// The language registration config.
    pub fn config(&self) -> &LanguageConfig {
        &self.config
    }

    /// Open `uri` and run its first analysis pass.
    ///
    /// Re-opening an already open document replaces its session. The session is kept even if
    /// the first pass fails; the next [`Workspace::change`] retries.
    pub fn open(
        &mut self,
        uri: DocumentUri,
        text: &str,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<AnalysisResult, SessionError> {
        let backend = (self.factory)(&uri);
        let session = DocumentSession::new(uri.clone(), self.config.language_id.clone(), backend);
        tracing::debug!(uri = %uri, "document opened");
        self.sessions
            .entry(uri)
            .insert_entry(session)
            .into_mut()
            .update(text, sink)
    }

    /// Re-analyse an open document after a content change.
    pub fn change(
        &mut self,
        uri: &DocumentUri,
        text: &str,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<AnalysisResult, SessionError> {
        self.sessions
            .get_mut(uri)
            .ok_or_else(|| SessionError::UnknownDocument(uri.clone()))?
            .update(text, sink)
    }

    /// Close a document and clear its markers. Returns `false` if it was not open.
    pub fn close(&mut self, uri: &DocumentUri, sink: &mut dyn DiagnosticsSink) -> bool {
        let Some(session) = self.sessions.remove(uri) else {
            return false;
        };
        sink.clear_markers(session.uri(), session.owner());
        tracing::debug!(uri = %uri, "document closed");
        true
    }

    /// The session of an open document.
    pub fn session(&self, uri: &DocumentUri) -> Option<&DocumentSession<B>> {
        self.sessions.get(uri)
    }

    /// URIs of all open documents (unordered).
    pub fn documents(&self) -> impl Iterator<Item = &DocumentUri> {
        self.sessions.keys()
    }

    /// Number of open documents.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Returns `true` if no document is open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
