//! Per-document session: one backend handle plus the latest analysis caches.

use crate::backend::{
    AnalysisBackend, BackendError, CodeLens, NavigationTarget, ReferenceTarget, TextEdit,
};
use crate::sink::DiagnosticsSink;
use editor_bridge::{
    AnalysisResult, BackendReply, Diagnostic, DocumentUri, HighlightIndex, LineTokenizer,
    Position, Range, RenderToken,
};
use serde_json::Value;
use thiserror::Error;

/// Errors surfaced by sessions and the workspace.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The backend failed to analyse the document. Previous caches are kept.
    #[error("{uri}: {source}")]
    Backend {
        /// Document being analysed.
        uri: DocumentUri,
        /// Underlying backend failure.
        #[source]
        source: BackendError,
    },
    /// No session is open for the document.
    #[error("no open document {0}")]
    UnknownDocument(DocumentUri),
}

/// Owns one document's backend handle and its latest highlights/diagnostics.
///
/// Every [`DocumentSession::update`] re-analyses the full text synchronously and replaces both
/// caches wholesale. Readers (the tokenizer and the providers) never observe a partial update.
#[derive(Debug)]
pub struct DocumentSession<B> {
    uri: DocumentUri,
    owner: String,
    backend: B,
    highlights: HighlightIndex,
    diagnostics: Vec<Diagnostic>,
    revision: u64,
}

impl<B: AnalysisBackend> DocumentSession<B> {
    /// Create a session for `uri` with an empty highlight cache.
    ///
    /// `owner` identifies this bridge's markers in the host's diagnostics sink (usually the
    /// language id).
    pub fn new(uri: DocumentUri, owner: impl Into<String>, backend: B) -> Self {
        Self {
            uri,
            owner: owner.into(),
            backend,
            highlights: HighlightIndex::new(),
            diagnostics: Vec::new(),
            revision: 0,
        }
    }

    /// Re-analyse `text`, refresh the caches and publish diagnostics to `sink`.
    ///
    /// On failure nothing is published and the previous caches stay in place.
    pub fn update(
        &mut self,
        text: &str,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<AnalysisResult, SessionError> {
        let result = self
            .backend
            .update(text)
            .map_err(|source| SessionError::Backend {
                uri: self.uri.clone(),
                source,
            })?;

        self.highlights.replace(result.highlights.clone());
        self.diagnostics = result.diagnostics.clone();
        self.revision += 1;
        sink.set_markers(&self.uri, &self.owner, &self.diagnostics);

        tracing::debug!(
            uri = %self.uri,
            revision = self.revision,
            text_len = text.len(),
            highlights = result.highlights.len(),
            diagnostics = result.diagnostics.len(),
            "document analysed"
        );
        Ok(result)
    }

    /// Document URI.
    pub fn uri(&self) -> &DocumentUri {
        &self.uri
    }

    /// Marker owner used when publishing diagnostics.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Number of successful updates so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The backend handle.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Highlights from the latest successful update.
    pub fn highlights(&self) -> &HighlightIndex {
        &self.highlights
    }

    /// Diagnostics from the latest successful update.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Incremental token provider over the current highlights.
    pub fn tokenizer(&self) -> LineTokenizer<'_> {
        LineTokenizer::new(&self.highlights)
    }

    /// Render tokens for one line of the current highlights.
    pub fn tokenize_line(&self, line: u32) -> Vec<RenderToken> {
        self.highlights.tokenize_line(line)
    }

    /// Hover text at `pos`.
    pub fn hover(&self, pos: Position) -> BackendReply<String> {
        self.backend.hover(pos.line_number, pos.column)
    }

    /// Completion items at `pos`.
    pub fn completions(&self, pos: Position) -> BackendReply<Vec<Value>> {
        self.backend.completions(pos.line_number, pos.column)
    }

    /// Signature help at `pos`.
    pub fn signature_help(&self, pos: Position) -> BackendReply<Value> {
        self.backend.signature_help(pos.line_number, pos.column)
    }

    /// Definitions of the symbol at `pos`.
    pub fn definition(&self, pos: Position) -> BackendReply<Vec<NavigationTarget>> {
        self.backend.definition(pos.line_number, pos.column)
    }

    /// Type definitions of the symbol at `pos`.
    pub fn type_definition(&self, pos: Position) -> BackendReply<Vec<NavigationTarget>> {
        self.backend.type_definition(pos.line_number, pos.column)
    }

    /// Implementations of the symbol at `pos`.
    pub fn implementation(&self, pos: Position) -> BackendReply<Vec<NavigationTarget>> {
        self.backend.implementation(pos.line_number, pos.column)
    }

    /// References to the symbol at `pos`, declaration filtering left to the backend.
    pub fn references(
        &self,
        pos: Position,
        include_declaration: bool,
    ) -> BackendReply<Vec<ReferenceTarget>> {
        self.backend
            .references(pos.line_number, pos.column, include_declaration)
    }

    /// Edits renaming the symbol at `pos` to `new_name`.
    pub fn rename(&self, pos: Position, new_name: &str) -> BackendReply<Vec<TextEdit>> {
        self.backend.rename(pos.line_number, pos.column, new_name)
    }

    /// The renamable range at `pos`.
    pub fn prepare_rename(&self, pos: Position) -> BackendReply<Range> {
        self.backend.prepare_rename(pos.line_number, pos.column)
    }

    /// Document outline.
    pub fn document_symbols(&self) -> BackendReply<Vec<Value>> {
        self.backend.document_symbols()
    }

    /// Edits to apply after `ch` was typed at `pos`.
    pub fn on_type_formatting(&self, pos: Position, ch: char) -> BackendReply<Vec<TextEdit>> {
        self.backend.on_type_formatting(pos.line_number, pos.column, ch)
    }

    /// Folding ranges of the document.
    pub fn folding_ranges(&self) -> BackendReply<Vec<Value>> {
        self.backend.folding_ranges()
    }

    /// Code lenses of the document, without resource identity.
    pub fn code_lenses(&self) -> BackendReply<Vec<CodeLens>> {
        self.backend.code_lenses()
    }
}
