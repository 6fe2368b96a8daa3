//! `editor-bridge-session` - document sessions and editor feature providers.
//!
//! A [`DocumentSession`] owns the backend handle of one open document. On every content change
//! it re-analyses the full text, publishes diagnostics to the host's [`DiagnosticsSink`] and
//! refreshes the highlight cache the tokenizer reads from. The [`providers`] translate editor
//! feature requests into backend queries and reshape the answers for the host.
//!
//! ```text
//! edit ──► DocumentSession::update(text) ──► backend.update
//!                 │                              │
//!                 ├── diagnostics ──► DiagnosticsSink::set_markers(uri, owner, ..)
//!                 └── highlights  ──► HighlightIndex ◄── tokenize_line(line)
//!
//! feature request ──► providers::* ──► DocumentSession::<query> ──► host-shaped result
//! ```
//!
//! Everything runs synchronously on the caller's thread; there is no debouncing, cancellation
//! or retry. A failed update leaves the previous caches in place until the next edit.

#![warn(missing_docs)]

pub mod backend;
pub mod providers;
pub mod session;
pub mod sink;
pub mod workspace;

pub use backend::{
    AnalysisBackend, BackendError, CodeLens, LensCommand, NavigationTarget, ReferenceTarget,
    TextEdit,
};
pub use providers::code_lens::{
    CodeLensList, HostCodeLens, LENS_ARGUMENTS_VERSION, LensArguments, LensInvocation,
    provide_code_lenses,
};
pub use providers::completion::{CompletionList, provide_completion_items};
pub use providers::formatting::provide_on_type_formatting_edits;
pub use providers::hover::{Hover, MarkdownString, provide_hover};
pub use providers::navigation::{
    Location, provide_definition, provide_implementation, provide_type_definition,
};
pub use providers::references::{
    DocumentHighlight, ReferenceContext, provide_document_highlights, provide_references,
};
pub use providers::rename::{
    ResourceTextEdits, WorkspaceEdit, provide_rename_edits, resolve_rename_location,
};
pub use providers::signature_help::{SignatureHelpResult, provide_signature_help};
pub use providers::symbols::{provide_document_symbols, provide_folding_ranges};
pub use session::{DocumentSession, SessionError};
pub use sink::{DiagnosticsSink, MarkerStore};
pub use workspace::Workspace;
